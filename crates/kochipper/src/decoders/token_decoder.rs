//! # Token Decoder Trait

use crate::{errors::KCResult, types::TokenType};

/// Trait for token decoders.
pub trait TokenDecoder<T: TokenType>: Send + Sync {
    /// Decodes tokens into a string.
    ///
    /// ## Arguments
    /// * `tokens` - A slice of tokens to decode.
    ///
    /// ## Returns
    /// `Err(UnknownTokenId)` if a token is not in the vocabulary.
    fn try_decode_to_string(
        &self,
        tokens: &[T],
    ) -> KCResult<String>;

    /// Decodes a batch of tokens.
    ///
    /// ## Arguments
    /// * `batch` - A batch of tokens.
    fn try_decode_batch_to_strings(
        &self,
        batch: &[&[T]],
    ) -> KCResult<Vec<String>> {
        batch
            .iter()
            .map(|tokens| self.try_decode_to_string(tokens))
            .collect()
    }
}
