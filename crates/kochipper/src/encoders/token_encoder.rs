//! # Token Encoder Trait

use crate::{patterns::protect_spans, types::TokenType, vocab::TokenVocab};

/// A trait for token encoders.
pub trait TokenEncoder<T: TokenType>: Send + Sync {
    /// Return the attached vocabulary.
    fn vocab(&self) -> &TokenVocab<T>;

    /// Encode one protected piece, appending to a target buffer.
    ///
    /// ## Arguments
    /// * `piece` - A whitespace-free piece, or an isolated special literal.
    /// * `tokens` - The target token buffer to append to.
    fn encode_append_piece(
        &self,
        piece: &str,
        tokens: &mut Vec<T>,
    );

    /// Encode text into tokens, appending to a target buffer.
    ///
    /// The text is split by [`protect_spans`] first, so special literals
    /// are always encoded whole.
    ///
    /// ## Arguments
    /// * `text` - The string slice to encode.
    /// * `tokens` - The target token buffer to append to.
    fn encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) {
        for piece in protect_spans(text, &self.vocab().reserved().space) {
            self.encode_append_piece(&piece, tokens);
        }
    }

    /// Encode text into tokens.
    ///
    /// Never fails; anything the vocabulary cannot cover becomes the
    /// unknown token.
    fn encode<S: AsRef<str>>(
        &self,
        text: S,
    ) -> Vec<T> {
        let mut tokens = Vec::new();
        self.encode_append(text.as_ref(), &mut tokens);
        tokens
    }

    /// Encode a batch of text into tokens.
    fn encode_batch<S: AsRef<str>>(
        &self,
        batch: &[S],
    ) -> Vec<Vec<T>> {
        batch.iter().map(|s| self.encode(s)).collect()
    }
}
