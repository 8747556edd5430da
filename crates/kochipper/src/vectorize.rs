//! # Fixed-Length Vectorization
//!
//! Wraps a token sequence in sequence-start / sequence-end markers and
//! right-pads it to a fixed length.

use crate::{
    errors::{KCResult, KochipperError},
    types::TokenType,
    vocab::ReservedIds,
};

/// Wrap `tokens` in boundary markers and pad to `max_sentence_length`.
///
/// ## Arguments
/// * `tokens` - the encoded payload.
/// * `max_sentence_length` - the exact output length.
/// * `reserved` - the boundary and padding ids.
///
/// ## Returns
/// ``[bos, tokens.., eos, pad, pad, ..]`` of exactly `max_sentence_length`,
/// or `Err(SentenceTooLong)` if the wrapped payload does not fit.
pub fn vectorization<T: TokenType>(
    tokens: &[T],
    max_sentence_length: usize,
    reserved: &ReservedIds<T>,
) -> KCResult<Vec<T>> {
    let required = tokens.len() + 2;
    if required > max_sentence_length {
        return Err(KochipperError::SentenceTooLong {
            max_sentence_length,
            required,
        });
    }

    let mut vector = Vec::with_capacity(max_sentence_length);
    vector.push(reserved.bos);
    vector.extend_from_slice(tokens);
    vector.push(reserved.eos);
    vector.resize(max_sentence_length, reserved.pad);
    Ok(vector)
}
