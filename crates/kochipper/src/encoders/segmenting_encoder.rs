//! # Segmenting Encoder

use std::sync::Arc;

use crate::{
    encoders::{TokenEncoder, min_cost_segmentation},
    types::TokenType,
    vocab::TokenVocab,
};

/// A [`TokenEncoder`] which covers each piece with its cheapest segmentation.
///
/// A piece found in the vocabulary encodes as itself. Otherwise it is cut
/// into the 2+ vocabulary tokens of least total weight; a single-char
/// piece, or one with no such cut, encodes as the unknown token.
#[derive(Debug, Clone)]
pub struct SegmentingEncoder<T: TokenType> {
    vocab: Arc<TokenVocab<T>>,
}

impl<T: TokenType> SegmentingEncoder<T> {
    /// Create an encoder over `vocab`.
    pub fn new(vocab: Arc<TokenVocab<T>>) -> Self {
        Self { vocab }
    }
}

impl<T: TokenType> TokenEncoder<T> for SegmentingEncoder<T> {
    fn vocab(&self) -> &TokenVocab<T> {
        &self.vocab
    }

    fn encode_append_piece(
        &self,
        piece: &str,
        tokens: &mut Vec<T>,
    ) {
        let vocab = &self.vocab;
        if let Some(id) = vocab.token_to_id(piece) {
            tokens.push(id);
            return;
        }

        let bounds: Vec<usize> = piece
            .char_indices()
            .map(|(idx, _)| idx)
            .chain(core::iter::once(piece.len()))
            .collect();
        let n = bounds.len() - 1;

        let segmentation = min_cost_segmentation(n, vocab.max_token_chars(), |s, e| {
            vocab.weights().weight(&piece[bounds[s]..bounds[e]])
        });

        // All parts resolve, or the piece is unknown.
        let ids: Option<Vec<T>> = segmentation.and_then(|parts| {
            parts
                .into_iter()
                .map(|(s, e)| vocab.token_to_id(&piece[bounds[s]..bounds[e]]))
                .collect()
        });

        match ids {
            Some(ids) => tokens.extend(ids),
            None => {
                log::debug!("no segmentation for {piece:?}; encoding as unknown");
                tokens.push(vocab.reserved_ids().unk);
            }
        }
    }
}
