//! # Token Id Maps

use crate::{
    errors::KCResult,
    types::{KCHashMap, TokenType, try_token_from_index},
    vocab::WeightedVocab,
};

/// The ``{ token -> id }`` / ``{ id -> token }`` bijection of a vocabulary.
///
/// Ids are assigned densely from `0` in vocabulary iteration order.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenIdMap<T: TokenType> {
    token_to_id: KCHashMap<String, T>,

    /// Indexed by `id`.
    id_to_token: Vec<String>,
}

impl<T: TokenType> TokenIdMap<T> {
    /// Assign ids to every token of `vocab`, in order.
    ///
    /// ## Returns
    /// `Err(VocabSizeOverflow)` if the vocabulary does not fit in `T`.
    pub fn try_from_vocab(vocab: &WeightedVocab) -> KCResult<Self> {
        let mut token_to_id = KCHashMap::with_capacity(vocab.len());
        let mut id_to_token = Vec::with_capacity(vocab.len());

        for (idx, token) in vocab.tokens().enumerate() {
            let id: T = try_token_from_index(idx)?;
            token_to_id.insert(token.to_string(), id);
            id_to_token.push(token.to_string());
        }

        Ok(Self {
            token_to_id,
            id_to_token,
        })
    }

    /// The number of ids.
    pub fn len(&self) -> usize {
        self.id_to_token.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.id_to_token.is_empty()
    }

    /// Look up the id of a token.
    pub fn token_to_id(
        &self,
        token: &str,
    ) -> Option<T> {
        self.token_to_id.get(token).copied()
    }

    /// Look up the token of an id.
    pub fn id_to_token(
        &self,
        id: T,
    ) -> Option<&str> {
        id.to_usize()
            .and_then(|idx| self.id_to_token.get(idx))
            .map(String::as_str)
    }

    /// Iterate over `(id, token)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (T, &str)> + '_ {
        self.id_to_token
            .iter()
            .enumerate()
            .filter_map(|(idx, token)| T::from_usize(idx).map(|id| (id, token.as_str())))
    }
}
