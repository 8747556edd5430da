//! # Unified Token Vocabulary

use crate::{
    errors::KCResult,
    types::{TokenType, Weight},
    vocab::{ReservedIds, ReservedTokens, TokenIdMap, WeightedVocab},
};

/// A read-only vocabulary bundle: weights, id maps, and reserved roles.
///
/// Built once by training or loading; replaced wholesale, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenVocab<T: TokenType> {
    weights: WeightedVocab,
    ids: TokenIdMap<T>,
    reserved: ReservedTokens,
    reserved_ids: ReservedIds<T>,
    max_token_chars: usize,
}

impl<T: TokenType> TokenVocab<T> {
    /// Build the id maps for `weights` and resolve the reserved roles.
    ///
    /// ## Returns
    /// * `Err(VocabSizeOverflow)` if `weights` does not fit in `T`.
    /// * `Err(MissingReservedToken)` if a reserved role token is absent.
    pub fn init(
        weights: WeightedVocab,
        reserved: ReservedTokens,
    ) -> KCResult<Self> {
        let ids = TokenIdMap::try_from_vocab(&weights)?;
        let reserved_ids = ReservedIds::resolve(&reserved, &ids)?;
        let max_token_chars = weights.max_token_chars();

        Ok(Self {
            weights,
            ids,
            reserved,
            reserved_ids,
            max_token_chars,
        })
    }

    /// A vocabulary of only the reserved role tokens.
    pub fn from_reserved(reserved: ReservedTokens) -> KCResult<Self> {
        let weights = WeightedVocab::from_specials(reserved.to_vec());
        Self::init(weights, reserved)
    }

    /// The number of tokens.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Check if the vocab is empty.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// The ordered ``{ token -> weight }`` vocabulary.
    pub fn weights(&self) -> &WeightedVocab {
        &self.weights
    }

    /// The id maps.
    pub fn ids(&self) -> &TokenIdMap<T> {
        &self.ids
    }

    /// The reserved role tokens.
    pub fn reserved(&self) -> &ReservedTokens {
        &self.reserved
    }

    /// The reserved role ids.
    pub fn reserved_ids(&self) -> &ReservedIds<T> {
        &self.reserved_ids
    }

    /// The longest token, in chars.
    pub fn max_token_chars(&self) -> usize {
        self.max_token_chars
    }

    /// Look up the id and weight of a token.
    pub fn lookup(
        &self,
        token: &str,
    ) -> Option<(T, Weight)> {
        let id = self.ids.token_to_id(token)?;
        let weight = self.weights.weight(token)?;
        Some((id, weight))
    }

    /// Look up the id of a token.
    pub fn token_to_id(
        &self,
        token: &str,
    ) -> Option<T> {
        self.ids.token_to_id(token)
    }

    /// Look up the token of an id.
    pub fn id_to_token(
        &self,
        id: T,
    ) -> Option<&str> {
        self.ids.id_to_token(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::KochipperError;

    #[test]
    fn test_from_reserved() {
        let vocab: TokenVocab<u32> = TokenVocab::from_reserved(ReservedTokens::default()).unwrap();
        assert_eq!(vocab.len(), 5);
        assert!(!vocab.is_empty());
        assert_eq!(vocab.reserved_ids().unk, 1);
        assert_eq!(vocab.lookup("_"), Some((4, 1)));
        assert_eq!(vocab.id_to_token(3), Some("<eos>"));
        assert_eq!(vocab.max_token_chars(), 5);
    }

    #[test]
    fn test_init_requires_reserved() {
        let weights: WeightedVocab = [("a", 1), ("b", 2)].into_iter().collect();
        let err = TokenVocab::<u32>::init(weights, ReservedTokens::default()).unwrap_err();
        assert!(matches!(
            err,
            KochipperError::MissingReservedToken { role: "pad", .. }
        ));
    }
}
