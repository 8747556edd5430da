//! # Ordered ``{ String -> Weight }`` Vocabulary

use crate::types::{KCHashMap, SPECIAL_WEIGHT, Weight};

/// An insertion-ordered ``{ token -> weight }`` vocabulary.
///
/// Entry order is the id assignment order, and the serialization order.
///
/// Re-inserting an existing token replaces its weight but keeps its
/// original position (last writer wins on the value, first writer on
/// the position).
#[derive(Default, Debug, Clone)]
pub struct WeightedVocab {
    entries: Vec<(String, Weight)>,

    /// Position of each token in `entries`.
    index: KCHashMap<String, usize>,
}

impl PartialEq for WeightedVocab {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.entries == other.entries
    }
}

impl Eq for WeightedVocab {}

impl<S: Into<String>> FromIterator<(S, Weight)> for WeightedVocab {
    fn from_iter<I: IntoIterator<Item = (S, Weight)>>(iter: I) -> Self {
        let mut vocab = Self::default();
        vocab.extend(iter);
        vocab
    }
}

impl<S: Into<String>> Extend<(S, Weight)> for WeightedVocab {
    fn extend<I: IntoIterator<Item = (S, Weight)>>(
        &mut self,
        iter: I,
    ) {
        for (token, weight) in iter {
            self.insert(token, weight);
        }
    }
}

impl WeightedVocab {
    /// Build a vocabulary where every token carries the special weight `1`.
    ///
    /// Duplicate tokens keep their first position.
    pub fn from_specials<I>(tokens: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        tokens.into_iter().map(|t| (t, SPECIAL_WEIGHT)).collect()
    }

    /// Merge a frequency vocabulary over a specials vocabulary.
    ///
    /// The result starts with `specials` in order; then each `frequent`
    /// entry is inserted in order. On a key collision the frequency weight
    /// replaces the special weight, and the special's position is kept.
    pub fn merge_specials(
        specials: WeightedVocab,
        frequent: WeightedVocab,
    ) -> WeightedVocab {
        let mut merged = specials;
        merged.extend(frequent.entries);
        merged
    }

    /// Insert or update a token.
    ///
    /// ## Returns
    /// The previous weight, if the token was already present.
    pub fn insert<S: Into<String>>(
        &mut self,
        token: S,
        weight: Weight,
    ) -> Option<Weight> {
        let token = token.into();
        match self.index.get(&token) {
            Some(&pos) => Some(core::mem::replace(&mut self.entries[pos].1, weight)),
            None => {
                self.index.insert(token.clone(), self.entries.len());
                self.entries.push((token, weight));
                None
            }
        }
    }

    /// Add `delta` to the weight of `token`, inserting it at the end if absent.
    ///
    /// ## Returns
    /// The updated weight.
    pub fn increment(
        &mut self,
        token: &str,
        delta: Weight,
    ) -> Weight {
        let pos = match self.index.get(token) {
            Some(&pos) => pos,
            None => {
                self.index.insert(token.to_string(), self.entries.len());
                self.entries.push((token.to_string(), 0));
                self.entries.len() - 1
            }
        };
        let weight = &mut self.entries[pos].1;
        *weight = weight.saturating_add(delta);
        *weight
    }

    /// The number of tokens in the vocabulary.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the vocab is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Does the vocabulary contain `token`?
    pub fn contains(
        &self,
        token: &str,
    ) -> bool {
        self.index.contains_key(token)
    }

    /// The weight of `token`, if present.
    pub fn weight(
        &self,
        token: &str,
    ) -> Option<Weight> {
        self.position(token).map(|pos| self.entries[pos].1)
    }

    /// The position of `token` in iteration order, if present.
    pub fn position(
        &self,
        token: &str,
    ) -> Option<usize> {
        self.index.get(token).copied()
    }

    /// The entry at position `pos`, if any.
    pub fn entry_at(
        &self,
        pos: usize,
    ) -> Option<(&str, Weight)> {
        self.entries.get(pos).map(|(t, w)| (t.as_str(), *w))
    }

    /// Iterate over `(token, weight)` entries in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Weight)> + '_ {
        self.entries.iter().map(|(t, w)| (t.as_str(), *w))
    }

    /// Iterate over tokens in order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(t, _)| t.as_str())
    }

    /// The longest token length, in chars.
    pub fn max_token_chars(&self) -> usize {
        self.tokens().map(|t| t.chars().count()).max().unwrap_or(0)
    }

    /// Release the ordered entries.
    pub fn into_entries(self) -> Vec<(String, Weight)> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_position() {
        let mut vocab = WeightedVocab::default();
        assert!(vocab.is_empty());

        assert_eq!(vocab.insert("b", 3), None);
        assert_eq!(vocab.insert("a", 5), None);
        assert_eq!(vocab.insert("b", 7), Some(3));

        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab.iter().collect::<Vec<_>>(), vec![("b", 7), ("a", 5)]);
        assert_eq!(vocab.position("a"), Some(1));
        assert_eq!(vocab.weight("b"), Some(7));
        assert_eq!(vocab.weight("c"), None);
        assert_eq!(vocab.entry_at(0), Some(("b", 7)));
        assert_eq!(vocab.entry_at(2), None);
    }

    #[test]
    fn test_increment() {
        let mut vocab = WeightedVocab::default();
        assert_eq!(vocab.increment("b", 1), 1);
        assert_eq!(vocab.increment("a", 1), 1);
        assert_eq!(vocab.increment("b", 2), 3);
        assert_eq!(vocab.iter().collect::<Vec<_>>(), vec![("b", 3), ("a", 1)]);
    }

    #[test]
    fn test_from_specials() {
        let vocab = WeightedVocab::from_specials(["<pad>", "<unk>", "<pad>"]);
        assert_eq!(
            vocab.iter().collect::<Vec<_>>(),
            vec![("<pad>", 1), ("<unk>", 1)]
        );
    }

    #[test]
    fn test_merge_frequency_wins() {
        let specials = WeightedVocab::from_specials(["<unk>", "x", "."]);
        let frequent: WeightedVocab = [("y", 2), ("x", 9), ("z", 4)].into_iter().collect();

        let merged = WeightedVocab::merge_specials(specials, frequent);
        assert_eq!(
            merged.into_entries(),
            vec![
                ("<unk>".to_string(), 1),
                ("x".to_string(), 9),
                (".".to_string(), 1),
                ("y".to_string(), 2),
                ("z".to_string(), 4),
            ]
        );
    }

    #[test]
    fn test_max_token_chars() {
        let vocab = WeightedVocab::from_specials(["ab", "가나다", "x"]);
        assert_eq!(vocab.max_token_chars(), 3);
        assert_eq!(WeightedVocab::default().max_token_chars(), 0);
    }
}
