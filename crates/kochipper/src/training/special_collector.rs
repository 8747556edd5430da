//! # Special Span Collector

use crate::{
    patterns::{SpecialPattern, extract_special_spans},
    types::SPECIAL_WEIGHT,
    vocab::WeightedVocab,
};

/// Collects the distinct special literals of a corpus, per pattern class.
///
/// Each class keeps its literals in first-seen order, at weight `1`.
#[derive(Debug, Clone, Default)]
pub struct SpecialSpanCollector {
    classes: [WeightedVocab; SpecialPattern::COUNT],
}

impl SpecialSpanCollector {
    /// Collect the special spans of a sentence.
    pub fn update_from_text<S: AsRef<str>>(
        &mut self,
        text: S,
    ) {
        for (pattern, literal) in extract_special_spans(text.as_ref()) {
            self.classes[pattern.index()].insert(literal, SPECIAL_WEIGHT);
        }
    }

    /// The literals collected for one class.
    pub fn class(
        &self,
        pattern: SpecialPattern,
    ) -> &WeightedVocab {
        &self.classes[pattern.index()]
    }

    /// The total number of distinct literals, counted per class.
    pub fn len(&self) -> usize {
        self.classes.iter().map(WeightedVocab::len).sum()
    }

    /// Check if nothing has been collected.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Union the reserved tokens and every class, in application order.
    ///
    /// A literal seen in more than one source keeps its first position.
    pub fn into_specials<I>(
        self,
        reserved_tokens: I,
    ) -> WeightedVocab
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut specials = WeightedVocab::from_specials(reserved_tokens);
        for class in self.classes {
            specials.extend(class.into_entries());
        }
        specials
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_distinct() {
        let mut collector = SpecialSpanCollector::default();
        assert!(collector.is_empty());

        collector.update_from_text("ㅋㅋ 010-1234-5678!");
        collector.update_from_text("ㅎㅎ 010-1234-5678. ㅋ");

        assert_eq!(
            collector
                .class(SpecialPattern::Phone)
                .tokens()
                .collect::<Vec<_>>(),
            vec!["010-1234-5678"]
        );
        assert_eq!(
            collector
                .class(SpecialPattern::Jamo)
                .tokens()
                .collect::<Vec<_>>(),
            vec!["ㅋ", "ㅎ"]
        );
        assert_eq!(
            collector
                .class(SpecialPattern::Other)
                .tokens()
                .collect::<Vec<_>>(),
            vec!["!", "."]
        );
        assert_eq!(collector.len(), 5);
    }

    #[test]
    fn test_into_specials() {
        let mut collector = SpecialSpanCollector::default();
        collector.update_from_text("a_b. ㅋ");

        let specials = collector.into_specials(["<pad>", "<unk>", "_"]);
        assert_eq!(
            specials.iter().collect::<Vec<_>>(),
            vec![("<pad>", 1), ("<unk>", 1), ("_", 1), ("ㅋ", 1), (".", 1)]
        );
    }
}
