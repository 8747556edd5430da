//! # Vocab Trainer

use crate::{
    training::{SpecialSpanCollector, SubstringCounter, SubstringCounterOptions},
    vocab::WeightedVocab,
};

/// Options for [`VocabTrainer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VocabTrainerOptions {
    /// The target vocab size.
    ///
    /// Only frequency-derived entries are dropped to meet it; reserved and
    /// special tokens are always kept, so the final size may exceed it.
    pub max_vocab_size: usize,

    /// Substring counting options.
    pub counter: SubstringCounterOptions,
}

impl VocabTrainerOptions {
    /// Create new options.
    ///
    /// ## Arguments
    /// * `max_vocab_size` - The target vocabulary size.
    pub fn new(max_vocab_size: usize) -> Self {
        Self {
            max_vocab_size,
            counter: SubstringCounterOptions::default(),
        }
    }

    /// Sets the target vocab size.
    pub fn with_max_vocab_size(
        self,
        max_vocab_size: usize,
    ) -> Self {
        Self {
            max_vocab_size,
            ..self
        }
    }

    /// Sets the longest counted substring, in chars.
    pub fn with_max_substring_len(
        self,
        max_substring_len: usize,
    ) -> Self {
        Self {
            counter: self.counter.with_max_substring_len(max_substring_len),
            ..self
        }
    }

    /// Initializes a [`VocabTrainer`] from these options.
    pub fn init(self) -> VocabTrainer {
        VocabTrainer::new(self)
    }
}

/// Builds a frequency-ranked, size-bounded [`WeightedVocab`] from a corpus.
#[derive(Debug, Clone)]
pub struct VocabTrainer {
    /// Trainer options.
    pub options: VocabTrainerOptions,

    /// The substring counts seen so far.
    pub counter: SubstringCounter,

    /// The special literals seen so far.
    pub specials: SpecialSpanCollector,
}

impl VocabTrainer {
    /// Create a new trainer.
    pub fn new(options: VocabTrainerOptions) -> Self {
        Self {
            options,
            counter: SubstringCounter::new(options.counter),
            specials: SpecialSpanCollector::default(),
        }
    }

    /// Update the trainer from one sentence.
    pub fn update_from_text<S: AsRef<str>>(
        &mut self,
        text: S,
    ) {
        let text = text.as_ref();
        self.specials.update_from_text(text);
        self.counter.update_from_text(text);
    }

    /// Update the trainer from a sample iterator.
    pub fn update_from_samples<I>(
        &mut self,
        samples: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for sample in samples {
            self.update_from_text(sample);
        }
    }

    /// Build the vocabulary.
    ///
    /// The specials (`reserved_tokens` first, then each pattern class in
    /// order) are merged with the substring counts, ranked ascending by
    /// count. If both together exceed `max_vocab_size`, the lowest-count
    /// substrings are dropped. On a key collision the substring count
    /// replaces the special weight.
    ///
    /// ## Arguments
    /// * `reserved_tokens` - the reserved tokens, placed first.
    pub fn train<I>(
        self,
        reserved_tokens: I,
    ) -> WeightedVocab
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let max_vocab_size = self.options.max_vocab_size;
        let specials = self.specials.into_specials(reserved_tokens);

        let mut ranked = self.counter.release().into_entries();
        let counted = ranked.len();
        // Stable: equal counts stay in first-seen order.
        ranked.sort_by_key(|&(_, count)| count);

        let excess = (specials.len() + ranked.len()).saturating_sub(max_vocab_size);
        let dropped = excess.min(ranked.len());
        if dropped > 0 {
            log::debug!(
                "dropping {dropped} of {counted} substrings to meet max_vocab_size {max_vocab_size}"
            );
        }
        let frequent: WeightedVocab = ranked.into_iter().skip(dropped).collect();

        let special_count = specials.len();
        let vocab = WeightedVocab::merge_specials(specials, frequent);

        log::info!(
            "trained vocabulary: {} tokens ({special_count} specials, {} of {counted} substrings)",
            vocab.len(),
            counted - dropped,
        );
        if vocab.len() > max_vocab_size {
            log::debug!(
                "vocabulary size {} exceeds max_vocab_size {max_vocab_size}; specials are never dropped",
                vocab.len()
            );
        }

        vocab
    }
}
