//! # Substring Counter

use crate::{patterns::split_substrings, vocab::WeightedVocab};

/// Default longest counted substring, in chars.
pub const DEFAULT_MAX_SUBSTRING_LEN: usize = 3;

/// Options for [`SubstringCounter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubstringCounterOptions {
    /// The longest counted substring, in chars.
    pub max_substring_len: usize,
}

impl Default for SubstringCounterOptions {
    fn default() -> Self {
        Self {
            max_substring_len: DEFAULT_MAX_SUBSTRING_LEN,
        }
    }
}

impl SubstringCounterOptions {
    /// Set the longest counted substring, in chars.
    pub fn with_max_substring_len(
        self,
        max_substring_len: usize,
    ) -> Self {
        Self { max_substring_len }
    }
}

/// Counts every short contiguous substring of the corpus.
///
/// Counts are kept in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct SubstringCounter {
    /// The config options.
    pub options: SubstringCounterOptions,

    /// The substring counts.
    pub counts: WeightedVocab,
}

impl SubstringCounter {
    /// Create a new counter.
    pub fn new(options: SubstringCounterOptions) -> Self {
        Self {
            options,
            counts: WeightedVocab::default(),
        }
    }

    /// Release the counts.
    pub fn release(self) -> WeightedVocab {
        self.counts
    }

    /// Count the substrings of one run of text.
    ///
    /// For each start position, spans are visited longest first,
    /// up to `max_substring_len` chars.
    pub fn update_from_run(
        &mut self,
        run: &str,
    ) {
        let bounds: Vec<usize> = run
            .char_indices()
            .map(|(idx, _)| idx)
            .chain(core::iter::once(run.len()))
            .collect();
        let n = bounds.len() - 1;

        for start in 0..n {
            let longest = (start + self.options.max_substring_len).min(n);
            for end in (start + 1..=longest).rev() {
                self.counts.increment(&run[bounds[start]..bounds[end]], 1);
            }
        }
    }

    /// Count the substrings of a sentence.
    ///
    /// Special spans are stripped and the text split into runs first;
    /// see [`split_substrings`].
    pub fn update_from_text<S: AsRef<str>>(
        &mut self,
        text: S,
    ) {
        for run in split_substrings(text.as_ref()) {
            self.update_from_run(&run);
        }
    }

    /// Update counts from a sample iterator.
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
}
