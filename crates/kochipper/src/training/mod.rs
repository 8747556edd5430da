//! # Vocabulary Training
//!
//! Training is a single pass over the corpus: special literals are
//! collected per pattern class, and every short substring of the
//! remaining text is counted. There is no pair-merge loop.
//!
//! ## Example
//!
//! ```rust
//! use kochipper::training::VocabTrainerOptions;
//!
//! let mut trainer = VocabTrainerOptions::new(1024).init();
//! trainer.update_from_samples(["전화번호는 010-1234-5678 입니다."]);
//! let vocab = trainer.train(["<pad>", "<unk>", "<bos>", "<eos>", "_"]);
//!
//! assert!(vocab.contains("010-1234-5678"));
//! assert!(vocab.contains("입니다"));
//! ```

pub mod special_collector;
pub mod substring_counter;
pub mod vocab_trainer;

#[doc(inline)]
pub use special_collector::SpecialSpanCollector;
#[doc(inline)]
pub use substring_counter::{DEFAULT_MAX_SUBSTRING_LEN, SubstringCounter, SubstringCounterOptions};
#[doc(inline)]
pub use vocab_trainer::{VocabTrainer, VocabTrainerOptions};
