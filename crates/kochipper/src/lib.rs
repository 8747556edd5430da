//! # `kochipper` Subword Tokenizer
//!
//! A subword tokenizer for mixed-script (Latin / Korean) text.
//!
//! `kochipper` builds a bounded, frequency-ranked substring vocabulary from
//! a training corpus, and encodes sentences by a minimum-cost segmentation
//! over that vocabulary. Phone numbers, emails, URLs, Korean jamo and
//! punctuation are recognized by fixed patterns and kept as atomic tokens.
//!
//! See:
//! * [`patterns`] for the literal-span patterns and the extract / split / protect modes.
//! * [`training`] to build a [`vocab::WeightedVocab`] from a corpus.
//! * [`encoders`] to encode text into tokens.
//! * [`decoders`] to decode tokens into text.
//! * [`vectorize`] to wrap and pad token sequences to a fixed length.
//! * [`vocab`] for the vocabulary, its reserved tokens, and vocab io.
//!
//! The [`Tokenizer`] bundles all of these behind one handle.
//!
//! ## Crate Features
//!
//! #### feature: ``ahash``
//!
//! This swaps all HashMap/HashSet implementations for ``ahash``.
//!
//! This is done by the ``types::KCHash{*}`` type alias machinery.
//! Hash maps are only ever used as lookup indices; id order never
//! depends on hash iteration order.
//!
//! ## Example
//!
//! ```rust,no_run
//! use kochipper::{Tokenizer, vocab::ReservedTokens};
//!
//! fn example() -> kochipper::KCResult<()> {
//!     let mut tokenizer: Tokenizer<u32> = Tokenizer::default();
//!
//!     let corpus = ["전화번호는 010-1234-5678 입니다.", "안녕하세요 제 이름은 홍길동입니다."];
//!     tokenizer.fit(&corpus, 1024, &ReservedTokens::default().to_vec())?;
//!
//!     let tokens = tokenizer.encode("번호는 010-1234-5678 입니다.");
//!     let padded = tokenizer.vectorization(&tokens, 30)?;
//!     assert_eq!(tokenizer.decode(&padded)?, tokenizer.decode(&tokens)?);
//!
//!     tokenizer.save_vocab("vocab.json")?;
//!     Ok(())
//! }
//! ```
#![warn(missing_docs, unused)]

pub mod decoders;
pub mod encoders;
pub mod errors;
pub mod patterns;
pub mod tokenizer;
pub mod training;
pub mod types;
pub mod vectorize;
pub mod vocab;

#[doc(inline)]
pub use errors::{KCResult, KochipperError};
#[doc(inline)]
pub use tokenizer::{Tokenizer, TokenizerOptions};
#[doc(inline)]
pub use types::{TokenType, Weight};
#[doc(inline)]
pub use vocab::{ReservedTokens, WeightedVocab};
