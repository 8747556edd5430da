//! # Token Encoders
//!
//! Encoding runs in two stages:
//! 1. [`crate::patterns::protect_spans`] splits the text on whitespace,
//!    marking spaces, and isolates every special literal as its own piece.
//! 2. Each piece is encoded as a vocabulary token, or as its
//!    [`min_cost_segmentation`] over the vocabulary.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use kochipper::{
//!     encoders::{SegmentingEncoder, TokenEncoder},
//!     training::VocabTrainerOptions,
//!     vocab::{ReservedTokens, TokenVocab},
//! };
//!
//! let reserved = ReservedTokens::default();
//! let mut trainer = VocabTrainerOptions::new(1024).init();
//! trainer.update_from_samples(["전화번호는 010-1234-5678 입니다."]);
//! let weights = trainer.train(reserved.to_vec());
//!
//! let vocab: Arc<TokenVocab<u32>> = Arc::new(TokenVocab::init(weights, reserved).unwrap());
//! let encoder = SegmentingEncoder::new(vocab.clone());
//!
//! let tokens = encoder.encode("010-1234-5678");
//! assert_eq!(tokens, vec![vocab.token_to_id("010-1234-5678").unwrap()]);
//! ```

pub mod min_cost_segmenter;
pub mod segmenting_encoder;
pub mod token_encoder;

#[doc(inline)]
pub use min_cost_segmenter::{Segmentation, min_cost_segmentation};
#[doc(inline)]
pub use segmenting_encoder::SegmentingEncoder;
#[doc(inline)]
pub use token_encoder::TokenEncoder;
