//! # Vocabulary
//!
//! This module provides the vocabulary and related io mechanisms.
//!
//! ## Weighted Vocabulary
//!
//! The persisted vocabulary is [`WeightedVocab`], an insertion-ordered
//! ``{ token -> weight }`` map. Its order defines token ids.
//!
//! ## Token Vocabulary
//!
//! Encoders and decoders share a [`TokenVocab`], which contains:
//! * `weights` - the [`WeightedVocab`],
//! * `ids` - a [`TokenIdMap`] ``{ token <-> T }`` bijection,
//! * `reserved` - the [`ReservedTokens`] and their [`ReservedIds`].
pub mod io;
pub mod reserved;
pub mod token_ids;
pub mod token_vocab;
pub mod weighted_vocab;

#[doc(inline)]
pub use reserved::{ReservedIds, ReservedTokens};
#[doc(inline)]
pub use token_ids::TokenIdMap;
#[doc(inline)]
pub use token_vocab::TokenVocab;
#[doc(inline)]
pub use weighted_vocab::WeightedVocab;
