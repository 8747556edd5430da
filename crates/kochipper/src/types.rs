//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

use crate::errors::{KCResult, KochipperError};

/// A type that can be used as a token id.
///
/// These are constrained to be unsigned primitive integers;
/// ids are assigned densely from `0`, so the vocabulary size
/// must fit in `T`.
pub trait TokenType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Unsigned
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
{
}

impl<T> TokenType for T where
    T: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Unsigned
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
{
}

/// The cost attached to a vocabulary entry.
///
/// Substring counts for frequency-derived tokens; `1` for specials.
pub type Weight = u64;

/// The weight given to reserved and pattern-derived tokens.
pub const SPECIAL_WEIGHT: Weight = 1;

/// Convert a dense index into a token id.
///
/// ## Returns
/// `Err(VocabSizeOverflow)` if `index` does not fit in `T`.
pub fn try_token_from_index<T: TokenType>(index: usize) -> KCResult<T> {
    T::from_usize(index).ok_or(KochipperError::VocabSizeOverflow { size: index + 1 })
}

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type KCHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type KCHashSet<V> = ahash::AHashSet<V>;

    } else {
        /// Type Alias for hash maps in this crate.
        pub type KCHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type KCHashSet<V> = std::collections::HashSet<V>;
    }
}
