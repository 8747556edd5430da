//! # Special Span Patterns
//!
//! Five fixed pattern classes mark literal spans which are never
//! decomposed into substrings:
//!
//! | class   | pattern                                          |
//! |---------|--------------------------------------------------|
//! | `Phone` | ``\d{2,3}-\d{3,4}-\d{4}``                        |
//! | `Email` | ``[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}`` |
//! | `Url`   | ``https?://[^\s]+``                              |
//! | `Jamo`  | a Hangul compatibility jamo (`ㄱ`..=`ㅣ`)         |
//! | `Other` | anything not ASCII alphanumeric, Hangul or jamo  |
//!
//! The classes are always applied in that order; see
//! [`SpecialPattern::iter`](strum::IntoEnumIterator::iter).
//!
//! Three scanning modes are provided:
//! * [`extract_special_spans`] - the literal matches of each class (training).
//! * [`split_substrings`] - the text left over once specials are removed (training).
//! * [`protect_spans`] - whitespace split with every match isolated (encoding).

mod extract;
mod protect;

use std::sync::LazyLock;

#[doc(inline)]
pub use extract::{extract_special_spans, split_substrings, strip_literal_spans};
#[doc(inline)]
pub use protect::protect_spans;
use regex::Regex;

/// Phone numbers: `010-1234-5678`, `02-123-4567`.
pub const PHONE_PATTERN: &str = r"\d{2,3}-\d{3,4}-\d{4}";

/// Email addresses with a 2+ letter top-level label.
pub const EMAIL_PATTERN: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";

/// `http://` or `https://` followed by non-whitespace.
pub const URL_PATTERN: &str = r"https?://[^\s]+";

/// A single Hangul compatibility jamo, consonant or vowel.
pub const JAMO_PATTERN: &str = r"[\x{3131}-\x{3163}]";

/// A single character outside ASCII alphanumerics, Hangul syllables and jamo.
pub const OTHER_PATTERN: &str = r"[^a-zA-Z0-9\x{AC00}-\x{D7A3}\x{3131}-\x{3163}]";

static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| compile(PHONE_PATTERN));
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| compile(EMAIL_PATTERN));
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| compile(URL_PATTERN));
static JAMO_REGEX: LazyLock<Regex> = LazyLock::new(|| compile(JAMO_PATTERN));
static OTHER_REGEX: LazyLock<Regex> = LazyLock::new(|| compile(OTHER_PATTERN));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("special pattern literals are valid regexes")
}

/// A special span pattern class.
///
/// Iteration order (via [`strum::IntoEnumIterator`]) is the application order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, strum::EnumIter, strum::Display,
)]
#[strum(serialize_all = "snake_case")]
pub enum SpecialPattern {
    /// Phone numbers.
    Phone,

    /// Email addresses.
    Email,

    /// `http(s)://` URLs.
    Url,

    /// Korean consonant/vowel jamo.
    Jamo,

    /// Punctuation and any other character.
    Other,
}

impl SpecialPattern {
    /// The number of pattern classes.
    pub const COUNT: usize = 5;

    /// The pattern source string.
    pub fn as_pattern(&self) -> &'static str {
        match self {
            Self::Phone => PHONE_PATTERN,
            Self::Email => EMAIL_PATTERN,
            Self::Url => URL_PATTERN,
            Self::Jamo => JAMO_PATTERN,
            Self::Other => OTHER_PATTERN,
        }
    }

    /// The shared compiled regex for this class.
    pub fn regex(&self) -> &'static Regex {
        match self {
            Self::Phone => &PHONE_REGEX,
            Self::Email => &EMAIL_REGEX,
            Self::Url => &URL_REGEX,
            Self::Jamo => &JAMO_REGEX,
            Self::Other => &OTHER_REGEX,
        }
    }

    /// Dense index of this class, in application order.
    pub fn index(&self) -> usize {
        *self as usize
    }
}
