//! # Extract and Split Modes

use std::borrow::Cow;

use crate::patterns::SpecialPattern;

/// Remove every match of the given classes, applied in order.
///
/// Each class is stripped from the output of the previous one.
pub fn strip_literal_spans<'a>(
    text: &'a str,
    patterns: &[SpecialPattern],
) -> Cow<'a, str> {
    let mut text = Cow::Borrowed(text);
    for pattern in patterns {
        let stripped = match pattern.regex().replace_all(&text, "") {
            Cow::Owned(s) => Some(s),
            Cow::Borrowed(_) => None,
        };
        if let Some(s) = stripped {
            text = Cow::Owned(s);
        }
    }
    text
}

/// Collect the special literal spans of `text`.
///
/// Phone, email and URL spans are found in the original text;
/// those spans are then stripped, and jamo / other-character spans are
/// found in the remainder. A lone space is never reported as an
/// other-character span.
///
/// ## Returns
/// `(class, literal)` pairs, grouped by class in application order,
/// and in occurrence order within a class. Repeats are kept.
pub fn extract_special_spans(text: &str) -> Vec<(SpecialPattern, String)> {
    use SpecialPattern::*;

    let mut spans = Vec::new();
    for pattern in [Phone, Email, Url] {
        spans.extend(
            pattern
                .regex()
                .find_iter(text)
                .map(|m| (pattern, m.as_str().to_string())),
        );
    }

    let remainder = strip_literal_spans(text, &[Phone, Email, Url]);
    for pattern in [Jamo, Other] {
        spans.extend(
            pattern
                .regex()
                .find_iter(&remainder)
                .filter(|m| m.as_str() != " ")
                .map(|m| (pattern, m.as_str().to_string())),
        );
    }

    spans
}

/// Split `text` into the runs used for substring counting.
///
/// Phone, email, URL and jamo spans are stripped; the remainder is
/// split on every other-character boundary, and empty pieces dropped.
pub fn split_substrings(text: &str) -> Vec<String> {
    use SpecialPattern::*;

    let remainder = strip_literal_spans(text, &[Phone, Email, Url, Jamo]);
    Other
        .regex()
        .split(&remainder)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
