//! # Protect Mode

use strum::IntoEnumIterator;

use crate::{patterns::SpecialPattern, types::KCHashSet};

/// Split a sentence into encoder pieces with every special span isolated.
///
/// Each space becomes a standalone `whitespace_marker` piece, and the text
/// is split on whitespace. Then, for each pattern class in order, every
/// distinct literal matched in the original sentence is spliced out of each
/// piece containing it as `prefix, literal, suffix`. A piece which is itself
/// an already-processed literal is never split again.
///
/// ## Arguments
/// * `sentence` - the raw input sentence.
/// * `whitespace_marker` - the reserved token standing in for a space.
pub fn protect_spans(
    sentence: &str,
    whitespace_marker: &str,
) -> Vec<String> {
    let marked = sentence.replace(' ', &format!(" {whitespace_marker} "));
    let mut pieces: Vec<String> = marked.split_whitespace().map(str::to_string).collect();

    let mut seen: KCHashSet<&str> = KCHashSet::default();
    for pattern in SpecialPattern::iter() {
        for m in pattern.regex().find_iter(sentence) {
            let literal = m.as_str();
            if !seen.insert(literal) {
                continue;
            }
            isolate_literal(&mut pieces, literal, &seen);
        }
    }

    pieces
}

/// Splice `literal` out of every piece containing it.
fn isolate_literal(
    pieces: &mut Vec<String>,
    literal: &str,
    seen: &KCHashSet<&str>,
) {
    let mut idx = 0;
    while idx < pieces.len() {
        let piece = &pieces[idx];
        if !seen.contains(piece.as_str())
            && let Some(start) = piece.find(literal)
        {
            let end = start + literal.len();
            let replacement: Vec<String> = [&piece[..start], literal, &piece[end..]]
                .into_iter()
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            pieces.splice(idx..=idx, replacement);
        }
        idx += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_marker() {
        assert_eq!(protect_spans("현재 문장을", "_"), vec!["현재", "_", "문장을"]);
        assert_eq!(protect_spans("a  b", "_"), vec!["a", "_", "_", "b"]);
        assert_eq!(protect_spans("ab", "<sp>"), vec!["ab"]);
        assert!(protect_spans("", "_").is_empty());
    }

    #[test]
    fn test_isolates_phone() {
        assert_eq!(
            protect_spans("번호는 010-1234-5678입니다.", "_"),
            vec!["번호는", "_", "010-1234-5678", "입니다", "."]
        );
    }

    #[test]
    fn test_processed_literal_not_resplit() {
        // `-` is an other-character match, but the phone piece is already whole.
        assert_eq!(
            protect_spans("010-1234-5678 a-b", "_"),
            vec!["010-1234-5678", "_", "a", "-", "b"]
        );
    }

    #[test]
    fn test_every_occurrence_isolated() {
        assert_eq!(
            protect_spans("ㅋㅋ 좋아ㅋ", "_"),
            vec!["ㅋ", "ㅋ", "_", "좋아", "ㅋ"]
        );
        assert_eq!(protect_spans("a.b.c", "_"), vec!["a", ".", "b", ".", "c"]);
    }

    #[test]
    fn test_url_and_punctuation() {
        assert_eq!(
            protect_spans("주소는 https://x.io/a 입니다.", "_"),
            vec![
                "주소는",
                "_",
                "https://x.io/a",
                "_",
                "입니다",
                "."
            ]
        );
    }
}
