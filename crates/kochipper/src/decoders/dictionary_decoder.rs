//! # Dictionary ``{ T -> String }`` Token Decoder

use std::sync::Arc;

use crate::{
    decoders::TokenDecoder,
    errors::{KCResult, KochipperError},
    types::TokenType,
    vocab::TokenVocab,
};

/// A token dictionary [`TokenDecoder<T>`].
///
/// Sequence-start tokens are skipped; decoding stops at the first
/// sequence-end token. Every whitespace marker in the joined text
/// becomes a single space.
#[derive(Debug, Clone)]
pub struct DictionaryDecoder<T: TokenType> {
    vocab: Arc<TokenVocab<T>>,
}

impl<T: TokenType> DictionaryDecoder<T> {
    /// Create a decoder over `vocab`.
    pub fn new(vocab: Arc<TokenVocab<T>>) -> Self {
        Self { vocab }
    }
}

impl<T: TokenType> TokenDecoder<T> for DictionaryDecoder<T> {
    fn try_decode_to_string(
        &self,
        tokens: &[T],
    ) -> KCResult<String> {
        let reserved = self.vocab.reserved_ids();

        let mut text = String::new();
        for &token in tokens {
            if token == reserved.bos {
                continue;
            }
            if token == reserved.eos {
                break;
            }
            let span = self
                .vocab
                .id_to_token(token)
                .ok_or_else(|| KochipperError::UnknownTokenId {
                    id: token.to_string(),
                })?;
            text.push_str(span);
        }

        let marker = self.vocab.reserved().space.as_str();
        if !marker.is_empty() && text.contains(marker) {
            text = text.replace(marker, " ");
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::{ReservedTokens, WeightedVocab};

    fn build_decoder() -> (Arc<TokenVocab<u32>>, DictionaryDecoder<u32>) {
        // <pad>=0 <unk>=1 <bos>=2 <eos>=3 _=4 안녕=5 a=6 b=7
        let mut weights = WeightedVocab::from_specials(ReservedTokens::default().to_vec());
        weights.extend([("안녕", 2), ("a", 1), ("b", 1)]);
        let vocab = Arc::new(TokenVocab::init(weights, ReservedTokens::default()).unwrap());
        (vocab.clone(), DictionaryDecoder::new(vocab))
    }

    #[test]
    fn test_decode_markers() {
        let (_vocab, decoder) = build_decoder();

        assert_eq!(decoder.try_decode_to_string(&[5, 4, 6, 7]).unwrap(), "안녕 ab");
        assert_eq!(
            decoder.try_decode_to_string(&[2, 5, 4, 6, 3, 0, 0]).unwrap(),
            "안녕 a"
        );
        // Ids after the end marker are ignored, even unknown ones.
        assert_eq!(decoder.try_decode_to_string(&[6, 3, 999]).unwrap(), "a");
        assert_eq!(decoder.try_decode_to_string(&[]).unwrap(), "");
    }

    #[test]
    fn test_bos_dropped_anywhere() {
        let (_vocab, decoder) = build_decoder();
        assert_eq!(decoder.try_decode_to_string(&[6, 2, 7]).unwrap(), "ab");
    }

    #[test]
    fn test_unknown_id() {
        let (_vocab, decoder) = build_decoder();
        let err = decoder.try_decode_to_string(&[6, 42]).unwrap_err();
        assert!(matches!(err, KochipperError::UnknownTokenId { id } if id == "42"));
    }

    #[test]
    fn test_decode_batch() {
        let (_vocab, decoder) = build_decoder();
        let batch: Vec<&[u32]> = vec![&[5], &[6, 4, 7]];
        assert_eq!(
            decoder.try_decode_batch_to_strings(&batch).unwrap(),
            vec!["안녕".to_string(), "a b".to_string()]
        );
    }
}
