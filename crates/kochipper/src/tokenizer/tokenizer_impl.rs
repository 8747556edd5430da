//! # Tokenizer

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{
    KCResult,
    TokenType,
    TokenizerOptions,
    decoders::{DictionaryDecoder, TokenDecoder},
    encoders::{SegmentingEncoder, TokenEncoder},
    training::VocabTrainerOptions,
    vectorize,
    vocab::{
        ReservedTokens,
        TokenVocab,
        WeightedVocab,
        io::{load_vocab_path, save_vocab_path},
    },
};

/// A trainable tokenizer: vocabulary, encoder, and decoder.
///
/// The vocabulary is replaced wholesale by [`fit`](Self::fit) and
/// [`load_vocab`](Self::load_vocab); both take `&mut self`, so a
/// tokenizer shared across threads must be swapped under a lock.
#[derive(Debug, Clone)]
pub struct Tokenizer<T: TokenType> {
    options: TokenizerOptions,
    vocab: Arc<TokenVocab<T>>,
    encoder: SegmentingEncoder<T>,
    decoder: DictionaryDecoder<T>,
}

impl<T: TokenType> Default for Tokenizer<T> {
    fn default() -> Self {
        Self::new(TokenizerOptions::default())
            .expect("the default reserved tokens fit every token type")
    }
}

impl<T: TokenType> Tokenizer<T> {
    /// Create a tokenizer whose vocabulary holds only the reserved tokens.
    pub fn new(options: TokenizerOptions) -> KCResult<Self> {
        let vocab = TokenVocab::from_reserved(options.reserved.clone())?;
        Ok(Self::from_vocab(options, vocab))
    }

    fn from_vocab(
        options: TokenizerOptions,
        vocab: TokenVocab<T>,
    ) -> Self {
        let vocab = Arc::new(vocab);
        Self {
            options,
            encoder: SegmentingEncoder::new(vocab.clone()),
            decoder: DictionaryDecoder::new(vocab.clone()),
            vocab,
        }
    }

    fn install(
        &mut self,
        vocab: TokenVocab<T>,
    ) {
        *self = Self::from_vocab(self.options.clone(), vocab);
    }

    /// The tokenizer options.
    pub fn options(&self) -> &TokenizerOptions {
        &self.options
    }

    /// The reserved role tokens.
    pub fn reserved(&self) -> &ReservedTokens {
        &self.options.reserved
    }

    /// The ordered ``{ token -> weight }`` vocabulary.
    pub fn vocab(&self) -> &WeightedVocab {
        self.vocab.weights()
    }

    /// The vocabulary with its id maps.
    pub fn token_vocab(&self) -> &Arc<TokenVocab<T>> {
        &self.vocab
    }

    /// The number of tokens in the vocabulary.
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    /// Look up the id of a token.
    pub fn token_to_id(
        &self,
        token: &str,
    ) -> Option<T> {
        self.vocab.token_to_id(token)
    }

    /// Look up the token of an id.
    pub fn id_to_token(
        &self,
        id: T,
    ) -> Option<&str> {
        self.vocab.id_to_token(id)
    }

    /// Train a new vocabulary on `sentences`, replacing the current one.
    ///
    /// `reserved_tokens` lead the vocabulary, in order; any reserved role
    /// token missing from them is appended after.
    ///
    /// ## Returns
    /// `Err(VocabSizeOverflow)` if the vocabulary does not fit in `T`;
    /// the current vocabulary is then left in place.
    pub fn fit<I, R>(
        &mut self,
        sentences: I,
        max_vocab_size: usize,
        reserved_tokens: R,
    ) -> KCResult<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        self.fit_with_options(
            sentences,
            VocabTrainerOptions::new(max_vocab_size),
            reserved_tokens,
        )
    }

    /// [`fit`](Self::fit) with explicit trainer options.
    pub fn fit_with_options<I, R>(
        &mut self,
        sentences: I,
        options: VocabTrainerOptions,
        reserved_tokens: R,
    ) -> KCResult<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        let reserved_tokens = self.complete_reserved(reserved_tokens);

        let mut trainer = options.init();
        trainer.update_from_samples(sentences);
        let weights = trainer.train(reserved_tokens);

        let vocab = TokenVocab::init(weights, self.reserved().clone())?;
        self.install(vocab);
        Ok(())
    }

    fn complete_reserved<R>(
        &self,
        reserved_tokens: R,
    ) -> Vec<String>
    where
        R: IntoIterator,
        R::Item: Into<String>,
    {
        let mut tokens: Vec<String> = reserved_tokens.into_iter().map(Into::into).collect();
        for (role, token) in self.reserved().roles() {
            if !tokens.iter().any(|t| t == token) {
                log::debug!("appending missing reserved {role} token {token:?}");
                tokens.push(token.to_string());
            }
        }
        tokens
    }

    /// Encode a sentence into tokens.
    ///
    /// Never fails; unknown text becomes the unknown token.
    pub fn encode<S: AsRef<str>>(
        &self,
        sentence: S,
    ) -> Vec<T> {
        self.encoder.encode(sentence)
    }

    /// Encode a batch of sentences.
    pub fn encode_batch<S: AsRef<str>>(
        &self,
        batch: &[S],
    ) -> Vec<Vec<T>> {
        self.encoder.encode_batch(batch)
    }

    /// Decode tokens into text.
    ///
    /// ## Returns
    /// `Err(UnknownTokenId)` if an id before the first sequence-end
    /// token is not in the vocabulary.
    pub fn decode(
        &self,
        tokens: &[T],
    ) -> KCResult<String> {
        self.decoder.try_decode_to_string(tokens)
    }

    /// Decode a batch of token sequences.
    pub fn decode_batch(
        &self,
        batch: &[&[T]],
    ) -> KCResult<Vec<String>> {
        self.decoder.try_decode_batch_to_strings(batch)
    }

    /// Wrap `tokens` in boundary markers and pad to `max_sentence_length`.
    ///
    /// See [`vectorize::vectorization`].
    pub fn vectorization(
        &self,
        tokens: &[T],
        max_sentence_length: usize,
    ) -> KCResult<Vec<T>> {
        vectorize::vectorization(tokens, max_sentence_length, self.vocab.reserved_ids())
    }

    /// Encode and vectorize a sentence in one step.
    pub fn encode_to_vector<S: AsRef<str>>(
        &self,
        sentence: S,
        max_sentence_length: usize,
    ) -> KCResult<Vec<T>> {
        self.vectorization(&self.encode(sentence), max_sentence_length)
    }

    /// Save the vocabulary as JSON.
    ///
    /// ## Arguments
    /// * `path` - a file path, or a directory to hold ``vocab.json``.
    ///
    /// ## Returns
    /// The path written.
    pub fn save_vocab<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> KCResult<PathBuf> {
        let path = save_vocab_path(self.vocab(), path)?;
        log::info!(
            "saved vocabulary of {} tokens to {}",
            self.vocab_size(),
            path.display()
        );
        Ok(path)
    }

    /// Load a JSON vocabulary, replacing the current one.
    ///
    /// Ids follow the key order of the file.
    ///
    /// ## Arguments
    /// * `path` - a file path, or a directory holding ``vocab.json``.
    ///
    /// ## Returns
    /// An io, parse, or `MissingReservedToken` error; the current
    /// vocabulary is then left in place.
    pub fn load_vocab<P: AsRef<Path>>(
        &mut self,
        path: P,
    ) -> KCResult<()> {
        let path = path.as_ref();
        let weights = load_vocab_path(path)?;
        let vocab = TokenVocab::init(weights, self.reserved().clone())?;
        log::info!(
            "loaded vocabulary of {} tokens from {}",
            vocab.len(),
            path.display()
        );
        self.install(vocab);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{KochipperError, vocab::io::VOCAB_FILE_NAME};

    const RESERVED: [&str; 5] = ["<pad>", "<unk>", "<bos>", "<eos>", "_"];

    #[test]
    fn test_default_is_usable() {
        let tokenizer: Tokenizer<u32> = Tokenizer::default();
        assert_eq!(tokenizer.vocab_size(), 5);

        let unk = tokenizer.token_vocab().reserved_ids().unk;
        assert_eq!(tokenizer.encode("x"), vec![unk]);
        assert_eq!(tokenizer.decode(&[]).unwrap(), "");
        assert_eq!(
            tokenizer.encode_to_vector("x", 4).unwrap(),
            vec![2, unk, 3, 0]
        );
    }

    #[test]
    fn test_fit_abc() {
        let mut tokenizer: Tokenizer<u32> = Tokenizer::default();
        tokenizer.fit(["abc"], 50, RESERVED).unwrap();

        assert_eq!(tokenizer.vocab_size(), 11);
        assert_eq!(
            tokenizer.vocab().tokens().collect::<Vec<_>>(),
            vec!["<pad>", "<unk>", "<bos>", "<eos>", "_", "abc", "ab", "a", "bc", "b", "c"]
        );
        assert_eq!(tokenizer.encode("abc"), vec![5]);
        assert_eq!(tokenizer.id_to_token(7), Some("a"));
    }

    #[test]
    fn test_fit_appends_missing_roles() {
        let mut tokenizer: Tokenizer<u32> = Tokenizer::default();
        tokenizer.fit(["abc"], 50, ["<unk>", "<pad>"]).unwrap();

        assert_eq!(
            tokenizer.vocab().tokens().take(5).collect::<Vec<_>>(),
            vec!["<unk>", "<pad>", "<bos>", "<eos>", "_"]
        );
        assert_eq!(tokenizer.token_vocab().reserved_ids().unk, 0);
    }

    #[test]
    fn test_fit_soft_bound() {
        let mut tokenizer: Tokenizer<u32> = Tokenizer::default();
        tokenizer.fit(["abc ㅋ"], 2, RESERVED).unwrap();

        // Reserved tokens and the jamo literal survive; every substring is dropped.
        assert_eq!(tokenizer.vocab_size(), 6);
        assert!(tokenizer.vocab().contains("ㅋ"));
        assert!(!tokenizer.vocab().contains("a"));
    }

    #[test]
    fn test_fit_overflow_keeps_state() {
        let corpus: Vec<String> = (0..300).map(|i| format!("{i:03}")).collect();

        let mut tokenizer: Tokenizer<u8> = Tokenizer::default();
        let err = tokenizer.fit(&corpus, 10_000, RESERVED).unwrap_err();

        assert!(matches!(err, KochipperError::VocabSizeOverflow { .. }));
        assert_eq!(tokenizer.vocab_size(), 5);
    }

    #[test]
    fn test_roundtrip_text() {
        let text = "안녕하세요 반갑습니다";
        let mut tokenizer: Tokenizer<u32> = Tokenizer::default();
        tokenizer.fit([text], 1024, RESERVED).unwrap();

        let tokens = tokenizer.encode(text);
        assert_eq!(tokenizer.decode(&tokens).unwrap(), text);

        let vector = tokenizer.encode_to_vector(text, tokens.len() + 6).unwrap();
        assert_eq!(vector.len(), tokens.len() + 6);
        assert_eq!(tokenizer.decode(&vector).unwrap(), text);

        assert!(matches!(
            tokenizer.vectorization(&tokens, tokens.len() + 1),
            Err(KochipperError::SentenceTooLong { .. })
        ));
    }

    #[test]
    fn test_save_load() {
        let mut tokenizer: Tokenizer<u32> = Tokenizer::default();
        tokenizer
            .fit(
                ["전화번호는 010-1234-5678 입니다.", "메일은 kairo.o@naver.com 입니다."],
                1024,
                RESERVED,
            )
            .unwrap();

        let tmp_dir = tempdir::TempDir::new("vocab_test").unwrap();
        let path = tokenizer.save_vocab(tmp_dir.path()).unwrap();
        assert_eq!(path, tmp_dir.path().join(VOCAB_FILE_NAME));

        let mut loaded: Tokenizer<u32> = Tokenizer::default();
        loaded.load_vocab(tmp_dir.path()).unwrap();

        assert_eq!(loaded.vocab(), tokenizer.vocab());
        assert_eq!(loaded.token_vocab().ids(), tokenizer.token_vocab().ids());
        assert_eq!(
            loaded.encode("번호는 010-1234-5678"),
            tokenizer.encode("번호는 010-1234-5678")
        );
    }

    #[test]
    fn test_load_missing_role() {
        let tmp_dir = tempdir::TempDir::new("vocab_test").unwrap();
        let path = tmp_dir.path().join("partial.json");
        std::fs::write(&path, r#"{"<pad>":1,"<unk>":1,"a":3}"#).unwrap();

        let mut tokenizer: Tokenizer<u32> = Tokenizer::default();
        let err = tokenizer.load_vocab(&path).unwrap_err();
        assert!(matches!(
            err,
            KochipperError::MissingReservedToken { role: "bos", .. }
        ));
        assert_eq!(tokenizer.vocab_size(), 5);
    }
}
