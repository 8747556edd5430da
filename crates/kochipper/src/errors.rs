//! # Error Types

/// Errors from kochipper operations.
#[derive(Debug, thiserror::Error)]
pub enum KochipperError {
    /// The boundary-wrapped sequence does not fit the requested length.
    #[error(
        "max_sentence_length ({max_sentence_length}) must be at least the encoded length plus 2 ({required})"
    )]
    SentenceTooLong {
        /// The requested fixed length.
        max_sentence_length: usize,

        /// The length of the sequence once wrapped in boundary markers.
        required: usize,
    },

    /// A token id is not part of the vocabulary.
    #[error("unknown token id: {id}")]
    UnknownTokenId {
        /// The offending id, formatted.
        id: String,
    },

    /// A vocabulary lacks one of the reserved role tokens.
    #[error("vocabulary is missing the reserved {role} token {token:?}")]
    MissingReservedToken {
        /// The reserved role name.
        role: &'static str,

        /// The literal token expected for that role.
        token: String,
    },

    /// Vocab size exceeds the capacity of the target token type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Malformed serialized vocabulary.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type for kochipper operations.
pub type KCResult<T> = core::result::Result<T, KochipperError>;
