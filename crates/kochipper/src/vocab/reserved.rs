//! # Reserved Tokens

use crate::{
    errors::{KCResult, KochipperError},
    types::TokenType,
    vocab::TokenIdMap,
};

/// Default padding token.
pub const DEFAULT_PAD_TOKEN: &str = "<pad>";
/// Default unknown token.
pub const DEFAULT_UNK_TOKEN: &str = "<unk>";
/// Default sequence-start token.
pub const DEFAULT_BOS_TOKEN: &str = "<bos>";
/// Default sequence-end token.
pub const DEFAULT_EOS_TOKEN: &str = "<eos>";
/// Default whitespace marker token.
pub const DEFAULT_SPACE_TOKEN: &str = "_";

/// The literal tokens filling each reserved role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedTokens {
    /// Padding, appended by vectorization.
    pub pad: String,

    /// Stand-in for anything the vocabulary cannot segment.
    pub unk: String,

    /// Sequence-start marker.
    pub bos: String,

    /// Sequence-end marker.
    pub eos: String,

    /// Stand-in for a literal space.
    pub space: String,
}

impl Default for ReservedTokens {
    fn default() -> Self {
        Self {
            pad: DEFAULT_PAD_TOKEN.to_string(),
            unk: DEFAULT_UNK_TOKEN.to_string(),
            bos: DEFAULT_BOS_TOKEN.to_string(),
            eos: DEFAULT_EOS_TOKEN.to_string(),
            space: DEFAULT_SPACE_TOKEN.to_string(),
        }
    }
}

impl ReservedTokens {
    /// Sets the padding token.
    pub fn with_pad<S: Into<String>>(
        self,
        pad: S,
    ) -> Self {
        Self {
            pad: pad.into(),
            ..self
        }
    }

    /// Sets the unknown token.
    pub fn with_unk<S: Into<String>>(
        self,
        unk: S,
    ) -> Self {
        Self {
            unk: unk.into(),
            ..self
        }
    }

    /// Sets the sequence-start token.
    pub fn with_bos<S: Into<String>>(
        self,
        bos: S,
    ) -> Self {
        Self {
            bos: bos.into(),
            ..self
        }
    }

    /// Sets the sequence-end token.
    pub fn with_eos<S: Into<String>>(
        self,
        eos: S,
    ) -> Self {
        Self {
            eos: eos.into(),
            ..self
        }
    }

    /// Sets the whitespace marker token.
    pub fn with_space<S: Into<String>>(
        self,
        space: S,
    ) -> Self {
        Self {
            space: space.into(),
            ..self
        }
    }

    /// `(role, token)` pairs, in `pad, unk, bos, eos, space` order.
    pub fn roles(&self) -> [(&'static str, &str); 5] {
        [
            ("pad", self.pad.as_str()),
            ("unk", self.unk.as_str()),
            ("bos", self.bos.as_str()),
            ("eos", self.eos.as_str()),
            ("space", self.space.as_str()),
        ]
    }

    /// The role tokens, in `pad, unk, bos, eos, space` order.
    pub fn to_vec(&self) -> Vec<String> {
        self.roles().iter().map(|(_, t)| t.to_string()).collect()
    }
}

/// The ids of the reserved role tokens within one vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservedIds<T: TokenType> {
    /// Padding id.
    pub pad: T,
    /// Unknown id.
    pub unk: T,
    /// Sequence-start id.
    pub bos: T,
    /// Sequence-end id.
    pub eos: T,
    /// Whitespace marker id.
    pub space: T,
}

impl<T: TokenType> ReservedIds<T> {
    /// Resolve each reserved role against an id map.
    ///
    /// ## Returns
    /// `Err(MissingReservedToken)` for the first role absent from `ids`.
    pub fn resolve(
        reserved: &ReservedTokens,
        ids: &TokenIdMap<T>,
    ) -> KCResult<Self> {
        let lookup = |role: &'static str, token: &str| {
            ids.token_to_id(token)
                .ok_or_else(|| KochipperError::MissingReservedToken {
                    role,
                    token: token.to_string(),
                })
        };

        Ok(Self {
            pad: lookup("pad", &reserved.pad)?,
            unk: lookup("unk", &reserved.unk)?,
            bos: lookup("bos", &reserved.bos)?,
            eos: lookup("eos", &reserved.eos)?,
            space: lookup("space", &reserved.space)?,
        })
    }
}
