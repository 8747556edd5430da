use crate::{KCResult, TokenType, Tokenizer, vocab::ReservedTokens};

/// Options for configuring a [`Tokenizer`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenizerOptions {
    /// The tokens filling each reserved role.
    pub reserved: ReservedTokens,
}

impl TokenizerOptions {
    /// Sets the reserved role tokens.
    pub fn with_reserved(
        self,
        reserved: ReservedTokens,
    ) -> Self {
        Self { reserved }
    }

    /// Build a [`Tokenizer`] whose vocabulary holds only the reserved tokens.
    pub fn build<T: TokenType>(&self) -> KCResult<Tokenizer<T>> {
        Tokenizer::new(self.clone())
    }
}
