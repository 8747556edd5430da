//! # Token Decoders
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use kochipper::{
//!     decoders::{DictionaryDecoder, TokenDecoder},
//!     vocab::{ReservedTokens, TokenVocab, WeightedVocab},
//! };
//!
//! let reserved = ReservedTokens::default();
//! let mut weights = WeightedVocab::from_specials(reserved.to_vec());
//! weights.extend([("안녕", 3), ("하세요", 2)]);
//!
//! let vocab: Arc<TokenVocab<u32>> = Arc::new(TokenVocab::init(weights, reserved).unwrap());
//! let decoder = DictionaryDecoder::new(vocab.clone());
//!
//! let ids: Vec<u32> = ["<bos>", "안녕", "_", "하세요", "<eos>", "<pad>"]
//!     .iter()
//!     .map(|t| vocab.token_to_id(t).unwrap())
//!     .collect();
//! assert_eq!(decoder.try_decode_to_string(&ids).unwrap(), "안녕 하세요");
//! ```

pub mod dictionary_decoder;
pub mod token_decoder;

#[doc(inline)]
pub use dictionary_decoder::DictionaryDecoder;
#[doc(inline)]
pub use token_decoder::TokenDecoder;
