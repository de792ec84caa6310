//! # Symbol Tokenizer
//!
//! A [`Tokenizer`] is built once from an alphabet and an unknown symbol,
//! and is immutable afterwards; it can be shared across threads freely.
//!
//! Indices are 0-based positions in the effective alphabet.

mod tokenizer_impl;
mod tokenizer_options;

#[doc(inline)]
pub use tokenizer_impl::*;
#[doc(inline)]
pub use tokenizer_options::*;
