//! # `symtok` Symbol Tokenizer
//!
//! A bidirectional tokenizer over a fixed alphabet of symbols.
//!
//! `symtok` maps symbols (characters, bytes, strings, ...) to dense 0-based
//! indices and back, encodes variable-length batches into padded grids,
//! and converts grids to and from one-hot tensors.
//!
//! See:
//! * [`tokenizer`] to build a [`Tokenizer`] and encode / decode.
//! * [`lookup`] for the dense and hashed symbol lookup strategies.
//! * [`batch`] for the padded grid layout.
//! * [`onehot`] for the one-hot tensor bridge.
//! * [`layer`] for model framework integration.
//!
//! ## Unknown Symbols
//!
//! Every tokenizer has an unknown symbol. If it is not already in the
//! alphabet, it is prepended and takes index `0`. Any symbol outside the
//! alphabet encodes to the unknown index; encoding never fails.
//! Batch padding also uses the unknown index.
//!
//! Decoding is strict: indices outside the alphabet are an error.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//! * ``rayon``
//! * ``std``
//!
//! #### feature: ``std`` / ``no_std``
//!
//! The "std" feature enables the use of the `std` library;
//! and the "`no_std`" feature enables deps needed when "std" is not enabled.
//! (Negative feature deps are not stable yet.)
//!
//! #### feature: ``ahash`` / ``foldhash``
//!
//! This swaps the hashed lookup's ``HashMap`` for ``ahash`` or ``foldhash``.
//!
//! This is done by the ``types::STHashMap`` type alias machinery.
//!
//! #### feature: ``rayon``
//!
//! This enables [`rayon::ParallelRayonTokenizer`], a column-parallel batch wrapper.
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//!
//! ## Example
//!
//! ```rust
//! use symtok::Tokenizer;
//!
//! let tok: Tokenizer<char> = Tokenizer::new("ACGT".chars(), 'N').unwrap();
//! assert_eq!(tok.to_string(), "Tokenizer<char>(alphabet_size=5, unknown='N')");
//!
//! assert_eq!(tok.encode_str("GAZ"), vec![3, 1, 0]);
//!
//! let grid = tok.encode_str_batch(&["AC", "GTA"]);
//! assert_eq!(grid.dim(), (3, 2));
//! assert_eq!(grid.column(0).to_vec(), vec![1, 2, 0]);
//! ```
#![warn(missing_docs, unused)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod batch;
pub mod errors;
pub mod layer;
pub mod lookup;
pub mod onehot;
pub mod tokenizer;
pub mod types;

#[doc(inline)]
pub use batch::IndexGrid;
#[doc(inline)]
pub use errors::{STResult, SymtokError};
#[doc(inline)]
pub use lookup::LookupStrategy;
#[doc(inline)]
pub use onehot::{OneHotBridge, OneHotPolicy};
#[doc(inline)]
pub use tokenizer::{DuplicatePolicy, Tokenizer, TokenizerOptions};
#[doc(inline)]
pub use types::{IndexType, Symbol};
