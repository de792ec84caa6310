//! # One-Hot Bridge
//!
//! Converts tokenizer index grids to and from [`ndarray`] one-hot tensors.
//!
//! Tensor layouts put the channel axis first; the channel count is the
//! tokenizer's alphabet size:
//! * grids: ``(alphabet_size, max_len, batch_size)`` [`Array3`],
//! * vectors: ``(alphabet_size, batch_size)`` [`Array2`].
//!
//! The decode direction resolves channels straight through to symbols.
//!
//! ## Example
//!
//! ```rust
//! use ndarray::Array3;
//! use symtok::{Tokenizer, onehot::OneHotBridge};
//!
//! let tok: Tokenizer<char> = Tokenizer::new("ACGT".chars(), 'N').unwrap();
//! let grid = tok.encode_str_batch(&["AC", "GTA"]);
//!
//! let bridge = OneHotBridge::new(&tok);
//! let tensor: Array3<f32> = bridge.to_onehot(&grid).unwrap();
//! assert_eq!(tensor.dim(), (5, 3, 2));
//!
//! let symbols = bridge.to_symbols(&tensor).unwrap();
//! assert_eq!(symbols.column(0).to_vec(), vec!['A', 'C', 'N']);
//! ```

mod onehot_bridge;

#[doc(inline)]
pub use onehot_bridge::*;
