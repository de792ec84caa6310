//! # Rayon Utilities
//!
//! [`rayon`] powered wrappers for column-parallel batch operations.

mod rayon_tokenizer;

pub use rayon_tokenizer::ParallelRayonTokenizer;
