//! # Parallel Tokenizer

use std::sync::Arc;

use rayon::prelude::*;

use crate::{
    batch::{IndexGrid, pad_columns},
    errors::STResult,
    tokenizer::Tokenizer,
    types::{IndexType, Symbol},
};

/// Batch-Level Parallel Tokenizer Wrapper.
///
/// Encodes and decodes batch columns on the ``rayon`` pool.
/// Results are identical to the serial [`Tokenizer`] methods.
#[derive(Debug, Clone)]
pub struct ParallelRayonTokenizer<S: Symbol, I: IndexType> {
    /// Wrapped tokenizer.
    pub inner: Arc<Tokenizer<S, I>>,
}

impl<S: Symbol, I: IndexType> ParallelRayonTokenizer<S, I> {
    /// Create a new parallel tokenizer.
    ///
    /// ## Arguments
    /// * `inner` - The tokenizer to wrap.
    pub fn new(inner: impl Into<Arc<Tokenizer<S, I>>>) -> Self {
        Self {
            inner: inner.into(),
        }
    }

    /// Encode a sequence of sequences in parallel, preserving its shape.
    pub fn encode_nested<Q>(
        &self,
        batch: &[Q],
    ) -> Vec<Vec<I>>
    where
        Q: AsRef<[S]> + Sync,
    {
        batch
            .par_iter()
            .map(|seq| self.inner.encode_sequence(seq.as_ref()))
            .collect()
    }

    /// Encode a batch into a padded grid, encoding columns in parallel.
    ///
    /// See [`Tokenizer::encode_batch`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, batch)))]
    pub fn encode_batch<Q>(
        &self,
        batch: &[Q],
    ) -> IndexGrid<I>
    where
        Q: AsRef<[S]> + Sync,
    {
        pad_columns(&self.encode_nested(batch), self.inner.unknown_index())
    }

    /// Decode a sequence of index sequences in parallel, preserving its shape.
    pub fn decode_nested<Q>(
        &self,
        batch: &[Q],
    ) -> STResult<Vec<Vec<S>>>
    where
        Q: AsRef<[I]> + Sync,
    {
        batch
            .par_iter()
            .map(|seq| self.inner.decode_sequence(seq.as_ref()))
            .collect()
    }
}
