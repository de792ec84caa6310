//! # Padded Index Grids
//!
//! A batch of variable-length sequences encodes to a column-major
//! [`IndexGrid`]: shape ``(max_len, batch_size)``, one column per
//! sequence, one row per position. Short columns are padded with the
//! tokenizer's unknown index; there is no separate pad token, so a pad
//! cell is indistinguishable from an encoded unknown symbol.
//!
//! An empty batch produces a ``(0, 0)`` grid.

use ndarray::Array2;

use crate::{alloc::vec::Vec, types::IndexType};

/// ``(max_len, batch_size)`` grid of indices.
pub type IndexGrid<I> = Array2<I>;

/// The grid shape for a batch of sequence lengths.
///
/// ## Returns
/// ``(max_len, batch_size)``, with ``max_len = 0`` for an empty batch.
pub fn grid_shape(lengths: impl ExactSizeIterator<Item = usize>) -> (usize, usize) {
    let batch_size = lengths.len();
    (lengths.max().unwrap_or(0), batch_size)
}

/// Lay out encoded columns as a padded grid.
///
/// ## Arguments
/// * `columns` - one encoded sequence per batch position.
/// * `pad` - the value for cells past the end of a column.
pub fn pad_columns<I, C>(
    columns: &[C],
    pad: I,
) -> IndexGrid<I>
where
    I: IndexType,
    C: AsRef<[I]>,
{
    let shape = grid_shape(columns.iter().map(|c| c.as_ref().len()));
    let mut grid = Array2::from_elem(shape, pad);
    for (j, column) in columns.iter().enumerate() {
        for (i, &index) in column.as_ref().iter().enumerate() {
            grid[[i, j]] = index;
        }
    }
    grid
}

/// Split a grid back into its columns, padding included.
pub fn grid_columns<I: IndexType>(grid: &IndexGrid<I>) -> Vec<Vec<I>> {
    grid.columns().into_iter().map(|c| c.to_vec()).collect()
}
