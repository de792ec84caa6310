//! # Dense Ordinal Lookup

use crate::{
    alloc::{vec, vec::Vec},
    errors::STResult,
    lookup::position_to_index,
    types::{IndexType, Symbol},
};

/// Flat `ordinal -> index` table.
///
/// Every slot not claimed by an alphabet symbol holds the unknown index,
/// so a lookup is a single bounds-checked load.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseLookup<I: IndexType> {
    /// Table mapping from ordinal (position) to index.
    table: Vec<I>,

    /// Which ordinals are claimed by an alphabet symbol.
    covered: Vec<bool>,

    /// The index for uncovered ordinals.
    unknown: I,
}

impl<I: IndexType> DenseLookup<I> {
    /// Build a dense table over `symbols`, indexing each by its position.
    ///
    /// ## Arguments
    /// * `symbols` - the effective alphabet, in order.
    /// * `unknown` - the index for uncovered ordinals.
    ///
    /// ## Returns
    /// `Ok(None)` if the symbol type has no dense span,
    /// or some symbol has no ordinal within it.
    pub fn build<S: Symbol>(
        symbols: &[S],
        unknown: I,
    ) -> STResult<Option<Self>> {
        let Some(span) = S::DENSE_SPAN else {
            return Ok(None);
        };

        let mut table = vec![unknown; span];
        let mut covered = vec![false; span];

        for (position, symbol) in symbols.iter().enumerate() {
            let Some(ordinal) = symbol.ordinal().filter(|&o| o < span) else {
                return Ok(None);
            };
            table[ordinal] = position_to_index(position, symbols.len())?;
            covered[ordinal] = true;
        }

        Ok(Some(Self {
            table,
            covered,
            unknown,
        }))
    }

    /// The number of ordinal slots in the table.
    pub fn span(&self) -> usize {
        self.table.len()
    }

    /// The number of distinct ordinals claimed by alphabet symbols.
    pub fn covered_len(&self) -> usize {
        self.covered.iter().filter(|&&c| c).count()
    }

    /// Get the index for a symbol; uncovered symbols map to the unknown index.
    #[inline(always)]
    pub fn get<S: Symbol>(
        &self,
        symbol: &S,
    ) -> I {
        symbol
            .ordinal()
            .and_then(|o| self.table.get(o))
            .copied()
            .unwrap_or(self.unknown)
    }

    /// Is this symbol claimed by an alphabet entry?
    pub fn contains<S: Symbol>(
        &self,
        symbol: &S,
    ) -> bool {
        symbol
            .ordinal()
            .and_then(|o| self.covered.get(o))
            .copied()
            .unwrap_or(false)
    }
}
