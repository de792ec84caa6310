//! # Hash Map Lookup

use crate::{
    errors::STResult,
    lookup::position_to_index,
    types::{IndexType, STHashMap, Symbol, hash_map_with_capacity},
};

/// `{ S -> I }` hash map lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct HashLookup<S: Symbol, I: IndexType> {
    /// Hash map from symbol to index.
    symbol_indices: STHashMap<S, I>,

    /// The index for absent symbols.
    unknown: I,
}

impl<S: Symbol, I: IndexType> HashLookup<S, I> {
    /// Build a hash lookup over `symbols`, indexing each by its position.
    ///
    /// Later occurrences of a repeated symbol overwrite earlier ones.
    pub fn build(
        symbols: &[S],
        unknown: I,
    ) -> STResult<Self> {
        let mut symbol_indices = hash_map_with_capacity(symbols.len());
        for (position, symbol) in symbols.iter().enumerate() {
            symbol_indices.insert(symbol.clone(), position_to_index(position, symbols.len())?);
        }
        symbol_indices.shrink_to_fit();

        Ok(Self {
            symbol_indices,
            unknown,
        })
    }

    /// The number of distinct symbols in the map.
    pub fn len(&self) -> usize {
        self.symbol_indices.len()
    }

    /// Returns true if the map holds no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbol_indices.is_empty()
    }

    /// Get the index for a symbol; absent symbols map to the unknown index.
    #[inline(always)]
    pub fn get(
        &self,
        symbol: &S,
    ) -> I {
        self.symbol_indices
            .get(symbol)
            .copied()
            .unwrap_or(self.unknown)
    }

    /// Is this symbol in the map?
    pub fn contains(
        &self,
        symbol: &S,
    ) -> bool {
        self.symbol_indices.contains_key(symbol)
    }
}
