//! # Symbol Lookup
//!
//! A symbol lookup maps alphabet symbols to indices, resolving any symbol
//! it does not cover to the unknown index. There are two backing strategies
//! with identical contracts:
//!
//! * [`DenseLookup`] - a flat table indexed by [`Symbol::ordinal`],
//!   available for small-range symbol types (bytes, ASCII characters).
//! * [`HashLookup`] - a hash map, available for every [`Symbol`].
//!
//! Both are built from `(symbol, index)` pairs in alphabet order;
//! when a symbol repeats, the last pair wins.

pub mod dense_lookup;
pub mod hash_lookup;

#[doc(inline)]
pub use dense_lookup::DenseLookup;
#[doc(inline)]
pub use hash_lookup::HashLookup;

use core::fmt::{Display, Formatter};

use crate::{
    errors::{STResult, SymtokError},
    types::{IndexType, Symbol},
};

/// Lookup strategy selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupStrategy {
    /// Dense when the alphabet fits the symbol type's dense span; else hashed.
    #[default]
    Auto,

    /// Always use a dense table; construction fails if it cannot cover the alphabet.
    Dense,

    /// Always use a hash map.
    Hashed,
}

impl Display for LookupStrategy {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> core::fmt::Result {
        f.write_str(match self {
            LookupStrategy::Auto => "auto",
            LookupStrategy::Dense => "dense",
            LookupStrategy::Hashed => "hashed",
        })
    }
}

/// A resolved symbol lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum SymbolLookup<S: Symbol, I: IndexType> {
    /// Flat ordinal table.
    Dense(DenseLookup<I>),

    /// Hash map.
    Hashed(HashLookup<S, I>),
}

impl<S: Symbol, I: IndexType> SymbolLookup<S, I> {
    /// Build a lookup over `symbols`, where each symbol's index is its position.
    ///
    /// ## Arguments
    /// * `symbols` - the effective alphabet, in order.
    /// * `unknown` - the index returned for uncovered symbols.
    /// * `strategy` - the requested backing strategy.
    ///
    /// ## Returns
    /// The lookup; or [`SymtokError::DenseLookupUnavailable`] if a dense
    /// table was requested and cannot cover `symbols`.
    pub fn build(
        symbols: &[S],
        unknown: I,
        strategy: LookupStrategy,
    ) -> STResult<Self> {
        match strategy {
            LookupStrategy::Hashed => Ok(Self::Hashed(HashLookup::build(symbols, unknown)?)),
            LookupStrategy::Dense => DenseLookup::build(symbols, unknown)?
                .map(Self::Dense)
                .ok_or(SymtokError::DenseLookupUnavailable),
            LookupStrategy::Auto => match DenseLookup::build(symbols, unknown)? {
                Some(dense) => Ok(Self::Dense(dense)),
                None => Ok(Self::Hashed(HashLookup::build(symbols, unknown)?)),
            },
        }
    }

    /// The concrete strategy backing this lookup; never [`LookupStrategy::Auto`].
    pub fn strategy(&self) -> LookupStrategy {
        match self {
            Self::Dense(_) => LookupStrategy::Dense,
            Self::Hashed(_) => LookupStrategy::Hashed,
        }
    }

    /// The number of distinct symbols the lookup covers.
    ///
    /// Smaller than the alphabet size when the alphabet repeats a symbol.
    pub fn distinct_len(&self) -> usize {
        match self {
            Self::Dense(dense) => dense.covered_len(),
            Self::Hashed(hashed) => hashed.len(),
        }
    }

    /// Get the index for a symbol; uncovered symbols map to the unknown index.
    #[inline(always)]
    pub fn get(
        &self,
        symbol: &S,
    ) -> I {
        match self {
            Self::Dense(dense) => dense.get(symbol),
            Self::Hashed(hashed) => hashed.get(symbol),
        }
    }

    /// Is this symbol covered by the lookup?
    pub fn contains(
        &self,
        symbol: &S,
    ) -> bool {
        match self {
            Self::Dense(dense) => dense.contains(symbol),
            Self::Hashed(hashed) => hashed.contains(symbol),
        }
    }
}

/// Convert an alphabet position to an index.
pub(crate) fn position_to_index<I: IndexType>(
    position: usize,
    size: usize,
) -> STResult<I> {
    I::from_usize(position).ok_or(SymtokError::AlphabetOverflow { size })
}
