//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

use crate::alloc::string::String;

/// A type that can be used as an index into a tokenizer alphabet.
///
/// These are constrained to be unsigned primitive integers;
/// such that the largest index in an alphabet is at most `I::max()`.
pub trait IndexType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Unsigned
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
{
}

impl<I> IndexType for I where
    I: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Unsigned
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
{
}

/// A type that can be used as an alphabet symbol.
///
/// Symbols with a small, bounded ordinal space (bytes, ASCII characters)
/// report it through [`Symbol::DENSE_SPAN`] and [`Symbol::ordinal`];
/// this lets a tokenizer replace its hash map with a flat table.
pub trait Symbol: 'static + Clone + Eq + Hash + Debug + Send + Sync {
    /// The size of the dense ordinal space, if this type has one.
    const DENSE_SPAN: Option<usize> = None;

    /// The ordinal of this symbol in `0..DENSE_SPAN`, if it has one.
    fn ordinal(&self) -> Option<usize> {
        None
    }
}

impl Symbol for u8 {
    const DENSE_SPAN: Option<usize> = Some(256);

    #[inline(always)]
    fn ordinal(&self) -> Option<usize> {
        Some(*self as usize)
    }
}

/// Only the ASCII range is dense; everything else hashes.
impl Symbol for char {
    const DENSE_SPAN: Option<usize> = Some(128);

    #[inline(always)]
    fn ordinal(&self) -> Option<usize> {
        self.is_ascii().then_some(*self as usize)
    }
}

macro_rules! hashed_symbol {
    ($($t:ty),* $(,)?) => {
        $(impl Symbol for $t {})*
    };
}

hashed_symbol!(u16, u32, u64, String, &'static str);

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type STHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> STHashMap<K, V> {
            STHashMap::with_capacity(capacity)
        }

    } else if #[cfg(feature = "foldhash")] {
        /// Type Alias for hash maps in this crate.
        pub type STHashMap<K, V> = foldhash::HashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> STHashMap<K, V> {
            foldhash::HashMapExt::with_capacity(capacity)
        }

    } else if #[cfg(feature = "std")] {
        /// Type Alias for hash maps in this crate.
        pub type STHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> STHashMap<K, V> {
            STHashMap::with_capacity(capacity)
        }

    } else if #[cfg(feature = "no_std")] {
        /// Type Alias for hash maps in this crate.
        pub type STHashMap<K, V> = hashbrown::HashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> STHashMap<K, V> {
            STHashMap::with_capacity(capacity)
        }

    } else {
        /// This error exists to give users more direct feedback
        /// on the feature configuration over the other compilation
        /// errors they would encounter from lacking the types.
        compile_error!("not(\"std\") requires \"no_std\" feature");
    }
}

/// Static check that a type is `Send`.
pub fn check_is_send<S: Send>(_: &S) {}

/// Static check that a type is `Sync`.
pub fn check_is_sync<S: Sync>(_: &S) {}
