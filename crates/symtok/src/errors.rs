//! # Error Types

use crate::alloc::string::String;

/// Errors from symtok operations.
///
/// Encoding never produces an error; unknown input resolves to the
/// unknown index. Decoding and construction are strict.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SymtokError {
    /// The effective alphabet has no addressable symbols.
    #[error("alphabet is empty")]
    EmptyAlphabet,

    /// Alphabet size exceeds the capacity of the target index type.
    #[error("alphabet size ({size}) exceeds index type capacity")]
    AlphabetOverflow {
        /// The alphabet size that exceeded the capacity.
        size: usize,
    },

    /// A symbol occurs more than once in the alphabet.
    #[error("duplicate symbol {symbol} at positions {first} and {second}")]
    DuplicateSymbol {
        /// Debug rendering of the repeated symbol.
        symbol: String,

        /// The first position of the symbol.
        first: usize,

        /// The repeated position of the symbol.
        second: usize,
    },

    /// A dense lookup was requested for an alphabet it cannot cover.
    #[error("dense lookup unavailable for this alphabet")]
    DenseLookupUnavailable,

    /// An index outside `0..len` was passed to a decode operation.
    #[error("index {index} out of range for alphabet of size {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,

        /// The alphabet size.
        len: usize,
    },

    /// A one-hot lane did not have exactly one active channel.
    #[error("one-hot lane {position} has {active} active channels")]
    AmbiguousOneHot {
        /// Flat position of the lane (row-major over the non-channel axes).
        position: usize,

        /// Number of active channels found.
        active: usize,
    },

    /// A one-hot tensor channel axis does not match the alphabet size.
    #[error("one-hot channel count ({actual}) does not match alphabet size ({expected})")]
    ChannelMismatch {
        /// The alphabet size.
        expected: usize,

        /// The tensor's channel count.
        actual: usize,
    },
}

/// Result type for symtok operations.
pub type STResult<T> = core::result::Result<T, SymtokError>;
