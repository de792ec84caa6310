use ndarray::{Array2, Array3, ArrayView1, s};
use num_traits::{One, Zero};

use crate::{
    alloc::vec::Vec,
    batch::IndexGrid,
    errors::{STResult, SymtokError},
    lookup::position_to_index,
    tokenizer::Tokenizer,
    types::{IndexType, Symbol},
};

/// Element types usable in one-hot tensors.
pub trait OneHotValue: Clone + Zero + One + PartialEq {}

impl<F> OneHotValue for F where F: Clone + Zero + One + PartialEq {}

/// How the decode direction treats malformed lanes.
///
/// A lane is the channel vector at one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OneHotPolicy {
    /// Exactly one channel must be active.
    #[default]
    Strict,

    /// The lowest active channel wins; at least one must be active.
    FirstActive,
}

/// One-hot conversion for a [`Tokenizer`].
///
/// The bridge borrows its tokenizer; it is `Copy` for every symbol type.
#[derive(Debug)]
pub struct OneHotBridge<'t, S: Symbol, I: IndexType> {
    tokenizer: &'t Tokenizer<S, I>,
    policy: OneHotPolicy,
}

impl<S: Symbol, I: IndexType> Clone for OneHotBridge<'_, S, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Symbol, I: IndexType> Copy for OneHotBridge<'_, S, I> {}

impl<'t, S: Symbol, I: IndexType> OneHotBridge<'t, S, I> {
    /// Create a bridge with the [`OneHotPolicy::Strict`] policy.
    pub fn new(tokenizer: &'t Tokenizer<S, I>) -> Self {
        Self {
            tokenizer,
            policy: OneHotPolicy::default(),
        }
    }

    /// Sets the decode policy.
    pub fn with_policy(
        mut self,
        policy: OneHotPolicy,
    ) -> Self {
        self.policy = policy;
        self
    }

    /// The decode policy.
    pub fn policy(&self) -> OneHotPolicy {
        self.policy
    }

    /// The channel count; the tokenizer's alphabet size.
    pub fn channels(&self) -> usize {
        self.tokenizer.len()
    }

    fn channel_of(
        &self,
        index: I,
    ) -> STResult<usize> {
        match index.to_usize() {
            Some(channel) if channel < self.channels() => Ok(channel),
            _ => Err(SymtokError::IndexOutOfRange {
                index: index.to_usize().unwrap_or(usize::MAX),
                len: self.channels(),
            }),
        }
    }

    fn check_channels(
        &self,
        actual: usize,
    ) -> STResult<()> {
        if actual == self.channels() {
            Ok(())
        } else {
            Err(SymtokError::ChannelMismatch {
                expected: self.channels(),
                actual,
            })
        }
    }

    fn resolve_lane<F: OneHotValue>(
        &self,
        lane: ArrayView1<'_, F>,
        position: usize,
    ) -> STResult<usize> {
        let mut active = lane
            .iter()
            .enumerate()
            .filter(|(_, v)| !v.is_zero())
            .map(|(c, _)| c);

        let first = active.next();
        let extra = active.count();

        match (first, self.policy) {
            (Some(channel), OneHotPolicy::Strict) if extra == 0 => Ok(channel),
            (Some(channel), OneHotPolicy::FirstActive) => Ok(channel),
            (first, _) => Err(SymtokError::AmbiguousOneHot {
                position,
                active: first.map_or(0, |_| extra + 1),
            }),
        }
    }

    /// One-hot encode an index grid.
    ///
    /// ## Arguments
    /// * `grid` - a ``(max_len, batch_size)`` grid produced by this tokenizer.
    ///
    /// ## Returns
    /// A ``(alphabet_size, max_len, batch_size)`` tensor; or
    /// [`SymtokError::IndexOutOfRange`] if any index is outside the alphabet.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, grid)))]
    pub fn to_onehot<F: OneHotValue>(
        &self,
        grid: &IndexGrid<I>,
    ) -> STResult<Array3<F>> {
        let (max_len, batch_size) = grid.dim();
        let mut tensor = Array3::zeros((self.channels(), max_len, batch_size));
        for ((i, j), &index) in grid.indexed_iter() {
            tensor[[self.channel_of(index)?, i, j]] = F::one();
        }
        Ok(tensor)
    }

    /// One-hot encode a single-position batch.
    ///
    /// ## Returns
    /// A ``(alphabet_size, batch_size)`` tensor.
    pub fn to_onehot_vector<F: OneHotValue>(
        &self,
        indices: &[I],
    ) -> STResult<Array2<F>> {
        let mut tensor = Array2::zeros((self.channels(), indices.len()));
        for (j, &index) in indices.iter().enumerate() {
            tensor[[self.channel_of(index)?, j]] = F::one();
        }
        Ok(tensor)
    }

    /// Recover the index grid from a one-hot tensor.
    ///
    /// ## Arguments
    /// * `tensor` - a ``(alphabet_size, max_len, batch_size)`` tensor.
    ///
    /// ## Returns
    /// The ``(max_len, batch_size)`` grid of active channels; or
    /// * [`SymtokError::ChannelMismatch`] - the channel axis is the wrong size.
    /// * [`SymtokError::AmbiguousOneHot`] - a lane violates the policy.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, tensor)))]
    pub fn to_indices<F: OneHotValue>(
        &self,
        tensor: &Array3<F>,
    ) -> STResult<IndexGrid<I>> {
        let (channels, max_len, batch_size) = tensor.dim();
        self.check_channels(channels)?;

        let mut grid = Array2::zeros((max_len, batch_size));
        for i in 0..max_len {
            for j in 0..batch_size {
                let channel = self.resolve_lane(tensor.slice(s![.., i, j]), i * batch_size + j)?;
                grid[[i, j]] = position_to_index(channel, channels)?;
            }
        }
        Ok(grid)
    }

    /// Recover the symbol grid from a one-hot tensor.
    ///
    /// Equivalent to decoding the grid from [`to_indices`](Self::to_indices).
    pub fn to_symbols<F: OneHotValue>(
        &self,
        tensor: &Array3<F>,
    ) -> STResult<Array2<S>> {
        let alphabet = self.tokenizer.alphabet();
        let grid = self.to_indices(tensor)?;
        // Channels were bounds-checked against the alphabet size.
        Ok(grid.map(|&index| alphabet[index.to_usize().unwrap_or_default()].clone()))
    }

    /// Recover the symbols of a single-position batch.
    ///
    /// ## Arguments
    /// * `tensor` - a ``(alphabet_size, batch_size)`` tensor.
    pub fn to_symbols_vector<F: OneHotValue>(
        &self,
        tensor: &Array2<F>,
    ) -> STResult<Vec<S>> {
        let (channels, _) = tensor.dim();
        self.check_channels(channels)?;

        let alphabet = self.tokenizer.alphabet();
        tensor
            .columns()
            .into_iter()
            .enumerate()
            .map(|(j, lane)| -> STResult<S> {
                Ok(alphabet[self.resolve_lane(lane, j)?].clone())
            })
            .collect()
    }
}
