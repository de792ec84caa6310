use crate::{
    alloc::{format, vec::Vec},
    errors::{STResult, SymtokError},
    lookup::{LookupStrategy, SymbolLookup, position_to_index},
    tokenizer::Tokenizer,
    types::{IndexType, STHashMap, Symbol, hash_map_with_capacity},
};

/// How construction treats a symbol that occurs more than once in the alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Keep every entry in the alphabet; the lookup resolves
    /// the symbol to its last position.
    ///
    /// Earlier positions stay decodable but are unreachable by encode.
    #[default]
    LastWins,

    /// Fail construction with [`SymtokError::DuplicateSymbol`].
    Reject,
}

/// Options for configuring a [`Tokenizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenizerOptions {
    /// Lookup strategy.
    pub lookup: LookupStrategy,

    /// Duplicate symbol policy.
    pub duplicates: DuplicatePolicy,
}

impl TokenizerOptions {
    /// Sets the lookup strategy.
    pub fn with_lookup(
        mut self,
        lookup: LookupStrategy,
    ) -> Self {
        self.lookup = lookup;
        self
    }

    /// Sets the duplicate symbol policy.
    pub fn with_duplicates(
        mut self,
        duplicates: DuplicatePolicy,
    ) -> Self {
        self.duplicates = duplicates;
        self
    }

    /// Build a [`Tokenizer`] for the given alphabet and unknown symbol.
    ///
    /// If `unknown` is not in `alphabet`, it is prepended and takes index `0`;
    /// otherwise the unknown index is its first position in `alphabet`.
    ///
    /// ## Arguments
    /// * `alphabet` - the ordered alphabet symbols.
    /// * `unknown` - the symbol standing in for out-of-alphabet input.
    ///
    /// ## Returns
    /// The tokenizer, or:
    /// * [`SymtokError::EmptyAlphabet`] - no addressable symbols.
    /// * [`SymtokError::AlphabetOverflow`] - `I` cannot index the alphabet.
    /// * [`SymtokError::DuplicateSymbol`] - a repeat under [`DuplicatePolicy::Reject`].
    /// * [`SymtokError::DenseLookupUnavailable`] - see [`LookupStrategy::Dense`].
    pub fn build<S, I>(
        &self,
        alphabet: impl IntoIterator<Item = S>,
        unknown: S,
    ) -> STResult<Tokenizer<S, I>>
    where
        S: Symbol,
        I: IndexType,
    {
        let mut alphabet: Vec<S> = alphabet.into_iter().collect();

        let unknown_position = match alphabet.iter().position(|s| s == &unknown) {
            Some(position) => position,
            None => {
                alphabet.insert(0, unknown.clone());
                0
            }
        };

        if alphabet.is_empty() {
            return Err(SymtokError::EmptyAlphabet);
        }

        self.check_duplicates(&alphabet)?;

        let unknown_index: I = position_to_index(unknown_position, alphabet.len())?;
        let lookup = SymbolLookup::build(&alphabet, unknown_index, self.lookup)?;

        log::debug!(
            "built tokenizer: {} symbols ({} distinct), {} lookup, unknown {:?} at {}",
            alphabet.len(),
            lookup.distinct_len(),
            lookup.strategy(),
            unknown,
            unknown_index,
        );

        Ok(Tokenizer::from_parts(
            alphabet,
            lookup,
            unknown,
            unknown_index,
        ))
    }

    fn check_duplicates<S: Symbol>(
        &self,
        alphabet: &[S],
    ) -> STResult<()> {
        let mut first_positions: STHashMap<&S, usize> = hash_map_with_capacity(alphabet.len());
        for (position, symbol) in alphabet.iter().enumerate() {
            let Some(&first) = first_positions.get(symbol) else {
                first_positions.insert(symbol, position);
                continue;
            };
            match self.duplicates {
                DuplicatePolicy::Reject => {
                    return Err(SymtokError::DuplicateSymbol {
                        symbol: format!("{symbol:?}"),
                        first,
                        second: position,
                    });
                }
                DuplicatePolicy::LastWins => {
                    log::warn!(
                        "duplicate symbol {symbol:?}: position {position} shadows position {first}"
                    );
                }
            }
        }
        Ok(())
    }
}
