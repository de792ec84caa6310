use core::fmt::{Display, Formatter};

use crate::{
    alloc::{string::String, vec::Vec},
    batch::{IndexGrid, pad_columns},
    errors::{STResult, SymtokError},
    lookup::{LookupStrategy, SymbolLookup},
    tokenizer::TokenizerOptions,
    types::{IndexType, Symbol},
};

/// Bidirectional symbol tokenizer.
///
/// Maps symbols of a fixed alphabet to dense 0-based indices and back.
///
/// Encoding is total: any symbol outside the alphabet encodes to
/// [`unknown_index`](Self::unknown_index). Decoding is strict: an index
/// outside ``0..len()`` is a [`SymtokError::IndexOutOfRange`].
#[derive(Debug, Clone, PartialEq)]
pub struct Tokenizer<S: Symbol, I: IndexType = u32> {
    alphabet: Vec<S>,
    lookup: SymbolLookup<S, I>,
    unknown_symbol: S,
    unknown_index: I,
}

impl<S: Symbol, I: IndexType> Tokenizer<S, I> {
    /// Build a tokenizer with default [`TokenizerOptions`].
    ///
    /// See [`TokenizerOptions::build`].
    pub fn new(
        alphabet: impl IntoIterator<Item = S>,
        unknown: S,
    ) -> STResult<Self> {
        TokenizerOptions::default().build(alphabet, unknown)
    }

    pub(crate) fn from_parts(
        alphabet: Vec<S>,
        lookup: SymbolLookup<S, I>,
        unknown_symbol: S,
        unknown_index: I,
    ) -> Self {
        Self {
            alphabet,
            lookup,
            unknown_symbol,
            unknown_index,
        }
    }

    /// The effective alphabet, in index order.
    pub fn alphabet(&self) -> &[S] {
        &self.alphabet
    }

    /// The effective alphabet size.
    pub fn len(&self) -> usize {
        self.alphabet.len()
    }

    /// Always false; construction rejects empty alphabets.
    pub fn is_empty(&self) -> bool {
        self.alphabet.is_empty()
    }

    /// The unknown symbol.
    pub fn unknown_symbol(&self) -> &S {
        &self.unknown_symbol
    }

    /// The index of the unknown symbol; also the batch padding value.
    pub fn unknown_index(&self) -> I {
        self.unknown_index
    }

    /// The concrete lookup strategy in use.
    pub fn lookup_strategy(&self) -> LookupStrategy {
        self.lookup.strategy()
    }

    /// Is this symbol in the alphabet?
    pub fn contains(
        &self,
        symbol: &S,
    ) -> bool {
        self.lookup.contains(symbol)
    }

    /// Encode a single symbol.
    #[inline(always)]
    pub fn encode_scalar(
        &self,
        symbol: &S,
    ) -> I {
        self.lookup.get(symbol)
    }

    /// Encode a sequence of symbols, element-wise.
    pub fn encode_sequence(
        &self,
        symbols: &[S],
    ) -> Vec<I> {
        symbols.iter().map(|s| self.encode_scalar(s)).collect()
    }

    /// Encode a sequence of sequences, preserving its shape.
    pub fn encode_nested<Q: AsRef<[S]>>(
        &self,
        batch: &[Q],
    ) -> Vec<Vec<I>> {
        batch
            .iter()
            .map(|seq| self.encode_sequence(seq.as_ref()))
            .collect()
    }

    /// Encode a batch of sequences into a padded ``(max_len, batch_size)`` grid.
    ///
    /// Column `j` holds the encoding of `batch[j]`, padded with
    /// [`unknown_index`](Self::unknown_index).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, batch)))]
    pub fn encode_batch<Q: AsRef<[S]>>(
        &self,
        batch: &[Q],
    ) -> IndexGrid<I> {
        pad_columns(&self.encode_nested(batch), self.unknown_index)
    }

    /// Get the alphabet entry for an index.
    pub fn symbol(
        &self,
        index: I,
    ) -> STResult<&S> {
        index
            .to_usize()
            .and_then(|idx| self.alphabet.get(idx))
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Decode a single index.
    pub fn decode_scalar(
        &self,
        index: I,
    ) -> STResult<S> {
        self.symbol(index).cloned()
    }

    /// Decode a sequence of indices, element-wise.
    pub fn decode_sequence(
        &self,
        indices: &[I],
    ) -> STResult<Vec<S>> {
        indices.iter().map(|&idx| self.decode_scalar(idx)).collect()
    }

    /// Decode a sequence of index sequences, preserving its shape.
    pub fn decode_nested<Q: AsRef<[I]>>(
        &self,
        batch: &[Q],
    ) -> STResult<Vec<Vec<S>>> {
        batch
            .iter()
            .map(|seq| self.decode_sequence(seq.as_ref()))
            .collect()
    }

    /// Decode a padded grid into one sequence per column.
    ///
    /// Padding is not stripped; it decodes to the unknown symbol.
    pub fn decode_batch(
        &self,
        grid: &IndexGrid<I>,
    ) -> STResult<Vec<Vec<S>>> {
        grid.columns()
            .into_iter()
            .map(|column| {
                column
                    .iter()
                    .map(|&idx| self.decode_scalar(idx))
                    .collect::<STResult<Vec<S>>>()
            })
            .collect()
    }

    fn out_of_range(
        &self,
        index: I,
    ) -> SymtokError {
        SymtokError::IndexOutOfRange {
            index: index.to_usize().unwrap_or(usize::MAX),
            len: self.len(),
        }
    }
}

/// String conveniences for character alphabets.
impl<I: IndexType> Tokenizer<char, I> {
    /// Encode the characters of a string.
    pub fn encode_str(
        &self,
        text: &str,
    ) -> Vec<I> {
        text.chars().map(|c| self.encode_scalar(&c)).collect()
    }

    /// Encode a batch of strings into a padded grid.
    ///
    /// Same layout as [`encode_batch`](Self::encode_batch).
    pub fn encode_str_batch<T: AsRef<str>>(
        &self,
        batch: &[T],
    ) -> IndexGrid<I> {
        let columns: Vec<Vec<I>> = batch.iter().map(|t| self.encode_str(t.as_ref())).collect();
        pad_columns(&columns, self.unknown_index)
    }

    /// Decode indices into a string.
    pub fn decode_to_string(
        &self,
        indices: &[I],
    ) -> STResult<String> {
        indices.iter().map(|&idx| self.decode_scalar(idx)).collect()
    }
}

fn short_type_name<T: ?Sized>() -> &'static str {
    let name = core::any::type_name::<T>();
    name.rsplit("::").next().unwrap_or(name)
}

impl<S: Symbol, I: IndexType> Display for Tokenizer<S, I> {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> core::fmt::Result {
        write!(
            f,
            "Tokenizer<{}>(alphabet_size={}, unknown={:?})",
            short_type_name::<S>(),
            self.len(),
            self.unknown_symbol,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        alloc::{format, string::ToString, vec},
        tokenizer::DuplicatePolicy,
        types::{check_is_send, check_is_sync},
    };

    fn dna() -> Tokenizer<char> {
        Tokenizer::new(['A', 'C', 'G', 'T'], 'N').unwrap()
    }

    #[test]
    fn test_unknown_prepended() {
        let tok = dna();
        check_is_send(&tok);
        check_is_sync(&tok);

        assert_eq!(tok.alphabet(), &['N', 'A', 'C', 'G', 'T']);
        assert_eq!(tok.len(), 5);
        assert!(!tok.is_empty());
        assert_eq!(tok.unknown_symbol(), &'N');
        assert_eq!(tok.unknown_index(), 0);
        assert_eq!(tok.lookup_strategy(), LookupStrategy::Dense);

        assert_eq!(tok.encode_scalar(&'A'), 1);
        assert_eq!(tok.encode_scalar(&'N'), 0);
        assert_eq!(tok.encode_scalar(&'Z'), 0);
        assert!(tok.contains(&'T'));
        assert!(!tok.contains(&'Z'));
    }

    #[test]
    fn test_unknown_already_present() {
        let tok: Tokenizer<char, u8> = Tokenizer::new(['A', 'C', '?', 'G'], '?').unwrap();
        assert_eq!(tok.alphabet(), &['A', 'C', '?', 'G']);
        assert_eq!(tok.unknown_index(), 2);
        assert_eq!(tok.encode_scalar(&'x'), 2);
        assert_eq!(tok.decode_scalar(2).unwrap(), '?');
    }

    #[test]
    fn test_duplicates_last_wins() {
        let tok: Tokenizer<char> = Tokenizer::new(['a', 'b', 'a'], '?').unwrap();

        // Both positions stay decodable; encode only reaches the last.
        assert_eq!(tok.alphabet(), &['?', 'a', 'b', 'a']);
        assert_eq!(tok.encode_scalar(&'a'), 3);
        assert_eq!(tok.decode_scalar(1).unwrap(), 'a');
        assert_eq!(tok.decode_scalar(3).unwrap(), 'a');
    }

    #[test]
    fn test_duplicate_unknown_resolves_to_first() {
        let tok: Tokenizer<char> = TokenizerOptions::default()
            .with_duplicates(DuplicatePolicy::LastWins)
            .build(['?', 'a', '?'], '?')
            .unwrap();
        assert_eq!(tok.unknown_index(), 0);
        assert_eq!(tok.encode_scalar(&'z'), 0);
        assert_eq!(tok.encode_scalar(&'?'), 2);
        assert_eq!(tok.decode_scalar(tok.encode_scalar(&'?')).unwrap(), '?');
    }

    #[test]
    fn test_decode_out_of_range() {
        let tok = dna();
        assert_eq!(tok.decode_scalar(4).unwrap(), 'T');
        assert_eq!(
            tok.decode_scalar(5),
            Err(SymtokError::IndexOutOfRange { index: 5, len: 5 })
        );
        assert_eq!(
            tok.decode_sequence(&[1, 2, 99]),
            Err(SymtokError::IndexOutOfRange { index: 99, len: 5 })
        );
    }

    #[test]
    fn test_sequences() {
        let tok = dna();
        let symbols: Vec<char> = "GATTACA".chars().collect();
        let indices = tok.encode_sequence(&symbols);
        assert_eq!(indices, vec![3, 1, 4, 4, 1, 2, 1]);
        assert_eq!(tok.decode_sequence(&indices).unwrap(), symbols);

        assert!(tok.encode_sequence(&[]).is_empty());

        let nested = vec![vec!['A'], vec![], vec!['C', 'X']];
        let encoded = tok.encode_nested(&nested);
        assert_eq!(encoded, vec![vec![1], vec![], vec![2, 0]]);
        assert_eq!(
            tok.decode_nested(&encoded).unwrap(),
            vec![vec!['A'], vec![], vec!['C', 'N']]
        );
    }

    #[test]
    fn test_encode_batch() {
        let tok = dna();
        let grid = tok.encode_batch(&[vec!['A', 'C'], vec!['G', 'T', 'A']]);

        assert_eq!(grid.dim(), (3, 2));
        assert_eq!(grid.column(0).to_vec(), vec![1, 2, 0]);
        assert_eq!(grid.column(1).to_vec(), vec![3, 4, 1]);

        assert_eq!(
            tok.decode_batch(&grid).unwrap(),
            vec![vec!['A', 'C', 'N'], vec!['G', 'T', 'A']]
        );
    }

    #[test]
    fn test_padding_matches_unknown() {
        let tok = dna();
        let grid = tok.encode_batch(&[vec!['A', 'Z'], vec!['A']]);
        // A genuine unknown and a pad cell are the same value.
        assert_eq!(grid[[1, 0]], grid[[1, 1]]);
        assert_eq!(grid[[1, 1]], tok.unknown_index());
    }

    #[test]
    fn test_encode_batch_edges() {
        let tok = dna();

        let empty: [Vec<char>; 0] = [];
        let grid = tok.encode_batch(&empty);
        assert_eq!(grid.dim(), (0, 0));
        assert!(tok.decode_batch(&grid).unwrap().is_empty());

        let grid = tok.encode_batch(&[vec!['A', 'C', 'G'], vec![], vec!['T']]);
        assert_eq!(grid.dim(), (3, 3));
        assert_eq!(grid.column(1).to_vec(), vec![0, 0, 0]);
        assert_eq!(grid.column(2).to_vec(), vec![4, 0, 0]);

        let grid = tok.encode_batch(&[Vec::<char>::new(), vec![]]);
        assert_eq!(grid.dim(), (0, 2));
    }

    #[test]
    fn test_strings() {
        let tok = dna();
        assert_eq!(tok.encode_str("CAT"), vec![2, 1, 4]);
        assert_eq!(tok.decode_to_string(&[2, 1, 4, 0]).unwrap(), "CATN");

        let grid = tok.encode_str_batch(&["AC", "GTA"]);
        assert_eq!(grid, tok.encode_batch(&[vec!['A', 'C'], vec!['G', 'T', 'A']]));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            dna().to_string(),
            "Tokenizer<char>(alphabet_size=5, unknown='N')"
        );

        let tok: Tokenizer<String, u16> =
            Tokenizer::new(["the".to_string(), "cat".to_string()], "<unk>".to_string()).unwrap();
        assert_eq!(
            format!("{tok}"),
            "Tokenizer<String>(alphabet_size=3, unknown=\"<unk>\")"
        );
    }

    #[test]
    fn test_byte_symbols() {
        let tok: Tokenizer<u8, u16> = Tokenizer::new(b"ACGT".iter().copied(), b'N').unwrap();
        assert_eq!(tok.lookup_strategy(), LookupStrategy::Dense);
        assert_eq!(tok.encode_sequence(b"GAZ"), vec![3, 1, 0]);
        assert_eq!(tok.decode_sequence(&[4, 0]).unwrap(), b"TN".to_vec());
    }
}
