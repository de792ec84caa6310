#![allow(missing_docs)]

use ndarray::{Array2, Array3};
use symtok::{
    DuplicatePolicy,
    LookupStrategy,
    OneHotBridge,
    OneHotPolicy,
    SymtokError,
    Tokenizer,
    TokenizerOptions,
    layer::TrainableParameters,
};

fn dna() -> Tokenizer<char> {
    Tokenizer::new(['A', 'C', 'G', 'T'], 'N').unwrap()
}

#[test]
fn dna_alphabet() {
    let tok = dna();
    assert_eq!(tok.alphabet(), &['N', 'A', 'C', 'G', 'T']);
    assert_eq!(tok.encode_scalar(&'A'), 1);
    assert_eq!(tok.encode_scalar(&'N'), 0);
    assert_eq!(tok.encode_scalar(&'Z'), 0);
    assert_eq!(
        tok.to_string(),
        "Tokenizer<char>(alphabet_size=5, unknown='N')"
    );
    assert!(!tok.has_trainable_parameters());
}

#[test]
fn dna_batch() {
    let tok = dna();
    let grid = tok.encode_batch(&[vec!['A', 'C'], vec!['G', 'T', 'A']]);
    assert_eq!(grid.dim(), (3, 2));
    assert_eq!(grid.column(0).to_vec(), vec![1, 2, 0]);
    assert_eq!(grid.column(1).to_vec(), vec![3, 4, 1]);

    assert_eq!(grid, tok.encode_str_batch(&["AC", "GTA"]));
}

#[test]
fn dna_onehot_identity() {
    let tok = dna();
    let bridge = OneHotBridge::new(&tok);

    let tensor: Array2<f32> = bridge.to_onehot_vector(&[0, 1, 2, 3, 4]).unwrap();
    assert_eq!(tensor.dim(), (5, 5));
    assert_eq!(tensor, Array2::eye(5));
    assert_eq!(
        bridge.to_symbols_vector(&tensor).unwrap(),
        vec!['N', 'A', 'C', 'G', 'T']
    );
}

#[test]
fn onehot_of_padded_batch() {
    let tok = dna();
    let bridge = OneHotBridge::new(&tok).with_policy(OneHotPolicy::Strict);

    let grid = tok.encode_str_batch(&["GATTACA", "", "TAG"]);
    let tensor: Array3<u8> = bridge.to_onehot(&grid).unwrap();
    assert_eq!(tensor.dim(), (5, 7, 3));
    assert_eq!(tensor.sum(), 7 * 3);

    assert_eq!(bridge.to_indices(&tensor).unwrap(), grid);

    let symbols = bridge.to_symbols(&tensor).unwrap();
    let column: String = symbols.column(2).iter().collect();
    assert_eq!(column, "TAGNNNN");
}

#[test]
fn string_symbols() {
    let words = ["the", "cat", "sat"].map(String::from);
    let tok: Tokenizer<String, u16> = Tokenizer::new(words, "<unk>".to_string()).unwrap();
    assert_eq!(tok.lookup_strategy(), LookupStrategy::Hashed);

    let sentence: Vec<String> = ["the", "dog", "sat"].map(String::from).to_vec();
    let indices = tok.encode_sequence(&sentence);
    assert_eq!(indices, vec![1, 0, 3]);
    assert_eq!(
        tok.decode_sequence(&indices).unwrap(),
        vec!["the", "<unk>", "sat"]
    );
}

#[test]
fn byte_symbols_dense_and_hashed_agree() {
    let alphabet: Vec<u8> = b"ACGT".to_vec();
    let dense: Tokenizer<u8, u8> = TokenizerOptions::default()
        .with_lookup(LookupStrategy::Dense)
        .build(alphabet.clone(), b'N')
        .unwrap();
    let hashed: Tokenizer<u8, u8> = TokenizerOptions::default()
        .with_lookup(LookupStrategy::Hashed)
        .build(alphabet, b'N')
        .unwrap();

    for byte in 0..=255_u8 {
        assert_eq!(dense.encode_scalar(&byte), hashed.encode_scalar(&byte));
    }
}

#[test]
fn duplicate_policies() {
    let tok: Tokenizer<char> = Tokenizer::new("abca".chars(), '?').unwrap();
    assert_eq!(tok.encode_scalar(&'a'), 4);
    assert_eq!(tok.decode_scalar(1).unwrap(), 'a');

    let err = TokenizerOptions::default()
        .with_duplicates(DuplicatePolicy::Reject)
        .build::<char, u32>("abca".chars(), '?')
        .unwrap_err();
    assert!(matches!(err, SymtokError::DuplicateSymbol { first: 1, second: 4, .. }));
}

#[test]
fn decode_is_strict() {
    let tok = dna();
    assert_eq!(
        tok.decode_batch(&Array2::from_elem((2, 2), 9)),
        Err(SymtokError::IndexOutOfRange { index: 9, len: 5 })
    );
}
