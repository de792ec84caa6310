use symtok::{DuplicatePolicy, LookupStrategy, Tokenizer, TokenizerOptions};

/// Lookup strategy argument values.
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default)]
pub enum LookupArg {
    /// Dense table for ASCII alphabets; hash map otherwise.
    #[default]
    Auto,

    /// Dense ASCII table; fails for non-ASCII alphabets.
    Dense,

    /// Hash map.
    Hashed,
}

impl From<LookupArg> for LookupStrategy {
    fn from(arg: LookupArg) -> Self {
        match arg {
            LookupArg::Auto => LookupStrategy::Auto,
            LookupArg::Dense => LookupStrategy::Dense,
            LookupArg::Hashed => LookupStrategy::Hashed,
        }
    }
}

/// Alphabet selector arg group.
#[derive(clap::Args, Debug)]
pub struct AlphabetSelectorArgs {
    /// Alphabet characters, in index order.
    #[arg(long, default_value = "ACGT")]
    alphabet: String,

    /// Unknown symbol; prepended to the alphabet if absent.
    #[arg(long, default_value_t = 'N')]
    unknown: char,

    /// Symbol lookup strategy.
    #[arg(long, value_enum, default_value_t = LookupArg::Auto)]
    lookup: LookupArg,

    /// Fail if the alphabet repeats a character.
    #[arg(long)]
    reject_duplicates: bool,
}

impl AlphabetSelectorArgs {
    /// The configured tokenizer options.
    pub fn options(&self) -> TokenizerOptions {
        TokenizerOptions::default()
            .with_lookup(self.lookup.into())
            .with_duplicates(if self.reject_duplicates {
                DuplicatePolicy::Reject
            } else {
                DuplicatePolicy::LastWins
            })
    }

    /// Build the tokenizer.
    pub fn build_tokenizer(&self) -> Result<Tokenizer<char>, Box<dyn std::error::Error>> {
        let tokenizer = self
            .options()
            .build(self.alphabet.chars(), self.unknown)?;
        log::info!("{tokenizer} ({} lookup)", tokenizer.lookup_strategy());
        Ok(tokenizer)
    }
}
