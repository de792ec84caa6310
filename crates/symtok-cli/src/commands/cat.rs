use std::io::{BufRead, Write};

use symtok::Tokenizer;

use crate::{
    alphabet_selector::AlphabetSelectorArgs,
    input_output::{InputArgs, OutputArgs, write_row},
};

/// Which way a `cat` pass translates each line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatDirection {
    /// Characters in, indices out.
    Encode,

    /// Indices in, characters out.
    Decode,
}

/// Exactly one of `--encode` / `--decode`.
#[derive(clap::Args, Debug)]
#[group(required = true, multiple = false)]
pub struct CatDirectionArgs {
    /// Encode each line to space-separated indices.
    #[arg(long)]
    encode: bool,

    /// Decode each line of space-separated indices to a string.
    #[arg(long)]
    decode: bool,
}

impl From<&CatDirectionArgs> for CatDirection {
    fn from(args: &CatDirectionArgs) -> Self {
        debug_assert!(args.encode != args.decode);
        if args.decode { Self::Decode } else { Self::Encode }
    }
}

/// Args for the cat command.
#[derive(clap::Args, Debug)]
pub struct CatArgs {
    #[command(flatten)]
    alphabet: AlphabetSelectorArgs,

    #[command(flatten)]
    direction: CatDirectionArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl CatArgs {
    /// The requested direction.
    pub fn direction(&self) -> CatDirection {
        CatDirection::from(&self.direction)
    }

    /// Run the cat command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let tokenizer = self.alphabet.build_tokenizer()?;

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        let direction = self.direction();
        log::debug!("cat direction: {direction:?}");
        cat_lines(direction, &mut reader, &mut writer, &tokenizer)
    }
}

/// Translate `reader` line by line, flushing after each line so the
/// command stays usable as an interactive filter.
fn cat_lines(
    direction: CatDirection,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    tokenizer: &Tokenizer<char>,
) -> Result<(), Box<dyn std::error::Error>> {
    for line in reader.lines() {
        let line = line?;
        match direction {
            CatDirection::Encode => write_row(writer, tokenizer.encode_str(&line))?,
            CatDirection::Decode => {
                let indices = line
                    .split_whitespace()
                    .map(str::parse)
                    .collect::<Result<Vec<u32>, _>>()?;
                writeln!(writer, "{}", tokenizer.decode_to_string(&indices)?)?;
            }
        }
        writer.flush()?;
    }
    Ok(())
}
