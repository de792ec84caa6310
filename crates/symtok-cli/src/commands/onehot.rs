use std::io::Write;

use ndarray::Array3;
use symtok::{OneHotBridge, Tokenizer};

use crate::{
    alphabet_selector::AlphabetSelectorArgs,
    input_output::{InputArgs, OutputArgs, write_row},
};

/// Args for the onehot command.
#[derive(clap::Args, Debug)]
pub struct OnehotArgs {
    #[command(flatten)]
    alphabet: AlphabetSelectorArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl OnehotArgs {
    /// Run the onehot command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let tokenizer = self.alphabet.build_tokenizer()?;
        let lines = self.input.read_lines()?;

        let mut writer = self.output.open_writer()?;
        write_active_channels(&tokenizer, &lines, &mut writer)?;
        writer.flush()?;

        Ok(())
    }
}

/// Push `lines` through the one-hot bridge as one batch, and write the
/// active channel of every column, one output line per position.
///
/// Padding positions show the unknown channel.
fn write_active_channels(
    tokenizer: &Tokenizer<char>,
    lines: &[String],
    writer: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let grid = tokenizer.encode_str_batch(lines);
    let bridge = OneHotBridge::new(tokenizer);
    let tensor: Array3<f32> = bridge.to_onehot(&grid)?;
    log::info!("one-hot shape: {:?}", tensor.dim());

    let channels = bridge.to_indices(&tensor)?;
    for row in channels.rows() {
        write_row(writer, row.iter())?;
    }
    Ok(())
}
