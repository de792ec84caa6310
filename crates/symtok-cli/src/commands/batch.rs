use std::io::Write;

use crate::{
    alphabet_selector::AlphabetSelectorArgs,
    input_output::{InputArgs, OutputArgs, write_row},
};

/// Args for the batch command.
#[derive(clap::Args, Debug)]
pub struct BatchArgs {
    #[command(flatten)]
    alphabet: AlphabetSelectorArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl BatchArgs {
    /// Run the batch command.
    ///
    /// Each input line is one batch column; each output line is one grid row.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let tokenizer = self.alphabet.build_tokenizer()?;
        let lines = self.input.read_lines()?;

        let grid = tokenizer.encode_str_batch(&lines);
        log::info!("grid shape: {:?}", grid.dim());

        let mut writer = self.output.open_writer()?;
        for row in grid.rows() {
            write_row(&mut writer, row.iter())?;
        }
        writer.flush()?;

        Ok(())
    }
}
