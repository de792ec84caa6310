mod batch;
mod cat;
mod onehot;

/// Subcommands for symtok.
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Encode or decode line by line.
    Cat(cat::CatArgs),

    /// Print the padded index grid of all input lines.
    Batch(batch::BatchArgs),

    /// Round-trip all input lines through a one-hot tensor.
    Onehot(onehot::OnehotArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Cat(cmd) => cmd.run(),
            Commands::Batch(cmd) => cmd.run(),
            Commands::Onehot(cmd) => cmd.run(),
        }
    }
}
