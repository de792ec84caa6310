use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
};

/// Treat a "-" path as standard io.
fn file_path(path: &Option<String>) -> Option<&str> {
    path.as_deref().filter(|p| *p != "-")
}

/// Input argument group.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Optional input file; "-" may be used to indicate stdin.
    #[clap(long, default_value = None)]
    pub input: Option<String>,
}

impl InputArgs {
    /// Open a reader for the input.
    pub fn open_reader(&self) -> Result<Box<dyn BufRead>, Box<dyn std::error::Error>> {
        Ok(match file_path(&self.input) {
            None => Box::new(BufReader::new(std::io::stdin().lock())),
            Some(p) => Box::new(BufReader::new(File::open(p)?)),
        })
    }

    /// Read every input line, without line endings.
    pub fn read_lines(&self) -> Result<Vec<String>, Box<dyn std::error::Error>> {
        let lines = self.open_reader()?.lines().collect::<Result<Vec<_>, _>>()?;
        log::info!("read {} lines", lines.len());
        Ok(lines)
    }
}

/// Output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Optional output file; "-" may be used to indicate stdout.
    #[clap(long, default_value = None)]
    pub output: Option<String>,
}

impl OutputArgs {
    /// Open a writer for the output.
    pub fn open_writer(&self) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
        Ok(match file_path(&self.output) {
            Some(p) => Box::new(BufWriter::new(File::create(p)?)),
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }
}

/// Write values separated by single spaces, then a newline.
pub fn write_row<T: std::fmt::Display>(
    writer: &mut dyn Write,
    row: impl IntoIterator<Item = T>,
) -> std::io::Result<()> {
    for (idx, value) in row.into_iter().enumerate() {
        write!(writer, "{}{}", if idx == 0 { "" } else { " " }, value)?;
    }
    writeln!(writer)
}
