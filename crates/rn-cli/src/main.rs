//! `roadnet` — maintain a national road map from a command script.
//!
//! Reads one command per line (see `rn_cli::parser` for the grammar) from a
//! file or standard input, prints route descriptions to standard output, and
//! reports each failed line as `ERROR n` on standard error.  The exit status
//! is zero once the input is exhausted.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use clap::Parser;

use rn_cli::Session;

#[derive(Parser)]
#[command(name = "roadnet", about = "National road map and route engine")]
struct Args {
    /// Command script to execute; standard input when omitted.
    input: Option<PathBuf>,

    /// Suppress ERROR lines on standard error.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> io::Result<()> {
    pretty_env_logger::init();
    let args = Args::parse();

    let err: Box<dyn Write> = if args.quiet {
        Box::new(io::sink())
    } else {
        Box::new(io::stderr())
    };
    let mut session = Session::new(io::stdout().lock(), err);

    match args.input {
        Some(path) => session.run(BufReader::new(File::open(path)?)),
        None => session.run(io::stdin().lock()),
    }
}
