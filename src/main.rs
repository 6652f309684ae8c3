//! # HullOS
//!
//! Desktop host for the HullOS interpreter. Script typed at the prompt
//! drives a simulated robot.
//!

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod term;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Script file sent to the robot before the prompt opens
    pub script: Option<PathBuf>,
    /// File holding the persistent program store
    #[arg(long, default_value = "hullos.eeprom")]
    pub eeprom: PathBuf,
    /// Initial diagnostic level (1 confirm, 2 offsets, 4 echo, 8 listing)
    #[arg(long, default_value_t = 0)]
    pub diagnostics: u8,
    /// Size of the program store in bytes
    #[arg(long, default_value_t = 1024)]
    pub store_size: usize,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
    term::main(Cli::parse());
}
