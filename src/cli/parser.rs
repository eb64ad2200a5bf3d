use clap::Parser;
use std::path::PathBuf;

/// Command-line interface definition for daybook-export
/// CLI application to flatten BabyDaybook backups into CSV
#[derive(Parser)]
#[command(
    name = "daybook-export",
    version = env!("CARGO_PKG_VERSION"),
    about = "Extract BabyDaybook activity logs from a SQLite backup into a flat CSV file",
    long_about = None
)]
pub struct Cli {
    /// Path to the .db backup file from the app
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,

    /// Path for the extracted output (a new file will be created)
    #[arg(short = 'o', long = "output")]
    pub output: PathBuf,

    /// Dump every column of the source table verbatim (no header, no conversion)
    #[arg(long = "raw")]
    pub raw: bool,
}
