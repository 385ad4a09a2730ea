//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::rate_file::DEFAULT_RATES_FILE;

/// Console currency converter backed by a `CODE:RATE` file.
#[derive(Debug, Clone, Parser)]
#[command(name = "valut", author, version, about)]
pub struct Cli {
    /// File the rates are loaded from and saved to.
    #[arg(short = 'f', long, env = "VALUT_RATES_FILE", default_value = DEFAULT_RATES_FILE)]
    pub rates_file: PathBuf,

    /// Log filter, e.g. `info` or `valut_converter=debug`.
    #[arg(long, env = "VALUT_LOG", default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Reads `.env` (if present) and then the process arguments.
    pub fn load() -> Self {
        let _ = dotenvy::dotenv();
        Self::parse()
    }
}
