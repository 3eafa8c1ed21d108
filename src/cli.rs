//! CLI definition using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "oceans1876")]
#[command(version)]
#[command(about = "API server for the HMS Challenger expedition data")]
pub struct Cli {
    /// Defaults to `serve`
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run migrations and serve the HTTP API
    Serve,

    /// Create the first superuser and load the expedition data set
    Import {
        /// Load the small `Oceans1876_subset` species and stations
        #[arg(long)]
        testing: bool,

        /// Directory holding `Oceans1876/` and `HathiTrust/`
        #[arg(long, default_value = "data", env = "DATA_DIR")]
        data_dir: PathBuf,
    },
}
