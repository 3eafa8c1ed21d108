use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    /// Input file could not be opened or read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// File being read
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON input does not match the expected layout.
    #[error("Failed to parse {}: {source}", path.display())]
    Json {
        /// File being parsed
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// CSV input does not match the expected layout.
    #[error("Failed to parse {}: {source}", path.display())]
    Csv {
        /// File being parsed
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A record parsed but holds a value that cannot be stored.
    #[error("Invalid record {record}: {reason}")]
    InvalidRecord {
        /// Identifier of the offending record
        record: String,
        /// Why the record was rejected
        reason: String,
    },
}
