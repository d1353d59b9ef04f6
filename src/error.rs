//! Error types for ipsort.

use std::path::PathBuf;

use thiserror::Error;

use crate::Address;

/// Error type for ipsort operations.
///
/// Every variant is terminal for a run. Malformed input lines are never
/// reported here; the loader drops them.
#[derive(Error, Debug)]
pub enum Error {
    /// File could not be opened for reading
    #[error("Error: open {}: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Read failed part way through a file
    #[error("Error: read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output file could not be created
    #[error("Error writing sorted IPs: create {}: {source}", path.display())]
    FileCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Write or flush to the output failed
    #[error("Error writing sorted IPs: write {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Format flag was not an integer
    #[error("Error: format flag must be an integer (0/1), got {0:?}")]
    InvalidFormatFlag(String),

    /// An IPv4 address appears more than once
    #[error("Error: IP({0}) address is duplicated")]
    DuplicateAddress(Address),
}

impl Error {
    /// Process exit status for this error kind.
    ///
    /// Code 2 is left to the argument parser's usage errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::FileOpen { .. } => 3,
            Error::FileRead { .. } => 4,
            Error::FileCreate { .. } => 5,
            Error::FileWrite { .. } => 6,
            Error::InvalidFormatFlag(_) => 7,
            Error::DuplicateAddress(_) => 8,
        }
    }
}

/// Result type alias for ipsort operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn io_err() -> io::Error {
        io::Error::new(io::ErrorKind::Other, "boom")
    }

    #[test]
    fn test_exit_codes_are_distinct() {
        let errors = [
            Error::FileOpen { path: "a".into(), source: io_err() },
            Error::FileRead { path: "a".into(), source: io_err() },
            Error::FileCreate { path: "a".into(), source: io_err() },
            Error::FileWrite { path: "a".into(), source: io_err() },
            Error::InvalidFormatFlag("x".to_string()),
            Error::DuplicateAddress("10.0.0.5".parse().unwrap()),
        ];

        let mut codes: Vec<i32> = errors.iter().map(Error::exit_code).collect();
        assert!(codes.iter().all(|&c| c > 2));
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_duplicate_message() {
        let err = Error::DuplicateAddress("10.0.0.5".parse().unwrap());
        assert_eq!(err.to_string(), "Error: IP(10.0.0.5) address is duplicated");
    }

    #[test]
    fn test_format_flag_message() {
        let err = Error::InvalidFormatFlag("abc".to_string());
        assert!(err
            .to_string()
            .starts_with("Error: format flag must be an integer (0/1)"));
    }
}
