use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of the underlying line source.
///
/// Malformed markup is never an error: the lexer always degrades to a more
/// generic token kind. Only I/O problems end up here.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("read error at line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
}

impl ParseError {
    /// Line on which the source failed, if the failure happened mid-read.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::Read { line, .. } => Some(*line),
            ParseError::Open { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;
