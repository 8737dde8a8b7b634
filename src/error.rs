//! Errors from the parser.

use crate::StatField;
use std::io;
use std::num::ParseIntError;
use thiserror::Error;

/// Errors found when a line from `/proc/[pid]/stat` is parsed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("\"pid\" field not found")]
    MissingPid,

    #[error("\"comm\" field not found")]
    MissingComm,

    #[error("invalid \"{field}\" value \"{value}\"")]
    InvalidValue {
        field: StatField,
        value: String,
        #[source]
        source: Option<ParseIntError>,
    },
}

impl ParseError {
    pub(crate) fn invalid(field: StatField, value: &str, source: Option<ParseIntError>) -> Self {
        ParseError::InvalidValue {
            field,
            value: value.to_owned(),
            source,
        }
    }

    /// Field that could not be parsed.
    pub fn field(&self) -> StatField {
        match self {
            ParseError::MissingPid => StatField::Pid,
            ParseError::MissingComm => StatField::Comm,
            ParseError::InvalidValue { field, .. } => *field,
        }
    }
}

/// Errors from reading a stat file.
#[derive(Debug, Error)]
pub enum Error {
    #[error("error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("error parsing {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: ParseError,
    },
}
