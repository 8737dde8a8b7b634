//! Parse the `/proc/[pid]/stat` section of proc(5) and generate a record
//! type and a parser for it.

pub mod docs;
pub mod parser;
pub mod record;
pub mod source;

#[cfg(test)]
mod tests;

use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Settings for the generator.
///
/// The default values describe the proc(5) manual page.
#[derive(Clone, Debug)]
pub struct Config {
    /// Prefix of the line that starts the section.
    pub marker: String,

    /// Name of the document, used in the header of the generated code.
    pub source_name: String,

    /// Maximum width of the documentation lines.
    pub wrap_width: usize,

    /// Number of leading fields not handled by the generated parser.
    pub reserved_fields: usize,

    /// Name of the record type.
    pub record_name: String,

    /// Name of the enum to identify fields of the record.
    pub field_enum: String,

    /// Field with the process state codes.
    pub state_field: String,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            marker: "/proc/[pid]/stat".into(),
            source_name: "proc(5)".into(),
            wrap_width: 72,
            reserved_fields: 2,
            record_name: "ProcStat".into(),
            field_enum: "StatField".into(),
            state_field: "state".into(),
        }
    }
}

/// Errors found when the source is parsed.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("section {marker:?} not found")]
    MissingSection { marker: String },

    #[error("malformed field header: {line:?}")]
    MalformedHeader { line: String },

    #[error("unknown format specifier {specifier:?} for field {field:?}")]
    UnknownSpecifier { field: String, specifier: String },

    #[error("field {field:?} is defined more than once")]
    DuplicateField { field: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Types for the fields of the record.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScalarType {
    I32,
    U32,
    I64,
    U64,
    Text,
    Char,
}

impl ScalarType {
    /// Returns the type for a scanf(3) format specifier.
    pub fn from_specifier(specifier: &str) -> Option<ScalarType> {
        let ty = match specifier {
            "%d" => ScalarType::I32,
            "%u" => ScalarType::U32,
            "%ld" | "%lld" => ScalarType::I64,
            "%lu" | "%llu" => ScalarType::U64,
            "%s" => ScalarType::Text,
            "%c" => ScalarType::Char,
            _ => return None,
        };

        Some(ty)
    }

    /// Rust type for the record member.
    pub fn rust_type(self) -> &'static str {
        match self {
            ScalarType::I32 => "i32",
            ScalarType::U32 => "u32",
            ScalarType::I64 => "i64",
            ScalarType::U64 => "u64",
            ScalarType::Text => "String",
            ScalarType::Char => "char",
        }
    }
}

/// A line in the documentation of a field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocLine {
    pub indent: usize,
    pub text: String,
}

impl DocLine {
    pub fn text<S: Into<String>>(text: S) -> DocLine {
        DocLine {
            indent: 0,
            text: text.into(),
        }
    }

    /// Entry of a list of codes, like `R  Running`.
    pub fn entry(code: &str, description: &str) -> DocLine {
        DocLine {
            indent: 2,
            text: format!("{}  {}", code, description),
        }
    }

    pub fn blank() -> DocLine {
        DocLine::text("")
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// A field of the record, extracted from its block in the document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub index: usize,
    pub raw_name: String,
    /// Variant in the field enum. Members of the record use `raw_name`.
    pub exported_name: String,
    pub scalar_type: ScalarType,
    pub documentation: Vec<DocLine>,
}

/// Read the document from `input`, and write the generated code to `output`.
///
/// Nothing is written if the document can't be parsed.
pub fn generate(
    input: impl BufRead,
    mut output: impl Write,
    config: &Config,
) -> Result<(), GenerateError> {
    let fields = source::parse_fields(input, config)?;

    let mut code = Vec::new();
    record::generate_record(&mut code, &fields, config)?;
    parser::generate_parser(&mut code, &fields, config)?;

    output.write_all(&code)?;
    output.flush()?;

    Ok(())
}
