//! Source parser for the proc(5) manual page.
//!
//! # Document Format
//!
//! The section starts with a line beginning with the marker (usually
//! `/proc/[pid]/stat`), and ends with the first line that is not indented.
//!
//! Every field starts with a header like `(10) minflt  %lu`. The indented
//! lines after the header are the documentation of the field.
//!
//! Blank lines are ignored.

use crate::{docs, Config, DocLine, FieldDescriptor, GenerateError, ScalarType};
use std::collections::HashSet;
use std::io::BufRead;

/// Lines for a single field, before extracting its descriptor.
#[derive(Debug, Default)]
struct Block {
    header: String,
    doc: Vec<DocLine>,
}

/// Read the document and extract the fields of the record.
pub fn parse_fields(
    input: impl BufRead,
    config: &Config,
) -> Result<Vec<FieldDescriptor>, GenerateError> {
    let blocks = read_blocks(input, config)?;

    let mut names = HashSet::new();
    let mut fields = Vec::with_capacity(blocks.len());

    for (index, block) in blocks.into_iter().enumerate() {
        let field = extract_field(index, block, config)?;

        if !names.insert(field.raw_name.clone()) {
            return Err(GenerateError::DuplicateField {
                field: field.raw_name,
            });
        }

        log::debug!(
            "field {}: {} ({:?}), {} doc lines",
            field.index,
            field.raw_name,
            field.scalar_type,
            field.documentation.len()
        );

        fields.push(field);
    }

    Ok(fields)
}

/// Skip to the start of the section, and split it in blocks.
fn read_blocks(input: impl BufRead, config: &Config) -> Result<Vec<Block>, GenerateError> {
    let mut lines = input.lines();

    loop {
        match lines.next() {
            Some(line) => {
                if line?.starts_with(&config.marker) {
                    break;
                }
            }

            None => {
                return Err(GenerateError::MissingSection {
                    marker: config.marker.clone(),
                })
            }
        }
    }

    log::trace!("section {:?} found", config.marker);

    let mut blocks: Vec<Block> = Vec::new();

    for line in lines {
        let line = line?;

        if line.trim().is_empty() {
            continue;
        }

        // The section ends with the first line without indentation.
        if !line.starts_with(char::is_whitespace) {
            break;
        }

        let line = line.trim();

        if line.starts_with('(') && line.contains('%') {
            blocks.push(Block {
                header: line.to_owned(),
                doc: Vec::new(),
            });
        } else if let Some(block) = blocks.last_mut() {
            block.doc.push(DocLine::text(line));
        }
    }

    Ok(blocks)
}

/// Build the descriptor from the header of a block.
fn extract_field(
    index: usize,
    block: Block,
    config: &Config,
) -> Result<FieldDescriptor, GenerateError> {
    let mut tokens = block.header.split_whitespace();

    let (name, specifier) = match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(_), Some(name), Some(specifier)) if is_identifier(name) => (name, specifier),
        _ => {
            return Err(GenerateError::MalformedHeader {
                line: block.header.clone(),
            })
        }
    };

    let scalar_type =
        ScalarType::from_specifier(specifier).ok_or_else(|| GenerateError::UnknownSpecifier {
            field: name.to_owned(),
            specifier: specifier.to_owned(),
        })?;

    Ok(FieldDescriptor {
        index,
        raw_name: name.to_owned(),
        exported_name: exported_name(name),
        scalar_type,
        documentation: docs::reflow(&block.doc, config, name),
    })
}

/// Convert a name like `tty_nr` to `TtyNr`.
pub fn exported_name(raw_name: &str) -> String {
    let mut name = String::with_capacity(raw_name.len());

    for part in raw_name.split('_') {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            name.extend(first.to_uppercase());
            name.extend(chars.flat_map(char::to_lowercase));
        }
    }

    name
}

/// Keywords in lowercase, strict and reserved, for all editions.
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "static", "struct", "super", "trait", "true", "try", "type", "typeof",
    "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Names must be valid Rust identifiers in `snake_case`.
fn is_identifier(name: &str) -> bool {
    let mut bytes = name.bytes();

    matches!(bytes.next(), Some(b'a'..=b'z'))
        && bytes.all(|b| matches!(b, b'a'..=b'z' | b'0'..=b'9' | b'_'))
        && !KEYWORDS.contains(&name)
}
