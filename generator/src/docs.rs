//! Reflow the documentation of a field to be used as doc comments.

use crate::{Config, DocLine};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Normalize the documentation lines of a field.
///
/// Lists of codes (a single character, followed by its description in the
/// next line) are merged in a single line. Then, every line is wrapped to
/// the width in `config`.
pub fn reflow(lines: &[DocLine], config: &Config, field_name: &str) -> Vec<DocLine> {
    let mut lines = merge_code_lists(lines);

    if field_name == config.state_field {
        compact_state_codes(&mut lines);
    }

    lines
        .iter()
        .flat_map(|line| wrap(line, config.wrap_width))
        .collect()
}

/// Merge single-character lines with the next one.
///
/// An empty line is added after the first one, to separate the first
/// paragraph from the rest of the documentation, unless the lines already
/// contain a separator.
fn merge_code_lists(lines: &[DocLine]) -> Vec<DocLine> {
    let separated = lines.iter().any(DocLine::is_blank);

    let mut output = Vec::with_capacity(lines.len() + 1);
    let mut lines = lines.iter();

    while let Some(line) = lines.next() {
        if output.len() == 1 && !separated {
            output.push(DocLine::blank());
        }

        let code = line.text.trim();
        if code.chars().count() == 1 {
            if let Some(description) = lines.next() {
                output.push(DocLine::entry(code, description.text.trim()));
                continue;
            }
        }

        output.push(line.clone());
    }

    output
}

/// Convert lines like `R.  Running` to `R  Running`.
///
/// Some of the process states are written as an ordered list in the manual
/// page, so they are not merged by `merge_code_lists`.
fn compact_state_codes(lines: &mut [DocLine]) {
    for line in lines.iter_mut().skip(2) {
        if line.indent != 0 {
            continue;
        }

        if let Some((code, description)) = split_state_code(&line.text) {
            *line = DocLine::entry(code, description);
        }
    }
}

/// Split a line with the form `X.  Description`.
fn split_state_code(line: &str) -> Option<(&str, &str)> {
    let bytes = line.as_bytes();

    let is_code = bytes.len() > 4
        && bytes[0].is_ascii_alphabetic()
        && &bytes[1..4] == b".  "
        && bytes[4] != b' ';

    if is_code {
        Some((&line[..1], line[4..].trim()))
    } else {
        None
    }
}

/// Split a line in multiple lines, so the width of each one is less than
/// `width`, minus its indentation.
///
/// Lines are split at the last whitespace before the limit. If a word is
/// longer than the limit, it is kept in its own line.
///
/// A single character is never left alone in a line, since `merge_code_lists`
/// would read it as a code in the next reflow.
pub fn wrap(line: &DocLine, width: usize) -> Vec<DocLine> {
    if line.is_blank() {
        return vec![line.clone()];
    }

    let columns = width.saturating_sub(line.indent).max(1);

    let mut lines = Vec::new();
    let mut rest = line.text.trim();

    while rest.width() > columns {
        let mut split = match split_point(rest, columns) {
            Some(split) => split,
            None => break,
        };

        if is_single_char(&rest[..split]) {
            split = match next_word_end(rest, split) {
                Some(split) => split,
                None => break,
            };
        }

        let piece = rest[..split].trim_end();
        if !piece.is_empty() {
            lines.push(DocLine {
                indent: line.indent,
                text: piece.to_owned(),
            });
        }

        rest = rest[split..].trim_start();
    }

    if rest.is_empty() {
        return lines;
    }

    let mut text = rest.to_owned();

    // Move the last word of the previous line with the single character.
    if is_single_char(rest) {
        if let Some(previous) = lines.last_mut() {
            if let Some(pos) = previous.text.rfind(char::is_whitespace) {
                let head = previous.text[..pos].trim_end();
                if !head.is_empty() && !is_single_char(head) {
                    text = format!("{} {}", previous.text[pos..].trim_start(), rest);
                    let len = head.len();
                    previous.text.truncate(len);
                }
            }
        }
    }

    lines.push(DocLine {
        indent: line.indent,
        text,
    });

    lines
}

fn is_single_char(text: &str) -> bool {
    text.trim().chars().count() == 1
}

/// Position of the first whitespace after the word that follows `start`.
fn next_word_end(line: &str, start: usize) -> Option<usize> {
    let word = start + line[start..].find(|c: char| !c.is_whitespace())?;
    line[word..].find(char::is_whitespace).map(|end| word + end)
}

/// Find the whitespace where a line has to be split.
///
/// It is the last whitespace found before the column `columns`. If there is none,
/// the first whitespace after that.
fn split_point(line: &str, columns: usize) -> Option<usize> {
    let mut last_before = None;
    let mut column = 0;

    for (index, chr) in line.char_indices() {
        if chr.is_whitespace() {
            if column < columns {
                last_before = Some(index);
            } else {
                return last_before.or(Some(index));
            }
        }

        column += chr.width().unwrap_or(0);
    }

    last_before
}
