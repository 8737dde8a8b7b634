//! Generate the record type, and the enum to identify its fields.

use crate::{Config, DocLine, FieldDescriptor};
use std::io::{self, Write};

/// Generate the declaration of the record type.
pub fn generate_record(
    mut output: impl Write,
    fields: &[FieldDescriptor],
    config: &Config,
) -> io::Result<()> {
    log::debug!("record {} with {} fields", config.record_name, fields.len());

    writeln!(
        output,
        "// Code generated from {}. DO NOT EDIT.\n",
        config.source_name
    )?;

    // Record.
    writeln!(
        output,
        "/// Fields of `{}`, as documented in {}.\n\
         #[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]\n\
         pub struct {} {{",
        config.marker, config.source_name, config.record_name
    )?;

    for (idx, field) in fields.iter().enumerate() {
        if idx > 0 {
            writeln!(output)?;
        }

        for line in &field.documentation {
            write_doc_line(&mut output, line)?;
        }

        writeln!(
            output,
            "    pub {}: {},",
            field.raw_name,
            field.scalar_type.rust_type()
        )?;
    }

    writeln!(output, "}}\n")?;

    // Field identifiers.
    writeln!(
        output,
        "/// Identifier for the fields of [`{}`].\n\
         #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]\n\
         pub enum {} {{",
        config.record_name, config.field_enum
    )?;

    for field in fields {
        writeln!(output, "    {},", field.exported_name)?;
    }

    writeln!(output, "}}\n")?;

    writeln!(output, "impl {} {{", config.field_enum)?;
    let all: Vec<_> = fields
        .iter()
        .map(|field| format!("{}::{}", config.field_enum, field.exported_name))
        .collect();

    writeln!(
        output,
        "    /// All fields, in the order of the record.\n    \
         pub const ALL: &[{}] = &[{}];\n",
        config.field_enum,
        all.join(", ")
    )?;

    writeln!(
        output,
        "    /// Name of the field in {}.\n    \
         pub fn name(self) -> &'static str {{\n        \
         match self {{",
        config.source_name
    )?;

    for field in fields {
        writeln!(
            output,
            "            {}::{} => \"{}\",",
            config.field_enum, field.exported_name, field.raw_name
        )?;
    }

    writeln!(output, "        }}\n    }}\n}}\n")?;

    writeln!(
        output,
        "impl std::fmt::Display for {} {{\n    \
         fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {{\n        \
         fmt.write_str(self.name())\n    \
         }}\n\
         }}\n",
        config.field_enum
    )?;

    Ok(())
}

/// Write a line of documentation as a doc comment.
fn write_doc_line(mut output: impl Write, line: &DocLine) -> io::Result<()> {
    if line.is_blank() {
        writeln!(output, "    ///")
    } else {
        writeln!(output, "    /// {:2$}{}", "", line.text, line.indent)
    }
}
