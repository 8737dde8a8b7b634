//! Generate a parser for the fields of the record.
//!
//! The generated function receives the fields after the reserved ones (`pid`
//! and `comm` in proc(5)), and assigns every value to the member for its
//! position. Values are converted with the functions in the `procstat`
//! crate:
//!
//! * `parse_char_field` for `%c`.
//! * `parse_int_field` for signed integers.
//! * `parse_uint_field` for unsigned integers.
//!
//! Strings are copied without any conversion.

use crate::{Config, FieldDescriptor, ScalarType};
use proc_macro2::{Literal, TokenStream};
use quote::{format_ident, quote};
use std::io::{self, Write};

/// Generate the parser code.
pub fn generate_parser(
    mut output: impl Write,
    fields: &[FieldDescriptor],
    config: &Config,
) -> io::Result<()> {
    let arms: Vec<_> = fields
        .iter()
        .filter(|field| field.index >= config.reserved_fields)
        .map(|field| match_arm(field, config))
        .collect();

    log::debug!("parser with {} fields", arms.len());

    // Header.
    writeln!(
        output,
        "impl {} {{\n    \
         pub(crate) fn parse_rest(&mut self, fields: &[&str]) -> Result<(), ParseError> {{\n        \
         for (position, &field) in fields.iter().enumerate() {{\n            \
         match position {{",
        config.record_name
    )?;

    for arm in arms {
        writeln!(output, "                {}", arm)?;
    }

    // Footer.
    writeln!(
        output,
        "                _ => (),\n            \
         }}\n        \
         }}\n\n        \
         Ok(())\n    \
         }}\n\
         }}"
    )?;

    Ok(())
}

/// Generate the `match` arm to assign a single field.
fn match_arm(field: &FieldDescriptor, config: &Config) -> TokenStream {
    let position = Literal::usize_unsuffixed(field.index - config.reserved_fields);
    let member = format_ident!("{}", field.raw_name);
    let id = {
        let field_enum = format_ident!("{}", config.field_enum);
        let variant = format_ident!("{}", field.exported_name);
        quote!(#field_enum::#variant)
    };

    let value = match field.scalar_type {
        ScalarType::Char => quote!(parse_char_field(#id, field)?),
        ScalarType::I64 => quote!(parse_int_field(#id, field)?),
        ScalarType::I32 => quote!(parse_int_field(#id, field)? as i32),
        ScalarType::U64 => quote!(parse_uint_field(#id, field)?),
        ScalarType::U32 => quote!(parse_uint_field(#id, field)? as u32),
        ScalarType::Text => quote!(field.to_owned()),
    };

    quote!(#position => self.#member = #value,)
}
