//! Conversions used by the generated parser.

use crate::{ParseError, StatField};

/// Parse a `%c` field. The value must contain a single character.
pub(crate) fn parse_char_field(field: StatField, value: &str) -> Result<char, ParseError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ParseError::invalid(field, value, None)),
    }
}

/// Parse a signed integer. The caller narrows it to the type of the field.
pub(crate) fn parse_int_field(field: StatField, value: &str) -> Result<i64, ParseError> {
    value
        .parse()
        .map_err(|e| ParseError::invalid(field, value, Some(e)))
}

/// Parse an unsigned integer. The caller narrows it to the type of the field.
pub(crate) fn parse_uint_field(field: StatField, value: &str) -> Result<u64, ParseError> {
    value
        .parse()
        .map_err(|e| ParseError::invalid(field, value, Some(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn chars() {
        assert_eq!(parse_char_field(StatField::State, "R"), Ok('R'));
        assert_eq!(parse_char_field(StatField::State, "δ"), Ok('δ'));

        for value in &["", "RS"] {
            let err = parse_char_field(StatField::State, value).unwrap_err();
            assert_eq!(err.field(), StatField::State);
        }
    }

    #[rstest]
    #[case("0", 0)]
    #[case("-100", -100)]
    #[case("9223372036854775807", i64::MAX)]
    fn signed(#[case] value: &str, #[case] expected: i64) {
        assert_eq!(parse_int_field(StatField::Nice, value), Ok(expected));
    }

    #[rstest]
    #[case("12345", 12345)]
    #[case("18446744073709551615", u64::MAX)]
    fn unsigned(#[case] value: &str, #[case] expected: u64) {
        assert_eq!(parse_uint_field(StatField::Vsize, value), Ok(expected));
    }

    #[rstest]
    #[case("")]
    #[case("-1")]
    #[case("1.5")]
    #[case("abc")]
    fn invalid_unsigned(#[case] value: &str) {
        let err = parse_uint_field(StatField::Vsize, value).unwrap_err();
        assert_eq!(err.to_string(), format!("invalid \"vsize\" value \"{}\"", value));
    }
}
