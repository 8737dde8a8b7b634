//! Generate code from the files in `tests/fixtures`, and from the proc(5)
//! page used by the `procstat` crate.

use crate::{generate, record, source, Config, GenerateError};
use std::collections::HashSet;
use unicode_width::UnicodeWidthStr;

const FIXTURE: &str = include_str!("../tests/fixtures/stat.txt");

const FIXTURE_RECORD: &str = include_str!("../tests/fixtures/stat.record.output");

const PROC_MAN_PAGE: &str = include_str!("../../src/proc.5.txt");

fn generate_string(input: &str) -> Result<String, GenerateError> {
    let mut output = Vec::new();
    generate(input.as_bytes(), &mut output, &Config::default())?;
    Ok(String::from_utf8(output).unwrap())
}

#[test]
fn record_from_fixture() {
    let config = Config::default();
    let fields = source::parse_fields(FIXTURE.as_bytes(), &config).unwrap();

    let mut output = Vec::new();
    record::generate_record(&mut output, &fields, &config).unwrap();

    let output = String::from_utf8(output).unwrap();
    if output != FIXTURE_RECORD {
        eprintln!("=== OUTPUT\n{}\n", output);
        eprintln!("=== EXPECTED\n{}\n", FIXTURE_RECORD);
        panic!("generated record does not match");
    }
}

#[test]
fn parser_from_fixture() {
    let output = generate_string(FIXTURE).unwrap();

    let (record, parser) = output.split_at(FIXTURE_RECORD.len());
    assert_eq!(record, FIXTURE_RECORD);

    let parser: String = parser.split_whitespace().collect();
    assert_eq!(
        parser,
        concat!(
            "implProcStat{",
            "pub(crate)fnparse_rest(&mutself,fields:&[&str])->Result<(),ParseError>{",
            "for(position,&field)infields.iter().enumerate(){",
            "matchposition{",
            "0=>self.state=parse_char_field(StatField::State,field)?,",
            "1=>self.ppid=parse_int_field(StatField::Ppid,field)?asi32,",
            "2=>self.flags=parse_uint_field(StatField::Flags,field)?asu32,",
            "3=>self.starttime=parse_uint_field(StatField::Starttime,field)?,",
            "4=>self.cutime=parse_int_field(StatField::Cutime,field)?,",
            "_=>(),",
            "}}Ok(())}}",
        )
    );
}

#[test]
fn same_output_for_same_input() {
    let first = generate_string(PROC_MAN_PAGE).unwrap();
    let second = generate_string(PROC_MAN_PAGE).unwrap();
    assert_eq!(first, second);
}

#[test]
fn no_output_on_errors() {
    let input = FIXTURE.replace("(6) starttime  %llu", "(6) starttime  %x");

    let mut output = Vec::new();
    let err = generate(input.as_bytes(), &mut output, &Config::default()).unwrap_err();

    assert!(output.is_empty());
    assert_eq!(
        err.to_string(),
        "unknown format specifier \"%x\" for field \"starttime\""
    );

    let err = generate_string("NAME\n    proc\n").unwrap_err();
    assert_eq!(err.to_string(), "section \"/proc/[pid]/stat\" not found");
}

#[test]
fn proc_man_page_fields() {
    let config = Config::default();
    let fields = source::parse_fields(PROC_MAN_PAGE.as_bytes(), &config).unwrap();

    assert_eq!(fields.len(), 52);

    for (index, field) in fields.iter().enumerate() {
        assert_eq!(field.index, index);
    }

    let names: Vec<_> = fields.iter().map(|f| f.raw_name.as_str()).collect();
    assert_eq!(names[..4], ["pid", "comm", "state", "ppid"]);
    assert_eq!(names[51], "exit_code");

    let exported: HashSet<_> = fields.iter().map(|f| &f.exported_name).collect();
    assert_eq!(exported.len(), fields.len());

    // Every member is documented, and in the same order.
    let output = generate_string(PROC_MAN_PAGE).unwrap();
    let members: Vec<_> = output
        .lines()
        .filter_map(|l| l.strip_prefix("    pub "))
        .filter_map(|l| l.split(':').next())
        .filter(|l| !l.contains(' '))
        .collect();

    assert_eq!(members, names);

    for field in &fields {
        assert!(!field.documentation.is_empty(), "{}", field.raw_name);
    }
}

#[test]
fn proc_man_page_line_width() {
    let config = Config::default();
    let fields = source::parse_fields(PROC_MAN_PAGE.as_bytes(), &config).unwrap();

    for line in fields.iter().flat_map(|f| &f.documentation) {
        let width = line.text.width();
        assert!(
            width + line.indent <= config.wrap_width || !line.text.contains(' '),
            "{:?}",
            line
        );
    }
}

#[test]
fn proc_man_page_state_codes() {
    let config = Config::default();
    let fields = source::parse_fields(PROC_MAN_PAGE.as_bytes(), &config).unwrap();

    let state = &fields[2];
    assert_eq!(state.raw_name, "state");

    let codes: String = state
        .documentation
        .iter()
        .filter(|l| l.indent == 2)
        .filter_map(|l| l.text.chars().next())
        .collect();

    assert_eq!(codes, "RSDZTtWXxKWP");
}
