//! Build script to generate the `ProcStat` record and its parser.

use std::env;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

const MAN_PAGE: &str = "src/proc.5.txt";

/// Variable to use a different copy of the manual page.
const MAN_PAGE_VAR: &str = "PROCSTAT_MAN_PAGE";

const RECORD_CODE: &str = "procstat.rs";

fn main() {
    println!("cargo:rerun-if-env-changed={}", MAN_PAGE_VAR);

    let source = env::var_os(MAN_PAGE_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(MAN_PAGE));

    println!("cargo:rerun-if-changed={}", source.display());

    let input = BufReader::new(File::open(&source).expect("Open MAN_PAGE file"));

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let output = File::create(out_dir.join(RECORD_CODE)).expect("Create RECORD_CODE file");
    generator::generate(input, BufWriter::new(output), &generator::Config::default())
        .expect("Failed to generate record code.");
}
