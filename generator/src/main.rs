//! Read proc(5) from stdin, and write the generated code to stdout.

use anyhow::Context;
use std::io::{self, BufWriter};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let stdin = io::stdin();
    let stdout = io::stdout();

    generator::generate(
        stdin.lock(),
        BufWriter::new(stdout.lock()),
        &generator::Config::default(),
    )
    .context("failed to generate code from proc(5)")?;

    Ok(())
}
