use crate::OutputFormat;
use crate::output::{json, text};
use anyhow::{Context, Result};
use arp_diff::extract_addresses_from_reader;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use std::process::ExitCode;

pub fn run(path: &Path, format: OutputFormat) -> Result<ExitCode> {
    let file =
        File::open(path).with_context(|| format!("Failed to open dump: {}", path.display()))?;
    let addresses = extract_addresses_from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to read dump: {}", path.display()))?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    match format {
        OutputFormat::Text => text::write_address_list(&mut handle, &addresses)?,
        OutputFormat::Json => json::write_address_list(&mut handle, &addresses)?,
    }

    Ok(ExitCode::from(0))
}
