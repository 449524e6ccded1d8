use crate::output::{json, text};
use crate::{CompareArgs, OutputFormat};
use anyhow::{Context, Result};
use arp_diff::{ReportConfig, build_report, compare, extract_addresses_from_bytes};
use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tempfile::NamedTempFile;

pub struct CompareOutcome {
    pub report_path: PathBuf,
    pub pre_count: usize,
    pub post_count: usize,
    pub comparison: arp_diff::Comparison,
}

pub fn run(args: &CompareArgs) -> Result<ExitCode> {
    let config = load_config(args.config.as_deref())?;

    let pre_bytes = fs::read(&args.pre)
        .with_context(|| format!("Failed to read pre dump: {}", args.pre.display()))?;
    let post_bytes = fs::read(&args.post)
        .with_context(|| format!("Failed to read post dump: {}", args.post.display()))?;

    let pre = extract_addresses_from_bytes(&pre_bytes);
    let post = extract_addresses_from_bytes(&post_bytes);
    info!(
        "extracted {} addresses from {} and {} from {}",
        pre.len(),
        args.pre.display(),
        post.len(),
        args.post.display()
    );

    let comparison = compare(&pre, &post);
    let report =
        build_report(&pre, &post, &comparison, &config).context("Failed to build report")?;

    let report_path = match &args.output {
        Some(path) => path.clone(),
        None => {
            fs::create_dir_all(&args.out_dir).with_context(|| {
                format!("Failed to create output directory: {}", args.out_dir.display())
            })?;
            args.out_dir.join(&report.filename)
        }
    };
    write_atomically(&report_path, &report.bytes)
        .with_context(|| format!("Failed to write report: {}", report_path.display()))?;
    debug!("wrote {} bytes to {}", report.bytes.len(), report_path.display());

    let outcome = CompareOutcome {
        report_path,
        pre_count: pre.len(),
        post_count: post.len(),
        comparison,
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    match args.format {
        OutputFormat::Text => {
            text::write_compare_summary(&mut handle, &outcome, &config, args.quiet)?;
        }
        OutputFormat::Json => {
            json::write_compare_summary(&mut handle, &outcome, args.quiet)?;
        }
    }
    handle.flush()?;

    Ok(exit_code_from_outcome(&outcome))
}

fn load_config(path: Option<&Path>) -> Result<ReportConfig> {
    let Some(path) = path else {
        return Ok(ReportConfig::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let config: ReportConfig = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse config: {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid config: {}", path.display()))?;
    Ok(config)
}

/// Writes through a temp file in the destination directory so a failed write
/// never leaves a truncated workbook behind.
fn write_atomically(dest: &Path, bytes: &[u8]) -> io::Result<()> {
    let dir = match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(dest).map_err(|e| e.error)?;
    Ok(())
}

fn exit_code_from_outcome(outcome: &CompareOutcome) -> ExitCode {
    if outcome.comparison.has_differences() {
        ExitCode::from(1)
    } else {
        ExitCode::from(0)
    }
}
