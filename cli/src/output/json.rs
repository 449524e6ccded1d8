use crate::commands::compare::CompareOutcome;
use anyhow::Result;
use arp_diff::{AddressSet, ClassifiedAddress, ComparisonSummary};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct CompareSummaryJson<'a> {
    report: String,
    pre_count: usize,
    post_count: usize,
    summary: ComparisonSummary,
    differences: Vec<&'a ClassifiedAddress>,
}

#[derive(Serialize)]
struct ReportPathJson {
    report: String,
}

pub fn write_compare_summary<W: Write>(
    w: &mut W,
    outcome: &CompareOutcome,
    quiet: bool,
) -> Result<()> {
    if quiet {
        let payload = ReportPathJson {
            report: outcome.report_path.display().to_string(),
        };
        serde_json::to_writer_pretty(&mut *w, &payload)?;
        writeln!(w)?;
        return Ok(());
    }

    let payload = CompareSummaryJson {
        report: outcome.report_path.display().to_string(),
        pre_count: outcome.pre_count,
        post_count: outcome.post_count,
        summary: outcome.comparison.summary(),
        differences: outcome
            .comparison
            .iter()
            .filter(|entry| entry.classification.is_difference())
            .collect(),
    };
    serde_json::to_writer_pretty(&mut *w, &payload)?;
    writeln!(w)?;
    Ok(())
}

pub fn write_address_list<W: Write>(w: &mut W, addresses: &AddressSet) -> Result<()> {
    serde_json::to_writer_pretty(&mut *w, addresses)?;
    writeln!(w)?;
    Ok(())
}
