use crate::commands::compare::CompareOutcome;
use anyhow::Result;
use arp_diff::{AddressSet, Classification, ReportConfig};
use std::io::Write;

pub fn write_compare_summary<W: Write>(
    w: &mut W,
    outcome: &CompareOutcome,
    config: &ReportConfig,
    quiet: bool,
) -> Result<()> {
    writeln!(w, "Report: {}", outcome.report_path.display())?;
    if quiet {
        return Ok(());
    }

    writeln!(w, "Pre addresses: {}", outcome.pre_count)?;
    writeln!(w, "Post addresses: {}", outcome.post_count)?;

    let summary = outcome.comparison.summary();
    for class in Classification::ALL {
        writeln!(
            w,
            "  {}: {}",
            config.labels.label_for(class),
            summary.count(class)
        )?;
    }

    if !outcome.comparison.has_differences() {
        writeln!(w, "No differences found.")?;
    }
    Ok(())
}

pub fn write_address_list<W: Write>(w: &mut W, addresses: &AddressSet) -> Result<()> {
    for address in addresses {
        writeln!(w, "{}", address)?;
    }
    Ok(())
}
