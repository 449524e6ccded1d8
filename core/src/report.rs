//! Workbook rendering for an ARP comparison.
//!
//! The report has exactly three sheets: the pre addresses, the post
//! addresses, and the classified union with a filled Status column. The
//! whole workbook is serialized in memory; callers receive either complete
//! bytes or an error, never a partial artifact.

use chrono::{DateTime, Local};
use log::info;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use thiserror::Error;

use crate::address::AddressSet;
use crate::compare::{Classification, Comparison};
use crate::config::{ConfigError, ReportConfig};
use crate::error_codes;
use crate::style::status_style;

pub const XLSX_MIME_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const XLSX_EXTENSION: &str = "xlsx";

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
const IP_HEADER: &str = "IP";
const STATUS_HEADER: &str = "Status";

/// A serialized workbook and the name it should be saved under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl Report {
    pub fn mime_type(&self) -> &'static str {
        XLSX_MIME_TYPE
    }
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReportError {
    #[error("[ARPDIFF_REPORT_001] invalid report configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("[ARPDIFF_REPORT_002] failed to build workbook: {0}. Suggestion: check available memory and sheet limits.")]
    Xlsx(#[from] XlsxError),
    #[error("[ARPDIFF_REPORT_003] workbook serialization produced no bytes")]
    EmptyOutput,
}

impl ReportError {
    pub fn code(&self) -> &'static str {
        match self {
            ReportError::Config(_) => error_codes::REPORT_CONFIG,
            ReportError::Xlsx(_) => error_codes::REPORT_XLSX,
            ReportError::EmptyOutput => error_codes::REPORT_EMPTY_OUTPUT,
        }
    }
}

/// `{prefix}YYYYMMDD_HHMMSS.xlsx`
pub fn report_filename(prefix: &str, timestamp: DateTime<Local>) -> String {
    format!(
        "{}{}.{}",
        prefix,
        timestamp.format(TIMESTAMP_FORMAT),
        XLSX_EXTENSION
    )
}

/// Builds the report, stamping the filename with the local clock.
pub fn build_report(
    pre: &AddressSet,
    post: &AddressSet,
    comparison: &Comparison,
    config: &ReportConfig,
) -> Result<Report, ReportError> {
    build_report_at(pre, post, comparison, config, Local::now())
}

pub fn build_report_at(
    pre: &AddressSet,
    post: &AddressSet,
    comparison: &Comparison,
    config: &ReportConfig,
    timestamp: DateTime<Local>,
) -> Result<Report, ReportError> {
    config.validate()?;

    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    {
        let sheet = workbook.add_worksheet();
        sheet.set_name(&config.pre_sheet_name)?;
        write_address_sheet(sheet, pre, config, &header)?;
    }

    {
        let sheet = workbook.add_worksheet();
        sheet.set_name(&config.post_sheet_name)?;
        write_address_sheet(sheet, post, config, &header)?;
    }

    {
        let sheet = workbook.add_worksheet();
        sheet.set_name(&config.comparison_sheet_name)?;
        write_comparison_sheet(sheet, comparison, config, &header)?;
    }

    let bytes = workbook.save_to_buffer()?;
    if bytes.is_empty() {
        return Err(ReportError::EmptyOutput);
    }

    let filename = report_filename(&config.filename_prefix, timestamp);
    info!(
        "built {} ({} bytes, {} comparison rows)",
        filename,
        bytes.len(),
        comparison.len()
    );

    Ok(Report { filename, bytes })
}

/// Extracts, compares and renders two raw ARP dumps in one call.
pub fn compare_logs(
    pre_bytes: &[u8],
    post_bytes: &[u8],
    config: &ReportConfig,
) -> Result<Report, ReportError> {
    let pre = crate::extract::extract_addresses_from_bytes(pre_bytes);
    let post = crate::extract::extract_addresses_from_bytes(post_bytes);
    let comparison = crate::compare::compare(&pre, &post);
    build_report(&pre, &post, &comparison, config)
}

fn data_row(index: usize) -> Result<u32, XlsxError> {
    u32::try_from(index + 1).map_err(|_| XlsxError::RowColumnLimitError)
}

fn prepare_sheet(
    sheet: &mut Worksheet,
    columns: u16,
    config: &ReportConfig,
) -> Result<(), XlsxError> {
    for col in 0..columns {
        sheet.set_column_width(col, config.column_width)?;
    }
    if config.freeze_header {
        sheet.set_freeze_panes(1, 0)?;
    }
    Ok(())
}

fn write_address_sheet(
    sheet: &mut Worksheet,
    addresses: &AddressSet,
    config: &ReportConfig,
    header: &Format,
) -> Result<(), XlsxError> {
    prepare_sheet(sheet, 1, config)?;
    sheet.write_string_with_format(0, 0, IP_HEADER, header)?;
    for (i, address) in addresses.iter().enumerate() {
        sheet.write_string(data_row(i)?, 0, address.as_str())?;
    }
    Ok(())
}

fn write_comparison_sheet(
    sheet: &mut Worksheet,
    comparison: &Comparison,
    config: &ReportConfig,
    header: &Format,
) -> Result<(), XlsxError> {
    prepare_sheet(sheet, 2, config)?;
    sheet.write_string_with_format(0, 0, IP_HEADER, header)?;
    sheet.write_string_with_format(0, 1, STATUS_HEADER, header)?;

    let styles = Classification::ALL.map(|c| status_style(&config.labels, &config.palette, c));
    let formats = styles.map(|style| style.format());

    for (i, entry) in comparison.iter().enumerate() {
        let row = data_row(i)?;
        let slot = class_slot(entry.classification);
        sheet.write_string(row, 0, entry.address.as_str())?;
        sheet.write_string_with_format(row, 1, styles[slot].label, &formats[slot])?;
    }
    Ok(())
}

fn class_slot(classification: Classification) -> usize {
    match classification {
        Classification::BothSources => 0,
        Classification::MissingInSecond => 1,
        Classification::NewInSecond => 2,
    }
}
