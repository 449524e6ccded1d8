//! ARP Diff: compare the IPv4 addresses of two ARP dumps.
//!
//! This crate provides functionality for:
//! - Extracting dotted-quad addresses that lead the lines of a text dump
//! - Classifying the union of two address sets (both / missing / new)
//! - Rendering the result as a color-coded `.xlsx` workbook
//!
//! # Quick Start
//!
//! ```ignore
//! use arp_diff::{ReportConfig, compare_logs};
//!
//! let pre = std::fs::read("pre_arp.txt")?;
//! let post = std::fs::read("post_arp.txt")?;
//! let report = compare_logs(&pre, &post, &ReportConfig::default())?;
//! std::fs::write(&report.filename, &report.bytes)?;
//! ```

mod address;
mod compare;
mod config;
mod digits;
pub mod error_codes;
mod extract;
mod report;
mod style;

pub use address::{Address, AddressSet};
pub use compare::{Classification, ClassifiedAddress, Comparison, ComparisonSummary, compare};
pub use config::{ConfigError, DEFAULT_FILENAME_PREFIX, ReportConfig, ReportConfigBuilder};
pub use extract::{extract_addresses, extract_addresses_from_bytes, extract_addresses_from_reader};
pub use report::{
    Report, ReportError, XLSX_EXTENSION, XLSX_MIME_TYPE, build_report, build_report_at,
    compare_logs, report_filename,
};
pub use style::{FillColor, ParseColorError, StatusLabels, StatusPalette, StatusStyle, status_style};
