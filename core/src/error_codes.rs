//! Stable error codes attached to every library error.
//!
//! Codes never change meaning once published; callers may match on them.

pub const CONFIG_EMPTY_SHEET_NAME: &str = "ARPDIFF_CONFIG_001";
pub const CONFIG_SHEET_NAME_TOO_LONG: &str = "ARPDIFF_CONFIG_002";
pub const CONFIG_INVALID_SHEET_NAME: &str = "ARPDIFF_CONFIG_003";
pub const CONFIG_DUPLICATE_SHEET_NAME: &str = "ARPDIFF_CONFIG_004";
pub const CONFIG_INVALID_PREFIX: &str = "ARPDIFF_CONFIG_005";
pub const CONFIG_INDISTINCT_FILLS: &str = "ARPDIFF_CONFIG_006";
pub const CONFIG_INVALID_LABEL: &str = "ARPDIFF_CONFIG_007";
pub const CONFIG_INVALID_COLUMN_WIDTH: &str = "ARPDIFF_CONFIG_008";

pub const REPORT_CONFIG: &str = "ARPDIFF_REPORT_001";
pub const REPORT_XLSX: &str = "ARPDIFF_REPORT_002";
pub const REPORT_EMPTY_OUTPUT: &str = "ARPDIFF_REPORT_003";
