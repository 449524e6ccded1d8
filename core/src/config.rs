//! Configuration for report generation.
//!
//! `ReportConfig` collects every presentation knob of the workbook so that
//! sheet names, labels and colors are not hardcoded in the writer. The
//! defaults reproduce the classic ARP comparison report.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::compare::Classification;
use crate::error_codes;
use crate::style::{FillColor, StatusLabels, StatusPalette};

pub const DEFAULT_FILENAME_PREFIX: &str = "ARP_IP_Comparison_";

const MAX_SHEET_NAME_LEN: usize = 31;
const MAX_COLUMN_WIDTH: f64 = 255.0;
const FORBIDDEN_SHEET_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub filename_prefix: String,
    pub pre_sheet_name: String,
    pub post_sheet_name: String,
    pub comparison_sheet_name: String,
    pub labels: StatusLabels,
    pub palette: StatusPalette,
    pub column_width: f64,
    pub freeze_header: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            filename_prefix: DEFAULT_FILENAME_PREFIX.to_string(),
            pre_sheet_name: "Pre_IPs".to_string(),
            post_sheet_name: "Post_IPs".to_string(),
            comparison_sheet_name: "IP_Comparison".to_string(),
            labels: StatusLabels::default(),
            palette: StatusPalette::default(),
            column_width: 22.0,
            freeze_header: true,
        }
    }
}

impl ReportConfig {
    pub fn builder() -> ReportConfigBuilder {
        ReportConfigBuilder {
            inner: ReportConfig::default(),
        }
    }

    pub fn sheet_names(&self) -> [&str; 3] {
        [
            &self.pre_sheet_name,
            &self.post_sheet_name,
            &self.comparison_sheet_name,
        ]
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let names = self.sheet_names();
        for name in names {
            validate_sheet_name(name)?;
        }
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                // Excel compares sheet names case-insensitively.
                if a.to_lowercase() == b.to_lowercase() {
                    return Err(ConfigError::DuplicateSheetName {
                        name: (*b).to_string(),
                    });
                }
            }
        }

        if self.filename_prefix.is_empty()
            || self
                .filename_prefix
                .chars()
                .any(|c| c == '/' || c == '\\' || c == '\0')
        {
            return Err(ConfigError::InvalidFilenamePrefix {
                prefix: self.filename_prefix.clone(),
            });
        }

        for class in Classification::ALL {
            if self.labels.label_for(class).trim().is_empty() {
                return Err(ConfigError::EmptyLabel { classification: class });
            }
        }
        let labels = Classification::ALL.map(|c| self.labels.label_for(c));
        if labels[0] == labels[1] || labels[0] == labels[2] || labels[1] == labels[2] {
            return Err(ConfigError::DuplicateLabel);
        }

        if !self.palette.is_distinct() {
            return Err(ConfigError::IndistinctFills {
                both: self.palette.both,
                missing_in_second: self.palette.missing_in_second,
                new_in_second: self.palette.new_in_second,
            });
        }

        if !self.column_width.is_finite()
            || self.column_width <= 0.0
            || self.column_width > MAX_COLUMN_WIDTH
        {
            return Err(ConfigError::InvalidColumnWidth {
                value: self.column_width,
            });
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("[ARPDIFF_CONFIG_001] sheet names must not be empty")]
    EmptySheetName,
    #[error("[ARPDIFF_CONFIG_002] sheet name '{name}' exceeds 31 characters")]
    SheetNameTooLong { name: String },
    #[error("[ARPDIFF_CONFIG_003] sheet name '{name}' contains a forbidden character or leading/trailing apostrophe")]
    InvalidSheetName { name: String },
    #[error("[ARPDIFF_CONFIG_004] sheet name '{name}' is used more than once")]
    DuplicateSheetName { name: String },
    #[error("[ARPDIFF_CONFIG_005] filename prefix '{prefix}' must be non-empty and must not contain path separators")]
    InvalidFilenamePrefix { prefix: String },
    #[error("[ARPDIFF_CONFIG_006] status fills must be pairwise distinct (got both={both}, missing={missing_in_second}, new={new_in_second})")]
    IndistinctFills {
        both: FillColor,
        missing_in_second: FillColor,
        new_in_second: FillColor,
    },
    #[error("[ARPDIFF_CONFIG_007] status label for {classification:?} must not be empty")]
    EmptyLabel { classification: Classification },
    #[error("[ARPDIFF_CONFIG_007] status labels must be pairwise distinct")]
    DuplicateLabel,
    #[error("[ARPDIFF_CONFIG_008] column_width must be finite and in (0, 255] (got {value})")]
    InvalidColumnWidth { value: f64 },
}

impl ConfigError {
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::EmptySheetName => error_codes::CONFIG_EMPTY_SHEET_NAME,
            ConfigError::SheetNameTooLong { .. } => error_codes::CONFIG_SHEET_NAME_TOO_LONG,
            ConfigError::InvalidSheetName { .. } => error_codes::CONFIG_INVALID_SHEET_NAME,
            ConfigError::DuplicateSheetName { .. } => error_codes::CONFIG_DUPLICATE_SHEET_NAME,
            ConfigError::InvalidFilenamePrefix { .. } => error_codes::CONFIG_INVALID_PREFIX,
            ConfigError::IndistinctFills { .. } => error_codes::CONFIG_INDISTINCT_FILLS,
            ConfigError::EmptyLabel { .. } | ConfigError::DuplicateLabel => {
                error_codes::CONFIG_INVALID_LABEL
            }
            ConfigError::InvalidColumnWidth { .. } => error_codes::CONFIG_INVALID_COLUMN_WIDTH,
        }
    }
}

fn validate_sheet_name(name: &str) -> Result<(), ConfigError> {
    if name.is_empty() {
        return Err(ConfigError::EmptySheetName);
    }
    if name.chars().count() > MAX_SHEET_NAME_LEN {
        return Err(ConfigError::SheetNameTooLong {
            name: name.to_string(),
        });
    }
    if name.contains(FORBIDDEN_SHEET_CHARS) || name.starts_with('\'') || name.ends_with('\'') {
        return Err(ConfigError::InvalidSheetName {
            name: name.to_string(),
        });
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct ReportConfigBuilder {
    inner: ReportConfig,
}

impl Default for ReportConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportConfigBuilder {
    pub fn new() -> Self {
        ReportConfig::builder()
    }

    pub fn filename_prefix(mut self, value: impl Into<String>) -> Self {
        self.inner.filename_prefix = value.into();
        self
    }

    pub fn pre_sheet_name(mut self, value: impl Into<String>) -> Self {
        self.inner.pre_sheet_name = value.into();
        self
    }

    pub fn post_sheet_name(mut self, value: impl Into<String>) -> Self {
        self.inner.post_sheet_name = value.into();
        self
    }

    pub fn comparison_sheet_name(mut self, value: impl Into<String>) -> Self {
        self.inner.comparison_sheet_name = value.into();
        self
    }

    pub fn labels(mut self, value: StatusLabels) -> Self {
        self.inner.labels = value;
        self
    }

    pub fn palette(mut self, value: StatusPalette) -> Self {
        self.inner.palette = value;
        self
    }

    pub fn column_width(mut self, value: f64) -> Self {
        self.inner.column_width = value;
        self
    }

    pub fn freeze_header(mut self, value: bool) -> Self {
        self.inner.freeze_header = value;
        self
    }

    pub fn build(self) -> Result<ReportConfig, ConfigError> {
        self.inner.validate()?;
        Ok(self.inner)
    }
}
