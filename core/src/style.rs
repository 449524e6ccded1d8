//! Declarative mapping from [`Classification`] to Status cell styling.
//!
//! Nothing here touches a worksheet: the palette and labels are plain data so
//! styling can be checked without writing a workbook. [`StatusStyle::format`]
//! is the single point where a style becomes a writer format.

use std::fmt;
use std::str::FromStr;

use rust_xlsxwriter::{Color, Format, FormatPattern};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::compare::Classification;

/// A solid background fill as a 24-bit `RRGGBB` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FillColor(u32);

impl FillColor {
    pub const LIGHT_GREEN: FillColor = FillColor(0xC6EFCE);
    pub const LIGHT_RED: FillColor = FillColor(0xFFC7CE);
    pub const LIGHT_ORANGE: FillColor = FillColor(0xFFD580);

    pub fn from_rgb(rgb: u32) -> Result<Self, ParseColorError> {
        if rgb > 0xFF_FFFF {
            return Err(ParseColorError::OutOfRange { value: rgb });
        }
        Ok(FillColor(rgb))
    }

    pub fn rgb(self) -> u32 {
        self.0
    }
}

impl fmt::Display for FillColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06X}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    #[error("color '{input}' must be six hex digits (RRGGBB), optionally prefixed with '#'")]
    InvalidHex { input: String },
    #[error("color value {value:#x} does not fit in RRGGBB")]
    OutOfRange { value: u32 },
}

impl FromStr for FillColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidHex {
                input: s.to_string(),
            });
        }
        u32::from_str_radix(hex, 16)
            .map(FillColor)
            .map_err(|_| ParseColorError::InvalidHex {
                input: s.to_string(),
            })
    }
}

impl TryFrom<String> for FillColor {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FillColor> for String {
    fn from(color: FillColor) -> Self {
        color.to_string()
    }
}

/// Fill color per classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusPalette {
    pub both: FillColor,
    pub missing_in_second: FillColor,
    pub new_in_second: FillColor,
}

impl Default for StatusPalette {
    fn default() -> Self {
        Self {
            both: FillColor::LIGHT_GREEN,
            missing_in_second: FillColor::LIGHT_RED,
            new_in_second: FillColor::LIGHT_ORANGE,
        }
    }
}

impl StatusPalette {
    pub fn fill_for(&self, classification: Classification) -> FillColor {
        match classification {
            Classification::BothSources => self.both,
            Classification::MissingInSecond => self.missing_in_second,
            Classification::NewInSecond => self.new_in_second,
        }
    }

    /// True when no two classifications share a color.
    pub fn is_distinct(&self) -> bool {
        self.both != self.missing_in_second
            && self.both != self.new_in_second
            && self.missing_in_second != self.new_in_second
    }
}

/// Status text per classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusLabels {
    pub both: String,
    pub missing_in_second: String,
    pub new_in_second: String,
}

impl Default for StatusLabels {
    fn default() -> Self {
        Self {
            both: Classification::BothSources.default_label().to_string(),
            missing_in_second: Classification::MissingInSecond.default_label().to_string(),
            new_in_second: Classification::NewInSecond.default_label().to_string(),
        }
    }
}

impl StatusLabels {
    pub fn label_for(&self, classification: Classification) -> &str {
        match classification {
            Classification::BothSources => &self.both,
            Classification::MissingInSecond => &self.missing_in_second,
            Classification::NewInSecond => &self.new_in_second,
        }
    }
}

/// What a Status cell looks like for one classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle<'a> {
    pub label: &'a str,
    pub fill: FillColor,
}

impl StatusStyle<'_> {
    pub fn format(&self) -> Format {
        Format::new()
            .set_pattern(FormatPattern::Solid)
            .set_background_color(Color::RGB(self.fill.rgb()))
    }
}

pub fn status_style<'a>(
    labels: &'a StatusLabels,
    palette: &StatusPalette,
    classification: Classification,
) -> StatusStyle<'a> {
    StatusStyle {
        label: labels.label_for(classification),
        fill: palette.fill_for(classification),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_is_distinct() {
        let palette = StatusPalette::default();
        assert!(palette.is_distinct());
        assert_eq!(palette.fill_for(Classification::BothSources).to_string(), "C6EFCE");
        assert_eq!(
            palette.fill_for(Classification::MissingInSecond).to_string(),
            "FFC7CE"
        );
        assert_eq!(palette.fill_for(Classification::NewInSecond).to_string(), "FFD580");
    }

    #[test]
    fn palette_with_shared_color_is_not_distinct() {
        let palette = StatusPalette {
            new_in_second: FillColor::LIGHT_GREEN,
            ..StatusPalette::default()
        };
        assert!(!palette.is_distinct());
    }

    #[test]
    fn parses_hex_with_and_without_hash() {
        assert_eq!("#c6efce".parse::<FillColor>(), Ok(FillColor::LIGHT_GREEN));
        assert_eq!("FFD580".parse::<FillColor>(), Ok(FillColor::LIGHT_ORANGE));
    }

    #[test]
    fn rejects_malformed_hex() {
        for input in ["", "FFF", "GGGGGG", "#1234567", "+12345"] {
            assert!(input.parse::<FillColor>().is_err(), "{input} should fail");
        }
        assert!(FillColor::from_rgb(0x1_000_000).is_err());
    }

    #[test]
    fn status_style_pairs_label_and_fill() {
        let labels = StatusLabels::default();
        let palette = StatusPalette::default();
        let style = status_style(&labels, &palette, Classification::NewInSecond);
        assert_eq!(style.label, "New in Post");
        assert_eq!(style.fill, FillColor::LIGHT_ORANGE);
    }

    #[test]
    fn palette_round_trips_through_json_as_hex() {
        let json = serde_json::to_string(&StatusPalette::default()).expect("serialize");
        assert!(json.contains("\"C6EFCE\""), "{json}");
        let back: StatusPalette = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, StatusPalette::default());
    }
}
