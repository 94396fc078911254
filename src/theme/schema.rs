use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::deserializers::{de_font_sizes, de_size_index, de_string_or_non_empty_list};
use super::kinds::{FontStyle, FontWeight};

/// A complete typography configuration.
///
/// Configurations are never partial at resolution time: `Default` is the
/// built-in default configuration, JSON deserialization fills missing
/// fields from it, and programmatic overrides use struct update syntax
/// (`Typography { body_color: …, ..Default::default() }`).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Typography {
    /// The six-entry font-size scale, largest first. Levels index it
    /// 1-based, so level 1 is the largest entry.
    #[serde(deserialize_with = "de_font_sizes")]
    pub font_sizes: [String; 6],

    #[serde(deserialize_with = "de_string_or_non_empty_list")]
    pub body_font_family: SmallVec<[String; 1]>,
    /// Default scale position for body text, 1 through 6.
    #[serde(deserialize_with = "de_size_index")]
    pub body_size: u8,
    pub body_weight: FontWeight,
    pub body_style: FontStyle,
    pub body_color: String,
    pub body_line_height: LineHeight,

    #[serde(deserialize_with = "de_string_or_non_empty_list")]
    pub heading_font_family: SmallVec<[String; 1]>,
    /// Default scale position for headings, 1 through 6.
    #[serde(deserialize_with = "de_size_index")]
    pub heading_size: u8,
    pub heading_weight: FontWeight,
    pub heading_style: FontStyle,
    pub heading_color: String,
    pub heading_line_height: LineHeight,

    pub extra: Extras,
}

impl Typography {
    pub fn from_string<S: AsRef<str>>(str: S) -> Result<Typography, serde_json::Error> {
        serde_json::from_str(str.as_ref())
    }
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            font_sizes: [
                "2.369rem", "1.777rem", "1.333rem", "1rem", "0.750rem", "10px",
            ]
            .map(String::from),
            body_font_family: system_font_stack(),
            body_size: 4,
            body_weight: FontWeight::Normal,
            body_style: FontStyle::Normal,
            body_color: String::from("#000000"),
            body_line_height: LineHeight::Ratio(1.4),
            heading_font_family: system_font_stack(),
            heading_size: 1,
            heading_weight: FontWeight::Bold,
            heading_style: FontStyle::Normal,
            heading_color: String::from("#000000"),
            heading_line_height: LineHeight::Ratio(1.2),
            extra: Extras::default(),
        }
    }
}

fn system_font_stack() -> SmallVec<[String; 1]> {
    [
        "system-ui",
        "-apple-system",
        "BlinkMacSystemFont",
        "'Segoe UI'",
        "'Roboto'",
        "'Oxygen'",
        "'Ubuntu'",
        "'Cantarell'",
        "'Fira Sans'",
        "'Droid Sans'",
        "'Helvetica Neue'",
        "sans-serif",
    ]
    .iter()
    .map(|family| family.to_string())
    .collect()
}

/// Raw per-category style fragments, appended verbatim after the
/// resolved declarations. Opaque to the resolver.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Extras {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<String>,
    /// Falls back to the span fragment when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// A unitless line-height ratio or a CSS length/keyword string.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum LineHeight {
    Ratio(f64),
    Length(String),
}

impl fmt::Display for LineHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ratio(ratio) => write!(f, "{ratio}"),
            Self::Length(length) => f.write_str(length),
        }
    }
}

impl From<f64> for LineHeight {
    fn from(ratio: f64) -> Self {
        Self::Ratio(ratio)
    }
}

impl From<&str> for LineHeight {
    fn from(length: &str) -> Self {
        Self::Length(length.to_string())
    }
}

impl From<String> for LineHeight {
    fn from(length: String) -> Self {
        Self::Length(length)
    }
}
