//! Tag-prefixed manufacturer raw dialect.
//!
//! Fields ride in the stream as `TAG:value` pairs separated by spaces. When
//! a tag repeats, the last occurrence wins. Angles carry a trailing
//! tenth-of-second digit, distances are in tenths of millimeters.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::angle::from_packed_dms;
use crate::error::ParseError;

use super::ReadingParser;

static TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(HA|VA|SD):(\S+)").expect("tag pattern is well-formed")
});

/// One raw tagged line.
#[derive(Debug, Clone, Copy)]
pub struct TaggedLine<'a> {
    line: &'a str,
}

impl<'a> TaggedLine<'a> {
    pub fn new(line: &'a str) -> Self {
        Self { line }
    }

    fn field(&self, tag: &'static str) -> Result<f64, ParseError> {
        let text = TAG_RE
            .captures_iter(self.line)
            .filter(|c| c.get(1).map(|m| m.as_str()) == Some(tag))
            .last()
            .and_then(|c| c.get(2))
            .map(|m| m.as_str())
            .ok_or(ParseError::MissingField(tag))?;
        text.parse().map_err(|_| ParseError::BadNumber {
            field: tag,
            value: text.to_string(),
        })
    }
}

impl ReadingParser for TaggedLine<'_> {
    fn is_valid(&self) -> bool {
        ["HA", "VA", "SD", "HT"]
            .iter()
            .all(|tag| self.line.contains(tag))
    }

    fn parse_slope_distance(&self) -> Result<f64, ParseError> {
        Ok(self.field("SD")? / 10000.0)
    }

    fn parse_horizontal_angle(&self) -> Result<f64, ParseError> {
        Ok(from_packed_dms(self.field("HA")? / 10.0))
    }

    fn parse_vertical_angle(&self) -> Result<f64, ParseError> {
        Ok(from_packed_dms(self.field("VA")? / 10.0))
    }
}
