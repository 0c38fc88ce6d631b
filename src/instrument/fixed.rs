//! Fixed-width numeric row dialect.
//!
//! Three seven-digit fields: slope distance in millimeters, then the
//! vertical and horizontal circles as packed `DDDMMSS` values. Framing is
//! checked by the exact row length.

use crate::angle::from_packed_dms;
use crate::error::ParseError;

use super::ReadingParser;

const ROW_LEN: usize = 23;

/// One raw fixed-width row.
#[derive(Debug, Clone, Copy)]
pub struct FixedLine<'a> {
    line: &'a str,
}

impl<'a> FixedLine<'a> {
    pub fn new(line: &'a str) -> Self {
        Self { line }
    }

    fn token(&self, field: &'static str, index: usize) -> Result<f64, ParseError> {
        let text = self
            .line
            .split_whitespace()
            .nth(index)
            .ok_or(ParseError::MissingField(field))?;
        text.parse().map_err(|_| ParseError::BadNumber {
            field,
            value: text.to_string(),
        })
    }
}

impl ReadingParser for FixedLine<'_> {
    fn is_valid(&self) -> bool {
        self.line.len() == ROW_LEN
    }

    fn parse_slope_distance(&self) -> Result<f64, ParseError> {
        Ok(self.token("slope distance", 0)? / 1000.0)
    }

    fn parse_horizontal_angle(&self) -> Result<f64, ParseError> {
        Ok(from_packed_dms(self.token("horizontal angle", 2)?))
    }

    /// The vertical circle is zenith-referenced; shift it so 0° is a level
    /// sight and depressions wrap toward 360°.
    fn parse_vertical_angle(&self) -> Result<f64, ParseError> {
        let dms = from_packed_dms(self.token("vertical angle", 1)?);
        Ok(if dms >= 90.0 { dms - 90.0 } else { dms + 270.0 })
    }
}
