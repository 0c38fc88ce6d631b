//! Word-addressed GSI block dialect.
//!
//! Lines are a run of 16-character blocks, each opening with a two-digit
//! word address: 11 point id, 21 horizontal circle, 22 vertical circle,
//! 31 slope distance, 51 ppm/prism, 87 target height, 88 instrument height.
//! Data digits sit at a fixed offset inside each block.

use std::ops::Range;

use crate::angle::from_packed_dms;
use crate::error::ParseError;

use super::ReadingParser;

/// Word addresses required for a reading, with the block offset each must
/// occupy.
const REQUIRED_WORDS: [(usize, &str); 7] = [
    (0, "11"),
    (16, "21"),
    (32, "22"),
    (48, "31"),
    (64, "51"),
    (80, "87"),
    (96, "88"),
];

const HA_DIGITS: Range<usize> = 23..31;
const VA_DIGITS: Range<usize> = 39..47;
const SD_DIGITS: Range<usize> = 55..63;

/// One raw GSI line.
#[derive(Debug, Clone, Copy)]
pub struct GsiLine<'a> {
    line: &'a str,
}

impl<'a> GsiLine<'a> {
    pub fn new(line: &'a str) -> Self {
        Self { line }
    }

    fn digits(&self, field: &'static str, range: Range<usize>) -> Result<f64, ParseError> {
        let text = self
            .line
            .get(range)
            .ok_or(ParseError::MissingField(field))?;
        text.parse().map_err(|_| ParseError::BadNumber {
            field,
            value: text.to_string(),
        })
    }
}

impl ReadingParser for GsiLine<'_> {
    fn is_valid(&self) -> bool {
        REQUIRED_WORDS
            .iter()
            .all(|&(offset, word)| self.line.get(offset..offset + 2) == Some(word))
    }

    fn parse_slope_distance(&self) -> Result<f64, ParseError> {
        Ok(self.digits("slope distance", SD_DIGITS)? / 1000.0)
    }

    fn parse_horizontal_angle(&self) -> Result<f64, ParseError> {
        Ok(from_packed_dms(self.digits("horizontal angle", HA_DIGITS)? / 10.0))
    }

    /// The vertical circle transmits a zenith angle; remap it so 0° is a
    /// level sight and depressions wrap toward 360°.
    fn parse_vertical_angle(&self) -> Result<f64, ParseError> {
        let dms = from_packed_dms(self.digits("vertical angle", VA_DIGITS)? / 10.0);
        Ok(if dms <= 90.0 { 90.0 - dms } else { 450.0 - dms })
    }
}
