//! Space-delimited labeled record dialect (M5).
//!
//! Records interleave labels and values: `... M5|Adr <adr>|<id> <point>
//! |SD <dist> m |Hz <deg> DMS |V1 <deg> DMS`. Values are already decimal
//! degrees and meters, so no packed decoding is involved.

use crate::error::ParseError;

use super::ReadingParser;

/// Labels every record must carry.
const REQUIRED_LABELS: [&str; 6] = ["M5|Adr", "|SD", "m", "|Hz", "DMS", "|V1"];

const SD_TOKEN: usize = 5;
const HZ_TOKEN: usize = 8;
const V1_TOKEN: usize = 11;

/// One raw M5 record.
#[derive(Debug, Clone, Copy)]
pub struct M5Line<'a> {
    line: &'a str,
}

impl<'a> M5Line<'a> {
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

impl ReadingParser for M5Line<'_> {
    fn is_valid(&self) -> bool {
        REQUIRED_LABELS
            .iter()
            .all(|label| self.line.contains(label))
    }

    fn parse_slope_distance(&self) -> Result<f64, ParseError> {
        self.token("slope distance", SD_TOKEN)
    }

    fn parse_horizontal_angle(&self) -> Result<f64, ParseError> {
        self.token("horizontal angle", HZ_TOKEN)
    }

    fn parse_vertical_angle(&self) -> Result<f64, ParseError> {
        self.token("vertical angle", V1_TOKEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: &str = "For M5|Adr 00042|TI PT17 |SD 123.456 m |Hz 242.2768 DMS |V1 89.0794 DMS";

    #[test]
    fn requires_all_labels() {
        assert!(M5Line::new(LINE).is_valid());
        assert!(!M5Line::new("For M5|Adr 00042|TI PT17 |SD 123.456 m").is_valid());
    }

    #[test]
    fn parses_decimal_fields() {
        let rec = M5Line::new(LINE);
        assert!((rec.parse_slope_distance().unwrap() - 123.456).abs() < 1e-9);
        assert!((rec.parse_horizontal_angle().unwrap() - 242.2768).abs() < 1e-9);
        assert!((rec.parse_vertical_angle().unwrap() - 89.0794).abs() < 1e-9);
    }

    #[test]
    fn truncated_record_reports_missing_field() {
        let rec = M5Line::new("For M5|Adr 00042|TI PT17 |SD 123.456 m |Hz DMS |V1");
        assert_eq!(
            rec.parse_vertical_angle(),
            Err(ParseError::MissingField("vertical angle"))
        );
    }
}
