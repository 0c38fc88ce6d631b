//! Raw instrument line decoding.
//!
//! Each supported total-station dialect gets its own parser over one
//! borrowed line of text. Construction never validates; callers query
//! [`ReadingParser::is_valid`] explicitly, or go through [`parse_reading`]
//! which does it for them. All dialects decode packed angles through
//! [`crate::angle::from_packed_dms`].

use log::debug;

use crate::error::ParseError;
use crate::surveying::Reading;

pub mod fixed;
pub mod gsi;
pub mod m5;
pub mod tagged;

pub use fixed::FixedLine;
pub use gsi::GsiLine;
pub use m5::M5Line;
pub use tagged::TaggedLine;

/// Capability set shared by every instrument dialect.
pub trait ReadingParser {
    /// Whether the raw line satisfies this dialect's framing.
    fn is_valid(&self) -> bool;
    /// Slope distance in meters.
    fn parse_slope_distance(&self) -> Result<f64, ParseError>;
    /// Horizontal circle reading in decimal degrees.
    fn parse_horizontal_angle(&self) -> Result<f64, ParseError>;
    /// Vertical angle in decimal degrees, horizon-referenced.
    fn parse_vertical_angle(&self) -> Result<f64, ParseError>;
}

/// The closed set of supported instrument dialects. The host application
/// selects one from its configured instrument type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum InstrumentFormat {
    /// Word-addressed block format (GSI).
    Gsi,
    /// Tag-prefixed manufacturer raw stream (`HA:`/`VA:`/`SD:` fields).
    Tagged,
    /// Fixed-width three-field numeric rows.
    Fixed,
    /// Space-delimited labeled records (M5).
    M5,
}

impl InstrumentFormat {
    fn name(self) -> &'static str {
        match self {
            InstrumentFormat::Gsi => "GSI",
            InstrumentFormat::Tagged => "tagged raw",
            InstrumentFormat::Fixed => "fixed-width",
            InstrumentFormat::M5 => "M5",
        }
    }
}

/// Validates `line` against the selected dialect and extracts one
/// [`Reading`] from it.
pub fn parse_reading(format: InstrumentFormat, line: &str) -> Result<Reading, ParseError> {
    match format {
        InstrumentFormat::Gsi => extract(GsiLine::new(line), format),
        InstrumentFormat::Tagged => extract(TaggedLine::new(line), format),
        InstrumentFormat::Fixed => extract(FixedLine::new(line), format),
        InstrumentFormat::M5 => extract(M5Line::new(line), format),
    }
}

fn extract<P: ReadingParser>(parser: P, format: InstrumentFormat) -> Result<Reading, ParseError> {
    if !parser.is_valid() {
        debug!("rejected {} line", format.name());
        return Err(ParseError::InvalidLine(format.name()));
    }
    Ok(Reading::new(
        parser.parse_horizontal_angle()?,
        parser.parse_vertical_angle()?,
        parser.parse_slope_distance()?,
    ))
}
