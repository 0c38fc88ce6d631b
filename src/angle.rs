//! Sexagesimal angle encoding used by instrument logs and export formats.
//!
//! Angles travel in two packings: a text form `D.MMSS` where the four digits
//! after the decimal point are minutes and seconds, and a packed integer form
//! `DDDMMSS(s)` emitted by instruments. Both share the same decomposition.

use crate::error::ParseError;

/// Encodes a decimal-degree angle as `D.MMSS` text.
///
/// Minutes and seconds are truncated, never rounded, and always rendered with
/// two digits each, so `0.0` encodes as `"0.0000"`.
pub fn encode_raw(angle: f64) -> String {
    let degrees = angle.trunc() as i64;
    let frac = angle.fract();
    let minutes = (frac * 60.0).floor() as i64 % 60;
    let seconds = (frac * 3600.0).floor() as i64 % 60;
    format!("{}.{:02}{:02}", degrees, minutes, seconds)
}

/// Decodes a `D.MMSS` string produced by [`encode_raw`] back to decimal
/// degrees, exact to the truncated second.
pub fn decode_raw(text: &str) -> Result<f64, ParseError> {
    let bad = || ParseError::BadAngle(text.to_string());
    let (deg_part, frac_part) = text.split_once('.').ok_or_else(bad)?;
    let minute_digits = frac_part.get(..2).ok_or_else(bad)?;
    let second_digits = frac_part.get(2..4).ok_or_else(bad)?;
    let degrees: f64 = deg_part.parse().map_err(|_| bad())?;
    let minutes: f64 = minute_digits.parse().map_err(|_| bad())?;
    let seconds: f64 = second_digits.parse().map_err(|_| bad())?;
    Ok(degrees + minutes / 60.0 + seconds / 3600.0)
}

/// Decodes a packed `DDDMMSS(.s)` value into decimal degrees.
///
/// Shared by every instrument dialect. Fractional input carries tenths of
/// a second and is preserved in the seconds term.
pub fn from_packed_dms(raw: f64) -> f64 {
    let seconds = raw % 100.0;
    let minutes = (raw / 100.0).trunc() % 100.0;
    let degrees = (raw / 10000.0).trunc();
    degrees + minutes / 60.0 + seconds / 3600.0
}

/// Formats an angle for display as `D°M'S"` with seconds rounded.
pub fn format_dms(angle: f64) -> String {
    let sign = if angle < 0.0 { "-" } else { "" };
    let a = angle.abs();
    let degrees = a.trunc() as i64;
    let minutes = (a.fract() * 60.0).trunc() as i64;
    let seconds = ((a.fract() * 60.0 - minutes as f64) * 60.0).round() as i64;
    format!("{}{}\u{00B0}{}'{}\"", sign, degrees, minutes, seconds)
}
