//! Surveying specific types and the polar-to-rectangular resolver.

use crate::error::DegenerateReading;
use crate::geometry::{self, Point};

pub mod cogo;
pub use cogo::{bearing, forward, point_along, screen_bearing, segment_bearings};

/// One normalized total-station observation.
///
/// Angles are decimal degrees in `[0,360)`. The vertical angle is referenced
/// to the horizon: 0° is a level sight and depression angles wrap toward
/// 360°. Instrument dialects that transmit zenith angles are remapped to this
/// convention by their parsers.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Reading {
    pub horizontal_angle: f64,
    pub vertical_angle: f64,
    pub slope_distance: f64,
}

impl Reading {
    pub fn new(horizontal_angle: f64, vertical_angle: f64, slope_distance: f64) -> Self {
        Self {
            horizontal_angle,
            vertical_angle,
            slope_distance,
        }
    }
}

/// Representation of an occupied survey station.
///
/// The backsight pair orients the instrument: `backsight_direction_angle` is
/// the known bearing from this station to its backsight target, and
/// `backsight_horizontal_angle` is the circle reading taken on that target.
/// Stations are created by the host application and never mutated here.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Station {
    pub name: String,
    pub position: Point,
    pub backsight_horizontal_angle: f64,
    pub backsight_direction_angle: f64,
}

impl Station {
    pub fn new(
        name: impl Into<String>,
        position: Point,
        backsight_horizontal_angle: f64,
        backsight_direction_angle: f64,
    ) -> Self {
        Self {
            name: name.into(),
            position,
            backsight_horizontal_angle,
            backsight_direction_angle,
        }
    }
}

/// Calculates the horizontal distance between two survey stations.
pub fn station_distance(a: &Station, b: &Station) -> f64 {
    geometry::distance(a.position, b.position)
}

/// Computes the planar coordinates of the point observed by `reading` from
/// `station`.
///
/// The circle reading is first reduced to a bearing through the station's
/// backsight orientation, then the slope distance is reduced to horizontal
/// and applied from the station position.
pub fn resolve(station: &Station, reading: &Reading) -> Result<Point, DegenerateReading> {
    if reading.slope_distance == 0.0 {
        return Err(DegenerateReading);
    }
    let mut beta = reading.horizontal_angle - station.backsight_horizontal_angle;
    if beta < 0.0 {
        beta += 360.0;
    }
    let mut direction = beta + station.backsight_direction_angle;
    if direction >= 360.0 {
        direction -= 360.0;
    }
    let horizontal = reading.slope_distance * reading.vertical_angle.to_radians().cos();
    Ok(cogo::forward(station.position, direction, horizontal))
}

/// Recovers the observation that would place a target at `target` when taken
/// from `station`.
///
/// `height_offset` is the vertical rise from the instrument axis to the
/// target in meters; pass `0.0` for a level sight. Fails when the target
/// coincides with the station.
pub fn unresolve(
    station: &Station,
    target: Point,
    height_offset: f64,
) -> Result<Reading, DegenerateReading> {
    let direction = cogo::bearing(station.position, target)?;
    let mut beta = direction - station.backsight_direction_angle;
    if beta < 0.0 {
        beta += 360.0;
    }
    let mut horizontal_angle = beta + station.backsight_horizontal_angle;
    if horizontal_angle >= 360.0 {
        horizontal_angle -= 360.0;
    }
    let horizontal = geometry::distance(station.position, target);
    let mut vertical_angle = height_offset.atan2(horizontal).to_degrees();
    if vertical_angle < 0.0 {
        vertical_angle += 360.0;
    }
    let slope_distance = horizontal.hypot(height_offset);
    Ok(Reading::new(horizontal_angle, vertical_angle, slope_distance))
}
