//! Coordinate geometry (COGO) utilities used in surveying operations.
//!
//! Bearings are decimal degrees in `[0,360)` measured from the positive X
//! axis with 90° toward positive Y. The quadrant is resolved by an explicit
//! sign split so axis-aligned sights return exact cardinal values.

use crate::error::DegenerateReading;
use crate::geometry::{self, Point};

/// Computes the survey bearing from point `a` to point `b`.
pub fn bearing(a: Point, b: Point) -> Result<f64, DegenerateReading> {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    if dx == 0.0 && dy == 0.0 {
        return Err(DegenerateReading);
    }
    if dy == 0.0 {
        return Ok(if dx > 0.0 { 0.0 } else { 180.0 });
    }
    if dx == 0.0 {
        return Ok(if dy > 0.0 { 90.0 } else { 270.0 });
    }
    let reduced = (dy / dx).abs().atan().to_degrees();
    Ok(if dx > 0.0 && dy > 0.0 {
        reduced
    } else if dx < 0.0 && dy > 0.0 {
        180.0 - reduced
    } else if dx < 0.0 && dy < 0.0 {
        180.0 + reduced
    } else {
        360.0 - reduced
    })
}

/// Computes the polyline drawing direction from `a` to `b`.
///
/// Same inputs as [`bearing`] but with the quadrant convention mirrored
/// about the Y axis for screen-space polyline rendering. The two functions
/// are not interchangeable.
pub fn screen_bearing(a: Point, b: Point) -> Result<f64, DegenerateReading> {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    if dx == 0.0 && dy == 0.0 {
        return Err(DegenerateReading);
    }
    if dy == 0.0 {
        return Ok(if dx > 0.0 { 0.0 } else { 180.0 });
    }
    if dx == 0.0 {
        return Ok(if dy > 0.0 { 270.0 } else { 90.0 });
    }
    let reduced = (dy / dx).abs().atan().to_degrees();
    Ok(if dx > 0.0 && dy > 0.0 {
        360.0 - reduced
    } else if dx < 0.0 && dy > 0.0 {
        180.0 + reduced
    } else if dx < 0.0 && dy < 0.0 {
        180.0 - reduced
    } else {
        reduced
    })
}

/// Computes a new point from a starting point, a bearing in degrees and a
/// distance.
pub fn forward(start: Point, bearing: f64, distance: f64) -> Point {
    let rad = bearing.to_radians();
    Point::new(
        start.x + distance * rad.cos(),
        start.y + distance * rad.sin(),
    )
}

/// Returns the point at `distance` from `start` along the segment toward
/// `end`. Distances beyond the segment length extrapolate past `end`.
pub fn point_along(start: Point, end: Point, distance: f64) -> Result<Point, DegenerateReading> {
    let len = geometry::distance(start, end);
    if len == 0.0 {
        return Err(DegenerateReading);
    }
    let t = distance / len;
    Ok(Point::new(
        start.x + t * (end.x - start.x),
        start.y + t * (end.y - start.y),
    ))
}

/// Survey bearing of every consecutive vertex pair of a polyline.
pub fn segment_bearings(vertices: &[Point]) -> Result<Vec<f64>, DegenerateReading> {
    vertices
        .windows(2)
        .map(|pair| bearing(pair[0], pair[1]))
        .collect()
}
