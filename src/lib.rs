//! Core computation engine for total-station survey reduction.
//!
//! Raw instrument lines are normalized into [`Reading`] values, resolved
//! against an occupied [`Station`] into planar grid coordinates, and
//! exchanged with the geographic world through one fixed grid projection.
//! Every operation is a pure function over value types; persistence,
//! transport and rendering belong to the callers.

pub mod angle;
pub mod crs;
pub mod error;
pub mod geometry;
pub mod instrument;
pub mod surveying;

pub use crs::{GeoPoint, GridCrs, GRID};
pub use error::{DegenerateReading, ParseError};
pub use geometry::Point;
pub use instrument::{parse_reading, InstrumentFormat, ReadingParser};
pub use surveying::{resolve, unresolve, Reading, Station};
