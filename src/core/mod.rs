//! Core-Domänentypen: Pfadpunkte, Segmente, Pfad und Fehler.

pub mod error;
pub mod path;
pub mod point;
pub mod segment;

pub use error::PathError;
pub use path::{Path, PointRef};
pub use point::PathPoint;
pub use segment::{Segment, SegmentKind};
