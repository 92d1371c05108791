//! Robot Path Engine.
//!
//! Geometrie- und Playback-Engine für 2D-Roboter-Trajektorien: ein Pfad aus
//! Geraden, quadratischen und kubischen Bézier-Segmenten wird über einen
//! globalen Fortschrittswert (0–1000) abgetastet und liefert Position plus
//! Ausrichtung des simulierten Roboters. Rendering, Timer und Widget-Logik
//! sind bewusst ausgelagert — diese Crate rechnet nur.

pub mod core;
pub mod pick;
pub mod playback;
pub mod shared;

pub use core::{Path, PathError, PathPoint, PointRef, Segment, SegmentKind};
pub use pick::{is_within_pick_radius, pick_path_point};
pub use playback::{
    advance_progress, ease_in_out_quad, interpolate_heading, normalize_heading, sample_path,
    trajectory_polyline, PathSample, MAX_PROGRESS,
};
