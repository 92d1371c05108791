//! Playback: globaler Fortschritt → Position und Ausrichtung.

pub mod easing;
pub mod evaluator;
pub mod heading;

pub use easing::ease_in_out_quad;
pub use evaluator::{
    advance_progress, sample_path, trajectory_polyline, PathSample, MAX_PROGRESS,
};
pub use heading::{interpolate_heading, normalize_heading};
