//! Abtastung des Pfads über den globalen Fortschrittswert.

use glam::Vec2;

use crate::core::{Path, PathError};
use crate::shared::curve_geometry::segment_point;

use super::easing::ease_in_out_quad;
use super::heading::interpolate_heading;

/// Maximaler globaler Fortschrittswert (1000 = 100 %, also Prozent × 10).
pub const MAX_PROGRESS: f32 = 1000.0;

/// Ein Abtastergebnis: Position in Feldeinheiten plus Ausrichtung in Grad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSample {
    /// Position des Roboters
    pub position: Vec2,
    /// Ausrichtung in Grad, normalisiert
    pub heading: f32,
}

/// Tastet den Pfad beim globalen Fortschritt `global_progress` ab.
///
/// Der ganzzahlige Teil des reellen Segment-Index wählt das aktive Segment,
/// der Nachkommateil wird geeast und bestimmt Position (Dispatch über die
/// Kurvenform) und Ausrichtung (kürzerer Bogen zwischen Eintritts- und
/// Endausrichtung).
///
/// Fortschritt außerhalb von [0, 1000] wird defensiv geklemmt; die
/// Schleifen-Logik (zurück auf 0 bei ≥ 1000) gehört dem externen Tick-Treiber,
/// siehe [`advance_progress`]. Am oberen Rand (exakt 1000) wird das letzte
/// Segment bei `t = 1` abgetastet, der Endpunkt kommt also exakt zurück.
pub fn sample_path(path: &Path, global_progress: f32) -> Result<PathSample, PathError> {
    if !global_progress.is_finite() {
        return Err(PathError::InvalidInput {
            context: "globaler Fortschritt",
        });
    }
    path.validate()?;

    let segment_count = path.segment_count();
    let clamped = global_progress.clamp(0.0, MAX_PROGRESS);
    if clamped != global_progress {
        log::debug!(
            "Globaler Fortschritt {} ausserhalb [0, {}], geklemmt",
            global_progress,
            MAX_PROGRESS
        );
    }

    // Reeller Segment-Index: Ganzzahlteil = aktives Segment, Rest = lokale Progression
    let percent = clamped / 10.0;
    let segment_position = segment_count as f32 * percent / 100.0;
    let whole = segment_position.floor() as usize;
    let active_index = whole.min(segment_count - 1);
    let local_linear = if whole >= segment_count {
        1.0
    } else {
        segment_position - segment_position.floor()
    };
    let local_t = ease_in_out_quad(local_linear);

    let entry = path.entry_point(active_index).ok_or(PathError::EmptyPath)?;
    let segment = &path.segments()[active_index];

    Ok(PathSample {
        position: segment_point(entry.position, &segment.kind, segment.end.position, local_t),
        heading: interpolate_heading(entry.heading, segment.end.heading, local_t),
    })
}

/// Schaltet den Fortschritt für den nächsten Tick weiter.
///
/// Bei ≥ 1000 springt der Wert zurück auf 0 (Endlosschleife der Wiedergabe);
/// der Timer selbst lebt beim Aufrufer.
pub fn advance_progress(progress: f32, step: f32) -> f32 {
    if progress >= MAX_PROGRESS {
        0.0
    } else {
        progress + step
    }
}

/// Dichte, ungeeaste Polyline des gesamten Pfads für die Streckenvorschau.
///
/// Je Segment `samples_per_segment - 1` Zwischenpunkte plus der exakte
/// Endpunkt; Nahtpunkte erscheinen genau einmal, der erste Eintrag ist der
/// Pfadstart.
pub fn trajectory_polyline(
    path: &Path,
    samples_per_segment: usize,
) -> Result<Vec<Vec2>, PathError> {
    if samples_per_segment == 0 {
        return Err(PathError::InvalidInput {
            context: "samples_per_segment",
        });
    }
    path.validate()?;

    let mut polyline = Vec::with_capacity(path.segment_count() * samples_per_segment + 1);
    polyline.push(path.start().position);

    for (index, segment) in path.segments().iter().enumerate() {
        let entry = path.entry_point(index).ok_or(PathError::EmptyPath)?;
        for i in 1..samples_per_segment {
            let t = i as f32 / samples_per_segment as f32;
            polyline.push(segment_point(
                entry.position,
                &segment.kind,
                segment.end.position,
                t,
            ));
        }
        // Endpunkt exakt übernehmen statt über t = 1 zu runden
        polyline.push(segment.end.position);
    }

    Ok(polyline)
}
