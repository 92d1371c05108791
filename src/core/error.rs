//! Fehlertaxonomie der Engine.
//!
//! Strukturelle Verletzungen (Segmentform, leerer Pfad) werden sofort
//! gemeldet; transiente Zustände wie Fortschritt außerhalb des Bereichs
//! werden stattdessen lokal geklemmt und tauchen hier nicht auf.

use thiserror::Error;

/// Fehler beim Aufbau oder Abtasten eines Pfads.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// Pfad ohne Segmente — darf per Invariante nie entstehen.
    #[error("Pfad enthaelt keine Segmente")]
    EmptyPath,

    /// Segmentform mit mehr als zwei Kontrollpunkten.
    #[error("Segment mit {control_points} Kontrollpunkten (erlaubt sind 0 bis 2)")]
    MalformedSegment { control_points: usize },

    /// Nicht-endlicher Eingabewert (NaN oder unendlich).
    #[error("nicht-endlicher Wert in {context}")]
    InvalidInput { context: &'static str },

    /// Das letzte verbleibende Segment darf nicht entfernt werden.
    #[error("das letzte Segment eines Pfads kann nicht entfernt werden")]
    LastSegment,

    /// Segment-Index außerhalb der Liste.
    #[error("Segment {index} existiert nicht")]
    UnknownSegment { index: usize },
}
