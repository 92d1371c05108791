//! Ankerpunkte des Pfads.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Ein Ankerpunkt: Position in Feldeinheiten plus Zielausrichtung in Grad.
///
/// Die Ausrichtung wird unnormalisiert gespeichert (so wie der Nutzer sie
/// eingibt); normalisiert wird erst bei der Winkel-Interpolation.
/// Kontrollpunkte tragen keine Ausrichtung und sind schlicht [`Vec2`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    /// Position in Feldeinheiten
    pub position: Vec2,
    /// Ausrichtung in Grad
    pub heading: f32,
}

impl PathPoint {
    /// Erstellt einen Punkt aus Koordinaten und Ausrichtung.
    pub fn new(x: f32, y: f32, heading: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            heading,
        }
    }

    /// Prüft ob alle Komponenten endlich sind.
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.heading.is_finite()
    }
}
