//! Pfadsegmente: Gerade, quadratische oder kubische Bézier-Kurve.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::{PathError, PathPoint};

/// Kurvenform eines Segments.
///
/// Die Form ist als Variante kodiert statt als Kontrollpunkt-Liste — der
/// ungültige Zustand "3+ Kontrollpunkte" ist damit gar nicht darstellbar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SegmentKind {
    /// Gerade vom Eintrittspunkt zum Endpunkt
    Line,
    /// Quadratische Bézier-Kurve mit einem Kontrollpunkt
    Quadratic { control: Vec2 },
    /// Kubische Bézier-Kurve mit zwei Kontrollpunkten
    Cubic { control1: Vec2, control2: Vec2 },
}

impl SegmentKind {
    /// Baut die Kurvenform aus einer rohen Kontrollpunkt-Liste.
    ///
    /// Listen mit mehr als zwei Einträgen werden abgewiesen.
    pub fn from_control_points(points: &[Vec2]) -> Result<Self, PathError> {
        match points {
            [] => Ok(SegmentKind::Line),
            [c] => Ok(SegmentKind::Quadratic { control: *c }),
            [c1, c2] => Ok(SegmentKind::Cubic {
                control1: *c1,
                control2: *c2,
            }),
            _ => Err(PathError::MalformedSegment {
                control_points: points.len(),
            }),
        }
    }

    /// Kontrollpunkte in Kurvenreihenfolge.
    pub fn control_points(&self) -> Vec<Vec2> {
        match self {
            SegmentKind::Line => Vec::new(),
            SegmentKind::Quadratic { control } => vec![*control],
            SegmentKind::Cubic { control1, control2 } => vec![*control1, *control2],
        }
    }

    /// Anzahl der Kontrollpunkte (0, 1 oder 2).
    pub fn control_point_count(&self) -> usize {
        match self {
            SegmentKind::Line => 0,
            SegmentKind::Quadratic { .. } => 1,
            SegmentKind::Cubic { .. } => 2,
        }
    }

    /// Prüft ob alle Kontrollpunkte endlich sind.
    pub fn is_finite(&self) -> bool {
        match self {
            SegmentKind::Line => true,
            SegmentKind::Quadratic { control } => control.is_finite(),
            SegmentKind::Cubic { control1, control2 } => {
                control1.is_finite() && control2.is_finite()
            }
        }
    }
}

/// Ein Pfadsegment: Endpunkt, Kurvenform und Anzeige-Farbe.
///
/// Der Eintrittspunkt gehört nicht zum Segment — er ist der Endpunkt des
/// Vorgängers bzw. der Startpunkt des Pfads (siehe [`super::Path`]).
/// Die Farbe ist ein reines Anzeige-Tag ohne geometrische Bedeutung.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SegmentRecord", into = "SegmentRecord")]
pub struct Segment {
    /// Endpunkt des Segments (inkl. Zielausrichtung)
    pub end: PathPoint,
    /// Kurvenform
    pub kind: SegmentKind,
    /// Anzeige-Farbe als Hex-String
    pub color: String,
}

impl Segment {
    /// Gerades Segment.
    pub fn line(end: PathPoint, color: impl Into<String>) -> Self {
        Self {
            end,
            kind: SegmentKind::Line,
            color: color.into(),
        }
    }

    /// Quadratisches Bézier-Segment.
    pub fn quadratic(end: PathPoint, control: Vec2, color: impl Into<String>) -> Self {
        Self {
            end,
            kind: SegmentKind::Quadratic { control },
            color: color.into(),
        }
    }

    /// Kubisches Bézier-Segment.
    pub fn cubic(end: PathPoint, control1: Vec2, control2: Vec2, color: impl Into<String>) -> Self {
        Self {
            end,
            kind: SegmentKind::Cubic { control1, control2 },
            color: color.into(),
        }
    }

    /// Hängt einen Kontrollpunkt an (Gerade → quadratisch → kubisch).
    ///
    /// Bei bereits zwei Kontrollpunkten wird der Aufruf abgewiesen.
    pub fn add_control_point(&mut self, point: Vec2) -> Result<(), PathError> {
        self.kind = match self.kind {
            SegmentKind::Line => SegmentKind::Quadratic { control: point },
            SegmentKind::Quadratic { control } => SegmentKind::Cubic {
                control1: control,
                control2: point,
            },
            SegmentKind::Cubic { .. } => {
                return Err(PathError::MalformedSegment { control_points: 3 })
            }
        };
        Ok(())
    }

    /// Entfernt den Kontrollpunkt an `slot` (kubisch → quadratisch → Gerade).
    ///
    /// Gibt `false` zurück wenn der Slot nicht existiert.
    pub fn remove_control_point(&mut self, slot: usize) -> bool {
        self.kind = match (self.kind, slot) {
            (SegmentKind::Quadratic { .. }, 0) => SegmentKind::Line,
            (SegmentKind::Cubic { control2, .. }, 0) => SegmentKind::Quadratic {
                control: control2,
            },
            (SegmentKind::Cubic { control1, .. }, 1) => SegmentKind::Quadratic {
                control: control1,
            },
            _ => return false,
        };
        true
    }

    /// Prüft ob Endpunkt und Kontrollpunkte endlich sind.
    pub fn is_finite(&self) -> bool {
        self.end.is_finite() && self.kind.is_finite()
    }
}

/// Rohformat für die Serialisierung: Kontrollpunkte als Liste.
///
/// Beim Deserialisieren wird die 0–2-Kappung erzwungen, damit kein
/// fehlgeformtes Segment ins Modell gelangt.
#[derive(Serialize, Deserialize)]
struct SegmentRecord {
    end: PathPoint,
    control_points: Vec<Vec2>,
    color: String,
}

impl TryFrom<SegmentRecord> for Segment {
    type Error = PathError;

    fn try_from(record: SegmentRecord) -> Result<Self, PathError> {
        Ok(Segment {
            end: record.end,
            kind: SegmentKind::from_control_points(&record.control_points)?,
            color: record.color,
        })
    }
}

impl From<Segment> for SegmentRecord {
    fn from(segment: Segment) -> Self {
        SegmentRecord {
            end: segment.end,
            control_points: segment.kind.control_points(),
            color: segment.color,
        }
    }
}
