//! Die zentrale Pfad-Datenstruktur: Startpunkt plus geordnete Segmentliste.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::{PathError, PathPoint, Segment, SegmentKind};

/// Feste Farbpalette für neue Segmente (Anzeige-Tags, zyklisch vergeben).
const SEGMENT_COLORS: [&str; 6] = [
    "#8C9BD4", "#D48C9B", "#9BD48C", "#D4C98C", "#8CD4C9", "#C98CD4",
];

/// Verweis auf einen anfassbaren Punkt des Pfads.
///
/// Mutationen laufen über diese expliziten Indizes statt über Aliasing in
/// die internen Listen — so bleibt der Pfad von außen nur lesbar, solange
/// niemand eine Mutations-Methode aufruft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointRef {
    /// Startpunkt des Pfads
    Start,
    /// Endpunkt des Segments mit diesem Index
    End(usize),
    /// Kontrollpunkt `slot` (0 oder 1) des Segments mit diesem Index
    Control(usize, usize),
}

/// Ein Pfad: ein Startpunkt plus eine nie leere Segmentliste.
///
/// Der Eintrittspunkt von Segment `i > 0` ist der Endpunkt von Segment
/// `i - 1`; Segment 0 beginnt am Startpunkt. Die Engine liest den Pfad nur —
/// mutiert wird ausschließlich über die Methoden hier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PathRecord", into = "PathRecord")]
pub struct Path {
    start: PathPoint,
    segments: Vec<Segment>,
}

impl Path {
    /// Erstellt einen Pfad; eine leere Segmentliste wird abgewiesen.
    pub fn new(start: PathPoint, segments: Vec<Segment>) -> Result<Self, PathError> {
        if segments.is_empty() {
            return Err(PathError::EmptyPath);
        }
        Ok(Self { start, segments })
    }

    /// Der Beispiel-Pfad auf dem 144×144-Feld, mit dem der Editor startet.
    pub fn default_field_path() -> Self {
        let start = PathPoint::new(83.976, 7.257, -90.0);
        let segments = vec![
            Segment::line(PathPoint::new(83.976, 35.489, -90.0), SEGMENT_COLORS[0]),
            Segment::cubic(
                PathPoint::new(123.7, 35.489, 180.0),
                Vec2::new(97.412, 28.771),
                Vec2::new(110.118, 41.623),
                SEGMENT_COLORS[1],
            ),
            Segment::line(PathPoint::new(10.661, 35.781, 180.0), SEGMENT_COLORS[2]),
            Segment::quadratic(
                PathPoint::new(123.7, 42.791, 180.0),
                Vec2::new(54.913, 97.266),
                SEGMENT_COLORS[3],
            ),
        ];
        Self { start, segments }
    }

    /// Startpunkt des Pfads.
    pub fn start(&self) -> PathPoint {
        self.start
    }

    /// Alle Segmente in Traversierungsreihenfolge.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Anzahl der Segmente (per Invariante ≥ 1).
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Segment an `index`, veränderbar (z. B. für Kontrollpunkt-Operationen).
    pub fn segment_mut(&mut self, index: usize) -> Option<&mut Segment> {
        self.segments.get_mut(index)
    }

    /// Eintrittspunkt des Segments an `index`.
    ///
    /// Für Segment 0 der Startpunkt, sonst der Endpunkt des Vorgängers.
    pub fn entry_point(&self, index: usize) -> Option<PathPoint> {
        if index >= self.segments.len() {
            return None;
        }
        if index == 0 {
            Some(self.start)
        } else {
            Some(self.segments[index - 1].end)
        }
    }

    /// Hängt ein gerades Segment mit Endpunkt `position` an.
    ///
    /// Die Zielausrichtung wird vom bisher letzten Endpunkt übernommen, die
    /// Farbe zyklisch aus der Palette vergeben.
    pub fn add_segment(&mut self, position: Vec2) -> usize {
        let heading = self
            .segments
            .last()
            .map(|segment| segment.end.heading)
            .unwrap_or(self.start.heading);
        let color = SEGMENT_COLORS[self.segments.len() % SEGMENT_COLORS.len()];
        self.segments.push(Segment::line(
            PathPoint {
                position,
                heading,
            },
            color,
        ));
        self.segments.len() - 1
    }

    /// Entfernt das Segment an `index`.
    ///
    /// Das letzte verbleibende Segment kann nicht entfernt werden — ein Pfad
    /// ist nie leer.
    pub fn remove_segment(&mut self, index: usize) -> Result<Segment, PathError> {
        if self.segments.len() <= 1 {
            return Err(PathError::LastSegment);
        }
        if index >= self.segments.len() {
            return Err(PathError::UnknownSegment { index });
        }
        Ok(self.segments.remove(index))
    }

    /// Position des referenzierten Punkts, falls er existiert.
    pub fn point(&self, point_ref: PointRef) -> Option<Vec2> {
        match point_ref {
            PointRef::Start => Some(self.start.position),
            PointRef::End(index) => self.segments.get(index).map(|s| s.end.position),
            PointRef::Control(index, slot) => self
                .segments
                .get(index)
                .and_then(|s| s.kind.control_points().get(slot).copied()),
        }
    }

    /// Verschiebt den referenzierten Punkt an `position`.
    ///
    /// Gibt `false` zurück wenn der Verweis ins Leere zeigt.
    pub fn move_point(&mut self, point_ref: PointRef, position: Vec2) -> bool {
        match point_ref {
            PointRef::Start => {
                self.start.position = position;
                true
            }
            PointRef::End(index) => match self.segments.get_mut(index) {
                Some(segment) => {
                    segment.end.position = position;
                    true
                }
                None => false,
            },
            PointRef::Control(index, slot) => {
                let Some(segment) = self.segments.get_mut(index) else {
                    return false;
                };
                match (&mut segment.kind, slot) {
                    (SegmentKind::Quadratic { control }, 0) => {
                        *control = position;
                        true
                    }
                    (SegmentKind::Cubic { control1, .. }, 0) => {
                        *control1 = position;
                        true
                    }
                    (SegmentKind::Cubic { control2, .. }, 1) => {
                        *control2 = position;
                        true
                    }
                    _ => false,
                }
            }
        }
    }

    /// Setzt die Zielausrichtung des Start- oder eines Endpunkts.
    ///
    /// Kontrollpunkte tragen keine Ausrichtung; für sie gibt es `false`.
    pub fn set_heading(&mut self, point_ref: PointRef, heading: f32) -> bool {
        match point_ref {
            PointRef::Start => {
                self.start.heading = heading;
                true
            }
            PointRef::End(index) => match self.segments.get_mut(index) {
                Some(segment) => {
                    segment.end.heading = heading;
                    true
                }
                None => false,
            },
            PointRef::Control(..) => false,
        }
    }

    /// Alle anfassbaren Punkte in Zeichenreihenfolge:
    /// Start, dann je Segment Endpunkt gefolgt von den Kontrollpunkten.
    pub fn points(&self) -> impl Iterator<Item = (PointRef, Vec2)> + '_ {
        let start = std::iter::once((PointRef::Start, self.start.position));
        let rest = self.segments.iter().enumerate().flat_map(|(index, segment)| {
            let end = std::iter::once((PointRef::End(index), segment.end.position));
            let controls = segment
                .kind
                .control_points()
                .into_iter()
                .enumerate()
                .map(move |(slot, position)| (PointRef::Control(index, slot), position));
            end.chain(controls)
        });
        start.chain(rest)
    }

    /// Prüft die strukturellen Invarianten: Segmentliste nie leer, alle
    /// Koordinaten und Ausrichtungen endlich.
    pub fn validate(&self) -> Result<(), PathError> {
        if self.segments.is_empty() {
            return Err(PathError::EmptyPath);
        }
        if !self.start.is_finite() {
            return Err(PathError::InvalidInput {
                context: "Startpunkt",
            });
        }
        if self.segments.iter().any(|segment| !segment.is_finite()) {
            return Err(PathError::InvalidInput {
                context: "Segment",
            });
        }
        Ok(())
    }
}

/// Rohformat für die Serialisierung; erzwingt die Nie-leer-Invariante.
#[derive(Serialize, Deserialize)]
struct PathRecord {
    start: PathPoint,
    segments: Vec<Segment>,
}

impl TryFrom<PathRecord> for Path {
    type Error = PathError;

    fn try_from(record: PathRecord) -> Result<Self, PathError> {
        Path::new(record.start, record.segments)
    }
}

impl From<Path> for PathRecord {
    fn from(path: Path) -> Self {
        PathRecord {
            start: path.start,
            segments: path.segments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_empty_segment_list() {
        let result = Path::new(PathPoint::new(0.0, 0.0, 0.0), Vec::new());
        assert_eq!(result.unwrap_err(), PathError::EmptyPath);
    }

    #[test]
    fn entry_point_chains_segment_endpoints() {
        let path = Path::default_field_path();

        assert_eq!(path.entry_point(0).unwrap(), path.start());
        assert_eq!(path.entry_point(1).unwrap(), path.segments()[0].end);
        assert_eq!(path.entry_point(3).unwrap(), path.segments()[2].end);
        assert!(path.entry_point(4).is_none());
    }

    #[test]
    fn remove_segment_refuses_the_last_one() {
        let mut path = Path::new(
            PathPoint::new(0.0, 0.0, 0.0),
            vec![Segment::line(PathPoint::new(10.0, 0.0, 0.0), "#8C9BD4")],
        )
        .unwrap();

        assert_eq!(path.remove_segment(0), Err(PathError::LastSegment));
        assert_eq!(path.segment_count(), 1);
    }

    #[test]
    fn add_segment_inherits_last_heading() {
        let mut path = Path::default_field_path();
        let index = path.add_segment(Vec2::new(50.0, 50.0));

        assert_eq!(index, 4);
        assert_eq!(path.segments()[4].end.heading, 180.0);
        assert_eq!(path.segments()[4].kind, SegmentKind::Line);
    }

    #[test]
    fn move_point_via_point_ref() {
        let mut path = Path::default_field_path();

        assert!(path.move_point(PointRef::Control(1, 1), Vec2::new(100.0, 40.0)));
        assert_eq!(
            path.point(PointRef::Control(1, 1)).unwrap(),
            Vec2::new(100.0, 40.0)
        );

        // Segment 0 ist eine Gerade: kein Kontrollpunkt-Slot vorhanden
        assert!(!path.move_point(PointRef::Control(0, 0), Vec2::ZERO));
        assert!(!path.move_point(PointRef::End(9), Vec2::ZERO));
    }

    #[test]
    fn set_heading_only_applies_to_anchor_points() {
        let mut path = Path::default_field_path();

        assert!(path.set_heading(PointRef::Start, 42.0));
        assert_eq!(path.start().heading, 42.0);
        assert!(!path.set_heading(PointRef::Control(1, 0), 0.0));
    }

    #[test]
    fn validate_flags_non_finite_coordinates() {
        let mut path = Path::default_field_path();
        path.move_point(PointRef::End(0), Vec2::new(f32::NAN, 0.0));

        assert_eq!(
            path.validate(),
            Err(PathError::InvalidInput { context: "Segment" })
        );
    }

    #[test]
    fn points_iterates_in_draw_order() {
        let path = Path::default_field_path();
        let refs: Vec<PointRef> = path.points().map(|(point_ref, _)| point_ref).collect();

        assert_eq!(refs[0], PointRef::Start);
        assert_eq!(refs[1], PointRef::End(0));
        assert_eq!(refs[2], PointRef::End(1));
        assert_eq!(refs[3], PointRef::Control(1, 0));
        assert_eq!(refs[4], PointRef::Control(1, 1));
        // 1 Start + 4 Endpunkte + 3 Kontrollpunkte
        assert_eq!(refs.len(), 8);
    }
}
