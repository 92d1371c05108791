//! Treffer-Test für das interaktive Anfassen von Pfadpunkten.

use glam::Vec2;

use crate::core::{Path, PointRef};

/// Prüft ob `cursor` innerhalb des Pick-Radius um `point` liegt.
///
/// Vergleich über die quadrierte euklidische Distanz; beide Koordinaten
/// müssen in derselben Einheit vorliegen (die Umrechnung zwischen
/// Feldeinheiten und Anzeige-Pixeln macht der Aufrufer).
pub fn is_within_pick_radius(point: Vec2, cursor: Vec2, pick_radius: f32) -> bool {
    point.distance_squared(cursor) <= pick_radius * pick_radius
}

/// Findet den angefassten Punkt des Pfads unter dem Cursor.
///
/// Geprüft wird in Zeichenreihenfolge (Start, dann je Segment Endpunkt und
/// Kontrollpunkte). Bei überlappenden Pick-Radien gewinnt der zuletzt
/// geprüfte Punkt — der liegt beim Zeichnen obenauf.
pub fn pick_path_point(path: &Path, cursor: Vec2, pick_radius: f32) -> Option<PointRef> {
    let mut hit = None;
    for (point_ref, position) in path.points() {
        if is_within_pick_radius(position, cursor, pick_radius) {
            hit = Some(point_ref);
        }
    }
    hit
}
