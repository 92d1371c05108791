//! Reine Geometrie-Funktionen für Pfadsegmente (Lerp, Bézier).
//!
//! Layer-neutral und vollständig in Feldeinheiten — jede Pixel- oder
//! DPI-Skalierung ist Sache des Renderers und wird hier nie hineingereicht.

use glam::Vec2;

use crate::core::SegmentKind;

/// Punkt auf der Geraden von `a` nach `b` bei Parameter `t`.
///
/// Keine Klemmung: außerhalb von [0, 1] wird linear extrapoliert, der
/// Aufrufer liefert begrenzte Parameter.
pub fn line_point(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    a + (b - a) * t
}

/// B(t) = (1-t)²·P0 + 2(1-t)t·C + t²·P1
pub fn quadratic_bezier(p0: Vec2, c: Vec2, p1: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    inv * inv * p0 + 2.0 * inv * t * c + t * t * p1
}

/// B(t) = (1-t)³·P0 + 3(1-t)²t·C1 + 3(1-t)t²·C2 + t³·P1
///
/// Ausmultipliziertes Polynom — keine De-Casteljau-Zwischenpunkte.
pub fn cubic_bezier(p0: Vec2, c1: Vec2, c2: Vec2, p1: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * c1 + 3.0 * inv * t2 * c2 + t2 * t * p1
}

/// Punkt auf einem Segment: Dispatch über die Kurvenform.
///
/// `entry` ist der Eintrittspunkt (Endpunkt des Vorgängers bzw. Pfadstart),
/// `end` der Endpunkt des Segments.
pub fn segment_point(entry: Vec2, kind: &SegmentKind, end: Vec2, t: f32) -> Vec2 {
    match kind {
        SegmentKind::Line => line_point(entry, end, t),
        SegmentKind::Quadratic { control } => quadratic_bezier(entry, *control, end, t),
        SegmentKind::Cubic { control1, control2 } => {
            cubic_bezier(entry, *control1, *control2, end, t)
        }
    }
}
