//! Easing der lokalen Segment-Progression.

/// Quadratisches Ease-In/Out.
///
/// `2t²` für `t < 0.5`, sonst `1 - (-2t+2)²/2`. Monoton auf [0, 1] mit den
/// Fixpunkten 0, 0.5 und 1. Macht aus der linearen lokalen Progression die
/// wahrgenommene Beschleunigung/Abbremsung an den Segmentgrenzen.
pub fn ease_in_out_quad(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}
