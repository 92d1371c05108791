//! Winkel-Interpolation auf dem kürzeren Bogen.

/// Normalisiert einen Winkel (Grad) in den Bereich (-180, 180].
///
/// `rem_euclid` liefert auch für negative Eingaben einen Rest in [0, 360).
pub fn normalize_heading(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Interpoliert zwischen zwei Ausrichtungen entlang des kürzeren Bogens.
///
/// Beide Winkel werden zuerst normalisiert; das Delta wird so verschoben,
/// dass nie "außen herum" gedreht wird (Delta in [-180, 180]). Das Ergebnis
/// wird über `((r + 180) mod 360) - 180` zurück in den Normbereich gelegt.
pub fn interpolate_heading(start_degrees: f32, end_degrees: f32, t: f32) -> f32 {
    let start = normalize_heading(start_degrees);
    let end = normalize_heading(end_degrees);

    let mut delta = end - start;
    if delta > 180.0 {
        delta -= 360.0;
    }
    if delta < -180.0 {
        delta += 360.0;
    }

    (start + delta * t + 180.0).rem_euclid(360.0) - 180.0
}
