/// Total length of an ordered path, rounded up to a whole pixel.
///
/// Sequences with fewer than two points have no length.
#[must_use]
pub fn polyline_length(points: &[(f64, f64)]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }

    points
        .windows(2)
        .map(|pair| {
            let (x1, y1) = pair[0];
            let (x2, y2) = pair[1];
            (x2 - x1).hypot(y2 - y1)
        })
        .sum::<f64>()
        .ceil()
}
