// File: crates/likeplot-core/src/curve.rs
// Summary: Natural cubic spline through a polyline, emitted as Bezier path segments.

use crate::geometry::Point;
use crate::scene::Segment;

/// Bezier control points for a natural cubic spline through `x` (one axis).
///
/// Returns `(first, second)` control values per segment, i.e. `x.len() - 1`
/// entries each. The spline has zero second derivative at both ends.
pub fn natural_control_points(x: &[f64]) -> (Vec<f64>, Vec<f64>) {
    if x.len() < 2 {
        return (Vec::new(), Vec::new());
    }
    let n = x.len() - 1;
    let mut a = vec![0.0; n];
    let mut b = vec![0.0; n];
    let mut r = vec![0.0; n];

    // Tridiagonal system (Thomas algorithm).
    a[0] = 0.0;
    b[0] = 2.0;
    r[0] = x[0] + 2.0 * x[1];
    for i in 1..n.saturating_sub(1) {
        a[i] = 1.0;
        b[i] = 4.0;
        r[i] = 4.0 * x[i] + 2.0 * x[i + 1];
    }
    a[n - 1] = 2.0;
    b[n - 1] = 7.0;
    r[n - 1] = 8.0 * x[n - 1] + x[n];
    for i in 1..n {
        let m = a[i] / b[i - 1];
        b[i] -= m;
        r[i] -= m * r[i - 1];
    }
    a[n - 1] = r[n - 1] / b[n - 1];
    for i in (0..n - 1).rev() {
        a[i] = (r[i] - a[i + 1]) / b[i];
    }
    b[n - 1] = (x[n] + a[n - 1]) / 2.0;
    for i in 0..n - 1 {
        b[i] = 2.0 * x[i + 1] - a[i + 1];
    }
    (a, b)
}

/// Segments drawing a smooth curve from `points[0]` through every following point.
///
/// Fewer than two points yield nothing; exactly two yield one straight segment.
pub fn natural_segments(points: &[Point]) -> Vec<Segment> {
    match points.len() {
        0 | 1 => Vec::new(),
        2 => vec![Segment::LineTo(points[1])],
        _ => {
            let xs: Vec<f64> = points.iter().map(|p| p.x as f64).collect();
            let ys: Vec<f64> = points.iter().map(|p| p.y as f64).collect();
            let (ax, bx) = natural_control_points(&xs);
            let (ay, by) = natural_control_points(&ys);
            (0..points.len() - 1)
                .map(|i| Segment::CubicTo {
                    c1: Point::new(ax[i] as f32, ay[i] as f32),
                    c2: Point::new(bx[i] as f32, by[i] as f32),
                    to: points[i + 1],
                })
                .collect()
        }
    }
}
