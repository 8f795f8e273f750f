use super::transform::rotate_y;
use super::{Line, Point3D};

const SPACING: f64 = 50.0;

/// A flat lattice of horizontal and vertical lines whose depth ripples
/// per-row, then the whole thing spins about Y.
pub fn generate(line_count: i32, depth: f64, rotation: f64, time: f64) -> Vec<Line> {
    let n = line_count.max(0);
    if n == 0 {
        return Vec::new();
    }

    let half = n as f64 / 2.0;
    let size = SPACING * half;
    let t = rotation * time / 1000.0;
    let mut lines = Vec::with_capacity(2 * (n as usize + 1));

    // One horizontal and one vertical line per integer step in [-n/2, n/2].
    for k in 0..=n {
        let i = k as f64 - half;
        let opacity = 0.3 + i.abs() / half * 0.7;

        let hz = -depth / 2.0 + (time / 2000.0 + i).sin() * 20.0;
        lines.push(Line::new(
            Point3D::new(-size, i * SPACING, hz),
            Point3D::new(size, i * SPACING, hz),
            opacity,
        ));

        let vz = -depth / 2.0 + (time / 2000.0 + i).cos() * 20.0;
        lines.push(Line::new(
            Point3D::new(i * SPACING, -size, vz),
            Point3D::new(i * SPACING, size, vz),
            opacity,
        ));
    }

    lines
        .into_iter()
        .map(|line| {
            Line::new(
                rotate_y(line.start, t),
                rotate_y(line.end, t),
                line.opacity,
            )
        })
        .collect()
}
