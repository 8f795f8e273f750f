use super::transform::rotate_y;
use super::{Line, Point3D};

/// Concentric rectangles receding into the screen. Every third rectangle is
/// tied to the next one with corner rungs for a ribbed tunnel look.
pub fn generate(line_count: i32, depth: f64, rotation: f64, time: f64) -> Vec<Line> {
    let n = line_count.max(0);
    let mut lines = Vec::with_capacity(n as usize * 6);
    let breathe = (time / 1000.0).sin() * 20.0;
    let t = rotation * time / 1000.0;

    for i in 0..n {
        let f = i as f64 / n as f64;
        let z = -depth + f * depth * 2.0 + breathe;
        let size = 150.0 - f * 100.0;
        // Far rectangles are faint, near ones solid.
        let opacity = 0.2 + f * 0.8;

        let corners = rect_corners(size, z).map(|c| rotate_y(c, t));
        for j in 0..4 {
            lines.push(Line::new(corners[j], corners[(j + 1) % 4], opacity));
        }

        // Rungs to the next rectangle, skipped for the last one.
        if i % 3 == 0 && i < n - 1 {
            let nf = (i + 1) as f64 / n as f64;
            let next_z = -depth + nf * depth * 2.0 + breathe;
            let next_size = 150.0 - nf * 100.0;
            let next = rect_corners(next_size, next_z).map(|c| rotate_y(c, t));
            for j in 0..4 {
                lines.push(Line::new(corners[j], next[j], opacity));
            }
        }
    }

    lines
}

fn rect_corners(size: f64, z: f64) -> [Point3D; 4] {
    [
        Point3D::new(-size, -size, z),
        Point3D::new(size, -size, z),
        Point3D::new(size, size, z),
        Point3D::new(-size, size, z),
    ]
}
