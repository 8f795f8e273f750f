use super::transform::{rotate_x, rotate_y, rotate_z};
use super::{Line, Point3D};

const SIZE: f64 = 150.0;
const CORE_VERTICES: usize = 6;
const CORE_EDGE_OPACITY: f64 = 0.8;
const ORBIT_EDGE_OPACITY: f64 = 0.6;

/// Vertex indices of the 12 octahedron edges.
const EDGES: [(usize, usize); 12] = [
    (0, 2),
    (0, 3),
    (0, 4),
    (0, 5),
    (1, 2),
    (1, 3),
    (1, 4),
    (1, 5),
    (2, 4),
    (4, 3),
    (3, 5),
    (5, 2),
];

/// A spinning octahedron. Above a density threshold, extra vertices orbit
/// the solid on a time-varying circular path and tie into its corners.
pub fn generate(line_count: i32, rotation: f64, time: f64) -> Vec<Line> {
    let t = rotation * time / 1000.0;
    let spin = |p: Point3D| rotate_z(rotate_y(rotate_x(p, t * 0.5), t), t * 0.3);

    let vertices: [Point3D; CORE_VERTICES] = [
        Point3D::new(0.0, -SIZE, 0.0),
        Point3D::new(0.0, SIZE, 0.0),
        Point3D::new(-SIZE, 0.0, 0.0),
        Point3D::new(SIZE, 0.0, 0.0),
        Point3D::new(0.0, 0.0, -SIZE),
        Point3D::new(0.0, 0.0, SIZE),
    ]
    .map(spin);

    let mut lines: Vec<Line> = EDGES
        .iter()
        .map(|&(i, j)| Line::new(vertices[i], vertices[j], CORE_EDGE_OPACITY))
        .collect();

    let extra = line_count - 10;
    if extra > 0 {
        for i in 0..extra {
            let angle = i as f64 / extra as f64 * std::f64::consts::TAU;
            let orbit_y = (angle + time / 1000.0).sin() * SIZE * 0.5;
            let orbit_r = (angle + time / 1000.0).cos() * SIZE * 0.5;
            let vertex = spin(Point3D::new(
                angle.cos() * orbit_r,
                orbit_y,
                angle.sin() * orbit_r,
            ));
            for anchor in vertices.iter().take(4) {
                lines.push(Line::new(vertex, *anchor, ORBIT_EDGE_OPACITY));
            }
        }
    }

    lines
}
