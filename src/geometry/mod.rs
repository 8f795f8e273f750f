pub mod grid;
pub mod hex_grid;
pub mod particles;
pub mod polyhedron;
pub mod transform;
pub mod tunnel;

use crate::config::VisualizationType;

/// A point in object space. Treated as pixels at z = 0; z grows away from
/// the viewer. Transforms always return a new point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn distance(&self, other: &Point3D) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// One stroke of the line field. `opacity` is the intrinsic brightness set
/// by the generator (structural role: depth layer, connection distance);
/// global modulation happens later in the compositor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub start: Point3D,
    pub end: Point3D,
    pub opacity: f64,
}

impl Line {
    pub const fn new(start: Point3D, end: Point3D, opacity: f64) -> Self {
        Self { start, end, opacity }
    }

    /// Average depth of the two endpoints; the compositor's sort key.
    pub fn mid_z(&self) -> f64 {
        (self.start.z + self.end.z) / 2.0
    }
}

/// Build the line field for one frame. `time` is scaled elapsed time in
/// milliseconds (the caller folds `speed` in). Pure: identical arguments
/// yield bit-identical output.
pub fn generate_lines(
    viz_type: VisualizationType,
    line_count: i32,
    depth: f64,
    width: f64,
    height: f64,
    rotation: f64,
    time: f64,
) -> Vec<Line> {
    match viz_type {
        VisualizationType::Tunnel => tunnel::generate(line_count, depth, rotation, time),
        VisualizationType::Grid => grid::generate(line_count, depth, rotation, time),
        VisualizationType::Polyhedron => polyhedron::generate(line_count, rotation, time),
        VisualizationType::Particles => {
            particles::generate(line_count, width, height, rotation, time)
        }
        VisualizationType::HexGrid => {
            hex_grid::generate(line_count, depth, width, height, rotation, time)
        }
    }
}
