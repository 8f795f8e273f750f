use super::transform::{rotate_x, rotate_y};
use super::{Line, Point3D};
use std::f64::consts::{FRAC_PI_3, FRAC_PI_6, PI, TAU};

const MIN_RINGS: i32 = 3;
const MAX_RINGS: i32 = 12;
const WALL_COUNT: usize = 6;
/// Half the angular width of a wall segment.
const WALL_HALF_ARC: f64 = TAU / 18.0;

/// Concentric hexagon rings that expand outward from the center in a
/// staggered wave, "Super Hexagon" style: each ring carries an inner
/// hexagon twisted by 30 degrees, even rings add radial spokes, and six
/// wall segments sweep outward, fading in and out as they travel.
pub fn generate(
    line_count: i32,
    depth: f64,
    width: f64,
    height: f64,
    rotation: f64,
    time: f64,
) -> Vec<Line> {
    let t = time / 1000.0;
    let max_radius = width.min(height) * 0.4;
    let rings = (line_count / 2).clamp(MIN_RINGS, MAX_RINGS);
    let base_rotation = t * rotation * 0.5;

    let mut lines = Vec::new();

    for i in 0..rings {
        let ring_ratio = i as f64 / rings as f64;
        // Adjacent rings counter-rotate.
        let direction = if i % 2 == 0 { 1.0 } else { -1.0 };
        let expansion_phase = ((t * 0.5).rem_euclid(1.0) + ring_ratio).rem_euclid(1.0);
        let radius = max_radius * expansion_phase.powf(1.5);
        let hex_rotation = base_rotation * direction + ring_ratio * FRAC_PI_3;
        let z = -depth * 0.5 + (t + ring_ratio * TAU).sin() * 50.0;
        // Rings dim as they approach the rim and recycle.
        let opacity = 0.25 + 0.75 * (1.0 - expansion_phase);

        push_hexagon(&mut lines, radius, hex_rotation, z, opacity);
        push_hexagon(
            &mut lines,
            radius * 0.8,
            hex_rotation + FRAC_PI_6,
            z,
            opacity * 0.8,
        );

        if i % 2 == 0 {
            for k in 0..6 {
                let outer = hex_vertex(radius, hex_rotation, k, z);
                let inner = hex_vertex(radius * 0.8, hex_rotation + FRAC_PI_6, k, z);
                lines.push(Line::new(outer, inner, opacity * 0.7));
            }
        }
    }

    for k in 0..WALL_COUNT {
        let wall_phase = (t * 0.3 + k as f64 / WALL_COUNT as f64).rem_euclid(1.0);
        if wall_phase <= 0.2 || wall_phase >= 0.8 {
            continue;
        }
        let wall_radius = max_radius * wall_phase;
        let center_angle = k as f64 / WALL_COUNT as f64 * TAU + base_rotation;
        let fade = (PI * (wall_phase - 0.2) / 0.6).sin();
        let opacity = 0.7 * fade;
        let z = -depth * 0.5;

        let corners = [
            arc_point(wall_radius, center_angle - WALL_HALF_ARC, z),
            arc_point(wall_radius, center_angle + WALL_HALF_ARC, z),
            arc_point(wall_radius * 0.88, center_angle + WALL_HALF_ARC, z),
            arc_point(wall_radius * 0.88, center_angle - WALL_HALF_ARC, z),
        ];
        for j in 0..4 {
            lines.push(Line::new(corners[j], corners[(j + 1) % 4], opacity));
        }
    }

    // Small global wobble tilts the whole plane in and out of the screen.
    let tilt_x = (t * 0.6).sin() * 0.15;
    let tilt_y = (t * 0.4).cos() * 0.15;
    lines
        .into_iter()
        .map(|line| {
            Line::new(
                rotate_y(rotate_x(line.start, tilt_x), tilt_y),
                rotate_y(rotate_x(line.end, tilt_x), tilt_y),
                line.opacity,
            )
        })
        .collect()
}

fn push_hexagon(lines: &mut Vec<Line>, radius: f64, rotation: f64, z: f64, opacity: f64) {
    for k in 0..6 {
        lines.push(Line::new(
            hex_vertex(radius, rotation, k, z),
            hex_vertex(radius, rotation, k + 1, z),
            opacity,
        ));
    }
}

fn hex_vertex(radius: f64, rotation: f64, k: usize, z: f64) -> Point3D {
    arc_point(radius, k as f64 / 6.0 * TAU + rotation, z)
}

fn arc_point(radius: f64, angle: f64, z: f64) -> Point3D {
    Point3D::new(radius * angle.cos(), radius * angle.sin(), z)
}
