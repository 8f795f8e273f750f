use super::transform::{rotate_x, rotate_y, rotate_z};
use super::{Line, Point3D};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

/// Fixed scatter seed keeps the base cloud identical across frames and
/// across calls, which the determinism contract requires.
const SCATTER_SEED: u64 = 0x1F2E_3D4C_5B6A_7988;

/// Fraction of the sphere radius inside which two particles get connected.
const CONNECT_RATIO: f64 = 0.3;

/// A drifting particle cloud whose close pairs are joined by lines that
/// brighten as the pair tightens. Spherical scatter with a uniform radius
/// draw, so the cloud is deliberately denser toward the center.
pub fn generate(line_count: i32, width: f64, height: f64, rotation: f64, time: f64) -> Vec<Line> {
    let n = line_count.max(0) as usize;
    let t = time / 1000.0;
    let max_dist = width.min(height) * 0.4;

    let mut rng = SmallRng::seed_from_u64(SCATTER_SEED);
    let particles: Vec<Point3D> = (0..n)
        .map(|i| {
            let p = scatter_point(&mut rng, max_dist);
            drift(p, i, t, rotation, max_dist)
        })
        .collect();

    // O(n^2) pairwise pass. Fine for the expected density (<= ~30);
    // do not feed this hundreds of particles.
    let threshold = max_dist * CONNECT_RATIO;
    let mut lines = Vec::new();
    for i in 0..particles.len() {
        for j in (i + 1)..particles.len() {
            let distance = particles[i].distance(&particles[j]);
            if distance < threshold {
                let opacity = (1.0 - distance / threshold) * 0.8;
                lines.push(Line::new(particles[i], particles[j], opacity));
            }
        }
    }

    lines
}

fn scatter_point(rng: &mut SmallRng, max_dist: f64) -> Point3D {
    let theta = rng.gen::<f64>() * TAU;
    let phi = rng.gen::<f64>() * TAU;
    let r = rng.gen::<f64>() * max_dist;
    Point3D::new(
        r * phi.sin() * theta.cos(),
        r * phi.sin() * theta.sin(),
        r * phi.cos(),
    )
}

/// Per-particle oscillation keyed by index, then a slow tumble of the whole
/// cloud.
fn drift(p: Point3D, index: usize, t: f64, rotation: f64, max_dist: f64) -> Point3D {
    let offset = index as f64 * 0.1;
    let noise = 0.2 * max_dist;
    let shifted = Point3D::new(
        p.x + (t * 0.5 + offset).sin() * noise,
        p.y + (t * 0.7 + offset * 2.0).cos() * noise,
        p.z + (t * 0.3 + offset * 3.0).sin() * noise,
    );
    let shifted = rotate_x(shifted, t * rotation * 0.2);
    let shifted = rotate_y(shifted, t * rotation * 0.1);
    rotate_z(shifted, t * rotation * 0.05)
}
