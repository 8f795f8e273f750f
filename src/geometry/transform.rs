//! Axis rotations about the origin. Pure; NaN passes through untouched.

use super::Point3D;

pub fn rotate_x(p: Point3D, angle: f64) -> Point3D {
    let (s, c) = angle.sin_cos();
    Point3D {
        x: p.x,
        y: p.y * c - p.z * s,
        z: p.y * s + p.z * c,
    }
}

pub fn rotate_y(p: Point3D, angle: f64) -> Point3D {
    let (s, c) = angle.sin_cos();
    Point3D {
        x: p.x * c - p.z * s,
        y: p.y,
        z: p.x * s + p.z * c,
    }
}

pub fn rotate_z(p: Point3D, angle: f64) -> Point3D {
    let (s, c) = angle.sin_cos();
    Point3D {
        x: p.x * c - p.y * s,
        y: p.x * s + p.y * c,
        z: p.z,
    }
}
