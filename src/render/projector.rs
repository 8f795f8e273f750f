use crate::geometry::Point3D;

/// Pinhole projection of an object-space point onto the viewport plane.
/// `factor` is 1 at z = 0, so points in that plane map 1:1 around the
/// viewport center. At z = -perspective the division blows up to a
/// non-finite coordinate; the compositor culls those rather than letting
/// them propagate.
pub fn project(point: Point3D, perspective: f64, width: f64, height: f64) -> (f64, f64) {
    let factor = perspective / (perspective + point.z);
    (
        point.x * factor + width / 2.0,
        point.y * factor + height / 2.0,
    )
}
