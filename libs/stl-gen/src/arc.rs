//! Circular arc sampling on a fixed angular lattice.
//!
//! Angles are snapped to multiples of `2π / fragments`, so arcs sampled
//! with the same fragment count share vertices where they meet.

use std::f64::consts::PI;

use stl_mesh::Point3;

/// Index of the lattice angle nearest to `theta`.
pub fn fragment_count(fragments: u32, theta: f64) -> i64 {
    (theta * f64::from(fragments) / 2.0 / PI).round() as i64
}

/// Points on a circle of `radius` about the origin in the XY plane, from
/// `start` to `end` radians inclusive, counter-clockwise.
///
/// # Example
///
/// ```rust
/// use stl_mesh::Point3;
/// use stl_gen::arc;
///
/// let half = arc(2.0, 0.0, std::f64::consts::PI, 8);
/// assert_eq!(half.len(), 5);
/// assert_eq!(half[0], Point3::new(2.0, 0.0, 0.0));
/// ```
pub fn arc(radius: f64, start: f64, end: f64, fragments: u32) -> Vec<Point3> {
    let first = fragment_count(fragments, start);
    let last = fragment_count(fragments, end);
    (first..=last)
        .map(|index| {
            let theta = index as f64 * 2.0 * PI / f64::from(fragments);
            let (sin, cos) = theta.sin_cos();
            Point3::new(cos * radius, sin * radius, 0.0)
        })
        .collect()
}
