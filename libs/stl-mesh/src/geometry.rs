//! # Vector Geometry
//!
//! Point and vector helpers built on `glam::DVec3`. Points and vectors share
//! one representation and differ only in how they are used.

pub use glam::DVec3 as Point3;

/// A displacement or (possibly unnormalized) direction.
pub type Vector3 = glam::DVec3;

/// Moves `point` by `vector`.
#[inline]
pub fn translate(point: Point3, vector: Vector3) -> Point3 {
    point + vector
}

/// Rotates `point` counter-clockwise about the Z axis by `angle` radians.
///
/// Z is unchanged. An angle of zero returns the point unchanged.
///
/// # Examples
/// ```
/// use stl_mesh::geometry::{rotate_z, Point3};
/// use std::f64::consts::FRAC_PI_2;
///
/// let p = rotate_z(FRAC_PI_2, Point3::new(1.0, 0.0, 3.0));
/// assert!((p.x).abs() < 1e-12);
/// assert!((p.y - 1.0).abs() < 1e-12);
/// assert_eq!(p.z, 3.0);
/// ```
pub fn rotate_z(angle: f64, point: Point3) -> Point3 {
    let (sin, cos) = angle.sin_cos();
    Point3::new(
        point.x * cos - point.y * sin,
        point.x * sin + point.y * cos,
        point.z,
    )
}

/// Translates every point of a path.
pub fn translate_points(vector: Vector3, points: &[Point3]) -> Vec<Point3> {
    points.iter().map(|&p| translate(p, vector)).collect()
}

/// Rotates every point of a path about the Z axis.
pub fn rotate_z_points(angle: f64, points: &[Point3]) -> Vec<Point3> {
    points.iter().map(|&p| rotate_z(angle, p)).collect()
}

/// Builder for paths made of absolute and relative line segments.
///
/// No geometric validation is performed; self-intersecting paths are
/// accepted as given.
///
/// # Example
///
/// ```rust
/// use stl_mesh::Polyline;
/// use glam::DVec3;
///
/// let path = Polyline::new(DVec3::ZERO)
///     .relative_line_to(DVec3::new(2.0, 0.0, 0.0))
///     .relative_line_to(DVec3::new(0.0, -4.0, 0.0))
///     .into_points();
/// assert_eq!(path.last(), Some(&DVec3::new(2.0, -4.0, 0.0)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    points: Vec<Point3>,
}

impl Polyline {
    /// Starts a path at `start`.
    pub fn new(start: Point3) -> Self {
        Self {
            points: vec![start],
        }
    }

    /// Appends an absolute point.
    pub fn line_to(mut self, point: Point3) -> Self {
        self.points.push(point);
        self
    }

    /// Appends the last point moved by `vector`.
    pub fn relative_line_to(self, vector: Vector3) -> Self {
        let next = translate(self.last(), vector);
        self.line_to(next)
    }

    /// Returns the most recently added point.
    #[inline]
    pub fn last(&self) -> Point3 {
        // `new` seeds the path, so it is never empty.
        self.points[self.points.len() - 1]
    }

    #[inline]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point3> {
        self.points
    }
}
