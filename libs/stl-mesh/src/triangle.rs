//! # Triangle Primitives
//!
//! Ordered vertex triples, winding reversal and facet normals.
//!
//! The vertex order defines the winding and therefore which way the facet
//! normal points. Every generator in this crate is wound against the normal
//! convention of [`Triangle::try_normal`].

use crate::diagnostic::{Diagnostic, DiagnosticSink};
use crate::geometry::{rotate_z, translate, Point3, Vector3};

/// An ordered triple of points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub p1: Point3,
    pub p2: Point3,
    pub p3: Point3,
}

impl Triangle {
    pub fn new(p1: Point3, p2: Point3, p3: Point3) -> Self {
        Self { p1, p2, p3 }
    }

    /// Returns the vertices in winding order.
    #[inline]
    pub fn vertices(&self) -> [Point3; 3] {
        [self.p1, self.p2, self.p3]
    }

    /// Swaps the second and third vertex, flipping the normal.
    #[inline]
    pub fn reversed(self) -> Self {
        Self::new(self.p1, self.p3, self.p2)
    }

    pub fn translated(self, vector: Vector3) -> Self {
        Self::new(
            translate(self.p1, vector),
            translate(self.p2, vector),
            translate(self.p3, vector),
        )
    }

    pub fn rotated_z(self, angle: f64) -> Self {
        Self::new(
            rotate_z(angle, self.p1),
            rotate_z(angle, self.p2),
            rotate_z(angle, self.p3),
        )
    }

    /// Unnormalized facet normal.
    ///
    /// With `e1 = p1 - p2` and `e2 = p1 - p3` the components are
    /// `(e1.z*e2.y - e1.y*e2.z, e1.z*e2.x - e1.x*e2.z, e1.y*e2.x - e1.x*e2.y)`.
    /// Generated walls and faces are wound for exactly this layout, so it must
    /// not be replaced by `e1.cross(e2)`.
    fn raw_normal(&self) -> Vector3 {
        let e1 = self.p1 - self.p2;
        let e2 = self.p1 - self.p3;
        Vector3::new(
            e1.z * e2.y - e1.y * e2.z,
            e1.z * e2.x - e1.x * e2.z,
            e1.y * e2.x - e1.x * e2.y,
        )
    }

    /// True when the vertices are collinear (zero-length normal).
    pub fn is_degenerate(&self) -> bool {
        self.raw_normal().length() == 0.0
    }

    /// Unit normal, or `None` for a degenerate triangle.
    ///
    /// # Examples
    /// ```
    /// use stl_mesh::Triangle;
    /// use glam::DVec3;
    ///
    /// let t = Triangle::new(DVec3::ZERO, DVec3::X, DVec3::Y);
    /// assert_eq!(t.try_normal(), Some(DVec3::new(0.0, 0.0, -1.0)));
    /// ```
    pub fn try_normal(&self) -> Option<Vector3> {
        let raw = self.raw_normal();
        let norm = raw.length();
        (norm != 0.0).then(|| raw / norm)
    }

    /// Unit normal; a degenerate triangle reports a warning and yields zero.
    pub fn normal<S: DiagnosticSink + ?Sized>(&self, sink: &mut S) -> Vector3 {
        normalize(self.raw_normal(), sink)
    }
}

/// Swaps the second and third vertex of `triangle`.
#[inline]
pub fn reverse_winding(triangle: Triangle) -> Triangle {
    triangle.reversed()
}

/// Divides `vector` by its Euclidean norm.
///
/// A zero vector cannot be normalized: a warning is reported to `sink` and
/// the zero vector is returned unchanged.
pub fn normalize<S: DiagnosticSink + ?Sized>(vector: Vector3, sink: &mut S) -> Vector3 {
    let norm = vector.length();
    if norm == 0.0 {
        sink.report(
            Diagnostic::warning("zero-length normal (degenerate triangle)")
                .with_hint("the triangle's vertices are collinear; a zero normal was written"),
        );
        return vector;
    }
    vector / norm
}
