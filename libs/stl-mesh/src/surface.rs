//! # Surfaces
//!
//! Triangle collections and the lazy transforms used to compose sub-solids.
//!
//! The transforms are order-preserving maps over any triangle stream; they
//! never materialize their input. [`Surface`] is the materialized form for
//! parts that are reused or need a bounding box.

use crate::geometry::{Point3, Vector3};
use crate::triangle::Triangle;

/// Moves every triangle of `surface` by `vector`.
pub fn translate_surface<I>(vector: Vector3, surface: I) -> impl Iterator<Item = Triangle>
where
    I: IntoIterator<Item = Triangle>,
{
    surface.into_iter().map(move |t| t.translated(vector))
}

/// Moves every triangle by `vector` and reverses its winding.
///
/// Produces the opposite side of a single-sided sheet, e.g. the far cap of
/// a fan-filled end.
///
/// # Example
///
/// ```rust
/// use stl_mesh::{fan_fill, flip};
/// use glam::DVec3;
///
/// let cap: Vec<_> = fan_fill(DVec3::ZERO, &[DVec3::X, DVec3::Y, DVec3::NEG_X]).collect();
/// let far: Vec<_> = flip(DVec3::Z, cap.iter().copied()).collect();
/// assert_eq!(far[0].p2, cap[0].p3 + DVec3::Z);
/// ```
pub fn flip<I>(vector: Vector3, surface: I) -> impl Iterator<Item = Triangle>
where
    I: IntoIterator<Item = Triangle>,
{
    surface
        .into_iter()
        .map(move |t| t.translated(vector).reversed())
}

/// Rotates every triangle about the Z axis by `angle` radians.
pub fn rotate_z_surface<I>(angle: f64, surface: I) -> impl Iterator<Item = Triangle>
where
    I: IntoIterator<Item = Triangle>,
{
    surface.into_iter().map(move |t| t.rotated_z(angle))
}

/// A materialized collection of triangles.
///
/// Order only affects serialization order.
///
/// # Example
///
/// ```rust
/// use stl_mesh::{Surface, Triangle};
/// use glam::DVec3;
///
/// let mut surface = Surface::new();
/// surface.push(Triangle::new(DVec3::ZERO, DVec3::X, DVec3::Y));
/// surface.extend(std::iter::once(Triangle::new(DVec3::Z, DVec3::X, DVec3::Y)));
/// assert_eq!(surface.triangle_count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Surface {
    triangles: Vec<Triangle>,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(triangle_count: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn push(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Moves all triangles of `other` to the end of this surface.
    pub fn append(&mut self, other: &mut Surface) {
        self.triangles.append(&mut other.triangles);
    }

    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Copying iterator, so a surface can feed several transforms.
    pub fn iter(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.triangles.iter().copied()
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns `None` for an empty surface, otherwise (min, max) corners.
    pub fn bounding_box(&self) -> Option<(Point3, Point3)> {
        let mut points = self.triangles.iter().flat_map(|t| t.vertices());
        let first = points.next()?;
        Some(points.fold((first, first), |(min, max), p| (min.min(p), max.max(p))))
    }
}

impl FromIterator<Triangle> for Surface {
    fn from_iter<I: IntoIterator<Item = Triangle>>(iter: I) -> Self {
        Self {
            triangles: iter.into_iter().collect(),
        }
    }
}

impl Extend<Triangle> for Surface {
    fn extend<I: IntoIterator<Item = Triangle>>(&mut self, iter: I) {
        self.triangles.extend(iter);
    }
}

impl IntoIterator for Surface {
    type Item = Triangle;
    type IntoIter = std::vec::IntoIter<Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.into_iter()
    }
}

impl<'a> IntoIterator for &'a Surface {
    type Item = Triangle;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Triangle>>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.iter().copied()
    }
}
