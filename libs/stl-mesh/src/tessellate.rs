//! # Tessellator
//!
//! Converts grids and convex fans into triangle streams.
//!
//! ## Quad split
//!
//! For rows `last`/`this` and columns `j-1`/`j` the quad corners are
//!
//! ```text
//! aa = last[j-1]   bb = last[j]
//! cc = this[j-1]   dd = this[j]
//! ```
//!
//! and the quad becomes `(aa, bb, cc)` followed by `(bb, dd, cc)`. Every quad
//! shares this diagonal and winding, which keeps the whole grid consistently
//! oriented.

use std::borrow::Borrow;
use std::iter::FusedIterator;

use crate::geometry::Point3;
use crate::grid::Grid;
use crate::triangle::Triangle;

/// Pull-based tessellation of a borrowed or owned [`Grid`].
///
/// Yields `2 * (rows - 1) * (columns - 1)` triangles; grids with fewer than
/// two rows or columns yield none.
#[derive(Debug, Clone)]
pub struct GridTriangles<G> {
    grid: G,
    row: usize,
    column: usize,
    pending: Option<Triangle>,
}

impl<G: Borrow<Grid>> GridTriangles<G> {
    pub fn new(grid: G) -> Self {
        Self {
            grid,
            row: 1,
            column: 1,
            pending: None,
        }
    }

    fn remaining(&self) -> usize {
        let grid: &Grid = self.grid.borrow();
        let pending = usize::from(self.pending.is_some());
        let quads_per_row = grid.column_count().saturating_sub(1);
        if self.row >= grid.row_count() || quads_per_row == 0 {
            return pending;
        }
        let in_row = grid.column_count().saturating_sub(self.column);
        let later_rows = grid.row_count() - 1 - self.row;
        pending + 2 * (in_row + later_rows * quads_per_row)
    }
}

impl<G: Borrow<Grid>> Iterator for GridTriangles<G> {
    type Item = Triangle;

    fn next(&mut self) -> Option<Triangle> {
        if let Some(second) = self.pending.take() {
            return Some(second);
        }

        let grid: &Grid = self.grid.borrow();
        loop {
            if self.row >= grid.row_count() {
                return None;
            }
            if self.column < grid.column_count() {
                break;
            }
            self.row += 1;
            self.column = 1;
        }

        let last = &grid.rows()[self.row - 1];
        let this = &grid.rows()[self.row];
        let j = self.column;
        let (aa, bb) = (last[j - 1], last[j]);
        let (cc, dd) = (this[j - 1], this[j]);
        self.column += 1;

        self.pending = Some(Triangle::new(bb, dd, cc));
        Some(Triangle::new(aa, bb, cc))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<G: Borrow<Grid>> ExactSizeIterator for GridTriangles<G> {}

impl<G: Borrow<Grid>> FusedIterator for GridTriangles<G> {}

/// Lazily tessellates `grid`.
///
/// # Example
///
/// ```rust
/// use stl_mesh::{grid_to_triangles, Grid};
/// use glam::DVec3;
///
/// let grid = Grid::new(vec![
///     vec![DVec3::new(0.0, 0.0, 0.0), DVec3::new(1.0, 0.0, 0.0), DVec3::new(2.0, 0.0, 0.0)],
///     vec![DVec3::new(0.0, 1.0, 0.0), DVec3::new(1.0, 1.0, 0.0), DVec3::new(2.0, 1.0, 0.0)],
/// ])?;
/// assert_eq!(grid_to_triangles(&grid).count(), 4);
/// # Ok::<(), stl_mesh::MeshError>(())
/// ```
pub fn grid_to_triangles(grid: &Grid) -> GridTriangles<&Grid> {
    grid.triangles()
}

/// Fans a convex polygon around `center`.
///
/// Emits `(center, path[i], path[(i + 1) % n])` for every edge, including the
/// closing edge from the last point back to the first. Convexity is the
/// caller's responsibility: a non-convex boundary produces overlapping
/// triangles without any error.
///
/// # Example
///
/// ```rust
/// use stl_mesh::fan_fill;
/// use glam::DVec3;
///
/// let square = [DVec3::X, DVec3::Y, DVec3::NEG_X, DVec3::NEG_Y];
/// assert_eq!(fan_fill(DVec3::ZERO, &square).count(), 4);
/// ```
pub fn fan_fill(
    center: Point3,
    path: &[Point3],
) -> impl ExactSizeIterator<Item = Triangle> + '_ {
    let n = path.len();
    (0..n).map(move |i| Triangle::new(center, path[i], path[(i + 1) % n]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: usize, columns: usize) -> Grid {
        Grid::new(
            (0..rows)
                .map(|y| {
                    (0..columns)
                        .map(|x| Point3::new(x as f64, y as f64, 0.0))
                        .collect()
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_quad_split_order() {
        let g = grid(2, 2);
        let triangles: Vec<_> = grid_to_triangles(&g).collect();
        let (aa, bb) = (Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0));
        let (cc, dd) = (Point3::new(0.0, 1.0, 0.0), Point3::new(1.0, 1.0, 0.0));
        assert_eq!(
            triangles,
            vec![Triangle::new(aa, bb, cc), Triangle::new(bb, dd, cc)]
        );
    }

    #[test]
    fn test_triangle_count() {
        for (rows, columns) in [(2, 2), (3, 5), (7, 2), (4, 4)] {
            let g = grid(rows, columns);
            let expected = 2 * (rows - 1) * (columns - 1);
            let iter = grid_to_triangles(&g);
            assert_eq!(iter.len(), expected);
            assert_eq!(iter.count(), expected);
        }
    }

    #[test]
    fn test_row_major_order() {
        let g = grid(3, 3);
        let firsts: Vec<_> = grid_to_triangles(&g).step_by(2).map(|t| t.p1).collect();
        assert_eq!(
            firsts,
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_degenerate_grids_yield_nothing() {
        assert_eq!(grid(1, 5).triangles().count(), 0);
        assert_eq!(grid(5, 1).triangles().count(), 0);
        assert_eq!(grid(5, 1).triangles().len(), 0);
    }

    #[test]
    fn test_size_hint_tracks_progress() {
        let g = grid(3, 4);
        let mut iter = g.triangles();
        assert_eq!(iter.len(), 12);
        iter.next();
        assert_eq!(iter.len(), 11);
        iter.nth(4);
        assert_eq!(iter.len(), 6);
    }

    #[test]
    fn test_owned_grid_tessellates() {
        let triangles: Vec<_> = grid(2, 3).into_triangles().collect();
        assert_eq!(triangles.len(), 4);
    }

    #[test]
    fn test_fan_fill_closes_polygon() {
        let path = [Point3::X, Point3::Y, Point3::NEG_X];
        let fan: Vec<_> = fan_fill(Point3::ZERO, &path).collect();
        assert_eq!(fan.len(), 3);
        assert_eq!(fan[2], Triangle::new(Point3::ZERO, Point3::NEG_X, Point3::X));
    }

    #[test]
    fn test_fan_fill_empty_path() {
        assert_eq!(fan_fill(Point3::ZERO, &[]).count(), 0);
    }
}
