//! # Grid
//!
//! Rectangular arrays of points: height fields, swept profiles and the
//! strips used for extrusion walls. A grid is validated once on
//! construction and never mutated afterwards.

use crate::error::{MeshError, MeshResult};
use crate::geometry::{translate_points, Point3, Vector3};
use crate::tessellate::GridTriangles;

/// Rows of points, all of the same length.
///
/// # Example
///
/// ```rust
/// use stl_mesh::Grid;
/// use glam::DVec3;
///
/// let grid = Grid::new(vec![
///     vec![DVec3::new(0.0, 0.0, 0.0), DVec3::new(1.0, 0.0, 0.0)],
///     vec![DVec3::new(0.0, 1.0, 0.0), DVec3::new(1.0, 1.0, 0.0)],
/// ])?;
/// assert_eq!(grid.row_count(), 2);
/// assert_eq!(grid.column_count(), 2);
/// # Ok::<(), stl_mesh::MeshError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<Point3>>,
    columns: usize,
}

impl Grid {
    /// Validates and wraps `rows`.
    ///
    /// Rejects an empty row set, rows without points and rows of differing
    /// length. Grids with a single row or column are accepted; they
    /// tessellate to nothing.
    pub fn new(rows: Vec<Vec<Point3>>) -> MeshResult<Self> {
        let columns = rows.first().map(Vec::len).ok_or(MeshError::EmptyGrid)?;
        if columns == 0 {
            return Err(MeshError::EmptyGrid);
        }
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != columns)
        {
            return Err(MeshError::RaggedGrid {
                row,
                expected: columns,
                found,
            });
        }
        Ok(Self { rows, columns })
    }

    /// Pairs two paths point by point into an N×2 grid.
    ///
    /// Row `i` is `[first[i], second[i]]`. Paths of unequal length are
    /// rejected rather than truncated.
    pub fn zip(first: &[Point3], second: &[Point3]) -> MeshResult<Self> {
        if first.len() != second.len() {
            return Err(MeshError::MismatchedPaths {
                first: first.len(),
                second: second.len(),
            });
        }
        Self::new(
            first
                .iter()
                .zip(second)
                .map(|(&a, &b)| vec![a, b])
                .collect(),
        )
    }

    #[inline]
    pub fn rows(&self) -> &[Vec<Point3>] {
        &self.rows
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// True when the grid spans at least one quad (2 rows and 2 columns).
    pub fn is_solid_profile(&self) -> bool {
        self.row_count() >= 2 && self.column_count() >= 2
    }

    pub fn first_row(&self) -> &[Point3] {
        &self.rows[0]
    }

    pub fn last_row(&self) -> &[Point3] {
        &self.rows[self.rows.len() - 1]
    }

    /// The points at `index` in every row, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.column_count()`.
    pub fn column(&self, index: usize) -> Vec<Point3> {
        self.rows.iter().map(|row| row[index]).collect()
    }

    pub fn first_column(&self) -> Vec<Point3> {
        self.column(0)
    }

    pub fn last_column(&self) -> Vec<Point3> {
        self.column(self.columns - 1)
    }

    /// Copy of the grid with every point moved by `vector`.
    pub fn translated(&self, vector: Vector3) -> Self {
        Self {
            rows: self
                .rows
                .iter()
                .map(|row| translate_points(vector, row))
                .collect(),
            columns: self.columns,
        }
    }

    /// Lazily tessellates the grid without consuming it.
    pub fn triangles(&self) -> GridTriangles<&Grid> {
        GridTriangles::new(self)
    }

    /// Lazily tessellates an owned grid.
    pub fn into_triangles(self) -> GridTriangles<Grid> {
        GridTriangles::new(self)
    }
}
