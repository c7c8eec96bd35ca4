//! # Extrusion
//!
//! Closes a grid into a solid by sweeping it along a displacement vector.
//!
//! ## Layout
//!
//! ```text
//! front   grid tessellation, as is
//! back    same tessellation moved by `vector`, winding reversed
//! bottom  [first row, first row + vector]          reversed
//! top     [last row,  last row + vector]           as is
//! left    rows [first column[i], ... + vector]     reversed
//! right   rows [last column[i],  ... + vector]     as is
//! ```
//!
//! This reversal pattern pairs every boundary edge of every panel with the
//! opposite edge of its neighbour, so the result has no open edges and all
//! panels share one orientation.
//!
//! ## Orientation
//!
//! Which way that orientation points depends on the grid's handedness.
//! With `r = row[1] - row[0]` (along a row) and `c = col[1] - col[0]` (down
//! a column), the solid faces outward by the right-hand rule iff
//!
//! ```text
//! (r × c) · vector < 0
//! ```
//!
//! and is inside-out otherwise. Callers pick the row order or the sweep
//! direction to land on the outward case; a height field in the XZ plane
//! swept along +Y wants rows in ascending Z.

#[cfg(test)]
mod tests;

use crate::error::{MeshError, MeshResult};
use crate::geometry::{translate_points, Point3, Vector3};
use crate::grid::Grid;
use crate::triangle::Triangle;

/// Builds the closed solid between `grid` and `grid + vector`.
///
/// The grid must have at least 2 rows and 2 columns; anything smaller is
/// rejected before a triangle is produced. Front and back triangles are
/// interleaved (each front triangle is followed by its flipped copy), then
/// the bottom, top, left and right walls follow.
///
/// Yields `4(N-1)(M-1) + 4(N-1) + 4(M-1)` triangles for an N×M grid.
///
/// # Example
///
/// ```rust
/// use stl_mesh::{extrude, Grid};
/// use glam::DVec3;
///
/// let grid = Grid::new(vec![
///     vec![DVec3::new(0.0, 0.0, 0.0), DVec3::new(1.0, 0.0, 0.0)],
///     vec![DVec3::new(0.0, 1.0, 0.0), DVec3::new(1.0, 1.0, 0.0)],
/// ])?;
/// let solid: Vec<_> = extrude(&grid, DVec3::Z)?.collect();
/// assert_eq!(solid.len(), 12);
/// # Ok::<(), stl_mesh::MeshError>(())
/// ```
pub fn extrude(
    grid: &Grid,
    vector: Vector3,
) -> MeshResult<impl Iterator<Item = Triangle> + '_> {
    if !grid.is_solid_profile() {
        return Err(MeshError::DegenerateGrid {
            rows: grid.row_count(),
            columns: grid.column_count(),
        });
    }

    let faces = grid
        .triangles()
        .flat_map(move |t| [t, t.translated(vector).reversed()]);

    let bottom = row_wall(grid.first_row(), vector)?
        .into_triangles()
        .map(Triangle::reversed);
    let top = row_wall(grid.last_row(), vector)?.into_triangles();
    let left = column_wall(&grid.first_column(), vector)?
        .into_triangles()
        .map(Triangle::reversed);
    let right = column_wall(&grid.last_column(), vector)?.into_triangles();

    Ok(faces.chain(bottom).chain(top).chain(left).chain(right))
}

/// Two-row strip `[row, row + vector]`.
fn row_wall(row: &[Point3], vector: Vector3) -> MeshResult<Grid> {
    Grid::new(vec![row.to_vec(), translate_points(vector, row)])
}

/// Strip whose row `i` is `[column[i], column[i] + vector]`.
fn column_wall(column: &[Point3], vector: Vector3) -> MeshResult<Grid> {
    Grid::zip(column, &translate_points(vector, column))
}
