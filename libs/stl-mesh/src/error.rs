//! # Mesh Errors
//!
//! Error types for mesh construction and serialization.
//!
//! ## Error Policy
//!
//! - Malformed input is rejected before any triangle or line is produced
//! - Degenerate triangles are NOT errors; they are reported as diagnostics
//!   and the stream continues

use thiserror::Error;

/// Errors that can occur while building or writing a mesh.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A grid needs at least one row of at least one point.
    #[error("Empty grid: at least one non-empty row is required")]
    EmptyGrid,

    /// Rows of a grid must all have the same length.
    #[error("Ragged grid: row {row} has {found} points (expected {expected})")]
    RaggedGrid {
        /// Index of the offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        found: usize,
    },

    /// Two paths paired point by point have different lengths.
    #[error("Mismatched paths: {first} points paired with {second} points")]
    MismatchedPaths { first: usize, second: usize },

    /// The grid is too small to enclose a solid.
    #[error("Degenerate grid: {rows}x{columns} cannot be extruded (need at least 2x2)")]
    DegenerateGrid { rows: usize, columns: usize },

    /// The solid name cannot be written to the output format.
    #[error("Invalid solid name {name:?}: {reason}")]
    InvalidName { name: String, reason: String },

    /// Writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MeshError {
    /// Creates an invalid name error.
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidName {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for mesh operations.
///
/// ## Example
///
/// ```rust
/// use stl_mesh::{Grid, MeshResult};
/// use glam::DVec3;
///
/// fn single_row() -> MeshResult<Grid> {
///     Grid::new(vec![vec![DVec3::ZERO, DVec3::X]])
/// }
/// assert!(single_row().is_ok());
/// ```
pub type MeshResult<T> = Result<T, MeshError>;
