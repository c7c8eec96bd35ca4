//! # STL Mesh
//!
//! Procedural construction of closed, printable triangle solids and their
//! ASCII STL serialization.
//!
//! ## Pipeline
//!
//! ```text
//! Grid / Polyline (caller) → tessellate / extrude → surface transforms → serialize
//! ```
//!
//! Every stage is a pull-based iterator: triangles are produced on demand
//! and the serializer writes them as they arrive. Only [`extrude`] needs its
//! whole input grid, since it revisits the first and last rows and columns.
//!
//! ## Usage
//!
//! ```rust
//! use stl_mesh::{extrude, to_stl_string, Grid};
//! use glam::DVec3;
//!
//! let grid = Grid::new(vec![
//!     vec![DVec3::new(0.0, 0.0, 0.0), DVec3::new(1.0, 0.0, 0.0)],
//!     vec![DVec3::new(0.0, 1.0, 0.0), DVec3::new(1.0, 1.0, 0.0)],
//! ])?;
//! let stl = to_stl_string("unit cube", extrude(&grid, DVec3::Z)?)?;
//! assert!(stl.starts_with("solid unit_cube\n"));
//! assert_eq!(stl.matches("endfacet").count(), 12);
//! # Ok::<(), stl_mesh::MeshError>(())
//! ```

pub mod diagnostic;
pub mod error;
pub mod extrude;
pub mod geometry;
pub mod grid;
pub mod stl;
pub mod surface;
pub mod tessellate;
pub mod triangle;

pub use diagnostic::{Diagnostic, DiagnosticSink, Diagnostics, Severity};
pub use error::{MeshError, MeshResult};
pub use extrude::extrude;
pub use geometry::{
    rotate_z, rotate_z_points, translate, translate_points, Point3, Polyline, Vector3,
};
pub use grid::Grid;
pub use stl::{serialize, to_stl_string, write_stl, SolidName, StlLines, StlSummary};
pub use surface::{flip, rotate_z_surface, translate_surface, Surface};
pub use tessellate::{fan_fill, grid_to_triangles, GridTriangles};
pub use triangle::{normalize, reverse_winding, Triangle};
