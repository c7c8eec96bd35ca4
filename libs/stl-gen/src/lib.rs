//! # STL Generators
//!
//! Ready-made printable models assembled from the `stl-mesh` primitives.
//!
//! - [`brownian`]: a random-walk height field extruded into a thin plate
//! - [`shower_ring`]: a split shower-curtain ring with a T-tab and slot
//!
//! Both build a [`Model`], which the `stl-gen` binary streams to disk.

pub mod arc;
pub mod brownian;
pub mod error;
pub mod shower_ring;

use std::io::Write;

use stl_mesh::{write_stl, MeshResult, StlSummary, Surface};

pub use arc::{arc, fragment_count};
pub use brownian::{brownian_plate, height_field, BrownianParams};
pub use error::{GenError, GenResult};
pub use shower_ring::{shower_ring, ShowerRingParams};

/// A named, fully built solid.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    /// Solid name as given; spaces are replaced when written.
    pub name: String,
    pub surface: Surface,
}

impl Model {
    pub fn new(name: impl Into<String>, surface: Surface) -> Self {
        Self {
            name: name.into(),
            surface,
        }
    }

    /// Writes the model as ASCII STL.
    pub fn write_stl<W: Write>(&self, writer: W) -> MeshResult<StlSummary> {
        write_stl(writer, &self.name, &self.surface)
    }
}
