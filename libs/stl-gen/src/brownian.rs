//! # Brownian Plate
//!
//! A thin plate whose front face is a random-walk height field.
//!
//! The field is laid out in the XZ plane with heights along Y, so the plate
//! stands upright on the build plate. Row `k` sits at `z = k * dz`; the top
//! row is flat (`y = 0`) and each row below drifts from the one above by a
//! uniform step in `[-dy, dy]` per column.

use config::constants::{
    BROWNIAN_DX, BROWNIAN_DY, BROWNIAN_DZ, BROWNIAN_HEIGHT, BROWNIAN_SEED, BROWNIAN_THICKNESS,
    BROWNIAN_WIDTH,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use stl_mesh::{extrude, Grid, Point3, Surface, Vector3};

use crate::error::{require_positive, GenError, GenResult};
use crate::Model;

/// Parameters of the Brownian plate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrownianParams {
    /// Random walk seed; equal seeds give identical plates.
    pub seed: u64,
    /// Extent along X.
    pub width: f64,
    /// Column spacing along X.
    pub dx: f64,
    /// Largest per-row height step along Y.
    pub dy: f64,
    /// Extent along Z.
    pub height: f64,
    /// Row spacing along Z.
    pub dz: f64,
    /// Plate thickness along +Y.
    pub thickness: f64,
}

impl Default for BrownianParams {
    fn default() -> Self {
        Self {
            seed: BROWNIAN_SEED,
            width: BROWNIAN_WIDTH,
            dx: BROWNIAN_DX,
            dy: BROWNIAN_DY,
            height: BROWNIAN_HEIGHT,
            dz: BROWNIAN_DZ,
            thickness: BROWNIAN_THICKNESS,
        }
    }
}

impl BrownianParams {
    /// Number of columns, `floor(width / dx)`.
    pub fn columns(&self) -> usize {
        (self.width / self.dx).floor() as usize
    }

    /// Number of random-walk steps, `floor(height / dz)`. The field has one
    /// more row than this.
    pub fn steps(&self) -> usize {
        (self.height / self.dz).floor() as usize
    }

    pub fn validate(&self) -> GenResult<()> {
        require_positive("width", self.width)?;
        require_positive("dx", self.dx)?;
        require_positive("height", self.height)?;
        require_positive("dz", self.dz)?;
        require_positive("thickness", self.thickness)?;
        if !(self.dy.is_finite() && self.dy >= 0.0) {
            return Err(GenError::invalid("dy", self.dy, "must be zero or positive"));
        }
        if self.columns() < 2 {
            return Err(GenError::invalid(
                "width",
                self.width,
                "must hold at least two columns of dx",
            ));
        }
        if self.steps() < 1 {
            return Err(GenError::invalid("height", self.height, "must be at least dz"));
        }
        Ok(())
    }

    /// Solid name written in the STL header.
    pub fn name(&self) -> String {
        format!("brownian surface seed {}", self.seed)
    }
}

/// Builds the height field, rows ordered by ascending Z.
pub fn height_field(params: &BrownianParams) -> GenResult<Grid> {
    params.validate()?;

    let mut rng = ChaCha8Rng::seed_from_u64(params.seed);
    let steps = params.steps();
    let mut heights = vec![0.0; params.columns()];
    let mut rows = Vec::with_capacity(steps + 1);

    // Walk downwards from the flat top row.
    for level in (0..=steps).rev() {
        let z = level as f64 * params.dz;
        rows.push(
            heights
                .iter()
                .enumerate()
                .map(|(column, &y)| Point3::new(column as f64 * params.dx, y, z))
                .collect::<Vec<_>>(),
        );
        if level > 0 {
            for y in &mut heights {
                *y += (rng.gen::<f64>() * 2.0 - 1.0) * params.dy;
            }
        }
    }
    rows.reverse();

    Ok(Grid::new(rows)?)
}

/// Builds the closed plate: the height field swept by `thickness` along +Y.
pub fn brownian_plate(params: &BrownianParams) -> GenResult<Model> {
    let grid = height_field(params)?;
    let surface: Surface = extrude(&grid, Vector3::new(0.0, params.thickness, 0.0))?.collect();
    log::info!(
        "brownian plate seed {}: {}x{} field, {} triangles",
        params.seed,
        grid.row_count(),
        grid.column_count(),
        surface.triangle_count()
    );
    Ok(Model::new(params.name(), surface))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::collections::HashMap;

    fn is_closed(surface: &Surface) -> bool {
        let key = |p: Point3| [p.x.to_bits(), p.y.to_bits(), p.z.to_bits()];
        let mut edges = HashMap::new();
        for t in surface.iter() {
            let [a, b, c] = t.vertices().map(key);
            for edge in [(a, b), (b, c), (c, a)] {
                *edges.entry(edge).or_insert(0usize) += 1;
            }
        }
        edges
            .iter()
            .all(|(&(a, b), &count)| count == 1 && edges.get(&(b, a)) == Some(&1))
    }

    #[test]
    fn test_default_field_shape() {
        let grid = height_field(&BrownianParams::default()).unwrap();
        assert_eq!(grid.row_count(), 5);
        assert_eq!(grid.column_count(), 8);

        assert!(grid.first_row().iter().all(|p| p.z == 0.0));
        assert!(grid.last_row().iter().all(|p| p.z == 20.0 && p.y == 0.0));
        assert_eq!(grid.last_row()[7].x, 35.0);
    }

    #[test]
    fn test_steps_are_bounded_by_dy() {
        let params = BrownianParams::default();
        let grid = height_field(&params).unwrap();
        for pair in grid.rows().windows(2) {
            for (below, above) in pair[0].iter().zip(&pair[1]) {
                assert!((below.y - above.y).abs() <= params.dy + 1e-12);
            }
        }
    }

    #[test]
    fn test_same_seed_same_plate() {
        let params = BrownianParams::default();
        assert_eq!(brownian_plate(&params).unwrap(), brownian_plate(&params).unwrap());
    }

    #[test]
    fn test_seed_changes_plate() {
        let a = height_field(&BrownianParams::default()).unwrap();
        let b = height_field(&BrownianParams {
            seed: 7,
            ..BrownianParams::default()
        })
        .unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_default_plate_is_closed() {
        let model = brownian_plate(&BrownianParams::default()).unwrap();
        // 4 * 4 * 7 faces + 4 * 4 side + 4 * 7 end triangles
        assert_eq!(model.surface.triangle_count(), 156);
        assert!(is_closed(&model.surface));
        assert_eq!(model.name, "brownian surface seed 0");
    }

    #[test]
    fn test_default_plate_faces_outward() {
        let model = brownian_plate(&BrownianParams::default()).unwrap();
        let volume: f64 = model
            .surface
            .iter()
            .map(|t| t.p1.dot(t.p2.cross(t.p3)) / 6.0)
            .sum();
        // 35 x 20 face swept 1 along +Y
        assert_relative_eq!(volume, 700.0, max_relative = 1e-9);
    }

    #[test]
    fn test_flat_plate_with_zero_dy() {
        let params = BrownianParams {
            dy: 0.0,
            ..BrownianParams::default()
        };
        let grid = height_field(&params).unwrap();
        assert!(grid.rows().iter().flatten().all(|p| p.y == 0.0));
    }

    #[test]
    fn test_validate_rejects_bad_sizes() {
        let narrow = BrownianParams {
            width: 9.0,
            ..BrownianParams::default()
        };
        assert!(matches!(
            narrow.validate(),
            Err(GenError::InvalidParameter { name: "width", .. })
        ));

        let thin = BrownianParams {
            thickness: 0.0,
            ..BrownianParams::default()
        };
        assert!(brownian_plate(&thin).is_err());

        let short = BrownianParams {
            height: 4.0,
            ..BrownianParams::default()
        };
        assert!(short.validate().is_err());
    }

    #[test]
    fn test_writes_named_solid() {
        let mut out = Vec::new();
        let summary = brownian_plate(&BrownianParams::default())
            .unwrap()
            .write_stl(&mut out)
            .unwrap();
        assert_eq!(summary.facets, 156);
        assert_eq!(summary.diagnostics.error_count(), 0);
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("solid brownian_surface_seed_0\n"));
    }
}
