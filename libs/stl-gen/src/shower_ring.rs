//! # Shower-Curtain Ring
//!
//! A flat split ring that bends closed around a curtain rod.
//!
//! ```text
//!            slot (rotated to the end of the band)
//!           ___
//!      .-~~     ~~-.
//!    /               \
//!   |                 |   band: annulus from 0 to 2π − gap
//!    \               /
//!      `-.__   __.-'
//!           |T|          T-tab hanging below the start of the band
//! ```
//!
//! The band starts on the +X axis and runs counter-clockwise. A rounded
//! T-tab hangs off its start in -Y; a T-shaped slot is built beside the
//! +X axis and rotated to the far end of the band. Every piece is a sheet
//! of thickness `thickness` along +Z.

use std::f64::consts::PI;

use config::constants::{
    MIN_FRAGMENTS, RING_CLEARANCE, RING_FRAGMENTS, RING_GAP, RING_ROD_DIAMETER, RING_SLIP,
    RING_STRIP_WIDTH, RING_THICKNESS, RING_T_WIDTH,
};
use stl_mesh::{
    fan_fill, flip, rotate_z_surface, translate, translate_points, Grid, Point3, Polyline,
    Surface, Vector3,
};

use crate::arc::{arc, fragment_count};
use crate::error::{require_positive, GenError, GenResult};
use crate::Model;

const NAME: &str = "shower rings";

/// Parameters of the shower-curtain ring. Lengths in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShowerRingParams {
    pub rod_diameter: f64,
    /// Radial width of the band.
    pub strip_width: f64,
    /// Angle left open in the band, radians.
    pub gap: f64,
    /// Extra inner radius beyond the rod.
    pub slip: f64,
    /// Angular resolution of arcs.
    pub fragments: u32,
    pub thickness: f64,
    /// Width of the T stem.
    pub t_width: f64,
    /// Play between the T-tab and the slot walls.
    pub clearance: f64,
}

impl Default for ShowerRingParams {
    fn default() -> Self {
        Self {
            rod_diameter: RING_ROD_DIAMETER,
            strip_width: RING_STRIP_WIDTH,
            gap: RING_GAP,
            slip: RING_SLIP,
            fragments: RING_FRAGMENTS,
            thickness: RING_THICKNESS,
            t_width: RING_T_WIDTH,
            clearance: RING_CLEARANCE,
        }
    }
}

impl ShowerRingParams {
    pub fn validate(&self) -> GenResult<()> {
        require_positive("rod_diameter", self.rod_diameter)?;
        require_positive("strip_width", self.strip_width)?;
        require_positive("gap", self.gap)?;
        require_positive("thickness", self.thickness)?;
        require_positive("t_width", self.t_width)?;
        for (name, value) in [("slip", self.slip), ("clearance", self.clearance)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(GenError::invalid(name, value, "must be zero or positive"));
            }
        }
        if self.gap >= 2.0 * PI {
            return Err(GenError::invalid("gap", self.gap, "must be less than a full turn"));
        }
        if self.fragments < MIN_FRAGMENTS {
            return Err(GenError::invalid(
                "fragments",
                f64::from(self.fragments),
                "too few to approximate an arc",
            ));
        }
        if self.slot_width() >= self.strip_width {
            return Err(GenError::invalid(
                "t_width",
                self.t_width,
                "slot with clearance must be narrower than the strip",
            ));
        }
        Ok(())
    }

    /// Inner radius: the rod circumference spread over the closed band,
    /// plus slip.
    pub fn inner_radius(&self) -> f64 {
        let rod_radius = self.rod_diameter / 2.0;
        rod_radius * 2.0 * PI / (2.0 * PI - self.gap) + self.slip
    }

    pub fn outer_radius(&self) -> f64 {
        self.inner_radius() + self.strip_width
    }

    fn slot_width(&self) -> f64 {
        self.t_width + 2.0 * self.clearance
    }
}

/// Shared measurements of one ring.
struct Layout {
    fragments: u32,
    inner_radius: f64,
    outer_radius: f64,
    /// Offset from the bottom sheet to the top sheet.
    lift: Vector3,
    /// Start of the band's inner and outer edges, on the +X axis.
    inner_start: Point3,
    outer_start: Point3,
}

impl Layout {
    fn new(params: &ShowerRingParams) -> Self {
        let inner_radius = params.inner_radius();
        let outer_radius = params.outer_radius();
        Self {
            fragments: params.fragments,
            inner_radius,
            outer_radius,
            lift: Vector3::new(0.0, 0.0, params.thickness),
            inner_start: Point3::new(inner_radius, 0.0, 0.0),
            outer_start: Point3::new(outer_radius, 0.0, 0.0),
        }
    }

    fn mid_radius(&self) -> f64 {
        (self.inner_radius + self.outer_radius) / 2.0
    }

    /// Wall swept from `path` by the sheet thickness.
    fn wall(&self, path: &[Point3]) -> GenResult<Grid> {
        Ok(Grid::zip(path, &translate_points(self.lift, path))?)
    }
}

/// Annular band from angle 0 to `2π − gap`: bottom, top, inner and outer
/// walls. The two ends stay open for the tab and slot.
fn band(layout: &Layout, gap: f64) -> GenResult<Surface> {
    let end = 2.0 * PI - gap;
    let inner = arc(layout.inner_radius, 0.0, end, layout.fragments);
    let outer = arc(layout.outer_radius, 0.0, end, layout.fragments);
    let inner_top = translate_points(layout.lift, &inner);
    let outer_top = translate_points(layout.lift, &outer);

    let mut surface = Surface::with_capacity(8 * inner.len().saturating_sub(1));
    surface.extend(Grid::zip(&outer, &inner)?.into_triangles());
    surface.extend(Grid::zip(&inner_top, &outer_top)?.into_triangles());
    surface.extend(Grid::zip(&inner, &inner_top)?.into_triangles());
    surface.extend(Grid::zip(&outer_top, &outer)?.into_triangles());
    Ok(surface)
}

/// Rounded T-tab closing the start of the band.
///
/// The outline runs from the outer edge down the stem, around the
/// half-disc cap and back up to the inner edge.
fn t_tab(layout: &Layout, params: &ShowerRingParams) -> GenResult<Surface> {
    let stem_length = 2.0 * params.t_width;
    let incut = (params.strip_width - params.t_width) / 2.0;
    let cap_width = params.strip_width;

    let mut stem_inner = Polyline::new(layout.inner_start)
        .relative_line_to(Vector3::new(incut, 0.0, 0.0))
        .relative_line_to(Vector3::new(0.0, -stem_length, 0.0))
        .into_points();
    stem_inner.reverse();
    let stem_outer = Polyline::new(layout.outer_start)
        .relative_line_to(Vector3::new(-incut, 0.0, 0.0))
        .relative_line_to(Vector3::new(0.0, -stem_length, 0.0))
        .into_points();

    let cap_center = Point3::new(layout.mid_radius(), -stem_length, 0.0);
    let mut cap = translate_points(
        cap_center,
        &arc(cap_width / 2.0, PI, 2.0 * PI, layout.fragments),
    );
    cap.reverse();

    let outline: Vec<Point3> = stem_outer.into_iter().chain(cap).chain(stem_inner).collect();

    let mut surface: Surface = layout.wall(&outline)?.into_triangles().collect();

    // The outline's end points lie on the band and are left out of the fill.
    let fill_center = translate(cap_center, Vector3::new(0.0, -cap_width / 4.0, 0.0));
    let fill: Surface = fan_fill(fill_center, &outline[1..outline.len() - 1]).collect();
    surface.extend(&fill);
    surface.extend(flip(layout.lift, &fill));
    Ok(surface)
}

/// T-slot closing the end of the band, built along +Y from the +X axis
/// and rotated into place.
fn slot(layout: &Layout, params: &ShowerRingParams) -> GenResult<Surface> {
    // Long enough to take the T cap with clearance.
    let slot_length = params.strip_width + 2.0 * params.clearance;
    let side = (params.strip_width - params.slot_width()) / 2.0;

    let cap_center = Point3::new(layout.mid_radius(), slot_length, 0.0);
    let mut cap = translate_points(
        cap_center,
        &arc(params.strip_width / 2.0, 0.0, PI, layout.fragments),
    );
    cap.reverse();
    let cap_fill: Surface = fan_fill(cap_center, &cap).collect();

    let mut outline = Vec::with_capacity(cap.len() + 2);
    outline.push(layout.inner_start);
    outline.extend_from_slice(&cap);
    outline.push(layout.outer_start);

    let inside_edge = Polyline::new(layout.inner_start)
        .relative_line_to(Vector3::new(side, 0.0, 0.0))
        .relative_line_to(layout.lift)
        .relative_line_to(Vector3::new(-side, 0.0, 0.0))
        .into_points();
    let mut outside_edge = Polyline::new(layout.outer_start)
        .relative_line_to(Vector3::new(-side, 0.0, 0.0))
        .relative_line_to(layout.lift)
        .relative_line_to(Vector3::new(side, 0.0, 0.0))
        .into_points();
    outside_edge.reverse();

    let along = Vector3::new(0.0, slot_length, 0.0);
    let inside_far = translate_points(along, &inside_edge);
    let outside_far = translate_points(along, &outside_edge);

    // Cross wall at the far end of the slot channel.
    let end_line = [outside_far[2], inside_far[1]];
    let end_wall: Surface = layout.wall(&end_line)?.into_triangles().collect();

    let mut unrotated = Surface::new();
    unrotated.extend(&cap_fill);
    unrotated.extend(flip(layout.lift, &cap_fill));
    unrotated.extend(layout.wall(&outline)?.into_triangles());
    unrotated.extend(Grid::zip(&inside_edge, &inside_far)?.into_triangles());
    unrotated.extend(Grid::zip(&outside_edge, &outside_far)?.into_triangles());
    unrotated.extend(&end_wall);
    unrotated.extend(flip(-along, &end_wall));

    let steps = fragment_count(layout.fragments, -params.gap);
    let angle = 2.0 * PI * steps as f64 / f64::from(layout.fragments);
    Ok(rotate_z_surface(angle, unrotated).collect())
}

/// Builds the complete ring: band, T-tab and slot.
pub fn shower_ring(params: &ShowerRingParams) -> GenResult<Model> {
    params.validate()?;
    let layout = Layout::new(params);

    let mut surface = band(&layout, params.gap)?;
    surface.append(&mut t_tab(&layout, params)?);
    surface.append(&mut slot(&layout, params)?);

    log::info!(
        "shower ring: inner radius {:.3}, outer radius {:.3}, {} triangles",
        layout.inner_radius,
        layout.outer_radius,
        surface.triangle_count()
    );
    Ok(Model::new(NAME, surface))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_radii() {
        let params = ShowerRingParams::default();
        let expected = 12.5 * 2.0 * PI / (2.0 * PI - 1.0) + 2.0;
        assert_relative_eq!(params.inner_radius(), expected, epsilon = 1e-12);
        assert_relative_eq!(params.outer_radius(), expected + 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_band_has_four_sides() {
        let params = ShowerRingParams::default();
        let band = band(&Layout::new(&params), params.gap).unwrap();
        // 216 samples per edge, 215 quads per side
        assert_eq!(band.triangle_count(), 4 * 2 * 215);
    }

    #[test]
    fn test_ring_is_a_flat_sheet() {
        let params = ShowerRingParams::default();
        let model = shower_ring(&params).unwrap();
        for p in model.surface.iter().flat_map(|t| t.vertices()) {
            assert!(p.z == 0.0 || p.z == params.thickness, "vertex {p} off the sheet");
        }
    }

    #[test]
    fn test_tab_hangs_below_the_band_start() {
        let params = ShowerRingParams::default();
        let tab = t_tab(&Layout::new(&params), &params).unwrap();
        let (min, max) = tab.bounding_box().unwrap();
        // stem (4) plus cap radius (3)
        assert_relative_eq!(min.y, -7.0, epsilon = 1e-9);
        assert_relative_eq!(max.y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(min.x, params.inner_radius(), epsilon = 1e-9);
        assert_relative_eq!(max.x, params.outer_radius(), epsilon = 1e-9);
    }

    #[test]
    fn test_slot_is_rotated_to_band_end() {
        let params = ShowerRingParams::default();
        let layout = Layout::new(&params);
        let slot = slot(&layout, &params).unwrap();
        // The slot's first outline point is the band start, moved to -41 steps.
        let angle = -41.0 * 2.0 * PI / 256.0;
        let expected = stl_mesh::rotate_z(angle, layout.inner_start);
        assert!(slot
            .iter()
            .flat_map(|t| t.vertices())
            .any(|p| (p - expected).length() < 1e-9));
    }

    #[test]
    fn test_deterministic() {
        let params = ShowerRingParams::default();
        assert_eq!(shower_ring(&params).unwrap(), shower_ring(&params).unwrap());
    }

    #[test]
    fn test_serializes_without_errors() {
        let model = shower_ring(&ShowerRingParams::default()).unwrap();
        let mut out = Vec::new();
        let summary = model.write_stl(&mut out).unwrap();
        assert_eq!(summary.facets, model.surface.triangle_count());
        assert_eq!(summary.diagnostics.error_count(), 0);
        assert!(out.starts_with(b"solid shower_rings\n"));
    }

    #[test]
    fn test_coarse_ring_builds() {
        let params = ShowerRingParams {
            fragments: 16,
            ..ShowerRingParams::default()
        };
        assert!(!shower_ring(&params).unwrap().surface.is_empty());
    }

    #[test]
    fn test_validate() {
        let open = ShowerRingParams {
            gap: 7.0,
            ..ShowerRingParams::default()
        };
        assert!(matches!(
            open.validate(),
            Err(GenError::InvalidParameter { name: "gap", .. })
        ));

        let coarse = ShowerRingParams {
            fragments: 2,
            ..ShowerRingParams::default()
        };
        assert!(coarse.validate().is_err());

        let wide_stem = ShowerRingParams {
            t_width: 5.8,
            ..ShowerRingParams::default()
        };
        assert!(shower_ring(&wide_stem).is_err());
    }
}
