//! # Configuration Constants
//!
//! Centralized constants for the STL generation pipeline. Output formatting
//! and generator defaults are defined here.
//!
//! ## Categories
//!
//! - **Output**: Text mesh formatting
//! - **Brownian Plate**: Defaults for the random-walk height field
//! - **Shower Ring**: Defaults for the shower-curtain ring

// =============================================================================
// OUTPUT CONSTANTS
// =============================================================================

/// Digits written after the decimal point for every coordinate and normal
/// component in the text mesh format.
///
/// # Example
///
/// ```rust
/// use config::constants::STL_DECIMALS;
///
/// assert_eq!(format!("{:.*}", STL_DECIMALS, 1.0), "1.000000");
/// ```
pub const STL_DECIMALS: usize = 6;

/// Replacement for spaces in solid names.
pub const NAME_SPACE_REPLACEMENT: char = '_';

// =============================================================================
// BROWNIAN PLATE DEFAULTS
// =============================================================================

/// Default random seed for the Brownian plate.
pub const BROWNIAN_SEED: u64 = 0;

/// Default plate width along X (mm).
pub const BROWNIAN_WIDTH: f64 = 40.0;

/// Default column spacing along X (mm).
pub const BROWNIAN_DX: f64 = 5.0;

/// Maximum random-walk step along Y per row (mm).
pub const BROWNIAN_DY: f64 = 2.0;

/// Default plate height along Z (mm).
pub const BROWNIAN_HEIGHT: f64 = 20.0;

/// Default row spacing along Z (mm).
pub const BROWNIAN_DZ: f64 = 5.0;

/// Default plate thickness along Y (mm).
pub const BROWNIAN_THICKNESS: f64 = 1.0;

// =============================================================================
// SHOWER RING DEFAULTS
// =============================================================================

/// Diameter of the curtain rod the ring hangs from (mm).
pub const RING_ROD_DIAMETER: f64 = 25.0;

/// Radial width of the ring strip (mm).
pub const RING_STRIP_WIDTH: f64 = 6.0;

/// Angular gap left open in the ring (radians).
pub const RING_GAP: f64 = 1.0;

/// Radial slip space between rod and ring (mm).
pub const RING_SLIP: f64 = 2.0;

/// Number of fragments in a full circle.
///
/// # Example
///
/// ```rust
/// use config::constants::RING_FRAGMENTS;
///
/// let step = 2.0 * std::f64::consts::PI / RING_FRAGMENTS as f64;
/// assert!(step < 0.05);
/// ```
pub const RING_FRAGMENTS: u32 = 256;

/// Ring thickness along Z (mm); stiff but flexible.
pub const RING_THICKNESS: f64 = 0.4;

/// Width of the T-tab stem (mm).
pub const RING_T_WIDTH: f64 = 2.0;

/// Clearance between tab and slot so the parts slide (mm).
pub const RING_CLEARANCE: f64 = 0.25;

/// Smallest fragment count that still describes an arc.
pub const MIN_FRAGMENTS: u32 = 3;
