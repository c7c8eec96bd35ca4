//! # Config Crate
//!
//! Centralized configuration constants for the STL generation pipeline.
//! Output precision and the default parameters of the bundled
//! generators are defined here so the core library and the command-line
//! tool agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{BROWNIAN_SEED, STL_DECIMALS};
//!
//! // Fixed precision used when writing coordinates
//! assert_eq!(format!("{:.*}", STL_DECIMALS, 0.5), "0.500000");
//! assert_eq!(BROWNIAN_SEED, 0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Deterministic Output**: Fixed numeric precision for generated files
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
