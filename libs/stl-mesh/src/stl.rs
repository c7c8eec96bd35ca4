//! ASCII STL output.
//!
//! ```text
//! solid name
//!   facet normal ni nj nk
//!     outer loop
//!       vertex v1x v1y v1z
//!       vertex v2x v2y v2z
//!       vertex v3x v3y v3z
//!     endloop
//!   endfacet
//!   ...
//! endsolid name
//! ```
//!
//! Facet normals are computed from vertex order while streaming. A
//! degenerate triangle is still written (with a zero normal) and reported as
//! a diagnostic, so one bad facet never truncates the file.

use std::fmt;
use std::io::Write;

use config::constants::{NAME_SPACE_REPLACEMENT, STL_DECIMALS};
use serde::Serialize;

use crate::diagnostic::{Diagnostic, DiagnosticSink, Diagnostics};
use crate::error::{MeshError, MeshResult};
use crate::geometry::{Point3, Vector3};
use crate::triangle::Triangle;

/// A solid name that is safe to write after `solid` / `endsolid`.
///
/// Spaces become underscores. The result must be non-empty and made only of
/// printable ASCII; anything else is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SolidName(String);

impl SolidName {
    pub fn parse(name: &str) -> MeshResult<Self> {
        let sanitized = name.replace(' ', &NAME_SPACE_REPLACEMENT.to_string());
        if sanitized.is_empty() {
            return Err(MeshError::invalid_name(name, "name is empty"));
        }
        if let Some(c) = sanitized.chars().find(|c| !c.is_ascii_graphic()) {
            return Err(MeshError::invalid_name(
                name,
                format!("character {c:?} cannot appear in an ASCII STL header"),
            ));
        }
        Ok(Self(sanitized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SolidName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What was written, collected while streaming.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StlSummary {
    pub name: SolidName,
    pub facets: usize,
    /// Axis-aligned (min, max) corners of all written vertices.
    pub bounds: Option<[Point3; 2]>,
    pub diagnostics: Diagnostics,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Header,
    Facets,
    Done,
}

/// Lazy line iterator over an ASCII STL document.
///
/// Each item is one line including its trailing newline.
#[derive(Debug)]
pub struct StlLines<I> {
    name: SolidName,
    triangles: I,
    stage: Stage,
    pending: std::vec::IntoIter<String>,
    facets: usize,
    bounds: Option<[Point3; 2]>,
    diagnostics: Diagnostics,
}

impl<I: Iterator<Item = Triangle>> StlLines<I> {
    fn new(name: SolidName, triangles: I) -> Self {
        Self {
            name,
            triangles,
            stage: Stage::Header,
            pending: Vec::new().into_iter(),
            facets: 0,
            bounds: None,
            diagnostics: Diagnostics::new(),
        }
    }

    /// Diagnostics reported so far.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Facets emitted so far.
    pub fn facet_count(&self) -> usize {
        self.facets
    }

    pub fn into_summary(self) -> StlSummary {
        StlSummary {
            name: self.name,
            facets: self.facets,
            bounds: self.bounds,
            diagnostics: self.diagnostics,
        }
    }

    fn facet_lines(&mut self, triangle: Triangle) -> Vec<String> {
        let facet = self.facets;
        self.facets += 1;

        let normal = triangle.normal(&mut self.diagnostics.for_facet(facet));
        let vertices = triangle.vertices();
        if vertices.iter().any(|p| !p.is_finite()) {
            self.diagnostics.report(
                Diagnostic::error("non-finite vertex coordinate").with_facet(facet),
            );
        }
        for p in vertices {
            self.bounds = Some(match self.bounds {
                Some([min, max]) => [min.min(p), max.max(p)],
                None => [p, p],
            });
        }

        let mut lines = Vec::with_capacity(7);
        lines.push(format!("  facet normal {}\n", triple(normal)));
        lines.push("    outer loop\n".to_string());
        lines.extend(vertices.iter().map(|&p| format!("      vertex {}\n", triple(p))));
        lines.push("    endloop\n".to_string());
        lines.push("  endfacet\n".to_string());
        lines
    }
}

impl<I: Iterator<Item = Triangle>> Iterator for StlLines<I> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some(line) = self.pending.next() {
                return Some(line);
            }
            match self.stage {
                Stage::Header => {
                    self.stage = Stage::Facets;
                    return Some(format!("solid {}\n", self.name));
                }
                Stage::Facets => match self.triangles.next() {
                    Some(triangle) => {
                        self.pending = self.facet_lines(triangle).into_iter();
                    }
                    None => {
                        self.stage = Stage::Done;
                        log::debug!("solid {}: {} facets", self.name, self.facets);
                        return Some(format!("endsolid {}\n", self.name));
                    }
                },
                Stage::Done => return None,
            }
        }
    }
}

/// Formats one number with fixed precision; values that round to zero are
/// written without a sign.
fn number(value: f64) -> String {
    let text = format!("{:.*}", STL_DECIMALS, value);
    match text.strip_prefix('-') {
        Some(unsigned) if unsigned.bytes().all(|b| b == b'0' || b == b'.') => {
            unsigned.to_string()
        }
        _ => text,
    }
}

fn triple(v: Vector3) -> String {
    format!("{} {} {}", number(v.x), number(v.y), number(v.z))
}

/// Starts streaming `surface` as an ASCII STL document named `name`.
///
/// The name is validated before any line is produced.
///
/// # Example
///
/// ```rust
/// use stl_mesh::{serialize, Triangle};
/// use glam::DVec3;
///
/// let t = Triangle::new(DVec3::ZERO, DVec3::X, DVec3::Y);
/// let lines: Vec<String> = serialize("test case", [t])?.collect();
/// assert_eq!(lines[0], "solid test_case\n");
/// assert_eq!(lines[1], "  facet normal 0.000000 0.000000 -1.000000\n");
/// assert_eq!(lines.last().unwrap(), "endsolid test_case\n");
/// # Ok::<(), stl_mesh::MeshError>(())
/// ```
pub fn serialize<I>(name: &str, surface: I) -> MeshResult<StlLines<I::IntoIter>>
where
    I: IntoIterator<Item = Triangle>,
{
    Ok(StlLines::new(SolidName::parse(name)?, surface.into_iter()))
}

/// Streams `surface` into `writer` and returns what was written.
pub fn write_stl<W, I>(mut writer: W, name: &str, surface: I) -> MeshResult<StlSummary>
where
    W: Write,
    I: IntoIterator<Item = Triangle>,
{
    let mut lines = serialize(name, surface)?;
    for line in lines.by_ref() {
        writer.write_all(line.as_bytes())?;
    }
    writer.flush()?;
    Ok(lines.into_summary())
}

/// Renders `surface` into a single string.
pub fn to_stl_string<I>(name: &str, surface: I) -> MeshResult<String>
where
    I: IntoIterator<Item = Triangle>,
{
    Ok(serialize(name, surface)?.collect())
}
