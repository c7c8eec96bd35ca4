//! # Extrusion Tests
//!
//! Closure, orientation and counting checks for `extrude`.

use super::*;
use approx::assert_relative_eq;
use std::collections::HashMap;

type Key = [u64; 3];

fn key(p: Point3) -> Key {
    [p.x.to_bits(), p.y.to_bits(), p.z.to_bits()]
}

/// Directed edges that are not matched by exactly one opposite edge.
fn unmatched_edges(triangles: &[Triangle]) -> usize {
    let mut edges: HashMap<(Key, Key), usize> = HashMap::new();
    for t in triangles {
        let [a, b, c] = t.vertices().map(key);
        for edge in [(a, b), (b, c), (c, a)] {
            *edges.entry(edge).or_default() += 1;
        }
    }
    edges
        .iter()
        .filter(|&(&(a, b), &count)| count != 1 || edges.get(&(b, a)) != Some(&1))
        .count()
}

fn signed_volume(triangles: &[Triangle]) -> f64 {
    triangles
        .iter()
        .map(|t| t.p1.dot(t.p2.cross(t.p3)) / 6.0)
        .sum()
}

fn unit_square() -> Grid {
    Grid::new(vec![
        vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)],
        vec![Point3::new(0.0, 1.0, 0.0), Point3::new(1.0, 1.0, 0.0)],
    ])
    .unwrap()
}

fn height_field(rows: usize, columns: usize) -> Grid {
    Grid::new(
        (0..rows)
            .map(|i| {
                (0..columns)
                    .map(|j| {
                        let (x, z) = (j as f64 * 2.0, i as f64 * 1.5);
                        Point3::new(x, ((i * 7 + j * 3) % 5) as f64 * 0.25, z)
                    })
                    .collect()
            })
            .collect(),
    )
    .unwrap()
}

#[test]
fn test_unit_square_extrusion() {
    let solid: Vec<_> = extrude(&unit_square(), Vector3::Z).unwrap().collect();

    // 2 front + 2 back + 2 per wall
    assert_eq!(solid.len(), 12);
    for p in solid.iter().flat_map(|t| t.vertices()) {
        for c in p.to_array() {
            assert!(c == 0.0 || c == 1.0, "vertex {p} outside the unit cube");
        }
    }
    assert_eq!(unmatched_edges(&solid), 0);
}

#[test]
fn test_orientation_follows_sweep_handedness() {
    // (X × Y) · Z > 0: inside-out
    let up: Vec<_> = extrude(&unit_square(), Vector3::Z).unwrap().collect();
    assert_relative_eq!(signed_volume(&up), -1.0, epsilon = 1e-12);

    // (X × Y) · -Z < 0: outward
    let down: Vec<_> = extrude(&unit_square(), Vector3::NEG_Z).unwrap().collect();
    assert_relative_eq!(signed_volume(&down), 1.0, epsilon = 1e-12);
}

#[test]
fn test_reversed_rows_face_outward() {
    let flipped = Grid::new(unit_square().rows().iter().rev().cloned().collect()).unwrap();
    let solid: Vec<_> = extrude(&flipped, Vector3::Z).unwrap().collect();
    assert_relative_eq!(signed_volume(&solid), 1.0, epsilon = 1e-12);
}

#[test]
fn test_front_and_back_are_interleaved() {
    let grid = unit_square();
    let solid: Vec<_> = extrude(&grid, Vector3::Z).unwrap().take(4).collect();
    let front: Vec<_> = grid.triangles().collect();

    assert_eq!(solid[0], front[0]);
    assert_eq!(solid[1], front[0].translated(Vector3::Z).reversed());
    assert_eq!(solid[2], front[1]);
    assert_eq!(solid[3], front[1].translated(Vector3::Z).reversed());
}

#[test]
fn test_triangle_count_formula() {
    for (n, m) in [(2, 2), (2, 5), (4, 2), (5, 7)] {
        let count = extrude(&height_field(n, m), Vector3::new(0.0, 1.0, 0.0))
            .unwrap()
            .count();
        assert_eq!(count, 4 * (n - 1) * (m - 1) + 4 * (n - 1) + 4 * (m - 1));
    }
}

#[test]
fn test_height_field_is_closed() {
    let solid: Vec<_> = extrude(&height_field(5, 6), Vector3::new(0.0, 1.0, 0.0))
        .unwrap()
        .collect();
    assert_eq!(unmatched_edges(&solid), 0);
}

#[test]
fn test_closed_for_any_sweep_direction() {
    let grid = height_field(3, 4);
    for vector in [
        Vector3::new(0.0, -2.0, 0.0),
        Vector3::new(0.5, 1.0, 0.25),
        Vector3::new(0.0, 0.0, 3.0),
    ] {
        let solid: Vec<_> = extrude(&grid, vector).unwrap().collect();
        assert_eq!(unmatched_edges(&solid), 0, "open edges sweeping along {vector}");
    }
}

#[test]
fn test_wall_reversal_pattern() {
    let grid = unit_square();
    let v = Vector3::Z;
    let solid: Vec<_> = extrude(&grid, v).unwrap().collect();

    let (a0, a1) = (Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0));
    let (b0, b1) = (Point3::new(0.0, 1.0, 0.0), Point3::new(1.0, 1.0, 0.0));

    // bottom: [first row, moved first row], reversed
    assert_eq!(solid[4], Triangle::new(a0, a0 + v, a1));
    // top: [last row, moved last row], as is
    assert_eq!(solid[6], Triangle::new(b0, b1, b0 + v));
    // left: rows [a0, a0 + v], [b0, b0 + v], reversed
    assert_eq!(solid[8], Triangle::new(a0, b0, a0 + v));
    // right: rows [a1, a1 + v], [b1, b1 + v], as is
    assert_eq!(solid[10], Triangle::new(a1, a1 + v, b1));
}

#[test]
fn test_rejects_single_row() {
    let grid = Grid::new(vec![vec![Point3::ZERO, Point3::X, Point3::Y]]).unwrap();
    let err = extrude(&grid, Vector3::Z).err().unwrap();
    assert!(matches!(
        err,
        MeshError::DegenerateGrid {
            rows: 1,
            columns: 3
        }
    ));
}

#[test]
fn test_rejects_single_column() {
    let grid = Grid::new(vec![vec![Point3::ZERO], vec![Point3::X]]).unwrap();
    assert!(matches!(
        extrude(&grid, Vector3::Z),
        Err(MeshError::DegenerateGrid { rows: 2, columns: 1 })
    ));
}
