// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::cell::RefCell;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use isomesh::isolines::centroid_error_predicate;
use isomesh::mesh::basic_types::EdgeRef;
use isomesh::{Mesh, MeshError, Vertex};

fn paraboloid(x: f64, y: f64) -> f64 {
    x * x + y * y
}

#[test]
fn test_false_predicate_and_no_forced_passes_changes_nothing() {
    let axes = [0.0, 1.0, 2.0];
    let mut mesh = Mesh::build(&axes, &axes, paraboloid).unwrap();

    mesh.refine(paraboloid, |_| false, 0, 10).unwrap();

    assert_eq!(mesh.triangles.len(), 8);
    assert_eq!(mesh.vertices.len(), 9);
    assert!(mesh.triangles.iter().all(|t| t.degree == 0));
}

#[test]
fn test_min_degree_forces_one_uniform_pass() {
    let axes = [0.0, 1.0, 2.0];
    let mut mesh = Mesh::build(&axes, &axes, paraboloid).unwrap();

    mesh.refine(paraboloid, |_| false, 1, 10).unwrap();

    // every diagonal pair split once: triangle count doubles, one midpoint
    // vertex per pair
    assert_eq!(mesh.triangles.len(), 16);
    assert_eq!(mesh.vertices.len(), 13);
    assert!(mesh.triangles.iter().all(|t| t.degree == 1));
    assert!(mesh.is_conforming());
}

#[test]
fn test_boundary_base_edges_split_without_a_mirror() {
    let mut mesh = Mesh::build(&[0.0, 1.0], &[0.0, 1.0], paraboloid).unwrap();

    // second forced pass splits the children, whose bases are the boundary
    // edges of the single cell
    mesh.refine(paraboloid, |_| false, 2, 10).unwrap();

    assert_eq!(mesh.triangles.len(), 8);
    assert_eq!(mesh.vertices.len(), 9);
    assert!(mesh.triangles.iter().all(|t| t.degree == 2));
    assert!(mesh.is_conforming());
}

#[test]
fn test_max_degree_bounds_uniform_refinement() {
    let mut mesh = Mesh::build(&[0.0, 1.0], &[0.0, 1.0], paraboloid).unwrap();

    mesh.refine(paraboloid, |_| true, 0, 3).unwrap();

    assert!(mesh.triangles.iter().all(|t| t.degree <= 3));
    assert_eq!(mesh.triangles.len(), 16); // 2 * 2^3
    assert!(mesh.is_conforming());
}

#[test]
fn test_vertices_are_stable_across_refinement() {
    let axes = [-1.0, 0.0, 1.0];
    let mut mesh = Mesh::build(&axes, &axes, paraboloid).unwrap();
    let before: Vec<Vertex<f64>> = mesh.vertices.clone();

    let predicate = centroid_error_predicate(paraboloid, 0.05);
    mesh.refine(paraboloid, predicate, 1, 8).unwrap();

    assert!(mesh.vertices.len() >= before.len());
    assert_eq!(&mesh.vertices[..before.len()], &before[..]);
    assert!(mesh.is_conforming());
}

#[test]
fn test_second_refinement_pass_is_idempotent() {
    let axes = [0.0, 1.0, 2.0];
    let mut mesh = Mesh::build(&axes, &axes, paraboloid).unwrap();

    mesh.refine(paraboloid, |_| false, 1, 10).unwrap();
    let triangles = mesh.triangles.len();
    let vertices = mesh.vertices.len();

    mesh.refine(paraboloid, |_| false, 1, 10).unwrap();
    assert_eq!(mesh.triangles.len(), triangles);
    assert_eq!(mesh.vertices.len(), vertices);
}

#[test]
fn test_conformity_survives_randomized_refinement() {
    let axes = [0.0, 1.0, 2.0, 3.0];
    let mut mesh = Mesh::build(&axes, &axes, paraboloid).unwrap();

    let rng = RefCell::new(StdRng::seed_from_u64(7));
    let predicate = |_: &[Vertex<f64>; 3]| rng.borrow_mut().random::<f64>() < 0.4;

    mesh.refine(paraboloid, predicate, 0, 5).unwrap();

    assert!(mesh.is_conforming());
    assert!(mesh.triangles.iter().all(|t| t.degree <= 5));
}

#[test]
fn test_cyclic_connectivity_reports_divergence() {
    let mut mesh = Mesh::build(&[0.0, 1.0], &[0.0, 1.0], paraboloid).unwrap();

    // two triangles chasing each other through non-base sides never yield a
    // splittable mirror
    mesh.triangles[0].connectivity[0] = Some(EdgeRef::new(1, 1));
    mesh.triangles[1].connectivity[0] = Some(EdgeRef::new(0, 1));

    let err = mesh.refine(paraboloid, |_| true, 0, 10).unwrap_err();
    assert_eq!(err, MeshError::RefinementDiverged);
}
