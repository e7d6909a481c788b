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

use isomesh::{Mesh, Vertex, analyze_triangle, extract_isolines};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

#[test]
fn test_single_vertex_above_threshold() {
    let triangle = [
        Vertex::new(0.0, 0.0, -1.0),
        Vertex::new(1.0, 0.0, 1.0),
        Vertex::new(0.0, 1.0, -1.0),
    ];

    let [p1, p2] = analyze_triangle(&triangle, 0.0).unwrap();

    // both endpoints sit on the edges adjacent to the lone above vertex
    assert!(approx(p1.x, 0.5) && approx(p1.y, 0.0));
    assert!(approx(p2.x, 0.5) && approx(p2.y, 0.5));
    assert!(approx(p1.value, 0.0));
    assert!(approx(p2.value, 0.0));
}

#[test]
fn test_uniform_triangles_have_no_crossing() {
    let above = [
        Vertex::new(0.0, 0.0, 2.0),
        Vertex::new(1.0, 0.0, 2.0),
        Vertex::new(0.0, 1.0, 2.0),
    ];
    assert!(analyze_triangle(&above, 0.0).is_none());

    let below = [
        Vertex::new(0.0, 0.0, -3.0),
        Vertex::new(1.0, 0.0, -0.5),
        Vertex::new(0.0, 1.0, -1.0),
    ];
    assert!(analyze_triangle(&below, 0.0).is_none());
}

#[test]
fn test_vertices_exactly_on_threshold_classify_as_below() {
    // all three on the threshold: one class, no segment, no NaN
    let flat = [
        Vertex::new(0.0, 0.0, 5.0),
        Vertex::new(1.0, 0.0, 5.0),
        Vertex::new(0.0, 1.0, 5.0),
    ];
    assert!(analyze_triangle(&flat, 5.0).is_none());

    // two on the threshold, one above: the segment degenerates onto the two
    // tied vertices and every coordinate stays finite
    let tied = [
        Vertex::new(0.0, 0.0, 0.0),
        Vertex::new(1.0, 0.0, 0.0),
        Vertex::new(0.0, 1.0, 1.0),
    ];
    let [p1, p2] = analyze_triangle(&tied, 0.0).unwrap();
    assert!(approx(p1.x, 0.0) && approx(p1.y, 0.0));
    assert!(approx(p2.x, 1.0) && approx(p2.y, 0.0));
    assert!(p1.value.is_finite() && p2.value.is_finite());
}

#[test]
fn test_descending_edge_interpolates_within_bounds() {
    let triangle = [
        Vertex::new(0.0, 0.0, 1.0),
        Vertex::new(1.0, 0.0, -1.0),
        Vertex::new(0.0, 1.0, 1.0),
    ];

    let [p1, p2] = analyze_triangle(&triangle, 0.5).unwrap();

    // the crossing sits a quarter of the way down each descending edge
    assert!(approx(p1.x, 0.25) && approx(p1.y, 0.0));
    assert!(approx(p2.x, 0.25) && approx(p2.y, 0.75));
    assert!(approx(p1.value, 0.5));
    assert!(approx(p2.value, 0.5));
}

#[test]
fn test_extraction_order_is_stable() {
    let field = |x: f64, y: f64| x + y - 1.0;
    let mesh = Mesh::build(&[0.0, 1.0], &[0.0, 1.0], field).unwrap();

    let segments = extract_isolines(&mesh, &[0.0]);

    // both cell halves cross x + y = 1
    assert_eq!(segments.len(), 8);
    for pair in segments.chunks(2) {
        assert!(approx(field(pair[0], pair[1]), 0.0));
    }

    assert_eq!(segments, extract_isolines(&mesh, &[0.0]));
}

#[test]
fn test_multiple_thresholds_iterate_innermost() {
    let field = |x: f64, _y: f64| x;
    let mesh = Mesh::build(&[0.0, 1.0], &[0.0, 1.0], field).unwrap();

    let segments = extract_isolines(&mesh, &[0.25, 0.75]);
    assert_eq!(segments.len() % 4, 0);
    assert!(!segments.is_empty());

    // every endpoint lies on one of the two requested levels
    for pair in segments.chunks(2) {
        let v = field(pair[0], pair[1]);
        assert!(approx(v, 0.25) || approx(v, 0.75));
    }
}
