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

use crate::geometry::util::{inverse_mix, mix};
use crate::mesh::basic_types::Vertex;
use crate::mesh::core::Mesh;
use crate::numeric::scalar::Scalar;

fn make_endpoint<T: Scalar>(threshold: T, v1: &Vertex<T>, v2: &Vertex<T>) -> Vertex<T> {
    let t = inverse_mix(threshold, v1.value, v2.value);
    let p = v1.position().lerp(&v2.position(), t);
    Vertex::new(p.x, p.y, mix(v1.value, v2.value, t))
}

/// Marching triangles: classifies the three corners against `threshold` and,
/// when the isoline crosses, returns the segment where the interpolated
/// field equals it.
///
/// A corner sitting exactly on the threshold classifies as below
/// (`value > threshold` is the test); the tie-break is load-bearing, since
/// classifying ties inconsistently would duplicate or drop segments on
/// shared edges.
pub fn analyze_triangle<T: Scalar>(
    triangle: &[Vertex<T>; 3],
    threshold: T,
) -> Option<[Vertex<T>; 2]> {
    let b1 = triangle[0].value > threshold;
    let b2 = triangle[1].value > threshold;
    let b3 = triangle[2].value > threshold;

    if b1 == b2 {
        if b2 == b3 {
            None
        } else {
            Some([
                make_endpoint(threshold, &triangle[0], &triangle[2]),
                make_endpoint(threshold, &triangle[1], &triangle[2]),
            ])
        }
    } else if b2 != b3 {
        Some([
            make_endpoint(threshold, &triangle[0], &triangle[1]),
            make_endpoint(threshold, &triangle[2], &triangle[1]),
        ])
    } else {
        Some([
            make_endpoint(threshold, &triangle[1], &triangle[0]),
            make_endpoint(threshold, &triangle[2], &triangle[0]),
        ])
    }
}

/// Extracts isoline segments for every threshold as flat `(x, y)` pairs, two
/// per segment, ready for upload as a GPU line-list buffer.
///
/// Iteration is triangles outer, thresholds inner. The order carries no
/// meaning but is stable, which reproducible output depends on.
pub fn extract_isolines<T: Scalar>(mesh: &Mesh<T>, thresholds: &[T]) -> Vec<T> {
    let mut segments = Vec::new();
    for t in 0..mesh.triangles.len() {
        let corners = mesh.triangle_vertices(t);
        for &threshold in thresholds {
            if let Some([p1, p2]) = analyze_triangle(&corners, threshold) {
                segments.extend_from_slice(&[p1.x, p1.y, p2.x, p2.y]);
            }
        }
    }
    segments
}

/// Refinement policy comparing the field at the centroid against the linear
/// average of the corner values. Cheap and field-wide; refines wherever the
/// surface is curved, not just near contours.
pub fn centroid_error_predicate<T, F>(f: F, tolerance: T) -> impl Fn(&[Vertex<T>; 3]) -> bool
where
    T: Scalar,
    F: Fn(T, T) -> T,
{
    move |corners: &[Vertex<T>; 3]| {
        let [v1, v2, v3] = corners;
        let cx = (v1.x + v2.x + v3.x) / T::three();
        let cy = (v1.y + v2.y + v3.y) / T::three();
        let interpolated = (v1.value + v2.value + v3.value) / T::three();
        (f(cx, cy) - interpolated).abs() > tolerance
    }
}

/// Refinement policy that only flags triangles an isoline actually crosses:
/// for each crossing threshold, sample the field at the segment midpoint,
/// where linear interpolation claims the field equals the threshold, and
/// refine when the discrepancy exceeds `tolerance`.
pub fn crossing_error_predicate<T, F>(
    f: F,
    thresholds: Vec<T>,
    tolerance: T,
) -> impl Fn(&[Vertex<T>; 3]) -> bool
where
    T: Scalar,
    F: Fn(T, T) -> T,
{
    move |corners: &[Vertex<T>; 3]| {
        thresholds.iter().any(|&threshold| {
            match analyze_triangle(corners, threshold) {
                None => false,
                Some([p1, p2]) => {
                    let mid = p1.position().midpoint(&p2.position());
                    (f(mid.x, mid.y) - threshold).abs() > tolerance
                }
            }
        })
    }
}
