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

use crate::isolines::{crossing_error_predicate, extract_isolines};
use crate::mesh::basic_types::MeshError;
use crate::mesh::core::Mesh;
use crate::numeric::scalar::Scalar;

/// Knobs for one build + refine + extract cycle.
#[derive(Debug, Clone)]
pub struct ContourOptions<T: Scalar> {
    /// Refinement passes applied unconditionally, predicate or not.
    pub min_degree: u32,
    /// Hard ceiling on subdivision depth.
    pub max_degree: u32,
    /// Interpolation-error tolerance driving the refinement predicate.
    pub tolerance: T,
}

impl<T: Scalar> Default for ContourOptions<T> {
    fn default() -> Self {
        Self {
            min_degree: 1,
            max_degree: 10,
            tolerance: T::from_f64(0.1).unwrap(),
        }
    }
}

/// The numeric buffers one recomputation cycle hands to a rendering layer.
#[derive(Debug, Clone)]
pub struct ContourOutput<T: Scalar> {
    /// Flat `(x, y, value)` triples, one per mesh vertex.
    pub vertices: Vec<T>,
    /// Flat vertex-index triples, one per triangle.
    pub indices: Vec<u32>,
    /// Flat `(x, y)` pairs, two per isoline segment.
    pub segments: Vec<T>,
}

/// Runs one full cycle: lattice construction over the given axes, adaptive
/// refinement near the requested thresholds, then isoline extraction.
///
/// The axes are taken post grid-subdivision; deriving them from a pixel
/// density and zoom scale stays with the caller, as does any scheduling or
/// coalescing of recomputations. No state survives the call.
pub fn contour<T, F>(
    f: F,
    x_coords: &[T],
    y_coords: &[T],
    thresholds: &[T],
    options: &ContourOptions<T>,
) -> Result<ContourOutput<T>, MeshError>
where
    T: Scalar,
    F: Fn(T, T) -> T,
{
    let mut mesh = Mesh::build(x_coords, y_coords, &f)?;

    let predicate = crossing_error_predicate(&f, thresholds.to_vec(), options.tolerance);
    mesh.refine(&f, predicate, options.min_degree, options.max_degree)?;

    Ok(ContourOutput {
        vertices: mesh.vertex_buffer(),
        indices: mesh.index_buffer(),
        segments: extract_isolines(&mesh, thresholds),
    })
}
