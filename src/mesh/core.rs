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

use crate::mesh::basic_types::{EdgeRef, MeshError, Triangle, Vertex};
use crate::numeric::scalar::Scalar;

/// Append-only arena of vertices and triangles over a 2D scalar field.
///
/// Triangles are addressed by index; subdivision replaces a slot's content in
/// place and appends the rest, so an index never comes to mean an unrelated
/// geometric triangle within one mesh lifetime. That lets the refinement
/// recursion hold triangle indices across mutations without invalidation.
#[derive(Debug, Clone)]
pub struct Mesh<T: Scalar> {
    pub vertices: Vec<Vertex<T>>,
    pub triangles: Vec<Triangle>,
}

impl<T: Scalar> Mesh<T> {
    /// Samples `f` over the lattice spanned by the two coordinate axes and
    /// triangulates it, two triangles per grid cell split along the
    /// bottom-left to top-right diagonal.
    ///
    /// Vertices are laid out row-major by x then y. Connectivity is computed
    /// from lattice position alone: the even triangle of a cell glues its
    /// base (side 0) to the odd one that follows it, its side 1 to the cell
    /// one column over and its side 2 to the cell one row below; the odd
    /// triangle mirrors this with the previous triangle and the cells to the
    /// left and above.
    pub fn build<F>(x_coords: &[T], y_coords: &[T], f: F) -> Result<Self, MeshError>
    where
        F: Fn(T, T) -> T,
    {
        if x_coords.len() < 2 || y_coords.len() < 2 {
            return Err(MeshError::InvalidDomain);
        }

        let nx = x_coords.len();
        let ny = y_coords.len();

        let mut vertices = Vec::with_capacity(nx * ny);
        for &x in x_coords {
            for &y in y_coords {
                vertices.push(Vertex::new(x, y, f(x, y)));
            }
        }

        let cols = nx - 1;
        let rows = ny - 1;
        let mut triangles = Vec::with_capacity(cols * rows * 2);

        for ix in 0..cols {
            for iy in 0..rows {
                let cell = ix * rows + iy;
                let bl = ix * ny + iy;
                let tl = bl + 1;
                let br = (ix + 1) * ny + iy;
                let tr = br + 1;

                let even = 2 * cell;
                let odd = even + 1;

                // lower-right half of the cell; its base is the diagonal
                let mut lower = Triangle::new([bl, tr, br]);
                lower.connectivity[0] = Some(EdgeRef::new(odd, 0));
                if ix + 1 < cols {
                    lower.connectivity[1] = Some(EdgeRef::new(2 * (cell + rows) + 1, 1));
                }
                if iy > 0 {
                    lower.connectivity[2] = Some(EdgeRef::new(2 * (cell - 1) + 1, 2));
                }

                // upper-left half
                let mut upper = Triangle::new([tr, bl, tl]);
                upper.connectivity[0] = Some(EdgeRef::new(even, 0));
                if ix > 0 {
                    upper.connectivity[1] = Some(EdgeRef::new(2 * (cell - rows), 1));
                }
                if iy + 1 < rows {
                    upper.connectivity[2] = Some(EdgeRef::new(2 * (cell + 1), 2));
                }

                triangles.push(lower);
                triangles.push(upper);
            }
        }

        let mesh = Mesh {
            vertices,
            triangles,
        };
        debug_assert!(mesh.is_conforming());
        Ok(mesh)
    }

    pub(crate) fn add_vertex(&mut self, vertex: Vertex<T>) -> usize {
        let idx = self.vertices.len();
        self.vertices.push(vertex);
        idx
    }

    /// The three sampled corners of triangle `t`.
    pub fn triangle_vertices(&self, t: usize) -> [Vertex<T>; 3] {
        let [a, b, c] = self.triangles[t].elements;
        [self.vertices[a], self.vertices[b], self.vertices[c]]
    }

    /// Flat `(x, y, value)` triples in creation order, ready for upload as a
    /// GPU vertex buffer.
    pub fn vertex_buffer(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.vertices.len() * 3);
        for v in &self.vertices {
            out.push(v.x);
            out.push(v.y);
            out.push(v.value);
        }
        out
    }

    /// Flat vertex-index triples, one per triangle, for indexed rasterization.
    pub fn index_buffer(&self) -> Vec<u32> {
        let mut out = Vec::with_capacity(self.triangles.len() * 3);
        for tri in &self.triangles {
            for &e in &tri.elements {
                out.push(e as u32);
            }
        }
        out
    }

    /// Checks the conformity invariant: every glued edge is glued back from
    /// the other side. A `false` here is a defect in the subdivision logic,
    /// not a runtime condition.
    pub fn is_conforming(&self) -> bool {
        self.triangles.iter().enumerate().all(|(t, tri)| {
            tri.connectivity
                .iter()
                .enumerate()
                .all(|(side, edge)| match edge {
                    None => true,
                    Some(e) => {
                        e.triangle < self.triangles.len()
                            && e.side < 3
                            && self.triangles[e.triangle].connectivity[e.side]
                                == Some(EdgeRef::new(t, side))
                    }
                })
        })
    }
}
