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

use std::collections::VecDeque;

use smallvec::SmallVec;

use crate::mesh::basic_types::{EdgeRef, MeshError, Triangle, Vertex};
use crate::mesh::core::Mesh;
use crate::numeric::scalar::Scalar;

/// Ceiling on the base-edge neighbor chase. Adjacent degrees stay within one
/// or two of each other in practice, so hitting this means the connectivity
/// is corrupt or adversarial.
const MAX_CHASE_DEPTH: usize = 64;

/// Triangles touched while servicing one refinement step. A split touches
/// two triangles, four with a mirror; chases push more.
type Touched = SmallVec<[usize; 4]>;

impl<T: Scalar> Mesh<T> {
    /// Adaptively subdivides triangles flagged by `predicate`, keeping the
    /// triangulation conforming throughout.
    ///
    /// Every triangle is queued once up front; FIFO order keeps the pass
    /// deterministic and amortizes the cascading splits. Entries whose
    /// recorded degree is stale are dropped. Triangles below `min_degree`
    /// are subdivided unconditionally, which forces a baseline resolution
    /// before the predicate gets a say; `max_degree` is a hard ceiling on
    /// the resulting degree.
    ///
    /// Termination: each subdivision strictly increases the degree of every
    /// triangle it re-enqueues, and nothing at or above `max_degree` is
    /// subdivided, so the queue drains.
    pub fn refine<F, P>(
        &mut self,
        f: F,
        predicate: P,
        min_degree: u32,
        max_degree: u32,
    ) -> Result<(), MeshError>
    where
        F: Fn(T, T) -> T,
        P: Fn(&[Vertex<T>; 3]) -> bool,
    {
        let mut queue: VecDeque<(usize, u32)> = (0..self.triangles.len())
            .map(|t| (t, self.triangles[t].degree))
            .collect();

        while let Some((t, degree)) = queue.pop_front() {
            if self.triangles[t].degree != degree {
                continue; // split since it was queued
            }
            if degree >= max_degree {
                continue;
            }
            if degree >= min_degree && !predicate(&self.triangle_vertices(t)) {
                continue;
            }

            let mut touched = Touched::new();
            self.refine_triangle_base(t, &f, 0, &mut touched)?;

            for u in touched {
                let d = self.triangles[u].degree;
                if d < max_degree {
                    queue.push_back((u, d));
                }
            }
        }

        debug_assert!(self.is_conforming());
        Ok(())
    }

    /// Splits the base edge (side 0) of triangle `t`, together with whatever
    /// triangle mirrors it across that edge, and records every triangle the
    /// operation rewrote in `touched`.
    ///
    /// A neighbor glued to our base at one of its non-base sides cannot be
    /// split along our edge directly; it is recursively base-split first,
    /// which by construction leaves a triangle sharing our base at its side
    /// 0. The recursion depth is bounded by the degree difference along the
    /// chain; past `MAX_CHASE_DEPTH` we give up rather than blow the stack.
    fn refine_triangle_base<F>(
        &mut self,
        t: usize,
        f: &F,
        depth: usize,
        touched: &mut Touched,
    ) -> Result<(), MeshError>
    where
        F: Fn(T, T) -> T,
    {
        if depth > MAX_CHASE_DEPTH {
            return Err(MeshError::RefinementDiverged);
        }

        if let Some(edge) = self.triangles[t].connectivity[0] {
            if edge.side != 0 {
                self.refine_triangle_base(edge.triangle, f, depth + 1, touched)?;
            }
        }

        let mirror = self.triangles[t].connectivity[0].map(|edge| {
            debug_assert_eq!(edge.side, 0);
            edge.triangle
        });

        let [v0, v1, _] = self.triangles[t].elements;
        let mid = self.vertices[v0]
            .position()
            .midpoint(&self.vertices[v1].position());
        let vm = self.add_vertex(Vertex::new(mid.x, mid.y, f(mid.x, mid.y)));

        let t2 = self.split_triangle(t, vm);
        touched.push(t);
        touched.push(t2);

        if let Some(u) = mirror {
            let u2 = self.split_triangle(u, vm);
            touched.push(u);
            touched.push(u2);

            // Cross-wire the four half-base edges so the two split pairs
            // conform across the former shared edge.
            self.triangles[t].connectivity[2] = Some(EdgeRef::new(u2, 1));
            self.triangles[u2].connectivity[1] = Some(EdgeRef::new(t, 2));
            self.triangles[u].connectivity[2] = Some(EdgeRef::new(t2, 1));
            self.triangles[t2].connectivity[1] = Some(EdgeRef::new(u, 2));
        }

        Ok(())
    }

    /// Replaces triangle `t` with the half keeping its old side-1 edge and
    /// appends the half keeping its old side-2 edge; `vm` is the already
    /// created midpoint of the base. Returns the appended index.
    ///
    /// The old non-base edges become the children's base edges, so future
    /// splits propagate outward. Neighbors across those edges are repointed
    /// at whichever child now owns the geometry. The two half-base slots are
    /// left unglued for the caller to cross-wire (or leave as boundary).
    fn split_triangle(&mut self, t: usize, vm: usize) -> usize {
        let Triangle {
            elements: [v0, v1, v2],
            connectivity,
            degree,
        } = self.triangles[t];

        let t2 = self.triangles.len();
        let degree = degree + 1;

        self.triangles[t] = Triangle {
            elements: [v1, v2, vm],
            connectivity: [connectivity[1], Some(EdgeRef::new(t2, 2)), None],
            degree,
        };
        self.triangles.push(Triangle {
            elements: [v2, v0, vm],
            connectivity: [connectivity[2], None, Some(EdgeRef::new(t, 1))],
            degree,
        });

        if let Some(e) = connectivity[1] {
            self.triangles[e.triangle].connectivity[e.side] = Some(EdgeRef::new(t, 0));
        }
        if let Some(e) = connectivity[2] {
            self.triangles[e.triangle].connectivity[e.side] = Some(EdgeRef::new(t2, 0));
        }

        t2
    }
}
