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

use crate::geometry::Point2;
use crate::numeric::scalar::Scalar;

/// A sampled point of the scalar field. Vertices are never removed from a
/// mesh, so an index into the vertex arena stays valid for its lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex<T: Scalar> {
    pub x: T,
    pub y: T,
    pub value: T,
}

impl<T: Scalar> Vertex<T> {
    pub fn new(x: T, y: T, value: T) -> Self {
        Self { x, y, value }
    }

    pub fn position(&self) -> Point2<T> {
        Point2::new(self.x, self.y)
    }
}

/// One half of a glued edge: the neighboring triangle and the side of that
/// neighbor facing back at us.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeRef {
    pub triangle: usize,
    pub side: usize,
}

impl EdgeRef {
    #[inline]
    pub fn new(triangle: usize, side: usize) -> Self {
        Self { triangle, side }
    }
}

/// Three vertex indices in a fixed winding order plus per-side connectivity.
///
/// Side `i` is the edge from `elements[i]` to `elements[(i + 1) % 3]`. Side 0
/// is the base edge, the only edge refinement ever splits. `None` in a
/// connectivity slot marks a domain boundary.
///
/// `degree` counts the subdivision generations this triangle is descended
/// from a lattice triangle. It doubles as a staleness token: a queued
/// refinement entry whose recorded degree no longer matches has been
/// overtaken by an earlier split.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub elements: [usize; 3],
    pub connectivity: [Option<EdgeRef>; 3],
    pub degree: u32,
}

impl Triangle {
    pub fn new(elements: [usize; 3]) -> Self {
        Self {
            elements,
            connectivity: [None; 3],
            degree: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshError {
    /// Fewer than two coordinates on an axis, or an otherwise degenerate
    /// domain that cannot produce a lattice.
    InvalidDomain,
    /// The base-edge neighbor chase exceeded its depth cap.
    RefinementDiverged,
}

impl std::fmt::Display for MeshError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeshError::InvalidDomain => write!(f, "invalid domain: axis needs at least 2 coordinates"),
            MeshError::RefinementDiverged => write!(f, "refinement diverged: base-edge chase exceeded depth cap"),
        }
    }
}

impl std::error::Error for MeshError {}
