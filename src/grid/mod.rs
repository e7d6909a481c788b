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

use crate::geometry::util::mix;
use crate::mesh::basic_types::MeshError;
use crate::numeric::scalar::Scalar;

/// Densifies an ordered coordinate sequence so no two consecutive outputs are
/// further apart than `res` domain units.
///
/// Every input coordinate is kept (the first and last exactly); each input
/// interval is cut into `ceil(span / res)` even pieces. A zero-length
/// interval contributes a single output point rather than a division by zero.
pub fn subdivide_coords<T: Scalar>(coords: &[T], res: T) -> Result<Vec<T>, MeshError> {
    if coords.len() < 2 {
        return Err(MeshError::InvalidDomain);
    }

    let mut out = Vec::with_capacity(coords.len());
    out.push(coords[0]);

    for pair in coords.windows(2) {
        let (c1, c2) = (pair[0], pair[1]);
        let subdivisions = ((c2 - c1) / res)
            .ceil()
            .to_usize()
            .unwrap_or(1)
            .max(1);

        for i in 1..=subdivisions {
            let t = T::from_usize(i).unwrap() / T::from_usize(subdivisions).unwrap();
            out.push(mix(c1, c2, t));
        }
    }

    Ok(out)
}
