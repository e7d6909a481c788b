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

use crate::numeric::scalar::Scalar;

/// Linear interpolation between `a` and `b`. The symmetric form lands on the
/// endpoints exactly at t = 0 and t = 1.
#[inline(always)]
pub fn mix<T: Scalar>(a: T, b: T, t: T) -> T {
    a * (T::one() - t) + b * t
}

/// Inverse linear interpolation: the parameter at which `mix(lo, hi, t)`
/// equals `t`. When `lo == hi` both endpoints already sit on the target, so
/// either parameter is valid; 0 is returned.
#[inline(always)]
pub fn inverse_mix<T: Scalar>(t: T, lo: T, hi: T) -> T {
    if lo > hi {
        return T::one() - inverse_mix(t, hi, lo);
    }
    if lo == hi {
        return T::zero();
    }
    (t - lo) / (hi - lo)
}
