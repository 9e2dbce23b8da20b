// Copyright (c) 2024 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The ellipsoid module contains the registry of reference ellipsoids and
//! functions for calculating the shape parameters of an ellipsoid given its
//! Semimajor axis (the equatorial radius) and Semiminor axis (the polar radius).

#![allow(clippy::suboptimal_flops)]

pub mod models;
pub mod wgs84;

use icao_units::si::Metres;

/// Calculate the flattening ratio of an ellipsoid.
/// * `a` - the Semimajor axis of an ellipsoid.
/// * `b` - the Semiminor axis of an ellipsoid.
/// # Examples
/// ```
/// use planet_ellipsoids::ellipsoid::{calculate_flattening, wgs84};
///
/// // The WGS 84 flattening.
/// assert_eq!(0.0033528106647473664, calculate_flattening(wgs84::A, wgs84::B));
/// ```
#[must_use]
pub fn calculate_flattening(a: Metres, b: Metres) -> f64 {
    (a.0 - b.0) / a.0
}

/// Calculate the third flattening of an ellipsoid.
/// * `a` - the Semimajor axis of an ellipsoid.
/// * `b` - the Semiminor axis of an ellipsoid.
/// # Examples
/// ```
/// use planet_ellipsoids::ellipsoid::{calculate_3rd_flattening, wgs84};
///
/// // The WGS 84 3rd flattening.
/// assert_eq!(0.0016792203863836474, calculate_3rd_flattening(wgs84::A, wgs84::B));
/// ```
#[must_use]
pub fn calculate_3rd_flattening(a: Metres, b: Metres) -> f64 {
    (a.0 - b.0) / (a.0 + b.0)
}

/// Calculate the square of the Eccentricity of an ellipsoid.
/// * `f` - the flattening ratio.
#[must_use]
pub fn calculate_sq_eccentricity(f: f64) -> f64 {
    2.0 * f - f * f
}

/// Calculate the Eccentricity of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use planet_ellipsoids::ellipsoid::{calculate_eccentricity, calculate_flattening, wgs84};
///
/// // The WGS 84 eccentricity.
/// let f = calculate_flattening(wgs84::A, wgs84::B);
/// assert_eq!(0.0818191908426201, calculate_eccentricity(f));
/// ```
#[must_use]
pub fn calculate_eccentricity(f: f64) -> f64 {
    libm::sqrt(calculate_sq_eccentricity(f))
}

/// Calculate the square of the second Eccentricity of an ellipsoid.
/// * `f` - the flattening ratio.
#[must_use]
pub fn calculate_sq_2nd_eccentricity(f: f64) -> f64 {
    let one_minus_f = 1.0 - f;
    calculate_sq_eccentricity(f) / (one_minus_f * one_minus_f)
}
