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

//! The wgs84 module contains the
//! [WGS 84](https://en.wikipedia.org/wiki/World_Geodetic_System#WGS84)
//! ellipsoid axes, the default model of this library.

use super::models::EllipsoidModel;
use icao_units::si::Metres;

/// The WGS 84 model identifier.
pub const ID: &str = "wgs84";

/// The WGS 84 Semimajor axis measured in metres.
/// This is the radius at the equator.
pub const A: Metres = Metres(6_378_137.0);

/// The WGS 84 Semiminor axis measured in metres.
/// This is the radius at the poles.
pub const B: Metres = Metres(6_356_752.314_245_18);

/// The WGS 84 registry record.
pub const MODEL: EllipsoidModel = EllipsoidModel::new(ID, "WGS-84 (1984)", A, B);
