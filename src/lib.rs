// Copyright (c) 2024-2025 Ken Barker

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

//! planet-ellipsoids
//!
//! A library of the reference
//! [ellipsoids](https://en.wikipedia.org/wiki/Earth_ellipsoid) used to model
//! the shape of the Earth and other bodies of the solar system for geodetic
//! calculations.
//!
//! An ellipsoid of revolution is defined by its Semimajor axis `a`
//! (the radius at the equator) and its Semiminor axis `b` (the radius at the
//! poles), see *Figure 1*.
//!
//! <img src="https://upload.wikimedia.org/wikipedia/commons/thumb/3/3e/WGS84_mean_Earth_radius.svg/800px-WGS84_mean_Earth_radius.svg.png" width="400">
//!
//! *Figure 1 The WGS-84 Ellipsoid (not to scale)
//! [Cmglee](https://commons.wikimedia.org/wiki/User:Cmglee), [CC BY-SA 4.0](https://creativecommons.org/licenses/by-sa/4.0), via Wikimedia Commons*
//!
//! The shape of the ellipsoid is described by parameters derived from the axes:
//!
//! - the flattening `f = (a - b) / a`;
//! - the third flattening `n = (a - b) / (a + b)`;
//! - and the eccentricity `e = √(2f - f²)`.
//!
//! ## Models
//!
//! The library contains a registry of historical and current Earth ellipsoids,
//! from Maupertuis (1738) to [WGS-84](https://en.wikipedia.org/wiki/World_Geodetic_System#WGS84)
//! and ГСК-2011, together with ellipsoids of the Moon, the planets, Io and Pluto.
//!
//! An `Ellipsoid` is constructed from the identifier of a model in the registry,
//! e.g. "wgs84", "grs80" or "mars".
//! The identifier is matched exactly, an unknown identifier results in an
//! `UnsupportedModelError`.
//!
//! ```
//! use planet_ellipsoids::{Ellipsoid, UnsupportedModelError};
//!
//! let mars = Ellipsoid::from_model("mars").unwrap();
//! assert_eq!("Mars", mars.name());
//! assert_eq!(3_396_900.0, mars.semimajor_axis().0);
//!
//! let error = Ellipsoid::from_model("krypton").unwrap_err();
//! assert_eq!(UnsupportedModelError::new("krypton"), error);
//! ```
//!
//! The default `Ellipsoid` is WGS-84, also available as the static
//! `WGS84_ELLIPSOID`.
//!
//! The library depends upon the following crates:
//!
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres`;
//! - [libm](https://crates.io/crates/libm) - for `sqrt` without `std`;
//! - [thiserror](https://crates.io/crates/thiserror) - to define `UnsupportedModelError`.
//!
//! The optional `serde` feature implements `serde::Serialize` for
//! `Ellipsoid` and `EllipsoidModel`.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications.
//! `WGS84_ELLIPSOID` is initialised through `lazy_static` with its
//! `spin_no_std` feature, so it does not require `std` either.

#![cfg_attr(not(test), no_std)]

extern crate alloc;
extern crate icao_units;

pub mod ellipsoid;
pub mod error;

pub use ellipsoid::models::EllipsoidModel;
pub use error::UnsupportedModelError;
pub use icao_units::si::Metres;

use core::fmt;
use core::str::FromStr;
use lazy_static::lazy_static;

/// The parameters of a reference `Ellipsoid`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    /// The identifier of the model.
    model: &'static str,
    /// The name of the model for printing.
    name: &'static str,
    /// The Semimajor axis of the ellipsoid.
    a: Metres,
    /// The Semiminor axis of the ellipsoid.
    b: Metres,

    /// The flattening of the ellipsoid, a ratio.
    f: f64,
    /// The third flattening of the ellipsoid.
    n: f64,
    /// The Eccentricity of the ellipsoid.
    e: f64,
}

impl Ellipsoid {
    /// Construct an `Ellipsoid` from a model in the registry.
    /// * `model` - the model identifier, e.g. "wgs84".
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedModelError` if `model` is not in the registry.
    ///
    /// # Examples
    /// ```
    /// use planet_ellipsoids::Ellipsoid;
    ///
    /// let grs80 = Ellipsoid::from_model("grs80").unwrap();
    /// assert_eq!("GRS-80 (1979)", grs80.name());
    /// assert!(Ellipsoid::from_model("GRS80").is_err());
    /// ```
    pub fn from_model(model: &str) -> Result<Self, UnsupportedModelError> {
        ellipsoid::models::find(model)
            .map(Self::from)
            .ok_or_else(|| UnsupportedModelError::new(model))
    }

    /// Construct an `Ellipsoid` with the WGS-84 parameters.
    #[must_use]
    pub fn wgs84() -> Self {
        Self::from(&ellipsoid::wgs84::MODEL)
    }

    /// The identifier of the model.
    #[must_use]
    pub const fn model(&self) -> &'static str {
        self.model
    }

    /// The name of the model for printing.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The Semimajor axis of the ellipsoid.
    #[must_use]
    pub const fn semimajor_axis(&self) -> Metres {
        self.a
    }

    /// The Semiminor axis of the ellipsoid.
    #[must_use]
    pub const fn semiminor_axis(&self) -> Metres {
        self.b
    }

    /// The flattening of the ellipsoid, a ratio.
    #[must_use]
    pub const fn flattening(&self) -> f64 {
        self.f
    }

    /// The third flattening of the ellipsoid.
    #[must_use]
    pub const fn third_flattening(&self) -> f64 {
        self.n
    }

    /// The Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn eccentricity(&self) -> f64 {
        self.e
    }

    /// The inverse flattening of the ellipsoid, infinite for a sphere.
    #[must_use]
    pub fn inverse_flattening(&self) -> f64 {
        1.0 / self.f
    }

    /// The square of the Eccentricity of the ellipsoid.
    #[must_use]
    pub fn sq_eccentricity(&self) -> f64 {
        ellipsoid::calculate_sq_eccentricity(self.f)
    }

    /// The square of the second Eccentricity of the ellipsoid.
    #[must_use]
    pub fn sq_2nd_eccentricity(&self) -> f64 {
        ellipsoid::calculate_sq_2nd_eccentricity(self.f)
    }
}

impl From<&EllipsoidModel> for Ellipsoid {
    /// Copy the model and calculate its shape parameters.
    fn from(model: &EllipsoidModel) -> Self {
        let a = model.a();
        let b = model.b();
        let f = ellipsoid::calculate_flattening(a, b);
        Self {
            model: model.id(),
            name: model.name(),
            a,
            b,
            f,
            n: ellipsoid::calculate_3rd_flattening(a, b),
            e: ellipsoid::calculate_eccentricity(f),
        }
    }
}

impl Default for Ellipsoid {
    /// The WGS-84 `Ellipsoid`.
    fn default() -> Self {
        Self::wgs84()
    }
}

impl FromStr for Ellipsoid {
    type Err = UnsupportedModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_model(s)
    }
}

impl TryFrom<&str> for Ellipsoid {
    type Error = UnsupportedModelError;

    fn try_from(model: &str) -> Result<Self, Self::Error> {
        Self::from_model(model)
    }
}

impl fmt::Display for Ellipsoid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Ellipsoid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Ellipsoid", 7)?;
        state.serialize_field("model", self.model)?;
        state.serialize_field("name", self.name)?;
        state.serialize_field("semimajor_axis", &self.a.0)?;
        state.serialize_field("semiminor_axis", &self.b.0)?;
        state.serialize_field("flattening", &self.f)?;
        state.serialize_field("third_flattening", &self.n)?;
        state.serialize_field("eccentricity", &self.e)?;
        state.end()
    }
}

lazy_static! {
    /// A static instance of the WGS-84 `Ellipsoid`.
    pub static ref WGS84_ELLIPSOID: Ellipsoid = Ellipsoid::wgs84();
}
