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

//! The models module contains the registry of reference ellipsoids.
//!
//! Earth ellipsoid sources:
//!
//! - maupertuis, plessis, everest1830, everest1830m, everest1967, airy,
//!   bessel, clarke1866, clarke1878, clarke1860, helmert, hayford,
//!   international1924, krassovsky1940, wgs66, australian, international1967,
//!   grs67, sa1969, wgs72, iers1989, iers2003:
//!   [Historical Earth ellipsoids](https://en.wikipedia.org/wiki/Earth_ellipsoid#Historical_Earth_ellipsoids),
//!   [PROJ.4 Spheroid](https://en.wikibooks.org/wiki/PROJ.4#Spheroid)
//! - wgs84: [WGS 84](https://en.wikipedia.org/wiki/World_Geodetic_System#WGS84)
//! - grs80: [GRS 80](https://en.wikipedia.org/wiki/GRS_80)
//! - pz90.11: [ПЗ-90.11](https://structure.mil.ru/files/pz-90.pdf)
//! - gsk2011: [ГОСТ 32453-2017](https://racurs.ru/downloads/documentation/gost_r_32453-2017.pdf)
//!
//! Other bodies:
//!
//! - mars: [Mars geodesy](https://tharsis.gsfc.nasa.gov/geodesy.html)
//! - io: [Io](https://doi.org/10.1006/icar.1998.5987)
//! - mercury, venus, moon, jupiter, saturn, uranus, neptune, pluto:
//!   [NSSDC planetary fact sheets](https://nssdc.gsfc.nasa.gov/planetary/factsheet/index.html)
//!
//! Note: Jupiter is registered as "jupiter". The misspelt "jupyter" used by
//! some other ellipsoid tables is not accepted.

use super::wgs84;
use icao_units::si::Metres;

/// A reference ellipsoid record: an identifier, a display name and the
/// lengths of its axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EllipsoidModel {
    /// The short identifier used to look up the model, e.g. "wgs84".
    id: &'static str,
    /// The name for printing, may contain non-ASCII characters.
    name: &'static str,
    /// The Semimajor axis, the radius at the equator.
    a: Metres,
    /// The Semiminor axis, the radius at the poles.
    b: Metres,
}

impl EllipsoidModel {
    /// Constructor.
    /// * `id` - the model identifier.
    /// * `name` - the display name.
    /// * `a` - the Semimajor axis.
    /// * `b` - the Semiminor axis, 0 < b <= a.
    #[must_use]
    pub const fn new(id: &'static str, name: &'static str, a: Metres, b: Metres) -> Self {
        Self { id, name, a, b }
    }

    /// The model identifier.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        self.id
    }

    /// The display name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The Semimajor axis.
    #[must_use]
    pub const fn a(&self) -> Metres {
        self.a
    }

    /// The Semiminor axis.
    #[must_use]
    pub const fn b(&self) -> Metres {
        self.b
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for EllipsoidModel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("EllipsoidModel", 4)?;
        state.serialize_field("id", self.id)?;
        state.serialize_field("name", self.name)?;
        state.serialize_field("a", &self.a.0)?;
        state.serialize_field("b", &self.b.0)?;
        state.end()
    }
}

/// Shorthand for a registry entry.
const fn model(id: &'static str, name: &'static str, a: f64, b: f64) -> EllipsoidModel {
    EllipsoidModel::new(id, name, Metres(a), Metres(b))
}

/// The registry of supported ellipsoids, Earth ellipsoids first.
pub static MODELS: [EllipsoidModel; 36] = [
    // Earth
    model("maupertuis", "Maupertuis (1738)", 6_397_300.0, 6_363_806.283),
    model("plessis", "Plessis (1817)", 6_376_523.0, 6_355_862.933_3),
    model("everest1830", "Everest (1830)", 6_377_299.365, 6_356_098.359),
    model(
        "everest1830m",
        "Everest 1830 Modified (1967)",
        6_377_304.063,
        6_356_103.039,
    ),
    model(
        "everest1967",
        "Everest 1830 (1967 Definition)",
        6_377_298.556,
        6_356_097.55,
    ),
    model("airy", "Airy (1830)", 6_377_563.396, 6_356_256.909),
    model("bessel", "Bessel (1841)", 6_377_397.155, 6_356_078.963),
    model("clarke1866", "Clarke (1866)", 6_378_206.4, 6_356_583.8),
    model("clarke1878", "Clarke (1878)", 6_378_190.0, 6_356_456.0),
    model("clarke1860", "Clarke (1880)", 6_378_249.145, 6_356_514.87),
    model("helmert", "Helmert (1906)", 6_378_200.0, 6_356_818.17),
    model("hayford", "Hayford (1910)", 6_378_388.0, 6_356_911.946),
    model(
        "international1924",
        "International (1924)",
        6_378_388.0,
        6_356_911.946,
    ),
    model("krassovsky1940", "Krassovsky (1940)", 6_378_245.0, 6_356_863.019),
    model("wgs66", "WGS66 (1966)", 6_378_145.0, 6_356_759.769),
    model(
        "australian",
        "Australian National (1966)",
        6_378_160.0,
        6_356_774.719,
    ),
    model(
        "international1967",
        "New International (1967)",
        6_378_157.5,
        6_356_772.2,
    ),
    model("grs67", "GRS-67 (1967)", 6_378_160.0, 6_356_774.516),
    model("sa1969", "South American (1969)", 6_378_160.0, 6_356_774.719),
    model("wgs72", "WGS-72 (1972)", 6_378_135.0, 6_356_750.520_016_09),
    model("grs80", "GRS-80 (1979)", 6_378_137.0, 6_356_752.314_140_36),
    wgs84::MODEL,
    model("iers1989", "IERS (1989)", 6_378_136.0, 6_356_751.302),
    model("pz90.11", "ПЗ-90 (2011)", 6_378_136.0, 6_356_751.361_8),
    model("iers2003", "IERS (2003)", 6_378_136.6, 6_356_751.9),
    model("gsk2011", "ГСК (2011)", 6_378_136.5, 6_356_751.758),
    // Other bodies
    model("mercury", "Mercury", 2_440_500.0, 2_438_300.0),
    model("venus", "Venus", 6_051_800.0, 6_051_800.0),
    model("moon", "Moon", 1_738_100.0, 1_736_000.0),
    model("mars", "Mars", 3_396_900.0, 3_376_097.805_859_52),
    model("jupiter", "Jupiter", 71_492_000.0, 66_770_054.347_592_2),
    model("io", "Io", 1_829.7, 1_815.8),
    model("saturn", "Saturn", 60_268_000.0, 54_364_301.527_127_1),
    model("uranus", "Uranus", 25_559_000.0, 24_973_000.0),
    model("neptune", "Neptune", 24_764_000.0, 24_341_000.0),
    model("pluto", "Pluto", 1_188_000.0, 1_188_000.0),
];

/// Find a model in the registry.
/// * `id` - the model identifier, matched exactly (case sensitive).
///
/// returns the model record, or `None` if `id` is not registered.
/// # Examples
/// ```
/// use planet_ellipsoids::ellipsoid::models;
///
/// let mars = models::find("mars").unwrap();
/// assert_eq!("Mars", mars.name());
/// assert!(models::find("Mars").is_none());
/// ```
#[must_use]
pub fn find(id: &str) -> Option<&'static EllipsoidModel> {
    MODELS.iter().find(|model| model.id == id)
}

/// The identifiers of the supported models, in registry order.
pub fn identifiers() -> impl Iterator<Item = &'static str> {
    MODELS.iter().map(EllipsoidModel::id)
}
