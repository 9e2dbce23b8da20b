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

// extern crate we're testing, same as any other code would do.
extern crate planet_ellipsoids;

use csv::ReaderBuilder;
use planet_ellipsoids::{ellipsoid::models, Ellipsoid, Metres};
use std::path::Path;

#[test]
fn test_published_axes() {
    // Read tests/data/published_axes.csv and compare with the registry
    let file_path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join("published_axes.csv");
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(file_path)
        .expect("Could not read file: published_axes.csv");

    let mut line_number = 0;
    for result in csv_reader.records() {
        let record = result.unwrap();
        let model = &record[0];
        let name = &record[1];
        let a = Metres(record[2].parse::<f64>().unwrap());
        let b = Metres(record[3].parse::<f64>().unwrap());

        let geoid = Ellipsoid::from_model(model)
            .unwrap_or_else(|e| panic!("line: {:?} error: {}", line_number, e));
        assert_eq!(model, geoid.model());
        assert_eq!(name, geoid.name());
        assert_eq!(a, geoid.semimajor_axis(), "model: {}", model);
        assert_eq!(b, geoid.semiminor_axis(), "model: {}", model);

        line_number += 1;
    }
    assert_eq!(models::MODELS.len(), line_number);
}

#[test]
fn test_all_models_shape_parameters() {
    for model in models::identifiers() {
        let geoid = Ellipsoid::from_model(model).unwrap();
        let a = geoid.semimajor_axis().0;
        let b = geoid.semiminor_axis().0;

        assert!(a >= b, "model: {}", model);
        assert!(b > 0.0, "model: {}", model);
        assert!((0.0..1.0).contains(&geoid.flattening()), "model: {}", model);
        assert!(
            (0.0..1.0).contains(&geoid.eccentricity()),
            "model: {}",
            model
        );
        assert!(
            (0.0..1.0).contains(&geoid.third_flattening()),
            "model: {}",
            model
        );

        // The shape parameters are a pure function of the axes
        let f = (a - b) / a;
        assert_eq!(f, geoid.flattening(), "model: {}", model);
        assert_eq!(
            (a - b) / (a + b),
            geoid.third_flattening(),
            "model: {}",
            model
        );
        assert_eq!(
            libm::sqrt(2.0 * f - f * f),
            geoid.eccentricity(),
            "model: {}",
            model
        );
    }
}

#[test]
fn test_default_model() {
    let default_geoid = Ellipsoid::default();
    assert_eq!(Ellipsoid::from_model("wgs84").unwrap(), default_geoid);
    assert_eq!("wgs84", default_geoid.model());
}

#[test]
fn test_unsupported_model() {
    let error = Ellipsoid::from_model("not-a-real-model").unwrap_err();
    assert_eq!("not-a-real-model", error.model());

    // The error can be propagated as a boxed std error
    let result: Result<Ellipsoid, Box<dyn std::error::Error>> =
        "hoth".parse::<Ellipsoid>().map_err(Into::into);
    assert!(result.unwrap_err().to_string().contains("hoth"));
}

#[test]
fn test_earth_ellipsoids_are_close_to_wgs84() {
    let wgs84 = Ellipsoid::wgs84();
    for model in models::identifiers().take_while(|id| *id != "mercury") {
        let geoid = Ellipsoid::from_model(model).unwrap();
        assert!(
            (geoid.semimajor_axis().0 - wgs84.semimajor_axis().0).abs() < 20_000.0,
            "model: {}",
            model
        );
        assert!(
            (geoid.flattening() - wgs84.flattening()).abs() < 2.0e-3,
            "model: {}",
            model
        );
    }
}

#[cfg(feature = "serde")]
#[test]
fn test_serialize_ellipsoid() {
    let geoid = Ellipsoid::from_model("gsk2011").unwrap();
    let value = serde_json::to_value(&geoid).unwrap();

    assert_eq!("gsk2011", value["model"]);
    assert_eq!("ГСК (2011)", value["name"]);
    assert_eq!(6378136.5, value["semimajor_axis"]);
    assert_eq!(6356751.758, value["semiminor_axis"]);
    assert_eq!(geoid.flattening(), value["flattening"]);
    assert_eq!(geoid.third_flattening(), value["third_flattening"]);
    assert_eq!(geoid.eccentricity(), value["eccentricity"]);

    let model = models::find("io").unwrap();
    let json = serde_json::to_string(model).unwrap();
    assert_eq!(r#"{"id":"io","name":"Io","a":1829.7,"b":1815.8}"#, json);
}
