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

//! The error module contains the error returned for an unknown model.

use alloc::string::{String, ToString};

/// The requested model identifier is not in the ellipsoid registry.
///
/// Either use one of the supported identifiers, see
/// [`identifiers`](crate::ellipsoid::models::identifiers), or add the
/// ellipsoid to the registry.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("ellipsoid model not supported: {0:?}")]
pub struct UnsupportedModelError(String);

impl UnsupportedModelError {
    /// Constructor.
    /// * `model` - the unsupported model identifier.
    #[must_use]
    pub fn new(model: &str) -> Self {
        Self(model.to_string())
    }

    /// The unsupported model identifier.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.0
    }
}
