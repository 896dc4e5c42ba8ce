// Copyright 2015 Axel Rasmussen
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::*;
use std::path::PathBuf;

mod sealed {
    use std::path::PathBuf;

    /// Seals the `Value` trait to the closed family of supported types.
    pub trait Sealed {}

    impl Sealed for i8 {}
    impl Sealed for i16 {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for isize {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
    impl Sealed for usize {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
    impl Sealed for char {}
    impl Sealed for String {}
    impl Sealed for PathBuf {}
}

/// Value is the family of types an option can be declared over: the signed
/// and unsigned integer types, the floating-point types, a single character,
/// a text string, and a filesystem path. The trait is sealed; boolean flags
/// are a separate declaration kind (`Flag`) and take no value token at all.
///
/// Each implementation defines how a raw command-line token is converted into
/// a typed value, and whether assignment writes the converted value into the
/// binding before or after validation runs.
pub trait Value: sealed::Sealed + Clone + PartialEq + PartialOrd + 'static {
    /// Converts a raw token into a typed value, or reports a conversion
    /// error. Conversion failures never touch the option's binding.
    fn from_token(token: &str) -> Result<Self>;

    /// Renders the value for display in an option's value synopsis.
    fn render(&self) -> String;

    /// Whether `assign` commits the converted value to the binding before
    /// checking the allowed-value set and validator. Text-like types write
    /// through first and are not rolled back on rejection; every other type
    /// validates first and leaves the binding untouched on rejection.
    fn writes_before_validation() -> bool {
        false
    }
}

macro_rules! numeric_value_impl {
    ($($t:ty),*) => {$(
        impl Value for $t {
            fn from_token(token: &str) -> Result<Self> {
                // str::parse is strict: the whole token must be a valid
                // number, and out-of-range values are errors rather than
                // saturating.
                token
                    .parse::<$t>()
                    .map_err(|_| Error::Conversion(token.to_owned()))
            }

            fn render(&self) -> String {
                self.to_string()
            }
        }
    )*};
}

numeric_value_impl!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! float_value_impl {
    ($($t:ty),*) => {$(
        impl Value for $t {
            fn from_token(token: &str) -> Result<Self> {
                // Float parsing maps out-of-range literals to infinity
                // instead of failing, so overflow has to be caught by hand.
                // Literal "inf" and "nan" tokens are rejected the same way;
                // only finite values can be bound.
                match token.parse::<$t>() {
                    Ok(v) if v.is_finite() => Ok(v),
                    _ => Err(Error::Conversion(token.to_owned())),
                }
            }

            fn render(&self) -> String {
                self.to_string()
            }
        }
    )*};
}

float_value_impl!(f32, f64);

impl Value for char {
    /// Takes the first character of the token; any remainder is silently
    /// discarded. An empty token is a conversion error.
    fn from_token(token: &str) -> Result<Self> {
        token
            .chars()
            .next()
            .ok_or_else(|| Error::Conversion(token.to_owned()))
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl Value for String {
    fn from_token(token: &str) -> Result<Self> {
        Ok(token.to_owned())
    }

    fn render(&self) -> String {
        self.clone()
    }

    fn writes_before_validation() -> bool {
        true
    }
}

impl Value for PathBuf {
    fn from_token(token: &str) -> Result<Self> {
        Ok(PathBuf::from(token))
    }

    fn render(&self) -> String {
        self.display().to_string()
    }

    fn writes_before_validation() -> bool {
        true
    }
}
