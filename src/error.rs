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

use thiserror::Error;

/// Error represents the various errors which can come up while declaring
/// command-line options or parsing an argument vector against them.
///
/// The `Display` rendering of each parse-time variant is exactly the
/// diagnostic text reported to the caller via `CommandLine::errors`.
#[derive(Debug, Error)]
pub enum Error {
    /// A token could not be interpreted as the option's declared value type
    /// (non-numeric text for a numeric option, an empty token, overflow).
    #[error("Cannot interpret '{0}' as the expected value type")]
    Conversion(String),
    /// A value option was the last token on the command line, so it has no
    /// value token to consume.
    #[error("[{0}] Missing option value")]
    MissingValue(String),
    /// One or more options declared as required were never matched. The count
    /// is the final remaining tally; because required matches are counted per
    /// occurrence, a repeated required option can drive it negative.
    #[error("Missing required argument(s) {0}")]
    MissingRequired(i64),
    /// A converted value failed the allowed-value set or the custom validator.
    #[error("Value rejected by validation rules")]
    Rejected,
    /// A token matched no registered option or flag name.
    #[error("[{0}] Unknown argument")]
    UnknownArgument(String),
    /// The full per-token diagnostic for a value that converted but was not
    /// accepted (or could not be converted at all), naming the offending
    /// token and the option's rendered synopsis and documentation.
    #[error("[{name}] Value {token} is not allowed \n\t{{ {info}  {doc} }}")]
    ValueNotAllowed {
        /// The option name as it appeared on the command line.
        name: String,
        /// The offending value token.
        token: String,
        /// The option's detailed value synopsis (allowed values or value
        /// name, plus the validator description if one was declared).
        info: String,
        /// The option's documentation string.
        doc: String,
    },
}

/// A Result type which uses argbind's internal Error type.
pub type Result<T> = std::result::Result<T, Error>;
