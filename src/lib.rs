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

#![deny(
    anonymous_parameters,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces
)]
#![warn(bare_trait_objects, unreachable_pub, unused_qualifications)]

//! argbind is a library for declaring command-line options bound to
//! caller-owned variables, and for parsing argument vectors against those
//! declarations.
//!
//! Callers register typed options and boolean flags (with default values,
//! required-ness, allowed-value sets, and custom validators), each writing
//! through a shared `Binding`. A single `parse` call then drains the process
//! argument list, converting and validating every value, and either reports
//! success with all bindings populated or accumulates an ordered list of
//! human-readable diagnostics.

/// binding defines the shared write targets parsed values are stored into.
pub mod binding;
/// command defines CommandLine, the top-level declaration and parsing
/// surface.
pub mod command;
/// error defines the error types used for conversion, validation, and
/// parse-time diagnostics.
pub mod error;
mod help;
/// main_impl provides a convenience entry point gluing parsing, help and
/// version rendering, and process exit codes together.
pub mod main_impl;
/// option defines the typed option and flag declaration records.
pub mod option;
mod parse;
/// predicates provides stock validator predicates for numeric options.
pub mod predicates;
mod registry;
/// value defines the closed family of types an option can be declared over.
pub mod value;

// Re-export most commonly used symbols, to allow using this library with just
// one "use".

pub use crate::binding::Binding;
pub use crate::command::CommandLine;
pub use crate::error::{Error, Result};
pub use crate::main_impl::parse_or_exit;
pub use crate::option::{Flag, Opt};
pub use crate::value::Value;

#[cfg(test)]
mod tests;
