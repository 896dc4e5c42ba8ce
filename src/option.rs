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

use crate::binding::Binding;
use crate::error::*;
use crate::value::Value;
use std::cmp::Ordering;

/// The default logical value name, used in `<...>`-style synopsis rendering
/// when the caller does not provide one.
const DEFAULT_VALUE_NAME: &str = "value";

/// A validator is a caller-provided predicate together with a human-readable
/// description of the requirement it enforces (e.g. "[0; 1]", "lower case").
struct Validator<T> {
    description: String,
    predicate: Box<dyn Fn(&T) -> bool>,
}

/// Opt describes one declared value option: its primary and (optional)
/// alternate name, the binding its parsed value is written to, its
/// documentation, its required-ness, and the rules a candidate value must
/// satisfy (allowed-value set and/or validator predicate).
///
/// Opt values are built by-value with chained builder methods, then handed to
/// `CommandLine::add_option`, which type-erases them into the registry.
pub struct Opt<T: Value> {
    primary_name: String,
    alternate_name: Option<String>,
    value_name: String,
    doc: String,
    required_marks: u32,
    allowed: Vec<T>,
    validator: Option<Validator<T>>,
    binding: Option<Binding<T>>,
}

impl<T: Value> Opt<T> {
    /// Constructs an option with a single name.
    pub fn new(name: &str) -> Self {
        Opt {
            primary_name: name.to_owned(),
            alternate_name: None,
            value_name: DEFAULT_VALUE_NAME.to_owned(),
            doc: String::new(),
            required_marks: 0,
            allowed: Vec::new(),
            validator: None,
            binding: None,
        }
    }

    /// Constructs an option with a primary name and an alternate (usually
    /// short) name. Both names resolve to this one option.
    pub fn with_alternate(name: &str, alternate: &str) -> Self {
        let mut opt = Opt::new(name);
        opt.alternate_name = Some(alternate.to_owned());
        opt
    }

    /// Attaches the binding parsed values are written into, and sets the
    /// logical value name used in synopsis rendering (e.g. "file",
    /// "charset"). The binding is reset to the type's default value at
    /// declaration time.
    pub fn bind(self, value_name: &str, binding: &Binding<T>) -> Self
    where
        T: Default,
    {
        self.bind_with_default(value_name, binding, T::default())
    }

    /// Like `bind`, but establishes the given default value instead of the
    /// type's own default. The default is written at declaration time, so an
    /// option never matched during `parse` leaves it in place.
    pub fn bind_with_default(mut self, value_name: &str, binding: &Binding<T>, default: T) -> Self {
        binding.set(default);
        self.value_name = value_name.to_owned();
        self.binding = Some(binding.clone());
        self
    }

    /// Marks the option as required. Each call adds one mark to the
    /// registry's required tally at declaration time; calling this twice
    /// inflates the tally by two. Deliberate; see DESIGN.md.
    pub fn required(mut self) -> Self {
        self.required_marks += 1;
        self
    }

    /// Restricts the option to the given set of allowed values. An empty set
    /// (the initial state) accepts any value. Declaring allowed values does
    /// not retroactively validate a value already bound; only future
    /// assignments are checked.
    pub fn allow<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<T>,
    {
        self.allowed.extend(values.into_iter().map(|v| v.into()));
        self
    }

    /// Sets a custom validator predicate, along with a description of the
    /// requirement it enforces. A candidate value must satisfy both the
    /// predicate and the allowed-value set (if non-empty) to be accepted.
    pub fn validate<F>(mut self, description: &str, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + 'static,
    {
        self.validator = Some(Validator {
            description: description.to_owned(),
            predicate: Box::new(predicate),
        });
        self
    }

    /// Sets the option's documentation text.
    pub fn doc(mut self, doc: &str) -> Self {
        self.doc = doc.to_owned();
        self
    }

    /// Checks a converted candidate against the allowed-value set and the
    /// validator predicate.
    fn accepts(&self, candidate: &T) -> bool {
        let in_allowed_set = self.allowed.is_empty() || self.allowed.contains(candidate);
        match self.validator {
            None => in_allowed_set,
            Some(ref v) => (v.predicate)(candidate) && in_allowed_set,
        }
    }
}

/// Flag describes one declared boolean flag. Flags take no value token; their
/// mere presence on the command line sets the binding to true. They carry no
/// allowed-value set and no validator, and their default is always false.
pub struct Flag {
    primary_name: String,
    alternate_name: Option<String>,
    doc: String,
    required_marks: u32,
    binding: Option<Binding<bool>>,
}

impl Flag {
    /// Constructs a flag with a single name.
    pub fn new(name: &str) -> Self {
        Flag {
            primary_name: name.to_owned(),
            alternate_name: None,
            doc: String::new(),
            required_marks: 0,
            binding: None,
        }
    }

    /// Constructs a flag with a primary name and an alternate name.
    pub fn with_alternate(name: &str, alternate: &str) -> Self {
        let mut flag = Flag::new(name);
        flag.alternate_name = Some(alternate.to_owned());
        flag
    }

    /// Attaches the binding the flag state is written into, resetting it to
    /// false at declaration time.
    pub fn bind(mut self, binding: &Binding<bool>) -> Self {
        binding.set(false);
        self.binding = Some(binding.clone());
        self
    }

    /// Marks the flag as required, with the same per-call tally semantics as
    /// `Opt::required`.
    pub fn required(mut self) -> Self {
        self.required_marks += 1;
        self
    }

    /// Sets the flag's documentation text.
    pub fn doc(mut self, doc: &str) -> Self {
        self.doc = doc.to_owned();
        self
    }

    /// Returns true if the given token is one of this flag's names. Used for
    /// resolving the help and version triggers, which live outside the
    /// general name map.
    pub(crate) fn matches(&self, token: &str) -> bool {
        self.primary_name == token || self.alternate_name.as_deref() == Some(token)
    }

    pub(crate) fn primary_name(&self) -> &str {
        &self.primary_name
    }

    pub(crate) fn alternate_name(&self) -> Option<&str> {
        self.alternate_name.as_deref()
    }

    pub(crate) fn doc_text(&self) -> &str {
        &self.doc
    }

    /// Sets the flag's binding to true, if one is attached.
    pub(crate) fn set_present(&self) {
        if let Some(ref b) = self.binding {
            b.set(true);
        }
    }
}

/// BoundOption is the type-erased view of one declared option or flag, as the
/// registry and the parser see it. It reduces every concrete value type to
/// one uniform interface: name resolution metadata, required-ness,
/// documentation, synopsis rendering, and `assign`.
pub(crate) trait BoundOption {
    /// The option's primary name.
    fn primary_name(&self) -> &str;
    /// The option's alternate name, if it has one.
    fn alternate_name(&self) -> Option<&str>;
    /// The option's documentation text.
    fn doc(&self) -> &str;
    /// How many times `required()` was called at declaration time.
    fn required_marks(&self) -> u32;
    /// Whether matching this option consumes no value token.
    fn is_flag(&self) -> bool;
    /// Renders the value synopsis: the sorted allowed-value set in
    /// parenthesis style, or the logical value name in angle-bracket style,
    /// or nothing at all for flags.
    fn value_info(&self) -> String;
    /// `value_info` extended with the validator description, if any; used in
    /// "value is not allowed" diagnostics.
    fn detailed_value_info(&self) -> String;
    /// Converts the token, validates the result, and writes it to the
    /// binding. See the per-kind ordering contract on `Value`.
    fn assign(&self, token: &str) -> Result<()>;
}

impl<T: Value> BoundOption for Opt<T> {
    fn primary_name(&self) -> &str {
        &self.primary_name
    }

    fn alternate_name(&self) -> Option<&str> {
        self.alternate_name.as_deref()
    }

    fn doc(&self) -> &str {
        &self.doc
    }

    fn required_marks(&self) -> u32 {
        self.required_marks
    }

    fn is_flag(&self) -> bool {
        false
    }

    fn value_info(&self) -> String {
        if self.allowed.is_empty() {
            return format!("<{}>", self.value_name);
        }

        // Unordered for validation, but rendered ascending.
        let mut sorted = self.allowed.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        let rendered: Vec<String> = sorted.iter().map(|v| v.render()).collect();
        format!("({})", rendered.join(" "))
    }

    fn detailed_value_info(&self) -> String {
        match self.validator {
            Some(ref v) if !v.description.is_empty() => {
                format!("{} {}", self.value_info(), v.description)
            }
            _ => self.value_info(),
        }
    }

    fn assign(&self, token: &str) -> Result<()> {
        let candidate = T::from_token(token)?;

        if T::writes_before_validation() {
            // Text-like types commit the attempted value and check it
            // afterwards; a rejected value stays written.
            if let Some(ref b) = self.binding {
                b.set(candidate.clone());
            }
            if !self.accepts(&candidate) {
                return Err(Error::Rejected);
            }
        } else {
            if !self.accepts(&candidate) {
                return Err(Error::Rejected);
            }
            if let Some(ref b) = self.binding {
                b.set(candidate);
            }
        }

        Ok(())
    }
}

impl BoundOption for Flag {
    fn primary_name(&self) -> &str {
        &self.primary_name
    }

    fn alternate_name(&self) -> Option<&str> {
        self.alternate_name.as_deref()
    }

    fn doc(&self) -> &str {
        &self.doc
    }

    fn required_marks(&self) -> u32 {
        self.required_marks
    }

    fn is_flag(&self) -> bool {
        true
    }

    fn value_info(&self) -> String {
        String::new()
    }

    fn detailed_value_info(&self) -> String {
        String::new()
    }

    fn assign(&self, _token: &str) -> Result<()> {
        self.set_present();
        Ok(())
    }
}
