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

use crate::help;
use crate::option::{Flag, Opt};
use crate::parse::{self, Outcome};
use crate::registry::Registry;
use crate::value::Value;
use std::collections::VecDeque;

/// CommandLine holds everything one program declares about its command-line
/// surface: application metadata, the registry of options and flags, the
/// help and version triggers, and the result of the most recent `parse` call.
///
/// Typical use: declare options bound to `Binding` values, call `parse` once
/// with the process argument list, then either read the bindings (success) or
/// report `errors()` (failure).
///
/// Parsing is synchronous and single-threaded; a CommandLine must not be
/// shared across threads during `parse`, because it writes through the shared
/// bindings without synchronization.
pub struct CommandLine {
    app_name: String,
    app_description: String,
    version: String,
    author: String,
    license: String,
    web_link: String,

    registry: Registry,
    help_trigger: Option<Flag>,
    version_trigger: Option<Flag>,
    allow_no_args: bool,

    diagnostics: Vec<String>,
    no_args: bool,
    outcome: Outcome,
}

impl CommandLine {
    /// Constructs a CommandLine for the application with the given name.
    pub fn new(app_name: &str) -> Self {
        CommandLine {
            app_name: app_name.to_owned(),
            app_description: String::new(),
            version: String::new(),
            author: String::new(),
            license: String::new(),
            web_link: String::new(),
            registry: Registry::new(),
            help_trigger: None,
            version_trigger: None,
            allow_no_args: false,
            diagnostics: Vec::new(),
            no_args: false,
            outcome: Outcome::Completed,
        }
    }

    /// Constructs a CommandLine with the full set of application information.
    pub fn with_info(app_name: &str, version: &str, author: &str, license: &str) -> Self {
        let mut cli = CommandLine::new(app_name);
        cli.version = version.to_owned();
        cli.author = author.to_owned();
        cli.license = license.to_owned();
        cli
    }

    /// Sets the application name.
    pub fn set_name(&mut self, name: &str) -> &mut Self {
        self.app_name = name.to_owned();
        self
    }

    /// Sets the application description.
    pub fn set_description(&mut self, description: &str) -> &mut Self {
        self.app_description = description.to_owned();
        self
    }

    /// Sets the version string.
    pub fn set_version(&mut self, version: &str) -> &mut Self {
        self.version = version.to_owned();
        self
    }

    /// Sets the author string.
    pub fn set_author(&mut self, author: &str) -> &mut Self {
        self.author = author.to_owned();
        self
    }

    /// Sets the license notice.
    pub fn set_license(&mut self, license: &str) -> &mut Self {
        self.license = license.to_owned();
        self
    }

    /// Sets the web link shown at the bottom of the help text.
    pub fn set_web_link(&mut self, link: &str) -> &mut Self {
        self.web_link = link.to_owned();
        self
    }

    /// The application name.
    pub fn name(&self) -> &str {
        &self.app_name
    }

    /// The application description.
    pub fn description(&self) -> &str {
        &self.app_description
    }

    /// The version string.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The author string.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// The license notice.
    pub fn license(&self) -> &str {
        &self.license
    }

    /// The web link.
    pub fn web_link(&self) -> &str {
        &self.web_link
    }

    /// Registers a declared value option. Both of its names (if it has an
    /// alternate) resolve to the one record; re-declaring an existing literal
    /// name silently takes that name over.
    pub fn add_option<T: Value>(&mut self, opt: Opt<T>) -> &mut Self {
        self.registry.insert(Box::new(opt));
        self
    }

    /// Registers a declared boolean flag.
    pub fn add_flag(&mut self, flag: Flag) -> &mut Self {
        self.registry.insert(Box::new(flag));
        self
    }

    /// Designates the help trigger. It lives outside the general name map,
    /// never counts toward the required tally, and is recognized only as the
    /// sole token of a single-token invocation.
    pub fn help_flag(&mut self, flag: Flag) -> &mut Self {
        self.help_trigger = Some(match flag.doc_text().is_empty() {
            true => flag.doc("displays help"),
            false => flag,
        });
        self
    }

    /// Designates the version trigger, with the same rules as `help_flag`.
    pub fn version_flag(&mut self, flag: Flag) -> &mut Self {
        self.version_trigger = Some(match flag.doc_text().is_empty() {
            true => flag.doc("displays version information"),
            false => flag,
        });
        self
    }

    /// Allows invoking the program with zero arguments. Without this, an
    /// empty argument list fails the parse outright.
    pub fn allow_no_args(&mut self) -> &mut Self {
        self.allow_no_args = true;
        self
    }

    /// Parses the given process argument list, which must include the program
    /// name as its first element (it is skipped). Returns true on success;
    /// on failure the accumulated diagnostics are available from `errors`.
    ///
    /// Each call is a fresh session: diagnostics are reset, and bindings are
    /// overwritten by whatever the new argument list assigns.
    pub fn parse<I, S>(&mut self, argv: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: VecDeque<String> = argv.into_iter().skip(1).map(|t| t.into()).collect();

        self.diagnostics.clear();
        self.no_args = tokens.is_empty();
        self.outcome = parse::consume(
            &self.registry,
            self.help_trigger.as_ref(),
            self.version_trigger.as_ref(),
            self.allow_no_args,
            tokens,
            &mut self.diagnostics,
        );

        self.outcome != Outcome::Failed
    }

    /// The ordered diagnostics recorded by the most recent `parse` call.
    pub fn errors(&self) -> &[String] {
        &self.diagnostics
    }

    /// Whether the most recent `parse` call saw zero tokens.
    pub fn no_args(&self) -> bool {
        self.no_args
    }

    /// Whether the most recent `parse` call was the help trigger.
    pub fn help_requested(&self) -> bool {
        self.outcome == Outcome::HelpRequested
    }

    /// Whether the most recent `parse` call was the version trigger.
    pub fn version_requested(&self) -> bool {
        self.outcome == Outcome::VersionRequested
    }

    /// Renders the application's help text.
    pub fn help(&self) -> String {
        help::render_help(self)
    }

    /// Renders the application's version notice.
    pub fn version_info(&self) -> String {
        help::render_version(self)
    }

    pub(crate) fn registry(&self) -> &Registry {
        &self.registry
    }

    pub(crate) fn help_trigger(&self) -> Option<&Flag> {
        self.help_trigger.as_ref()
    }

    pub(crate) fn version_trigger(&self) -> Option<&Flag> {
        self.version_trigger.as_ref()
    }
}
