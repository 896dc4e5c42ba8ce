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

//! Pure string rendering of the application's help and version text. This
//! module only reads the accessors the core exposes (metadata, declaration
//! order, required/optional partition, per-option docs and value synopses);
//! it takes no part in parsing.

use crate::command::CommandLine;

/// Width of the name column in the FLAGS and OPTIONS sections.
const NAME_COLUMN_WIDTH: usize = 35;

/// Formats one aligned "name - documentation" entry line.
fn entry_line(alternate: Option<&str>, rest: &str, doc: &str) -> String {
    let label = match alternate {
        Some(alternate) => format!("{}, {}", alternate, rest),
        None => rest.to_owned(),
    };
    format!("\t{:<width$}{}\n", label, doc, width = NAME_COLUMN_WIDTH)
}

/// Renders the full help text: DESCRIPTION, SYNOPSIS (required options and
/// flags, in declaration order), FLAGS, OPTIONS, LICENSE, AUTHOR, and the
/// web link, mirroring a conventional man-page layout.
pub(crate) fn render_help(cli: &CommandLine) -> String {
    let mut help = String::new();

    if !cli.description().is_empty() {
        help.push_str(&format!("DESCRIPTION\n\t{}\n\n", cli.description()));
    }

    help.push_str(&format!("SYNOPSIS\n\t{}", cli.name()));
    for opt in cli.registry().options().filter(|o| o.required_marks() > 0) {
        let name = opt.alternate_name().unwrap_or_else(|| opt.primary_name());
        help.push_str(&format!(" {} {}", name, opt.value_info()));
    }
    for flag in cli.registry().flags().filter(|f| f.required_marks() > 0) {
        let name = flag.alternate_name().unwrap_or_else(|| flag.primary_name());
        help.push_str(&format!(" {}", name));
    }
    help.push_str(" [...]\n");

    help.push_str("\nFLAGS\n");
    if let Some(trigger) = cli.help_trigger() {
        help.push_str(&entry_line(
            trigger.alternate_name(),
            trigger.primary_name(),
            trigger.doc_text(),
        ));
    }
    if let Some(trigger) = cli.version_trigger() {
        help.push_str(&entry_line(
            trigger.alternate_name(),
            trigger.primary_name(),
            trigger.doc_text(),
        ));
    }
    for flag in cli.registry().flags() {
        help.push_str(&entry_line(
            flag.alternate_name(),
            flag.primary_name(),
            flag.doc(),
        ));
    }

    help.push_str("\nOPTIONS\n");
    for opt in cli.registry().options() {
        let rest = format!("{} {}", opt.primary_name(), opt.value_info());
        help.push_str(&entry_line(opt.alternate_name(), &rest, opt.doc()));
    }

    if !cli.license().is_empty() {
        help.push_str(&format!("\nLICENSE\n\t{}\n", cli.license()));
    }
    if !cli.author().is_empty() {
        help.push_str(&format!("\nAUTHOR\n\t{}\n", cli.author()));
    }
    if !cli.web_link().is_empty() {
        help.push_str(&format!("\n{}\n", cli.web_link()));
    }

    help
}

/// Renders the version notice: application name and version on one line,
/// then the author.
pub(crate) fn render_version(cli: &CommandLine) -> String {
    format!("{} {}\n{}\n", cli.name(), cli.version(), cli.author())
}
