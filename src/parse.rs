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

use crate::error::Error;
use crate::option::Flag;
use crate::registry::Registry;
use std::collections::VecDeque;

/// Outcome is the terminal state of one parse session.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Outcome {
    /// The argument list was exactly the help trigger; nothing else was
    /// touched.
    HelpRequested,
    /// The argument list was exactly the version trigger.
    VersionRequested,
    /// Every token was consumed and no diagnostic was recorded.
    Completed,
    /// At least one diagnostic was recorded (or zero arguments were supplied
    /// without the allow-no-args toggle).
    Failed,
}

/// Drains the token queue against the registry, dispatching each recognized
/// name to its bound option, accumulating diagnostics, and producing the
/// session's final outcome.
///
/// The queue must already exclude the program name. `diagnostics` must be
/// empty on entry; every per-token failure is converted into an appended
/// string, and no error value escapes this function.
pub(crate) fn consume(
    registry: &Registry,
    help_trigger: Option<&Flag>,
    version_trigger: Option<&Flag>,
    allow_no_args: bool,
    mut tokens: VecDeque<String>,
    diagnostics: &mut Vec<String>,
) -> Outcome {
    if tokens.is_empty() {
        // The empty invocation is its own verdict: allowed or not, the
        // required-count check is skipped entirely.
        return match allow_no_args {
            true => Outcome::Completed,
            false => Outcome::Failed,
        };
    }

    // The help and version triggers are recognized only as the sole token of
    // a single-token invocation.
    if tokens.len() == 1 {
        if let Some(help) = help_trigger {
            if help.matches(&tokens[0]) {
                help.set_present();
                return Outcome::HelpRequested;
            }
        }
        if let Some(version) = version_trigger {
            if version.matches(&tokens[0]) {
                version.set_present();
                return Outcome::VersionRequested;
            }
        }
    }

    let mut remaining_required = registry.total_required();

    while let Some(token) = tokens.pop_front() {
        let record = match registry.resolve(&token) {
            Some(record) => record,
            None => {
                // Unknown tokens cost one diagnostic and one queue slot;
                // scanning continues so later errors still surface.
                diagnostics.push(Error::UnknownArgument(token).to_string());
                continue;
            }
        };

        // Decrement per occurrence, not per option: matching the same
        // required option twice decrements twice and can drive the tally
        // negative. Deliberate; see DESIGN.md.
        if record.required_marks() > 0 {
            remaining_required -= 1;
        }

        if record.is_flag() {
            record.assign("").ok();
            continue;
        }

        let value_token = match tokens.pop_front() {
            Some(value_token) => value_token,
            None => {
                // A value option as the last token ends the session at once;
                // only the diagnostics accumulated so far are reported.
                diagnostics.push(Error::MissingValue(token).to_string());
                return Outcome::Failed;
            }
        };

        if let Err(e) = record.assign(&value_token) {
            let diagnostic = match e {
                Error::Conversion(_) | Error::Rejected => Error::ValueNotAllowed {
                    name: token,
                    token: value_token,
                    info: record.detailed_value_info(),
                    doc: record.doc().to_owned(),
                },
                other => other,
            };
            diagnostics.push(diagnostic.to_string());
        }
    }

    if remaining_required > 0 {
        diagnostics.push(Error::MissingRequired(remaining_required).to_string());
    }

    match diagnostics.is_empty() {
        true => Outcome::Completed,
        false => Outcome::Failed,
    }
}
