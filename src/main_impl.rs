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

use crate::command::CommandLine;
use std::env;
use std::process;

/// The integer which is returned from main() if the program exits
/// successfully.
pub(crate) const EXIT_SUCCESS: i32 = 0;
/// The integer which is returned from main() if the program exits with any
/// error.
pub(crate) const EXIT_FAILURE: i32 = 1;

/// Parses this process's argument list against the given CommandLine, and
/// handles every outcome which should end the program:
///
/// - help requested: the rendered help text is printed to standard output and
///   the process exits successfully;
/// - version requested: likewise, with the version notice;
/// - parse failure: every accumulated diagnostic is printed to standard error
///   and the process exits with a failure code.
///
/// On an ordinary successful parse this returns normally, and the program can
/// proceed to read its bindings.
pub fn parse_or_exit(cli: &mut CommandLine) {
    let ok = cli.parse(env::args());

    if cli.help_requested() {
        print!("{}", cli.help());
        process::exit(EXIT_SUCCESS);
    }
    if cli.version_requested() {
        print!("{}", cli.version_info());
        process::exit(EXIT_SUCCESS);
    }

    if !ok {
        for diagnostic in cli.errors() {
            eprintln!("{}", diagnostic);
        }
        process::exit(EXIT_FAILURE);
    }
}
