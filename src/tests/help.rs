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
use crate::command::CommandLine;
use crate::option::{Flag, Opt};

fn build_cli() -> CommandLine {
    let input = Binding::new(String::new());
    let count = Binding::new(0);
    let verbose = Binding::new(false);
    let help = Binding::new(false);
    let version = Binding::new(false);

    let mut cli = CommandLine::with_info("app", "1.2.0", "Jane Doe", "Apache-2.0");
    cli.set_description("Processes input files.");
    cli.set_web_link("https://example.invalid/app");
    cli.add_option(
        Opt::with_alternate("--input", "-i")
            .bind("file", &input)
            .required()
            .doc("the file to process"),
    );
    cli.add_option(
        Opt::with_alternate("--count", "-c")
            .bind("count", &count)
            .allow(vec![3, 1, 2])
            .doc("how many times to run"),
    );
    cli.add_flag(
        Flag::with_alternate("--verbose", "-v")
            .bind(&verbose)
            .doc("print progress"),
    );
    cli.help_flag(Flag::with_alternate("--help", "-h").bind(&help));
    cli.version_flag(Flag::new("--version").bind(&version));
    cli
}

#[test]
fn test_help_sections_present() {
    let cli = build_cli();
    let help = cli.help();

    assert!(help.contains("DESCRIPTION\n\tProcesses input files.\n"));
    assert!(help.contains("SYNOPSIS\n\tapp -i <file> [...]\n"));
    assert!(help.contains("\nFLAGS\n"));
    assert!(help.contains("\nOPTIONS\n"));
    assert!(help.contains("\nLICENSE\n\tApache-2.0\n"));
    assert!(help.contains("\nAUTHOR\n\tJane Doe\n"));
    assert!(help.contains("\nhttps://example.invalid/app\n"));
}

#[test]
fn test_help_lists_triggers_and_flags() {
    let cli = build_cli();
    let help = cli.help();

    assert!(help.contains("-h, --help"));
    assert!(help.contains("displays help"));
    assert!(help.contains("--version"));
    assert!(help.contains("displays version information"));
    assert!(help.contains("-v, --verbose"));
    assert!(help.contains("print progress"));
}

#[test]
fn test_help_lists_options_with_value_info() {
    let cli = build_cli();
    let help = cli.help();

    assert!(help.contains("-i, --input <file>"));
    assert!(help.contains("the file to process"));
    // Allowed-value sets render ascending-sorted in parenthesis style.
    assert!(help.contains("-c, --count (1 2 3)"));
    assert!(help.contains("how many times to run"));
}

#[test]
fn test_synopsis_only_lists_required_declarations() {
    let cli = build_cli();
    let help = cli.help();

    let synopsis_start = help.find("SYNOPSIS").unwrap();
    let synopsis_end = help[synopsis_start..].find("[...]").unwrap() + synopsis_start;
    let synopsis = &help[synopsis_start..synopsis_end];

    assert!(synopsis.contains("-i"));
    assert!(!synopsis.contains("--count"));
    assert!(!synopsis.contains("--verbose"));
}

#[test]
fn test_version_notice_format() {
    let cli = build_cli();
    assert_eq!("app 1.2.0\nJane Doe\n", cli.version_info());
}

#[test]
fn test_metadata_accessors() {
    let mut cli = CommandLine::new("tool");
    cli.set_version("0.1.0")
        .set_author("A. Person")
        .set_license("MIT")
        .set_description("does things")
        .set_web_link("https://example.invalid");

    assert_eq!("tool", cli.name());
    assert_eq!("0.1.0", cli.version());
    assert_eq!("A. Person", cli.author());
    assert_eq!("MIT", cli.license());
    assert_eq!("does things", cli.description());
    assert_eq!("https://example.invalid", cli.web_link());

    cli.set_name("tool2");
    assert_eq!("tool2", cli.name());
}
