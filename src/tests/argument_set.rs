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

use crate::argument::Argument;
use crate::argument_set::*;
use crate::error::Error;
use crate::io::{SharedBuffer, Sink};
use crate::termination::TerminationPolicy;
use crate::testing::fn_instrumentation::{recording_exit_handler, FnInstrumentation};
use crate::testing::logging::set_test_logger;
use std::sync::Arc;

fn build_set_for_test(tokens: &[&str]) -> ArgumentSet {
    set_test_logger(None);
    let argv: Vec<&str> = Some("program").into_iter().chain(tokens.iter().cloned()).collect();
    ArgumentSet::from_argv(argv.len(), &argv)
        .set_help_sink(Sink::Noop)
        .set_error_sink(Sink::Noop)
}

fn assert_missing_required_value(result: Result<ArgumentSet, Error>, expected_name: &str) {
    match result {
        Err(Error::MissingRequiredValue { name }) => assert_eq!(expected_name, name),
        Err(e) => panic!("Expected missing required value error, got: {}", e),
        Ok(_) => panic!("Expected missing required value error, got success"),
    }
}

#[test]
fn test_from_argv_strips_program_name() {
    let set = ArgumentSet::from_argv(3, &["program", "--foo", "bar"]);
    assert_eq!(2, set.argument_count());
    assert_eq!(&["--foo".to_owned(), "bar".to_owned()], set.raw_tokens());
    assert_eq!("program", set.get_name());
    assert_eq!(DEFAULT_VERSION, set.get_version());
    assert_eq!(TerminationPolicy::ProcessExit, set.get_termination_policy());
}

#[test]
fn test_from_argv_zero_count() {
    let set = ArgumentSet::from_argv(0, &["program", "--foo"]);
    assert_eq!(0, set.argument_count());
    assert!(set.raw_tokens().is_empty());
    assert_eq!("", set.get_name());

    let empty: [&str; 0] = [];
    let set = ArgumentSet::from_argv(0, &empty);
    assert_eq!(0, set.argument_count());
}

#[test]
fn test_from_argv_respects_count() {
    let set = ArgumentSet::from_argv(2, &["program", "--foo", "bar"]);
    assert_eq!(1, set.argument_count());
    assert_eq!(&["--foo".to_owned()], set.raw_tokens());

    let set = ArgumentSet::from_argv(10, &["program", "--foo"]);
    assert_eq!(1, set.argument_count());
}

#[test]
fn test_metadata_setters() {
    let set = build_set_for_test(&[])
        .set_about("Does things")
        .set_author("Somebody")
        .set_name("tool")
        .set_version("1.2.3")
        .set_termination_policy(TerminationPolicy::RaiseError);
    assert_eq!("Does things", set.get_about());
    assert_eq!("Somebody", set.get_author());
    assert_eq!("tool", set.get_name());
    assert_eq!("1.2.3", set.get_version());
    assert_eq!(TerminationPolicy::RaiseError, set.get_termination_policy());
}

#[test]
fn test_untargeted_arguments_are_absent() {
    let set = build_set_for_test(&["--other", "value"])
        .add_argument(Argument::with_name("name").set_long("name").expects_value())
        .add_argument(Argument::with_name("verbose").set_long("verbose"))
        .parse()
        .unwrap();
    assert_eq!(None, set.get("name"));
    assert!(!set.is_given("name"));
    assert_eq!(None, set.get("verbose"));
    assert!(!set.is_given("verbose"));
}

#[test]
fn test_unknown_names() {
    let set = build_set_for_test(&[]).parse().unwrap();
    assert_eq!(None, set.get("missing"));
    assert!(!set.is_given("missing"));
    assert!(set.get_argument("missing").is_none());
}

#[test]
fn test_is_given_requires_option() {
    let mut argument = Argument::with_name("foo").expects_value();
    argument.set_given(true);
    let set = build_set_for_test(&[]).add_argument(argument);
    assert!(!set.is_given("foo"));
}

#[test]
fn test_lookup_finds_first_registration() {
    let set = build_set_for_test(&[])
        .add_argument(Argument::with_name("foo").set_value("first"))
        .add_argument(Argument::with_name("foo").set_value("second"));
    assert_eq!(Some("first"), set.get("foo"));
    assert_eq!(2, set.arguments().count());
}

#[test]
fn test_long_value_and_option() {
    let set = build_set_for_test(&["--name", "Alice", "--verbose"])
        .add_argument(Argument::with_name("name").set_long("name").expects_value())
        .add_argument(Argument::with_name("verbose").set_long("verbose"))
        .parse()
        .unwrap();
    assert_eq!(Some("Alice"), set.get("name"));
    assert!(set.is_given("verbose"));
}

#[test]
fn test_short_value() {
    let set = build_set_for_test(&["-n", "Bob"])
        .add_argument(Argument::with_name("person").set_short('n').expects_value())
        .parse()
        .unwrap();
    assert_eq!(Some("Bob"), set.get("person"));
}

#[test]
fn test_unknown_long_flag_changes_nothing() {
    let set = build_set_for_test(&["--unknown", "x"])
        .add_argument(Argument::with_name("known").set_long("known").expects_value())
        .parse()
        .unwrap();
    assert_eq!(
        vec![Argument::with_name("known").set_long("known").expects_value()],
        set.arguments().cloned().collect::<Vec<Argument>>()
    );
}

#[test]
fn test_required_argument_given() {
    let set = build_set_for_test(&["-o", "out.txt"])
        .set_termination_policy(TerminationPolicy::RaiseError)
        .add_argument(
            Argument::with_name("out")
                .set_long("out")
                .set_short('o')
                .expects_value()
                .required(),
        )
        .parse()
        .unwrap();
    assert_eq!(Some("out.txt"), set.get("out"));
}

#[test]
fn test_required_argument_missing_raises_error() {
    let result = build_set_for_test(&[])
        .set_termination_policy(TerminationPolicy::RaiseError)
        .add_argument(Argument::with_name("out").set_long("out").expects_value().required())
        .parse();
    assert_missing_required_value(result, "out");
}

#[test]
fn test_required_value_missing_at_end_raises_error() {
    let result = build_set_for_test(&["--out"])
        .set_termination_policy(TerminationPolicy::RaiseError)
        .add_argument(Argument::with_name("out").set_long("out").expects_value().required())
        .parse();
    assert_missing_required_value(result, "out");
}

#[test]
fn test_required_option_without_value_raises_error() {
    // Presence alone never gives an argument a value.
    let result = build_set_for_test(&["--force"])
        .set_termination_policy(TerminationPolicy::RaiseError)
        .add_argument(Argument::with_name("force").set_long("force").required())
        .parse();
    assert_missing_required_value(result, "force");
}

#[test]
fn test_required_argument_missing_exits() {
    let instrumentation = Arc::new(FnInstrumentation::new());
    let errors = SharedBuffer::new();
    let result = build_set_for_test(&[])
        .set_error_sink(Sink::Buffer(errors.clone()))
        .set_exit_handler(recording_exit_handler(&instrumentation))
        .add_argument(Argument::with_name("first").set_long("first").expects_value().required())
        .add_argument(Argument::with_name("second").set_long("second").expects_value().required())
        .parse();

    match result {
        Err(Error::Exit { status }) => assert_eq!(1, status),
        Err(e) => panic!("Expected exit error, got: {}", e),
        Ok(_) => panic!("Expected exit error, got success"),
    }
    assert_eq!(vec![1], instrumentation.get_calls());
    assert_eq!(
        "Error: Missing required value for argument 'first'\n",
        errors.contents()
    );
}

#[test]
fn test_help_bypasses_required_validation() {
    let instrumentation = Arc::new(FnInstrumentation::new());
    let help = SharedBuffer::new();
    let result = build_set_for_test(&["--verbose", "-h"])
        .set_help_sink(Sink::Buffer(help.clone()))
        .set_exit_handler(recording_exit_handler(&instrumentation))
        .add_argument(Argument::with_name("out").set_long("out").expects_value().required())
        .add_argument(Argument::with_name("verbose").set_long("verbose"))
        .parse();

    match result {
        Err(Error::Exit { status }) => assert_eq!(0, status),
        Err(e) => panic!("Expected exit error, got: {}", e),
        Ok(_) => panic!("Expected exit error, got success"),
    }
    assert_eq!(vec![0], instrumentation.get_calls());
    assert!(help.contents().starts_with("program 0.0.1\n"));
}

#[test]
fn test_help_raises_error() {
    let result = build_set_for_test(&["--help"])
        .set_termination_policy(TerminationPolicy::RaiseError)
        .add_argument(Argument::with_name("out").set_long("out").expects_value().required())
        .parse();
    match result {
        Err(Error::HelpRequested) => {}
        Err(e) => panic!("Expected help requested error, got: {}", e),
        Ok(_) => panic!("Expected help requested error, got success"),
    }
}

#[test]
fn test_terminate_directly() {
    let set = build_set_for_test(&[]).set_termination_policy(TerminationPolicy::RaiseError);
    let error = set.terminate(&Argument::with_name("foo"));
    assert_eq!(Some("foo"), error.argument_name());
}

#[test]
fn test_parse_twice_does_not_fail() {
    let set = build_set_for_test(&["--name", "Alice", "--verbose"])
        .add_argument(Argument::with_name("name").set_long("name").expects_value())
        .add_argument(Argument::with_name("verbose").set_long("verbose"))
        .parse()
        .unwrap();
    assert!(set.parse().is_ok());
}

#[test]
fn test_inline_value_on_option_and_help_ignored() {
    let set = build_set_for_test(&["--verbose=false", "--help=no"])
        .set_termination_policy(TerminationPolicy::RaiseError)
        .add_argument(Argument::with_name("verbose").set_long("verbose"))
        .parse()
        .unwrap();
    assert!(!set.is_given("verbose"));
}
