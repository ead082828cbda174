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
use crate::error::*;
use crate::help::render_help;
use crate::io::Sink;
use crate::parse::{scan, Scan};
use crate::termination::{ExitHandler, TerminationPolicy, EXIT_FAILURE, EXIT_SUCCESS};
use log::{debug, warn};
use std::env;

/// The version reported in help output if none is set explicitly.
pub const DEFAULT_VERSION: &str = "0.0.1";

/// An ArgumentSet is a single parsing session: the raw tokens given to one
/// invocation of a program, plus the Arguments those tokens are matched
/// against.
///
/// Typical usage registers every Argument, calls `parse` exactly once, and
/// then queries results by name:
///
/// ```no_run
/// use bdrck_args::{Argument, ArgumentSet};
///
/// let args = ArgumentSet::from_env()
///     .add_argument(Argument::with_name("name").set_long("name").expects_value())
///     .add_argument(Argument::with_name("verbose").set_long("verbose").set_short('v'))
///     .parse()
///     .unwrap();
/// let name = args.get("name");
/// let verbose = args.is_given("verbose");
/// ```
///
/// Parsing the same set twice is not supported. It will not fail, but the
/// resulting state is unspecified.
#[derive(Debug)]
pub struct ArgumentSet {
    raw_tokens: Vec<String>,
    argument_count: usize,
    arguments: Vec<Argument>,
    termination_policy: TerminationPolicy,
    about: String,
    author: String,
    name: String,
    version: String,
    help_sink: Sink,
    error_sink: Sink,
    exit_handler: ExitHandler,
}

impl ArgumentSet {
    /// Constructs a new ArgumentSet from an argc / argv style argument
    /// vector. The first token is the program name; it is used as the default
    /// name in help output, and is not parsed. At most `argc` tokens of
    /// `argv` are considered.
    pub fn from_argv<S: AsRef<str>>(argc: usize, argv: &[S]) -> ArgumentSet {
        let raw_tokens: Vec<String> = argv
            .iter()
            .take(argc)
            .skip(1) // Skip the first token, which is our executable.
            .map(|t| t.as_ref().to_owned())
            .collect();
        let argument_count = raw_tokens.len();

        ArgumentSet {
            raw_tokens,
            argument_count,
            arguments: Vec::new(),
            termination_policy: TerminationPolicy::default(),
            about: String::new(),
            author: String::new(),
            name: match argc {
                0 => String::new(),
                _ => argv.first().map_or(String::new(), |p| p.as_ref().to_owned()),
            },
            version: DEFAULT_VERSION.to_owned(),
            help_sink: Sink::Stdout,
            error_sink: Sink::Stderr,
            exit_handler: ExitHandler::default(),
        }
    }

    /// Constructs a new ArgumentSet from this process' own arguments.
    pub fn from_env() -> ArgumentSet {
        let argv: Vec<String> = env::args().collect();
        ArgumentSet::from_argv(argv.len(), &argv)
    }

    /// Returns the tokens which will be parsed (the program name excluded).
    pub fn raw_tokens(&self) -> &[String] {
        &self.raw_tokens[..self.argument_count]
    }

    /// Returns the number of tokens which will be parsed.
    pub fn argument_count(&self) -> usize {
        self.argument_count
    }

    /// Registers an Argument. Names are not checked for uniqueness; lookups
    /// always find the first Argument registered with a given name.
    pub fn add_argument(mut self, argument: Argument) -> Self {
        self.arguments.push(argument);
        self
    }

    /// Returns an iterator over every registered Argument, in registration
    /// order.
    pub fn arguments(&self) -> impl Iterator<Item = &Argument> {
        self.arguments.iter()
    }

    /// Returns the first Argument registered with the given name.
    pub fn get_argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|a| a.get_name() == name)
    }

    /// Returns the value of the named Argument. This is None both if the
    /// Argument has no value and if no such Argument is registered.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.get_argument(name).and_then(|a| a.get_value())
    }

    /// Returns true if the named Argument is an option which was given. This
    /// is always false for value-bearing Arguments and unknown names.
    pub fn is_given(&self, name: &str) -> bool {
        self.get_argument(name)
            .map_or(false, |a| a.is_option() && a.is_given())
    }

    /// Matches the raw tokens against the registered Arguments, and then
    /// checks that every required Argument has a value.
    ///
    /// If help was requested or a required Argument is missing, the
    /// termination policy is applied. With the default policy and exit
    /// handler, this does not return in either case.
    pub fn parse(mut self) -> Result<Self> {
        debug!(
            "Parsing {} tokens against {} arguments",
            self.argument_count,
            self.arguments.len()
        );
        let tokens = &self.raw_tokens[..self.argument_count];
        if scan(tokens, &mut self.arguments) == Scan::HelpRequested {
            return Err(self.show_help());
        }

        if let Some(missing) = self
            .arguments
            .iter()
            .find(|a| a.is_required() && a.get_value().is_none())
        {
            return Err(self.terminate(missing));
        }

        Ok(self)
    }

    /// Returns the current termination policy.
    pub fn get_termination_policy(&self) -> TerminationPolicy {
        self.termination_policy
    }

    /// Sets the termination policy. The default is
    /// `TerminationPolicy::ProcessExit`.
    pub fn set_termination_policy(mut self, policy: TerminationPolicy) -> Self {
        self.termination_policy = policy;
        self
    }

    /// Returns the description of the program, used in help output.
    pub fn get_about(&self) -> &str {
        self.about.as_str()
    }

    /// Sets the description of the program, used in help output.
    pub fn set_about(mut self, about: &str) -> Self {
        self.about = about.to_owned();
        self
    }

    /// Returns the author of the program, used in help output.
    pub fn get_author(&self) -> &str {
        self.author.as_str()
    }

    /// Sets the author of the program, used in help output.
    pub fn set_author(mut self, author: &str) -> Self {
        self.author = author.to_owned();
        self
    }

    /// Returns the name of the program, used in help output.
    pub fn get_name(&self) -> &str {
        self.name.as_str()
    }

    /// Sets the name of the program, used in help output.
    pub fn set_name(mut self, name: &str) -> Self {
        self.name = name.to_owned();
        self
    }

    /// Returns the version of the program, used in help output.
    pub fn get_version(&self) -> &str {
        self.version.as_str()
    }

    /// Sets the version of the program, used in help output.
    pub fn set_version(mut self, version: &str) -> Self {
        self.version = version.to_owned();
        self
    }

    /// Sets where help output is written. Defaults to `Sink::Stdout`.
    pub fn set_help_sink(mut self, sink: Sink) -> Self {
        self.help_sink = sink;
        self
    }

    /// Sets where diagnostics about missing arguments are written. Defaults
    /// to `Sink::Stderr`.
    pub fn set_error_sink(mut self, sink: Sink) -> Self {
        self.error_sink = sink;
        self
    }

    /// Replaces the function used to end the process under the
    /// `TerminationPolicy::ProcessExit` policy.
    pub fn set_exit_handler<F: Fn(i32) + 'static>(mut self, handler: F) -> Self {
        self.exit_handler = ExitHandler::new(handler);
        self
    }

    /// Ends this parsing session with the given status, or returns the given
    /// error, depending on the termination policy.
    fn end(&self, status: i32, raised: Error) -> Error {
        match self.termination_policy {
            TerminationPolicy::ProcessExit => {
                self.exit_handler.exit(status);
                Error::Exit { status }
            }
            TerminationPolicy::RaiseError => raised,
        }
    }

    /// Writes help to the help sink, and then ends this parsing session
    /// according to the termination policy. The returned error is what the
    /// caller should propagate if the exit handler returns, or if the policy
    /// is `TerminationPolicy::RaiseError`.
    pub fn show_help(&self) -> Error {
        match render_help(self).and_then(|help| self.help_sink.write_str(&help)) {
            Ok(_) => {}
            Err(e) => warn!("Failed to write help: {}", e),
        }
        self.end(EXIT_SUCCESS, Error::HelpRequested)
    }

    /// Applies the termination policy for the given Argument, which is
    /// missing a required value. Under `TerminationPolicy::ProcessExit` a
    /// diagnostic naming the Argument is written to the error sink first.
    pub fn terminate(&self, argument: &Argument) -> Error {
        let raised = Error::MissingRequiredValue {
            name: argument.get_name().to_owned(),
        };

        if self.termination_policy == TerminationPolicy::ProcessExit {
            let diagnostic = format!(
                "Error: Missing required value for argument '{}'\n",
                argument.get_name()
            );
            if let Err(e) = self.error_sink.write_str(&diagnostic) {
                warn!("Failed to write diagnostic: {}", e);
            }
        }

        self.end(EXIT_FAILURE, raised)
    }
}
