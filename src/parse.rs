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
use log::{debug, warn};

/// The long name which is always reserved for showing help.
pub(crate) const HELP_LONG_NAME: &str = "help";
/// The short name which is always reserved for showing help.
pub(crate) const HELP_SHORT_NAME: char = 'h';

/// The outcome of scanning a full list of tokens.
#[derive(Debug, Eq, PartialEq)]
pub(crate) enum Scan {
    /// Every token was examined.
    Complete,
    /// A help token was found; scanning stopped there.
    HelpRequested,
}

/// The outcome of examining a single token.
enum Step {
    /// Move past this token, plus this many following tokens which were
    /// consumed as a value.
    Advance(usize),
    HelpRequested,
}

/// Splits a long flag (with its leading "--" already removed) into a name
/// and an inline value, separated by the first '=' character. Returns None
/// if there is no '=' or the name would be empty.
fn split_inline_value(long: &str) -> Option<(&str, &str)> {
    match long.find('=') {
        None | Some(0) => None,
        Some(idx) => Some((&long[..idx], &long[idx + 1..])),
    }
}

/// Returns the token following the one at `index`, if there is one.
fn take_value(tokens: &[String], index: usize) -> Option<&str> {
    tokens.get(index + 1).map(|t| t.as_str())
}

/// Updates a matched argument, returning the number of following tokens
/// which were consumed as its value.
fn resolve(argument: &mut Argument, flag: &str, tokens: &[String], index: usize) -> usize {
    if argument.is_expecting_value() {
        return match take_value(tokens, index) {
            Some(value) => {
                debug!("Argument '{}' given value via '{}'", argument.get_name(), flag);
                argument.store_value(value);
                1
            }
            None => {
                warn!(
                    "Argument '{}' expects a value, but '{}' is the last token",
                    argument.get_name(),
                    flag
                );
                0
            }
        };
    }

    if argument.is_option() {
        debug!("Option '{}' given via '{}'", argument.get_name(), flag);
        argument.set_given(true);
    }
    0
}

/// Handles "--name=value". Only the first argument with that long form is
/// considered, and only if it expects a value; anything else is unmatched.
fn read_inline_long(flag: &str, long: &str, arguments: &mut [Argument]) -> bool {
    let (name, value) = match split_inline_value(long) {
        None => return false,
        Some(split) => split,
    };

    match arguments.iter_mut().find(|a| a.get_long() == name) {
        Some(argument) if argument.is_expecting_value() => {
            debug!("Argument '{}' given inline value via '{}'", argument.get_name(), flag);
            argument.store_value(value);
            true
        }
        _ => false,
    }
}

fn read_long(flag: &str, tokens: &[String], index: usize, arguments: &mut [Argument]) -> Step {
    let long = &flag[2..];
    if long.is_empty() {
        return Step::Advance(0);
    }
    if long == HELP_LONG_NAME {
        return Step::HelpRequested;
    }

    if let Some(argument) = arguments.iter_mut().find(|a| a.get_long() == long) {
        return Step::Advance(resolve(argument, flag, tokens, index));
    }
    if !read_inline_long(flag, long, arguments) {
        debug!("Ignoring unrecognized flag '{}'", flag);
    }
    Step::Advance(0)
}

fn read_short(flag: &str, tokens: &[String], index: usize, arguments: &mut [Argument]) -> Step {
    let short = match flag.chars().nth(1) {
        None => return Step::Advance(0),
        Some(short) => short,
    };
    if short == HELP_SHORT_NAME {
        return Step::HelpRequested;
    }

    match arguments.iter_mut().find(|a| a.get_short() == Some(short)) {
        None => {
            debug!("Ignoring unrecognized flag '{}'", flag);
            Step::Advance(0)
        }
        Some(argument) => Step::Advance(resolve(argument, flag, tokens, index)),
    }
}

/// Scans the given tokens left to right, updating the first matching
/// argument for each "--long" or "-s" token. Tokens which are neither are
/// ignored, as are flags which match no argument.
pub(crate) fn scan(tokens: &[String], arguments: &mut [Argument]) -> Scan {
    let mut index: usize = 0;
    while index < tokens.len() {
        let token = tokens[index].as_str();
        let step = if token.starts_with("--") {
            read_long(token, tokens, index, arguments)
        } else if token.starts_with('-') {
            read_short(token, tokens, index, arguments)
        } else {
            debug!("Ignoring positional token '{}'", token);
            Step::Advance(0)
        };

        match step {
            Step::HelpRequested => return Scan::HelpRequested,
            Step::Advance(consumed) => index += 1 + consumed,
        }
    }
    Scan::Complete
}
