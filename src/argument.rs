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

/// An Argument describes a single named command-line argument, and also
/// holds whatever the parser resolved for it.
///
/// There are two kinds of arguments. Options are presence-only: passing them
/// by name (e.g. "--verbose" or "-v") marks them as given. Value-bearing
/// arguments (see `expects_value`) instead take the token which follows them
/// as their value.
///
/// Arguments are configured through by-value builder methods, and are then
/// handed to an `ArgumentSet`, which owns them from then on.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Argument {
    name: String,
    help: String,
    short: Option<char>,
    long: String,
    value: String,
    required: bool,
    expects_value: bool,
    is_option: bool,
    given: bool,
}

impl Argument {
    /// Constructs a new presence-only, optional Argument with the given
    /// name. The name is how the argument's result is looked up after
    /// parsing; it is not what the user types on the command line (see
    /// `set_short` and `set_long` for that).
    pub fn with_name(name: &str) -> Argument {
        Argument {
            name: name.to_owned(),
            help: String::new(),
            short: None,
            long: String::new(),
            value: String::new(),
            required: false,
            expects_value: false,
            is_option: true,
            given: false,
        }
    }

    /// Returns this argument's logical name.
    pub fn get_name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the human-readable help text for this argument.
    pub fn get_help(&self) -> &str {
        self.help.as_str()
    }

    /// Sets the human-readable help text for this argument.
    pub fn set_help(mut self, help: &str) -> Self {
        self.help = help.to_owned();
        self
    }

    /// Returns the short form (e.g. the 'v' in "-v"), if one was set.
    pub fn get_short(&self) -> Option<char> {
        self.short
    }

    /// Sets the short form, which is matched against the single character
    /// following a lone '-'.
    pub fn set_short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    /// Returns the long form (e.g. "verbose" for "--verbose"). This is empty
    /// if no long form was set.
    pub fn get_long(&self) -> &str {
        self.long.as_str()
    }

    /// Sets the long form, which is matched against whatever follows "--".
    pub fn set_long(mut self, long: &str) -> Self {
        self.long = long.to_owned();
        self
    }

    /// Returns this argument's value, or None if it has none. Note that an
    /// empty string value is treated exactly the same as no value at all.
    pub fn get_value(&self) -> Option<&str> {
        match self.value.is_empty() {
            false => Some(self.value.as_str()),
            true => None,
        }
    }

    /// Overwrites this argument's value.
    pub fn set_value(mut self, value: &str) -> Self {
        self.value = value.to_owned();
        self
    }

    pub(crate) fn store_value(&mut self, value: &str) {
        self.value = value.to_owned();
    }

    /// Marks this argument as taking a value. An argument which takes a
    /// value is no longer an option; there is no way to undo this.
    pub fn expects_value(mut self) -> Self {
        self.expects_value = true;
        self.is_option = false;
        self
    }

    /// Returns true if this argument takes the following token as its value.
    pub fn is_expecting_value(&self) -> bool {
        self.expects_value
    }

    /// Marks this argument as required: after parsing it must have a value,
    /// or the owning `ArgumentSet`'s termination policy is applied.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Returns true if this argument must have a value after parsing.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Returns true if this argument is presence-only.
    pub fn is_option(&self) -> bool {
        self.is_option
    }

    /// Returns true if this argument was found while parsing.
    pub fn is_given(&self) -> bool {
        self.given
    }

    /// Sets whether or not this argument was found while parsing.
    pub fn set_given(&mut self, given: bool) {
        self.given = given;
    }
}
