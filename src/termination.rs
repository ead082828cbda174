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

use std::fmt;
use std::process;

/// The process exit status used after help is shown.
pub const EXIT_SUCCESS: i32 = 0;
/// The process exit status used when a required argument is missing.
pub const EXIT_FAILURE: i32 = 1;

/// TerminationPolicy decides what happens when parsing cannot continue:
/// either help was requested, or a required argument has no value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TerminationPolicy {
    /// Write a diagnostic to the error sink, and then end the process via the
    /// exit handler.
    ProcessExit,
    /// Return a structured `Error` to the caller instead.
    RaiseError,
}

impl Default for TerminationPolicy {
    fn default() -> Self {
        TerminationPolicy::ProcessExit
    }
}

/// An ExitHandler ends the process with the given status. The default one
/// calls `std::process::exit`. A handler which returns (e.g. one injected by
/// a unit test) causes parsing to stop with `Error::Exit` instead.
pub struct ExitHandler {
    handler: Box<dyn Fn(i32)>,
}

impl ExitHandler {
    /// Wrap an arbitrary function as an exit handler.
    pub fn new<F: Fn(i32) + 'static>(handler: F) -> Self {
        ExitHandler {
            handler: Box::new(handler),
        }
    }

    /// Invoke this handler with the given status.
    pub fn exit(&self, status: i32) {
        (self.handler)(status)
    }
}

impl Default for ExitHandler {
    fn default() -> Self {
        ExitHandler::new(|status| process::exit(status))
    }
}

impl fmt::Debug for ExitHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ExitHandler")
    }
}
