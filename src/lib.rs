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

#![deny(
    anonymous_parameters,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces
)]
#![warn(bare_trait_objects, unreachable_pub, unused_qualifications)]

//! bdrck_args is a small library for defining and parsing a flat set of
//! command-line arguments: presence-only options and value-bearing arguments,
//! each with optional short ("-v") and long ("--verbose") forms.

/// argument defines the descriptor for a single command-line argument.
pub mod argument;
/// argument_set defines a parsing session over a program's raw arguments.
pub mod argument_set;
/// error defines error types specific to bdrck_args.
pub mod error;
mod help;
/// io defines the destinations help and diagnostic text can be written to.
pub mod io;
mod parse;
/// termination defines what happens when parsing cannot continue.
pub mod termination;
/// testing provides utilities which are useful for unit testing code which
/// parses command-line arguments.
#[cfg(feature = "testing")]
pub mod testing;

#[cfg(all(feature = "testing", test))]
mod tests;

// Re-export most commonly used symbols, to allow using this library with just
// one "use".

pub use crate::argument::Argument;
pub use crate::argument_set::ArgumentSet;
pub use crate::error::{Error, Result};
pub use crate::io::{SharedBuffer, Sink};
pub use crate::termination::{ExitHandler, TerminationPolicy};
