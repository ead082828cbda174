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

use thiserror::Error;

/// Error denotes all of the ways parsing command-line arguments can end
/// without returning a parsed `ArgumentSet` to the caller.
#[derive(Debug, Error)]
pub enum Error {
    /// An injected exit handler returned instead of ending the process. The
    /// status is the one the process would have exited with.
    #[error("exit requested with status {status}")]
    Exit {
        /// The process exit status which was requested.
        status: i32,
    },
    /// An error formatting help or diagnostic text.
    #[error("{0}")]
    Fmt(#[from] std::fmt::Error),
    /// The user asked for help (via "--help" or "-h"), and the termination
    /// policy asks for an error instead of exiting.
    #[error("help requested")]
    HelpRequested,
    /// An I/O error, generally encountered while writing to a diagnostic sink.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// A required argument had no value after all tokens were parsed.
    #[error("missing required value for argument '{name}'")]
    MissingRequiredValue {
        /// The name of the offending argument.
        name: String,
    },
}

impl Error {
    /// Returns the name of the argument this error is about, if any.
    pub fn argument_name(&self) -> Option<&str> {
        match *self {
            Error::MissingRequiredValue { ref name } => Some(name.as_str()),
            _ => None,
        }
    }
}

/// A Result type which uses bdrck_args' internal Error type.
pub type Result<T> = std::result::Result<T, Error>;
