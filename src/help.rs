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
use crate::argument_set::ArgumentSet;
use crate::error::*;
use crate::parse::{HELP_LONG_NAME, HELP_SHORT_NAME};
use std::fmt::Write;

fn write_argument_help<W: Write>(f: &mut W, argument: &Argument) -> Result<()> {
    let mut forms: Vec<String> = Vec::new();
    if !argument.get_long().is_empty() {
        forms.push(format!("--{}", argument.get_long()));
    }
    if let Some(short) = argument.get_short() {
        forms.push(format!("-{}", short));
    }
    match forms.is_empty() {
        false => write!(f, "\t{}", forms.join(", "))?,
        true => write!(f, "\t{}", argument.get_name())?,
    }

    if argument.is_expecting_value() {
        write!(f, " <value>")?;
    }
    if !argument.get_help().is_empty() {
        write!(f, " - {}", argument.get_help())?;
    }

    if argument.is_required() {
        write!(f, " [Required]")?;
    } else if argument.is_option() {
        write!(f, " [Flag, default: off]")?;
    }

    writeln!(f)?;
    Ok(())
}

/// Writes the complete help message for the given set of arguments.
pub(crate) fn write_help<W: Write>(f: &mut W, set: &ArgumentSet) -> Result<()> {
    if !set.get_name().is_empty() {
        writeln!(f, "{} {}", set.get_name(), set.get_version())?;
    }
    if !set.get_author().is_empty() {
        writeln!(f, "{}", set.get_author())?;
    }
    if !set.get_about().is_empty() {
        writeln!(f, "{}", set.get_about())?;
    }
    if !set.get_name().is_empty() || !set.get_author().is_empty() || !set.get_about().is_empty() {
        writeln!(f)?;
    }

    writeln!(f, "Usage: {} [flags ...]", set.get_name())?;

    writeln!(f, "\nFlags:")?;
    for argument in set.arguments() {
        write_argument_help(f, argument)?;
    }
    writeln!(
        f,
        "\t--{}, -{} - Print this help message",
        HELP_LONG_NAME, HELP_SHORT_NAME
    )?;

    Ok(())
}

/// Renders the complete help message for the given set of arguments.
pub(crate) fn render_help(set: &ArgumentSet) -> Result<String> {
    let mut s = String::new();
    write_help(&mut s, set)?;
    Ok(s)
}
