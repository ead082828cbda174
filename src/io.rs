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

use crate::error::*;
use log::log;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

/// SharedBuffer is an in-memory destination for diagnostic output. Clones
/// share the same underlying buffer, so a caller can hand one clone to an
/// `ArgumentSet` and later inspect what was written through another.
#[derive(Clone, Debug, Default)]
pub struct SharedBuffer {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    /// Constructs a new, empty buffer.
    pub fn new() -> Self {
        SharedBuffer {
            buffer: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        match self.buffer.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Returns everything written to this buffer so far, lossily decoded as
    /// UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock()[..]).into_owned()
    }

    /// Discards everything written to this buffer so far.
    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Sink describes where human-readable help and diagnostic text is written.
#[derive(Clone, Debug)]
pub enum Sink {
    /// Write to the process' standard output.
    Stdout,
    /// Write to the process' standard error.
    Stderr,
    /// Emit each line through the `log` facade, at the given level.
    Log(log::Level),
    /// Write into an in-memory buffer.
    Buffer(SharedBuffer),
    /// Silently discard all output.
    Noop,
}

fn write_to_io_writer<W: Write>(mut writer: W, s: &str) -> Result<()> {
    writer.write_all(s.as_bytes())?;
    writer.flush()?;
    Ok(())
}

impl Sink {
    /// Write the given text to this sink.
    pub fn write_str(&self, s: &str) -> Result<()> {
        match *self {
            Sink::Stdout => write_to_io_writer(io::stdout(), s),
            Sink::Stderr => write_to_io_writer(io::stderr(), s),
            Sink::Log(level) => {
                for line in s.lines() {
                    log!(level, "{}", line);
                }
                Ok(())
            }
            Sink::Buffer(ref buffer) => write_to_io_writer(buffer.clone(), s),
            Sink::Noop => Ok(()),
        }
    }
}
