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

use lazy_static::lazy_static;
use log::{debug, set_logger, set_max_level, LevelFilter, Log, Metadata, Record};
use std::sync::Mutex;

static TEST_LOGGER: TestLogger = TestLogger;

lazy_static! {
    static ref TEST_LOGGER_INSTALLED: Mutex<bool> = Mutex::new(false);
}

struct TestLogger;

impl Log for TestLogger {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        println!("{} {} {}", record.level(), record.target(), record.args());
    }

    fn flush(&self) {}
}

/// Call set_logger with a test-friendly logger. Logging will be enabled at the
/// given level, or at "Debug" if no other level was specified.
///
/// Unlike `log::set_logger`, this may be called any number of times (e.g. once
/// per unit test); only the first call installs the logger.
pub fn set_test_logger(max_log_level: Option<LevelFilter>) {
    let mut installed = match TEST_LOGGER_INSTALLED.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    set_max_level(max_log_level.unwrap_or(LevelFilter::Debug));
    if !*installed {
        if let Err(e) = set_logger(&TEST_LOGGER) {
            // Some other logger is already installed; keep using it.
            debug!("Not installing test logger: {}", e);
        }
        *installed = true;
    }
}
