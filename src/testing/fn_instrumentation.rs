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

use std::sync::{Arc, Mutex, MutexGuard};

/// This is a structure which records calls to an instrumented function,
/// along with the argument each call was made with. Because it has internal
/// synchronization, this can be done without retaining a mutable reference.
#[derive(Debug)]
pub struct FnInstrumentation<T> {
    calls: Mutex<Vec<T>>,
}

impl<T: Clone> FnInstrumentation<T> {
    /// Construct a new instrumentation state, with no recorded calls.
    pub fn new() -> FnInstrumentation<T> {
        FnInstrumentation {
            calls: Mutex::new(Vec::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<T>> {
        match self.calls.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Record that the function being instrumented was called with the given
    /// argument.
    pub fn record_call(&self, argument: T) {
        self.lock().push(argument);
    }

    /// Return the current number of calls recorded.
    pub fn get_call_count(&self) -> usize {
        self.lock().len()
    }

    /// Return the arguments of every call recorded so far, in call order.
    pub fn get_calls(&self) -> Vec<T> {
        self.lock().clone()
    }
}

/// Returns an exit handler which, instead of ending the process, records the
/// requested status in the given instrumentation and returns.
pub fn recording_exit_handler(
    instrumentation: &Arc<FnInstrumentation<i32>>,
) -> impl Fn(i32) + 'static {
    let instrumentation = instrumentation.clone();
    move |status| instrumentation.record_call(status)
}
