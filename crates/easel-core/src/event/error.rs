// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Errors raised by the dispatcher itself.
//!
//! Listener failures are not represented here: they travel back to the caller
//! of `dispatch_event` as the listener's own [`anyhow::Error`].

use std::fmt;

/// An error produced while preparing or running a dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The `parent` chain of the target is longer than the configured limit,
    /// which usually means it loops back on itself.
    PropagationDepthExceeded {
        /// The type of the event being dispatched.
        event_type: String,
        /// The configured maximum number of ancestors.
        limit: usize,
    },
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::PropagationDepthExceeded { event_type, limit } => {
                write!(
                    f,
                    "Propagation path for '{event_type}' exceeds {limit} ancestors"
                )
            }
        }
    }
}

impl std::error::Error for DispatchError {}
