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

//! Provides the event dispatch primitives shared by every display object.
//!
//! Dispatch is purely local: each [`EventDispatcher`] owns its own listener
//! registry and there is no global bus. Objects organised into a hierarchy
//! implement [`Dispatchable`] to expose their `parent`, which turns a single
//! dispatch into a capture, at-target and bubbling traversal of the
//! propagation path.
//!
//! All dispatch is synchronous. Listeners run to completion in registration
//! order before [`Dispatchable::dispatch_event`] returns, and a listener error
//! aborts the remaining invocations and is returned to the caller unchanged.

mod config;
mod dispatcher;
mod error;
mod listener;
mod registry;
mod value;

pub use self::config::DispatcherConfig;
pub use self::dispatcher::{Dispatchable, DispatcherId, EventDispatcher};
pub use self::error::DispatchError;
pub use self::listener::{EventHandler, Listener, ListenerData, ListenerOptions};
pub use self::value::{Event, EventInit, EventPhase};
