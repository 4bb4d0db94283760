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

//! # Easel Core
//!
//! Foundational crate for the display toolkit's event model: event values,
//! per-instance listener registries and the capture/target/bubble dispatch
//! algorithm that hierarchical hosts plug into.

#![warn(missing_docs)]

pub mod event;

pub use event::{
    DispatchError, Dispatchable, DispatcherConfig, DispatcherId, Event, EventDispatcher,
    EventHandler, EventInit, EventPhase, Listener, ListenerData, ListenerOptions,
};
