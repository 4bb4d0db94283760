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

//! The event value handed to every listener during a dispatch.

use super::dispatcher::DispatcherId;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

/// The stage of propagation an [`Event`] is currently in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EventPhase {
    /// The event is not being dispatched.
    #[default]
    None,
    /// Walking from the outermost ancestor inward, excluding the target.
    Capturing,
    /// Invoking listeners on the target itself.
    AtTarget,
    /// Walking from the target's parent outward to the root.
    Bubbling,
}

/// Construction flags of an [`Event`]. Both are immutable once the event exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EventInit {
    /// Whether the event takes part in the capture and bubbling phases.
    pub bubbles: bool,
    /// Whether [`Event::prevent_default`] has any effect.
    pub cancelable: bool,
}

impl EventInit {
    /// Creates a new set of construction flags.
    pub const fn new(bubbles: bool, cancelable: bool) -> Self {
        Self {
            bubbles,
            cancelable,
        }
    }

    /// Flags for an event that bubbles but cannot be cancelled.
    pub const fn bubbling() -> Self {
        Self::new(true, false)
    }
}

/// One occurrence of a named event.
///
/// The propagation fields (`target`, `current_target`, `phase`) and the control
/// flags are only meaningful inside the synchronous call stack of a dispatch.
/// Listeners mutate the control flags through [`prevent_default`](Self::prevent_default),
/// [`stop_propagation`](Self::stop_propagation),
/// [`stop_immediate_propagation`](Self::stop_immediate_propagation) and
/// [`remove`](Self::remove); the dispatch loop reads them between steps.
#[derive(Clone)]
pub struct Event {
    event_type: String,
    target: Option<DispatcherId>,
    current_target: Option<DispatcherId>,
    phase: EventPhase,
    bubbles: bool,
    cancelable: bool,
    time_stamp: u64,
    default_prevented: bool,
    propagation_stopped: bool,
    immediate_propagation_stopped: bool,
    removed: bool,
    data: Option<Rc<dyn Any>>,
}

impl Event {
    /// Creates a new event of the given type.
    ///
    /// ## Arguments
    /// * `event_type` - The event name listeners are registered under.
    /// * `init` - Whether the event bubbles and whether it can be cancelled.
    pub fn new(event_type: impl Into<String>, init: EventInit) -> Self {
        let time_stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or_default();

        Self {
            event_type: event_type.into(),
            target: None,
            current_target: None,
            phase: EventPhase::None,
            bubbles: init.bubbles,
            cancelable: init.cancelable,
            time_stamp,
            default_prevented: false,
            propagation_stopped: false,
            immediate_propagation_stopped: false,
            removed: false,
            data: None,
        }
    }

    /// The event name.
    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    /// The dispatcher the event was dispatched on, once dispatch has started.
    pub fn target(&self) -> Option<DispatcherId> {
        self.target
    }

    /// The dispatcher whose listeners are currently executing.
    pub fn current_target(&self) -> Option<DispatcherId> {
        self.current_target
    }

    /// The current propagation phase.
    pub fn phase(&self) -> EventPhase {
        self.phase
    }

    /// Whether the event takes part in the capture and bubbling phases.
    pub fn bubbles(&self) -> bool {
        self.bubbles
    }

    /// Whether [`prevent_default`](Self::prevent_default) has any effect.
    pub fn cancelable(&self) -> bool {
        self.cancelable
    }

    /// Milliseconds since the Unix epoch at which the event was created.
    pub fn time_stamp(&self) -> u64 {
        self.time_stamp
    }

    /// Whether a listener called [`prevent_default`](Self::prevent_default) on a cancelable event.
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Whether propagation to further nodes has been stopped.
    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    /// Whether the remaining listeners at the current node have been skipped.
    pub fn is_immediate_propagation_stopped(&self) -> bool {
        self.immediate_propagation_stopped
    }

    /// Whether the executing listener asked to be deregistered.
    pub fn is_removed(&self) -> bool {
        self.removed
    }

    /// Marks the default action as cancelled. Has no effect unless the event is cancelable.
    pub fn prevent_default(&mut self) {
        self.default_prevented = self.cancelable;
    }

    /// Stops the dispatch from advancing to further nodes.
    ///
    /// Listeners still due at the current node continue to run.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Stops the dispatch immediately: no further listener at this node and no further node.
    pub fn stop_immediate_propagation(&mut self) {
        self.immediate_propagation_stopped = true;
        self.propagation_stopped = true;
    }

    /// Deregisters the currently executing listener once it returns.
    pub fn remove(&mut self) {
        self.removed = true;
    }

    /// Attaches an arbitrary payload to the event.
    pub fn set_data<T: Any>(&mut self, data: T) -> &mut Self {
        self.data = Some(Rc::new(data));
        self
    }

    /// Builder form of [`set_data`](Self::set_data).
    pub fn with_data<T: Any>(mut self, data: T) -> Self {
        self.set_data(data);
        self
    }

    /// Returns the payload if one is attached and it has type `T`.
    pub fn data<T: Any>(&self) -> Option<&T> {
        self.data.as_deref().and_then(|data| data.downcast_ref::<T>())
    }

    /// Creates a new event with the same type and flags and all dispatch state reset.
    ///
    /// The time stamp is taken afresh; an attached payload is shared with the copy.
    pub fn clone_fresh(&self) -> Self {
        let mut fresh = Self::new(
            self.event_type.clone(),
            EventInit::new(self.bubbles, self.cancelable),
        );
        fresh.data = self.data.clone();
        fresh
    }

    pub(crate) fn begin_dispatch(&mut self, target: DispatcherId) {
        self.target = Some(target);
        self.current_target = Some(target);
    }

    pub(crate) fn enter(&mut self, current_target: DispatcherId, phase: EventPhase) {
        self.current_target = Some(current_target);
        self.phase = phase;
        self.removed = false;
    }

    /// Reads and clears the `removed` flag.
    pub(crate) fn take_removed(&mut self) -> bool {
        std::mem::take(&mut self.removed)
    }

    pub(crate) fn end_dispatch(&mut self) {
        self.current_target = None;
        self.phase = EventPhase::None;
    }
}

impl From<&str> for Event {
    fn from(event_type: &str) -> Self {
        Self::new(event_type, EventInit::default())
    }
}

impl From<String> for Event {
    fn from(event_type: String) -> Self {
        Self::new(event_type, EventInit::default())
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("event_type", &self.event_type)
            .field("target", &self.target)
            .field("current_target", &self.current_target)
            .field("phase", &self.phase)
            .field("bubbles", &self.bubbles)
            .field("cancelable", &self.cancelable)
            .field("default_prevented", &self.default_prevented)
            .field("propagation_stopped", &self.propagation_stopped)
            .field(
                "immediate_propagation_stopped",
                &self.immediate_propagation_stopped,
            )
            .field("has_data", &self.data.is_some())
            .finish()
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Event (type={})]", self.event_type)
    }
}
