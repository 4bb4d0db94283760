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

//! Listener variants and the proxy installed by [`Dispatchable::on`](super::Dispatchable::on).

use super::registry::ListenerRegistry;
use super::value::Event;
use std::any::Any;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

/// Auxiliary data bound to a listener at registration time.
pub type ListenerData = Rc<dyn Any>;

type ListenerFn = dyn Fn(&mut Event) -> anyhow::Result<()>;
type DataListenerFn = dyn Fn(&mut Event, Option<&ListenerData>) -> anyhow::Result<()>;

/// An object that receives events through a single entry point.
pub trait EventHandler {
    /// Called once per matching dispatch step.
    fn handle_event(&self, event: &mut Event) -> anyhow::Result<()>;

    /// Called by listeners registered through `on_handler`, with the bound data.
    ///
    /// The default ignores `data` and forwards to [`handle_event`](Self::handle_event).
    fn handle_event_with_data(
        &self,
        event: &mut Event,
        data: Option<&ListenerData>,
    ) -> anyhow::Result<()> {
        let _ = data;
        self.handle_event(event)
    }
}

/// A registered listener: either a plain callable or a handler object.
///
/// Two listeners are the same listener when they share one allocation, so
/// keep the value returned from registration (or a clone of it) to remove it
/// later.
#[derive(Clone)]
pub enum Listener {
    /// A plain callable.
    Function(Rc<ListenerFn>),
    /// An object exposing [`EventHandler::handle_event`].
    Handler(Rc<dyn EventHandler>),
}

impl Listener {
    /// Wraps a closure as a listener.
    pub fn function<F>(callback: F) -> Self
    where
        F: Fn(&mut Event) -> anyhow::Result<()> + 'static,
    {
        Listener::Function(Rc::new(callback))
    }

    /// Wraps a shared handler object as a listener.
    ///
    /// Every listener built from clones of the same `Rc` is the same listener.
    pub fn handler<H: EventHandler + 'static>(handler: Rc<H>) -> Self {
        Listener::Handler(handler)
    }

    /// Returns `true` if both values refer to the same listener.
    pub fn same(&self, other: &Listener) -> bool {
        self.key() == other.key()
    }

    pub(crate) fn key(&self) -> ListenerKey {
        match self {
            Listener::Function(callback) => ListenerKey::of(Rc::as_ptr(callback) as *const ()),
            Listener::Handler(handler) => ListenerKey::of(Rc::as_ptr(handler) as *const ()),
        }
    }

    pub(crate) fn invoke(&self, event: &mut Event) -> anyhow::Result<()> {
        match self {
            Listener::Function(callback) => callback(event),
            Listener::Handler(handler) => handler.handle_event(event),
        }
    }
}

impl PartialEq for Listener {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl Eq for Listener {}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Listener::Function(_) => "Function",
            Listener::Handler(_) => "Handler",
        };
        write!(f, "Listener::{kind}({:#x})", self.key().0)
    }
}

/// Address of a listener's shared allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ListenerKey(usize);

impl ListenerKey {
    fn of(ptr: *const ()) -> Self {
        Self(ptr as usize)
    }
}

/// Options accepted by [`Dispatchable::on`](super::Dispatchable::on).
#[derive(Debug, Clone, Default)]
pub struct ListenerOptions {
    /// Deregister the listener before its first invocation runs.
    pub once: bool,
    /// Register in the capture bucket instead of the bubble/target bucket.
    pub capture: bool,
    /// Data passed to the callback on every invocation.
    pub data: Option<ListenerData>,
}

impl ListenerOptions {
    /// Default options: persistent, bubble/target phase, no data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the listener as one-shot.
    pub fn once(mut self) -> Self {
        self.once = true;
        self
    }

    /// Registers the listener for the capture phase.
    pub fn capture(mut self) -> Self {
        self.capture = true;
        self
    }

    /// Binds `data` to the listener.
    pub fn with_data<T: Any>(mut self, data: T) -> Self {
        self.data = Some(Rc::new(data));
        self
    }
}

pub(crate) enum ScopedCallback {
    Function(Rc<DataListenerFn>),
    Handler(Rc<dyn EventHandler>),
}

/// The proxy registered by `on`: binds data and implements one-shot removal.
pub(crate) struct ScopedListener {
    callback: ScopedCallback,
    data: Option<ListenerData>,
    once: bool,
    fired: Cell<bool>,
    event_type: String,
    capture: bool,
    registry: Weak<RefCell<ListenerRegistry>>,
}

impl ScopedListener {
    pub(crate) fn new(
        callback: ScopedCallback,
        event_type: &str,
        options: ListenerOptions,
        registry: Weak<RefCell<ListenerRegistry>>,
    ) -> Self {
        Self {
            callback,
            data: options.data,
            once: options.once,
            fired: Cell::new(false),
            event_type: event_type.to_owned(),
            capture: options.capture,
            registry,
        }
    }

    fn key(&self) -> ListenerKey {
        ListenerKey::of(self as *const Self as *const ())
    }
}

impl EventHandler for ScopedListener {
    fn handle_event(&self, event: &mut Event) -> anyhow::Result<()> {
        if self.once {
            // A snapshot taken before the removal may still reach us.
            if self.fired.replace(true) {
                return Ok(());
            }
            if let Some(registry) = self.registry.upgrade() {
                registry
                    .borrow_mut()
                    .remove_key(&self.event_type, self.key(), self.capture);
            }
        }

        match &self.callback {
            ScopedCallback::Function(callback) => callback(event, self.data.as_ref()),
            ScopedCallback::Handler(handler) => {
                handler.handle_event_with_data(event, self.data.as_ref())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        hits: Cell<u32>,
    }

    impl EventHandler for Counter {
        fn handle_event(&self, _event: &mut Event) -> anyhow::Result<()> {
            self.hits.set(self.hits.get() + 1);
            Ok(())
        }
    }

    #[test]
    fn clones_are_the_same_listener() {
        let listener = Listener::function(|_| Ok(()));
        let copy = listener.clone();
        assert!(listener.same(&copy));
        assert_eq!(listener, copy);
    }

    #[test]
    fn identical_closures_are_distinct_listeners() {
        let a = Listener::function(|_| Ok(()));
        let b = Listener::function(|_| Ok(()));
        assert!(!a.same(&b));
    }

    #[test]
    fn handler_identity_follows_the_rc() {
        let counter = Rc::new(Counter { hits: Cell::new(0) });
        let a = Listener::handler(counter.clone());
        let b = Listener::handler(counter.clone());
        assert!(a.same(&b));

        let mut event = Event::from("tick");
        a.invoke(&mut event).unwrap();
        b.invoke(&mut event).unwrap();
        assert_eq!(counter.hits.get(), 2);
    }

    #[test]
    fn options_builder_sets_fields() {
        let options = ListenerOptions::new().once().capture().with_data(3_i32);
        assert!(options.once);
        assert!(options.capture);
        assert_eq!(
            options.data.as_deref().and_then(|d| d.downcast_ref::<i32>()),
            Some(&3)
        );
    }

    #[test]
    fn once_proxy_runs_a_single_time_without_registry() {
        let hits = Rc::new(Cell::new(0));
        let seen = hits.clone();
        let proxy = ScopedListener::new(
            ScopedCallback::Function(Rc::new(move |_, _| {
                seen.set(seen.get() + 1);
                Ok(())
            })),
            "tick",
            ListenerOptions::new().once(),
            Weak::new(),
        );

        let mut event = Event::from("tick");
        proxy.handle_event(&mut event).unwrap();
        proxy.handle_event(&mut event).unwrap();
        assert_eq!(hits.get(), 1);
    }
}
