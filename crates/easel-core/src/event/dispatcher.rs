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

//! The dispatch capability and the capture/target/bubble traversal.

use super::config::DispatcherConfig;
use super::error::DispatchError;
use super::listener::{
    EventHandler, Listener, ListenerData, ListenerOptions, ScopedCallback, ScopedListener,
};
use super::registry::ListenerRegistry;
use super::value::{Event, EventInit, EventPhase};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use uuid::Uuid;

/// A unique identifier for one [`EventDispatcher`].
///
/// Events record their `target` and `current_target` as dispatcher ids so that
/// listeners can tell which object they are running on without holding a
/// reference to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DispatcherId(Uuid);

impl DispatcherId {
    /// Creates a new, random (version 4) `DispatcherId`.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DispatcherId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DispatcherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Owns the listener registry of one object.
///
/// Hosts compose an `EventDispatcher` and implement [`Dispatchable`] to gain
/// the full listener API. A bare dispatcher is itself `Dispatchable` and acts
/// as a single-node propagation path.
#[derive(Debug)]
pub struct EventDispatcher {
    id: DispatcherId,
    config: DispatcherConfig,
    registry: Rc<RefCell<ListenerRegistry>>,
}

impl EventDispatcher {
    /// Creates a dispatcher with the default configuration.
    pub fn new() -> Self {
        Self::with_config(DispatcherConfig::default())
    }

    /// Creates a dispatcher with an explicit configuration.
    pub fn with_config(config: DispatcherConfig) -> Self {
        Self {
            id: DispatcherId::new(),
            config,
            registry: Rc::new(RefCell::new(ListenerRegistry::new())),
        }
    }

    /// The identifier events carry as `target` / `current_target` for this dispatcher.
    pub fn id(&self) -> DispatcherId {
        self.id
    }

    /// The configuration this dispatcher was created with.
    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    /// Number of listeners registered for `event_type` in both phases.
    pub fn listener_count(&self, event_type: &str) -> usize {
        self.registry.borrow().listener_count(event_type)
    }

    fn register_scoped(
        &self,
        event_type: &str,
        callback: ScopedCallback,
        options: ListenerOptions,
    ) -> Listener {
        let capture = options.capture;
        let proxy = ScopedListener::new(
            callback,
            event_type,
            options,
            Rc::downgrade(&self.registry),
        );
        let listener = Listener::handler(Rc::new(proxy));
        self.registry
            .borrow_mut()
            .add(event_type, listener.clone(), capture);
        log::debug!(
            "Registered scoped {listener:?} for '{event_type}' on {} (capture: {capture}).",
            self.id
        );
        listener
    }

    /// Walks the propagation path. `ancestors` runs from the parent to the root.
    fn propagate(
        &self,
        event: &mut Event,
        ancestors: &[Rc<dyn Dispatchable>],
    ) -> anyhow::Result<()> {
        for node in ancestors.iter().rev() {
            if event.is_propagation_stopped() {
                return Ok(());
            }
            node.dispatcher()
                .invoke_listeners(event, EventPhase::Capturing)?;
        }

        if event.is_propagation_stopped() {
            return Ok(());
        }
        self.invoke_listeners(event, EventPhase::AtTarget)?;

        for node in ancestors {
            if event.is_propagation_stopped() {
                return Ok(());
            }
            node.dispatcher()
                .invoke_listeners(event, EventPhase::Bubbling)?;
        }
        Ok(())
    }

    /// Runs this node's listeners for one phase.
    ///
    /// Capture listeners only run during [`EventPhase::Capturing`]; the target
    /// and bubbling phases use the bubble bucket.
    fn invoke_listeners(&self, event: &mut Event, phase: EventPhase) -> anyhow::Result<()> {
        let capture = phase == EventPhase::Capturing;
        let listeners = self
            .registry
            .borrow()
            .snapshot(event.event_type(), capture);
        if listeners.is_empty() {
            return Ok(());
        }

        event.enter(self.id, phase);
        for listener in &listeners {
            if event.is_immediate_propagation_stopped() {
                break;
            }
            if self.config.trace_dispatch {
                log::trace!(
                    "'{}' {:?} on {}: invoking {:?}",
                    event.event_type(),
                    phase,
                    self.id,
                    listener
                );
            }

            listener.invoke(event)?;

            if event.take_removed() {
                self.registry
                    .borrow_mut()
                    .remove(event.event_type(), listener, capture);
            }
        }
        Ok(())
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[EventDispatcher {}]", self.id)
    }
}

/// Collects `start` and its ancestors, nearest first.
fn collect_ancestors(
    start: Option<Rc<dyn Dispatchable>>,
    event_type: &str,
    limit: usize,
) -> Result<Vec<Rc<dyn Dispatchable>>, DispatchError> {
    let mut ancestors = Vec::new();
    let mut cursor = start;
    while let Some(node) = cursor {
        if ancestors.len() == limit {
            log::warn!("Refusing to dispatch '{event_type}': parent chain exceeds {limit}.");
            return Err(DispatchError::PropagationDepthExceeded {
                event_type: event_type.to_owned(),
                limit,
            });
        }
        cursor = node.parent();
        ancestors.push(node);
    }
    Ok(ancestors)
}

/// The event-dispatch capability.
///
/// Implementors supply their [`EventDispatcher`] and, if they sit in a
/// hierarchy, their `parent`. Every listener operation is provided.
pub trait Dispatchable {
    /// The dispatcher that owns this object's listeners.
    fn dispatcher(&self) -> &EventDispatcher;

    /// The next object outward on the bubbling path, if any.
    fn parent(&self) -> Option<Rc<dyn Dispatchable>> {
        None
    }

    /// Registers `listener` for `event_type`.
    ///
    /// Registering a listener that is already present for the same type and
    /// phase moves it to the end of the call order. Returns `listener` so it
    /// can be kept for later removal.
    ///
    /// ## Arguments
    /// * `event_type` - The event name to listen for.
    /// * `listener` - The callable or handler object to invoke.
    /// * `use_capture` - Listen during the capture phase instead of at-target/bubbling.
    fn add_event_listener(&self, event_type: &str, listener: Listener, use_capture: bool) -> Listener {
        let dispatcher = self.dispatcher();
        dispatcher
            .registry
            .borrow_mut()
            .add(event_type, listener.clone(), use_capture);
        log::debug!(
            "Registered {listener:?} for '{event_type}' on {} (capture: {use_capture}).",
            dispatcher.id
        );
        listener
    }

    /// Registers a callback through a proxy that binds `options.data` and,
    /// with `options.once`, removes itself before its first invocation runs.
    ///
    /// Returns the proxy; pass it to [`off`](Self::off) to remove it.
    fn on<F>(&self, event_type: &str, callback: F, options: ListenerOptions) -> Listener
    where
        F: Fn(&mut Event, Option<&ListenerData>) -> anyhow::Result<()> + 'static,
        Self: Sized,
    {
        self.dispatcher().register_scoped(
            event_type,
            ScopedCallback::Function(Rc::new(callback)),
            options,
        )
    }

    /// Handler-object form of [`on`](Self::on); the handler receives the bound
    /// data through [`EventHandler::handle_event_with_data`].
    fn on_handler(
        &self,
        event_type: &str,
        handler: Rc<dyn EventHandler>,
        options: ListenerOptions,
    ) -> Listener {
        self.dispatcher()
            .register_scoped(event_type, ScopedCallback::Handler(handler), options)
    }

    /// Removes `listener` from `(event_type, use_capture)`. Returns `true` if it was registered.
    ///
    /// Safe to call from inside a listener while this object is dispatching.
    fn remove_event_listener(&self, event_type: &str, listener: &Listener, use_capture: bool) -> bool {
        let dispatcher = self.dispatcher();
        let removed = dispatcher
            .registry
            .borrow_mut()
            .remove(event_type, listener, use_capture);
        if removed {
            log::debug!(
                "Removed {listener:?} for '{event_type}' on {} (capture: {use_capture}).",
                dispatcher.id
            );
        }
        removed
    }

    /// Alias of [`remove_event_listener`](Self::remove_event_listener).
    fn off(&self, event_type: &str, listener: &Listener, use_capture: bool) -> bool {
        self.remove_event_listener(event_type, listener, use_capture)
    }

    /// Removes all listeners for `event_type`, or for every type when `None`.
    fn remove_all_event_listeners(&self, event_type: Option<&str>) {
        let dispatcher = self.dispatcher();
        let mut registry = dispatcher.registry.borrow_mut();
        match event_type {
            Some(event_type) => registry.clear(event_type),
            None => registry.clear_all(),
        }
        log::debug!(
            "Cleared {} listeners on {}.",
            event_type.unwrap_or("all"),
            dispatcher.id
        );
    }

    /// Returns `true` if a capture or bubble listener is registered for `event_type`.
    fn has_event_listener(&self, event_type: &str) -> bool {
        self.dispatcher().registry.borrow().has(event_type)
    }

    /// Returns `true` if this object or any ancestor listens for `event_type`.
    fn will_trigger(&self, event_type: &str) -> bool {
        if self.has_event_listener(event_type) {
            return true;
        }

        let limit = self.dispatcher().config.max_propagation_depth;
        let mut cursor = self.parent();
        let mut depth = 0;
        while let Some(node) = cursor {
            if depth == limit {
                break;
            }
            if node.has_event_listener(event_type) {
                return true;
            }
            depth += 1;
            cursor = node.parent();
        }
        false
    }

    /// Dispatches `event` with this object as its target.
    ///
    /// A bubbling event visits capture listeners from the root inward, then
    /// the target's listeners, then bubble listeners from the parent outward.
    /// A non-bubbling event only visits the target. An event that already has
    /// a target is left untouched: a [`Event::clone_fresh`] copy is dispatched
    /// in its place, so a listener can forward the event it is handling.
    ///
    /// ## Returns
    /// `Ok(false)` if a listener called `prevent_default` on a cancelable
    /// event, `Ok(true)` otherwise. A listener error stops the dispatch and is
    /// returned unchanged.
    fn dispatch_event(&self, event: &mut Event) -> anyhow::Result<bool> {
        if event.target().is_some() {
            let mut copy = event.clone_fresh();
            return self.dispatch_event(&mut copy);
        }

        let dispatcher = self.dispatcher();

        let ancestors = if event.bubbles() {
            collect_ancestors(
                self.parent(),
                event.event_type(),
                dispatcher.config.max_propagation_depth,
            )?
        } else {
            Vec::new()
        };

        event.begin_dispatch(dispatcher.id);
        let outcome = dispatcher.propagate(event, &ancestors);
        event.end_dispatch();
        outcome?;

        Ok(!event.is_default_prevented())
    }

    /// Builds an event from `event_type` and `init` and dispatches it.
    ///
    /// Returns `Ok(true)` without creating the event when nothing on the
    /// propagation path listens for `event_type`.
    fn dispatch(&self, event_type: &str, init: EventInit) -> anyhow::Result<bool> {
        let reachable = if init.bubbles {
            self.will_trigger(event_type)
        } else {
            self.has_event_listener(event_type)
        };
        if !reachable {
            return Ok(true);
        }

        let mut event = Event::new(event_type, init);
        self.dispatch_event(&mut event)
    }
}

impl Dispatchable for EventDispatcher {
    fn dispatcher(&self) -> &EventDispatcher {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::cell::Cell;

    fn counting(hits: &Rc<Cell<u32>>) -> Listener {
        let hits = hits.clone();
        Listener::function(move |_| {
            hits.set(hits.get() + 1);
            Ok(())
        })
    }

    #[test]
    fn duplicate_registration_fires_once() {
        let dispatcher = EventDispatcher::new();
        let hits = Rc::new(Cell::new(0));
        let listener = counting(&hits);

        dispatcher.add_event_listener("tick", listener.clone(), false);
        dispatcher.add_event_listener("tick", listener.clone(), false);
        dispatcher.dispatch_event(&mut Event::from("tick")).unwrap();

        assert_eq!(hits.get(), 1);
        assert_eq!(dispatcher.listener_count("tick"), 1);
    }

    #[test]
    fn add_event_listener_returns_the_listener() {
        let dispatcher = EventDispatcher::new();
        let listener = Listener::function(|_| Ok(()));
        let returned = dispatcher.add_event_listener("tick", listener.clone(), false);
        assert!(returned.same(&listener));
        assert!(dispatcher.off("tick", &returned, false));
        assert!(!dispatcher.has_event_listener("tick"));
    }

    #[test]
    fn capture_listeners_do_not_fire_at_target() {
        let dispatcher = EventDispatcher::new();
        let hits = Rc::new(Cell::new(0));
        dispatcher.add_event_listener("tick", counting(&hits), true);

        dispatcher.dispatch_event(&mut Event::from("tick")).unwrap();
        assert_eq!(hits.get(), 0);
        assert!(dispatcher.has_event_listener("tick"));
    }

    #[test]
    fn once_listener_fires_a_single_time_and_leaves_the_registry() {
        let dispatcher = EventDispatcher::new();
        let hits = Rc::new(Cell::new(0));
        let seen = hits.clone();
        dispatcher.on(
            "tick",
            move |_, _| {
                seen.set(seen.get() + 1);
                Ok(())
            },
            ListenerOptions::new().once(),
        );

        for _ in 0..3 {
            dispatcher.dispatch_event(&mut Event::from("tick")).unwrap();
        }
        assert_eq!(hits.get(), 1);
        assert!(!dispatcher.has_event_listener("tick"));
    }

    #[test]
    fn once_listener_is_gone_while_it_runs() {
        let dispatcher = Rc::new(EventDispatcher::new());
        let observed = Rc::new(Cell::new(true));
        let (probe, flag) = (dispatcher.clone(), observed.clone());
        dispatcher.on(
            "tick",
            move |_, _| {
                flag.set(probe.has_event_listener("tick"));
                Ok(())
            },
            ListenerOptions::new().once(),
        );

        dispatcher.dispatch_event(&mut Event::from("tick")).unwrap();
        assert!(!observed.get());
    }

    #[test]
    fn once_listener_survives_reentrant_dispatch() {
        let dispatcher = Rc::new(EventDispatcher::new());
        let hits = Rc::new(Cell::new(0));

        let reentrant = dispatcher.clone();
        dispatcher.add_event_listener(
            "tick",
            Listener::function(move |event| {
                if event.data::<bool>().is_none() {
                    reentrant.dispatch_event(&mut Event::from("tick").with_data(true))?;
                }
                Ok(())
            }),
            false,
        );
        let seen = hits.clone();
        dispatcher.on(
            "tick",
            move |_, _| {
                seen.set(seen.get() + 1);
                Ok(())
            },
            ListenerOptions::new().once(),
        );

        dispatcher.dispatch_event(&mut Event::from("tick")).unwrap();
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn on_passes_bound_data() {
        let dispatcher = EventDispatcher::new();
        let received = Rc::new(Cell::new(0));
        let sink = received.clone();
        dispatcher.on(
            "score",
            move |_, data| {
                let bonus = data.and_then(|d| d.downcast_ref::<u32>()).copied();
                sink.set(bonus.unwrap_or_default());
                Ok(())
            },
            ListenerOptions::new().with_data(50_u32),
        );

        dispatcher.dispatch_event(&mut Event::from("score")).unwrap();
        assert_eq!(received.get(), 50);
    }

    #[test]
    fn on_proxy_can_be_removed_with_off() {
        let dispatcher = EventDispatcher::new();
        let hits = Rc::new(Cell::new(0));
        let seen = hits.clone();
        let proxy = dispatcher.on(
            "tick",
            move |_, _| {
                seen.set(seen.get() + 1);
                Ok(())
            },
            ListenerOptions::new(),
        );

        assert!(dispatcher.off("tick", &proxy, false));
        dispatcher.dispatch_event(&mut Event::from("tick")).unwrap();
        assert_eq!(hits.get(), 0);
    }

    struct Tally {
        total: Cell<u32>,
    }

    impl EventHandler for Tally {
        fn handle_event(&self, _event: &mut Event) -> anyhow::Result<()> {
            self.total.set(self.total.get() + 1);
            Ok(())
        }

        fn handle_event_with_data(
            &self,
            event: &mut Event,
            data: Option<&ListenerData>,
        ) -> anyhow::Result<()> {
            match data.and_then(|d| d.downcast_ref::<u32>()) {
                Some(amount) => {
                    self.total.set(self.total.get() + amount);
                    Ok(())
                }
                None => self.handle_event(event),
            }
        }
    }

    #[test]
    fn handler_objects_receive_events() {
        let dispatcher = EventDispatcher::new();
        let tally = Rc::new(Tally {
            total: Cell::new(0),
        });
        dispatcher.add_event_listener("tick", Listener::handler(tally.clone()), false);
        dispatcher.on_handler("tick", tally.clone(), ListenerOptions::new().with_data(10_u32));

        dispatcher.dispatch_event(&mut Event::from("tick")).unwrap();
        assert_eq!(tally.total.get(), 11);
    }

    #[test]
    fn event_remove_deregisters_the_running_listener() {
        let dispatcher = EventDispatcher::new();
        let hits = Rc::new(Cell::new(0));
        let seen = hits.clone();
        dispatcher.add_event_listener(
            "tick",
            Listener::function(move |event| {
                seen.set(seen.get() + 1);
                event.remove();
                Ok(())
            }),
            false,
        );

        dispatcher.dispatch_event(&mut Event::from("tick")).unwrap();
        dispatcher.dispatch_event(&mut Event::from("tick")).unwrap();
        assert_eq!(hits.get(), 1);
        assert!(!dispatcher.has_event_listener("tick"));
    }

    #[test]
    fn removal_during_dispatch_does_not_skip_others() {
        let dispatcher = Rc::new(EventDispatcher::new());
        let order = Rc::new(RefCell::new(Vec::new()));

        let log_b = order.clone();
        let b = Listener::function(move |_| {
            log_b.borrow_mut().push("b");
            Ok(())
        });
        let log_c = order.clone();
        let c = Listener::function(move |_| {
            log_c.borrow_mut().push("c");
            Ok(())
        });

        let (host, log_a, victim) = (dispatcher.clone(), order.clone(), b.clone());
        let a = Listener::function(move |_| {
            log_a.borrow_mut().push("a");
            host.off("tick", &victim, false);
            Ok(())
        });

        dispatcher.add_event_listener("tick", a, false);
        dispatcher.add_event_listener("tick", b, false);
        dispatcher.add_event_listener("tick", c, false);

        dispatcher.dispatch_event(&mut Event::from("tick")).unwrap();
        assert_eq!(*order.borrow(), vec!["a", "b", "c"]);

        order.borrow_mut().clear();
        dispatcher.dispatch_event(&mut Event::from("tick")).unwrap();
        assert_eq!(*order.borrow(), vec!["a", "c"]);
    }

    #[test]
    fn listeners_added_during_dispatch_wait_for_the_next_one() {
        let dispatcher = Rc::new(EventDispatcher::new());
        let hits = Rc::new(Cell::new(0));

        let (host, late) = (dispatcher.clone(), counting(&hits));
        dispatcher.add_event_listener(
            "tick",
            Listener::function(move |_| {
                host.add_event_listener("tick", late.clone(), false);
                Ok(())
            }),
            false,
        );

        dispatcher.dispatch_event(&mut Event::from("tick")).unwrap();
        assert_eq!(hits.get(), 0);
        dispatcher.dispatch_event(&mut Event::from("tick")).unwrap();
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn stop_immediate_propagation_skips_remaining_listeners() {
        let dispatcher = EventDispatcher::new();
        let hits = Rc::new(Cell::new(0));
        dispatcher.add_event_listener(
            "tick",
            Listener::function(|event| {
                event.stop_immediate_propagation();
                Ok(())
            }),
            false,
        );
        dispatcher.add_event_listener("tick", counting(&hits), false);

        dispatcher.dispatch_event(&mut Event::from("tick")).unwrap();
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn stop_propagation_keeps_remaining_listeners_at_the_node() {
        let dispatcher = EventDispatcher::new();
        let hits = Rc::new(Cell::new(0));
        dispatcher.add_event_listener(
            "tick",
            Listener::function(|event| {
                event.stop_propagation();
                Ok(())
            }),
            false,
        );
        dispatcher.add_event_listener("tick", counting(&hits), false);

        dispatcher.dispatch_event(&mut Event::from("tick")).unwrap();
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn dispatch_returns_false_only_when_cancelable_default_is_prevented() {
        let dispatcher = EventDispatcher::new();
        dispatcher.add_event_listener(
            "submit",
            Listener::function(|event| {
                event.prevent_default();
                Ok(())
            }),
            false,
        );

        let cancelable = EventInit::new(false, true);
        assert!(!dispatcher.dispatch("submit", cancelable).unwrap());
        assert!(dispatcher.dispatch("submit", EventInit::default()).unwrap());
        assert!(dispatcher.dispatch("unheard", cancelable).unwrap());
    }

    #[test]
    fn listener_errors_abort_and_propagate() {
        let dispatcher = EventDispatcher::new();
        let hits = Rc::new(Cell::new(0));
        dispatcher.add_event_listener("tick", Listener::function(|_| Err(anyhow!("boom"))), false);
        dispatcher.add_event_listener("tick", counting(&hits), false);

        let mut event = Event::from("tick");
        let err = dispatcher.dispatch_event(&mut event).unwrap_err();
        assert_eq!(err.to_string(), "boom");
        assert_eq!(hits.get(), 0);
        assert_eq!(event.phase(), EventPhase::None);
    }

    #[test]
    fn dispatch_sets_target_and_resets_phase() {
        let dispatcher = EventDispatcher::new();
        let seen = Rc::new(RefCell::new(None));
        let sink = seen.clone();
        dispatcher.add_event_listener(
            "tick",
            Listener::function(move |event| {
                *sink.borrow_mut() = Some((event.target(), event.current_target(), event.phase()));
                Ok(())
            }),
            false,
        );

        let mut event = Event::from("tick");
        dispatcher.dispatch_event(&mut event).unwrap();

        let id = Some(dispatcher.id());
        assert_eq!(*seen.borrow(), Some((id, id, EventPhase::AtTarget)));
        assert_eq!(event.target(), id);
        assert_eq!(event.current_target(), None);
        assert_eq!(event.phase(), EventPhase::None);
    }

    #[test]
    fn redispatching_sends_a_fresh_copy() {
        let dispatcher = EventDispatcher::new();
        let stopped_on_entry = Rc::new(RefCell::new(Vec::new()));
        let sink = stopped_on_entry.clone();
        dispatcher.add_event_listener(
            "tick",
            Listener::function(move |event| {
                sink.borrow_mut().push(event.is_immediate_propagation_stopped());
                event.stop_immediate_propagation();
                Ok(())
            }),
            false,
        );

        let mut event = Event::from("tick");
        dispatcher.dispatch_event(&mut event).unwrap();
        dispatcher.dispatch_event(&mut event).unwrap();
        assert_eq!(*stopped_on_entry.borrow(), vec![false, false]);

        let hits = Rc::new(Cell::new(0));
        let other = EventDispatcher::new();
        other.add_event_listener("tick", counting(&hits), false);
        other.dispatch_event(&mut event).unwrap();
        assert_eq!(hits.get(), 1);
        assert_eq!(
            event.target(),
            Some(dispatcher.id()),
            "Re-dispatching sends a copy and leaves the caller's event alone"
        );
    }

    #[test]
    fn trace_dispatch_runs_listeners_unchanged() {
        let _ = env_logger::Builder::new()
            .filter_level(log::LevelFilter::Trace)
            .is_test(true)
            .try_init();
        let dispatcher = EventDispatcher::with_config(DispatcherConfig {
            trace_dispatch: true,
            ..DispatcherConfig::default()
        });
        assert!(dispatcher.config().trace_dispatch);

        let hits = Rc::new(Cell::new(0));
        dispatcher.add_event_listener("tick", counting(&hits), false);
        dispatcher.add_event_listener(
            "tick",
            Listener::function(|event| {
                event.prevent_default();
                Ok(())
            }),
            false,
        );

        let proceed = dispatcher
            .dispatch("tick", EventInit::new(false, true))
            .unwrap();
        assert!(!proceed);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn remove_all_event_listeners_by_type_and_globally() {
        let dispatcher = EventDispatcher::new();
        dispatcher.add_event_listener("a", Listener::function(|_| Ok(())), false);
        dispatcher.add_event_listener("a", Listener::function(|_| Ok(())), true);
        dispatcher.add_event_listener("b", Listener::function(|_| Ok(())), false);

        dispatcher.remove_all_event_listeners(Some("a"));
        assert!(!dispatcher.has_event_listener("a"));
        assert!(dispatcher.has_event_listener("b"));

        dispatcher.remove_all_event_listeners(None);
        assert!(!dispatcher.has_event_listener("b"));
    }

    #[test]
    fn bare_dispatcher_will_trigger_only_its_own_listeners() {
        let dispatcher = EventDispatcher::new();
        assert!(!dispatcher.will_trigger("tick"));
        dispatcher.add_event_listener("tick", Listener::function(|_| Ok(())), true);
        assert!(dispatcher.will_trigger("tick"));
    }
}
