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

//! The per-instance listener store.

use super::listener::{Listener, ListenerKey};
use std::collections::HashMap;

/// Capture-phase and bubble/target-phase listeners, keyed by event type.
///
/// Each per-type list keeps insertion order and holds a given listener at most
/// once. Lists that become empty are dropped so that
/// [`has`](Self::has) stays a simple key lookup.
#[derive(Debug, Default)]
pub(crate) struct ListenerRegistry {
    capture: HashMap<String, Vec<Listener>>,
    bubble: HashMap<String, Vec<Listener>>,
}

impl ListenerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    fn bucket(&self, capture: bool) -> &HashMap<String, Vec<Listener>> {
        if capture {
            &self.capture
        } else {
            &self.bubble
        }
    }

    fn bucket_mut(&mut self, capture: bool) -> &mut HashMap<String, Vec<Listener>> {
        if capture {
            &mut self.capture
        } else {
            &mut self.bubble
        }
    }

    /// Appends `listener` for `(event_type, capture)`.
    ///
    /// A listener that is already registered for the pair is moved to the end
    /// rather than duplicated.
    pub fn add(&mut self, event_type: &str, listener: Listener, capture: bool) {
        self.remove_key(event_type, listener.key(), capture);
        self.bucket_mut(capture)
            .entry(event_type.to_owned())
            .or_default()
            .push(listener);
    }

    /// Removes the first entry matching `listener` for `(event_type, capture)`.
    ///
    /// Returns `true` if an entry was removed.
    pub fn remove(&mut self, event_type: &str, listener: &Listener, capture: bool) -> bool {
        self.remove_key(event_type, listener.key(), capture)
    }

    pub(crate) fn remove_key(&mut self, event_type: &str, key: ListenerKey, capture: bool) -> bool {
        let bucket = self.bucket_mut(capture);
        let Some(listeners) = bucket.get_mut(event_type) else {
            return false;
        };
        let Some(pos) = listeners.iter().position(|entry| entry.key() == key) else {
            return false;
        };

        listeners.remove(pos);
        if listeners.is_empty() {
            bucket.remove(event_type);
        }
        true
    }

    /// Removes every listener for `event_type` from both buckets.
    pub fn clear(&mut self, event_type: &str) {
        self.capture.remove(event_type);
        self.bubble.remove(event_type);
    }

    /// Removes every listener of every type.
    pub fn clear_all(&mut self) {
        self.capture.clear();
        self.bubble.clear();
    }

    /// Returns `true` if either bucket has a listener for `event_type`.
    pub fn has(&self, event_type: &str) -> bool {
        self.capture.contains_key(event_type) || self.bubble.contains_key(event_type)
    }

    /// Number of listeners for `event_type`, both phases combined.
    pub fn listener_count(&self, event_type: &str) -> usize {
        [&self.capture, &self.bubble]
            .iter()
            .filter_map(|bucket| bucket.get(event_type))
            .map(Vec::len)
            .sum()
    }

    /// Copies the current call order for `(event_type, capture)`.
    ///
    /// Dispatch iterates the copy, so registrations made by listeners do not
    /// disturb the list being walked.
    pub fn snapshot(&self, event_type: &str, capture: bool) -> Vec<Listener> {
        self.bucket(capture)
            .get(event_type)
            .cloned()
            .unwrap_or_default()
    }
}
