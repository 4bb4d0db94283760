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

//! The display object node and its parent/child bookkeeping.

use crate::error::DisplayError;
use easel_core::{Dispatchable, DispatcherConfig, EventDispatcher, EventInit};
use std::cell::RefCell;
use std::fmt;
use std::ptr;
use std::rc::{Rc, Weak};

/// Lifecycle event types emitted by the display tree.
pub mod events {
    /// Dispatched on a child right after it is attached to a parent. Does not bubble.
    pub const ADDED: &str = "added";
    /// Dispatched on a child right after it is detached from its parent. Does not bubble.
    pub const REMOVED: &str = "removed";
}

/// A node of the display tree.
///
/// Nodes are shared through `Rc`; a child holds a weak link to its parent and
/// the parent holds its children in paint order.
pub struct DisplayObject {
    name: String,
    dispatcher: EventDispatcher,
    parent: RefCell<Weak<DisplayObject>>,
    children: RefCell<Vec<Rc<DisplayObject>>>,
}

impl DisplayObject {
    /// Creates a detached node.
    pub fn new(name: impl Into<String>) -> Rc<Self> {
        Self::with_config(name, DispatcherConfig::default())
    }

    /// Creates a detached node whose dispatcher uses `config`.
    pub fn with_config(name: impl Into<String>, config: DispatcherConfig) -> Rc<Self> {
        Rc::new(Self {
            name: name.into(),
            dispatcher: EventDispatcher::with_config(config),
            parent: RefCell::new(Weak::new()),
            children: RefCell::new(Vec::new()),
        })
    }

    /// The node's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The node's parent, if attached.
    pub fn parent_object(&self) -> Option<Rc<DisplayObject>> {
        self.parent.borrow().upgrade()
    }

    /// A copy of the child list in paint order.
    pub fn children(&self) -> Vec<Rc<DisplayObject>> {
        self.children.borrow().clone()
    }

    /// Number of direct children.
    pub fn num_children(&self) -> usize {
        self.children.borrow().len()
    }

    /// Parents from nearest to root.
    pub fn ancestors(&self) -> Vec<Rc<DisplayObject>> {
        let mut ancestors = Vec::new();
        let mut cursor = self.parent_object();
        while let Some(node) = cursor {
            cursor = node.parent_object();
            ancestors.push(node);
        }
        ancestors
    }

    /// Returns `true` if `other` is this node or one of its descendants.
    pub fn contains(&self, other: &DisplayObject) -> bool {
        ptr::eq(self, other)
            || other
                .ancestors()
                .iter()
                .any(|ancestor| ptr::eq(Rc::as_ptr(ancestor), self))
    }

    /// Appends `child`, detaching it from any previous parent first.
    ///
    /// The previous parent (if any) emits [`events::REMOVED`] on the child, then
    /// [`events::ADDED`] is dispatched on it once it is attached here. Listener
    /// errors are returned after the tree has already been updated.
    pub fn add_child(self: &Rc<Self>, child: &Rc<DisplayObject>) -> anyhow::Result<()> {
        if child.contains(self) {
            return Err(DisplayError::CyclicHierarchy {
                parent: self.name.clone(),
                child: child.name.clone(),
            }
            .into());
        }

        if let Some(previous) = child.parent_object() {
            previous.remove_child(child)?;
        }

        *child.parent.borrow_mut() = Rc::downgrade(self);
        self.children.borrow_mut().push(child.clone());
        log::debug!("Attached '{}' to '{}'.", child.name, self.name);

        child.dispatch(events::ADDED, EventInit::default())?;
        Ok(())
    }

    /// Detaches `child` and dispatches [`events::REMOVED`] on it.
    pub fn remove_child(&self, child: &Rc<DisplayObject>) -> anyhow::Result<()> {
        let index = self
            .children
            .borrow()
            .iter()
            .position(|existing| Rc::ptr_eq(existing, child));
        let Some(index) = index else {
            return Err(DisplayError::NotAChild {
                parent: self.name.clone(),
                child: child.name.clone(),
            }
            .into());
        };

        self.children.borrow_mut().remove(index);
        *child.parent.borrow_mut() = Weak::new();
        log::debug!("Detached '{}' from '{}'.", child.name, self.name);

        child.dispatch(events::REMOVED, EventInit::default())?;
        Ok(())
    }

    /// Detaches every child, then dispatches [`events::REMOVED`] on each in order.
    pub fn remove_all_children(&self) -> anyhow::Result<()> {
        let children = std::mem::take(&mut *self.children.borrow_mut());
        for child in &children {
            *child.parent.borrow_mut() = Weak::new();
        }
        for child in &children {
            child.dispatch(events::REMOVED, EventInit::default())?;
        }
        Ok(())
    }
}

impl Dispatchable for DisplayObject {
    fn dispatcher(&self) -> &EventDispatcher {
        &self.dispatcher
    }

    fn parent(&self) -> Option<Rc<dyn Dispatchable>> {
        self.parent_object()
            .map(|parent| parent as Rc<dyn Dispatchable>)
    }
}

impl fmt::Debug for DisplayObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayObject")
            .field("name", &self.name)
            .field("id", &self.dispatcher.id())
            .field(
                "parent",
                &self.parent_object().map(|parent| parent.name.clone()),
            )
            .field("children", &self.num_children())
            .finish()
    }
}

impl fmt::Display for DisplayObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[DisplayObject (name={})]", self.name)
    }
}
