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

//! # Easel Display
//!
//! A reference display tree built on `easel-core`. Every [`DisplayObject`]
//! owns an event dispatcher and exposes its parent, so events dispatched on a
//! leaf travel through capture and bubbling phases across the tree.

#![warn(missing_docs)]

mod display_object;
mod error;

pub use display_object::{events, DisplayObject};
pub use error::DisplayError;
