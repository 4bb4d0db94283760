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

//! Defines the errors raised by display tree mutations.

use std::fmt;

/// An error related to re-parenting display objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayError {
    /// The child is the parent itself or one of its ancestors.
    CyclicHierarchy {
        /// Name of the object the child was being added to.
        parent: String,
        /// Name of the rejected child.
        child: String,
    },
    /// The object to remove is not a child of this parent.
    NotAChild {
        /// Name of the parent the removal was attempted on.
        parent: String,
        /// Name of the object that was not found among its children.
        child: String,
    },
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayError::CyclicHierarchy { parent, child } => {
                write!(
                    f,
                    "Cannot add '{child}' to '{parent}': it would become its own ancestor"
                )
            }
            DisplayError::NotAChild { parent, child } => {
                write!(f, "'{child}' is not a child of '{parent}'")
            }
        }
    }
}

impl std::error::Error for DisplayError {}
