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

use serde::{Deserialize, Serialize};

/// Configuration for an [`EventDispatcher`](super::EventDispatcher).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatcherConfig {
    /// Maximum number of ancestors walked when building a propagation path.
    /// A deeper (or cyclic) `parent` chain fails the dispatch instead of looping.
    pub max_propagation_depth: usize,
    /// Emit a `trace` log line for every listener invocation.
    pub trace_dispatch: bool,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            max_propagation_depth: 1024,
            trace_dispatch: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: DispatcherConfig =
            serde_json::from_str(r#"{ "trace_dispatch": true }"#).unwrap();
        assert!(config.trace_dispatch);
        assert_eq!(
            config.max_propagation_depth,
            DispatcherConfig::default().max_propagation_depth
        );
    }
}
