// Copyright 2025 The StreamGate Rust Authors
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

use cheetah_string::CheetahString;
use serde::Deserialize;
use serde::Serialize;
use streamgate_error::PolicyError;
use streamgate_error::PolicyResult;

fn default_ack_filtered_message() -> bool {
    true
}

/// Immutable per-stream settings of the message filtering policy.
///
/// Constructed once from external configuration before stream processing
/// begins; read-only thereafter. Note the asymmetric defaults: filtered
/// messages are acknowledged unless configured otherwise, while evaluation
/// failures keep messages flowing (fail-open) unless configured otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageFilteringConfig {
    /// Filter expression; may itself evaluate to another expression string.
    filter: CheetahString,

    /// Whether filtered-out messages are acknowledged before being dropped.
    #[serde(default = "default_ack_filtered_message")]
    ack_filtered_message: bool,

    /// Whether an evaluation failure counts as "filter says drop".
    #[serde(default)]
    filter_message_on_filtering_error: bool,
}

impl MessageFilteringConfig {
    pub fn new(filter: impl Into<CheetahString>) -> Self {
        Self {
            filter: filter.into(),
            ack_filtered_message: default_ack_filtered_message(),
            filter_message_on_filtering_error: false,
        }
    }

    /// Parses the host-supplied JSON configuration.
    pub fn from_json(json: &str) -> PolicyResult<Self> {
        serde_json::from_str(json).map_err(|e| PolicyError::invalid_configuration(e.to_string()))
    }

    #[inline]
    pub fn filter(&self) -> &CheetahString {
        &self.filter
    }

    #[inline]
    pub fn ack_filtered_message(&self) -> bool {
        self.ack_filtered_message
    }

    #[inline]
    pub fn filter_message_on_filtering_error(&self) -> bool {
        self.filter_message_on_filtering_error
    }

    pub fn set_ack_filtered_message(&mut self, ack_filtered_message: bool) {
        self.ack_filtered_message = ack_filtered_message;
    }

    pub fn set_filter_message_on_filtering_error(&mut self, filter_message_on_filtering_error: bool) {
        self.filter_message_on_filtering_error = filter_message_on_filtering_error;
    }
}
