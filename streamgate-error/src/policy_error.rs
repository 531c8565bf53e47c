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

/// Error types for policy lifecycle operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Invalid policy configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Policy not registered: {0}")]
    NotRegistered(String),
}

impl PolicyError {
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        PolicyError::InvalidConfiguration(reason.into())
    }

    pub fn not_registered(policy_id: impl Into<String>) -> Self {
        PolicyError::NotRegistered(policy_id.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_error() {
        let err = PolicyError::invalid_configuration("missing filter");
        assert_eq!(err.to_string(), "Invalid policy configuration: missing filter");

        let err = PolicyError::not_registered("message-filtering");
        assert_eq!(err.to_string(), "Policy not registered: message-filtering");
    }
}
