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

use std::sync::Arc;
use std::sync::LazyLock;

use dashmap::DashMap;
use tracing::debug;

use crate::policy::policy_spi::Policy;

/// Global policy registry using DashMap for thread-safe concurrent access.
///
/// Starts empty: policies carry per-stream configuration, so the host
/// constructs and registers them explicitly.
static POLICY_REGISTRY: LazyLock<DashMap<String, Arc<dyn Policy>>> = LazyLock::new(DashMap::new);

/// Registry of gateway policies, keyed by their stable id.
///
/// # Singleton Pattern
///
/// Accessed via `PolicyFactory::instance()`; a single global registry
/// serves all streams.
///
/// # Thread Safety
///
/// Registration and lookup are safe to call concurrently; reads are
/// lock-free.
#[derive(Debug)]
pub struct PolicyFactory;

impl PolicyFactory {
    /// Returns the singleton policy factory instance.
    pub fn instance() -> &'static Self {
        static INSTANCE: LazyLock<PolicyFactory> = LazyLock::new(|| PolicyFactory);
        &INSTANCE
    }

    /// Registers a policy under its id, replacing any previous registration
    /// for that id.
    pub fn register(&self, policy: Arc<dyn Policy>) {
        let policy_id = policy.id().to_string();
        debug!(policy_id = %policy_id, "registering policy");
        POLICY_REGISTRY.insert(policy_id, policy);
    }

    /// Removes a policy by id, returning it if it was registered.
    pub fn unregister(&self, policy_id: &str) -> Option<Arc<dyn Policy>> {
        let removed = POLICY_REGISTRY.remove(policy_id).map(|(_, v)| v);
        if removed.is_some() {
            debug!(policy_id = %policy_id, "unregistered policy");
        }
        removed
    }

    /// Retrieves a registered policy by id.
    pub fn get(&self, policy_id: &str) -> Option<Arc<dyn Policy>> {
        POLICY_REGISTRY.get(policy_id).map(|entry| Arc::clone(&*entry))
    }

    /// Returns the ids of all registered policies.
    pub fn registered_ids(&self) -> Vec<String> {
        POLICY_REGISTRY.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Returns the number of registered policies.
    pub fn count(&self) -> usize {
        POLICY_REGISTRY.len()
    }
}
