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

use std::collections::HashMap;

use ahash::RandomState;
use cheetah_string::CheetahString;
use streamgate_common::Message;

/// Variable lookup backing a template-engine implementation.
///
/// Engine implementations resolve named bindings through this trait; the
/// policy itself never touches it directly.
pub trait EvaluationContext {
    /// Get value by name from context.
    fn get(&self, name: &str) -> Option<&CheetahString>;

    /// Get all context variables as a key-value mapping.
    fn key_values(&self) -> Option<HashMap<CheetahString, CheetahString>>;
}

/// [`EvaluationContext`] backed by message (or stream) properties.
#[derive(Debug, Clone, Default)]
pub struct MessageEvaluationContext {
    properties: HashMap<CheetahString, CheetahString, RandomState>,
}

impl MessageEvaluationContext {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn from_properties(properties: HashMap<CheetahString, CheetahString, RandomState>) -> Self {
        Self { properties }
    }

    /// Builds a context from the properties attached to a message.
    pub fn from_message(message: &dyn Message) -> Self {
        Self {
            properties: message.properties().clone(),
        }
    }

    /// Sets a variable, returning the previous value for the key if any.
    #[inline]
    pub fn put(&mut self, key: impl Into<CheetahString>, value: impl Into<CheetahString>) -> Option<CheetahString> {
        self.properties.insert(key.into(), value.into())
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&CheetahString, &CheetahString)> {
        self.properties.iter()
    }
}

impl EvaluationContext for MessageEvaluationContext {
    #[inline]
    fn get(&self, name: &str) -> Option<&CheetahString> {
        self.properties.get(name)
    }

    fn key_values(&self) -> Option<HashMap<CheetahString, CheetahString>> {
        Some(self.properties.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
    }
}

#[cfg(test)]
mod tests {
    use streamgate_common::DefaultMessage;

    use super::*;

    #[test]
    fn test_new_context_is_empty() {
        let context = MessageEvaluationContext::new();
        assert!(context.is_empty());
        assert_eq!(context.len(), 0);
        assert!(context.get("anything").is_none());
    }

    #[test]
    fn test_put_and_get() {
        let mut context = MessageEvaluationContext::new();
        assert!(context.put("flag", "true").is_none());

        let old = context.put("flag", "false");
        assert_eq!(old.as_ref().map(|s| s.as_str()), Some("true"));
        assert_eq!(context.get("flag").map(|s| s.as_str()), Some("false"));
        assert!(context.contains_key("flag"));
        assert_eq!(context.len(), 1);
    }

    #[test]
    fn test_from_message() {
        let message = DefaultMessage::builder()
            .id("id")
            .payload("content")
            .property("region", "eu")
            .build();

        let context = MessageEvaluationContext::from_message(&message);
        assert_eq!(context.get("region").map(|s| s.as_str()), Some("eu"));
        assert_eq!(context.len(), 1);
    }

    #[test]
    fn test_key_values() {
        let mut context = MessageEvaluationContext::new();
        context.put("key1", "value1");
        context.put("key2", "value2");

        let map = context.key_values().unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(
            map.get(&CheetahString::from_static_str("key1")).map(|s| s.as_str()),
            Some("value1")
        );
    }

    #[test]
    fn test_evaluation_context_trait_object() {
        let mut context = MessageEvaluationContext::new();
        context.put("property", "value");

        let ctx: &dyn EvaluationContext = &context;
        assert_eq!(ctx.get("property").map(|s| s.as_str()), Some("value"));
        assert!(ctx.get("nonexistent").is_none());
    }
}
