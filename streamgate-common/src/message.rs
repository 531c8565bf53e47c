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
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use ahash::RandomState;
use bytes::Bytes;
use cheetah_string::CheetahString;

/// A single unit flowing on a gateway message stream.
///
/// The filtering stage treats messages as opaque: it never mutates payload
/// or properties, and the only side effect it may trigger is [`Message::ack`].
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; a message may be evaluated on a
/// different task than the one that produced it.
pub trait Message: Send + Sync {
    /// Unique message id within its stream.
    fn id(&self) -> &CheetahString;

    /// Raw message payload.
    fn payload(&self) -> &Bytes;

    /// String properties attached to the message.
    fn properties(&self) -> &HashMap<CheetahString, CheetahString, RandomState>;

    /// Signals the transport that this message has been consumed/handled.
    ///
    /// Invoked by the filtering stage only when a filtered-out message must
    /// be marked complete despite being dropped.
    fn ack(&self);
}

/// Default in-memory [`Message`] implementation.
///
/// Tracks acknowledgments with an atomic counter so hosts and tests can
/// observe whether (and how many times) a message was acked.
#[derive(Debug)]
pub struct DefaultMessage {
    id: CheetahString,
    payload: Bytes,
    properties: HashMap<CheetahString, CheetahString, RandomState>,
    ack_count: AtomicUsize,
}

impl DefaultMessage {
    pub fn new(id: impl Into<CheetahString>, payload: impl Into<Bytes>) -> Self {
        Self {
            id: id.into(),
            payload: payload.into(),
            properties: HashMap::with_hasher(RandomState::default()),
            ack_count: AtomicUsize::new(0),
        }
    }

    pub fn builder() -> DefaultMessageBuilder {
        DefaultMessageBuilder::default()
    }

    /// Attaches a string property, replacing any previous value for the key.
    pub fn put_property(&mut self, key: impl Into<CheetahString>, value: impl Into<CheetahString>) -> Option<CheetahString> {
        self.properties.insert(key.into(), value.into())
    }

    /// Number of times [`Message::ack`] has been invoked on this message.
    #[inline]
    pub fn ack_count(&self) -> usize {
        self.ack_count.load(Ordering::SeqCst)
    }

    #[inline]
    pub fn is_acked(&self) -> bool {
        self.ack_count() > 0
    }
}

impl Message for DefaultMessage {
    fn id(&self) -> &CheetahString {
        &self.id
    }

    fn payload(&self) -> &Bytes {
        &self.payload
    }

    fn properties(&self) -> &HashMap<CheetahString, CheetahString, RandomState> {
        &self.properties
    }

    fn ack(&self) {
        self.ack_count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Builder for [`DefaultMessage`].
#[derive(Debug, Default)]
pub struct DefaultMessageBuilder {
    id: Option<CheetahString>,
    payload: Option<Bytes>,
    properties: Vec<(CheetahString, CheetahString)>,
}

impl DefaultMessageBuilder {
    pub fn id(mut self, id: impl Into<CheetahString>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn payload(mut self, payload: impl Into<Bytes>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    pub fn property(mut self, key: impl Into<CheetahString>, value: impl Into<CheetahString>) -> Self {
        self.properties.push((key.into(), value.into()));
        self
    }

    pub fn build(self) -> DefaultMessage {
        let mut message = DefaultMessage::new(
            self.id.unwrap_or_else(|| CheetahString::from_static_str("")),
            self.payload.unwrap_or_else(Bytes::new),
        );
        for (key, value) in self.properties {
            message.put_property(key, value);
        }
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_message_has_no_acks() {
        let message = DefaultMessage::new("id-1", "payload");
        assert_eq!(message.id().as_str(), "id-1");
        assert_eq!(message.payload().as_ref(), b"payload");
        assert!(!message.is_acked());
        assert_eq!(message.ack_count(), 0);
    }

    #[test]
    fn test_ack_increments_counter() {
        let message = DefaultMessage::new("id-1", "payload");
        message.ack();
        assert!(message.is_acked());
        assert_eq!(message.ack_count(), 1);

        message.ack();
        assert_eq!(message.ack_count(), 2);
    }

    #[test]
    fn test_put_property_overwrites_existing() {
        let mut message = DefaultMessage::new("id-1", "payload");
        assert!(message.put_property("region", "eu").is_none());

        let old = message.put_property("region", "us");
        assert_eq!(old.as_ref().map(|s| s.as_str()), Some("eu"));
        assert_eq!(
            message.properties().get("region").map(|s| s.as_str()),
            Some("us")
        );
    }

    #[test]
    fn test_builder() {
        let message = DefaultMessage::builder()
            .id("id-42")
            .payload("content")
            .property("flag", "true")
            .build();

        assert_eq!(message.id().as_str(), "id-42");
        assert_eq!(message.payload().as_ref(), b"content");
        assert_eq!(
            message.properties().get("flag").map(|s| s.as_str()),
            Some("true")
        );
    }

    #[test]
    fn test_message_trait_object() {
        let message = DefaultMessage::new("id-1", "payload");
        let as_dyn: &dyn Message = &message;
        as_dyn.ack();
        assert_eq!(message.ack_count(), 1);
    }
}
