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

//! Host-pipeline seam: the execution context handed to a policy when a
//! stream starts, and the message flows a policy installs handlers on.

use std::sync::Arc;

use streamgate_common::Message;

use crate::expression::TemplateEngine;
use crate::policy::FilterOutcome;

/// Per-message callback installed on a [`MessageFlow`].
///
/// Handlers read only immutable captured state and may be invoked
/// concurrently when the transport delivers messages concurrently.
pub type MessageHandler = Arc<dyn Fn(Arc<dyn Message>) -> FilterOutcome + Send + Sync>;

/// One directional message channel (request or response) owned by the host.
pub trait MessageFlow: Send + Sync {
    /// Registers the per-message handler for this flow.
    ///
    /// The host invokes the handler once per message and acts on the
    /// returned [`FilterOutcome`]; the acknowledgment side effect has
    /// already happened inside the handler by the time it returns.
    fn on_message(&self, handler: MessageHandler);
}

/// Capabilities the host exposes to a policy for one stream.
pub trait MessageExecutionContext: Send + Sync {
    /// The request-direction message flow.
    fn request(&self) -> &dyn MessageFlow;

    /// The response-direction message flow.
    fn response(&self) -> &dyn MessageFlow;

    /// Stream-scoped template engine, used once per direction to resolve
    /// the configured filter expression.
    fn template_engine(&self) -> Arc<dyn TemplateEngine>;

    /// Message-scoped template engine for one message's predicate
    /// evaluation.
    fn message_template_engine(&self, message: &dyn Message) -> Arc<dyn TemplateEngine>;
}
