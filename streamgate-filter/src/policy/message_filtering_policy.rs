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

use cheetah_string::CheetahString;
use streamgate_common::Message;
use tracing::debug;

use crate::context::MessageExecutionContext;
use crate::context::MessageHandler;
use crate::policy::config::MessageFilteringConfig;
use crate::policy::filter_resolver::FilterResolver;
use crate::policy::message_evaluator::MessageEvaluator;
use crate::policy::policy_spi::Policy;

/// Per-message filtering policy for streaming request/response pipelines.
///
/// On each stream start the configured filter is resolved exactly once
/// against the stream-scoped engine; the resolved expression and the
/// immutable configuration are then closed over by the per-message handler,
/// so all messages on that stream share the same resolved filter.
#[derive(Debug)]
pub struct MessageFilteringPolicy {
    configuration: MessageFilteringConfig,
}

impl MessageFilteringPolicy {
    /// Identifier this policy registers under.
    pub const ID: &'static str = "message-filtering";

    pub fn new(configuration: MessageFilteringConfig) -> Self {
        Self { configuration }
    }

    fn message_handler(&self, ctx: Arc<dyn MessageExecutionContext>, resolved_filter: CheetahString) -> MessageHandler {
        let config = self.configuration.clone();
        Arc::new(move |message: Arc<dyn Message>| {
            let engine = ctx.message_template_engine(message.as_ref());
            MessageEvaluator::decide(engine.as_ref(), &resolved_filter, message.as_ref(), &config)
        })
    }
}

impl Policy for MessageFilteringPolicy {
    fn id(&self) -> &str {
        Self::ID
    }

    fn on_message_request(&self, ctx: Arc<dyn MessageExecutionContext>) {
        let resolved = FilterResolver::resolve(ctx.template_engine().as_ref(), self.configuration.filter());
        debug!(filter = %resolved, "installing request message filter");
        let handler = self.message_handler(Arc::clone(&ctx), resolved);
        ctx.request().on_message(handler);
    }

    fn on_message_response(&self, ctx: Arc<dyn MessageExecutionContext>) {
        let resolved = FilterResolver::resolve(ctx.template_engine().as_ref(), self.configuration.filter());
        debug!(filter = %resolved, "installing response message filter");
        let handler = self.message_handler(Arc::clone(&ctx), resolved);
        ctx.response().on_message(handler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_id() {
        let policy = MessageFilteringPolicy::new(MessageFilteringConfig::new("{#flag}"));
        assert_eq!(policy.id(), "message-filtering");
    }
}
