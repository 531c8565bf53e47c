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

use parking_lot::RwLock;
use streamgate_common::Message;
use streamgate_filter::context::MessageExecutionContext;
use streamgate_filter::context::MessageFlow;
use streamgate_filter::context::MessageHandler;
use streamgate_filter::expression::evaluation_context::MessageEvaluationContext;
use streamgate_filter::expression::TemplateEngine;
use streamgate_filter::policy::FilterOutcome;

use crate::engine::PropertyTemplateEngine;

/// Message flow holding the handler a policy installs; the host pumps
/// messages through [`InMemoryMessageFlow::deliver`].
#[derive(Default)]
pub struct InMemoryMessageFlow {
    handler: RwLock<Option<MessageHandler>>,
}

impl MessageFlow for InMemoryMessageFlow {
    fn on_message(&self, handler: MessageHandler) {
        *self.handler.write() = Some(handler);
    }
}

impl InMemoryMessageFlow {
    /// Applies the installed handler to one message. Messages arriving
    /// before a handler is installed pass through unfiltered.
    pub fn deliver(&self, message: Arc<dyn Message>) -> FilterOutcome {
        match self.handler.read().as_ref() {
            Some(handler) => handler(message),
            None => FilterOutcome::Pass,
        }
    }
}

/// In-process [`MessageExecutionContext`]: stream-level variables are fixed
/// at construction, message-level engines see the message's properties
/// layered over them.
pub struct InMemoryExecutionContext {
    request: InMemoryMessageFlow,
    response: InMemoryMessageFlow,
    stream_variables: MessageEvaluationContext,
}

impl InMemoryExecutionContext {
    pub fn new(stream_variables: MessageEvaluationContext) -> Self {
        Self {
            request: InMemoryMessageFlow::default(),
            response: InMemoryMessageFlow::default(),
            stream_variables,
        }
    }

    pub fn request_flow(&self) -> &InMemoryMessageFlow {
        &self.request
    }

    pub fn response_flow(&self) -> &InMemoryMessageFlow {
        &self.response
    }
}

impl MessageExecutionContext for InMemoryExecutionContext {
    fn request(&self) -> &dyn MessageFlow {
        &self.request
    }

    fn response(&self) -> &dyn MessageFlow {
        &self.response
    }

    fn template_engine(&self) -> Arc<dyn TemplateEngine> {
        Arc::new(PropertyTemplateEngine::new(self.stream_variables.clone()))
    }

    fn message_template_engine(&self, message: &dyn Message) -> Arc<dyn TemplateEngine> {
        let mut variables = self.stream_variables.clone();
        for (key, value) in message.properties() {
            variables.put(key.clone(), value.clone());
        }
        Arc::new(PropertyTemplateEngine::new(variables))
    }
}

#[cfg(test)]
mod tests {
    use streamgate_common::DefaultMessage;

    use super::*;

    #[test]
    fn delivers_pass_through_when_no_handler_installed() {
        let flow = InMemoryMessageFlow::default();
        let message: Arc<dyn Message> = Arc::new(DefaultMessage::new("id", "content"));
        assert_eq!(flow.deliver(message), FilterOutcome::Pass);
    }

    #[test]
    fn message_engine_sees_message_properties_over_stream_variables() {
        let mut stream_variables = MessageEvaluationContext::new();
        stream_variables.put("flag", "true");
        let ctx = InMemoryExecutionContext::new(stream_variables);

        let mut message = DefaultMessage::new("id", "content");
        message.put_property("flag", "false");

        let engine = ctx.message_template_engine(&message);
        assert_eq!(engine.eval_bool("{#flag}"), Ok(false));

        let stream_engine = ctx.template_engine();
        assert_eq!(stream_engine.eval_bool("{#flag}"), Ok(true));
    }
}
