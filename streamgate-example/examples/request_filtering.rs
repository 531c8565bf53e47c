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

use streamgate_common::DefaultMessage;
use streamgate_common::Message;
use streamgate_error::PolicyError;
use streamgate_error::PolicyResult;
use streamgate_example::host::InMemoryExecutionContext;
use streamgate_filter::context::MessageExecutionContext;
use streamgate_filter::expression::evaluation_context::MessageEvaluationContext;
use streamgate_filter::policy::FilterOutcome;
use streamgate_filter::policy::MessageFilteringConfig;
use streamgate_filter::policy::MessageFilteringPolicy;
use streamgate_filter::policy::Policy;
use streamgate_filter::policy::PolicyFactory;
use tokio::sync::mpsc;
use tracing::info;

pub const MESSAGE_COUNT: usize = 8;
pub const CONFIG_JSON: &str = r#"{"filter": "{#flag}"}"#;

#[tokio::main]
pub async fn main() -> PolicyResult<()> {
    //init logger
    streamgate_common::log::init_logger();

    // build the policy from its JSON configuration and register it
    let config = MessageFilteringConfig::from_json(CONFIG_JSON)?;
    PolicyFactory::instance().register(Arc::new(MessageFilteringPolicy::new(config)));
    let policy = PolicyFactory::instance()
        .get(MessageFilteringPolicy::ID)
        .ok_or_else(|| PolicyError::not_registered(MessageFilteringPolicy::ID))?;

    // request stream starts: the policy resolves the filter once and
    // installs its per-message handler
    let ctx = Arc::new(InMemoryExecutionContext::new(MessageEvaluationContext::new()));
    policy.on_message_request(Arc::clone(&ctx) as Arc<dyn MessageExecutionContext>);

    let (tx, mut rx) = mpsc::channel::<DefaultMessage>(16);
    let producer = tokio::spawn(async move {
        for i in 0..MESSAGE_COUNT {
            let flag = if i % 3 == 0 { "false" } else { "true" };
            let message = DefaultMessage::builder()
                .id(format!("msg-{i}"))
                .payload(format!("payload-{i}"))
                .property("flag", flag)
                .build();
            if tx.send(message).await.is_err() {
                break;
            }
        }
    });

    let mut passed = 0usize;
    let mut dropped = 0usize;
    while let Some(message) = rx.recv().await {
        let message: Arc<dyn Message> = Arc::new(message);
        match ctx.request_flow().deliver(Arc::clone(&message)) {
            FilterOutcome::Pass => {
                passed += 1;
                info!(id = %message.id(), "message passed");
            }
            FilterOutcome::Drop => {
                dropped += 1;
                info!(id = %message.id(), "message dropped");
            }
            FilterOutcome::DropAndAck => {
                dropped += 1;
                info!(id = %message.id(), "message dropped and acked");
            }
        }
    }
    producer.await.ok();

    info!(passed, dropped, "request stream drained");
    Ok(())
}
