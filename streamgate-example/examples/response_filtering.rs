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

//! Response-stream filtering with a filter that is itself an expression:
//! the configured `{#routing-filter}` resolves (once, at stream level) to
//! `{#allowed}`, which is then evaluated per message. Messages without the
//! `allowed` property hit the fail-closed branch and are dropped.

use std::sync::Arc;

use streamgate_common::DefaultMessage;
use streamgate_common::Message;
use streamgate_error::PolicyResult;
use streamgate_example::host::InMemoryExecutionContext;
use streamgate_filter::context::MessageExecutionContext;
use streamgate_filter::expression::evaluation_context::MessageEvaluationContext;
use streamgate_filter::policy::FilterOutcome;
use streamgate_filter::policy::MessageFilteringConfig;
use streamgate_filter::policy::MessageFilteringPolicy;
use streamgate_filter::policy::Policy;
use tokio::sync::mpsc;
use tracing::info;

pub const CONFIG_JSON: &str = r#"{
    "filter": "{#routing-filter}",
    "ackFilteredMessage": true,
    "filterMessageOnFilteringError": true
}"#;

#[tokio::main]
pub async fn main() -> PolicyResult<()> {
    //init logger
    streamgate_common::log::init_logger();

    let config = MessageFilteringConfig::from_json(CONFIG_JSON)?;
    let policy = MessageFilteringPolicy::new(config);

    // the stream variable routing-filter holds the second-level expression
    let mut stream_variables = MessageEvaluationContext::new();
    stream_variables.put("routing-filter", "{#allowed}");

    let ctx = Arc::new(InMemoryExecutionContext::new(stream_variables));
    policy.on_message_response(Arc::clone(&ctx) as Arc<dyn MessageExecutionContext>);

    let (tx, mut rx) = mpsc::channel::<DefaultMessage>(16);
    let producer = tokio::spawn(async move {
        let samples = [Some("true"), Some("false"), None, Some("true")];
        for (i, allowed) in samples.into_iter().enumerate() {
            let mut builder = DefaultMessage::builder()
                .id(format!("resp-{i}"))
                .payload(format!("payload-{i}"));
            if let Some(allowed) = allowed {
                builder = builder.property("allowed", allowed);
            }
            if tx.send(builder.build()).await.is_err() {
                break;
            }
        }
    });

    while let Some(message) = rx.recv().await {
        let message: Arc<dyn Message> = Arc::new(message);
        let outcome = ctx.response_flow().deliver(Arc::clone(&message));
        match outcome {
            FilterOutcome::Pass => info!(id = %message.id(), "message passed"),
            // missing `allowed` lands here too: fail-closed
            FilterOutcome::Drop | FilterOutcome::DropAndAck => {
                let acked = outcome == FilterOutcome::DropAndAck;
                info!(id = %message.id(), acked, "message dropped");
            }
        }
    }
    producer.await.ok();

    Ok(())
}
