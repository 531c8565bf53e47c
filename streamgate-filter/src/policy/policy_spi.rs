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

use std::fmt;
use std::sync::Arc;

use crate::context::MessageExecutionContext;

/// Core trait for gateway policies applied to message streams.
///
/// The host looks a policy up by its stable [`Policy::id`] and invokes one
/// entry point per directional stream. Each entry point must complete its
/// stream-level preparation synchronously and install the per-message
/// handler on the corresponding flow before returning; messages may start
/// flowing immediately afterwards.
///
/// # Thread Safety
///
/// Policy instances are wrapped in `Arc` and shared across streams;
/// implementations must be stateless or internally synchronized.
pub trait Policy: Send + Sync + fmt::Debug {
    /// Stable identifier used by the host for registration and lookup.
    fn id(&self) -> &str;

    /// Invoked when a request stream starts.
    fn on_message_request(&self, ctx: Arc<dyn MessageExecutionContext>);

    /// Invoked when a response stream starts.
    fn on_message_response(&self, ctx: Arc<dyn MessageExecutionContext>);
}
