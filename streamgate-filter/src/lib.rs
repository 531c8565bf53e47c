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

//! Per-message filtering for StreamGate request/response streams.
//!
//! A configured filter expression is resolved once per stream direction
//! (handling one level of expression-in-expression indirection), then every
//! message flowing on that stream is evaluated against the resolved
//! expression and passed through, dropped, or dropped-with-acknowledge
//! according to the configured policy.
//!
//! The expression language itself is not implemented here; evaluation is
//! delegated to a [`expression::TemplateEngine`] supplied by the host
//! context, scoped either to the stream or to an individual message.

pub mod context;
pub mod expression;
pub mod policy;
