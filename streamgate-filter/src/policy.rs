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

//! Message Filtering Policy
//!
//! The policy system consists of three main components:
//!
//! 1. **Policy Trait (SPI)**: the interface a gateway host invokes once per
//!    directional stream
//! 2. **Policy Factory**: registration and lookup of policies by their
//!    stable id
//! 3. **Message Filtering Policy**: the default implementation, resolving
//!    the filter once per stream and deciding pass/drop/ack per message

mod config;
mod filter_resolver;
mod message_evaluator;
mod message_filtering_policy;
mod policy_factory;
mod policy_spi;

pub use config::MessageFilteringConfig;
pub use filter_resolver::FilterResolver;
pub use message_evaluator::FilterOutcome;
pub use message_evaluator::MessageEvaluator;
pub use message_filtering_policy::MessageFilteringPolicy;
pub use policy_factory::PolicyFactory;
pub use policy_spi::Policy;
