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

//! # StreamGate Error Handling
//!
//! Error types shared across the StreamGate crates.
//!
//! Two error families exist:
//! - [`TemplateError`]: expression-evaluation failures reported by a
//!   template engine (syntax errors, type-coercion failures, missing
//!   bindings). The filtering policy absorbs these into its keep/drop
//!   decision and never propagates them.
//! - [`PolicyError`]: policy lifecycle failures (malformed configuration,
//!   registry lookups). These surface to the caller before stream
//!   processing starts.

// Template error module
pub mod template_error;

// Policy error module
pub mod policy_error;

pub use policy_error::PolicyError;
pub use template_error::TemplateError;

/// Result alias for template-expression evaluation.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Result alias for policy lifecycle operations.
pub type PolicyResult<T> = Result<T, PolicyError>;
