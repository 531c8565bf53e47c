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

use cheetah_string::CheetahString;

use crate::expression::value::TemplateValue;
use crate::expression::TemplateEngine;

/// Resolves the effective filter expression once per stream direction.
pub struct FilterResolver;

impl FilterResolver {
    /// Resolves the configured filter against the stream-scoped engine.
    ///
    /// If the configured expression evaluates to a string, that string is
    /// itself an expression and becomes the resolved filter (one level of
    /// indirection, never more). Any evaluation failure, or a non-string
    /// result, degrades to the raw configured expression. Never fails.
    pub fn resolve(engine: &dyn TemplateEngine, configured: &CheetahString) -> CheetahString {
        match engine.eval(configured.as_str()) {
            Ok(TemplateValue::String(second_level)) => second_level,
            Ok(_) | Err(_) => configured.clone(),
        }
    }
}
