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
use streamgate_error::TemplateError;
use streamgate_error::TemplateResult;
use streamgate_filter::expression::evaluation_context::EvaluationContext;
use streamgate_filter::expression::evaluation_context::MessageEvaluationContext;
use streamgate_filter::expression::value::TemplateValue;
use streamgate_filter::expression::TemplateEngine;

/// Minimal [`TemplateEngine`] for the examples.
///
/// `{#name}` resolves to the context variable `name` (failing with a
/// missing-binding error when absent); anything else is parsed as a
/// literal. No operators, no nesting. A real deployment plugs in an
/// actual expression engine behind the same trait.
pub struct PropertyTemplateEngine {
    context: MessageEvaluationContext,
}

impl PropertyTemplateEngine {
    pub fn new(context: MessageEvaluationContext) -> Self {
        Self { context }
    }
}

impl TemplateEngine for PropertyTemplateEngine {
    fn eval(&self, expression: &str) -> TemplateResult<TemplateValue> {
        let trimmed = expression.trim();
        if let Some(name) = trimmed.strip_prefix("{#").and_then(|rest| rest.strip_suffix('}')) {
            let value = self
                .context
                .get(name)
                .ok_or_else(|| TemplateError::missing_binding(name))?;
            Ok(parse_literal(value.as_str()))
        } else {
            Ok(parse_literal(trimmed))
        }
    }
}

fn parse_literal(raw: &str) -> TemplateValue {
    match raw {
        "true" => TemplateValue::Bool(true),
        "false" => TemplateValue::Bool(false),
        "null" | "" => TemplateValue::Null,
        _ => raw
            .parse::<i64>()
            .map(TemplateValue::Int)
            .unwrap_or_else(|_| TemplateValue::String(CheetahString::from_slice(raw))),
    }
}
