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

pub mod evaluation_context;
pub mod value;

use streamgate_error::TemplateError;
use streamgate_error::TemplateResult;

use crate::expression::value::TemplateValue;

/// Expression-evaluation capability supplied by the host.
///
/// An engine is scoped by whoever constructs it: the host context hands the
/// policy a stream-scoped engine for filter resolution and a message-scoped
/// engine for each per-message predicate evaluation.
///
/// # Thread Safety
///
/// Engines must be `Send + Sync`; message-scoped evaluations may run
/// concurrently when the transport delivers messages concurrently.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateEngine: Send + Sync {
    /// Evaluate an expression to an untyped value.
    fn eval(&self, expression: &str) -> TemplateResult<TemplateValue>;

    /// Evaluate an expression and coerce the result to a boolean.
    fn eval_bool(&self, expression: &str) -> TemplateResult<bool> {
        let value = self.eval(expression)?;
        value
            .as_bool()
            .ok_or_else(|| TemplateError::type_coercion(expression, "bool"))
    }
}

#[cfg(test)]
mod tests {
    use cheetah_string::CheetahString;

    use super::*;

    struct FixedEngine(TemplateValue);

    impl TemplateEngine for FixedEngine {
        fn eval(&self, _expression: &str) -> TemplateResult<TemplateValue> {
            Ok(self.0.clone())
        }
    }

    struct FailingEngine;

    impl TemplateEngine for FailingEngine {
        fn eval(&self, expression: &str) -> TemplateResult<TemplateValue> {
            Err(TemplateError::syntax(expression))
        }
    }

    #[test]
    fn eval_bool_coerces_boolean_result() {
        let engine = FixedEngine(TemplateValue::Bool(true));
        assert_eq!(engine.eval_bool("{#flag}"), Ok(true));
    }

    #[test]
    fn eval_bool_coerces_boolean_string_result() {
        let engine = FixedEngine(TemplateValue::String(CheetahString::from_static_str("false")));
        assert_eq!(engine.eval_bool("{#flag}"), Ok(false));
    }

    #[test]
    fn eval_bool_rejects_non_boolean_result() {
        let engine = FixedEngine(TemplateValue::Int(42));
        assert_eq!(
            engine.eval_bool("{#count}"),
            Err(TemplateError::type_coercion("{#count}", "bool"))
        );
    }

    #[test]
    fn eval_bool_propagates_engine_failure() {
        assert_eq!(
            FailingEngine.eval_bool("{#broken"),
            Err(TemplateError::syntax("{#broken"))
        );
    }
}
