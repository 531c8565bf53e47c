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

/// Error types for template-expression evaluation
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Invalid expression syntax: {0}")]
    Syntax(String),

    #[error("Cannot coerce result of '{expression}' to {expected}")]
    TypeCoercion {
        expression: String,
        expected: &'static str,
    },

    #[error("Unknown binding: {0}")]
    MissingBinding(String),

    #[error("Expression engine failure: {0}")]
    Engine(String),
}

impl TemplateError {
    pub fn syntax(expression: impl Into<String>) -> Self {
        TemplateError::Syntax(expression.into())
    }

    pub fn type_coercion(expression: impl Into<String>, expected: &'static str) -> Self {
        TemplateError::TypeCoercion {
            expression: expression.into(),
            expected,
        }
    }

    pub fn missing_binding(name: impl Into<String>) -> Self {
        TemplateError::MissingBinding(name.into())
    }

    pub fn engine(reason: impl Into<String>) -> Self {
        TemplateError::Engine(reason.into())
    }
}
