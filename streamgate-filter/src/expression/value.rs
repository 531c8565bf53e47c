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

/// Untyped result of evaluating a template expression.
///
/// A stream-level evaluation may legitimately produce a string (the
/// configured filter referencing another expression); a message-level
/// evaluation is coerced to a boolean via [`TemplateValue::as_bool`].
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(CheetahString),
}

impl TemplateValue {
    #[inline]
    pub fn is_string(&self) -> bool {
        matches!(self, TemplateValue::String(_))
    }

    /// Boolean coercion: `Bool` verbatim, the strings `"true"`/`"false"`,
    /// anything else fails coercion.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            TemplateValue::Bool(value) => Some(*value),
            TemplateValue::String(value) => match value.as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            TemplateValue::String(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn into_string(self) -> Option<CheetahString> {
        match self {
            TemplateValue::String(value) => Some(value),
            _ => None,
        }
    }
}

impl From<bool> for TemplateValue {
    fn from(value: bool) -> Self {
        TemplateValue::Bool(value)
    }
}

impl From<i64> for TemplateValue {
    fn from(value: i64) -> Self {
        TemplateValue::Int(value)
    }
}

impl From<f64> for TemplateValue {
    fn from(value: f64) -> Self {
        TemplateValue::Float(value)
    }
}

impl From<&str> for TemplateValue {
    fn from(value: &str) -> Self {
        TemplateValue::String(CheetahString::from_slice(value))
    }
}

impl From<CheetahString> for TemplateValue {
    fn from(value: CheetahString) -> Self {
        TemplateValue::String(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_bool_on_bool() {
        assert_eq!(TemplateValue::Bool(true).as_bool(), Some(true));
        assert_eq!(TemplateValue::Bool(false).as_bool(), Some(false));
    }

    #[test]
    fn test_as_bool_on_boolean_strings() {
        assert_eq!(TemplateValue::from("true").as_bool(), Some(true));
        assert_eq!(TemplateValue::from("false").as_bool(), Some(false));
        assert_eq!(TemplateValue::from("TRUE").as_bool(), None);
        assert_eq!(TemplateValue::from("yes").as_bool(), None);
    }

    #[test]
    fn test_as_bool_on_other_variants() {
        assert_eq!(TemplateValue::Null.as_bool(), None);
        assert_eq!(TemplateValue::Int(1).as_bool(), None);
        assert_eq!(TemplateValue::Float(1.0).as_bool(), None);
    }

    #[test]
    fn test_string_accessors() {
        let value = TemplateValue::from("{#expression}");
        assert!(value.is_string());
        assert_eq!(value.as_str(), Some("{#expression}"));
        assert_eq!(
            value.into_string().map(|s| s.as_str().to_string()),
            Some("{#expression}".to_string())
        );

        assert!(!TemplateValue::Bool(true).is_string());
        assert_eq!(TemplateValue::Bool(true).as_str(), None);
        assert_eq!(TemplateValue::Null.into_string(), None);
    }
}
