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
use streamgate_common::Message;

use crate::expression::TemplateEngine;
use crate::policy::config::MessageFilteringConfig;

/// Outcome of evaluating the resolved filter against one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOutcome {
    /// Message continues down the stream unmodified.
    Pass,
    /// Message is discarded without acknowledgment.
    Drop,
    /// Message is acknowledged, then discarded.
    DropAndAck,
}

impl FilterOutcome {
    #[inline]
    pub fn is_pass(&self) -> bool {
        matches!(self, FilterOutcome::Pass)
    }

    #[inline]
    pub fn is_drop(&self) -> bool {
        !self.is_pass()
    }
}

/// Per-message filter decision. Stateless; every decision reads only the
/// resolved filter, the message and the immutable configuration.
pub struct MessageEvaluator;

impl MessageEvaluator {
    /// Evaluates the resolved filter against one message and decides its
    /// fate.
    ///
    /// Evaluation failure is absorbed into the keep/drop policy and never
    /// surfaced: `filter_message_on_filtering_error` selects between
    /// fail-open (message passes, the default) and fail-closed (message is
    /// filtered out like a `false` result).
    pub fn decide(
        engine: &dyn TemplateEngine,
        resolved_filter: &CheetahString,
        message: &dyn Message,
        config: &MessageFilteringConfig,
    ) -> FilterOutcome {
        match engine.eval_bool(resolved_filter.as_str()) {
            Ok(true) => FilterOutcome::Pass,
            Ok(false) => Self::filter_out(message, config),
            Err(_) => {
                if config.filter_message_on_filtering_error() {
                    Self::filter_out(message, config)
                } else {
                    FilterOutcome::Pass
                }
            }
        }
    }

    fn filter_out(message: &dyn Message, config: &MessageFilteringConfig) -> FilterOutcome {
        if config.ack_filtered_message() {
            message.ack();
            FilterOutcome::DropAndAck
        } else {
            FilterOutcome::Drop
        }
    }
}

#[cfg(test)]
mod tests {
    use streamgate_common::DefaultMessage;
    use streamgate_error::TemplateError;

    use super::*;
    use crate::expression::MockTemplateEngine;

    fn engine_returning(result: Result<bool, TemplateError>) -> MockTemplateEngine {
        let mut engine = MockTemplateEngine::new();
        engine.expect_eval_bool().returning(move |_| result.clone());
        engine
    }

    #[test]
    fn passes_message_when_filter_is_true() {
        let engine = engine_returning(Ok(true));
        let message = DefaultMessage::new("id", "content");
        let config = MessageFilteringConfig::new("{#flag}");

        let outcome = MessageEvaluator::decide(
            &engine,
            &CheetahString::from_static_str("{#flag}"),
            &message,
            &config,
        );

        assert_eq!(outcome, FilterOutcome::Pass);
        assert!(outcome.is_pass());
        assert!(!message.is_acked());
    }

    #[test]
    fn drops_and_acks_when_filter_is_false_and_ack_enabled() {
        let engine = engine_returning(Ok(false));
        let message = DefaultMessage::new("id", "content");
        let config = MessageFilteringConfig::new("{#flag}");

        let outcome = MessageEvaluator::decide(
            &engine,
            &CheetahString::from_static_str("{#flag}"),
            &message,
            &config,
        );

        assert_eq!(outcome, FilterOutcome::DropAndAck);
        assert!(outcome.is_drop());
        assert_eq!(message.ack_count(), 1);
    }

    #[test]
    fn drops_silently_when_filter_is_false_and_ack_disabled() {
        let engine = engine_returning(Ok(false));
        let message = DefaultMessage::new("id", "content");
        let mut config = MessageFilteringConfig::new("{#flag}");
        config.set_ack_filtered_message(false);

        let outcome = MessageEvaluator::decide(
            &engine,
            &CheetahString::from_static_str("{#flag}"),
            &message,
            &config,
        );

        assert_eq!(outcome, FilterOutcome::Drop);
        assert!(!message.is_acked());
    }

    #[test]
    fn passes_message_on_evaluation_failure_by_default() {
        let engine = engine_returning(Err(TemplateError::engine("evaluation blew up")));
        let message = DefaultMessage::new("id", "content");
        let config = MessageFilteringConfig::new("{#flag}");

        let outcome = MessageEvaluator::decide(
            &engine,
            &CheetahString::from_static_str("{#flag}"),
            &message,
            &config,
        );

        // fail-open: ack_filtered_message is irrelevant on the pass path
        assert_eq!(outcome, FilterOutcome::Pass);
        assert!(!message.is_acked());
    }

    #[test]
    fn drops_and_acks_on_evaluation_failure_when_fail_closed() {
        let engine = engine_returning(Err(TemplateError::engine("evaluation blew up")));
        let message = DefaultMessage::new("id", "content");
        let mut config = MessageFilteringConfig::new("{#flag}");
        config.set_filter_message_on_filtering_error(true);

        let outcome = MessageEvaluator::decide(
            &engine,
            &CheetahString::from_static_str("{#flag}"),
            &message,
            &config,
        );

        assert_eq!(outcome, FilterOutcome::DropAndAck);
        assert_eq!(message.ack_count(), 1);
    }

    #[test]
    fn drops_silently_on_evaluation_failure_when_fail_closed_and_ack_disabled() {
        let engine = engine_returning(Err(TemplateError::engine("evaluation blew up")));
        let message = DefaultMessage::new("id", "content");
        let mut config = MessageFilteringConfig::new("{#flag}");
        config.set_filter_message_on_filtering_error(true);
        config.set_ack_filtered_message(false);

        let outcome = MessageEvaluator::decide(
            &engine,
            &CheetahString::from_static_str("{#flag}"),
            &message,
            &config,
        );

        assert_eq!(outcome, FilterOutcome::Drop);
        assert!(!message.is_acked());
    }
}
