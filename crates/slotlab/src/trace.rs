//! Derivation traces.
//!
//! Each derivation is written once, against a [`StepSink`]. The value-only
//! entry points pass [`Discard`], the trace entry points pass a
//! `Vec<DerivationStep>`. Both run the same arithmetic, so a trace can never
//! disagree with the value it explains.

use serde::{Deserialize, Serialize};

use crate::word::Hex256;

/// One stage of a multi-stage derivation, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivationStep {
    /// Short heading, e.g. "Step 1: Hash Namespace".
    pub title: String,
    /// The formula evaluated at this stage, with concrete inputs substituted.
    pub expression: String,
    /// The intermediate value produced by this stage.
    pub result: Hex256,
    /// One sentence describing what the stage does.
    pub explanation: String,
}

impl DerivationStep {
    /// Create a step.
    pub fn new(
        title: impl Into<String>,
        expression: impl Into<String>,
        result: Hex256,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            expression: expression.into(),
            result,
            explanation: explanation.into(),
        }
    }
}

/// Receives the intermediate steps of a derivation.
///
/// Steps are passed as closures so a sink that drops them never pays for
/// formatting the expression text.
pub trait StepSink {
    fn record<F: FnOnce() -> DerivationStep>(&mut self, step: F);
}

/// A sink that ignores every step.
#[derive(Debug, Clone, Copy, Default)]
pub struct Discard;

impl StepSink for Discard {
    #[inline]
    fn record<F: FnOnce() -> DerivationStep>(&mut self, _step: F) {}
}

impl StepSink for Vec<DerivationStep> {
    fn record<F: FnOnce() -> DerivationStep>(&mut self, step: F) {
        self.push(step());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DerivationStep {
        DerivationStep::new("title", "expr", Hex256::from_u64(7), "what happens")
    }

    #[test]
    fn test_discard_never_builds_step() {
        let mut sink = Discard;
        sink.record(|| panic!("discarded steps must not be built"));
    }

    #[test]
    fn test_vec_collects_in_order() {
        let mut steps: Vec<DerivationStep> = Vec::new();
        steps.record(sample);
        steps.record(|| DerivationStep::new("second", "x", Hex256::ZERO, "y"));
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].title, "title");
        assert_eq!(steps[1].result, Hex256::ZERO);
    }

    #[test]
    fn test_step_serializes_for_display() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["title"], "title");
        assert_eq!(
            json["result"],
            "0x0000000000000000000000000000000000000000000000000000000000000007"
        );
    }
}
