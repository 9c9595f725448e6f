// Copyright (c) 2026 Easel Nodes contributors
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::observability::messages::lora::{ShortSigmaSchedule, StepIndexComputed};
use crate::observability::messages::StructuredLog;
use crate::request::{NodeRequest, NodeResponse};
use crate::schema::{DataKind, InputDefault, InputSpec, NodeSchema, OutputSpec};
use crate::traits::Node;
use crate::values::Value;

/// Sampler Strength node - maps strength/denoise fractions onto a step index
///
/// The schedule defines `len - 1` logical steps. The denoise fraction
/// shrinks that to an effective window (never below one step), and the
/// strength fraction picks how far into the window sampling starts: full
/// strength starts at step 0, zero strength starts past the whole window.
pub struct SamplerStrength;

/// Step index arithmetic, separated from the envelope for direct testing.
fn step_index(sigma_count: usize, strength: f64, denoise: f64) -> i64 {
    let strength = strength.clamp(0.0, 1.0);
    let denoise = denoise.clamp(0.0, 1.0);

    if sigma_count <= 1 {
        ShortSigmaSchedule { sigma_count }.log();
        return 0;
    }

    let logical_steps = (sigma_count - 1) as i64;
    let effective = ((logical_steps as f64 * denoise).round() as i64).max(1);
    let step = ((effective as f64 * (1.0 - strength)).round() as i64).clamp(0, logical_steps);

    StepIndexComputed {
        total: sigma_count,
        logical_steps,
        denoise,
        strength,
        effective,
        step,
    }
    .log();

    step
}

#[async_trait]
impl Node for SamplerStrength {
    fn schema(&self) -> NodeSchema {
        NodeSchema::new("easel_sampler_strength", "Sampler Strength", "utility")
            .input(InputSpec::required("sigmas", DataKind::Sigmas))
            .input(
                InputSpec::required("strength", DataKind::Float)
                    .with_default(InputDefault::Float(1.0))
                    .bounded(0.0, 1.0),
            )
            .input(
                InputSpec::required("denoise", DataKind::Float)
                    .with_default(InputDefault::Float(1.0))
                    .bounded(0.0, 1.0),
            )
            .output(OutputSpec::new("Step", DataKind::Int))
    }

    async fn execute(&self, req: NodeRequest) -> NodeResponse {
        let sigmas = match req.sigmas("sigmas") {
            Ok(sigmas) => sigmas,
            Err(e) => return e.into(),
        };
        let strength = match req.float_or("strength", 1.0) {
            Ok(strength) => strength,
            Err(e) => return e.into(),
        };
        let denoise = match req.float_or("denoise", 1.0) {
            Ok(denoise) => denoise,
            Err(e) => return e.into(),
        };

        NodeResponse::values(vec![Value::Int(step_index(sigmas.len(), strength, denoise))])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Outcome;

    #[test]
    fn index_stays_within_schedule_bounds() {
        let fractions = [0.0, 0.1, 0.25, 0.5, 0.75, 0.9, 1.0];
        for n in 2..=40usize {
            for &strength in &fractions {
                for &denoise in &fractions {
                    let step = step_index(n, strength, denoise);
                    assert!(
                        (0..n as i64).contains(&step),
                        "step {} out of [0, {}) for n={}, strength={}, denoise={}",
                        step,
                        n,
                        n,
                        strength,
                        denoise
                    );
                }
            }
        }
    }

    #[test]
    fn degenerate_schedule_yields_zero() {
        assert_eq!(step_index(0, 0.5, 0.5), 0);
        assert_eq!(step_index(1, 1.0, 1.0), 0);
    }

    #[test]
    fn full_strength_starts_at_step_zero() {
        assert_eq!(step_index(21, 1.0, 1.0), 0);
    }

    #[test]
    fn zero_strength_skips_the_whole_window() {
        // 20 logical steps, full denoise: start past all of them.
        assert_eq!(step_index(21, 0.0, 1.0), 20);
    }

    #[test]
    fn half_strength_starts_mid_window() {
        assert_eq!(step_index(21, 0.5, 1.0), 10);
    }

    #[test]
    fn denoise_shrinks_the_effective_window() {
        // 20 logical steps at denoise 0.5 -> effective 10; half strength -> 5.
        assert_eq!(step_index(21, 0.5, 0.5), 5);
        // Tiny denoise still leaves one effective step.
        assert_eq!(step_index(21, 0.0, 0.01), 1);
    }

    #[test]
    fn out_of_range_fractions_are_clamped() {
        assert_eq!(step_index(21, 2.0, 1.0), 0);
        assert_eq!(step_index(21, -1.0, 1.0), 20);
    }

    #[tokio::test]
    async fn executes_against_a_sigma_schedule() {
        let req = NodeRequest::new()
            .with("sigmas", Value::Sigmas(vec![1.0; 21]))
            .with("strength", Value::Float(0.5))
            .with("denoise", Value::Float(1.0));
        match SamplerStrength.execute(req).await.outcome {
            Outcome::Values(values) => assert!(matches!(values[0], Value::Int(10))),
            Outcome::Error(e) => panic!("Unexpected error: {}", e.message),
        }
    }

    #[tokio::test]
    async fn missing_sigmas_is_a_contract_error() {
        let response = SamplerStrength.execute(NodeRequest::new()).await;
        assert!(matches!(response.outcome, Outcome::Error(d) if d.code == 400));
    }
}
