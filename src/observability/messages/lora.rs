// Copyright (c) 2026 Easel Nodes contributors
// SPDX-License-Identifier: MIT

//! Message types for LoRA tag resolution and sampler arithmetic events.
//!
//! This module contains message types for logging events related to:
//! * Inline tag resolution against the host's asset database
//! * Skip-and-continue outcomes for unresolvable or failing tags
//! * Step index computation from sigma schedules

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A LoRA tag resolved and was applied to the model/clip pair.
///
/// # Log Level
/// `info!` - Important operational event
pub struct LoraTagResolved<'a> {
    pub name: &'a str,
    pub path: &'a std::path::Path,
    pub strength_model: f32,
    pub strength_clip: f32,
}

impl Display for LoraTagResolved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Applied LoRA '{}' from {}: strength_model={}, strength_clip={}",
            self.name,
            self.path.display(),
            self.strength_model,
            self.strength_clip
        )
    }
}

impl StructuredLog for LoraTagResolved<'_> {
    fn log(&self) {
        tracing::info!(
            lora = self.name,
            path = %self.path.display(),
            strength_model = self.strength_model,
            strength_clip = self.strength_clip,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "lora_applied",
            span_name = name,
            lora = self.name,
        )
    }
}

/// A LoRA tag could not be resolved; the tag is left in the prompt.
///
/// # Log Level
/// `warn!` - Skipped work the user probably wants to know about
///
/// # Example
/// ```
/// use easel_nodes::observability::messages::lora::LoraTagSkipped;
///
/// let msg = LoraTagSkipped { tag: "<lora:missing:0.8>" };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct LoraTagSkipped<'a> {
    pub tag: &'a str,
}

impl Display for LoraTagSkipped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "LoRA not found for tag {:?}", self.tag)
    }
}

impl StructuredLog for LoraTagSkipped<'_> {
    fn log(&self) {
        tracing::warn!(tag = self.tag, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("lora_skipped", span_name = name, tag = self.tag)
    }
}

/// The host library failed to load or apply a resolved LoRA; the tag is
/// left in the prompt.
///
/// # Log Level
/// `warn!` - Skipped work the user probably wants to know about
pub struct LoraApplyFailed<'a> {
    pub name: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for LoraApplyFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Failed to load LoRA '{}': {}", self.name, self.error)
    }
}

impl StructuredLog for LoraApplyFailed<'_> {
    fn log(&self) {
        tracing::warn!(lora = self.name, error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("lora_apply_failed", span_name = name, lora = self.name)
    }
}

/// A sigma schedule was too short to compute a step index from.
///
/// # Log Level
/// `warn!` - Degenerate input handled with a fallback
pub struct ShortSigmaSchedule {
    pub sigma_count: usize,
}

impl Display for ShortSigmaSchedule {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Not enough sigmas to compute a step index: {} given, need at least 2",
            self.sigma_count
        )
    }
}

impl StructuredLog for ShortSigmaSchedule {
    fn log(&self) {
        tracing::warn!(sigma_count = self.sigma_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "short_sigma_schedule",
            span_name = name,
            sigma_count = self.sigma_count,
        )
    }
}

/// A step index was computed from strength and denoise fractions.
///
/// # Log Level
/// `debug!` - Arithmetic detail useful when tuning strength curves
pub struct StepIndexComputed {
    pub total: usize,
    pub logical_steps: i64,
    pub denoise: f64,
    pub strength: f64,
    pub effective: i64,
    pub step: i64,
}

impl Display for StepIndexComputed {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "total={}, logical_steps={}, denoise={}, strength={}, effective={}, step={}",
            self.total, self.logical_steps, self.denoise, self.strength, self.effective, self.step
        )
    }
}

impl StructuredLog for StepIndexComputed {
    fn log(&self) {
        tracing::debug!(
            total = self.total,
            logical_steps = self.logical_steps,
            denoise = self.denoise,
            strength = self.strength,
            effective = self.effective,
            step = self.step,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "step_index",
            span_name = name,
            total = self.total,
            step = self.step,
        )
    }
}
