// Copyright (c) 2026 Easel Nodes contributors
// SPDX-License-Identifier: MIT

//! Message types for preview transport events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A preview frame was handed to the host transport.
///
/// # Log Level
/// `debug!` - High-frequency operational detail
pub struct PreviewImageSent<'a> {
    pub index: usize,
    pub format: &'a str,
}

impl Display for PreviewImageSent<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Preview image {} sent as {}", self.index, self.format)
    }
}

impl StructuredLog for PreviewImageSent<'_> {
    fn log(&self) {
        tracing::debug!(index = self.index, format = self.format, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("preview_sent", span_name = name, index = self.index)
    }
}

/// The transport rejected a frame; the frame is skipped and the batch
/// continues.
///
/// # Log Level
/// `warn!` - Skipped work the user probably wants to know about
pub struct PreviewSendFailed<'a> {
    pub index: usize,
    pub error: &'a dyn std::error::Error,
}

impl Display for PreviewSendFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Preview image {} was not delivered: {}",
            self.index, self.error
        )
    }
}

impl StructuredLog for PreviewSendFailed<'_> {
    fn log(&self) {
        tracing::warn!(index = self.index, error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("preview_send_failed", span_name = name, index = self.index)
    }
}
