// Copyright (c) 2026 Easel Nodes contributors
// SPDX-License-Identifier: MIT

//! Message types for node execution lifecycle events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Node execution started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use easel_nodes::observability::messages::node::NodeExecutionStarted;
///
/// let msg = NodeExecutionStarted {
///     node_id: "easel_prompt_encoder",
///     input_count: 4,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct NodeExecutionStarted<'a> {
    pub node_id: &'a str,
    pub input_count: usize,
}

impl Display for NodeExecutionStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Node '{}' execution started: {} inputs",
            self.node_id, self.input_count
        )
    }
}

impl StructuredLog for NodeExecutionStarted<'_> {
    fn log(&self) {
        tracing::info!(
            node_id = self.node_id,
            input_count = self.input_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "node_execution",
            span_name = name,
            node_id = self.node_id,
            input_count = self.input_count,
        )
    }
}

/// Node execution completed successfully.
///
/// # Log Level
/// `info!` - Important operational event
pub struct NodeExecutionCompleted<'a> {
    pub node_id: &'a str,
    pub output_count: usize,
    pub duration: std::time::Duration,
}

impl Display for NodeExecutionCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Node '{}' completed: {} outputs in {:?}",
            self.node_id, self.output_count, self.duration
        )
    }
}

impl StructuredLog for NodeExecutionCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            node_id = self.node_id,
            output_count = self.output_count,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "node_execution_completed",
            span_name = name,
            node_id = self.node_id,
            output_count = self.output_count,
        )
    }
}

/// Node execution failed on a contract violation.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use easel_nodes::observability::messages::node::NodeExecutionFailed;
///
/// let error = std::io::Error::new(std::io::ErrorKind::InvalidInput, "bad input");
/// let msg = NodeExecutionFailed {
///     node_id: "easel_prompt_encoder",
///     error: &error,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct NodeExecutionFailed<'a> {
    pub node_id: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for NodeExecutionFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Node '{}' execution failed: {}",
            self.node_id, self.error
        )
    }
}

impl StructuredLog for NodeExecutionFailed<'_> {
    fn log(&self) {
        tracing::error!(
            node_id = self.node_id,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "node_execution_failed",
            span_name = name,
            node_id = self.node_id,
        )
    }
}
