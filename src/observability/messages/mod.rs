// Copyright (c) 2026 Easel Nodes contributors
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for human-readable output and
//! [`StructuredLog`] to emit itself through `tracing` with structured fields.
//!
//! # Usage Pattern
//!
//! ```rust
//! use easel_nodes::observability::messages::node::NodeExecutionStarted;
//! use easel_nodes::observability::messages::StructuredLog;
//!
//! let msg = NodeExecutionStarted {
//!     node_id: "easel_prompt_encoder",
//!     input_count: 4,
//! };
//!
//! msg.log();
//! ```

pub mod lora;
pub mod node;
pub mod preview;

use std::fmt::Display;
use tracing::Span;

/// Emit a message through `tracing` with structured fields.
pub trait StructuredLog: Display {
    /// Log at the level appropriate for the event.
    fn log(&self);

    /// Create a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
