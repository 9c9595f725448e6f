// Copyright (c) 2026 Easel Nodes contributors
// SPDX-License-Identifier: MIT

use std::fmt;

/// Errors that can occur during pack configuration validation
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The enable list names a node id this pack does not provide
    UnknownNode {
        /// The unrecognized node id
        node_id: String,
    },
    /// The enable list names the same node id twice
    DuplicateNodeId {
        /// The duplicated node id
        node_id: String,
    },
    /// The LoRA extension list is empty, so no tag could ever resolve
    NoExtensions,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::UnknownNode { node_id } => {
                write!(f, "Unknown node id in enable list: '{}'", node_id)
            }
            ValidationError::DuplicateNodeId { node_id } => {
                write!(f, "Duplicate node id in enable list: '{}'", node_id)
            }
            ValidationError::NoExtensions => {
                write!(f, "lora.extensions is empty; at least one filename extension is required")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
