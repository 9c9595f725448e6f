// Copyright (c) 2026 Easel Nodes contributors
// SPDX-License-Identifier: MIT

//! Errors for node registry construction and node instantiation.

use std::error::Error;
use std::fmt;

/// Errors that can occur while building the node registry
#[derive(Debug)]
pub enum RegistryError {
    /// The factory does not recognize the requested node id
    UnknownNodeId { node_id: String },

    /// Failed to create a node from configuration
    NodeCreationFailed { node_id: String, reason: String },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::UnknownNodeId { node_id } => {
                write!(f, "Unknown node id: '{}'", node_id)
            }
            RegistryError::NodeCreationFailed { node_id, reason } => {
                write!(f, "Failed to create node '{}': {}", node_id, reason)
            }
        }
    }
}

impl Error for RegistryError {}
