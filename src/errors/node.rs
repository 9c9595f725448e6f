// Copyright (c) 2026 Easel Nodes contributors
// SPDX-License-Identifier: MIT

//! Error types for node execution and host collaborator calls.
//!
//! `NodeError` covers contract violations: inputs the host's own validation
//! should have caught before ever invoking a node. `HostError` covers the
//! failures the opaque collaborators can report back across the boundary.

use crate::values::HostObjectKind;
use thiserror::Error;

/// A node received inputs that violate its declared schema.
#[derive(Error, Debug)]
pub enum NodeError {
    /// A required input was not supplied.
    #[error("Missing required input '{input}'")]
    MissingInput { input: String },

    /// An input carried a value of the wrong type.
    #[error("Input '{input}' has wrong type: expected {expected}, found {found}")]
    TypeMismatch {
        input: String,
        expected: &'static str,
        found: &'static str,
    },

    /// An input carried a host object of the wrong kind.
    #[error("Input '{input}' carries a {found} object, expected {expected}")]
    WrongObjectKind {
        input: String,
        expected: HostObjectKind,
        found: HostObjectKind,
    },
}

/// A host collaborator reported a failure.
#[derive(Error, Debug)]
pub enum HostError {
    /// The asset path database has no entry for the requested name.
    #[error("Asset '{name}' not found in folder '{folder}'")]
    AssetNotFound { folder: String, name: String },

    /// The LoRA library failed to load or apply an adjustment.
    #[error("LoRA library error: {0}")]
    Library(String),

    /// The preview transport failed to deliver a frame.
    #[error("Preview transport error: {0}")]
    Transport(String),

    /// The text encoder failed to produce conditioning.
    #[error("Text encoder error: {0}")]
    Encode(String),
}
