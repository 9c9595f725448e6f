// Copyright (c) 2026 Easel Nodes contributors
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for all diagnostic logging
//! in the node pack. Message types follow a struct-based pattern with a
//! `Display` implementation to:
//!
//! * Eliminate magic strings scattered throughout the codebase
//! * Enable future internationalization without code changes
//! * Provide consistent, structured logging output
//!
//! Messages are organized by subsystem:
//! * `messages::node` - node execution lifecycle events
//! * `messages::lora` - LoRA tag resolution and sampler arithmetic events
//! * `messages::preview` - preview transport events

pub mod messages;
