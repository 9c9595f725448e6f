// Copyright (c) 2026 Easel Nodes contributors
// SPDX-License-Identifier: MIT

//! Contracts for the host application's services.
//!
//! Everything heavyweight lives on the other side of these traits: the asset
//! path database, the LoRA weight-adjustment algorithm, the text encoder and
//! the preview transport. This crate only decides *when* to call them and
//! what to do about individual failures (skip and continue).
//!
//! The traits are synchronous; node bodies are straight-line and never
//! suspend. A host whose services are async supplies blocking adapters.

pub mod stub;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::PreviewFormat;
use crate::errors::HostError;
use crate::values::HostObject;

/// The host's asset path database.
pub trait AssetResolver: Send + Sync {
    /// Resolve `name` inside the named asset folder (e.g. `"loras"`) to a
    /// full path, or report that no such asset exists.
    fn resolve(&self, folder: &str, name: &str) -> Result<PathBuf, HostError>;
}

/// The host's LoRA loading and application machinery.
///
/// The weighted-adjustment algorithm itself is entirely the host's; callers
/// hand over the current model/clip handles and receive the adjusted ones.
pub trait LoraLibrary: Send + Sync {
    fn apply(
        &self,
        model: Option<HostObject>,
        clip: Option<HostObject>,
        path: &Path,
        strength_model: f32,
        strength_clip: f32,
    ) -> Result<(Option<HostObject>, Option<HostObject>), HostError>;
}

/// The host's prompt encoder (tokenize + encode).
pub trait TextEncoder: Send + Sync {
    /// Encode `text` with the given clip handle into a conditioning handle.
    /// Empty text yields the host's empty conditioning.
    fn encode(&self, clip: &HostObject, text: &str) -> Result<HostObject, HostError>;
}

/// The host-managed live preview channel. Framing and delivery are the
/// host's responsibility; this crate only hands frames over.
pub trait PreviewTransport: Send + Sync {
    fn send_image(&self, image: &HostObject, format: PreviewFormat) -> Result<(), HostError>;
}

/// Bundle of host services injected into nodes at registry build time.
#[derive(Clone)]
pub struct HostServices {
    pub assets: Arc<dyn AssetResolver>,
    pub loras: Arc<dyn LoraLibrary>,
    pub encoder: Arc<dyn TextEncoder>,
    pub preview: Arc<dyn PreviewTransport>,
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices").finish_non_exhaustive()
    }
}
