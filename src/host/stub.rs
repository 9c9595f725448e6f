// Copyright (c) 2026 Easel Nodes contributors
// SPDX-License-Identifier: MIT

//! Stub host services for testing and the demo runner.
//!
//! These record every call so tests can assert on what the nodes asked the
//! host to do. None of them touch the filesystem or a real transport.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::config::PreviewFormat;
use crate::errors::HostError;
use crate::values::{HostObject, HostObjectKind};

use super::{AssetResolver, HostServices, LoraLibrary, PreviewTransport, TextEncoder};

/// Build a [`HostObject`] carrying a unit payload, for wiring tests.
pub fn stub_object(kind: HostObjectKind) -> HostObject {
    HostObject::new(kind, Arc::new(()))
}

/// Asset resolver backed by an in-memory name set rooted at `/assets`.
#[derive(Default)]
pub struct StubAssetResolver {
    known: HashSet<String>,
}

impl StubAssetResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_assets<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl AssetResolver for StubAssetResolver {
    fn resolve(&self, folder: &str, name: &str) -> Result<PathBuf, HostError> {
        if self.known.contains(name) {
            Ok(PathBuf::from(format!("/assets/{}/{}", folder, name)))
        } else {
            Err(HostError::AssetNotFound {
                folder: folder.to_string(),
                name: name.to_string(),
            })
        }
    }
}

/// One recorded LoRA application.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedLora {
    pub path: PathBuf,
    pub strength_model: f32,
    pub strength_clip: f32,
}

/// LoRA library that records applications and passes handles through.
#[derive(Default)]
pub struct StubLoraLibrary {
    pub applied: Mutex<Vec<AppliedLora>>,
}

impl StubLoraLibrary {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LoraLibrary for StubLoraLibrary {
    fn apply(
        &self,
        model: Option<HostObject>,
        clip: Option<HostObject>,
        path: &Path,
        strength_model: f32,
        strength_clip: f32,
    ) -> Result<(Option<HostObject>, Option<HostObject>), HostError> {
        self.applied.lock().unwrap().push(AppliedLora {
            path: path.to_path_buf(),
            strength_model,
            strength_clip,
        });
        Ok((model, clip))
    }
}

/// LoRA library that always fails, for skip-and-continue tests.
pub struct FailingLoraLibrary;

impl LoraLibrary for FailingLoraLibrary {
    fn apply(
        &self,
        _model: Option<HostObject>,
        _clip: Option<HostObject>,
        _path: &Path,
        _strength_model: f32,
        _strength_clip: f32,
    ) -> Result<(Option<HostObject>, Option<HostObject>), HostError> {
        Err(HostError::Library("Simulated library failure".to_string()))
    }
}

/// Text encoder that wraps the prompt text into the conditioning handle so
/// tests can read back what was encoded.
#[derive(Default)]
pub struct StubTextEncoder;

impl StubTextEncoder {
    pub fn new() -> Self {
        Self
    }

    /// Read the text a stub conditioning handle was encoded from.
    pub fn encoded_text(conditioning: &HostObject) -> Option<&str> {
        conditioning.downcast_ref::<String>().map(String::as_str)
    }
}

impl TextEncoder for StubTextEncoder {
    fn encode(&self, _clip: &HostObject, text: &str) -> Result<HostObject, HostError> {
        Ok(HostObject::new(
            HostObjectKind::Conditioning,
            Arc::new(text.to_string()),
        ))
    }
}

/// Preview transport that records the format of every delivered frame.
#[derive(Default)]
pub struct StubPreviewTransport {
    pub sent: Mutex<Vec<PreviewFormat>>,
}

impl StubPreviewTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreviewTransport for StubPreviewTransport {
    fn send_image(&self, _image: &HostObject, format: PreviewFormat) -> Result<(), HostError> {
        self.sent.lock().unwrap().push(format);
        Ok(())
    }
}

/// Preview transport that always fails, for skip-and-continue tests.
pub struct FailingPreviewTransport;

impl PreviewTransport for FailingPreviewTransport {
    fn send_image(&self, _image: &HostObject, _format: PreviewFormat) -> Result<(), HostError> {
        Err(HostError::Transport("Simulated transport failure".to_string()))
    }
}

/// Fully stubbed [`HostServices`] with no known assets.
pub fn stub_services() -> HostServices {
    HostServices {
        assets: Arc::new(StubAssetResolver::new()),
        loras: Arc::new(StubLoraLibrary::new()),
        encoder: Arc::new(StubTextEncoder::new()),
        preview: Arc::new(StubPreviewTransport::new()),
    }
}
