// Copyright (c) 2026 Easel Nodes contributors
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Pack-level configuration.
///
/// Loaded from a YAML file the host places next to the pack. Every field
/// has a default, so a missing or empty file yields a fully working pack.
///
/// # Example
/// ```yaml
/// enabled_nodes:
///   - easel_prompt_encoder
///   - easel_send_image
/// lora:
///   extensions:
///     - ".safetensors"
/// preview:
///   default_format: JPEG
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackConfig {
    /// Node ids to register; `None` registers the whole pack.
    #[serde(default)]
    pub enabled_nodes: Option<Vec<String>>,
    #[serde(default)]
    pub lora: LoraConfig,
    #[serde(default)]
    pub preview: PreviewConfig,
}

/// LoRA tag resolution options.
#[derive(Debug, Clone, Deserialize)]
pub struct LoraConfig {
    /// Filename extensions tried when resolving a tag name, in order.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for LoraConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
        }
    }
}

fn default_extensions() -> Vec<String> {
    vec![".safetensors".to_string()]
}

/// Preview transport options.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PreviewConfig {
    #[serde(default)]
    pub default_format: PreviewFormat,
}

/// Encoding for frames handed to the preview transport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PreviewFormat {
    #[default]
    Png,
    Jpeg,
}

impl PreviewFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            PreviewFormat::Png => "PNG",
            PreviewFormat::Jpeg => "JPEG",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            PreviewFormat::Png => "image/png",
            PreviewFormat::Jpeg => "image/jpeg",
        }
    }

    /// Parse a combo widget string, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PNG" => Some(PreviewFormat::Png),
            "JPEG" | "JPG" => Some(PreviewFormat::Jpeg),
            _ => None,
        }
    }
}

/// Load a pack configuration from a YAML file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<PackConfig, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;
    let config = serde_yaml::from_str(&contents)?;
    Ok(config)
}

/// Load a pack configuration and validate it in one step.
pub fn load_and_validate_config<P: AsRef<Path>>(
    path: P,
) -> Result<PackConfig, Box<dyn std::error::Error>> {
    let config = load_config(path)?;
    super::validate_config(&config)?;
    Ok(config)
}
