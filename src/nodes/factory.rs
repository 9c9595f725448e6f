// Copyright (c) 2026 Easel Nodes contributors
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::config::PackConfig;
use crate::errors::RegistryError;
use crate::host::HostServices;
use crate::traits::Node;

use super::{
    ConditionalSelect, ImageSizeMultiplier, PromptEncoder, PromptEncoderWithAppend, SamplerPipeIn,
    SamplerPipeOut, SamplerStrength, SendImagePreview,
};

/// Factory for creating node instances by id
pub struct NodeFactory;

impl NodeFactory {
    /// Create a node instance from its registered id
    ///
    /// Stateless nodes ignore the configuration; the encoder nodes take the
    /// LoRA extension list and the preview node its default format from it.
    pub fn create(
        node_id: &str,
        config: &PackConfig,
        services: &HostServices,
    ) -> Result<Arc<dyn Node>, RegistryError> {
        match node_id {
            "easel_conditional_select" => Ok(Arc::new(ConditionalSelect)),
            "easel_pipe_in" => Ok(Arc::new(SamplerPipeIn)),
            "easel_pipe_out" => Ok(Arc::new(SamplerPipeOut)),
            "easel_image_size_multiplier" => Ok(Arc::new(ImageSizeMultiplier)),
            "easel_sampler_strength" => Ok(Arc::new(SamplerStrength)),

            "easel_prompt_encoder" => Ok(Arc::new(PromptEncoder::new(
                services.clone(),
                config.lora.extensions.clone(),
            ))),
            "easel_prompt_encoder_append" => Ok(Arc::new(PromptEncoderWithAppend::new(
                services.clone(),
                config.lora.extensions.clone(),
            ))),

            "easel_send_image" => Ok(Arc::new(SendImagePreview::new(
                services.clone(),
                config.preview.default_format,
            ))),

            _ => Err(RegistryError::UnknownNodeId {
                node_id: node_id.to_string(),
            }),
        }
    }

    /// List all node ids this pack provides
    pub fn available_ids() -> Vec<&'static str> {
        vec![
            "easel_conditional_select",
            "easel_pipe_in",
            "easel_pipe_out",
            "easel_image_size_multiplier",
            "easel_sampler_strength",
            "easel_prompt_encoder",
            "easel_prompt_encoder_append",
            "easel_send_image",
        ]
    }

    /// Check if a node id is available
    pub fn is_available(node_id: &str) -> bool {
        Self::available_ids().contains(&node_id)
    }
}
