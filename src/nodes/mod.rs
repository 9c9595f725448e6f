// Copyright (c) 2026 Easel Nodes contributors
// SPDX-License-Identifier: MIT

//! The node pack: a flat list of independent, stateless nodes.
//!
//! Each node is a small transformation the host's graph executor invokes
//! with already-validated inputs. There is no data flow or ordering between
//! the nodes here; composition happens entirely in the host's graph.

pub mod conditional_select;
pub mod factory;
pub mod image_size;
pub mod prompt_encoder;
pub mod sampler_pipe;
pub mod sampler_strength;
pub mod send_image;


pub use conditional_select::ConditionalSelect;
pub use factory::NodeFactory;
pub use image_size::ImageSizeMultiplier;
pub use prompt_encoder::{PromptEncoder, PromptEncoderWithAppend};
pub use sampler_pipe::{SamplerPipeIn, SamplerPipeOut};
pub use sampler_strength::SamplerStrength;
pub use send_image::SendImagePreview;
