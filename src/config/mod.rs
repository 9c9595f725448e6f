// Copyright (c) 2026 Easel Nodes contributors
// SPDX-License-Identifier: MIT

mod loader;
mod validation;


pub use loader::{
    load_and_validate_config, load_config, LoraConfig, PackConfig, PreviewConfig, PreviewFormat,
};
pub use validation::validate_config;
