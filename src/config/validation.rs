// Copyright (c) 2026 Easel Nodes contributors
// SPDX-License-Identifier: MIT

use std::collections::HashSet;

use crate::errors::ValidationError;
use crate::nodes::NodeFactory;

use super::PackConfig;

/// Validate a pack configuration before building the registry.
///
/// Rejects enable lists naming unknown or duplicate node ids, and an empty
/// LoRA extension list (which would make every inline tag unresolvable in
/// the common case of extension-less tag names).
pub fn validate_config(config: &PackConfig) -> Result<(), ValidationError> {
    if config.lora.extensions.is_empty() {
        return Err(ValidationError::NoExtensions);
    }

    if let Some(ids) = &config.enabled_nodes {
        let mut seen = HashSet::new();
        for id in ids {
            if !NodeFactory::is_available(id) {
                return Err(ValidationError::UnknownNode {
                    node_id: id.clone(),
                });
            }
            if !seen.insert(id.as_str()) {
                return Err(ValidationError::DuplicateNodeId {
                    node_id: id.clone(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoraConfig;

    #[test]
    fn default_config_validates() {
        assert!(validate_config(&PackConfig::default()).is_ok());
    }

    #[test]
    fn unknown_node_id_is_rejected() {
        let config = PackConfig {
            enabled_nodes: Some(vec!["easel_nonexistent".to_string()]),
            ..Default::default()
        };
        assert_eq!(
            validate_config(&config),
            Err(ValidationError::UnknownNode {
                node_id: "easel_nonexistent".to_string()
            })
        );
    }

    #[test]
    fn duplicate_node_id_is_rejected() {
        let config = PackConfig {
            enabled_nodes: Some(vec![
                "easel_pipe_in".to_string(),
                "easel_pipe_in".to_string(),
            ]),
            ..Default::default()
        };
        assert!(matches!(
            validate_config(&config),
            Err(ValidationError::DuplicateNodeId { .. })
        ));
    }

    #[test]
    fn empty_extension_list_is_rejected() {
        let config = PackConfig {
            lora: LoraConfig { extensions: vec![] },
            ..Default::default()
        };
        assert_eq!(validate_config(&config), Err(ValidationError::NoExtensions));
    }
}
