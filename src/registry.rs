// Copyright (c) 2026 Easel Nodes contributors
// SPDX-License-Identifier: MIT

//! The node registry handed to the host at registration time.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::PackConfig;
use crate::errors::RegistryError;
use crate::host::HostServices;
use crate::nodes::NodeFactory;
use crate::schema::NodeSchema;
use crate::traits::Node;

/// Newtype wrapper for the node registry providing type safety
#[derive(Clone, Default)]
pub struct NodeMap(pub HashMap<String, Arc<dyn Node>>);

impl NodeMap {
    /// Create a new empty node map
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Insert a node into the map
    pub fn insert(&mut self, id: String, node: Arc<dyn Node>) {
        self.0.insert(id, node);
    }

    /// Get a node by id
    pub fn get(&self, id: &str) -> Option<&Arc<dyn Node>> {
        self.0.get(id)
    }

    /// Check if a node exists
    pub fn contains_key(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    /// Get all node ids
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for NodeMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeMap")
            .field("node_count", &self.0.len())
            .field("node_ids", &self.0.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl From<HashMap<String, Arc<dyn Node>>> for NodeMap {
    fn from(map: HashMap<String, Arc<dyn Node>>) -> Self {
        Self(map)
    }
}

impl From<NodeMap> for HashMap<String, Arc<dyn Node>> {
    fn from(map: NodeMap) -> Self {
        map.0
    }
}

/// Build the registry of enabled nodes from configuration.
///
/// An absent enable list registers the whole pack. Validation runs before
/// this, so an unknown id here is a programming error surfaced as
/// [`RegistryError`] rather than a panic.
pub fn build_registry(
    config: &PackConfig,
    services: &HostServices,
) -> Result<NodeMap, RegistryError> {
    let ids: Vec<String> = match &config.enabled_nodes {
        Some(ids) => ids.clone(),
        None => NodeFactory::available_ids()
            .into_iter()
            .map(str::to_string)
            .collect(),
    };

    let mut registry = NodeMap::new();
    for id in ids {
        let node = NodeFactory::create(&id, config, services)?;
        registry.insert(id, node);
    }
    Ok(registry)
}

/// Collect the static schemas the host ingests at registration time.
pub fn collect_schemas(registry: &NodeMap) -> Vec<NodeSchema> {
    let mut schemas: Vec<NodeSchema> = registry.0.values().map(|node| node.schema()).collect();
    schemas.sort_by_key(|schema| schema.node_id);
    schemas
}
