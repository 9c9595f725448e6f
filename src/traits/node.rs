// Copyright (c) 2026 Easel Nodes contributors
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::request::{NodeRequest, NodeResponse};
use crate::schema::NodeSchema;

/// A registered unit of computation exposed to the host's graph editor.
///
/// Nodes are stateless: `execute` is a pure function of its request apart
/// from calls through the host collaborator traits. The host owns all
/// concurrency, ordering and caching around invocations.
#[async_trait]
pub trait Node: Send + Sync {
    /// Static metadata the host ingests at registration time.
    fn schema(&self) -> NodeSchema;

    /// Perform the transformation.
    async fn execute(&self, req: NodeRequest) -> NodeResponse;
}
