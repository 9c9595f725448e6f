// Copyright (c) 2026 Easel Nodes contributors
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::request::{NodeRequest, NodeResponse};
use crate::schema::{DataKind, InputSpec, NodeSchema, OutputSpec};
use crate::traits::Node;
use crate::values::{HostObjectKind, PipeBundle, Value};

/// Sampler Pipe In node - bundles up to seven sampler objects onto one wire
pub struct SamplerPipeIn;

/// Sampler Pipe Out node - unbundles a pipe back into its seven slots
pub struct SamplerPipeOut;

// Slot order is shared by both schemas and by the unbundled output list.
const SLOTS: [(&str, DataKind, HostObjectKind); 7] = [
    ("model", DataKind::Model, HostObjectKind::Model),
    ("positive", DataKind::Conditioning, HostObjectKind::Conditioning),
    ("negative", DataKind::Conditioning, HostObjectKind::Conditioning),
    ("vae", DataKind::Vae, HostObjectKind::Vae),
    ("image", DataKind::Image, HostObjectKind::Image),
    ("clip", DataKind::Clip, HostObjectKind::Clip),
    ("latent", DataKind::Latent, HostObjectKind::Latent),
];

#[async_trait]
impl Node for SamplerPipeIn {
    fn schema(&self) -> NodeSchema {
        let mut schema = NodeSchema::new("easel_pipe_in", "Sampler Pipe In", "utility");
        for (name, kind, _) in SLOTS {
            schema = schema.input(InputSpec::optional(name, kind));
        }
        schema.output(OutputSpec::new("pipe", DataKind::Pipe))
    }

    async fn execute(&self, req: NodeRequest) -> NodeResponse {
        let mut bundle = PipeBundle::default();
        for (name, _, object_kind) in SLOTS {
            let value = match req.optional_object(name, object_kind) {
                Ok(value) => value,
                Err(e) => return e.into(),
            };
            match name {
                "model" => bundle.model = value,
                "positive" => bundle.positive = value,
                "negative" => bundle.negative = value,
                "vae" => bundle.vae = value,
                "image" => bundle.image = value,
                "clip" => bundle.clip = value,
                _ => bundle.latent = value,
            }
        }
        NodeResponse::values(vec![Value::Pipe(bundle)])
    }
}

#[async_trait]
impl Node for SamplerPipeOut {
    fn schema(&self) -> NodeSchema {
        let mut schema = NodeSchema::new("easel_pipe_out", "Sampler Pipe Out", "utility")
            .input(InputSpec::optional("pipe", DataKind::Pipe));
        for (name, kind, _) in SLOTS {
            schema = schema.output(OutputSpec::new(name, kind));
        }
        schema
    }

    async fn execute(&self, req: NodeRequest) -> NodeResponse {
        let bundle = match req.optional_pipe("pipe") {
            Ok(bundle) => bundle,
            Err(e) => return e.into(),
        };

        NodeResponse::values(vec![
            Value::from(bundle.model),
            Value::from(bundle.positive),
            Value::from(bundle.negative),
            Value::from(bundle.vae),
            Value::from(bundle.image),
            Value::from(bundle.clip),
            Value::from(bundle.latent),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::stub::stub_object;
    use crate::request::Outcome;

    fn unwrap_values(response: NodeResponse) -> Vec<Value> {
        match response.outcome {
            Outcome::Values(values) => values,
            Outcome::Error(e) => panic!("Unexpected error: {}", e.message),
        }
    }

    #[tokio::test]
    async fn bundle_then_unbundle_returns_exactly_the_wired_inputs() {
        let req = NodeRequest::new()
            .with("model", Value::Object(stub_object(HostObjectKind::Model)))
            .with("vae", Value::Object(stub_object(HostObjectKind::Vae)));

        let bundled = unwrap_values(SamplerPipeIn.execute(req).await);
        let pipe = bundled.into_iter().next().unwrap();

        let out_req = NodeRequest::new().with("pipe", pipe);
        let values = unwrap_values(SamplerPipeOut.execute(out_req).await);

        assert_eq!(values.len(), 7);
        assert!(!values[0].is_null(), "model should survive the round trip");
        assert!(values[1].is_null(), "positive was never wired");
        assert!(values[2].is_null());
        assert!(!values[3].is_null(), "vae should survive the round trip");
        assert!(values[4].is_null());
        assert!(values[5].is_null());
        assert!(values[6].is_null());
    }

    #[tokio::test]
    async fn missing_pipe_unbundles_as_all_null() {
        let values = unwrap_values(SamplerPipeOut.execute(NodeRequest::new()).await);
        assert_eq!(values.len(), 7);
        assert!(values.iter().all(Value::is_null));
    }

    #[tokio::test]
    async fn wrong_object_kind_is_a_contract_error() {
        let req = NodeRequest::new()
            .with("model", Value::Object(stub_object(HostObjectKind::Vae)));
        let response = SamplerPipeIn.execute(req).await;
        assert!(matches!(response.outcome, Outcome::Error(d) if d.code == 400));
    }
}
