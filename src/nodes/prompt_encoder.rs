// Copyright (c) 2026 Easel Nodes contributors
// SPDX-License-Identifier: MIT

use std::time::Instant;

use async_trait::async_trait;

use crate::host::HostServices;
use crate::lora::apply_tags;
use crate::observability::messages::node::{
    NodeExecutionCompleted, NodeExecutionFailed, NodeExecutionStarted,
};
use crate::observability::messages::StructuredLog;
use crate::request::{NodeRequest, NodeResponse};
use crate::schema::{DataKind, InputSpec, NodeSchema, OutputSpec};
use crate::traits::Node;
use crate::values::{HostObject, HostObjectKind, Value};

/// Prompt Encoder node - encodes positive/negative prompts, applying inline
/// LoRA tags to the model/clip pair first
pub struct PromptEncoder {
    services: HostServices,
    extensions: Vec<String>,
}

impl PromptEncoder {
    pub fn new(services: HostServices, extensions: Vec<String>) -> Self {
        Self {
            services,
            extensions,
        }
    }
}

/// Prompt Encoder (Append) node - like [`PromptEncoder`] with extra prompt
/// fragments merged in before LoRA handling, for hosts that inject
/// style or selection text alongside the user's prompt
pub struct PromptEncoderWithAppend {
    services: HostServices,
    extensions: Vec<String>,
}

impl PromptEncoderWithAppend {
    pub fn new(services: HostServices, extensions: Vec<String>) -> Self {
        Self {
            services,
            extensions,
        }
    }
}

/// Join two prompt fragments with a comma, returning the non-empty side
/// unchanged when the other is blank.
pub fn merge_prompts(base: &str, extra: &str) -> String {
    let base = base.trim();
    let extra = extra.trim();
    if base.is_empty() {
        return extra.to_string();
    }
    if extra.is_empty() {
        return base.to_string();
    }
    format!("{}, {}", base, extra)
}

/// Shared execution path for both encoder nodes.
///
/// LoRA tags from both prompts act on the same model/clip pair, positive
/// first, matching the order a user reads the graph in.
async fn encode(
    node_id: &'static str,
    services: &HostServices,
    extensions: &[String],
    req: &NodeRequest,
    positive: String,
    negative: String,
) -> NodeResponse {
    let start_msg = NodeExecutionStarted {
        node_id,
        input_count: req.len(),
    };
    let span = start_msg.span("node_execution");
    let _guard = span.enter();
    start_msg.log();
    let start_time = Instant::now();

    let model = match req.optional_object("model", HostObjectKind::Model) {
        Ok(model) => model,
        Err(e) => {
            NodeExecutionFailed { node_id, error: &e }.log();
            return e.into();
        }
    };
    let clip = match req.object("clip", HostObjectKind::Clip) {
        Ok(clip) => clip,
        Err(e) => {
            NodeExecutionFailed { node_id, error: &e }.log();
            return e.into();
        }
    };

    let (model, clip, positive) = apply_tags(services, extensions, model, Some(clip), &positive);
    let (model, clip, negative) = apply_tags(services, extensions, model, clip, &negative);

    let positive_cond = match encode_text(services, clip.as_ref(), &positive) {
        Ok(cond) => cond,
        Err(e) => {
            NodeExecutionFailed { node_id, error: &e }.log();
            return NodeResponse::error(500, format!("Failed to encode prompt: {}", e));
        }
    };
    let negative_cond = match encode_text(services, clip.as_ref(), &negative) {
        Ok(cond) => cond,
        Err(e) => {
            NodeExecutionFailed { node_id, error: &e }.log();
            return NodeResponse::error(500, format!("Failed to encode prompt: {}", e));
        }
    };

    NodeExecutionCompleted {
        node_id,
        output_count: 3,
        duration: start_time.elapsed(),
    }
    .log();

    NodeResponse::values(vec![Value::from(model), positive_cond, negative_cond])
}

/// Empty text and a lost clip handle both yield a null conditioning rather
/// than a host round trip; the host treats null as "condition on nothing".
fn encode_text(
    services: &HostServices,
    clip: Option<&HostObject>,
    text: &str,
) -> Result<Value, crate::errors::HostError> {
    let text = text.trim();
    let clip = match clip {
        Some(clip) if !text.is_empty() => clip,
        _ => return Ok(Value::Null),
    };
    services
        .encoder
        .encode(clip, text)
        .map(Value::Object)
}

fn encoder_schema(
    node_id: &'static str,
    display_name: &'static str,
    description: &'static str,
    with_append: bool,
) -> NodeSchema {
    let mut schema = NodeSchema::new(node_id, display_name, "conditioning")
        .description(description)
        .input(InputSpec::optional("model", DataKind::Model))
        .input(InputSpec::required("clip", DataKind::Clip))
        .input(InputSpec::required("positive", DataKind::String).multiline())
        .input(InputSpec::required("negative", DataKind::String).multiline());
    if with_append {
        schema = schema
            .input(InputSpec::required("append_positive", DataKind::String).multiline())
            .input(InputSpec::required("append_negative", DataKind::String).multiline());
    }
    schema
        .output(OutputSpec::new("MODEL", DataKind::Model))
        .output(OutputSpec::new("Positive", DataKind::Conditioning))
        .output(OutputSpec::new("Negative", DataKind::Conditioning))
}

#[async_trait]
impl Node for PromptEncoder {
    fn schema(&self) -> NodeSchema {
        encoder_schema(
            "easel_prompt_encoder",
            "Prompt Encoder",
            "CLIP text encoder that supports loading LoRAs via <lora:name:weight> tags.",
            false,
        )
    }

    async fn execute(&self, req: NodeRequest) -> NodeResponse {
        let positive = match req.text_or_empty("positive") {
            Ok(text) => text.to_string(),
            Err(e) => return e.into(),
        };
        let negative = match req.text_or_empty("negative") {
            Ok(text) => text.to_string(),
            Err(e) => return e.into(),
        };

        encode(
            "easel_prompt_encoder",
            &self.services,
            &self.extensions,
            &req,
            positive,
            negative,
        )
        .await
    }
}

#[async_trait]
impl Node for PromptEncoderWithAppend {
    fn schema(&self) -> NodeSchema {
        encoder_schema(
            "easel_prompt_encoder_append",
            "Prompt Encoder (Append)",
            "CLIP text encoder that supports loading LoRAs via <lora:name:weight> tags \
             and appending extra host-supplied fragments to each prompt.",
            true,
        )
    }

    async fn execute(&self, req: NodeRequest) -> NodeResponse {
        let merged = (|| {
            let positive = merge_prompts(
                req.text_or_empty("positive")?,
                req.text_or_empty("append_positive")?,
            );
            let negative = merge_prompts(
                req.text_or_empty("negative")?,
                req.text_or_empty("append_negative")?,
            );
            Ok::<_, crate::errors::NodeError>((positive, negative))
        })();
        let (positive, negative) = match merged {
            Ok(merged) => merged,
            Err(e) => return e.into(),
        };

        encode(
            "easel_prompt_encoder_append",
            &self.services,
            &self.extensions,
            &req,
            positive,
            negative,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::stub::{
        stub_object, StubAssetResolver, StubLoraLibrary, StubPreviewTransport, StubTextEncoder,
    };
    use crate::request::Outcome;
    use std::sync::Arc;

    fn services(assets: &[&str]) -> (HostServices, Arc<StubLoraLibrary>) {
        let loras = Arc::new(StubLoraLibrary::new());
        let services = HostServices {
            assets: Arc::new(StubAssetResolver::with_assets(assets.iter().copied())),
            loras: loras.clone(),
            encoder: Arc::new(StubTextEncoder::new()),
            preview: Arc::new(StubPreviewTransport::new()),
        };
        (services, loras)
    }

    fn extensions() -> Vec<String> {
        vec![".safetensors".to_string()]
    }

    fn base_request() -> NodeRequest {
        NodeRequest::new()
            .with("model", Value::Object(stub_object(HostObjectKind::Model)))
            .with("clip", Value::Object(stub_object(HostObjectKind::Clip)))
    }

    fn conditioning_text(value: &Value) -> Option<&str> {
        match value {
            Value::Object(obj) => StubTextEncoder::encoded_text(obj),
            _ => None,
        }
    }

    #[test]
    fn merge_keeps_both_sides_with_separator() {
        assert_eq!(merge_prompts("a castle", "dramatic light"), "a castle, dramatic light");
    }

    #[test]
    fn merge_returns_nonempty_side_unchanged() {
        assert_eq!(merge_prompts("a castle", ""), "a castle");
        assert_eq!(merge_prompts("", "dramatic light"), "dramatic light");
        assert_eq!(merge_prompts("  a castle  ", "   "), "a castle");
        assert_eq!(merge_prompts("", ""), "");
    }

    #[tokio::test]
    async fn encodes_cleaned_prompts_and_applies_tags() {
        let (services, loras) = services(&["detail.safetensors"]);
        let node = PromptEncoder::new(services, extensions());

        let req = base_request()
            .with("positive", Value::Text("a castle <lora:detail:0.7>".to_string()))
            .with("negative", Value::Text("blurry".to_string()));

        let values = match node.execute(req).await.outcome {
            Outcome::Values(values) => values,
            Outcome::Error(e) => panic!("Unexpected error: {}", e.message),
        };

        assert!(!values[0].is_null(), "model passes through");
        assert_eq!(conditioning_text(&values[1]), Some("a castle"));
        assert_eq!(conditioning_text(&values[2]), Some("blurry"));

        let applied = loras.applied.lock().unwrap();
        assert_eq!(applied.len(), 1);
        assert_eq!(applied[0].strength_model, 0.7);
    }

    #[tokio::test]
    async fn empty_prompt_yields_null_conditioning() {
        let (services, _) = services(&[]);
        let node = PromptEncoder::new(services, extensions());

        let req = base_request()
            .with("positive", Value::Text("a castle".to_string()))
            .with("negative", Value::Text("  ".to_string()));

        let values = match node.execute(req).await.outcome {
            Outcome::Values(values) => values,
            Outcome::Error(e) => panic!("Unexpected error: {}", e.message),
        };

        assert_eq!(conditioning_text(&values[1]), Some("a castle"));
        assert!(values[2].is_null());
    }

    #[tokio::test]
    async fn unresolvable_tag_reaches_the_encoder_verbatim() {
        let (services, _) = services(&[]);
        let node = PromptEncoder::new(services, extensions());

        let req = base_request()
            .with("positive", Value::Text("<lora:missing> a castle".to_string()))
            .with("negative", Value::Text(String::new()));

        let values = match node.execute(req).await.outcome {
            Outcome::Values(values) => values,
            Outcome::Error(e) => panic!("Unexpected error: {}", e.message),
        };

        assert_eq!(conditioning_text(&values[1]), Some("<lora:missing> a castle"));
    }

    #[tokio::test]
    async fn append_fragments_merge_before_tag_handling() {
        let (services, loras) = services(&["style.safetensors"]);
        let node = PromptEncoderWithAppend::new(services, extensions());

        let req = base_request()
            .with("positive", Value::Text("a castle".to_string()))
            .with("negative", Value::Text(String::new()))
            .with("append_positive", Value::Text("<lora:style:0.4> oil painting".to_string()))
            .with("append_negative", Value::Text("blurry".to_string()));

        let values = match node.execute(req).await.outcome {
            Outcome::Values(values) => values,
            Outcome::Error(e) => panic!("Unexpected error: {}", e.message),
        };

        assert_eq!(conditioning_text(&values[1]), Some("a castle,  oil painting"));
        assert_eq!(conditioning_text(&values[2]), Some("blurry"));
        assert_eq!(loras.applied.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn missing_clip_is_a_contract_error() {
        let (services, _) = services(&[]);
        let node = PromptEncoder::new(services, extensions());

        let req = NodeRequest::new()
            .with("positive", Value::Text("a castle".to_string()))
            .with("negative", Value::Text(String::new()));

        assert!(matches!(
            node.execute(req).await.outcome,
            Outcome::Error(d) if d.code == 400
        ));
    }
}
