// Copyright (c) 2026 Easel Nodes contributors
// SPDX-License-Identifier: MIT

use std::env;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use easel_nodes::config::{load_and_validate_config, PackConfig};
use easel_nodes::host::stub::{stub_object, StubAssetResolver, StubLoraLibrary, StubPreviewTransport, StubTextEncoder};
use easel_nodes::host::HostServices;
use easel_nodes::registry::{build_registry, collect_schemas, NodeMap};
use easel_nodes::request::{NodeRequest, Outcome};
use easel_nodes::values::{HostObjectKind, Value};

/// Demo host services: an in-memory asset database with one known LoRA and
/// recording stubs for everything else.
fn demo_services() -> HostServices {
    HostServices {
        assets: Arc::new(StubAssetResolver::with_assets(["detail.safetensors"])),
        loras: Arc::new(StubLoraLibrary::new()),
        encoder: Arc::new(StubTextEncoder::new()),
        preview: Arc::new(StubPreviewTransport::new()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    let config = match args.get(1) {
        Some(path) => load_and_validate_config(path)
            .map_err(|e| anyhow::anyhow!("{}", e))
            .with_context(|| format!("loading {}", path))?,
        None => PackConfig::default(),
    };

    let services = demo_services();
    let registry = build_registry(&config, &services).context("building node registry")?;

    println!("🎨 Easel Nodes Pack Demo");
    println!("═══════════════════════════");
    println!();
    println!("📋 Registered nodes:");
    for schema in collect_schemas(&registry) {
        println!(
            "  • {} ({}): {} inputs, {} outputs{}",
            schema.node_id,
            schema.category,
            schema.inputs.len(),
            schema.outputs.len(),
            if schema.is_output_node { ", output node" } else { "" },
        );
    }
    println!();

    let start = Instant::now();

    run_node(
        &registry,
        "easel_conditional_select",
        "Conditional Select",
        NodeRequest::new()
            .with("condition", Value::Bool(true))
            .with("true_value", Value::Text("high quality".to_string()))
            .with("false_value", Value::Text("draft".to_string())),
    )
    .await;

    run_node(
        &registry,
        "easel_image_size_multiplier",
        "Image Size Multiplier (512x512 ×2.0)",
        NodeRequest::new()
            .with("width", Value::Int(512))
            .with("height", Value::Int(512))
            .with("multiplier", Value::Float(2.0)),
    )
    .await;

    run_node(
        &registry,
        "easel_sampler_strength",
        "Sampler Strength (21 sigmas, strength 0.5)",
        NodeRequest::new()
            .with("sigmas", Value::Sigmas(vec![1.0; 21]))
            .with("strength", Value::Float(0.5))
            .with("denoise", Value::Float(1.0)),
    )
    .await;

    run_node(
        &registry,
        "easel_prompt_encoder",
        "Prompt Encoder (with a resolvable and an unresolvable tag)",
        NodeRequest::new()
            .with("model", Value::Object(stub_object(HostObjectKind::Model)))
            .with("clip", Value::Object(stub_object(HostObjectKind::Clip)))
            .with(
                "positive",
                Value::Text("a castle <lora:detail:0.8> <lora:missing:0.3> at dusk".to_string()),
            )
            .with("negative", Value::Text("blurry, artifacts".to_string())),
    )
    .await;

    run_node(
        &registry,
        "easel_send_image",
        "Send Image (Preview), 2-image batch",
        NodeRequest::new()
            .with(
                "images",
                Value::List(vec![
                    Value::Object(stub_object(HostObjectKind::Image)),
                    Value::Object(stub_object(HostObjectKind::Image)),
                ]),
            )
            .with("format", Value::Text("JPEG".to_string())),
    )
    .await;

    println!("⏱️  Total demo time: {:?}", start.elapsed());
    println!();
    println!("🎉 Demo complete!");
    Ok(())
}

async fn run_node(registry: &NodeMap, id: &str, title: &str, req: NodeRequest) {
    println!("▶️  {}", title);
    let Some(node) = registry.get(id) else {
        println!("   (node '{}' not enabled in this configuration)\n", id);
        return;
    };

    let response = node.execute(req).await;
    match response.outcome {
        Outcome::Values(values) if values.is_empty() => {
            println!("   ✅ no wire outputs");
        }
        Outcome::Values(values) => {
            for (i, value) in values.iter().enumerate() {
                println!("   ✅ output[{}] = {}", i, describe(value));
            }
        }
        Outcome::Error(detail) => {
            println!("   ❌ error {}: {}", detail.code, detail.message);
        }
    }
    if let Some(ui) = response.ui {
        println!("   🖼  ui: {}", ui);
    }
    println!();
}

fn describe(value: &Value) -> String {
    match value {
        Value::Text(s) => format!("{:?}", s),
        Value::Object(obj) => {
            // The stub encoder stores the encoded text inside the handle.
            match StubTextEncoder::encoded_text(obj) {
                Some(text) => format!("{} {:?}", obj.kind(), text),
                None => format!("{:?}", obj),
            }
        }
        other => format!("{:?}", other),
    }
}
