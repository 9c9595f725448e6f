// Copyright (c) 2026 Easel Nodes contributors
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use serde_json::json;

use crate::config::PreviewFormat;
use crate::host::HostServices;
use crate::observability::messages::preview::{PreviewImageSent, PreviewSendFailed};
use crate::observability::messages::StructuredLog;
use crate::request::{NodeRequest, NodeResponse};
use crate::schema::{DataKind, InputDefault, InputSpec, NodeSchema};
use crate::traits::Node;
use crate::values::{HostObjectKind, Value};

/// Send Image Preview node - hands each image of a batch to the host's live
/// preview transport
///
/// Terminal node: it produces no wire outputs, only a ui record per
/// delivered image. A frame the transport rejects is logged and skipped;
/// the rest of the batch still goes out.
pub struct SendImagePreview {
    services: HostServices,
    default_format: PreviewFormat,
}

impl SendImagePreview {
    pub fn new(services: HostServices, default_format: PreviewFormat) -> Self {
        Self {
            services,
            default_format,
        }
    }

    fn requested_format(&self, req: &NodeRequest) -> PreviewFormat {
        match req.get("format") {
            Some(Value::Text(s)) => PreviewFormat::parse(s).unwrap_or_else(|| {
                tracing::warn!(format = %s, "Unknown preview format, using default");
                self.default_format
            }),
            _ => self.default_format,
        }
    }
}

#[async_trait]
impl Node for SendImagePreview {
    fn schema(&self) -> NodeSchema {
        NodeSchema::new("easel_send_image", "Send Image (Preview)", "preview")
            .input(InputSpec::required("images", DataKind::Image))
            .input(
                InputSpec::required("format", DataKind::Combo)
                    .with_default(InputDefault::Text(self.default_format.as_str()))
                    .with_options(&["PNG", "JPEG"]),
            )
            .output_node()
    }

    async fn execute(&self, req: NodeRequest) -> NodeResponse {
        let images = match req.list("images") {
            Ok(images) => images,
            Err(e) => return e.into(),
        };
        let format = self.requested_format(&req);

        let mut records = Vec::with_capacity(images.len());
        for (index, image) in images.iter().enumerate() {
            let image = match image {
                Value::Object(obj) if obj.kind() == HostObjectKind::Image => obj,
                other => {
                    return NodeResponse::error(
                        400,
                        format!(
                            "Input 'images' entry {} has wrong type: expected Image, found {}",
                            index,
                            other.kind_name()
                        ),
                    );
                }
            };

            match self.services.preview.send_image(image, format) {
                Ok(()) => {
                    PreviewImageSent {
                        index,
                        format: format.as_str(),
                    }
                    .log();
                    records.push(json!({
                        "source": "websocket",
                        "content-type": format.content_type(),
                        "type": "output",
                    }));
                }
                Err(error) => {
                    PreviewSendFailed {
                        index,
                        error: &error,
                    }
                    .log();
                }
            }
        }

        NodeResponse::values(Vec::new()).with_ui(json!({ "images": records }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::stub::{
        stub_object, FailingPreviewTransport, StubAssetResolver, StubLoraLibrary,
        StubPreviewTransport, StubTextEncoder,
    };
    use crate::request::Outcome;
    use std::sync::Arc;

    fn services_with(preview: Arc<dyn crate::host::PreviewTransport>) -> HostServices {
        HostServices {
            assets: Arc::new(StubAssetResolver::new()),
            loras: Arc::new(StubLoraLibrary::new()),
            encoder: Arc::new(StubTextEncoder::new()),
            preview,
        }
    }

    fn image_batch(count: usize) -> Value {
        Value::List(
            (0..count)
                .map(|_| Value::Object(stub_object(HostObjectKind::Image)))
                .collect(),
        )
    }

    #[tokio::test]
    async fn sends_each_image_and_reports_ui_records() {
        let transport = Arc::new(StubPreviewTransport::new());
        let node = SendImagePreview::new(services_with(transport.clone()), PreviewFormat::Png);

        let req = NodeRequest::new()
            .with("images", image_batch(3))
            .with("format", Value::Text("JPEG".to_string()));
        let response = node.execute(req).await;

        assert!(matches!(response.outcome, Outcome::Values(v) if v.is_empty()));
        assert_eq!(
            *transport.sent.lock().unwrap(),
            vec![PreviewFormat::Jpeg; 3]
        );

        let ui = response.ui.expect("Output node reports a ui payload");
        let records = ui["images"].as_array().unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0]["content-type"], "image/jpeg");
        assert_eq!(records[0]["source"], "websocket");
        assert_eq!(records[0]["type"], "output");
    }

    #[tokio::test]
    async fn unwired_format_uses_the_configured_default() {
        let transport = Arc::new(StubPreviewTransport::new());
        let node = SendImagePreview::new(services_with(transport.clone()), PreviewFormat::Png);

        let req = NodeRequest::new().with("images", image_batch(1));
        node.execute(req).await;

        assert_eq!(*transport.sent.lock().unwrap(), vec![PreviewFormat::Png]);
    }

    #[tokio::test]
    async fn transport_failure_skips_the_frame_but_not_the_node() {
        let node =
            SendImagePreview::new(services_with(Arc::new(FailingPreviewTransport)), PreviewFormat::Png);

        let req = NodeRequest::new().with("images", image_batch(2));
        let response = node.execute(req).await;

        assert!(matches!(response.outcome, Outcome::Values(_)));
        let ui = response.ui.expect("ui payload present even when empty");
        assert_eq!(ui["images"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn non_image_entry_is_a_contract_error() {
        let node = SendImagePreview::new(
            services_with(Arc::new(StubPreviewTransport::new())),
            PreviewFormat::Png,
        );

        let req = NodeRequest::new().with("images", Value::List(vec![Value::Int(7)]));
        let response = node.execute(req).await;
        assert!(matches!(response.outcome, Outcome::Error(d) if d.code == 400));
    }
}
