// Copyright (c) 2026 Easel Nodes contributors
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::request::{NodeRequest, NodeResponse};
use crate::schema::{DataKind, InputDefault, InputSpec, NodeSchema, OutputSpec};
use crate::traits::Node;
use crate::values::Value;

/// Image Size Multiplier node - scales a width/height pair
pub struct ImageSizeMultiplier;

#[async_trait]
impl Node for ImageSizeMultiplier {
    fn schema(&self) -> NodeSchema {
        NodeSchema::new("easel_image_size_multiplier", "Image Size Multiplier", "utility")
            .input(InputSpec::required("width", DataKind::Int))
            .input(InputSpec::required("height", DataKind::Int))
            .input(
                InputSpec::required("multiplier", DataKind::Float)
                    .with_default(InputDefault::Float(1.0))
                    .bounded(0.0, 10.0),
            )
            .output(OutputSpec::new("Width", DataKind::Int))
            .output(OutputSpec::new("Height", DataKind::Int))
            .output(OutputSpec::new("Final Size", DataKind::String))
    }

    async fn execute(&self, req: NodeRequest) -> NodeResponse {
        let width = match req.int("width") {
            Ok(width) => width,
            Err(e) => return e.into(),
        };
        let height = match req.int("height") {
            Ok(height) => height,
            Err(e) => return e.into(),
        };
        let multiplier = match req.float_or("multiplier", 1.0) {
            Ok(multiplier) => multiplier,
            Err(e) => return e.into(),
        };

        // Truncating, matching the host's integer widget semantics.
        let new_width = (width as f64 * multiplier) as i64;
        let new_height = (height as f64 * multiplier) as i64;
        let size_md = format!(
            "### Image Size:\nWidth: {}\nHeight: {}",
            new_width, new_height
        );

        NodeResponse::values(vec![
            Value::Int(new_width),
            Value::Int(new_height),
            Value::Text(size_md),
        ])
    }
}
