// Copyright (c) 2026 Easel Nodes contributors
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::request::{NodeRequest, NodeResponse};
use crate::schema::{DataKind, InputSpec, NodeSchema, OutputSpec};
use crate::traits::Node;

/// Conditional Select node - routes one of two wires based on a boolean
pub struct ConditionalSelect;

#[async_trait]
impl Node for ConditionalSelect {
    fn schema(&self) -> NodeSchema {
        NodeSchema::new("easel_conditional_select", "Conditional Select", "logic")
            .input(InputSpec::required("condition", DataKind::Boolean))
            .input(InputSpec::required("true_value", DataKind::Any))
            .input(InputSpec::required("false_value", DataKind::Any))
            .output(OutputSpec::new("value", DataKind::Any))
    }

    async fn execute(&self, req: NodeRequest) -> NodeResponse {
        let condition = match req.bool("condition") {
            Ok(condition) => condition,
            Err(e) => return e.into(),
        };

        let selected = if condition { "true_value" } else { "false_value" };
        match req.require(selected) {
            Ok(value) => NodeResponse::values(vec![value.clone()]),
            Err(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Outcome;
    use crate::values::Value;

    fn select(condition: bool) -> NodeRequest {
        NodeRequest::new()
            .with("condition", Value::Bool(condition))
            .with("true_value", Value::Text("yes".to_string()))
            .with("false_value", Value::Text("no".to_string()))
    }

    #[tokio::test]
    async fn true_condition_selects_true_value() {
        let response = ConditionalSelect.execute(select(true)).await;
        match response.outcome {
            Outcome::Values(values) => {
                assert!(matches!(&values[0], Value::Text(s) if s == "yes"));
            }
            Outcome::Error(e) => panic!("Unexpected error: {}", e.message),
        }
    }

    #[tokio::test]
    async fn false_condition_selects_false_value() {
        let response = ConditionalSelect.execute(select(false)).await;
        match response.outcome {
            Outcome::Values(values) => {
                assert!(matches!(&values[0], Value::Text(s) if s == "no"));
            }
            Outcome::Error(e) => panic!("Unexpected error: {}", e.message),
        }
    }

    #[tokio::test]
    async fn missing_condition_is_a_contract_error() {
        let req = NodeRequest::new().with("true_value", Value::Int(1));
        let response = ConditionalSelect.execute(req).await;
        match response.outcome {
            Outcome::Error(detail) => assert_eq!(detail.code, 400),
            Outcome::Values(_) => panic!("Expected error outcome"),
        }
    }
}
