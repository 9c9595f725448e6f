// Copyright (c) 2026 Easel Nodes contributors
// SPDX-License-Identifier: MIT

//! The execution envelope: named inputs in, an outcome out.
//!
//! The host invokes a node with a [`NodeRequest`] holding already-validated
//! inputs keyed by slot name. The node answers with a [`NodeResponse`]:
//! either the output values in schema order, or an [`ErrorDetail`] when the
//! inputs violate the declared contract. Per-item resolution failures inside
//! a node never surface here; those are logged and skipped.

use std::collections::HashMap;

use crate::errors::NodeError;
use crate::values::{HostObject, HostObjectKind, PipeBundle, Value};

/// Named inputs for one node invocation.
#[derive(Debug, Clone, Default)]
pub struct NodeRequest {
    inputs: HashMap<String, Value>,
}

impl NodeRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, used heavily by tests and the demo runner.
    pub fn with(mut self, name: &str, value: Value) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.inputs.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.inputs.get(name)
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// A required input; absent or explicit null is a contract violation.
    pub fn require(&self, name: &str) -> Result<&Value, NodeError> {
        match self.inputs.get(name) {
            Some(Value::Null) | None => Err(NodeError::MissingInput {
                input: name.to_string(),
            }),
            Some(value) => Ok(value),
        }
    }

    pub fn bool(&self, name: &str) -> Result<bool, NodeError> {
        match self.require(name)? {
            Value::Bool(b) => Ok(*b),
            other => Err(mismatch(name, "boolean", other)),
        }
    }

    pub fn int(&self, name: &str) -> Result<i64, NodeError> {
        match self.require(name)? {
            Value::Int(i) => Ok(*i),
            other => Err(mismatch(name, "int", other)),
        }
    }

    /// A float input; ints are accepted and widened.
    pub fn float(&self, name: &str) -> Result<f64, NodeError> {
        match self.require(name)? {
            Value::Float(f) => Ok(*f),
            Value::Int(i) => Ok(*i as f64),
            other => Err(mismatch(name, "float", other)),
        }
    }

    /// A float input falling back to the schema default when unwired.
    pub fn float_or(&self, name: &str, default: f64) -> Result<f64, NodeError> {
        match self.inputs.get(name) {
            Some(Value::Null) | None => Ok(default),
            Some(_) => self.float(name),
        }
    }

    pub fn text(&self, name: &str) -> Result<&str, NodeError> {
        match self.require(name)? {
            Value::Text(s) => Ok(s),
            other => Err(mismatch(name, "string", other)),
        }
    }

    /// A string input treating absent/null as empty, the way prompt fields
    /// behave in the graph editor.
    pub fn text_or_empty(&self, name: &str) -> Result<&str, NodeError> {
        match self.inputs.get(name) {
            Some(Value::Null) | None => Ok(""),
            Some(_) => self.text(name),
        }
    }

    pub fn sigmas(&self, name: &str) -> Result<&[f32], NodeError> {
        match self.require(name)? {
            Value::Sigmas(s) => Ok(s),
            other => Err(mismatch(name, "sigmas", other)),
        }
    }

    pub fn list(&self, name: &str) -> Result<&[Value], NodeError> {
        match self.require(name)? {
            Value::List(items) => Ok(items),
            other => Err(mismatch(name, "list", other)),
        }
    }

    /// A required host object of a specific kind.
    pub fn object(&self, name: &str, kind: HostObjectKind) -> Result<HostObject, NodeError> {
        match self.require(name)? {
            Value::Object(obj) if obj.kind() == kind => Ok(obj.clone()),
            Value::Object(obj) => Err(NodeError::WrongObjectKind {
                input: name.to_string(),
                expected: kind,
                found: obj.kind(),
            }),
            other => Err(mismatch(name, kind.as_str(), other)),
        }
    }

    /// An optional host object; absent and null both mean "not wired".
    pub fn optional_object(
        &self,
        name: &str,
        kind: HostObjectKind,
    ) -> Result<Option<HostObject>, NodeError> {
        match self.inputs.get(name) {
            Some(Value::Null) | None => Ok(None),
            Some(_) => self.object(name, kind).map(Some),
        }
    }

    /// An optional pipe bundle; absent unbundles as all-null downstream.
    pub fn optional_pipe(&self, name: &str) -> Result<PipeBundle, NodeError> {
        match self.inputs.get(name) {
            Some(Value::Null) | None => Ok(PipeBundle::default()),
            Some(Value::Pipe(pipe)) => Ok(pipe.clone()),
            Some(other) => Err(mismatch(name, "pipe", other)),
        }
    }
}

fn mismatch(name: &str, expected: &'static str, found: &Value) -> NodeError {
    NodeError::TypeMismatch {
        input: name.to_string(),
        expected,
        found: found.kind_name(),
    }
}

/// Error surfaced to the host when a node's contract was violated.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorDetail {
    pub code: u32,
    pub message: String,
}

/// What one invocation produced.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// Output values, in the order the schema declares them.
    Values(Vec<Value>),
    Error(ErrorDetail),
}

/// Response returned to the host.
#[derive(Debug, Clone)]
pub struct NodeResponse {
    pub outcome: Outcome,
    /// Display payload for output nodes; the host renders it verbatim.
    pub ui: Option<serde_json::Value>,
}

impl NodeResponse {
    pub fn values(values: Vec<Value>) -> Self {
        Self {
            outcome: Outcome::Values(values),
            ui: None,
        }
    }

    pub fn error(code: u32, message: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Error(ErrorDetail {
                code,
                message: message.into(),
            }),
            ui: None,
        }
    }

    pub fn with_ui(mut self, ui: serde_json::Value) -> Self {
        self.ui = Some(ui);
        self
    }
}

impl From<NodeError> for NodeResponse {
    fn from(err: NodeError) -> Self {
        NodeResponse::error(400, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn object(kind: HostObjectKind) -> HostObject {
        HostObject::new(kind, Arc::new(()))
    }

    #[test]
    fn missing_required_input_is_reported_by_name() {
        let req = NodeRequest::new();
        let err = req.bool("condition").unwrap_err();
        assert!(err.to_string().contains("condition"));
    }

    #[test]
    fn explicit_null_counts_as_missing() {
        let req = NodeRequest::new().with("condition", Value::Null);
        assert!(matches!(
            req.bool("condition"),
            Err(NodeError::MissingInput { .. })
        ));
    }

    #[test]
    fn float_accepts_int_values() {
        let req = NodeRequest::new().with("multiplier", Value::Int(2));
        assert_eq!(req.float("multiplier").unwrap(), 2.0);
    }

    #[test]
    fn float_or_falls_back_when_unwired() {
        let req = NodeRequest::new();
        assert_eq!(req.float_or("denoise", 1.0).unwrap(), 1.0);

        let req = NodeRequest::new().with("denoise", Value::Float(0.5));
        assert_eq!(req.float_or("denoise", 1.0).unwrap(), 0.5);
    }

    #[test]
    fn object_kind_is_checked() {
        let req = NodeRequest::new().with("clip", Value::Object(object(HostObjectKind::Model)));
        let err = req.object("clip", HostObjectKind::Clip).unwrap_err();
        assert!(matches!(err, NodeError::WrongObjectKind { .. }));
    }

    #[test]
    fn node_error_maps_to_code_400() {
        let response: NodeResponse = NodeError::MissingInput {
            input: "width".to_string(),
        }
        .into();
        match response.outcome {
            Outcome::Error(detail) => assert_eq!(detail.code, 400),
            Outcome::Values(_) => panic!("Expected error outcome"),
        }
    }
}
