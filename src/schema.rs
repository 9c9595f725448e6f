// Copyright (c) 2026 Easel Nodes contributors
// SPDX-License-Identifier: MIT

//! Static node metadata consumed by the host's registration system.
//!
//! Every node declares one [`NodeSchema`]: a stable id, a display name and
//! category for the graph editor, and typed input/output descriptors. The
//! host reads these once at registration time and uses them to validate and
//! route wires; nodes never re-check what the schema already promises.

/// Wire-level data kind for an input or output slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataKind {
    Boolean,
    Int,
    Float,
    String,
    /// String restricted to a fixed option list.
    Combo,
    Model,
    Clip,
    Conditioning,
    Vae,
    Image,
    Latent,
    Sigmas,
    Pipe,
    /// Accepts any wire; selection and routing nodes use this.
    Any,
}

/// Default carried by an input slot when the user leaves it untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputDefault {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(&'static str),
}

/// One typed input slot.
#[derive(Debug, Clone)]
pub struct InputSpec {
    pub name: &'static str,
    pub kind: DataKind,
    pub optional: bool,
    pub multiline: bool,
    pub default: Option<InputDefault>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Option list for `Combo` inputs; empty otherwise.
    pub options: &'static [&'static str],
}

impl InputSpec {
    pub fn required(name: &'static str, kind: DataKind) -> Self {
        Self {
            name,
            kind,
            optional: false,
            multiline: false,
            default: None,
            min: None,
            max: None,
            options: &[],
        }
    }

    pub fn optional(name: &'static str, kind: DataKind) -> Self {
        Self {
            optional: true,
            ..Self::required(name, kind)
        }
    }

    pub fn with_default(mut self, default: InputDefault) -> Self {
        self.default = Some(default);
        self
    }

    pub fn bounded(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    pub fn with_options(mut self, options: &'static [&'static str]) -> Self {
        self.options = options;
        self
    }
}

/// One typed output slot.
#[derive(Debug, Clone)]
pub struct OutputSpec {
    pub name: &'static str,
    pub kind: DataKind,
}

impl OutputSpec {
    pub fn new(name: &'static str, kind: DataKind) -> Self {
        Self { name, kind }
    }
}

/// Static metadata for one node.
#[derive(Debug, Clone)]
pub struct NodeSchema {
    /// Stable identifier the host keys registration on.
    pub node_id: &'static str,
    pub display_name: &'static str,
    pub category: &'static str,
    pub description: Option<&'static str>,
    pub inputs: Vec<InputSpec>,
    pub outputs: Vec<OutputSpec>,
    /// Terminal nodes: executed for their side effect, results shown in the ui.
    pub is_output_node: bool,
}

impl NodeSchema {
    pub fn new(node_id: &'static str, display_name: &'static str, category: &'static str) -> Self {
        Self {
            node_id,
            display_name,
            category,
            description: None,
            inputs: Vec::new(),
            outputs: Vec::new(),
            is_output_node: false,
        }
    }

    pub fn description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn input(mut self, input: InputSpec) -> Self {
        self.inputs.push(input);
        self
    }

    pub fn output(mut self, output: OutputSpec) -> Self {
        self.outputs.push(output);
        self
    }

    pub fn output_node(mut self) -> Self {
        self.is_output_node = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_slots_in_order() {
        let schema = NodeSchema::new("test_node", "Test Node", "utility")
            .input(InputSpec::required("width", DataKind::Int))
            .input(
                InputSpec::required("multiplier", DataKind::Float)
                    .with_default(InputDefault::Float(1.0))
                    .bounded(0.0, 10.0),
            )
            .output(OutputSpec::new("Width", DataKind::Int));

        assert_eq!(schema.inputs.len(), 2);
        assert_eq!(schema.inputs[0].name, "width");
        assert_eq!(schema.inputs[1].min, Some(0.0));
        assert_eq!(schema.outputs[0].kind, DataKind::Int);
        assert!(!schema.is_output_node);
    }
}
