// Copyright (c) 2026 Easel Nodes contributors
// SPDX-License-Identifier: MIT

//! Typed payloads exchanged between the host's graph executor and the nodes.
//!
//! The host owns every heavyweight object (models, encoders, tensors). Those
//! cross the boundary as [`HostObject`] handles: cheaply clonable, type-tagged,
//! and never inspected by node code. Plain scalars and strings cross as their
//! natural Rust types.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Type tag for an opaque host-owned object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostObjectKind {
    Model,
    Clip,
    Conditioning,
    Vae,
    Image,
    Latent,
}

impl HostObjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            HostObjectKind::Model => "Model",
            HostObjectKind::Clip => "Clip",
            HostObjectKind::Conditioning => "Conditioning",
            HostObjectKind::Vae => "Vae",
            HostObjectKind::Image => "Image",
            HostObjectKind::Latent => "Latent",
        }
    }
}

impl fmt::Display for HostObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An opaque handle to a host-owned object.
///
/// Nodes route these between inputs and outputs without looking inside.
/// Cloning is cheap; the payload is shared.
#[derive(Clone)]
pub struct HostObject {
    kind: HostObjectKind,
    inner: Arc<dyn Any + Send + Sync>,
}

impl HostObject {
    pub fn new(kind: HostObjectKind, inner: Arc<dyn Any + Send + Sync>) -> Self {
        Self { kind, inner }
    }

    pub fn kind(&self) -> HostObjectKind {
        self.kind
    }

    /// Downcast access for host adapters and test stubs. Node code has no
    /// business calling this.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }
}

impl fmt::Debug for HostObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HostObject({})", self.kind)
    }
}

/// The sampler pipe: seven optional host objects bundled into one value so a
/// graph can route them over a single wire.
#[derive(Debug, Clone, Default)]
pub struct PipeBundle {
    pub model: Option<HostObject>,
    pub positive: Option<HostObject>,
    pub negative: Option<HostObject>,
    pub vae: Option<HostObject>,
    pub image: Option<HostObject>,
    pub clip: Option<HostObject>,
    pub latent: Option<HostObject>,
}

impl PipeBundle {
    pub fn is_empty(&self) -> bool {
        self.model.is_none()
            && self.positive.is_none()
            && self.negative.is_none()
            && self.vae.is_none()
            && self.image.is_none()
            && self.clip.is_none()
            && self.latent.is_none()
    }
}

/// A value on a graph wire.
#[derive(Debug, Clone)]
pub enum Value {
    /// Absent value; what an unconnected optional output carries.
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// Noise schedule; only its length is ever read here.
    Sigmas(Vec<f32>),
    Object(HostObject),
    List(Vec<Value>),
    Pipe(PipeBundle),
}

impl Value {
    /// Short name for diagnostics and type-mismatch errors.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "string",
            Value::Sigmas(_) => "sigmas",
            Value::Object(obj) => obj.kind().as_str(),
            Value::List(_) => "list",
            Value::Pipe(_) => "pipe",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<Option<HostObject>> for Value {
    fn from(obj: Option<HostObject>) -> Self {
        match obj {
            Some(obj) => Value::Object(obj),
            None => Value::Null,
        }
    }
}
