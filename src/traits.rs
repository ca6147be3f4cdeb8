use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::str::FromStr;

use serde_json::Value;
use strum::IntoEnumIterator;

use crate::codec::{self, DecodeContext};
use crate::diagnostics::{DiagnosticSink, NoopSink};
use crate::error::ModelError;
use crate::registry::{Attribute, DeclaredType};

/// Typed setter stored in a model's setter table.
pub type Setter<M> = fn(&mut M, &Value, &DecodeContext<'_>) -> Result<(), ModelError>;

/// Local attribute name → setter, built once per model.
pub type SetterTable<M> = HashMap<&'static str, Setter<M>>;

/// Anything that can be built from a raw wire value.
pub trait FromWire: Sized {
    fn from_wire(raw: &Value, cx: &DecodeContext<'_>) -> Result<Self, ModelError>;
}

/// Anything that can be rendered as a wire value.
pub trait ToWire {
    fn to_wire(&self) -> Value;
}

/// The documented type of a Rust attribute type.
pub trait WireType {
    fn declared_type() -> DeclaredType;
}

/// A string enum with a fixed literal set plus the `UNKNOWN_ENUM_VALUE`
/// sentinel.
pub trait WireEnum:
    Copy + Eq + Debug + FromStr + AsRef<str> + IntoEnumIterator + Into<&'static str> + 'static
{
    /// Type name used in diagnostics and declared types
    const NAME: &'static str;

    /// The sentinel, rendered as `UNKNOWN_ENUM_VALUE`
    const UNKNOWN: Self;

    /// Declared literals, without the sentinel.
    fn allowed_values() -> Vec<&'static str> {
        Self::iter()
            .filter(|variant| *variant != Self::UNKNOWN)
            .map(Into::into)
            .collect()
    }
}

/// A generated resource shape with a static attribute registry.
///
/// Implementations are produced by the `resource_model!` macro; everything
/// beyond the four required items is provided here.
pub trait ResourceModel: Sized + Default + Clone + Debug + Eq + Hash + 'static {
    /// Model name as published by the API (e.g. "MaintenanceWindow")
    const MODEL_NAME: &'static str;

    /// Declared attributes, in wire order.
    fn attributes() -> &'static [Attribute];

    /// Setter per local attribute name.
    fn setters() -> &'static SetterTable<Self>;

    /// Serialize to a JSON tree. `Unset` attributes are omitted.
    fn to_value(&self) -> Value;

    fn attribute(name: &str) -> Option<&'static Attribute> {
        Self::attributes().iter().find(|attr| attr.name() == name)
    }

    /// Local name → wire key, in declaration order.
    fn attribute_map() -> Vec<(&'static str, &'static str)> {
        Self::attributes()
            .iter()
            .map(|attr| (attr.name(), attr.wire_key()))
            .collect()
    }

    /// Local name → declared type, in declaration order.
    fn type_map() -> Vec<(&'static str, &'static DeclaredType)> {
        Self::attributes()
            .iter()
            .map(|attr| (attr.name(), attr.declared_type()))
            .collect()
    }

    fn from_value(raw: &Value) -> Result<Self, ModelError> {
        Self::from_value_with(raw, &NoopSink)
    }

    /// Build from a JSON tree, reporting diagnostics to `sink`.
    ///
    /// A non-object `raw` yields the default (all `Unset`) model.
    fn from_value_with(raw: &Value, sink: &dyn DiagnosticSink) -> Result<Self, ModelError> {
        codec::build_from_value(raw, sink)
    }

    fn from_json_str(text: &str) -> Result<Self, ModelError> {
        let raw: Value = serde_json::from_str(text)?;
        Self::from_value(&raw)
    }

    /// Assign one attribute by local name, with the same coercion and enum
    /// validation as decoding.
    fn set_attribute(&mut self, name: &str, raw: &Value) -> Result<(), ModelError> {
        self.set_attribute_with(name, raw, &NoopSink)
    }

    fn set_attribute_with(
        &mut self,
        name: &str,
        raw: &Value,
        sink: &dyn DiagnosticSink,
    ) -> Result<(), ModelError> {
        let attribute = Self::attribute(name).ok_or_else(|| ModelError::UnknownAttribute {
            model: Self::MODEL_NAME.to_string(),
            attribute: name.to_string(),
        })?;
        codec::assign(self, attribute, raw, sink)
    }
}

/// A polymorphic base: a closed set of subtypes selected by a discriminant
/// key, with the base model as the fallback.
///
/// Implementations are produced by the `polymorphic_model!` macro.
pub trait PolymorphicModel: Sized + Clone + Debug + Eq + Hash + 'static {
    type Base: ResourceModel;

    /// Wire key of the discriminant (e.g. "source")
    const DISCRIMINANT: &'static str;

    /// Discriminant literal → subtype model name.
    fn subtypes() -> &'static [(&'static str, &'static str)];

    fn from_value_with(raw: &Value, sink: &dyn DiagnosticSink) -> Result<Self, ModelError>;

    fn to_value(&self) -> Value;

    /// Model name of the resolved variant.
    fn model_name(&self) -> &'static str;

    fn from_value(raw: &Value) -> Result<Self, ModelError> {
        Self::from_value_with(raw, &NoopSink)
    }

    fn from_json_str(text: &str) -> Result<Self, ModelError> {
        let raw: Value = serde_json::from_str(text)?;
        Self::from_value(&raw)
    }

    /// Discriminant literal of `raw`, read from the wire key or, failing
    /// that, from the base attribute's snake_case alias.
    fn discriminant(raw: &Value) -> Option<&str> {
        raw.get(Self::DISCRIMINANT)
            .or_else(|| {
                <Self::Base as ResourceModel>::attributes()
                    .iter()
                    .find(|attr| attr.wire_key() == Self::DISCRIMINANT)
                    .and_then(Attribute::alias)
                    .and_then(|alias| raw.get(alias))
            })
            .and_then(Value::as_str)
    }

    /// Model name `raw` would resolve to, without building it.
    fn subtype_name(raw: &Value) -> &'static str {
        Self::discriminant(raw)
            .and_then(|tag| Self::subtypes().iter().find(|(literal, _)| *literal == tag))
            .map(|(_, name)| *name)
            .unwrap_or(<Self::Base as ResourceModel>::MODEL_NAME)
    }
}
