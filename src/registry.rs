//! Per-type attribute metadata.
//!
//! Every model owns one ordered list of [`Attribute`] entries built lazily on
//! first use. The local-name → wire-key and local-name → declared-type views
//! are both projections of that single list.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde_json::{Map, Value};

use crate::error::ModelError;

/// Shape of an attribute as documented by the API.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DeclaredType {
    String,
    Integer,
    Float,
    Boolean,
    DateTime,
    /// Untyped JSON.
    Object,
    /// String restricted to the literals of the named enum.
    Enum(&'static str),
    /// Nested resource model, by model name.
    Model(&'static str),
    Array(Box<DeclaredType>),
    /// Map with string keys.
    Map(Box<DeclaredType>),
}

impl DeclaredType {
    pub fn is_array(&self) -> bool {
        matches!(self, DeclaredType::Array(_))
    }
}

impl Display for DeclaredType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DeclaredType::String => write!(f, "String"),
            DeclaredType::Integer => write!(f, "Integer"),
            DeclaredType::Float => write!(f, "Float"),
            DeclaredType::Boolean => write!(f, "Boolean"),
            DeclaredType::DateTime => write!(f, "DateTime"),
            DeclaredType::Object => write!(f, "Object"),
            DeclaredType::Enum(name) | DeclaredType::Model(name) => write!(f, "{name}"),
            DeclaredType::Array(inner) => write!(f, "Array<{inner}>"),
            DeclaredType::Map(inner) => write!(f, "Map<String, {inner}>"),
        }
    }
}

/// How an enum attribute treats literals outside its declared set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumPolicy {
    /// Substitute `UNKNOWN_ENUM_VALUE` and report a diagnostic.
    Soft,
    /// Reject with [`ModelError::InvalidEnumValue`].
    Hard,
}

/// Value assigned to an attribute independently of the input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Fill {
    #[default]
    Never,
    /// Used when neither the wire key nor its alias is present.
    OnOmission(Value),
    /// Always used; the input is not consulted. Subtypes pin their
    /// discriminant this way.
    Always(Value),
}

/// One declared attribute of a resource model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    name: &'static str,
    wire_key: &'static str,
    alias: Option<&'static str>,
    declared_type: DeclaredType,
    enum_policy: Option<EnumPolicy>,
    fill: Fill,
}

impl Attribute {
    /// A field named `r#type` is registered as `type`. When the local name
    /// differs from the wire key it is also accepted as an input alias.
    pub(crate) fn new(name: &'static str, wire_key: &'static str, declared_type: DeclaredType) -> Self {
        let name = local_name(name);
        Self {
            name,
            wire_key,
            alias: (name != wire_key).then_some(name),
            declared_type,
            enum_policy: None,
            fill: Fill::Never,
        }
    }

    pub(crate) fn with_enum_policy(mut self, policy: Option<EnumPolicy>) -> Self {
        self.enum_policy = policy;
        self
    }

    pub(crate) fn with_fill(mut self, fill: Fill) -> Self {
        self.fill = fill;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn wire_key(&self) -> &'static str {
        self.wire_key
    }

    pub fn alias(&self) -> Option<&'static str> {
        self.alias
    }

    pub fn declared_type(&self) -> &DeclaredType {
        &self.declared_type
    }

    pub fn enum_policy(&self) -> Option<EnumPolicy> {
        self.enum_policy
    }

    pub fn fill(&self) -> &Fill {
        &self.fill
    }

    /// Find the raw value for this attribute in `input`.
    ///
    /// Returns `Ok(None)` when the attribute is absent and has no omission
    /// default. Supplying both the wire key and the alias is an error even if
    /// the two values agree.
    pub(crate) fn lookup<'a>(
        &'a self,
        model: &str,
        input: &'a Map<String, Value>,
    ) -> Result<Option<&'a Value>, ModelError> {
        if let Fill::Always(pinned) = &self.fill {
            return Ok(Some(pinned));
        }

        let canonical = input.get(self.wire_key);
        let aliased = self.alias.and_then(|alias| input.get(alias));
        let found = match (canonical, aliased) {
            (Some(_), Some(_)) => {
                return Err(ModelError::ConflictingKeys {
                    model: model.to_string(),
                    field: self.name.to_string(),
                    wire_key: self.wire_key.to_string(),
                    alias: self.alias.unwrap_or_default().to_string(),
                });
            }
            (canonical, aliased) => canonical.or(aliased),
        };

        Ok(found.or(match &self.fill {
            Fill::OnOmission(default) => Some(default),
            _ => None,
        }))
    }
}

/// Strip the raw identifier prefix from a field name.
pub(crate) fn local_name(ident: &'static str) -> &'static str {
    ident.strip_prefix("r#").unwrap_or(ident)
}
