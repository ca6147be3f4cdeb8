//! Tri-state attribute slot.
//!
//! Wire payloads distinguish a key that was never sent from a key sent as
//! `null`. Every model attribute is a [`Field`] so that serialization can
//! reproduce that distinction: `Unset` fields are omitted, `Null` fields are
//! emitted as `null`.

use serde_json::Value;

use crate::codec::DecodeContext;
use crate::error::ModelError;
use crate::traits::{FromWire, ToWire};

/// An attribute value that may be unset, explicitly null, or set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Field<T> {
    /// Never assigned.
    Unset,
    /// Explicitly assigned `null`.
    Null,
    Set(T),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Unset
    }
}

impl<T> Field<T> {
    /// True for `Null` and `Set`, i.e. the attribute was assigned at some point.
    pub fn is_defined(&self) -> bool {
        !matches!(self, Field::Unset)
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Field::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Field::Null)
    }

    /// The value, if set.
    pub fn get(&self) -> Option<&T> {
        match self {
            Field::Set(value) => Some(value),
            _ => None,
        }
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        match self {
            Field::Set(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Field::Set(value) => Some(value),
            _ => None,
        }
    }

    pub fn set(&mut self, value: impl Into<T>) {
        *self = Field::Set(value.into());
    }

    pub fn set_null(&mut self) {
        *self = Field::Null;
    }

    /// Forget any assignment, returning the slot to `Unset`.
    pub fn clear(&mut self) {
        *self = Field::Unset;
    }

    /// `None` maps to `Null`, not `Unset`.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Field::Set(value),
            None => Field::Null,
        }
    }

    pub fn as_ref(&self) -> Field<&T> {
        match self {
            Field::Unset => Field::Unset,
            Field::Null => Field::Null,
            Field::Set(value) => Field::Set(value),
        }
    }
}

impl<T: FromWire> Field<T> {
    /// Decode a raw wire value; `null` yields `Field::Null`.
    pub fn decode(raw: &Value, cx: &DecodeContext<'_>) -> Result<Self, ModelError> {
        if raw.is_null() {
            return Ok(Field::Null);
        }
        T::from_wire(raw, cx).map(Field::Set)
    }
}

impl<T: ToWire> Field<T> {
    /// Wire form of this slot, `None` when the key must be omitted.
    pub fn encode(&self) -> Option<Value> {
        match self {
            Field::Unset => None,
            Field::Null => Some(Value::Null),
            Field::Set(value) => Some(value.to_wire()),
        }
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Field::Set(value)
    }
}
