// src/lib.rs
#[macro_use]
mod macros;

pub use codec::DecodeContext;
pub use diagnostics::{
    DiagnosticSink, NoopSink, TracingSink, UnknownEnumLiteral, UnresolvedSubtype,
};
pub use error::ModelError;
pub use field::Field;
pub use models::*;
pub use registry::{Attribute, DeclaredType, EnumPolicy, Fill};
pub use traits::{
    FromWire, PolymorphicModel, ResourceModel, Setter, SetterTable, ToWire, WireEnum, WireType,
};
pub use value::{AnyValue, Float};

mod codec;
mod diagnostics;
mod error;
mod field;
mod models;
mod registry;
mod traits;
mod value;

#[cfg(test)]
mod tests;
