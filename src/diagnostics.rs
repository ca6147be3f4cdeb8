//! Pluggable sink for non-fatal decoding diagnostics.
//!
//! Decoding never fails on an unknown soft-enum literal or an unrecognized
//! discriminant; it reports the event to a [`DiagnosticSink`] and carries on.
//! The sink is passed explicitly to every conversion entry point
//! (`from_value_with`, `set_attribute_with`). The plain `from_value` entry
//! points use [`NoopSink`].
//!
//! ## Usage
//!
//! ```rust
//! use oci_database_models::{DiagnosticSink, MaintenanceWindow, ResourceModel, UnknownEnumLiteral};
//! use std::sync::atomic::{AtomicU64, Ordering};
//!
//! #[derive(Default)]
//! struct CountingSink {
//!     unknown: AtomicU64,
//! }
//!
//! impl DiagnosticSink for CountingSink {
//!     fn on_unknown_enum_literal(&self, _event: &UnknownEnumLiteral<'_>) {
//!         self.unknown.fetch_add(1, Ordering::Relaxed);
//!     }
//! }
//!
//! let sink = CountingSink::default();
//! let raw = serde_json::json!({"preference": "SOMETIMES"});
//! let window = MaintenanceWindow::from_value_with(&raw, &sink).unwrap();
//! assert_eq!(sink.unknown.load(Ordering::Relaxed), 1);
//! assert!(window.preference.is_defined());
//! ```
//!
//! For log output, use [`TracingSink`], which forwards every event to
//! [`tracing`] at debug level.

use serde::Serialize;
use tracing::debug;

/// A soft-enum attribute received a literal outside its declared set and was
/// mapped to `UNKNOWN_ENUM_VALUE`.
#[derive(Debug, Clone, Serialize)]
pub struct UnknownEnumLiteral<'a> {
    /// Model that owns the attribute (e.g. "Backup")
    pub model: &'a str,
    /// Local attribute name (e.g. "lifecycle_state")
    pub field: &'a str,
    /// Enum type of the attribute
    pub enum_name: &'a str,
    /// The literal as received
    pub value: &'a str,
}

/// A polymorphic payload had a missing or unrecognized discriminant and was
/// decoded as its base model.
#[derive(Debug, Clone, Serialize)]
pub struct UnresolvedSubtype<'a> {
    /// Base model used as the fallback
    pub base: &'a str,
    /// Discriminant wire key (e.g. "source")
    pub discriminant: &'a str,
    /// Discriminant literal, `None` when the key was absent or not a string
    pub value: Option<&'a str>,
}

/// Receiver for decoding diagnostics.
///
/// Implementations must be thread-safe and should return quickly; they are
/// called synchronously from inside decoding.
pub trait DiagnosticSink: Send + Sync {
    /// Called once per substituted soft-enum literal.
    fn on_unknown_enum_literal(&self, event: &UnknownEnumLiteral<'_>);

    /// Called when subtype resolution falls back to the base model.
    fn on_unresolved_subtype(&self, _event: &UnresolvedSubtype<'_>) {
        // Default: no-op
    }
}

/// Drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn on_unknown_enum_literal(&self, _event: &UnknownEnumLiteral<'_>) {}
}

/// Forwards events to `tracing` as structured debug events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn on_unknown_enum_literal(&self, event: &UnknownEnumLiteral<'_>) {
        debug!(
            event = "UnknownEnumLiteral",
            model = event.model,
            field = event.field,
            enum_name = event.enum_name,
            value = event.value,
            "mapping to UNKNOWN_ENUM_VALUE"
        );
    }

    fn on_unresolved_subtype(&self, event: &UnresolvedSubtype<'_>) {
        debug!(
            event = "UnresolvedSubtype",
            base = event.base,
            discriminant = event.discriminant,
            value = ?event.value,
            "falling back to base model"
        );
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::*;

    /// Records every event as a short string, for assertions.
    #[derive(Debug, Default)]
    pub struct RecordingSink {
        events: Mutex<Vec<String>>,
    }

    impl RecordingSink {
        pub fn events(&self) -> Vec<String> {
            self.events.lock().unwrap().clone()
        }
    }

    impl DiagnosticSink for RecordingSink {
        fn on_unknown_enum_literal(&self, event: &UnknownEnumLiteral<'_>) {
            self.events.lock().unwrap().push(format!(
                "enum {}.{}={}",
                event.model, event.field, event.value
            ));
        }

        fn on_unresolved_subtype(&self, event: &UnresolvedSubtype<'_>) {
            self.events.lock().unwrap().push(format!(
                "subtype {} {}={:?}",
                event.base, event.discriminant, event.value
            ));
        }
    }
}
