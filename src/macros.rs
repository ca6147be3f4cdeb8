//! Declaration macros for enums, resource models and polymorphic bases.
//!
//! A resource model is declared as a list of attributes:
//!
//! ```text
//! resource_model! {
//!     pub struct CreateDbHomeBase = "CreateDbHomeBase" {
//!         display_name: String = "displayName";
//!         source: DbHomeSource = "source" hard, default "NONE";
//!     }
//! }
//! ```
//!
//! Each line is `local_name: RustType = "wireKey" [soft|hard] [, default|fixed "LITERAL"];`.
//! The policy applies to enum attributes (and arrays of them). `default` is
//! assigned when the key is omitted; `fixed` pins the value regardless of input.

macro_rules! enum_policy {
    () => {
        None
    };
    (soft) => {
        Some($crate::registry::EnumPolicy::Soft)
    };
    (hard) => {
        Some($crate::registry::EnumPolicy::Hard)
    };
}

macro_rules! attribute_fill {
    () => {
        $crate::registry::Fill::Never
    };
    (default $value:literal) => {
        $crate::registry::Fill::OnOmission(serde_json::json!($value))
    };
    (fixed $value:literal) => {
        $crate::registry::Fill::Always(serde_json::json!($value))
    };
}

macro_rules! serde_via_value {
    ($name:ident, $model_trait:path) => {
        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serde::Serialize::serialize(&<Self as $model_trait>::to_value(self), serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
                <Self as $model_trait>::from_value(&raw)
                    .map_err(<D::Error as serde::de::Error>::custom)
            }
        }
    };
}

/// Declare a string enum. An `UnknownEnumValue` variant rendering as
/// `UNKNOWN_ENUM_VALUE` is always appended.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $literal:literal, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            strum_macros::EnumString,
            strum_macros::AsRefStr,
            strum_macros::Display,
            strum_macros::EnumIter,
            strum_macros::IntoStaticStr,
        )]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[strum(to_string = $literal)]
                $variant,
            )*
            /// A literal this client does not recognize.
            #[strum(to_string = "UNKNOWN_ENUM_VALUE")]
            UnknownEnumValue,
        }

        impl $crate::traits::WireEnum for $name {
            const NAME: &'static str = stringify!($name);
            const UNKNOWN: Self = $name::UnknownEnumValue;
        }

        impl $crate::traits::FromWire for $name {
            fn from_wire(
                raw: &serde_json::Value,
                cx: &$crate::codec::DecodeContext<'_>,
            ) -> Result<Self, $crate::error::ModelError> {
                $crate::codec::decode_enum(raw, cx)
            }
        }

        impl $crate::traits::ToWire for $name {
            fn to_wire(&self) -> serde_json::Value {
                serde_json::Value::String(<Self as AsRef<str>>::as_ref(self).to_owned())
            }
        }

        impl $crate::traits::WireType for $name {
            fn declared_type() -> $crate::registry::DeclaredType {
                $crate::registry::DeclaredType::Enum(stringify!($name))
            }
        }
    };
}

/// Declare a resource model: the struct, its registry and setter table,
/// equality, hashing, `Display` and serde support.
macro_rules! resource_model {
    (
        $(#[$meta:meta])*
        pub struct $name:ident = $model:literal {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $ty:ty = $wire:literal $($policy:ident)? $(, $fill:ident $fill_value:literal)? ;
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                pub $field: $crate::field::Field<$ty>,
            )*
        }

        // Every attribute `Unset`, except pinned ones, which hold their literal.
        impl Default for $name {
            fn default() -> Self {
                let mut model = Self {
                    $( $field: $crate::field::Field::Unset, )*
                };
                $crate::codec::apply_pinned(&mut model);
                model
            }
        }

        impl $crate::traits::ResourceModel for $name {
            const MODEL_NAME: &'static str = $model;

            fn attributes() -> &'static [$crate::registry::Attribute] {
                static ATTRIBUTES: once_cell::sync::Lazy<Vec<$crate::registry::Attribute>> =
                    once_cell::sync::Lazy::new(|| {
                        vec![
                            $(
                                $crate::registry::Attribute::new(
                                    stringify!($field),
                                    $wire,
                                    <$ty as $crate::traits::WireType>::declared_type(),
                                )
                                .with_enum_policy(enum_policy!($($policy)?))
                                .with_fill(attribute_fill!($($fill $fill_value)?)),
                            )*
                        ]
                    });
                &ATTRIBUTES
            }

            fn setters() -> &'static $crate::traits::SetterTable<Self> {
                static SETTERS: once_cell::sync::Lazy<$crate::traits::SetterTable<$name>> =
                    once_cell::sync::Lazy::new(|| {
                        let mut setters = $crate::traits::SetterTable::<$name>::new();
                        $(
                            let setter: $crate::traits::Setter<$name> = |model, raw, cx| {
                                model.$field = $crate::field::Field::decode(raw, cx)?;
                                Ok(())
                            };
                            setters.insert($crate::registry::local_name(stringify!($field)), setter);
                        )*
                        setters
                    });
                &SETTERS
            }

            fn to_value(&self) -> serde_json::Value {
                let mut map = serde_json::Map::new();
                $(
                    if let Some(value) = self.$field.encode() {
                        map.insert($wire.to_string(), value);
                    }
                )*
                serde_json::Value::Object(map)
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                std::ptr::eq(self, other) || (true $( && self.$field == other.$field )*)
            }
        }

        impl Eq for $name {}

        impl std::hash::Hash for $name {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                $( std::hash::Hash::hash(&self.$field, state); )*
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", <Self as $crate::traits::ResourceModel>::to_value(self))
            }
        }

        impl $crate::traits::FromWire for $name {
            fn from_wire(
                raw: &serde_json::Value,
                cx: &$crate::codec::DecodeContext<'_>,
            ) -> Result<Self, $crate::error::ModelError> {
                <Self as $crate::traits::ResourceModel>::from_value_with(raw, cx.sink())
            }
        }

        impl $crate::traits::ToWire for $name {
            fn to_wire(&self) -> serde_json::Value {
                <Self as $crate::traits::ResourceModel>::to_value(self)
            }
        }

        impl $crate::traits::WireType for $name {
            fn declared_type() -> $crate::registry::DeclaredType {
                $crate::registry::DeclaredType::Model($model)
            }
        }

        serde_via_value!($name, $crate::traits::ResourceModel);
    };
}

/// Declare a polymorphic base: one variant per discriminant literal plus a
/// `Base` fallback.
macro_rules! polymorphic_model {
    (
        $(#[$meta:meta])*
        pub enum $name:ident : $base:ident on $discriminant:literal {
            $( $(#[$vmeta:meta])* $tag:literal => $variant:ident($subtype:ident), )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant($subtype),
            )*
            /// Discriminant missing or not recognized.
            Base($base),
        }

        impl $crate::traits::PolymorphicModel for $name {
            type Base = $base;
            const DISCRIMINANT: &'static str = $discriminant;

            fn subtypes() -> &'static [(&'static str, &'static str)] {
                const SUBTYPES: &[(&str, &str)] = &[
                    $( ($tag, <$subtype as $crate::traits::ResourceModel>::MODEL_NAME), )*
                ];
                SUBTYPES
            }

            fn from_value_with(
                raw: &serde_json::Value,
                sink: &dyn $crate::diagnostics::DiagnosticSink,
            ) -> Result<Self, $crate::error::ModelError> {
                let tag = <Self as $crate::traits::PolymorphicModel>::discriminant(raw);
                match tag {
                    $(
                        Some($tag) => {
                            <$subtype as $crate::traits::ResourceModel>::from_value_with(raw, sink)
                                .map(Self::$variant)
                        }
                    )*
                    _ => {
                        sink.on_unresolved_subtype(&$crate::diagnostics::UnresolvedSubtype {
                            base: <$base as $crate::traits::ResourceModel>::MODEL_NAME,
                            discriminant: $discriminant,
                            value: tag,
                        });
                        <$base as $crate::traits::ResourceModel>::from_value_with(raw, sink)
                            .map(Self::Base)
                    }
                }
            }

            fn to_value(&self) -> serde_json::Value {
                match self {
                    $(
                        Self::$variant(model) => {
                            <$subtype as $crate::traits::ResourceModel>::to_value(model)
                        }
                    )*
                    Self::Base(model) => <$base as $crate::traits::ResourceModel>::to_value(model),
                }
            }

            fn model_name(&self) -> &'static str {
                match self {
                    $( Self::$variant(_) => <$subtype as $crate::traits::ResourceModel>::MODEL_NAME, )*
                    Self::Base(_) => <$base as $crate::traits::ResourceModel>::MODEL_NAME,
                }
            }
        }

        $(
            impl From<$subtype> for $name {
                fn from(model: $subtype) -> Self {
                    Self::$variant(model)
                }
            }
        )*

        impl From<$base> for $name {
            fn from(model: $base) -> Self {
                Self::Base(model)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", <Self as $crate::traits::PolymorphicModel>::to_value(self))
            }
        }

        impl $crate::traits::FromWire for $name {
            fn from_wire(
                raw: &serde_json::Value,
                cx: &$crate::codec::DecodeContext<'_>,
            ) -> Result<Self, $crate::error::ModelError> {
                <Self as $crate::traits::PolymorphicModel>::from_value_with(raw, cx.sink())
            }
        }

        impl $crate::traits::ToWire for $name {
            fn to_wire(&self) -> serde_json::Value {
                <Self as $crate::traits::PolymorphicModel>::to_value(self)
            }
        }

        impl $crate::traits::WireType for $name {
            fn declared_type() -> $crate::registry::DeclaredType {
                $crate::registry::DeclaredType::Model(
                    <$base as $crate::traits::ResourceModel>::MODEL_NAME,
                )
            }
        }

        serde_via_value!($name, $crate::traits::PolymorphicModel);
    };
}
