//! Conversion between JSON trees and typed attribute values.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use itertools::Itertools;
use serde_json::{Map, Number, Value};
use tracing::trace;

use crate::diagnostics::{DiagnosticSink, NoopSink, UnknownEnumLiteral};
use crate::error::ModelError;
use crate::registry::{Attribute, DeclaredType, EnumPolicy, Fill};
use crate::traits::{FromWire, ResourceModel, ToWire, WireEnum, WireType};
use crate::value::{AnyValue, Float};

/// Where a value is being decoded: the sink for diagnostics plus the owning
/// model and attribute, used to label errors and events.
#[derive(Clone, Copy)]
pub struct DecodeContext<'a> {
    sink: &'a dyn DiagnosticSink,
    model: &'static str,
    field: &'static str,
    enum_policy: Option<EnumPolicy>,
}

impl<'a> DecodeContext<'a> {
    pub fn new(sink: &'a dyn DiagnosticSink, model: &'static str) -> Self {
        Self {
            sink,
            model,
            field: "",
            enum_policy: None,
        }
    }

    pub(crate) fn for_attribute(self, attribute: &Attribute) -> Self {
        Self {
            field: attribute.name(),
            enum_policy: attribute.enum_policy(),
            ..self
        }
    }

    pub fn sink(&self) -> &'a dyn DiagnosticSink {
        self.sink
    }

    pub fn model(&self) -> &'static str {
        self.model
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Enum attributes declared without a policy are hard.
    pub fn enum_policy(&self) -> EnumPolicy {
        self.enum_policy.unwrap_or(EnumPolicy::Hard)
    }

    pub(crate) fn mismatch(&self, expected: impl ToString, found: &Value) -> ModelError {
        ModelError::TypeMismatch {
            model: self.model.to_string(),
            field: self.field.to_string(),
            expected: expected.to_string(),
            found: describe(found),
        }
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) => format!("string {s:?}"),
        Value::Array(_) => "array".to_string(),
        Value::Object(_) => "object".to_string(),
    }
}

/// Generic hash → object conversion shared by every resource model.
pub(crate) fn build_from_value<M: ResourceModel>(
    raw: &Value,
    sink: &dyn DiagnosticSink,
) -> Result<M, ModelError> {
    let mut model = M::default();
    let Some(input) = raw.as_object() else {
        trace!(
            event = "Decode",
            model = M::MODEL_NAME,
            found = describe(raw),
            "input is not an object, using empty model"
        );
        return Ok(model);
    };

    for attribute in M::attributes() {
        let Some(value) = attribute.lookup(M::MODEL_NAME, input)? else {
            continue;
        };
        if attribute.declared_type().is_array() && !value.is_array() && !value.is_null() {
            trace!(
                event = "Decode",
                model = M::MODEL_NAME,
                field = attribute.name(),
                "expected an array, skipping attribute"
            );
            continue;
        }
        assign(&mut model, attribute, value, sink)?;
    }

    Ok(model)
}

/// Store every pinned literal of `M` in `model`.
pub(crate) fn apply_pinned<M: ResourceModel>(model: &mut M) {
    for attribute in M::attributes() {
        let Fill::Always(pinned) = attribute.fill() else {
            continue;
        };
        if let Err(err) = assign(model, attribute, pinned, &NoopSink) {
            trace!(
                event = "Default",
                model = M::MODEL_NAME,
                field = attribute.name(),
                error = %err,
                "pinned literal rejected"
            );
        }
    }
}

/// Run the setter registered for `attribute`. A pinned attribute only
/// accepts its own literal.
pub(crate) fn assign<M: ResourceModel>(
    model: &mut M,
    attribute: &Attribute,
    raw: &Value,
    sink: &dyn DiagnosticSink,
) -> Result<(), ModelError> {
    if let Fill::Always(pinned) = attribute.fill() {
        if raw != pinned {
            return Err(ModelError::PinnedAttribute {
                model: M::MODEL_NAME.to_string(),
                field: attribute.name().to_string(),
                pinned: pinned.to_string(),
                value: raw.to_string(),
            });
        }
    }
    let setter = M::setters()
        .get(attribute.name())
        .ok_or_else(|| ModelError::UnknownAttribute {
            model: M::MODEL_NAME.to_string(),
            attribute: attribute.name().to_string(),
        })?;
    let cx = DecodeContext::new(sink, M::MODEL_NAME).for_attribute(attribute);
    setter(model, raw, &cx)
}

/// Decode an enum literal under the attribute's policy. Soft attributes map
/// anything outside the declared set, including non-string values, to the
/// sentinel.
pub(crate) fn decode_enum<E: WireEnum>(
    raw: &Value,
    cx: &DecodeContext<'_>,
) -> Result<E, ModelError> {
    let literal = match (String::from_wire(raw, cx), cx.enum_policy()) {
        (Ok(literal), _) => literal,
        (Err(_), EnumPolicy::Soft) => return Ok(unknown_literal::<E>(cx, &raw.to_string())),
        (Err(err), EnumPolicy::Hard) => return Err(err),
    };
    let parsed = literal.parse::<E>().ok();

    match (cx.enum_policy(), parsed) {
        (EnumPolicy::Soft, Some(variant)) => Ok(variant),
        (EnumPolicy::Soft, None) => Ok(unknown_literal::<E>(cx, &literal)),
        (EnumPolicy::Hard, Some(variant)) if variant != E::UNKNOWN => Ok(variant),
        (EnumPolicy::Hard, _) => Err(ModelError::InvalidEnumValue {
            model: cx.model().to_string(),
            field: cx.field().to_string(),
            value: literal,
            allowed: E::allowed_values().iter().join(", "),
        }),
    }
}

fn unknown_literal<E: WireEnum>(cx: &DecodeContext<'_>, value: &str) -> E {
    cx.sink().on_unknown_enum_literal(&UnknownEnumLiteral {
        model: cx.model(),
        field: cx.field(),
        enum_name: E::NAME,
        value,
    });
    E::UNKNOWN
}

impl FromWire for String {
    fn from_wire(raw: &Value, cx: &DecodeContext<'_>) -> Result<Self, ModelError> {
        match raw {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            _ => Err(cx.mismatch(DeclaredType::String, raw)),
        }
    }
}

impl ToWire for String {
    fn to_wire(&self) -> Value {
        Value::String(self.clone())
    }
}

impl WireType for String {
    fn declared_type() -> DeclaredType {
        DeclaredType::String
    }
}

impl FromWire for i64 {
    fn from_wire(raw: &Value, cx: &DecodeContext<'_>) -> Result<Self, ModelError> {
        match raw {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| fits_i64(*f)).map(|f| f.trunc() as i64))
                .ok_or_else(|| cx.mismatch(DeclaredType::Integer, raw)),
            Value::String(s) => s
                .trim()
                .parse()
                .map_err(|_| cx.mismatch(DeclaredType::Integer, raw)),
            _ => Err(cx.mismatch(DeclaredType::Integer, raw)),
        }
    }
}

// `i64::MAX as f64` rounds up to 2^63, which is already out of range.
fn fits_i64(value: f64) -> bool {
    value.is_finite() && value >= i64::MIN as f64 && value < i64::MAX as f64
}

impl ToWire for i64 {
    fn to_wire(&self) -> Value {
        Value::from(*self)
    }
}

impl WireType for i64 {
    fn declared_type() -> DeclaredType {
        DeclaredType::Integer
    }
}

impl FromWire for Float {
    fn from_wire(raw: &Value, cx: &DecodeContext<'_>) -> Result<Self, ModelError> {
        match raw {
            Value::Number(n) => n
                .as_f64()
                .map(Float)
                .ok_or_else(|| cx.mismatch(DeclaredType::Float, raw)),
            Value::String(s) => s
                .trim()
                .parse()
                .map(Float)
                .map_err(|_| cx.mismatch(DeclaredType::Float, raw)),
            _ => Err(cx.mismatch(DeclaredType::Float, raw)),
        }
    }
}

impl ToWire for Float {
    fn to_wire(&self) -> Value {
        Number::from_f64(self.0).map_or(Value::Null, Value::Number)
    }
}

impl WireType for Float {
    fn declared_type() -> DeclaredType {
        DeclaredType::Float
    }
}

/// Text and numeric forms: `true`, `t`, `yes`, `y` and `1` (any case) are
/// true, everything else is false.
impl FromWire for bool {
    fn from_wire(raw: &Value, cx: &DecodeContext<'_>) -> Result<Self, ModelError> {
        match raw {
            Value::Bool(b) => Ok(*b),
            Value::String(s) => Ok(truthy(s)),
            Value::Number(n) => Ok(truthy(&n.to_string())),
            _ => Err(cx.mismatch(DeclaredType::Boolean, raw)),
        }
    }
}

fn truthy(text: &str) -> bool {
    ["true", "t", "yes", "y", "1"]
        .iter()
        .any(|candidate| text.eq_ignore_ascii_case(candidate))
}

impl ToWire for bool {
    fn to_wire(&self) -> Value {
        Value::Bool(*self)
    }
}

impl WireType for bool {
    fn declared_type() -> DeclaredType {
        DeclaredType::Boolean
    }
}

/// Accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS[.f]` timestamp (taken as
/// UTC) or a bare date.
impl FromWire for DateTime<Utc> {
    fn from_wire(raw: &Value, cx: &DecodeContext<'_>) -> Result<Self, ModelError> {
        let Value::String(text) = raw else {
            return Err(cx.mismatch(DeclaredType::DateTime, raw));
        };
        parse_datetime(text).ok_or_else(|| cx.mismatch(DeclaredType::DateTime, raw))
    }
}

fn parse_datetime(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

impl ToWire for DateTime<Utc> {
    fn to_wire(&self) -> Value {
        Value::String(self.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl WireType for DateTime<Utc> {
    fn declared_type() -> DeclaredType {
        DeclaredType::DateTime
    }
}

impl FromWire for AnyValue {
    fn from_wire(raw: &Value, _cx: &DecodeContext<'_>) -> Result<Self, ModelError> {
        Ok(AnyValue(raw.clone()))
    }
}

impl ToWire for AnyValue {
    fn to_wire(&self) -> Value {
        self.0.clone()
    }
}

impl WireType for AnyValue {
    fn declared_type() -> DeclaredType {
        DeclaredType::Object
    }
}

/// Null elements are skipped, as encoding drops them.
impl<T: FromWire> FromWire for Vec<T> {
    fn from_wire(raw: &Value, cx: &DecodeContext<'_>) -> Result<Self, ModelError> {
        let Value::Array(items) = raw else {
            return Err(cx.mismatch("Array", raw));
        };
        items
            .iter()
            .filter(|item| !item.is_null())
            .map(|item| T::from_wire(item, cx))
            .collect()
    }
}

/// Null elements are dropped.
impl<T: ToWire> ToWire for Vec<T> {
    fn to_wire(&self) -> Value {
        Value::Array(
            self.iter()
                .map(ToWire::to_wire)
                .filter(|item| !item.is_null())
                .collect(),
        )
    }
}

impl<T: WireType> WireType for Vec<T> {
    fn declared_type() -> DeclaredType {
        DeclaredType::Array(Box::new(T::declared_type()))
    }
}

impl<T: FromWire> FromWire for BTreeMap<String, T> {
    fn from_wire(raw: &Value, cx: &DecodeContext<'_>) -> Result<Self, ModelError> {
        let Value::Object(entries) = raw else {
            return Err(cx.mismatch("Map", raw));
        };
        entries
            .iter()
            .map(|(key, item)| Ok((key.clone(), T::from_wire(item, cx)?)))
            .collect()
    }
}

impl<T: ToWire> ToWire for BTreeMap<String, T> {
    fn to_wire(&self) -> Value {
        Value::Object(
            self.iter()
                .map(|(key, item)| (key.clone(), item.to_wire()))
                .collect::<Map<String, Value>>(),
        )
    }
}

impl<T: WireType> WireType for BTreeMap<String, T> {
    fn declared_type() -> DeclaredType {
        DeclaredType::Map(Box::new(T::declared_type()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;
    use yare::parameterized;

    fn cx() -> DecodeContext<'static> {
        DecodeContext::new(&NoopSink, "Test")
    }

    #[parameterized(
        string = { json!("abc"), "abc" },
        integer = { json!(42), "42" },
        boolean = { json!(true), "true" },
    )]
    fn test_string_coercion(raw: Value, expected: &str) {
        assert_eq!(String::from_wire(&raw, &cx()).unwrap(), expected);
    }

    #[test]
    fn test_string_rejects_object() {
        let err = String::from_wire(&json!({"a": 1}), &cx()).unwrap_err();
        assert!(matches!(err, ModelError::TypeMismatch { .. }));
    }

    #[parameterized(
        integer = { json!(7), 7 },
        float_truncates = { json!(7.9), 7 },
        numeric_string = { json!(" 12 "), 12 },
        negative = { json!(-3), -3 },
    )]
    fn test_integer_coercion(raw: Value, expected: i64) {
        assert_eq!(i64::from_wire(&raw, &cx()).unwrap(), expected);
    }

    #[test]
    fn test_integer_rejects_garbage() {
        assert!(i64::from_wire(&json!("twelve"), &cx()).is_err());
        assert!(i64::from_wire(&json!(true), &cx()).is_err());
    }

    #[parameterized(
        above_max = { json!(u64::MAX) },
        huge_float = { json!(1e30) },
        below_min = { json!(-1e19) },
    )]
    fn test_integer_rejects_out_of_range(raw: Value) {
        let err = i64::from_wire(&raw, &cx()).unwrap_err();
        assert!(matches!(err, ModelError::TypeMismatch { .. }));
    }

    #[test]
    fn test_integer_keeps_extremes() {
        assert_eq!(i64::from_wire(&json!(i64::MAX), &cx()).unwrap(), i64::MAX);
        assert_eq!(i64::from_wire(&json!(i64::MIN), &cx()).unwrap(), i64::MIN);
    }

    #[test]
    fn test_float_widening() {
        assert_eq!(Float::from_wire(&json!(2), &cx()).unwrap(), Float(2.0));
        assert_eq!(Float::from_wire(&json!("0.5"), &cx()).unwrap(), Float(0.5));
    }

    #[parameterized(
        native_true = { json!(true), true },
        native_false = { json!(false), false },
        yes = { json!("YES"), true },
        t = { json!("t"), true },
        one = { json!(1), true },
        zero = { json!(0), false },
        other_text = { json!("nope"), false },
    )]
    fn test_boolean_coercion(raw: Value, expected: bool) {
        assert_eq!(bool::from_wire(&raw, &cx()).unwrap(), expected);
    }

    #[parameterized(
        rfc3339_utc = { "2024-01-15T10:30:00Z" },
        rfc3339_offset = { "2024-01-15T11:30:00+01:00" },
        fractional = { "2024-01-15T10:30:00.000Z" },
        naive = { "2024-01-15T10:30:00" },
    )]
    fn test_datetime_parsing(text: &str) {
        let expected = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(
            DateTime::<Utc>::from_wire(&json!(text), &cx()).unwrap(),
            expected
        );
    }

    #[test]
    fn test_datetime_bare_date_and_render() {
        let parsed = DateTime::<Utc>::from_wire(&json!("2024-03-01"), &cx()).unwrap();
        assert_eq!(parsed.to_wire(), json!("2024-03-01T00:00:00Z"));
    }

    #[test]
    fn test_datetime_rejects_garbage() {
        let err = DateTime::<Utc>::from_wire(&json!("yesterday"), &cx()).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"invalid value for Test.: expected DateTime, found string "yesterday""#
        );
    }

    #[test]
    fn test_vec_skips_null_elements_on_decode() {
        let decoded = Vec::<i64>::from_wire(&json!([null, 4, null, 8]), &cx()).unwrap();
        assert_eq!(decoded, vec![4, 8]);
    }

    #[test]
    fn test_vec_drops_null_elements_on_encode() {
        let values = vec![AnyValue(json!(1)), AnyValue(Value::Null), AnyValue(json!("x"))];
        assert_eq!(values.to_wire(), json!([1, "x"]));
    }

    #[test]
    fn test_nested_map_round_trip() {
        let raw = json!({"Operations": {"CostCenter": "42", "Owners": ["a", "b"]}});
        let decoded = BTreeMap::<String, BTreeMap<String, AnyValue>>::from_wire(&raw, &cx()).unwrap();
        assert_eq!(decoded.to_wire(), raw);
    }

    #[test]
    fn test_map_rejects_non_object() {
        assert!(BTreeMap::<String, String>::from_wire(&json!([1]), &cx()).is_err());
    }

    #[test]
    fn test_declared_types() {
        assert_eq!(
            <BTreeMap<String, Vec<i64>>>::declared_type().to_string(),
            "Map<String, Array<Integer>>"
        );
        assert_eq!(<DateTime<Utc>>::declared_type(), DeclaredType::DateTime);
    }
}
