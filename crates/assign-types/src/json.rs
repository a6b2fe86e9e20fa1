//! JSON interop.
//!
//! Conversion from `serde_json` is lossless. Rendering to JSON follows the
//! usual stringify rules: undefined and function properties vanish from
//! objects and become `null` in arrays, non-finite numbers and array holes
//! become `null`, dates render as RFC 3339 UTC strings with milliseconds.

use chrono::{DateTime, SecondsFormat};
use serde::{Serialize, Serializer};
use serde_json::{Map, Number, Value as Json};

use crate::container::{Container, ContainerKind};
use crate::error::TypeError;
use crate::value::Value;

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        match json {
            Json::Null => Self::Null,
            Json::Bool(b) => Self::Bool(b),
            Json::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            Json::String(s) => Self::String(s),
            Json::Array(items) => Container::array_of(items.into_iter().map(Value::from)).into(),
            Json::Object(map) => Container::from(map).into(),
        }
    }
}

impl From<Map<String, Json>> for Container {
    fn from(map: Map<String, Json>) -> Self {
        Container::from_entries(map.into_iter().map(|(k, v)| (k, Value::from(v))))
    }
}

impl TryFrom<Json> for Container {
    type Error = TypeError;

    fn try_from(json: Json) -> Result<Self, Self::Error> {
        match Value::from(json) {
            Value::Container(c) => Ok(std::sync::Arc::unwrap_or_clone(c)),
            other => Err(TypeError::NotAContainer(other.type_name())),
        }
    }
}

impl Value {
    /// Render as JSON. Returns `None` for values that are omitted from
    /// objects (`Undefined` and functions).
    pub fn to_json(&self) -> Option<Json> {
        match self {
            Self::Undefined | Self::Function(_) => None,
            Self::Null => Some(Json::Null),
            Self::Bool(b) => Some(Json::Bool(*b)),
            Self::Number(n) => Some(number_to_json(*n)),
            Self::String(s) => Some(Json::String(s.clone())),
            Self::Container(c) => Some(c.to_json()),
        }
    }
}

impl Container {
    /// Render as JSON.
    pub fn to_json(&self) -> Json {
        match self.kind() {
            ContainerKind::Date(ms) => DateTime::from_timestamp_millis(ms)
                .map(|dt| Json::String(dt.to_rfc3339_opts(SecondsFormat::Millis, true)))
                .unwrap_or(Json::Null),
            ContainerKind::Array => {
                let len = self.array_length().unwrap_or(0);
                let items = (0..len)
                    .map(|i| self.get(i).and_then(Value::to_json).unwrap_or(Json::Null))
                    .collect();
                Json::Array(items)
            }
            ContainerKind::Object => {
                let map = self
                    .own_enumerable()
                    .filter_map(|(k, v)| v.to_json().map(|j| (k.to_string(), j)))
                    .collect();
                Json::Object(map)
            }
        }
    }
}

/// Integral doubles render as integers so `1.0` prints as `1`.
fn number_to_json(n: f64) -> Json {
    const MAX_SAFE: f64 = 9_007_199_254_740_991.0;
    if n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_SAFE {
        return Json::Number(Number::from(n as i64));
    }
    Number::from_f64(n).map_or(Json::Null, Json::Number)
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().unwrap_or(Json::Null).serialize(serializer)
    }
}

impl Serialize for Container {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}
