use itertools::Itertools;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::is_zero;
use crate::helpers::now_nanos;
use crate::models::{BaseReading, Reading, ReadingContent, ValueType};
use crate::validation::{check_simple_value, Checker, Validate};

/// One reading of an event.
///
/// On the wire the content is flattened into the reading: simple readings
/// carry `value`, binary ones `binaryValue` (base64) and `mediaType`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ReadingWire", into = "ReadingWire")]
pub struct ReadingDto {
    pub id: String,
    /// Nanoseconds since the Unix epoch.
    pub origin: i64,
    pub device_name: String,
    pub resource_name: String,
    pub profile_name: String,
    pub value_type: ValueType,
    pub units: String,
    pub content: ReadingContent,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReadingWire {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    id: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    origin: i64,
    #[serde(default)]
    device_name: String,
    #[serde(default)]
    resource_name: String,
    #[serde(default)]
    profile_name: String,
    value_type: ValueType,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    units: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "base64_bytes")]
    binary_value: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    media_type: Option<String>,
}

impl TryFrom<ReadingWire> for ReadingDto {
    type Error = String;

    fn try_from(wire: ReadingWire) -> Result<Self, Self::Error> {
        let content = match (wire.value, wire.binary_value) {
            (Some(value), None) => ReadingContent::Simple { value },
            (None, Some(binary_value)) => ReadingContent::Binary {
                binary_value,
                media_type: wire.media_type.unwrap_or_default(),
            },
            (Some(_), Some(_)) => {
                return Err("a reading carries either value or binaryValue, not both".to_string())
            }
            (None, None) => return Err("a reading needs a value or a binaryValue".to_string()),
        };
        Ok(ReadingDto {
            id: wire.id,
            origin: wire.origin,
            device_name: wire.device_name,
            resource_name: wire.resource_name,
            profile_name: wire.profile_name,
            value_type: wire.value_type,
            units: wire.units,
            content,
        })
    }
}

impl From<ReadingDto> for ReadingWire {
    fn from(dto: ReadingDto) -> Self {
        let (value, binary_value, media_type) = match dto.content {
            ReadingContent::Simple { value } => (Some(value), None, None),
            ReadingContent::Binary {
                binary_value,
                media_type,
            } => (None, Some(binary_value), Some(media_type)),
        };
        ReadingWire {
            id: dto.id,
            origin: dto.origin,
            device_name: dto.device_name,
            resource_name: dto.resource_name,
            profile_name: dto.profile_name,
            value_type: dto.value_type,
            units: dto.units,
            value,
            binary_value,
            media_type,
        }
    }
}

mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error> {
        match bytes {
            Some(bytes) => serializer.serialize_str(&STANDARD.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|encoded| STANDARD.decode(encoded).map_err(de::Error::custom))
            .transpose()
    }
}

/// A typed reading value, rendered to the textual form simple readings carry.
#[derive(Clone, Debug, PartialEq)]
pub enum ReadingValue {
    Bool(bool),
    String(String),
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Uint64(u64),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    BoolArray(Vec<bool>),
    StringArray(Vec<String>),
    Uint8Array(Vec<u8>),
    Uint16Array(Vec<u16>),
    Uint32Array(Vec<u32>),
    Uint64Array(Vec<u64>),
    Int8Array(Vec<i8>),
    Int16Array(Vec<i16>),
    Int32Array(Vec<i32>),
    Int64Array(Vec<i64>),
    Float32Array(Vec<f32>),
    Float64Array(Vec<f64>),
    Object(serde_json::Value),
}

macro_rules! array {
    ($items:expr, $render:expr) => {
        format!("[{}]", $items.iter().map($render).join(", "))
    };
}

impl ReadingValue {
    pub fn value_type(&self) -> ValueType {
        match self {
            ReadingValue::Bool(_) => ValueType::Bool,
            ReadingValue::String(_) => ValueType::String,
            ReadingValue::Uint8(_) => ValueType::Uint8,
            ReadingValue::Uint16(_) => ValueType::Uint16,
            ReadingValue::Uint32(_) => ValueType::Uint32,
            ReadingValue::Uint64(_) => ValueType::Uint64,
            ReadingValue::Int8(_) => ValueType::Int8,
            ReadingValue::Int16(_) => ValueType::Int16,
            ReadingValue::Int32(_) => ValueType::Int32,
            ReadingValue::Int64(_) => ValueType::Int64,
            ReadingValue::Float32(_) => ValueType::Float32,
            ReadingValue::Float64(_) => ValueType::Float64,
            ReadingValue::BoolArray(_) => ValueType::BoolArray,
            ReadingValue::StringArray(_) => ValueType::StringArray,
            ReadingValue::Uint8Array(_) => ValueType::Uint8Array,
            ReadingValue::Uint16Array(_) => ValueType::Uint16Array,
            ReadingValue::Uint32Array(_) => ValueType::Uint32Array,
            ReadingValue::Uint64Array(_) => ValueType::Uint64Array,
            ReadingValue::Int8Array(_) => ValueType::Int8Array,
            ReadingValue::Int16Array(_) => ValueType::Int16Array,
            ReadingValue::Int32Array(_) => ValueType::Int32Array,
            ReadingValue::Int64Array(_) => ValueType::Int64Array,
            ReadingValue::Float32Array(_) => ValueType::Float32Array,
            ReadingValue::Float64Array(_) => ValueType::Float64Array,
            ReadingValue::Object(_) => ValueType::Object,
        }
    }

    /// Textual form: floats in exponent notation (`1.5e+02`), arrays as `[a, b]`.
    pub fn encode(&self) -> String {
        match self {
            ReadingValue::Bool(v) => v.to_string(),
            ReadingValue::String(v) => v.clone(),
            ReadingValue::Uint8(v) => v.to_string(),
            ReadingValue::Uint16(v) => v.to_string(),
            ReadingValue::Uint32(v) => v.to_string(),
            ReadingValue::Uint64(v) => v.to_string(),
            ReadingValue::Int8(v) => v.to_string(),
            ReadingValue::Int16(v) => v.to_string(),
            ReadingValue::Int32(v) => v.to_string(),
            ReadingValue::Int64(v) => v.to_string(),
            ReadingValue::Float32(v) => format_f32(*v),
            ReadingValue::Float64(v) => format_f64(*v),
            ReadingValue::BoolArray(v) => array!(v, |x| x.to_string()),
            ReadingValue::StringArray(v) => array!(v, |x| x.clone()),
            ReadingValue::Uint8Array(v) => array!(v, |x| x.to_string()),
            ReadingValue::Uint16Array(v) => array!(v, |x| x.to_string()),
            ReadingValue::Uint32Array(v) => array!(v, |x| x.to_string()),
            ReadingValue::Uint64Array(v) => array!(v, |x| x.to_string()),
            ReadingValue::Int8Array(v) => array!(v, |x| x.to_string()),
            ReadingValue::Int16Array(v) => array!(v, |x| x.to_string()),
            ReadingValue::Int32Array(v) => array!(v, |x| x.to_string()),
            ReadingValue::Int64Array(v) => array!(v, |x| x.to_string()),
            ReadingValue::Float32Array(v) => array!(v, |x| format_f32(*x)),
            ReadingValue::Float64Array(v) => array!(v, |x| format_f64(*x)),
            ReadingValue::Object(v) => v.to_string(),
        }
    }
}

macro_rules! reading_value_from {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$ty> for ReadingValue {
                fn from(value: $ty) -> Self {
                    ReadingValue::$variant(value)
                }
            }
        )+
    };
}

reading_value_from!(
    bool => Bool,
    String => String,
    u8 => Uint8,
    u16 => Uint16,
    u32 => Uint32,
    u64 => Uint64,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    f32 => Float32,
    f64 => Float64,
    Vec<bool> => BoolArray,
    Vec<String> => StringArray,
    Vec<u16> => Uint16Array,
    Vec<u32> => Uint32Array,
    Vec<u64> => Uint64Array,
    Vec<i8> => Int8Array,
    Vec<i16> => Int16Array,
    Vec<i32> => Int32Array,
    Vec<i64> => Int64Array,
    Vec<f32> => Float32Array,
    Vec<f64> => Float64Array,
    serde_json::Value => Object,
);

impl From<&str> for ReadingValue {
    fn from(value: &str) -> Self {
        ReadingValue::String(value.to_string())
    }
}

fn format_f32(value: f32) -> String {
    match special_float(value.into()) {
        Some(s) => s.to_string(),
        None => go_exponent(&format!("{value:e}")),
    }
}

fn format_f64(value: f64) -> String {
    match special_float(value) {
        Some(s) => s.to_string(),
        None => go_exponent(&format!("{value:e}")),
    }
}

fn special_float(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value == f64::INFINITY {
        Some("+Inf")
    } else if value == f64::NEG_INFINITY {
        Some("-Inf")
    } else {
        None
    }
}

// "1.5e2" -> "1.5e+02", "1e-7" -> "1e-07"
fn go_exponent(rust: &str) -> String {
    let Some((mantissa, exponent)) = rust.split_once('e') else {
        return rust.to_string();
    };
    let exponent: i32 = exponent.parse().unwrap_or_default();
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.abs())
}

impl ReadingDto {
    pub fn simple(
        profile_name: impl Into<String>,
        device_name: impl Into<String>,
        resource_name: impl Into<String>,
        value: impl Into<ReadingValue>,
    ) -> Self {
        let value = value.into();
        ReadingDto {
            id: Uuid::new_v4().to_string(),
            origin: now_nanos(),
            device_name: device_name.into(),
            resource_name: resource_name.into(),
            profile_name: profile_name.into(),
            value_type: value.value_type(),
            units: String::new(),
            content: ReadingContent::Simple {
                value: value.encode(),
            },
        }
    }

    pub fn binary(
        profile_name: impl Into<String>,
        device_name: impl Into<String>,
        resource_name: impl Into<String>,
        binary_value: Vec<u8>,
        media_type: impl Into<String>,
    ) -> Self {
        ReadingDto {
            id: Uuid::new_v4().to_string(),
            origin: now_nanos(),
            device_name: device_name.into(),
            resource_name: resource_name.into(),
            profile_name: profile_name.into(),
            value_type: ValueType::Binary,
            units: String::new(),
            content: ReadingContent::Binary {
                binary_value,
                media_type: media_type.into(),
            },
        }
    }
}

impl Validate for ReadingDto {
    fn validate(&self, check: &mut Checker<'_>) {
        check.uuid("id", &self.id);
        check.ensure("origin", self.origin != 0, "must not be zero");
        check.name("deviceName", &self.device_name);
        check.name("resourceName", &self.resource_name);
        check.name("profileName", &self.profile_name);
        match (&self.content, self.value_type) {
            (ReadingContent::Binary { binary_value, media_type }, ValueType::Binary) => {
                check.ensure("binaryValue", !binary_value.is_empty(), "must not be empty");
                check.required("mediaType", media_type);
            }
            (ReadingContent::Binary { .. }, value_type) => check.violation(
                "binaryValue",
                format!("is only allowed for Binary readings, not {value_type}"),
            ),
            (ReadingContent::Simple { .. }, ValueType::Binary) => {
                check.violation("binaryValue", "is required for Binary readings")
            }
            (ReadingContent::Simple { value }, value_type) => {
                if let Err(reason) = check_simple_value(value_type, value) {
                    check.violation("value", reason);
                }
            }
        }
    }
}

impl From<ReadingDto> for Reading {
    fn from(dto: ReadingDto) -> Self {
        Reading {
            base: BaseReading {
                id: dto.id,
                origin: dto.origin,
                device_name: dto.device_name,
                resource_name: dto.resource_name,
                profile_name: dto.profile_name,
                value_type: dto.value_type,
                units: dto.units,
            },
            content: dto.content,
        }
    }
}

impl From<Reading> for ReadingDto {
    fn from(reading: Reading) -> Self {
        let base = reading.base;
        ReadingDto {
            id: base.id,
            origin: base.origin,
            device_name: base.device_name,
            resource_name: base.resource_name,
            profile_name: base.profile_name,
            value_type: base.value_type,
            units: base.units,
            content: reading.content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Validator;

    #[test]
    fn test_float_encoding() {
        assert_eq!(ReadingValue::Float64(123.456).encode(), "1.23456e+02");
        assert_eq!(ReadingValue::Float64(0.0).encode(), "0e+00");
        assert_eq!(ReadingValue::Float64(-0.001).encode(), "-1e-03");
        assert_eq!(ReadingValue::Float32(1.5).encode(), "1.5e+00");
        assert_eq!(ReadingValue::Float64(f64::INFINITY).encode(), "+Inf");
        assert_eq!(ReadingValue::Float64(f64::NAN).encode(), "NaN");
    }

    #[test]
    fn test_array_encoding() {
        assert_eq!(ReadingValue::Int32Array(vec![1, -2, 3]).encode(), "[1, -2, 3]");
        assert_eq!(ReadingValue::BoolArray(vec![]).encode(), "[]");
        assert_eq!(ReadingValue::Float64Array(vec![1.5, 200.0]).encode(), "[1.5e+00, 2e+02]");
    }

    #[test]
    fn test_encoded_values_pass_validation() {
        let values: Vec<ReadingValue> = vec![
            true.into(),
            (-8i8).into(),
            u64::MAX.into(),
            f32::MAX.into(),
            vec![1.25f64, -3.5].into(),
            serde_json::json!({"a": 1}).into(),
        ];
        let validator = Validator::default();
        for value in values {
            let reading = ReadingDto::simple("profile", "device", "resource", value.clone());
            assert!(validator.validate(&reading).is_ok(), "{value:?}");
        }
    }

    #[test]
    fn test_binary_wire_format() {
        let reading = ReadingDto::binary("profile", "device", "image", vec![0, 1, 2], "image/png");
        let json = serde_json::to_value(&reading).unwrap();
        assert_eq!(json["binaryValue"], "AAEC");
        assert_eq!(json["mediaType"], "image/png");
        assert!(json.get("value").is_none());

        let decoded: ReadingDto = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, reading);
    }

    #[test]
    fn test_content_must_match_value_type() {
        let validator = Validator::default();
        let mut reading = ReadingDto::simple("profile", "device", "temp", 20i16);
        reading.value_type = ValueType::Binary;
        let err = validator.validate(&reading).unwrap_err();
        assert_eq!(err.violations()[0].field, "binaryValue");

        let mut reading = ReadingDto::simple("profile", "device", "temp", 20i16);
        reading.content = ReadingContent::Simple {
            value: "warm".to_string(),
        };
        let err = validator.validate(&reading).unwrap_err();
        assert_eq!(err.violations()[0].field, "value");
    }

    #[test]
    fn test_empty_binary_value_is_rejected() {
        let json = format!(
            r#"{{"id":"{}","origin":1700000000000000000,"deviceName":"camera","resourceName":"snapshot",
                "profileName":"camera-profile","valueType":"Binary","binaryValue":"","mediaType":"image/png"}}"#,
            Uuid::new_v4()
        );
        let reading: ReadingDto = serde_json::from_str(&json).unwrap();
        let err = Validator::default().validate(&reading).unwrap_err();
        assert_eq!(err.violations().len(), 1);
        assert_eq!(err.violations()[0].field, "binaryValue");
    }

    #[test]
    fn test_decode_rejects_missing_or_double_content() {
        let neither = r#"{"deviceName":"d","resourceName":"r","profileName":"p","valueType":"Int8"}"#;
        assert!(serde_json::from_str::<ReadingDto>(neither).is_err());
        let both = r#"{"valueType":"Binary","value":"1","binaryValue":"AA=="}"#;
        assert!(serde_json::from_str::<ReadingDto>(both).is_err());
    }
}
