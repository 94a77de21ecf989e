//! Checks that a simple reading's string value is parseable as its value type.

use std::str::FromStr;

use crate::models::ValueType;

const GO_TRUE: [&str; 6] = ["1", "t", "T", "TRUE", "true", "True"];
const GO_FALSE: [&str; 6] = ["0", "f", "F", "FALSE", "false", "False"];

fn check_bool(value: &str) -> Result<(), String> {
    if GO_TRUE.contains(&value) || GO_FALSE.contains(&value) {
        Ok(())
    } else {
        Err(format!("'{value}' is not a Bool"))
    }
}

fn check_int<T: FromStr>(value: &str, value_type: ValueType) -> Result<(), String> {
    value
        .parse::<T>()
        .map(|_| ())
        .map_err(|_| format!("'{value}' is not a valid {value_type}"))
}

/// Go hex float form, `[+-]0x<hex>[.<hex>]p[+-]<dec>`; the exponent is mandatory.
fn parse_hex_float(value: &str) -> Option<f64> {
    let (negative, unsigned) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.strip_prefix('+').unwrap_or(value)),
    };
    let digits = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))?;
    let (mantissa, exponent) = digits.split_once(['p', 'P'])?;
    let exponent: i32 = exponent.parse().ok()?;
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }

    let mut parsed = 0f64;
    for c in whole.chars() {
        parsed = parsed * 16.0 + f64::from(c.to_digit(16)?);
    }
    let mut scale = 1.0 / 16.0;
    for c in fraction.chars() {
        parsed += f64::from(c.to_digit(16)?) * scale;
        scale /= 16.0;
    }
    let parsed = parsed * 2f64.powi(exponent);
    Some(if negative { -parsed } else { parsed })
}

fn check_float(value: &str, value_type: ValueType) -> Result<(), String> {
    let parsed = value
        .parse::<f64>()
        .ok()
        .or_else(|| parse_hex_float(value))
        .ok_or_else(|| format!("'{value}' is not a valid {value_type}"))?;
    let overflows = match value_type {
        ValueType::Float32 => (parsed as f32).is_infinite(),
        _ => parsed.is_infinite(),
    };
    // Overflowing literals parse to infinity rather than failing
    if overflows && !value.to_ascii_lowercase().contains("inf") {
        return Err(format!("'{value}' is out of range for {value_type}"));
    }
    Ok(())
}

fn check_scalar(value: &str, value_type: ValueType) -> Result<(), String> {
    match value_type {
        ValueType::Bool => check_bool(value),
        ValueType::String => Ok(()),
        ValueType::Uint8 => check_int::<u8>(value, value_type),
        ValueType::Uint16 => check_int::<u16>(value, value_type),
        ValueType::Uint32 => check_int::<u32>(value, value_type),
        ValueType::Uint64 => check_int::<u64>(value, value_type),
        ValueType::Int8 => check_int::<i8>(value, value_type),
        ValueType::Int16 => check_int::<i16>(value, value_type),
        ValueType::Int32 => check_int::<i32>(value, value_type),
        ValueType::Int64 => check_int::<i64>(value, value_type),
        ValueType::Float32 => check_float(value, value_type),
        ValueType::Float64 => check_float(value, value_type),
        ValueType::Object => match serde_json::from_str::<serde_json::Value>(value) {
            Ok(v) if v.is_object() => Ok(()),
            _ => Err(format!("'{value}' is not a JSON object")),
        },
        ValueType::Binary => Err("binary values must be carried as binaryValue".to_string()),
        array => Err(format!("{array} is not a scalar value type")),
    }
}

/// Validate the textual value of a simple reading against its value type.
///
/// Arrays are bracketed and comma separated (`[1, 2, 3]`); every element must
/// be valid for the array's element type.
pub fn check_simple_value(value_type: ValueType, value: &str) -> Result<(), String> {
    let Some(element_type) = value_type.element_type() else {
        return check_scalar(value, value_type);
    };

    let inner = value
        .trim()
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .ok_or_else(|| format!("'{value}' is not a bracketed {value_type}"))?;
    if inner.trim().is_empty() {
        return Ok(());
    }
    inner
        .split(',')
        .map(str::trim)
        .try_for_each(|element| check_scalar(element, element_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalars() {
        assert!(check_simple_value(ValueType::Bool, "true").is_ok());
        assert!(check_simple_value(ValueType::Bool, "T").is_ok());
        assert!(check_simple_value(ValueType::Bool, "yes").is_err());
        assert!(check_simple_value(ValueType::Uint8, "255").is_ok());
        assert!(check_simple_value(ValueType::Uint8, "256").is_err());
        assert!(check_simple_value(ValueType::Int16, "-32768").is_ok());
        assert!(check_simple_value(ValueType::Int16, "1.5").is_err());
        assert!(check_simple_value(ValueType::Float32, "1.5e+02").is_ok());
        assert!(check_simple_value(ValueType::Float32, "1e39").is_err());
        assert!(check_simple_value(ValueType::Float64, "1e39").is_ok());
        assert!(check_simple_value(ValueType::String, "").is_ok());
        assert!(check_simple_value(ValueType::Object, r#"{"a": 1}"#).is_ok());
        assert!(check_simple_value(ValueType::Object, "[1]").is_err());
        assert!(check_simple_value(ValueType::Binary, "AAEC").is_err());
    }

    #[test]
    fn test_hex_floats() {
        assert_eq!(parse_hex_float("0x1.8p+01"), Some(3.0));
        assert_eq!(parse_hex_float("-0x1p-2"), Some(-0.25));
        assert_eq!(parse_hex_float("0X.8P1"), Some(1.0));
        assert!(parse_hex_float("0x1.8").is_none());
        assert!(parse_hex_float("0xp+01").is_none());
        assert!(parse_hex_float("0x1g.8p+01").is_none());

        assert!(check_simple_value(ValueType::Float64, "0x1.edd2f1a9fbe77p+06").is_ok());
        assert!(check_simple_value(ValueType::Float32, "0x1.8p+01").is_ok());
        assert!(check_simple_value(ValueType::Float64, "0x1p+200").is_ok());
        assert!(check_simple_value(ValueType::Float32, "0x1p+200").is_err());
        assert!(check_simple_value(ValueType::Float64, "0x1.8").is_err());
        assert!(check_simple_value(ValueType::Float64Array, "[0x1p+00, 1.5e+00, -0x1.8p-01]").is_ok());
        assert!(check_simple_value(ValueType::Float32Array, "[0x1p+00, 0x1p+200]").is_err());
    }

    #[test]
    fn test_arrays() {
        assert!(check_simple_value(ValueType::Int32Array, "[1, 2, -3]").is_ok());
        assert!(check_simple_value(ValueType::Int32Array, "[]").is_ok());
        assert!(check_simple_value(ValueType::BoolArray, "[true, false]").is_ok());
        assert!(check_simple_value(ValueType::Float64Array, "[1.5e+00, 2e-03]").is_ok());
        assert!(check_simple_value(ValueType::Uint8Array, "[1, 300]").is_err());
        assert!(check_simple_value(ValueType::Int32Array, "1, 2").is_err());
    }
}
