use crate::uint::{encode_from_uint, MAX_SAFE_INTEGER};
use crate::{validate, Error};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// The `{"uint": .., "totalBits": ..}` argument of an integer encoding.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameters {
    pub uint: u64,
    pub total_bits: u32,
}

const FIELDS: [&str; 2] = ["totalBits", "uint"];

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Accepts integral floats such as `64.0`; huge floats saturate and fail the later range checks.
fn integer(field: &'static str, value: &Value) -> Result<i128, Error> {
    let not_an_integer = || Error::NotAnInteger {
        field,
        value: value.to_string(),
    };
    let number = match value {
        Value::Number(number) => number,
        _ => return Err(not_an_integer()),
    };
    if let Some(integer) = number.as_u64() {
        return Ok(integer as i128);
    }
    if let Some(integer) = number.as_i64() {
        return Ok(integer as i128);
    }
    match number.as_f64() {
        Some(float) if float.is_finite() && float.fract() == 0.0 => Ok(float as i128),
        _ => Err(not_an_integer()),
    }
}

impl Parameters {
    pub fn new(uint: u64, total_bits: u32) -> Self {
        Self { uint, total_bits }
    }

    /// Runs the shape checks in order: object, both keys present, `uint` in range, then `totalBits`.
    pub fn from_value(value: &Value) -> Result<Self, Error> {
        let object = value.as_object().ok_or(Error::InvalidArgument {
            expected: "an object",
            found: kind(value),
        })?;

        let missing: Vec<&'static str> = FIELDS.iter().copied().filter(|field| !object.contains_key(*field)).collect();
        if !missing.is_empty() {
            return Err(Error::MissingField { fields: missing });
        }

        let uint_value = &object["uint"];
        let uint = integer("uint", uint_value)?;
        if uint < 0 || uint > MAX_SAFE_INTEGER as i128 {
            return Err(Error::OutOfRange {
                field: "uint",
                value: uint_value.to_string(),
            });
        }

        let total_bits = integer("totalBits", &object["totalBits"])?;
        let total_bits = validate::total_bits(total_bits.clamp(i64::MIN as i128, i64::MAX as i128) as i64)?;

        let uint = uint as u64;
        validate::fits(uint, total_bits)?;
        Ok(Self { uint, total_bits })
    }

    pub fn encode(&self) -> Result<String, Error> {
        encode_from_uint(self.uint, self.total_bits)
    }
}

impl FromStr for Parameters {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: Value = serde_json::from_str(s).map_err(|_| Error::InvalidArgument {
            expected: "an object",
            found: "invalid JSON",
        })?;
        Self::from_value(&value)
    }
}

/// Validates and encodes a loosely typed `{"uint": .., "totalBits": ..}` value.
pub fn encode_from_value(value: &Value) -> Result<String, Error> {
    Parameters::from_value(value)?.encode()
}
