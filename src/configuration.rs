use couchdb_base64::{validate, MAX_TOTAL_BITS};
use std::{env, error};

#[derive(Debug, Clone)]
pub struct Configuration {
    total_bits: u32,
    verbose: bool,
}

fn var(key: &str, default: Option<String>) -> Result<String, String> {
    match env::var(key) {
        Ok(value) => Ok(value),
        Err(_) => default.ok_or(format!("Missing {}", key)),
    }
}

fn var_map<T, E: error::Error>(key: &str, mut f: impl FnMut(&str) -> Result<T, E>, default: Option<T>) -> Result<T, String> {
    match var(key, None) {
        Ok(value) => f(&value).map_err(|_| format!("Invalid {} {}", key, value)),
        Err(err) => default.ok_or(err),
    }
}

fn parse_bool(value: &str) -> Result<bool, std::str::ParseBoolError> {
    match value {
        "1" | "yes" => Ok(true),
        "0" | "no" | "" => Ok(false),
        _ => value.to_ascii_lowercase().parse(),
    }
}

impl Configuration {
    pub fn new() -> Result<Self, String> {
        let total_bits = var_map("TOTAL_BITS", |total_bits| total_bits.parse::<i64>(), Some(MAX_TOTAL_BITS as i64))?;
        let total_bits = validate::total_bits(total_bits).map_err(|error| format!("Invalid TOTAL_BITS: {}", error))?;
        let verbose = var_map("VERBOSE", parse_bool, Some(false))?;
        Ok(Self { total_bits, verbose })
    }

    #[cfg(test)]
    pub fn with_total_bits(total_bits: u32) -> Self {
        Self { total_bits, verbose: false }
    }

    /// Bit width used when `encode-uint` is given a bare integer.
    pub fn total_bits(&self) -> u32 {
        self.total_bits
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}
