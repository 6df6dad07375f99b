//! Typed value codec for properties.
//!
//! Conversion between stored property text and Rust values goes through an
//! explicit per-type trait pair instead of ambient conversion machinery:
//! [`FromValue`] parses, [`ToValue`] formats and carries the quoting policy.
//! Host-defined enumerations participate by implementing both traits.

use crate::error::{IniError, ParseResult};

/// Parse a value out of stored property text
pub trait FromValue: Sized {
    fn from_ini(raw: &str) -> ParseResult<Self>;
}

/// Format a value into its canonical stored text
pub trait ToValue {
    /// Whether values of this type are textual and therefore written inside
    /// double quotes
    const QUOTED: bool = false;

    fn to_ini(&self) -> String;
}

impl FromValue for String {
    fn from_ini(raw: &str) -> ParseResult<Self> {
        Ok(raw.to_string())
    }
}

impl ToValue for String {
    const QUOTED: bool = true;

    fn to_ini(&self) -> String {
        self.clone()
    }
}

impl ToValue for &str {
    const QUOTED: bool = true;

    fn to_ini(&self) -> String {
        self.to_string()
    }
}

impl FromValue for i32 {
    fn from_ini(raw: &str) -> ParseResult<Self> {
        raw.parse::<i32>()
            .map_err(|_| IniError::conversion(raw, "i32"))
    }
}

impl ToValue for i32 {
    fn to_ini(&self) -> String {
        self.to_string()
    }
}

impl FromValue for i64 {
    fn from_ini(raw: &str) -> ParseResult<Self> {
        raw.parse::<i64>()
            .map_err(|_| IniError::conversion(raw, "i64"))
    }
}

impl ToValue for i64 {
    fn to_ini(&self) -> String {
        self.to_string()
    }
}

impl FromValue for u32 {
    fn from_ini(raw: &str) -> ParseResult<Self> {
        raw.parse::<u32>()
            .map_err(|_| IniError::conversion(raw, "u32"))
    }
}

impl ToValue for u32 {
    fn to_ini(&self) -> String {
        self.to_string()
    }
}

impl FromValue for u64 {
    fn from_ini(raw: &str) -> ParseResult<Self> {
        raw.parse::<u64>()
            .map_err(|_| IniError::conversion(raw, "u64"))
    }
}

impl ToValue for u64 {
    fn to_ini(&self) -> String {
        self.to_string()
    }
}

impl FromValue for f32 {
    fn from_ini(raw: &str) -> ParseResult<Self> {
        raw.parse::<f32>()
            .map_err(|_| IniError::conversion(raw, "f32"))
    }
}

impl ToValue for f32 {
    fn to_ini(&self) -> String {
        self.to_string()
    }
}

impl FromValue for f64 {
    fn from_ini(raw: &str) -> ParseResult<Self> {
        raw.parse::<f64>()
            .map_err(|_| IniError::conversion(raw, "f64"))
    }
}

impl ToValue for f64 {
    fn to_ini(&self) -> String {
        self.to_string()
    }
}

impl FromValue for bool {
    /// Lenient boolean table: true/false, on/off, yes/no, 1/0
    fn from_ini(raw: &str) -> ParseResult<Self> {
        match raw.to_lowercase().as_str() {
            "true" | "on" | "yes" | "1" => Ok(true),
            "false" | "off" | "no" | "0" => Ok(false),
            _ => Err(IniError::conversion(raw, "bool")),
        }
    }
}

impl ToValue for bool {
    fn to_ini(&self) -> String {
        self.to_string()
    }
}
