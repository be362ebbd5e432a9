//! IEC 61131-3 elementary types and value coercion

use serde_json::Value;

/// Default length of an unsized STRING
const DEFAULT_STRING_LEN: u32 = 80;

/// Elementary data types supported by the simulator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdsDataType {
    Bool,
    Byte,
    Sint,
    Usint,
    Word,
    Int,
    Uint,
    Dword,
    Dint,
    Udint,
    Lint,
    Ulint,
    Real,
    Lreal,
    /// STRING(n): n characters plus terminator
    String(u32),
}

impl AdsDataType {
    /// Size in bytes as reported in the symbol table
    pub fn size(&self) -> u32 {
        match self {
            AdsDataType::Bool | AdsDataType::Byte | AdsDataType::Sint | AdsDataType::Usint => 1,
            AdsDataType::Word | AdsDataType::Int | AdsDataType::Uint => 2,
            AdsDataType::Dword | AdsDataType::Dint | AdsDataType::Udint | AdsDataType::Real => 4,
            AdsDataType::Lint | AdsDataType::Ulint | AdsDataType::Lreal => 8,
            AdsDataType::String(len) => len + 1,
        }
    }

    /// Value a freshly declared variable holds
    pub fn default_value(&self) -> Value {
        match self {
            AdsDataType::Bool => Value::Bool(false),
            AdsDataType::Real | AdsDataType::Lreal => Value::from(0.0),
            AdsDataType::String(_) => Value::String(String::new()),
            _ => Value::from(0),
        }
    }

    /// Inclusive range for integer types
    fn int_range(&self) -> Option<(i128, i128)> {
        let range = match self {
            AdsDataType::Byte | AdsDataType::Usint => (0, u8::MAX as i128),
            AdsDataType::Sint => (i8::MIN as i128, i8::MAX as i128),
            AdsDataType::Word | AdsDataType::Uint => (0, u16::MAX as i128),
            AdsDataType::Int => (i16::MIN as i128, i16::MAX as i128),
            AdsDataType::Dword | AdsDataType::Udint => (0, u32::MAX as i128),
            AdsDataType::Dint => (i32::MIN as i128, i32::MAX as i128),
            AdsDataType::Lint => (i64::MIN as i128, i64::MAX as i128),
            AdsDataType::Ulint => (0, u64::MAX as i128),
            _ => return None,
        };
        Some(range)
    }

    /// Convert a JSON value into what a variable of this type would store.
    ///
    /// Returns the stored value, or a reason the value does not fit.
    pub fn coerce(&self, value: &Value) -> Result<Value, String> {
        match self {
            AdsDataType::Bool => match value {
                Value::Bool(b) => Ok(Value::Bool(*b)),
                other => match integral(other) {
                    Some(0) => Ok(Value::Bool(false)),
                    Some(1) => Ok(Value::Bool(true)),
                    _ => Err(format!("expected boolean, got {}", other)),
                },
            },
            AdsDataType::Real | AdsDataType::Lreal => {
                let f = value
                    .as_f64()
                    .ok_or_else(|| format!("expected number, got {}", value))?;
                let stored = if *self == AdsDataType::Real {
                    f as f32 as f64
                } else {
                    f
                };
                if !stored.is_finite() {
                    return Err(format!("{} out of range for {}", f, self));
                }
                Ok(Value::from(stored))
            }
            AdsDataType::String(len) => match value {
                Value::String(s) => Ok(Value::String(truncate_bytes(s, *len as usize).to_string())),
                other => Err(format!("expected string, got {}", other)),
            },
            _ => {
                let (min, max) = self.int_range().unwrap_or((0, 0));
                let n = integral(value).ok_or_else(|| format!("expected integer, got {}", value))?;
                if n < min || n > max {
                    return Err(format!("{} out of range for {} ({}..={})", n, self, min, max));
                }
                Ok(if n < 0 {
                    Value::from(n as i64)
                } else {
                    Value::from(n as u64)
                })
            }
        }
    }
}

/// Longest prefix of `s` that fits in `max` bytes without splitting a character
fn truncate_bytes(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Integral value of a JSON number, accepting floats without a fraction
fn integral(value: &Value) -> Option<i128> {
    let Value::Number(n) = value else {
        return None;
    };
    if let Some(i) = n.as_i64() {
        return Some(i as i128);
    }
    if let Some(u) = n.as_u64() {
        return Some(u as i128);
    }
    n.as_f64()
        .filter(|f| f.is_finite() && f.fract() == 0.0 && f.abs() < 1e19)
        .map(|f| f as i128)
}

impl std::fmt::Display for AdsDataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AdsDataType::Bool => "BOOL",
            AdsDataType::Byte => "BYTE",
            AdsDataType::Sint => "SINT",
            AdsDataType::Usint => "USINT",
            AdsDataType::Word => "WORD",
            AdsDataType::Int => "INT",
            AdsDataType::Uint => "UINT",
            AdsDataType::Dword => "DWORD",
            AdsDataType::Dint => "DINT",
            AdsDataType::Udint => "UDINT",
            AdsDataType::Lint => "LINT",
            AdsDataType::Ulint => "ULINT",
            AdsDataType::Real => "REAL",
            AdsDataType::Lreal => "LREAL",
            AdsDataType::String(len) => return write!(f, "STRING({})", len),
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for AdsDataType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let data_type = match upper.as_str() {
            "BOOL" => AdsDataType::Bool,
            "BYTE" => AdsDataType::Byte,
            "SINT" => AdsDataType::Sint,
            "USINT" => AdsDataType::Usint,
            "WORD" => AdsDataType::Word,
            "INT" => AdsDataType::Int,
            "UINT" => AdsDataType::Uint,
            "DWORD" => AdsDataType::Dword,
            "DINT" => AdsDataType::Dint,
            "UDINT" => AdsDataType::Udint,
            "LINT" => AdsDataType::Lint,
            "ULINT" => AdsDataType::Ulint,
            "REAL" => AdsDataType::Real,
            "LREAL" => AdsDataType::Lreal,
            "STRING" => AdsDataType::String(DEFAULT_STRING_LEN),
            other => {
                let len = other
                    .strip_prefix("STRING(")
                    .and_then(|rest| rest.strip_suffix(')'))
                    .and_then(|len| len.trim().parse::<u32>().ok())
                    .filter(|len| *len > 0 && *len < u32::MAX)
                    .ok_or_else(|| format!("Unknown data type: '{}'", s))?;
                AdsDataType::String(len)
            }
        };
        Ok(data_type)
    }
}
