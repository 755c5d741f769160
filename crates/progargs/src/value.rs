//! Conversion of raw tokens into typed values.
//!
//! Stored values are a closed set of types. Each stored [`Value`] carries its
//! own tag, so reading one back as a different type is a reportable error
//! instead of a reinterpretation.

use std::fmt;

/// Runtime tag for the supported value types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
    Bool,
    Char,
    Str,
}

impl ValueType {
    /// Whether `raw` converts to this type.
    pub fn accepts(self, raw: &str) -> bool {
        self.convert(raw).is_some()
    }

    /// Convert `raw` to a value of this type.
    ///
    /// Only standard `FromStr` parsing is applied: no surrounding whitespace,
    /// no radix prefixes, no unit suffixes.
    pub fn convert(self, raw: &str) -> Option<Value> {
        let value = match self {
            Self::I8 => Value::I8(raw.parse().ok()?),
            Self::I16 => Value::I16(raw.parse().ok()?),
            Self::I32 => Value::I32(raw.parse().ok()?),
            Self::I64 => Value::I64(raw.parse().ok()?),
            Self::Isize => Value::Isize(raw.parse().ok()?),
            Self::U8 => Value::U8(raw.parse().ok()?),
            Self::U16 => Value::U16(raw.parse().ok()?),
            Self::U32 => Value::U32(raw.parse().ok()?),
            Self::U64 => Value::U64(raw.parse().ok()?),
            Self::Usize => Value::Usize(raw.parse().ok()?),
            Self::F32 => Value::F32(raw.parse().ok()?),
            Self::F64 => Value::F64(raw.parse().ok()?),
            Self::Bool => Value::Bool(parse_bool(raw)?),
            Self::Char => Value::Char(raw.parse().ok()?),
            Self::Str => Value::Str(raw.to_string()),
        };
        Some(value)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Isize => "isize",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::Usize => "usize",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Bool => "bool",
            Self::Char => "char",
            Self::Str => "string",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Numeric forms are accepted alongside the words.
fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

/// A stored argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
    Bool(bool),
    Char(char),
    Str(String),
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::I8(_) => ValueType::I8,
            Self::I16(_) => ValueType::I16,
            Self::I32(_) => ValueType::I32,
            Self::I64(_) => ValueType::I64,
            Self::Isize(_) => ValueType::Isize,
            Self::U8(_) => ValueType::U8,
            Self::U16(_) => ValueType::U16,
            Self::U32(_) => ValueType::U32,
            Self::U64(_) => ValueType::U64,
            Self::Usize(_) => ValueType::Usize,
            Self::F32(_) => ValueType::F32,
            Self::F64(_) => ValueType::F64,
            Self::Bool(_) => ValueType::Bool,
            Self::Char(_) => ValueType::Char,
            Self::Str(_) => ValueType::Str,
        }
    }

    /// Borrow the string payload, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::I8(v) => write!(f, "{v}"),
            Self::I16(v) => write!(f, "{v}"),
            Self::I32(v) => write!(f, "{v}"),
            Self::I64(v) => write!(f, "{v}"),
            Self::Isize(v) => write!(f, "{v}"),
            Self::U8(v) => write!(f, "{v}"),
            Self::U16(v) => write!(f, "{v}"),
            Self::U32(v) => write!(f, "{v}"),
            Self::U64(v) => write!(f, "{v}"),
            Self::Usize(v) => write!(f, "{v}"),
            Self::F32(v) => write!(f, "{v}"),
            Self::F64(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Char(v) => write!(f, "{v}"),
            Self::Str(v) => f.write_str(v),
        }
    }
}

/// Rust types that can be declared as argument values.
pub trait ArgValue: Sized {
    const TYPE: ValueType;

    fn into_value(self) -> Value;

    /// Extract `Self` from `value`; `None` if the tags differ.
    fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! impl_arg_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl ArgValue for $ty {
                const TYPE: ValueType = ValueType::$variant;

                fn into_value(self) -> Value {
                    Value::$variant(self)
                }

                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::$variant(v) => Some(*v),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_arg_value! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    bool => Bool,
    char => Char,
}

impl ArgValue for String {
    const TYPE: ValueType = ValueType::Str;

    fn into_value(self) -> Value {
        Value::Str(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}
