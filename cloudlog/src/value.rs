//! Dynamically typed arguments for the variadic logging operations.
//!
//! # Value Types
//!
//! The [`Value`] enum supports:
//! - **Str**: borrowed text, the only kind treated as a string when concatenating
//! - **Bool**: `true` or `false`
//! - **I64** / **U64**: every primitive integer, widened
//! - **F64** / **F32**: floating-point numbers, kept apart so `f32` prints its own shortest form
//! - **Char**: a Unicode scalar value
//! - **Display**: anything implementing [`fmt::Display`], with its type name for diagnostics
//!
//! # Examples
//!
//! ```rust
//! use std::net::Ipv4Addr;
//!
//! use cloudlog::Value;
//!
//! let name = Value::from("alice");
//! let count = Value::from(3_u8);
//! let ratio = Value::from(0.5);
//! let address = Ipv4Addr::LOCALHOST;
//! let address = Value::display(&address);
//!
//! assert_eq!(cloudlog::sprint(&[name, count, ratio, address]), "alice3 0.5 127.0.0.1");
//! ```

use std::borrow::Cow;
use std::fmt;

/// A single argument to a logging operation.
#[derive(Clone, Copy)]
pub enum Value<'a> {
    /// A string value.
    Str(&'a str),
    /// A boolean value.
    Bool(bool),
    /// A signed integer.
    I64(i64),
    /// An unsigned integer.
    U64(u64),
    /// A 64-bit floating-point number.
    F64(f64),
    /// A 32-bit floating-point number.
    F32(f32),
    /// A single character.
    Char(char),
    /// Any other displayable value.
    Display {
        /// The value to render.
        value: &'a dyn fmt::Display,
        /// The name of the value's type, shown when a verb does not apply to it.
        type_name: &'static str,
    },
}

impl<'a> Value<'a> {
    /// Wraps any [`fmt::Display`] value.
    pub fn display<T>(value: &'a T) -> Self
    where
        T: fmt::Display,
    {
        Value::Display {
            value,
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Whether this value counts as a string for the concatenation spacing rule.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    /// The type name used by `%T` and in inline formatting errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Str(_) => "&str",
            Value::Bool(_) => "bool",
            Value::I64(_) => "i64",
            Value::U64(_) => "u64",
            Value::F64(_) => "f64",
            Value::F32(_) => "f32",
            Value::Char(_) => "char",
            Value::Display { type_name, .. } => type_name,
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(value) => f.debug_tuple("Str").field(value).finish(),
            Value::Bool(value) => f.debug_tuple("Bool").field(value).finish(),
            Value::I64(value) => f.debug_tuple("I64").field(value).finish(),
            Value::U64(value) => f.debug_tuple("U64").field(value).finish(),
            Value::F64(value) => f.debug_tuple("F64").field(value).finish(),
            Value::F32(value) => f.debug_tuple("F32").field(value).finish(),
            Value::Char(value) => f.debug_tuple("Char").field(value).finish(),
            Value::Display { value, type_name } => f
                .debug_struct("Display")
                .field("value", &format_args!("{value}"))
                .field("type_name", type_name)
                .finish(),
        }
    }
}

impl fmt::Display for Value<'_> {
    /// Renders the value in its default (`%v`) form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&crate::printf::format_default(self))
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(value: &'a str) -> Self {
        Value::Str(value)
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(value: &'a String) -> Self {
        Value::Str(value)
    }
}

impl<'a> From<&'a Cow<'_, str>> for Value<'a> {
    fn from(value: &'a Cow<'_, str>) -> Self {
        Value::Str(value)
    }
}

macro_rules! impl_from {
    ($variant:ident: $($source:ty),*) => {
        $(
            impl From<$source> for Value<'_> {
                fn from(value: $source) -> Self {
                    Value::$variant(value)
                }
            }

            impl From<&$source> for Value<'_> {
                fn from(value: &$source) -> Self {
                    Value::$variant(*value)
                }
            }
        )*
    };
    ($variant:ident as $target:ty: $($source:ty),*) => {
        $(
            impl From<$source> for Value<'_> {
                fn from(value: $source) -> Self {
                    Value::$variant(value as $target)
                }
            }

            impl From<&$source> for Value<'_> {
                fn from(value: &$source) -> Self {
                    Value::$variant(*value as $target)
                }
            }
        )*
    };
    ($variant:ident($convert:expr): $($source:ty),*) => {
        $(
            impl From<$source> for Value<'_> {
                fn from(value: $source) -> Self {
                    Value::$variant($convert(value))
                }
            }

            impl From<&$source> for Value<'_> {
                fn from(value: &$source) -> Self {
                    Value::$variant($convert(*value))
                }
            }
        )*
    };
}

impl_from!(Bool: bool);
impl_from!(Char: char);
impl_from!(F64: f64);
impl_from!(F32: f32);
impl_from!(I64(i64::from): i8, i16, i32, i64);
impl_from!(U64(u64::from): u8, u16, u32, u64);
// Pointer-sized integers are at most 64 bits on every supported target.
impl_from!(I64 as i64: isize);
impl_from!(U64 as u64: usize);
