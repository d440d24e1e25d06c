//! Host values
//!
//! The dynamically typed values that cross the boundary between the host
//! runtime and registered extension functions. Conversions are strict: a
//! string is never silently read as a number.

use std::fmt;

use serde::Serialize;

use super::extensions::ExtError;
use super::table::Table;

/// A value passed to or returned from an extension function
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Absent value
    Nil,
    Boolean(bool),
    /// 64-bit signed integer
    Integer(i64),
    /// 64-bit floating point
    Number(f64),
    String(String),
    Table(Table),
}

impl Value {
    /// Host-facing type name, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Table(_) => "table",
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Numeric view of the value. Integers widen to `f64`; nothing else
    /// converts.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Integer view of the value. A number converts only when it is
    /// integral and fits in an `i64`.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            Value::Number(n) => {
                if n.fract() == 0.0 && *n >= i64::MIN as f64 && *n < i64::MAX as f64 {
                    Some(*n as i64)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Value::Table(t) => Some(t),
            _ => None,
        }
    }

    /// Parse a command-line literal.
    ///
    /// `nil`, `true` and `false` are keywords, integers and floats parse as
    /// such, single- or double-quoted text is a string with the quotes
    /// removed, and anything else is taken as a bare string.
    pub fn parse_literal(s: &str) -> Self {
        match s {
            "nil" => return Value::Nil,
            "true" => return Value::Boolean(true),
            "false" => return Value::Boolean(false),
            _ => {}
        }

        if let Ok(i) = s.parse::<i64>() {
            return Value::Integer(i);
        }
        if let Ok(n) = s.parse::<f64>() {
            return Value::Number(n);
        }

        for quote in ['"', '\''] {
            if s.len() >= 2 && s.starts_with(quote) && s.ends_with(quote) {
                return Value::String(s[1..s.len() - 1].to_string());
            }
        }

        Value::String(s.to_string())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s),
            Value::Table(t) => write!(
                f,
                "table (array {}, record {})",
                t.len(),
                t.record_len()
            ),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Table> for Value {
    fn from(t: Table) -> Self {
        Value::Table(t)
    }
}

// =============================================================================
// Argument Checks
// =============================================================================

/// Required numeric argument at zero-based `pos`.
pub fn check_number(args: &[Value], pos: usize) -> Result<f64, ExtError> {
    let value = args.get(pos).unwrap_or(&Value::Nil);
    value.as_number().ok_or_else(|| ExtError::TypeMismatch {
        position: pos + 1,
        expected: "number",
        got: value.type_name(),
    })
}

/// Optional integer argument at zero-based `pos`; absent or `nil` yields
/// `default`.
pub fn opt_integer(args: &[Value], pos: usize, default: i64) -> Result<i64, ExtError> {
    match args.get(pos) {
        None | Some(Value::Nil) => Ok(default),
        Some(value) => value.as_integer().ok_or_else(|| ExtError::TypeMismatch {
            position: pos + 1,
            expected: "integer",
            got: value.type_name(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_literal() {
        assert_eq!(Value::parse_literal("nil"), Value::Nil);
        assert_eq!(Value::parse_literal("true"), Value::Boolean(true));
        assert_eq!(Value::parse_literal("-4"), Value::Integer(-4));
        assert_eq!(Value::parse_literal("2.5"), Value::Number(2.5));
        assert_eq!(Value::parse_literal("1e3"), Value::Number(1000.0));
        assert_eq!(Value::parse_literal("'3'"), Value::String("3".into()));
        assert_eq!(Value::parse_literal("\"x y\""), Value::String("x y".into()));
        assert_eq!(Value::parse_literal("abc"), Value::String("abc".into()));
        assert_eq!(Value::parse_literal("'"), Value::String("'".into()));
    }

    #[test]
    fn test_number_conversion_is_strict() {
        assert_eq!(Value::Integer(3).as_number(), Some(3.0));
        assert_eq!(Value::Number(0.5).as_number(), Some(0.5));
        assert_eq!(Value::String("3".into()).as_number(), None);
        assert_eq!(Value::Boolean(true).as_number(), None);
        assert_eq!(Value::Nil.as_number(), None);
    }

    #[test]
    fn test_integer_conversion() {
        assert_eq!(Value::Number(4.0).as_integer(), Some(4));
        assert_eq!(Value::Number(4.5).as_integer(), None);
        assert_eq!(Value::Number(f64::NAN).as_integer(), None);
        assert_eq!(Value::Number(1e300).as_integer(), None);
    }

    #[test]
    fn test_check_number() {
        let args = vec![Value::Integer(1), Value::String("x".into())];
        assert_eq!(check_number(&args, 0).unwrap(), 1.0);

        match check_number(&args, 1) {
            Err(ExtError::TypeMismatch {
                position,
                expected,
                got,
            }) => {
                assert_eq!(position, 2);
                assert_eq!(expected, "number");
                assert_eq!(got, "string");
            }
            other => panic!("Expected TypeMismatch, got {:?}", other),
        }

        // Missing argument reads as nil
        assert!(matches!(
            check_number(&args, 2),
            Err(ExtError::TypeMismatch { got: "nil", .. })
        ));
    }

    #[test]
    fn test_opt_integer() {
        let args = vec![Value::Nil, Value::Number(7.0), Value::Number(7.5)];
        assert_eq!(opt_integer(&args, 0, 0).unwrap(), 0);
        assert_eq!(opt_integer(&args, 1, 0).unwrap(), 7);
        assert_eq!(opt_integer(&args, 5, 9).unwrap(), 9);
        assert!(opt_integer(&args, 2, 0).is_err());
    }

    #[test]
    fn test_display_and_json() {
        assert_eq!(Value::Number(-2.0).to_string(), "-2");
        assert_eq!(Value::Nil.to_string(), "nil");
        let json = serde_json::to_string(&vec![Value::Nil, Value::from("imaginary roots!")])
            .unwrap();
        assert_eq!(json, r#"[null,"imaginary roots!"]"#);
    }
}
