use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A single input item handed to [`ArgParser::parse_arguments`](crate::ArgParser::parse_arguments).
///
/// Most tokens come straight from the Cli as text, but callers may also pass values they already parsed.
/// Only `Text` tokens beginning with `-` are ever treated as flags.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Raw text, as it appears on the Cli.
    Text(String),
    /// A pre-parsed integer.
    Int(i64),
    /// A pre-parsed float.
    Float(f64),
    /// A pre-parsed boolean.
    Bool(bool),
}

impl Token {
    /// The flag marker carried by this token, if any.
    ///
    /// A flag marker is text whose first character is `-`.
    /// The empty string is not a flag marker.
    pub fn flag_marker(&self) -> Option<&str> {
        match self {
            Token::Text(text) if text.starts_with('-') => Some(text.as_str()),
            _ => None,
        }
    }

    /// Whether this token is a flag marker (see [`Token::flag_marker`]).
    pub fn is_flag_marker(&self) -> bool {
        self.flag_marker().is_some()
    }
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Token::Text(value.to_string())
    }
}

impl From<String> for Token {
    fn from(value: String) -> Self {
        Token::Text(value)
    }
}

impl From<&String> for Token {
    fn from(value: &String) -> Self {
        Token::Text(value.clone())
    }
}

impl From<i64> for Token {
    fn from(value: i64) -> Self {
        Token::Int(value)
    }
}

impl From<i32> for Token {
    fn from(value: i32) -> Self {
        Token::Int(value.into())
    }
}

impl From<f64> for Token {
    fn from(value: f64) -> Self {
        Token::Float(value)
    }
}

impl From<bool> for Token {
    fn from(value: bool) -> Self {
        Token::Bool(value)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Text(text) => write!(f, "{text}"),
            Token::Int(value) => write!(f, "{value}"),
            Token::Float(value) => write!(f, "{}", render_float(*value)),
            Token::Bool(value) => write!(f, "{value}"),
        }
    }
}

/// A parsed value, as stored in the [`Namespace`](crate::Namespace).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A string.
    Str(String),
    /// An integer.
    Int(i64),
    /// A float.
    Float(f64),
    /// A boolean.
    Bool(bool),
    /// An ordered, growable sequence.
    List(Vec<Value>),
    /// An ordered, fixed-arity sequence.
    Tuple(Box<[Value]>),
}

impl Value {
    /// The string inside a `Value::Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(value) => Some(value.as_str()),
            _ => None,
        }
    }

    /// The integer inside a `Value::Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// The float inside a `Value::Float`.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// The boolean inside a `Value::Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// The elements of a `Value::List` or `Value::Tuple`.
    pub fn as_slice(&self) -> Option<&[Value]> {
        match self {
            Value::List(values) => Some(&values[..]),
            Value::Tuple(values) => Some(&values[..]),
            _ => None,
        }
    }
}

impl From<Token> for Value {
    fn from(token: Token) -> Self {
        match token {
            Token::Text(text) => Value::Str(text),
            Token::Int(value) => Value::Int(value),
            Token::Float(value) => Value::Float(value),
            Token::Bool(value) => Value::Bool(value),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(value) => write!(f, "{value}"),
            Value::Int(value) => write!(f, "{value}"),
            Value::Float(value) => write!(f, "{}", render_float(*value)),
            Value::Bool(value) => write!(f, "{value}"),
            Value::List(values) => write!(f, "[{}]", join(values.iter())),
            Value::Tuple(values) => write!(f, "({})", join(values.iter())),
        }
    }
}

pub(crate) fn join<T: fmt::Display>(items: impl Iterator<Item = T>) -> String {
    items
        .map(|item| item.to_string())
        .collect::<Vec<String>>()
        .join(", ")
}

/// Render a float with the shortest round-tripping digits.
///
/// Whole numbers keep a fractional part (ex: `1.0`, not `1`).
/// Magnitudes below `1e-4` or from `1e16` up switch to exponent form with a signed, two digit exponent (ex: `1e+20`, `1.5e-05`).
pub(crate) fn render_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }

    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let scientific = format!("{value:e}");
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or_default()),
        None => (scientific.as_str(), 0),
    };

    if value != 0.0 && !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{mantissa}e{sign}{:02}", exponent.abs());
    }

    let rendered = value.to_string();
    if rendered.contains('.') {
        rendered
    } else {
        format!("{rendered}.0")
    }
}

/// A type tag that names no known conversion.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown type tag '{0}'.")]
pub struct UnknownTypeTag(pub String);

/// The type each element of a `list`/`tuple` argument converts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    /// Leave elements as they were given.
    NoConvert,
    /// `str`
    Str,
    /// `int`
    Int,
    /// `float`
    Float,
    /// `bool`
    Bool,
}

impl ElementType {
    /// The textual tag for this type, or `None` for `NoConvert`.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            ElementType::NoConvert => None,
            ElementType::Str => Some("str"),
            ElementType::Int => Some("int"),
            ElementType::Float => Some("float"),
            ElementType::Bool => Some("bool"),
        }
    }
}

impl FromStr for ElementType {
    type Err = UnknownTypeTag;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "str" => Ok(ElementType::Str),
            "int" => Ok(ElementType::Int),
            "float" => Ok(ElementType::Float),
            "bool" => Ok(ElementType::Bool),
            _ => Err(UnknownTypeTag(tag.to_string())),
        }
    }
}

/// The conversion applied to the values collected for a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentType {
    /// Store the first value as it was given.
    NoConvert,
    /// Convert the first value to a string.
    Str,
    /// Convert the first value to an integer.
    Int,
    /// Convert the first value to a float.
    Float,
    /// Convert the first value to a boolean (by truthiness).
    Bool,
    /// Convert every value, storing them as a list.
    List(ElementType),
    /// Convert every value, storing them as a tuple.
    Tuple(ElementType),
}

impl ArgumentType {
    /// The textual tag for this type, or `None` for `NoConvert`.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            ArgumentType::NoConvert => None,
            ArgumentType::Str => Some("str"),
            ArgumentType::Int => Some("int"),
            ArgumentType::Float => Some("float"),
            ArgumentType::Bool => Some("bool"),
            ArgumentType::List(_) => Some("list"),
            ArgumentType::Tuple(_) => Some("tuple"),
        }
    }

    /// The scalar conversion for `str`/`int`/`float`/`bool`, if this is one of them.
    pub(crate) fn scalar(&self) -> Option<ElementType> {
        match self {
            ArgumentType::Str => Some(ElementType::Str),
            ArgumentType::Int => Some(ElementType::Int),
            ArgumentType::Float => Some(ElementType::Float),
            ArgumentType::Bool => Some(ElementType::Bool),
            _ => None,
        }
    }

    /// Attach the element type to a `list`/`tuple`.
    /// Any other type is returned unchanged.
    pub fn with_elements(self, element_type: ElementType) -> Self {
        match self {
            ArgumentType::List(_) => ArgumentType::List(element_type),
            ArgumentType::Tuple(_) => ArgumentType::Tuple(element_type),
            other => other,
        }
    }
}

impl FromStr for ArgumentType {
    type Err = UnknownTypeTag;

    /// Parse a type tag.
    /// `list` and `tuple` come back with `ElementType::NoConvert` elements (see [`ArgumentType::with_elements`]).
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "str" => Ok(ArgumentType::Str),
            "int" => Ok(ArgumentType::Int),
            "float" => Ok(ArgumentType::Float),
            "bool" => Ok(ArgumentType::Bool),
            "list" => Ok(ArgumentType::List(ElementType::NoConvert)),
            "tuple" => Ok(ArgumentType::Tuple(ElementType::NoConvert)),
            _ => Err(UnknownTypeTag(tag.to_string())),
        }
    }
}
