use std::str::FromStr;

use thiserror::Error;

use crate::model::{ArgumentType, ElementType};

const ARGUMENT_TYPES: &str = "str, int, float, list, tuple, bool";
const ELEMENT_TYPES: &str = "str, int, float, bool";

/// A registration request was rejected; nothing was registered.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistrationError {
    /// A field was not of its declared type.
    ///
    /// [`Argument`] types every field at compile time, so registering an `Argument` never produces this.
    #[error("Registration error: '{field}' is not of its declared type.")]
    InvalidArgument {
        /// The offending field.
        field: &'static str,
    },
    /// A type tag names no known conversion.
    #[error("Registration error: '{field}' must be one of {{{expected}}}, got '{value}'.")]
    InvalidValue {
        /// The offending field.
        field: &'static str,
        /// The rejected tag.
        value: String,
        /// The accepted tags.
        expected: &'static str,
    },
}

/// A request to register one flag, handed to [`ArgParser::add_argument`](crate::ArgParser::add_argument).
///
/// Type tags are plain strings here; they are validated when the request is registered.
///
/// ### Example
/// ```
/// # use argflag_core as argflag;
/// use argflag::{ArgParser, Argument, Value};
///
/// let mut parser = ArgParser::new();
/// parser
///     .add_argument(
///         Argument::new("--nums", "-n", "nums")
///             .argument_type("list")
///             .secondary_argument_type("int")
///             .help("The numbers to sum."),
///     )
///     .unwrap();
///
/// let output = parser.parse_arguments(["-n", "1", "2"]).unwrap();
/// assert_eq!(
///     output.get("nums"),
///     Some(&Value::List(vec![Value::Int(1), Value::Int(2)]))
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    main_flag: String,
    secondary_flag: String,
    variable_name: String,
    argument_type: Option<String>,
    secondary_argument_type: Option<String>,
    has_arguments: bool,
    help_message: Option<String>,
}

impl Argument {
    /// Create a registration request for a flag that takes values (without conversion).
    ///
    /// * `main_flag`: the primary flag token, ex: `--name`.
    /// * `secondary_flag`: the alias token, ex: `-n`.
    /// * `variable_name`: the key the parsed value is stored under.
    pub fn new(
        main_flag: impl Into<String>,
        secondary_flag: impl Into<String>,
        variable_name: impl Into<String>,
    ) -> Self {
        Self {
            main_flag: main_flag.into(),
            secondary_flag: secondary_flag.into(),
            variable_name: variable_name.into(),
            argument_type: None,
            secondary_argument_type: None,
            has_arguments: true,
            help_message: None,
        }
    }

    /// Convert the collected values to this type: one of `str`, `int`, `float`, `list`, `tuple`, `bool`.
    /// An empty tag means no conversion.
    /// If repeated, only the final tag will apply.
    pub fn argument_type(mut self, tag: impl Into<String>) -> Self {
        self.argument_type = Some(tag.into());
        self
    }

    /// Convert each element of a `list`/`tuple` to this type: one of `str`, `int`, `float`, `bool`.
    /// An empty tag means no conversion.
    /// If repeated, only the final tag will apply.
    pub fn secondary_argument_type(mut self, tag: impl Into<String>) -> Self {
        self.secondary_argument_type = Some(tag.into());
        self
    }

    /// Whether the flag takes values (default `true`).
    /// A flag without values is stored as `true` when present.
    pub fn has_arguments(mut self, has_arguments: bool) -> Self {
        self.has_arguments = has_arguments;
        self
    }

    /// Document the help message for this flag.
    /// If repeated, only the final message will apply.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.help_message = Some(description.into());
        self
    }

    pub(crate) fn validate(self) -> Result<FlagEntry, RegistrationError> {
        let Argument {
            main_flag,
            secondary_flag,
            variable_name,
            argument_type,
            secondary_argument_type,
            has_arguments,
            help_message,
        } = self;

        // An empty tag is the same as no tag.
        let argument_type = match argument_type.filter(|tag| !tag.is_empty()) {
            Some(tag) => ArgumentType::from_str(&tag).map_err(|_| {
                RegistrationError::InvalidValue {
                    field: "argument_type",
                    value: tag.clone(),
                    expected: ARGUMENT_TYPES,
                }
            })?,
            None => ArgumentType::NoConvert,
        };

        let element_type = match secondary_argument_type.filter(|tag| !tag.is_empty()) {
            Some(tag) => ElementType::from_str(&tag).map_err(|_| {
                RegistrationError::InvalidValue {
                    field: "secondary_argument_type",
                    value: tag.clone(),
                    expected: ELEMENT_TYPES,
                }
            })?,
            None => ElementType::NoConvert,
        };

        Ok(FlagEntry {
            main_flag,
            secondary_flag,
            variable_name,
            has_arguments,
            argument_type: argument_type.with_elements(element_type),
            help_message,
        })
    }
}

/// A registered flag.
///
/// Entries are immutable once registered; see [`ArgParser::arguments`](crate::ArgParser::arguments).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagEntry {
    main_flag: String,
    secondary_flag: String,
    variable_name: String,
    has_arguments: bool,
    argument_type: ArgumentType,
    help_message: Option<String>,
}

impl FlagEntry {
    /// The primary flag token.
    pub fn main_flag(&self) -> &str {
        &self.main_flag
    }

    /// The alias flag token.
    pub fn secondary_flag(&self) -> &str {
        &self.secondary_flag
    }

    /// The key the parsed value is stored under.
    pub fn variable_name(&self) -> &str {
        &self.variable_name
    }

    /// Whether the flag takes values.
    pub fn has_arguments(&self) -> bool {
        self.has_arguments
    }

    /// The conversion applied to the collected values.
    /// Ignored when the flag takes no values.
    pub fn argument_type(&self) -> ArgumentType {
        self.argument_type
    }

    /// The help message, if documented.
    pub fn help_message(&self) -> Option<&str> {
        self.help_message.as_deref()
    }

    pub(crate) fn matches(&self, flag: &str) -> bool {
        self.main_flag == flag || self.secondary_flag == flag
    }
}
