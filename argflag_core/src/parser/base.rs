use std::env;

use thiserror::Error;

use crate::api::{Argument, FlagEntry, RegistrationError};
use crate::convert::{convert_elements, convert_scalar, InvalidConversion};
use crate::model::{join, ArgumentType, Token, Value};
use crate::namespace::Namespace;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A parse was rejected.
///
/// Values set by flags processed before the failure remain in the [`Namespace`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A flag marker matched no registered flag.
    #[error("Parse error: unknown flag '{flag}' at token {index}.")]
    UnknownFlag {
        /// The unmatched flag marker.
        flag: String,
        /// The position of the flag marker in the input.
        index: usize,
    },
    /// A flag that takes values was followed by none.
    #[error("Parse error: flag '{flag}' at token {index} requires at least one value.")]
    MissingValue {
        /// The flag marker.
        flag: String,
        /// The position of the flag marker in the input.
        index: usize,
    },
    /// A value could not be converted to the flag's type.
    #[error("Parse error: cannot convert '{value}' to {target}.")]
    ConversionError {
        /// The offending value (or the whole value group, for `list`/`tuple`).
        value: String,
        /// The type tag converted to.
        target: &'static str,
    },
}

/// The flag registry and the output record it populates.
///
/// ### Example
/// ```
/// # use argflag_core as argflag;
/// use argflag::{ArgParser, Argument};
///
/// let mut parser = ArgParser::new();
/// parser
///     .add_argument(Argument::new("--name", "-n", "name"))?
///     .add_argument(Argument::new("--count", "-c", "count").argument_type("int"))?
///     .add_argument(Argument::new("--verbose", "-v", "verbose").has_arguments(false))?;
///
/// let output = parser.parse_arguments(["-v", "--name", "Alice", "-c", "42"])?;
///
/// assert_eq!(output.get_str("name"), Some("Alice"));
/// assert_eq!(output.get_int("count"), Some(42));
/// assert_eq!(output.get_bool("verbose"), Some(true));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArgParser {
    arguments: Vec<FlagEntry>,
    output: Namespace,
}

impl ArgParser {
    /// Create a parser with no flags and an empty output record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser that populates the given output record.
    ///
    /// ### Example
    /// ```
    /// # use argflag_core as argflag;
    /// use argflag::{ArgParser, Argument, Namespace, Value};
    ///
    /// let mut initial = Namespace::new();
    /// initial.set("level", Value::Int(1));
    ///
    /// let mut parser = ArgParser::with_output(initial);
    /// parser
    ///     .add_argument(Argument::new("--quiet", "-q", "quiet").has_arguments(false))
    ///     .unwrap();
    ///
    /// let output = parser.parse_arguments(["-q"]).unwrap();
    /// assert_eq!(output.get_int("level"), Some(1));
    /// assert_eq!(output.get_bool("quiet"), Some(true));
    /// ```
    pub fn with_output(output: Namespace) -> Self {
        Self {
            arguments: Vec::default(),
            output,
        }
    }

    /// Register a flag.
    ///
    /// The request is validated first; on error nothing is registered.
    /// Flags are not checked for collisions: lookup returns the first registered match, so a later duplicate is never matched.
    pub fn add_argument(&mut self, argument: Argument) -> Result<&mut Self, RegistrationError> {
        let entry = argument.validate()?;

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Registered '{}'/'{}' as '{}' ({:?}).",
                entry.main_flag(),
                entry.secondary_flag(),
                entry.variable_name(),
                entry.argument_type()
            );
        }

        self.arguments.push(entry);
        Ok(self)
    }

    /// The registered flags, in registration order.
    pub fn arguments(&self) -> &[FlagEntry] {
        &self.arguments
    }

    /// The output record.
    pub fn output(&self) -> &Namespace {
        &self.output
    }

    /// Consume the parser, keeping the output record.
    pub fn into_output(self) -> Namespace {
        self.output
    }

    /// Parse the tokens into the output record, and return it.
    ///
    /// Tokens are scanned left to right:
    /// * A flag marker (text starting with `-`) is looked up against the registered flags.
    /// * A flag without values is stored as `true`.
    /// * A flag with values collects every following token up to the next flag marker, and converts them by its type.
    /// * Any other token is ignored.
    ///
    /// A repeated flag overwrites its earlier value.
    /// The parse stops at the first error.
    pub fn parse_arguments<I, T>(&mut self, tokens: I) -> Result<&Namespace, ParseError>
    where
        I: IntoIterator<Item = T>,
        T: Into<Token>,
    {
        let tokens: Vec<Token> = tokens.into_iter().map(Into::into).collect();
        scan(&self.arguments, &tokens, &mut self.output)?;
        Ok(&self.output)
    }

    /// Parse the Cli [`env::args`] (skipping the program name) into the output record.
    pub fn parse_env(&mut self) -> Result<&Namespace, ParseError> {
        self.parse_arguments(env::args().skip(1))
    }

    /// *Available using 'unit_test' crate feature only.*</br></br>
    /// Parse the tokens into a fresh output record, leaving this parser untouched.
    ///
    /// ### Example
    /// ```
    /// # use argflag_core as argflag;
    /// use argflag::{ArgParser, Argument};
    ///
    /// // Function under test.
    /// // We want to make sure the flags are registered correctly.
    /// pub fn setup_fn(parser: &mut ArgParser) {
    ///     parser.add_argument(Argument::new("--port", "-p", "port").argument_type("int")).unwrap();
    /// }
    ///
    /// let mut parser = ArgParser::new();
    /// setup_fn(&mut parser);
    /// assert_eq!(parser.parse_tokens(&["-p", "80"]).unwrap().get_int("port"), Some(80));
    /// assert_eq!(parser.parse_tokens(&["--port", "8080"]).unwrap().get_int("port"), Some(8080));
    /// assert!(parser.output().is_empty());
    /// ```
    #[cfg(feature = "unit_test")]
    pub fn parse_tokens(&self, tokens: &[&str]) -> Result<Namespace, ParseError> {
        let tokens: Vec<Token> = tokens.iter().copied().map(Token::from).collect();
        let mut output = Namespace::default();
        scan(&self.arguments, &tokens, &mut output)?;
        Ok(output)
    }
}

fn scan(
    arguments: &[FlagEntry],
    tokens: &[Token],
    output: &mut Namespace,
) -> Result<(), ParseError> {
    for (index, token) in tokens.iter().enumerate() {
        let flag = match token.flag_marker() {
            Some(flag) => flag,
            None => continue,
        };

        let entry = arguments
            .iter()
            .find(|entry| entry.matches(flag))
            .ok_or_else(|| ParseError::UnknownFlag {
                flag: flag.to_string(),
                index,
            })?;

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Matched '{flag}' at token {index} to '{}'.", entry.variable_name());
        }

        if !entry.has_arguments() {
            // The argument type does not apply: there is nothing to convert.
            output.set(entry.variable_name(), Value::Bool(true));
            continue;
        }

        let values = value_group(tokens, index);

        if values.is_empty() {
            return Err(ParseError::MissingValue {
                flag: flag.to_string(),
                index,
            });
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Collected {} value(s) for '{flag}'.", values.len());
        }

        output.set(entry.variable_name(), convert(values, entry.argument_type())?);
    }

    Ok(())
}

/// The tokens following the flag at `index`, up to (not including) the next flag marker.
fn value_group(tokens: &[Token], index: usize) -> &[Token] {
    let rest = &tokens[index + 1..];
    let end = rest
        .iter()
        .position(Token::is_flag_marker)
        .unwrap_or(rest.len());
    &rest[..end]
}

fn convert(values: &[Token], argument_type: ArgumentType) -> Result<Value, ParseError> {
    match argument_type {
        ArgumentType::List(element_type) => convert_elements(values, element_type)
            .map(Value::List)
            .map_err(|_| group_error(values, "list")),
        ArgumentType::Tuple(element_type) => convert_elements(values, element_type)
            .map(|elements| Value::Tuple(elements.into_boxed_slice()))
            .map_err(|_| group_error(values, "tuple")),
        scalar => {
            // Only the first value is used; the rest are discarded.
            let first = &values[0];
            match scalar.scalar() {
                Some(element_type) => convert_scalar(first, element_type).map_err(
                    |InvalidConversion { token, type_name }| ParseError::ConversionError {
                        value: token,
                        target: type_name,
                    },
                ),
                None => Ok(Value::from(first.clone())),
            }
        }
    }
}

fn group_error(values: &[Token], target: &'static str) -> ParseError {
    ParseError::ConversionError {
        value: format!("[{}]", join(values.iter())),
        target,
    }
}
