//! `argflag` is a small command line flag parser for Rust.
//!
//! It registers a set of allowed flags, each with an optional value type, and parses a raw token list into a [`Namespace`]: an open map from variable name to [`Value`].
//! `argflag` prioritizes the following design concerns:
//! * *Runtime registration*:
//! Flags are described with plain data ([`Argument`]), so the registry may be assembled dynamically.
//! * *Open output*:
//! The output record has no schema; a name appears once its flag is parsed.
//! * *Fail fast*:
//! Registration and parsing both stop at the first error, and report it as a typed error.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/demo.rs")]
//! ```
//!
//! ```console
//! $ demo -n Alice -t 3 -s 1 2.5 -v
//! name: Alice
//! scores: [1.0, 2.5]
//! times: 3
//! verbose: true
//!
//! $ demo -t three
//! Parse error: cannot convert 'three' to int.
//!
//! $ demo --bogus
//! Parse error: unknown flag '--bogus' at token 0.
//! ```
//!
//! # Registration
//! Start with an [`ArgParser`] and `add_argument` each flag.
//! An [`Argument`] takes a main flag (ex: `--name`), a secondary flag (ex: `-n`), and the variable name its value is stored under.
//! The remaining aspects are optional:
//! * `argument_type`: one of `str`, `int`, `float`, `bool`, `list`, `tuple`.
//! Without it, the first value is stored exactly as given.
//! * `secondary_argument_type`: one of `str`, `int`, `float`, `bool`, converting each element of a `list`/`tuple`.
//! Without it, elements are stored exactly as given.
//! * `has_arguments`: whether the flag takes values (default `true`).
//! A flag without values is stored as `true` when present; its `argument_type` is ignored.
//! * `help`: a help message, kept on the registered [`FlagEntry`] (`argflag` does not render help).
//!
//! Registration fails with [`RegistrationError::InvalidValue`] when a type tag is unknown.
//! An empty type tag is the same as no type tag.
//! Empty flags are accepted; an empty secondary flag simply never matches, since the empty token is not a flag marker.
//! Flags are not checked for collisions; the first registered match always wins.
//!
//! # Parse Semantics
//! [`ArgParser::parse_arguments`] accepts text tokens as well as pre-parsed scalars (see [`Token`]).
//!
//! * A *flag marker* is a text token starting with `-`.
//! Every other token is ignored unless it follows a flag.
//! * A flag marker matching no registered flag fails the parse with [`ParseError::UnknownFlag`].
//! * A flag that takes values collects every following token up to the next flag marker (or the end of input).
//! If it collects nothing, the parse fails with [`ParseError::MissingValue`].
//! * Scalar types (`str`, `int`, `float`, `bool`) convert the first collected value only.
//! `list` and `tuple` convert every collected value.
//! A failed conversion fails the parse with [`ParseError::ConversionError`].
//! * Flags may appear in any order; a repeated flag overwrites its earlier value.
//!
//! ### Conversions
//! ```console
//! Type   | From text                              | From a pre-parsed scalar
//! ---------------------------------------------------------------------------------------
//! str    | unchanged                              | rendered (ex: 1.0, 1e+20, True)
//! int    | decimal, optional sign, '_' separators | floats truncate; bools are 0/1
//! float  | decimal, exponent, inf, nan            | ints widen; bools are 0.0/1.0
//! bool   | non-empty is true                      | non-zero is true
//! ```
//!
//! Boolean conversion is truthiness: `--flag false` converts to `true`.
//!
//! ### Negative numbers
//! A text value starting with `-` (ex: `-5`) is a flag marker, so it ends the value group and is looked up as a flag.
//! Pass negative numbers as pre-parsed [`Token::Int`]/[`Token::Float`] instead.
//!
//! ### Errors
//! Errors abort the parse, but the output record is not rolled back.
//! Values set by flags processed before the failure remain in place.
//!
//! # Features
//! * `unit_test`: For features that help with unit testing.
//! * `tracing_debug`: Emit `tracing` debug events while registering and parsing.
pub use argflag_core::*;
