//! Core module for `argflag`.
//! See [documentation root](https://docs.rs/argflag/latest/argflag/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod convert;
mod model;
mod namespace;
mod parser;

pub use api::*;
pub use model::*;
pub use namespace::Namespace;
pub use parser::{ArgParser, ParseError};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
