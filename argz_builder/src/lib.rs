//! Builder module for `argz`.
//! See the `argz` crate documentation for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod model;
mod parser;

pub use api::*;
pub use model::*;
pub use parser::{
    parse, parse_tokens, parse_tokens_with, ConsoleInterface, ErrorContext, ParseError,
    UserInterface,
};

#[cfg(feature = "unit_test")]
pub use parser::MemoryInterface;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
