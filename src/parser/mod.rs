//! Parser for bracket-notated trees

pub mod ast;
mod grammar;
pub mod lexer;
pub mod properties;

pub use ast::*;
pub use grammar::parse;
pub use properties::{parse_properties, Properties};
