//! Parser module
//!
//! Recursive-descent parser turning annotation text into a [`TypeNode`].
//!
//! ## Annotation grammar
//!
//! ```text
//! Type         := Any | Nullable | Entity | Union | Function | Array | Object | String | Number
//! Any          := '*' | 'any'
//! Nullable     := '?' Type
//! Entity       := Identifier ('.' Identifier)*
//! Union        := 'union' '<' (Type ','?)* '>'
//! Function     := '(' (Param ','?)* ')' ('→' Type)?
//! Param        := '...' Identifier ':' Type | Identifier ':' Type | Type
//! Array        := '[' Type ']'
//! Object       := '{' (Identifier ':' Type ','?)* '}'
//! ```
//!
//! A parameter starting with an identifier is only treated as named when the
//! very next token is `:`; the check runs on a rewindable scanner so a type
//! such as `dom.Node` is parsed from its first identifier.

mod function_parser;
mod parser_impl;
mod type_parser;

pub use parser_impl::Parser;

use crate::ast::TypeNode;
use crate::error::ParserError;

pub type ParseError = ParserError;
pub type ParseResult<T> = Result<T, ParseError>;

/// Parse one annotation into its type tree
pub fn parse_type_annotation(source: &str) -> ParseResult<TypeNode> {
    Parser::new(source).parse()
}
