//! Annotation type parser library
//!
//! Parses the compact type notation found in doc comments (entities,
//! nullable markers, unions, call signatures, arrays, object shapes and
//! literals) into a [`TypeNode`] tree, and renders trees as TypeScript.

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use ast::{FunctionParam, FunctionType, ObjectMember, Span, TypeNode};
pub use error::{AnnotypeError, AnnotypeResult, ConfigError, LexerError, ParserError};
pub use lexer::{tokenize, Scanner, Token, TokenWithPosition};
pub use parser::{parse_type_annotation, ParseError, ParseResult, Parser};
pub use render::{render_type, NameMap, Rendered, Renderer};

/// Parse one annotation string into its type tree
pub fn parse(source: &str) -> ParseResult<TypeNode> {
    parse_type_annotation(source)
}
