//! Lexical analysis for type annotations.
//!
//! Tokens are classified by `logos`; [`Scanner`] hands them to the parser one
//! at a time and supports speculative lookahead with rollback.

pub mod literal_parser;
mod scanner;
mod token;

pub use scanner::{format_tokens, tokenize, LexResult, Scanner, ScannerState, TokenWithPosition};
pub use token::Token;
