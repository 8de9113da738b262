//! Error types shared by the scanner, parser, renderer configuration and CLI.
//!
//! Every failure while reading an annotation is fatal to that annotation only;
//! callers decide whether to skip it or abort a batch.

use crate::ast::Span;
use codespan_reporting::diagnostic::{Diagnostic, Label};
use thiserror::Error;

/// Umbrella error type
#[derive(Error, Debug, Clone)]
pub enum AnnotypeError {
    #[error("lexical error: {0}")]
    Lexer(LexerError),

    #[error("syntax error: {0}")]
    Parser(ParserError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("{0}")]
    Other(String),
}

/// Lexical errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexerError {
    #[error("unrecognized character '{character}'")]
    UnrecognizedCharacter { character: char, span: Span },

    #[error("unterminated string literal")]
    UnterminatedString { span: Span },
}

/// Syntax errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParserError {
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: String,
        found: String,
        span: Span,
    },

    #[error("expected {expected}, found end of input")]
    UnexpectedEof { expected: String, span: Span },

    #[error(transparent)]
    Lexer(#[from] LexerError),
}

/// Name map loading errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cannot read {path}: {message}")]
    Io { path: String, message: String },

    #[error("invalid name map: {message}")]
    Json { message: String },
}

impl LexerError {
    pub fn span(&self) -> Span {
        match self {
            LexerError::UnrecognizedCharacter { span, .. } => *span,
            LexerError::UnterminatedString { span } => *span,
        }
    }
}

impl ParserError {
    pub fn span(&self) -> Span {
        match self {
            ParserError::UnexpectedToken { span, .. } => *span,
            ParserError::UnexpectedEof { span, .. } => *span,
            ParserError::Lexer(e) => e.span(),
        }
    }

    /// True when the failure came from the scanner rather than the grammar
    pub fn is_lexical(&self) -> bool {
        matches!(self, ParserError::Lexer(_))
    }
}

impl AnnotypeError {
    pub fn span(&self) -> Option<Span> {
        match self {
            AnnotypeError::Lexer(e) => Some(e.span()),
            AnnotypeError::Parser(e) => Some(e.span()),
            _ => None,
        }
    }
}

impl From<LexerError> for AnnotypeError {
    fn from(e: LexerError) -> Self {
        AnnotypeError::Lexer(e)
    }
}

// Lexical failures surfacing through the parser keep their own category.
impl From<ParserError> for AnnotypeError {
    fn from(e: ParserError) -> Self {
        match e {
            ParserError::Lexer(inner) => AnnotypeError::Lexer(inner),
            other => AnnotypeError::Parser(other),
        }
    }
}

impl From<std::io::Error> for AnnotypeError {
    fn from(e: std::io::Error) -> Self {
        AnnotypeError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json {
            message: e.to_string(),
        }
    }
}

/// An error tied to a file registered in a codespan file database
#[derive(Debug, Clone)]
pub struct DiagnosticError {
    pub error: AnnotypeError,
    pub file_id: usize,
}

impl DiagnosticError {
    pub fn new(error: AnnotypeError, file_id: usize) -> Self {
        Self { error, file_id }
    }

    /// Convert into a codespan-reporting diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic<usize> {
        let (message, labels) = match &self.error {
            AnnotypeError::Lexer(e) => match e {
                LexerError::UnrecognizedCharacter { character, span } => (
                    format!("unrecognized character '{}'", character),
                    vec![Label::primary(self.file_id, *span)
                        .with_message("not part of any token")],
                ),
                LexerError::UnterminatedString { span } => (
                    "unterminated string literal".to_string(),
                    vec![Label::primary(self.file_id, *span)
                        .with_message("string is never closed")],
                ),
            },
            AnnotypeError::Parser(e) => match e {
                ParserError::UnexpectedToken {
                    expected,
                    found,
                    span,
                } => (
                    format!("expected {}, found {}", expected, found),
                    vec![Label::primary(self.file_id, *span)
                        .with_message(format!("expected {}", expected))],
                ),
                ParserError::UnexpectedEof { expected, span } => (
                    format!("unexpected end of annotation, expected {}", expected),
                    vec![Label::primary(self.file_id, *span)],
                ),
                ParserError::Lexer(inner) => {
                    return DiagnosticError::new(AnnotypeError::Lexer(inner.clone()), self.file_id)
                        .to_diagnostic();
                }
            },
            other => (other.to_string(), vec![]),
        };

        Diagnostic::error()
            .with_message(message)
            .with_labels(labels)
    }
}

/// Result alias
pub type AnnotypeResult<T> = Result<T, AnnotypeError>;
