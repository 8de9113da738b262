//! Parser state and token utilities

use log::debug;

use crate::ast::{Span, TypeNode};
use crate::error::ParserError;
use crate::lexer::{Scanner, Token};

use super::{ParseError, ParseResult};

/// Annotation parser
///
/// Tokens are pulled from the scanner on demand; nothing is tokenized ahead
/// of the grammar except inside [`Scanner::look_ahead`].
pub struct Parser<'a> {
    pub(super) scanner: Scanner<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            scanner: Scanner::new(source),
        }
    }

    /// Parse the whole annotation as a single type.
    ///
    /// Anything left after the root type is a syntax error.
    pub fn parse(&mut self) -> ParseResult<TypeNode> {
        debug!("parsing annotation {:?}", self.scanner.source());
        self.advance()?;
        let ty = self.parse_type()?;
        self.expect(Token::Eof)?;
        debug!("parsed {} annotation", ty.kind());
        Ok(ty)
    }

    // ==================== utilities ====================

    pub(super) fn current_token(&self) -> &Token {
        self.scanner.token()
    }

    pub(super) fn current_span(&self) -> Span {
        self.scanner.token_span()
    }

    pub(super) fn advance(&mut self) -> ParseResult<()> {
        self.scanner.scan()?;
        Ok(())
    }

    pub(super) fn is_at_end(&self) -> bool {
        matches!(self.current_token(), Token::Eof)
    }

    /// Compare token kinds only (values are ignored)
    pub(super) fn check(&self, token_type: &Token) -> bool {
        std::mem::discriminant(self.current_token()) == std::mem::discriminant(token_type)
    }

    /// Advance if the current token has the given kind
    pub(super) fn match_token(&mut self, token_type: &Token) -> ParseResult<bool> {
        if self.check(token_type) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub(super) fn expect(&mut self, token_type: Token) -> ParseResult<()> {
        if self.check(&token_type) {
            // Eof is never advanced past
            if token_type != Token::Eof {
                self.advance()?;
            }
            Ok(())
        } else {
            Err(self.error(token_type.kind_name()))
        }
    }

    pub(super) fn expect_identifier(&mut self) -> ParseResult<String> {
        match self.current_token() {
            Token::Identifier(name) => {
                let name = name.clone();
                self.advance()?;
                Ok(name)
            }
            _ => Err(self.error("identifier")),
        }
    }

    /// Build an "expected X, found <current token>" error
    pub(super) fn error(&self, expected: &str) -> ParseError {
        let span = self.current_span();
        if self.is_at_end() {
            ParserError::UnexpectedEof {
                expected: expected.to_string(),
                span,
            }
        } else {
            ParserError::UnexpectedToken {
                expected: expected.to_string(),
                found: self.current_token().to_string(),
                span,
            }
        }
    }
}
