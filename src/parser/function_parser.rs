//! Call signatures and parameter disambiguation

use log::trace;

use crate::ast::*;
use crate::lexer::Token;

use super::{ParseResult, Parser};

impl<'a> Parser<'a> {
    /// `(params) → R`, the return type being optional
    pub(super) fn parse_function_type(&mut self) -> ParseResult<TypeNode> {
        self.expect(Token::LeftParen)?;

        let mut params = Vec::new();
        while !self.check(&Token::RightParen) && !self.is_at_end() {
            params.push(self.parse_function_param()?);
            self.match_token(&Token::Comma)?;
        }

        self.expect(Token::RightParen)?;

        let return_type = if self.match_token(&Token::Arrow)? {
            Some(self.parse_type()?)
        } else {
            None
        };

        Ok(TypeNode::function(params, return_type))
    }

    fn parse_function_param(&mut self) -> ParseResult<FunctionParam> {
        if self.match_token(&Token::Ellipsis)? {
            let name = self.expect_identifier()?;
            self.expect(Token::Colon)?;
            let ty = self.parse_type()?;
            return Ok(FunctionParam::rest(name, ty));
        }

        if self.is_named_param() {
            let name = self.expect_identifier()?;
            self.expect(Token::Colon)?;
            let ty = self.parse_type()?;
            return Ok(FunctionParam::named(name, ty));
        }

        let ty = self.parse_type()?;
        Ok(FunctionParam::unnamed(ty))
    }

    /// `identifier :` ahead, checked without consuming anything
    fn is_named_param(&mut self) -> bool {
        let named = self.scanner.look_ahead(|scanner| {
            matches!(scanner.token(), Token::Identifier(_))
                && matches!(scanner.scan(), Ok(Token::Colon))
        });
        trace!(
            "parameter at {}..{} is {}",
            self.current_span().start,
            self.current_span().end,
            if named { "named" } else { "unnamed" }
        );
        named
    }
}
