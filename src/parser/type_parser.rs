//! Type productions

use crate::ast::*;
use crate::lexer::Token;

use super::{ParseResult, Parser};

impl<'a> Parser<'a> {
    /// Parse a type, dispatching on the current token
    pub(super) fn parse_type(&mut self) -> ParseResult<TypeNode> {
        match self.current_token() {
            Token::Any => {
                self.advance()?;
                Ok(TypeNode::Any)
            }
            Token::LeftBracket => self.parse_array_type(),
            Token::LeftParen => self.parse_function_type(),
            Token::Question => self.parse_nullable_type(),
            Token::Identifier(_) => self.parse_entity_type(),
            Token::Union => self.parse_union_type(),
            Token::LeftBrace => self.parse_object_type(),
            Token::String(value) => {
                let value = value.clone();
                self.advance()?;
                Ok(TypeNode::StringLiteral(value))
            }
            Token::Number(value) => {
                let value = value.clone();
                self.advance()?;
                Ok(TypeNode::NumberLiteral(value))
            }
            Token::Dot
            | Token::Ellipsis
            | Token::Comma
            | Token::Colon
            | Token::RightParen
            | Token::RightBracket
            | Token::RightBrace
            | Token::Lt
            | Token::Gt
            | Token::Arrow
            | Token::Eof => Err(self.error("type")),
        }
    }

    /// `?T`
    fn parse_nullable_type(&mut self) -> ParseResult<TypeNode> {
        self.expect(Token::Question)?;
        let inner = self.parse_type()?;
        Ok(TypeNode::nullable(inner))
    }

    /// `a.b.c` becomes a single entity name
    fn parse_entity_type(&mut self) -> ParseResult<TypeNode> {
        let mut name = self.expect_identifier()?;
        while self.match_token(&Token::Dot)? {
            let segment = self.expect_identifier()?;
            name.push('.');
            name.push_str(&segment);
        }
        Ok(TypeNode::Entity(name))
    }

    /// `union<A, B>`
    fn parse_union_type(&mut self) -> ParseResult<TypeNode> {
        self.expect(Token::Union)?;
        self.expect(Token::Lt)?;

        let mut types = Vec::new();
        while !self.check(&Token::Gt) && !self.is_at_end() {
            types.push(self.parse_type()?);
            self.match_token(&Token::Comma)?;
        }

        self.expect(Token::Gt)?;
        Ok(TypeNode::Union(types))
    }

    /// `[T]`
    fn parse_array_type(&mut self) -> ParseResult<TypeNode> {
        self.expect(Token::LeftBracket)?;
        let element_type = self.parse_type()?;
        self.expect(Token::RightBracket)?;
        Ok(TypeNode::array(element_type))
    }

    /// `{name: T, other: U}`
    fn parse_object_type(&mut self) -> ParseResult<TypeNode> {
        self.expect(Token::LeftBrace)?;

        let mut members = Vec::new();
        while !self.check(&Token::RightBrace) && !self.is_at_end() {
            members.push(self.parse_object_member()?);
            self.match_token(&Token::Comma)?;
        }

        self.expect(Token::RightBrace)?;
        Ok(TypeNode::Object(members))
    }

    fn parse_object_member(&mut self) -> ParseResult<ObjectMember> {
        let name = self.expect_identifier()?;
        self.expect(Token::Colon)?;
        let ty = self.parse_type()?;
        Ok(ObjectMember::new(name, ty))
    }
}
