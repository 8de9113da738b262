//! Token definitions

use logos::Logos;
use std::fmt;

/// Annotation token type
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    // Keywords
    #[token("any")]
    #[token("*")]
    Any,
    #[token("union")]
    Union,

    // Identifiers (keywords above take priority on exact matches)
    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*", |lex| lex.slice().to_owned())]
    Identifier(String),

    // Number literals keep their raw text
    #[regex(r"-?[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?", |lex| lex.slice().to_owned())]
    Number(String),

    // String literals
    #[regex(r#""([^"\\]|\\.)*""#, |lex| {
        let s = lex.slice();
        super::literal_parser::unescape_string(&s[1..s.len() - 1])
    })]
    #[regex(r"'([^'\\]|\\.)*'", |lex| {
        let s = lex.slice();
        super::literal_parser::unescape_string(&s[1..s.len() - 1])
    })]
    String(String),

    // Punctuation
    #[token("?")]
    Question,
    #[token(".")]
    Dot,
    #[token("...")]
    Ellipsis,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("[")]
    LeftBracket,
    #[token("]")]
    RightBracket,
    #[token("{")]
    LeftBrace,
    #[token("}")]
    RightBrace,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("→")]
    #[token("->")]
    Arrow,

    // End of input, produced by the scanner rather than logos
    Eof,
}

impl Token {
    /// Literal value carried by identifier, string and number tokens
    pub fn value(&self) -> Option<&str> {
        match self {
            Token::Identifier(s) | Token::String(s) | Token::Number(s) => Some(s),
            _ => None,
        }
    }

    /// Short description of the token kind, without its value
    pub fn kind_name(&self) -> &'static str {
        match self {
            Token::Any => "'*'",
            Token::Union => "'union'",
            Token::Identifier(_) => "identifier",
            Token::Number(_) => "number literal",
            Token::String(_) => "string literal",
            Token::Question => "'?'",
            Token::Dot => "'.'",
            Token::Ellipsis => "'...'",
            Token::Comma => "','",
            Token::Colon => "':'",
            Token::LeftParen => "'('",
            Token::RightParen => "')'",
            Token::LeftBracket => "'['",
            Token::RightBracket => "']'",
            Token::LeftBrace => "'{'",
            Token::RightBrace => "'}'",
            Token::Lt => "'<'",
            Token::Gt => "'>'",
            Token::Arrow => "'→'",
            Token::Eof => "end of input",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Identifier(s) => write!(f, "identifier `{}`", s),
            Token::Number(s) => write!(f, "number `{}`", s),
            Token::String(s) => write!(f, "string {:?}", s),
            _ => write!(f, "{}", self.kind_name()),
        }
    }
}
