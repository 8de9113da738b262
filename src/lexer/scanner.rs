//! On-demand scanner with speculative lookahead

use logos::{Lexer as LogosLexer, Logos};

use super::token::Token;
use crate::ast::Span;
use crate::error::LexerError;

pub type LexResult<T> = Result<T, LexerError>;

/// Token together with its byte span in the annotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenWithPosition {
    pub token: Token,
    pub span: Span,
}

/// Pulls tokens from an annotation one at a time.
///
/// The scanner always holds exactly one current token. Before the first call
/// to [`Scanner::scan`] that token is [`Token::Eof`] with an empty span.
pub struct Scanner<'a> {
    source: &'a str,
    inner: LogosLexer<'a, Token>,
    token: Token,
    span: Span,
}

/// Snapshot used to roll back speculative scanning
#[derive(Clone)]
pub struct ScannerState<'a> {
    inner: LogosLexer<'a, Token>,
    token: Token,
    span: Span,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            inner: Token::lexer(source),
            token: Token::Eof,
            span: Span::dummy(),
        }
    }

    /// Advance to the next token and return it.
    ///
    /// Once the input is exhausted every further call returns [`Token::Eof`].
    pub fn scan(&mut self) -> LexResult<Token> {
        match self.inner.next() {
            Some(Ok(token)) => {
                self.token = token;
                self.span = self.inner.span().into();
            }
            Some(Err(())) => return Err(self.lex_error()),
            None => {
                let end = self.source.len();
                self.token = Token::Eof;
                self.span = Span::new(end, end);
            }
        }
        Ok(self.token.clone())
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    /// Decoded value of the current identifier, string or number token
    pub fn token_value(&self) -> Option<&str> {
        self.token.value()
    }

    pub fn token_span(&self) -> Span {
        self.span
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Run `predicate` against the upcoming tokens, then rewind.
    ///
    /// The scanner is restored to its exact prior state whatever the predicate
    /// returns, so nothing it scanned is consumed.
    pub fn look_ahead<T, F>(&mut self, predicate: F) -> T
    where
        F: FnOnce(&mut Self) -> T,
    {
        let saved = self.save();
        let result = predicate(self);
        self.restore(saved);
        result
    }

    pub fn save(&self) -> ScannerState<'a> {
        ScannerState {
            inner: self.inner.clone(),
            token: self.token.clone(),
            span: self.span,
        }
    }

    pub fn restore(&mut self, state: ScannerState<'a>) {
        self.inner = state.inner;
        self.token = state.token;
        self.span = state.span;
    }

    fn lex_error(&self) -> LexerError {
        // Token starts always fall on a char boundary
        let start = self.inner.span().start;
        let rest = &self.source[start..];
        if rest.starts_with(|c| c == '"' || c == '\'') {
            LexerError::UnterminatedString {
                span: Span::new(start, self.source.len()),
            }
        } else {
            let character = rest.chars().next().unwrap_or('\0');
            LexerError::UnrecognizedCharacter {
                character,
                span: Span::new(start, start + character.len_utf8()),
            }
        }
    }
}

/// Scan a whole annotation, stopping before the end-of-input token
pub fn tokenize(source: &str) -> LexResult<Vec<TokenWithPosition>> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.scan()?;
        if token == Token::Eof {
            return Ok(tokens);
        }
        tokens.push(TokenWithPosition {
            token,
            span: scanner.token_span(),
        });
    }
}

/// Debug helper: one token per line with its span
pub fn format_tokens(tokens: &[TokenWithPosition]) -> String {
    tokens
        .iter()
        .map(|t| format!("{:>3}..{:<3} {}", t.span.start, t.span.end, t.token))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_reports_values() {
        let mut scanner = Scanner::new("dom.Node");
        assert_eq!(scanner.scan().unwrap(), Token::Identifier("dom".to_string()));
        assert_eq!(scanner.token_value(), Some("dom"));
        assert_eq!(scanner.token_span(), Span::new(0, 3));
        assert_eq!(scanner.scan().unwrap(), Token::Dot);
        assert_eq!(scanner.token_value(), None);
        assert_eq!(scanner.scan().unwrap(), Token::Identifier("Node".to_string()));
        assert_eq!(scanner.scan().unwrap(), Token::Eof);
        assert_eq!(scanner.scan().unwrap(), Token::Eof);
        assert_eq!(scanner.token_span(), Span::new(8, 8));
    }

    #[test]
    fn test_look_ahead_restores_on_success() {
        let mut scanner = Scanner::new("a: b");
        scanner.scan().unwrap();

        let named = scanner.look_ahead(|s| {
            matches!(s.token(), Token::Identifier(_)) && s.scan() == Ok(Token::Colon)
        });
        assert!(named);
        assert_eq!(scanner.token(), &Token::Identifier("a".to_string()));
        assert_eq!(scanner.token_span(), Span::new(0, 1));
        assert_eq!(scanner.scan().unwrap(), Token::Colon);
    }

    #[test]
    fn test_look_ahead_restores_on_failure() {
        let mut scanner = Scanner::new("a.b.c");
        scanner.scan().unwrap();

        let named = scanner.look_ahead(|s| {
            matches!(s.token(), Token::Identifier(_)) && s.scan() == Ok(Token::Colon)
        });
        assert!(!named);
        assert_eq!(scanner.token_value(), Some("a"));
        assert_eq!(scanner.scan().unwrap(), Token::Dot);
        assert_eq!(scanner.scan().unwrap(), Token::Identifier("b".to_string()));
    }

    #[test]
    fn test_look_ahead_swallows_lexical_errors() {
        let mut scanner = Scanner::new("a @");
        scanner.scan().unwrap();

        let failed = scanner.look_ahead(|s| s.scan().is_err());
        assert!(failed);
        assert_eq!(scanner.token_value(), Some("a"));
        assert!(scanner.scan().is_err());
    }

    #[test]
    fn test_unrecognized_character() {
        let mut scanner = Scanner::new("a # b");
        scanner.scan().unwrap();
        assert_eq!(
            scanner.scan(),
            Err(LexerError::UnrecognizedCharacter {
                character: '#',
                span: Span::new(2, 3),
            })
        );
    }

    #[test]
    fn test_unterminated_string() {
        let err = tokenize(r#"union<"abc"#).unwrap_err();
        assert_eq!(err, LexerError::UnterminatedString { span: Span::new(6, 10) });
    }

    #[test]
    fn test_tokenize_and_format() {
        let tokens = tokenize("[a]").unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].span, Span::new(1, 2));
        assert_eq!(
            format_tokens(&tokens),
            "  0..1   '['\n  1..2   identifier `a`\n  2..3   ']'"
        );
    }
}
