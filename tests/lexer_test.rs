//! Lexer tests
//!
//! Token classification, spans, and the scanner's rewindable lookahead.

#[cfg(test)]
mod tests {
    use annotype::ast::Span;
    use annotype::error::LexerError;
    use annotype::lexer::{tokenize, Scanner, Token, TokenWithPosition};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    /// Token kinds only
    fn extract_tokens(source: &str) -> Vec<Token> {
        tokenize(source)
            .expect("Tokenizing should succeed")
            .into_iter()
            .map(|t| t.token)
            .collect()
    }

    fn ident(name: &str) -> Token {
        Token::Identifier(name.to_string())
    }

    #[test]
    fn test_function_annotation() {
        assert_eq!(
            extract_tokens("(a, ?b) → c"),
            vec![
                Token::LeftParen,
                ident("a"),
                Token::Comma,
                Token::Question,
                ident("b"),
                Token::RightParen,
                Token::Arrow,
                ident("c"),
            ]
        );
    }

    #[test]
    fn test_union_annotation() {
        assert_eq!(
            extract_tokens("union<dom.Node, *>"),
            vec![
                Token::Union,
                Token::Lt,
                ident("dom"),
                Token::Dot,
                ident("Node"),
                Token::Comma,
                Token::Any,
                Token::Gt,
            ]
        );
    }

    #[test]
    fn test_rest_marker() {
        assert_eq!(
            extract_tokens("(...args: any)"),
            vec![
                Token::LeftParen,
                Token::Ellipsis,
                ident("args"),
                Token::Colon,
                Token::Any,
                Token::RightParen,
            ]
        );
    }

    #[test_case(r#""""#, "" ; "empty double quoted")]
    #[test_case("''", "" ; "empty single quoted")]
    #[test_case(r#""a""#, "a" ; "single character")]
    #[test_case(r#""\"""#, "\"" ; "escaped double quote")]
    #[test_case(r"'\''", "'" ; "escaped single quote")]
    #[test_case(r#""tab\tend""#, "tab\tend" ; "tab escape")]
    fn test_string_values(source: &str, expected: &str) {
        let mut scanner = Scanner::new(source);
        assert!(matches!(scanner.scan().unwrap(), Token::String(_)));
        assert_eq!(scanner.token_value(), Some(expected));
    }

    #[test_case("0" ; "zero")]
    #[test_case("42" ; "integer")]
    #[test_case("-7" ; "negative")]
    #[test_case("3.25" ; "decimal")]
    #[test_case("6.02e23" ; "exponent")]
    fn test_numbers_keep_raw_text(source: &str) {
        assert_eq!(extract_tokens(source), vec![Token::Number(source.to_string())]);
    }

    #[test]
    fn test_spans() {
        let tokens = tokenize("[ abc ]").unwrap();
        assert_eq!(
            tokens,
            vec![
                TokenWithPosition {
                    token: Token::LeftBracket,
                    span: Span::new(0, 1),
                },
                TokenWithPosition {
                    token: ident("abc"),
                    span: Span::new(2, 5),
                },
                TokenWithPosition {
                    token: Token::RightBracket,
                    span: Span::new(6, 7),
                },
            ]
        );
    }

    #[test]
    fn test_arrow_span_is_in_bytes() {
        let tokens = tokenize("() → a").unwrap();
        assert_eq!(tokens[2].token, Token::Arrow);
        assert_eq!(tokens[2].span, Span::new(3, 6));
        assert_eq!(tokens[3].span, Span::new(7, 8));
    }

    #[test]
    fn test_end_of_input_repeats() {
        let mut scanner = Scanner::new("");
        assert_eq!(scanner.scan().unwrap(), Token::Eof);
        assert_eq!(scanner.scan().unwrap(), Token::Eof);
        assert_eq!(scanner.token_value(), None);
    }

    #[test]
    fn test_look_ahead_over_several_tokens() {
        let mut scanner = Scanner::new("a.b.c: d");
        scanner.scan().unwrap();

        let seen = scanner.look_ahead(|s| {
            let mut seen = vec![s.token().clone()];
            while let Ok(token) = s.scan() {
                if token == Token::Eof {
                    break;
                }
                seen.push(token);
            }
            seen
        });
        assert_eq!(seen.len(), 7);

        // Nothing was consumed
        assert_eq!(scanner.token(), &ident("a"));
        assert_eq!(scanner.token_span(), Span::new(0, 1));
        assert_eq!(scanner.scan().unwrap(), Token::Dot);
    }

    #[test]
    fn test_nested_look_ahead() {
        let mut scanner = Scanner::new("x y z");
        scanner.scan().unwrap();

        let inner = scanner.look_ahead(|s| {
            s.scan().unwrap();
            let third = s.look_ahead(|s| s.scan().unwrap());
            (s.token().clone(), third)
        });
        assert_eq!(inner, (ident("y"), ident("z")));
        assert_eq!(scanner.token(), &ident("x"));
    }

    #[test_case("a % b", '%', 2 ; "percent")]
    #[test_case("@", '@', 0 ; "at sign")]
    #[test_case("a | b", '|', 2 ; "pipe")]
    #[test_case("é", 'é', 0 ; "non ascii")]
    fn test_unrecognized_characters(source: &str, character: char, start: usize) {
        let err = tokenize(source).unwrap_err();
        assert_eq!(
            err,
            LexerError::UnrecognizedCharacter {
                character,
                span: Span::new(start, start + character.len_utf8()),
            }
        );
    }

    #[test]
    fn test_unterminated_strings() {
        assert!(matches!(
            tokenize("'abc").unwrap_err(),
            LexerError::UnterminatedString { .. }
        ));
        assert!(matches!(
            tokenize(r#"union<"a, b>"#).unwrap_err(),
            LexerError::UnterminatedString { span } if span == Span::new(6, 12)
        ));
    }
}
