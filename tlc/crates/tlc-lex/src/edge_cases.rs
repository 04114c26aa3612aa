//! Edge case tests for tlc-lex

#[cfg(test)]
mod tests {
    use std::io::{self, Read};

    use tlc_util::{DiagnosticCode, Handler};

    use crate::cursor::{ByteSource, Cursor, StreamCursor};
    use crate::keyword::KEYWORDS;
    use crate::{tokenize, LexError, Lexer, LexerConfig, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<(TokenKind, String)> {
        tokenize(source)
            .into_iter()
            .map(|t| (t.kind(), t.text().to_string()))
            .collect()
    }

    fn lex_with(source: &str, config: LexerConfig) -> Vec<Token> {
        let handler = Handler::new();
        Lexer::with_config(source, &handler, config).unwrap().tokenize()
    }

    fn tok(kind: TokenKind, text: &str) -> (TokenKind, String) {
        (kind, text.to_string())
    }

    // ==================== WHITESPACE AND END OF INPUT ====================

    #[test]
    fn test_edge_whitespace_only() {
        for source in ["", " ", "\t\t", "\n\n\n", " \r\n \t "] {
            assert_eq!(lex_all(source), vec![tok(TokenKind::CodeEnd, "EOF")], "{source:?}");
        }
    }

    #[test]
    fn test_edge_code_end_reports_final_line() {
        let tokens = tokenize("x\n\n");
        assert_eq!(tokens[1].kind(), TokenKind::CodeEnd);
        assert_eq!(tokens[1].line(), 3);
    }

    #[test]
    fn test_edge_code_end_is_sticky() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("", &handler);
        for _ in 0..5 {
            assert_eq!(lexer.next_token().kind(), TokenKind::CodeEnd);
        }
        assert_eq!(lexer.position(), 0);
        assert_eq!(lexer.line(), 1);
    }

    #[test]
    fn test_edge_embedded_nul_ends_input() {
        assert_eq!(
            lex_all("x\0y"),
            vec![tok(TokenKind::Identifier, "x"), tok(TokenKind::CodeEnd, "EOF")]
        );
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let tokens = tokenize("x\r\ny\r\n");
        assert_eq!(tokens[0].line(), 1);
        assert_eq!(tokens[1].line(), 2);
        assert_eq!(tokens[1].text(), "y");
        assert_eq!(tokens.len(), 3);
    }

    // ==================== KEYWORDS AND RESERVED OPERATORS ====================

    #[test]
    fn test_edge_every_keyword_before_non_identifier_byte() {
        for (spelling, kind) in KEYWORDS {
            for successor in ["", " ", "\n", "(", ",", "+", "~"] {
                let source = format!("{spelling}{successor}");
                let tokens = tokenize(&source);
                // `DIV` is also a reserved operator and only ends at whitespace
                if spelling == "DIV" && !successor.trim().is_empty() {
                    assert_eq!(tokens[0].kind(), TokenKind::Unknown, "{source:?}");
                    assert_eq!(tokens[0].text(), source, "{source:?}");
                } else {
                    assert_eq!(tokens[0].kind(), kind, "{source:?}");
                    assert_eq!(tokens[0].text(), spelling, "{source:?}");
                }
            }
        }
    }

    #[test]
    fn test_edge_keyword_prefixes_are_identifiers() {
        for source in ["iff", "elsey", "fortune", "integer", "DIVA", "nulls", "do_it", "true1"] {
            assert_eq!(lex_all(source)[0], tok(TokenKind::Identifier, source), "{source}");
        }
    }

    #[test]
    fn test_edge_order_is_one_identifier() {
        assert_eq!(
            lex_all("order"),
            vec![tok(TokenKind::Identifier, "order"), tok(TokenKind::CodeEnd, "EOF")]
        );
        assert_eq!(
            lex_all("android"),
            vec![tok(TokenKind::Identifier, "android"), tok(TokenKind::CodeEnd, "EOF")]
        );
    }

    #[test]
    fn test_edge_div_expression() {
        assert_eq!(
            lex_all("5 DIV 2"),
            vec![
                tok(TokenKind::Number, "5"),
                tok(TokenKind::ArithmeticOperator, "DIV"),
                tok(TokenKind::Number, "2"),
                tok(TokenKind::CodeEnd, "EOF"),
            ]
        );
    }

    #[test]
    fn test_edge_boolean_words_between_operands() {
        assert_eq!(
            lex_all("x or y\nc and d"),
            vec![
                tok(TokenKind::Identifier, "x"),
                tok(TokenKind::BooleanOperator, "or"),
                tok(TokenKind::Identifier, "y"),
                tok(TokenKind::Identifier, "c"),
                tok(TokenKind::BooleanOperator, "and"),
                tok(TokenKind::Identifier, "d"),
                tok(TokenKind::CodeEnd, "EOF"),
            ]
        );
    }

    #[test]
    fn test_edge_reserved_word_glued_to_punctuation() {
        assert_eq!(
            lex_all("or("),
            vec![tok(TokenKind::Unknown, "or("), tok(TokenKind::CodeEnd, "EOF")]
        );
        assert_eq!(
            lex_all("5 DIV;"),
            vec![
                tok(TokenKind::Number, "5"),
                tok(TokenKind::Unknown, "DIV;"),
                tok(TokenKind::CodeEnd, "EOF"),
            ]
        );
        assert_eq!(
            lex_all("x and\ty"),
            vec![
                tok(TokenKind::Identifier, "x"),
                tok(TokenKind::BooleanOperator, "and"),
                tok(TokenKind::Identifier, "y"),
                tok(TokenKind::CodeEnd, "EOF"),
            ]
        );
    }

    #[test]
    fn test_edge_partial_reserved_word_swallows_successor() {
        let handler = Handler::new();
        let tokens = Lexer::new("o +\nan\nx", &handler).tokenize();
        let got: Vec<(TokenKind, &str, u32)> =
            tokens.iter().map(|t| (t.kind(), t.text(), t.line())).collect();
        assert_eq!(
            got,
            vec![
                (TokenKind::Unknown, "o ", 1),
                (TokenKind::ArithmeticOperator, "+", 1),
                (TokenKind::Unknown, "an\n", 2),
                (TokenKind::Identifier, "x", 3),
                (TokenKind::CodeEnd, "EOF", 3),
            ]
        );
        let codes: Vec<_> = handler.diagnostics().iter().map(|d| d.code).collect();
        assert_eq!(codes, vec![Some(DiagnosticCode::E_LEXER_UNEXPECTED_BYTE); 2]);
    }

    // ==================== LITERALS ====================

    #[test]
    fn test_edge_unterminated_string() {
        let source = "\"ab";
        let handler = Handler::new();
        let mut lexer = Lexer::new(source, &handler);

        let token = lexer.next_token();
        assert_eq!(token.kind(), TokenKind::Unknown);
        assert_eq!(token.text(), "Unclosed String");
        assert_eq!(lexer.position(), source.len());
        assert_eq!(lexer.next_token().kind(), TokenKind::CodeEnd);
    }

    #[test]
    fn test_edge_multi_character_literal() {
        assert_eq!(
            lex_all("'ab'"),
            vec![
                tok(TokenKind::Unknown, "Multi-character literal"),
                tok(TokenKind::CodeEnd, "EOF"),
            ]
        );
    }

    #[test]
    fn test_edge_unclosed_literals_keep_line_of_start() {
        let tokens = tokenize("\n\"open\n'x");
        assert_eq!(tokens[0].text(), "Unclosed String");
        assert_eq!(tokens[0].line(), 2);
        assert_eq!(tokens[1].text(), "Multi-character literal");
        assert_eq!(tokens[1].line(), 3);
    }

    #[test]
    fn test_edge_escapes_decoded_in_string() {
        let tokens = tokenize(r#""tab\there\\""#);
        assert_eq!(tokens[0].kind(), TokenKind::String);
        assert_eq!(tokens[0].text(), "tab\there\\");
    }

    // ==================== COMMENTS ====================

    #[test]
    fn test_edge_block_comment_text() {
        assert_eq!(
            lex_all("~/ comment /~"),
            vec![
                tok(TokenKind::BlockComment, "~/ comment /~"),
                tok(TokenKind::CodeEnd, "EOF"),
            ]
        );
    }

    #[test]
    fn test_edge_line_comment_stops_before_newline() {
        let tokens = tokenize("~ line comment\n");
        assert_eq!(tokens[0].kind(), TokenKind::SingleLineComment);
        assert_eq!(tokens[0].text(), "~ line comment");
        assert_eq!(tokens[0].span().end, 14);
        assert_eq!(tokens[1].kind(), TokenKind::CodeEnd);
    }

    #[test]
    fn test_edge_lines_across_multiline_comment() {
        let tokens = tokenize("x\n~/ a\nb\nc /~ y\nz");
        let lines: Vec<(TokenKind, u32)> = tokens.iter().map(|t| (t.kind(), t.line())).collect();
        assert_eq!(
            lines,
            vec![
                (TokenKind::Identifier, 1),
                (TokenKind::BlockComment, 2),
                (TokenKind::Identifier, 4),
                (TokenKind::Identifier, 5),
                (TokenKind::CodeEnd, 5),
            ]
        );
    }

    // ==================== ROUND TRIP ====================

    #[test]
    fn test_edge_rescan_is_stable() {
        let source = "int n = 5\nfor ( i = 0 , i , i = i + 1 ) { n = n DIV 2 ~ halve\n }\nwrite \"done\"";
        let first: Vec<Token> = tokenize(source)
            .into_iter()
            .filter(|t| !t.kind().is_comment() && !t.is(TokenKind::CodeEnd))
            .collect();
        let joined = first
            .iter()
            .map(|t| match t.kind() {
                TokenKind::String => format!("\"{}\"", t.text()),
                _ => t.text().to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ");
        let second: Vec<TokenKind> = tokenize(&joined)
            .iter()
            .map(Token::kind)
            .filter(|k| *k != TokenKind::CodeEnd)
            .collect();
        let first: Vec<TokenKind> = first.iter().map(Token::kind).collect();
        assert_eq!(first, second);
    }

    // ==================== LEXEME LIMIT ====================

    #[test]
    fn test_edge_long_identifier_is_too_long() {
        let name = "x".repeat(300);
        let handler = Handler::new();
        let tokens = Lexer::new(&format!("{name} y"), &handler).tokenize();

        assert_eq!(tokens[0].kind(), TokenKind::LexemeTooLong);
        assert_eq!(tokens[0].text(), &name[..256]);
        assert_eq!(tokens[0].span().len(), 300);
        assert_eq!(tokens[1].text(), "y");

        let diagnostics = handler.diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, Some(DiagnosticCode::E_LEXER_LEXEME_TOO_LONG));
    }

    #[test]
    fn test_edge_identifier_at_limit_fits() {
        let name = "q".repeat(256);
        let tokens = tokenize(&name);
        assert_eq!(tokens[0].kind(), TokenKind::Identifier);
        assert_eq!(tokens[0].text().len(), 256);
    }

    #[test]
    fn test_edge_custom_limit() {
        let config = LexerConfig::new().with_max_lexeme_len(4);
        let tokens = lex_with("abcdef 1234 12345 \"abcde\"", config);
        let kinds: Vec<TokenKind> = tokens.iter().map(Token::kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::LexemeTooLong,
                TokenKind::Number,
                TokenKind::LexemeTooLong,
                TokenKind::LexemeTooLong,
                TokenKind::CodeEnd,
            ]
        );
        assert_eq!(tokens[0].text(), "abcd");
        assert_eq!(tokens[3].text(), "abcd");
    }

    #[test]
    fn test_edge_malformed_wins_over_too_long() {
        let config = LexerConfig::new().with_max_lexeme_len(2);
        let tokens = lex_with("\"abcdef", config);
        assert_eq!(tokens[0].kind(), TokenKind::Unknown);
        assert_eq!(tokens[0].text(), "Unclosed String");
    }

    #[test]
    fn test_edge_reserved_word_over_tiny_limit() {
        let config = LexerConfig::new().with_max_lexeme_len(1);
        let tokens = lex_with("DIV", config);
        assert_eq!(tokens[0].kind(), TokenKind::LexemeTooLong);
        assert_eq!(tokens[0].text(), "D");
        assert_eq!(tokens[1].kind(), TokenKind::CodeEnd);
    }

    // ==================== RAW BYTES AND STREAMS ====================

    #[test]
    fn test_edge_non_ascii_byte_is_unknown() {
        let handler = Handler::new();
        let cursor = Cursor::from_bytes(&[b'x', 0xC3, b' ', b'y']);
        let tokens = Lexer::from_source(cursor, &handler, LexerConfig::default())
            .unwrap()
            .tokenize();
        let kinds: Vec<TokenKind> = tokens.iter().map(Token::kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::Unknown,
                TokenKind::Identifier,
                TokenKind::CodeEnd,
            ]
        );
        assert_eq!(tokens[1].text(), "\u{FFFD}");
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn test_edge_stream_matches_buffer() {
        let source = "~/ header /~\nint x = 'a'\nif x == 'b' or y { write \"ok\\n\" }\n";
        let buffered = tokenize(source);

        let handler = Handler::new();
        let cursor = StreamCursor::new(source.as_bytes());
        let streamed = Lexer::from_source(cursor, &handler, LexerConfig::default())
            .unwrap()
            .tokenize();
        assert_eq!(buffered, streamed);
    }

    #[test]
    fn test_edge_stream_error_surfaces_after_scan() {
        struct Broken<'a>(&'a [u8]);

        impl Read for Broken<'_> {
            fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
                match self.0.split_first() {
                    Some((&b, rest)) if !buf.is_empty() => {
                        buf[0] = b;
                        self.0 = rest;
                        Ok(1)
                    },
                    _ => Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed")),
                }
            }
        }

        let handler = Handler::new();
        let cursor = StreamCursor::new(Broken(b"x = 1"));
        let mut lexer = Lexer::from_source(cursor, &handler, LexerConfig::default()).unwrap();
        let kinds: Vec<TokenKind> = lexer.tokenize().iter().map(Token::kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::AssignmentOperator,
                TokenKind::Number,
                TokenKind::CodeEnd,
            ]
        );
        assert!(lexer.source().is_at_end());
        let err = lexer.source_mut().take_error();
        assert!(matches!(err, Some(LexError::Io(_))));
    }
}
