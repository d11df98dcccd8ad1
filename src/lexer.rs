use logos::Logos;
use std::fmt;
use thiserror::Error;

use crate::Span;

// Whitespace is a section separator here, so it is kept as a token rather than skipped.
#[derive(Logos, Debug, Copy, Clone, PartialEq, Eq)]
#[logos(error = LexerErrorKind)]
pub enum TokenKind {
    // The digits are left in the source; the parser does the integer conversion.
    #[regex(r"-?[0-9]+")]
    Number,
    #[token("..")]
    RangeSep,
    #[token(",")]
    Comma,
    #[regex(r"\s+")]
    Whitespace,
}

impl TokenKind {
    /// Comma or whitespace: anything that ends a section.
    pub fn is_section_separator(self) -> bool {
        matches!(self, TokenKind::Comma | TokenKind::Whitespace)
    }

    pub fn is_separator(self) -> bool {
        self.is_section_separator() || self == TokenKind::RangeSep
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number => write!(f, "number"),
            TokenKind::RangeSep => write!(f, "'..'"),
            TokenKind::Comma => write!(f, "','"),
            TokenKind::Whitespace => write!(f, "whitespace"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// The source text this token was lexed from.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.span.to_range()).unwrap_or_default()
    }
}

#[derive(Error, Default, Debug, Clone, PartialEq, Eq)]
pub enum LexerErrorKind {
    #[error("Invalid character encountered: '{0}'")]
    InvalidCharacter(char),
    #[default]
    #[error("Invalid token")]
    InvalidToken,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{error}")]
pub struct LexerError {
    pub error: LexerErrorKind,
    pub span: Span,
}

type LexerRangedResult<T> = Result<T, LexerError>;

/// Splits a range spec into tokens, stopping at the first character that
/// cannot start any token.
pub fn tokenize(input: &str) -> LexerRangedResult<Vec<Token>> {
    TokenKind::lexer(input)
        .spanned()
        .map(|(result, range)| {
            let span = Span::from(range);
            match result {
                Ok(kind) => Ok(Token { kind, span }),
                Err(_) => Err(LexerError {
                    error: input
                        .get(span.to_range())
                        .and_then(|slice| slice.chars().next())
                        .map_or(LexerErrorKind::InvalidToken, LexerErrorKind::InvalidCharacter),
                    span,
                }),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_tokens(input: &str, expected: Vec<TokenKind>) {
        match tokenize(input) {
            Ok(tokens) => {
                let kinds: Vec<TokenKind> = tokens.into_iter().map(|t| t.kind).collect();
                assert_eq!(kinds, expected, "Input: '{}'", input);
            }
            Err(e) => panic!("Lexing failed for input '{}': {}", input, e),
        }
    }

    fn assert_lexer_error(input: &str, expected: LexerErrorKind) {
        match tokenize(input) {
            Ok(tokens) => panic!(
                "Expected lexing to fail for input '{}', but got tokens: {:?}",
                input, tokens
            ),
            Err(e) => assert_eq!(e.error, expected, "Input: '{}'", input),
        }
    }

    #[test]
    fn test_empty_input() {
        assert_tokens("", vec![]);
    }

    #[test]
    fn test_single_numbers() {
        assert_tokens("5", vec![TokenKind::Number]);
        assert_tokens("-10", vec![TokenKind::Number]);
        assert_tokens("007", vec![TokenKind::Number]);
    }

    #[test]
    fn test_range_and_separators() {
        use TokenKind::*;
        assert_tokens("-10..10", vec![Number, RangeSep, Number]);
        assert_tokens(
            "1,2 3",
            vec![Number, Comma, Number, Whitespace, Number],
        );
        assert_tokens("1 \t\n 2", vec![Number, Whitespace, Number]);
        assert_tokens("5..-3", vec![Number, RangeSep, Number]);
    }

    #[test]
    fn test_minus_binds_to_following_digits() {
        let tokens = tokenize("5-5").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text("5-5"), "5");
        assert_eq!(tokens[1].text("5-5"), "-5");
        assert_eq!(tokens[1].span, Span::new(1, 3));
    }

    #[test]
    fn test_token_spans() {
        let input = "12..340";
        let tokens = tokenize(input).unwrap();
        assert_eq!(tokens[0].span, Span::new(0, 2));
        assert_eq!(tokens[1].span, Span::new(2, 4));
        assert_eq!(tokens[2].span, Span::new(4, 7));
        assert_eq!(tokens[2].text(input), "340");
    }

    #[test]
    fn test_invalid_characters() {
        assert_lexer_error("1;2", LexerErrorKind::InvalidCharacter(';'));
        assert_lexer_error("abc", LexerErrorKind::InvalidCharacter('a'));
        assert_lexer_error("1+2", LexerErrorKind::InvalidCharacter('+'));
        assert_lexer_error("1.5", LexerErrorKind::InvalidCharacter('.'));
        assert_lexer_error("-", LexerErrorKind::InvalidCharacter('-'));
    }

    #[test]
    fn test_error_span_points_at_character() {
        let err = tokenize("1,2,x").unwrap_err();
        assert_eq!(err.span, Span::new(4, 5));
    }

    #[test]
    fn test_separator_predicates() {
        assert!(TokenKind::Comma.is_section_separator());
        assert!(TokenKind::Whitespace.is_section_separator());
        assert!(!TokenKind::RangeSep.is_section_separator());
        assert!(TokenKind::RangeSep.is_separator());
        assert!(!TokenKind::Number.is_separator());
    }
}
