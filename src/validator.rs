use thiserror::Error;

use crate::Span;
use crate::lexer::{LexerError, LexerErrorKind, Token, TokenKind, tokenize};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidSpecErrorKind {
    #[error("invalid character '{0}'")]
    InvalidCharacter(char),
    #[error("unrecognized input")]
    InvalidToken,
    #[error("spec cannot start with a separator")]
    LeadingSeparator,
    #[error("spec cannot end with a separator")]
    TrailingSeparator,
    #[error("'..' must sit directly between two numbers")]
    MisplacedRangeSeparator,
    #[error("'-' between two digits is ambiguous: use ',' to separate numbers")]
    AmbiguousMinus,
    #[error("a section can hold only one '..'")]
    ChainedRange,
    #[error("'{0}' is not a valid integer")]
    InvalidNumber(String),
}

/// A range spec that was rejected. Keeps the spec so the error can be
/// rendered on its own.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid range spec '{spec}' at {span}: {kind}")]
pub struct InvalidSpecError {
    pub kind: InvalidSpecErrorKind,
    pub span: Span,
    pub spec: String,
}

impl InvalidSpecError {
    pub fn new(kind: InvalidSpecErrorKind, span: Span, spec: &str) -> Self {
        InvalidSpecError {
            kind,
            span,
            spec: spec.to_string(),
        }
    }

    pub(crate) fn from_lexer(err: LexerError, spec: &str) -> Self {
        let kind = match err.error {
            LexerErrorKind::InvalidCharacter(c) => InvalidSpecErrorKind::InvalidCharacter(c),
            LexerErrorKind::InvalidToken => InvalidSpecErrorKind::InvalidToken,
        };
        InvalidSpecError::new(kind, err.span, spec)
    }
}

pub type SpecResult<T> = Result<T, InvalidSpecError>;

/// Checks the whole spec against the range grammar. Nothing is parsed into
/// integers here; any violation rejects the entire string.
pub fn validate(spec: &str) -> SpecResult<()> {
    validate_tokens(spec).map(|_| ())
}

// Shared with the parser so the spec is only lexed once.
pub(crate) fn validate_tokens(spec: &str) -> SpecResult<Vec<Token>> {
    let tokens = tokenize(spec).map_err(|err| InvalidSpecError::from_lexer(err, spec))?;
    check_tokens(&tokens).map_err(|(kind, span)| InvalidSpecError::new(kind, span, spec))?;
    Ok(tokens)
}

fn check_tokens(tokens: &[Token]) -> Result<(), (InvalidSpecErrorKind, Span)> {
    if let Some(first) = tokens.first().filter(|t| t.kind.is_separator()) {
        return Err((InvalidSpecErrorKind::LeadingSeparator, first.span));
    }
    if let Some(last) = tokens.last().filter(|t| t.kind.is_separator()) {
        return Err((InvalidSpecErrorKind::TrailingSeparator, last.span));
    }

    let mut seen_range_sep = false;
    for pair in tokens.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        match (prev.kind, next.kind) {
            (TokenKind::RangeSep, kind) | (kind, TokenKind::RangeSep) if kind.is_separator() => {
                return Err((
                    InvalidSpecErrorKind::MisplacedRangeSeparator,
                    prev.span.merge(next.span),
                ));
            }
            (TokenKind::Number, TokenKind::Number) => {
                // "5-5": the lexer glued the '-' onto the second number.
                let minus = Span::new(next.span.start, next.span.start + 1);
                return Err((InvalidSpecErrorKind::AmbiguousMinus, minus));
            }
            (TokenKind::Number, TokenKind::RangeSep) => {
                if seen_range_sep {
                    return Err((InvalidSpecErrorKind::ChainedRange, next.span));
                }
                seen_range_sep = true;
            }
            (_, kind) if kind.is_section_separator() => seen_range_sep = false,
            _ => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_valid(spec: &str) {
        if let Err(e) = validate(spec) {
            panic!("Expected '{}' to validate, got: {}", spec, e);
        }
    }

    fn assert_invalid(spec: &str, expected: InvalidSpecErrorKind) {
        match validate(spec) {
            Ok(()) => panic!("Expected '{}' to be rejected", spec),
            Err(e) => {
                assert_eq!(e.kind, expected, "Spec: '{}'", spec);
                assert_eq!(e.spec, spec);
            }
        }
    }

    #[test]
    fn test_accepts_well_formed_specs() {
        assert_valid("");
        assert_valid("5");
        assert_valid("-5");
        assert_valid("-10..10,12,100..120");
        assert_valid("1 2\t3");
        assert_valid("1,,2");
        assert_valid("1, 2");
        assert_valid("10..1");
        assert_valid("-3..-1");
        assert_valid("5..-5");
        assert_valid("1..2,3..4 5..6");
    }

    #[test]
    fn test_rejects_dangling_separators() {
        assert_invalid("5..", InvalidSpecErrorKind::TrailingSeparator);
        assert_invalid("..5", InvalidSpecErrorKind::LeadingSeparator);
        assert_invalid(",5", InvalidSpecErrorKind::LeadingSeparator);
        assert_invalid("5,", InvalidSpecErrorKind::TrailingSeparator);
        assert_invalid(" 5", InvalidSpecErrorKind::LeadingSeparator);
        assert_invalid("5 ", InvalidSpecErrorKind::TrailingSeparator);
        assert_invalid(",", InvalidSpecErrorKind::LeadingSeparator);
    }

    #[test]
    fn test_rejects_range_separator_next_to_section_separator() {
        assert_invalid("1..,2", InvalidSpecErrorKind::MisplacedRangeSeparator);
        assert_invalid("1,..2", InvalidSpecErrorKind::MisplacedRangeSeparator);
        assert_invalid("1 ..2", InvalidSpecErrorKind::MisplacedRangeSeparator);
        assert_invalid("1.. 2", InvalidSpecErrorKind::MisplacedRangeSeparator);
        assert_invalid("1....2", InvalidSpecErrorKind::MisplacedRangeSeparator);
    }

    #[test]
    fn test_rejects_ambiguous_minus() {
        assert_invalid("5-5", InvalidSpecErrorKind::AmbiguousMinus);
        assert_invalid("1,10-20", InvalidSpecErrorKind::AmbiguousMinus);
        assert_invalid("-1-2", InvalidSpecErrorKind::AmbiguousMinus);
    }

    #[test]
    fn test_ambiguous_minus_span_points_at_dash() {
        let err = validate("12-3").unwrap_err();
        assert_eq!(err.span, Span::new(2, 3));
    }

    #[test]
    fn test_misplaced_separator_span_covers_both_tokens() {
        let err = validate("1..,2").unwrap_err();
        assert_eq!(err.span, Span::new(1, 4));
    }

    #[test]
    fn test_rejects_chained_range() {
        assert_invalid("1..2..3", InvalidSpecErrorKind::ChainedRange);
        // A fresh section may use '..' again.
        assert_valid("1..2,3..4");
    }

    #[test]
    fn test_rejects_foreign_characters() {
        assert_invalid("1;2", InvalidSpecErrorKind::InvalidCharacter(';'));
        assert_invalid("1.5", InvalidSpecErrorKind::InvalidCharacter('.'));
        assert_invalid("a..b", InvalidSpecErrorKind::InvalidCharacter('a'));
        assert_invalid("1...3", InvalidSpecErrorKind::InvalidCharacter('.'));
    }

    #[test]
    fn test_error_display_mentions_spec() {
        let err = validate("5,").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("'5,'"), "message: {}", message);
        assert!(message.contains("end with a separator"), "message: {}", message);
    }
}
