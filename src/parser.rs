use std::iter::Peekable;
use std::ops::RangeInclusive;
use std::vec::IntoIter;

use crate::Span;
use crate::diagnostics::{DiagnosticSink, Notice};
use crate::lexer::{Token, TokenKind};
use crate::validator::{InvalidSpecError, InvalidSpecErrorKind, SpecResult, validate_tokens};

/// One comma/whitespace delimited piece of a spec, bounds already in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Single(i64),
    Interval(i64, i64),
}

impl Section {
    pub fn values(&self) -> RangeInclusive<i64> {
        match *self {
            Section::Single(n) => n..=n,
            Section::Interval(start, end) => start..=end,
        }
    }
}

pub struct Parser<'a, 's> {
    source: &'a str,
    tokens: Peekable<IntoIter<Token>>,
    sink: &'s mut dyn DiagnosticSink,
}

impl<'a, 's> Parser<'a, 's> {
    /// `tokens` must come from `source`; the parser reads number text back
    /// out of it by span.
    pub fn new(source: &'a str, tokens: Vec<Token>, sink: &'s mut dyn DiagnosticSink) -> Self {
        Parser {
            source,
            tokens: tokens.into_iter().peekable(),
            sink,
        }
    }

    fn next_token(&mut self) -> Option<Token> {
        self.tokens.next()
    }

    fn error(&self, kind: InvalidSpecErrorKind, span: Span) -> InvalidSpecError {
        InvalidSpecError::new(kind, span, self.source)
    }

    pub fn parse_sections(&mut self) -> SpecResult<Vec<Section>> {
        let mut sections = Vec::new();
        while let Some(token) = self.next_token() {
            match token.kind {
                kind if kind.is_section_separator() => continue,
                TokenKind::Number => sections.push(self.parse_section(token)?),
                _ => Err(self.error(InvalidSpecErrorKind::MisplacedRangeSeparator, token.span))?,
            }
        }
        Ok(sections)
    }

    fn parse_section(&mut self, first: Token) -> SpecResult<Section> {
        let start = self.parse_number(first)?;
        let Some(sep) = self.tokens.next_if(|t| t.kind == TokenKind::RangeSep) else {
            return Ok(Section::Single(start));
        };
        let end = match self.next_token() {
            Some(token) if token.kind == TokenKind::Number => self.parse_number(token)?,
            _ => Err(self.error(InvalidSpecErrorKind::MisplacedRangeSeparator, sep.span))?,
        };
        if let Some(extra) = self.tokens.next_if(|t| t.kind == TokenKind::RangeSep) {
            return Err(self.error(InvalidSpecErrorKind::ChainedRange, extra.span));
        }
        Ok(self.interval(start, end))
    }

    fn parse_number(&self, token: Token) -> SpecResult<i64> {
        let text = token.text(self.source);
        text.parse::<i64>().map_err(|_| {
            self.error(
                InvalidSpecErrorKind::InvalidNumber(text.to_string()),
                token.span,
            )
        })
    }

    fn interval(&mut self, start: i64, end: i64) -> Section {
        if start > end {
            self.sink.notice(&Notice::ReversedBounds { start, end });
            Section::Interval(end, start)
        } else if start == end {
            self.sink.notice(&Notice::PointlessRange(start));
            Section::Single(start)
        } else {
            Section::Interval(start, end)
        }
    }
}

/// Validates `spec` and splits it into sections. Bound normalizations are
/// reported to `sink`.
pub fn parse(spec: &str, sink: &mut dyn DiagnosticSink) -> SpecResult<Vec<Section>> {
    let tokens = validate_tokens(spec)?;
    let sections = Parser::new(spec, tokens, sink).parse_sections()?;
    log::debug!(target: "rangespec", "parsed {} section(s) from '{}'", sections.len(), spec);
    Ok(sections)
}
