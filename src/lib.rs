// Declare modules publicly so they are part of the library interface
pub mod diagnostics;
pub mod formatter;
pub mod lexer;
pub mod parser;
pub mod pretty_print;
pub mod range;
pub mod range_set;
pub mod source;
pub mod validator;

pub use diagnostics::{DiagnosticSink, Discard, LogSink, Notice, Recorder};
pub use formatter::format;
pub use lexer::{LexerError, Token, TokenKind, tokenize};
pub use parser::{Section, parse};
pub use range::Range;
pub use range_set::RangeSet;
pub use source::Span;
pub use validator::{InvalidSpecError, InvalidSpecErrorKind, SpecResult, validate};
