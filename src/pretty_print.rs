use std::io;

use ariadne::{Label, Report, ReportKind, Source};

use crate::{InvalidSpecError, InvalidSpecErrorKind};

const SOURCE_ID: &str = "spec";

type SpecReport = Report<'static, (&'static str, std::ops::Range<usize>)>;

impl InvalidSpecError {
    /// Builds an ariadne report pointing at the offending part of the spec.
    pub fn report(&self) -> SpecReport {
        self.build_report(ariadne::Config::default())
    }

    fn build_report(&self, config: ariadne::Config) -> SpecReport {
        let span = (SOURCE_ID, self.span.to_range());
        let label = match &self.kind {
            InvalidSpecErrorKind::InvalidCharacter(_) | InvalidSpecErrorKind::InvalidToken => {
                "Only digits, '-', '..', ',' and whitespace are allowed"
            }
            InvalidSpecErrorKind::LeadingSeparator => "Nothing precedes this separator",
            InvalidSpecErrorKind::TrailingSeparator => "Nothing follows this separator",
            InvalidSpecErrorKind::MisplacedRangeSeparator => "Expected a number on both sides",
            InvalidSpecErrorKind::AmbiguousMinus => "Sign or separator?",
            InvalidSpecErrorKind::ChainedRange => "Second '..' in the same section",
            InvalidSpecErrorKind::InvalidNumber(_) => "Does not fit a 64-bit integer",
        };
        Report::build(ReportKind::Error, span.clone())
            .with_config(config)
            .with_message(format!("Invalid range spec: {}", self.kind))
            .with_label(Label::new(span).with_message(label))
            .finish()
    }

    /// Writes the report for this error to stderr.
    pub fn pretty_print(&self) -> io::Result<()> {
        self.report()
            .eprint((SOURCE_ID, Source::from(self.spec.as_str())))
    }

    /// Renders the report into a string, without colors.
    pub fn render(&self) -> String {
        let mut out = Vec::new();
        let report = self.build_report(ariadne::Config::default().with_color(false));
        match report.write((SOURCE_ID, Source::from(self.spec.as_str())), &mut out) {
            Ok(()) => String::from_utf8_lossy(&out).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}
