use crate::span::Span;
use thiserror::Error;

/// Every problem the front end detects is fatal to its parsing session;
/// there is no warning level and no resynchronization. The variants keep
/// the offending token and the name of the parsing context so the report
/// can say what was being parsed when things went wrong.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("unexpected character '{found}'")]
    Lex { found: String, span: Span },

    #[error("unexpected {found} in {context}")]
    Unexpected { context: &'static str, found: String, span: Span },

    #[error("expected {expected} in {context}, found {found}")]
    Expected {
        context: &'static str,
        expected: &'static str,
        found: String,
        span: Span,
    },

    /// Returned by `parse_unit` once the driver has hit a fatal error, so
    /// no partially-built node can surface past the failure.
    #[error("parsing already aborted by an earlier error")]
    Aborted,
}

impl ParseError {
    pub fn unexpected(context: &'static str, found: impl Into<String>, span: Span) -> Self {
        Self::Unexpected { context, found: found.into(), span }
    }

    pub fn expected(
        context: &'static str,
        expected: &'static str,
        found: impl Into<String>,
        span: Span,
    ) -> Self {
        Self::Expected { context, expected, found: found.into(), span }
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            Self::Lex { span, .. }
            | Self::Unexpected { span, .. }
            | Self::Expected { span, .. } => Some(*span),
            Self::Aborted => None,
        }
    }
}

/// Render a ParseError with ariadne for nice terminal output.
pub fn render_error(source: &str, err: &ParseError) {
    use ariadne::{Label, Report, ReportKind, Source};

    match err.span() {
        Some(span) => {
            Report::build(ReportKind::Error, (), span.start)
                .with_message("parse error")
                .with_label(Label::new(span.start..span.end).with_message(err.to_string()))
                .finish()
                .eprint(Source::from(source))
                .unwrap();
        }
        None => {
            eprintln!("error: {err}");
        }
    }
}
