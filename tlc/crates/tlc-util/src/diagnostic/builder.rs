//! Diagnostic builder for fluent diagnostic construction.

use super::{Diagnostic, DiagnosticCode, Handler};
use crate::Span;

/// Fluent builder for [`Diagnostic`] values
///
/// # Examples
///
/// ```
/// use tlc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
///
/// let handler = Handler::new();
/// DiagnosticBuilder::error("Empty char literal")
///     .code(DiagnosticCode::E_LEXER_EMPTY_CHAR)
///     .span(Span::new(0, 2, 1))
///     .emit(&handler);
///
/// assert_eq!(handler.error_count(), 1);
/// ```
#[must_use = "a diagnostic builder does nothing until `build` or `emit` is called"]
#[derive(Clone, Debug)]
pub struct DiagnosticBuilder {
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
}

impl DiagnosticBuilder {
    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            span: Span::DUMMY,
            code: None,
        }
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Finish building without emitting
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            message: self.message,
            span: self.span,
            code: self.code,
        }
    }

    /// Build the diagnostic and hand it to `handler`
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
