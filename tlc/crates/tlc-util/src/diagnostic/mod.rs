//! Diagnostic module - Error reporting infrastructure.
//!
//! Compiler phases never abort on a recoverable problem. They record a
//! [`Diagnostic`] in a [`Handler`] and keep going; the caller decides after
//! the phase whether the collected errors should stop compilation.
//!
//! # Examples
//!
//! ```
//! use tlc_util::diagnostic::{Diagnostic, Handler};
//! use tlc_util::Span;
//!
//! let handler = Handler::new();
//! handler.emit_diagnostic(Diagnostic::error("Unclosed Char", Span::new(0, 2, 1)));
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.error_count(), 1);
//! ```

mod builder;
mod codes;

pub use builder::DiagnosticBuilder;
pub use codes::DiagnosticCode;

use std::cell::RefCell;
use std::fmt;

use crate::Span;

/// An error diagnostic with its location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
}

impl Diagnostic {
    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            code: None,
        }
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "error[{}]: {}", code, self.message)?,
            None => write!(f, "error: {}", self.message)?,
        }
        write!(f, " (line {})", self.span.line)
    }
}

/// Handler for collecting and reporting diagnostics
///
/// Emission only needs `&self`, so one handler can be shared by every
/// phase working on the same compilation unit.
#[derive(Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.borrow().is_empty()
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// Get all diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("diagnostics", &self.diagnostics.borrow().len())
            .finish()
    }
}
