//! tlc-util - Core Utilities and Foundation Types
//!
//! Shared building blocks for the phases of the Tilde compiler:
//!
//! - [`span`] - Source locations attached to tokens and diagnostics
//! - [`source`] - Source files loaded once before scanning begins
//! - [`diagnostic`] - Error reporting infrastructure
//! - [`error`] - Error types for the utilities in this crate
//!
//! # Example
//!
//! ```
//! use tlc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("Unclosed String")
//!     .code(DiagnosticCode::E_LEXER_UNCLOSED_STRING)
//!     .span(Span::new(0, 3, 1))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod source;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler};
pub use error::{SourceError, SourceResult};
pub use source::SourceFile;
pub use span::Span;
