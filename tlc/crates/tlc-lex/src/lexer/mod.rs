//! Lexer module.
//!
//! This module organizes the scanning automaton into smaller, focused components:
//! - `core` - Lexer struct, automaton states and the driving loop
//! - `lexeme` - Bounded lexeme accumulator
//! - `reserved` - Prefix table for `DIV`, `or` and `and`
//! - `identifier` - Identifier, reserved operator and number states
//! - `literal` - Character and string literal states
//! - `comment` - Comment states
//! - `operator` - Assignment and equality states

mod comment;
mod core;
mod identifier;
mod lexeme;
mod literal;
mod operator;
pub mod reserved;

pub use self::core::Lexer;
pub use self::lexeme::Lexeme;
