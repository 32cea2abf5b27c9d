/*!
# Rust Language Module

This Rust module splits Pixel Wall-E source lines into statements
and parses the expressions inside them.

*/

#[macro_use]
mod error;
mod ident;
mod line;
mod parse;

pub use error::Error;
pub use error::ErrorCode;
pub use error::ErrorKind;
pub use ident::{is_identifier, is_label, label_key};
pub use line::Line;
pub use line::LineKind;
pub use parse::parse;

pub mod ast;

/// One-based line number of a program line, absent until the driver attaches it.
pub type LineNumber = Option<usize>;
