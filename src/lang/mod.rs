/*!
# Rust Language Module

This Rust module provides source handling and errors for the Wuf++
language. A Wuf++ program is its own instruction stream; there is no
tokenizer beyond reading the characters in order.

*/

#[macro_use]
mod error;
mod source;

pub use error::Error;
pub use error::ErrorCode;
pub use source::Source;

/// Index of an opcode character within a source stream.
pub type Position = usize;
