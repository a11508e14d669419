/*!
## Rust Machine Module

This Rust module is the Wuf++ machine: the interpreter that executes
an opcode stream directly and the code generator that translates the
same stream to x86 assembly. Both implement identical operational
semantics for each opcode.

*/

pub type Address = usize;

mod codegen;
mod opcode;
mod registers;
mod runtime;
mod stack;

pub use codegen::codegen;
pub use codegen::Assembly;
pub use opcode::Opcode;
pub use registers::Registers;
pub use runtime::Event;
pub use runtime::Runtime;
pub use stack::Stack;

/// Capacity of the machine stack in bytes.
pub const STACK_SIZE: usize = 1000;
