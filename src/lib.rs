//! # Wuf++
//!
//! A minimal stack/register-machine language with two back ends:
//! a direct interpreter and an ahead-of-time translator to 32-bit
//! x86 assembly in NASM syntax.
//!
//! Begin by opening a terminal and running `wuf -I`. If you get the
//! following, you have achieved success.
//! ```text
//! --Wuf++ interpreter--
//! > #H.#i.
//! Hi
//! ```
//!
//! The language is one shared machine model: a 16-bit accumulator
//! `bx`, a 16-bit pointer register `cx`, a scratch register `dx`, and
//! a 1000-byte stack. Each opcode is a single character, optionally
//! followed by one literal character:
//!
//! ```text
//! + - increment main register       > - increment pointer
//! - - decrement main register       < - decrement pointer
//! } - push main register            $ - print pointer as hex
//! { - pop main register             #c - load char to main register
//! . - print main register           ( - loop start, count in pointer
//! , - read to the main register     ) - loop end
//! & - jump to pointer               " - swap registers
//! [ - pc = pc - cx                  %c - compare, jump to pointer if equal
//! ] - pc = pc + cx                  = - halt
//! ! - invert main register          / - bx = bx + cx
//! @ - zero main register            \ - bx = bx - cx
//! ^ - swap bytes of main register
//! ```

pub mod lang;
pub mod mach;
pub mod term;
