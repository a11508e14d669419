use super::Address;
use crate::error;
use crate::lang::{Error, Source};

type Result<T> = std::result::Result<T, Error>;

/// ## Wuf++ instruction set
///
/// Every opcode is one source character. `Literal` and `BranchEq`
/// consume the following character as an immediate operand, so they
/// occupy two stream positions.
///
/// For example: `#A.` decodes to `[Literal('A'), Print]` and prints `A`.
///
/// The interpreter and the code generator both dispatch on this enum;
/// it is the shared machine model.

#[derive(Clone, Copy, PartialEq)]
pub enum Opcode {
    // *** Accumulator
    /// `+` increment `bx`, wrapping.
    Inc,
    /// `-` decrement `bx`, wrapping.
    Dec,
    /// `!` bitwise invert `bx`.
    Not,
    /// `/` add the pointer register into `bx`.
    Add,
    /// `\` subtract the pointer register from `bx`.
    Sub,
    /// `@` zero `bx`.
    Zero,
    /// `^` exchange the high and low bytes of `bx`.
    SwapBytes,
    /// `#c` load the literal character `c` into `bx`.
    Literal(char),

    // *** Pointer register
    /// `>` increment `cx`, wrapping.
    IncPtr,
    /// `<` decrement `cx`, wrapping.
    DecPtr,
    /// `"` exchange `bx` and `cx` through the `dx` scratch register.
    Swap,

    // *** Stack
    /// `}` push `bx` onto the stack as two bytes.
    Push,
    /// `{` pop two bytes from the stack into `bx`.
    Pop,

    // *** Input/output
    /// `.` write the low byte of `bx` as a character.
    Print,
    /// `$` write `cx` as hexadecimal text and a line break.
    PrintPtr,
    /// `,` read one character into `bx`.
    Read,

    // *** Branch control
    /// `&` jump to the position held in `cx`.
    JumpPtr,
    /// `[` jump backward by `cx`.
    JumpBack,
    /// `]` jump forward by `cx`.
    JumpFwd,
    /// `(` record the loop re-entry position in `dx` and decrement `cx`.
    LoopStart,
    /// `)` while `cx` is nonzero, decrement it and re-enter the loop.
    LoopEnd,
    /// `%c` if `bx` equals the literal `c`, branch to `cx - 1`.
    BranchEq(char),
    /// `=` set the halt flag.
    Halt,

    // *** Markers and padding
    /// Space, newline, and the generator-only `i`/`o` feature toggles.
    Nop(char),
    /// Anything else. Reported and skipped, never fatal.
    Unknown(char),
}

impl Opcode {
    /// Decodes the opcode at `position`. Fails only when an opcode
    /// expecting a trailing literal sits at the end of the stream.
    pub fn decode(source: &Source, position: Address) -> Result<Opcode> {
        use Opcode::*;
        let ch = match source.get(position) {
            Some(ch) => ch,
            None => return Err(error!(InternalError, position; "DECODE PAST END")),
        };
        Ok(match ch {
            '+' => Inc,
            '-' => Dec,
            '!' => Not,
            '/' => Add,
            '\\' => Sub,
            '@' => Zero,
            '^' => SwapBytes,
            '#' => Literal(Opcode::operand(source, position, ch)?),
            '>' => IncPtr,
            '<' => DecPtr,
            '"' => Swap,
            '}' => Push,
            '{' => Pop,
            '.' => Print,
            '$' => PrintPtr,
            ',' => Read,
            '&' => JumpPtr,
            '[' => JumpBack,
            ']' => JumpFwd,
            '(' => LoopStart,
            ')' => LoopEnd,
            '%' => BranchEq(Opcode::operand(source, position, ch)?),
            '=' => Halt,
            ' ' | '\n' | 'i' | 'o' => Nop(ch),
            _ => Unknown(ch),
        })
    }

    fn operand(source: &Source, position: Address, ch: char) -> Result<char> {
        match source.get(position + 1) {
            Some(operand) => Ok(operand),
            None => Err(error!(UnexpectedEnd, position, ..ch)),
        }
    }

    /// Number of stream positions the opcode occupies.
    pub fn width(&self) -> usize {
        use Opcode::*;
        match self {
            Literal(_) | BranchEq(_) => 2,
            _ => 1,
        }
    }
}

impl std::fmt::Debug for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Opcode::*;
        match self {
            Inc => write!(f, "INC"),
            Dec => write!(f, "DEC"),
            Not => write!(f, "NOT"),
            Add => write!(f, "ADD"),
            Sub => write!(f, "SUB"),
            Zero => write!(f, "ZERO"),
            SwapBytes => write!(f, "SWAPBYTES"),
            Literal(c) => write!(f, "LITERAL('{}')", c),

            IncPtr => write!(f, "INCPTR"),
            DecPtr => write!(f, "DECPTR"),
            Swap => write!(f, "SWAP"),

            Push => write!(f, "PUSH"),
            Pop => write!(f, "POP"),

            Print => write!(f, "PRINT"),
            PrintPtr => write!(f, "PRINTPTR"),
            Read => write!(f, "READ"),

            JumpPtr => write!(f, "JUMPPTR"),
            JumpBack => write!(f, "JUMPBACK"),
            JumpFwd => write!(f, "JUMPFWD"),
            LoopStart => write!(f, "LOOPSTART"),
            LoopEnd => write!(f, "LOOPEND"),
            BranchEq(c) => write!(f, "BRANCHEQ('{}')", c),
            Halt => write!(f, "HALT"),

            Nop(c) => write!(f, "NOP({:?})", c),
            Unknown(c) => write!(f, "UNKNOWN('{}')", c),
        }
    }
}
