use super::{Address, Opcode, Registers, Stack};
use crate::error;
use crate::lang::{Error, Source};
use std::collections::VecDeque;

/// What the runtime needs from its front end after a burst of
/// execution. The front end pumps `Runtime::execute` and reacts.
#[derive(Debug)]
pub enum Event {
    /// The program halted or ran off the end of the stream.
    Stopped,
    /// The cycle budget ran out; call `execute` again.
    Running,
    /// Program output to display.
    Print(String),
    /// A read opcode is waiting for input; supply a line with `enter`.
    Input,
    /// The run aborted on a fault.
    Errors(Vec<Error>),
}

/// ## Interpreter engine
///
/// Owns one complete machine state: registers, stack, program counter,
/// and halt flag. Nothing is global; a fresh state is installed by
/// `load` or by entering a direct line.
///
/// The dispatch loop upholds the machine's contract that `pc` is
/// incremented once more after every opcode, including the
/// ones that assign it. All branch targets account for that trailing
/// increment: `&` resumes at `cx + 1`, `)` at `dx + 1`, and a taken
/// `%c` lands on `cx` exactly.

pub struct Runtime {
    source: Source,
    registers: Registers,
    stack: Stack,
    pc: Address,
    halted: bool,
    reading: bool,
    input: VecDeque<char>,
    input_closed: bool,
    print_buffer: String,
    errors: Vec<Error>,
}

impl Default for Runtime {
    fn default() -> Runtime {
        Runtime {
            source: Source::default(),
            registers: Registers::new(),
            stack: Stack::new(),
            pc: 0,
            halted: false,
            reading: false,
            input: VecDeque::new(),
            input_closed: false,
            print_buffer: String::new(),
            errors: Vec::new(),
        }
    }
}

impl Runtime {
    pub fn new(source: Source) -> Runtime {
        let mut runtime = Runtime::default();
        runtime.load(source);
        runtime
    }

    /// Installs a program and resets the entire machine state:
    /// registers, stack, program counter, and halt flag.
    pub fn load(&mut self, source: Source) {
        self.source = source;
        self.registers.reset();
        self.stack.clear();
        self.pc = 0;
        self.halted = false;
        self.reading = false;
        self.input.clear();
        self.input_closed = false;
        self.print_buffer.clear();
        self.errors.clear();
    }

    /// Enters a line from the operator. While a read opcode is
    /// waiting, the line is input to the running program. Otherwise
    /// it is a direct program line, run against fresh state with the
    /// halt opcode appended. Returns true if the line is worth
    /// keeping in history.
    pub fn enter(&mut self, string: &str) -> bool {
        if self.reading {
            for ch in string.chars() {
                self.input.push_back(ch);
            }
            self.input.push_back('\n');
            true
        } else {
            self.load(Source::direct(string));
            !string.is_empty()
        }
    }

    /// No more input will arrive; reads yield the sentinel from now on.
    pub fn close_input(&mut self) {
        self.input_closed = true;
    }

    /// Cooperative cancellation. Maps onto the halt flag, which the
    /// execution loop checks once per step.
    pub fn interrupt(&mut self) {
        if !self.halted && self.pc < self.source.len() {
            self.errors.push(error!(Break, self.pc));
        }
        self.halted = true;
    }

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    /// Runs up to `cycles` opcodes and reports why it yielded.
    /// Pending output is always delivered before a state change.
    pub fn execute(&mut self, cycles: usize) -> Event {
        for _ in 0..cycles {
            if !self.errors.is_empty() {
                self.halted = true;
                return match self.flush() {
                    Some(event) => event,
                    None => Event::Errors(std::mem::take(&mut self.errors)),
                };
            }
            if self.halted || self.pc >= self.source.len() {
                return match self.flush() {
                    Some(event) => event,
                    None => Event::Stopped,
                };
            }
            if self.reading && self.input.is_empty() && !self.input_closed {
                return match self.flush() {
                    Some(event) => event,
                    None => Event::Input,
                };
            }
            if let Err(error) = self.step() {
                self.errors.push(error);
            }
        }
        match self.flush() {
            Some(event) => event,
            None => Event::Running,
        }
    }

    fn flush(&mut self) -> Option<Event> {
        if self.print_buffer.is_empty() {
            None
        } else {
            Some(Event::Print(std::mem::take(&mut self.print_buffer)))
        }
    }

    fn step(&mut self) -> Result<(), Error> {
        use Opcode::*;
        let opcode = Opcode::decode(&self.source, self.pc)?;
        // Branch arms assign `next` knowing the trailing increment is
        // already folded into the default.
        let pc = self.pc;
        let mut next = pc.wrapping_add(opcode.width());
        let regs = &mut self.registers;
        match opcode {
            Inc => regs.bx = regs.bx.wrapping_add(1),
            Dec => regs.bx = regs.bx.wrapping_sub(1),
            Not => regs.bx = !regs.bx,
            Add => regs.bx = regs.bx.wrapping_add(regs.cx),
            Sub => regs.bx = regs.bx.wrapping_sub(regs.cx),
            Zero => regs.bx = 0,
            SwapBytes => regs.swap_bytes(),
            Literal(ch) => regs.bx = ch as u16,

            IncPtr => regs.cx = regs.cx.wrapping_add(1),
            DecPtr => regs.cx = regs.cx.wrapping_sub(1),
            Swap => regs.swap(),

            Push => self
                .stack
                .push_word(regs.bx)
                .map_err(|error| error.at_position(pc))?,
            Pop => {
                regs.bx = self
                    .stack
                    .pop_word()
                    .map_err(|error| error.at_position(pc))?
            }

            Print => self.print_buffer.push((regs.bx & 0xFF) as u8 as char),
            PrintPtr => self.print_buffer.push_str(&format!("{:x}\n", regs.cx)),
            Read => match self.input.pop_front() {
                Some(ch) => {
                    regs.bx = ch as u16;
                    self.reading = false;
                }
                None => {
                    if self.input_closed {
                        // End of stream reads as -1 narrowed to 16 bits.
                        regs.bx = 0xFFFF;
                        self.reading = false;
                    } else {
                        // Yield without advancing; retried once input arrives.
                        self.reading = true;
                        return Ok(());
                    }
                }
            },

            JumpPtr => next = (regs.cx as Address).wrapping_add(1),
            JumpBack => next = pc.wrapping_sub(regs.cx as Address).wrapping_add(1),
            JumpFwd => next = pc.wrapping_add(regs.cx as Address).wrapping_add(1),
            LoopStart => {
                regs.dx = pc as u16;
                regs.cx = regs.cx.wrapping_sub(1);
            }
            LoopEnd => {
                if regs.cx != 0 {
                    regs.cx -= 1;
                    next = (regs.dx as Address).wrapping_add(1);
                }
            }
            BranchEq(ch) => {
                if regs.bx == ch as u16 {
                    // cx - 1, then the trailing increment lands on cx.
                    next = regs.cx as Address;
                }
            }
            Halt => self.halted = true,

            Nop(_) => {}
            Unknown(ch) => self.print_buffer.push_str(&format!(
                "Error: Unknown command: '{}' at position: {}\n",
                ch, pc
            )),
        }
        self.pc = next;
        Ok(())
    }
}
