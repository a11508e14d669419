use super::{Address, Opcode};
use crate::error;
use crate::lang::{Error, Source};

type Result<T> = std::result::Result<T, Error>;

/// Translates an opcode stream into x86-32 assembly text, one forward
/// pass with no backtracking. Nothing is executed; the ordered line
/// sequence is the generator's only product.
pub fn codegen(source: &Source) -> Result<Assembly> {
    Generator::new().translate(source)
}

/// ## Translation unit
///
/// The full emitted line sequence in program order, plus the non-fatal
/// diagnostics collected along the way (unknown opcodes are reported
/// and skipped, mirroring the interpreter).

#[derive(Debug, Default)]
pub struct Assembly {
    lines: Vec<String>,
    pub errors: Vec<Error>,
}

impl Assembly {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl std::fmt::Display for Assembly {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

struct Generator {
    lines: Vec<String>,
    errors: Vec<Error>,
    loop_label: usize,
    pc_label: usize,
}

impl Generator {
    fn new() -> Generator {
        Generator {
            lines: Vec::new(),
            errors: Vec::new(),
            loop_label: 0,
            pc_label: 0,
        }
    }

    fn translate(mut self, source: &Source) -> Result<Assembly> {
        let mut pc: Address = 0;
        self.label("global _start");
        self.label("; wuf v0.1.0");
        self.label("section .text");
        self.label("jp_cx:");
        self.op("jmp edx");
        // Compile-time feature toggles: a leading `i` pulls in the
        // read-character routine, a leading `o` the write-character
        // routine. Checked at most twice, against the first one or
        // two stream characters.
        if source.get(pc) == Some('i') {
            self.readc();
            pc += 1;
        }
        if source.get(pc) == Some('o') {
            self.printc();
            pc += 1;
        }
        self.label("_start:");
        self.op("mov ebx, 0");
        self.op("mov ecx, 0");
        self.op("mov edx, 0");
        self.label("main:");
        while pc < source.len() {
            let opcode = Opcode::decode(source, pc)?;
            self.emit(pc, opcode);
            pc += opcode.width();
        }
        Ok(Assembly {
            lines: self.lines,
            errors: self.errors,
        })
    }

    fn emit(&mut self, pc: Address, opcode: Opcode) {
        use Opcode::*;
        match opcode {
            Inc => self.op("inc ebx"),
            Dec => self.op("dec ebx"),
            Not => self.op("not ebx"),
            Add => self.op("add ebx, ecx"),
            Sub => self.op("sub ebx, ecx"),
            Zero => self.op("mov ebx, 0"),
            SwapBytes => self.op("xchg bl, bh"),
            Literal(ch) => self.op(&format!("mov bx, '{}'", ch)),

            IncPtr => self.op("inc ecx"),
            DecPtr => self.op("dec ecx"),
            Swap => self.op("xchg ebx, ecx"),

            Push => self.op("push ebx"),
            Pop => self.op("pop ebx"),

            Print => self.op("call printc"),
            PrintPtr => {
                self.op("mov dx, bx");
                self.op("mov bx, cx");
                self.op("call printc");
                self.op("mov bx, dx");
            }
            Read => self.op("call readc"),

            JumpPtr => {
                self.op("lea edx, [ecx + main]");
                self.op("jmp edx");
            }
            JumpBack => self.computed_jump("sub"),
            JumpFwd => self.computed_jump("add"),
            LoopStart => {
                self.label(&format!("loop{}:", self.loop_label));
                self.loop_label += 1;
            }
            LoopEnd => {
                // Labels are referenced by current counter minus one,
                // so only the most recently opened loop is addressable.
                if self.loop_label == 0 {
                    self.errors
                        .push(error!(InternalError, pc; "LOOP END WITHOUT LOOP START"));
                    return;
                }
                self.op("cmp ecx, 0");
                self.op("dec ecx");
                self.op(&format!("jne loop{}", self.loop_label - 1));
                self.op(&format!(".loop{}_end:", self.loop_label - 1));
            }
            BranchEq(ch) => {
                self.op(&format!("cmp ebx, {}", ch as u32));
                self.op("lea edx, [ecx + main]");
                self.op("je jp_cx");
            }
            Halt => {
                self.op("mov eax, 1");
                self.op("mov ebx, 0");
                self.op("int 0x80");
            }

            Nop(' ') | Nop('\n') => {}
            Nop(ch) | Unknown(ch) => {
                self.errors.push(error!(UnknownOpcode, pc, ..ch));
            }
        }
    }

    /// The target has no "current instruction address" operand, so
    /// computed jumps recover it with a call/pop idiom. Each use gets
    /// its own helper label.
    fn computed_jump(&mut self, mnemonic: &str) {
        self.op(&format!("call .get_pc{}", self.pc_label));
        self.op(&format!(".get_pc{}: pop edx", self.pc_label));
        self.op(&format!("{} edx, ecx", mnemonic));
        self.op("jmp edx");
        self.pc_label += 1;
    }

    fn readc(&mut self) {
        self.label("readc:");
        self.op("mov edi, ecx");
        self.op("mov eax, 0x3");
        self.op("mov ebx, 0x0");
        self.op("mov ecx, ebx");
        self.op("mov edx, 1");
        self.op("int 0x80");
        self.op("mov ecx, edi");
        self.op("ret");
    }

    fn printc(&mut self) {
        self.label("printc:");
        self.op("mov edi, ecx");
        self.op("push ebx");
        self.op("mov eax, 0x4");
        self.op("mov ebx, 0x1");
        self.op("mov ecx, esp");
        self.op("mov edx, 1");
        self.op("int 0x80");
        self.op("pop ebx");
        self.op("mov ecx, edi");
        self.op("ret");
    }

    fn op(&mut self, text: &str) {
        self.lines.push(format!("     {}", text));
    }

    fn label(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}
