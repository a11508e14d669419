use super::STACK_SIZE;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Bounds checked machine stack
///
/// Holds at most [`STACK_SIZE`] bytes. A register is pushed as two
/// bytes, low then high, and popped in the reverse order. Overflow
/// and underflow are faults rather than silent memory corruption.

pub struct Stack {
    vec: Vec<u8>,
}

impl std::fmt::Debug for Stack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl Stack {
    pub fn new() -> Stack {
        Stack { vec: vec![] }
    }

    pub fn clear(&mut self) {
        self.vec.clear()
    }

    pub fn len(&self) -> usize {
        self.vec.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    pub fn push_word(&mut self, word: u16) -> Result<()> {
        if self.vec.len() + 2 > STACK_SIZE {
            return Err(error!(StackOverflow));
        }
        self.vec.push(word as u8);
        self.vec.push((word >> 8) as u8);
        Ok(())
    }

    pub fn pop_word(&mut self) -> Result<u16> {
        let high = self.pop_byte()?;
        let low = self.pop_byte()?;
        Ok((u16::from(high) << 8) | u16::from(low))
    }

    fn pop_byte(&mut self) -> Result<u8> {
        match self.vec.pop() {
            Some(byte) => Ok(byte),
            None => Err(error!(StackUnderflow)),
        }
    }
}

impl Default for Stack {
    fn default() -> Stack {
        Stack::new()
    }
}
