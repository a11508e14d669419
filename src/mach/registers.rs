/// ## Machine register file
///
/// Three 16-bit registers with wraparound arithmetic. `bx` is the
/// accumulator, `cx` the pointer/loop-count register, and `dx` a
/// scratch slot that also remembers the loop re-entry position.

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Registers {
    pub bx: u16,
    pub cx: u16,
    pub dx: u16,
}

impl Registers {
    pub fn new() -> Registers {
        Registers::default()
    }

    pub fn reset(&mut self) {
        *self = Registers::default();
    }

    /// Exchanges `bx` and `cx` through `dx`. The old `bx` stays in
    /// `dx` afterward, which overwrites any recorded loop position.
    pub fn swap(&mut self) {
        self.dx = self.bx;
        self.bx = self.cx;
        self.cx = self.dx;
    }

    /// Exchanges the high and low bytes of `bx`, again through `dx`.
    pub fn swap_bytes(&mut self) {
        self.dx = self.bx;
        self.bx = self.dx.rotate_left(8);
    }
}
