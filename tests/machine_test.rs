use wuf::mach::{Registers, Stack, STACK_SIZE};

#[test]
fn test_stack_round_trip_preserves_byte_order() {
    let mut stack = Stack::new();
    stack.push_word(0xBEEF).unwrap();
    stack.push_word(0x1234).unwrap();
    assert_eq!(stack.len(), 4);
    assert_eq!(stack.pop_word().unwrap(), 0x1234);
    assert_eq!(stack.pop_word().unwrap(), 0xBEEF);
    assert!(stack.is_empty());
}

#[test]
fn test_stack_fills_to_capacity() {
    let mut stack = Stack::new();
    for n in 0..(STACK_SIZE / 2) {
        stack.push_word(n as u16).unwrap();
    }
    assert_eq!(stack.len(), STACK_SIZE);
    assert!(stack.push_word(0).is_err());
    assert_eq!(stack.pop_word().unwrap(), (STACK_SIZE / 2 - 1) as u16);
}

#[test]
fn test_stack_underflow_faults() {
    let mut stack = Stack::new();
    assert!(stack.pop_word().is_err());
    stack.push_word(7).unwrap();
    stack.pop_word().unwrap();
    assert!(stack.pop_word().is_err());
}

#[test]
fn test_register_swap_routes_through_scratch() {
    let mut regs = Registers::new();
    regs.bx = 10;
    regs.cx = 20;
    regs.swap();
    assert_eq!((regs.bx, regs.cx, regs.dx), (20, 10, 10));
    regs.swap();
    assert_eq!((regs.bx, regs.cx, regs.dx), (10, 20, 20));
}

#[test]
fn test_register_swap_bytes() {
    let mut regs = Registers::new();
    regs.bx = 0x12AB;
    regs.swap_bytes();
    assert_eq!(regs.bx, 0xAB12);
    assert_eq!(regs.dx, 0x12AB);
    regs.swap_bytes();
    assert_eq!(regs.bx, 0x12AB);
}
