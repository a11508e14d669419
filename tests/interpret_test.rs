mod common;
use common::*;
use wuf::lang::Source;
use wuf::mach::Runtime;

#[test]
fn test_increment_decrement() {
    let mut r = Runtime::default();
    r.enter("+++--");
    assert_eq!(exec(&mut r), "");
    assert_eq!(r.registers().bx, 1);
}

#[test]
fn test_decrement_wraps_at_zero() {
    let mut r = Runtime::default();
    r.enter("-");
    assert_eq!(exec(&mut r), "");
    assert_eq!(r.registers().bx, 65535);
    r.enter("-+");
    assert_eq!(exec(&mut r), "");
    assert_eq!(r.registers().bx, 0);
}

#[test]
fn test_invert() {
    let mut r = Runtime::default();
    r.enter("!");
    assert_eq!(exec(&mut r), "");
    assert_eq!(r.registers().bx, 0xFFFF);
}

#[test]
fn test_add_sub_pointer() {
    let mut r = Runtime::default();
    r.enter("+++>>/");
    assert_eq!(exec(&mut r), "");
    assert_eq!(r.registers().bx, 5);
    r.enter("+++>>\\");
    assert_eq!(exec(&mut r), "");
    assert_eq!(r.registers().bx, 1);
}

#[test]
fn test_zero() {
    let mut r = Runtime::default();
    r.enter("+++++@");
    assert_eq!(exec(&mut r), "");
    assert_eq!(r.registers().bx, 0);
}

#[test]
fn test_swap_bytes() {
    let mut r = Runtime::default();
    r.enter("#A^");
    assert_eq!(exec(&mut r), "");
    assert_eq!(r.registers().bx, 65 << 8);
    assert_eq!(r.registers().dx, 65);
}

#[test]
fn test_swap_twice_is_involution() {
    let mut r = Runtime::default();
    r.enter("+>>\"\"");
    assert_eq!(exec(&mut r), "");
    assert_eq!(r.registers().bx, 1);
    assert_eq!(r.registers().cx, 2);
}

#[test]
fn test_push_pop_round_trip() {
    let mut r = Runtime::default();
    r.enter("+++}@{");
    assert_eq!(exec(&mut r), "");
    assert_eq!(r.registers().bx, 3);
    assert!(r.stack().is_empty());
}

#[test]
fn test_literal_load_and_print() {
    let mut r = Runtime::default();
    r.enter("#A.");
    assert_eq!(exec(&mut r), "A");
    assert_eq!(r.registers().bx, 65);
}

#[test]
fn test_print_pointer_as_hex() {
    let mut r = Runtime::default();
    r.enter(">>>>>>>>>>>>$");
    assert_eq!(exec(&mut r), "c\n");
}

#[test]
fn test_loop_runs_pointer_count_times() {
    let mut r = Runtime::default();
    r.enter(">>>(+)");
    assert_eq!(exec(&mut r), "");
    assert_eq!(r.registers().bx, 3);
    assert_eq!(r.registers().cx, 0);
}

#[test]
fn test_loop_body_output() {
    let mut r = Runtime::default();
    r.enter("#*>>>>>\"\"(.)");
    assert_eq!(exec(&mut r), "*****");
}

#[test]
fn test_jump_forward_skips_by_pointer() {
    // `]` lands on pc + cx, then the trailing increment; the first
    // halt at position 2 is skipped entirely.
    let mut r = Runtime::default();
    r.enter(">]=++");
    assert_eq!(exec(&mut r), "");
    assert_eq!(r.registers().bx, 2);
}

#[test]
fn test_jump_backward_re_executes_and_ends() {
    // Runs until pc - cx wraps below zero, which falls off the
    // program and ends the run.
    let mut r = Runtime::default();
    r.enter(">>[");
    assert_eq!(exec(&mut r), "");
    assert_eq!(r.registers().cx, 5);
}

#[test]
fn test_jump_pointer_lands_past_target() {
    // `&` resumes at cx + 1 after the trailing increment. With cx = 9
    // (tab, swapped in), the jump at position 3 clears all six halts
    // and lands on the `+` at position 10.
    let mut r = Runtime::default();
    r.enter("#\t\"&======+");
    assert_eq!(exec(&mut r), "");
    assert_eq!(r.registers().bx, 1);
    assert_eq!(r.registers().cx, 9);
}

#[test]
fn test_branch_not_taken_falls_through() {
    let mut r = Runtime::default();
    r.enter("#B%A.");
    assert_eq!(exec(&mut r), "B");
}

#[test]
fn test_branch_taken_jumps_to_pointer() {
    // cx is 3 after the swap; the taken branch lands back on the
    // swap opcode and the print is never reached.
    let mut r = Runtime::default();
    r.enter("+++\"#A%A.");
    assert_eq!(exec(&mut r), "");
    assert_eq!(r.registers().bx, 65);
    assert_eq!(r.registers().cx, 65);
}

#[test]
fn test_unknown_opcode_reports_and_continues() {
    let mut r = Runtime::default();
    r.enter("+++++?+");
    assert_eq!(exec(&mut r), "Error: Unknown command: '?' at position: 5\n");
    assert_eq!(r.registers().bx, 6);
}

#[test]
fn test_whitespace_is_skipped() {
    let mut r = Runtime::default();
    r.enter("++ ++\n+");
    assert_eq!(exec(&mut r), "");
    assert_eq!(r.registers().bx, 5);
}

#[test]
fn test_stack_underflow_is_fatal() {
    let mut r = Runtime::default();
    r.enter("{");
    assert_eq!(exec(&mut r), "STACK UNDERFLOW AT POSITION 0\n");
}

#[test]
fn test_stack_overflow_is_fatal() {
    // 500 pushed words fill the 1000 byte stack; the 501st faults.
    let mut r = Runtime::default();
    r.enter(&"}".repeat(501));
    assert_eq!(exec(&mut r), "STACK OVERFLOW AT POSITION 500\n");
}

#[test]
fn test_truncated_literal_is_fatal() {
    let mut r = Runtime::new(Source::new("#"));
    assert_eq!(exec(&mut r), "UNEXPECTED END OF PROGRAM '#' AT POSITION 0\n");
}

#[test]
fn test_read_waits_for_input() {
    let mut r = Runtime::new(Source::new(",.="));
    assert_eq!(exec(&mut r), "");
    r.enter("X");
    assert_eq!(exec(&mut r), "X");
    assert_eq!(r.registers().bx, 'X' as u16);
}

#[test]
fn test_read_at_end_of_input_yields_sentinel() {
    let mut r = Runtime::new(Source::new(","));
    r.close_input();
    assert_eq!(exec(&mut r), "");
    assert_eq!(r.registers().bx, 0xFFFF);
}

#[test]
fn test_direct_line_resets_machine_state() {
    let mut r = Runtime::default();
    r.enter("+++>>}");
    assert_eq!(exec(&mut r), "");
    r.enter("");
    assert_eq!(exec(&mut r), "");
    assert_eq!(r.registers().bx, 0);
    assert_eq!(r.registers().cx, 0);
    assert!(r.stack().is_empty());
}

#[test]
fn test_interrupt_reports_break() {
    let mut r = Runtime::new(Source::new(","));
    assert_eq!(exec(&mut r), "");
    r.interrupt();
    assert_eq!(exec(&mut r), "BREAK AT POSITION 0\n");
}
