/*!
# Rust Terminal Module

The interactive interpreter. Each entered line is a complete program,
run against freshly reset machine state with the halt opcode appended,
so the session never carries registers or stack from one line to the
next. Ctrl-C interrupts a running program without leaving the session.

*/

extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::mach::{Event, Runtime};
use ansi_term::Style;
use linefeed::{Interface, ReadResult, Signal};
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub fn main() {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    if let Err(error) = main_loop(interrupted) {
        eprintln!("{}", error);
    }
}

fn main_loop(interrupted: Arc<AtomicBool>) -> std::io::Result<()> {
    let mut runtime = Runtime::default();
    let command = Interface::new("wuf")?;
    command.set_prompt("> ")?;
    let input = Interface::new("input")?;
    input.set_report_signal(Signal::Interrupt, true);
    println!("--Wuf++ interpreter--");

    let mut ran = false;
    loop {
        if interrupted.load(Ordering::SeqCst) {
            runtime.interrupt();
            interrupted.store(false, Ordering::SeqCst);
        };
        match runtime.execute(5000) {
            Event::Stopped => {
                if ran {
                    command.write_fmt(format_args!("\n"))?;
                    ran = false;
                }
                let string = match command.read_line()? {
                    ReadResult::Input(string) => string,
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                };
                if runtime.enter(&string) {
                    command.add_history_unique(string);
                }
                ran = true;
            }
            Event::Input => match input.read_line()? {
                ReadResult::Input(string) => {
                    runtime.enter(&string);
                }
                ReadResult::Signal(Signal::Interrupt) => {
                    input.set_buffer("")?;
                    input.lock_reader().cancel_read_line()?;
                    runtime.interrupt();
                }
                ReadResult::Signal(_) | ReadResult::Eof => runtime.close_input(),
            },
            Event::Errors(errors) => {
                for error in errors.iter() {
                    command.write_fmt(format_args!(
                        "{}\n",
                        Style::new().bold().paint(error.to_string())
                    ))?;
                }
            }
            Event::Running => {}
            Event::Print(s) => {
                command.write_fmt(format_args!("{}", s))?;
            }
        }
    }
    Ok(())
}
