//! # Wuf++
//!
//! Command line front end: translate a source file to x86 assembly,
//! interpret a source file, or run the interactive interpreter.

extern crate ansi_term;
extern crate chrono;
use ansi_term::Style;
use std::fs::File;
use std::io::{ErrorKind, Write};
use wuf::lang::{Error, Source};
use wuf::mach::{codegen, Event, Runtime};
use wuf::{error, term};

const HELP: &str =
    "-s <source file> -o <output file> -h help -v version -c compile -i interpret \
     -? print syntax -I interpret without file";
const VERSION: &str = "Wuf++ Interpreter Compiler v0.1.0";
const ARCHITECTURES: &str = "Supported architectures: X86";
const SYNTAX: &str = "Syntax:
+ - increment main register
- - decrement main register
} - push main register
{ - pop main register
. - print main register
, - read to the main register
& - jump to location pointed by pointer
[ - pc = pc - cx
] - pc = pc + cx
! - invert main register
> - increment pointer
< - decrement pointer
$ - print pointer
#[char] - load char to the main register
( - loop start, decrement pointer and loop until pointer = 0
) - loop end
\" - swap registers
%[char] - compare main register with char, jump if equal to location pointed by pointer
= - halt
/ - add main register and pointer, bx = bx + cx
\\ - sub main register and pointer, bx = bx - cx
@ - load 0 to the main register
^ - swap bl with bh";

enum Mode {
    Compile,
    Interpret,
    Interactive,
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("Error: No arguments");
        eprintln!("Usage: {}", HELP);
        std::process::exit(1);
    }
    let mut mode = Mode::Compile;
    let mut source_name: Option<String> = None;
    let mut output_name: Option<String> = None;
    let mut args = args.iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" => println!("{}", HELP),
            "-v" => {
                println!("{}", VERSION);
                println!("{}", ARCHITECTURES);
            }
            "-?" => println!("{}", SYNTAX),
            "-c" => mode = Mode::Compile,
            "-i" => mode = Mode::Interpret,
            "-I" => mode = Mode::Interactive,
            "-s" => source_name = args.next().cloned(),
            "-o" => output_name = args.next().cloned(),
            unknown => {
                eprintln!("Error: Unknown argument: {}", unknown);
                eprintln!("Usage: {}", HELP);
                std::process::exit(1);
            }
        }
    }
    let result = match mode {
        Mode::Interactive => {
            term::main();
            Ok(())
        }
        Mode::Interpret => match source_name {
            Some(name) => interpret(&name),
            None => Ok(()),
        },
        Mode::Compile => match (source_name, output_name) {
            (Some(source), Some(output)) => compile(&source, &output),
            _ => Ok(()),
        },
    };
    if let Err(error) = result {
        report(&error);
        std::process::exit(1);
    }
}

fn report(error: &Error) {
    eprintln!("{}", Style::new().bold().paint(error.to_string()));
}

fn load(filename: &str) -> Result<Source, Error> {
    match std::fs::read_to_string(filename) {
        Ok(text) => Ok(Source::new(&text)),
        Err(error) => {
            let msg = error.to_string();
            match error.kind() {
                ErrorKind::NotFound => Err(error!(FileNotFound; msg.as_str())),
                _ => Err(error!(InternalError; msg.as_str())),
            }
        }
    }
}

fn compile(source_name: &str, output_name: &str) -> Result<(), Error> {
    let source = load(source_name)?;
    let assembly = codegen(&source)?;
    for error in assembly.errors.iter() {
        report(error);
    }
    let filename = format!("{}.asm", output_name);
    let mut file = match File::create(&filename) {
        Ok(file) => file,
        Err(error) => return Err(error!(InternalError; error.to_string().as_str())),
    };
    let stamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    if let Err(error) = writeln!(file, "; generated {}", stamp)
        .and_then(|_| write!(file, "{}", assembly))
    {
        return Err(error!(InternalError; error.to_string().as_str()));
    }
    println!("Compiled");
    Ok(())
}

fn interpret(source_name: &str) -> Result<(), Error> {
    let mut runtime = Runtime::new(load(source_name)?);
    let stdin = std::io::stdin();
    loop {
        match runtime.execute(5000) {
            Event::Stopped => break,
            Event::Running => {}
            Event::Print(s) => {
                print!("{}", s);
                std::io::stdout().flush().ok();
            }
            Event::Input => {
                let mut line = String::new();
                match stdin.read_line(&mut line) {
                    Ok(0) => runtime.close_input(),
                    Ok(_) => {
                        runtime.enter(line.trim_end_matches('\n'));
                    }
                    Err(error) => {
                        return Err(error!(InternalError; error.to_string().as_str()))
                    }
                }
            }
            Event::Errors(errors) => {
                for error in errors.iter() {
                    report(error);
                }
                break;
            }
        }
    }
    Ok(())
}
