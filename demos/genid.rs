//! Simple command that prints a batch of freshly generated identifiers

use std::{env, io, io::Write, process::ExitCode};

fn main() -> io::Result<ExitCode> {
    let mut count = 1usize;
    let mut canonical = false;
    for arg in env::args().skip(1) {
        if arg == "-c" || arg == "--canonical" {
            canonical = true;
        } else if let Ok(n) = arg.parse() {
            count = n;
        } else {
            eprintln!("genid: unexpected argument '{}'", arg);
            eprintln!("usage: genid [-c | --canonical] [count]");
            return Ok(ExitCode::FAILURE);
        }
    }

    let mut buf = io::BufWriter::new(io::stdout());
    for _ in 0..count {
        if canonical {
            writeln!(buf, "{}", uuid7_mono::uuid7())?;
        } else {
            writeln!(buf, "{}", uuid7_mono::uuid7_string())?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
