use practice_tasks::{CommandNotFound, Interpreter, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut sh = Interpreter::default();

    let Some((name, rest)) = args.split_first() else {
        return match sh.repl() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("practice_tasks: {}", e);
                ExitCode::FAILURE
            }
        };
    };

    let rest: Vec<&str> = rest.iter().map(String::as_str).collect();
    match sh.run(name, &rest) {
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        Err(e) if e.is::<CommandNotFound>() => {
            eprintln!("{}", e);
            ExitCode::from(127)
        }
        Err(e) => {
            eprintln!("practice_tasks: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
