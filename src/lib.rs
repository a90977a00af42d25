//! A small collection of practice exercises exposed as shell-like commands.
//!
//! Every exercise lives in its own module under [`tasks`] as a pure function with no
//! I/O. The [`Interpreter`] wraps each exercise into a named command parsed with
//! [`argh`], so the exercises can be run one at a time from the command line, from an
//! interactive prompt, or chained together with `|`:
//!
//! ```
//! use practice_tasks::Interpreter;
//! let mut sh = Interpreter::default();
//! let mut out = Vec::new();
//! let code = sh.execute_line("caesar -k 3 Hello | caesar -d -k 3", &mut out).unwrap();
//! assert_eq!(code, 0);
//! assert_eq!(String::from_utf8(out).unwrap(), "Hello\n");
//! ```

mod builtin;
pub mod command;
pub mod env;
mod interpreter;
pub mod io_adapters;
mod lexer;
pub mod logging;
mod parser;
pub mod tasks;

/// Just a convenient re-export of the interactive command runner.
///
/// See [`Interpreter`] for the high-level API and examples.
pub use interpreter::{CommandNotFound, Interpreter};
