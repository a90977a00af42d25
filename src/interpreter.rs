use crate::command::{CommandFactory, ExitCode};
use crate::env::Environment;
use crate::lexer;
use crate::parser::{self, CommandLine};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::fmt;
use std::io::{BufRead, Cursor, IsTerminal, Write};
use tracing::{debug, warn};

/// Factory allows creating instances of ExecutableCommand.
///
/// Only support commands defined in this crate, see `builtin`.
pub(crate) struct Factory<T> {
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for Factory<T> {
    fn default() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

/// No factory knows the requested command name.
#[derive(Debug)]
pub struct CommandNotFound(pub String);

impl fmt::Display for CommandNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "command not found: {}", self.0)
    }
}

impl std::error::Error for CommandNotFound {}

/// Runs task commands by name, alone, in pipelines or from an interactive prompt.
///
/// The interpreter maintains an [`Environment`] and a list of [`CommandFactory`] objects
/// that are queried to create commands by name. See [`Default`] for the factories
/// included out of the box.
///
/// Example
/// ```
/// use practice_tasks::Interpreter;
/// let mut sh = Interpreter::default();
/// let code = sh.run("primes", &["10"]).unwrap();
/// assert_eq!(code, 0);
/// ```
pub struct Interpreter {
    env: Environment,
    commands: Vec<Box<dyn CommandFactory>>,
}

impl Interpreter {
    /// Create a new interpreter with a custom set of command factories.
    pub fn new(commands: Vec<Box<dyn CommandFactory>>) -> Self {
        Self::with_env(Environment::from_process_env(), commands)
    }

    /// Create an interpreter around an existing environment.
    pub fn with_env(env: Environment, commands: Vec<Box<dyn CommandFactory>>) -> Self {
        Self { env, commands }
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Run a single command invocation by name with arguments on the process streams.
    ///
    /// Returns the command's exit code, or [`CommandNotFound`] when no factory
    /// knows `name`.
    pub fn run(&mut self, name: &str, args: &[&str]) -> anyhow::Result<ExitCode> {
        self.env.echo_prompts = std::io::stdin().is_terminal();
        let mut stdin = std::io::stdin().lock();
        let mut stdout = std::io::stdout().lock();
        self.run_with_io(name, args, &mut stdin, &mut stdout)
    }

    /// Run a single command with explicit input and output streams.
    pub fn run_with_io(
        &mut self,
        name: &str,
        args: &[&str],
        stdin: &mut dyn BufRead,
        stdout: &mut dyn Write,
    ) -> anyhow::Result<ExitCode> {
        if name == "help" {
            self.write_help(stdout)?;
            return Ok(0);
        }
        for factory in &self.commands {
            if let Some(cmd) = factory.try_create(name, args) {
                debug!(name, ?args, "running command");
                let code = cmd.execute(stdin, stdout, &mut self.env)?;
                stdout.flush()?;
                return Ok(code);
            }
        }
        Err(CommandNotFound(name.to_string()).into())
    }

    /// Lex, parse and execute one input line, writing the final output to `stdout`.
    ///
    /// The first stage reads the process standard input.
    pub fn execute_line(&mut self, line: &str, stdout: &mut dyn Write) -> anyhow::Result<ExitCode> {
        let interactive = std::io::stdin().is_terminal();
        self.execute_line_with_io(line, &mut std::io::stdin().lock(), interactive, stdout)
    }

    /// Execute one input line with explicit streams.
    ///
    /// Each pipeline stage reads the buffered output of the previous one. The first
    /// stage reads `stdin` and the last stage writes to `stdout` directly. Prompts are
    /// only echoed by a stage that reads `stdin` while it is `interactive` and writes
    /// to `stdout`, so a buffered stage never passes its prompts on as data. The exit
    /// code of the line is the exit code of its last stage.
    pub fn execute_line_with_io(
        &mut self,
        line: &str,
        stdin: &mut dyn BufRead,
        interactive: bool,
        stdout: &mut dyn Write,
    ) -> anyhow::Result<ExitCode> {
        let tokens = lexer::split_into_tokens(line)?;
        let pipeline = parser::construct_pipeline(tokens)?;

        let stages = pipeline.commands.len();
        let mut previous_output: Option<Vec<u8>> = None;
        let mut last_exit: ExitCode = 0;

        for (i, stage) in pipeline.commands.iter().enumerate() {
            let is_last = i + 1 == stages;
            debug!(stage = i, name = %stage.name, "pipeline stage");

            let mut buffer = Vec::new();
            let out: &mut dyn Write = if is_last { &mut *stdout } else { &mut buffer };

            last_exit = match previous_output.take() {
                Some(input) => {
                    self.env.echo_prompts = false;
                    self.run_stage(stage, &mut Cursor::new(input), out)?
                }
                None => {
                    self.env.echo_prompts = interactive && is_last;
                    self.run_stage(stage, &mut *stdin, out)?
                }
            };

            if !is_last {
                previous_output = Some(buffer);
            }
        }

        Ok(last_exit)
    }

    fn run_stage(
        &mut self,
        stage: &CommandLine,
        stdin: &mut dyn BufRead,
        stdout: &mut dyn Write,
    ) -> anyhow::Result<ExitCode> {
        self.run_with_io(&stage.name, &stage.args_ref(), stdin, stdout)
    }

    /// Print every known command with its summary.
    pub fn write_help(&self, stdout: &mut dyn Write) -> std::io::Result<()> {
        let width = self
            .commands
            .iter()
            .map(|f| f.name().len())
            .max()
            .unwrap_or(0)
            .max("help".len());
        writeln!(stdout, "available commands:")?;
        for factory in &self.commands {
            writeln!(stdout, "  {:width$}  {}", factory.name(), factory.about())?;
        }
        writeln!(stdout, "  {:width$}  {}", "help", "list available commands")?;
        writeln!(stdout, "run `<command> --help` for its arguments")
    }

    /// Interactive Read-Eval-Print Loop.
    ///
    /// Stops on Ctrl-C, Ctrl-D or after the `exit` command.
    pub fn repl(&mut self) -> rustyline::Result<()> {
        let mut rl = DefaultEditor::new()?;

        while !self.env.should_exit {
            match rl.readline("tasks> ") {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    rl.add_history_entry(line.as_str())?;
                    let mut stdout = std::io::stdout().lock();
                    match self.execute_line(&line, &mut stdout) {
                        Ok(code) if code != 0 => debug!(code, "command failed"),
                        Ok(_) => {}
                        Err(e) => {
                            warn!(error = %e, "line rejected");
                            println!("{:#}", e);
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => break,
                Err(err) => return Err(err),
            }
        }

        Ok(())
    }
}

impl Default for Interpreter {
    /// Create an interpreter with every task command plus `exit`.
    fn default() -> Self {
        use crate::builtin::*;
        Self::new(vec![
            Box::new(Factory::<Caesar>::default()),
            Box::new(Factory::<Products>::default()),
            Box::new(Factory::<Discount>::default()),
            Box::new(Factory::<Password>::default()),
            Box::new(Factory::<Temperature>::default()),
            Box::new(Factory::<TextStatsCmd>::default()),
            Box::new(Factory::<Primes>::default()),
            Box::new(Factory::<Guess>::default()),
            Box::new(Factory::<Fibonacci>::default()),
            Box::new(Factory::<TestData>::default()),
            Box::new(Factory::<Sequence>::default()),
            Box::new(Factory::<Analyze>::default()),
            Box::new(Factory::<Triangle>::default()),
            Box::new(Factory::<NumStats>::default()),
            Box::new(Factory::<Calc>::default()),
            Box::new(Factory::<HistoryCmd>::default()),
            Box::new(Factory::<Base>::default()),
            Box::new(Factory::<AddTime>::default()),
            Box::new(Factory::<Validate>::default()),
            Box::new(Factory::<Exit>::default()),
        ])
    }
}

#[cfg(test)]
mod pipeline_tests {
    use crate::Interpreter;
    use crate::command::CommandFactory;
    use crate::env::Environment;
    use crate::interpreter::{CommandNotFound, Factory};
    use std::io::Cursor;

    fn interpreter() -> Interpreter {
        let factories: Vec<Box<dyn CommandFactory>> = vec![
            Box::new(Factory::<crate::builtin::Caesar>::default()),
            Box::new(Factory::<crate::builtin::TextStatsCmd>::default()),
            Box::new(Factory::<crate::builtin::Calc>::default()),
            Box::new(Factory::<crate::builtin::HistoryCmd>::default()),
            Box::new(Factory::<crate::builtin::Exit>::default()),
        ];
        Interpreter::with_env(Environment::with_seed(1), factories)
    }

    fn run_line(interp: &mut Interpreter, line: &str) -> (i32, String) {
        let mut out: Vec<u8> = Vec::new();
        let code = interp.execute_line(line, &mut out).unwrap();
        (code, String::from_utf8(out).expect("utf8"))
    }

    #[test]
    fn test_caesar_round_trip_through_pipe() {
        let mut interp = interpreter();
        let (code, out) = run_line(
            &mut interp,
            "caesar -k 3 'Hello World! ABCxyz' | caesar -d -k 3",
        );
        assert_eq!(code, 0);
        assert_eq!(out, "Hello World! ABCxyz\n");
    }

    #[test]
    fn test_encoded_text_feeds_statistics() {
        let mut interp = interpreter();
        let (code, out) = run_line(&mut interp, "caesar -k 1 'ab cd' | textstats");
        assert_eq!(code, 0);
        assert_eq!(out, "characters: 5\nwords: 2\nvowels: 1\n");
    }

    #[test]
    fn test_terminal_prompts_stay_out_of_pipes() {
        let mut interp = interpreter();
        let mut out = Vec::new();
        let mut typed = Cursor::new(b"ab\n".to_vec());
        let code = interp
            .execute_line_with_io("caesar -k 1 | textstats", &mut typed, true, &mut out)
            .unwrap();
        assert_eq!(code, 0);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "characters: 2\nwords: 1\nvowels: 0\n"
        );
    }

    #[test]
    fn test_terminal_prompts_echo_for_single_stage() {
        let mut interp = interpreter();
        let mut out = Vec::new();
        let mut typed = Cursor::new(b"ab\n".to_vec());
        interp
            .execute_line_with_io("caesar -k 1", &mut typed, true, &mut out)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "text: bc\n");
    }

    #[test]
    fn test_history_survives_between_lines() {
        let mut interp = interpreter();
        run_line(&mut interp, "calc 5 + 3");
        run_line(&mut interp, "calc 10 / 2");
        let (code, out) = run_line(&mut interp, "history");
        assert_eq!(code, 0);
        assert_eq!(out, "recent operations:\n1. 10 / 2 = 5\n2. 5 + 3 = 8\n");
    }

    #[test]
    fn test_failed_stage_sets_exit_code() {
        let mut interp = interpreter();
        let (code, out) = run_line(&mut interp, "calc 1 / 0");
        assert_eq!(code, 1);
        assert_eq!(out, "calc: division by zero\n");
    }

    #[test]
    fn test_unknown_command() {
        let mut interp = interpreter();
        let err = interp.execute_line("nope 1 2", &mut Vec::new()).unwrap_err();
        assert!(err.is::<CommandNotFound>());
        assert_eq!(err.to_string(), "command not found: nope");
    }

    #[test]
    fn test_syntax_errors_are_reported() {
        let mut interp = interpreter();
        let err = interp.execute_line("caesar 'open", &mut Vec::new()).unwrap_err();
        assert_eq!(err.to_string(), "unfinished quote");
        let err = interp.execute_line("caesar -k 1 x |", &mut Vec::new()).unwrap_err();
        assert_eq!(err.to_string(), "empty command in pipeline");
    }

    #[test]
    fn test_exit_sets_flag() {
        let mut interp = interpreter();
        let (code, _) = run_line(&mut interp, "exit");
        assert_eq!(code, 0);
        assert!(interp.env().should_exit);
    }

    #[test]
    fn test_help_lists_commands() {
        let mut interp = interpreter();
        let (code, out) = run_line(&mut interp, "help");
        assert_eq!(code, 0);
        assert!(out.starts_with("available commands:\n"));
        assert!(out.contains("  caesar "));
        assert!(out.contains("  history "));
        assert!(out.contains("  help "));
    }

    #[test]
    fn test_argh_help_is_not_an_error() {
        let mut interp = interpreter();
        let (code, out) = run_line(&mut interp, "caesar --help");
        assert_eq!(code, 0);
        assert!(out.contains("Usage: caesar"));
    }
}
