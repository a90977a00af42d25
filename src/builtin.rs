use crate::command::{CommandFactory, ExecutableCommand, ExitCode};
use crate::env::Environment;
use crate::interpreter::Factory;
use crate::io_adapters::{ask, ask_optional, parse_number, read_line};
use crate::tasks::calculator::{self, Operator};
use crate::tasks::guess::{GuessingGame, Hint};
use crate::tasks::products::{self, ProductFilter};
use crate::tasks::{
    base_convert, caesar, clock, discount, fibonacci, number_stats, password, primes, sequence,
    temperature, test_data, text_analyzer, text_stats, triangle, user_validation,
};
use anyhow::{Context, Result, bail};
use argh::{EarlyExit, FromArgs};
use std::fs;
use std::io::{BufRead, Write};
use tracing::debug;

/// Built-in commands known to the interpreter at compile time.
///
/// Builtins are parsed using the [`argh`] crate (`FromArgs`) and executed directly
/// in-process.
pub(crate) trait BuiltinCommand: Sized + FromArgs {
    /// Canonical name of the command, e.g. "caesar" or "primes".
    fn name() -> &'static str;

    /// One-line summary for `help`.
    fn about() -> &'static str;

    /// Executes the command using provided IO streams and environment.
    ///
    /// An `Err` is reported as a one-line message and exit code 1.
    fn execute(
        self,
        stdin: &mut dyn BufRead,
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<ExitCode>;
}

impl<T: BuiltinCommand> ExecutableCommand for T {
    fn execute(
        self: Box<Self>,
        stdin: &mut dyn BufRead,
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<ExitCode> {
        match T::execute(*self, stdin, stdout, env) {
            Ok(x) => Ok(x),
            Err(e) => {
                debug!(command = T::name(), error = %e, "input rejected");
                writeln!(stdout, "{}: {:#}", T::name(), e)?;
                Ok(1)
            }
        }
    }
}

struct InvalidArgs {
    output: String,
    is_error: bool,
}

impl ExecutableCommand for InvalidArgs {
    fn execute(
        self: Box<Self>,
        _stdin: &mut dyn BufRead,
        stdout: &mut dyn Write,
        _env: &mut Environment,
    ) -> Result<ExitCode> {
        stdout.write_all(self.output.as_bytes())?;
        if !self.output.ends_with('\n') {
            writeln!(stdout)?;
        }
        Ok(if self.is_error { 1 } else { 0 })
    }
}

impl<T: BuiltinCommand + 'static> CommandFactory for Factory<T> {
    fn name(&self) -> &'static str {
        T::name()
    }

    fn about(&self) -> &'static str {
        T::about()
    }

    fn try_create(&self, name: &str, args: &[&str]) -> Option<Box<dyn ExecutableCommand>> {
        if name == T::name() {
            Some(match T::from_args(&[name], args) {
                Ok(cmd) => Box::new(cmd),
                Err(EarlyExit { output, status }) => Box::new(InvalidArgs {
                    output,
                    is_error: status.is_err(),
                }),
            })
        } else {
            None
        }
    }
}

/// Words given on the command line, or one line of input when there are none.
fn words_or_line(
    words: Vec<String>,
    stdin: &mut dyn BufRead,
    stdout: &mut dyn Write,
    env: &Environment,
    message: &str,
) -> Result<String> {
    if words.is_empty() {
        ask(stdin, stdout, env, message)
    } else {
        Ok(words.join(" "))
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes" | "да")
}

fn join_numbers<T: ToString>(values: &[T], separator: &str) -> String {
    values
        .iter()
        .map(T::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

#[derive(FromArgs)]
/// Encrypt or decrypt text with the Caesar cipher.
/// Only Latin letters are shifted; everything else is copied as is.
pub struct Caesar {
    #[argh(option, short = 'k')]
    /// shift key, any integer; prompted when omitted
    pub key: Option<i64>,

    #[argh(switch, short = 'd')]
    /// decrypt instead of encrypting
    pub decode: bool,

    #[argh(switch, short = 'r')]
    /// print the encrypted text followed by its decryption
    pub round_trip: bool,

    #[argh(positional, greedy)]
    /// text to process; one line is read from input when omitted
    pub text: Vec<String>,
}

impl BuiltinCommand for Caesar {
    fn name() -> &'static str {
        "caesar"
    }

    fn about() -> &'static str {
        "Caesar cipher encryption and decryption"
    }

    fn execute(
        self,
        stdin: &mut dyn BufRead,
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<ExitCode> {
        let text = words_or_line(self.text, stdin, stdout, env, "text: ")?;
        let key = match self.key {
            Some(k) => k,
            None => parse_number(&ask(stdin, stdout, env, "key: ")?, "key")?,
        };

        if self.round_trip {
            let encrypted = caesar::encode(&text, key);
            writeln!(stdout, "encrypted: {}", encrypted)?;
            writeln!(stdout, "decrypted: {}", caesar::decode(&encrypted, key))?;
        } else if self.decode {
            writeln!(stdout, "{}", caesar::decode(&text, key))?;
        } else {
            writeln!(stdout, "{}", caesar::encode(&text, key))?;
        }
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Filter a product catalog by price range and category.
/// Without --catalog a small built-in catalog is used.
pub struct Products {
    #[argh(option)]
    /// keep products costing at least this much
    pub min_price: Option<f64>,

    #[argh(option)]
    /// keep products costing at most this much
    pub max_price: Option<f64>,

    #[argh(option, short = 'c')]
    /// keep products of this category only
    pub category: Option<String>,

    #[argh(option)]
    /// file with one `name,price,category` product per line
    pub catalog: Option<String>,

    #[argh(switch, short = 'i')]
    /// ask for each constraint instead of reading options
    pub interactive: bool,
}

impl Products {
    fn ask_filter(
        stdin: &mut dyn BufRead,
        stdout: &mut dyn Write,
        env: &Environment,
    ) -> Result<ProductFilter> {
        let min_price = ask_optional(stdin, stdout, env, "minimum price (Enter to skip): ")?
            .map(|s| parse_number(&s, "minimum price"))
            .transpose()?;
        let max_price = ask_optional(stdin, stdout, env, "maximum price (Enter to skip): ")?
            .map(|s| parse_number(&s, "maximum price"))
            .transpose()?;
        let category = ask_optional(stdin, stdout, env, "category (Enter to skip): ")?;
        Ok(ProductFilter {
            min_price,
            max_price,
            category,
        })
    }
}

impl BuiltinCommand for Products {
    fn name() -> &'static str {
        "products"
    }

    fn about() -> &'static str {
        "filter products by price and category"
    }

    fn execute(
        self,
        stdin: &mut dyn BufRead,
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<ExitCode> {
        let catalog = match &self.catalog {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("can't read catalog {}", path))?;
                products::parse_catalog(&text)?
            }
            None => products::sample_catalog(),
        };

        let filter = if self.interactive {
            Self::ask_filter(stdin, stdout, env)?
        } else {
            ProductFilter {
                min_price: self.min_price,
                max_price: self.max_price,
                category: self.category,
            }
        };
        debug!(?filter, products = catalog.len(), "filtering catalog");

        let found = products::filter_products(&catalog, &filter);
        if found.is_empty() {
            writeln!(stdout, "no products match")?;
        }
        for p in found {
            writeln!(stdout, "  {} - {} - {}", p.name, p.price, p.category)?;
        }
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Compute the discount and final price of a purchase.
pub struct Discount {
    #[argh(positional)]
    /// purchase amount; the amount and customer status are prompted when omitted
    pub amount: Option<f64>,

    #[argh(switch, short = 'r')]
    /// the buyer is a regular customer (+3%)
    pub regular: bool,
}

impl BuiltinCommand for Discount {
    fn name() -> &'static str {
        "discount"
    }

    fn about() -> &'static str {
        "discount calculator"
    }

    fn execute(
        self,
        stdin: &mut dyn BufRead,
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<ExitCode> {
        let (amount, regular) = match self.amount {
            Some(amount) => (amount, self.regular),
            None => {
                let amount = parse_number(&ask(stdin, stdout, env, "purchase amount: ")?, "amount")?;
                let answer = ask(stdin, stdout, env, "regular customer? (yes/no): ")?;
                (amount, self.regular || is_yes(&answer))
            }
        };
        if !amount.is_finite() || amount < 0.0 {
            bail!("amount must be a non-negative number");
        }

        let quote = discount::quote(amount, regular);
        if quote.percent > 0 {
            writeln!(stdout, "discount: {}%", quote.percent)?;
        } else {
            writeln!(stdout, "no discount")?;
        }
        writeln!(stdout, "total: {:.2}", quote.total)?;
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Check a password against the strength rules.
pub struct Password {
    #[argh(positional)]
    /// password to check; prompted when omitted
    pub password: Option<String>,
}

impl BuiltinCommand for Password {
    fn name() -> &'static str {
        "password"
    }

    fn about() -> &'static str {
        "password strength checker"
    }

    fn execute(
        self,
        stdin: &mut dyn BufRead,
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<ExitCode> {
        let candidate = match self.password {
            Some(p) => p,
            None => ask(stdin, stdout, env, "password: ")?,
        };
        password::check_password(&candidate)?;
        writeln!(stdout, "password is strong")?;
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Convert a temperature between Celsius and Fahrenheit.
pub struct Temperature {
    #[argh(positional, greedy)]
    /// value then scale (C or F); whichever is missing is prompted; put `--` before negative values
    pub reading: Vec<String>,
}

impl BuiltinCommand for Temperature {
    fn name() -> &'static str {
        "temperature"
    }

    fn about() -> &'static str {
        "Celsius/Fahrenheit converter"
    }

    fn execute(
        self,
        stdin: &mut dyn BufRead,
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<ExitCode> {
        let mut words = self.reading.into_iter();
        let value = words.next();
        let raw_scale = words.next();
        if let Some(extra) = words.next() {
            bail!("unexpected argument '{}', expected VALUE and SCALE", extra);
        }

        let value: f64 = match value {
            Some(v) => parse_number(&v, "temperature")?,
            None => parse_number(&ask(stdin, stdout, env, "temperature: ")?, "temperature")?,
        };
        let raw_scale = match raw_scale {
            Some(s) => s,
            None => ask(stdin, stdout, env, "scale (C/F): ")?,
        };
        let scale: temperature::Scale = raw_scale.parse()?;

        writeln!(
            stdout,
            "{}°{} = {:.1}°{}",
            value,
            scale.symbol(),
            temperature::convert(value, scale),
            scale.other().symbol()
        )?;
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Count characters, words and vowels of a text.
pub struct TextStatsCmd {
    #[argh(positional, greedy)]
    /// text to inspect; one line is read from input when omitted
    pub text: Vec<String>,
}

impl BuiltinCommand for TextStatsCmd {
    fn name() -> &'static str {
        "textstats"
    }

    fn about() -> &'static str {
        "character, word and vowel counts"
    }

    fn execute(
        self,
        stdin: &mut dyn BufRead,
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<ExitCode> {
        let text = words_or_line(self.text, stdin, stdout, env, "text: ")?;
        let stats = text_stats::text_stats(&text);
        writeln!(stdout, "characters: {}", stats.characters)?;
        writeln!(stdout, "words: {}", stats.words)?;
        writeln!(stdout, "vowels: {}", stats.vowels)?;
        Ok(0)
    }
}

#[derive(FromArgs)]
/// List the prime numbers from 2 to N.
pub struct Primes {
    #[argh(positional)]
    /// upper bound, inclusive; prompted when omitted
    pub n: Option<u64>,
}

impl BuiltinCommand for Primes {
    fn name() -> &'static str {
        "primes"
    }

    fn about() -> &'static str {
        "prime numbers up to N"
    }

    fn execute(
        self,
        stdin: &mut dyn BufRead,
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<ExitCode> {
        let n = match self.n {
            Some(n) => n,
            None => parse_number(&ask(stdin, stdout, env, "N: ")?, "N")?,
        };
        let found = primes::primes_up_to(n);
        writeln!(stdout, "primes from 2 to {}:", n)?;
        if found.is_empty() {
            writeln!(stdout, "(none)")?;
        } else {
            writeln!(stdout, "{}", join_numbers(&found, " "))?;
        }
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Guess the secret number; every line of input is one guess.
pub struct Guess {
    #[argh(option, default = "1")]
    /// smallest possible secret (default 1)
    pub min: i64,

    #[argh(option, default = "100")]
    /// largest possible secret (default 100)
    pub max: i64,

    #[argh(option)]
    /// give up after this many attempts; unlimited when omitted
    pub attempts: Option<u32>,
}

impl BuiltinCommand for Guess {
    fn name() -> &'static str {
        "guess"
    }

    fn about() -> &'static str {
        "number guessing game"
    }

    fn execute(
        self,
        stdin: &mut dyn BufRead,
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<ExitCode> {
        if self.min > self.max {
            bail!("empty range {}..{}", self.min, self.max);
        }
        if self.attempts == Some(0) {
            bail!("attempts must be positive");
        }

        let mut game = GuessingGame::random(env.rng(), self.min..=self.max, self.attempts);
        debug!(secret = game.secret(), "game started");
        writeln!(
            stdout,
            "guess a number from {} to {}",
            game.range().start(),
            game.range().end()
        )?;
        if let Some(n) = self.attempts {
            writeln!(stdout, "attempts allowed: {}", n)?;
        }

        loop {
            let message = format!("attempt {}: ", game.attempts() + 1);
            let Some(line) = read_line(stdin, stdout, env, &message)? else {
                bail!("input ended, the number was {}", game.secret());
            };
            let Ok(guess) = line.trim().parse::<i64>() else {
                writeln!(stdout, "please enter an integer")?;
                continue;
            };

            match game.guess(guess) {
                Hint::Higher => writeln!(stdout, "higher")?,
                Hint::Lower => writeln!(stdout, "lower")?,
                Hint::Correct => {
                    writeln!(
                        stdout,
                        "correct! the number was {}, found in {} attempts",
                        game.secret(),
                        game.attempts()
                    )?;
                    return Ok(0);
                }
            }

            if game.is_exhausted() {
                writeln!(stdout, "out of attempts, the number was {}", game.secret())?;
                return Ok(1);
            }
        }
    }
}

#[derive(FromArgs)]
/// Print the first K Fibonacci numbers.
pub struct Fibonacci {
    #[argh(positional)]
    /// number of terms; prompted when omitted
    pub count: Option<i64>,
}

impl BuiltinCommand for Fibonacci {
    fn name() -> &'static str {
        "fibonacci"
    }

    fn about() -> &'static str {
        "Fibonacci sequence generator"
    }

    fn execute(
        self,
        stdin: &mut dyn BufRead,
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<ExitCode> {
        let count = match self.count {
            Some(k) => k,
            None => parse_number(&ask(stdin, stdout, env, "K: ")?, "K")?,
        };
        let count = usize::try_from(count).map_err(|_| fibonacci::FibonacciError::NotPositive)?;
        let terms = fibonacci::fibonacci(count)?;
        writeln!(stdout, "fibonacci: {}", join_numbers(&terms, ", "))?;
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Generate random test values.
pub struct TestData {
    #[argh(positional)]
    /// kind of values: number, string or boolean
    pub kind: String,

    #[argh(positional)]
    /// how many values to generate (default 5)
    pub count: Option<usize>,
}

impl BuiltinCommand for TestData {
    fn name() -> &'static str {
        "testdata"
    }

    fn about() -> &'static str {
        "random test data generator"
    }

    fn execute(
        self,
        _stdin: &mut dyn BufRead,
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<ExitCode> {
        let kind: test_data::DataKind = self.kind.parse()?;
        let count = self.count.unwrap_or(5);
        if count == 0 {
            bail!("count must be positive");
        }
        let data = test_data::generate(kind, count, env.rng())?;
        writeln!(stdout, "{}", test_data::format_list(&data))?;
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Print an arithmetic or geometric progression.
pub struct Sequence {
    #[argh(positional)]
    /// arithmetic or geometric
    pub kind: String,

    #[argh(positional)]
    /// first element
    pub first: f64,

    #[argh(positional)]
    /// difference (arithmetic) or ratio (geometric)
    pub step: f64,

    #[argh(positional)]
    /// number of elements
    pub count: usize,
}

impl BuiltinCommand for Sequence {
    fn name() -> &'static str {
        "sequence"
    }

    fn about() -> &'static str {
        "arithmetic and geometric progressions"
    }

    fn execute(
        self,
        _stdin: &mut dyn BufRead,
        stdout: &mut dyn Write,
        _env: &mut Environment,
    ) -> Result<ExitCode> {
        let kind: sequence::Progression = self.kind.parse()?;
        let values = sequence::generate_sequence(kind, self.first, self.step, self.count)?;
        writeln!(stdout, "[{}]", join_numbers(&values, ", "))?;
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Split a text into sentences and report its statistics.
pub struct Analyze {
    #[argh(positional, greedy)]
    /// text to analyze; one line is read from input when omitted
    pub text: Vec<String>,
}

impl BuiltinCommand for Analyze {
    fn name() -> &'static str {
        "analyze"
    }

    fn about() -> &'static str {
        "sentence-level text analyzer"
    }

    fn execute(
        self,
        stdin: &mut dyn BufRead,
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<ExitCode> {
        let text = words_or_line(self.text, stdin, stdout, env, "text: ")?;
        let report = text_analyzer::analyze_text(&text);
        writeln!(stdout, "characters: {}", report.characters)?;
        writeln!(stdout, "words: {}", report.words)?;
        writeln!(stdout, "sentences: {}", report.sentences)?;
        writeln!(stdout, "longest sentence: '{}'", report.longest)?;
        writeln!(stdout, "shortest sentence: '{}'", report.shortest)?;
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Classify a triangle by the lengths of its sides.
pub struct Triangle {
    #[argh(positional)]
    /// side A
    pub a: f64,

    #[argh(positional)]
    /// side B
    pub b: f64,

    #[argh(positional)]
    /// side C
    pub c: f64,
}

impl BuiltinCommand for Triangle {
    fn name() -> &'static str {
        "triangle"
    }

    fn about() -> &'static str {
        "triangle classifier"
    }

    fn execute(
        self,
        _stdin: &mut dyn BufRead,
        stdout: &mut dyn Write,
        _env: &mut Environment,
    ) -> Result<ExitCode> {
        writeln!(stdout, "{}", triangle::classify(self.a, self.b, self.c))?;
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Count, sum, average, maximum and minimum of integers.
pub struct NumStats {
    #[argh(positional, greedy)]
    /// numbers to summarize; read one per line until 0 when omitted
    pub numbers: Vec<i64>,
}

impl BuiltinCommand for NumStats {
    fn name() -> &'static str {
        "numstats"
    }

    fn about() -> &'static str {
        "statistics over a list of integers"
    }

    fn execute(
        self,
        stdin: &mut dyn BufRead,
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<ExitCode> {
        let mut numbers = self.numbers;
        if numbers.is_empty() {
            while let Some(line) = read_line(stdin, stdout, env, "number (0 to finish): ")? {
                match line.trim().parse::<i64>() {
                    Ok(0) => break,
                    Ok(n) => numbers.push(n),
                    Err(_) => writeln!(stdout, "not an integer: '{}'", line.trim())?,
                }
            }
        }

        let Some(summary) = number_stats::summarize(&numbers) else {
            writeln!(stdout, "no numbers entered")?;
            return Ok(0);
        };
        writeln!(stdout, "count: {}", summary.count)?;
        writeln!(stdout, "sum: {}", summary.sum)?;
        writeln!(stdout, "mean: {:.2}", summary.mean)?;
        writeln!(stdout, "max: {}", summary.max)?;
        writeln!(stdout, "min: {}", summary.min)?;
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Evaluate `A OP B` with OP one of + - * / and remember the result.
pub struct Calc {
    #[argh(positional, greedy)]
    /// the expression as three words, e.g. `7 * 4`; start with `--` when A is negative
    pub expression: Vec<String>,
}

impl BuiltinCommand for Calc {
    fn name() -> &'static str {
        "calc"
    }

    fn about() -> &'static str {
        "calculator that remembers the last 3 operations"
    }

    fn execute(
        self,
        _stdin: &mut dyn BufRead,
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<ExitCode> {
        let [a, op, b] = self.expression.as_slice() else {
            bail!("expected an expression like `5 + 3`");
        };
        let a: f64 = parse_number(a, "left operand")?;
        let op: Operator = op.parse()?;
        let b: f64 = parse_number(b, "right operand")?;

        let result = calculator::calculate(a, op, b)?;
        env.history.record(a, op, b, result);
        writeln!(stdout, "{} {} {} = {}", a, op.symbol(), b, result)?;
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Show the last calculator operations, newest first.
pub struct HistoryCmd {}

impl BuiltinCommand for HistoryCmd {
    fn name() -> &'static str {
        "history"
    }

    fn about() -> &'static str {
        "recent calculator operations"
    }

    fn execute(
        self,
        _stdin: &mut dyn BufRead,
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<ExitCode> {
        if env.history.is_empty() {
            writeln!(stdout, "history is empty")?;
            return Ok(0);
        }
        writeln!(stdout, "recent operations:")?;
        for (i, entry) in env.history.entries().enumerate() {
            writeln!(stdout, "{}. {}", i + 1, entry)?;
        }
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Convert a number between bases 2 to 36.
pub struct Base {
    #[argh(positional)]
    /// number to convert, e.g. FF
    pub number: String,

    #[argh(positional)]
    /// base the number is written in
    pub from: u32,

    #[argh(positional)]
    /// base to convert to
    pub to: u32,
}

impl BuiltinCommand for Base {
    fn name() -> &'static str {
        "base"
    }

    fn about() -> &'static str {
        "number base converter"
    }

    fn execute(
        self,
        _stdin: &mut dyn BufRead,
        stdout: &mut dyn Write,
        _env: &mut Environment,
    ) -> Result<ExitCode> {
        let converted = base_convert::convert_base(&self.number, self.from, self.to)?;
        writeln!(stdout, "{}", converted)?;
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Add minutes to a HH:MM time of day.
pub struct AddTime {
    #[argh(positional)]
    /// time of day, HH:MM
    pub time: String,

    #[argh(positional)]
    /// minutes to add; start with `--` to go backwards
    pub minutes: i64,
}

impl BuiltinCommand for AddTime {
    fn name() -> &'static str {
        "addtime"
    }

    fn about() -> &'static str {
        "clock time calculator"
    }

    fn execute(
        self,
        _stdin: &mut dyn BufRead,
        stdout: &mut dyn Write,
        _env: &mut Environment,
    ) -> Result<ExitCode> {
        let result = clock::add_minutes(&self.time, self.minutes)?;
        writeln!(stdout, "{} + {} min = {}", self.time, self.minutes, result)?;
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Validate a user record and list every problem found.
pub struct Validate {
    #[argh(positional)]
    /// user name
    pub name: String,

    #[argh(positional)]
    /// age in years
    pub age: f64,

    #[argh(positional)]
    /// email address
    pub email: String,
}

impl BuiltinCommand for Validate {
    fn name() -> &'static str {
        "validate"
    }

    fn about() -> &'static str {
        "user data validator"
    }

    fn execute(
        self,
        _stdin: &mut dyn BufRead,
        stdout: &mut dyn Write,
        _env: &mut Environment,
    ) -> Result<ExitCode> {
        let issues = user_validation::validate_user(&self.name, self.age, &self.email);
        if issues.is_empty() {
            writeln!(stdout, "valid")?;
            return Ok(0);
        }
        writeln!(stdout, "invalid:")?;
        for issue in issues {
            writeln!(stdout, "  - {}", issue)?;
        }
        Ok(1)
    }
}

#[derive(FromArgs)]
/// Leave the interactive prompt.
pub struct Exit {}

impl BuiltinCommand for Exit {
    fn name() -> &'static str {
        "exit"
    }

    fn about() -> &'static str {
        "leave the interactive prompt"
    }

    fn execute(
        self,
        _stdin: &mut dyn BufRead,
        _stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<ExitCode> {
        env.should_exit = true;
        Ok(0)
    }
}
