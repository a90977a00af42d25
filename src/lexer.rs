//! Lexical analysis of one interpreter input line.
//!
//! Words are separated by blanks. Single quotes keep their content verbatim, double
//! quotes allow `\"` and `\\` escapes, and a bare `|` separates pipeline stages.

use std::fmt;

/// Represents a token resulting from lexical analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A word with quotes already removed.
    Word(String),
    /// The pipe operator, `|`.
    PipeOp,
}

/// Errors that can occur during the lexical analysis process.
#[derive(Debug, PartialEq, Eq)]
pub enum LexingError {
    /// A closing quote (single or double) was not found.
    UnfinishedQuote,
    /// The line ends with a backslash.
    DanglingEscape,
}

impl fmt::Display for LexingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexingError::UnfinishedQuote => write!(f, "unfinished quote"),
            LexingError::DanglingEscape => write!(f, "line ends with a backslash"),
        }
    }
}

impl std::error::Error for LexingError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexingState {
    Start,
    ReadingWord,
    ReadingSingleQuote,
    ReadingDoubleQuote,
}

struct LexingFSM {
    input: Vec<char>,
    pos: usize,
    state: LexingState,
    buffer: String,
    // `''` still produces a word even though the buffer stays empty
    has_word: bool,
}

impl LexingFSM {
    fn new(line: &str) -> Self {
        LexingFSM {
            input: line.chars().collect(),
            pos: 0,
            state: LexingState::Start,
            buffer: String::new(),
            has_word: false,
        }
    }

    /// Performs lexical analysis on the input string and returns a vector of tokens.
    fn make_tokens(&mut self) -> Result<Vec<Token>, LexingError> {
        let mut out = Vec::new();

        while let Some(ch) = self.read_char() {
            match self.state {
                LexingState::Start => self.handle_start(ch, &mut out)?,
                LexingState::ReadingWord => self.handle_word(ch, &mut out)?,
                LexingState::ReadingSingleQuote => self.handle_single_quote(ch),
                LexingState::ReadingDoubleQuote => self.handle_double_quote(ch)?,
            }
        }

        match self.state {
            LexingState::ReadingSingleQuote | LexingState::ReadingDoubleQuote => {
                return Err(LexingError::UnfinishedQuote);
            }
            _ => {}
        }

        self.finish_word(&mut out);
        Ok(out)
    }

    fn read_char(&mut self) -> Option<char> {
        let ch = self.input.get(self.pos).copied();
        if ch.is_some() {
            self.pos += 1;
        }
        ch
    }

    fn handle_start(&mut self, ch: char, out: &mut Vec<Token>) -> Result<(), LexingError> {
        match ch {
            ' ' | '\t' => {}
            '|' => out.push(Token::PipeOp),
            _ => {
                self.state = LexingState::ReadingWord;
                self.handle_word(ch, out)?;
            }
        }
        Ok(())
    }

    fn handle_word(&mut self, ch: char, out: &mut Vec<Token>) -> Result<(), LexingError> {
        self.has_word = true;
        match ch {
            ' ' | '\t' => {
                self.finish_word(out);
                self.state = LexingState::Start;
            }
            '|' => {
                self.finish_word(out);
                out.push(Token::PipeOp);
                self.state = LexingState::Start;
            }
            '\'' => self.state = LexingState::ReadingSingleQuote,
            '"' => self.state = LexingState::ReadingDoubleQuote,
            '\\' => {
                let escaped = self.read_char().ok_or(LexingError::DanglingEscape)?;
                self.buffer.push(escaped);
            }
            c => self.buffer.push(c),
        }
        Ok(())
    }

    fn handle_single_quote(&mut self, ch: char) {
        match ch {
            '\'' => self.state = LexingState::ReadingWord,
            c => self.buffer.push(c),
        }
    }

    fn handle_double_quote(&mut self, ch: char) -> Result<(), LexingError> {
        match ch {
            '"' => self.state = LexingState::ReadingWord,
            '\\' => match self.read_char() {
                Some(c @ ('"' | '\\')) => self.buffer.push(c),
                Some(c) => {
                    self.buffer.push('\\');
                    self.buffer.push(c);
                }
                None => return Err(LexingError::UnfinishedQuote),
            },
            c => self.buffer.push(c),
        }
        Ok(())
    }

    fn finish_word(&mut self, out: &mut Vec<Token>) {
        if self.has_word {
            out.push(Token::Word(std::mem::take(&mut self.buffer)));
            self.has_word = false;
        }
    }
}

/// The main entry point function to perform lexical analysis.
///
/// Returns the tokens of `line`, or a `LexingError` if a quote is left open.
pub fn split_into_tokens(line: &str) -> Result<Vec<Token>, LexingError> {
    let mut lexer = LexingFSM::new(line);
    lexer.make_tokens()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Token {
        Token::Word(s.to_string())
    }

    #[test]
    fn test_plain_words() {
        let tokens = split_into_tokens("  caesar -k 3\thello  ").unwrap();
        assert_eq!(tokens, vec![word("caesar"), word("-k"), word("3"), word("hello")]);
    }

    #[test]
    fn test_quotes_keep_spaces_and_pipes() {
        let tokens = split_into_tokens(r#"analyze "Hi there! | ok?" 'a "b"'"#).unwrap();
        assert_eq!(
            tokens,
            vec![word("analyze"), word("Hi there! | ok?"), word(r#"a "b""#)]
        );
    }

    #[test]
    fn test_quoted_parts_join_into_one_word() {
        let tokens = split_into_tokens(r#"pre'fix'"ed" x''"#).unwrap();
        assert_eq!(tokens, vec![word("prefixed"), word("x")]);
    }

    #[test]
    fn test_empty_quotes_make_an_empty_word() {
        let tokens = split_into_tokens("products --category ''").unwrap();
        assert_eq!(tokens, vec![word("products"), word("--category"), word("")]);
    }

    #[test]
    fn test_pipe_with_and_without_spaces() {
        let tokens = split_into_tokens("a|b | c").unwrap();
        assert_eq!(
            tokens,
            vec![
                word("a"),
                Token::PipeOp,
                word("b"),
                Token::PipeOp,
                word("c")
            ]
        );
    }

    #[test]
    fn test_escapes() {
        let tokens = split_into_tokens(r#"a\ b "q\"x\n""#).unwrap();
        assert_eq!(tokens, vec![word("a b"), word("q\"x\\n")]);
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            split_into_tokens("echo 'oops"),
            Err(LexingError::UnfinishedQuote)
        );
        assert_eq!(
            split_into_tokens("echo \"oops"),
            Err(LexingError::UnfinishedQuote)
        );
        assert_eq!(split_into_tokens("echo \\"), Err(LexingError::DanglingEscape));
    }
}
