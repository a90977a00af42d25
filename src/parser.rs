use crate::lexer::Token;
use std::fmt;

/// One stage of a pipeline: a command name followed by its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub name: String,
    pub args: Vec<String>,
}

impl CommandLine {
    pub fn args_ref(&self) -> Vec<&str> {
        self.args.iter().map(String::as_str).collect()
    }
}

/// Commands connected by `|`. An empty pipeline comes from a blank line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pipeline {
    pub commands: Vec<CommandLine>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ParsingError {
    /// `|` at the start or end of the line, or two pipes in a row.
    EmptyCommand,
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsingError::EmptyCommand => write!(f, "empty command in pipeline"),
        }
    }
}

impl std::error::Error for ParsingError {}

struct PipelineBuilder {
    tokens: Vec<Token>,
    pos: usize,
}

impl PipelineBuilder {
    fn from(tokens: Vec<Token>) -> Self {
        PipelineBuilder { tokens, pos: 0 }
    }

    fn build(mut self) -> Result<Pipeline, ParsingError> {
        if self.tokens.is_empty() {
            return Ok(Pipeline::default());
        }

        let mut commands = vec![self.parse_command()?];

        // Parse additional commands separated by pipes
        while let Some(Token::PipeOp) = self.peek() {
            self.consume();
            commands.push(self.parse_command()?);
        }

        Ok(Pipeline { commands })
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn consume(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Parse a command: word+
    fn parse_command(&mut self) -> Result<CommandLine, ParsingError> {
        let mut words = Vec::new();
        while let Some(Token::Word(_)) = self.peek() {
            if let Some(Token::Word(w)) = self.consume() {
                words.push(w);
            }
        }

        let mut words = words.into_iter();
        let name = words.next().ok_or(ParsingError::EmptyCommand)?;
        Ok(CommandLine {
            name,
            args: words.collect(),
        })
    }
}

/// Group tokens into a [`Pipeline`].
pub fn construct_pipeline(tokens: Vec<Token>) -> Result<Pipeline, ParsingError> {
    PipelineBuilder::from(tokens).build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::split_into_tokens;

    fn parse(line: &str) -> Result<Pipeline, ParsingError> {
        construct_pipeline(split_into_tokens(line).unwrap())
    }

    #[test]
    fn test_blank_line_is_empty_pipeline() {
        assert_eq!(parse("   ").unwrap(), Pipeline::default());
    }

    #[test]
    fn test_single_command() {
        let pipeline = parse("caesar -k 3 'Hello World!'").unwrap();
        assert_eq!(
            pipeline.commands,
            vec![CommandLine {
                name: "caesar".to_string(),
                args: vec!["-k".to_string(), "3".to_string(), "Hello World!".to_string()],
            }]
        );
        assert_eq!(pipeline.commands[0].args_ref(), vec!["-k", "3", "Hello World!"]);
    }

    #[test]
    fn test_pipeline_of_three() {
        let pipeline = parse("a 1 | b | c 2 3").unwrap();
        let names: Vec<&str> = pipeline.commands.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert!(pipeline.commands[1].args.is_empty());
    }

    #[test]
    fn test_dangling_pipes_are_rejected() {
        assert_eq!(parse("| a"), Err(ParsingError::EmptyCommand));
        assert_eq!(parse("a |"), Err(ParsingError::EmptyCommand));
        assert_eq!(parse("a || b"), Err(ParsingError::EmptyCommand));
    }
}
