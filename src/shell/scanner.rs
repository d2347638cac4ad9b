use std::fmt;
use std::path::PathBuf;

use super::tokenizer::Tokens;

const PIPE: &str = "|";
const REDIRECT_OUT: &str = ">";
const REDIRECT_IN: &str = "<";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Redirect {
    Input(PathBuf),
    Output(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub args: Vec<String>,
    pub background: bool,
    pub redirect: Option<Redirect>,
    /// Index into `args` where the right-hand pipeline command starts.
    pub pipe_split: Option<usize>,
}

impl ParsedCommand {
    /// Left and right argument lists when the command is a pipeline.
    pub fn pipeline(&self) -> Option<(&[String], &[String])> {
        self.pipe_split
            .map(|split| (&self.args[..split], &self.args[split..]))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    MissingRedirectTarget(String),
    EmptyPipelineStage,
    MissingCommand,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingRedirectTarget(op) => {
                write!(f, "missing redirection target after '{}'", op)
            }
            ParseError::EmptyPipelineStage => write!(f, "missing command around '|'"),
            ParseError::MissingCommand => write!(f, "missing command before redirection"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Looks for a pipe first; redirection is only considered when there is
/// none, and only the first `<` or `>` takes effect.
pub fn scan(tokens: Tokens) -> Result<ParsedCommand, ParseError> {
    let Tokens {
        mut args,
        background,
    } = tokens;

    if let Some(index) = args.iter().position(|t| t == PIPE) {
        args.remove(index);
        if index == 0 || index == args.len() {
            return Err(ParseError::EmptyPipelineStage);
        }
        return Ok(ParsedCommand {
            args,
            background,
            redirect: None,
            pipe_split: Some(index),
        });
    }

    let redirect = match args
        .iter()
        .position(|t| t == REDIRECT_OUT || t == REDIRECT_IN)
    {
        Some(index) => {
            let target = args
                .get(index + 1)
                .map(PathBuf::from)
                .ok_or_else(|| ParseError::MissingRedirectTarget(args[index].clone()))?;
            let redirect = if args[index] == REDIRECT_OUT {
                Redirect::Output(target)
            } else {
                Redirect::Input(target)
            };
            args.truncate(index);
            if args.is_empty() {
                return Err(ParseError::MissingCommand);
            }
            Some(redirect)
        }
        None => None,
    };

    Ok(ParsedCommand {
        args,
        background,
        redirect,
        pipe_split: None,
    })
}
