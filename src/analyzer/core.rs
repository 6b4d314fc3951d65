//! # Core Parser Definitions
//!
//! This module defines the stream model, the error type and the parser
//! interface that every combinator in the analyzer builds on.

use std::sync::Arc;

use thiserror::Error;

/// Immutable cursor over the input characters.
///
/// A `Stream` is a small `Copy` value. Advancing produces a new stream and
/// leaves the original untouched, so any parser can be re-run from a saved
/// stream without an undo log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stream<'a> {
    chars: &'a [char],
    offset: usize,
}

impl<'a> Stream<'a> {
    /// Creates a stream positioned at the first character.
    pub fn new(chars: &'a [char]) -> Self {
        Self { chars, offset: 0 }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn is_eof(&self) -> bool {
        self.offset >= self.chars.len()
    }

    /// The character under the cursor, if any.
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.offset).copied()
    }

    /// Returns a stream moved one character forward.
    ///
    /// The offset never moves past the end of the input.
    pub fn advance(self) -> Self {
        Self {
            chars: self.chars,
            offset: (self.offset + 1).min(self.chars.len()),
        }
    }

    /// The characters not yet consumed.
    pub fn remaining(&self) -> &'a [char] {
        &self.chars[self.offset.min(self.chars.len())..]
    }
}

/// Discriminant of a [`ParseError`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString, strum::AsRefStr,
)]
pub enum ParseErrorKind {
    EndOfInput,
    ParseFailure,
    Fatal,
}

/// Error type for parsing operations.
///
/// `EndOfInput` and `ParseFailure` are recoverable: alternation and
/// optional-ness may retry or absorb them. `Fatal` marks a grammar error
/// and is never absorbed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("{message}")]
    EndOfInput { message: String, position: usize },
    #[error("{message}")]
    ParseFailure { message: String, position: usize },
    #[error("Fatal: {message} at position {position}")]
    Fatal { message: String, position: usize },
}

impl ParseError {
    pub fn end_of_input(position: usize, expected: &str) -> Self {
        ParseError::EndOfInput {
            message: format!("{}: end of input, {}", position, expected),
            position,
        }
    }

    pub fn failure(position: usize, expected: &str) -> Self {
        ParseError::ParseFailure {
            message: format!("{}: {}", position, expected),
            position,
        }
    }

    pub fn fatal(position: usize, message: impl Into<String>) -> Self {
        ParseError::Fatal {
            message: message.into(),
            position,
        }
    }

    /// Merges the failures of two alternatives into one.
    pub fn either(first: ParseError, second: ParseError) -> Self {
        ParseError::ParseFailure {
            message: format!("{} | {}", first.message(), second.message()),
            position: first.position().max(second.position()),
        }
    }

    pub fn kind(&self) -> ParseErrorKind {
        match self {
            ParseError::EndOfInput { .. } => ParseErrorKind::EndOfInput,
            ParseError::ParseFailure { .. } => ParseErrorKind::ParseFailure,
            ParseError::Fatal { .. } => ParseErrorKind::Fatal,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ParseError::EndOfInput { message, .. }
            | ParseError::ParseFailure { message, .. }
            | ParseError::Fatal { message, .. } => message,
        }
    }

    pub fn position(&self) -> usize {
        match self {
            ParseError::EndOfInput { position, .. }
            | ParseError::ParseFailure { position, .. }
            | ParseError::Fatal { position, .. } => *position,
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, ParseError::Fatal { .. })
    }
}

/// On success, the stream after the match and the parsed value.
pub type ParseResult<'a, O> = Result<(Stream<'a>, O), ParseError>;

/// Parser trait defines the core parsing interface.
///
/// A parser is a pure function of the stream: it never mutates shared state
/// and may be invoked any number of times on the same stream.
pub trait Parser<O> {
    fn parse<'a>(&self, stream: Stream<'a>) -> ParseResult<'a, O>;
}

impl<O, P> Parser<O> for &P
where
    P: Parser<O> + ?Sized,
{
    fn parse<'a>(&self, stream: Stream<'a>) -> ParseResult<'a, O> {
        (**self).parse(stream)
    }
}

impl<O, P> Parser<O> for Box<P>
where
    P: Parser<O> + ?Sized,
{
    fn parse<'a>(&self, stream: Stream<'a>) -> ParseResult<'a, O> {
        (**self).parse(stream)
    }
}

impl<O, P> Parser<O> for Arc<P>
where
    P: Parser<O> + ?Sized,
{
    fn parse<'a>(&self, stream: Stream<'a>) -> ParseResult<'a, O> {
        (**self).parse(stream)
    }
}

/// Type-erased parser that can be cloned and shared between threads.
pub type SharedParser<O> = Arc<dyn Parser<O> + Send + Sync>;

/// Runs `parser` over `input` and returns only the parsed value.
///
/// Trailing input that the parser did not consume is ignored.
#[tracing::instrument(level = "debug", skip(parser, input), fields(len = input.len()))]
pub fn run<O, P>(parser: &P, input: &str) -> Result<O, ParseError>
where
    P: Parser<O> + ?Sized,
{
    let chars: Vec<char> = input.chars().collect();
    match parser.parse(Stream::new(&chars)) {
        Ok((stream, value)) => {
            tracing::trace!(consumed = stream.offset(), "parse succeeded");
            Ok(value)
        }
        Err(err) => {
            tracing::debug!(kind = %err.kind(), position = err.position(), "parse failed");
            Err(err)
        }
    }
}
