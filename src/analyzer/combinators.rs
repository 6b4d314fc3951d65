//! # Parser Combinators
//!
//! Building blocks for composing parsers. Each combinator is a struct that
//! implements [`Parser`]; the free functions in `prelude` construct them.
//!
//! ## Combinator Types
//!
//! * **Primitive**: `Predicate`, the only parser that inspects or consumes input
//! * **Sequential**: `Chain`, `ChainMany`, `Surrounded`
//! * **Alternative**: `Alt`
//! * **Repetition**: `Greedy`
//! * **Recovery**: `Optional`
//! * **Transformation**: `Map`
//! * **Errors**: `Fatal`
//!
//! Combinators that merge or synthesize values take a [`Monoid`] explicitly.

use std::marker::PhantomData;

use super::core::{ParseError, ParseResult, Parser, SharedParser, Stream};
use super::monoid::Monoid;

/// Predicate: matches one character satisfying `pred` and maps it with `mapf`
///
/// Fails with `EndOfInput` when the stream is exhausted and with
/// `ParseFailure` when the current character is rejected.
#[derive(Clone)]
pub struct Predicate<F, G, O> {
    pred: F,
    mapf: G,
    message: String,
    _phantom: PhantomData<O>,
}

impl<F, G, O> Predicate<F, G, O> {
    pub fn new(pred: F, mapf: G, message: impl Into<String>) -> Self {
        Self {
            pred,
            mapf,
            message: message.into(),
            _phantom: PhantomData,
        }
    }
}

impl<F, G, O> Parser<O> for Predicate<F, G, O>
where
    F: Fn(char) -> bool,
    G: Fn(char) -> O,
{
    fn parse<'a>(&self, stream: Stream<'a>) -> ParseResult<'a, O> {
        match stream.peek() {
            None => Err(ParseError::end_of_input(stream.offset(), &self.message)),
            Some(c) if (self.pred)(c) => Ok((stream.advance(), (self.mapf)(c))),
            Some(_) => Err(ParseError::failure(stream.offset(), &self.message)),
        }
    }
}

/// Chain: runs `first` then `second` and merges both values
#[derive(Clone)]
pub struct Chain<P1, P2, M> {
    first: P1,
    second: P2,
    monoid: M,
}

impl<P1, P2, M> Chain<P1, P2, M> {
    pub fn new(monoid: M, first: P1, second: P2) -> Self {
        Self {
            first,
            second,
            monoid,
        }
    }
}

impl<P1, P2, M> Parser<M::Value> for Chain<P1, P2, M>
where
    M: Monoid,
    P1: Parser<M::Value>,
    P2: Parser<M::Value>,
{
    fn parse<'a>(&self, stream: Stream<'a>) -> ParseResult<'a, M::Value> {
        let (stream, first) = self.first.parse(stream)?;
        let (stream, second) = self.second.parse(stream)?;
        Ok((stream, self.monoid.combine(first, second)))
    }
}

/// Alt: ordered choice with backtracking
///
/// Both branches start from the same stream. The first success wins; when
/// both fail the two messages are joined into one failure.
#[derive(Clone)]
pub struct Alt<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> Alt<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        Self { first, second }
    }
}

impl<O, P1, P2> Parser<O> for Alt<P1, P2>
where
    P1: Parser<O>,
    P2: Parser<O>,
{
    fn parse<'a>(&self, stream: Stream<'a>) -> ParseResult<'a, O> {
        let first_err = match self.first.parse(stream) {
            Ok(result) => return Ok(result),
            Err(err) if err.is_fatal() => return Err(err),
            Err(err) => err,
        };
        match self.second.parse(stream) {
            Ok(result) => Ok(result),
            Err(err) if err.is_fatal() => Err(err),
            Err(second_err) => {
                tracing::trace!(offset = stream.offset(), "no alternative matched");
                Err(ParseError::either(first_err, second_err))
            }
        }
    }
}

/// Greedy: one or more repetitions, merged left to right
///
/// The first application must succeed. Repetition stops at end of input or
/// at the first recoverable failure, keeping what was accumulated. An
/// iteration that succeeds without consuming input is a grammar error and
/// yields `Fatal`.
#[derive(Clone)]
pub struct Greedy<P, M> {
    parser: P,
    monoid: M,
}

impl<P, M> Greedy<P, M> {
    pub fn new(monoid: M, parser: P) -> Self {
        Self { parser, monoid }
    }
}

fn ensure_progress(before: Stream<'_>, after: Stream<'_>) -> Result<(), ParseError> {
    if after.offset() > before.offset() {
        return Ok(());
    }
    tracing::debug!(offset = before.offset(), "repetition made no progress");
    Err(ParseError::fatal(
        before.offset(),
        "repeated parser succeeded without consuming input",
    ))
}

impl<P, M> Parser<M::Value> for Greedy<P, M>
where
    M: Monoid,
    P: Parser<M::Value>,
{
    fn parse<'a>(&self, stream: Stream<'a>) -> ParseResult<'a, M::Value> {
        let (mut current, mut acc) = self.parser.parse(stream)?;
        ensure_progress(stream, current)?;

        while !current.is_eof() {
            match self.parser.parse(current) {
                Ok((next, value)) => {
                    ensure_progress(current, next)?;
                    acc = self.monoid.combine(acc, value);
                    current = next;
                }
                Err(err) if err.is_fatal() => return Err(err),
                Err(_) => break,
            }
        }

        Ok((current, acc))
    }
}

/// Optional: zero or one occurrence
///
/// A recoverable failure becomes a success with the monoid identity at the
/// original position.
#[derive(Clone)]
pub struct Optional<P, M> {
    parser: P,
    monoid: M,
}

impl<P, M> Optional<P, M> {
    pub fn new(monoid: M, parser: P) -> Self {
        Self { parser, monoid }
    }
}

impl<P, M> Parser<M::Value> for Optional<P, M>
where
    M: Monoid,
    P: Parser<M::Value>,
{
    fn parse<'a>(&self, stream: Stream<'a>) -> ParseResult<'a, M::Value> {
        match self.parser.parse(stream) {
            Ok(result) => Ok(result),
            Err(err) if err.is_fatal() => Err(err),
            Err(_) => Ok((stream, self.monoid.identity())),
        }
    }
}

pub struct Map<P, F, A> {
    parser: P,
    f: F,
    _phantom: PhantomData<fn(A)>,
}

// The input type is only a marker; cloning must not require `A: Clone`.
impl<P: Clone, F: Clone, A> Clone for Map<P, F, A> {
    fn clone(&self) -> Self {
        Self {
            parser: self.parser.clone(),
            f: self.f.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<P, F, A> Map<P, F, A> {
    pub fn new(parser: P, f: F) -> Self {
        Self {
            parser,
            f,
            _phantom: PhantomData,
        }
    }
}

impl<A, B, P, F> Parser<B> for Map<P, F, A>
where
    P: Parser<A>,
    F: Fn(A) -> B,
{
    fn parse<'a>(&self, stream: Stream<'a>) -> ParseResult<'a, B> {
        self.parser
            .parse(stream)
            .map(|(stream, value)| (stream, (self.f)(value)))
    }
}

/// ChainMany: n-way sequence, folded left with the monoid
///
/// An empty sequence is a grammar error and yields `Fatal`.
#[derive(Clone)]
pub struct ChainMany<M: Monoid> {
    parsers: Vec<SharedParser<M::Value>>,
    monoid: M,
}

impl<M: Monoid> ChainMany<M> {
    pub fn new(monoid: M, parsers: Vec<SharedParser<M::Value>>) -> Self {
        Self { parsers, monoid }
    }
}

impl<M: Monoid> Parser<M::Value> for ChainMany<M> {
    fn parse<'a>(&self, stream: Stream<'a>) -> ParseResult<'a, M::Value> {
        let Some((first, rest)) = self.parsers.split_first() else {
            return Err(ParseError::fatal(
                stream.offset(),
                "chain_many requires at least one parser",
            ));
        };

        let (mut current, mut acc) = first.parse(stream)?;
        for parser in rest {
            let (next, value) = parser.parse(current)?;
            acc = self.monoid.combine(acc, value);
            current = next;
        }
        Ok((current, acc))
    }
}

/// Surrounded: `open`, `inner`, `close` in sequence, keeping only the inner value
#[derive(Clone)]
pub struct Surrounded<L, P, R, OL, OR> {
    open: L,
    inner: P,
    close: R,
    _phantom: PhantomData<(OL, OR)>,
}

impl<L, P, R, OL, OR> Surrounded<L, P, R, OL, OR> {
    pub fn new(open: L, close: R, inner: P) -> Self {
        Self {
            open,
            inner,
            close,
            _phantom: PhantomData,
        }
    }
}

impl<O, L, P, R, OL, OR> Parser<O> for Surrounded<L, P, R, OL, OR>
where
    L: Parser<OL>,
    P: Parser<O>,
    R: Parser<OR>,
{
    fn parse<'a>(&self, stream: Stream<'a>) -> ParseResult<'a, O> {
        let (stream, _) = self.open.parse(stream)?;
        let (stream, value) = self.inner.parse(stream)?;
        let (stream, _) = self.close.parse(stream)?;
        Ok((stream, value))
    }
}

/// Fatal: always fails with an unrecoverable error
#[derive(Clone)]
pub struct Fatal<O> {
    message: String,
    _phantom: PhantomData<O>,
}

impl<O> Fatal<O> {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            _phantom: PhantomData,
        }
    }
}

impl<O> Parser<O> for Fatal<O> {
    fn parse<'a>(&self, stream: Stream<'a>) -> ParseResult<'a, O> {
        Err(ParseError::fatal(stream.offset(), self.message.clone()))
    }
}
