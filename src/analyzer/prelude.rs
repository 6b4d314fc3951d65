use std::sync::Arc;

use super::combinators::*;
use super::core::{Parser, SharedParser};
use super::monoid::{Monoid, VecMonoid};

pub use super::core::{run, ParseError, ParseErrorKind, ParseResult, Stream};
pub use super::monoid::StringMonoid;

pub fn predicate<F, G, O>(pred: F, mapf: G, message: impl Into<String>) -> Predicate<F, G, O>
where
    F: Fn(char) -> bool,
    G: Fn(char) -> O,
{
    Predicate::new(pred, mapf, message)
}

pub fn chain<P1, P2, M>(monoid: M, first: P1, second: P2) -> Chain<P1, P2, M>
where
    M: Monoid,
    P1: Parser<M::Value>,
    P2: Parser<M::Value>,
{
    Chain::new(monoid, first, second)
}

pub fn alt<P1, P2, O>(first: P1, second: P2) -> Alt<P1, P2>
where
    P1: Parser<O>,
    P2: Parser<O>,
{
    Alt::new(first, second)
}

pub fn greedy<P, M>(monoid: M, parser: P) -> Greedy<P, M>
where
    M: Monoid,
    P: Parser<M::Value>,
{
    Greedy::new(monoid, parser)
}

pub fn optional<P, M>(monoid: M, parser: P) -> Optional<P, M>
where
    M: Monoid,
    P: Parser<M::Value>,
{
    Optional::new(monoid, parser)
}

pub fn map<P, F, A, B>(parser: P, f: F) -> Map<P, F, A>
where
    P: Parser<A>,
    F: Fn(A) -> B,
{
    Map::new(parser, f)
}

pub fn chain_many<M: Monoid>(monoid: M, parsers: Vec<SharedParser<M::Value>>) -> ChainMany<M> {
    ChainMany::new(monoid, parsers)
}

pub fn surrounded<L, P, R, OL, OR, O>(open: L, close: R, inner: P) -> Surrounded<L, P, R, OL, OR>
where
    L: Parser<OL>,
    P: Parser<O>,
    R: Parser<OR>,
{
    Surrounded::new(open, close, inner)
}

/// `surrounded` with the same parser on both sides.
pub fn between<D, P, OD, O>(delimiter: D, inner: P) -> Surrounded<D, P, D, OD, OD>
where
    D: Parser<OD> + Clone,
    P: Parser<O>,
{
    Surrounded::new(delimiter.clone(), delimiter, inner)
}

/// Lifts a single value into a one-element list, ready for `VecMonoid`.
pub fn to_list<P, O>(parser: P) -> Map<P, fn(O) -> Vec<O>, O>
where
    P: Parser<O>,
{
    fn single<O>(value: O) -> Vec<O> {
        vec![value]
    }
    Map::new(parser, single::<O> as fn(O) -> Vec<O>)
}

/// Lifts `parser` into a list and repeats it, collecting every value.
pub fn many1<P, O>(parser: P) -> Greedy<Map<P, fn(O) -> Vec<O>, O>, VecMonoid<O>>
where
    P: Parser<O>,
{
    Greedy::new(VecMonoid::new(), to_list(parser))
}

pub fn fatal<O>(message: impl Into<String>) -> Fatal<O> {
    Fatal::new(message)
}

/// Erases the concrete type of `parser`.
pub fn shared<P, O>(parser: P) -> SharedParser<O>
where
    P: Parser<O> + Send + Sync + 'static,
    O: 'static,
{
    Arc::new(parser)
}
