//! # Character-Class Parsers
//!
//! Concrete text parsers assembled from the generic combinators. Every parser
//! here produces a `String` and accumulates with [`StringMonoid`].
//!
//! Character classes are fixed ASCII sets: `a`-`z`, `A`-`Z`, `0`-`9` and
//! ASCII whitespace.

use crate::analyzer::core::{Parser, SharedParser};
use crate::analyzer::monoid::StringMonoid;
use crate::analyzer::prelude::*;

fn single(c: char) -> String {
    c.to_string()
}

/// Matches one character accepted by `pred`.
pub fn satisfy<F>(pred: F, message: &str) -> impl Parser<String> + Clone
where
    F: Fn(char) -> bool + Clone,
{
    predicate(pred, single as fn(char) -> String, message)
}

/// Matches exactly `expected`.
pub fn char(expected: char) -> impl Parser<String> + Clone {
    satisfy(
        move |c: char| c == expected,
        &format!("expected character \"{}\"", expected),
    )
}

pub fn space() -> impl Parser<String> + Clone {
    satisfy(|c: char| c.is_ascii_whitespace(), "expected space")
}

pub fn letter() -> impl Parser<String> + Clone {
    satisfy(|c: char| c.is_ascii_lowercase(), "expected alpha character")
}

pub fn upper_letter() -> impl Parser<String> + Clone {
    satisfy(
        |c: char| c.is_ascii_uppercase(),
        "expected upper alpha character",
    )
}

pub fn any_letter() -> impl Parser<String> + Clone {
    alt(letter(), upper_letter())
}

pub fn digit() -> impl Parser<String> + Clone {
    satisfy(|c: char| c.is_ascii_digit(), "expected digit")
}

pub fn word() -> impl Parser<String> + Clone {
    greedy(StringMonoid, letter())
}

pub fn upper_word() -> impl Parser<String> + Clone {
    greedy(StringMonoid, upper_letter())
}

pub fn any_word() -> impl Parser<String> + Clone {
    greedy(StringMonoid, any_letter())
}

pub fn digits() -> impl Parser<String> + Clone {
    greedy(StringMonoid, digit())
}

pub fn spaces() -> impl Parser<String> + Clone {
    greedy(StringMonoid, space())
}

/// Matches `literal` character by character.
///
/// The first character is matched on its own and the rest of the literal is
/// chained after it, so the nesting depth equals the literal's length. An
/// empty literal yields a parser that fails with `Fatal`.
pub fn string(literal: &str) -> SharedParser<String> {
    let mut chars = literal.chars();
    match (chars.next(), chars.as_str()) {
        (None, _) => shared(fatal("string literal must not be empty")),
        (Some(first), "") => shared(char(first)),
        (Some(first), rest) => shared(chain(StringMonoid, char(first), string(rest))),
    }
}

/// Ordered choice over literals; the first keyword that matches wins.
///
/// No longest-match disambiguation is attempted: a keyword that is a prefix
/// of a later one shadows it.
pub fn keywords(words: &[&str]) -> SharedParser<String> {
    let Some((first, rest)) = words.split_first() else {
        return shared(fatal("keywords requires at least one keyword"));
    };
    rest.iter()
        .fold(string(first), |acc, word| shared(alt(acc, string(word))))
}

/// Concatenates a list of fragments into a single string.
pub fn join<P>(parser: P) -> impl Parser<String> + Clone
where
    P: Parser<Vec<String>> + Clone,
{
    map(parser, |parts: Vec<String>| parts.concat())
}
