//! # Sample Grammars
//!
//! Grammars built purely from the public combinators. They back the demo
//! driver and double as worked examples of composing the analyzer.

use std::fmt;

use lazy_static::lazy_static;

use crate::analyzer::parsers::*;
use crate::analyzer::prelude::*;
use crate::analyzer::{Parser, SharedParser, VecMonoid};
use crate::error::{Error, InternalResult};

/// Keywords repeated back to back, e.g. `abcfffdef(korova)`.
pub fn keyword_stream() -> impl Parser<Vec<String>> + Clone {
    many1(keywords(&["abc", "def", "fff", "(korova)"]))
}

/// The same stream written as a chain of alternatives.
pub fn alternation_stream() -> impl Parser<Vec<String>> + Clone {
    many1(alt(alt(string("abc"), string("def")), string("fff")))
}

/// Whitespace separated lowercase words.
pub fn word_tokens() -> impl Parser<Vec<String>> + Clone {
    many1(between(optional(StringMonoid, space()), word()))
}

/// A `{name:type}` or `{name:type="default value"}` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDeclaration {
    pub name: String,
    pub type_name: String,
    pub default: Option<String>,
}

impl fmt::Display for FieldDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.type_name)?;
        if let Some(default) = &self.default {
            write!(f, "=\"{}\"", default)?;
        }
        Ok(())
    }
}

fn sentence() -> impl Parser<String> + Clone {
    greedy(StringMonoid, alt(any_word(), spaces()))
}

pub fn field_declaration() -> impl Parser<FieldDeclaration> + Clone {
    let default_value = surrounded(string("=\""), char('"'), sentence());
    let parts = chain_many(
        VecMonoid::new(),
        vec![
            shared(to_list(word())),
            shared(to_list(char(':'))),
            shared(to_list(keywords(&["integer", "string"]))),
            shared(optional(VecMonoid::new(), to_list(default_value))),
        ],
    );
    let declaration = map(parts, |parts: Vec<String>| {
        // name, ':', type, optional default
        let mut parts = parts.into_iter();
        let name = parts.next().unwrap_or_default();
        let type_name = parts.nth(1).unwrap_or_default();
        FieldDeclaration {
            name,
            type_name,
            default: parts.next(),
        }
    });
    surrounded(char('{'), char('}'), declaration)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Number(u64),
    Text(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "num:{}", n),
            Token::Text(s) => write!(f, "str:{}", s),
        }
    }
}

// saturates instead of overflowing
fn to_number(digits: String) -> Vec<Token> {
    let value = digits.bytes().fold(0u64, |acc, b| {
        acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
    });
    vec![Token::Number(value)]
}

/// `[text]` and `{digits}` items mapped onto [`Token`]s, e.g. `[hello]{123}`.
pub fn tagged_tokens() -> impl Parser<Vec<Token>> + Clone {
    let number = map(surrounded(char('{'), char('}'), digits()), to_number);
    let text = map(surrounded(char('['), char(']'), any_word()), |s: String| {
        vec![Token::Text(s)]
    });
    greedy(VecMonoid::new(), alt(number, text))
}

/// A named grammar whose result is rendered as a list of strings.
pub struct Grammar {
    pub name: &'static str,
    pub description: &'static str,
    parser: SharedParser<Vec<String>>,
}

impl Grammar {
    pub fn run(&self, input: &str) -> Result<Vec<String>, ParseError> {
        run(&self.parser, input)
    }
}

impl fmt::Debug for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grammar")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}

fn render<T: ToString>(items: Vec<T>) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

lazy_static! {
    static ref GRAMMARS: Vec<Grammar> = vec![
        Grammar {
            name: "word",
            description: "a single lowercase word",
            parser: shared(to_list(word())),
        },
        Grammar {
            name: "digits",
            description: "a run of decimal digits",
            parser: shared(to_list(digits())),
        },
        Grammar {
            name: "keywords",
            description: "abc, def, fff and (korova) repeated",
            parser: shared(keyword_stream()),
        },
        Grammar {
            name: "alternation",
            description: "abc, def and fff repeated, as nested alternatives",
            parser: shared(alternation_stream()),
        },
        Grammar {
            name: "tokens",
            description: "whitespace separated words",
            parser: shared(word_tokens()),
        },
        Grammar {
            name: "fields",
            description: "{name:type} or {name:type=\"default\"} declarations",
            parser: shared(map(many1(field_declaration()), render::<FieldDeclaration>)),
        },
        Grammar {
            name: "tagged",
            description: "[text] and {number} items",
            parser: shared(map(tagged_tokens(), render::<Token>)),
        },
    ];
}

pub fn all() -> &'static [Grammar] {
    &GRAMMARS
}

pub fn lookup(name: &str) -> InternalResult<&'static Grammar> {
    all()
        .iter()
        .find(|grammar| grammar.name == name)
        .ok_or_else(|| Error::UnknownGrammar(name.to_string()))
}
