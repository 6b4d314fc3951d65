//! # Analyzer
//!
//! A recursive-descent parser combinator engine over character streams.
//!
//! ## Core Components
//!
//! * **Stream**: immutable cursor over the input characters
//! * **Parser Trait**: a pure function from a stream to a value and a new stream
//! * **Monoid**: identity plus merge, passed to every combinator that combines values
//! * **Combinators**: `Predicate` is the only parser that reads characters;
//!   everything else is composed from it
//! * **Text Parsers**: character classes, literals and keywords
//!
//! ## Usage Example
//!
//! ```
//! use monoparse::analyzer::parsers::{digits, word};
//! use monoparse::analyzer::prelude::*;
//!
//! let parser = chain(StringMonoid, word(), digits());
//! assert_eq!(run(&parser, "abc123"), Ok("abc123".to_string()));
//! ```

pub mod combinators;
pub mod core;
pub mod monoid;
pub mod parsers;
pub mod prelude;

pub use core::run;
pub use core::ParseError;
pub use core::ParseErrorKind;
pub use core::ParseResult;
pub use core::Parser;
pub use core::SharedParser;
pub use core::Stream;
pub use monoid::{Monoid, StringMonoid, VecMonoid};
