pub mod analyzer;
pub mod config;
pub mod demo;
pub mod error;
pub mod grammars;

// Re-exports
pub use analyzer::{run, ParseError, ParseErrorKind, Parser};
pub use error::*;
