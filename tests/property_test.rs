//! Property-based tests for the combinator laws.

use monoparse::analyzer::parsers::*;
use monoparse::analyzer::prelude::*;
use monoparse::analyzer::Parser;
use proptest::prelude::*;

proptest! {
    #[test]
    fn string_consumes_exactly_the_literal(literal in "[a-z(){}]{1,8}", rest in "[0-9 ]{0,8}") {
        let input = format!("{}{}", literal, rest);
        let chars: Vec<char> = input.chars().collect();
        let (stream, value) = string(&literal).parse(Stream::new(&chars)).unwrap();

        prop_assert_eq!(&value, &literal);
        prop_assert_eq!(stream.offset(), literal.chars().count());
        let remaining: String = stream.remaining().iter().collect();
        prop_assert_eq!(remaining, rest);
    }

    #[test]
    fn string_leaves_rest_for_next_parser(literal in "[a-z]{1,8}", rest in "[0-9]{1,8}") {
        let parser = chain(StringMonoid, string(&literal), digits());
        let input = format!("{}{}", literal, rest);
        prop_assert_eq!(run(&parser, &input), Ok(input.clone()));
    }

    #[test]
    fn optional_never_fails(input in "\\PC{0,16}") {
        prop_assert!(run(&optional(StringMonoid, word()), &input).is_ok());
        prop_assert!(run(&optional(StringMonoid, digits()), &input).is_ok());
    }

    #[test]
    fn greedy_takes_the_whole_run(count in 1usize..32, tail in "[b-z0-9]{0,5}") {
        let input = format!("{}{}", "a".repeat(count), tail);
        prop_assert_eq!(run(&greedy(StringMonoid, char('a')), &input), Ok("a".repeat(count)));
    }

    #[test]
    fn greedy_fails_without_a_first_match(input in "[b-z0-9]{0,8}") {
        prop_assert!(run(&greedy(StringMonoid, char('a')), &input).is_err());
    }

    #[test]
    fn alt_returns_first_success(input in "[a-z]{1,8}") {
        let first = map(word(), |w: String| (1, w));
        let second = map(any_word(), |w: String| (2, w));
        prop_assert_eq!(run(&alt(first, second), &input), Ok((1, input.clone())));
    }
}
