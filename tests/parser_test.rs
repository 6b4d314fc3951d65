use std::sync::Arc;

use monoparse::analyzer::parsers::*;
use monoparse::analyzer::prelude::*;
use monoparse::analyzer::{Parser, SharedParser, VecMonoid};
use pretty_assertions::assert_eq;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[ctor::ctor]
fn init_tests() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

fn consumed<O, P: Parser<O>>(parser: &P, input: &str) -> (usize, O) {
    let chars: Vec<char> = input.chars().collect();
    let (stream, value) = parser.parse(Stream::new(&chars)).unwrap();
    (stream.offset(), value)
}

#[test]
fn it_parses_single_char() {
    assert_eq!(run(&char('c'), "c"), Ok("c".to_string()));
}

#[test]
fn it_parses_word_up_to_first_digit() {
    assert_eq!(run(&word(), "abc123"), Ok("abc".to_string()));
    assert_eq!(consumed(&word(), "abc123"), (3, "abc".to_string()));
}

#[test]
fn it_repeats_greedily() {
    let parser = greedy(StringMonoid, char('a'));
    assert_eq!(consumed(&parser, "aaa123"), (3, "aaa".to_string()));

    let parser = greedy(VecMonoid::new(), to_list(char('a')));
    assert_eq!(
        run(&parser, "aaa123"),
        Ok(vec!["a".to_string(), "a".to_string(), "a".to_string()])
    );
}

#[test]
fn it_requires_at_least_one_repetition() {
    let err = run(&greedy(StringMonoid, char('a')), "xyz").unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::ParseFailure);
}

#[test]
fn it_matches_keywords() {
    assert_eq!(
        run(&keywords(&["mickey", "mouse"]), "mouse"),
        Ok("mouse".to_string())
    );
}

#[test]
fn it_extracts_surrounded_value() {
    let parser = surrounded(char('{'), char('}'), digits());
    assert_eq!(run(&parser, "{123}"), Ok("123".to_string()));
}

#[test]
fn it_fails_on_missing_closing_bracket() {
    let inner = char('a');
    let parser = surrounded(char('{'), char('}'), inner.clone());
    assert!(run(&parser, "{a").is_err());
    assert_eq!(run(&parser, "{a}"), run(&inner, "a"));
}

#[test]
fn it_parses_between_delimiters() {
    let parser = between(char('|'), char('a'));
    assert_eq!(run(&parser, "|a|"), Ok("a".to_string()));
    assert!(run(&parser, "|a").is_err());
}

#[test]
fn it_chains_into_concatenation() {
    let parser = chain(StringMonoid, word(), digits());
    assert_eq!(run(&parser, "abc123"), Ok("abc123".to_string()));

    let parser = chain(VecMonoid::new(), to_list(word()), to_list(digits()));
    assert_eq!(
        run(&parser, "abc123"),
        Ok(vec!["abc".to_string(), "123".to_string()])
    );
}

#[test]
fn it_chains_many() {
    let parser = chain_many(
        VecMonoid::new(),
        vec![
            shared(to_list(char('a'))),
            shared(to_list(char('b'))),
            shared(to_list(char('c'))),
        ],
    );
    assert_eq!(
        run(&parser, "abc123"),
        Ok(vec!["a".to_string(), "b".to_string(), "c".to_string()])
    );
    assert!(run(&parser, "ab").is_err());
}

#[test]
fn it_prefers_first_alternative() {
    let first = map(char('a'), |_: String| "first");
    let second = map(char('a'), |_: String| "second");
    assert_eq!(run(&alt(first.clone(), second.clone()), "a"), Ok("first"));
    assert_eq!(run(&alt(second, first), "a"), Ok("second"));
}

#[test]
fn it_never_fails_optional() {
    let parser = optional(StringMonoid, word());
    assert_eq!(consumed(&parser, ""), (0, String::new()));
    assert_eq!(consumed(&parser, "123"), (0, String::new()));
    assert_eq!(consumed(&parser, "abc"), (3, "abc".to_string()));
}

#[test]
fn it_maps_to_other_types() {
    let parser = map(digits(), |s: String| s.parse::<u32>().ok());
    assert_eq!(run(&parser, "432"), Ok(Some(432)));
}

#[test]
fn it_reuses_parsers_across_runs_and_threads() {
    let parser: SharedParser<Vec<String>> =
        shared(many1(between(optional(StringMonoid, spaces()), any_word())));
    let inputs = ["mickey mouse", "  Goofy  ", "donald"];

    std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|input| {
                let parser = Arc::clone(&parser);
                scope.spawn(move || run(&parser, input))
            })
            .collect();
        let results: Vec<_> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect();
        assert_eq!(
            results,
            vec![
                Ok(vec!["mickey".to_string(), "mouse".to_string()]),
                Ok(vec!["Goofy".to_string()]),
                Ok(vec!["donald".to_string()]),
            ]
        );
    });

    // 同じパーサーを繰り返し実行できる
    assert_eq!(run(&parser, "donald"), run(&parser, "donald"));
}

#[test]
fn it_reports_fatal_for_zero_progress_repetition() {
    let parser = greedy(StringMonoid, optional(StringMonoid, char('a')));
    let err = run(&parser, "b").unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::Fatal);
}
