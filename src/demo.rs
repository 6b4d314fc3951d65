//! Runs demo cases against the sample grammars and renders the outcome.

use serde::Serialize;
use tracing::debug;

use crate::config::{DemoCase, DemoConfig, OutputFormat};
use crate::{grammars, Error, InternalResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseOutcome {
    pub grammar: String,
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Parses one case. Only an unknown grammar is an error; a failed parse is
/// reported in the outcome.
pub fn run_case(case: &DemoCase) -> InternalResult<CaseOutcome> {
    let grammar = grammars::lookup(&case.grammar)?;
    let result = grammar.run(&case.input);
    debug!(grammar = grammar.name, ok = result.is_ok(), "case finished");

    let (value, error) = match result {
        Ok(value) => (Some(value), None),
        Err(err) => (None, Some(err.to_string())),
    };
    Ok(CaseOutcome {
        grammar: case.grammar.clone(),
        input: case.input.clone(),
        value,
        error,
    })
}

pub fn run_all(config: &DemoConfig) -> InternalResult<Vec<CaseOutcome>> {
    config.cases.iter().map(run_case).collect()
}

pub fn render(outcome: &CaseOutcome, format: OutputFormat) -> InternalResult<String> {
    match format {
        OutputFormat::Json => serde_json::to_string(outcome)
            .map_err(|e| Error::internal(format!("Failed to serialize outcome: {}", e))),
        OutputFormat::Text => {
            let result = match (&outcome.value, &outcome.error) {
                (Some(value), _) => format!("[{}]", value.join(", ")),
                (None, Some(error)) => format!("error: {}", error),
                (None, None) => "error: no result".to_string(),
            };
            Ok(format!(
                "{} {:?} => {}",
                outcome.grammar, outcome.input, result
            ))
        }
    }
}
