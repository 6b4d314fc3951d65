use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Unknown grammar: {0}")]
    UnknownGrammar(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type InternalResult<T> = Result<T, Error>;

impl Error {
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Error::Internal(message.into())
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::config("missing cases").to_string(),
            "Config error: missing cases"
        );
        assert_eq!(
            Error::UnknownGrammar("nope".to_string()).to_string(),
            "Unknown grammar: nope"
        );
        assert!(matches!(Error::internal("boom"), Error::Internal(message) if message == "boom"));
    }
}
