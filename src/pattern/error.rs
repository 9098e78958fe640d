use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("route pattern is empty")]
    Empty,
    #[error("placeholder in pattern '{pattern}' is missing a name")]
    PlaceholderMissingName { pattern: String },
    #[error(
        "placeholder name in pattern '{pattern}' must start with an alphabetic character or underscore (found '{found}')"
    )]
    PlaceholderInvalidStart { pattern: String, found: char },
    #[error(
        "pattern '{pattern}' has adjacent placeholders ':{first}' and ':{second}' with no literal between them"
    )]
    AdjacentPlaceholders {
        pattern: String,
        first: String,
        second: String,
    },
    #[error("pattern '{pattern}' did not compile to a valid matcher: {error}")]
    MatcherBuild { pattern: String, error: String },
}

pub type PatternResult<T> = Result<T, PatternError>;
