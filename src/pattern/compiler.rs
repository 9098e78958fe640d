use regex::Regex;

use crate::dispatch::CaptureMode;
use crate::pattern::compiled::CompiledPattern;
use crate::pattern::{PatternError, PatternResult};

/// How placeholder captures behave during compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaceholderPolicy {
    pub capture: CaptureMode,
    pub allow_adjacent: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum Token {
    Literal(String),
    Placeholder(String),
}

/// Compiles a route pattern into an anchored matcher plus its placeholder
/// names in declaration order. Deterministic for a given (pattern, policy)
/// pair.
#[tracing::instrument(level = "trace", skip(policy), fields(pattern = %pattern))]
pub fn compile(pattern: &str, policy: &PlaceholderPolicy) -> PatternResult<CompiledPattern> {
    if pattern.is_empty() {
        return Err(PatternError::Empty);
    }

    let tokens = tokenize(pattern)?;

    if !policy.allow_adjacent {
        reject_adjacent(pattern, &tokens)?;
    }

    let group = match policy.capture {
        CaptureMode::OneOrMore => "([^/]+)",
        CaptureMode::ZeroOrMore => "([^/]*)",
    };

    let mut source = String::with_capacity(pattern.len() + 16);
    let mut placeholders = Vec::new();
    source.push('^');
    for token in &tokens {
        match token {
            Token::Literal(literal) => source.push_str(&regex::escape(literal)),
            Token::Placeholder(name) => {
                placeholders.push(name.clone());
                source.push_str(group);
            }
        }
    }
    source.push('$');

    let regex = Regex::new(&source).map_err(|err| PatternError::MatcherBuild {
        pattern: pattern.to_string(),
        error: err.to_string(),
    })?;

    // One capturing group per placeholder, plus the implicit whole-match
    // group.
    debug_assert_eq!(regex.captures_len(), placeholders.len() + 1);

    Ok(CompiledPattern::new(
        pattern.to_string(),
        regex,
        placeholders,
    ))
}

fn tokenize(pattern: &str) -> PatternResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != ':' {
            literal.push(ch);
            continue;
        }

        if !literal.is_empty() {
            tokens.push(Token::Literal(std::mem::take(&mut literal)));
        }

        let mut name = String::new();
        while let Some(&next) = chars.peek() {
            if next.is_ascii_alphanumeric() || next == '_' {
                name.push(next);
                chars.next();
            } else {
                break;
            }
        }

        if name.is_empty() {
            return Err(PatternError::PlaceholderMissingName {
                pattern: pattern.to_string(),
            });
        }

        let first = name.chars().next().expect("name is non-empty");
        if !(first.is_ascii_alphabetic() || first == '_') {
            return Err(PatternError::PlaceholderInvalidStart {
                pattern: pattern.to_string(),
                found: first,
            });
        }

        // Placeholder names are deliberately not checked for uniqueness
        // within a pattern; captures stay positional.
        tokens.push(Token::Placeholder(name));
    }

    if !literal.is_empty() {
        tokens.push(Token::Literal(literal));
    }

    Ok(tokens)
}

/// Two placeholders with no literal between them collapse into one ambiguous
/// capture; refuse them unless the policy opts in.
fn reject_adjacent(pattern: &str, tokens: &[Token]) -> PatternResult<()> {
    for pair in tokens.windows(2) {
        if let [Token::Placeholder(first), Token::Placeholder(second)] = pair {
            return Err(PatternError::AdjacentPlaceholders {
                pattern: pattern.to_string(),
                first: first.clone(),
                second: second.clone(),
            });
        }
    }
    Ok(())
}
