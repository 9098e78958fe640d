use regex::Regex;
use smallvec::SmallVec;

pub type CaptureList = SmallVec<[String; 4]>;

/// A route pattern compiled to an anchored matcher. Capture group order
/// equals placeholder declaration order, one group per placeholder.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    source: String,
    regex: Regex,
    placeholders: Vec<String>,
}

impl CompiledPattern {
    pub(crate) fn new(source: String, regex: Regex, placeholders: Vec<String>) -> Self {
        Self {
            source,
            regex,
            placeholders,
        }
    }

    /// The route pattern this matcher was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Placeholder names in declaration order.
    pub fn placeholders(&self) -> &[String] {
        &self.placeholders
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Captured values in placeholder order, or `None` when the path does not
    /// match structurally.
    pub fn capture(&self, path: &str) -> Option<CaptureList> {
        let captures = self.regex.captures(path)?;
        let mut values = CaptureList::new();
        for group in captures.iter().skip(1) {
            values.push(group.map(|m| m.as_str().to_string()).unwrap_or_default());
        }
        Some(values)
    }
}
