use std::cmp::Ordering;
use std::collections::HashMap;

/// One candidate from an `Accept`/`Accept-Language` header, with its quality
/// weight.
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptEntry {
    pub value: String,
    pub weight: f32,
}

/// The request-side view of one dispatch call. Constructed once by the host,
/// either field-by-field or from a CGI-style environment map; the engine
/// never reads process-wide state.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    method: String,
    path: String,
    base_url: String,
    accept: Vec<AcceptEntry>,
    accept_language: Vec<AcceptEntry>,
}

impl RequestContext {
    pub fn new<M: Into<String>, P: Into<String>>(method: M, path: P) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            ..Self::default()
        }
    }

    /// Builds a context from an explicit environment map using the CGI keys
    /// `REQUEST_METHOD`, `PATH_INFO`, `SCRIPT_NAME`, `HTTP_ACCEPT` and
    /// `HTTP_ACCEPT_LANGUAGE`. Missing keys leave the field at its default.
    pub fn from_env(env: &HashMap<String, String>) -> Self {
        let mut context = Self::default();
        if let Some(raw) = env.get("HTTP_ACCEPT_LANGUAGE") {
            context.accept_language = parse_accept(raw);
        }
        if let Some(raw) = env.get("HTTP_ACCEPT") {
            context.accept = parse_accept(raw);
        }
        if let Some(script) = env.get("SCRIPT_NAME") {
            context.base_url = base_url_from_script(script);
        }
        if let Some(path) = env.get("PATH_INFO") {
            context.path = path.clone();
        }
        if let Some(method) = env.get("REQUEST_METHOD") {
            context.method = method.clone();
        }
        context
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Acceptable content types, sorted by quality weight descending.
    pub fn accept(&self) -> &[AcceptEntry] {
        &self.accept
    }

    /// Acceptable languages, sorted by quality weight descending.
    pub fn accept_language(&self) -> &[AcceptEntry] {
        &self.accept_language
    }
}

/// Parses an `Accept`-style header into entries sorted by quality weight
/// descending; an entry without a `q` parameter weighs 1.0. Ties keep their
/// header order.
pub fn parse_accept(raw: &str) -> Vec<AcceptEntry> {
    let mut entries: Vec<AcceptEntry> = raw
        .split(',')
        .filter_map(|part| {
            let part = part.trim();
            if part.is_empty() {
                return None;
            }
            let (value, weight) = match part.split_once(';') {
                Some((value, params)) => {
                    let weight = params
                        .trim()
                        .strip_prefix("q=")
                        .and_then(|q| q.parse::<f32>().ok())
                        .unwrap_or(1.0);
                    (value.trim(), weight)
                }
                None => (part, 1.0),
            };
            Some(AcceptEntry {
                value: value.to_string(),
                weight,
            })
        })
        .collect();

    // Stable sort keeps header order for equal weights.
    entries.sort_by(|a, b| b.weight.partial_cmp(&a.weight).unwrap_or(Ordering::Equal));
    entries
}

/// Parent directory of the script path; a script mounted at the root yields
/// an empty base URL.
fn base_url_from_script(script: &str) -> String {
    match script.rfind('/') {
        Some(0) | None => String::new(),
        Some(index) => script[..index].to_string(),
    }
}
