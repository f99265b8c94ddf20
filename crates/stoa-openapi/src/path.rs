//! Route path syntax translation.
//!
//! Stoa routes use colon-prefixed named parameters (`/users/:id`),
//! regex-constrained segments (`/items/:id(\d+)` or anonymous
//! `/items/(\d+)`), wildcard segments (`*`), and `::` as an escaped
//! literal colon. OpenAPI path templates use brace-delimited parameters
//! (`/users/{id}`), so every route URL is translated before it becomes a
//! path-table key.

/// Scanner state for [`PathTranslator::translate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Copying characters verbatim.
    Default,
    /// Accumulating a `:name` parameter.
    ColonName,
    /// Inside a parenthesized regex constraint.
    RegexParam,
}

/// Translates framework route paths into OpenAPI path templates.
///
/// The translator is stateful: anonymous regex segments are numbered
/// `regex1`, `regex2`, ... and the counter continues across every path
/// translated by one instance, so names stay unique within a document.
///
/// # Example
///
/// ```
/// use stoa_openapi::PathTranslator;
///
/// let mut translator = PathTranslator::new();
/// assert_eq!(translator.translate("/users/:id"), "/users/{id}");
/// assert_eq!(translator.translate(r"/files/(\d+)"), "/files/{regex1}");
/// assert_eq!(translator.translate(r"/blobs/(\w+)"), "/blobs/{regex2}");
/// ```
#[derive(Debug, Default)]
pub struct PathTranslator {
    anonymous_regex: usize,
}

impl PathTranslator {
    /// Creates a translator with a fresh anonymous-regex counter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Translates one route path.
    ///
    /// Malformed input (e.g. an unterminated regex constraint) never
    /// fails; the scan simply flushes whatever state is still open at
    /// the end of the string.
    pub fn translate(&mut self, url: &str) -> String {
        let chars: Vec<char> = url.chars().collect();
        let mut path = String::with_capacity(url.len());
        let mut param = String::new();
        let mut state = ScanState::Default;
        let mut depth = 0usize;
        let mut i = 0;
        while i < chars.len() {
            let ch = chars[i];
            match state {
                ScanState::ColonName => {
                    if ch.is_ascii_alphanumeric() || ch == '_' {
                        param.push(ch);
                        i += 1;
                    } else if ch == '(' {
                        state = ScanState::RegexParam;
                        depth = 1;
                        i += 1;
                    } else {
                        // Name ends here; the terminating character is
                        // re-processed under default rules.
                        path.push('{');
                        path.push_str(&param);
                        path.push('}');
                        param.clear();
                        state = ScanState::Default;
                    }
                }
                ScanState::RegexParam => {
                    if ch == '(' {
                        depth += 1;
                    } else if ch == ')' {
                        depth -= 1;
                    }
                    if depth == 0 {
                        if param.is_empty() {
                            self.anonymous_regex += 1;
                            param = format!("regex{}", self.anonymous_regex);
                        }
                        path.push('{');
                        path.push_str(&param);
                        path.push('}');
                        param.clear();
                        state = ScanState::Default;
                    }
                    i += 1;
                }
                ScanState::Default => {
                    if ch == ':' && chars.get(i + 1) == Some(&':') {
                        // Escaped colon.
                        path.push(':');
                        i += 2;
                    } else if ch == ':' {
                        state = ScanState::ColonName;
                        i += 1;
                    } else if ch == '(' {
                        state = ScanState::RegexParam;
                        depth = 1;
                        i += 1;
                    } else if ch == '*' {
                        path.push_str("{*}");
                        i += 1;
                    } else {
                        path.push(ch);
                        i += 1;
                    }
                }
            }
        }
        if state == ScanState::ColonName && !param.is_empty() {
            path.push('{');
            path.push_str(&param);
            path.push('}');
        }
        path
    }
}
