//! Route visibility policy.

use stoa_core::RouteSchema;

/// Document-wide hiding policy.
#[derive(Debug, Clone, Default)]
pub struct HideOptions {
    /// Exclude routes that declare no tags.
    pub hide_untagged: bool,

    /// Sentinel tag; routes carrying it are excluded.
    pub hidden_tag: Option<String>,
}

/// Decides whether a route must be excluded from the document.
///
/// Checks, in order: an explicit `hide` on the schema, the untagged
/// policy, then the sentinel-tag policy. A route without a schema has no
/// tags, so it falls under the untagged policy.
#[must_use]
pub fn should_route_hide(schema: Option<&RouteSchema>, options: &HideOptions) -> bool {
    let tags: &[String] = schema.map_or(&[], |schema| &schema.tags);
    if schema.is_some_and(|schema| schema.hide) {
        return true;
    }
    if tags.is_empty() && options.hide_untagged {
        return true;
    }
    if let Some(hidden_tag) = &options.hidden_tag {
        if tags.contains(hidden_tag) {
            return true;
        }
    }
    false
}
