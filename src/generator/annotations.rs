//! Typed policy extraction from raw group and route annotations.

use crate::spec::{Annotations, Group, Route};

/// Bearer-token validation; value names the secret config entry.
pub const JWT_KEY: &str = "jwt";
/// Dual-secret rotation; value names the config entry holding both secrets.
pub const JWT_TRANSITION_KEY: &str = "jwtTransition";
/// Request-signature verification, enabled only by the literal `true`.
pub const SIGNATURE_KEY: &str = "signature";
/// Comma-separated ordered middleware chain.
pub const MIDDLEWARE_KEY: &str = "middleware";
/// Path prefix applied to every route of the group.
pub const PREFIX_KEY: &str = "prefix";
/// Sub-package folder holding the handlers; overridable per route.
pub const GROUP_KEY: &str = "group";
/// Server-side timeout as a duration string.
pub const TIMEOUT_KEY: &str = "timeout";

/// Group-level policies resolved once per group.
///
/// Missing annotations yield the disabled value; extraction never fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupPolicy {
    pub jwt: Option<String>,
    pub jwt_transition: Option<String>,
    pub signature: bool,
    pub middleware: Vec<String>,
    pub prefix: Option<String>,
    pub timeout: Option<String>,
    pub sub_group: Option<String>,
}

impl GroupPolicy {
    pub fn from_group(group: &Group) -> Self {
        Self::from_annotations(&group.annotations)
    }

    pub fn from_annotations(ann: &Annotations) -> Self {
        GroupPolicy {
            jwt: ann.get(JWT_KEY).map(str::to_string),
            jwt_transition: ann.get(JWT_TRANSITION_KEY).map(str::to_string),
            signature: ann.get(SIGNATURE_KEY) == Some("true"),
            middleware: ann.get(MIDDLEWARE_KEY).map(split_middleware).unwrap_or_default(),
            prefix: ann.get(PREFIX_KEY).and_then(normalize_prefix),
            timeout: ann.get(TIMEOUT_KEY).map(str::to_string),
            sub_group: ann.get(GROUP_KEY).map(str::to_string),
        }
    }
}

/// Sub-package folder for `route`: the route's own annotation wins over its group's.
pub fn resolve_sub_group<'a>(route: &'a Route, group: &'a Group) -> Option<&'a str> {
    route
        .annotations
        .get(GROUP_KEY)
        .or_else(|| group.annotations.get(GROUP_KEY))
}

/// Package alias for a sub-group folder (`admin/user` → `adminuser`).
pub fn folder_alias(folder: &str) -> String {
    folder.replace('/', "")
}

/// Split a `middleware` annotation value into its ordered identifiers.
///
/// Shared by the route renderers and the middleware scaffolder so both read
/// the same annotation identically.
pub fn split_middleware(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalise a prefix annotation to a single leading `/` with no trailing slash.
///
/// Returns `None` when nothing remains after stripping quotes and whitespace.
pub fn normalize_prefix(raw: &str) -> Option<String> {
    let stripped = raw.replace('"', "");
    let trimmed = stripped.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(clean_path(&format!("/{trimmed}")))
}

/// Lexically clean a rooted path: collapse slashes, resolve `.` and `..`.
fn clean_path(path: &str) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            s => parts.push(s),
        }
    }
    format!("/{}", parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_normalization_is_idempotent() {
        for raw in ["v1", "/v1/", " v1 ", "\"v1\"", "\" /v1 \"", "//v1"] {
            assert_eq!(normalize_prefix(raw).as_deref(), Some("/v1"), "raw: {raw:?}");
        }
        let once = normalize_prefix("api/v2/").unwrap();
        assert_eq!(normalize_prefix(&once).unwrap(), once);
    }

    #[test]
    fn test_prefix_edge_cases() {
        assert_eq!(normalize_prefix(""), None);
        assert_eq!(normalize_prefix("  \"\" "), None);
        assert_eq!(normalize_prefix("/").as_deref(), Some("/"));
        assert_eq!(normalize_prefix("a/./b/../c").as_deref(), Some("/a/c"));
    }

    #[test]
    fn test_split_middleware_keeps_order_and_repeats() {
        assert_eq!(
            split_middleware("Auth, Log,,Auth "),
            vec!["Auth", "Log", "Auth"]
        );
        assert!(split_middleware(" , ").is_empty());
    }

    #[test]
    fn test_group_policy_defaults_to_disabled() {
        let policy = GroupPolicy::from_annotations(&Annotations::new());
        assert_eq!(policy, GroupPolicy::default());
    }

    #[test]
    fn test_group_policy_extraction() {
        let ann: Annotations = [
            ("jwt", "Auth"),
            ("jwtTransition", "Rotate"),
            ("signature", "true"),
            ("middleware", "CorsMiddleware,LogMiddleware"),
            ("prefix", "\"v1\""),
            ("timeout", "3s"),
            ("group", "order"),
        ]
        .into_iter()
        .collect();
        let policy = GroupPolicy::from_annotations(&ann);
        assert_eq!(policy.jwt.as_deref(), Some("Auth"));
        assert_eq!(policy.jwt_transition.as_deref(), Some("Rotate"));
        assert!(policy.signature);
        assert_eq!(policy.middleware, vec!["CorsMiddleware", "LogMiddleware"]);
        assert_eq!(policy.prefix.as_deref(), Some("/v1"));
        assert_eq!(policy.timeout.as_deref(), Some("3s"));
        assert_eq!(policy.sub_group.as_deref(), Some("order"));
    }

    #[test]
    fn test_signature_requires_literal_true() {
        let ann: Annotations = [("signature", "yes")].into_iter().collect();
        assert!(!GroupPolicy::from_annotations(&ann).signature);
    }

    #[test]
    fn test_sub_group_precedence() {
        let group = Group::new(vec![
            Route::new("get", "/a", "a").with_annotation("group", "order"),
            Route::new("get", "/b", "b"),
        ])
        .with_annotation("group", "billing");
        assert_eq!(resolve_sub_group(&group.routes[0], &group), Some("order"));
        assert_eq!(resolve_sub_group(&group.routes[1], &group), Some("billing"));

        let bare = Group::new(vec![Route::new("get", "/c", "c")]);
        assert_eq!(resolve_sub_group(&bare.routes[0], &bare), None);
    }

    #[test]
    fn test_folder_alias_strips_slashes() {
        assert_eq!(folder_alias("admin/user"), "adminuser");
        assert_eq!(folder_alias("order"), "order");
    }
}
