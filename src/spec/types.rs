use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// String-keyed, string-valued policy annotations attached to a group or route.
///
/// A `BTreeMap` keeps iteration deterministic, which matters for anything that
/// ends up in generated text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Annotations(BTreeMap<String, String>);

impl Annotations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for `key`, or `None` when the key is absent or blank.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Annotations {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A single HTTP route as produced by the API parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Lower-case HTTP method token (`get`, `post`, ...)
    pub method: String,
    /// Route path pattern, e.g. `/orders/:id`
    pub path: String,
    /// Raw handler identifier
    pub handler: String,
    /// Route-level annotations (only the sub-group key is honoured here)
    #[serde(default)]
    pub annotations: Annotations,
}

impl Route {
    pub fn new(method: &str, path: &str, handler: &str) -> Self {
        Self {
            method: method.to_string(),
            path: path.to_string(),
            handler: handler.to_string(),
            annotations: Annotations::new(),
        }
    }

    pub fn with_annotation(mut self, key: &str, value: &str) -> Self {
        self.annotations.insert(key, value);
        self
    }
}

/// An ordered collection of routes sharing group-level policies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    #[serde(default)]
    pub annotations: Annotations,
    #[serde(default)]
    pub routes: Vec<Route>,
}

impl Group {
    pub fn new(routes: Vec<Route>) -> Self {
        Self {
            annotations: Annotations::new(),
            routes,
        }
    }

    pub fn with_annotation(mut self, key: &str, value: &str) -> Self {
        self.annotations.insert(key, value);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub groups: Vec<Group>,
}

/// Root of the parsed API specification. Read-only for a generation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSpec {
    pub service: Service,
}

impl ApiSpec {
    pub fn new(name: &str, groups: Vec<Group>) -> Self {
        Self {
            service: Service {
                name: name.to_string(),
                groups,
            },
        }
    }

    pub fn groups(&self) -> &[Group] {
        &self.service.groups
    }
}
