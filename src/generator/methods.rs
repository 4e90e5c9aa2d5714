//! HTTP method token → router symbol tables, one per target flavor.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Target router backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Flavor {
    /// Grouped `server.AddRoutes(...)` registration with the full option set.
    #[default]
    Minimal,
    /// Per-route `server.GET(...)` registration; no server-side timeouts.
    FeatureRich,
}

impl Flavor {
    pub fn name(self) -> &'static str {
        match self {
            Flavor::Minimal => "minimal",
            Flavor::FeatureRich => "feature-rich",
        }
    }

    pub fn is_feature_rich(self) -> bool {
        self == Flavor::FeatureRich
    }

    /// The immutable method table for this flavor.
    pub fn method_table(self) -> &'static MethodTable {
        match self {
            Flavor::Minimal => &MINIMAL_METHODS,
            Flavor::FeatureRich => &FEATURE_RICH_METHODS,
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A finite, read-only mapping from lower-case method tokens to symbols.
#[derive(Debug)]
pub struct MethodTable {
    entries: &'static [(&'static str, &'static str)],
}

impl MethodTable {
    /// Symbol for `method`, matched case-insensitively.
    pub fn lookup(&self, method: &str) -> Option<&'static str> {
        let token = method.trim().to_ascii_lowercase();
        self.entries
            .iter()
            .find(|(k, _)| *k == token)
            .map(|(_, v)| *v)
    }

    pub fn tokens(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }
}

pub static MINIMAL_METHODS: MethodTable = MethodTable {
    entries: &[
        ("delete", "http.MethodDelete"),
        ("get", "http.MethodGet"),
        ("head", "http.MethodHead"),
        ("post", "http.MethodPost"),
        ("put", "http.MethodPut"),
        ("patch", "http.MethodPatch"),
        ("connect", "http.MethodConnect"),
        ("options", "http.MethodOptions"),
        ("trace", "http.MethodTrace"),
    ],
};

// No `connect` or `trace`: the per-route engine exposes no registration call for them.
pub static FEATURE_RICH_METHODS: MethodTable = MethodTable {
    entries: &[
        ("delete", "DELETE"),
        ("get", "GET"),
        ("head", "HEAD"),
        ("post", "POST"),
        ("put", "PUT"),
        ("patch", "PATCH"),
        ("options", "OPTIONS"),
    ],
};
