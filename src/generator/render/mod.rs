//! Flavor renderers: turn route IR into the body of `RegisterHandlers`.
//!
//! Both variants consume the same [`GroupIr`] sequence and render it through
//! the `route-addition` template. They differ in call shape and in the
//! options they accept; timeout support is an explicit capability.

mod feature_rich;
mod minimal;

pub use feature_rich::FeatureRichRenderer;
pub use minimal::MinimalRenderer;

use super::group::{GroupIr, CONTEXT_ACCESSOR};
use super::methods::Flavor;
use super::templates::Template;
use crate::error::Result;

/// Separator between the rendered blocks of two groups.
pub(crate) const GROUP_SEPARATOR: &str = "\n\n\t";

/// Output of a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRoutes {
    /// Registration statements, trimmed, ready for the route-file template
    pub body: String,
    /// Whether any group rendered a timeout option
    pub has_timeout: bool,
}

pub trait RouteRenderer {
    fn flavor(&self) -> Flavor;

    /// Whether `timeout` annotations become server options.
    fn supports_timeout(&self) -> bool;

    /// Render every group in order through the `route-addition` template.
    fn render(&self, groups: &[GroupIr], template: &Template<'_>) -> Result<RenderedRoutes>;
}

/// The renderer for `flavor`.
pub fn renderer_for(flavor: Flavor) -> &'static dyn RouteRenderer {
    match flavor {
        Flavor::Minimal => &MinimalRenderer,
        Flavor::FeatureRich => &FeatureRichRenderer,
    }
}

/// Middleware identifiers as context references (`serverCtx.Auth`).
pub(crate) fn middleware_refs(names: &[String]) -> Vec<String> {
    names
        .iter()
        .map(|name| format!("{CONTEXT_ACCESSOR}.{name}"))
        .collect()
}
