//! Route-registration file: specification → `internal/handler/routes.go`.

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::format::file_naming_format;
use super::group::{build_groups, GroupIr};
use super::imports::{route_imports, HANDLER_DIR};
use super::render::{renderer_for, RouteRenderer};
use super::templates::{
    emit_file, Template, TemplateStore, WriteMode, WriteOutcome, ROUTES_TEMPLATE,
    ROUTES_TEMPLATE_FILE, ROUTE_ADDITION_TEMPLATE, ROUTE_ADDITION_TEMPLATE_FILE,
};
use crate::config::GenConfig;
use crate::error::Result;
use crate::spec::ApiSpec;

/// Logical name of the route file before naming-format conversion.
pub const ROUTES_FILENAME: &str = "routes";

/// A fully rendered route file that has not been written yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteFile {
    pub path: PathBuf,
    pub content: String,
    /// Whether any group rendered a timeout option
    pub has_timeout: bool,
}

#[derive(Serialize)]
struct RoutesContext<'a> {
    feature_rich: bool,
    has_timeout: bool,
    import_packages: &'a str,
    routes_additions: &'a str,
}

/// Target path of the route file below `dir`.
pub fn route_file_path(dir: &Path, naming_format: &str) -> Result<PathBuf> {
    let filename = format!("{}.go", file_naming_format(naming_format, ROUTES_FILENAME)?);
    Ok(dir.join(HANDLER_DIR).join(filename))
}

/// Annotations set on `group` that the feature-rich flavor does not render.
fn unrendered_policies(group: &GroupIr) -> Vec<&'static str> {
    let mut names = Vec::new();
    if group.jwt_enabled() {
        names.push("jwt");
    }
    if group.jwt_transition.is_some() {
        names.push("jwtTransition");
    }
    if group.signature {
        names.push("signature");
    }
    if group.prefix.is_some() {
        names.push("prefix");
    }
    names
}

fn warn_dropped_policies(renderer: &dyn RouteRenderer, groups: &[GroupIr]) {
    for (index, group) in groups.iter().enumerate() {
        if let Some(timeout) = &group.timeout {
            if !renderer.supports_timeout() {
                warn!(
                    group = index,
                    timeout = %timeout,
                    flavor = renderer.flavor().name(),
                    "Timeout annotation is not supported by this flavor and was dropped"
                );
            }
        }
        if !renderer.flavor().is_feature_rich() {
            continue;
        }
        let dropped = unrendered_policies(group);
        if !dropped.is_empty() {
            warn!(
                group = index,
                annotations = %dropped.join(", "),
                flavor = renderer.flavor().name(),
                "Annotations are not rendered by this flavor and were dropped"
            );
        }
    }
}

/// Render the route file for `spec` without touching the filesystem.
///
/// # Errors
///
/// Any [`GenError`](crate::error::GenError) raised while building the IR,
/// validating group policies, converting the file name or rendering templates.
pub fn render_routes(
    dir: &Path,
    spec: &ApiSpec,
    config: &GenConfig,
    store: &TemplateStore,
) -> Result<RouteFile> {
    let path = route_file_path(dir, &config.naming_format)?;
    let groups = build_groups(spec, config.flavor)?;
    let renderer = renderer_for(config.flavor);
    warn_dropped_policies(renderer, &groups);

    let addition_source = store.load(ROUTE_ADDITION_TEMPLATE_FILE, ROUTE_ADDITION_TEMPLATE)?;
    let addition = Template::compile("route-addition", &addition_source)?;
    let rendered = renderer.render(&groups, &addition)?;

    let imports = route_imports(&config.root_package, &config.router_module, spec);
    let routes_source = store.load(ROUTES_TEMPLATE_FILE, ROUTES_TEMPLATE)?;
    let content = Template::compile("routes", &routes_source)?.render(RoutesContext {
        feature_rich: config.flavor.is_feature_rich(),
        has_timeout: rendered.has_timeout,
        import_packages: &imports,
        routes_additions: &rendered.body,
    })?;

    Ok(RouteFile {
        path,
        content,
        has_timeout: rendered.has_timeout,
    })
}

/// Regenerate the route file under `dir`, replacing any previous one.
///
/// Everything is rendered first; a failure leaves an existing file untouched.
pub fn gen_routes(
    dir: &Path,
    spec: &ApiSpec,
    config: &GenConfig,
    store: &TemplateStore,
) -> Result<WriteOutcome> {
    let file = render_routes(dir, spec, config, store)?;
    info!(
        path = %file.path.display(),
        flavor = config.flavor.name(),
        has_timeout = file.has_timeout,
        "Rendered route registration"
    );
    emit_file(&file.path, &file.content, WriteMode::ForceOverwrite)
}
