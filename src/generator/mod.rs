//! # Generator Module
//!
//! The generator turns an annotated API specification into route-registration
//! source for a Go router runtime, plus one editable scaffold per middleware.
//!
//! ## Overview
//!
//! A generation pass produces:
//! - **Route file** - `internal/handler/routes.go`, fully regenerated on every run
//! - **Middleware scaffolds** - `internal/middleware/<name>_middleware.go`, created once and then user-owned
//!
//! ## Architecture
//!
//! ```text
//! ApiSpec → Annotation Extractor → Route Grouper (IR) → Flavor Renderer → Route File
//!                                                    ↘ Import Resolver ↗
//! ApiSpec → Middleware Scaffolder → Middleware Files
//! ```
//!
//! 1. **Annotation Extractor** ([`annotations`]) - typed per-group policy records
//! 2. **Method Mapper** ([`methods`]) - one immutable table per [`Flavor`]
//! 3. **Route Grouper** ([`group`]) - ordered [`GroupIr`] with resolved handler references
//! 4. **Flavor Renderer** ([`render`]) - `Minimal` or `FeatureRich`, behind [`RouteRenderer`]
//! 5. **Import Resolver** ([`imports`]) - sorted, deduplicated import block
//! 6. **Writer** ([`templates`]) - minijinja templates, overridable on disk, two write modes
//!
//! ## Flavors
//!
//! - **Minimal** - `server.AddRoutes(...)` per group with JWT, signature, prefix
//!   and timeout options
//! - **FeatureRich** - `server.GET(...)` per route; only middleware is carried,
//!   timeouts are never rendered
//!
//! ## Usage
//!
//! ```rust,ignore
//! use routewire::config::GenConfig;
//! use routewire::generator::{generate, TemplateStore};
//! use routewire::spec::load_spec;
//!
//! let spec = load_spec("api.yaml".as_ref())?;
//! let config = GenConfig {
//!     root_package: "github.com/acme/shop".to_string(),
//!     ..GenConfig::default()
//! };
//! generate("shop".as_ref(), &spec, &config, &TemplateStore::builtin())?;
//! ```
//!
//! ## Template Customization
//!
//! Built-in templates live in `templates/`. A file with the same name under
//! `<template_home>/api/` replaces the built-in one:
//!
//! - `routes.tpl` - the route file
//! - `route-addition.tpl` - one group (minimal) or one route (feature-rich)
//! - `middleware.tpl` - middleware scaffold

pub mod annotations;
pub mod duration;
pub mod format;
pub mod group;
pub mod imports;
pub mod methods;
pub mod middleware;
pub mod render;
pub mod routes;
pub mod templates;

pub use format::{file_naming_format, join_packages, NamingFormat, DEFAULT_NAMING_FORMAT};
pub use group::{build_groups, GroupIr, RouteEntry};
pub use imports::{route_imports, DEFAULT_ROUTER_MODULE};
pub use methods::Flavor;
pub use middleware::{collect_middleware, gen_middleware};
pub use render::{renderer_for, RenderedRoutes, RouteRenderer};
pub use routes::{gen_routes, render_routes, RouteFile};
pub use templates::{TemplateStore, WriteMode, WriteOutcome};

use crate::config::GenConfig;
use crate::error::Result;
use crate::spec::ApiSpec;
use std::path::Path;

/// Files touched by one [`generate`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub routes: WriteOutcome,
    pub middleware: Vec<WriteOutcome>,
}

/// Run both generators for `spec` into the project at `dir`.
///
/// The route file is rendered and written first; a failure there stops the
/// run before any middleware scaffold is considered.
pub fn generate(
    dir: &Path,
    spec: &ApiSpec,
    config: &GenConfig,
    store: &TemplateStore,
) -> Result<GenerationReport> {
    let routes = gen_routes(dir, spec, config, store)?;
    println!("✅ Generated route registration: {}", routes.path().display());

    let middleware = gen_middleware(dir, spec, config, store)?;
    for outcome in &middleware {
        match outcome {
            WriteOutcome::Written(path) => println!("✅ Generated middleware: {}", path.display()),
            WriteOutcome::Skipped(path) => {
                println!("⚠️  Skipped existing middleware: {}", path.display())
            }
        }
    }

    Ok(GenerationReport { routes, middleware })
}
