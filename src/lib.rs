//! # routewire
//!
//! **routewire** generates route-registration source and middleware scaffolds
//! for a Go HTTP router from an annotated API specification.
//!
//! ## Overview
//!
//! A specification describes a service as ordered groups of routes. Groups
//! carry string annotations (`jwt`, `jwtTransition`, `signature`,
//! `middleware`, `prefix`, `timeout`, `group`) that become typed policies and,
//! finally, registration options in the generated file.
//!
//! The library is organized into a handful of modules:
//!
//! - **[`spec`]** - specification model and YAML/JSON loading
//! - **[`generator`]** - annotation extraction, IR, renderers, imports and file writing
//! - **[`config`]** - generation settings from `routewire.toml` and flags
//! - **[`error`]** - the [`GenError`] type returned by every generation step
//! - **[`logging`]** - `tracing` subscriber setup for the binary
//! - **[`cli`]** - the `routewire-gen` command line
//!
//! ### Code Generation Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant User
//!     participant CLI as CLI<br/>(routewire-gen)
//!     participant Spec as spec::load_spec
//!     participant Group as generator::group
//!     participant Render as generator::render
//!     participant Templates as generator::templates
//!     participant FS as File System
//!
//!     User->>CLI: routewire-gen generate --spec api.yaml --dir shop
//!     CLI->>Spec: load_spec("api.yaml")
//!     Spec-->>CLI: ApiSpec
//!     CLI->>Group: build_groups(&spec, flavor)
//!     Group-->>CLI: Vec<GroupIr>
//!     CLI->>Render: renderer_for(flavor).render(groups)
//!     Render-->>CLI: RenderedRoutes
//!     CLI->>Templates: render routes.tpl
//!     Templates->>FS: remove + write internal/handler/routes.go
//!     CLI->>Templates: gen_file(middleware.tpl) per middleware
//!     Templates->>FS: write internal/middleware/*.go if absent
//!     CLI-->>User: ✅ Generated route registration
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use routewire::config::GenConfig;
//! use routewire::generator::{generate, TemplateStore};
//! use routewire::spec::load_spec;
//!
//! let spec = load_spec("api.yaml".as_ref())?;
//! generate("shop".as_ref(), &spec, &GenConfig::default(), &TemplateStore::builtin())?;
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod spec;

pub use config::GenConfig;
pub use error::GenError;
pub use generator::{generate, Flavor, GenerationReport};
pub use spec::{load_spec, ApiSpec};
