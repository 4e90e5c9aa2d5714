use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::config::{load_config, resolve_config_path, GenConfig};
use crate::generator::{
    build_groups, collect_middleware, generate, render_routes, Flavor, GroupIr, TemplateStore,
};
use crate::spec::{load_spec, ApiSpec};

/// Command-line interface for routewire
///
/// Generates route registration and middleware scaffolds from an annotated
/// API specification.
#[derive(Parser, Debug)]
#[command(name = "routewire-gen", version)]
#[command(about = "Route registration generator", long_about = None)]
pub struct Cli {
    /// Log at debug level with source locations
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Settings shared by every command that reads a specification.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct GenOptions {
    /// Module path of the generated project (default: output directory name)
    #[arg(long)]
    pub root_package: Option<String>,

    /// File naming style: gozero, go_zero, go-zero, goZero, GoZero
    #[arg(long)]
    pub style: Option<String>,

    /// Target router flavor
    #[arg(long, value_enum)]
    pub flavor: Option<Flavor>,

    /// Template home; files under <home>/api/ override built-in templates
    #[arg(long)]
    pub home: Option<PathBuf>,

    /// Path to routewire.toml (default: auto-detect next to the spec)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the route file and middleware scaffolds
    Generate {
        /// Path to the API specification file (YAML or JSON)
        #[arg(short, long)]
        spec: PathBuf,

        /// Project directory to generate into
        #[arg(short, long)]
        dir: PathBuf,

        #[command(flatten)]
        options: GenOptions,

        /// Print the route file to stdout instead of writing anything
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },
    /// Print the resolved route groups of a specification
    Inspect {
        /// Path to the API specification file (YAML or JSON)
        #[arg(short, long)]
        spec: PathBuf,

        #[command(flatten)]
        options: GenOptions,
    },
}

/// Merge file configuration and command-line overrides.
///
/// An explicit `--config` that does not exist is an error; a missing
/// auto-detected file just means defaults.
pub fn resolve_gen_config(
    spec: &Path,
    dir: Option<&Path>,
    options: &GenOptions,
) -> anyhow::Result<GenConfig> {
    if let Some(explicit) = &options.config {
        if !explicit.exists() {
            bail!("Config file not found: {}", explicit.display());
        }
    }

    let mut config = match resolve_config_path(options.config.as_deref(), spec) {
        Some(path) => {
            info!(path = %path.display(), "Using config file");
            load_config(&path)?.unwrap_or_default()
        }
        None => GenConfig::default(),
    };

    if let Some(root_package) = &options.root_package {
        config.root_package = root_package.clone();
    }
    if let Some(style) = &options.style {
        config.naming_format = style.clone();
    }
    if let Some(flavor) = options.flavor {
        config.flavor = flavor;
    }
    if let Some(home) = &options.home {
        config.template_home = Some(home.clone());
    }

    if config.root_package.trim().is_empty() {
        if let Some(name) = dir.and_then(|d| d.file_name()).and_then(|n| n.to_str()) {
            warn!(root_package = name, "No root package configured, using output directory name");
            config.root_package = name.to_string();
        }
    }

    Ok(config)
}

fn describe_group(lines: &mut Vec<String>, index: usize, group: &GroupIr) {
    lines.push(format!("Group {index}: {} route(s)", group.routes.len()));
    if let Some(jwt) = &group.jwt {
        lines.push(format!("  jwt: {jwt}"));
    }
    if let Some(name) = &group.jwt_transition {
        lines.push(format!("  jwtTransition: {name}"));
    }
    if group.signature {
        lines.push("  signature: true".to_string());
    }
    if let Some(prefix) = &group.prefix {
        lines.push(format!("  prefix: {prefix}"));
    }
    if let Some(timeout) = &group.timeout {
        lines.push(format!("  timeout: {timeout}"));
    }
    if !group.middleware.is_empty() {
        lines.push(format!("  middleware: {}", group.middleware.join(", ")));
    }
    for route in &group.routes {
        lines.push(format!("  {} {} → {}", route.method, route.path, route.handler));
    }
}

/// Human-readable summary of the IR built for `spec` under `flavor`.
pub fn inspect_summary(spec: &ApiSpec, flavor: Flavor) -> anyhow::Result<String> {
    let groups = build_groups(spec, flavor)?;
    let route_count: usize = groups.iter().map(|g| g.routes.len()).sum();

    let mut lines = vec![format!(
        "Service: {} ({} group(s), {route_count} route(s), flavor {flavor})",
        spec.service.name,
        groups.len()
    )];
    for (index, group) in groups.iter().enumerate() {
        describe_group(&mut lines, index, group);
    }
    let middleware = collect_middleware(spec);
    if !middleware.is_empty() {
        lines.push(format!("Middleware: {}", middleware.join(", ")));
    }
    lines.push(String::new());
    Ok(lines.join("\n"))
}

/// Execute the parsed command.
pub fn run_cli(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate {
            spec,
            dir,
            options,
            dry_run,
        } => {
            let api = load_spec(&spec)?;
            let config = resolve_gen_config(&spec, Some(&dir), &options)?;
            let store = TemplateStore::new(config.template_home.clone());

            if dry_run {
                let file = render_routes(&dir, &api, &config, &store)
                    .context("Failed to render route file")?;
                info!(path = %file.path.display(), "Dry run, nothing written");
                print!("{}", file.content);
                return Ok(());
            }

            generate(&dir, &api, &config, &store).context("Generation failed")?;
            Ok(())
        }
        Commands::Inspect { spec, options } => {
            let api = load_spec(&spec)?;
            let config = resolve_gen_config(&spec, None, &options)?;
            print!("{}", inspect_summary(&api, config.flavor)?);
            Ok(())
        }
    }
}
