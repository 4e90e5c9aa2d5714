//! # CLI Module
//!
//! Command-line interface for the `routewire-gen` binary.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! Render `internal/handler/routes.go` and any missing middleware scaffolds:
//!
//! ```bash
//! routewire-gen generate --spec api.yaml --dir shop --root-package github.com/acme/shop
//! ```
//!
//! Options:
//! - `--spec <FILE>` - API specification, YAML or JSON (required)
//! - `--dir <DIR>` - project directory to generate into (required)
//! - `--root-package <PKG>` - module path used for project imports
//! - `--style <STYLE>` - file naming style (default: gozero)
//! - `--flavor <minimal|feature-rich>` - target router flavor (default: minimal)
//! - `--home <DIR>` - template overrides, read from `<DIR>/api/`
//! - `--config <FILE>` - `routewire.toml`; auto-detected next to the spec
//! - `--dry-run` - print the route file instead of writing it
//!
//! ### `inspect`
//!
//! Print the resolved groups, policies and handler references:
//!
//! ```bash
//! routewire-gen inspect --spec api.yaml --flavor feature-rich
//! ```
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! use routewire::cli::{Cli, run_cli};
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! run_cli(cli)?;
//! ```

mod commands;


pub use commands::{inspect_summary, resolve_gen_config, run_cli, Cli, Commands, GenOptions};
