//! Middleware scaffolds: one user-owned file per distinct middleware identifier.

use serde::Serialize;
use std::path::Path;

use super::annotations::{split_middleware, MIDDLEWARE_KEY};
use super::format::{capitalize_first, file_naming_format};
use super::imports::MIDDLEWARE_DIR;
use super::templates::{
    gen_file, FileGenConfig, TemplateStore, WriteMode, WriteOutcome, MIDDLEWARE_TEMPLATE,
    MIDDLEWARE_TEMPLATE_FILE,
};
use crate::config::GenConfig;
use crate::error::Result;
use crate::spec::ApiSpec;

const SUFFIX: &str = "middleware";

#[derive(Serialize)]
struct MiddlewareContext<'a> {
    name: &'a str,
    feature_rich: bool,
}

/// Distinct middleware identifiers across every group, in first-seen order.
pub fn collect_middleware(spec: &ApiSpec) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for group in spec.groups() {
        let Some(value) = group.annotations.get(MIDDLEWARE_KEY) else {
            continue;
        };
        for item in split_middleware(value) {
            if !seen.contains(&item) {
                seen.push(item);
            }
        }
    }
    seen
}

fn strip_suffix(item: &str) -> &str {
    let cut = item.len().saturating_sub(SUFFIX.len());
    match item.get(cut..) {
        Some(tail) if tail.eq_ignore_ascii_case(SUFFIX) => &item[..cut],
        _ => item,
    }
}

/// File base name before naming-format conversion: `OrderAuditMiddleware` → `orderaudit_middleware`.
///
/// The identifier is lowercased first, so scaffolds keep the names goctl gives them.
pub fn middleware_file_base(item: &str) -> String {
    format!("{}_{SUFFIX}", strip_suffix(&item.to_lowercase()))
}

/// Exported type name: `authMiddleware` and `auth` both become `AuthMiddleware`.
pub fn middleware_symbol(item: &str) -> String {
    capitalize_first(&format!("{}Middleware", strip_suffix(item)))
}

/// Emit a scaffold for every middleware identifier in `spec`.
///
/// Existing files are left alone; the outcomes report which ones were skipped.
pub fn gen_middleware(
    dir: &Path,
    spec: &ApiSpec,
    config: &GenConfig,
    store: &TemplateStore,
) -> Result<Vec<WriteOutcome>> {
    collect_middleware(spec)
        .iter()
        .map(|item| {
            let filename = format!(
                "{}.go",
                file_naming_format(&config.naming_format, &middleware_file_base(item))?
            );
            let symbol = middleware_symbol(item);
            let cfg = FileGenConfig {
                dir,
                subdir: MIDDLEWARE_DIR,
                filename,
                template_name: "middleware",
                template_file: MIDDLEWARE_TEMPLATE_FILE,
                builtin: MIDDLEWARE_TEMPLATE,
                mode: WriteMode::CreateIfAbsent,
            };
            gen_file(
                store,
                &cfg,
                MiddlewareContext {
                    name: &symbol,
                    feature_rich: config.flavor.is_feature_rich(),
                },
            )
        })
        .collect()
}
