//! Import block for the generated route-registration file.

use super::annotations::{folder_alias, resolve_sub_group};
use super::format::join_packages;
use crate::spec::ApiSpec;
use std::collections::BTreeSet;

/// Project-relative package of the service context.
pub const CONTEXT_DIR: &str = "internal/svc";
/// Project-relative package of the handlers; sub-groups live below it.
pub const HANDLER_DIR: &str = "internal/handler";
/// Project-relative package of the middleware scaffolds.
pub const MIDDLEWARE_DIR: &str = "internal/middleware";
/// Module path of the router runtime when none is configured.
pub const DEFAULT_ROUTER_MODULE: &str = "github.com/zeromicro/go-zero";

/// Build the import block: sorted project imports, a blank line, then the router package.
///
/// Each distinct sub-package folder referenced by a route (or its owning
/// group) contributes exactly one aliased entry.
pub fn route_imports(root_package: &str, router_module: &str, spec: &ApiSpec) -> String {
    let mut imports = BTreeSet::new();
    imports.insert(format!("\"{}\"", join_packages(&[root_package, CONTEXT_DIR])));
    for group in spec.groups() {
        for route in &group.routes {
            if let Some(folder) = resolve_sub_group(route, group) {
                imports.insert(format!(
                    "{} \"{}\"",
                    folder_alias(folder),
                    join_packages(&[root_package, HANDLER_DIR, folder])
                ));
            }
        }
    }
    let project_section = imports.into_iter().collect::<Vec<_>>().join("\n\t");
    let dependency = format!("\"{}\"", join_packages(&[router_module, "rest"]));
    format!("{project_section}\n\n\t{dependency}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{Group, Route};

    #[test]
    fn test_imports_without_sub_groups() {
        let spec = ApiSpec::new("s", vec![Group::new(vec![Route::new("get", "/", "index")])]);
        assert_eq!(
            route_imports("example.com/shop", DEFAULT_ROUTER_MODULE, &spec),
            "\"example.com/shop/internal/svc\"\n\n\t\"github.com/zeromicro/go-zero/rest\""
        );
    }

    #[test]
    fn test_imports_are_deduplicated_and_sorted() {
        let spec = ApiSpec::new(
            "s",
            vec![
                Group::new(vec![
                    Route::new("get", "/a", "a"),
                    Route::new("get", "/b", "b").with_annotation("group", "billing"),
                ])
                .with_annotation("group", "order"),
                Group::new(vec![Route::new("get", "/c", "c")]).with_annotation("group", "order"),
                Group::new(vec![Route::new("get", "/d", "d").with_annotation("group", "admin/user")]),
            ],
        );
        let block = route_imports("example.com/shop", "example.com/router", &spec);
        let (project, dependency) = block.split_once("\n\n\t").unwrap();
        let lines: Vec<&str> = project.split("\n\t").collect();
        assert_eq!(
            lines,
            vec![
                "\"example.com/shop/internal/svc\"",
                "adminuser \"example.com/shop/internal/handler/admin/user\"",
                "billing \"example.com/shop/internal/handler/billing\"",
                "order \"example.com/shop/internal/handler/order\"",
            ]
        );
        assert_eq!(dependency, "\"example.com/router/rest\"");
        assert_eq!(block.matches("order \"").count(), 1);
    }
}
