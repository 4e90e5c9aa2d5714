//! Route grouping: specification → ordered, render-ready IR.

use super::annotations::{folder_alias, resolve_sub_group, GroupPolicy};
use super::format::capitalize_first;
use super::methods::Flavor;
use crate::error::{GenError, Result};
use crate::spec::{ApiSpec, Group};
use tracing::debug;

/// Expression through which generated code reaches the service context.
pub const CONTEXT_ACCESSOR: &str = "serverCtx";

/// One route, resolved for the selected flavor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    /// Backend-specific method symbol
    pub method: &'static str,
    pub path: String,
    /// Handler call, prefixed with the sub-package alias when one applies
    pub handler: String,
}

/// One input group with its routes and group-level policies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupIr {
    pub routes: Vec<RouteEntry>,
    /// Config entry holding the access secret, when JWT is enabled
    pub jwt: Option<String>,
    /// Config entry holding the previous/current secret pair
    pub jwt_transition: Option<String>,
    pub signature: bool,
    /// Unvalidated timeout annotation; checked by renderers that honour it
    pub timeout: Option<String>,
    /// Middleware identifiers in annotation order, repeats kept
    pub middleware: Vec<String>,
    pub prefix: Option<String>,
}

impl GroupIr {
    pub fn jwt_enabled(&self) -> bool {
        self.jwt.is_some()
    }
}

/// Handler function name: one trailing `Handler`/`handler` is replaced by `Handler`.
pub fn handler_name(raw: &str) -> String {
    let base = raw.trim();
    let base = base
        .strip_suffix("Handler")
        .or_else(|| base.strip_suffix("handler"))
        .unwrap_or(base);
    format!("{base}Handler")
}

/// Handler call expression, e.g. `order.GetOrderHandler(serverCtx)`.
///
/// Only the exported name is capitalised; the alias is used verbatim.
pub fn handler_reference(raw: &str, alias: Option<&str>) -> String {
    let call = format!("{}({CONTEXT_ACCESSOR})", handler_name(raw));
    match alias {
        Some(alias) => format!("{alias}.{}", capitalize_first(&call)),
        None => call,
    }
}

fn build_group(group: &Group, flavor: Flavor) -> Result<GroupIr> {
    let table = flavor.method_table();
    let routes = group
        .routes
        .iter()
        .map(|route| {
            let method = table
                .lookup(&route.method)
                .ok_or_else(|| GenError::UnsupportedMethod {
                    method: route.method.clone(),
                    path: route.path.clone(),
                    flavor: flavor.name(),
                })?;
            let alias = resolve_sub_group(route, group).map(folder_alias);
            Ok(RouteEntry {
                method,
                path: route.path.clone(),
                handler: handler_reference(&route.handler, alias.as_deref()),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let policy = GroupPolicy::from_group(group);
    Ok(GroupIr {
        routes,
        jwt: policy.jwt,
        jwt_transition: policy.jwt_transition,
        signature: policy.signature,
        timeout: policy.timeout,
        middleware: policy.middleware,
        prefix: policy.prefix,
    })
}

/// Build one [`GroupIr`] per specification group, preserving order throughout.
///
/// # Errors
///
/// Returns [`GenError::UnsupportedMethod`] when a route's method is missing
/// from the flavor's method table.
pub fn build_groups(spec: &ApiSpec, flavor: Flavor) -> Result<Vec<GroupIr>> {
    spec.groups()
        .iter()
        .enumerate()
        .map(|(index, group)| {
            let ir = build_group(group, flavor)?;
            debug!(
                group = index,
                routes = ir.routes.len(),
                middleware = ir.middleware.len(),
                "Built route group"
            );
            Ok(ir)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::Route;

    fn spec_with(group: Group) -> ApiSpec {
        ApiSpec::new("shop", vec![group])
    }

    #[test]
    fn test_handler_name_suffix() {
        assert_eq!(handler_name("getOrder"), "getOrderHandler");
        assert_eq!(handler_name("getOrderHandler"), "getOrderHandler");
        assert_eq!(handler_name(" ping handler"), "ping Handler");
    }

    #[test]
    fn test_handler_reference_capitalizes_only_with_alias() {
        assert_eq!(handler_reference("getOrder", None), "getOrderHandler(serverCtx)");
        assert_eq!(
            handler_reference("getOrder", Some("order")),
            "order.GetOrderHandler(serverCtx)"
        );
        assert_eq!(
            handler_reference("list", Some("adminuser")),
            "adminuser.ListHandler(serverCtx)"
        );
    }

    #[test]
    fn test_route_level_group_overrides_group_level() {
        let group = Group::new(vec![
            Route::new("get", "/orders/:id", "getOrder").with_annotation("group", "order"),
            Route::new("get", "/invoices", "listInvoices"),
        ])
        .with_annotation("group", "billing");
        let groups = build_groups(&spec_with(group), Flavor::Minimal).unwrap();
        let routes = &groups[0].routes;
        assert_eq!(routes[0].handler, "order.GetOrderHandler(serverCtx)");
        assert_eq!(routes[1].handler, "billing.ListInvoicesHandler(serverCtx)");
    }

    #[test]
    fn test_nested_folder_alias() {
        let group = Group::new(vec![Route::new("post", "/users", "createUser")])
            .with_annotation("group", "admin/user");
        let groups = build_groups(&spec_with(group), Flavor::Minimal).unwrap();
        assert_eq!(
            groups[0].routes[0].handler,
            "adminuser.CreateUserHandler(serverCtx)"
        );
    }

    #[test]
    fn test_order_is_preserved_and_methods_mapped() {
        let spec = ApiSpec::new(
            "shop",
            vec![
                Group::new(vec![
                    Route::new("post", "/b", "b"),
                    Route::new("get", "/a", "a"),
                ]),
                Group::new(vec![Route::new("delete", "/c", "c")]),
            ],
        );
        let groups = build_groups(&spec, Flavor::FeatureRich).unwrap();
        let flat: Vec<(&str, &str)> = groups
            .iter()
            .flat_map(|g| g.routes.iter().map(|r| (r.method, r.path.as_str())))
            .collect();
        assert_eq!(flat, vec![("POST", "/b"), ("GET", "/a"), ("DELETE", "/c")]);
    }

    #[test]
    fn test_policies_are_carried_into_ir() {
        let group = Group::new(vec![Route::new("get", "/x", "x")])
            .with_annotation("jwt", "Auth")
            .with_annotation("middleware", "A,B,A")
            .with_annotation("prefix", "v1/")
            .with_annotation("timeout", "2s");
        let groups = build_groups(&spec_with(group), Flavor::Minimal).unwrap();
        let ir = &groups[0];
        assert!(ir.jwt_enabled());
        assert_eq!(ir.middleware, vec!["A", "B", "A"]);
        assert_eq!(ir.prefix.as_deref(), Some("/v1"));
        assert_eq!(ir.timeout.as_deref(), Some("2s"));
        assert!(!ir.signature);
    }

    #[test]
    fn test_unmapped_method_is_rejected() {
        let group = Group::new(vec![Route::new("trace", "/debug", "trace")]);
        let spec = spec_with(group);
        assert!(build_groups(&spec, Flavor::Minimal).is_ok());
        let err = build_groups(&spec, Flavor::FeatureRich).unwrap_err();
        match err {
            GenError::UnsupportedMethod { method, path, flavor } => {
                assert_eq!(method, "trace");
                assert_eq!(path, "/debug");
                assert_eq!(flavor, "feature-rich");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
