use serde::Serialize;

use super::{middleware_refs, RenderedRoutes, RouteRenderer, GROUP_SEPARATOR};
use crate::error::Result;
use crate::generator::group::GroupIr;
use crate::generator::methods::Flavor;
use crate::generator::templates::Template;

/// Per-route `server.<METHOD>(...)` registration.
///
/// Only method, path, middleware and handler are rendered. Timeouts are never
/// emitted and `has_timeout` is always `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureRichRenderer;

#[derive(Serialize)]
struct RouteContext<'a> {
    feature_rich: bool,
    method: &'a str,
    path: &'a str,
    middleware: &'a str,
    handler: &'a str,
}

impl RouteRenderer for FeatureRichRenderer {
    fn flavor(&self) -> Flavor {
        Flavor::FeatureRich
    }

    fn supports_timeout(&self) -> bool {
        false
    }

    fn render(&self, groups: &[GroupIr], template: &Template<'_>) -> Result<RenderedRoutes> {
        let mut blocks = Vec::with_capacity(groups.len());
        for group in groups {
            let middleware: String = middleware_refs(&group.middleware)
                .iter()
                .map(|m| format!(", {m}"))
                .collect();
            let statements = group
                .routes
                .iter()
                .map(|route| {
                    let rendered = template.render(RouteContext {
                        feature_rich: true,
                        method: route.method,
                        path: &route.path,
                        middleware: &middleware,
                        handler: &route.handler,
                    })?;
                    Ok(rendered.trim().to_string())
                })
                .collect::<Result<Vec<_>>>()?;
            if !statements.is_empty() {
                blocks.push(statements.join("\n\t"));
            }
        }
        Ok(RenderedRoutes {
            body: blocks.join(GROUP_SEPARATOR),
            has_timeout: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::group::RouteEntry;
    use crate::generator::templates::ROUTE_ADDITION_TEMPLATE;

    fn render(groups: &[GroupIr]) -> RenderedRoutes {
        let template = Template::compile("route-addition", ROUTE_ADDITION_TEMPLATE).unwrap();
        FeatureRichRenderer.render(groups, &template).unwrap()
    }

    fn group(routes: &[(&'static str, &str, &str)]) -> GroupIr {
        GroupIr {
            routes: routes
                .iter()
                .map(|&(method, path, handler)| RouteEntry {
                    method,
                    path: path.to_string(),
                    handler: handler.to_string(),
                })
                .collect(),
            ..GroupIr::default()
        }
    }

    #[test]
    fn test_one_statement_per_route() {
        let out = render(&[
            group(&[
                ("GET", "/orders", "listOrdersHandler(serverCtx)"),
                ("POST", "/orders", "createOrderHandler(serverCtx)"),
            ]),
            group(&[("DELETE", "/carts/:id", "cart.DeleteCartHandler(serverCtx)")]),
        ]);
        assert_eq!(
            out.body,
            "server.GET(\"/orders\", listOrdersHandler(serverCtx))\n\
             \tserver.POST(\"/orders\", createOrderHandler(serverCtx))\n\
             \n\
             \tserver.DELETE(\"/carts/:id\", cart.DeleteCartHandler(serverCtx))"
        );
    }

    #[test]
    fn test_middleware_shared_by_group_routes() {
        let mut g = group(&[("GET", "/a", "aHandler(serverCtx)"), ("PUT", "/b", "bHandler(serverCtx)")]);
        g.middleware = vec!["Auth".to_string(), "Log".to_string()];
        let out = render(&[g]);
        assert_eq!(
            out.body,
            "server.GET(\"/a\", serverCtx.Auth, serverCtx.Log, aHandler(serverCtx))\n\
             \tserver.PUT(\"/b\", serverCtx.Auth, serverCtx.Log, bHandler(serverCtx))"
        );
    }

    #[test]
    fn test_timeout_is_ignored() {
        let mut g = group(&[("GET", "/slow", "slowHandler(serverCtx)")]);
        g.timeout = Some("500ms".to_string());
        let out = render(&[g.clone()]);
        assert!(!out.has_timeout);
        assert!(!out.body.contains("Timeout"));
        assert!(!out.body.contains("500"));

        // Invalid values are not even validated under this flavor.
        g.timeout = Some("1ns".to_string());
        assert!(!render(&[g]).has_timeout);
    }
}
