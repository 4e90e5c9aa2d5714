use serde::Serialize;
use std::time::Duration;

use super::{middleware_refs, RenderedRoutes, RouteRenderer, GROUP_SEPARATOR};
use crate::error::{GenError, Result};
use crate::generator::annotations::TIMEOUT_KEY;
use crate::generator::duration::parse_duration;
use crate::generator::group::{GroupIr, RouteEntry, CONTEXT_ACCESSOR};
use crate::generator::methods::Flavor;
use crate::generator::templates::Template;

/// Shortest timeout accepted. A bare `1` would otherwise mean one nanosecond.
pub const TIMEOUT_THRESHOLD: Duration = Duration::from_millis(1);

/// Grouped `server.AddRoutes(...)` registration.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimalRenderer;

#[derive(Serialize)]
struct GroupContext {
    feature_rich: bool,
    routes: String,
    jwt: String,
    jwt_transition: String,
    signature: String,
    prefix: String,
    timeout: String,
}

/// Validate a timeout annotation and return its whole-millisecond count.
///
/// # Errors
///
/// [`GenError::PolicyValidation`] naming `raw` when it does not parse or is
/// below [`TIMEOUT_THRESHOLD`].
pub fn timeout_millis(raw: &str) -> Result<u128> {
    let invalid = |reason: String| GenError::PolicyValidation {
        key: TIMEOUT_KEY,
        value: raw.to_string(),
        reason,
    };
    let duration = parse_duration(raw).map_err(|e| invalid(e.to_string()))?;
    if duration < TIMEOUT_THRESHOLD {
        return Err(invalid(format!(
            "timeout should not be less than 1ms, got {duration:?}"
        )));
    }
    Ok(duration.as_millis())
}

/// `[]rest.Route{...}` literal; `indent` is the indentation of the literal itself.
fn route_literal(routes: &[RouteEntry], indent: &str) -> String {
    let mut out = String::from("[]rest.Route{");
    for route in routes {
        out.push_str(&format!(
            "\n{indent}\t{{\n\
             {indent}\t\tMethod:  {},\n\
             {indent}\t\tPath:    \"{}\",\n\
             {indent}\t\tHandler: {},\n\
             {indent}\t}},",
            route.method, route.path, route.handler
        ));
    }
    out.push_str(&format!("\n{indent}}}"));
    out
}

fn routes_fragment(group: &GroupIr) -> String {
    if group.middleware.is_empty() {
        return format!("{},", route_literal(&group.routes, "\t\t"));
    }
    format!(
        "rest.WithMiddlewares(\n\
         \t\t\t[]rest.Middleware{{{}}},\n\
         \t\t\t{}...,\n\
         \t\t),",
        middleware_refs(&group.middleware).join(", "),
        route_literal(&group.routes, "\t\t\t")
    )
}

fn option(call: String) -> String {
    format!("\n\t\t{call},")
}

impl MinimalRenderer {
    fn group_context(&self, group: &GroupIr) -> Result<(GroupContext, bool)> {
        // Validate before anything of this group is rendered.
        let timeout = match &group.timeout {
            Some(raw) if self.supports_timeout() => {
                let millis = timeout_millis(raw)?;
                Some(option(format!("rest.WithTimeout({millis} * time.Millisecond)")))
            }
            _ => None,
        };
        let has_timeout = timeout.is_some();

        let jwt = group
            .jwt
            .as_ref()
            .map(|auth| {
                option(format!(
                    "rest.WithJwt({CONTEXT_ACCESSOR}.Config.{auth}.AccessSecret)"
                ))
            })
            .unwrap_or_default();
        let jwt_transition = group
            .jwt_transition
            .as_ref()
            .map(|name| {
                option(format!(
                    "rest.WithJwtTransition({CONTEXT_ACCESSOR}.Config.{name}.PrevSecret, \
                     {CONTEXT_ACCESSOR}.Config.{name}.Secret)"
                ))
            })
            .unwrap_or_default();
        let signature = if group.signature {
            option(format!(
                "rest.WithSignature({CONTEXT_ACCESSOR}.Config.Signature)"
            ))
        } else {
            String::new()
        };
        let prefix = group
            .prefix
            .as_ref()
            .map(|prefix| option(format!("rest.WithPrefix(\"{prefix}\")")))
            .unwrap_or_default();

        let ctx = GroupContext {
            feature_rich: false,
            routes: routes_fragment(group),
            jwt,
            jwt_transition,
            signature,
            prefix,
            timeout: timeout.unwrap_or_default(),
        };
        Ok((ctx, has_timeout))
    }
}

impl RouteRenderer for MinimalRenderer {
    fn flavor(&self) -> Flavor {
        Flavor::Minimal
    }

    fn supports_timeout(&self) -> bool {
        true
    }

    fn render(&self, groups: &[GroupIr], template: &Template<'_>) -> Result<RenderedRoutes> {
        let mut blocks = Vec::with_capacity(groups.len());
        let mut has_timeout = false;
        for group in groups {
            let (ctx, group_timeout) = self.group_context(group)?;
            has_timeout |= group_timeout;
            blocks.push(template.render(&ctx)?.trim().to_string());
        }
        Ok(RenderedRoutes {
            body: blocks.join(GROUP_SEPARATOR),
            has_timeout,
        })
    }
}
