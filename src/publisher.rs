//! Documentation publishing strategies
//!
//! Decides, per server, how the documentation entry point is reached:
//! a 302 redirect into an externally hosted UI that loads the descriptor
//! over CORS, or a locally mounted UI bundle with a parity redirect.
//! Publishing never degrades: a malformed UI URL refuses startup instead of
//! serving a broken link.

use url::Url;

use crate::config::ServerConfig;
use crate::error::ConfigError;
use crate::middleware::CorsPolicy;
use crate::registry::RouteRegistry;

/// Well-known documentation path every strategy redirects from
pub const DOCS_PATH: &str = "/docs";

/// Descriptor path used when `ui.api` is left unset
pub const DEFAULT_API_PATH: &str = "/apidocs.json";

/// Outcome of a publish decision, recorded for logging
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PublishResult {
    /// Reachable documentation URL, if any strategy applied
    pub docs_url: Option<String>,
}

/// Choose and execute a publishing strategy for one resolved server.
///
/// Evaluated only when `openapi.enabled`:
///
/// - External-UI mode when `ui.external` is non-empty: registers a 302 from
///   [`DOCS_PATH`] to `{external}?url={scheme}://{host or addr}{descriptor_path}`.
///   When `openapi.host` is set, additionally installs a cross-origin policy
///   scoped to that host so the hosted viewer may fetch the descriptor.
/// - Local-UI mode when `ui.dist` and `ui.entrypoint` are both non-empty:
///   mounts the bundle under `entrypoint` and registers the same fixed-path
///   redirect against the listener address for parity with external mode.
/// - Otherwise a no-op: the descriptor stays reachable at its API path for
///   programmatic consumers, but no human-facing page is registered.
///
/// # Errors
///
/// [`ConfigError::MalformedUrl`] when `ui.external` or `ui.url` fails to
/// parse as an absolute URL.
pub fn publish(
    resolved: &ServerConfig,
    descriptor_path: &str,
    registry: &mut RouteRegistry,
) -> Result<PublishResult, ConfigError> {
    let openapi = &resolved.openapi;
    let ui = &openapi.ui;

    if !ui.url.is_empty() {
        check_url("ui.url", &ui.url)?;
    }
    if !ui.external.is_empty() {
        check_url("ui.external", &ui.external)?;
    }

    if !openapi.enabled {
        return Ok(PublishResult::default());
    }

    let scheme = openapi
        .schemes
        .first()
        .map(String::as_str)
        .unwrap_or("http");

    if !ui.external.is_empty() {
        // Address the documentation viewer should dial, not the bind address
        let dial_host = if openapi.host.is_empty() {
            resolved.addr.as_str()
        } else {
            openapi.host.as_str()
        };
        let api_url = format!("{scheme}://{dial_host}{descriptor_path}");
        let redirect = format!("{}?url={}", ui.external, api_url);
        registry.register_redirect(DOCS_PATH, &redirect);
        if !openapi.host.is_empty() {
            registry.set_cors(CorsPolicy::scoped_to_host(&openapi.host));
        }
        return Ok(PublishResult {
            docs_url: Some(redirect),
        });
    }

    if !ui.dist.is_empty() && !ui.entrypoint.is_empty() {
        registry.mount_static(&ui.entrypoint, &ui.dist);
        let redirect = format!(
            "{scheme}://{addr}{entrypoint}?url={scheme}://{addr}{descriptor_path}",
            addr = resolved.addr,
            entrypoint = ui.entrypoint,
        );
        registry.register_redirect(DOCS_PATH, &redirect);
        return Ok(PublishResult {
            docs_url: Some(redirect),
        });
    }

    Ok(PublishResult::default())
}

fn check_url(field: &'static str, value: &str) -> Result<(), ConfigError> {
    Url::parse(value).map_err(|_| ConfigError::MalformedUrl {
        field,
        value: value.to_string(),
    })?;
    Ok(())
}
