use super::http_server::{HttpServer, ServerHandle};
use super::service::DocService;
use crate::config::{self, GlobalConfig};
use crate::descriptor::build_descriptor;
use crate::publisher::{self, DEFAULT_API_PATH};
use crate::registry::RouteRegistry;

/// Start the server at the given 1-based index.
///
/// Sequence: resolve the effective configuration, build the descriptor from
/// the currently-registered route groups, register its JSON representation
/// at the descriptor path, run the publisher, then bind `resolved.addr`.
///
/// The registry is moved into the server's service; it is exclusively owned
/// by that listener from here on.
///
/// # Errors
///
/// Fails on an out-of-range index, a malformed UI URL, or a bind failure.
/// All are fatal startup defects; no listener is left bound on error.
pub fn start(
    global: &GlobalConfig,
    index: usize,
    mut registry: RouteRegistry,
) -> anyhow::Result<ServerHandle> {
    let resolved = config::resolve(global, index)?;

    let descriptor = build_descriptor(&resolved, registry.groups());
    let descriptor_path = if resolved.openapi.ui.api.is_empty() {
        DEFAULT_API_PATH.to_string()
    } else {
        resolved.openapi.ui.api.clone()
    };
    registry.register_document(&descriptor_path, serde_json::to_value(&descriptor)?);

    let result = publisher::publish(&resolved, &descriptor_path, &mut registry)?;
    match &result.docs_url {
        Some(url) => tracing::info!(
            server = %resolved.name,
            addr = %resolved.addr,
            docs = %url,
            "documentation published"
        ),
        None => tracing::debug!(server = %resolved.name, "no documentation page registered"),
    }

    let service = DocService::new(registry, descriptor_path);
    let handle = HttpServer(service).start(&resolved.addr)?;
    tracing::info!(server = %resolved.name, addr = %resolved.addr, "listening");
    Ok(handle)
}

/// Start the server and block until its listener terminates.
pub fn serve(global: &GlobalConfig, index: usize, registry: RouteRegistry) -> anyhow::Result<()> {
    let handle = start(global, index, registry)?;
    handle
        .join()
        .map_err(|_| anyhow::anyhow!("server coroutine panicked"))
}
