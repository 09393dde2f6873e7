use super::model::{AuthKind, GlobalConfig, OpenApiConfig, ServerConfig};
use crate::error::ConfigError;

/// Resolve the effective configuration for the server at the given 1-based
/// ordinal position.
///
/// Starts from a copy of `global.servers[index - 1]` and fills every unset
/// field of its nested `openapi` block from the global defaults. This is a
/// field-level fallback merge, not a full-structure overwrite: a server that
/// sets only `auth` still inherits `host`, `basePath`, `schemes`, `spec`,
/// `tags`, and `ui` wherever it leaves them unset.
///
/// The shared `global` value is never mutated, so concurrent resolution for
/// different indices never interferes.
///
/// # Errors
///
/// Returns [`ConfigError::OutOfRange`] when `index` is outside
/// `[1, global.servers.len()]`.
pub fn resolve(global: &GlobalConfig, index: usize) -> Result<ServerConfig, ConfigError> {
    if index < 1 || index > global.servers.len() {
        return Err(ConfigError::OutOfRange {
            index,
            count: global.servers.len(),
        });
    }
    let mut server = global.servers[index - 1].clone();
    merge_openapi(&mut server.openapi, &global.openapi);
    Ok(server)
}

/// Fill unset fields of `local` from `global`, field by field.
///
/// Scalars: non-empty wins, else inherit. `enabled` and `auth` treat their
/// zero values (`false`, `None`) as unset. Collections (`schemes`, `tags`)
/// are all-or-nothing units: a non-empty local collection fully replaces the
/// global one, an empty local collection defers entirely to it. No
/// element-wise union is ever performed.
fn merge_openapi(local: &mut OpenApiConfig, global: &OpenApiConfig) {
    if !local.enabled {
        local.enabled = global.enabled;
    }
    merge_str(&mut local.host, &global.host);
    merge_str(&mut local.base_path, &global.base_path);
    if local.schemes.is_empty() {
        local.schemes = global.schemes.clone();
    }
    if local.auth == AuthKind::None {
        local.auth = global.auth;
    }
    if local.tags.is_empty() {
        local.tags = global.tags.clone();
    }

    merge_str(&mut local.spec.title, &global.spec.title);
    merge_str(&mut local.spec.description, &global.spec.description);
    merge_str(&mut local.spec.version, &global.spec.version);
    merge_str(&mut local.spec.contact.name, &global.spec.contact.name);
    merge_str(&mut local.spec.contact.email, &global.spec.contact.email);
    merge_str(&mut local.spec.contact.url, &global.spec.contact.url);
    merge_str(&mut local.spec.license.name, &global.spec.license.name);
    merge_str(&mut local.spec.license.url, &global.spec.license.url);

    merge_str(&mut local.ui.url, &global.ui.url);
    merge_str(&mut local.ui.api, &global.ui.api);
    merge_str(&mut local.ui.dist, &global.ui.dist);
    merge_str(&mut local.ui.entrypoint, &global.ui.entrypoint);
    merge_str(&mut local.ui.external, &global.ui.external);
}

fn merge_str(local: &mut String, global: &str) {
    if local.is_empty() {
        *local = global.to_string();
    }
}
