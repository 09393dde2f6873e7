use serde::Deserialize;

/// Top-level configuration tree for one process
///
/// Holds the global OpenAPI defaults plus one [`ServerConfig`] entry per
/// network listener the process will own. Built once at startup from the
/// declarative source and read-only thereafter; every consumer takes it by
/// shared reference.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    pub openapi: OpenApiConfig,
    pub servers: Vec<ServerConfig>,
}

/// One network listener and its local OpenAPI overrides
///
/// Servers are addressed by 1-based ordinal position within
/// `GlobalConfig::servers`; positions are stable for the process lifetime.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub name: String,
    /// Bind address as `host:port`
    pub addr: String,
    pub description: String,
    /// Server-local overrides; unset fields inherit the global defaults
    pub openapi: OpenApiConfig,
}

/// OpenAPI publishing configuration
///
/// Every field is independently "set" or "unset" (serde default); unset is
/// the unit of the field-level fallback merge in [`crate::config::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OpenApiConfig {
    pub enabled: bool,
    /// Address the documentation viewer should dial, independent of the bind
    /// address
    pub host: String,
    #[serde(rename = "basePath")]
    pub base_path: String,
    /// URL schemes offered to viewers, e.g. `["https"]`. The declarative
    /// source spells this key `schemas`.
    #[serde(rename = "schemas")]
    pub schemes: Vec<String>,
    pub auth: AuthKind,
    pub spec: SpecInfo,
    pub tags: Vec<TagConfig>,
    pub ui: UiConfig,
}

/// Security scheme declared in the descriptor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthKind {
    #[default]
    None,
    Basic,
}

/// Descriptor `info` block metadata
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpecInfo {
    pub title: String,
    #[serde(rename = "desc")]
    pub description: String,
    pub contact: ContactConfig,
    pub license: LicenseConfig,
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub name: String,
    pub email: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LicenseConfig {
    pub name: String,
    pub url: String,
}

/// Descriptor tag entry
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TagConfig {
    pub name: String,
    #[serde(rename = "desc")]
    pub description: String,
}

/// Documentation UI configuration
///
/// `external` selects the redirect strategy; `dist`/`entrypoint` select the
/// locally served bundle. The two are mutually exclusive in effect:
/// `external` wins when both are present.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Base URL of an externally hosted UI (informational)
    pub url: String,
    /// Path suffix at which the descriptor JSON is served
    pub api: String,
    /// Local directory holding a UI bundle
    pub dist: String,
    /// Local path prefix under which the bundle is served
    pub entrypoint: String,
    /// Base URL of an externally hosted UI used for the redirect
    pub external: String,
}
