//! # restdock
//!
//! **restdock** is a configuration-driven publisher for REST API
//! documentation across multiple independently-addressed server instances
//! sharing one process, built on the `may` coroutine runtime.
//!
//! Given a registry of HTTP route groups and a layered configuration
//! (global defaults + per-server overrides), it produces, for each server:
//!
//! - a merged effective configuration ([`config::resolve`]),
//! - a machine-readable API descriptor describing the server's routes,
//!   metadata, and security scheme ([`descriptor::build_descriptor`]),
//! - a reachable documentation entry point ([`publisher::publish`]) —
//!   either a locally served UI bundle or a 302 redirect into an externally
//!   hosted UI that consumes the descriptor.
//!
//! ## Modules
//!
//! - **[`config`]** - layered configuration model, YAML loading, and the
//!   field-level fallback merge engine
//! - **[`descriptor`]** - normalized API descriptor construction
//! - **[`publisher`]** - documentation publishing strategies (local UI vs.
//!   external UI redirect with scoped CORS)
//! - **[`registry`]** - route groups, typed per-route tag metadata, and the
//!   per-listener route registry
//! - **[`server`]** - HTTP service, listener wrapper, and the per-server
//!   dispatcher
//! - **[`middleware`]** - cross-origin policy for the descriptor endpoint
//! - **[`static_files`]** - traversal-safe UI bundle serving
//! - **[`runtime_config`]** - coroutine stack size tuning from the
//!   environment
//!
//! ## Quick start
//!
//! ```no_run
//! use restdock::{config, registry::RouteRegistry, server};
//!
//! let global = config::load_config("config/config.yaml").expect("config");
//! let registry = RouteRegistry::new();
//! // Blocks until the listener terminates or fails fatally.
//! server::serve(&global, 1, registry).expect("serve");
//! ```
//!
//! ## Configuration
//!
//! ```yaml
//! openapi:
//!   enabled: true
//!   basePath: /v1
//!   schemas: [https]
//!   spec:
//!     title: Demo
//!     desc: demo service
//!   ui:
//!     api: /apidocs.json
//!     external: https://petstore.swagger.io
//! servers:
//!   - name: acct
//!     addr: 0.0.0.0:8080
//!     openapi:
//!       auth: basic
//! ```
//!
//! Servers are addressed by 1-based ordinal position. A server inherits
//! every `openapi` field it leaves unset from the global block; collections
//! (`schemas`, `tags`) replace or defer wholesale, never element-wise.
//!
//! ## Runtime considerations
//!
//! restdock uses the `may` coroutine runtime, not tokio. Each server index
//! runs its own listener; starting one blocks its calling task until process
//! exit or a fatal bind error. Stack size is configurable via the
//! `RESTDOCK_STACK_SIZE` environment variable.

pub mod config;
pub mod descriptor;
pub mod error;
pub mod middleware;
pub mod publisher;
pub mod registry;
pub mod runtime_config;
pub mod server;
pub mod static_files;

pub use config::{load_config, resolve, GlobalConfig, OpenApiConfig, ServerConfig, UiConfig};
pub use descriptor::{build_descriptor, Descriptor};
pub use error::ConfigError;
pub use publisher::{publish, PublishResult, DEFAULT_API_PATH, DOCS_PATH};
pub use registry::{Route, RouteGroup, RouteRegistry};
