use http::Method;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

use crate::middleware::CorsPolicy;
use crate::static_files::StaticFiles;

/// Request view handed to a route handler
#[derive(Debug, Clone)]
pub struct HandlerRequest {
    pub method: Method,
    pub path: String,
    pub query: HashMap<String, String>,
    pub body: Option<Value>,
}

/// Response produced by a route handler
#[derive(Debug, Clone)]
pub struct HandlerResponse {
    pub status: u16,
    pub body: Value,
}

impl HandlerResponse {
    pub fn ok_json(body: Value) -> Self {
        Self { status: 200, body }
    }
}

pub type Handler = Arc<dyn Fn(&HandlerRequest) -> HandlerResponse + Send + Sync>;

/// Where a declared parameter is carried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    Body,
}

impl ParameterLocation {
    /// Descriptor `in` field spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterLocation::Path => "path",
            ParameterLocation::Query => "query",
            ParameterLocation::Header => "header",
            ParameterLocation::Body => "body",
        }
    }
}

/// Declared parameter on a route, surfaced verbatim in the descriptor
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterMeta {
    pub name: String,
    pub location: ParameterLocation,
    pub required: bool,
    /// Descriptor `type` field, e.g. `string` or `integer`
    pub param_type: String,
}

/// One HTTP route definition
///
/// Tag metadata is a typed set keyed by name: bulk assignment via
/// [`RouteGroup::attach_tags`] and per-route tags union without duplicates.
#[derive(Clone)]
pub struct Route {
    pub method: Method,
    pub path: String,
    pub handler: Handler,
    pub parameters: Vec<ParameterMeta>,
    /// Declared response codes with their descriptions
    pub responses: BTreeMap<u16, String>,
    pub tags: BTreeSet<String>,
}

impl Route {
    pub fn new<F>(method: Method, path: &str, handler: F) -> Self
    where
        F: Fn(&HandlerRequest) -> HandlerResponse + Send + Sync + 'static,
    {
        Self {
            method,
            path: path.to_string(),
            handler: Arc::new(handler),
            parameters: Vec::new(),
            responses: BTreeMap::new(),
            tags: BTreeSet::new(),
        }
    }

    pub fn with_param(mut self, param: ParameterMeta) -> Self {
        self.parameters.push(param);
        self
    }

    pub fn with_response(mut self, status: u16, description: &str) -> Self {
        self.responses.insert(status, description.to_string());
        self
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tags.insert(tag.to_string());
        self
    }
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("parameters", &self.parameters)
            .field("responses", &self.responses)
            .field("tags", &self.tags)
            .finish()
    }
}

/// An externally-owned set of HTTP route definitions
///
/// The publisher only reads groups to enumerate them for the descriptor and
/// to attach tag metadata; the embedding application owns their lifecycle.
#[derive(Debug, Clone, Default)]
pub struct RouteGroup {
    pub name: String,
    pub routes: Vec<Route>,
}

impl RouteGroup {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            routes: Vec::new(),
        }
    }

    pub fn route(mut self, route: Route) -> Self {
        self.routes.push(route);
        self
    }

    /// Bulk-assign tags to every route in the group.
    ///
    /// Per-route tag collections are sets keyed by name, so repeated calls
    /// with the same tags are idempotent and never duplicate tags a route
    /// already carries.
    pub fn attach_tags<S: AsRef<str>>(&mut self, tags: &[S]) {
        for route in &mut self.routes {
            for tag in tags {
                route.tags.insert(tag.as_ref().to_string());
            }
        }
    }
}

/// Route registry backing one server's listener
///
/// Holds the business route groups plus everything the documentation
/// pipeline registers: descriptor JSON documents, fixed-path redirects,
/// static UI mounts, and an optional cross-origin policy. Exclusively owned
/// by its server's task; mutation is not internally synchronized.
#[derive(Clone, Default)]
pub struct RouteRegistry {
    groups: Vec<RouteGroup>,
    documents: HashMap<String, Value>,
    redirects: HashMap<String, String>,
    static_mounts: Vec<(String, StaticFiles)>,
    cors: Option<CorsPolicy>,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_group(&mut self, group: RouteGroup) {
        self.groups.push(group);
    }

    pub fn groups(&self) -> &[RouteGroup] {
        &self.groups
    }

    /// Register a JSON document served as `application/json` at `path`.
    pub fn register_document(&mut self, path: &str, document: Value) {
        self.documents.insert(path.to_string(), document);
    }

    /// Register a fixed-path HTTP 302 redirect.
    pub fn register_redirect(&mut self, path: &str, location: &str) {
        self.redirects
            .insert(path.to_string(), location.to_string());
    }

    /// Mount a static file server rooted at `dist` under `prefix`.
    pub fn mount_static(&mut self, prefix: &str, dist: &str) {
        self.static_mounts
            .push((prefix.to_string(), StaticFiles::new(dist)));
    }

    pub fn set_cors(&mut self, policy: CorsPolicy) {
        self.cors = Some(policy);
    }

    pub fn cors(&self) -> Option<&CorsPolicy> {
        self.cors.as_ref()
    }

    pub fn document(&self, path: &str) -> Option<&Value> {
        self.documents.get(path)
    }

    pub fn redirect(&self, path: &str) -> Option<&str> {
        self.redirects.get(path).map(String::as_str)
    }

    pub fn static_mounts(&self) -> &[(String, StaticFiles)] {
        &self.static_mounts
    }

    /// Exact-match route lookup. Path templating and pattern matching belong
    /// to the embedding routing engine, not this registry.
    pub fn find_route(&self, method: &Method, path: &str) -> Option<&Route> {
        self.groups
            .iter()
            .flat_map(|g| g.routes.iter())
            .find(|r| r.method == *method && r.path == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_group() -> RouteGroup {
        RouteGroup::new("users").route(
            Route::new(Method::GET, "/users", |_req| {
                HandlerResponse::ok_json(json!([]))
            })
            .with_tag("User"),
        )
    }

    #[test]
    fn test_attach_tags_is_idempotent() {
        let mut group = sample_group();
        group.attach_tags(&["Account", "User"]);
        group.attach_tags(&["Account", "User"]);
        let tags: Vec<_> = group.routes[0].tags.iter().cloned().collect();
        assert_eq!(tags, vec!["Account", "User"]);
    }

    #[test]
    fn test_find_route_exact_match_only() {
        let mut registry = RouteRegistry::new();
        registry.add_group(sample_group());
        assert!(registry.find_route(&Method::GET, "/users").is_some());
        assert!(registry.find_route(&Method::POST, "/users").is_none());
        assert!(registry.find_route(&Method::GET, "/users/1").is_none());
    }
}
