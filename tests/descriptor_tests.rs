use http::Method;
use restdock::config::{
    resolve, AuthKind, GlobalConfig, OpenApiConfig, ServerConfig, SpecInfo, TagConfig,
};
use restdock::descriptor::{build_descriptor, BASIC_AUTH_SCHEME};
use restdock::registry::{
    HandlerResponse, ParameterLocation, ParameterMeta, Route, RouteGroup,
};
use serde_json::json;

fn user_group() -> RouteGroup {
    RouteGroup::new("users")
        .route(
            Route::new(Method::GET, "/users", |_req| {
                HandlerResponse::ok_json(json!([]))
            })
            .with_param(ParameterMeta {
                name: "limit".into(),
                location: ParameterLocation::Query,
                required: false,
                param_type: "integer".into(),
            })
            .with_response(200, "user list"),
        )
        .route(
            Route::new(Method::POST, "/users", |_req| HandlerResponse {
                status: 201,
                body: json!({}),
            })
            .with_response(201, "created")
            .with_tag("Admin"),
        )
}

fn resolved_fixture() -> ServerConfig {
    ServerConfig {
        name: "Acct".into(),
        addr: "127.0.0.1:8080".into(),
        description: "account service".into(),
        openapi: OpenApiConfig {
            enabled: true,
            host: "api.example.com".into(),
            base_path: "/v1".into(),
            schemes: vec!["https".into()],
            auth: AuthKind::Basic,
            spec: SpecInfo {
                title: "fallback title".into(),
                description: "fallback description".into(),
                version: "1.2.3".into(),
                ..Default::default()
            },
            tags: vec![TagConfig {
                name: "User".into(),
                description: String::new(),
            }],
            ..Default::default()
        },
    }
}

#[test]
fn test_build_is_deterministic() {
    let resolved = resolved_fixture();
    let groups = vec![user_group()];
    let a = build_descriptor(&resolved, &groups);
    let b = build_descriptor(&resolved, &groups);
    assert_eq!(
        serde_json::to_vec(&a).unwrap(),
        serde_json::to_vec(&b).unwrap()
    );
}

#[test]
fn test_title_and_description_prefer_server_fields() {
    let resolved = resolved_fixture();
    let descriptor = build_descriptor(&resolved, &[]);
    assert_eq!(descriptor.info.title, "Acct");
    assert_eq!(descriptor.info.description, "account service");
    assert_eq!(descriptor.info.version, "1.2.3");
}

#[test]
fn test_title_and_description_fall_back_to_spec() {
    let mut resolved = resolved_fixture();
    resolved.name = String::new();
    resolved.description = String::new();
    let descriptor = build_descriptor(&resolved, &[]);
    assert_eq!(descriptor.info.title, "fallback title");
    assert_eq!(descriptor.info.description, "fallback description");
}

#[test]
fn test_host_falls_back_to_listener_addr() {
    let mut resolved = resolved_fixture();
    resolved.openapi.host = String::new();
    let descriptor = build_descriptor(&resolved, &[]);
    assert_eq!(descriptor.host, "127.0.0.1:8080");
}

#[test]
fn test_basic_auth_declares_security_scheme() {
    let resolved = resolved_fixture();
    let descriptor = build_descriptor(&resolved, &[]);
    assert_eq!(
        descriptor.security_definitions[BASIC_AUTH_SCHEME].scheme_type,
        "basic"
    );
    assert_eq!(descriptor.security.len(), 1);
    assert!(descriptor.security[0].contains_key(BASIC_AUTH_SCHEME));
}

#[test]
fn test_no_auth_declares_nothing() {
    let mut resolved = resolved_fixture();
    resolved.openapi.auth = AuthKind::None;
    let descriptor = build_descriptor(&resolved, &[]);
    assert!(descriptor.security_definitions.is_empty());
    assert!(descriptor.security.is_empty());
}

#[test]
fn test_operations_enumerate_all_group_routes() {
    let resolved = resolved_fixture();
    let descriptor = build_descriptor(&resolved, &[user_group()]);
    let ops = &descriptor.paths["/users"];
    assert!(ops.contains_key("get"));
    assert!(ops.contains_key("post"));
    let get = &ops["get"];
    assert_eq!(get.parameters[0].name, "limit");
    assert_eq!(get.parameters[0].location, "query");
    assert_eq!(get.responses["200"].description, "user list");
}

#[test]
fn test_bulk_tags_union_with_route_tags() {
    let resolved = resolved_fixture();
    let mut group = user_group();
    // POST /users already carries "Admin"; bulk assignment must not duplicate
    group.attach_tags(&["Admin", "User"]);
    group.attach_tags(&["Admin", "User"]);
    let descriptor = build_descriptor(&resolved, &[group]);
    let post = &descriptor.paths["/users"]["post"];
    assert_eq!(post.tags, vec!["Admin", "User"]);
    let get = &descriptor.paths["/users"]["get"];
    assert_eq!(get.tags, vec!["Admin", "User"]);
}

#[test]
fn test_tags_read_from_merged_config_without_refallback() {
    let resolved = resolved_fixture();
    let descriptor = build_descriptor(&resolved, &[]);
    assert_eq!(descriptor.tags.len(), 1);
    assert_eq!(descriptor.tags[0].name, "User");
}

// Scenario from the merged-configuration contract: global basePath and tags,
// server sets only name and auth.
#[test]
fn test_merged_basic_auth_scenario() {
    let global = GlobalConfig {
        openapi: OpenApiConfig {
            base_path: "/v1".into(),
            tags: vec![TagConfig {
                name: "User".into(),
                description: String::new(),
            }],
            ..Default::default()
        },
        servers: vec![ServerConfig {
            name: "Acct".into(),
            addr: "127.0.0.1:8080".into(),
            openapi: OpenApiConfig {
                auth: AuthKind::Basic,
                ..Default::default()
            },
            ..Default::default()
        }],
    };
    let resolved = resolve(&global, 1).unwrap();
    let descriptor = build_descriptor(&resolved, &[]);
    assert_eq!(descriptor.base_path, "/v1");
    assert_eq!(descriptor.tags[0].name, "User");
    assert!(descriptor.security_definitions.contains_key(BASIC_AUTH_SCHEME));
    assert_eq!(descriptor.info.title, "Acct");
}
