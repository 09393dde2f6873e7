use restdock::config::{
    resolve, AuthKind, GlobalConfig, OpenApiConfig, ServerConfig, TagConfig,
};
use restdock::error::ConfigError;

fn global_fixture() -> GlobalConfig {
    GlobalConfig {
        openapi: OpenApiConfig {
            enabled: true,
            host: "api.example.com".into(),
            base_path: "/v1".into(),
            schemes: vec!["https".into()],
            auth: AuthKind::None,
            tags: vec![TagConfig {
                name: "User".into(),
                description: String::new(),
            }],
            ..Default::default()
        },
        servers: vec![
            ServerConfig {
                name: "acct".into(),
                addr: "127.0.0.1:8080".into(),
                ..Default::default()
            },
            ServerConfig {
                name: "billing".into(),
                addr: "127.0.0.1:8081".into(),
                openapi: OpenApiConfig {
                    base_path: "/billing".into(),
                    schemes: vec!["http".into()],
                    tags: vec![TagConfig {
                        name: "Invoice".into(),
                        description: "invoicing".into(),
                    }],
                    ..Default::default()
                },
                ..Default::default()
            },
        ],
    }
}

#[test]
fn test_index_zero_is_out_of_range() {
    let global = global_fixture();
    assert_eq!(
        resolve(&global, 0),
        Err(ConfigError::OutOfRange { index: 0, count: 2 })
    );
}

#[test]
fn test_index_past_end_is_out_of_range() {
    let global = global_fixture();
    assert_eq!(
        resolve(&global, 3),
        Err(ConfigError::OutOfRange { index: 3, count: 2 })
    );
}

#[test]
fn test_unset_scalars_inherit_global() {
    let global = global_fixture();
    let resolved = resolve(&global, 1).unwrap();
    assert_eq!(resolved.openapi.host, "api.example.com");
    assert_eq!(resolved.openapi.base_path, "/v1");
    assert!(resolved.openapi.enabled);
}

#[test]
fn test_set_scalars_win_over_global() {
    let global = global_fixture();
    let resolved = resolve(&global, 2).unwrap();
    assert_eq!(resolved.openapi.base_path, "/billing");
    // unset on server 2, still inherited
    assert_eq!(resolved.openapi.host, "api.example.com");
}

#[test]
fn test_empty_collections_defer_to_global() {
    let global = global_fixture();
    let resolved = resolve(&global, 1).unwrap();
    assert_eq!(resolved.openapi.schemes, vec!["https"]);
    assert_eq!(resolved.openapi.tags, global.openapi.tags);
}

#[test]
fn test_nonempty_collections_replace_wholesale() {
    let global = global_fixture();
    let resolved = resolve(&global, 2).unwrap();
    // no element-wise union with the global collections
    assert_eq!(resolved.openapi.schemes, vec!["http"]);
    assert_eq!(resolved.openapi.tags.len(), 1);
    assert_eq!(resolved.openapi.tags[0].name, "Invoice");
}

#[test]
fn test_resolve_does_not_mutate_global() {
    let global = global_fixture();
    let before = global.clone();
    let _ = resolve(&global, 1).unwrap();
    let _ = resolve(&global, 2).unwrap();
    assert_eq!(global, before);
}

#[test]
fn test_resolve_is_deterministic() {
    let global = global_fixture();
    assert_eq!(resolve(&global, 2).unwrap(), resolve(&global, 2).unwrap());
}

#[test]
fn test_auth_none_inherits_and_basic_wins() {
    let mut global = global_fixture();
    global.openapi.auth = AuthKind::Basic;
    let resolved = resolve(&global, 1).unwrap();
    assert_eq!(resolved.openapi.auth, AuthKind::Basic);

    let mut global = global_fixture();
    global.servers[0].openapi.auth = AuthKind::Basic;
    let resolved = resolve(&global, 1).unwrap();
    assert_eq!(resolved.openapi.auth, AuthKind::Basic);
}

#[test]
fn test_nested_spec_fields_merge_independently() {
    let mut global = global_fixture();
    global.openapi.spec.title = "Global Title".into();
    global.openapi.spec.contact.email = "team@example.com".into();
    global.servers[0].openapi.spec.title = "Acct Title".into();

    let resolved = resolve(&global, 1).unwrap();
    assert_eq!(resolved.openapi.spec.title, "Acct Title");
    assert_eq!(resolved.openapi.spec.contact.email, "team@example.com");
}

#[test]
fn test_ui_fields_inherit() {
    let mut global = global_fixture();
    global.openapi.ui.api = "/apidocs.json".into();
    global.openapi.ui.external = "https://petstore.swagger.io".into();
    global.servers[0].openapi.ui.api = "/acct-docs.json".into();

    let resolved = resolve(&global, 1).unwrap();
    assert_eq!(resolved.openapi.ui.api, "/acct-docs.json");
    assert_eq!(resolved.openapi.ui.external, "https://petstore.swagger.io");
}
