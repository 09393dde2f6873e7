//! API descriptor construction
//!
//! Transforms a resolved server configuration plus the registered route
//! groups into the normalized descriptor document served at the API docs
//! path. Construction is a pure function of its inputs: no hidden state is
//! consulted, so repeated builds for the same inputs are byte-identical.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::config::{AuthKind, ServerConfig};
use crate::registry::RouteGroup;

/// Security scheme name declared for `auth: basic`
pub const BASIC_AUTH_SCHEME: &str = "basicAuth";

/// The derived, read-only documentation output
///
/// Serializes to the Swagger-2.0-shaped JSON document hosted documentation
/// viewers consume. Regenerated on demand; never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Descriptor {
    pub swagger: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub host: String,
    #[serde(rename = "basePath", skip_serializing_if = "String::is_empty")]
    pub base_path: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub schemes: Vec<String>,
    pub info: Info,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    #[serde(
        rename = "securityDefinitions",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub security_definitions: BTreeMap<String, SecurityScheme>,
    /// Document-level requirement; applies to every operation
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub security: Vec<BTreeMap<String, Vec<String>>>,
    pub paths: BTreeMap<String, BTreeMap<String, Operation>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Info {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Contact {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct License {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Tag {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SecurityScheme {
    #[serde(rename = "type")]
    pub scheme_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Operation {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    pub responses: BTreeMap<String, ResponseDoc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "in")]
    pub location: String,
    pub required: bool,
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub param_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResponseDoc {
    pub description: String,
}

/// Build the descriptor for one resolved server.
///
/// Fallback rules:
/// - `host` falls back to the listener address when unset, so the document
///   always names an address the documentation viewer can dial.
/// - `title` prefers the server name, `description` the server description.
/// - `tags` are read from the already-merged configuration as-is; the
///   per-server/global fallback is owned by [`crate::config::resolve`] and
///   is not reapplied here.
pub fn build_descriptor(resolved: &ServerConfig, groups: &[RouteGroup]) -> Descriptor {
    let openapi = &resolved.openapi;
    let spec = &openapi.spec;

    let host = if openapi.host.is_empty() {
        resolved.addr.clone()
    } else {
        openapi.host.clone()
    };
    let title = if resolved.name.is_empty() {
        spec.title.clone()
    } else {
        resolved.name.clone()
    };
    let description = if resolved.description.is_empty() {
        spec.description.clone()
    } else {
        resolved.description.clone()
    };

    let contact = Contact {
        name: spec.contact.name.clone(),
        email: spec.contact.email.clone(),
        url: spec.contact.url.clone(),
    };
    let license = License {
        name: spec.license.name.clone(),
        url: spec.license.url.clone(),
    };

    let tags = openapi
        .tags
        .iter()
        .map(|t| Tag {
            name: t.name.clone(),
            description: t.description.clone(),
        })
        .collect();

    let mut security_definitions = BTreeMap::new();
    let mut security = Vec::new();
    if openapi.auth == AuthKind::Basic {
        security_definitions.insert(
            BASIC_AUTH_SCHEME.to_string(),
            SecurityScheme {
                scheme_type: "basic".to_string(),
            },
        );
        let mut requirement = BTreeMap::new();
        requirement.insert(BASIC_AUTH_SCHEME.to_string(), Vec::new());
        security.push(requirement);
    }

    let mut paths: BTreeMap<String, BTreeMap<String, Operation>> = BTreeMap::new();
    for group in groups {
        for route in &group.routes {
            let operation = Operation {
                tags: route.tags.iter().cloned().collect(),
                parameters: route
                    .parameters
                    .iter()
                    .map(|p| Parameter {
                        name: p.name.clone(),
                        location: p.location.as_str().to_string(),
                        required: p.required,
                        param_type: p.param_type.clone(),
                    })
                    .collect(),
                responses: route
                    .responses
                    .iter()
                    .map(|(code, desc)| {
                        (
                            code.to_string(),
                            ResponseDoc {
                                description: desc.clone(),
                            },
                        )
                    })
                    .collect(),
            };
            paths
                .entry(route.path.clone())
                .or_default()
                .insert(route.method.as_str().to_lowercase(), operation);
        }
    }

    Descriptor {
        swagger: "2.0".to_string(),
        host,
        base_path: openapi.base_path.clone(),
        schemes: openapi.schemes.clone(),
        info: Info {
            title,
            description,
            contact: if contact == Contact::default() {
                None
            } else {
                Some(contact)
            },
            license: if license == License::default() {
                None
            } else {
                Some(license)
            },
            version: spec.version.clone(),
        },
        tags,
        security_definitions,
        security,
        paths,
    }
}
