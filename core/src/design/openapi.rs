#![deny(missing_docs)]

//! # OpenAPI Import
//!
//! Builds an [`ApiDefinition`] from an OpenAPI 3.x document so action creators
//! can be generated for APIs that are not described in the native design format.
//!
//! Mapping:
//! - API name from `info.title`; host, scheme and base path from the first server URL.
//! - Resource from the first tag of an operation, otherwise the first static path segment.
//! - Action name from `operationId` (with a trailing resource noun removed),
//!   otherwise the lowercase HTTP verb.
//! - `{param}` path templates become `:param`.

use crate::design::{ActionDefinition, ApiDefinition, ResourceDefinition, RouteDefinition};
use crate::error::{AppError, AppResult};
use crate::naming::{EnglishInflector, Inflector};
use indexmap::IndexMap;
use percent_encoding::percent_decode_str;
use serde::Deserialize;
use serde_json::Value;
use url::Url;

/// Shim structs covering only the parts of OpenAPI the importer reads.
#[derive(Deserialize)]
struct ShimOpenApi {
    info: ShimInfo,
    #[serde(default)]
    servers: Vec<ShimServer>,
    #[serde(default)]
    paths: IndexMap<String, ShimPathItem>,
}

#[derive(Deserialize)]
struct ShimInfo {
    title: String,
}

#[derive(Deserialize)]
struct ShimServer {
    url: String,
}

#[derive(Deserialize)]
struct ShimPathItem {
    #[serde(default)]
    parameters: Vec<ShimParameter>,
    get: Option<ShimOperation>,
    post: Option<ShimOperation>,
    put: Option<ShimOperation>,
    delete: Option<ShimOperation>,
    patch: Option<ShimOperation>,
    options: Option<ShimOperation>,
    head: Option<ShimOperation>,
    trace: Option<ShimOperation>,
}

#[derive(Deserialize)]
struct ShimOperation {
    #[serde(rename = "operationId")]
    operation_id: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    summary: Option<String>,
    description: Option<String>,
    #[serde(default)]
    parameters: Vec<ShimParameter>,
    #[serde(rename = "requestBody")]
    request_body: Option<Value>,
}

/// `$ref` parameters carry neither field and are skipped.
#[derive(Deserialize)]
struct ShimParameter {
    name: Option<String>,
    #[serde(rename = "in")]
    location: Option<String>,
}

/// Parses an OpenAPI YAML/JSON document into a validated [`ApiDefinition`].
pub fn parse_openapi_design(content: &str) -> AppResult<ApiDefinition> {
    let openapi: ShimOpenApi = serde_yaml::from_str(content)
        .map_err(|e| AppError::Design(format!("Failed to parse OpenAPI document: {}", e)))?;

    let mut api = ApiDefinition {
        name: openapi.info.title.clone(),
        host: None,
        base_path: String::new(),
        schemes: Vec::new(),
        resources: Vec::new(),
    };
    if let Some(server) = openapi.servers.first() {
        apply_server(&mut api, &server.url);
    }

    let mut resources: IndexMap<String, ResourceDefinition> = IndexMap::new();
    for (path, item) in openapi.paths {
        let route_path = to_route_path(&path);
        let operations = [
            ("GET", item.get),
            ("POST", item.post),
            ("PUT", item.put),
            ("DELETE", item.delete),
            ("PATCH", item.patch),
            ("OPTIONS", item.options),
            ("HEAD", item.head),
            ("TRACE", item.trace),
        ];

        for (verb, op) in operations {
            let Some(op) = op else { continue };
            let resource_name = op
                .tags
                .first()
                .cloned()
                .or_else(|| first_static_segment(&path))
                .unwrap_or_else(|| "root".to_string());

            let action = build_action(verb, &route_path, &resource_name, &item.parameters, op);
            resources
                .entry(resource_name.clone())
                .or_insert_with(|| ResourceDefinition {
                    name: resource_name,
                    base_path: String::new(),
                    parent: None,
                    canonical_action: "show".to_string(),
                    actions: Vec::new(),
                })
                .actions
                .push(action);
        }
    }

    api.resources = resources.into_values().collect();
    api.validate()?;
    Ok(api)
}

fn build_action(
    verb: &str,
    route_path: &str,
    resource: &str,
    common_params: &[ShimParameter],
    op: ShimOperation,
) -> ActionDefinition {
    let name = match op.operation_id.as_deref() {
        Some(id) if !id.trim().is_empty() => strip_resource_noun(id, resource),
        _ => verb.to_ascii_lowercase(),
    };

    let mut query_params: Vec<String> = Vec::new();
    for param in common_params.iter().chain(op.parameters.iter()) {
        if param.location.as_deref() != Some("query") {
            continue;
        }
        if let Some(n) = &param.name {
            if !query_params.contains(n) {
                query_params.push(n.clone());
            }
        }
    }

    ActionDefinition {
        name,
        description: op.summary.or(op.description),
        routes: vec![RouteDefinition {
            verb: verb.to_string(),
            path: route_path.to_string(),
        }],
        payload: op.request_body.as_ref().map(payload_name),
        query_params,
    }
}

/// Removes a trailing resource noun (`listUsers` on `users` becomes `list`).
fn strip_resource_noun(operation_id: &str, resource: &str) -> String {
    let inflector = EnglishInflector;
    let lower_id = operation_id.to_ascii_lowercase();
    let lower_res = resource.to_ascii_lowercase();
    let candidates = [
        inflector.pluralize(&lower_res),
        inflector.singularize(&lower_res),
    ];

    for noun in candidates {
        if !noun.is_empty() && lower_id.len() > noun.len() && lower_id.ends_with(&noun) {
            let stem = &operation_id[..operation_id.len() - noun.len()];
            let stem = stem.trim_end_matches(['_', '-', ' ']);
            if !stem.is_empty() {
                return stem.to_string();
            }
        }
    }
    operation_id.to_string()
}

/// Name of the schema a request body refers to, or `body` when inline.
fn payload_name(body: &Value) -> String {
    let schema_ref = body.get("$ref").and_then(Value::as_str).or_else(|| {
        body.get("content")
            .and_then(Value::as_object)
            .and_then(|content| content.values().next())
            .and_then(|media| media.pointer("/schema/$ref"))
            .and_then(Value::as_str)
    });

    schema_ref
        .and_then(|r| r.rsplit('/').next())
        .filter(|name| !name.is_empty())
        .map(|name| percent_decode_str(name).decode_utf8_lossy().into_owned())
        .unwrap_or_else(|| "body".to_string())
}

fn apply_server(api: &mut ApiDefinition, server_url: &str) {
    match Url::parse(server_url) {
        Ok(url) => {
            api.schemes.push(url.scheme().to_string());
            api.host = url.host_str().map(|host| match url.port() {
                Some(port) => format!("{}:{}", host, port),
                None => host.to_string(),
            });
            api.base_path = decode_path(url.path());
        }
        Err(_) if server_url.starts_with('/') => {
            api.base_path = decode_path(server_url);
        }
        Err(_) => {}
    }
}

fn decode_path(path: &str) -> String {
    let decoded = percent_decode_str(path).decode_utf8_lossy();
    let trimmed = decoded.trim_end_matches('/');
    trimmed.to_string()
}

fn to_route_path(path: &str) -> String {
    path.split('/')
        .map(|segment| match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
            Some(param) => format!(":{}", param),
            None => segment.to_string(),
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn first_static_segment(path: &str) -> Option<String> {
    path.split('/')
        .find(|s| !s.is_empty() && !s.starts_with('{'))
        .map(str::to_string)
}
