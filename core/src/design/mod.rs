#![deny(missing_docs)]

//! # API Design Model
//!
//! In-memory description of the API that actions are generated for: resources,
//! their actions and the HTTP routes those actions answer on.
//!
//! - **mod**: model structs, validation and deterministic iteration.
//! - **openapi**: import from an OpenAPI 3.x document.
//!
//! Design documents are YAML (or JSON) files shaped like:
//!
//! ```yaml
//! name: cellar
//! host: localhost:8081
//! base_path: /cellar
//! resources:
//!   - name: bottle
//!     base_path: /bottles
//!     parent: account
//!     actions:
//!       - name: list
//!         routes: [{ verb: GET, path: "" }]
//!         query_params: [years]
//! ```

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// OpenAPI import.
pub mod openapi;

pub use openapi::parse_openapi_design;

/// The root of an API description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiDefinition {
    /// API name, used for file names in the combined layout.
    pub name: String,
    /// Default host (e.g. `localhost:8081`).
    #[serde(default)]
    pub host: Option<String>,
    /// Path prefix shared by every resource.
    #[serde(default)]
    pub base_path: String,
    /// Supported schemes; the first one is used in generated comments.
    #[serde(default)]
    pub schemes: Vec<String>,
    /// Resources exposed by the API.
    #[serde(default)]
    pub resources: Vec<ResourceDefinition>,
}

/// A group of actions sharing a base path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDefinition {
    /// Resource name.
    pub name: String,
    /// Path of the resource relative to its parent (or the API base path).
    #[serde(default)]
    pub base_path: String,
    /// Name of the parent resource, if nested.
    #[serde(default)]
    pub parent: Option<String>,
    /// Action whose route identifies a single member, used to nest children.
    #[serde(default = "default_canonical_action")]
    pub canonical_action: String,
    /// Actions of the resource.
    #[serde(default)]
    pub actions: Vec<ActionDefinition>,
}

/// A single API endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionDefinition {
    /// Action name (e.g. `list`, `create`).
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Routes the action answers on. The first route is the primary one.
    #[serde(default)]
    pub routes: Vec<RouteDefinition>,
    /// Name of the request payload type, if the action accepts a body.
    #[serde(default)]
    pub payload: Option<String>,
    /// Query string parameter names.
    #[serde(default)]
    pub query_params: Vec<String>,
}

/// An HTTP verb and path relative to the owning resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDefinition {
    /// HTTP verb (`GET`, `POST`, ...).
    pub verb: String,
    /// Path relative to the resource. A path starting with `//` is absolute.
    #[serde(default)]
    pub path: String,
}

fn default_canonical_action() -> String {
    "show".to_string()
}

/// Parses a YAML or JSON design document and validates it.
pub fn parse_design_document(content: &str) -> AppResult<ApiDefinition> {
    let api: ApiDefinition = serde_yaml::from_str(content)
        .map_err(|e| AppError::Design(format!("Failed to parse design document: {}", e)))?;
    api.validate()?;
    Ok(api)
}

impl ApiDefinition {
    /// Checks internal consistency: names, routes and the parent graph.
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::Design("API name must not be empty".into()));
        }

        let mut seen = HashSet::new();
        for res in &self.resources {
            if !seen.insert(res.name.as_str()) {
                return Err(AppError::Design(format!(
                    "Duplicate resource name '{}'",
                    res.name
                )));
            }
            for action in &res.actions {
                if action.routes.is_empty() {
                    return Err(AppError::Design(format!(
                        "Action '{}' of resource '{}' has no routes",
                        action.name, res.name
                    )));
                }
            }
        }

        for res in &self.resources {
            self.parent_chain(res)?;
        }
        Ok(())
    }

    /// Resources sorted by name.
    pub fn iterate_resources(&self) -> Vec<&ResourceDefinition> {
        let mut resources: Vec<_> = self.resources.iter().collect();
        resources.sort_by(|a, b| a.name.cmp(&b.name));
        resources
    }

    /// Looks up a resource by name.
    pub fn find_resource(&self, name: &str) -> Option<&ResourceDefinition> {
        self.resources.iter().find(|r| r.name == name)
    }

    /// Full path of a resource: API base path, parent member path, own base path.
    pub fn resource_full_path(&self, res: &ResourceDefinition) -> String {
        // Broken parent graphs are rejected by `validate`; fall back to the
        // unnested path rather than failing here.
        let chain = self.parent_chain(res).unwrap_or_default();

        let mut parts: Vec<&str> = vec![self.base_path.as_str()];
        for parent in chain.iter().rev() {
            parts.push(parent.base_path.as_str());
            if let Some(route) = parent
                .find_action(&parent.canonical_action)
                .and_then(|a| a.routes.first())
            {
                parts.push(route.path.as_str());
            }
        }
        parts.push(res.base_path.as_str());
        join_paths(&parts)
    }

    /// Full path of one route of a resource.
    pub fn route_full_path(&self, res: &ResourceDefinition, route: &RouteDefinition) -> String {
        if let Some(absolute) = route.path.strip_prefix("//") {
            return join_paths(&[absolute]);
        }
        let base = self.resource_full_path(res);
        join_paths(&[base.as_str(), route.path.as_str()])
    }

    /// Ancestors of `res`, nearest first.
    fn parent_chain<'a>(
        &'a self,
        res: &'a ResourceDefinition,
    ) -> AppResult<Vec<&'a ResourceDefinition>> {
        let mut chain: Vec<&'a ResourceDefinition> = Vec::new();
        let mut current = res;
        while let Some(parent_name) = &current.parent {
            let parent = self.find_resource(parent_name).ok_or_else(|| {
                AppError::Design(format!(
                    "Resource '{}' has unknown parent '{}'",
                    current.name, parent_name
                ))
            })?;
            if parent.name == res.name || chain.iter().any(|r| r.name == parent.name) {
                return Err(AppError::Design(format!(
                    "Parent cycle detected at resource '{}'",
                    res.name
                )));
            }
            chain.push(parent);
            current = parent;
        }
        Ok(chain)
    }
}

impl ResourceDefinition {
    /// Actions sorted by name.
    pub fn iterate_actions(&self) -> Vec<&ActionDefinition> {
        let mut actions: Vec<_> = self.actions.iter().collect();
        actions.sort_by(|a, b| a.name.cmp(&b.name));
        actions
    }

    /// Looks up an action by name.
    pub fn find_action(&self, name: &str) -> Option<&ActionDefinition> {
        self.actions.iter().find(|a| a.name == name)
    }
}

impl ActionDefinition {
    /// The route used in generated documentation.
    pub fn primary_route(&self) -> Option<&RouteDefinition> {
        self.routes.first()
    }

    /// Query parameter names in lexicographic order.
    pub fn sorted_query_params(&self) -> Vec<&str> {
        let mut params: Vec<&str> = self.query_params.iter().map(String::as_str).collect();
        params.sort_unstable();
        params.dedup();
        params
    }
}

/// Joins path fragments with single slashes. The result always starts with `/`.
pub fn join_paths(parts: &[&str]) -> String {
    let segments: Vec<&str> = parts
        .iter()
        .map(|p| p.trim_matches('/'))
        .filter(|p| !p.is_empty())
        .collect();
    format!("/{}", segments.join("/"))
}
