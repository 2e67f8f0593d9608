#![deny(missing_docs)]

//! # Generator
//!
//! Walks an [`ApiDefinition`], derives every name through the canonicalizer
//! and feeds the results into a [`ClientStrategy`] to produce the three client
//! modules (action creators, actions, action types).
//!
//! Output is deterministic: actions are grouped by action name, the groups are
//! visited in lexicographic order and, within a group, resources are visited
//! in name order. Rendering is pure (`render`); only `generate` touches the
//! filesystem, and it removes everything it wrote if any step fails.

use crate::design::{ActionDefinition, ApiDefinition, ResourceDefinition};
use crate::error::{AppError, AppResult};
use crate::naming::{Canonicalizer, Inflector};
use crate::strategies::{
    ActionContext, ActionNames, ClientStrategy, FileContext, ResourceNames,
};
use std::collections::BTreeMap;
use std::fmt;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

/// Name of the directory created under the output directory.
pub const OUTPUT_SUBDIR: &str = "reduxa";

/// How generated modules are split into files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// One set of modules for the whole API, named after the API.
    #[default]
    Combined,
    /// One set of modules per resource, named after the resource noun.
    PerResource,
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Combined => write!(f, "combined"),
            Layout::PerResource => write!(f, "per-resource"),
        }
    }
}

impl FromStr for Layout {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "combined" => Ok(Layout::Combined),
            "per-resource" => Ok(Layout::PerResource),
            other => Err(AppError::General(format!("Unknown layout '{}'", other))),
        }
    }
}

/// Generator settings.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory under which `reduxa/` is created.
    pub out_dir: PathBuf,
    /// Request timeout baked into the action creators.
    pub timeout: Duration,
    /// Scheme override; defaults to the first API scheme, then `http`.
    pub scheme: Option<String>,
    /// Host override; defaults to the API host.
    pub host: Option<String>,
    /// File layout.
    pub layout: Layout,
    /// Emit a reset action per resource.
    pub reset_actions: bool,
    /// Actions whose resource noun is pluralized (all others are singularized).
    pub plural_actions: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            timeout: Duration::from_secs(20),
            scheme: None,
            host: None,
            layout: Layout::default(),
            reset_actions: false,
            plural_actions: vec!["list".to_string()],
        }
    }
}

/// A rendered module, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// File name.
    pub name: String,
    /// File contents.
    pub contents: String,
}

/// Scheme and host resolved from the configuration and the API.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Target {
    scheme: String,
    host: String,
}

/// The application code generator.
pub struct Generator<'a, S: ClientStrategy> {
    config: GeneratorConfig,
    strategy: S,
    canonicalizer: Canonicalizer<'a>,
    inflector: &'a dyn Inflector,
    genfiles: Vec<PathBuf>,
}

impl<'a, S: ClientStrategy> Generator<'a, S> {
    /// Creates a generator.
    pub fn new(
        config: GeneratorConfig,
        strategy: S,
        canonicalizer: Canonicalizer<'a>,
        inflector: &'a dyn Inflector,
    ) -> Self {
        Self {
            config,
            strategy,
            canonicalizer,
            inflector,
            genfiles: Vec::new(),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Renders and writes all modules for `api`.
    ///
    /// Returns the generated paths, the output directory first. On failure every
    /// path written during this call is removed before the error is returned.
    pub fn generate(&mut self, api: &ApiDefinition) -> AppResult<Vec<PathBuf>> {
        self.genfiles.clear();
        match self.write_all(api) {
            Ok(()) => Ok(self.genfiles.clone()),
            Err(e) => {
                self.cleanup();
                Err(e)
            }
        }
    }

    /// Removes all files generated by the last call to `generate`.
    pub fn cleanup(&mut self) {
        for path in self.genfiles.drain(..).rev() {
            let removed = if path.is_dir() {
                fs::remove_dir_all(&path)
            } else {
                fs::remove_file(&path)
            };
            if let Err(e) = removed {
                debug!(path = %path.display(), error = %e, "cleanup skipped");
            }
        }
    }

    fn write_all(&mut self, api: &ApiDefinition) -> AppResult<()> {
        let files = self.render(api)?;

        let out_dir = self.config.out_dir.join(OUTPUT_SUBDIR);
        if out_dir.exists() {
            fs::remove_dir_all(&out_dir)?;
        }
        fs::create_dir_all(&out_dir)?;
        self.genfiles.push(out_dir.clone());

        for file in files {
            let path = out_dir.join(&file.name);
            self.genfiles.push(path.clone());
            write_file(&path, &file.contents)?;
            info!(path = %path.display(), "generated file");
        }
        Ok(())
    }

    /// Renders every module for `api` without touching the filesystem.
    pub fn render(&self, api: &ApiDefinition) -> AppResult<Vec<RenderedFile>> {
        let target = self.resolve_target(api)?;
        let resources = api.iterate_resources();

        let mut files = Vec::new();
        match self.config.layout {
            Layout::Combined => {
                self.render_bundle(&mut files, api, &target, &api.name, &resources)?;
            }
            Layout::PerResource => {
                for res in &resources {
                    let stem = self.inflector.singularize(&self.resource_noun(res));
                    self.render_bundle(&mut files, api, &target, &stem, &[*res])?;
                }
            }
        }
        Ok(files)
    }

    fn resolve_target(&self, api: &ApiDefinition) -> AppResult<Target> {
        let scheme = self
            .config
            .scheme
            .clone()
            .filter(|s| !s.is_empty())
            .or_else(|| api.schemes.first().cloned())
            .unwrap_or_else(|| "http".to_string());

        let host = self
            .config
            .host
            .clone()
            .filter(|h| !h.is_empty())
            .or_else(|| api.host.clone().filter(|h| !h.is_empty()))
            .ok_or_else(|| AppError::General("missing host value, set it with --host".into()))?;

        Ok(Target { scheme, host })
    }

    fn render_bundle(
        &self,
        files: &mut Vec<RenderedFile>,
        api: &ApiDefinition,
        target: &Target,
        stem: &str,
        resources: &[&ResourceDefinition],
    ) -> AppResult<()> {
        let names = self.strategy.file_names(stem);
        let file_ctx = FileContext {
            api_name: &api.name,
            host: &target.host,
            stem,
        };

        let mut creators = self.strategy.creators_header(&file_ctx);
        let mut actions = self.strategy.actions_header(&file_ctx);
        let mut types = self.strategy.action_types_header(&file_ctx);

        for (res, action) in group_actions(resources).into_values().flatten() {
            let noun = self.action_noun(res, action);
            let action_names = ActionNames::derive(&self.canonicalizer, &action.name, &noun);
            debug!(
                resource = %res.name,
                action = %action.name,
                creator = %action_names.creator,
                "rendering action"
            );

            let ctx = self.action_context(api, target, res, action, &action_names)?;
            write!(creators, "{}", self.strategy.action_creator(&ctx))?;
            write!(actions, "{}", self.strategy.actions(&ctx))?;
            write!(types, "{}", self.strategy.action_types(&ctx))?;
        }

        if self.config.reset_actions {
            for res in resources {
                let res_names = ResourceNames::derive(&self.canonicalizer, &self.resource_noun(res));
                write!(actions, "{}", self.strategy.reset_action(&res_names))?;
                write!(types, "{}", self.strategy.reset_action_type(&res_names))?;
            }
        }

        files.push(RenderedFile {
            name: names.creators,
            contents: creators,
        });
        files.push(RenderedFile {
            name: names.types,
            contents: types,
        });
        files.push(RenderedFile {
            name: names.actions,
            contents: actions,
        });
        Ok(())
    }

    fn action_context<'c>(
        &self,
        api: &ApiDefinition,
        target: &Target,
        res: &'c ResourceDefinition,
        action: &'c ActionDefinition,
        names: &'c ActionNames,
    ) -> AppResult<ActionContext<'c>> {
        let route = action.primary_route().ok_or_else(|| {
            AppError::Design(format!(
                "Action '{}' of resource '{}' has no routes",
                action.name, res.name
            ))
        })?;

        Ok(ActionContext {
            names,
            action,
            resource: res,
            url: format!(
                "{}://{}{}",
                target.scheme,
                target.host,
                api.route_full_path(res, route)
            ),
            method: route.verb.to_ascii_lowercase(),
            timeout_ms: self.config.timeout.as_millis(),
        })
    }

    /// Canonical noun of a resource: its base path, or its name when the base
    /// path has no usable characters.
    fn resource_noun(&self, res: &ResourceDefinition) -> String {
        let noun = self
            .canonicalizer
            .canonicalize(res.base_path.trim_start_matches('/'), false);
        if noun.is_empty() {
            self.canonicalizer.canonicalize(&res.name, false)
        } else {
            noun
        }
    }

    fn action_noun(&self, res: &ResourceDefinition, action: &ActionDefinition) -> String {
        let noun = self.resource_noun(res);
        if self.config.plural_actions.iter().any(|a| *a == action.name) {
            self.inflector.pluralize(&noun)
        } else {
            self.inflector.singularize(&noun)
        }
    }
}

/// Groups the actions of `resources` by action name.
///
/// Keys iterate in lexicographic order; actions sharing a name keep resource
/// order and are all kept.
pub fn group_actions<'r>(
    resources: &[&'r ResourceDefinition],
) -> BTreeMap<&'r str, Vec<(&'r ResourceDefinition, &'r ActionDefinition)>> {
    let mut groups: BTreeMap<&str, Vec<_>> = BTreeMap::new();
    for res in resources {
        for action in res.iterate_actions() {
            groups
                .entry(action.name.as_str())
                .or_default()
                .push((*res, action));
        }
    }
    groups
}

fn write_file(path: &Path, contents: &str) -> AppResult<()> {
    fs::write(path, contents).map_err(|e| {
        AppError::General(format!("Failed to write {}: {}", path.display(), e))
    })
}
