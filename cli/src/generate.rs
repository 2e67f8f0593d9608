#![deny(missing_docs)]

//! # Generate Command
//!
//! Loads an API description (design document or OpenAPI) and writes the
//! Redux client modules under `<out>/reduxa`.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reduxa_core::{
    parse_design_document, parse_openapi_design, ApiDefinition, AppError, AppResult,
    Canonicalizer, EnglishInflector, Generator, GeneratorConfig, Inflector, Layout,
    NoopInflector, ReduxStrategy, WordTables,
};
use tracing::info;

/// File layout of the generated modules.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutArg {
    /// One set of modules named after the API.
    Combined,
    /// One set of modules per resource.
    PerResource,
}

impl From<LayoutArg> for Layout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Combined => Layout::Combined,
            LayoutArg::PerResource => Layout::PerResource,
        }
    }
}

/// Arguments for the generate command.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Path to the YAML design document.
    #[clap(long, required_unless_present = "openapi", conflicts_with = "openapi")]
    pub design: Option<PathBuf>,

    /// Path to an OpenAPI 3 document (YAML or JSON) used instead of a design document.
    #[clap(long)]
    pub openapi: Option<PathBuf>,

    /// Directory under which `reduxa/` is created.
    #[clap(long, env = "REDUXA_OUT")]
    pub out: PathBuf,

    /// Request timeout baked into the action creators (e.g. `20s`, `1m 30s`, `1500ms`).
    #[clap(long, default_value = "20s", value_parser = humantime::parse_duration)]
    pub timeout: Duration,

    /// URL scheme, defaults to the first scheme of the API then `http`.
    #[clap(long, env = "REDUXA_SCHEME")]
    pub scheme: Option<String>,

    /// API hostname, defaults to the host of the API description.
    #[clap(long, env = "REDUXA_HOST")]
    pub host: Option<String>,

    /// How generated modules are split into files.
    #[clap(long, value_enum, default_value_t = LayoutArg::Combined)]
    pub layout: LayoutArg,

    /// Emit a reset action and type per resource.
    #[clap(long)]
    pub reset_actions: bool,

    /// Keep resource nouns exactly as written instead of singularizing/pluralizing.
    #[clap(long)]
    pub no_inflect: bool,

    /// Extra initialisms kept in uppercase (repeatable).
    #[clap(long = "initialism")]
    pub initialism: Vec<String>,

    /// Extra reserved identifiers that get the `_` suffix (repeatable).
    #[clap(long = "reserved")]
    pub reserved: Vec<String>,
}

/// Executes the generation and returns the written paths.
///
/// # Arguments
///
/// * `args` - Command arguments.
pub fn execute(args: &GenerateArgs) -> AppResult<Vec<PathBuf>> {
    let api = load_api(args)?;

    let tables = WordTables::javascript()
        .with_initialisms(&args.initialism)
        .with_reserved(&args.reserved);
    let inflector: &dyn Inflector = if args.no_inflect {
        &NoopInflector
    } else {
        &EnglishInflector
    };

    let config = GeneratorConfig {
        out_dir: args.out.clone(),
        timeout: args.timeout,
        scheme: args.scheme.clone(),
        host: args.host.clone(),
        layout: args.layout.into(),
        reset_actions: args.reset_actions,
        ..GeneratorConfig::default()
    };
    info!(api = %api.name, layout = %config.layout, "generating client");

    let mut generator = Generator::new(config, ReduxStrategy, Canonicalizer::new(&tables), inflector);
    generator.generate(&api)
}

fn load_api(args: &GenerateArgs) -> AppResult<ApiDefinition> {
    match (&args.design, &args.openapi) {
        (Some(path), _) => parse_design_document(&read_input(path)?),
        (None, Some(path)) => parse_openapi_design(&read_input(path)?),
        (None, None) => Err(AppError::General(
            "missing API description, set it with --design or --openapi".to_string(),
        )),
    }
}

fn read_input(path: &Path) -> AppResult<String> {
    if !path.exists() {
        return Err(AppError::General(format!(
            "API description not found: {:?}",
            path
        )));
    }
    fs::read_to_string(path)
        .map_err(|e| AppError::General(format!("Failed to read {:?}: {}", path, e)))
}
