use pretty_assertions::assert_eq;
use reduxa_core::{
    parse_design_document, parse_openapi_design, Canonicalizer, EnglishInflector, Generator,
    GeneratorConfig, Layout, NoopInflector, ReduxStrategy,
};
use std::fs;
use tempfile::tempdir;

const CELLAR: &str = include_str!("fixtures/cellar.yaml");

#[test]
fn test_per_resource_matches_reference_output() {
    let api = parse_design_document(CELLAR).unwrap();
    let dir = tempdir().unwrap();
    let config = GeneratorConfig {
        out_dir: dir.path().to_path_buf(),
        layout: Layout::PerResource,
        ..GeneratorConfig::default()
    };
    let inflector = EnglishInflector;
    let mut gen = Generator::new(config, ReduxStrategy, Canonicalizer::javascript(), &inflector);
    gen.generate(&api).unwrap();

    let out = dir.path().join("reduxa");
    assert_eq!(
        fs::read_to_string(out.join("ahActions.js")).unwrap(),
        include_str!("fixtures/ahActions.js")
    );
    assert_eq!(
        fs::read_to_string(out.join("ahActionCreators.js")).unwrap(),
        include_str!("fixtures/ahActionCreators.js")
    );
}

#[test]
fn test_per_resource_naming() {
    let api = parse_design_document(CELLAR).unwrap();
    let dir = tempdir().unwrap();
    let config = GeneratorConfig {
        out_dir: dir.path().to_path_buf(),
        layout: Layout::PerResource,
        ..GeneratorConfig::default()
    };
    let inflector = EnglishInflector;
    let mut gen = Generator::new(config, ReduxStrategy, Canonicalizer::javascript(), &inflector);
    gen.generate(&api).unwrap();

    let creators = fs::read_to_string(dir.path().join("reduxa/bottleActionCreators.js")).unwrap();
    assert!(creators.contains("export const createBottle = (url, options, data, handleSuccess, handleError) =>"));
    assert!(creators.contains("export const listBottles = (url, options, handleSuccess, handleError) =>"));
    assert!(creators.contains("// List all bottles in account optionally filtering by year\n"));
    assert!(creators.contains("// http://localhost:8081/cellar/accounts/:accountID/bottles\n"));
    assert!(creators.contains("// http://localhost:8081/cellar/accounts/:accountID/bottles/:bottleID/actions/rate\n"));
    assert!(creators.contains("// Query Parameters: years is expected in params.\n"));

    let types = fs::read_to_string(dir.path().join("reduxa/accountActionTypes.js")).unwrap();
    assert_eq!(
        types.lines().filter(|l| l.starts_with("export const REQ_")).count(),
        5
    );
    assert!(types.contains("export const REQ_LIST_ACCOUNTS = 'REQ_LIST_ACCOUNTS';"));
    assert!(types.contains("export const RCV_UPDATE_ACCOUNT_ERROR = 'RCV_UPDATE_ACCOUNT_ERROR';"));
}

#[test]
fn test_combined_layout_writes_three_files() {
    let api = parse_design_document(CELLAR).unwrap();
    let dir = tempdir().unwrap();
    let config = GeneratorConfig {
        out_dir: dir.path().to_path_buf(),
        ..GeneratorConfig::default()
    };
    let mut gen = Generator::new(config, ReduxStrategy, Canonicalizer::javascript(), &NoopInflector);
    let files = gen.generate(&api).unwrap();

    let out = dir.path().join("reduxa");
    assert_eq!(
        files,
        vec![
            out.clone(),
            out.join("cellarActionCreators.js"),
            out.join("cellarActionTypes.js"),
            out.join("cellarActions.js"),
        ]
    );

    let actions = fs::read_to_string(out.join("cellarActions.js")).unwrap();
    // Groups follow action name order: create, delete, health, list, rate, show, update.
    let requests: Vec<_> = actions
        .lines()
        .filter_map(|l| l.strip_prefix("export const request"))
        .map(|l| l.split(' ').next().unwrap_or_default())
        .collect();
    assert_eq!(
        requests,
        vec![
            "CreateAccounts",
            "CreateBottles",
            "DeleteAccounts",
            "HealthAh",
            "ListAccounts",
            "ListBottles",
            "RateBottles",
            "ShowAccounts",
            "ShowBottles",
            "UpdateAccounts",
        ]
    );
}

#[test]
fn test_output_is_deterministic() {
    let api = parse_design_document(CELLAR).unwrap();
    let inflector = EnglishInflector;
    let gen = Generator::new(
        GeneratorConfig::default(),
        ReduxStrategy,
        Canonicalizer::javascript(),
        &inflector,
    );
    let first = gen.render(&api).unwrap();
    let second = gen.render(&api).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_regenerate_replaces_stale_files() {
    let api = parse_design_document(CELLAR).unwrap();
    let dir = tempdir().unwrap();
    let stale = dir.path().join("reduxa/oldActions.js");
    fs::create_dir_all(stale.parent().unwrap()).unwrap();
    fs::write(&stale, "stale").unwrap();

    let config = GeneratorConfig {
        out_dir: dir.path().to_path_buf(),
        ..GeneratorConfig::default()
    };
    let mut gen = Generator::new(config, ReduxStrategy, Canonicalizer::javascript(), &NoopInflector);
    gen.generate(&api).unwrap();
    assert!(!stale.exists());
}

#[test]
fn test_errors_leave_existing_output_alone() {
    let api = parse_design_document(CELLAR).unwrap();
    let dir = tempdir().unwrap();
    let previous = dir.path().join("reduxa/cellarActions.js");
    fs::create_dir_all(previous.parent().unwrap()).unwrap();
    fs::write(&previous, "previous").unwrap();

    // Rendering fails on the missing host before anything is removed.
    let mut api_without_host = api.clone();
    api_without_host.host = None;
    let config = GeneratorConfig {
        out_dir: dir.path().to_path_buf(),
        ..GeneratorConfig::default()
    };
    let mut gen = Generator::new(config, ReduxStrategy, Canonicalizer::javascript(), &NoopInflector);
    assert!(gen.generate(&api_without_host).is_err());
    assert_eq!(fs::read_to_string(&previous).unwrap(), "previous");

    let blocked = dir.path().join("blocked");
    fs::write(&blocked, "not a directory").unwrap();
    let config = GeneratorConfig {
        out_dir: blocked.clone(),
        ..GeneratorConfig::default()
    };
    let mut gen = Generator::new(config, ReduxStrategy, Canonicalizer::javascript(), &NoopInflector);
    assert!(gen.generate(&api).is_err());
    assert_eq!(fs::read_to_string(&blocked).unwrap(), "not a directory");
}

#[test]
fn test_openapi_import_end_to_end() {
    let doc = r#"
openapi: 3.0.0
info: { title: shop, version: "1" }
servers: [{ url: "https://shop.example.com/api" }]
paths:
  /orders:
    get: { operationId: listOrders, tags: [orders] }
  /orders/{orderId}:
    get: { operationId: show_order, tags: [orders] }
"#;
    let api = parse_openapi_design(doc).unwrap();
    let inflector = EnglishInflector;
    let gen = Generator::new(
        GeneratorConfig::default(),
        ReduxStrategy,
        Canonicalizer::javascript(),
        &inflector,
    );
    let files = gen.render(&api).unwrap();
    assert_eq!(files[0].name, "shopActionCreators.js");
    assert!(files[0].contents.contains("export const listOrders = "));
    assert!(files[0].contents.contains("export const showOrder = "));
    assert!(files[0].contents.contains("// https://shop.example.com/api/orders/:orderId\n"));
}

#[test]
fn test_cleanup_removes_recorded_files() {
    let api = parse_design_document(CELLAR).unwrap();
    let dir = tempdir().unwrap();
    let config = GeneratorConfig {
        out_dir: dir.path().to_path_buf(),
        layout: Layout::PerResource,
        ..GeneratorConfig::default()
    };
    let inflector = EnglishInflector;
    let mut gen = Generator::new(config, ReduxStrategy, Canonicalizer::javascript(), &inflector);
    let files = gen.generate(&api).unwrap();
    assert!(files.iter().all(|path| path.exists()));

    gen.cleanup();
    assert!(!dir.path().join("reduxa").exists());
    for path in &files {
        assert!(!path.exists(), "{} survived cleanup", path.display());
    }
    // Nothing is recorded any more; a second cleanup is a no-op.
    gen.cleanup();
    assert!(dir.path().exists());
}
