//! Fixture-driven end-to-end tests.
//!
//! Each TOML file under `tests/fixtures/` holds a list of cases with an
//! input component, an optional active theme and the expected output.
//! Comparison is trim-insensitive at the outer edges, matching how hosts
//! treat the transform result.

use serde::Deserialize;
use std::path::PathBuf;
use themed_style::{transform, ThemeOptions};

#[derive(Debug, Deserialize)]
struct Fixture {
    cases: Vec<TestCase>,
}

#[derive(Debug, Deserialize)]
struct TestCase {
    name: String,
    #[serde(default)]
    theme: Option<String>,
    input: String,
    expected: String,
}

fn run_fixture(file: &str) {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(file);
    let raw = std::fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let fixture: Fixture = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));

    for case in fixture.cases {
        let options = ThemeOptions {
            theme: case.theme.clone(),
            debug: false,
        };
        let actual = transform(&case.input, "fixture.vue", &options)
            .unwrap_or_else(|err| panic!("case '{}' failed: {err}", case.name));
        assert_eq!(
            actual.trim(),
            case.expected.trim(),
            "case '{}' (theme: {:?})",
            case.name,
            case.theme
        );
    }
}

#[test]
fn passthrough_components() {
    run_fixture("passthrough.toml");
}

#[test]
fn theme_selection() {
    run_fixture("theming.toml");
}

#[test]
fn targeted_replacement() {
    run_fixture("replace_by_id.toml");
}

#[test]
fn custom_blocks_stay_on_top() {
    let source = "\
<docs>Usage notes.</docs>

<template><div/></template>

<style theme=\"a\">.x {}</style>
";
    let output = transform(source, "fixture.vue", &ThemeOptions::default()).unwrap();
    assert!(output.starts_with("<docs>Usage notes.</docs>\n\n"));
    // The themed block is blanked (no active theme) and loses its attrs.
    assert!(output.trim_end().ends_with("<style></style>"));
}

#[test]
fn options_resolved_from_host_config() {
    let config = serde_json::json!({ "theme": "a" });
    let options = ThemeOptions::from_config(&config).unwrap();

    let source = "<style theme=\"a\">.x { color: blue; }</style>";
    let output = transform(source, "fixture.vue", &options).unwrap();
    assert_eq!(output.trim(), "<style>.x { color: blue; }</style>");
}
