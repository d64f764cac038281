use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const INCOMPLETE_COMPONENT: &str = r#"<template>
  <p>{{ t('menu.save') }}</p>
</template>

<i18n>
{
  "en": { "menu": { "save": "Save", "open": "Open" }, "title": "Editor" },
  "fr": { "menu": { "save": "Enregistrer" } }
}
</i18n>
"#;

const COMPLETE_COMPONENT: &str = r#"<i18n lang="yaml">
en:
  hello: Hello
de:
  hello: Hallo
</i18n>
"#;

#[test]
fn test_reports_missing_keys() -> Result<()> {
    let test = CliTest::with_file("App.vue", INCOMPLETE_COMPONENT)?;

    assert_cmd_snapshot!(test.missing_command().arg("App.vue"), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    ✘ App.vue
      fr  menu.open, title
    ✘ Found 2 missing keys in 1 of 1 file

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_complete_file_succeeds() -> Result<()> {
    let test = CliTest::with_file("Hello.vue", COMPLETE_COMPONENT)?;

    let output = test.missing_command().arg("Hello.vue").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "✓ Checked 1 file - no missing keys\n");

    Ok(())
}

#[test]
fn test_print_file_lists_complete_files() -> Result<()> {
    let test = CliTest::with_file("Hello.vue", COMPLETE_COMPONENT)?;

    let output = test.missing_command().args(["-f", "Hello.vue"]).output()?;

    assert!(output.status.success());
    assert!(stdout(&output).starts_with("✓ Hello.vue\n"));

    Ok(())
}

#[test]
fn test_directory_scan_finds_components_only() -> Result<()> {
    let test = CliTest::with_file("src/components/App.vue", INCOMPLETE_COMPONENT)?;
    test.write_file("src/components/Hello.vue", COMPLETE_COMPONENT)?;
    test.write_file("src/locales/en.json", r#"{"en": {"a": "x"}, "fr": {}}"#)?;
    test.write_file("node_modules/lib/Broken.vue", "<template></template>")?;

    let output = test.missing_command().arg("src").output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("App.vue"));
    assert!(!out.contains("en.json"));
    assert!(out.ends_with("✘ Found 2 missing keys in 1 of 2 files\n"));
    assert_eq!(stderr(&output), "");

    Ok(())
}

#[test]
fn test_standalone_resource_file() -> Result<()> {
    let test = CliTest::with_file(
        "locales.yaml",
        "en:\n  greeting: Hello\n  farewell: Bye\nja:\n  greeting: こんにちは\n",
    )?;

    let output = test.missing_command().arg("locales.yaml").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("  ja  farewell\n"));

    Ok(())
}

#[test]
fn test_component_without_block_is_reported() -> Result<()> {
    let test = CliTest::with_file("Plain.vue", "<template><div /></template>\n")?;

    let output = test.missing_command().arg("Plain.vue").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert_eq!(stderr(&output), "error: Plain.vue: i18n block not found\n");

    Ok(())
}

#[test]
fn test_invalid_tree_is_reported() -> Result<()> {
    let test = CliTest::with_file(
        "Bad.vue",
        "<i18n>\n{ \"en\": { \"menu.save\": \"Save\" } }\n</i18n>\n",
    )?;

    let output = test.missing_command().arg("Bad.vue").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("contains '.' inside a key name"));

    Ok(())
}

#[test]
fn test_default_format_flag() -> Result<()> {
    let test = CliTest::with_file("Yaml.vue", "<i18n>\nen:\n  a: A\nfr: {}\n</i18n>\n")?;

    let as_json = test.missing_command().arg("Yaml.vue").output()?;
    let as_yaml = test
        .missing_command()
        .args(["--default-format", "yaml", "Yaml.vue"])
        .output()?;

    assert!(stderr(&as_json).contains("Failed to parse JSON"));
    assert_eq!(as_yaml.status.code(), Some(1));
    assert!(stdout(&as_yaml).contains("  fr  a\n"));

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file("Hello.vue", COMPLETE_COMPONENT)?;
    test.write_file(".i18nfillrc.json", r#"{ "timeoutSecs": 0 }"#)?;

    let output = test.missing_command().arg("Hello.vue").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("Error: "));

    Ok(())
}

#[test]
fn test_paths_are_required() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.missing_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("<PATHS>"));

    Ok(())
}
