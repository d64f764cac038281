use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

use crate::{CliTest, stderr, stdout};

const COMPONENT: &str = r#"<template>
  <p>{{ t('hello') }}</p>
</template>

<i18n>
{
  "en": { "hello": "Hello" },
  "fr": {}
}
</i18n>
"#;

#[test]
fn test_key_is_required() -> Result<()> {
    let test = CliTest::with_file("App.vue", COMPONENT)?;

    let output = test.translate_command().arg("App.vue").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("--key"));

    Ok(())
}

#[test]
fn test_missing_api_key_leaves_file_untouched() -> Result<()> {
    let test = CliTest::with_file("App.vue", COMPONENT)?;

    let output = test
        .translate_command()
        .args(["-k", "en.hello", "App.vue"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(
        stdout(&output).contains("no API key configured"),
        "stdout: {}",
        stdout(&output)
    );
    assert_eq!(test.read_file("App.vue")?, COMPONENT);

    Ok(())
}

#[test]
fn test_single_language_has_no_targets() -> Result<()> {
    let test = CliTest::with_file("Solo.vue", "<i18n>\n{ \"en\": { \"hello\": \"Hello\" } }\n</i18n>\n")?;

    let output = test
        .translate_command()
        .args(["-k", "en.hello", "--api-key", "unused", "Solo.vue"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("\"en\" is the only language"));

    Ok(())
}

#[test]
fn test_unknown_keys_translate_nothing() -> Result<()> {
    let test = CliTest::with_file("App.vue", COMPONENT)?;

    let output = test
        .translate_command()
        .args(["-k", "en.absent", "-k", "title", "--api-key", "unused", "App.vue"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "✘ App.vue  no keys to translate\n✘ Updated 0 of 1 file, 1 file not translated\n"
    );
    assert_eq!(test.read_file("App.vue")?, COMPONENT);

    Ok(())
}

#[test]
fn test_dry_run_without_api_key_fails_the_same_way() -> Result<()> {
    let test = CliTest::with_file("App.vue", COMPONENT)?;

    let output = test
        .translate_command()
        .args(["--dry-run", "-k", "en.hello", "App.vue"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Dry run: 0 of 1 file would be updated"));
    assert_eq!(test.read_file("App.vue")?, COMPONENT);

    Ok(())
}

const TRANSLATED_COMPONENT: &str = r#"<template>
  <p>{{ t('hello') }}</p>
</template>

<i18n>
{
  "en": {
    "hello": "Hello"
  },
  "fr": {
    "hello": "Bonjour"
  }
}
</i18n>
"#;

/// Serve a Gemini-style reply whose text is `answer`, and point the project config at it.
async fn mock_translation_service(test: &CliTest, answer: Value) -> Result<MockServer> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-test:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": [{"text": answer.to_string()}]}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    test.write_file(
        ".i18nfillrc.json",
        &json!({"endpoint": server.uri(), "model": "gemini-test"}).to_string(),
    )?;

    Ok(server)
}

#[tokio::test]
async fn test_translation_is_written_into_block() -> Result<()> {
    let test = CliTest::with_file("App.vue", COMPONENT)?;
    let _server = mock_translation_service(
        &test,
        json!({"en": {"hello": "Hello"}, "fr": {"hello": "Bonjour"}}),
    )
    .await?;

    let output = test
        .translate_command()
        .args(["-k", "en.hello", "--api-key", "test-key", "App.vue"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "\u{2713} App.vue  translated 1 key\n\u{2713} Updated 1 of 1 file\n"
    );
    assert_eq!(test.read_file("App.vue")?, TRANSLATED_COMPONENT);

    Ok(())
}

#[tokio::test]
async fn test_dry_run_prints_preview() -> Result<()> {
    let test = CliTest::with_file("App.vue", COMPONENT)?;
    let _server = mock_translation_service(
        &test,
        json!({"en": {"hello": "Hello"}, "fr": {"hello": "Bonjour"}}),
    )
    .await?;

    let output = test
        .translate_command()
        .args(["--dry-run", "-k", "en.hello", "--api-key", "test-key", "App.vue"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        concat!(
            "\u{2713} App.vue  would translate 1 key\n",
            "{\n",
            "  \"en\": {\n",
            "    \"hello\": \"Hello\"\n",
            "  },\n",
            "  \"fr\": {\n",
            "    \"hello\": \"Bonjour\"\n",
            "  }\n",
            "}\n",
            "\u{2713} Dry run: 1 of 1 file would be updated\n",
        )
    );
    assert_eq!(test.read_file("App.vue")?, COMPONENT);

    Ok(())
}

#[tokio::test]
async fn test_unrequested_keys_from_service_are_not_written() -> Result<()> {
    let test = CliTest::with_file(
        "Menu.vue",
        "<i18n lang=\"yaml\">\nen:\n  menu:\n    save: Save\n  title: App\nfr:\n  menu:\n    save: Enregistrer\n</i18n>\n",
    )?;
    let _server = mock_translation_service(
        &test,
        json!({"en": {"title": "App", "menu": "Menu"}, "fr": {"title": "Appli", "menu": "Menu"}}),
    )
    .await?;

    let output = test
        .translate_command()
        .args(["-k", "en.title", "--api-key", "test-key", "Menu.vue"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_file("Menu.vue")?,
        "<i18n lang=\"yaml\">\nen:\n  menu:\n    save: Save\n  title: App\nfr:\n  menu:\n    save: Enregistrer\n  title: Appli\n</i18n>\n"
    );

    Ok(())
}
