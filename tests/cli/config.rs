use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run, stderr, stdout};

#[test]
fn test_config_file_sets_locales_and_catalog_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".keysyncrc.json",
        r#"{
            "locales": ["de", "en"],
            "catalogFile": "messages.json"
        }"#,
    )?;
    test.write_file("src/app.ts", "t('title')")?;
    test.write_file("locales/de/messages.json", r#"{"title": "Titel"}"#)?;

    let output = run(test.keysync(&["--sync"]))?;
    assert_eq!(output.status.code(), Some(0));

    let out = stdout(&output);
    assert!(out.contains("--- LOCALE: DE --- (reference)\n"));
    assert!(!out.contains("LOCALE: IT"));
    assert_eq!(
        test.read_file("locales/en/messages.json")?,
        "{\n    \"title\": \"Titel\"\n}\n"
    );
    Ok(())
}

#[test]
fn test_cli_langs_override_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".keysyncrc.json", r#"{ "locales": ["de", "en"] }"#)?;
    test.write_file("src/app.ts", "t('title')")?;

    let output = run(test.keysync(&["--langs", "pt"]))?;
    let out = stdout(&output);

    assert!(out.contains("--- LOCALE: PT --- (reference)\n"));
    assert!(!out.contains("LOCALE: DE"));
    Ok(())
}

#[test]
fn test_config_preserve_and_ignores() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".keysyncrc.json",
        r#"{
            "locales": ["en"],
            "preserve": ["errors."],
            "ignores": ["**/generated"]
        }"#,
    )?;
    test.write_file("src/app.ts", "t('home')")?;
    test.write_file("src/generated/legacy.ts", "t('legacy.key')")?;
    test.write_file(
        "locales/en/translation.json",
        r#"{"home": "Home", "errors": {"e404": "Not found"}, "legacy": {"key": "L"}}"#,
    )?;

    let output = run(test.keysync(&[]))?;
    let out = stdout(&output);

    assert!(out.contains("Total Unique Keys Found in Source Code (Static): 1\n"));
    assert!(out.contains("Total Preserved Dynamic Keys: 1\n"));
    assert!(out.contains("Unused Keys (In en, not found in code): 1\n"));
    Ok(())
}

#[test]
fn test_explicit_config_path() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("conf/keysync.json", r#"{ "locales": ["fr"] }"#)?;
    test.write_file("src/app.ts", "t('x')")?;

    let output = run(test.keysync(&["--config", "conf/keysync.json"]))?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("--- LOCALE: FR --- (reference)\n"));
    Ok(())
}

#[test]
fn test_invalid_config_is_fatal() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".keysyncrc.json", r#"{ "ignores": ["[invalid"] }"#)?;
    test.write_file("src/app.ts", "t('x')")?;

    let output = run(test.keysync(&[]))?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid glob pattern in 'ignores'"));
    Ok(())
}
