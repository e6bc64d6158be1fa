use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run, setup_home_scenario, stderr, stdout};

#[test]
fn test_report_only_scenario() -> Result<()> {
    let test = CliTest::new()?;
    setup_home_scenario(&test)?;

    let output = run(test.keysync(&["--langs", "en,it"]))?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "
================== KEY COMPARISON REPORT ==================
Total Unique Keys Found in Source Code (Static): 2
Total Preserved Dynamic Keys: 0

--- LOCALE: EN --- (reference)
Missing Keys (Used in code, missing in en): 0
Unused Keys (In en, not found in code): 1

--- LOCALE: IT ---
Missing Keys (Used in code, missing in it): 2
  - home.subtitle
  - home.title
Unused Keys (In it, not found in code): 0

Run with --sync to automatically strip unused keys and add missing ones.
"
    );
    assert!(stderr(&output).contains("Extracting used keys from 'src'..."));
    Ok(())
}

#[test]
fn test_report_only_never_writes() -> Result<()> {
    let test = CliTest::new()?;
    setup_home_scenario(&test)?;
    let before = test.read_file("locales/en/translation.json")?;

    let output = run(test.keysync(&[]))?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(test.read_file("locales/en/translation.json")?, before);
    assert_eq!(test.read_file("locales/it/translation.json")?, "{}\n");
    // Default locales include fr and de, which have no catalog yet
    assert!(!test.root().join("locales/fr").exists());
    assert!(stdout(&output).contains("Missing Keys (Used in code, missing in de): 2"));
    Ok(())
}

#[test]
fn test_dynamic_prefixes_are_reported() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "src/Reports.tsx",
        "const label = t(`reports.${period}`);\nconst s = t(`status.${code}.label`);\n",
    )?;
    test.write_file(
        "locales/en/translation.json",
        r#"{"reports": {"daily": "Daily", "monthly": "Monthly"}, "status": {"ok": {"label": "OK"}}}"#,
    )?;

    let output = run(test.keysync(&["--langs", "en"]))?;
    let out = stdout(&output);

    assert!(out.starts_with("Found dynamic prefixes: reports., status.\n"));
    assert!(out.contains("Total Unique Keys Found in Source Code (Static): 0\n"));
    assert!(out.contains("Total Preserved Dynamic Keys: 3\n"));
    assert!(out.contains("Unused Keys (In en, not found in code): 0\n"));
    Ok(())
}

#[test]
fn test_check_fails_on_drift() -> Result<()> {
    let test = CliTest::new()?;
    setup_home_scenario(&test)?;

    let output = run(test.keysync(&["--langs", "en,it", "--check"]))?;
    assert_eq!(output.status.code(), Some(1));
    Ok(())
}

#[test]
fn test_check_passes_when_in_sync() -> Result<()> {
    let test = CliTest::new()?;
    setup_home_scenario(&test)?;

    let synced = run(test.keysync(&["--langs", "en,it", "--sync"]))?;
    assert_eq!(synced.status.code(), Some(0));

    let output = run(test.keysync(&["--langs", "en,it", "--check"]))?;
    assert_eq!(output.status.code(), Some(0));
    Ok(())
}

#[test]
fn test_missing_source_dir_is_fatal() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locales/en/translation.json", r#"{"a": "A"}"#)?;

    let output = run(test.keysync(&["--langs", "en", "--sync"]))?;

    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("Error:"));
    assert!(err.contains("Source directory 'src' does not exist."));
    assert_eq!(test.read_file("locales/en/translation.json")?, r#"{"a": "A"}"#);
    Ok(())
}

#[test]
fn test_malformed_catalog_is_fatal() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/app.ts", "t('a')")?;
    test.write_file("locales/en/translation.json", r#"{"a": "A"}"#)?;
    test.write_file("locales/it/translation.json", "{ this is not json")?;

    let output = run(test.keysync(&["--langs", "en,it", "--sync"]))?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to parse catalog file"));
    assert!(stdout(&output).is_empty());
    // Loading happens before any write
    assert_eq!(test.read_file("locales/en/translation.json")?, r#"{"a": "A"}"#);
    Ok(())
}

#[test]
fn test_missing_required_args() -> Result<()> {
    let test = CliTest::new()?;
    let output = run(test.command())?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("--src"));
    Ok(())
}

#[test]
fn test_verbose_notes() -> Result<()> {
    let test = CliTest::new()?;
    setup_home_scenario(&test)?;
    test.write_bytes("src/assets/logo.png", b"\x89PNG\r\n\x1a\n\0\0\0")?;

    let output = run(test.keysync(&["--langs", "en", "-v"]))?;
    let err = stderr(&output);

    assert!(err.contains("note: No .keysyncrc.json found, using default configuration"));
    assert!(err.contains("note: Scanned 1 source file, reference locale 'en'"));
    assert!(err.contains("note: Skipped binary file"));
    assert!(err.contains("logo.png"));
    Ok(())
}
