use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_save_keys_regenerates_registry() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "en/output.json",
        "\u{feff}{\"strings\": {\"title\": \"Title\", \"body\": \"Body\"}}",
    )?;
    test.write_file("keys.json", r#"{"keys": ["stale"]}"#)?;

    let (code, stdout) = run(test.save_keys_command())?;
    assert_eq!(code, 0);
    assert!(stdout.contains(&format!(
        "Saved 2 keys to {}",
        test.path("keys.json").display()
    )));
    assert_eq!(
        test.read_file("keys.json")?,
        "{\n  \"keys\": [\n    \"title\",\n    \"body\"\n  ]\n}\n"
    );

    Ok(())
}

#[test]
fn test_save_keys_then_build_registry_audit_passes() -> Result<()> {
    let test = CliTest::with_project(
        &["a"],
        &[("files/one.json", r#"{"strings": {"a": "1", "b": "2"}}"#)],
    )?;
    test.write_file("en/output.json", r#"{"strings": {"a": "A", "b": "B"}}"#)?;

    let (code, _) = run(test.command())?;
    assert_eq!(code, 1);

    let (code, _) = run(test.save_keys_command())?;
    assert_eq!(code, 0);

    let (code, stdout) = run(test.command())?;
    assert_eq!(code, 0);
    assert!(stdout.contains("keys.json is up to date."));
    assert!(test.path("output.json").exists());

    Ok(())
}

#[test]
fn test_save_keys_without_reference() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout) = run(test.save_keys_command())?;
    assert_eq!(code, 2);
    assert!(stdout.contains("Failed to load reference locale"));
    assert!(!test.path("keys.json").exists());

    Ok(())
}
