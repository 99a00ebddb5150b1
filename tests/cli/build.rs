use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_build_merges_in_name_order() -> Result<()> {
    let test = CliTest::with_project(
        &["a", "b"],
        &[
            ("files/two.json", r#"{"strings": {"a": "2", "b": "3"}}"#),
            ("files/one.json", r#"{"strings": {"a": "1"}}"#),
        ],
    )?;

    let (code, stdout) = run(test.command())?;
    assert_eq!(code, 0);
    assert!(stdout.contains("keys.json is up to date."));
    assert!(stdout.contains("keys.json had 2 keys."));
    assert!(stdout.contains("Files are up to date (2 locale files checked)."));
    assert!(stdout.contains(&format!(
        "Read '{}', strings is now 1",
        test.path("files/one.json").display()
    )));
    assert!(stdout.contains(&format!(
        "Read '{}', strings is now 2",
        test.path("files/two.json").display()
    )));
    assert!(stdout.contains(&format!(
        "Saved files to {}",
        test.path("output.json").display()
    )));

    let output = test.read_file("output.json")?;
    assert!(output.starts_with('\u{feff}'));
    assert_snapshot!(output.trim_start_matches('\u{feff}').trim_end(), @r#"
{
  "strings": {
    "a": "2",
    "b": "3"
  }
}
"#);

    Ok(())
}

#[test]
fn test_build_subcommand_matches_bare_invocation() -> Result<()> {
    let test = CliTest::with_project(
        &["a"],
        &[("files/one.json", r#"{"strings": {"a": "1"}}"#)],
    )?;

    let (code, _) = run(test.command())?;
    assert_eq!(code, 0);
    let bare = test.read_file("output.json")?;

    let (code, _) = run(test.build_command())?;
    assert_eq!(code, 0);
    assert_eq!(test.read_file("output.json")?, bare);

    Ok(())
}

#[test]
fn test_missing_key_in_files() -> Result<()> {
    let test = CliTest::with_project(
        &["a", "b"],
        &[("files/one.json", r#"{"strings": {"a": "1"}}"#)],
    )?;

    let (code, stdout) = run(test.command())?;
    assert_eq!(code, 1);
    assert!(
        stdout.contains("Failed to find the following 1 language key in files:\n  b\n")
    );
    assert!(!stdout.contains("Saved files"));
    assert!(!test.path("output.json").exists());

    Ok(())
}

#[test]
fn test_unregistered_key_halts_build() -> Result<()> {
    let test = CliTest::with_project(
        &["a"],
        &[("files/one.json", r#"{"strings": {"a": "1"}}"#)],
    )?;
    test.write_file("en/output.json", r#"{"strings": {"a": "A", "fresh": "F"}}"#)?;

    let (code, stdout) = run(test.command())?;
    assert_eq!(code, 1);
    assert!(
        stdout.contains("Failed to find the following 1 language key in keys.json:\n  fresh\n")
    );
    assert!(stdout.contains("hint: run langc save-keys"));
    assert!(!stdout.contains("had 1 key"));
    assert!(!test.path("output.json").exists());

    Ok(())
}

#[test]
fn test_unreadable_locale_file_aborts() -> Result<()> {
    let test = CliTest::with_project(
        &["a"],
        &[("files/good.json", r#"{"strings": {"a": "1"}}"#)],
    )?;
    test.write_bytes("files/broken.json", &[0x7b, 0xff, 0xfe, 0x7d])?;
    test.write_file("output.json", "previous build")?;

    let (code, stdout) = run(test.command())?;
    assert_eq!(code, 2);
    assert!(stdout.contains("keys.json had 1 key.\n"));
    assert!(stdout.contains(&format!(
        "error: Failed to read '{}': invalid UTF-8 text",
        test.path("files/broken.json").display()
    )));
    assert_eq!(test.read_file("output.json")?, "previous build");

    Ok(())
}

#[test]
fn test_locale_file_without_strings_field_aborts() -> Result<()> {
    let test = CliTest::with_project(
        &["a"],
        &[("files/one.json", r#"{"messages": {"a": "1"}}"#)],
    )?;

    let (code, stdout) = run(test.command())?;
    assert_eq!(code, 2);
    assert!(stdout.contains("expected a mapping under \"strings\""));
    assert!(!test.path("output.json").exists());

    Ok(())
}

#[test]
fn test_missing_registry_is_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("en/output.json", r#"{"strings": {}}"#)?;

    let (code, stdout) = run(test.command())?;
    assert_eq!(code, 2);
    assert!(stdout.contains(&format!(
        "error: Failed to load key registry: {}: file not found",
        test.path("keys.json").display()
    )));

    Ok(())
}

#[test]
fn test_empty_project_writes_empty_output() -> Result<()> {
    let test = CliTest::with_project(&[], &[])?;
    std::fs::create_dir(test.path("files"))?;

    let (code, _) = run(test.command())?;
    assert_eq!(code, 0);
    assert_eq!(
        test.read_file("output.json")?,
        "\u{feff}{\n  \"strings\": {}\n}\n"
    );

    Ok(())
}

#[test]
fn test_cli_overrides_and_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".langcrc.json",
        r#"{
         "registryPath": "meta/keys.json",
         "filesDir": "locales",
         "writeBom": false
     }"#,
    )?;
    test.write_file("meta/keys.json", r#"{"keys": ["hello"]}"#)?;
    test.write_file("en/output.json", r#"{"strings": {"hello": "Hello"}}"#)?;
    test.write_file("locales/de.json", r#"{"strings": {"hello": "Hallo"}}"#)?;

    let mut cmd = test.build_command();
    cmd.args(["--output", "dist/strings.json"]);
    let (code, _) = run(cmd)?;
    assert_eq!(code, 0);
    assert_eq!(
        test.read_file("dist/strings.json")?,
        "{\n  \"strings\": {\n    \"hello\": \"Hallo\"\n  }\n}\n"
    );
    assert!(!test.path("output.json").exists());

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("--help");
    let (code, stdout) = run(cmd)?;
    assert_eq!(code, 0);
    for command in ["build", "check", "save-keys", "init"] {
        assert!(stdout.contains(command), "help is missing {command}");
    }

    Ok(())
}
