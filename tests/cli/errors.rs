use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_no_arguments_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("--config"));
    Ok(())
}

#[test]
fn test_missing_config_flag_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().args(["--show-all-file-keys", "-v"]).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("--show-orphan-file-keys"));
    Ok(())
}

#[test]
fn test_conflicting_modes_rejected() -> Result<()> {
    let test = CliTest::new()?;
    test.write_config("{}")?;

    let output = test
        .report_command()
        .args(["--show-all-project-keys", "--show-orphan-project-keys"])
        .output()?;

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot be used with"));
    Ok(())
}

#[test]
fn test_missing_config_file() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.report_command();
    test.settings().bind(|| {
        assert_cmd_snapshot!(cmd, @r#"
        success: false
        exit_code: 2
        ----- stdout -----

        ----- stderr -----
        Error: Failed to read config file: "[ROOT]/.clean_wording_config.json": No such file or directory (os error 2)
        "#);
    });
    Ok(())
}

#[test]
fn test_missing_project_source_path() -> Result<()> {
    let test = CliTest::new()?;
    test.write_config(r#"{ "wordingsSource": "en.json" }"#)?;

    let mut cmd = test.report_command();
    cmd.arg("--show-all-project-keys");
    assert_cmd_snapshot!(cmd, @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Failed to collect project wording keys: configuration error: no project source path
    ");
    Ok(())
}

#[test]
fn test_project_source_path_is_a_file() -> Result<()> {
    let test = CliTest::with_files(&[("lib/main.dart", "localizations.wording")])?;
    test.write_config(
        r#"{
            "projectSourcePath": "lib/main.dart",
            "projectSourceParser": { "rules": [{ "type": "match", "pattern": "localizations\\.(\\w+)" }] },
            "wordingsSource": "en.json"
        }"#,
    )?;

    let mut cmd = test.report_command();
    cmd.arg("--show-all-project-keys");
    test.settings().bind(|| {
        assert_cmd_snapshot!(cmd, @r"
        success: false
        exit_code: 2
        ----- stdout -----

        ----- stderr -----
        Error: Failed to collect project wording keys: failed to read [ROOT]/lib/main.dart: project source path is not a directory
        ");
    });
    Ok(())
}

#[test]
fn test_project_source_parser_without_rules() -> Result<()> {
    let test = CliTest::new()?;
    test.write_config(
        r#"{
            "projectSourcePath": "lib",
            "projectSourceParser": {},
            "wordingsSource": "en.json"
        }"#,
    )?;

    let mut cmd = test.report_command();
    test.settings().bind(|| {
        assert_cmd_snapshot!(cmd, @r#"
        success: false
        exit_code: 2
        ----- stdout -----

        ----- stderr -----
        Error: Invalid config file: "[ROOT]/.clean_wording_config.json": configuration error: project source parser has no rules
        "#);
    });
    Ok(())
}

#[test]
fn test_unsupported_wordings_format() -> Result<()> {
    let test = CliTest::new()?;
    test.write_config(r#"{ "wordingsSource": "wordings.yaml" }"#)?;

    let mut cmd = test.report_command();
    cmd.arg("--show-all-file-keys");
    test.settings().bind(|| {
        assert_cmd_snapshot!(cmd, @r"
        success: false
        exit_code: 2
        ----- stdout -----

        ----- stderr -----
        Error: Failed to collect file wording keys: unsupported wordings format: [ROOT]/wordings.yaml (only .arb, .json and http(s) URLs are supported)
        ");
    });
    Ok(())
}

#[test]
fn test_invalid_rule_pattern_fails_before_scanning() -> Result<()> {
    let test = CliTest::new()?;
    test.write_config(
        r#"{
            "projectSourcePath": "does-not-exist",
            "projectSourceParser": { "rules": [{ "type": "match", "pattern": "(unclosed" }] },
            "wordingsSource": "en.json"
        }"#,
    )?;

    let output = test.report_command().arg("--show-all-project-keys").output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid config file"));
    assert!(stderr.contains("invalid pattern \"(unclosed\": regex parse error"));
    Ok(())
}

#[test]
fn test_verbose_traces_go_to_stderr() -> Result<()> {
    let test = CliTest::with_files(&[("src/app.js", r#"t("home.title")"#)])?;
    test.write_config(
        r#"{
            "projectSourcePath": "src",
            "projectSourceParser": { "rules": [{ "type": "match", "pattern": "t\\(\"([^\"]+)\"\\)" }] }
        }"#,
    )?;

    let output = test
        .report_command()
        .args(["--show-all-project-keys", "--verbose"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "home.title\nTOTAL 1  project keys\n"
    );
    assert!(String::from_utf8_lossy(&output.stderr).contains("app.js"));
    Ok(())
}
