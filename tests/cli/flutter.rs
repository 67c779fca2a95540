use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

const CONFIG: &str = r#"{
    "projectSourcePath": "lib",
    "projectSourceParser": {
        "extensions": ["dart"],
        "rules": [
            { "type": "match", "pattern": "localizations\\.([a-zA-Z0-9_]+)" }
        ]
    },
    "wordingsSource": "l10n/wordings.arb",
    "wordingsSourceParser": {
        "replaces": [{ "regex": "^@.*", "by": "" }]
    }
}"#;

const MAIN_DART: &str = r#"
class App extends StatelessWidget {
  Widget build(BuildContext context) {
    final localizations = AppLocalizations.of(context)!;
    return Column(children: [
      Text(localizations.wording),
      Text(localizations.wordingWithParameter("Bob")),
    ]);
  }
}
"#;

const HOME_DART: &str = r#"
class Home extends StatelessWidget {
  Widget build(BuildContext context) {
    return Column(children: [
      Text(localizations.wordingOnlyInProject),
      Text(AppLocalizations.of(context)!.wordingWithNewRegex),
    ]);
  }
}
"#;

const WORDINGS_ARB: &str = r#"{
    "@@locale": "en",
    "wording": "Wording",
    "wordingWithParameter": "Hello {name}",
    "@wordingWithParameter": {
        "placeholders": { "name": { "type": "String" } }
    },
    "wordingOnlyInFile": "Only in file"
}"#;

fn flutter_project(config: &str) -> Result<CliTest> {
    let test = CliTest::with_files(&[
        ("lib/main.dart", MAIN_DART),
        ("lib/pages/home.dart", HOME_DART),
        ("lib/pages/home.test.dart", "localizations.fromTestFile"),
        ("lib/README.md", "localizations.fromMarkdown"),
        ("l10n/wordings.arb", WORDINGS_ARB),
    ])?;
    test.write_config(config)?;
    Ok(test)
}

#[test]
fn test_show_all_project_keys() -> Result<()> {
    let test = flutter_project(CONFIG)?;

    let mut cmd = test.report_command();
    cmd.arg("--show-all-project-keys");
    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    wording
    wordingOnlyInProject
    wordingWithParameter
    TOTAL 3  project keys

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_show_all_project_keys_with_multiple_rules() -> Result<()> {
    let config = CONFIG.replace(
        r#"{ "type": "match", "pattern": "localizations\\.([a-zA-Z0-9_]+)" }"#,
        r#"{ "type": "match", "pattern": "localizations\\.([a-zA-Z0-9_]+)" },
           { "type": "match", "pattern": "AppLocalizations\\.of\\(context\\)!?\\.([a-zA-Z0-9_]+)" }"#,
    );
    let test = flutter_project(&config)?;

    let mut cmd = test.report_command();
    cmd.arg("--show-all-project-keys");
    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    wording
    wordingOnlyInProject
    wordingWithNewRegex
    wordingWithParameter
    TOTAL 4  project keys

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_show_all_file_keys() -> Result<()> {
    let test = flutter_project(CONFIG)?;

    let mut cmd = test.report_command();
    cmd.arg("--show-all-file-keys");
    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    wording
    wordingOnlyInFile
    wordingWithParameter
    TOTAL 3  file keys

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_show_all_file_keys_without_rewrites_keeps_metadata() -> Result<()> {
    let config = CONFIG.replace(r#"[{ "regex": "^@.*", "by": "" }]"#, "[]");
    let test = flutter_project(&config)?;

    let mut cmd = test.report_command();
    cmd.arg("--show-all-file-keys");
    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    @@locale
    @wordingWithParameter
    wording
    wordingOnlyInFile
    wordingWithParameter
    TOTAL 5  file keys

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_default_shows_orphan_file_keys() -> Result<()> {
    let test = flutter_project(CONFIG)?;

    assert_cmd_snapshot!(test.report_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    wordingOnlyInFile
    TOTAL 1  file keys unused in project

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_show_orphan_project_keys() -> Result<()> {
    let test = flutter_project(CONFIG)?;

    let mut cmd = test.report_command();
    cmd.arg("--show-orphan-project-keys");
    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    wordingOnlyInProject
    TOTAL 1  project keys missing from file

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_replacement_keeps_group_reference_before_word_characters() -> Result<()> {
    let config = CONFIG.replace(
        r#"{ "type": "match", "pattern": "localizations\\.([a-zA-Z0-9_]+)" }"#,
        r#"{ "type": "match", "pattern": "localizations\\.([a-zA-Z0-9_]+)",
             "next": { "type": "replace", "regex": "^(wording)$", "by": "$1_label" } }"#,
    );
    let test = flutter_project(&config)?;

    let mut cmd = test.report_command();
    cmd.arg("--show-all-project-keys");
    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    wordingOnlyInProject
    wordingWithParameter
    wording_label
    TOTAL 3  project keys

    ----- stderr -----
    ");
    Ok(())
}
