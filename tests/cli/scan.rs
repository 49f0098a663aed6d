use anyhow::Result;
use predicates::prelude::*;

use crate::CliTest;

const USER_GRAPH: &str = r#"{
    "declarations": [
        {
            "name": "UserModule",
            "package": "com.example.user",
            "annotations": [{ "name": "Module" }],
            "members": [
                {
                    "name": "provideRepo",
                    "returnType": "Repo",
                    "annotations": [
                        {
                            "name": "Single",
                            "arguments": { "binds": { "types": ["Repository"] } }
                        }
                    ]
                },
                {
                    "name": "provideService",
                    "returnType": "Service",
                    "annotations": [{ "name": "Factory" }]
                }
            ]
        }
    ]
}"#;

const BROKEN_MEMBER_GRAPH: &str = r#"{
    "declarations": [
        {
            "name": "BrokenModule",
            "package": "com.example.broken",
            "annotations": [{ "name": "Module" }],
            "members": [
                {
                    "name": "provideBroken",
                    "annotations": [{ "name": "Single" }]
                }
            ]
        }
    ]
}"#;

#[test]
fn test_scan_explicit_file() -> Result<()> {
    let test = CliTest::with_file("graphs/user.json", USER_GRAPH)?;

    test.command()
        .args(["scan", "graphs/user.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("module com.example.user.UserModule"))
        .stdout(predicate::str::contains("provideRepo"))
        .stdout(predicate::str::contains(
            "Scanned 1 graph file - 1 module, 2 definitions",
        ));

    Ok(())
}

#[test]
fn test_scan_discovers_graphs() -> Result<()> {
    let test = CliTest::with_file("graphs/user.json", USER_GRAPH)?;
    test.write_file("graphs/empty.json", r#"{ "declarations": [] }"#)?;

    test.command()
        .arg("scan")
        .assert()
        .success()
        .stdout(predicate::str::contains("Scanned 2 graph files"));

    Ok(())
}

#[test]
fn test_scan_json_output() -> Result<()> {
    let test = CliTest::with_file("graphs/user.json", USER_GRAPH)?;

    let output = test
        .command()
        .args(["scan", "--json", "graphs/user.json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let modules: serde_json::Value = serde_json::from_slice(&output)?;
    assert_eq!(modules[0]["package"], "com.example.user");
    assert_eq!(modules[0]["module"]["name"], "UserModule");
    assert_eq!(
        modules[0]["module"]["definitions"][0]["functionName"],
        "provideRepo"
    );
    assert_eq!(modules[0]["module"]["definitions"][0]["keyword"], "single");
    assert_eq!(
        modules[0]["module"]["definitions"][0]["bindings"][0],
        "Repository"
    );

    Ok(())
}

#[test]
fn test_scan_reports_skipped_members() -> Result<()> {
    let test = CliTest::with_file("graphs/broken.json", BROKEN_MEMBER_GRAPH)?;

    test.command()
        .args(["scan", "graphs/broken.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("warning:"))
        .stdout(predicate::str::contains("unresolvable return type"));

    Ok(())
}

#[test]
fn test_scan_deny_warnings_fails() -> Result<()> {
    let test = CliTest::with_file("graphs/broken.json", BROKEN_MEMBER_GRAPH)?;

    test.command()
        .args(["scan", "--deny-warnings", "graphs/broken.json"])
        .assert()
        .code(1);

    Ok(())
}

#[test]
fn test_scan_malformed_graph_is_an_error() -> Result<()> {
    let test = CliTest::with_file("graphs/bad.json", "{ not json")?;

    test.command()
        .args(["scan", "graphs/bad.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse symbol graph"));

    Ok(())
}

#[test]
fn test_scan_respects_config_module_annotation() -> Result<()> {
    let test = CliTest::with_file(
        "graphs/wired.json",
        r#"{
            "declarations": [
                {
                    "name": "WiredModule",
                    "annotations": [{ "name": "Wiring" }],
                    "members": [
                        {
                            "name": "provide",
                            "returnType": "T",
                            "annotations": [{ "name": "Factory" }]
                        }
                    ]
                }
            ]
        }"#,
    )?;
    test.write_file(".modscanrc.json", r#"{ "moduleAnnotation": "Wiring" }"#)?;

    test.command()
        .args(["scan", "graphs/wired.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("WiredModule"))
        .stdout(predicate::str::contains("1 module, 1 definition"));

    Ok(())
}

#[test]
fn test_help_lists_commands() -> Result<()> {
    let test = CliTest::new()?;

    test.command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scan"))
        .stdout(predicate::str::contains("init"));

    Ok(())
}
