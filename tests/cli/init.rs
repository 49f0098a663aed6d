use anyhow::Result;
use predicates::prelude::*;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    test.command()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created .modscanrc.json"));

    let content = std::fs::read_to_string(test.project_dir.join(".modscanrc.json"))?;
    assert!(content.contains("moduleAnnotation"));
    assert!(content.contains("graphsRoot"));

    Ok(())
}

#[test]
fn test_init_fails_when_config_exists() -> Result<()> {
    let test = CliTest::with_file(".modscanrc.json", "{}")?;

    test.command()
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    Ok(())
}
