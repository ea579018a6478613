use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

const CARDS: &str = r#"[
  {"name": "The Moon", "textEn": "Trust the tide.", "filename": "moon.png"},
  {"name": "The Sun", "textEn": "Burn bright.", "filename": "sun.png"},
  {"name": "The Star", "textEn": "Wish wisely.", "filename": "star.png"}
]"#;

fn write_cards(dir: &Path) -> String {
    let path = dir.join("cards.json");
    std::fs::write(&path, CARDS).unwrap();
    path.to_str().unwrap().to_string()
}

fn witchterm(dir: &TempDir, catalog: &str) -> Command {
    let mut cmd = Command::cargo_bin("witchterm").unwrap();
    cmd.env_remove("WITCHTERM_LOG")
        .arg("--line-mode")
        .arg("--no-color")
        .arg("--seed")
        .arg("3")
        .arg("--config-dir")
        .arg(dir.path())
        .arg("--catalog")
        .arg(catalog);
    cmd
}

#[test]
fn test_banner_and_prompt() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_cards(dir.path());
    witchterm(&dir, &catalog)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Web3 Witch Terminal ready.\nType \"help\" to see available commands.\nwitch@web3:~$ ",
        ));
}

#[test]
fn test_help_lists_every_verb() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_cards(dir.path());
    let assert = witchterm(&dir, &catalog)
        .write_stdin("help\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available commands:"));
    let out = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    for verb in ["help", "draw", "show <number|name>", "list", "history", "share", "clear"] {
        assert!(out.contains(verb), "missing {} in {}", verb, out);
    }
}

#[test]
fn test_show_by_index_and_name() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_cards(dir.path());
    witchterm(&dir, &catalog)
        .write_stdin("show 2\nshow STAR\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Card: The Sun\n → Burn bright.\n"))
        .stdout(predicate::str::contains("Card: The Star\n → Wish wisely.\n"))
        .stderr(predicate::str::contains("✨ The Sun ✨"));
}

#[test]
fn test_draw_then_list_marks_current() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_cards(dir.path());
    witchterm(&dir, &catalog)
        .write_stdin("show 1\nlist\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "→  1. The Moon\n   2. The Sun\n   3. The Star\n",
        ));
}

#[test]
fn test_draw_prints_a_card() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_cards(dir.path());
    witchterm(&dir, &catalog)
        .write_stdin("draw\nd\nnext\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Card: ").count(3));
}

#[test]
fn test_history_most_recent_first() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_cards(dir.path());
    witchterm(&dir, &catalog)
        .write_stdin("show 1\nshow 3\nhistory\n")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"1\. The Star .*\n2\. The Moon ").unwrap());
}

#[test]
fn test_errors_keep_the_session_alive() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_cards(dir.path());
    witchterm(&dir, &catalog)
        .write_stdin("teleport\nshow\nshow 9\nshow nothing-like-it\nshow 1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "✖ Unknown command: teleport. Type \"help\" to see available commands.",
        ))
        .stdout(predicate::str::contains("✖ Usage: show <number|name>"))
        .stdout(predicate::str::contains(
            "✖ No card at position 9 (valid range is 1-3).",
        ))
        .stdout(predicate::str::contains("✖ Card not found: nothing-like-it"))
        .stdout(predicate::str::contains("Card: The Moon"));
}

#[test]
fn test_missing_catalog_warns_and_commands_report_not_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");
    witchterm(&dir, missing.to_str().unwrap())
        .write_stdin("draw\nlist\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("✖ Failed to load cards.json:"))
        .stdout(predicate::str::contains("✖ Cards are not loaded yet.").count(2));
}

#[test]
fn test_broken_config_is_reported_once() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_cards(dir.path());
    std::fs::write(dir.path().join("config.json"), "{ nope").unwrap();
    witchterm(&dir, &catalog)
        .write_stdin("show 1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("✖ Config error:"))
        .stdout(predicate::str::contains("Card: The Moon"));
}

#[test]
fn test_config_changes_prompt() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_cards(dir.path());
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"prompt_user": "seer", "prompt_host": "moon"}"#,
    )
    .unwrap();
    witchterm(&dir, &catalog)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("seer@moon:~$ "));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("witchterm")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("witchterm "));
}

#[test]
fn test_invalid_utf8_line_does_not_end_session() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_cards(dir.path());
    witchterm(&dir, &catalog)
        .write_stdin(b"list\n\xff\xfe\nhelp\n".to_vec())
        .assert()
        .success()
        .stdout(predicate::str::contains("   1. The Moon"))
        .stdout(predicate::str::contains("✖ Unknown command:"))
        .stdout(predicate::str::contains("Available commands:"));
}

#[test]
fn test_default_launch_is_quiet_on_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let cwd = tempfile::tempdir().unwrap();
    Command::cargo_bin("witchterm")
        .unwrap()
        .env_remove("WITCHTERM_LOG")
        .current_dir(cwd.path())
        .arg("--line-mode")
        .arg("--no-color")
        .arg("--config-dir")
        .arg(dir.path())
        .write_stdin("list\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. The Initiate"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_tab_separates_verb_and_argument() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_cards(dir.path());
    witchterm(&dir, &catalog)
        .write_stdin("show\t2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Card: The Sun"));
}

#[test]
fn test_huge_position_is_out_of_range() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_cards(dir.path());
    witchterm(&dir, &catalog)
        .write_stdin("show 99999999999999999999\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "✖ No card at position 99999999999999999999 (valid range is 1-3).",
        ));
}
