//! CLI behaviour that needs no image service.
//!
//! Every command runs against an empty cassette so nothing can reach the
//! network even if a test asks for an image by mistake.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use predicates::prelude::*;

fn cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("proverbs");
    cmd.env("PROVERBS_CONFIG", "/nonexistent/proverbs/config.toml")
        .env("PROVERBS_REPLAY", empty_cassette())
        .env_remove("PROVERBS_REC")
        .env_remove("RUST_LOG");
    cmd
}

/// A fresh empty cassette per command, so parallel tests never share a file.
fn empty_cassette() -> PathBuf {
    static NEXT: AtomicUsize = AtomicUsize::new(0);
    let n = NEXT.fetch_add(1, Ordering::Relaxed);
    let path = std::env::temp_dir()
        .join(format!("proverbs_cli_empty_{}_{n}.cassette.yaml", std::process::id()));
    std::fs::write(&path, "name: empty\nrecorded_at: \"2026-10-18T00:00:00Z\"\ncommit: test\n")
        .unwrap();
    path
}

#[test]
fn word_generates_proverb() {
    cmd()
        .args(["--seed", "1", "решишь"])
        .assert()
        .success()
        .stdout(predicate::str::contains("решишь"))
        .stdout(predicate::str::contains("{word}").not())
        .stderr(predicate::str::contains("Пословица сгенерирована!"));
}

#[test]
fn word_is_trimmed() {
    cmd()
        .args(["  кот  "])
        .assert()
        .success()
        .stdout(predicate::str::contains(" кот ").or(predicate::str::ends_with(" кот\n")))
        .stdout(predicate::str::contains("  кот").not());
}

#[test]
fn same_seed_same_proverb() {
    let first = cmd().args(["--seed", "42", "пирог"]).output().unwrap();
    let second = cmd().args(["--seed", "42", "пирог"]).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn blank_word_is_rejected() {
    cmd()
        .args(["   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Введите слово для генерации"));
}

#[test]
fn open_share_link() {
    cmd()
        .args([
            "--open",
            "http://localhost:5173?p=%D0%A3%D1%82%D1%80%D0%BE%20%D0%B2%D0%B5%D1%87%D0%B5%D1%80%D0%B0\
             %20%D0%BA%D0%BE%D1%82",
        ])
        .assert()
        .success()
        .stdout("Утро вечера кот\n");
}

#[test]
fn open_link_without_proverb_fails() {
    cmd()
        .args(["--open", "http://localhost:5173/"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Ссылка не содержит пословицы"));
}

#[test]
fn share_link_is_shown_even_without_clipboard() {
    // Whether a clipboard exists depends on the machine; the link must be
    // visible either way.
    let output = cmd()
        .env("PROVERBS_SHARE_ORIGIN", "https://proverbs.example")
        .args(["--share", "решишь"])
        .output()
        .unwrap();
    let all = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(all.contains("https://proverbs.example?p="), "{all}");
}

#[test]
fn invalid_config_exits_with_error() {
    let path = std::env::temp_dir().join("proverbs_cli_bad_config.toml");
    std::fs::write(&path, "[service\nendpoint = ").unwrap();

    cmd()
        .args(["--config", path.to_str().unwrap(), "кот"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config error"));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn interactive_session_keeps_ten() {
    let mut input: String = (1..=11).map(|i| format!("слово{i}\n")).collect();
    input.push_str(":history\n");

    let output = cmd().write_stdin(input).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("История генераций (10):"), "{stdout}");
    assert!(stdout.contains("10. "));
    assert!(!stdout.contains("11. "));
    let listing = stdout.split("История генераций").nth(1).unwrap();
    assert!(listing.contains("слово11"));
    assert!(!listing.contains("слово1\n") && !listing.contains("слово1 "));
}

#[test]
fn interactive_blank_line_is_recoverable() {
    cmd()
        .write_stdin("\nкот\n:quit\nпёс\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("кот"))
        .stdout(predicate::str::contains("пёс").not())
        .stderr(predicate::str::contains("Введите слово для генерации"));
}

#[test]
fn interactive_unknown_command() {
    cmd()
        .write_stdin(":frobnicate\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Неизвестная команда"));
}
