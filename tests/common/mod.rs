#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn mindcaps_cmd() -> Command {
    let mut cmd = Command::cargo_bin("mindcaps").unwrap();
    cmd.env_remove("MINDCAPS_ROOT");
    cmd.env_remove("MINDCAPS_LOG");
    cmd
}

/// Initialize a journal whose day boundaries are UTC, so fixed timestamps
/// land on predictable calendar days.
pub fn init_utc(root: &Path) {
    mindcaps_cmd()
        .arg("init")
        .arg(root)
        .arg("--timezone")
        .arg("utc")
        .assert()
        .success();
}

/// Build one stored entry as JSON
pub fn entry_json(id: i64, date: &str, mood: &str, intensity: u8, note: &str) -> String {
    format!(
        r#"{{"id":{},"date":"{}","mood":"{}","intensity":{},"note":"{}","sentiment":"neutral"}}"#,
        id, date, mood, intensity, note
    )
}

pub fn write_entries(root: &Path, entries: &[String]) {
    let json = format!("[{}]", entries.join(","));
    fs::write(root.join(".mindcaps/mindcaps-entries.json"), json).unwrap();
}

pub fn read_entries(root: &Path) -> serde_json::Value {
    let raw = fs::read_to_string(root.join(".mindcaps/mindcaps-entries.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}
