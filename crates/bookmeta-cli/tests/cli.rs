//! Integration tests for the bookmeta CLI.

use assert_cmd::Command;
use predicates::prelude::*;

fn write_press_release(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("release.txt");
    std::fs::write(
        &path,
        "도서명 : 러스트로 배우는 시스템 프로그래밍\n\
         정가 : 24,000원\n\
         ISBN : 979 11 94383 22 2\n\
         판형 : 188 * 257\n",
    )
    .unwrap();
    path
}

#[test]
fn extract_json_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_press_release(&dir);

    Command::cargo_bin("bookmeta")
        .unwrap()
        .arg("extract")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("979-11-94383-22-2"))
        .stdout(predicate::str::contains("24000"))
        .stdout(predicate::str::contains("188mm x 257mm"));
}

#[test]
fn extract_csv_format() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_press_release(&dir);

    Command::cargo_bin("bookmeta")
        .unwrap()
        .args(["extract", "--format", "csv"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("title,author,category"))
        .stdout(predicate::str::contains("979-11-94383-22-2"));
}

#[test]
fn extract_rejects_invalid_url_before_any_network_call() {
    Command::cargo_bin("bookmeta")
        .unwrap()
        .args(["extract", "--url", "https://example.com/not-a-doc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a shared document link"));
}

#[test]
fn extract_requires_input_or_url() {
    Command::cargo_bin("bookmeta")
        .unwrap()
        .arg("extract")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input file or --url"));
}

#[test]
fn extract_missing_file_fails() {
    Command::cargo_bin("bookmeta")
        .unwrap()
        .args(["extract", "/nonexistent/release.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn merge_into_preserves_user_edits() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_press_release(&dir);

    let record = dir.path().join("book.json");
    std::fs::write(
        &record,
        r#"{ "title": "사용자가 입력한 제목" }"#,
    )
    .unwrap();

    Command::cargo_bin("bookmeta")
        .unwrap()
        .arg("extract")
        .arg(&input)
        .arg("--merge-into")
        .arg(&record)
        .assert()
        .success();

    let merged = std::fs::read_to_string(&record).unwrap();
    // Edited title survives; empty fields were filled from the extraction
    assert!(merged.contains("사용자가 입력한 제목"));
    assert!(merged.contains("979-11-94383-22-2"));
}

#[test]
fn batch_writes_summary() {
    let dir = tempfile::tempdir().unwrap();
    write_press_release(&dir);
    let out = dir.path().join("out");

    Command::cargo_bin("bookmeta")
        .unwrap()
        .arg("batch")
        .arg(format!("{}/*.txt", dir.path().display()))
        .arg("--output-dir")
        .arg(&out)
        .arg("--summary")
        .assert()
        .success();

    let summary = std::fs::read_to_string(out.join("summary.csv")).unwrap();
    assert!(summary.contains("release.txt"));
    assert!(summary.contains("success"));
}

#[test]
fn config_path_subcommand() {
    Command::cargo_bin("bookmeta")
        .unwrap()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.json"));
}
