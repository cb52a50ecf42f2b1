//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `labtype` invocation isolated from any user config.
fn labtype(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("labtype").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("LABTYPE_SEED")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn take_all_neutral_is_fpmr() {
    let dir = TempDir::new().unwrap();

    labtype(&dir)
        .args(["take", "--seed", "7", "--format", "json,text", "--output", "out"])
        .write_stdin("0\n\n".repeat(40))
        .assert()
        .success()
        .stdout(predicate::str::contains("FPMR"))
        .stdout(predicate::str::contains("理论先知"))
        .stdout(predicate::str::contains("Saved:"));

    let json = dir.path().join("out/AI研究者人格测评-FPMR-理论先知.json");
    assert!(json.exists());
    assert!(dir.path().join("out/AI研究者人格测评-FPMR-理论先知.txt").exists());
}

#[test]
fn take_fails_when_input_runs_out() {
    let dir = TempDir::new().unwrap();

    labtype(&dir)
        .args(["take", "--seed", "7"])
        .write_stdin("1\n\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input ended before the assessment was completed"));
}

#[test]
fn take_debug_word_needs_flag() {
    let dir = TempDir::new().unwrap();

    labtype(&dir)
        .args(["take", "--seed", "7", "--format", "text", "--output", "out"])
        .write_stdin("debug\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("random fill is disabled"));

    labtype(&dir)
        .args(["take", "--seed", "7", "--debug", "--format", "text", "--output", "out"])
        .write_stdin("debug\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved:"));
}

#[test]
fn random_is_reproducible_with_seed() {
    let dir = TempDir::new().unwrap();

    let run = |dir: &TempDir| {
        let output = labtype(dir)
            .args(["random", "--seed", "42", "--format", "text", "--output", "out"])
            .output()
            .unwrap();
        assert!(output.status.success());
        String::from_utf8(output.stdout).unwrap()
    };

    let first = run(&dir);
    let second = run(&dir);
    assert!(first.contains("Saved:"));
    assert_eq!(first, second);
}

#[test]
fn unwritable_output_falls_back_to_share_text() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("blocked"), "not a directory").unwrap();

    labtype(&dir)
        .args(["random", "--seed", "1", "--format", "svg", "--output", "blocked"])
        .assert()
        .success()
        .stdout(predicate::str::contains("我在AI研究者科研人格测评中的结果是："))
        .stderr(predicate::str::contains("Could not save result cards"));
}

#[test]
fn unknown_format_is_an_error() {
    let dir = TempDir::new().unwrap();

    labtype(&dir)
        .args(["random", "--format", "gif"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown export format"));
}

#[test]
fn profiles_lists_all_sixteen() {
    let dir = TempDir::new().unwrap();

    labtype(&dir)
        .arg("profiles")
        .assert()
        .success()
        .stdout(predicate::str::contains("FPMR"))
        .stdout(predicate::str::contains("AEDI"))
        .stdout(predicate::str::contains("Benchmark Slayer"))
        .stdout(predicate::str::contains("炼丹宗师"));
}

#[test]
fn describe_known_code() {
    let dir = TempDir::new().unwrap();

    labtype(&dir)
        .args(["describe", "femi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FEMI  炼丹宗师 (Alchemy Grandmaster)"))
        .stdout(predicate::str::contains("最佳拍档"));
}

#[test]
fn describe_unknown_code_fails() {
    let dir = TempDir::new().unwrap();

    labtype(&dir)
        .args(["describe", "XXXX"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("unknown personality code"));
}

#[test]
fn questions_filtered_by_dimension() {
    let dir = TempDir::new().unwrap();

    labtype(&dir)
        .args(["questions", "--dimension", "lever"])
        .assert()
        .success()
        .stdout(predicate::str::contains("增长杠杆"))
        .stdout(predicate::str::contains("10. "))
        .stdout(predicate::str::contains("科研坐标").not());
}

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();

    labtype(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created labtype.toml"));

    let content = std::fs::read_to_string(dir.path().join("labtype.toml")).unwrap();
    assert!(content.contains("capture_timeout_ms = 3000"));

    labtype(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn config_file_controls_output() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("labtype.toml"),
        "seed = 3\noutput_dir = \"cards\"\nformats = [\"html\"]\n",
    )
    .unwrap();

    labtype(&dir).arg("random").assert().success();

    let html: Vec<_> = std::fs::read_dir(dir.path().join("cards"))
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|x| x == "html"))
        .collect();
    assert_eq!(html.len(), 1);
}

#[test]
fn export_rerenders_saved_result() {
    let dir = TempDir::new().unwrap();

    labtype(&dir)
        .args(["take", "--seed", "5", "--format", "json", "--output", "first"])
        .write_stdin("-3\n\n".repeat(40))
        .assert()
        .success();

    let saved = dir.path().join("first/AI研究者人格测评-AEDI-屠榜工程师.json");
    assert!(saved.exists());

    labtype(&dir)
        .arg("export")
        .arg("--result")
        .arg(&saved)
        .args(["--format", "svg", "--output", "second"])
        .assert()
        .success()
        .stdout(predicate::str::contains("AEDI"));

    assert!(dir
        .path()
        .join("second/AI研究者人格测评-AEDI-屠榜工程师.svg")
        .exists());
}

#[test]
fn export_missing_result_fails() {
    let dir = TempDir::new().unwrap();

    labtype(&dir)
        .args(["export", "--result", "nope.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read result"));
}

#[test]
fn help_and_version() {
    let dir = TempDir::new().unwrap();

    labtype(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("AI researcher personality assessment"));

    labtype(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("labtype"));
}
