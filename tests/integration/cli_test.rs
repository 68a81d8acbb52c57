use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

fn quizflow() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("quizflow").unwrap()
}

#[test]
fn show_before_any_submission() {
    let dir = TempDir::new().unwrap();
    quizflow()
        .arg("show")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("No submission yet"));

    // First contact creates the data directory.
    assert!(dir.path().join(".quizflow/submissions").exists());
}

#[test]
fn submit_then_show_prefilled() {
    let dir = TempDir::new().unwrap();
    quizflow()
        .args(["submit", "--answer", "Blue", "--name", "Ann", "--accept-terms"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Submitted successfully"));

    quizflow()
        .arg("show")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Blue"))
        .stdout(predicates::str::contains("Ann"))
        .stdout(predicates::str::contains("already submitted"));
}

#[test]
fn show_prints_submitted_at() {
    let dir = TempDir::new().unwrap();
    quizflow()
        .args(["submit", "--answer", "Blue", "--name", "Ann", "--accept-terms"])
        .current_dir(dir.path())
        .assert()
        .success();

    quizflow()
        .arg("show")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Submitted:"));
}

#[test]
fn submit_without_terms_fails() {
    let dir = TempDir::new().unwrap();
    quizflow()
        .args(["submit", "--answer", "Blue", "--name", "Ann"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("terms"));

    quizflow()
        .arg("show")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("No submission yet"));
}

#[test]
fn submit_with_blank_name_fails() {
    let dir = TempDir::new().unwrap();
    quizflow()
        .args(["submit", "--answer", "Blue", "--name", "   ", "--accept-terms"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("name"));
}

#[test]
fn resubmission_replaces_the_previous_answer() {
    let dir = TempDir::new().unwrap();
    quizflow()
        .args(["submit", "--answer", "Blue", "--name", "Ann", "--accept-terms"])
        .current_dir(dir.path())
        .assert()
        .success();

    quizflow()
        .args(["submit", "--answer", "Red", "--name", "Ann", "--accept-terms"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("replaced"));

    let output = quizflow()
        .arg("show")
        .current_dir(dir.path())
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Red"));
    assert!(!stdout.contains("Blue"));
}

#[test]
fn whoami_is_stable_across_calls() {
    let dir = TempDir::new().unwrap();

    let first = quizflow()
        .arg("whoami")
        .current_dir(dir.path())
        .output()
        .unwrap();
    let second = quizflow()
        .arg("whoami")
        .current_dir(dir.path())
        .output()
        .unwrap();

    let first = String::from_utf8(first.stdout).unwrap();
    let second = String::from_utf8(second.stdout).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.trim().len(), 64);
    assert!(first.trim().chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn separate_data_dirs_get_separate_principals() {
    let a = TempDir::new().unwrap();
    let b = TempDir::new().unwrap();

    let pa = quizflow().arg("whoami").current_dir(a.path()).output().unwrap();
    let pb = quizflow().arg("whoami").current_dir(b.path()).output().unwrap();
    assert_ne!(pa.stdout, pb.stdout);
}

#[test]
fn show_json_output() {
    let dir = TempDir::new().unwrap();

    let output = quizflow()
        .args(["show", "--json"])
        .current_dir(dir.path())
        .output()
        .unwrap();
    let v: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["already_submitted"], Value::Bool(false));
    assert_eq!(v["selected_answer"], Value::Null);
    assert_eq!(v["submitted_at"], Value::Null);

    quizflow()
        .args(["submit", "--answer", "Blue", "--name", "Ann", "--accept-terms"])
        .current_dir(dir.path())
        .assert()
        .success();

    let output = quizflow()
        .args(["show", "--json"])
        .current_dir(dir.path())
        .output()
        .unwrap();
    let v: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["already_submitted"], Value::Bool(true));
    assert_eq!(v["selected_answer"], Value::String("Blue".into()));
    assert_eq!(v["full_name"], Value::String("Ann".into()));
    assert!(v["submitted_at"].is_string());
}

#[test]
fn data_dir_flag_overrides_cwd() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("elsewhere");
    std::fs::create_dir_all(&data).unwrap();

    quizflow()
        .args(["--data-dir", data.to_str().unwrap(), "show"])
        .current_dir(dir.path())
        .assert()
        .success();

    assert!(data.join(".quizflow").exists());
    assert!(!dir.path().join(".quizflow").exists());
}

#[test]
fn terms_prints_the_conditions() {
    let dir = TempDir::new().unwrap();
    quizflow()
        .arg("terms")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Terms and Conditions"));
}
