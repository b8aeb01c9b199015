use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn taskheap_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("taskheap"));
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn run(dir: &Path, args: &[&str]) -> assert_cmd::assert::Assert {
    taskheap_cmd().args(args).current_dir(dir).assert()
}

fn init_project(args: &[&str]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let mut full = vec!["init"];
    full.extend_from_slice(args);
    run(temp_dir.path(), &full).success();
    temp_dir
}

fn json_stdout(dir: &Path, args: &[&str]) -> serde_json::Value {
    let output = taskheap_cmd().args(args).current_dir(dir).output().unwrap();
    assert!(output.status.success(), "command {:?} failed", args);
    serde_json::from_slice(&output.stdout).unwrap()
}

fn priorities(tasks: &serde_json::Value) -> Vec<i64> {
    tasks
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["priority"].as_i64().unwrap())
        .collect()
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    taskheap_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("task tracker"));
}

#[test]
fn test_version() {
    taskheap_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("taskheap"));
}

#[test]
fn test_not_initialized_error() {
    let temp_dir = TempDir::new().unwrap();

    run(temp_dir.path(), &["list"]).failure().stderr(
        predicate::str::contains("not initialized").or(predicate::str::contains("Failed to load")),
    );
}

// =============================================================================
// Initialization
// =============================================================================

#[test]
fn test_init_creates_config_and_data_file() {
    let temp_dir = TempDir::new().unwrap();

    run(temp_dir.path(), &["init"])
        .success()
        .stdout(predicate::str::contains("Initialized"));

    assert!(temp_dir.path().join(".taskheap.toml").exists());
    let data = std::fs::read_to_string(temp_dir.path().join("tasks.txt")).unwrap();
    assert_eq!(data, "0\n0\n");
}

#[test]
fn test_init_twice_fails() {
    let temp_dir = init_project(&[]);

    run(temp_dir.path(), &["init"])
        .failure()
        .stderr(predicate::str::contains("already initialized"))
        .stderr(predicate::str::contains(".taskheap.toml"));
}

#[test]
fn test_init_with_direction() {
    let temp_dir = init_project(&["--direction", "ascending", "--data-file", "board.txt"]);

    let config = std::fs::read_to_string(temp_dir.path().join(".taskheap.toml")).unwrap();
    assert!(config.contains("ascending"));
    assert!(config.contains("board.txt"));
    assert!(temp_dir.path().join("board.txt").exists());
}

// =============================================================================
// Students and tasks
// =============================================================================

#[test]
fn test_student_add_and_list() {
    let temp_dir = init_project(&[]);

    run(temp_dir.path(), &["student", "add", "Ana", "2"])
        .success()
        .stdout(predicate::str::contains("#1 {Ana, year: 2}"));
    run(temp_dir.path(), &["student", "add", "Theo", "3"]).success();

    run(temp_dir.path(), &["student", "list"])
        .success()
        .stdout(predicate::str::contains("#2 {Theo, year: 3}"));
}

#[test]
fn test_student_with_invalid_year_is_rejected() {
    let temp_dir = init_project(&[]);

    run(temp_dir.path(), &["student", "add", "Ana", "0"])
        .failure()
        .stderr(predicate::str::contains("Year must be between"));
}

#[test]
fn test_add_requires_known_assignee() {
    let temp_dir = init_project(&[]);

    run(temp_dir.path(), &["add", "5", "1", "Grade", "labs"])
        .failure()
        .stderr(predicate::str::contains("not on the roster"));
}

#[test]
fn test_add_rejects_out_of_range_priority() {
    let temp_dir = init_project(&[]);
    run(temp_dir.path(), &["student", "add", "Ana", "1"]).success();

    run(temp_dir.path(), &["add", "101", "1", "Too", "urgent"])
        .failure()
        .stderr(predicate::str::contains("outside the allowed range"));

    let data = std::fs::read_to_string(temp_dir.path().join("tasks.txt")).unwrap();
    assert!(data.ends_with("0\n"));
}

#[test]
fn test_descending_pop_order() {
    let temp_dir = init_project(&[]);
    run(temp_dir.path(), &["student", "add", "Ana", "1"]).success();
    for p in ["3", "1", "4", "1", "5", "9", "2", "6"] {
        run(temp_dir.path(), &["add", p, "1", "task", p]).success();
    }

    let popped = json_stdout(temp_dir.path(), &["pop", "-n", "8", "--json"]);
    assert_eq!(priorities(&popped["popped"]), vec![9, 6, 5, 4, 3, 2, 1, 1]);
    assert_eq!(popped["remaining"], 0);
}

#[test]
fn test_ascending_pop_order() {
    let temp_dir = init_project(&["--direction", "ascending"]);
    run(temp_dir.path(), &["student", "add", "Ana", "1"]).success();
    for p in ["5", "4", "3", "2", "1"] {
        run(temp_dir.path(), &["add", p, "1", "task"]).success();
    }

    let popped = json_stdout(temp_dir.path(), &["pop", "-n", "5", "--json"]);
    assert_eq!(priorities(&popped["popped"]), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_pop_stops_early_when_empty() {
    let temp_dir = init_project(&[]);
    run(temp_dir.path(), &["student", "add", "Ana", "1"]).success();
    run(temp_dir.path(), &["add", "40", "1", "Write", "report"]).success();
    run(temp_dir.path(), &["add", "90", "1", "Prepare", "exam"]).success();

    run(temp_dir.path(), &["pop", "-n", "5"])
        .success()
        .stdout(predicate::str::contains("The 2 most important tasks are:"))
        .stdout(predicate::str::contains("Only 2 of 5"));

    run(temp_dir.path(), &["pop"])
        .success()
        .stdout(predicate::str::contains("No tasks found."));
}

#[test]
fn test_peek_does_not_remove() {
    let temp_dir = init_project(&[]);
    run(temp_dir.path(), &["student", "add", "Ana", "1"]).success();
    run(temp_dir.path(), &["add", "20", "1", "Tidy", "up"]).success();
    run(temp_dir.path(), &["add", "70", "1", "Review", "thesis"]).success();

    for _ in 0..2 {
        run(temp_dir.path(), &["peek"])
            .success()
            .stdout(predicate::str::contains("Review thesis"));
    }
    let tasks = json_stdout(temp_dir.path(), &["list", "--json"]);
    assert_eq!(tasks.as_array().unwrap().len(), 2);
}

#[test]
fn test_peek_empty() {
    let temp_dir = init_project(&[]);

    run(temp_dir.path(), &["peek"])
        .success()
        .stdout(predicate::str::contains("No tasks found."));
}

#[test]
fn test_list_sorted_and_heap_order() {
    let temp_dir = init_project(&[]);
    run(temp_dir.path(), &["student", "add", "Ana", "1"]).success();
    for p in ["10", "30", "20", "50"] {
        run(temp_dir.path(), &["add", p, "1", "task"]).success();
    }

    let sorted = json_stdout(temp_dir.path(), &["list", "--sorted", "--json"]);
    assert_eq!(priorities(&sorted), vec![50, 30, 20, 10]);

    let heap_order = json_stdout(temp_dir.path(), &["list", "--json"]);
    assert_eq!(priorities(&heap_order)[0], 50);

    // Listing never consumes tasks
    let again = json_stdout(temp_dir.path(), &["list", "--json"]);
    assert_eq!(heap_order, again);
}

// =============================================================================
// Import, export and check
// =============================================================================

const CONSOLE_INPUT: &str = "2\nAna 1\nTheo 3\n4\n4 1 Write the report\n9 2 Prepare slides\n1 1 Tidy up\n6 2 Book a room\n";

#[test]
fn test_import_from_stdin() {
    let temp_dir = init_project(&[]);

    taskheap_cmd()
        .args(["import", "-"])
        .current_dir(temp_dir.path())
        .write_stdin(CONSOLE_INPUT)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 students and 4 tasks"));

    let sorted = json_stdout(temp_dir.path(), &["list", "--sorted", "--json"]);
    assert_eq!(priorities(&sorted), vec![9, 6, 4, 1]);
    assert_eq!(sorted[0]["assignee"]["name"], "Theo");

    run(temp_dir.path(), &["check"])
        .success()
        .stdout(predicate::str::contains("OK"));
}

#[test]
fn test_import_refuses_to_replace_without_force() {
    let temp_dir = init_project(&[]);
    run(temp_dir.path(), &["student", "add", "Ana", "1"]).success();

    taskheap_cmd()
        .args(["import", "-"])
        .current_dir(temp_dir.path())
        .write_stdin(CONSOLE_INPUT)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    taskheap_cmd()
        .args(["import", "-", "--force"])
        .current_dir(temp_dir.path())
        .write_stdin(CONSOLE_INPUT)
        .assert()
        .success();
}

#[test]
fn test_forced_import_replaces_broken_board() {
    let temp_dir = init_project(&[]);
    std::fs::write(
        temp_dir.path().join("tasks.txt"),
        "1\nAna\n1\n2\n1\n1\nlow\n9\n1\nhigh\n",
    )
    .unwrap();

    taskheap_cmd()
        .args(["import", "-"])
        .current_dir(temp_dir.path())
        .write_stdin(CONSOLE_INPUT)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Heap property violated"));

    taskheap_cmd()
        .args(["import", "-", "--force"])
        .current_dir(temp_dir.path())
        .write_stdin(CONSOLE_INPUT)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 students and 4 tasks"));

    run(temp_dir.path(), &["check"])
        .success()
        .stdout(predicate::str::contains("OK 4 tasks"));
}

#[test]
fn test_forced_import_replaces_unparsable_board() {
    let temp_dir = init_project(&[]);
    std::fs::write(temp_dir.path().join("tasks.txt"), "garbage\n").unwrap();

    taskheap_cmd()
        .args(["import", "-", "--force"])
        .current_dir(temp_dir.path())
        .write_stdin(CONSOLE_INPUT)
        .assert()
        .success();

    let sorted = json_stdout(temp_dir.path(), &["list", "--sorted", "--json"]);
    assert_eq!(priorities(&sorted), vec![9, 6, 4, 1]);
}

#[test]
fn test_import_reports_parse_errors() {
    let temp_dir = init_project(&[]);

    taskheap_cmd()
        .args(["import", "-"])
        .current_dir(temp_dir.path())
        .write_stdin("1\nAna 1\n1\n5 3 Nobody\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not in the roster"));
}

#[test]
fn test_export_matches_data_file() {
    let temp_dir = init_project(&[]);
    run(temp_dir.path(), &["student", "add", "Ana", "1"]).success();
    run(temp_dir.path(), &["add", "12", "1", "Read", "papers"]).success();
    run(temp_dir.path(), &["add", "64", "1", "Write", "review"]).success();

    run(temp_dir.path(), &["export", "copy.txt", "--force"])
        .success()
        .stdout(predicate::str::contains("Exported 2 tasks"));

    let data = std::fs::read_to_string(temp_dir.path().join("tasks.txt")).unwrap();
    let copy = std::fs::read_to_string(temp_dir.path().join("copy.txt")).unwrap();
    assert_eq!(data, copy);
}

#[test]
fn test_export_asks_before_overwriting() {
    let temp_dir = init_project(&[]);
    std::fs::write(temp_dir.path().join("copy.txt"), "keep me").unwrap();

    taskheap_cmd()
        .args(["export", "copy.txt"])
        .current_dir(temp_dir.path())
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled."));

    let copy = std::fs::read_to_string(temp_dir.path().join("copy.txt")).unwrap();
    assert_eq!(copy, "keep me");
}

#[test]
fn test_hand_edited_file_is_detected_and_repaired() {
    let temp_dir = init_project(&[]);
    // Lowest priority first breaks the descending layout
    std::fs::write(
        temp_dir.path().join("tasks.txt"),
        "1\nAna\n1\n3\n1\n1\nlow\n5\n1\nmiddle\n9\n1\nhigh\n",
    )
    .unwrap();

    run(temp_dir.path(), &["peek"])
        .failure()
        .stderr(predicate::str::contains("Heap property violated"));

    run(temp_dir.path(), &["check"])
        .failure()
        .stderr(predicate::str::contains("check --repair"));

    run(temp_dir.path(), &["check", "--repair"])
        .success()
        .stdout(predicate::str::contains("Repaired"));

    run(temp_dir.path(), &["peek"])
        .success()
        .stdout(predicate::str::contains("high"));
}

#[test]
fn test_repair_on_load_setting() {
    let temp_dir = init_project(&[]);
    std::fs::write(
        temp_dir.path().join(".taskheap.toml"),
        "[taskheap]\nrepair_on_load = true\n",
    )
    .unwrap();
    std::fs::write(
        temp_dir.path().join("tasks.txt"),
        "1\nAna\n1\n2\n1\n1\nlow\n9\n1\nhigh\n",
    )
    .unwrap();

    run(temp_dir.path(), &["peek"])
        .success()
        .stdout(predicate::str::contains("high"));
}

// =============================================================================
// Shell
// =============================================================================

#[test]
fn test_shell_saves_on_exit() {
    let temp_dir = init_project(&[]);

    taskheap_cmd()
        .arg("shell")
        .current_dir(temp_dir.path())
        .write_stdin("1\nAna\n2\n2\n55\n1\nPlan the trip\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved to"));

    run(temp_dir.path(), &["peek"])
        .success()
        .stdout(predicate::str::contains("Plan the trip"));
}

#[test]
fn test_shell_discard_keeps_file() {
    let temp_dir = init_project(&[]);

    taskheap_cmd()
        .arg("shell")
        .current_dir(temp_dir.path())
        .write_stdin("1\nAna\n2\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Changes discarded."));

    let data = std::fs::read_to_string(temp_dir.path().join("tasks.txt")).unwrap();
    assert_eq!(data, "0\n0\n");
}
