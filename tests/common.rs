#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with a configuration home nobody writes to.
pub fn rsl() -> Command {
    let home = env::temp_dir().join("rshiftlog_tests_home");
    fs::create_dir_all(&home).ok();
    rsl_in(&home.to_string_lossy())
}

/// Binary under test with its own configuration home (profile changes).
pub fn rsl_in(home: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("rshiftlog");
    cmd.env("RSHIFTLOG_HOME", home);
    cmd.env_remove("RSHIFTLOG_LOG");
    cmd
}

/// Fresh configuration home for one test.
pub fn setup_home(name: &str) -> String {
    let path: PathBuf = env::temp_dir().join(format!("{}_rshiftlog_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).ok();
    path.to_string_lossy().to_string()
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rshiftlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the schema of a test DB without touching any config file.
pub fn init_db(db_path: &str) {
    rsl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Write `content` to a temp JSON file and return its path.
pub fn temp_json(name: &str, content: &str) -> String {
    let p = temp_out(name, "json");
    fs::write(&p, content).expect("write json fixture");
    p
}

/// Run `stats --json` for a month and parse the output.
pub fn stats_json(db_path: &str, month: &str) -> serde_json::Value {
    run_stats(rsl(), db_path, month)
}

/// Same as [`stats_json`], acting as `user`.
pub fn stats_json_as(user: &str, db_path: &str, month: &str) -> serde_json::Value {
    let mut cmd = rsl();
    cmd.args(["--user", user]);
    run_stats(cmd, db_path, month)
}

/// `stats --json` with an explicit command (custom configuration home).
pub fn run_stats(mut cmd: Command, db_path: &str, month: &str) -> serde_json::Value {
    let out = cmd
        .args(["--db", db_path, "stats", "--month", month, "--json"])
        .output()
        .expect("run stats");
    assert!(out.status.success(), "stats failed: {:?}", out);
    serde_json::from_str(String::from_utf8_lossy(&out.stdout).trim()).expect("stats json")
}
