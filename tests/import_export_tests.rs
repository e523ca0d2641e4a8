use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db, rsl, setup_test_db, stats_json, temp_json, temp_out};

const BACKEND_EXPORT: &str = r#"{
    "page": 1,
    "perPage": 30,
    "items": [
        {"id": "r1", "user": "u1", "date": "2025-03-10 00:00:00.000",
         "heureDebut": "2025-03-10 10:00:00.000", "heureFin": "2025-03-10 17:21:00.000",
         "colis": 1400, "heuresSupp": 0, "poste": "PREPA", "polyvalence": "NONE",
         "isRepos": false, "isFerie": "0"},
        {"id": "r2", "user": "u1", "date": "2025-03-11", "colis": "1100", "isRepos": "false"},
        {"id": "r3", "user": "u1", "date": "", "colis": 5},
        {"id": "r4", "user": "u1", "date": "31/03/2025", "colis": 5}
    ]
}"#;

#[test]
fn test_import_skips_unreadable_dates() {
    let db_path = setup_test_db("import_backend");
    init_db(&db_path);
    let file = temp_json("import_backend", BACKEND_EXPORT);

    rsl()
        .args(["--db", &db_path, "import", "--file", &file])
        .assert()
        .success()
        .stdout(contains("2 record(s) skipped").and(contains("2 created")));

    rsl()
        .args(["--db", &db_path, "import", "--file", &file])
        .assert()
        .success()
        .stdout(contains("2 updated"));

    let s = stats_json(&db_path, "2025-03");
    assert_eq!(s["records"], 2);
    assert_eq!(s["total_packages"], 2500);
    assert_eq!(s["worked_minutes"], 420);
}

#[test]
fn test_import_rejects_non_json() {
    let db_path = setup_test_db("import_garbage");
    init_db(&db_path);
    let file = temp_json("import_garbage", "not json at all");

    rsl()
        .args(["--db", &db_path, "import", "--file", &file])
        .assert()
        .failure()
        .stderr(contains("JSON error"));
}

#[test]
fn test_export_csv_month() {
    let db_path = setup_test_db("export_csv_month");
    init_db(&db_path);

    rsl()
        .args(["--db", &db_path, "add", "2025-03-10", "--start", "10:00", "--end", "17:21", "--packages", "1400"])
        .assert()
        .success();
    rsl()
        .args(["--db", &db_path, "add", "2025-04-02", "--packages", "10"])
        .assert()
        .success();

    let out = temp_out("export_csv_month", "csv");
    rsl()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out, "--month", "2025-03"])
        .assert()
        .success()
        .stdout(contains("CSV export completed (1 days)"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("date,weekday,kind,start,end,raw_minutes,worked_minutes"));
    assert!(content.contains("2025-03-10,Mon,worked,10:00,17:21,441,420,7.0,1400"));
    assert!(!content.contains("2025-04-02"));
}

#[test]
fn test_export_json_and_overwrite_guard() {
    let db_path = setup_test_db("export_json_month");
    init_db(&db_path);

    rsl()
        .args(["--db", &db_path, "add", "2025-03-12", "--holiday"])
        .assert()
        .success();

    let out = temp_out("export_json_month", "json");
    rsl()
        .args(["--db", &db_path, "export", "--format", "json", "--file", &out, "--month", "2025-03"])
        .assert()
        .success();

    let v: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).expect("read json")).expect("parse json");
    assert_eq!(v[0]["date"], "2025-03-12");
    assert_eq!(v[0]["kind"], "holiday");
    assert_eq!(v[0]["holiday"], true);

    // existing file, no --force, declined on stdin
    rsl()
        .args(["--db", &db_path, "export", "--format", "json", "--file", &out, "--month", "2025-03"])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("not overwritten"));

    rsl()
        .args(["--db", &db_path, "export", "--format", "json", "--file", &out, "--month", "2025-03", "--force"])
        .assert()
        .success();
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("export_relative");
    init_db(&db_path);

    rsl()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", "relative.csv", "--month", "2025-03"])
        .assert()
        .failure()
        .stderr(contains("absolute"));
}
