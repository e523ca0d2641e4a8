use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db, rsl, setup_test_db, stats_json, stats_json_as};

#[test]
fn test_add_prints_duration_and_show_reads_it_back() {
    let db_path = setup_test_db("add_show");
    init_db(&db_path);

    rsl()
        .args([
            "--db", &db_path, "add", "2025-03-10", "--start", "10:00", "--end", "17:21",
            "--packages", "1400", "--role", "picker",
        ])
        .assert()
        .success()
        .stdout(contains("recorded").and(contains("7h21")).and(contains("7.35")));

    rsl()
        .args(["--db", &db_path, "show", "2025-03-10"])
        .assert()
        .success()
        .stdout(contains("10:00").and(contains("17:21")).and(contains("7h00")).and(contains("1 400")));
}

#[test]
fn test_add_twice_updates_the_same_day() {
    let db_path = setup_test_db("add_update");
    init_db(&db_path);

    rsl()
        .args(["--db", &db_path, "add", "2025-03-11", "--start", "06:00", "--end", "13:21"])
        .assert()
        .success();

    rsl()
        .args(["--db", &db_path, "add", "2025-03-11", "--packages", "900"])
        .assert()
        .success()
        .stdout(contains("updated"));

    let s = stats_json(&db_path, "2025-03");
    assert_eq!(s["records"], 1);
    assert_eq!(s["total_packages"], 900);
    assert_eq!(s["worked_minutes"], 420);
}

#[test]
fn test_sunday_entry_forces_zero_packages() {
    let db_path = setup_test_db("add_sunday");
    init_db(&db_path);

    // 2025-03-09 is a Sunday
    rsl()
        .args(["--db", &db_path, "add", "2025-03-09", "--packages", "500", "--overtime", "2"])
        .assert()
        .success()
        .stdout(contains("non-worked day"));

    let s = stats_json(&db_path, "2025-03");
    assert_eq!(s["total_packages"], 0);
    assert_eq!(s["overtime_minutes"], 0);
}

#[test]
fn test_flag_rest_resets_the_day() {
    let db_path = setup_test_db("flag_rest");
    init_db(&db_path);

    rsl()
        .args([
            "--db", &db_path, "add", "2025-03-12", "--start", "06:00", "--end", "13:00",
            "--packages", "1300",
        ])
        .assert()
        .success();

    rsl()
        .args(["--db", &db_path, "flag", "2025-03-12", "--rest", "on"])
        .assert()
        .success()
        .stdout(contains("rest=on"));

    rsl()
        .args(["--db", &db_path, "show", "2025-03-12"])
        .assert()
        .success()
        .stdout(contains("[Rest]").and(contains("non-worked day")));

    let s = stats_json(&db_path, "2025-03");
    assert_eq!(s["total_packages"], 0);
    assert_eq!(s["worked_days_count"], 0);
}

#[test]
fn test_midnight_crossing_shift() {
    let db_path = setup_test_db("midnight");
    init_db(&db_path);

    rsl()
        .args(["--db", &db_path, "add", "2025-03-13", "--start", "22:00", "--end", "02:00"])
        .assert()
        .success()
        .stdout(contains("4h00"));

    let s = stats_json(&db_path, "2025-03");
    assert_eq!(s["worked_minutes"], 219);
}

#[test]
fn test_invalid_inputs_are_rejected() {
    let db_path = setup_test_db("invalid_inputs");
    init_db(&db_path);

    rsl()
        .args(["--db", &db_path, "add", "2025-13-40"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));

    rsl()
        .args(["--db", &db_path, "add", "2025-03-10", "--start", "25:99"])
        .assert()
        .failure()
        .stderr(contains("Invalid time"));

    rsl()
        .args(["--db", &db_path, "add", "2025-03-10", "--overtime=-3"])
        .assert()
        .failure()
        .stderr(contains("Invalid number"));

    rsl()
        .args(["--db", &db_path, "show", "2025-03-20"])
        .assert()
        .failure()
        .stderr(contains("No record found"));
}

#[test]
fn test_list_shows_the_month() {
    let db_path = setup_test_db("list_month");
    init_db(&db_path);

    rsl()
        .args(["--db", &db_path, "add", "2025-03-10", "--start", "10:00", "--end", "17:21"])
        .assert()
        .success();
    rsl()
        .args(["--db", &db_path, "add", "2025-04-01", "--start", "10:00", "--end", "17:21"])
        .assert()
        .success();

    rsl()
        .args(["--db", &db_path, "list", "--month", "2025-03"])
        .assert()
        .success()
        .stdout(contains("March 2025").and(contains("2025-03-10")).and(contains("2025-04-01").not()));
}

#[test]
fn test_users_are_isolated() {
    let db_path = setup_test_db("users_isolated");
    init_db(&db_path);

    rsl()
        .args(["--db", &db_path, "--user", "alice", "add", "2025-03-10", "--packages", "1000"])
        .assert()
        .success();

    let bob = stats_json_as("bob", &db_path, "2025-03");
    assert_eq!(bob["records"], 0);

    let alice = stats_json_as("alice", &db_path, "2025-03");
    assert_eq!(alice["total_packages"], 1000);
}
