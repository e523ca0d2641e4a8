use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{init_db, rsl, rsl_in, setup_home, setup_test_db};

#[test]
fn test_init_writes_config_and_keeps_profile() {
    let home = setup_home("init_config");
    let db_path = setup_test_db("init_config");

    rsl_in(&home)
        .args(["--db", &db_path, "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    let conf = Path::new(&home).join("rshiftlog.conf");
    assert!(conf.exists());

    rsl_in(&home)
        .args(["profile", "--name", "Sam", "--contract", "CDD"])
        .assert()
        .success();

    // a second init only moves the database
    rsl_in(&home)
        .args(["--db", &db_path, "init"])
        .assert()
        .success();

    let content = fs::read_to_string(&conf).expect("read config");
    assert!(content.contains("contract: CDD"));
    assert!(content.contains("display_name: Sam"));

    rsl_in(&home)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("complete"));
}

#[test]
fn test_config_migrate_fills_missing_keys() {
    let home = setup_home("config_migrate");
    let conf = Path::new(&home).join("rshiftlog.conf");
    fs::write(&conf, "database: /tmp/old_rshiftlog.sqlite\n").expect("write old config");

    rsl_in(&home)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing fields").and(contains("profile")));

    rsl_in(&home)
        .args(["config", "--migrate"])
        .assert()
        .success();

    let content = fs::read_to_string(&conf).expect("read config");
    assert!(content.contains("database: /tmp/old_rshiftlog.sqlite"));
    assert!(content.contains("contract: CDI"));
}

#[test]
fn test_unknown_contract_is_rejected() {
    let home = setup_home("bad_contract");

    rsl_in(&home)
        .args(["profile", "--contract", "interim"])
        .assert()
        .failure()
        .stderr(contains("Unknown contract type"));
}

#[test]
fn test_log_records_mutations() {
    let db_path = setup_test_db("log_print");
    init_db(&db_path);

    rsl()
        .args(["--db", &db_path, "add", "2025-03-10", "--packages", "10"])
        .assert()
        .success();
    rsl()
        .args(["--db", &db_path, "add", "2025-03-10", "--packages", "20"])
        .assert()
        .success();
    rsl()
        .args(["--db", &db_path, "flag", "2025-03-10", "--holiday", "on"])
        .assert()
        .success();

    rsl()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(
            contains("migration_applied")
                .and(contains("init"))
                .and(contains("add"))
                .and(contains("edit"))
                .and(contains("flag"))
                .and(contains("2025-03-10")),
        );
}
