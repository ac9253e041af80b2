use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn roamstay(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("roamstay").unwrap();
    cmd.current_dir(dir.path())
        .env("ROAMSTAY_ENV", "local")
        .env("ROAMSTAY_CONFIG_DIR", dir.path())
        .env(
            "ROAMSTAY_DATABASE__URL",
            format!("sqlite://{}", dir.path().join("seed.db").display()),
        )
        .env_remove("ROAMSTAY_SEED")
        .env("RUST_LOG", "warn");
    cmd
}

#[test]
fn seeds_listings_from_catalog() {
    let dir = TempDir::new().unwrap();

    roamstay(&dir)
        .args(["seed", "--listings", "3", "--bookings", "0", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created listing: Cozy Mountain Cabin"))
        .stdout(predicate::str::contains("Created listing: Downtown Luxury Apartment"))
        .stdout(predicate::str::contains("Successfully created 3 listings"))
        .stdout(predicate::str::contains("Rustic Farmhouse").not());
}

#[test]
fn negative_counts_create_nothing() {
    let dir = TempDir::new().unwrap();

    roamstay(&dir)
        .args(["seed", "--listings=-1", "--bookings=-3", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully created 0 listings"))
        .stdout(predicate::str::contains("Created listing").not())
        .stdout(predicate::str::contains("bookings").not());

    roamstay(&dir)
        .args(["seed", "--listings", "-1", "--bookings", "-3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully created 0 listings"));
}

#[test]
fn clear_runs_before_reseeding() {
    let dir = TempDir::new().unwrap();

    roamstay(&dir)
        .args(["seed", "--listings", "2", "--bookings", "0"])
        .assert()
        .success();

    roamstay(&dir)
        .args(["seed", "--clear", "--listings", "1", "--bookings", "0"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Clearing existing data...\nExisting data cleared\n",
        ))
        .stdout(predicate::str::contains("Successfully created 1 listings"));
}

#[test]
fn migrate_creates_database_file() {
    let dir = TempDir::new().unwrap();

    roamstay(&dir)
        .arg("migrate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Migrations applied"));

    assert!(dir.path().join("seed.db").exists());
}

#[test]
fn unreachable_database_exits_non_zero() {
    let dir = TempDir::new().unwrap();

    roamstay(&dir)
        .env(
            "ROAMSTAY_DATABASE__URL",
            format!(
                "sqlite://{}",
                dir.path().join("missing").join("nested").join("seed.db").display()
            ),
        )
        .args(["seed", "--listings", "1"])
        .assert()
        .failure();
}

#[test]
fn unknown_environment_is_rejected() {
    let dir = TempDir::new().unwrap();

    roamstay(&dir)
        .env("ROAMSTAY_ENV", "qa")
        .arg("migrate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported environment"));
}
