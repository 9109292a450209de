mod common;

use std::fs;

use common::{fintrack, test_home};
use predicates::prelude::*;

#[test]
fn commands_require_a_user() {
    let home = test_home();

    fintrack(&home, "2024-06-10")
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no user selected"));
}

#[test]
fn malformed_pinned_date_is_an_error() {
    let home = test_home();

    fintrack(&home, "10.06.2024")
        .args(["login", "alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a YYYY-MM-DD date"));
}

#[test]
fn login_seeds_sample_data_and_remembers_the_user() {
    let home = test_home();

    fintrack(&home, "2024-06-10")
        .args(["login", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sample data"))
        .stdout(predicate::str::contains("Logged in as `alice`"));

    fintrack(&home, "2024-06-10")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Apartment Rent"))
        .stdout(predicate::str::contains("Monthly Salary"));

    let config = fs::read_to_string(home.join("config.json")).expect("config written");
    assert!(config.contains("\"session\": \"alice\""));
    assert!(home.join("data").join("fintrack_data_alice.json").exists());
}

#[test]
fn register_with_salary_books_it_once_per_month() {
    let home = test_home();

    fintrack(&home, "2024-06-10")
        .args(["register", "bob", "--salary", "3000", "--salary-day", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("salary has been booked"));

    fintrack(&home, "2024-06-12")
        .arg("sync")
        .assert()
        .success()
        .stdout(predicate::str::contains("already booked"));

    fintrack(&home, "2024-07-01")
        .arg("sync")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 1 recurring transaction(s)"));

    let raw = fs::read_to_string(home.join("data").join("fintrack_data_bob.json")).expect("data");
    let doc: serde_json::Value = serde_json::from_str(&raw).expect("json");
    let rows = doc["transactions"].as_array().expect("transactions");
    assert_eq!(rows.len(), 2);
    assert!(rows
        .iter()
        .all(|row| row["description"] == "Auto-Salary Credit" && row["type"] == "INCOME"));
}

#[test]
fn add_list_search_and_delete() {
    let home = test_home();
    fintrack(&home, "2024-06-10")
        .args(["register", "carol"])
        .assert()
        .success();

    fintrack(&home, "2024-06-10")
        .args(["add", "expense", "12.5", "food", "Farmers market"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded Expense"));

    fintrack(&home, "2024-06-10")
        .args(["list", "--search", "farmers"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Farmers market"))
        .stdout(predicate::str::contains("-12.50 €"));

    let raw = fs::read_to_string(home.join("data").join("fintrack_data_carol.json")).expect("data");
    let doc: serde_json::Value = serde_json::from_str(&raw).expect("json");
    let id = doc["transactions"][0]["id"].as_str().expect("id").to_string();

    fintrack(&home, "2024-06-10")
        .args(["delete", &id])
        .assert()
        .success();
    fintrack(&home, "2024-06-10")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions."));
}

#[test]
fn invalid_input_is_reported() {
    let home = test_home();
    fintrack(&home, "2024-06-10")
        .args(["register", "dave"])
        .assert()
        .success();

    fintrack(&home, "2024-06-10")
        .args(["add", "expense", "10", "groceries", "Snacks"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("groceries"));

    fintrack(&home, "2024-06-10")
        .args(["budget", "set", "salary", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot carry a spending limit"));

    fintrack(&home, "2024-06-10")
        .args(["delete", "nope"])
        .assert()
        .failure();
}

#[test]
fn recurring_items_show_their_status() {
    let home = test_home();
    fintrack(&home, "2024-06-10")
        .args(["register", "erin"])
        .assert()
        .success();

    fintrack(&home, "2024-06-10")
        .args(["recurring", "add", "Gym", "40", "--category", "others", "--day", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already due"));
    fintrack(&home, "2024-06-10")
        .args(["recurring", "add", "Insurance", "90", "--day", "20"])
        .assert()
        .success();

    fintrack(&home, "2024-06-10")
        .args(["recurring", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gym (Auto)"))
        .stdout(predicate::str::contains("booked"))
        .stdout(predicate::str::contains("upcoming"));
}

#[test]
fn privacy_mode_masks_amounts() {
    let home = test_home();
    fintrack(&home, "2024-06-10")
        .args(["login", "finn"])
        .assert()
        .success();
    fintrack(&home, "2024-06-10")
        .args(["privacy", "on"])
        .assert()
        .success();

    fintrack(&home, "2024-06-10")
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("•••• €"))
        .stdout(predicate::str::contains("2054.50").not());
}

#[test]
fn delete_account_needs_confirmation() {
    let home = test_home();
    fintrack(&home, "2024-06-10")
        .args(["login", "gina"])
        .assert()
        .success();

    fintrack(&home, "2024-06-10")
        .arg("delete-account")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));

    fintrack(&home, "2024-06-10")
        .args(["delete-account", "--yes"])
        .assert()
        .success();
    assert!(!home.join("data").join("fintrack_data_gina.json").exists());

    fintrack(&home, "2024-06-10")
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no user selected"));
}
