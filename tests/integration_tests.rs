use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_product, list_json, setup_env, setup_initialized};

#[test]
fn test_init_creates_database_and_config() {
    let env = setup_env("init_full");

    env.cmd()
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(env.db_path.exists());
    let conf = env.home().join(".product-dao").join("product-dao.conf");
    let yaml = std::fs::read_to_string(conf).expect("config written by init");
    assert!(yaml.contains(env.db()));
}

#[test]
fn test_init_in_test_mode_skips_config() {
    let env = setup_initialized("init_test_mode");

    assert!(env.db_path.exists());
    assert!(!env.home().join(".product-dao").join("product-dao.conf").exists());
}

#[test]
fn test_init_twice_is_harmless() {
    let env = setup_initialized("init_twice");
    add_product(&env, "Milk", "Acme", "2.50", "2030-01-01");

    env.cmd().args(["--test", "init"]).assert().success();
    assert_eq!(list_json(&env).len(), 1);
}

#[test]
fn test_list_empty() {
    let env = setup_initialized("list_empty");

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No products."));
    assert!(list_json(&env).is_empty());
}

#[test]
fn test_add_then_show() {
    let env = setup_initialized("add_show");
    let id = add_product(&env, "Milk", "Acme", "2.50", "2030-01-01");

    env.cmd()
        .args(["show", &id.to_string()])
        .assert()
        .success()
        .stdout(contains("Milk").and(contains("Acme")).and(contains("2.50")));

    let out = env
        .cmd()
        .args(["show", &id.to_string(), "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["id"], id);
    assert_eq!(v["name"], "Milk");
    assert_eq!(v["price"], "2.50");
    assert_eq!(v["expiration_date"], "2030-01-01");
    assert!(v["creation_time"].is_string());
}

#[test]
fn test_list_after_several_adds() {
    let env = setup_initialized("list_many");
    let ids = [
        add_product(&env, "Milk", "Acme", "2.50", "2030-01-01"),
        add_product(&env, "Bread", "Bakery", "1.20", "2030-01-03"),
        add_product(&env, "Cheese", "Dairy", "7.99", "2030-02-15"),
    ];

    let all = list_json(&env);
    assert_eq!(all.len(), ids.len());
    for id in ids {
        assert!(all.iter().any(|p| p["id"] == id), "id {id} missing");
    }

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("ID").and(contains("Bread")).and(contains("7.99")));
}

#[test]
fn test_add_expired_product_warns() {
    let env = setup_initialized("add_expired");

    env.cmd()
        .args(["add", "Yogurt", "Acme", "0.99", "2001-01-01"])
        .assert()
        .success()
        .stdout(contains("already expired").and(contains("saved with id")));
}

#[test]
fn test_add_rejects_bad_input() {
    let env = setup_initialized("add_bad_input");

    env.cmd()
        .args(["add", "Milk", "Acme", "cheap", "2030-01-01"])
        .assert()
        .failure()
        .stderr(contains("Invalid price: cheap"));

    env.cmd()
        .args(["add", "Milk", "Acme", "2.50", "01/01/2030"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));

    assert!(list_json(&env).is_empty());
}

#[test]
fn test_update_changes_only_given_fields() {
    let env = setup_initialized("update_fields");
    let id = add_product(&env, "Milk", "Acme", "2.50", "2030-01-01");
    let before = list_json(&env).remove(0);

    env.cmd()
        .args(["update", &id.to_string(), "--price", "3.10", "--name", "Oat milk"])
        .assert()
        .success()
        .stdout(contains(format!("Product {} updated.", id)));

    let after = list_json(&env).remove(0);
    assert_eq!(after["id"], id);
    assert_eq!(after["name"], "Oat milk");
    assert_eq!(after["price"], "3.10");
    assert_eq!(after["producer"], "Acme");
    assert_eq!(after["expiration_date"], "2030-01-01");
    assert_eq!(after["creation_time"], before["creation_time"]);
}

#[test]
fn test_update_without_fields_is_a_noop() {
    let env = setup_initialized("update_noop");
    let id = add_product(&env, "Milk", "Acme", "2.50", "2030-01-01");

    env.cmd()
        .args(["update", &id.to_string()])
        .assert()
        .success()
        .stdout(contains("Nothing to update"));
}

#[test]
fn test_update_unknown_id_fails() {
    let env = setup_initialized("update_unknown");

    env.cmd()
        .args(["update", "42", "--name", "Ghost"])
        .assert()
        .failure()
        .stderr(contains("Product with id = 42 does not exist"));
}

#[test]
fn test_del_removes_product() {
    let env = setup_initialized("del_yes");
    let id = add_product(&env, "Milk", "Acme", "2.50", "2030-01-01");

    env.cmd()
        .args(["del", &id.to_string(), "--yes"])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    env.cmd()
        .args(["show", &id.to_string()])
        .assert()
        .failure()
        .stderr(contains(format!("Product with id = {} does not exist", id)));
}

#[test]
fn test_del_cancelled_keeps_product() {
    let env = setup_initialized("del_cancel");
    let id = add_product(&env, "Milk", "Acme", "2.50", "2030-01-01");

    env.cmd()
        .args(["del", &id.to_string()])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    assert_eq!(list_json(&env).len(), 1);
}

#[test]
fn test_del_confirmed_from_stdin() {
    let env = setup_initialized("del_confirm");
    let id = add_product(&env, "Milk", "Acme", "2.50", "2030-01-01");

    env.cmd()
        .args(["del", &id.to_string()])
        .write_stdin("y\n")
        .assert()
        .success();

    assert!(list_json(&env).is_empty());
}

#[test]
fn test_del_unknown_id_fails() {
    let env = setup_initialized("del_unknown");

    env.cmd()
        .args(["del", "7", "--yes"])
        .assert()
        .failure()
        .stderr(contains("Product with id = 7 does not exist"));
}

#[test]
fn test_missing_database_is_reported() {
    let env = setup_env("missing_db");

    env.cmd()
        .arg("list")
        .assert()
        .failure()
        .stderr(contains("Error: Cannot obtain a connection"));
}

#[test]
fn test_uninitialized_database_is_reported() {
    let env = setup_env("no_schema");
    std::fs::File::create(&env.db_path).unwrap();

    env.cmd()
        .arg("list")
        .assert()
        .failure()
        .stderr(contains("Error loading products").and(contains("no such table")));
}

#[test]
fn test_config_print_shows_overridden_db() {
    let env = setup_env("config_print");

    env.cmd()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("database:").and(contains(env.db())).and(contains("log_level: warn")));
}
