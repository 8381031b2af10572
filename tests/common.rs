#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch HOME plus a database path inside it. Dropping it removes both.
pub struct TestEnv {
    pub home: TempDir,
    pub db_path: PathBuf,
}

impl TestEnv {
    pub fn db(&self) -> &str {
        self.db_path.to_str().expect("utf-8 temp path")
    }

    pub fn home(&self) -> &Path {
        self.home.path()
    }

    /// The binary with HOME pointed at the scratch dir and `--db` preset.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("product-dao");
        cmd.env("HOME", self.home())
            .env("APPDATA", self.home())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .args(["--db", self.db()]);
        cmd
    }
}

/// Fresh environment with an empty database file (no schema).
pub fn setup_env(name: &str) -> TestEnv {
    let home = tempfile::tempdir().expect("temp home");
    let db_path = home.path().join(format!("{}_products.sqlite", name));
    TestEnv { home, db_path }
}

/// Fresh environment with the schema created through `init --test`.
pub fn setup_initialized(name: &str) -> TestEnv {
    let env = setup_env(name);
    env.cmd().args(["--test", "init"]).assert().success();
    env
}

/// Add a product through the CLI and return the id it reports.
pub fn add_product(env: &TestEnv, name: &str, producer: &str, price: &str, expires: &str) -> i64 {
    let out = env
        .cmd()
        .args(["add", name, producer, price, expires])
        .output()
        .expect("run add");
    assert!(
        out.status.success(),
        "add failed: {}",
        String::from_utf8_lossy(&out.stderr)
    );

    let stdout = String::from_utf8_lossy(&out.stdout);
    stdout
        .lines()
        .find_map(|l| l.split("saved with id ").nth(1))
        .and_then(|id| id.trim().parse().ok())
        .unwrap_or_else(|| panic!("no id in add output: {stdout}"))
}

pub fn list_json(env: &TestEnv) -> Vec<serde_json::Value> {
    let out = env.cmd().args(["list", "--json"]).output().expect("run list");
    assert!(out.status.success());
    serde_json::from_slice(&out.stdout).expect("list --json prints a JSON array")
}
