#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn kt() -> Command {
    cargo_bin_cmd!("kintai")
}

/// Create a unique config file path inside the system temp dir and remove
/// any leftover from a previous run
pub fn temp_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_kintai.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a valid credentials file for tests that need one on disk
pub fn seed_config(path: &str) {
    let yaml = "credential:\n  client_id: acme\n  login_id: me@example.com\n  password: secret\n  account_type: staff\n";
    fs::write(path, yaml).unwrap();
}
