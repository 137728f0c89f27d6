#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const EMAIL: &str = "a@x.com";
pub const PIN: &str = "1234";

/// Binary with an isolated home: no user config is ever read.
pub fn rk() -> Command {
    let mut path: PathBuf = env::temp_dir();
    path.push("rkiosk_home_default");
    fs::create_dir_all(&path).expect("create test home");
    rk_with_home(&path.to_string_lossy())
}

/// Binary whose config directory lives under `home`.
pub fn rk_with_home(home: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("rkiosk");
    cmd.env("HOME", home).env("APPDATA", home);
    cmd
}

/// Empty per-name home directory inside the system temp dir.
pub fn test_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rkiosk_home_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test home");
    path.to_string_lossy().to_string()
}

/// Write a config file with the given roster into `home`, the way `init` lays it out.
pub fn write_config(home: &str, db_path: &str, employees: &[&str]) {
    let dir = if cfg!(target_os = "windows") {
        PathBuf::from(home).join("rkiosk")
    } else {
        PathBuf::from(home).join(".rkiosk")
    };
    fs::create_dir_all(&dir).expect("create config dir");

    let mut yaml = format!("database: {}\nemployees:\n", db_path);
    for e in employees {
        yaml.push_str(&format!("  - {}\n", e));
    }
    fs::write(dir.join("rkiosk.conf"), yaml).expect("write config");
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rkiosk.sqlite", name));
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

/// Initialize the store and bind the device with the test owner.
pub fn init_bound_kiosk(db_path: &str) {
    rk().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rk().args(["--db", db_path, "setup", "--email", EMAIL, "--pin", PIN])
        .assert()
        .success();
}
