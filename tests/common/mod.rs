//! Shared helpers for driving the `bindery` binary.

#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

/// Runs the built binary with a pinned clock and no inherited bindery env.
pub fn run_bindery(args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_bindery");
    Command::new(bin)
        .args(args)
        .env("SOURCE_DATE_EPOCH", "1700000000")
        .env_remove("BINDERY_RULE_PACK")
        .env_remove("BINDERY_REPORT")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run bindery binary")
}

/// Writes `contents` to `root/rel`, creating parent directories.
pub fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, contents).unwrap();
}

/// Reads `root/rel` as UTF-8.
pub fn read(root: &Path, rel: &str) -> String {
    std::fs::read_to_string(root.join(rel)).unwrap()
}

/// Converts a path to `&str` for use as a CLI argument.
pub fn arg(path: &Path) -> &str {
    path.to_str().expect("temp paths are UTF-8")
}
