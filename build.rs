//! Build script for railqr
//!
//! Exposes `BUILD_TIME`, `GIT_HASH` and `RUST_VERSION` to `railqr::build_info`
//! and the detailed health endpoint.

use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    let built_at = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    emit("BUILD_TIME", built_at.to_string());

    // docs.rs builds without a checkout or a stable toolchain banner
    let on_docs_rs = std::env::var_os("DOCS_RS").is_some();
    let git_hash = if on_docs_rs {
        Some("docs-rs".to_string())
    } else {
        first_line_of("git", &["rev-parse", "--short", "HEAD"])
    };
    emit("GIT_HASH", git_hash.unwrap_or_else(|| "unknown".to_string()));

    let rustc = if on_docs_rs {
        Some("stable".to_string())
    } else {
        first_line_of("rustc", &["--version"])
    };
    emit("RUST_VERSION", rustc.unwrap_or_else(|| "unknown".to_string()));

    for watched in [".git/HEAD", ".git/refs/heads/", "Cargo.toml", "Cargo.lock"] {
        println!("cargo:rerun-if-changed={}", watched);
    }
}

fn emit(key: &str, value: String) {
    println!("cargo:rustc-env={}={}", key, value);
}

/// Trimmed stdout of a successful command
fn first_line_of(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    text.lines().next().map(|line| line.trim().to_string())
}
