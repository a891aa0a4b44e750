//! Stamps the build with a version and a short commit id for the footer.
//!
//! Both can be pinned from the environment (release pipelines do this);
//! otherwise the package version and `git rev-parse` are used.

use std::env;
use std::process::Command;

const STAMPS: &[(&str, fn() -> String)] = &[
    ("PORTAL_VERSION", package_version),
    ("PORTAL_GIT_SHA", commit_id),
];

fn main() {
    for (key, fallback) in STAMPS {
        let value = env::var(key).unwrap_or_else(|_| fallback());
        println!("cargo:rustc-env={}={}", key, value);
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-env-changed=GITHUB_SHA");
}

fn package_version() -> String {
    env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "unknown".into())
}

fn commit_id() -> String {
    if let Ok(sha) = env::var("GITHUB_SHA") {
        return sha.chars().take(7).collect();
    }
    Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|sha| sha.trim().to_string())
        .unwrap_or_else(|| "unknown".into())
}
