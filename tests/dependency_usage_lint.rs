//! Dependency lint - every crate declared in Cargo.toml is referenced.
//!
//! A crate counts as used when its Rust name (`-` becomes `_`) appears as a
//! path root (`name::`) somewhere in `src/`, `tests/` or `build.rs`.

use std::fs;
use std::path::Path;
use walkdir::WalkDir;

fn manifest_dir() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
}

/// Crate names from every `[dependencies]`-like table in the manifest.
fn declared_dependencies(manifest: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut in_deps = false;

    for line in manifest.lines().map(str::trim) {
        if line.starts_with('[') {
            in_deps = line.ends_with("dependencies]");
            continue;
        }
        if !in_deps || line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((name, _)) = line.split_once('=') {
            names.push(name.trim().to_string());
        }
    }
    names
}

fn rust_sources() -> String {
    let root = manifest_dir();
    let mut all = fs::read_to_string(root.join("build.rs")).unwrap_or_default();

    for dir in ["src", "tests"] {
        for entry in WalkDir::new(root.join(dir))
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
        {
            if let Ok(content) = fs::read_to_string(entry.path()) {
                all.push_str(&content);
                all.push('\n');
            }
        }
    }
    all
}

#[test]
fn manifest_lists_dependencies() {
    let manifest = fs::read_to_string(manifest_dir().join("Cargo.toml"))
        .expect("Failed to read Cargo.toml");
    let declared = declared_dependencies(&manifest);

    assert!(declared.contains(&"dioxus".to_string()));
    assert!(declared.contains(&"web-sys".to_string()));
    assert!(declared.contains(&"walkdir".to_string()));
}

#[test]
fn every_dependency_is_used() {
    let manifest = fs::read_to_string(manifest_dir().join("Cargo.toml"))
        .expect("Failed to read Cargo.toml");
    let sources = rust_sources();

    let unused: Vec<String> = declared_dependencies(&manifest)
        .into_iter()
        .filter(|name| !sources.contains(&format!("{}::", name.replace('-', "_"))))
        .collect();

    assert!(
        unused.is_empty(),
        "Dependencies declared but never referenced: {:?}",
        unused
    );
}
