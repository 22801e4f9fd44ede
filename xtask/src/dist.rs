//! `cargo xtask dist`: stage a crate's publishable files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use toml::{Table, Value};

/// Files copied verbatim next to the trimmed manifest.
const COPIED_FILES: &[&str] = &["README.md"];

/// Top-level manifest keys that only matter inside the workspace.
const DEV_ONLY_KEYS: &[&str] = &[
    "dev-dependencies",
    "dev_dependencies",
    "bench",
    "example",
    "test",
];

/// Dev-dependency keys under `[target.<cfg>]`.
const TARGET_DEV_KEYS: &[&str] = &["dev-dependencies", "dev_dependencies"];

/// Copies the crate's publishable files into `<out>/<crate-name>/`.
///
/// Returns the staging directory.
pub fn stage(crate_dir: &Path, out: &Path) -> Result<PathBuf> {
    let manifest_path = crate_dir.join("Cargo.toml");
    let text = fs::read_to_string(&manifest_path)
        .with_context(|| format!("failed to read {}", manifest_path.display()))?;
    let manifest: Table = toml::from_str(&text)
        .with_context(|| format!("failed to parse {}", manifest_path.display()))?;

    let name = package_name(&manifest)
        .with_context(|| format!("no [package] name in {}", manifest_path.display()))?
        .to_string();
    let target = out.join(&name);
    fs::create_dir_all(&target)
        .with_context(|| format!("failed to create {}", target.display()))?;

    for file in COPIED_FILES {
        let from = crate_dir.join(file);
        fs::copy(&from, target.join(file))
            .with_context(|| format!("failed to copy {}", from.display()))?;
    }

    let trimmed = toml::to_string_pretty(&trim_manifest(manifest))
        .context("failed to render trimmed manifest")?;
    let manifest_target = target.join("Cargo.toml");
    fs::write(&manifest_target, trimmed)
        .with_context(|| format!("failed to write {}", manifest_target.display()))?;

    Ok(target)
}

/// Returns `package.name`.
pub fn package_name(manifest: &Table) -> Option<&str> {
    manifest.get("package")?.get("name")?.as_str()
}

/// Removes development-only tables from a parsed manifest.
///
/// Dropped: `[dev-dependencies]`, `[target.<cfg>.dev-dependencies]`,
/// `[[bench]]`, `[[example]]` and `[[test]]`. Target tables left empty are
/// dropped too. Every other key keeps its position.
pub fn trim_manifest(mut manifest: Table) -> Table {
    for key in DEV_ONLY_KEYS {
        manifest.remove(*key);
    }

    if let Some(Value::Table(targets)) = manifest.get_mut("target") {
        for (_, platform) in targets.iter_mut() {
            if let Value::Table(platform) = platform {
                for key in TARGET_DEV_KEYS {
                    platform.remove(*key);
                }
            }
        }

        let emptied: Vec<String> = targets
            .iter()
            .filter(|(_, platform)| platform.as_table().is_some_and(Table::is_empty))
            .map(|(cfg, _)| cfg.clone())
            .collect();
        for cfg in emptied {
            targets.remove(&cfg);
        }

        if targets.is_empty() {
            manifest.remove("target");
        }
    }

    manifest
}

// ============================================================================
// TESTS
// ============================================================================
