//! Dependency versions written into generated package manifests

use anyhow::{Context, Result};
use semver::VersionReq;
use std::collections::BTreeMap;
use std::path::Path;

/// Versions keyed by the name the templates reference (not the npm package
/// name, which often contains `/` and `-`)
pub type DependencyVersions = BTreeMap<String, String>;

/// Versions the shipped templates were written against.
pub fn default_versions() -> DependencyVersions {
    [
        ("ckeditor5", "^46.0.0"),
        ("ckeditor5DevBuildTools", "^43.0.0"),
        ("ckeditor5Inspector", "^5.0.0"),
        ("ckeditor5PackageTools", "^4.0.0"),
        ("eslintConfigCkeditor5", "^11.0.0"),
        ("stylelintConfigCkeditor5", "^11.0.0"),
        ("typescript", "^5.5.0"),
        ("vitest", "^3.2.0"),
    ]
    .into_iter()
    .map(|(name, version)| (name.to_string(), version.to_string()))
    .collect()
}

/// Read a version override file: a flat JSON object of name to version range.
pub fn load_versions(path: &Path) -> Result<DependencyVersions> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read version file: {}", path.display()))?;
    let versions: DependencyVersions = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {} as a name/version map", path.display()))?;

    check_versions(&versions)?;
    Ok(versions)
}

/// The defaults overlaid with entries from an override file, when one is
/// given.
pub fn resolve_versions(overrides: Option<&Path>) -> Result<DependencyVersions> {
    let mut versions = default_versions();
    if let Some(path) = overrides {
        versions.extend(load_versions(path)?);
    }

    Ok(versions)
}

/// Every version must parse as a semver version or range.
pub fn check_versions(versions: &DependencyVersions) -> Result<()> {
    for (name, version) in versions {
        VersionReq::parse(version)
            .with_context(|| format!("Invalid version \"{}\" for \"{}\"", version, name))?;
    }

    Ok(())
}
