//! End-to-end package generation

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::naming::{self, package_name_formats, FormattedNames};
use crate::options::{InstallationMethod, PackageManager, ProgrammingLanguage};
use crate::templates::{materialize, TemplateData, TemplateSet};
use crate::versions::DependencyVersions;

/// Everything one generation run needs, assembled by the caller
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Full package identifier, e.g. `@acme/ckeditor5-highlight`
    pub package_name: String,
    /// Optional plugin class name; derived from the package name when absent
    pub plugin_name: Option<String>,
    pub language: ProgrammingLanguage,
    pub installation_method: InstallationMethod,
    pub package_manager: PackageManager,
    /// Optional UMD global name; derived from the plugin name when absent
    pub global_name: Option<String>,
    /// Directory the package directory is created in
    pub output_dir: PathBuf,
    /// Directory holding the template roots
    pub template_dir: PathBuf,
    pub dependency_versions: DependencyVersions,
}

/// What a finished run produced
#[derive(Debug)]
pub struct GenerateReport {
    /// The directory the package was written to
    pub destination: PathBuf,
    pub formatted_names: FormattedNames,
    /// Destination-relative paths of the files that were written
    pub written_files: Vec<String>,
}

/// Run one full generation: validate the inputs, derive the name formats,
/// and materialize the resolved template set into a fresh package directory.
pub fn generate(options: &GeneratorOptions) -> Result<GenerateReport> {
    // Step 1: Validate the package name and the optional plugin override
    naming::validate_package_name(&options.package_name)
        .with_context(|| format!("Invalid package name \"{}\"", options.package_name))?;
    if let Some(plugin_name) = options.plugin_name.as_deref() {
        naming::validate_plugin_name(plugin_name)
            .with_context(|| format!("Invalid plugin name \"{}\"", plugin_name))?;
    }

    // Step 2: Derive the case variants everything downstream substitutes
    let formatted_names =
        package_name_formats(&options.package_name, options.plugin_name.as_deref());

    // Step 3: Settle the global name, falling back to the plugin class name.
    // The fallback gets the same check: a digit-leading feature segment
    // derives a name no JavaScript parser accepts.
    let global_name = match options.global_name.as_deref() {
        Some(name) => name.to_string(),
        None => formatted_names.plugin.pascal_case.clone(),
    };
    naming::validate_global_name(&global_name).with_context(|| {
        format!(
            "Invalid global name \"{}\" (pass --global-name or --plugin-name)",
            global_name
        )
    })?;

    // Step 4: The package directory must not already hold files
    let destination = options.output_dir.join(directory_name(&options.package_name));
    ensure_destination_usable(&destination)?;

    // Step 5: Resolve the template roots and assemble the data bag
    let set = TemplateSet::resolve(options.language, options.installation_method);
    let data = TemplateData::new(
        &options.package_name,
        &formatted_names,
        options.language,
        options.package_manager,
        &global_name,
        &options.dependency_versions,
    );

    // Step 6: Materialize the templates into the destination
    let written_files = materialize(&options.template_dir, &set, &destination, &data)?;

    Ok(GenerateReport {
        destination,
        formatted_names,
        written_files,
    })
}

/// Directory name for the generated package: the identifier minus its scope
fn directory_name(package_name: &str) -> &str {
    package_name.rsplit('/').next().unwrap_or(package_name)
}

/// The destination may exist only as an empty directory.
fn ensure_destination_usable(destination: &Path) -> Result<()> {
    if !destination.exists() {
        return Ok(());
    }
    if !destination.is_dir() {
        anyhow::bail!(
            "Cannot create directory {}: the path exists and is not a directory",
            destination.display()
        );
    }

    let mut entries = fs::read_dir(destination)
        .with_context(|| format!("Failed to read directory: {}", destination.display()))?;
    if entries.next().is_some() {
        anyhow::bail!(
            "Directory {} already exists and is not empty",
            destination.display()
        );
    }

    Ok(())
}
