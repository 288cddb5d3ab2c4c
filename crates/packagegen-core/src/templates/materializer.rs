//! Merging template roots into a destination package tree

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::options::PackageManager;
use crate::templates::context::TemplateData;
use crate::templates::expression;
use crate::templates::set::TemplateSet;

/// File-name token replaced by the plugin's merged lowercase name
const NAME_PLACEHOLDER: &str = "_PLACEHOLDER_";

/// Suffix that keeps template sources out of the authoring repo's tooling;
/// never part of an emitted file name
const TXT_SUFFIX: &str = ".txt";

/// File names only one package manager needs; everything else is emitted
/// unconditionally
const PNPM_ONLY_FILES: &[&str] = &["pnpm-workspace.yaml"];

/// Materialize the template roots into `destination_dir`, in order.
///
/// Each root is walked in full before the next one starts. Within a root the
/// files are processed in sorted path order, so the merge does not depend on
/// platform directory order. When two roots emit the same destination path
/// the later root overwrites the earlier one. Returns the destination paths
/// that were written, relative to `destination_dir`.
pub fn materialize(
    templates_root: &Path,
    set: &TemplateSet,
    destination_dir: &Path,
    data: &TemplateData,
) -> Result<Vec<String>> {
    fs::create_dir_all(destination_dir).with_context(|| {
        format!(
            "Failed to create destination directory: {}",
            destination_dir.display()
        )
    })?;

    let mut written_files = Vec::new();

    for root in set.roots() {
        if !templates_root.join(root).is_dir() {
            anyhow::bail!(
                "Template root \"{}\" not found in {}",
                root,
                templates_root.display()
            );
        }

        for source_relative in enumerate_files(templates_root, root)? {
            if !should_emit(&source_relative, data.package_manager()) {
                continue;
            }

            let source_path = templates_root.join(&source_relative);
            let template = fs::read_to_string(&source_path)
                .with_context(|| format!("Failed to read template file: {}", source_relative))?;
            let rendered = expression::render(&template, data.values())
                .with_context(|| format!("Failed to render template file: {}", source_relative))?;

            let destination_relative =
                transform_relative_path(&source_relative, data.plugin_file_name())?;
            let destination_path = destination_dir.join(&destination_relative);
            if let Some(parent) = destination_path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
            fs::write(&destination_path, rendered).with_context(|| {
                format!("Failed to write file: {}", destination_path.display())
            })?;

            if !written_files.contains(&destination_relative) {
                written_files.push(destination_relative);
            }
        }
    }

    Ok(written_files)
}

/// List every file under one template root, recursively, dotfiles included.
///
/// Paths come back relative to `templates_root` (so they keep the root
/// segment), `/`-separated, and sorted lexicographically.
fn enumerate_files(templates_root: &Path, root: &str) -> Result<Vec<String>> {
    let root_dir = templates_root.join(root);
    let mut files = Vec::new();

    for entry in WalkDir::new(&root_dir) {
        let entry =
            entry.with_context(|| format!("Failed to enumerate template root \"{}\"", root))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(templates_root)
            .context("Template entry escaped the templates root")?;
        files.push(path_to_slash(relative));
    }

    files.sort();
    Ok(files)
}

/// Decide whether a template file applies to the chosen package manager.
fn should_emit(source_relative: &str, package_manager: PackageManager) -> bool {
    let file_name = source_relative.rsplit('/').next().unwrap_or(source_relative);
    let file_name = file_name.strip_suffix(TXT_SUFFIX).unwrap_or(file_name);

    if PNPM_ONLY_FILES.contains(&file_name) {
        return package_manager == PackageManager::Pnpm;
    }

    true
}

/// Map a source-relative template path to its destination-relative path.
///
/// Strips the leading root segment so every root lands in one flat tree,
/// substitutes the `_PLACEHOLDER_` file-name token, and drops a trailing
/// `.txt`.
fn transform_relative_path(source_relative: &str, plugin_file_name: &str) -> Result<String> {
    let without_root = source_relative
        .split_once('/')
        .map(|(_, rest)| rest)
        .ok_or_else(|| {
            anyhow::anyhow!("Template path \"{}\" has no root segment", source_relative)
        })?;

    let substituted = without_root.replace(NAME_PLACEHOLDER, plugin_file_name);
    let transformed = substituted.strip_suffix(TXT_SUFFIX).unwrap_or(&substituted);

    Ok(transformed.to_string())
}

/// Normalize a relative path to forward-slash form
fn path_to_slash(path: &Path) -> String {
    path.components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::package_name_formats;
    use crate::options::ProgrammingLanguage;
    use crate::versions::default_versions;
    use std::path::PathBuf;

    fn test_data(package_manager: PackageManager) -> TemplateData {
        let names = package_name_formats("@foo/ckeditor5-bar-baz", None);
        TemplateData::new(
            "@foo/ckeditor5-bar-baz",
            &names,
            ProgrammingLanguage::TypeScript,
            package_manager,
            "BarBaz",
            &default_versions(),
        )
    }

    fn write_template(templates_root: &Path, relative: &str, content: &str) {
        let path = templates_root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn fixture_dirs() -> (tempfile::TempDir, PathBuf, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let templates_root = dir.path().join("templates");
        let destination = dir.path().join("out");
        (dir, templates_root, destination)
    }

    #[test]
    fn test_copies_and_renders_template_files() {
        let (_dir, templates_root, destination) = fixture_dirs();
        write_template(&templates_root, "common/README.md", "# <%= formattedNames.package.spacedOut %>\n");
        write_template(&templates_root, "ts/src/index.ts", "export {};\n");

        let set = TemplateSet::from_roots(["common", "ts"]);
        let written = materialize(&templates_root, &set, &destination, &test_data(PackageManager::Npm)).unwrap();

        assert_eq!(written, vec!["README.md", "src/index.ts"]);
        let readme = fs::read_to_string(destination.join("README.md")).unwrap();
        assert_eq!(readme, "# Bar baz\n");
        assert_eq!(
            fs::read_to_string(destination.join("src/index.ts")).unwrap(),
            "export {};\n"
        );
    }

    #[test]
    fn test_later_root_wins_on_path_collisions() {
        let (_dir, templates_root, destination) = fixture_dirs();
        write_template(&templates_root, "common/shared.md", "from common\n");
        write_template(&templates_root, "ts/shared.md", "from ts\n");

        let set = TemplateSet::from_roots(["common", "ts"]);
        let written = materialize(&templates_root, &set, &destination, &test_data(PackageManager::Npm)).unwrap();

        assert_eq!(written, vec!["shared.md"]);
        assert_eq!(
            fs::read_to_string(destination.join("shared.md")).unwrap(),
            "from ts\n"
        );
    }

    #[test]
    fn test_placeholder_file_names_use_the_plugin_name() {
        let (_dir, templates_root, destination) = fixture_dirs();
        write_template(
            &templates_root,
            "ts/src/_PLACEHOLDER_.ts",
            "export default class <%= formattedNames.plugin.pascalCase %> {}\n",
        );

        let set = TemplateSet::from_roots(["ts"]);
        let written = materialize(&templates_root, &set, &destination, &test_data(PackageManager::Npm)).unwrap();

        assert_eq!(written, vec!["src/barbaz.ts"]);
        let content = fs::read_to_string(destination.join("src/barbaz.ts")).unwrap();
        assert_eq!(content, "export default class BarBaz {}\n");
    }

    #[test]
    fn test_txt_suffix_is_stripped_from_destinations() {
        let (_dir, templates_root, destination) = fixture_dirs();
        write_template(&templates_root, "common/.gitignore.txt", "node_modules/\n");

        let set = TemplateSet::from_roots(["common"]);
        let written = materialize(&templates_root, &set, &destination, &test_data(PackageManager::Npm)).unwrap();

        assert_eq!(written, vec![".gitignore"]);
        // Renaming must leave the content alone
        assert_eq!(
            fs::read_to_string(destination.join(".gitignore")).unwrap(),
            "node_modules/\n"
        );
        assert!(!destination.join(".gitignore.txt").exists());
    }

    #[test]
    fn test_pnpm_workspace_file_follows_the_package_manager() {
        for (package_manager, expected) in [
            (PackageManager::Npm, false),
            (PackageManager::Yarn, false),
            (PackageManager::Pnpm, true),
        ] {
            let (_dir, templates_root, destination) = fixture_dirs();
            write_template(&templates_root, "common/pnpm-workspace.yaml", "packages:\n  - '.'\n");
            write_template(&templates_root, "common/README.md", "readme\n");

            let set = TemplateSet::from_roots(["common"]);
            let written =
                materialize(&templates_root, &set, &destination, &test_data(package_manager))
                    .unwrap();

            assert_eq!(
                destination.join("pnpm-workspace.yaml").exists(),
                expected,
                "unexpected pnpm-workspace.yaml presence for {}",
                package_manager
            );
            assert_eq!(written.contains(&"pnpm-workspace.yaml".to_string()), expected);
            assert!(destination.join("README.md").exists());
        }
    }

    #[test]
    fn test_files_are_written_in_sorted_order() {
        let (_dir, templates_root, destination) = fixture_dirs();
        write_template(&templates_root, "common/zebra.md", "z\n");
        write_template(&templates_root, "common/alpha.md", "a\n");
        write_template(&templates_root, "common/nested/beta.md", "b\n");

        let set = TemplateSet::from_roots(["common"]);
        let written = materialize(&templates_root, &set, &destination, &test_data(PackageManager::Npm)).unwrap();

        assert_eq!(written, vec!["alpha.md", "nested/beta.md", "zebra.md"]);
    }

    #[test]
    fn test_missing_template_root_fails() {
        let (_dir, templates_root, destination) = fixture_dirs();
        write_template(&templates_root, "common/README.md", "readme\n");

        let set = TemplateSet::from_roots(["common", "ts"]);
        let result = materialize(&templates_root, &set, &destination, &test_data(PackageManager::Npm));

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("\"ts\""));
    }

    #[test]
    fn test_render_failures_name_the_offending_file() {
        let (_dir, templates_root, destination) = fixture_dirs();
        write_template(&templates_root, "common/broken.md", "<%= missingKey %>\n");

        let set = TemplateSet::from_roots(["common"]);
        let error = materialize(&templates_root, &set, &destination, &test_data(PackageManager::Npm))
            .unwrap_err();

        let chain = format!("{:#}", error);
        assert!(chain.contains("common/broken.md"));
        assert!(chain.contains("missingKey"));
    }

    #[test]
    fn test_should_emit_is_a_pure_path_predicate() {
        assert!(should_emit("common/README.md", PackageManager::Npm));
        assert!(should_emit("common/pnpm-workspace.yaml", PackageManager::Pnpm));
        assert!(!should_emit("common/pnpm-workspace.yaml", PackageManager::Npm));
        assert!(!should_emit("common/pnpm-workspace.yaml", PackageManager::Yarn));
        // The filter also applies when the template carries the .txt suffix
        assert!(!should_emit("common/pnpm-workspace.yaml.txt", PackageManager::Npm));
        // Only exact file names match, not files that merely contain the name
        assert!(should_emit("common/docs/pnpm-workspace.yaml.md", PackageManager::Npm));
    }

    #[test]
    fn test_transform_relative_path_rules() {
        assert_eq!(
            transform_relative_path("common/README.md", "barbaz").unwrap(),
            "README.md"
        );
        assert_eq!(
            transform_relative_path("ts/src/_PLACEHOLDER_.ts", "barbaz").unwrap(),
            "src/barbaz.ts"
        );
        assert_eq!(
            transform_relative_path("common/.gitignore.txt", "barbaz").unwrap(),
            ".gitignore"
        );
        assert_eq!(
            transform_relative_path("common/lang/contexts.json", "barbaz").unwrap(),
            "lang/contexts.json"
        );
        assert!(transform_relative_path("no-root-segment", "barbaz").is_err());
    }
}
