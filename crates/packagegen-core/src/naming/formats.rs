//! Case-variant derivation for package and plugin names

use serde::Serialize;

use crate::naming::tokens::tokenize;

/// Prefix every CKEditor 5 feature package carries after its scope
pub const PACKAGE_NAME_PREFIX: &str = "ckeditor5-";

/// Case variants derived from a single name
///
/// Every variant except `raw` and `full_name` is rebuilt from the lowercased
/// tokens of the input, so the results are the same whether the input arrived
/// as `bar-baz`, `bar_baz`, or `BarBaz`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedName {
    /// The fragment the variants were derived from, case preserved
    pub raw: String,
    /// The original full input, passed through unmodified
    pub full_name: String,
    /// Space-joined words with the first letter capitalized, e.g. `Bar baz`
    pub spaced_out: String,
    /// e.g. `barBaz`
    pub camel_case: String,
    /// e.g. `BarBaz`
    pub pascal_case: String,
    /// All tokens joined without separators, e.g. `barbaz`
    pub lower_case_merged: String,
}

impl FormattedName {
    /// Derive every case variant from an identifier fragment.
    ///
    /// `full_name` is carried through unmodified. `raw_name` is the fragment
    /// the variants are derived from: for package names the feature segment
    /// after the scope and the `ckeditor5-` prefix, for plugin names the name
    /// itself.
    pub fn derive(full_name: &str, raw_name: &str) -> Self {
        let tokens: Vec<String> = tokenize(raw_name)
            .into_iter()
            .map(|token| token.to_ascii_lowercase())
            .collect();

        let lower_case_merged = tokens.concat();
        let pascal_case: String = tokens.iter().map(|token| capitalize(token)).collect();
        let camel_case = decapitalize(&pascal_case);
        let spaced_out = capitalize(&tokens.join(" "));

        FormattedName {
            raw: raw_name.to_string(),
            full_name: full_name.to_string(),
            spaced_out,
            camel_case,
            pascal_case,
            lower_case_merged,
        }
    }
}

/// Case variants for the package and for the plugin class it exposes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedNames {
    pub package: FormattedName,
    pub plugin: FormattedName,
}

/// Derive the case variants for a package name and its optional plugin-name
/// override.
///
/// The package variants come from the feature segment of the name (scope and
/// `ckeditor5-` prefix stripped). When no override is given the plugin reuses
/// the package variants, so a `@foo/ckeditor5-bar-baz` package exposes a
/// `BarBaz` plugin unless the caller says otherwise.
pub fn package_name_formats(package_name: &str, plugin_name: Option<&str>) -> FormattedNames {
    let package = FormattedName::derive(package_name, feature_segment(package_name));
    let plugin = match plugin_name {
        Some(name) if !name.is_empty() => FormattedName::derive(name, name),
        _ => package.clone(),
    };

    FormattedNames { package, plugin }
}

/// The feature segment of a package name: everything after the scope and the
/// `ckeditor5-` prefix
fn feature_segment(package_name: &str) -> &str {
    let unscoped = package_name
        .rsplit('/')
        .next()
        .unwrap_or(package_name);
    unscoped.strip_prefix(PACKAGE_NAME_PREFIX).unwrap_or(unscoped)
}

/// Uppercase the first character, leave the rest unchanged
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Lowercase the first character, leave the rest unchanged
fn decapitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
