//! Assembly of the data templates render against

use chrono::Utc;
use serde_json::{json, Map, Value};

use crate::naming::FormattedNames;
use crate::options::{PackageManager, ProgrammingLanguage};
use crate::versions::DependencyVersions;

/// Key/value bag substituted into template expressions
///
/// The keys mirror what the shipped templates reference: `packageIdentifier`,
/// `formattedNames`, `dependencyVersions`, `packageManager`, `cliSeparator`,
/// `programmingLanguage`, `globalName`, and `now`. Extra scalars can be added
/// with [`TemplateData::set`] before rendering.
#[derive(Debug, Clone)]
pub struct TemplateData {
    values: Value,
    package_manager: PackageManager,
    plugin_file_name: String,
}

impl TemplateData {
    /// Assemble the bag for one generation run.
    pub fn new(
        package_identifier: &str,
        formatted_names: &FormattedNames,
        language: ProgrammingLanguage,
        package_manager: PackageManager,
        global_name: &str,
        dependency_versions: &DependencyVersions,
    ) -> Self {
        let versions: Map<String, Value> = dependency_versions
            .iter()
            .map(|(name, version)| (name.clone(), Value::String(version.clone())))
            .collect();

        let mut values = Map::new();
        values.insert(
            "packageIdentifier".to_string(),
            Value::String(package_identifier.to_string()),
        );
        values.insert("formattedNames".to_string(), json!(formatted_names));
        values.insert("dependencyVersions".to_string(), Value::Object(versions));
        values.insert(
            "packageManager".to_string(),
            Value::String(package_manager.command().to_string()),
        );
        values.insert(
            "cliSeparator".to_string(),
            Value::String(package_manager.cli_separator().to_string()),
        );
        values.insert(
            "programmingLanguage".to_string(),
            Value::String(language.code().to_string()),
        );
        values.insert(
            "globalName".to_string(),
            Value::String(global_name.to_string()),
        );
        values.insert("now".to_string(), Value::String(Utc::now().to_rfc3339()));

        TemplateData {
            values: Value::Object(values),
            package_manager,
            plugin_file_name: formatted_names.plugin.lower_case_merged.clone(),
        }
    }

    /// Add or replace a top-level value.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        if let Value::Object(map) = &mut self.values {
            map.insert(key.into(), value);
        }
    }

    /// The full bag, for expression evaluation
    pub fn values(&self) -> &Value {
        &self.values
    }

    /// Package manager the run was configured with
    pub fn package_manager(&self) -> PackageManager {
        self.package_manager
    }

    /// Name substituted for the `_PLACEHOLDER_` file-name token
    pub fn plugin_file_name(&self) -> &str {
        &self.plugin_file_name
    }
}
