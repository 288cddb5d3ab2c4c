//! Template root selection by language and installation method

use crate::options::{InstallationMethod, ProgrammingLanguage};

/// Ordered list of template roots merged into one destination tree
///
/// The shared root always comes first and exactly one language-specific root
/// follows it. When two roots produce the same destination path the later
/// root wins, so the order is part of the contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
    roots: Vec<String>,
}

impl TemplateSet {
    /// Root shared by every language and installation method
    pub const COMMON_ROOT: &'static str = "common";

    /// Resolve the roots to merge for a language/installation-method pair.
    pub fn resolve(language: ProgrammingLanguage, method: InstallationMethod) -> Self {
        let language_root = match (language, method) {
            (ProgrammingLanguage::JavaScript, InstallationMethod::Current) => "js",
            (ProgrammingLanguage::TypeScript, InstallationMethod::Current) => "ts",
            (ProgrammingLanguage::JavaScript, InstallationMethod::CurrentAndLegacy) => "js-legacy",
            (ProgrammingLanguage::TypeScript, InstallationMethod::CurrentAndLegacy) => "ts-legacy",
        };

        TemplateSet {
            roots: vec![Self::COMMON_ROOT.to_string(), language_root.to_string()],
        }
    }

    /// Build a set from explicit roots, preserving the given order.
    pub fn from_roots<I, S>(roots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TemplateSet {
            roots: roots.into_iter().map(Into::into).collect(),
        }
    }

    /// Roots in merge order
    pub fn roots(&self) -> &[String] {
        &self.roots
    }
}
