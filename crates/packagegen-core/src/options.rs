//! Generation options shared between the core and the CLI

use std::fmt;
use std::str::FromStr;

/// Language the generated package sources are written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgrammingLanguage {
    JavaScript,
    TypeScript,
}

impl ProgrammingLanguage {
    pub fn display_name(&self) -> &'static str {
        match self {
            ProgrammingLanguage::JavaScript => "JavaScript",
            ProgrammingLanguage::TypeScript => "TypeScript",
        }
    }

    /// Short code used in flags and template data, `js` or `ts`
    pub fn code(&self) -> &'static str {
        match self {
            ProgrammingLanguage::JavaScript => "js",
            ProgrammingLanguage::TypeScript => "ts",
        }
    }
}

impl fmt::Display for ProgrammingLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for ProgrammingLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "js" | "javascript" => Ok(ProgrammingLanguage::JavaScript),
            "ts" | "typescript" => Ok(ProgrammingLanguage::TypeScript),
            other => Err(format!(
                "unknown language \"{}\" (expected js or ts)",
                other
            )),
        }
    }
}

/// Installation methods the generated package supports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum InstallationMethod {
    /// npm-only distribution for current CKEditor 5 releases
    #[default]
    Current,
    /// Current distribution plus the legacy DLL builds
    CurrentAndLegacy,
}

impl InstallationMethod {
    pub fn display_name(&self) -> &'static str {
        match self {
            InstallationMethod::Current => "current",
            InstallationMethod::CurrentAndLegacy => "current-and-legacy",
        }
    }
}

impl fmt::Display for InstallationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for InstallationMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "current" => Ok(InstallationMethod::Current),
            "current-and-legacy" => Ok(InstallationMethod::CurrentAndLegacy),
            other => Err(format!(
                "unknown installation method \"{}\" (expected current or current-and-legacy)",
                other
            )),
        }
    }
}

/// Package manager wired into the generated scripts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    /// The executable name, as used in generated scripts
    pub fn command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
        }
    }

    /// Separator needed before arguments forwarded through `run` scripts.
    ///
    /// npm swallows flags unless they come after a literal `--`; yarn and
    /// pnpm pass them through as-is.
    pub fn cli_separator(&self) -> &'static str {
        match self {
            PackageManager::Npm => "-- ",
            PackageManager::Yarn | PackageManager::Pnpm => "",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command())
    }
}

impl FromStr for PackageManager {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "npm" => Ok(PackageManager::Npm),
            "yarn" => Ok(PackageManager::Yarn),
            "pnpm" => Ok(PackageManager::Pnpm),
            other => Err(format!(
                "unknown package manager \"{}\" (expected npm, yarn, or pnpm)",
                other
            )),
        }
    }
}
