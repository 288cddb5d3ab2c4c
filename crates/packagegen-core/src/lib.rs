//! Packagegen Core - Shared library for scaffolding CKEditor 5 plugin packages
//!
//! This library implements the pipeline behind the `ckeditor5-package-gen`
//! CLI: package-name validation, derivation of the case variants templates
//! substitute, template-set resolution, and the materializer that writes the
//! generated package to disk.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Naming** - Pure functions for tokenizing identifier
//!   fragments, deriving case variants, and validating names
//! - **Layer 2: Templates** - Template-set resolution, restricted `<%= ... %>`
//!   expression evaluation, and the root-merging materializer
//! - **Layer 3: Generation** - `generate` running one complete scaffold for a
//!   CLI front-end
//!
//! # Example Usage
//!
//! ```ignore
//! use packagegen_core::{generate, versions, GeneratorOptions};
//!
//! let options = GeneratorOptions {
//!     package_name: "@acme/ckeditor5-highlight".to_string(),
//!     plugin_name: None,
//!     language: packagegen_core::ProgrammingLanguage::TypeScript,
//!     installation_method: Default::default(),
//!     package_manager: Default::default(),
//!     global_name: None,
//!     output_dir: ".".into(),
//!     template_dir: "templates".into(),
//!     dependency_versions: versions::default_versions(),
//! };
//!
//! let report = generate(&options)?;
//! println!("created {} files", report.written_files.len());
//! ```

pub mod generate;
pub mod naming;
pub mod options;
pub mod templates;
pub mod versions;

// Re-export main types for convenience
pub use generate::{generate, GenerateReport, GeneratorOptions};
pub use naming::{package_name_formats, FormattedName, FormattedNames, NameError};
pub use options::{InstallationMethod, PackageManager, ProgrammingLanguage};
pub use templates::{materialize, RenderError, TemplateData, TemplateSet};

/// Directory holding the template roots when the caller does not point
/// somewhere else, relative to the working directory
pub const DEFAULT_TEMPLATE_DIR: &str = "templates";
