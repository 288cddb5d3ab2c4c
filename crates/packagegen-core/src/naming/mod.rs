//! Package and plugin name handling
//!
//! This module provides:
//! - Tokenization of identifier fragments into word and number runs
//! - Derivation of the case variants templates substitute (camelCase,
//!   PascalCase, spaced out, merged lowercase)
//! - Validation of package, plugin, and global names before anything is
//!   written to disk

pub mod formats;
pub mod tokens;
pub mod validate;

pub use formats::{package_name_formats, FormattedName, FormattedNames, PACKAGE_NAME_PREFIX};
pub use validate::{
    validate_global_name, validate_package_name, validate_plugin_name, NameError,
};
