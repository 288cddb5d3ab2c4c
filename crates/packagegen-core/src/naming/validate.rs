//! Validation of package, plugin, and global names

use thiserror::Error;

use crate::naming::formats::PACKAGE_NAME_PREFIX;

/// npm refuses package names longer than this
const MAX_PACKAGE_NAME_LENGTH: usize = 214;

/// Characters that survive `encodeURIComponent` but are still rejected by the
/// npm registry
const DISALLOWED_URL_SAFE_CHARS: &[char] = &['~', '\'', '!', '(', ')', '*'];

/// A name rejected before any formatting or file writing happens
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("the package name can not be an empty string")]
    Empty,
    #[error("the package name can not be longer than 214 characters")]
    TooLong,
    #[error("the package name can not contain capital letters")]
    CapitalLetters,
    #[error("the package name must match the @scope/ckeditor5-feature pattern")]
    Pattern,
    #[error("the package name can not contain non-URL-safe characters")]
    UnsafeCharacters,
    #[error("the plugin name must start with a letter and contain only letters and digits")]
    PluginName,
    #[error("the global name must be one or more dot-separated JavaScript identifiers")]
    GlobalName,
}

/// Check a package name against the npm rules the generator relies on.
///
/// Checks run in a fixed order (emptiness, length, capital letters, pattern,
/// character set) and the first failure wins.
pub fn validate_package_name(name: &str) -> Result<(), NameError> {
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    if name.len() > MAX_PACKAGE_NAME_LENGTH {
        return Err(NameError::TooLong);
    }
    if name.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(NameError::CapitalLetters);
    }

    let (scope, feature) = split_package_name(name).ok_or(NameError::Pattern)?;
    if scope.is_empty() || feature.is_empty() {
        return Err(NameError::Pattern);
    }
    for part in [scope, feature] {
        if !part.chars().all(is_url_safe) {
            return Err(NameError::UnsafeCharacters);
        }
    }

    Ok(())
}

/// Check a plugin-name override: a JavaScript class name, letter first.
pub fn validate_plugin_name(name: &str) -> Result<(), NameError> {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return Err(NameError::PluginName),
    }

    if chars.all(|c| c.is_ascii_alphanumeric()) {
        Ok(())
    } else {
        Err(NameError::PluginName)
    }
}

/// Check a global (UMD) export name: dot-separated JavaScript identifiers.
pub fn validate_global_name(name: &str) -> Result<(), NameError> {
    if name.is_empty() || !name.split('.').all(is_js_identifier) {
        return Err(NameError::GlobalName);
    }

    Ok(())
}

/// Split `@scope/ckeditor5-feature` into its scope and feature segments
fn split_package_name(name: &str) -> Option<(&str, &str)> {
    let rest = name.strip_prefix('@')?;
    let (scope, package) = rest.split_once('/')?;
    let feature = package.strip_prefix(PACKAGE_NAME_PREFIX)?;

    Some((scope, feature))
}

/// URL-safe for npm: alphanumerics plus the characters `encodeURIComponent`
/// leaves alone, minus the ones npm additionally rejects
fn is_url_safe(c: char) -> bool {
    let url_safe = c.is_ascii_alphanumeric()
        || matches!(c, '-' | '_' | '.' | '!' | '~' | '*' | '\'' | '(' | ')');

    url_safe && !DISALLOWED_URL_SAFE_CHARS.contains(&c)
}

/// A single JavaScript identifier: letter, `_`, or `$` first, then letters,
/// digits, `_`, or `$`
fn is_js_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
