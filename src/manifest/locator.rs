//! Locating requirement declarations in Elm manifests
//!
//! Both schema variants declare a dependency as `"name": "requirement"`.
//! elm-package.json keeps them in one flat map; elm.json nests them under
//! `dependencies.direct`, `dependencies.indirect` and `test-dependencies`.
//! Either way the declaration text is the same, so one pattern serves both.

use crate::error::UpdateError;
use regex::Regex;
use std::ops::Range;

/// Build the declaration pattern for one dependency and requirement.
///
/// Capture group 1 holds the quoted requirement value. The closing quote of
/// the name is part of the pattern, so `"elm/html"` never matches the key
/// `"elm/html-lang"`.
fn declaration_regex(dependency: &str, requirement: &str) -> Result<Regex, UpdateError> {
    let pattern = format!(
        r#""{}"\s*:\s*("{}")"#,
        regex::escape(dependency),
        regex::escape(requirement)
    );
    Regex::new(&pattern).map_err(|e| UpdateError::invalid_pattern(dependency, e.to_string()))
}

/// Find the first declaration of `dependency` whose requirement is exactly
/// `requirement`.
///
/// Returns the byte range of the requirement value, quotes included, or
/// `None` when the manifest does not declare that pairing.
pub fn locate(
    content: &str,
    dependency: &str,
    requirement: &str,
) -> Result<Option<Range<usize>>, UpdateError> {
    let re = declaration_regex(dependency, requirement)?;
    Ok(re
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.range()))
}

/// Find every declaration of `dependency` with requirement `requirement`,
/// in document order.
pub fn locate_all(
    content: &str,
    dependency: &str,
    requirement: &str,
) -> Result<Vec<Range<usize>>, UpdateError> {
    let re = declaration_regex(dependency, requirement)?;
    Ok(re
        .captures_iter(content)
        .filter_map(|caps| caps.get(1).map(|m| m.range()))
        .collect())
}
