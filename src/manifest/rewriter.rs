//! Format-preserving requirement rewriting
//!
//! Only the quoted requirement value of a located declaration is replaced;
//! every other byte of the manifest is copied through untouched.

use crate::error::UpdateError;
use crate::manifest::locator::locate_all;

/// Outcome of rewriting one manifest for one requirement pairing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewrite {
    /// Nothing to do: the pairing is not declared, or old equals new
    Unchanged,
    /// New manifest content
    Updated(String),
}

impl Rewrite {
    /// Returns true if the content changed
    pub fn is_updated(&self) -> bool {
        matches!(self, Rewrite::Updated(_))
    }

    /// Returns the new content, or `original` when unchanged
    pub fn into_content(self, original: &str) -> String {
        match self {
            Rewrite::Updated(content) => content,
            Rewrite::Unchanged => original.to_string(),
        }
    }
}

/// Replace the requirement of `dependency` from `old_requirement` to
/// `new_requirement`.
///
/// Every declaration of the exact (name, old requirement) pair is rewritten,
/// which covers a package listed in both the main and test groups of an
/// elm.json.
pub fn rewrite(
    content: &str,
    dependency: &str,
    old_requirement: &str,
    new_requirement: &str,
) -> Result<Rewrite, UpdateError> {
    let ranges = locate_all(content, dependency, old_requirement)?;
    if ranges.is_empty() || old_requirement == new_requirement {
        return Ok(Rewrite::Unchanged);
    }

    let replacement = format!("\"{}\"", new_requirement);
    let mut updated = String::with_capacity(content.len() + ranges.len() * replacement.len());
    let mut cursor = 0;
    for range in ranges {
        updated.push_str(&content[cursor..range.start]);
        updated.push_str(&replacement);
        cursor = range.end;
    }
    updated.push_str(&content[cursor..]);

    Ok(Rewrite::Updated(updated))
}
