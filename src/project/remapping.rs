//! Import remappings (`prefix=target`).

use super::error::ProjectError;
use super::paths::{normalize, to_slash};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// A rule rewriting an import path prefix to a directory, relative to the
/// project root. An optional context limits the rule to importing files
/// under that directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Remapping {
    pub context: Option<String>,
    pub prefix: String,
    pub target: String,
}

impl Remapping {
    pub fn new(prefix: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            context: None,
            prefix: prefix.into(),
            target: target.into(),
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Parse `prefix=target` or `context:prefix=target`.
    pub fn parse(text: &str) -> Result<Self, ProjectError> {
        let invalid = || ProjectError::InvalidRemapping(text.to_string());
        let (lhs, target) = text.trim().split_once('=').ok_or_else(invalid)?;
        let (context, prefix) = match lhs.split_once(':') {
            Some((context, prefix)) => (Some(context.trim()), prefix.trim()),
            None => (None, lhs.trim()),
        };
        let target = target.trim();
        if prefix.is_empty() || target.is_empty() {
            return Err(invalid());
        }
        Ok(Self {
            context: context.filter(|c| !c.is_empty()).map(str::to_string),
            prefix: prefix.to_string(),
            target: target.to_string(),
        })
    }

    /// Whether the rule applies to `importer` (always, without a context).
    pub fn applies_in(&self, importer: &Path, root: &Path) -> bool {
        match &self.context {
            Some(context) => importer.starts_with(normalize(&root.join(context))),
            None => true,
        }
    }

    /// Rewrite an import string, if it starts with this rule's prefix.
    pub fn resolve(&self, import: &str, root: &Path) -> Option<PathBuf> {
        let rest = import.strip_prefix(self.prefix.as_str())?;
        Some(normalize(&root.join(format!("{}{}", self.target, rest))))
    }

    /// Directory the rule points at.
    pub fn target_dir(&self, root: &Path) -> PathBuf {
        normalize(&root.join(&self.target))
    }

    /// Import string for a file under the rule's target directory.
    pub fn import_for(&self, file: &Path, root: &Path) -> Option<String> {
        let rest = file.strip_prefix(self.target_dir(root)).ok()?;
        let rest = to_slash(rest);
        if self.prefix.ends_with('/') {
            Some(format!("{}{}", self.prefix, rest))
        } else {
            Some(format!("{}/{}", self.prefix, rest))
        }
    }
}

impl FromStr for Remapping {
    type Err = ProjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Remapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(context) = &self.context {
            write!(f, "{context}:")?;
        }
        write!(f, "{}={}", self.prefix, self.target)
    }
}

/// Parse the contents of a `remappings.txt` file.
///
/// Blank lines and `#` comments are ignored; invalid lines are logged and
/// skipped.
pub fn parse_remappings(text: &str) -> Vec<Remapping> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| match Remapping::parse(line) {
            Ok(remapping) => Some(remapping),
            Err(err) => {
                tracing::warn!("skipping remapping: {}", err);
                None
            }
        })
        .collect()
}
