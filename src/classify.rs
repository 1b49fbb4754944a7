//! Classify scanned files into keystem groups by filename pattern.

use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;
use thiserror::Error;

/// Pattern the original generator used to recognize test sources.
pub const DEFAULT_TEST_PATTERN: &str = r"(Test|_test|_fixture)\.cpp$";

/// Keystem for test sources under the default rule set.
pub const TEST_KEYSTEM: &str = "TESTSOURCES";

/// Keystem that catches everything else under the default rule set.
pub const NORMAL_KEYSTEM: &str = "NORMSOURCES";

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("invalid classifier pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },

    #[error("{0}: file matches no keystem rule and no fallback is configured")]
    Unclassified(PathBuf),
}

/// One classification rule: files matching `pattern` belong to `keystem`.
#[derive(Debug)]
pub struct ClassifyRule {
    pub keystem: String,
    pub pattern: Regex,
}

/// Partitions file paths into keystem groups.
///
/// Rules are tried in order and the first match wins. Files matching no
/// rule go to the fallback keystem; without a fallback they are an
/// error, never a silent drop.
#[derive(Debug)]
pub struct Classifier {
    rules: Vec<ClassifyRule>,
    fallback: Option<String>,
}

impl Classifier {
    pub fn new(rules: Vec<ClassifyRule>, fallback: Option<String>) -> Self {
        Self { rules, fallback }
    }

    /// The original tool's split: test-looking files under `TESTSOURCES`,
    /// everything else under `NORMSOURCES`.
    pub fn with_test_pattern(test_pattern: &str) -> Result<Self, ClassifyError> {
        let pattern = Regex::new(test_pattern).map_err(|source| {
            ClassifyError::InvalidPattern {
                pattern: test_pattern.to_string(),
                source,
            }
        })?;
        Ok(Self::new(
            vec![ClassifyRule {
                keystem: TEST_KEYSTEM.to_string(),
                pattern,
            }],
            Some(NORMAL_KEYSTEM.to_string()),
        ))
    }

    /// Partition `files` into keystem groups.
    ///
    /// Every rule keystem (and the fallback) appears in the result even
    /// when it matched nothing, so downstream rendering sees the full
    /// category list.
    pub fn classify(
        &self,
        files: impl IntoIterator<Item = PathBuf>,
    ) -> Result<BTreeMap<String, BTreeSet<PathBuf>>, ClassifyError> {
        let mut groups: BTreeMap<String, BTreeSet<PathBuf>> = BTreeMap::new();
        for rule in &self.rules {
            groups.entry(rule.keystem.clone()).or_default();
        }
        if let Some(fallback) = &self.fallback {
            groups.entry(fallback.clone()).or_default();
        }

        for file in files {
            let text = file.to_string_lossy();
            let keystem = self
                .rules
                .iter()
                .find(|rule| rule.pattern.is_match(&text))
                .map(|rule| rule.keystem.as_str())
                .or(self.fallback.as_deref());
            match keystem {
                Some(keystem) => {
                    groups
                        .entry(keystem.to_string())
                        .or_default()
                        .insert(file);
                }
                None => return Err(ClassifyError::Unclassified(file)),
            }
        }
        Ok(groups)
    }
}
