//! Run summary written next to the artifacts.

use serde::Serialize;

use crate::{Canonical, FixtureClass};

/// Contents of `manifest.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Manifest {
    pub protocol: u8,
    pub captured_at: f64,
    pub fixtures: Vec<FixtureReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FixtureReport {
    pub name: String,
    pub class: FixtureClass,
    /// Binary artifact file name.
    pub artifact: String,
    /// Canonical text artifact file name.
    pub line_artifact: String,
    pub bytes: usize,
    pub lines: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedReport {
    pub index: usize,
    pub reason: String,
}

impl FixtureReport {
    pub(crate) fn skipped_from(canonical: &Canonical) -> Vec<SkippedReport> {
        canonical
            .skipped
            .iter()
            .map(|s| SkippedReport {
                index: s.index,
                reason: s.reason.to_string(),
            })
            .collect()
    }
}
