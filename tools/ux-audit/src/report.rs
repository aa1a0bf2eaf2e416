use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::checks::{CheckKind, CheckResult};

/// The finished audit: one result per check, in evaluation order, plus the
/// overall score. Serializes as a flat JSON object keyed by check name.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditReport {
    results: Vec<(CheckKind, CheckResult)>,
    overall_score: u8,
}

impl AuditReport {
    pub(crate) fn new(results: Vec<(CheckKind, CheckResult)>, overall_score: u8) -> Self {
        Self { results, overall_score }
    }

    pub fn overall_score(&self) -> u8 {
        self.overall_score
    }

    pub fn get(&self, kind: CheckKind) -> Option<&CheckResult> {
        self.results.iter().find(|(k, _)| *k == kind).map(|(_, r)| r)
    }

    pub fn results(&self) -> impl Iterator<Item = (CheckKind, &CheckResult)> {
        self.results.iter().map(|(k, r)| (*k, r))
    }

    pub fn failed(&self) -> impl Iterator<Item = (CheckKind, &CheckResult)> {
        self.results().filter(|(_, r)| !r.passed())
    }

    pub fn all_passed(&self) -> bool {
        self.failed().next().is_none()
    }
}

impl Serialize for AuditReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.results.len() + 1))?;
        for (kind, result) in &self.results {
            map.serialize_entry(kind.key(), result)?;
        }
        map.serialize_entry("overallScore", &self.overall_score)?;
        map.end()
    }
}
