pub mod checks;
pub mod config;
pub mod error;
pub mod page_type;
pub mod report;
pub mod reporter;
pub mod scoring;
pub mod signals;
pub mod text_stats;

use tracing::{debug, info};

use checks::{CheckContext, CheckKind};
use config::AuditProfile;
use report::AuditReport;
use scoring::ScoreAggregator;
use signals::{DeviceContext, RawSignals};

/// Runs every check over one signal bundle and scores the result.
///
/// An `Auditor` holds nothing but its profile, so one instance can serve any
/// number of audits, including from several threads at once.
#[derive(Debug, Clone, Default)]
pub struct Auditor {
    profile: AuditProfile,
}

impl Auditor {
    pub fn new(profile: AuditProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &AuditProfile {
        &self.profile
    }

    pub fn run(&self, signals: &RawSignals, device: DeviceContext) -> AuditReport {
        let ctx = CheckContext::new(device, &self.profile);

        let mut results = Vec::with_capacity(CheckKind::ALL.len());
        for kind in CheckKind::ALL {
            let result = (kind.evaluator())(signals, &ctx);
            debug!(check = kind.key(), status = ?result.status, score = result.score, "check evaluated");
            results.push((kind, result));
        }

        let overall = ScoreAggregator::new(&self.profile.weights).overall_score(&results);
        info!(device = %device, overall_score = overall, "audit complete");

        AuditReport::new(results, overall)
    }
}

/// Audit one page render with the standard profile.
pub fn run_audit(signals: &RawSignals, device: DeviceContext) -> AuditReport {
    Auditor::default().run(signals, device)
}
