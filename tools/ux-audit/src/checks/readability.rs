use tracing::debug;

use crate::checks::{CheckContext, CheckResult, Details, Meta, Status};
use crate::page_type;
use crate::signals::RawSignals;
use crate::text_stats;

/// Score reported for a page with no readable text.
const NEUTRAL_SCORE: f64 = 100.0;

pub fn check(signals: &RawSignals, ctx: &CheckContext) -> CheckResult {
    let targets = &ctx.profile.readability;
    let page_type = page_type::classify(&signals.classification);
    let range = page_type.targets(targets);
    // Tolerance widens the upper bound only.
    let upper = range.max + targets.max_tolerance;
    debug!(page_type = %page_type, min = range.min, max = range.max, "classified page");

    let mut meta = Meta {
        page_type: Some(page_type),
        target_min: Some(range.min),
        target_max: Some(range.max),
        ..Meta::default()
    };

    let Some(overall) = text_stats::stats(&signals.body_text) else {
        meta.problematic_content = Some(Vec::new());
        return CheckResult {
            score: NEUTRAL_SCORE,
            status: Status::Pass,
            details: Details::Text(format!("{page_type}: no readable text found.")),
            meta: Some(meta),
        };
    };

    let score = overall.score;
    let passed = score >= range.min && score <= upper;
    let problems = text_stats::diagnose_paragraphs(&signals.paragraphs, range.min, targets);

    let mut details = format!(
        "{page_type}: Flesch Reading Ease {score:.1}. Target {}-{} (passes up to {upper}).",
        range.min, range.max
    );
    if !problems.is_empty() {
        details.push_str(&format!(" {} hard-to-read paragraph(s) flagged.", problems.len()));
    }

    meta.overall_stats = Some(overall);
    meta.problematic_content = Some(problems);

    CheckResult {
        score,
        status: Status::from_pass(passed),
        details: Details::Text(details),
        meta: Some(meta),
    }
}
