//! Weighted reduction of all check results to one 0-100 score.

use crate::checks::{layout_shift, CheckKind, CheckResult};
use crate::config::CheckWeights;

pub struct ScoreAggregator<'a> {
    weights: &'a CheckWeights,
}

impl<'a> ScoreAggregator<'a> {
    pub fn new(weights: &'a CheckWeights) -> Self {
        Self { weights }
    }

    /// `round(100 * sum(weight * contribution) / sum(weight * 100))`.
    ///
    /// With every weight at zero there is nothing to lose points on, so the
    /// score is 100.
    pub fn overall_score(&self, results: &[(CheckKind, CheckResult)]) -> u8 {
        let mut earned = 0.0;
        let mut possible = 0.0;
        for (kind, result) in results {
            let weight = self.weights.weight(*kind).max(0.0);
            earned += weight * contribution(*kind, result);
            possible += weight * 100.0;
        }

        if possible <= 0.0 {
            return 100;
        }
        (100.0 * earned / possible).round().clamp(0.0, 100.0) as u8
    }
}

/// How many of its 100 possible points a check earns.
pub fn contribution(kind: CheckKind, result: &CheckResult) -> f64 {
    if kind.is_binary() {
        return if result.passed() { 100.0 } else { 0.0 };
    }
    let raw = match kind {
        CheckKind::LayoutShift => layout_shift::mapped_score(result.score),
        _ => result.score,
    };
    if raw.is_nan() {
        return 0.0;
    }
    raw.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::{Details, Status};

    fn result(score: f64, passed: bool) -> CheckResult {
        CheckResult {
            score,
            status: Status::from_pass(passed),
            details: Details::Text(String::new()),
            meta: None,
        }
    }

    fn all(score: f64, passed: bool) -> Vec<(CheckKind, CheckResult)> {
        CheckKind::ALL
            .iter()
            .map(|k| {
                let score = if *k == CheckKind::LayoutShift { 0.0 } else { score };
                (*k, result(score, passed))
            })
            .collect()
    }

    #[test]
    fn perfect_page_scores_100() {
        let weights = CheckWeights::default();
        assert_eq!(ScoreAggregator::new(&weights).overall_score(&all(100.0, true)), 100);
    }

    #[test]
    fn binary_checks_ignore_their_score_field() {
        let r = result(37.0, true);
        assert_eq!(contribution(CheckKind::Viewport, &r), 100.0);
        let r = result(100.0, false);
        assert_eq!(contribution(CheckKind::StickyHeader, &r), 0.0);
    }

    #[test]
    fn continuous_checks_use_their_score_even_when_failing() {
        assert_eq!(contribution(CheckKind::TapTargets, &result(80.0, false)), 80.0);
    }

    #[test]
    fn readability_is_clamped() {
        assert_eq!(contribution(CheckKind::Readability, &result(-35.2, false)), 0.0);
        assert_eq!(contribution(CheckKind::Readability, &result(117.2, false)), 100.0);
    }

    #[test]
    fn cls_contribution_uses_mapped_score() {
        assert_eq!(contribution(CheckKind::LayoutShift, &result(0.1, true)), 90.0);
        assert_eq!(contribution(CheckKind::LayoutShift, &result(0.3, false)), 0.0);
    }

    #[test]
    fn weighted_formula() {
        // Everything perfect except a failed viewport (weight 3 of 24).
        let mut results = all(100.0, true);
        for (kind, r) in results.iter_mut() {
            if *kind == CheckKind::Viewport {
                r.status = Status::Fail;
            }
        }
        let weights = CheckWeights::default();
        // 100 * 2100 / 2400 = 87.5, rounds half away from zero.
        assert_eq!(ScoreAggregator::new(&weights).overall_score(&results), 88);
    }

    #[test]
    fn zero_weights_score_100() {
        let weights = CheckWeights {
            cls: 0.0,
            tap_targets: 0.0,
            text_size: 0.0,
            viewport: 0.0,
            horizontal_scroll: 0.0,
            sticky_header: 0.0,
            readability: 0.0,
            navigation_depth: 0.0,
            intrusive_interstitials: 0.0,
            image_stability: 0.0,
        };
        assert_eq!(ScoreAggregator::new(&weights).overall_score(&all(0.0, false)), 100);
    }
}
