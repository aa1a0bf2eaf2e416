use crate::checks::{
    ratio_score, snippet, CheckContext, CheckResult, Details, ElementIssue, Issue, Meta, Status,
};
use crate::signals::RawSignals;

const LABEL_CHARS: usize = 20;

pub fn check(signals: &RawSignals, ctx: &CheckContext) -> CheckResult {
    let min_size = ctx.thresholds().tap_target_min_px;
    let visible: Vec<_> = signals
        .interactive_elements
        .iter()
        .filter(|el| el.is_visible())
        .collect();

    let issues: Vec<Issue> = visible
        .iter()
        .filter(|el| el.width < min_size || el.height < min_size)
        .map(|el| {
            Issue::TapTarget(ElementIssue {
                tag: el.tag.clone(),
                text: snippet(&el.text, LABEL_CHARS),
                width: el.width,
                height: el.height,
            })
        })
        .collect();

    let score = ratio_score(visible.len(), issues.len());
    CheckResult {
        score,
        status: Status::from_pass(score >= ctx.profile.ratio_pass_percent),
        meta: Some(Meta {
            limit: Some(min_size),
            ..Meta::counts(visible.len(), issues.len())
        }),
        details: Details::Issues(issues),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuditProfile;
    use crate::signals::{DeviceContext, ElementBox};

    fn element(width: f64, height: f64) -> ElementBox {
        ElementBox { tag: "A".to_string(), text: "Link".to_string(), width, height }
    }

    fn run(elements: Vec<ElementBox>, device: DeviceContext) -> CheckResult {
        let profile = AuditProfile::standard();
        let signals = RawSignals { interactive_elements: elements, ..Default::default() };
        check(&signals, &CheckContext::new(device, &profile))
    }

    #[test]
    fn no_interactive_elements_is_a_clean_pass() {
        let result = run(vec![], DeviceContext::Mobile);
        assert_eq!(result.score, 100.0);
        assert!(result.passed());
        assert_eq!(result.meta.unwrap().total, Some(0));
    }

    #[test]
    fn small_targets_on_mobile_fail() {
        let mut elements: Vec<ElementBox> = (0..8).map(|_| element(48.0, 48.0)).collect();
        elements.push(element(30.0, 48.0));
        elements.push(element(48.0, 20.0));

        let result = run(elements, DeviceContext::Mobile);
        assert_eq!(result.issue_count(), 2);
        assert_eq!(result.score, 80.0);
        assert!(!result.passed());
    }

    #[test]
    fn desktop_minimum_is_smaller() {
        let result = run(vec![element(30.0, 30.0)], DeviceContext::Desktop);
        assert_eq!(result.score, 100.0);
        assert!(result.passed());
    }

    #[test]
    fn invisible_elements_are_ignored() {
        let result = run(vec![element(0.0, 0.0), element(50.0, 50.0)], DeviceContext::Mobile);
        let meta = result.meta.unwrap();
        assert_eq!(meta.total, Some(1));
        assert_eq!(meta.failed, Some(0));
    }

    #[test]
    fn score_drops_with_each_issue() {
        let mut previous = 101.0;
        for small in 0..=4 {
            let mut elements: Vec<ElementBox> = (0..4).map(|_| element(50.0, 50.0)).collect();
            for el in elements.iter_mut().take(small) {
                el.width = 10.0;
            }
            let score = run(elements, DeviceContext::Mobile).score;
            assert!(score < previous);
            previous = score;
        }
    }
}
