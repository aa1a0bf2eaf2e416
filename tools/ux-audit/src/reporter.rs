use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::checks::{CheckKind, CheckResult, Details, Issue};
use crate::report::AuditReport;
use crate::signals::DeviceContext;

/// Issue lines printed per check before eliding the rest.
const MAX_PRINTED_ISSUES: usize = 10;

pub fn print_header(source: &str, device: DeviceContext) {
    println!(
        "{}",
        format!("\n=== UX Audit: {source} ({device}) ===\n").if_supports_color(Stdout, |s| s.bold())
    );
}

pub fn print_result(kind: CheckKind, result: &CheckResult) {
    let (mark, status) = if result.passed() {
        (
            "\u{2713}".if_supports_color(Stdout, |s| s.green()).to_string(),
            "pass".if_supports_color(Stdout, |s| s.green()).to_string(),
        )
    } else {
        (
            "\u{2717}".if_supports_color(Stdout, |s| s.red()).to_string(),
            "fail".if_supports_color(Stdout, |s| s.red()).to_string(),
        )
    };
    match score_label(kind, result) {
        Some(score) => println!("{} {}: {} ({})", mark, kind.title(), status, score),
        None => println!("{} {}: {}", mark, kind.title(), status),
    }

    for line in detail_lines(result) {
        println!("  {}", line.if_supports_color(Stdout, |s| s.dimmed()));
    }
}

pub fn print_summary(report: &AuditReport) {
    let total = report.results().count();
    let failed = report.failed().count();
    let score = report.overall_score();

    println!("{}", "\n--- Summary ---".if_supports_color(Stdout, |s| s.bold()));
    let line = format!("\nOverall score: {score}/100 ({}/{} checks passed)\n", total - failed, total);
    if score >= 80 {
        println!("{}", line.if_supports_color(Stdout, |s| s.green()));
    } else if score >= 50 {
        println!("{}", line.if_supports_color(Stdout, |s| s.yellow()));
    } else {
        println!("{}", line.if_supports_color(Stdout, |s| s.red()));
    }
}

pub fn print_report(source: &str, device: DeviceContext, report: &AuditReport) {
    print_header(source, device);
    for (kind, result) in report.results() {
        print_result(kind, result);
    }
    print_summary(report)
}

fn score_label(kind: CheckKind, result: &CheckResult) -> Option<String> {
    match kind {
        CheckKind::LayoutShift => Some(format!("CLS {:.4}", result.score)),
        CheckKind::Readability => Some(format!("Flesch {:.1}", result.score)),
        CheckKind::NavigationDepth => Some(format!("{:.1}% shallow", result.score)),
        _ if kind.is_binary() => None,
        _ => Some(format!("{:.0}/100", result.score)),
    }
}

fn detail_lines(result: &CheckResult) -> Vec<String> {
    let mut lines = match &result.details {
        Details::Text(text) => vec![text.clone()],
        Details::Issues(issues) => {
            let mut lines: Vec<String> =
                issues.iter().take(MAX_PRINTED_ISSUES).map(issue_line).collect();
            if issues.len() > MAX_PRINTED_ISSUES {
                lines.push(format!("... and {} more", issues.len() - MAX_PRINTED_ISSUES));
            }
            lines
        }
    };

    if let Some(problems) = result.meta.as_ref().and_then(|m| m.problematic_content.as_ref()) {
        for p in problems {
            lines.push(format!("[{:.1}] {}: \"{}\"", p.score, p.reason, p.text));
        }
    }
    lines
}

fn issue_line(issue: &Issue) -> String {
    match issue {
        Issue::TapTarget(el) => format!(
            "{} ({}x{}): \"{}\"",
            el.tag,
            el.width.round(),
            el.height.round(),
            el.text
        ),
        Issue::TextSize(el) => format!("{} ({}px): \"{}\"", el.tag, el.font_size, el.text),
        Issue::Image(img) => format!("missing dimensions: {}", img.src),
    }
}
