//! Flesch reading-ease statistics and paragraph-level diagnosis.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use crate::config::ReadabilityTargets;

static SENTENCE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());

static NON_LETTER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z]").unwrap());

static SILENT_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:[^laeiouy]es|ed|[^laeiouy]e)$").unwrap());

static LEADING_Y: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^y").unwrap());

static VOWEL_GROUP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[aeiouy]+").unwrap());

const PARAGRAPH_SNIPPET_CHARS: usize = 200;
const MAX_EXAMPLE_WORDS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStats {
    /// Flesch reading ease. Not clamped: can be negative or above 100.
    pub score: f64,
    #[serde(rename = "ASL")]
    pub asl: f64,
    #[serde(rename = "ASW")]
    pub asw: f64,
    pub sentence_count: usize,
    pub word_count: usize,
    pub syllable_count: usize,
}

/// Compute reading-ease statistics, or `None` for blank text.
pub fn stats(text: &str) -> Option<TextStats> {
    if text.trim().is_empty() {
        return None;
    }

    let sentence_count = SENTENCE_BREAK
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .count()
        .max(1);

    let words: Vec<&str> = text.split_whitespace().collect();
    let word_count = words.len().max(1);
    let syllable_count: usize = words.iter().map(|w| count_syllables(w)).sum();

    let asl = word_count as f64 / sentence_count as f64;
    let asw = syllable_count as f64 / word_count as f64;

    Some(TextStats {
        score: flesch_reading_ease(asl, asw),
        asl,
        asw,
        sentence_count,
        word_count,
        syllable_count,
    })
}

pub fn flesch_reading_ease(asl: f64, asw: f64) -> f64 {
    206.835 - 1.015 * asl - 84.6 * asw
}

/// Heuristic English syllable count; never less than 1.
pub fn count_syllables(word: &str) -> usize {
    let lower = word.to_lowercase();
    let letters = NON_LETTER.replace_all(&lower, "");
    if letters.len() <= 3 {
        return 1;
    }

    let trimmed = SILENT_SUFFIX.replace(&letters, "");
    let trimmed = LEADING_Y.replace(&trimmed, "");
    VOWEL_GROUP.find_iter(&trimmed).count().max(1)
}

/// A paragraph that reads harder than the page's content type allows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphIssue {
    pub text: String,
    pub score: f64,
    pub reason: String,
}

/// Score every paragraph long enough to judge and return the worst offenders
/// (lowest score first) that fall below `min_score`.
pub fn diagnose_paragraphs(
    paragraphs: &[String],
    min_score: f64,
    targets: &ReadabilityTargets,
) -> Vec<ParagraphIssue> {
    let mut issues: Vec<ParagraphIssue> = paragraphs
        .iter()
        .map(|p| p.trim())
        .filter(|p| p.chars().count() > targets.paragraph_min_chars)
        .filter_map(|p| {
            let paragraph_stats = stats(p)?;
            if paragraph_stats.score >= min_score {
                return None;
            }
            Some(ParagraphIssue {
                text: paragraph_snippet(p),
                score: paragraph_stats.score,
                reason: failure_reason(p, &paragraph_stats, targets),
            })
        })
        .collect();

    issues.sort_by(|a, b| a.score.total_cmp(&b.score));
    issues.truncate(targets.max_paragraph_issues);
    issues
}

fn failure_reason(paragraph: &str, stats: &TextStats, targets: &ReadabilityTargets) -> String {
    let mut causes = Vec::new();

    if stats.asl > targets.long_sentence_asl {
        causes.push(format!("long sentences (avg {:.1} words)", stats.asl));
    }

    if stats.asw > targets.complex_vocabulary_asw {
        let examples = complex_words(paragraph);
        if examples.is_empty() {
            causes.push("complex vocabulary".to_string());
        } else {
            let quoted: Vec<String> = examples.iter().map(|w| format!("\"{w}\"")).collect();
            causes.push(format!("complex vocabulary (e.g. {})", quoted.join(", ")));
        }
    }

    if causes.is_empty() {
        format!("Hard to read: low reading ease ({:.1})", stats.score)
    } else {
        format!("Hard to read: {}", causes.join(" and "))
    }
}

/// Up to three distinct long words with four or more syllables, in order of appearance.
fn complex_words(paragraph: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for raw in paragraph.split_whitespace() {
        let lower = raw.to_lowercase();
        let word = NON_LETTER.replace_all(&lower, "");
        if word.len() > 6 && count_syllables(&word) >= 4 && !found.iter().any(|f| f == &*word) {
            found.push(word.into_owned());
            if found.len() == MAX_EXAMPLE_WORDS {
                break;
            }
        }
    }
    found
}

fn paragraph_snippet(paragraph: &str) -> String {
    if paragraph.chars().count() <= PARAGRAPH_SNIPPET_CHARS {
        return paragraph.to_string();
    }
    let head: String = paragraph.chars().take(PARAGRAPH_SNIPPET_CHARS).collect();
    format!("{}...", head.trim_end())
}
