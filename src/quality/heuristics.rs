//! 质量评分启发式规则

use regex::Regex;
use std::sync::LazyLock;

use crate::utils::text::word_count;

fn compile_all(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|pattern| Regex::new(&format!("(?i){}", pattern)).expect("static pattern"))
        .collect()
}

static CREDIBILITY_PHRASES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_all(&[
        r"peer.?reviewed",
        r"published in",
        r"journal",
        r"study shows",
        r"research indicates",
        r"according to experts",
        r"data suggests",
    ])
});

static BIAS_PHRASES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_all(&[
        r"always",
        r"never",
        r"everyone knows",
        r"obviously",
        r"without a doubt",
        r"definitely proves",
    ])
});

static CITATION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_all(&[
        r"\[\d+\]",
        r"\(\d{4}\)",
        r"et al\.",
        r"according to",
        r"source:",
        r"reference:",
        r"study by",
    ])
});

static FACTUAL_PHRASES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_all(&[
        r"research shows",
        r"data indicates",
        r"study found",
        r"analysis reveals",
        r"evidence suggests",
    ])
});

static STRUCTURE_KEYWORDS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_all(&[
        r"introduction",
        r"conclusion",
        r"methodology",
        r"results",
        r"discussion",
        r"background",
        r"summary",
    ])
});

static RECENCY_PHRASES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_all(&[
        r"recent",
        r"latest",
        r"current",
        r"updated",
        r"new",
        r"this year",
        r"recently",
        r"now",
    ])
});

static SPECIFIC_DATA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\d+%|\d+\.\d+|statistics|data|findings").expect("static pattern"));

static YEAR_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(20\d{2})\b").expect("static pattern"));

static QUANTITATIVE_DATA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+%|\d+\.\d+").expect("static pattern"));

static RESEARCH_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)study|research|analysis").expect("static pattern"));

static INLINE_CITATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\d+\]|\(\d{4}\)").expect("static pattern"));

fn clamp_score(score: f64) -> f64 {
    score.clamp(0.0, 10.0)
}

/// 出现的模式个数（每个模式最多计一次）
fn patterns_present(patterns: &[Regex], content: &str) -> usize {
    patterns
        .iter()
        .filter(|pattern| pattern.is_match(content))
        .count()
}

fn years_mentioned(content: &str) -> Vec<i32> {
    YEAR_TOKEN
        .captures_iter(content)
        .filter_map(|captures| captures.get(1))
        .filter_map(|year| year.as_str().parse().ok())
        .collect()
}

pub fn credibility(content: &str, source_url: Option<&str>) -> f64 {
    let mut score = 5.0;

    if let Some(url) = source_url {
        let url = url.to_lowercase();
        if [".edu", ".gov", ".org"].iter().any(|tld| url.contains(tld)) {
            score += 2.0;
        } else if [".com", ".net"].iter().any(|tld| url.contains(tld)) {
            score += 0.5;
        }
    }

    score += 0.3 * patterns_present(&CREDIBILITY_PHRASES, content) as f64;
    score -= 0.2 * patterns_present(&BIAS_PHRASES, content) as f64;

    clamp_score(score)
}

pub fn relevance(content: &str, current_year: i32) -> f64 {
    let mut score = 5.0;

    if SPECIFIC_DATA.is_match(content) {
        score += 1.5;
    }

    if years_mentioned(content)
        .iter()
        .any(|year| *year >= current_year - 2)
    {
        score += 1.0;
    }

    let words = word_count(content);
    if words > 500 {
        score += 1.0;
    } else if words < 100 {
        score -= 1.0;
    }

    clamp_score(score)
}

/// 引用标记出现的总次数
pub fn citation_occurrences(content: &str) -> usize {
    CITATION_PATTERNS
        .iter()
        .map(|pattern| pattern.find_iter(content).count())
        .sum()
}

pub fn accuracy(content: &str) -> f64 {
    let mut score = 6.0;

    let citations = citation_occurrences(content);
    if citations > 5 {
        score += 2.0;
    } else if citations > 2 {
        score += 1.0;
    }

    score += 0.3 * patterns_present(&FACTUAL_PHRASES, content) as f64;

    clamp_score(score)
}

pub fn completeness(content: &str) -> f64 {
    let mut score = 5.0;

    let words = word_count(content);
    if words > 1000 {
        score += 2.0;
    } else if words > 500 {
        score += 1.0;
    } else if words < 100 {
        score -= 2.0;
    }

    score += 0.5 * patterns_present(&STRUCTURE_KEYWORDS, content) as f64;

    clamp_score(score)
}

pub fn timeliness(content: &str, current_year: i32) -> f64 {
    let mut score = 5.0;

    if let Some(most_recent) = years_mentioned(content).into_iter().max() {
        let years_old = current_year - most_recent;
        score += match years_old {
            i32::MIN..=1 => 3.0,
            2..=3 => 1.0,
            4..=5 => 0.0,
            _ => -2.0,
        };
    }

    score += 0.2 * patterns_present(&RECENCY_PHRASES, content) as f64;

    clamp_score(score)
}

pub fn assessment_notes(content: &str, source_url: Option<&str>) -> Vec<String> {
    let mut notes = vec![format!("Content length: {} words", word_count(content))];

    if let Some(url) = source_url {
        notes.push(format!("Source URL: {}", url));
    }
    if QUANTITATIVE_DATA.is_match(content) {
        notes.push("Contains quantitative data".to_string());
    }
    if RESEARCH_REFERENCE.is_match(content) {
        notes.push("References research or studies".to_string());
    }

    let citations = INLINE_CITATION.find_iter(content).count();
    if citations > 0 {
        notes.push(format!("Contains {} citations", citations));
    }

    notes
}
