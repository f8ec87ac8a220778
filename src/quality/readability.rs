use crate::types::quality::{ReadabilityReport, StructureReport};

/// 基于平均句长的简易可读性评估
pub fn check_readability(text: &str) -> ReadabilityReport {
    let total_sentences = text.split('.').count();
    let total_words = text.split_whitespace().count();

    if total_words == 0 {
        return ReadabilityReport {
            readability: "insufficient_content".to_string(),
            avg_words_per_sentence: 0.0,
            total_words,
            total_sentences,
        };
    }

    let avg = total_words as f64 / total_sentences as f64;
    let readability = if avg <= 15.0 {
        "easy"
    } else if avg <= 20.0 {
        "moderate"
    } else {
        "difficult"
    };

    ReadabilityReport {
        readability: readability.to_string(),
        avg_words_per_sentence: (avg * 10.0).round() / 10.0,
        total_words,
        total_sentences,
    }
}

/// 统计Markdown标题与列表项
pub fn check_structure(text: &str) -> StructureReport {
    let lines: Vec<&str> = text.split('\n').collect();
    let heading_count = lines.iter().filter(|line| line.starts_with('#')).count();
    let bullet_points = lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| line.starts_with('-') || line.starts_with('*'))
        .count();

    StructureReport {
        has_headings: heading_count > 0,
        heading_count,
        bullet_points,
        total_lines: lines.len(),
    }
}
