use super::*;

fn filler(words: usize) -> String {
    vec!["alpha"; words].join(" ")
}

#[test]
fn test_assess_rejects_empty_content() {
    let mut scorer = QualityScorer::with_reference_year(2025);
    assert_eq!(
        scorer.assess("", None, None),
        Err(QualityError::EmptyContent)
    );
    assert!(scorer.history().is_empty());
}

#[test]
fn test_long_recent_content_is_timely() {
    let scorer = QualityScorer::with_reference_year(2025);
    let content = format!("{} In 2024 a study shows growth.", filler(1194));
    let metrics = scorer.evaluate(&content, None);

    assert!(metrics.timeliness_score >= 8.0);
    let mean = (metrics.credibility_score
        + metrics.relevance_score
        + metrics.accuracy_score
        + metrics.completeness_score
        + metrics.timeliness_score)
        / 5.0;
    assert!((metrics.overall_score - mean).abs() < 1e-9);
}

#[test]
fn test_credibility_domain_bonus() {
    let scorer = QualityScorer::with_reference_year(2025);
    let edu = scorer.evaluate("plain words", Some("https://cs.mit.edu/paper"));
    let com = scorer.evaluate("plain words", Some("https://blog.example.com"));
    let none = scorer.evaluate("plain words", None);

    assert!((edu.credibility_score - 7.0).abs() < 1e-9);
    assert!((com.credibility_score - 5.5).abs() < 1e-9);
    assert!((none.credibility_score - 5.0).abs() < 1e-9);
}

#[test]
fn test_phrases_count_once_per_pattern() {
    let scorer = QualityScorer::with_reference_year(2025);
    let repeated = scorer.evaluate("journal journal journal", None);
    assert!((repeated.credibility_score - 5.3).abs() < 1e-9);

    let biased = scorer.evaluate("always never obviously", None);
    assert!((biased.credibility_score - 4.4).abs() < 1e-9);
}

#[test]
fn test_accuracy_counts_every_citation_marker() {
    let scorer = QualityScorer::with_reference_year(2025);
    let three = scorer.evaluate("[1] [2] [3]", None);
    assert!((three.accuracy_score - 7.0).abs() < 1e-9);

    let six = scorer.evaluate("[1] [2] [3] [4] [5] [6]", None);
    assert!((six.accuracy_score - 8.0).abs() < 1e-9);
}

#[test]
fn test_completeness_penalizes_short_content() {
    let scorer = QualityScorer::with_reference_year(2025);
    let metrics = scorer.evaluate("introduction and conclusion", None);
    assert!((metrics.completeness_score - 4.0).abs() < 1e-9);
}

#[test]
fn test_old_sources_lose_timeliness() {
    let scorer = QualityScorer::with_reference_year(2025);
    let metrics = scorer.evaluate("figures from 2010", None);
    assert!((metrics.timeliness_score - 3.0).abs() < 1e-9);
}

#[test]
fn test_scores_stay_in_range() {
    let scorer = QualityScorer::with_reference_year(2025);
    let samples = [
        "x".to_string(),
        "always never obviously everyone knows without a doubt definitely proves".to_string(),
        format!(
            "{} peer reviewed journal study shows research indicates 2025 [1] [2] [3] [4] [5] [6]",
            filler(1200)
        ),
    ];
    for sample in samples {
        let metrics = scorer.evaluate(&sample, Some("https://data.gov"));
        for dimension in QualityDimension::ALL {
            let score = metrics.score(dimension);
            assert!((0.0..=10.0).contains(&score), "{:?} = {}", dimension, score);
        }
        assert!((0.0..=10.0).contains(&metrics.overall_score));
    }
}

#[test]
fn test_recommendations_for_weak_content() {
    let scorer = QualityScorer::with_reference_year(2025);
    let metrics = scorer.evaluate("short note", None);
    assert!(
        metrics
            .recommendations
            .contains(&QualityDimension::Completeness.recommendation().to_string())
    );
    assert!(
        !metrics
            .recommendations
            .contains(&"Content meets quality standards".to_string())
    );
}

#[test]
fn test_recommendations_when_all_dimensions_pass() {
    let scorer = QualityScorer::with_reference_year(2025);
    let content = format!("Introduction data 2025 conclusion {}", filler(150));
    let metrics = scorer.evaluate(&content, Some("https://mit.edu"));
    assert_eq!(
        metrics.recommendations,
        vec!["Content meets quality standards".to_string()]
    );
}

#[test]
fn test_assessment_notes() {
    let scorer = QualityScorer::with_reference_year(2025);
    let metrics = scorer.evaluate("The research [1] found 45% growth (2020).", Some("https://a.org"));
    let notes = &metrics.assessment_notes;
    assert_eq!(notes[0], "Content length: 7 words");
    assert!(notes.contains(&"Source URL: https://a.org".to_string()));
    assert!(notes.contains(&"Contains quantitative data".to_string()));
    assert!(notes.contains(&"References research or studies".to_string()));
    assert!(notes.contains(&"Contains 2 citations".to_string()));
}

#[test]
fn test_reassessment_replaces_history_entry() {
    let mut scorer = QualityScorer::with_reference_year(2025);
    let first = scorer.assess("first content", None, None).unwrap();
    scorer.assess("second content", None, None).unwrap();
    let again = scorer.assess("first content", None, None).unwrap();

    assert_eq!(first.assessment_id, again.assessment_id);
    assert_eq!(first.assessment_id.len(), 8);
    assert_eq!(scorer.history().len(), 2);
    assert_eq!(
        scorer.latest().map(|a| a.assessment_id.as_str()),
        Some(first.assessment_id.as_str())
    );
}

#[test]
fn test_assessment_id_depends_on_url() {
    let mut scorer = QualityScorer::with_reference_year(2025);
    let plain = scorer.assess("same content", None, None).unwrap();
    let sourced = scorer
        .assess("same content", Some("https://a.org"), None)
        .unwrap();
    assert_ne!(plain.assessment_id, sourced.assessment_id);
}

#[test]
fn test_benchmark_averages_history() {
    let mut scorer = QualityScorer::with_reference_year(2025);
    assert!(scorer.benchmark("energy").is_none());
    assert_eq!(
        scorer.render_benchmark("energy"),
        "No assessments available for benchmarking."
    );

    let a = scorer.assess("first content", None, None).unwrap();
    let b = scorer.assess("second content here", None, None).unwrap();
    let report = scorer.benchmark("energy").unwrap();

    let expected = (a.metrics.overall_score + b.metrics.overall_score) / 2.0;
    assert!((report.average_score - expected).abs() < 1e-9);
    assert_eq!(report.total_assessments, 2);
    assert!(!report.meets_standard());
    assert!(report.render().contains("Quality Standard: Below Standards"));
}

#[test]
fn test_improvement_areas_use_latest_assessment() {
    let mut scorer = QualityScorer::with_reference_year(2025);
    assert!(scorer.improvement_areas(8.0).is_none());
    assert_eq!(
        scorer.render_improvements(8.0),
        "No assessments available for improvement suggestions."
    );

    scorer.assess("short note", None, None).unwrap();
    let areas = scorer.improvement_areas(8.0).unwrap();
    assert!(areas.contains(&QualityDimension::Completeness));
    assert!(
        scorer
            .render_improvements(8.0)
            .contains("Expand content comprehensiveness")
    );
    assert!(scorer.improvement_areas(0.0).unwrap().is_empty());
    assert_eq!(
        scorer.render_improvements(0.0),
        "Content already meets target quality score of 0.0/10"
    );
}

#[test]
fn test_readability_levels() {
    let easy = check_readability("One two three. Four five.");
    assert_eq!(easy.readability, "easy");
    assert_eq!(easy.total_words, 5);
    assert_eq!(easy.total_sentences, 3);
    assert!((easy.avg_words_per_sentence - 1.7).abs() < 1e-9);

    let hard = check_readability(&filler(30));
    assert_eq!(hard.readability, "difficult");

    assert_eq!(check_readability("").readability, "insufficient_content");
}

#[test]
fn test_structure_counts_headings_and_bullets() {
    let report = check_structure("# Title\n\n- one\n  * two\ntext\n## Section");
    assert!(report.has_headings);
    assert_eq!(report.heading_count, 2);
    assert_eq!(report.bullet_points, 2);
    assert_eq!(report.total_lines, 6);
}

#[test]
fn test_render_history() {
    let mut scorer = QualityScorer::with_reference_year(2025);
    assert_eq!(scorer.render_history(), "No assessments performed yet.");

    let assessment = scorer.assess("some content", None, None).unwrap();
    let rendered = scorer.render_history();
    assert!(rendered.starts_with("Assessment History:\n"));
    assert!(rendered.contains(&format!(
        "- {}: Overall Score {:.1}/10",
        assessment.assessment_id, assessment.metrics.overall_score
    )));
}
