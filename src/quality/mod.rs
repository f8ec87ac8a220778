//! 内容质量评估 - 五个维度的启发式评分与评估历史

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::quality::{QualityDimension, QualityMetrics};
use crate::utils::hashing::short_digest;

pub mod heuristics;
pub mod readability;

pub use readability::{check_readability, check_structure};

/// 低于该分数的维度会给出改进建议
const RECOMMENDATION_THRESHOLD: f64 = 6.0;
/// 行业基准分数
const INDUSTRY_STANDARD: f64 = 7.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum QualityError {
    #[error("Error: Content is required for assessment")]
    EmptyContent,
}

/// 一次已存档的评估
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub assessment_id: String,
    pub metrics: QualityMetrics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    pub domain: String,
    pub average_score: f64,
    pub industry_standard: f64,
    pub total_assessments: usize,
}

impl BenchmarkReport {
    pub fn meets_standard(&self) -> bool {
        self.average_score >= self.industry_standard
    }

    pub fn render(&self) -> String {
        format!(
            "Quality Benchmark Report ({})\n{}\nAverage Quality Score: {:.1}/10\nTotal Assessments: {}\nQuality Standard: {}\n",
            self.domain,
            "=".repeat(25),
            self.average_score,
            self.total_assessments,
            if self.meets_standard() {
                "Meets Standards"
            } else {
                "Below Standards"
            }
        )
    }
}

/// 质量评估器，按项目持有评估历史
#[derive(Debug, Default)]
pub struct QualityScorer {
    history: Vec<Assessment>,
    reference_year: Option<i32>,
}

impl QualityScorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 固定"当前年份"，用于时效性评分
    pub fn with_reference_year(year: i32) -> Self {
        Self {
            history: Vec::new(),
            reference_year: Some(year),
        }
    }

    fn current_year(&self) -> i32 {
        self.reference_year.unwrap_or_else(|| Local::now().year())
    }

    /// 仅计算评分，不写入历史
    pub fn evaluate(&self, content: &str, source_url: Option<&str>) -> QualityMetrics {
        let year = self.current_year();
        let source_url = source_url.filter(|url| !url.is_empty());

        let credibility_score = heuristics::credibility(content, source_url);
        let relevance_score = heuristics::relevance(content, year);
        let accuracy_score = heuristics::accuracy(content);
        let completeness_score = heuristics::completeness(content);
        let timeliness_score = heuristics::timeliness(content, year);

        let overall_score = (credibility_score
            + relevance_score
            + accuracy_score
            + completeness_score
            + timeliness_score)
            / 5.0;

        let mut metrics = QualityMetrics {
            credibility_score,
            relevance_score,
            accuracy_score,
            completeness_score,
            timeliness_score,
            overall_score,
            assessment_notes: heuristics::assessment_notes(content, source_url),
            recommendations: Vec::new(),
        };
        metrics.recommendations = recommendations(&metrics);
        metrics
    }

    /// 评估内容并存档，同一ID的再次评估会替换旧记录
    pub fn assess(
        &mut self,
        content: &str,
        source_url: Option<&str>,
        content_type: Option<&str>,
    ) -> Result<Assessment, QualityError> {
        if content.is_empty() {
            return Err(QualityError::EmptyContent);
        }

        let metrics = self.evaluate(content, source_url);
        let assessment_id = assessment_id(content, source_url.unwrap_or(""));
        tracing::debug!(
            assessment_id = %assessment_id,
            content_type = content_type.unwrap_or("general"),
            overall = metrics.overall_score,
            "content assessed"
        );

        self.history
            .retain(|existing| existing.assessment_id != assessment_id);
        let assessment = Assessment {
            assessment_id,
            metrics,
        };
        self.history.push(assessment.clone());
        Ok(assessment)
    }

    pub fn history(&self) -> &[Assessment] {
        &self.history
    }

    pub fn latest(&self) -> Option<&Assessment> {
        self.history.last()
    }

    /// 历史平均分与行业基准比较，无历史时返回None
    pub fn benchmark(&self, domain: &str) -> Option<BenchmarkReport> {
        if self.history.is_empty() {
            return None;
        }
        let total: f64 = self
            .history
            .iter()
            .map(|assessment| assessment.metrics.overall_score)
            .sum();

        Some(BenchmarkReport {
            domain: domain.to_string(),
            average_score: total / self.history.len() as f64,
            industry_standard: INDUSTRY_STANDARD,
            total_assessments: self.history.len(),
        })
    }

    /// 最近一次评估中低于目标分数的维度
    pub fn improvement_areas(&self, target_score: f64) -> Option<Vec<QualityDimension>> {
        let latest = self.latest()?;
        Some(
            QualityDimension::ALL
                .into_iter()
                .filter(|dimension| latest.metrics.score(*dimension) < target_score)
                .collect(),
        )
    }

    pub fn render_history(&self) -> String {
        if self.history.is_empty() {
            return "No assessments performed yet.".to_string();
        }
        let mut rendered = String::from("Assessment History:\n");
        for assessment in &self.history {
            rendered.push_str(&format!(
                "- {}: Overall Score {:.1}/10\n",
                assessment.assessment_id, assessment.metrics.overall_score
            ));
        }
        rendered
    }

    pub fn render_benchmark(&self, domain: &str) -> String {
        match self.benchmark(domain) {
            Some(report) => report.render(),
            None => "No assessments available for benchmarking.".to_string(),
        }
    }

    pub fn render_improvements(&self, target_score: f64) -> String {
        let Some(areas) = self.improvement_areas(target_score) else {
            return "No assessments available for improvement suggestions.".to_string();
        };
        if areas.is_empty() {
            return format!(
                "Content already meets target quality score of {:.1}/10",
                target_score
            );
        }

        let mut rendered = format!("To reach target score of {:.1}/10:", target_score);
        for dimension in areas {
            rendered.push_str(&format!("\n- {}", dimension.improvement()));
        }
        rendered
    }
}

fn recommendations(metrics: &QualityMetrics) -> Vec<String> {
    let mut recommendations: Vec<String> = QualityDimension::ALL
        .into_iter()
        .filter(|dimension| metrics.score(*dimension) < RECOMMENDATION_THRESHOLD)
        .map(|dimension| dimension.recommendation().to_string())
        .collect();

    if recommendations.is_empty() {
        recommendations.push("Content meets quality standards".to_string());
    }
    recommendations
}

/// 内容前100个字符 + URL 的摘要
fn assessment_id(content: &str, source_url: &str) -> String {
    let head: String = content.chars().take(100).collect();
    short_digest(&format!("{}{}", head, source_url), 8)
}

#[cfg(test)]
mod tests;
