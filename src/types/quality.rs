use serde::{Deserialize, Serialize};

/// 质量评估结果，创建后不可修改
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityMetrics {
    pub credibility_score: f64,
    pub relevance_score: f64,
    pub accuracy_score: f64,
    pub completeness_score: f64,
    pub timeliness_score: f64,
    pub overall_score: f64,
    pub assessment_notes: Vec<String>,
    pub recommendations: Vec<String>,
}

/// 评分维度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QualityDimension {
    Credibility,
    Relevance,
    Accuracy,
    Completeness,
    Timeliness,
}

impl QualityDimension {
    pub const ALL: [QualityDimension; 5] = [
        QualityDimension::Credibility,
        QualityDimension::Relevance,
        QualityDimension::Accuracy,
        QualityDimension::Completeness,
        QualityDimension::Timeliness,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            QualityDimension::Credibility => "Credibility",
            QualityDimension::Relevance => "Relevance",
            QualityDimension::Accuracy => "Accuracy",
            QualityDimension::Completeness => "Completeness",
            QualityDimension::Timeliness => "Timeliness",
        }
    }

    /// 低于推荐阈值时给出的建议
    pub fn recommendation(&self) -> &'static str {
        match self {
            QualityDimension::Credibility => {
                "Seek more credible sources (academic, government, established organizations)"
            }
            QualityDimension::Relevance => "Focus on more specific and actionable information",
            QualityDimension::Accuracy => "Add more citations and references to support claims",
            QualityDimension::Completeness => "Expand content with more comprehensive coverage",
            QualityDimension::Timeliness => "Update with more recent information and sources",
        }
    }

    /// 低于目标分数时的改进方向
    pub fn improvement(&self) -> &'static str {
        match self {
            QualityDimension::Credibility => "Improve source credibility",
            QualityDimension::Relevance => "Enhance content relevance",
            QualityDimension::Accuracy => "Add more supporting evidence",
            QualityDimension::Completeness => "Expand content comprehensiveness",
            QualityDimension::Timeliness => "Update with recent information",
        }
    }
}

impl QualityMetrics {
    pub fn score(&self, dimension: QualityDimension) -> f64 {
        match dimension {
            QualityDimension::Credibility => self.credibility_score,
            QualityDimension::Relevance => self.relevance_score,
            QualityDimension::Accuracy => self.accuracy_score,
            QualityDimension::Completeness => self.completeness_score,
            QualityDimension::Timeliness => self.timeliness_score,
        }
    }

    /// 渲染为工具返回给Agent的文本报告
    pub fn render(&self, assessment_id: &str) -> String {
        let mut report = String::new();
        report.push_str(&format!(
            "Quality Assessment Results (ID: {})\n{}\n\n",
            assessment_id,
            "=".repeat(50)
        ));

        report.push_str("QUALITY SCORES:\n");
        for dimension in QualityDimension::ALL {
            report.push_str(&format!(
                "- {}: {:.1}/10\n",
                dimension.label(),
                self.score(dimension)
            ));
        }
        report.push_str(&format!("\nOVERALL SCORE: {:.1}/10\n\n", self.overall_score));

        report.push_str("ASSESSMENT NOTES:\n");
        for note in &self.assessment_notes {
            report.push_str(&format!("- {}\n", note));
        }

        report.push_str("\nRECOMMENDATIONS:\n");
        for recommendation in &self.recommendations {
            report.push_str(&format!("- {}\n", recommendation));
        }
        report
    }
}

/// 可读性评估
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityReport {
    pub readability: String,
    pub avg_words_per_sentence: f64,
    pub total_words: usize,
    pub total_sentences: usize,
}

/// 文档结构检查
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureReport {
    pub has_headings: bool,
    pub heading_count: usize,
    pub bullet_points: usize,
    pub total_lines: usize,
}
