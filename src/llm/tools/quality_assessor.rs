//! 内容质量评估工具

use rig::tool::Tool;
use serde::Deserialize;
use std::convert::Infallible;

use crate::generator::context::ProjectToolkit;
use crate::quality::{check_readability, check_structure};

fn default_target_score() -> f64 {
    8.0
}

fn default_domain() -> String {
    "general".to_string()
}

/// 质量评估请求
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum QualityRequest {
    Assess {
        #[serde(default)]
        content: String,
        source_url: Option<String>,
        content_type: Option<String>,
    },
    History,
    Benchmark {
        #[serde(default = "default_domain")]
        domain: String,
    },
    Improve {
        #[serde(default = "default_target_score")]
        target_score: f64,
    },
    Readability {
        #[serde(default)]
        content: String,
    },
}

/// 质量评估工具，评估历史属于当前项目
#[derive(Clone)]
pub struct AgentToolQualityAssessor {
    toolkit: ProjectToolkit,
}

impl AgentToolQualityAssessor {
    pub fn new(toolkit: ProjectToolkit) -> Self {
        Self { toolkit }
    }

    pub async fn handle(&self, request: QualityRequest) -> String {
        let mut scorer = self.toolkit.quality.lock().await;

        match request {
            QualityRequest::Assess {
                content,
                source_url,
                content_type,
            } => match scorer.assess(&content, source_url.as_deref(), content_type.as_deref()) {
                Ok(assessment) => assessment.metrics.render(&assessment.assessment_id),
                Err(e) => e.to_string(),
            },
            QualityRequest::History => scorer.render_history(),
            QualityRequest::Benchmark { domain } => scorer.render_benchmark(&domain),
            QualityRequest::Improve { target_score } => scorer.render_improvements(target_score),
            QualityRequest::Readability { content } => {
                if content.is_empty() {
                    return "Error: Content is required for readability check".to_string();
                }
                let readability = check_readability(&content);
                let structure = check_structure(&content);
                format!(
                    "Readability: {} ({:.1} words per sentence, {} words, {} sentences)\nStructure: {} headings, {} bullet points, {} lines",
                    readability.readability,
                    readability.avg_words_per_sentence,
                    readability.total_words,
                    readability.total_sentences,
                    structure.heading_count,
                    structure.bullet_points,
                    structure.total_lines
                )
            }
        }
    }
}

impl Tool for AgentToolQualityAssessor {
    const NAME: &'static str = "quality_assessor";

    type Error = Infallible;
    type Args = QualityRequest;
    type Output = String;

    async fn definition(&self, _prompt: String) -> rig::completion::ToolDefinition {
        rig::completion::ToolDefinition {
            name: Self::NAME.to_string(),
            description: "Assesses the quality of research content and sources. Scores credibility, relevance, accuracy, completeness and timeliness (0-10) and gives recommendations. Also reports assessment history, benchmarks against a 7.0 standard, suggests improvements for the latest assessment and checks readability."
                .to_string(),
            parameters: serde_json::json!({
                "type": "object",
                "properties": {
                    "action": {
                        "type": "string",
                        "enum": ["assess", "history", "benchmark", "improve", "readability"],
                        "description": "assess(score content), history(list past assessments), benchmark(compare average score to standard), improve(suggest improvements for the latest assessment), readability(sentence length and structure check)"
                    },
                    "content": {
                        "type": "string",
                        "description": "Content to evaluate (required for assess and readability)"
                    },
                    "source_url": {
                        "type": "string",
                        "description": "Source URL of the content (assess)"
                    },
                    "content_type": {
                        "type": "string",
                        "description": "web, academic, news, ... (assess)"
                    },
                    "domain": {
                        "type": "string",
                        "description": "Domain label for benchmark, default general"
                    },
                    "target_score": {
                        "type": "number",
                        "description": "Target score for improve, default 8.0"
                    }
                },
                "required": ["action"]
            }),
        }
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        tracing::debug!("🔧 tool called...quality_assessor@{:?}", args);
        Ok(self.handle(args).await)
    }
}
