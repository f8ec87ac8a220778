//! 引用管理工具

use rig::tool::Tool;
use serde::Deserialize;
use std::convert::Infallible;

use crate::generator::context::ProjectToolkit;
use crate::types::citation::CitationExtras;

fn default_style() -> String {
    "APA".to_string()
}

/// 引用管理请求，每个动作只携带自身需要的字段
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum CitationRequest {
    Add {
        #[serde(default)]
        title: String,
        url: Option<String>,
        #[serde(default)]
        authors: Vec<String>,
        source_type: Option<String>,
        publication_date: Option<String>,
        publisher: Option<String>,
        doi: Option<String>,
    },
    Format {
        #[serde(default)]
        citation_id: String,
        #[serde(default = "default_style")]
        style: String,
    },
    List,
    Bibliography {
        #[serde(default = "default_style")]
        style: String,
    },
    Usage {
        #[serde(default)]
        citation_id: String,
    },
}

/// 引用管理工具，作用于当前项目的引用存储
#[derive(Clone)]
pub struct AgentToolCitationManager {
    toolkit: ProjectToolkit,
}

impl AgentToolCitationManager {
    pub fn new(toolkit: ProjectToolkit) -> Self {
        Self { toolkit }
    }

    /// 执行请求，错误以文本形式返回
    pub async fn handle(&self, request: CitationRequest) -> String {
        let mut store = self.toolkit.citations.lock().await;

        match request {
            CitationRequest::Add {
                title,
                url,
                authors,
                source_type,
                publication_date,
                publisher,
                doi,
            } => {
                let extras = CitationExtras {
                    source_type,
                    publication_date,
                    publisher,
                    doi,
                };
                match store.add(&title, url.as_deref(), authors, extras) {
                    Ok(id) => format!("Citation added successfully with ID: {}", id),
                    Err(e) => e.to_string(),
                }
            }
            CitationRequest::Format { citation_id, style } => store
                .format(&citation_id, &style)
                .unwrap_or_else(|e| e.to_string()),
            CitationRequest::List => {
                let listed = store.list();
                if listed.is_empty() {
                    return "No citations stored.".to_string();
                }
                let mut result = String::from("Stored Citations:\n");
                for (id, title) in listed {
                    result.push_str(&format!("- {}: {}\n", id, title));
                }
                result
            }
            CitationRequest::Bibliography { style } => store
                .render_bibliography(&style)
                .unwrap_or_else(|e| e.to_string()),
            CitationRequest::Usage { citation_id } => match store.track_usage(&citation_id) {
                Ok(total) => format!(
                    "Citation {} usage tracked. Total uses: {}",
                    citation_id, total
                ),
                Err(e) => e.to_string(),
            },
        }
    }
}

impl Tool for AgentToolCitationManager {
    const NAME: &'static str = "citation_manager";

    type Error = Infallible;
    type Args = CitationRequest;
    type Output = String;

    async fn definition(&self, _prompt: String) -> rig::completion::ToolDefinition {
        rig::completion::ToolDefinition {
            name: Self::NAME.to_string(),
            description: "Manages research citations in multiple formats (APA, MLA, Chicago). Can add citations, format them, list them, generate a bibliography and track citation usage. Examples: {\"action\":\"add\",\"title\":\"Article Title\",\"url\":\"https://example.com\",\"authors\":[\"Author Name\"]}, {\"action\":\"format\",\"citation_id\":\"abc12345\",\"style\":\"MLA\"}, {\"action\":\"list\"}, {\"action\":\"bibliography\",\"style\":\"APA\"}."
                .to_string(),
            parameters: serde_json::json!({
                "type": "object",
                "properties": {
                    "action": {
                        "type": "string",
                        "enum": ["add", "format", "list", "bibliography", "usage"],
                        "description": "add(record a source), format(format one citation), list(list stored citations), bibliography(format all citations), usage(count one use of a citation)"
                    },
                    "title": {
                        "type": "string",
                        "description": "Source title (required for add)"
                    },
                    "url": {
                        "type": "string",
                        "description": "Source URL (add)"
                    },
                    "authors": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Ordered author names (add)"
                    },
                    "source_type": { "type": "string", "description": "web, journal, report, ... (add)" },
                    "publication_date": { "type": "string", "description": "Publication date (add)" },
                    "publisher": { "type": "string", "description": "Publisher (add)" },
                    "doi": { "type": "string", "description": "DOI (add)" },
                    "citation_id": {
                        "type": "string",
                        "description": "Citation ID (required for format and usage)"
                    },
                    "style": {
                        "type": "string",
                        "enum": ["APA", "MLA", "Chicago"],
                        "description": "Citation style, default APA (format, bibliography)"
                    }
                },
                "required": ["action"]
            }),
        }
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        tracing::debug!("🔧 tool called...citation_manager@{:?}", args);
        Ok(self.handle(args).await)
    }
}
