//! 网络搜索工具（Serper兼容接口）

use reqwest::Client as HttpClient;
use rig::tool::Tool;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::SearchConfig;

/// 搜索参数
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WebSearchArgs {
    /// Search query
    pub query: String,
    /// Maximum number of results to return
    pub num_results: Option<usize>,
}

#[derive(Debug, Serialize)]
struct SearchPayload<'a> {
    q: &'a str,
    num: usize,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchHit {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub snippet: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    organic: Vec<SearchHit>,
}

#[derive(Debug, thiserror::Error)]
pub enum WebSearchError {
    #[error("web search request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("web search returned status {status}: {body}")]
    Status { status: u16, body: String },
}

/// 网络搜索工具
#[derive(Clone)]
pub struct AgentToolWebSearch {
    http_client: HttpClient,
    config: SearchConfig,
}

impl AgentToolWebSearch {
    pub fn new(config: &SearchConfig) -> Self {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_default();
        Self {
            http_client,
            config: config.clone(),
        }
    }

    pub fn is_available(&self) -> bool {
        !self.config.api_key.is_empty()
    }

    async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>, WebSearchError> {
        let response = self
            .http_client
            .post(&self.config.endpoint)
            .header("X-API-KEY", &self.config.api_key)
            .json(&SearchPayload {
                q: query,
                num: limit,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WebSearchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: SearchResponse = response.json().await?;
        Ok(parsed.organic.into_iter().take(limit).collect())
    }
}

/// 按排名输出搜索结果
pub fn render_hits(query: &str, hits: &[SearchHit]) -> String {
    if hits.is_empty() {
        return format!("No search results found for '{}'", query);
    }
    let mut rendered = format!("Search results for '{}':\n", query);
    for (i, hit) in hits.iter().enumerate() {
        rendered.push_str(&format!("\n{}. {}\n   {}\n", i + 1, hit.title, hit.link));
        if !hit.snippet.is_empty() {
            rendered.push_str(&format!("   {}\n", hit.snippet));
        }
    }
    rendered
}

impl Tool for AgentToolWebSearch {
    const NAME: &'static str = "web_search";

    type Error = WebSearchError;
    type Args = WebSearchArgs;
    type Output = String;

    async fn definition(&self, _prompt: String) -> rig::completion::ToolDefinition {
        rig::completion::ToolDefinition {
            name: Self::NAME.to_string(),
            description: "Searches the web and returns ranked results with title, link and snippet. Use several focused queries to cover a topic."
                .to_string(),
            parameters: serde_json::to_value(schemars::schema_for!(WebSearchArgs))
                .unwrap_or_default(),
        }
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        tracing::debug!("🔧 tool called...web_search@{:?}", args);

        if !self.is_available() {
            return Ok(
                "Web search unavailable: no search API key is configured. Continue with the information you already have."
                    .to_string(),
            );
        }

        let limit = args
            .num_results
            .unwrap_or(self.config.results_limit)
            .clamp(1, self.config.results_limit.max(1));
        let hits = self.search(&args.query, limit).await?;
        Ok(render_hits(&args.query, &hits))
    }
}
