use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// 未提供URL时写入的占位文本
pub const NO_URL_SENTINEL: &str = "No URL provided";

/// 引用记录，创建后不可修改
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitationRecord {
    pub citation_id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub url: String,
    pub date_accessed: String,
    pub source_type: String,
    pub publication_date: Option<String>,
    pub publisher: Option<String>,
    pub doi: Option<String>,
}

impl CitationRecord {
    /// URL是否为真实地址（非占位文本）
    pub fn has_url(&self) -> bool {
        !self.url.is_empty() && self.url != NO_URL_SENTINEL
    }
}

/// 添加引用时可选的附加字段
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CitationExtras {
    pub source_type: Option<String>,
    pub publication_date: Option<String>,
    pub publisher: Option<String>,
    pub doi: Option<String>,
}

/// 引用格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CitationStyle {
    Apa,
    Mla,
    Chicago,
}

impl Display for CitationStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CitationStyle::Apa => write!(f, "APA"),
            CitationStyle::Mla => write!(f, "MLA"),
            CitationStyle::Chicago => write!(f, "CHICAGO"),
        }
    }
}

impl std::str::FromStr for CitationStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "APA" => Ok(CitationStyle::Apa),
            "MLA" => Ok(CitationStyle::Mla),
            "CHICAGO" => Ok(CitationStyle::Chicago),
            _ => Err(s.to_string()),
        }
    }
}
