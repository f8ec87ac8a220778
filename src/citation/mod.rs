//! 引用管理 - 保存引用记录并按APA/MLA/Chicago格式输出

use std::collections::HashMap;

use chrono::Local;
use thiserror::Error;

use crate::types::citation::{CitationExtras, CitationRecord, CitationStyle, NO_URL_SENTINEL};
use crate::utils::hashing::short_digest;

/// 引用管理错误，Display文本即为工具内联返回的内容
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CitationError {
    #[error("Error: Title is required for citations")]
    EmptyTitle,
    #[error("Error: Citation ID is required")]
    MissingId,
    #[error("Citation with ID {id} not found. Available IDs: {available:?}")]
    NotFound { id: String, available: Vec<String> },
    #[error("Unsupported citation style: {0}. Supported styles: APA, MLA, Chicago")]
    UnsupportedStyle(String),
}

/// 单个项目生命周期内的引用存储
#[derive(Debug, Default)]
pub struct CitationStore {
    /// 按插入顺序保存
    records: Vec<CitationRecord>,
    index: HashMap<String, usize>,
    usage: HashMap<String, u32>,
    sequence: u64,
}

impl CitationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 添加引用，返回新生成的引用ID
    pub fn add(
        &mut self,
        title: &str,
        url: Option<&str>,
        authors: Vec<String>,
        extras: CitationExtras,
    ) -> Result<String, CitationError> {
        if title.is_empty() {
            return Err(CitationError::EmptyTitle);
        }
        let url = match url {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => NO_URL_SENTINEL.to_string(),
        };

        let citation_id = self.generate_citation_id(title, &url);
        let record = CitationRecord {
            citation_id: citation_id.clone(),
            title: title.to_string(),
            authors,
            url,
            date_accessed: Local::now().format("%Y-%m-%d").to_string(),
            source_type: extras.source_type.unwrap_or_else(|| "web".to_string()),
            publication_date: extras.publication_date,
            publisher: extras.publisher,
            doi: extras.doi,
        };

        self.index.insert(citation_id.clone(), self.records.len());
        self.records.push(record);
        Ok(citation_id)
    }

    pub fn get(&self, citation_id: &str) -> Result<&CitationRecord, CitationError> {
        if citation_id.is_empty() {
            return Err(CitationError::MissingId);
        }
        self.index
            .get(citation_id)
            .map(|position| &self.records[*position])
            .ok_or_else(|| CitationError::NotFound {
                id: citation_id.to_string(),
                available: self.ids(),
            })
    }

    /// 按指定格式（大小写不敏感）输出单条引用
    pub fn format(&self, citation_id: &str, style: &str) -> Result<String, CitationError> {
        let record = self.get(citation_id)?;
        let style = parse_style(style)?;
        Ok(format_record(record, style))
    }

    /// 按插入顺序列出 (ID, 标题)
    pub fn list(&self) -> Vec<(String, String)> {
        self.records
            .iter()
            .map(|record| (record.citation_id.clone(), record.title.clone()))
            .collect()
    }

    /// 按插入顺序格式化全部引用，条目之间以空行分隔
    pub fn bibliography(&self, style: &str) -> Result<Vec<String>, CitationError> {
        let style = parse_style(style)?;
        Ok(self
            .records
            .iter()
            .map(|record| format_record(record, style))
            .collect())
    }

    /// 渲染完整的参考文献文本
    pub fn render_bibliography(&self, style: &str) -> Result<String, CitationError> {
        let entries = self.bibliography(style)?;
        if entries.is_empty() {
            return Ok("No citations available for bibliography.".to_string());
        }
        let style = parse_style(style)?;
        let mut bibliography = format!("Bibliography ({} Style):\n\n", style);
        for entry in entries {
            bibliography.push_str(&entry);
            bibliography.push_str("\n\n");
        }
        Ok(bibliography)
    }

    /// 记录一次引用使用，返回累计次数
    pub fn track_usage(&mut self, citation_id: &str) -> Result<u32, CitationError> {
        self.get(citation_id)?;
        let count = self.usage.entry(citation_id.to_string()).or_insert(0);
        *count += 1;
        Ok(*count)
    }

    pub fn ids(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|record| record.citation_id.clone())
            .collect()
    }

    /// 标题+URL+当前时间生成ID，序号保证同一时刻重复添加也不冲突
    fn generate_citation_id(&mut self, title: &str, url: &str) -> String {
        self.sequence += 1;
        let seed = format!(
            "{}{}{}#{}",
            title,
            url,
            Local::now().to_rfc3339_opts(chrono::SecondsFormat::Nanos, true),
            self.sequence
        );
        short_digest(&seed, 8)
    }
}

fn parse_style(style: &str) -> Result<CitationStyle, CitationError> {
    style
        .parse::<CitationStyle>()
        .map_err(CitationError::UnsupportedStyle)
}

fn format_record(record: &CitationRecord, style: CitationStyle) -> String {
    match style {
        CitationStyle::Apa => format_apa(record),
        CitationStyle::Mla => format_mla(record),
        CitationStyle::Chicago => format_chicago(record),
    }
}

fn format_apa(record: &CitationRecord) -> String {
    let authors = match record.authors.as_slice() {
        [] => "Unknown Author".to_string(),
        [single] => single.clone(),
        [first, second] => format!("{} & {}", first, second),
        [init @ .., last] => format!("{}, & {}", init.join(", "), last),
    };
    let date = record
        .publication_date
        .as_deref()
        .unwrap_or(&record.date_accessed);

    let mut formatted = format!("{}. ({}). {}. ", authors, date, record.title);
    if let Some(publisher) = &record.publisher {
        formatted.push_str(&format!("{}. ", publisher));
    }
    if record.has_url() {
        formatted.push_str(&format!("Retrieved from {}", record.url));
    }
    formatted
}

fn format_mla(record: &CitationRecord) -> String {
    let authors = match record.authors.as_slice() {
        [] => "Unknown Author".to_string(),
        [single] => single.clone(),
        [first, ..] => format!("{} et al.", first),
    };

    let mut formatted = format!(
        "{}. \"{}.\" Web. {}.",
        authors, record.title, record.date_accessed
    );
    if record.has_url() {
        formatted.push_str(&format!(" <{}>.", record.url));
    }
    formatted
}

fn format_chicago(record: &CitationRecord) -> String {
    let authors = record
        .authors
        .first()
        .cloned()
        .unwrap_or_else(|| "Unknown Author".to_string());

    let mut formatted = format!(
        "{}. \"{}.\" Accessed {}.",
        authors, record.title, record.date_accessed
    );
    if record.has_url() {
        formatted.push_str(&format!(" {}.", record.url));
    }
    formatted
}
