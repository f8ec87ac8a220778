use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// 输出文档格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    ComprehensiveReport,
    ExecutiveBriefing,
    Presentation,
    TechnicalSummary,
    PolicyBrief,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 5] = [
        OutputFormat::ComprehensiveReport,
        OutputFormat::ExecutiveBriefing,
        OutputFormat::Presentation,
        OutputFormat::TechnicalSummary,
        OutputFormat::PolicyBrief,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::ComprehensiveReport => "comprehensive_report",
            OutputFormat::ExecutiveBriefing => "executive_briefing",
            OutputFormat::Presentation => "presentation",
            OutputFormat::TechnicalSummary => "technical_summary",
            OutputFormat::PolicyBrief => "policy_brief",
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| format!("Unknown output format: {}", s))
    }
}

/// 目标读者
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TargetAudience {
    Academic,
    #[default]
    Professional,
    Executive,
    Technical,
    General,
}

impl TargetAudience {
    pub const ALL: [TargetAudience; 5] = [
        TargetAudience::Academic,
        TargetAudience::Professional,
        TargetAudience::Executive,
        TargetAudience::Technical,
        TargetAudience::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TargetAudience::Academic => "academic",
            TargetAudience::Professional => "professional",
            TargetAudience::Executive => "executive",
            TargetAudience::Technical => "technical",
            TargetAudience::General => "general",
        }
    }
}

impl Display for TargetAudience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TargetAudience {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TargetAudience::ALL
            .into_iter()
            .find(|audience| audience.as_str() == s)
            .ok_or_else(|| format!("Unknown target audience: {}", s))
    }
}

/// 调研深度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DepthLevel {
    Overview,
    #[default]
    Detailed,
    Comprehensive,
    Expert,
}

impl DepthLevel {
    pub const ALL: [DepthLevel; 4] = [
        DepthLevel::Overview,
        DepthLevel::Detailed,
        DepthLevel::Comprehensive,
        DepthLevel::Expert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DepthLevel::Overview => "overview",
            DepthLevel::Detailed => "detailed",
            DepthLevel::Comprehensive => "comprehensive",
            DepthLevel::Expert => "expert",
        }
    }
}

impl Display for DepthLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DepthLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DepthLevel::ALL
            .into_iter()
            .find(|depth| depth.as_str() == s)
            .ok_or_else(|| format!("Unknown depth level: {}", s))
    }
}

/// 一次调研项目的输入参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchRequest {
    pub query: String,
    pub output_format: OutputFormat,
    pub target_audience: TargetAudience,
    pub depth_level: DepthLevel,
}

impl ResearchRequest {
    pub fn new(
        query: impl Into<String>,
        output_format: OutputFormat,
        target_audience: TargetAudience,
        depth_level: DepthLevel,
    ) -> Self {
        Self {
            query: query.into(),
            output_format,
            target_audience,
            depth_level,
        }
    }
}
