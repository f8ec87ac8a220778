use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// 工作目录下默认查找的配置文件名
pub const DEFAULT_CONFIG_FILE: &str = "research-crew.toml";

/// LLM Provider类型
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub enum LLMProvider {
    #[serde(rename = "openai")]
    #[default]
    OpenAI,
    #[serde(rename = "anthropic")]
    Anthropic,
    #[serde(rename = "deepseek")]
    DeepSeek,
    #[serde(rename = "openrouter")]
    OpenRouter,
}

impl std::fmt::Display for LLMProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LLMProvider::OpenAI => write!(f, "openai"),
            LLMProvider::Anthropic => write!(f, "anthropic"),
            LLMProvider::DeepSeek => write!(f, "deepseek"),
            LLMProvider::OpenRouter => write!(f, "openrouter"),
        }
    }
}

impl std::str::FromStr for LLMProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(LLMProvider::OpenAI),
            "anthropic" => Ok(LLMProvider::Anthropic),
            "deepseek" => Ok(LLMProvider::DeepSeek),
            "openrouter" => Ok(LLMProvider::OpenRouter),
            _ => Err(format!("Unknown provider: {}", s)),
        }
    }
}

/// 应用程序配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct Config {
    /// 输出路径，存放工作流摘要与最终报告
    pub output_path: PathBuf,

    /// 日志文件目录，为空时只输出到终端
    pub logs_path: Option<PathBuf>,

    /// LLM模型配置
    pub llm: LLMConfig,

    /// 网络搜索配置
    pub search: SearchConfig,

    /// 日志配置
    pub logging: LogConfig,

    /// 是否启用详细日志
    pub verbose: bool,
}

/// LLM模型配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LLMConfig {
    /// LLM Provider类型
    pub provider: LLMProvider,

    /// LLM API KEY
    pub api_key: String,

    /// LLM API基地址
    pub api_base_url: String,

    /// 三个阶段共用的模型
    pub model: String,

    /// 最大tokens
    pub max_tokens: u32,

    /// 温度
    pub temperature: f64,

    /// 尝试次数（含首次调用）
    pub retry_attempts: u32,

    /// 重试间隔（毫秒）
    pub retry_delay_ms: u64,

    /// 单个阶段的最大工具调用轮数
    pub max_iterations: usize,

    /// 单个阶段的执行时限（秒）
    pub max_execution_secs: u64,

    /// 达到最大轮数时返回已有的部分结果
    pub return_partial_on_max_depth: bool,
}

/// 网络搜索配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct SearchConfig {
    /// 搜索服务的API KEY，为空时搜索工具不可用
    pub api_key: String,

    /// 搜索服务地址
    pub endpoint: String,

    /// 单次搜索返回的最大结果数
    pub results_limit: usize,

    /// 请求超时（秒）
    pub timeout_secs: u64,
}

/// 日志配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LogConfig {
    /// 默认日志级别，RUST_LOG优先
    pub level: String,

    /// 日志文件名前缀
    pub file_prefix: String,
}

impl Config {
    /// 从文件加载配置
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let mut file =
            File::open(path).context(format!("Failed to open config file: {:?}", path))?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// 按顺序查找配置：显式路径、工作目录下的默认文件、内置默认值
    pub fn load(explicit: Option<&PathBuf>, working_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let candidate = working_dir.join(DEFAULT_CONFIG_FILE);
        if candidate.exists() {
            return Self::from_file(&candidate);
        }

        Ok(Self::default())
    }

    /// 校验运行所需的配置项
    pub fn validate(&self) -> Result<()> {
        if self.llm.api_key.trim().is_empty() {
            anyhow::bail!(
                "LLM API key is not configured. Set OPENAI_API_KEY, pass --llm-api-key or add llm.api_key to {}",
                DEFAULT_CONFIG_FILE
            );
        }
        if self.llm.max_iterations == 0 {
            anyhow::bail!("llm.max_iterations must be greater than 0");
        }
        Ok(())
    }

    /// 创建输出目录与日志目录
    pub fn create_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.output_path).context(format!(
            "Failed to create output directory: {:?}",
            self.output_path
        ))?;
        if let Some(ref logs_path) = self.logs_path {
            std::fs::create_dir_all(logs_path)
                .context(format!("Failed to create logs directory: {:?}", logs_path))?;
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("./output"),
            logs_path: None,
            llm: LLMConfig::default(),
            search: SearchConfig::default(),
            logging: LogConfig::default(),
            verbose: false,
        }
    }
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            provider: LLMProvider::default(),
            api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
            api_base_url: String::from("https://api.openai.com/v1"),
            model: String::from("gpt-4-turbo-preview"),
            max_tokens: 4000,
            temperature: 0.7,
            retry_attempts: 1,
            retry_delay_ms: 2000,
            max_iterations: 5,
            max_execution_secs: 300,
            return_partial_on_max_depth: true,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_key: std::env::var("SERPER_API_KEY").unwrap_or_default(),
            endpoint: String::from("https://google.serper.dev/search"),
            results_limit: 10,
            timeout_secs: 30,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            file_prefix: String::from("research-crew.log"),
        }
    }
}

// Include tests
#[cfg(test)]
mod tests;
