use crate::config::{Config, LLMProvider};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;
pub mod repl;

/// research-crew - 由Rust与AI驱动的多智能体调研报告生成器
#[derive(Parser, Debug)]
#[command(name = "research-crew")]
#[command(
    about = "Multi-agent research assistant. Research, analysis and content agents turn a topic into a cited, quality-checked document."
)]
#[command(version)]
pub struct Args {
    /// 子命令，缺省时进入交互模式
    #[command(subcommand)]
    pub command: Option<Command>,

    /// 配置文件路径
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// 输出路径
    #[arg(short, long, global = true)]
    pub output_path: Option<PathBuf>,

    /// 日志文件目录
    #[arg(long, global = true)]
    pub logs_path: Option<PathBuf>,

    /// 是否启用详细日志
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// LLM Provider (openai, anthropic, deepseek, openrouter)
    #[arg(long, global = true)]
    pub llm_provider: Option<String>,

    /// LLM API基地址
    #[arg(long, global = true)]
    pub llm_api_base_url: Option<String>,

    /// LLM API KEY
    #[arg(long, global = true)]
    pub llm_api_key: Option<String>,

    /// 三个阶段使用的模型
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// 最大tokens数
    #[arg(long, global = true)]
    pub max_tokens: Option<u32>,

    /// 温度参数
    #[arg(long, global = true)]
    pub temperature: Option<f64>,

    /// 单个阶段的最大工具调用轮数
    #[arg(long, global = true)]
    pub max_iterations: Option<usize>,

    /// 网络搜索API KEY
    #[arg(long, global = true)]
    pub search_api_key: Option<String>,
}

/// 调研请求参数
#[derive(clap::Args, Debug, Clone, PartialEq)]
pub struct RequestOptions {
    /// 调研主题，多个单词会以空格拼接
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// 输出格式
    #[arg(short, long, default_value = "comprehensive_report")]
    pub format: String,

    /// 目标读者
    #[arg(short, long, default_value = "professional")]
    pub audience: String,

    /// 调研深度
    #[arg(short, long, default_value = "detailed")]
    pub depth: String,
}

impl RequestOptions {
    pub fn query_text(&self) -> String {
        self.query.join(" ")
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// 执行一个完整的调研项目
    Run(RequestOptions),
    /// 只校验输入并给出耗时估算
    Validate(RequestOptions),
    /// 估算执行耗时
    Estimate {
        #[arg(short, long, default_value = "detailed")]
        depth: String,
        #[arg(short, long, default_value = "comprehensive_report")]
        format: String,
    },
    /// 列出可用的输出格式、读者与深度
    Formats,
    /// 示例调研主题
    Examples,
    /// 交互模式
    Repl,
    /// 离线检查配置与内置工具
    Selftest,
}

impl Args {
    /// 将CLI参数转换为配置，命令行参数覆盖配置文件
    pub fn to_config(&self) -> Result<Config> {
        let working_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let mut config = Config::load(self.config.as_ref(), &working_dir)?;
        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(ref output_path) = self.output_path {
            config.output_path = output_path.clone();
        }
        if let Some(ref logs_path) = self.logs_path {
            config.logs_path = Some(logs_path.clone());
        }

        // 覆盖LLM配置
        if let Some(ref provider_str) = self.llm_provider {
            if let Ok(provider) = provider_str.parse::<LLMProvider>() {
                config.llm.provider = provider;
            } else {
                eprintln!(
                    "⚠️ 警告: 未知的provider: {}，使用默认provider",
                    provider_str
                );
            }
        }
        if let Some(ref llm_api_base_url) = self.llm_api_base_url {
            config.llm.api_base_url = llm_api_base_url.clone();
        }
        if let Some(ref llm_api_key) = self.llm_api_key {
            config.llm.api_key = llm_api_key.clone();
        }
        if let Some(ref model) = self.model {
            config.llm.model = model.clone();
        }
        if let Some(max_tokens) = self.max_tokens {
            config.llm.max_tokens = max_tokens;
        }
        if let Some(temperature) = self.temperature {
            config.llm.temperature = temperature;
        }
        if let Some(max_iterations) = self.max_iterations {
            config.llm.max_iterations = max_iterations;
        }
        if let Some(ref search_api_key) = self.search_api_key {
            config.search.api_key = search_api_key.clone();
        }

        if self.verbose {
            config.verbose = true;
        }
    }
}
