//! LLM客户端 - 基于rig的阶段执行器实现

use anyhow::Result;
use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;

use crate::config::Config;
use crate::generator::context::ProjectToolkit;
use crate::generator::templates::PhaseTask;
use crate::llm::completion::PhaseExecutor;

mod providers;
mod react_executor;

pub use react_executor::{ReActConfig, ReActResponse};

use providers::ProviderClient;
use react_executor::ReActExecutor;

/// LLM客户端 - 为每个阶段构建带角色设定的Agent
#[derive(Clone)]
pub struct LLMClient {
    config: Config,
    client: ProviderClient,
}

impl LLMClient {
    /// 创建新的LLM客户端
    pub fn new(config: Config) -> Result<Self> {
        let client = ProviderClient::new(&config.llm)?;
        Ok(Self { client, config })
    }

    /// 检查模型连接和功能是否正常
    pub async fn check_connection(&self) -> Result<()> {
        tracing::info!("🔄 正在检查模型连接...");
        let agent = self
            .client
            .create_agent("You are a helpful assistant.", &self.config.llm);
        match agent.prompt("Hello").await {
            Ok(_) => {
                tracing::info!("✅ 模型连接正常");
                Ok(())
            }
            Err(e) => {
                tracing::error!("❌ 模型连接失败: {}", e);
                Err(e)
            }
        }
    }

    /// 通用重试逻辑，用于处理异步操作的重试机制
    async fn retry_with_backoff<T, F, Fut>(&self, operation: F) -> Result<T>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, anyhow::Error>>,
    {
        let llm_config = &self.config.llm;
        let max_retries = llm_config.retry_attempts.max(1);
        let retry_delay_ms = llm_config.retry_delay_ms;
        let mut retries = 0;

        loop {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(err) => {
                    retries += 1;
                    tracing::warn!(
                        "❌ 调用模型服务出错 (第 {} / {}次尝试): {}",
                        retries,
                        max_retries,
                        err
                    );
                    if retries >= max_retries {
                        return Err(err);
                    }
                    tokio::time::sleep(Duration::from_millis(retry_delay_ms)).await;
                }
            }
        }
    }
}

#[async_trait]
impl PhaseExecutor for LLMClient {
    async fn execute_phase(
        &self,
        task: &PhaseTask,
        prompt: &str,
        toolkit: &ProjectToolkit,
    ) -> Result<String> {
        let llm_config = &self.config.llm;
        let preamble = task.profile.preamble();
        let agent = if task.uses_tools {
            self.client
                .create_agent_with_tools(&preamble, llm_config, &self.config.search, toolkit)
        } else {
            self.client.create_agent(&preamble, llm_config)
        };

        let react_config = ReActConfig::from(llm_config);
        let time_limit = Duration::from_secs(llm_config.max_execution_secs);
        let agent_name = task.phase.agent_name();

        let response = self
            .retry_with_backoff(|| async {
                match tokio::time::timeout(
                    time_limit,
                    ReActExecutor::execute(&agent, prompt, &react_config),
                )
                .await
                {
                    Ok(result) => result,
                    Err(_) => Err(anyhow::anyhow!(
                        "{} exceeded the execution limit of {}s",
                        agent_name,
                        llm_config.max_execution_secs
                    )),
                }
            })
            .await?;

        if response.stopped_by_max_depth {
            tracing::warn!(
                "⚠️ {} 达到最大迭代次数，使用部分结果，已调用工具: {:?}",
                agent_name,
                response.tool_calls_history
            );
        }

        Ok(response.content)
    }
}
