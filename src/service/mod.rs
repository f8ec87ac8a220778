//! 后台调研服务 - 同一时间只运行一个项目

use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::config::Config;
use crate::generator::workflow::{ProjectResult, WorkflowOrchestrator};
use crate::llm::completion::PhaseExecutor;
use crate::types::research::ResearchRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResearchStatus {
    #[default]
    Idle,
    Running,
    Completed,
    Error,
}

impl std::fmt::Display for ResearchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResearchStatus::Idle => write!(f, "idle"),
            ResearchStatus::Running => write!(f, "running"),
            ResearchStatus::Completed => write!(f, "completed"),
            ResearchStatus::Error => write!(f, "error"),
        }
    }
}

/// 当前（或最近一次）调研项目
#[derive(Debug, Clone, Default, Serialize)]
pub struct CurrentResearch {
    pub status: ResearchStatus,
    pub request: Option<ResearchRequest>,
    pub result: Option<ProjectResult>,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ServiceError {
    #[error("Research already in progress")]
    AlreadyRunning,
    #[error("Cannot reset while research is in progress")]
    ResetWhileRunning,
}

pub struct ResearchService {
    executor: Arc<dyn PhaseExecutor>,
    output_dir: PathBuf,
    reference_year: Option<i32>,
    current: Arc<RwLock<CurrentResearch>>,
}

impl ResearchService {
    pub fn new(config: &Config, executor: Arc<dyn PhaseExecutor>) -> Self {
        Self::with_output_dir(&config.output_path, executor)
    }

    pub fn with_output_dir(output_dir: impl AsRef<Path>, executor: Arc<dyn PhaseExecutor>) -> Self {
        Self {
            executor,
            output_dir: output_dir.as_ref().to_path_buf(),
            reference_year: None,
            current: Arc::new(RwLock::new(CurrentResearch::default())),
        }
    }

    /// 固定质量评估使用的当前年份
    pub fn with_reference_year(mut self, year: i32) -> Self {
        self.reference_year = Some(year);
        self
    }

    /// 在后台任务中启动项目并立即返回
    pub async fn start(&self, request: ResearchRequest) -> Result<JoinHandle<()>, ServiceError> {
        {
            let mut current = self.current.write().await;
            if current.status == ResearchStatus::Running {
                return Err(ServiceError::AlreadyRunning);
            }
            *current = CurrentResearch {
                status: ResearchStatus::Running,
                request: Some(request.clone()),
                result: None,
            };
        }

        let mut orchestrator =
            WorkflowOrchestrator::with_output_dir(&self.output_dir, self.executor.clone());
        if let Some(year) = self.reference_year {
            orchestrator = orchestrator.with_reference_year(year);
        }
        let current = self.current.clone();

        tracing::info!("📥 Research queued: {}", request.query);
        Ok(tokio::spawn(async move {
            // 项目在独立任务中运行，panic 也要落到错误状态
            let run = tokio::spawn(async move { orchestrator.execute(&request).await });
            let result = match run.await {
                Ok(result) => result,
                Err(e) => {
                    tracing::error!("❌ Research task aborted: {}", e);
                    ProjectResult::Failed {
                        error: format!("Research task aborted: {}", e),
                    }
                }
            };
            let mut current = current.write().await;
            current.status = if result.is_success() {
                ResearchStatus::Completed
            } else {
                ResearchStatus::Error
            };
            current.result = Some(result);
        }))
    }

    pub async fn status(&self) -> CurrentResearch {
        self.current.read().await.clone()
    }

    /// 清除上一次的结果，运行中不允许
    pub async fn reset(&self) -> Result<(), ServiceError> {
        let mut current = self.current.write().await;
        if current.status == ResearchStatus::Running {
            return Err(ServiceError::ResetWhileRunning);
        }
        *current = CurrentResearch::default();
        Ok(())
    }
}

#[cfg(test)]
mod tests;
