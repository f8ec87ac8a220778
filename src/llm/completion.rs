//! 文本补全协作方抽象 - 编排器只依赖该接口

use anyhow::Result;
use async_trait::async_trait;

use crate::generator::context::ProjectToolkit;
use crate::generator::templates::PhaseTask;

/// 执行单个阶段，返回该阶段的原始文本输出
#[async_trait]
pub trait PhaseExecutor: Send + Sync {
    /// `prompt` 为已嵌入上一阶段输出的完整任务说明
    async fn execute_phase(
        &self,
        task: &PhaseTask,
        prompt: &str,
        toolkit: &ProjectToolkit,
    ) -> Result<String>;
}
