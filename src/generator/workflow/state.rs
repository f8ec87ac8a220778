use chrono::{DateTime, Local, TimeDelta};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::path::PathBuf;

use crate::generator::agents::ResearchPhase;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStatus {
    #[default]
    Initialized,
    Running,
    Completed,
    Error,
}

impl Display for WorkflowStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkflowStatus::Initialized => write!(f, "initialized"),
            WorkflowStatus::Running => write!(f, "running"),
            WorkflowStatus::Completed => write!(f, "completed"),
            WorkflowStatus::Error => write!(f, "error"),
        }
    }
}

/// 单个阶段的执行记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseRecord {
    pub phase: ResearchPhase,
    pub output_chars: usize,
    pub duration_ms: u64,
}

/// 编排器的运行状态，只由编排器修改
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkflowState {
    pub status: WorkflowStatus,
    pub current_task: Option<String>,
    pub completed_tasks: Vec<String>,
    pub start_time: Option<DateTime<Local>>,
    pub end_time: Option<DateTime<Local>>,
    pub results: Vec<PhaseRecord>,
    pub errors: Vec<String>,
}

impl WorkflowState {
    /// 开始时间与结束时间都存在时才计算耗时
    pub fn duration(&self) -> String {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => format_duration(end - start),
            _ => "unknown".to_string(),
        }
    }
}

/// 格式化为 H:MM:SS
pub fn format_duration(delta: TimeDelta) -> String {
    let seconds = delta.num_seconds().max(0);
    format!(
        "{}:{:02}:{:02}",
        seconds / 3600,
        seconds % 3600 / 60,
        seconds % 60
    )
}

/// 项目元数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    pub project_id: String,
    pub timestamp: String,
    pub research_query: String,
    pub output_format: String,
    pub target_audience: String,
    pub depth_level: String,
    pub workflow_duration: String,
    pub agents_used: Vec<String>,
    pub tools_used: Vec<String>,
}

/// 写入磁盘的工作流摘要
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowSummary {
    pub metadata: ProjectMetadata,
    pub workflow_state: WorkflowState,
    pub final_output_preview: String,
}

/// 返回给调用方的项目结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProjectResult {
    Success {
        metadata: ProjectMetadata,
        final_output: String,
        summary_file: PathBuf,
        report_file: PathBuf,
        output_directory: PathBuf,
    },
    Failed {
        error: String,
    },
}

impl ProjectResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ProjectResult::Success { .. })
    }

    pub fn final_output(&self) -> Option<&str> {
        match self {
            ProjectResult::Success { final_output, .. } => Some(final_output),
            ProjectResult::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ProjectResult::Success { .. } => None,
            ProjectResult::Failed { error } => Some(error),
        }
    }
}
