//! 工作流编排 - 顺序执行调研、分析、撰写三个阶段

use anyhow::{Context, Result};
use chrono::Local;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::generator::agents::ResearchPhase;
use crate::generator::context::ProjectToolkit;
use crate::generator::outlet::{DiskOutlet, Outlet, ProjectArtifacts};
use crate::generator::templates::TaskTemplateBuilder;
use crate::llm::completion::PhaseExecutor;
use crate::quality::QualityScorer;
use crate::types::research::{DepthLevel, OutputFormat, ResearchRequest, TargetAudience};
use crate::utils::hashing::short_digest;
use crate::utils::text::preview;

pub mod state;

pub use state::{
    PhaseRecord, ProjectMetadata, ProjectResult, WorkflowState, WorkflowStatus, WorkflowSummary,
};

/// 摘要文件中最终输出的预览长度
const PREVIEW_CHARS: usize = 500;

pub const TOOLS_USED: [&str; 3] = ["web_search", "citation_manager", "quality_assessor"];

/// 项目ID: research_{日期}_{查询摘要}，同一天的相同查询会得到相同ID
pub fn generate_project_id(query: &str) -> String {
    format!(
        "research_{}_{}",
        Local::now().format("%Y%m%d"),
        short_digest(query, 8)
    )
}

pub struct WorkflowOrchestrator {
    executor: Arc<dyn PhaseExecutor>,
    templates: TaskTemplateBuilder,
    outlet: DiskOutlet,
    reference_year: Option<i32>,
    state: WorkflowState,
}

impl WorkflowOrchestrator {
    pub fn new(config: &Config, executor: Arc<dyn PhaseExecutor>) -> Self {
        Self::with_output_dir(&config.output_path, executor)
    }

    pub fn with_output_dir(output_dir: impl AsRef<Path>, executor: Arc<dyn PhaseExecutor>) -> Self {
        Self {
            executor,
            templates: TaskTemplateBuilder::new(output_dir.as_ref()),
            outlet: DiskOutlet::new(output_dir),
            reference_year: None,
            state: WorkflowState::default(),
        }
    }

    /// 固定质量评估使用的当前年份
    pub fn with_reference_year(mut self, year: i32) -> Self {
        self.reference_year = Some(year);
        self
    }

    pub fn output_dir(&self) -> &Path {
        self.outlet.output_dir()
    }

    /// 执行一个完整的调研项目，失败时记录错误并返回Failed
    pub async fn execute(&mut self, request: &ResearchRequest) -> ProjectResult {
        self.state = WorkflowState {
            status: WorkflowStatus::Running,
            start_time: Some(Local::now()),
            ..Default::default()
        };
        tracing::info!("🚀 Starting research project: {}", request.query);

        match self.run_project(request).await {
            Ok(result) => {
                self.state.status = WorkflowStatus::Completed;
                self.state.current_task = None;
                tracing::info!("✅ Research project completed: {}", request.query);
                result
            }
            Err(err) => {
                let error = format!("{:#}", err);
                self.state.status = WorkflowStatus::Error;
                self.state.errors.push(error.clone());
                tracing::error!("❌ Error in research workflow: {}", error);
                ProjectResult::Failed { error }
            }
        }
    }

    async fn run_project(&mut self, request: &ResearchRequest) -> Result<ProjectResult> {
        let toolkit = match self.reference_year {
            Some(year) => ProjectToolkit::with_scorer(QualityScorer::with_reference_year(year)),
            None => ProjectToolkit::new(),
        };

        let final_output = self.run_phases(request, &toolkit).await?;
        tracing::info!("📚 Citations recorded: {}", toolkit.citation_count().await);

        let end_time = Local::now();
        self.state.end_time = Some(end_time);
        let timestamp = end_time.format("%Y%m%d_%H%M%S").to_string();
        let metadata = self.build_metadata(request, &timestamp);

        let summary = WorkflowSummary {
            metadata: metadata.clone(),
            workflow_state: WorkflowState {
                status: WorkflowStatus::Completed,
                current_task: None,
                ..self.state.clone()
            },
            final_output_preview: preview(&final_output, PREVIEW_CHARS),
        };
        let artifacts = ProjectArtifacts {
            timestamp: &timestamp,
            summary: &summary,
            final_output: &final_output,
            bibliography: toolkit.bibliography().await,
        };
        let saved = self.outlet.save(&artifacts).await?;

        Ok(ProjectResult::Success {
            metadata,
            final_output,
            summary_file: saved.summary_file,
            report_file: saved.report_file,
            output_directory: self.output_dir().to_path_buf(),
        })
    }

    /// 顺序执行各阶段，上一阶段的输出嵌入下一阶段的任务说明
    async fn run_phases(
        &mut self,
        request: &ResearchRequest,
        toolkit: &ProjectToolkit,
    ) -> Result<String> {
        let tasks = self.templates.build(request);
        let mut previous_output: Option<String> = None;

        for task in &tasks {
            let agent_name = task.phase.agent_name();
            self.state.current_task = Some(agent_name.to_string());
            tracing::info!("🤖 Phase {} started ({})", task.phase, task.profile.role);

            let prompt = task.render(previous_output.as_deref());
            let started = Instant::now();
            let output = self
                .executor
                .execute_phase(task, &prompt, toolkit)
                .await
                .with_context(|| format!("{} phase failed", task.phase))?;
            let duration_ms = started.elapsed().as_millis() as u64;

            tracing::info!(
                "✅ Phase {} finished in {:.2}s ({} chars)",
                task.phase,
                duration_ms as f64 / 1000.0,
                output.chars().count()
            );
            self.state.results.push(PhaseRecord {
                phase: task.phase,
                output_chars: output.chars().count(),
                duration_ms,
            });
            self.state.completed_tasks.push(agent_name.to_string());
            previous_output = Some(output);
        }

        previous_output.context("Workflow finished without producing output")
    }

    fn build_metadata(&self, request: &ResearchRequest, timestamp: &str) -> ProjectMetadata {
        ProjectMetadata {
            project_id: generate_project_id(&request.query),
            timestamp: timestamp.to_string(),
            research_query: request.query.clone(),
            output_format: request.output_format.to_string(),
            target_audience: request.target_audience.to_string(),
            depth_level: request.depth_level.to_string(),
            workflow_duration: self.state.duration(),
            agents_used: ResearchPhase::ALL
                .iter()
                .map(|phase| phase.agent_name().to_string())
                .collect(),
            tools_used: TOOLS_USED.iter().map(|tool| tool.to_string()).collect(),
        }
    }

    /// 当前状态的快照
    pub fn status(&self) -> WorkflowState {
        self.state.clone()
    }

    pub fn available_formats() -> Vec<&'static str> {
        OutputFormat::ALL.iter().map(OutputFormat::as_str).collect()
    }

    pub fn available_audiences() -> Vec<&'static str> {
        TargetAudience::ALL
            .iter()
            .map(TargetAudience::as_str)
            .collect()
    }

    pub fn available_depths() -> Vec<&'static str> {
        DepthLevel::ALL.iter().map(DepthLevel::as_str).collect()
    }
}

/// 列出目录中的工作流摘要文件
pub fn summary_files(output_dir: &Path) -> Result<Vec<PathBuf>> {
    if !output_dir.exists() {
        return Ok(Vec::new());
    }
    let mut files = Vec::new();
    for entry in std::fs::read_dir(output_dir)? {
        let path = entry?.path();
        let is_summary = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with("workflow_summary_") && name.ends_with(".json"));
        if is_summary {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests;
