use super::*;
use crate::generator::templates::{PREVIOUS_OUTPUT_HEADING, PhaseTask};
use crate::types::citation::CitationExtras;
use async_trait::async_trait;
use std::sync::Mutex;
use tempfile::TempDir;

/// 按顺序返回预设输出的执行器
struct ScriptedExecutor {
    outputs: Mutex<Vec<Result<String, String>>>,
    prompts: Mutex<Vec<String>>,
    cite_sources: bool,
}

impl ScriptedExecutor {
    fn new(outputs: Vec<Result<&str, &str>>) -> Self {
        let mut outputs: Vec<Result<String, String>> = outputs
            .into_iter()
            .map(|output| output.map(str::to_string).map_err(str::to_string))
            .collect();
        outputs.reverse();
        Self {
            outputs: Mutex::new(outputs),
            prompts: Mutex::new(Vec::new()),
            cite_sources: false,
        }
    }

    fn citing(mut self) -> Self {
        self.cite_sources = true;
        self
    }

    fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl PhaseExecutor for ScriptedExecutor {
    async fn execute_phase(
        &self,
        task: &PhaseTask,
        prompt: &str,
        toolkit: &ProjectToolkit,
    ) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if self.cite_sources && task.uses_tools {
            toolkit
                .citations
                .lock()
                .await
                .add(
                    &format!("Source for {}", task.phase),
                    Some("https://example.org"),
                    vec!["Rivera".to_string()],
                    CitationExtras::default(),
                )
                .map_err(anyhow::Error::from)?;
        }

        let next = self.outputs.lock().unwrap().pop();
        match next {
            Some(Ok(output)) => Ok(output),
            Some(Err(error)) => Err(anyhow::anyhow!(error)),
            None => Err(anyhow::anyhow!("no scripted output left")),
        }
    }
}

fn request() -> ResearchRequest {
    ResearchRequest::new(
        "Renewable energy adoption in Europe",
        OutputFormat::ExecutiveBriefing,
        TargetAudience::Executive,
        DepthLevel::Overview,
    )
}

fn orchestrator(temp_dir: &TempDir, executor: Arc<ScriptedExecutor>) -> WorkflowOrchestrator {
    WorkflowOrchestrator::with_output_dir(temp_dir.path().join("outputs"), executor)
}

#[tokio::test]
async fn test_successful_run_returns_last_phase_output() {
    let temp_dir = TempDir::new().unwrap();
    let executor = Arc::new(ScriptedExecutor::new(vec![
        Ok("research notes"),
        Ok("analysis notes"),
        Ok("# Final Briefing"),
    ]));
    let mut workflow = orchestrator(&temp_dir, executor.clone());

    let result = workflow.execute(&request()).await;

    assert!(result.is_success(), "{:?}", result);
    assert_eq!(result.final_output(), Some("# Final Briefing"));

    let state = workflow.status();
    assert_eq!(state.status, WorkflowStatus::Completed);
    assert_eq!(
        state.completed_tasks,
        vec!["research_agent", "analysis_agent", "content_agent"]
    );
    assert_eq!(state.results.len(), 3);
    assert_eq!(state.results[2].output_chars, "# Final Briefing".len());
    assert!(state.end_time.is_some());
    assert!(state.errors.is_empty());
    assert_eq!(executor.prompts().len(), 3);
}

#[tokio::test]
async fn test_successful_run_writes_single_summary() {
    let temp_dir = TempDir::new().unwrap();
    let executor = Arc::new(ScriptedExecutor::new(vec![
        Ok("research notes"),
        Ok("analysis notes"),
        Ok("final document"),
    ]));
    let mut workflow = orchestrator(&temp_dir, executor);

    let result = workflow.execute(&request()).await;
    let ProjectResult::Success {
        metadata,
        summary_file,
        report_file,
        output_directory,
        ..
    } = result
    else {
        panic!("expected success, got {:?}", result);
    };

    let summaries = summary_files(&output_directory).unwrap();
    assert_eq!(summaries, vec![summary_file.clone()]);
    let file_name = summary_file.file_name().unwrap().to_str().unwrap();
    assert_eq!(
        file_name,
        format!("workflow_summary_{}.json", metadata.timestamp)
    );

    let summary: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&summary_file).unwrap()).unwrap();
    assert_eq!(summary["metadata"]["project_id"], metadata.project_id);
    assert_eq!(summary["workflow_state"]["status"], "completed");
    assert_eq!(summary["final_output_preview"], "final document");

    assert_eq!(std::fs::read_to_string(report_file).unwrap(), "final document");
    assert_eq!(metadata.output_format, "executive_briefing");
    assert_eq!(metadata.tools_used, vec!["web_search", "citation_manager", "quality_assessor"]);
    assert_ne!(metadata.workflow_duration, "unknown");
}

#[tokio::test]
async fn test_phase_output_is_handed_to_next_phase() {
    let temp_dir = TempDir::new().unwrap();
    let executor = Arc::new(ScriptedExecutor::new(vec![
        Ok("RESEARCH-OUTPUT"),
        Ok("ANALYSIS-OUTPUT"),
        Ok("CONTENT-OUTPUT"),
    ]));
    let mut workflow = orchestrator(&temp_dir, executor.clone());
    workflow.execute(&request()).await;

    let prompts = executor.prompts();
    assert!(!prompts[0].contains(PREVIOUS_OUTPUT_HEADING));
    assert!(prompts[1].contains("RESEARCH-OUTPUT"));
    assert!(prompts[2].contains("ANALYSIS-OUTPUT"));
    assert!(!prompts[2].contains("RESEARCH-OUTPUT"));
}

#[tokio::test]
async fn test_failed_phase_records_error_without_summary() {
    let temp_dir = TempDir::new().unwrap();
    let executor = Arc::new(ScriptedExecutor::new(vec![
        Ok("research notes"),
        Err("model unavailable"),
    ]));
    let mut workflow = orchestrator(&temp_dir, executor.clone());

    let result = workflow.execute(&request()).await;

    let error = result.error().unwrap();
    assert!(error.contains("analysis phase failed"));
    assert!(error.contains("model unavailable"));

    let state = workflow.status();
    assert_eq!(state.status, WorkflowStatus::Error);
    assert_eq!(state.errors.len(), 1);
    assert_eq!(state.completed_tasks, vec!["research_agent"]);
    assert_eq!(state.current_task.as_deref(), Some("analysis_agent"));
    assert_eq!(executor.prompts().len(), 2);
    assert!(
        summary_files(&temp_dir.path().join("outputs"))
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn test_summary_preview_is_truncated() {
    let temp_dir = TempDir::new().unwrap();
    let long_output = "x".repeat(800);
    let executor = Arc::new(ScriptedExecutor::new(vec![
        Ok("a"),
        Ok("b"),
        Ok(long_output.as_str()),
    ]));
    let mut workflow = orchestrator(&temp_dir, executor);

    let result = workflow.execute(&request()).await;
    let ProjectResult::Success {
        summary_file,
        final_output,
        ..
    } = result
    else {
        panic!("expected success");
    };

    assert_eq!(final_output.len(), 800);
    let summary: WorkflowSummary =
        serde_json::from_str(&std::fs::read_to_string(summary_file).unwrap()).unwrap();
    assert_eq!(summary.final_output_preview, format!("{}...", "x".repeat(500)));
}

#[tokio::test]
async fn test_recorded_citations_are_appended_to_report() {
    let temp_dir = TempDir::new().unwrap();
    let executor = Arc::new(
        ScriptedExecutor::new(vec![Ok("r"), Ok("a"), Ok("final text")]).citing(),
    );
    let mut workflow = orchestrator(&temp_dir, executor);

    let result = workflow.execute(&request()).await;
    let ProjectResult::Success { report_file, .. } = result else {
        panic!("expected success");
    };

    let report = std::fs::read_to_string(report_file).unwrap();
    assert!(report.starts_with("final text\n\n---\n\nBibliography (APA Style):"));
    assert!(report.contains("Source for research"));
    assert!(report.contains("Source for content"));
    assert!(!report.contains("Source for analysis"));
}

#[tokio::test]
async fn test_each_run_starts_with_fresh_toolkit() {
    let temp_dir = TempDir::new().unwrap();
    let executor = Arc::new(
        ScriptedExecutor::new(vec![
            Ok("r"),
            Ok("a"),
            Ok("first"),
            Ok("r"),
            Ok("a"),
            Ok("second"),
        ])
        .citing(),
    );
    let mut workflow = orchestrator(&temp_dir, executor);

    workflow.execute(&request()).await;
    let second = workflow.execute(&request()).await;
    let ProjectResult::Success { report_file, .. } = second else {
        panic!("expected success");
    };

    let report = std::fs::read_to_string(report_file).unwrap();
    assert_eq!(report.matches("Source for research").count(), 1);
}

#[test]
fn test_project_id_format() {
    let id = generate_project_id("Renewable energy adoption in Europe");
    let parts: Vec<&str> = id.split('_').collect();
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0], "research");
    assert_eq!(parts[1], Local::now().format("%Y%m%d").to_string());
    assert_eq!(parts[2].len(), 8);
    assert_eq!(id, generate_project_id("Renewable energy adoption in Europe"));
}

#[test]
fn test_initial_status() {
    let temp_dir = TempDir::new().unwrap();
    let workflow = orchestrator(&temp_dir, Arc::new(ScriptedExecutor::new(vec![])));
    let state = workflow.status();
    assert_eq!(state.status, WorkflowStatus::Initialized);
    assert_eq!(state.duration(), "unknown");
}

#[test]
fn test_available_enumerations() {
    assert_eq!(WorkflowOrchestrator::available_formats().len(), 5);
    assert_eq!(WorkflowOrchestrator::available_audiences().len(), 5);
    assert_eq!(
        WorkflowOrchestrator::available_depths(),
        vec!["overview", "detailed", "comprehensive", "expert"]
    );
}

#[test]
fn test_format_duration() {
    assert_eq!(
        state::format_duration(chrono::TimeDelta::seconds(3725)),
        "1:02:05"
    );
    assert_eq!(state::format_duration(chrono::TimeDelta::seconds(0)), "0:00:00");
}

#[test]
fn test_project_result_serialization() {
    let success = ProjectResult::Success {
        metadata: ProjectMetadata {
            project_id: "research_5f2c9a01".to_string(),
            timestamp: "20250301_101500".to_string(),
            research_query: "Electric vehicle battery recycling".to_string(),
            output_format: "comprehensive_report".to_string(),
            target_audience: "general".to_string(),
            depth_level: "detailed".to_string(),
            workflow_duration: "0:04:12".to_string(),
            agents_used: vec!["research_agent".to_string()],
            tools_used: vec!["web_search".to_string()],
        },
        final_output: "# Report".to_string(),
        summary_file: PathBuf::from("out/workflow_summary_20250301_101500.json"),
        report_file: PathBuf::from("out/research_report_20250301_101500.md"),
        output_directory: PathBuf::from("out"),
    };
    let value = serde_json::to_value(&success).unwrap();
    assert_eq!(value["status"], "success");
    assert_eq!(value["metadata"]["project_id"], "research_5f2c9a01");
    assert_eq!(value["final_output"], "# Report");
    assert_eq!(serde_json::from_value::<ProjectResult>(value).unwrap(), success);

    let failed = ProjectResult::Failed {
        error: "boom".to_string(),
    };
    let json = serde_json::to_string(&failed).unwrap();
    assert_eq!(json, r#"{"status":"failed","error":"boom"}"#);
    assert_eq!(serde_json::from_str::<ProjectResult>(&json).unwrap(), failed);
}
