use super::*;
use crate::generator::agents::ResearchPhase;
use crate::generator::context::ProjectToolkit;
use crate::generator::templates::PhaseTask;
use crate::types::research::{DepthLevel, OutputFormat, TargetAudience};
use anyhow::Result;
use async_trait::async_trait;
use tempfile::TempDir;
use tokio::sync::Notify;

/// 调研阶段等待放行信号的执行器
struct GatedExecutor {
    gate: Arc<Notify>,
    fail_analysis: bool,
}

#[async_trait]
impl PhaseExecutor for GatedExecutor {
    async fn execute_phase(
        &self,
        task: &PhaseTask,
        _prompt: &str,
        _toolkit: &ProjectToolkit,
    ) -> Result<String> {
        match task.phase {
            ResearchPhase::Research => {
                self.gate.notified().await;
                Ok("findings".to_string())
            }
            ResearchPhase::Analysis if self.fail_analysis => {
                Err(anyhow::anyhow!("model unavailable"))
            }
            ResearchPhase::Analysis => Ok("insights".to_string()),
            ResearchPhase::Content => Ok("# Final report".to_string()),
        }
    }
}

fn request() -> ResearchRequest {
    ResearchRequest::new(
        "Electric vehicle battery recycling",
        OutputFormat::ComprehensiveReport,
        TargetAudience::General,
        DepthLevel::Detailed,
    )
}

fn service(temp_dir: &TempDir, fail_analysis: bool) -> (ResearchService, Arc<Notify>) {
    let gate = Arc::new(Notify::new());
    let executor = Arc::new(GatedExecutor {
        gate: gate.clone(),
        fail_analysis,
    });
    let service = ResearchService::with_output_dir(temp_dir.path(), executor).with_reference_year(2025);
    (service, gate)
}

#[tokio::test]
async fn test_initial_status_is_idle() {
    let temp_dir = TempDir::new().unwrap();
    let (service, _) = service(&temp_dir, false);

    let current = service.status().await;
    assert_eq!(current.status, ResearchStatus::Idle);
    assert!(current.request.is_none());
    assert!(current.result.is_none());
}

#[tokio::test]
async fn test_second_start_while_running_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let (service, gate) = service(&temp_dir, false);

    let handle = service.start(request()).await.unwrap();
    assert_eq!(service.status().await.status, ResearchStatus::Running);
    assert_eq!(
        service.start(request()).await.unwrap_err(),
        ServiceError::AlreadyRunning
    );
    assert_eq!(
        service.reset().await.unwrap_err(),
        ServiceError::ResetWhileRunning
    );

    gate.notify_one();
    handle.await.unwrap();

    let current = service.status().await;
    assert_eq!(current.status, ResearchStatus::Completed);
    assert_eq!(
        current.result.as_ref().and_then(ProjectResult::final_output),
        Some("# Final report")
    );
}

#[tokio::test]
async fn test_failed_project_sets_error_status() {
    let temp_dir = TempDir::new().unwrap();
    let (service, gate) = service(&temp_dir, true);

    gate.notify_one();
    service.start(request()).await.unwrap().await.unwrap();

    let current = service.status().await;
    assert_eq!(current.status, ResearchStatus::Error);
    let error = current.result.as_ref().and_then(ProjectResult::error).unwrap();
    assert!(error.contains("model unavailable"));
}

#[tokio::test]
async fn test_reset_and_restart_after_completion() {
    let temp_dir = TempDir::new().unwrap();
    let (service, gate) = service(&temp_dir, false);

    gate.notify_one();
    service.start(request()).await.unwrap().await.unwrap();
    service.reset().await.unwrap();
    assert_eq!(service.status().await.status, ResearchStatus::Idle);

    gate.notify_one();
    service.start(request()).await.unwrap().await.unwrap();
    assert_eq!(service.status().await.status, ResearchStatus::Completed);
}

/// 执行阶段时直接 panic
struct PanickingExecutor;

#[async_trait]
impl PhaseExecutor for PanickingExecutor {
    async fn execute_phase(
        &self,
        _task: &PhaseTask,
        _prompt: &str,
        _toolkit: &ProjectToolkit,
    ) -> Result<String> {
        panic!("delegate crashed");
    }
}

#[tokio::test]
async fn test_panicking_delegate_does_not_wedge_service() {
    let temp_dir = TempDir::new().unwrap();
    let service = ResearchService::with_output_dir(temp_dir.path(), Arc::new(PanickingExecutor));

    service.start(request()).await.unwrap().await.unwrap();

    let current = service.status().await;
    assert_eq!(current.status, ResearchStatus::Error);
    let error = current.result.as_ref().and_then(ProjectResult::error).unwrap();
    assert!(error.starts_with("Research task aborted"));

    // 可以再次启动，也可以重置
    service.start(request()).await.unwrap().await.unwrap();
    assert_eq!(service.status().await.status, ResearchStatus::Error);
    service.reset().await.unwrap();
    assert_eq!(service.status().await.status, ResearchStatus::Idle);
}

#[test]
fn test_status_display() {
    assert_eq!(ResearchStatus::Idle.to_string(), "idle");
    assert_eq!(ResearchStatus::Running.to_string(), "running");
    assert_eq!(
        serde_json::to_string(&ResearchStatus::Completed).unwrap(),
        "\"completed\""
    );
}
