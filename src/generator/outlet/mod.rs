use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::generator::workflow::state::WorkflowSummary;

/// 一次成功运行需要落盘的内容
pub struct ProjectArtifacts<'a> {
    pub timestamp: &'a str,
    pub summary: &'a WorkflowSummary,
    pub final_output: &'a str,
    pub bibliography: Option<String>,
}

/// 已写入的文件
#[derive(Debug, Clone, PartialEq)]
pub struct SavedFiles {
    pub summary_file: PathBuf,
    pub report_file: PathBuf,
}

pub trait Outlet {
    async fn save(&self, artifacts: &ProjectArtifacts<'_>) -> Result<SavedFiles>;
}

pub fn summary_filename(timestamp: &str) -> String {
    format!("workflow_summary_{}.json", timestamp)
}

pub fn report_filename(timestamp: &str) -> String {
    format!("research_report_{}.md", timestamp)
}

pub struct DiskOutlet {
    output_dir: PathBuf,
}

impl DiskOutlet {
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl Outlet for DiskOutlet {
    async fn save(&self, artifacts: &ProjectArtifacts<'_>) -> Result<SavedFiles> {
        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!(
                "Failed to create output directory {}",
                self.output_dir.display()
            )
        })?;

        let summary_json = serde_json::to_string_pretty(artifacts.summary)
            .context("Failed to serialize workflow summary")?;

        let mut report = artifacts.final_output.to_string();
        if let Some(bibliography) = &artifacts.bibliography {
            report.push_str("\n\n---\n\n");
            report.push_str(bibliography);
        }
        let report_file = self.output_dir.join(report_filename(artifacts.timestamp));
        fs::write(&report_file, report)
            .with_context(|| format!("Failed to write {}", report_file.display()))?;

        // 摘要是运行成功的标记，写入失败时报告也不能留下
        let summary_file = self.output_dir.join(summary_filename(artifacts.timestamp));
        if let Err(e) = fs::write(&summary_file, summary_json) {
            if let Err(remove_err) = fs::remove_file(&report_file) {
                tracing::warn!(
                    "Failed to remove {}: {}",
                    report_file.display(),
                    remove_err
                );
            }
            return Err(e).with_context(|| format!("Failed to write {}", summary_file.display()));
        }
        tracing::info!("💾 Research report saved: {}", report_file.display());
        tracing::info!("💾 Workflow summary saved: {}", summary_file.display());

        Ok(SavedFiles {
            summary_file,
            report_file,
        })
    }
}
