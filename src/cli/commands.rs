//! 子命令执行与终端输出

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

use super::Command;
use super::repl::Repl;
use crate::citation::CitationStore;
use crate::config::Config;
use crate::generator::validation::{ValidationReport, estimate_duration, parse_request};
use crate::generator::workflow::{ProjectResult, WorkflowOrchestrator, WorkflowState};
use crate::llm::client::LLMClient;
use crate::quality::QualityScorer;
use crate::types::citation::CitationExtras;
use crate::utils::text::preview;

pub const EXAMPLE_QUERIES: [&str; 8] = [
    "Artificial intelligence trends in healthcare 2024",
    "Sustainable manufacturing practices in automotive industry",
    "Remote work impact on employee productivity and satisfaction",
    "Blockchain applications in supply chain management",
    "Climate change adaptation strategies for coastal cities",
    "Digital transformation challenges in small businesses",
    "Cybersecurity best practices for financial institutions",
    "Renewable energy adoption in developing countries",
];

pub const HELP_TEXT: &str = "
🤖 research-crew - Available Commands:

QUICK COMMANDS:
  research: <query>     - Quick research with default settings
  help                  - Show this help message
  formats               - Show available output formats
  examples              - Show example research queries
  status                - Show current workflow status
  test                  - Test system components
  quit/exit/q           - Exit the application

FULL RESEARCH MODE:
  Simply type your research query and press Enter to start the
  interactive configuration process.

EXAMPLES:
  research: artificial intelligence trends 2024
  research: sustainable energy solutions for manufacturing
  research: remote work productivity best practices

TROUBLESHOOTING:
  - Use 'test' command to check system components
  - Ensure the LLM API key is configured
  - Check internet connectivity for web searches
";

pub fn render_formats() -> String {
    format!(
        "📋 Available Options:\nOutput Formats: {}\nTarget Audiences: {}\nDepth Levels: {}",
        WorkflowOrchestrator::available_formats().join(", "),
        WorkflowOrchestrator::available_audiences().join(", "),
        WorkflowOrchestrator::available_depths().join(", ")
    )
}

pub fn render_examples() -> String {
    let mut rendered = String::from("💡 Example Research Queries:");
    for (i, example) in EXAMPLE_QUERIES.iter().enumerate() {
        rendered.push_str(&format!("\n  {}. {}", i + 1, example));
    }
    rendered
}

pub fn render_status(state: &WorkflowState) -> String {
    let mut rendered = format!("📊 Workflow Status: {}", state.status);
    if let Some(ref task) = state.current_task {
        rendered.push_str(&format!("\nCurrent Task: {}", task));
    }
    if !state.completed_tasks.is_empty() {
        rendered.push_str(&format!(
            "\nCompleted Tasks: {}",
            state.completed_tasks.len()
        ));
    }
    rendered
}

pub fn render_validation(report: &ValidationReport) -> String {
    let mut rendered = String::from("❌ Invalid inputs:");
    for error in &report.errors {
        rendered.push_str(&format!("\n  - {}", error));
    }
    rendered
}

/// 项目结果的终端展示，成功时列出输出目录中的文件
pub fn render_results(result: &ProjectResult) -> String {
    let divider = "=".repeat(60);
    let mut rendered = format!("{}\n📋 RESEARCH RESULTS\n{}\n", divider, divider);

    match result {
        ProjectResult::Success {
            metadata,
            final_output,
            summary_file,
            report_file,
            output_directory,
        } => {
            rendered.push_str("✅ Research completed successfully!\n");
            rendered.push_str("\n📊 Project Details:\n");
            rendered.push_str(&format!("  - Project ID: {}\n", metadata.project_id));
            rendered.push_str(&format!("  - Duration: {}\n", metadata.workflow_duration));
            rendered.push_str(&format!(
                "  - Output Directory: {}\n",
                output_directory.display()
            ));
            rendered.push_str(&format!("  - Summary File: {}\n", summary_file.display()));
            rendered.push_str(&format!("  - Report File: {}\n", report_file.display()));

            if !final_output.is_empty() {
                rendered.push_str("\n📄 Output Preview:\n");
                rendered.push_str(&preview(final_output, 500));
                rendered.push('\n');
            }

            let files = list_files(output_directory);
            if !files.is_empty() {
                rendered.push_str("\n📁 Generated Files:\n");
                for file in files {
                    rendered.push_str(&format!("  - {}\n", file));
                }
            }
        }
        ProjectResult::Failed { error } => {
            rendered.push_str("❌ Research failed!\n");
            rendered.push_str(&format!("Error: {}\n", error));
        }
    }

    rendered
}

fn list_files(dir: &Path) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut files: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .collect();
    files.sort();
    files
}

/// 离线检查配置与内置工具
pub fn selftest(config: &Config) -> String {
    let mut rendered = String::from("🧪 Testing System Components...");

    match config.validate() {
        Ok(()) => rendered.push_str("\n✅ Configuration: Valid"),
        Err(e) => rendered.push_str(&format!("\n❌ Configuration: {}", e)),
    }

    let mut store = CitationStore::new();
    match store.add(
        "Test Article",
        Some("https://example.com"),
        Vec::new(),
        CitationExtras::default(),
    ) {
        Ok(_) => rendered.push_str("\n✅ Citation Manager: Working"),
        Err(e) => rendered.push_str(&format!("\n⚠️ Citation Manager: {}", e)),
    }

    let mut scorer = QualityScorer::new();
    match scorer.assess(
        "This is a test content for quality assessment.",
        None,
        None,
    ) {
        Ok(assessment)
            if assessment
                .metrics
                .render(&assessment.assessment_id)
                .contains("Quality Assessment Results") =>
        {
            rendered.push_str("\n✅ Quality Assessor: Working")
        }
        Ok(_) => rendered.push_str("\n⚠️ Quality Assessor: unexpected report"),
        Err(e) => rendered.push_str(&format!("\n⚠️ Quality Assessor: {}", e)),
    }

    rendered
}

async fn connect(config: &Config) -> Result<LLMClient> {
    config.validate()?;
    config.create_directories()?;
    let client = LLMClient::new(config.clone())?;
    client.check_connection().await?;
    Ok(client)
}

pub async fn dispatch(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Run(options) => {
            let request = match parse_request(
                &options.query_text(),
                &options.format,
                &options.audience,
                &options.depth,
            ) {
                Ok(request) => request,
                Err(report) => {
                    println!("{}", render_validation(&report));
                    anyhow::bail!("Invalid inputs: {}", report);
                }
            };
            println!(
                "⏱️  Estimated duration: {}",
                estimate_duration(&options.depth, &options.format)
            );

            let client = connect(config).await?;
            let mut orchestrator = WorkflowOrchestrator::new(config, Arc::new(client));
            println!("🔍 Starting research: {}", request.query);
            let result = orchestrator.execute(&request).await;
            println!("{}", render_results(&result));

            if let Some(error) = result.error() {
                anyhow::bail!("Research failed: {}", error);
            }
            Ok(())
        }
        Command::Validate(options) => {
            match parse_request(
                &options.query_text(),
                &options.format,
                &options.audience,
                &options.depth,
            ) {
                Ok(_) => {
                    println!("✅ Inputs are valid");
                    println!(
                        "⏱️  Estimated duration: {}",
                        estimate_duration(&options.depth, &options.format)
                    );
                    Ok(())
                }
                Err(report) => {
                    println!("{}", render_validation(&report));
                    anyhow::bail!("Invalid inputs: {}", report)
                }
            }
        }
        Command::Estimate { depth, format } => {
            println!("⏱️  Estimated duration: {}", estimate_duration(&depth, &format));
            Ok(())
        }
        Command::Formats => {
            println!("{}", render_formats());
            Ok(())
        }
        Command::Examples => {
            println!("{}", render_examples());
            Ok(())
        }
        Command::Selftest => {
            println!("{}", selftest(config));
            Ok(())
        }
        Command::Repl => {
            let client = connect(config).await?;
            let orchestrator = WorkflowOrchestrator::new(config, Arc::new(client));
            let reader = tokio::io::BufReader::new(tokio::io::stdin());
            let mut repl = Repl::new(orchestrator, config.clone(), reader, std::io::stdout());
            repl.run().await
        }
    }
}
