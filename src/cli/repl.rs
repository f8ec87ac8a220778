//! 交互模式

use anyhow::Result;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

use super::commands::{
    HELP_TEXT, render_examples, render_formats, render_results, render_status, render_validation,
    selftest,
};
use crate::config::Config;
use crate::generator::validation::{estimate_duration, parse_request};
use crate::generator::workflow::WorkflowOrchestrator;
use crate::types::research::{DepthLevel, OutputFormat, ResearchRequest, TargetAudience};

const QUICK_PREFIX: &str = "research:";

enum Flow {
    Continue,
    Quit,
}

/// 逐行读取命令的交互会话
pub struct Repl<R, W> {
    orchestrator: WorkflowOrchestrator,
    config: Config,
    lines: Lines<R>,
    out: W,
}

impl<R, W> Repl<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(orchestrator: WorkflowOrchestrator, config: Config, reader: R, out: W) -> Self {
        Self {
            orchestrator,
            config,
            lines: reader.lines(),
            out,
        }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub async fn run(&mut self) -> Result<()> {
        writeln!(self.out, "🎯 Interactive Research Mode")?;
        writeln!(self.out, "Type 'help' for available commands or 'quit' to exit")?;

        loop {
            write!(self.out, "\n> ")?;
            self.out.flush()?;
            let Some(line) = self.lines.next_line().await? else {
                writeln!(self.out, "👋 Goodbye!")?;
                break;
            };
            if let Flow::Quit = self.handle(line.trim()).await? {
                break;
            }
        }
        Ok(())
    }

    async fn handle(&mut self, input: &str) -> Result<Flow> {
        match input.to_lowercase().as_str() {
            "" => {}
            "quit" | "exit" | "q" => {
                writeln!(self.out, "👋 Goodbye!")?;
                return Ok(Flow::Quit);
            }
            "help" => writeln!(self.out, "{}", HELP_TEXT)?,
            "formats" => writeln!(self.out, "{}", render_formats())?,
            "examples" => writeln!(self.out, "{}", render_examples())?,
            "status" => writeln!(self.out, "{}", render_status(&self.orchestrator.status()))?,
            "test" => writeln!(self.out, "{}", selftest(&self.config))?,
            _ => {
                if let Some(query) = input.strip_prefix(QUICK_PREFIX) {
                    self.quick_research(query.trim()).await?;
                } else {
                    self.full_research(input).await?;
                }
            }
        }
        Ok(Flow::Continue)
    }

    /// 使用简报格式的默认参数直接执行
    async fn quick_research(&mut self, query: &str) -> Result<()> {
        if query.is_empty() {
            writeln!(
                self.out,
                "❌ Please provide a research query after '{}'",
                QUICK_PREFIX
            )?;
            return Ok(());
        }
        writeln!(self.out, "🚀 Quick Research: {}", query)?;

        match parse_request(
            query,
            OutputFormat::ExecutiveBriefing.as_str(),
            TargetAudience::Professional.as_str(),
            DepthLevel::Detailed.as_str(),
        ) {
            Ok(request) => self.execute(request).await,
            Err(report) => {
                writeln!(self.out, "{}", render_validation(&report))?;
                Ok(())
            }
        }
    }

    /// 逐项询问格式、读者与深度，确认后执行
    async fn full_research(&mut self, query: &str) -> Result<()> {
        writeln!(self.out, "📊 Full Research Mode")?;
        writeln!(self.out, "Research Query: {}", query)?;

        writeln!(
            self.out,
            "\nAvailable formats: {}",
            WorkflowOrchestrator::available_formats().join(", ")
        )?;
        let format = self
            .ask_with_default("Output format", OutputFormat::default().as_str())
            .await?;

        writeln!(
            self.out,
            "\nAvailable audiences: {}",
            WorkflowOrchestrator::available_audiences().join(", ")
        )?;
        let audience = self
            .ask_with_default("Target audience", TargetAudience::default().as_str())
            .await?;

        writeln!(
            self.out,
            "\nAvailable depth levels: {}",
            WorkflowOrchestrator::available_depths().join(", ")
        )?;
        let depth = self
            .ask_with_default("Depth level", DepthLevel::default().as_str())
            .await?;

        let request = match parse_request(query, &format, &audience, &depth) {
            Ok(request) => request,
            Err(report) => {
                writeln!(self.out, "{}", render_validation(&report))?;
                return Ok(());
            }
        };

        writeln!(
            self.out,
            "\n⏱️  Estimated duration: {}",
            estimate_duration(&depth, &format)
        )?;
        let confirm = self.ask("\nProceed with research? (y/N): ").await?;
        if !matches!(confirm.to_lowercase().as_str(), "y" | "yes") {
            writeln!(self.out, "Research cancelled.")?;
            return Ok(());
        }

        self.execute(request).await
    }

    async fn execute(&mut self, request: ResearchRequest) -> Result<()> {
        let result = self.orchestrator.execute(&request).await;
        writeln!(self.out, "\n{}", render_results(&result))?;
        Ok(())
    }

    async fn ask_with_default(&mut self, label: &str, default: &str) -> Result<String> {
        let answer = self
            .ask(&format!("{} (press Enter for '{}'): ", label, default))
            .await?;
        if answer.is_empty() {
            return Ok(default.to_string());
        }
        Ok(answer)
    }

    /// 输入结束时返回空字符串
    async fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;
        let line = self.lines.next_line().await?.unwrap_or_default();
        Ok(line.trim().to_string())
    }
}
