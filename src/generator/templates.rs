//! 阶段任务模板 - 按请求参数生成三个阶段的任务说明

use std::path::{Path, PathBuf};

use crate::generator::agents::{
    AgentProfile, AnalysisAgent, ContentAgent, PhaseAgent, ResearchAgent, ResearchPhase,
};
use crate::types::research::{OutputFormat, ResearchRequest};

/// 上一阶段输出在任务说明中的标题
pub const PREVIOUS_OUTPUT_HEADING: &str = "OUTPUT FROM PREVIOUS PHASE";

/// 单个阶段的完整任务
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseTask {
    pub phase: ResearchPhase,
    pub profile: AgentProfile,
    pub uses_tools: bool,
    pub description: String,
    pub expected_output: String,
}

impl PhaseTask {
    /// 渲染为发送给Agent的提示词，并显式附上上一阶段的输出
    pub fn render(&self, previous_output: Option<&str>) -> String {
        let mut prompt = format!(
            "{}\n\nEXPECTED OUTPUT:\n{}",
            self.description.trim_end(),
            self.expected_output.trim_end()
        );

        if let Some(previous) = previous_output {
            prompt.push_str(&format!(
                "\n\n## {} ({})\n{}",
                PREVIOUS_OUTPUT_HEADING,
                previous_phase_label(self.phase),
                previous
            ));
        }
        prompt
    }
}

fn previous_phase_label(phase: ResearchPhase) -> &'static str {
    match phase {
        ResearchPhase::Research => "none",
        ResearchPhase::Analysis => "research",
        ResearchPhase::Content => "analysis",
    }
}

/// 按输出格式查找内容规格，未知格式退回综合报告
pub fn format_specification(output_format: &str) -> &'static str {
    let format = output_format
        .parse::<OutputFormat>()
        .unwrap_or(OutputFormat::ComprehensiveReport);
    specification_for(format)
}

fn specification_for(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::ComprehensiveReport => {
            r#"CREATE A COMPREHENSIVE RESEARCH REPORT:
- Length: 3000-5000 words (for detailed depth)
- Structure: Title page, executive summary, table of contents, introduction,
  methodology, findings, analysis, recommendations, conclusion, references
- Include data tables, charts suggestions, and appendices
- Professional academic/business formatting"#
        }
        OutputFormat::ExecutiveBriefing => {
            r#"CREATE AN EXECUTIVE BRIEFING:
- Length: 1000-1500 words
- Structure: Executive summary, key findings, strategic implications,
  recommendations, next steps
- Focus on high-level insights and strategic implications
- Include key metrics and performance indicators"#
        }
        OutputFormat::Presentation => {
            r#"CREATE PRESENTATION CONTENT:
- Structure: 15-20 slides worth of content
- Include slide titles, bullet points, and speaker notes
- Visual elements suggestions for each slide
- Focus on key messages and actionable insights"#
        }
        OutputFormat::TechnicalSummary => {
            r#"CREATE A TECHNICAL SUMMARY:
- Length: 2000-3000 words
- Structure: Abstract, introduction, technical findings, methodology,
  results, discussion, conclusion, technical appendices
- Include detailed technical analysis and data
- Appropriate for expert/technical audience"#
        }
        OutputFormat::PolicyBrief => {
            r#"CREATE A POLICY BRIEF:
- Length: 1500-2000 words
- Structure: Executive summary, issue background, policy analysis,
  recommendations, implementation considerations
- Focus on policy implications and recommendations
- Include cost-benefit analysis where relevant"#
        }
    }
}

/// 任务模板构建器
pub struct TaskTemplateBuilder {
    output_dir: PathBuf,
}

impl TaskTemplateBuilder {
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// 按执行顺序生成三个阶段的任务
    pub fn build(&self, request: &ResearchRequest) -> Vec<PhaseTask> {
        vec![
            self.research_brief(request),
            self.analysis_brief(request),
            self.content_brief(request),
        ]
    }

    pub fn research_brief(&self, request: &ResearchRequest) -> PhaseTask {
        let agent = ResearchAgent;
        let description = format!(
            r#"Conduct comprehensive research on: "{query}"

REQUIREMENTS:
- Depth Level: {depth}
- Target Audience: {audience}
- Use multiple reliable sources (minimum 8-10 sources)
- Prioritize recent information (last 2-3 years when possible)
- Include both quantitative and qualitative data
- Assess source credibility using the quality_assessor tool
- Document all sources using the citation_manager tool

RESEARCH AREAS TO COVER:
1. Current state and recent developments
2. Key trends and patterns
3. Major players and stakeholders
4. Challenges and opportunities
5. Future outlook and predictions
6. Best practices and lessons learned
7. Comparative analysis where relevant
8. Statistical data and metrics

DELIVERABLES:
- Comprehensive research findings organized by topic
- Source credibility assessments for all materials
- Properly formatted citations for all sources
- Identification of any research gaps or limitations
- Raw data and supporting evidence

{guidelines}"#,
            query = request.query,
            depth = request.depth_level,
            audience = request.target_audience,
            guidelines = agent.guidelines(),
        );

        PhaseTask {
            phase: agent.phase(),
            profile: agent.profile(),
            uses_tools: agent.uses_tools(),
            description,
            expected_output: r#"A comprehensive research report containing:
1. Executive summary of research findings
2. Detailed findings organized by key themes
3. Source analysis and credibility assessments
4. Data tables and key statistics
5. Complete bibliography with quality scores
6. Research limitations and gaps identified"#
                .to_string(),
        }
    }

    pub fn analysis_brief(&self, request: &ResearchRequest) -> PhaseTask {
        let agent = AnalysisAgent;
        let description = format!(
            r#"Analyze the research findings and generate strategic insights for: "{query}"

REQUIREMENTS:
- Build upon the research findings from the previous phase
- Depth Level: {depth}
- Target Audience: {audience}
- Identify patterns, trends, and correlations
- Generate actionable insights and recommendations
- Assess risks and opportunities
- Provide strategic implications

ANALYSIS AREAS:
1. Trend Analysis: Identify key trends and their implications
2. Comparative Analysis: Compare different approaches, solutions, or options
3. Gap Analysis: Identify missing elements or opportunities
4. Risk Assessment: Evaluate potential risks and mitigation strategies
5. Impact Analysis: Assess potential impacts of different scenarios
6. Strategic Analysis: Develop strategic recommendations
7. Quantitative Analysis: Analyze numerical data and statistics
8. Qualitative Analysis: Synthesize themes and patterns from qualitative data

DELIVERABLES:
- Key insights ranked by importance and impact
- Trend analysis with future implications
- Strategic recommendations with implementation guidance
- Risk assessment with mitigation strategies
- Quantitative analysis results
- Visual data summaries preparation

{guidelines}"#,
            query = request.query,
            depth = request.depth_level,
            audience = request.target_audience,
            guidelines = agent.guidelines(),
        );

        PhaseTask {
            phase: agent.phase(),
            profile: agent.profile(),
            uses_tools: agent.uses_tools(),
            description,
            expected_output: r#"A comprehensive analysis report containing:
1. Executive summary of key insights
2. Detailed trend analysis and implications
3. Strategic recommendations prioritized by impact
4. Risk assessment and mitigation strategies
5. Comparative analysis results
6. Quantitative findings and statistical analysis
7. Implementation roadmap for recommendations"#
                .to_string(),
        }
    }

    pub fn content_brief(&self, request: &ResearchRequest) -> PhaseTask {
        let agent = ContentAgent;
        let description = format!(
            r#"Create high-quality content based on research and analysis for: "{query}"

REQUIREMENTS:
- Output Format: {format}
- Target Audience: {audience}
- Depth Level: {depth}
- Integrate research findings and analytical insights
- Use proper citations and formatting
- Ensure content quality and readability

CONTENT SPECIFICATIONS:

{specification}

QUALITY REQUIREMENTS:
- Professional writing style appropriate for {audience} audience
- Clear, logical structure with smooth transitions
- Proper grammar, spelling, and formatting
- Comprehensive citations using consistent style
- Visual elements suggested where appropriate
- Executive summary for all formats
- Actionable recommendations included

USE TOOLS:
- citation_manager: For all source references and bibliography
- quality_assessor: To evaluate content quality before finalization
- The final document will be saved to {output_dir}

{guidelines}"#,
            query = request.query,
            format = request.output_format,
            audience = request.target_audience,
            depth = request.depth_level,
            specification = format_specification(request.output_format.as_str()),
            output_dir = self.output_dir.display(),
            guidelines = agent.guidelines(),
        );

        PhaseTask {
            phase: agent.phase(),
            profile: agent.profile(),
            uses_tools: agent.uses_tools(),
            description,
            expected_output: format!(
                r#"A complete {format} tailored for {audience} audience containing:
1. Executive summary with key findings and recommendations
2. Well-structured main content with clear sections
3. Integrated research findings and analytical insights
4. Professional formatting and presentation
5. Complete bibliography with proper citations
6. Quality assessment report"#,
                format = request.output_format,
                audience = request.target_audience,
            ),
        }
    }
}
