use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub mod analysis_agent;
pub mod content_agent;
pub mod research_agent;

pub use analysis_agent::AnalysisAgent;
pub use content_agent::ContentAgent;
pub use research_agent::ResearchAgent;

/// 流水线阶段，严格按顺序执行
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResearchPhase {
    Research,
    Analysis,
    Content,
}

impl ResearchPhase {
    pub const ALL: [ResearchPhase; 3] = [
        ResearchPhase::Research,
        ResearchPhase::Analysis,
        ResearchPhase::Content,
    ];

    /// 执行该阶段的Agent标识
    pub fn agent_name(&self) -> &'static str {
        match self {
            ResearchPhase::Research => "research_agent",
            ResearchPhase::Analysis => "analysis_agent",
            ResearchPhase::Content => "content_agent",
        }
    }
}

impl Display for ResearchPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResearchPhase::Research => write!(f, "research"),
            ResearchPhase::Analysis => write!(f, "analysis"),
            ResearchPhase::Content => write!(f, "content"),
        }
    }
}

/// Agent的角色设定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentProfile {
    pub role: &'static str,
    pub goal: &'static str,
    pub backstory: &'static str,
}

impl AgentProfile {
    /// 作为系统提示词使用
    pub fn preamble(&self) -> String {
        format!(
            "You are a {}.\n\nGOAL:\n{}\n\nBACKSTORY:\n{}",
            self.role, self.goal, self.backstory
        )
    }
}

/// 阶段Agent - 提供角色设定与工作准则，任务文本由模板构建器生成
pub trait PhaseAgent: Send + Sync {
    fn phase(&self) -> ResearchPhase;

    fn profile(&self) -> AgentProfile;

    /// 嵌入任务描述末尾的工作准则
    fn guidelines(&self) -> &'static str;

    /// 是否挂载引用、质量评估与搜索工具
    fn uses_tools(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agents_cover_phases_in_order() {
        let agents: [&dyn PhaseAgent; 3] = [&ResearchAgent, &AnalysisAgent, &ContentAgent];
        let phases: Vec<ResearchPhase> = agents.iter().map(|agent| agent.phase()).collect();
        assert_eq!(phases, ResearchPhase::ALL.to_vec());
    }

    #[test]
    fn test_analysis_agent_runs_without_tools() {
        assert!(ResearchAgent.uses_tools());
        assert!(!AnalysisAgent.uses_tools());
        assert!(ContentAgent.uses_tools());
    }

    #[test]
    fn test_preamble_contains_profile() {
        let profile = ResearchAgent.profile();
        let preamble = profile.preamble();
        assert!(preamble.starts_with("You are a Senior Research Specialist."));
        assert!(preamble.contains(profile.goal));
        assert!(preamble.contains(profile.backstory));
    }
}
