//! ReAct执行器 - 负责执行工具调用的多轮对话逻辑

use anyhow::Result;
use rig::completion::{AssistantContent, Message, PromptError};

use super::providers::ProviderAgent;
use crate::config::LLMConfig;

/// ReAct执行配置
#[derive(Debug, Clone)]
pub struct ReActConfig {
    /// 最大迭代轮数
    pub max_iterations: usize,
    /// 达到最大轮数时是否返回部分结果
    pub return_partial_on_max_depth: bool,
}

impl From<&LLMConfig> for ReActConfig {
    fn from(config: &LLMConfig) -> Self {
        Self {
            max_iterations: config.max_iterations,
            return_partial_on_max_depth: config.return_partial_on_max_depth,
        }
    }
}

/// ReAct执行结果
#[derive(Debug, Clone)]
pub struct ReActResponse {
    pub content: String,
    pub stopped_by_max_depth: bool,
    pub tool_calls_history: Vec<String>,
}

/// ReAct执行器
pub struct ReActExecutor;

impl ReActExecutor {
    /// 执行ReAct循环逻辑
    pub async fn execute(
        agent: &ProviderAgent,
        user_prompt: &str,
        config: &ReActConfig,
    ) -> Result<ReActResponse> {
        tracing::debug!(
            "   ♻️ 激活ReAct Agent模式，最大迭代次数: {}",
            config.max_iterations
        );

        match agent.multi_turn(user_prompt, config.max_iterations).await {
            Ok(response) => {
                tracing::debug!("   ✅ ReAct Agent任务完成");
                Ok(ReActResponse {
                    content: response,
                    stopped_by_max_depth: false,
                    tool_calls_history: Vec::new(),
                })
            }
            Err(PromptError::MaxDepthError {
                max_depth,
                chat_history,
                prompt: _,
            }) => {
                tracing::warn!("   ⚠️ 达到最大迭代次数 ({}), 触发中断", max_depth);

                if config.return_partial_on_max_depth {
                    let (content, tool_calls) = extract_partial_result(&chat_history);
                    Ok(ReActResponse {
                        content: format!(
                            "{}\n\n[Note: interrupted after reaching the maximum of {} iterations]",
                            content, max_depth
                        ),
                        stopped_by_max_depth: true,
                        tool_calls_history: tool_calls,
                    })
                } else {
                    Err(anyhow::anyhow!(
                        "agent did not finish within the maximum of {} iterations",
                        max_depth
                    ))
                }
            }
            Err(e) => {
                tracing::error!("   ❌ ReAct Agent出错: {:?}", e);
                Err(anyhow::anyhow!("agent task failed: {}", e))
            }
        }
    }
}

/// 从聊天历史中提取最后的助手文本与工具调用记录
pub fn extract_partial_result(chat_history: &[Message]) -> (String, Vec<String>) {
    let last_assistant_message = chat_history
        .iter()
        .rev()
        .find_map(|msg| {
            if let Message::Assistant { content, .. } = msg {
                let text_content = content
                    .iter()
                    .filter_map(|c| {
                        if let AssistantContent::Text(text) = c {
                            Some(text.text.clone())
                        } else {
                            None
                        }
                    })
                    .collect::<Vec<_>>()
                    .join("\n");

                if !text_content.is_empty() {
                    Some(text_content)
                } else {
                    None
                }
            } else {
                None
            }
        })
        .unwrap_or_else(|| "The agent was interrupted before producing a response.".to_string());

    let mut tool_calls = Vec::new();
    for msg in chat_history {
        if let Message::Assistant { content, .. } = msg {
            for c in content.iter() {
                if let AssistantContent::ToolCall(tool_call) = c {
                    tool_calls.push(format!(
                        "{}({})",
                        tool_call.function.name, tool_call.function.arguments
                    ));
                }
            }
        }
    }

    (last_assistant_message, tool_calls)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_result_without_history() {
        let (content, tool_calls) = extract_partial_result(&[]);
        assert_eq!(
            content,
            "The agent was interrupted before producing a response."
        );
        assert!(tool_calls.is_empty());
    }

    #[test]
    fn test_partial_result_takes_last_assistant_text() {
        let history = vec![
            Message::user("find sources"),
            Message::assistant("first draft"),
            Message::user("continue"),
            Message::assistant("second draft"),
        ];
        let (content, _) = extract_partial_result(&history);
        assert_eq!(content, "second draft");
    }

    #[test]
    fn test_config_from_llm_config() {
        let llm = LLMConfig {
            max_iterations: 7,
            return_partial_on_max_depth: false,
            ..Default::default()
        };
        let config = ReActConfig::from(&llm);
        assert_eq!(config.max_iterations, 7);
        assert!(!config.return_partial_on_max_depth);
    }
}
