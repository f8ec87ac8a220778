use std::sync::Arc;

use tokio::sync::Mutex;

use crate::citation::CitationStore;
use crate::quality::QualityScorer;

/// 单个调研项目的工具状态，项目结束即丢弃
#[derive(Clone, Default)]
pub struct ProjectToolkit {
    /// 引用存储
    pub citations: Arc<Mutex<CitationStore>>,
    /// 质量评估器与评估历史
    pub quality: Arc<Mutex<QualityScorer>>,
}

impl ProjectToolkit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scorer(scorer: QualityScorer) -> Self {
        Self {
            citations: Arc::new(Mutex::new(CitationStore::new())),
            quality: Arc::new(Mutex::new(scorer)),
        }
    }

    pub async fn citation_count(&self) -> usize {
        self.citations.lock().await.len()
    }

    /// 项目内记录的引用按APA格式输出，无引用时返回None
    pub async fn bibliography(&self) -> Option<String> {
        let citations = self.citations.lock().await;
        if citations.is_empty() {
            return None;
        }
        citations.render_bibliography("APA").ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::citation::CitationExtras;

    #[tokio::test]
    async fn test_toolkits_are_isolated() {
        let first = ProjectToolkit::new();
        let second = ProjectToolkit::new();

        first
            .citations
            .lock()
            .await
            .add("Only here", None, vec![], CitationExtras::default())
            .unwrap();

        assert_eq!(first.citation_count().await, 1);
        assert_eq!(second.citation_count().await, 0);
        assert!(second.bibliography().await.is_none());
        assert!(
            first
                .bibliography()
                .await
                .unwrap()
                .starts_with("Bibliography (APA Style):")
        );
    }
}
