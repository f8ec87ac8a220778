pub mod citation_manager;
pub mod quality_assessor;
pub mod web_search;

pub use citation_manager::{AgentToolCitationManager, CitationRequest};
pub use quality_assessor::{AgentToolQualityAssessor, QualityRequest};
pub use web_search::AgentToolWebSearch;
