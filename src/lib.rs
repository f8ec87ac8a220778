pub mod citation;
pub mod cli;
pub mod config;
pub mod generator;
pub mod llm;
pub mod logging;
pub mod quality;
pub mod service;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use generator::workflow::{ProjectResult, WorkflowOrchestrator};
pub use llm::completion::PhaseExecutor;
pub use types::research::ResearchRequest;
