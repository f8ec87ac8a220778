pub mod agents;
pub mod context;
pub mod outlet;
pub mod templates;
pub mod validation;
pub mod workflow;
