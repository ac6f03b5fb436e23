// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod cache;
pub mod component_catalog;
pub mod content_client;
pub mod content_service;
pub mod llm_client;
pub mod mock_data;
pub mod preview;
pub mod report;
pub mod ui_analyzer;

#[cfg(test)]
pub(crate) mod test_backend;

pub use cache::*;
pub use content_client::*;
pub use content_service::*;
pub use llm_client::*;
pub use mock_data::MockContent;
pub use report::*;
pub use ui_analyzer::*;
