pub mod cli;
pub mod config;
pub mod error;
pub mod llm;
pub mod workflow;

// Re-export commonly used types
pub use config::Config;
pub use error::AdapterError;
pub use workflow::launch;
