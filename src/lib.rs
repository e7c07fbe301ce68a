pub mod config;
pub mod generation;
pub mod http;
pub mod postprocess;
pub mod prompt;
pub mod provider;
pub mod suggestions;
pub mod types;
