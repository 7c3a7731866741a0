pub mod api_client;
pub mod config;

// Re-export commonly used items
pub use api_client::{ApiClient, ApiError};
pub use config::ApiConfig;
