// Infrastructure layer modules
pub mod logging;

// Re-exports
pub use logging::{
    GREETING_LOG_TARGET, LoggingError, build_env_filter, init_logging, json_layer,
};
