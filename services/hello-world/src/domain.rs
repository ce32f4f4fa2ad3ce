// Domain layer modules
pub mod greeting_response;

// Re-exports
pub use greeting_response::{GREETING, GreetingResponse, STATUS_OK};
