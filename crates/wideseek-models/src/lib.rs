// Models module - conversation types and chat-completion wire structures
pub mod types;
pub mod requests;
pub mod responses;


// Re-export commonly used types
pub use types::{
    Role, Message, ModelName, ModelParseError,
    GREETING, DEFAULT_SYSTEM_PROMPT,
};
pub use requests::{ChatRequest, WireMessage};
pub use responses::{
    ChatResponse, Choice, ResponseMessage, Usage,
    ApiErrorResponse, ApiErrorDetail,
};
