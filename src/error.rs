use crate::types::JsValue;

/// Errors raised while evaluating an expression.
///
/// The core never recovers from these locally; they travel up to the
/// statement engine, which decides whether script code can catch them.
#[derive(Debug, Clone, thiserror::Error)]
pub enum JsError {
    #[error("TypeError: {0}")]
    TypeError(String),

    #[error("ReferenceError: {0}")]
    ReferenceError(String),

    #[error("SyntaxError: {0}")]
    SyntaxError(String),

    /// A value thrown by script code running inside a host call.
    #[error("uncaught exception: {0}")]
    Throw(JsValue),
}

pub type JsResult<T> = Result<T, JsError>;

impl JsError {
    pub fn type_error(message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::debug!(kind = "TypeError", %message, "raising error");
        JsError::TypeError(message)
    }

    pub fn reference_error(message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::debug!(kind = "ReferenceError", %message, "raising error");
        JsError::ReferenceError(message)
    }

    pub fn syntax_error(message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::debug!(kind = "SyntaxError", %message, "raising error");
        JsError::SyntaxError(message)
    }

    /// Constructor name of the native error this maps to, `None` for thrown values.
    pub fn error_name(&self) -> Option<&'static str> {
        match self {
            JsError::TypeError(_) => Some("TypeError"),
            JsError::ReferenceError(_) => Some("ReferenceError"),
            JsError::SyntaxError(_) => Some("SyntaxError"),
            JsError::Throw(_) => None,
        }
    }
}
