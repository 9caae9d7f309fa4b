//! Error definitions for the client.

use thiserror::Error;

/// Fixed user-facing messages surfaced through [`RunState::last_error`]
/// (Vietnamese, matching the product UI).
///
/// [`RunState::last_error`]: prodshot_types::run::RunState
pub mod messages {
    pub const MISSING_PRODUCT_IMAGE: &str = "Vui lòng tải lên hình ảnh sản phẩm.";
    pub const MISSING_BACKGROUND_TEXT: &str = "Vui lòng nhập mô tả background.";
    pub const MISSING_BACKGROUND_IMAGE: &str = "Vui lòng tải lên hình ảnh background.";
    pub const NO_IMAGE_IN_RESPONSE: &str = "Không thể trích xuất hình ảnh từ phản hồi của AI.";
    pub const INVALID_API_KEY: &str = "API Key không hợp lệ hoặc đã hết hạn. Vui lòng thử lại.";
    pub const GENERATION_FAILED: &str = "Đã xảy ra lỗi trong quá trình tạo ảnh.";
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP client error: {source}")]
    HttpClient {
        #[from]
        source: reqwest::Error,
    },

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// A run precondition was violated; carries the field-specific user
    /// message from [`messages`].
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Parse error: {message}")]
    Parse { message: String },

    /// The remote call succeeded but no response part carried inline image
    /// bytes.
    #[error("response contained no inline image part")]
    EmptyResponse,

    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

/// Provider error substrings that indicate an invalid or unselected API key.
/// The provider's error contract is external and unverified, so this is a
/// fallback heuristic behind the structured status check.
const CREDENTIAL_SIGNATURES: [&str; 2] = ["Requested entity was not found", "API key not valid"];

impl Error {
    /// Whether this failure indicates the remote credential is invalid,
    /// expired, or not selected. Checks the HTTP status first and falls back
    /// to matching known provider message signatures.
    #[must_use]
    pub fn is_credential_failure(&self) -> bool {
        match self {
            Self::Api { status, message } => {
                matches!(status, 401 | 403)
                    || CREDENTIAL_SIGNATURES
                        .iter()
                        .any(|signature| message.contains(signature))
            }
            _ => false,
        }
    }

    /// The user-facing message for this error. Precondition violations carry
    /// their field message; credential failures and missing-image responses
    /// map to their dedicated messages; everything else falls back to the
    /// generic generation failure.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput { message } => message.clone(),
            Self::EmptyResponse => messages::NO_IMAGE_IN_RESPONSE.to_string(),
            _ if self.is_credential_failure() => messages::INVALID_API_KEY.to_string(),
            _ => messages::GENERATION_FAILED.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
