use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ошибка обращения к REST API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server returned {code}: {message}")]
    Status { code: u16, message: String },

    #[error("session expired")]
    Unauthorized,

    #[error("failed to parse response: {0}")]
    Decode(String),
}

/// Error body the API sends with non-2xx responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiError {
    /// Builds a status error, preferring the server's own message.
    pub fn from_status(code: u16, body: &str) -> Self {
        if code == 401 {
            return ApiError::Unauthorized;
        }
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("Request failed with status {}", code));
        ApiError::Status { code, message }
    }

    /// Текст для уведомления пользователю
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => {
                "Cannot reach the server. Check your connection and try again.".to_string()
            }
            ApiError::Status { message, .. } => message.clone(),
            ApiError::Unauthorized => "Your session has expired. Please sign in again.".to_string(),
            ApiError::Decode(_) => "The server sent an unexpected response.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_uses_server_message() {
        let err = ApiError::from_status(400, r#"{"message":"Brand name already exists"}"#);
        assert_eq!(err.user_message(), "Brand name already exists");
    }

    #[test]
    fn test_from_status_falls_back_on_garbage() {
        let err = ApiError::from_status(500, "<html>oops</html>");
        assert_eq!(
            err,
            ApiError::Status {
                code: 500,
                message: "Request failed with status 500".into()
            }
        );
    }

    #[test]
    fn test_unauthorized() {
        assert_eq!(ApiError::from_status(401, ""), ApiError::Unauthorized);
        assert!(ApiError::Unauthorized.user_message().contains("sign in"));
    }
}
