use contracts::shared::error::ApiError;
use contracts::system::auth::{EmailVerificationRequest, LoginRequest, LoginResponse};

use crate::shared::api_utils::{post_command, post_json};

/// Login with email and password
pub async fn login(email: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { email, password };
    post_json("/api/authentications/login", &request).await
}

/// Sends a one-time confirmation code to the account email
pub async fn request_password_reset(email: String) -> Result<(), ApiError> {
    let request = EmailVerificationRequest { email };
    post_command("/api/verifications/email-verification", &request).await
}
