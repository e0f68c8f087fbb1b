use contracts::system::auth::{
    LoginRequest, RegisterRequest, ResetPasswordRequest, ResetPasswordResponse,
};
use contracts::system::users::UserProfile;

use crate::shared::api_client::{self, ApiError};

/// Starts a session; the API answers with a session cookie
pub async fn login(email: String, password: String) -> Result<(), ApiError> {
    api_client::post_unit("/users/login", &LoginRequest { email, password }).await
}

pub async fn register(request: &RegisterRequest) -> Result<(), ApiError> {
    api_client::post_unit("/users/register", request).await
}

/// Ends the session behind the current cookie
pub async fn logout() -> Result<(), ApiError> {
    api_client::post_empty("/users/logout").await
}

/// Asks the API to reset the password of `email`. Some deployments answer
/// with a temporary password instead of sending an email.
pub async fn reset_password(email: String) -> Result<ResetPasswordResponse, ApiError> {
    api_client::post_json("/users/reset-password", &ResetPasswordRequest { email }).await
}

/// The signed-in user. Fails (usually with 401) when there is no session.
pub async fn current_user() -> Result<UserProfile, ApiError> {
    api_client::get_json("/users/me").await
}
