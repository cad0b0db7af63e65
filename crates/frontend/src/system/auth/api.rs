use contracts::shared::http::ApiError;
use contracts::system::auth::{
    ChangePasswordRequest, ChangePasswordResponse, LoginRequest, LoginResponse, RegisterRequest,
    CHANGE_PASSWORD_PATH, LOGIN_PATH, REGISTER_PATH,
};

use crate::shared::api_utils::ApiClient;

/// Login with email and password
pub async fn login(client: &ApiClient, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    client.post(LOGIN_PATH, request).await
}

/// Create an account; the response signs the new user in.
pub async fn register(client: &ApiClient, request: &RegisterRequest) -> Result<LoginResponse, ApiError> {
    client.post(REGISTER_PATH, request).await
}

pub async fn change_password(
    client: &ApiClient,
    request: &ChangePasswordRequest,
) -> Result<ChangePasswordResponse, ApiError> {
    client.post(CHANGE_PASSWORD_PATH, request).await
}
