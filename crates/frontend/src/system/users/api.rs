use contracts::system::users::{ProfileUpdateRequest, ProfileUpdateResponse, User, UserPayload};

use crate::shared::api_client::{self, ApiError};
use crate::shared::api_utils::resource_path;
use crate::shared::list_controller::EntityApi;

/// Users are listed, updated and deleted through separate routes
impl EntityApi for User {
    async fn fetch_all() -> Result<Vec<User>, ApiError> {
        api_client::get_json("/users/list").await
    }

    async fn update(id: String, payload: UserPayload) -> Result<(), ApiError> {
        api_client::put_unit(&resource_path("/users/update", &id), &payload).await
    }

    async fn delete(id: String) -> Result<(), ApiError> {
        api_client::delete(&resource_path("/users/delete", &id)).await
    }
}

/// Updates the signed-in user's own account. An empty password leaves it unchanged.
pub async fn update_profile(
    id: &str,
    request: &ProfileUpdateRequest,
) -> Result<ProfileUpdateResponse, ApiError> {
    api_client::put_json(&resource_path("/users/profile", id), request).await
}

/// Deletes the signed-in user's own account
pub async fn delete_account(id: &str) -> Result<(), ApiError> {
    api_client::delete(&resource_path("/users/profile", id)).await
}
