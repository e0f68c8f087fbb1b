use contracts::domain::a002_tenant::aggregate::{Tenant, TenantPayload};

use crate::shared::api_client::{self, ApiError};
use crate::shared::api_utils::resource_path;
use crate::shared::list_controller::EntityApi;

const COLLECTION: &str = "/tenants";

impl EntityApi for Tenant {
    async fn fetch_all() -> Result<Vec<Tenant>, ApiError> {
        api_client::get_json(COLLECTION).await
    }

    async fn create(payload: TenantPayload) -> Result<(), ApiError> {
        api_client::post_unit(COLLECTION, &payload).await
    }

    async fn update(id: String, payload: TenantPayload) -> Result<(), ApiError> {
        api_client::put_unit(&resource_path(COLLECTION, &id), &payload).await
    }

    async fn delete(id: String) -> Result<(), ApiError> {
        api_client::delete(&resource_path(COLLECTION, &id)).await
    }
}
