use contracts::domain::a001_metric::aggregate::{Metric, MetricPayload};

use crate::shared::api_client::{self, ApiError};
use crate::shared::api_utils::resource_path;
use crate::shared::list_controller::EntityApi;

const COLLECTION: &str = "/metrics";

impl EntityApi for Metric {
    async fn fetch_all() -> Result<Vec<Metric>, ApiError> {
        api_client::get_json(COLLECTION).await
    }

    async fn create(payload: MetricPayload) -> Result<(), ApiError> {
        api_client::post_unit(COLLECTION, &payload).await
    }

    async fn update(id: String, payload: MetricPayload) -> Result<(), ApiError> {
        api_client::put_unit(&resource_path(COLLECTION, &id), &payload).await
    }

    async fn delete(id: String) -> Result<(), ApiError> {
        api_client::delete(&resource_path(COLLECTION, &id)).await
    }
}
