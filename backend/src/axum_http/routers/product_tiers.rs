use crate::axum_http::error_responses::ErrorBody;
use crate::usecases::product_tiers::ProductTierUseCase;
use axum::{
    Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get,
};
use crates::{
    domain::repositories::product_tiers::ProductTierRepository,
    infra::db::{
        postgres::postgres_connection::PgPoolSquad, repositories::product_tiers::ProductTierPostgres,
    },
};
use std::sync::Arc;
use tracing::error;

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let product_tier_repository = ProductTierPostgres::new(Arc::clone(&db_pool));
    let usecase = ProductTierUseCase::new(Arc::new(product_tier_repository));

    Router::new()
        .route("/", get(list_tiers::<ProductTierPostgres>))
        .with_state(Arc::new(usecase))
}

// Pricing-page data; intentionally unauthenticated.
pub async fn list_tiers<T>(
    State(usecase): State<Arc<ProductTierUseCase<T>>>,
) -> impl IntoResponse
where
    T: ProductTierRepository + Send + Sync,
{
    match usecase.list_tiers().await {
        Ok(tiers) => (StatusCode::OK, Json(tiers)).into_response(),
        Err(err) => {
            error!(error = %err, "product_tiers: failed to list tiers");
            (
                err.status_code(),
                Json(ErrorBody::new(err.to_string())),
            )
                .into_response()
        }
    }
}
