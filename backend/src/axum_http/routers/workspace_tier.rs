use crate::auth::AuthUser;
use crate::axum_http::error_responses::ErrorBody;
use crate::usecases::workspace_tier::WorkspaceTierUseCase;
use axum::{
    Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get,
};
use crates::{
    domain::repositories::{
        service_subscriptions::ServiceSubscriptionRepository,
        usage_counters::UsageCounterRepository, workspace_tiers::WorkspaceTierRepository,
    },
    infra::db::{
        postgres::postgres_connection::PgPoolSquad,
        repositories::{
            service_subscriptions::ServiceSubscriptionPostgres,
            usage_counters::UsageCounterPostgres, workspace_tiers::WorkspaceTierPostgres,
        },
    },
};
use std::sync::Arc;
use tracing::error;

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let workspace_tier_repository = WorkspaceTierPostgres::new(Arc::clone(&db_pool));
    let service_subscription_repository = ServiceSubscriptionPostgres::new(Arc::clone(&db_pool));
    let usage_counter_repository = UsageCounterPostgres::new(Arc::clone(&db_pool));

    let usecase = WorkspaceTierUseCase::new(
        Arc::new(workspace_tier_repository),
        Arc::new(service_subscription_repository),
        Arc::new(usage_counter_repository),
    );

    Router::new()
        .route(
            "/tier",
            get(get_workspace_tier::<
                WorkspaceTierPostgres,
                ServiceSubscriptionPostgres,
                UsageCounterPostgres,
            >),
        )
        .with_state(Arc::new(usecase))
}

pub async fn get_workspace_tier<W, S, U>(
    State(usecase): State<Arc<WorkspaceTierUseCase<W, S, U>>>,
    AuthUser { workspace_id, .. }: AuthUser,
) -> impl IntoResponse
where
    W: WorkspaceTierRepository + Send + Sync,
    S: ServiceSubscriptionRepository + Send + Sync,
    U: UsageCounterRepository + Send + Sync,
{
    match usecase.get_workspace_tier(workspace_id).await {
        Ok(dto) => (StatusCode::OK, Json(dto)).into_response(),
        Err(err) => {
            let status = err.status_code();
            if status.is_server_error() {
                error!(
                    error = %err,
                    %workspace_id,
                    "workspace_tier: failed to resolve tier"
                );
            }

            (status, Json(ErrorBody::new(err.to_string()))).into_response()
        }
    }
}
