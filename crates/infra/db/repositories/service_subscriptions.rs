use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use diesel::{RunQueryDsl, prelude::*};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain,
    infra::db::postgres::{
        postgres_connection::PgPoolSquad,
        schema::{service_subscriptions, service_tiers},
    },
};
use domain::{
    entities::service_tiers::{ServiceSubscriptionEntity, ServiceTierEntity, ServiceTierRow},
    repositories::service_subscriptions::ServiceSubscriptionRepository,
    value_objects::enums::subscription_statuses::SubscriptionStatus,
};

pub struct ServiceSubscriptionPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl ServiceSubscriptionPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl ServiceSubscriptionRepository for ServiceSubscriptionPostgres {
    async fn find_active_by_workspace_id(
        &self,
        workspace_id: Uuid,
    ) -> Result<Option<ServiceSubscriptionEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let subscription = service_subscriptions::table
            .filter(service_subscriptions::workspace_id.eq(workspace_id))
            .filter(service_subscriptions::status.eq(SubscriptionStatus::Active.to_string()))
            .filter(service_subscriptions::current_period_end.gt(Utc::now()))
            .order(service_subscriptions::created_at.desc())
            .select(ServiceSubscriptionEntity::as_select())
            .first::<ServiceSubscriptionEntity>(&mut conn)
            .optional()?;

        Ok(subscription)
    }

    async fn find_service_tier_by_id(
        &self,
        service_tier_id: Uuid,
    ) -> Result<Option<ServiceTierEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        // No is_active filter: a retired tier still backs the workspaces
        // already subscribed to it.
        let row = service_tiers::table
            .filter(service_tiers::id.eq(service_tier_id))
            .select(ServiceTierRow::as_select())
            .first::<ServiceTierRow>(&mut conn)
            .optional()?;

        Ok(row.map(ServiceTierEntity::from))
    }
}
