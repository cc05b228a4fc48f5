use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    domain::value_objects::features::PlatformFeatures,
    infra::db::postgres::schema::{service_subscriptions, service_tiers},
};

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceTierEntity {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub platform_features: PlatformFeatures,
    pub monthly_price: i32,
    pub is_active: bool,
}

/// Raw row used for Diesel queries. The platform bundle stays as JSON and is
/// parsed into PlatformFeatures.
#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = service_tiers)]
pub struct ServiceTierRow {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub platform_features: serde_json::Value,
    pub monthly_price: i32,
    pub is_active: bool,
}

impl From<ServiceTierRow> for ServiceTierEntity {
    fn from(value: ServiceTierRow) -> Self {
        let platform_features = serde_json::from_value(value.platform_features).unwrap_or_default();

        Self {
            id: value.id,
            name: value.name,
            slug: value.slug,
            platform_features,
            monthly_price: value.monthly_price,
            is_active: value.is_active,
        }
    }
}

/// An individual workspace's contract on a service tier. The `monthly_price`
/// here is the contracted price at signup time, which may differ from the
/// tier's current list price.
#[derive(Debug, Clone, PartialEq, Identifiable, Selectable, Queryable)]
#[diesel(table_name = service_subscriptions)]
pub struct ServiceSubscriptionEntity {
    pub id: Uuid,
    pub workspace_id: Uuid,
    pub service_tier_id: Uuid,
    pub monthly_price: i32,
    pub status: String,
    pub current_period_start: DateTime<Utc>,
    pub current_period_end: DateTime<Utc>,
    pub cancel_at_period_end: bool,
    pub created_at: DateTime<Utc>,
}
