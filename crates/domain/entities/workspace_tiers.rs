use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    domain::{
        entities::product_tiers::ProductTierEntity, value_objects::features::FeaturePatch,
    },
    infra::db::postgres::schema::workspace_tiers,
};

/// A workspace's legacy tier assignment joined with its product tier, plus
/// the workspace-level overrides layered on top of the plan.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkspaceTierEntity {
    pub id: Uuid,
    pub workspace_id: Uuid,
    pub product_tier: ProductTierEntity,
    pub feature_overrides: Option<FeaturePatch>,
    pub daily_lead_limit_override: Option<i64>,
    pub monthly_lead_limit_override: Option<i64>,
    pub subscription_status: String,
    pub billing_cycle: String,
    pub trial_ends_at: Option<DateTime<Utc>>,
    pub current_period_end: Option<DateTime<Utc>>,
    pub cancel_at_period_end: bool,
}

/// Raw row used for Diesel queries. Overrides stay as JSON until parsed; a
/// malformed override blob contributes nothing rather than failing the read.
#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = workspace_tiers)]
pub struct WorkspaceTierRow {
    pub id: Uuid,
    pub workspace_id: Uuid,
    pub product_tier_id: Uuid,
    pub feature_overrides: Option<serde_json::Value>,
    pub daily_lead_limit_override: Option<i64>,
    pub monthly_lead_limit_override: Option<i64>,
    pub subscription_status: String,
    pub billing_cycle: String,
    pub trial_ends_at: Option<DateTime<Utc>>,
    pub current_period_end: Option<DateTime<Utc>>,
    pub cancel_at_period_end: bool,
}

impl WorkspaceTierEntity {
    pub fn from_row(row: WorkspaceTierRow, product_tier: ProductTierEntity) -> Self {
        let feature_overrides = row
            .feature_overrides
            .and_then(|value| serde_json::from_value(value).ok());

        Self {
            id: row.id,
            workspace_id: row.workspace_id,
            product_tier,
            feature_overrides,
            daily_lead_limit_override: row.daily_lead_limit_override,
            monthly_lead_limit_override: row.monthly_lead_limit_override,
            subscription_status: row.subscription_status,
            billing_cycle: row.billing_cycle,
            trial_ends_at: row.trial_ends_at,
            current_period_end: row.current_period_end,
            cancel_at_period_end: row.cancel_at_period_end,
        }
    }
}
