use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{
    entities::product_tiers::ProductTierEntity,
    value_objects::{
        enums::{billing_cycles::BillingCycle, subscription_statuses::SubscriptionStatus},
        features::ProductTierFeatures,
        tiers::{ResolvedLimits, ResolvedTier},
        usage::UsageCounters,
    },
};

/// Full payload returned by the workspace tier endpoint. Top-level keys are
/// always present; `serviceTier` and `subscription` are null rather than
/// omitted.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceTierDto {
    pub success: bool,
    pub tier: TierDto,
    pub service_tier: Option<ServiceTierDto>,
    pub limits: LimitsDto,
    pub usage: UsageDto,
    pub subscription: Option<SubscriptionDto>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierDto {
    pub id: Option<Uuid>,
    pub name: String,
    pub slug: String,
    pub features: ProductTierFeatures,
    pub price_monthly: i32,
    pub price_yearly: i32,
}

impl From<ResolvedTier> for TierDto {
    fn from(value: ResolvedTier) -> Self {
        Self {
            id: value.id,
            name: value.name,
            slug: value.slug,
            features: value.features,
            price_monthly: value.price_monthly,
            price_yearly: value.price_yearly,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTierDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub monthly_price: i32,
}

#[derive(Debug, Serialize)]
pub struct LimitsDto {
    pub daily: i64,
    pub monthly: Option<i64>,
}

impl From<ResolvedLimits> for LimitsDto {
    fn from(value: ResolvedLimits) -> Self {
        Self {
            daily: value.daily,
            monthly: value.monthly,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageDto {
    pub daily_leads_used: i64,
    pub monthly_leads_used: i64,
    pub team_members_used: i64,
    pub campaigns_used: i64,
    pub templates_used: i64,
    pub email_accounts_used: i64,
}

impl From<UsageCounters> for UsageDto {
    fn from(value: UsageCounters) -> Self {
        Self {
            daily_leads_used: value.daily_leads_used,
            monthly_leads_used: value.monthly_leads_used,
            team_members_used: value.team_members_used,
            campaigns_used: value.campaigns_used,
            templates_used: value.templates_used,
            email_accounts_used: value.email_accounts_used,
        }
    }
}

/// Legacy billing metadata, present only when the workspace has a legacy
/// tier row.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionDto {
    pub status: SubscriptionStatus,
    pub billing_cycle: BillingCycle,
    pub trial_ends_at: Option<DateTime<Utc>>,
    pub current_period_end: Option<DateTime<Utc>>,
    pub cancel_at_period_end: bool,
}

/// Public listing entry for the pricing page. Features are resolved over
/// the defaults so the client sees the full vocabulary.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductTierDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub features: ProductTierFeatures,
    pub daily_lead_limit: i64,
    pub monthly_lead_limit: Option<i64>,
    pub price_monthly: i32,
    pub price_yearly: i32,
}

impl From<ProductTierEntity> for ProductTierDto {
    fn from(value: ProductTierEntity) -> Self {
        let mut features = ProductTierFeatures::default();
        features.apply(&value.features);

        Self {
            id: value.id,
            name: value.name,
            slug: value.slug,
            features,
            daily_lead_limit: value.daily_lead_limit,
            monthly_lead_limit: value.monthly_lead_limit,
            price_monthly: value.price_monthly,
            price_yearly: value.price_yearly,
        }
    }
}
