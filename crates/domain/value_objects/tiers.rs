use uuid::Uuid;

use crate::domain::{
    entities::{service_tiers::ServiceTierEntity, workspace_tiers::WorkspaceTierEntity},
    value_objects::features::ProductTierFeatures,
};

/// Daily lead limit applied when a workspace has no tier row and no override.
pub const DEFAULT_DAILY_LEAD_LIMIT: i64 = 3;

/// Numeric stand-in for the `-1` "unlimited" sentinel on service tiers, so
/// downstream consumers never see a negative limit.
pub const UNLIMITED_DAILY_LEAD_LIMIT: i64 = 999_999;

/// Which subscription model won the identity of the effective tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierSource {
    Service,
    Legacy,
    Default,
}

/// The one effective tier shown to a workspace, merged from up to four
/// layers: defaults, legacy plan features, workspace overrides, and an
/// active service subscription's platform bundle.
///
/// List prices always come from the legacy product tier; the service model
/// bills through its subscription row instead.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTier {
    pub source: TierSource,
    pub id: Option<Uuid>,
    pub name: String,
    pub slug: String,
    pub features: ProductTierFeatures,
    pub price_monthly: i32,
    pub price_yearly: i32,
}

impl ResolvedTier {
    pub fn resolve(
        assignment: Option<&WorkspaceTierEntity>,
        service_tier: Option<&ServiceTierEntity>,
    ) -> Self {
        let mut features = ProductTierFeatures::default();

        if let Some(assignment) = assignment {
            features.apply(&assignment.product_tier.features);
            if let Some(overrides) = &assignment.feature_overrides {
                features.apply(overrides);
            }
        }

        let price_monthly = assignment
            .map(|a| a.product_tier.price_monthly)
            .unwrap_or(0);
        let price_yearly = assignment.map(|a| a.product_tier.price_yearly).unwrap_or(0);

        match service_tier {
            Some(tier) => {
                features.apply_platform(&tier.platform_features);
                // Every active service subscription carries dedicated
                // support regardless of what the tier's bundle says.
                features.dedicated_support = true;

                Self {
                    source: TierSource::Service,
                    id: Some(tier.id),
                    name: tier.name.clone(),
                    slug: tier.slug.clone(),
                    features,
                    price_monthly,
                    price_yearly,
                }
            }
            None => match assignment {
                Some(assignment) => Self {
                    source: TierSource::Legacy,
                    id: Some(assignment.product_tier.id),
                    name: assignment.product_tier.name.clone(),
                    slug: assignment.product_tier.slug.clone(),
                    features,
                    price_monthly,
                    price_yearly,
                },
                None => Self {
                    source: TierSource::Default,
                    id: None,
                    name: "Free".to_string(),
                    slug: "free".to_string(),
                    features,
                    price_monthly,
                    price_yearly,
                },
            },
        }
    }
}

/// Effective lead limits for a workspace. `monthly: None` means
/// unbounded-by-policy, which is distinct from the numeric unlimited
/// sentinel used for daily limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedLimits {
    pub daily: i64,
    pub monthly: Option<i64>,
}

impl ResolvedLimits {
    pub fn resolve(
        assignment: Option<&WorkspaceTierEntity>,
        service_tier: Option<&ServiceTierEntity>,
    ) -> Self {
        let mut daily = assignment
            .and_then(|a| a.daily_lead_limit_override)
            .or_else(|| assignment.map(|a| a.product_tier.daily_lead_limit))
            .unwrap_or(DEFAULT_DAILY_LEAD_LIMIT);

        let monthly = assignment
            .and_then(|a| a.monthly_lead_limit_override)
            .or_else(|| assignment.and_then(|a| a.product_tier.monthly_lead_limit));

        if let Some(service_daily) =
            service_tier.and_then(|tier| tier.platform_features.daily_lead_limit)
        {
            daily = if service_daily == -1 {
                UNLIMITED_DAILY_LEAD_LIMIT
            } else {
                service_daily
            };
        }

        Self { daily, monthly }
    }
}
