use std::sync::Arc;

use chrono::Utc;
use crates::domain::{
    entities::service_tiers::{ServiceSubscriptionEntity, ServiceTierEntity},
    repositories::{
        service_subscriptions::ServiceSubscriptionRepository,
        usage_counters::UsageCounterRepository, workspace_tiers::WorkspaceTierRepository,
    },
    value_objects::{
        enums::{billing_cycles::BillingCycle, subscription_statuses::SubscriptionStatus},
        tiers::{ResolvedLimits, ResolvedTier},
        usage::{UsageCounters, utc_day_start, utc_month_start},
        workspace_tiers::{
            LimitsDto, ServiceTierDto, SubscriptionDto, TierDto, UsageDto, WorkspaceTierDto,
        },
    },
};
use thiserror::Error;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum WorkspaceTierError {
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl WorkspaceTierError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        match self {
            WorkspaceTierError::Internal(_) => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, WorkspaceTierError>;

/// Computes the one effective tier view for a workspace: identity, merged
/// features, lead limits, fresh usage counters, and legacy billing
/// metadata. Read-only; every call recomputes from the store.
pub struct WorkspaceTierUseCase<W, S, U>
where
    W: WorkspaceTierRepository + Send + Sync + 'static,
    S: ServiceSubscriptionRepository + Send + Sync + 'static,
    U: UsageCounterRepository + Send + Sync + 'static,
{
    workspace_tier_repo: Arc<W>,
    service_subscription_repo: Arc<S>,
    usage_counter_repo: Arc<U>,
}

impl<W, S, U> WorkspaceTierUseCase<W, S, U>
where
    W: WorkspaceTierRepository + Send + Sync + 'static,
    S: ServiceSubscriptionRepository + Send + Sync + 'static,
    U: UsageCounterRepository + Send + Sync + 'static,
{
    pub fn new(
        workspace_tier_repo: Arc<W>,
        service_subscription_repo: Arc<S>,
        usage_counter_repo: Arc<U>,
    ) -> Self {
        Self {
            workspace_tier_repo,
            service_subscription_repo,
            usage_counter_repo,
        }
    }

    pub async fn get_workspace_tier(
        &self,
        workspace_id: Uuid,
    ) -> UseCaseResult<WorkspaceTierDto> {
        info!(%workspace_id, "workspace_tier: resolving effective tier");

        let assignment = self
            .workspace_tier_repo
            .find_by_workspace_id(workspace_id)
            .await
            .map_err(|err| {
                error!(
                    %workspace_id,
                    db_error = ?err,
                    "workspace_tier: failed to load tier assignment"
                );
                WorkspaceTierError::Internal(err)
            })?;

        let service = self.find_active_service_tier(workspace_id).await?;
        let usage = self.read_usage(workspace_id).await?;

        let service_tier = service.as_ref().map(|(_, tier)| tier);
        let tier = ResolvedTier::resolve(assignment.as_ref(), service_tier);
        let limits = ResolvedLimits::resolve(assignment.as_ref(), service_tier);

        debug!(
            %workspace_id,
            source = ?tier.source,
            slug = %tier.slug,
            daily_limit = limits.daily,
            "workspace_tier: tier resolved"
        );

        Ok(WorkspaceTierDto {
            success: true,
            tier: TierDto::from(tier),
            service_tier: service.map(|(subscription, tier)| ServiceTierDto {
                id: tier.id,
                name: tier.name,
                slug: tier.slug,
                monthly_price: subscription.monthly_price,
            }),
            limits: LimitsDto::from(limits),
            usage: UsageDto::from(usage),
            subscription: assignment.map(|assignment| SubscriptionDto {
                status: SubscriptionStatus::from_str(&assignment.subscription_status),
                billing_cycle: BillingCycle::from_str(&assignment.billing_cycle),
                trial_ends_at: assignment.trial_ends_at,
                current_period_end: assignment.current_period_end,
                cancel_at_period_end: assignment.cancel_at_period_end,
            }),
        })
    }

    async fn find_active_service_tier(
        &self,
        workspace_id: Uuid,
    ) -> UseCaseResult<Option<(ServiceSubscriptionEntity, ServiceTierEntity)>> {
        let subscription = self
            .service_subscription_repo
            .find_active_by_workspace_id(workspace_id)
            .await
            .map_err(|err| {
                error!(
                    %workspace_id,
                    db_error = ?err,
                    "workspace_tier: failed to load service subscription"
                );
                WorkspaceTierError::Internal(err)
            })?;

        let Some(subscription) = subscription else {
            return Ok(None);
        };

        let tier = self
            .service_subscription_repo
            .find_service_tier_by_id(subscription.service_tier_id)
            .await
            .map_err(|err| {
                error!(
                    %workspace_id,
                    service_tier_id = %subscription.service_tier_id,
                    db_error = ?err,
                    "workspace_tier: failed to load service tier"
                );
                WorkspaceTierError::Internal(err)
            })?;

        match tier {
            Some(tier) => Ok(Some((subscription, tier))),
            None => {
                warn!(
                    %workspace_id,
                    service_tier_id = %subscription.service_tier_id,
                    "workspace_tier: active subscription references missing service tier"
                );
                Ok(None)
            }
        }
    }

    async fn read_usage(&self, workspace_id: Uuid) -> UseCaseResult<UsageCounters> {
        let now = Utc::now();
        let day_start = utc_day_start(now);
        let month_start = utc_month_start(now);

        let daily_leads_used = self
            .usage_counter_repo
            .count_leads_since(workspace_id, day_start)
            .await
            .map_err(|err| self.usage_error(workspace_id, "daily leads", err))?;

        let monthly_leads_used = self
            .usage_counter_repo
            .count_leads_since(workspace_id, month_start)
            .await
            .map_err(|err| self.usage_error(workspace_id, "monthly leads", err))?;

        let team_members_used = self
            .usage_counter_repo
            .count_team_members(workspace_id)
            .await
            .map_err(|err| self.usage_error(workspace_id, "team members", err))?;

        let campaigns_used = self
            .usage_counter_repo
            .count_campaigns(workspace_id)
            .await
            .map_err(|err| self.usage_error(workspace_id, "campaigns", err))?;

        let templates_used = self
            .usage_counter_repo
            .count_templates(workspace_id)
            .await
            .map_err(|err| self.usage_error(workspace_id, "templates", err))?;

        let email_accounts_used = self
            .usage_counter_repo
            .count_email_accounts(workspace_id)
            .await
            .map_err(|err| self.usage_error(workspace_id, "email accounts", err))?;

        Ok(UsageCounters {
            daily_leads_used,
            monthly_leads_used,
            // the owner always occupies a seat, even before a members row exists
            team_members_used: team_members_used.max(1),
            campaigns_used,
            templates_used,
            email_accounts_used,
        })
    }

    fn usage_error(
        &self,
        workspace_id: Uuid,
        counter: &str,
        err: anyhow::Error,
    ) -> WorkspaceTierError {
        error!(
            %workspace_id,
            counter,
            db_error = ?err,
            "workspace_tier: failed to count usage"
        );
        WorkspaceTierError::Internal(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use chrono::Duration;
    use crates::domain::{
        entities::{
            product_tiers::ProductTierEntity, workspace_tiers::WorkspaceTierEntity,
        },
        repositories::{
            service_subscriptions::MockServiceSubscriptionRepository,
            usage_counters::MockUsageCounterRepository,
            workspace_tiers::MockWorkspaceTierRepository,
        },
        value_objects::{
            features::{FeaturePatch, PlatformFeatures},
            tiers::UNLIMITED_DAILY_LEAD_LIMIT,
        },
    };
    use mockall::predicate::eq;

    fn sample_product_tier() -> ProductTierEntity {
        ProductTierEntity {
            id: Uuid::new_v4(),
            name: "Starter".to_string(),
            slug: "starter".to_string(),
            daily_lead_limit: 25,
            monthly_lead_limit: Some(500),
            features: FeaturePatch {
                campaigns: Some(true),
                team_members: Some(3),
                max_campaigns: Some(5),
                ..Default::default()
            },
            price_monthly: 2900,
            price_yearly: 29000,
            is_active: true,
        }
    }

    fn sample_assignment(workspace_id: Uuid) -> WorkspaceTierEntity {
        let now = Utc::now();
        WorkspaceTierEntity {
            id: Uuid::new_v4(),
            workspace_id,
            product_tier: sample_product_tier(),
            feature_overrides: None,
            daily_lead_limit_override: None,
            monthly_lead_limit_override: None,
            subscription_status: "active".to_string(),
            billing_cycle: "monthly".to_string(),
            trial_ends_at: None,
            current_period_end: Some(now + Duration::days(14)),
            cancel_at_period_end: false,
        }
    }

    fn sample_service_tier() -> ServiceTierEntity {
        ServiceTierEntity {
            id: Uuid::new_v4(),
            name: "Growth Engine".to_string(),
            slug: "growth-engine".to_string(),
            platform_features: PlatformFeatures {
                campaigns: Some(true),
                ai_agents: Some(true),
                team_seats: Some(25),
                daily_lead_limit: Some(500),
                ..Default::default()
            },
            monthly_price: 9900,
            is_active: true,
        }
    }

    fn sample_subscription(workspace_id: Uuid, service_tier_id: Uuid) -> ServiceSubscriptionEntity {
        let now = Utc::now();
        ServiceSubscriptionEntity {
            id: Uuid::new_v4(),
            workspace_id,
            service_tier_id,
            monthly_price: 7900,
            status: SubscriptionStatus::Active.to_string(),
            current_period_start: now - Duration::days(1),
            current_period_end: now + Duration::days(29),
            cancel_at_period_end: false,
            created_at: now,
        }
    }

    fn usage_repo_with_counts(
        leads: i64,
        members: i64,
        campaigns: i64,
        templates: i64,
        accounts: i64,
    ) -> MockUsageCounterRepository {
        let mut usage_repo = MockUsageCounterRepository::new();
        usage_repo
            .expect_count_leads_since()
            .times(2)
            .returning(move |_, _| Box::pin(async move { Ok(leads) }));
        usage_repo
            .expect_count_team_members()
            .returning(move |_| Box::pin(async move { Ok(members) }));
        usage_repo
            .expect_count_campaigns()
            .returning(move |_| Box::pin(async move { Ok(campaigns) }));
        usage_repo
            .expect_count_templates()
            .returning(move |_| Box::pin(async move { Ok(templates) }));
        usage_repo
            .expect_count_email_accounts()
            .returning(move |_| Box::pin(async move { Ok(accounts) }));
        usage_repo
    }

    fn no_service_subscription(workspace_id: Uuid) -> MockServiceSubscriptionRepository {
        let mut service_repo = MockServiceSubscriptionRepository::new();
        service_repo
            .expect_find_active_by_workspace_id()
            .with(eq(workspace_id))
            .returning(|_| Box::pin(async { Ok(None) }));
        service_repo
    }

    #[tokio::test]
    async fn defaults_to_free_tier_when_workspace_has_no_rows() {
        let workspace_id = Uuid::new_v4();

        let mut tier_repo = MockWorkspaceTierRepository::new();
        tier_repo
            .expect_find_by_workspace_id()
            .with(eq(workspace_id))
            .returning(|_| Box::pin(async { Ok(None) }));

        let usecase = WorkspaceTierUseCase::new(
            Arc::new(tier_repo),
            Arc::new(no_service_subscription(workspace_id)),
            Arc::new(usage_repo_with_counts(0, 0, 0, 0, 0)),
        );

        let dto = usecase.get_workspace_tier(workspace_id).await.unwrap();

        assert!(dto.success);
        assert_eq!(dto.tier.slug, "free");
        assert_eq!(dto.tier.name, "Free");
        assert_eq!(dto.tier.id, None);
        assert!(dto.tier.features.basic_search);
        assert!(!dto.tier.features.campaigns);
        assert!(!dto.tier.features.dedicated_support);
        assert_eq!(dto.limits.daily, 3);
        assert_eq!(dto.limits.monthly, None);
        assert!(dto.service_tier.is_none());
        assert!(dto.subscription.is_none());
        // empty workspace still shows the owner as a seat in use
        assert_eq!(dto.usage.team_members_used, 1);
        assert_eq!(dto.usage.daily_leads_used, 0);
    }

    #[tokio::test]
    async fn legacy_plan_and_overrides_shape_features_and_limits() {
        let workspace_id = Uuid::new_v4();

        let mut assignment = sample_assignment(workspace_id);
        // the plan disables a default-enabled capability; the workspace
        // override flips another on top of the plan
        assignment.product_tier.features.basic_search = Some(false);
        assignment.feature_overrides = Some(FeaturePatch {
            campaigns: Some(false),
            api_access: Some(true),
            ..Default::default()
        });
        assignment.daily_lead_limit_override = Some(40);

        let mut tier_repo = MockWorkspaceTierRepository::new();
        let assignment_clone = assignment.clone();
        tier_repo
            .expect_find_by_workspace_id()
            .with(eq(workspace_id))
            .returning(move |_| {
                let assignment = assignment_clone.clone();
                Box::pin(async move { Ok(Some(assignment)) })
            });

        let usecase = WorkspaceTierUseCase::new(
            Arc::new(tier_repo),
            Arc::new(no_service_subscription(workspace_id)),
            Arc::new(usage_repo_with_counts(7, 2, 1, 4, 2)),
        );

        let dto = usecase.get_workspace_tier(workspace_id).await.unwrap();

        assert_eq!(dto.tier.slug, "starter");
        assert!(!dto.tier.features.basic_search);
        assert!(!dto.tier.features.campaigns);
        assert!(dto.tier.features.api_access);
        assert_eq!(dto.tier.features.team_members, 3);
        assert_eq!(dto.limits.daily, 40);
        assert_eq!(dto.limits.monthly, Some(500));
        assert_eq!(dto.tier.price_monthly, 2900);

        let subscription = dto.subscription.expect("legacy row carries billing metadata");
        assert_eq!(subscription.status, SubscriptionStatus::Active);
        assert_eq!(subscription.billing_cycle, BillingCycle::Monthly);
        assert!(!subscription.cancel_at_period_end);

        assert_eq!(dto.usage.daily_leads_used, 7);
        assert_eq!(dto.usage.monthly_leads_used, 7);
        assert_eq!(dto.usage.team_members_used, 2);
        assert_eq!(dto.usage.campaigns_used, 1);
        assert_eq!(dto.usage.templates_used, 4);
        assert_eq!(dto.usage.email_accounts_used, 2);
    }

    #[tokio::test]
    async fn active_service_subscription_wins_identity_and_features() {
        let workspace_id = Uuid::new_v4();
        let service_tier = sample_service_tier();
        let subscription = sample_subscription(workspace_id, service_tier.id);

        let mut tier_repo = MockWorkspaceTierRepository::new();
        let assignment = sample_assignment(workspace_id);
        tier_repo
            .expect_find_by_workspace_id()
            .with(eq(workspace_id))
            .returning(move |_| {
                let assignment = assignment.clone();
                Box::pin(async move { Ok(Some(assignment)) })
            });

        let mut service_repo = MockServiceSubscriptionRepository::new();
        let subscription_clone = subscription.clone();
        service_repo
            .expect_find_active_by_workspace_id()
            .with(eq(workspace_id))
            .returning(move |_| {
                let subscription = subscription_clone.clone();
                Box::pin(async move { Ok(Some(subscription)) })
            });
        let service_tier_clone = service_tier.clone();
        service_repo
            .expect_find_service_tier_by_id()
            .with(eq(service_tier.id))
            .returning(move |_| {
                let tier = service_tier_clone.clone();
                Box::pin(async move { Ok(Some(tier)) })
            });

        let usecase = WorkspaceTierUseCase::new(
            Arc::new(tier_repo),
            Arc::new(service_repo),
            Arc::new(usage_repo_with_counts(0, 5, 0, 0, 1)),
        );

        let dto = usecase.get_workspace_tier(workspace_id).await.unwrap();

        assert_eq!(dto.tier.name, "Growth Engine");
        assert_eq!(dto.tier.slug, "growth-engine");
        assert_eq!(dto.tier.id, Some(service_tier.id));
        assert!(dto.tier.features.dedicated_support);
        assert_eq!(dto.tier.features.team_members, 25);
        // list prices stay with the legacy plan
        assert_eq!(dto.tier.price_monthly, 2900);
        assert_eq!(dto.limits.daily, 500);

        let service_dto = dto.service_tier.expect("service subscription is active");
        assert_eq!(service_dto.id, service_tier.id);
        assert_eq!(service_dto.monthly_price, 7900);

        // legacy billing metadata is still reported alongside
        assert!(dto.subscription.is_some());
    }

    #[tokio::test]
    async fn unlimited_service_daily_limit_resolves_to_numeric_cap() {
        let workspace_id = Uuid::new_v4();
        let mut service_tier = sample_service_tier();
        service_tier.platform_features.daily_lead_limit = Some(-1);
        let subscription = sample_subscription(workspace_id, service_tier.id);

        let mut tier_repo = MockWorkspaceTierRepository::new();
        tier_repo
            .expect_find_by_workspace_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let mut service_repo = MockServiceSubscriptionRepository::new();
        service_repo
            .expect_find_active_by_workspace_id()
            .returning(move |_| {
                let subscription = subscription.clone();
                Box::pin(async move { Ok(Some(subscription)) })
            });
        service_repo
            .expect_find_service_tier_by_id()
            .returning(move |_| {
                let tier = service_tier.clone();
                Box::pin(async move { Ok(Some(tier)) })
            });

        let usecase = WorkspaceTierUseCase::new(
            Arc::new(tier_repo),
            Arc::new(service_repo),
            Arc::new(usage_repo_with_counts(0, 1, 0, 0, 0)),
        );

        let dto = usecase.get_workspace_tier(workspace_id).await.unwrap();

        assert_eq!(dto.limits.daily, UNLIMITED_DAILY_LEAD_LIMIT);
        assert!(dto.limits.daily > 0);
    }

    #[tokio::test]
    async fn falls_back_to_legacy_when_service_tier_row_is_missing() {
        let workspace_id = Uuid::new_v4();
        let subscription = sample_subscription(workspace_id, Uuid::new_v4());

        let mut tier_repo = MockWorkspaceTierRepository::new();
        let assignment = sample_assignment(workspace_id);
        tier_repo
            .expect_find_by_workspace_id()
            .returning(move |_| {
                let assignment = assignment.clone();
                Box::pin(async move { Ok(Some(assignment)) })
            });

        let mut service_repo = MockServiceSubscriptionRepository::new();
        service_repo
            .expect_find_active_by_workspace_id()
            .returning(move |_| {
                let subscription = subscription.clone();
                Box::pin(async move { Ok(Some(subscription)) })
            });
        service_repo
            .expect_find_service_tier_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let usecase = WorkspaceTierUseCase::new(
            Arc::new(tier_repo),
            Arc::new(service_repo),
            Arc::new(usage_repo_with_counts(0, 1, 0, 0, 0)),
        );

        let dto = usecase.get_workspace_tier(workspace_id).await.unwrap();

        assert_eq!(dto.tier.slug, "starter");
        assert!(dto.service_tier.is_none());
        assert!(!dto.tier.features.dedicated_support);
    }

    #[tokio::test]
    async fn propagates_single_error_when_a_fetch_fails() {
        let workspace_id = Uuid::new_v4();

        let mut tier_repo = MockWorkspaceTierRepository::new();
        tier_repo
            .expect_find_by_workspace_id()
            .returning(|_| Box::pin(async { Err(anyhow!("database unavailable")) }));

        // the failure short-circuits before the remaining reads
        let service_repo = MockServiceSubscriptionRepository::new();
        let usage_repo = MockUsageCounterRepository::new();

        let usecase = WorkspaceTierUseCase::new(
            Arc::new(tier_repo),
            Arc::new(service_repo),
            Arc::new(usage_repo),
        );

        let err = usecase
            .get_workspace_tier(workspace_id)
            .await
            .expect_err("fetch failure must surface");

        assert_eq!(
            err.status_code(),
            axum::http::StatusCode::INTERNAL_SERVER_ERROR
        );
        assert!(!err.to_string().is_empty());
    }
}
