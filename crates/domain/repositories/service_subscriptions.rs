use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::service_tiers::{ServiceSubscriptionEntity, ServiceTierEntity};

#[async_trait]
#[automock]
pub trait ServiceSubscriptionRepository {
    /// The workspace's currently active subscription, if any. At most one
    /// subscription is active per workspace at a time.
    async fn find_active_by_workspace_id(
        &self,
        workspace_id: Uuid,
    ) -> Result<Option<ServiceSubscriptionEntity>>;

    async fn find_service_tier_by_id(
        &self,
        service_tier_id: Uuid,
    ) -> Result<Option<ServiceTierEntity>>;
}
