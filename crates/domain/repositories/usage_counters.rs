use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::automock;
use uuid::Uuid;

/// Independent count queries scoped to one workspace. Zero matching rows is
/// `Ok(0)`, never an error.
#[async_trait]
#[automock]
pub trait UsageCounterRepository {
    async fn count_leads_since(&self, workspace_id: Uuid, since: DateTime<Utc>) -> Result<i64>;

    async fn count_team_members(&self, workspace_id: Uuid) -> Result<i64>;

    async fn count_campaigns(&self, workspace_id: Uuid) -> Result<i64>;

    async fn count_templates(&self, workspace_id: Uuid) -> Result<i64>;

    async fn count_email_accounts(&self, workspace_id: Uuid) -> Result<i64>;
}
