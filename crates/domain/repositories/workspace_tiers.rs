use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::workspace_tiers::WorkspaceTierEntity;

#[async_trait]
#[automock]
pub trait WorkspaceTierRepository {
    /// Legacy tier assignment joined with its product tier. `None` means the
    /// workspace has never been provisioned a tier row, which is a normal
    /// outcome resolved to the default tier.
    async fn find_by_workspace_id(&self, workspace_id: Uuid)
        -> Result<Option<WorkspaceTierEntity>>;
}
