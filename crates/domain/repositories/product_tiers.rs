use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::product_tiers::ProductTierEntity;

#[async_trait]
#[automock]
pub trait ProductTierRepository {
    async fn list_active_tiers(&self) -> Result<Vec<ProductTierEntity>>;
}
