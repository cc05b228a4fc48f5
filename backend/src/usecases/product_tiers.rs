use std::sync::Arc;

use crates::domain::{
    repositories::product_tiers::ProductTierRepository,
    value_objects::workspace_tiers::ProductTierDto,
};
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum ProductTierError {
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ProductTierError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        match self {
            ProductTierError::Internal(_) => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub struct ProductTierUseCase<T>
where
    T: ProductTierRepository + Send + Sync + 'static,
{
    product_tier_repo: Arc<T>,
}

impl<T> ProductTierUseCase<T>
where
    T: ProductTierRepository + Send + Sync + 'static,
{
    pub fn new(product_tier_repo: Arc<T>) -> Self {
        Self { product_tier_repo }
    }

    pub async fn list_tiers(&self) -> Result<Vec<ProductTierDto>, ProductTierError> {
        info!("product_tiers: listing active tiers");

        let tiers = self.product_tier_repo.list_active_tiers().await.map_err(|err| {
            error!(db_error = ?err, "product_tiers: failed to list active tiers");
            ProductTierError::Internal(err)
        })?;

        let tier_count = tiers.len();
        info!(tier_count, "product_tiers: active tiers loaded");

        Ok(tiers.into_iter().map(ProductTierDto::from).collect())
    }
}
