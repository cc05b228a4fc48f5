use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, prelude::*};
use std::sync::Arc;

use crate::{
    domain,
    infra::db::postgres::{postgres_connection::PgPoolSquad, schema::product_tiers},
};
use domain::{
    entities::product_tiers::{ProductTierEntity, ProductTierRow},
    repositories::product_tiers::ProductTierRepository,
};

pub struct ProductTierPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl ProductTierPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl ProductTierRepository for ProductTierPostgres {
    async fn list_active_tiers(&self) -> Result<Vec<ProductTierEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = product_tiers::table
            .filter(product_tiers::is_active.eq(true))
            .order(product_tiers::price_monthly.asc())
            .select(ProductTierRow::as_select())
            .load::<ProductTierRow>(&mut conn)?;

        Ok(rows.into_iter().map(ProductTierEntity::from).collect())
    }
}
