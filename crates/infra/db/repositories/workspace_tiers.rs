use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, prelude::*};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain,
    infra::db::postgres::{
        postgres_connection::PgPoolSquad,
        schema::{product_tiers, workspace_tiers},
    },
};
use domain::{
    entities::{
        product_tiers::ProductTierRow,
        workspace_tiers::{WorkspaceTierEntity, WorkspaceTierRow},
    },
    repositories::workspace_tiers::WorkspaceTierRepository,
};

pub struct WorkspaceTierPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl WorkspaceTierPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl WorkspaceTierRepository for WorkspaceTierPostgres {
    async fn find_by_workspace_id(
        &self,
        workspace_id: Uuid,
    ) -> Result<Option<WorkspaceTierEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = workspace_tiers::table
            .inner_join(product_tiers::table)
            .filter(workspace_tiers::workspace_id.eq(workspace_id))
            .select((WorkspaceTierRow::as_select(), ProductTierRow::as_select()))
            .first::<(WorkspaceTierRow, ProductTierRow)>(&mut conn)
            .optional()?;

        Ok(row.map(|(assignment, product_tier)| {
            WorkspaceTierEntity::from_row(assignment, product_tier.into())
        }))
    }
}
