use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::{RunQueryDsl, prelude::*};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::repositories::usage_counters::UsageCounterRepository,
    infra::db::postgres::{
        postgres_connection::PgPoolSquad,
        schema::{email_accounts, email_campaigns, email_templates, leads, workspace_members},
    },
};

pub struct UsageCounterPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl UsageCounterPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl UsageCounterRepository for UsageCounterPostgres {
    async fn count_leads_since(&self, workspace_id: Uuid, since: DateTime<Utc>) -> Result<i64> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let count = leads::table
            .filter(leads::workspace_id.eq(workspace_id))
            .filter(leads::created_at.ge(since))
            .count()
            .get_result::<i64>(&mut conn)?;

        Ok(count)
    }

    async fn count_team_members(&self, workspace_id: Uuid) -> Result<i64> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let count = workspace_members::table
            .filter(workspace_members::workspace_id.eq(workspace_id))
            .count()
            .get_result::<i64>(&mut conn)?;

        Ok(count)
    }

    async fn count_campaigns(&self, workspace_id: Uuid) -> Result<i64> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let count = email_campaigns::table
            .filter(email_campaigns::workspace_id.eq(workspace_id))
            .count()
            .get_result::<i64>(&mut conn)?;

        Ok(count)
    }

    async fn count_templates(&self, workspace_id: Uuid) -> Result<i64> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let count = email_templates::table
            .filter(email_templates::workspace_id.eq(workspace_id))
            .count()
            .get_result::<i64>(&mut conn)?;

        Ok(count)
    }

    async fn count_email_accounts(&self, workspace_id: Uuid) -> Result<i64> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let count = email_accounts::table
            .filter(email_accounts::workspace_id.eq(workspace_id))
            .count()
            .get_result::<i64>(&mut conn)?;

        Ok(count)
    }
}
