use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    domain::value_objects::features::FeaturePatch, infra::db::postgres::schema::product_tiers,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ProductTierEntity {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub daily_lead_limit: i64,
    pub monthly_lead_limit: Option<i64>,
    pub features: FeaturePatch,
    pub price_monthly: i32,
    pub price_yearly: i32,
    pub is_active: bool,
}

/// Raw row used for Diesel queries. Features stay as JSON and are parsed
/// into a FeaturePatch.
#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = product_tiers)]
pub struct ProductTierRow {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub daily_lead_limit: i64,
    pub monthly_lead_limit: Option<i64>,
    pub features: serde_json::Value,
    pub price_monthly: i32,
    pub price_yearly: i32,
    pub is_active: bool,
}

impl From<ProductTierRow> for ProductTierEntity {
    fn from(value: ProductTierRow) -> Self {
        let features = serde_json::from_value(value.features).unwrap_or_default();

        Self {
            id: value.id,
            name: value.name,
            slug: value.slug,
            daily_lead_limit: value.daily_lead_limit,
            monthly_lead_limit: value.monthly_lead_limit,
            features,
            price_monthly: value.price_monthly,
            price_yearly: value.price_yearly,
            is_active: value.is_active,
        }
    }
}
