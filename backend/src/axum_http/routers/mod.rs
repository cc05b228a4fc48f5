pub mod product_tiers;
pub mod workspace_tier;
