pub mod product_tiers;
pub mod service_subscriptions;
pub mod usage_counters;
pub mod workspace_tiers;
