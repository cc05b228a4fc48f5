use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

impl BillingCycle {
    pub fn from_str(value: &str) -> Self {
        match value {
            "yearly" => BillingCycle::Yearly,
            _ => BillingCycle::Monthly,
        }
    }
}

impl Display for BillingCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cycle = match self {
            BillingCycle::Monthly => "monthly",
            BillingCycle::Yearly => "yearly",
        };
        write!(f, "{}", cycle)
    }
}
