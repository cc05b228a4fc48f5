use serde::{Deserialize, Serialize};

/// Effective capability set for a workspace.
///
/// Every key of the vocabulary is always present. Plan features, workspace
/// overrides, and platform bundles are partial layers applied on top of
/// `ProductTierFeatures::default()`; a layer can change a value but never
/// remove a key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductTierFeatures {
    pub basic_search: bool,
    pub campaigns: bool,
    pub ai_agents: bool,
    pub api_access: bool,
    pub white_label: bool,
    pub custom_domains: bool,
    pub dedicated_support: bool,
    pub team_members: i32,
    pub max_campaigns: i32,
    pub max_templates: i32,
    pub max_email_accounts: i32,
}

impl Default for ProductTierFeatures {
    fn default() -> Self {
        Self {
            basic_search: true,
            campaigns: false,
            ai_agents: false,
            api_access: false,
            white_label: false,
            custom_domains: false,
            dedicated_support: false,
            team_members: 1,
            max_campaigns: 0,
            max_templates: 0,
            max_email_accounts: 1,
        }
    }
}

impl ProductTierFeatures {
    /// Overlay a partial layer. Absent keys leave the current value untouched.
    pub fn apply(&mut self, patch: &FeaturePatch) {
        if let Some(value) = patch.basic_search {
            self.basic_search = value;
        }
        if let Some(value) = patch.campaigns {
            self.campaigns = value;
        }
        if let Some(value) = patch.ai_agents {
            self.ai_agents = value;
        }
        if let Some(value) = patch.api_access {
            self.api_access = value;
        }
        if let Some(value) = patch.white_label {
            self.white_label = value;
        }
        if let Some(value) = patch.custom_domains {
            self.custom_domains = value;
        }
        if let Some(value) = patch.dedicated_support {
            self.dedicated_support = value;
        }
        if let Some(value) = patch.team_members {
            self.team_members = value;
        }
        if let Some(value) = patch.max_campaigns {
            self.max_campaigns = value;
        }
        if let Some(value) = patch.max_templates {
            self.max_templates = value;
        }
        if let Some(value) = patch.max_email_accounts {
            self.max_email_accounts = value;
        }
    }

    /// Translate a service-tier platform bundle into this vocabulary.
    ///
    /// `daily_lead_limit` is a limit, not a capability, and is handled by
    /// limit resolution instead.
    pub fn apply_platform(&mut self, platform: &PlatformFeatures) {
        if let Some(value) = platform.campaigns {
            self.campaigns = value;
        }
        if let Some(value) = platform.ai_agents {
            self.ai_agents = value;
        }
        if let Some(value) = platform.api_access {
            self.api_access = value;
        }
        if let Some(value) = platform.team_seats {
            self.team_members = value;
        }
        if let Some(value) = platform.white_label {
            self.white_label = value;
        }
        if let Some(value) = platform.custom_integrations {
            self.custom_domains = value;
        }
    }
}

/// Partial feature layer. Stored as JSONB on `product_tiers.features` and
/// `workspace_tiers.feature_overrides`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeaturePatch {
    #[serde(default)]
    pub basic_search: Option<bool>,

    #[serde(default)]
    pub campaigns: Option<bool>,

    #[serde(default)]
    pub ai_agents: Option<bool>,

    #[serde(default)]
    pub api_access: Option<bool>,

    #[serde(default)]
    pub white_label: Option<bool>,

    #[serde(default)]
    pub custom_domains: Option<bool>,

    #[serde(default)]
    pub dedicated_support: Option<bool>,

    #[serde(default)]
    pub team_members: Option<i32>,

    #[serde(default)]
    pub max_campaigns: Option<i32>,

    #[serde(default)]
    pub max_templates: Option<i32>,

    #[serde(default)]
    pub max_email_accounts: Option<i32>,
}

/// Feature bundle attached to a service tier. Stored as JSONB in
/// `service_tiers.platform_features`; field names follow the billing
/// system's vocabulary and are mapped onto `ProductTierFeatures` keys by
/// `apply_platform`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlatformFeatures {
    #[serde(default)]
    pub campaigns: Option<bool>,

    #[serde(default)]
    pub ai_agents: Option<bool>,

    #[serde(default)]
    pub api_access: Option<bool>,

    #[serde(default)]
    pub team_seats: Option<i32>,

    #[serde(default)]
    pub white_label: Option<bool>,

    #[serde(default)]
    pub custom_integrations: Option<bool>,

    #[serde(default)]
    pub daily_lead_limit: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_enables_only_basic_search() {
        let features = ProductTierFeatures::default();

        assert!(features.basic_search);
        assert!(!features.campaigns);
        assert!(!features.ai_agents);
        assert!(!features.api_access);
        assert!(!features.white_label);
        assert!(!features.custom_domains);
        assert!(!features.dedicated_support);
        assert_eq!(features.team_members, 1);
        assert_eq!(features.max_campaigns, 0);
        assert_eq!(features.max_templates, 0);
        assert_eq!(features.max_email_accounts, 1);
    }

    #[test]
    fn apply_only_touches_present_keys() {
        let mut features = ProductTierFeatures::default();
        let patch = FeaturePatch {
            campaigns: Some(true),
            team_members: Some(5),
            ..Default::default()
        };

        features.apply(&patch);

        assert!(features.campaigns);
        assert_eq!(features.team_members, 5);
        assert!(features.basic_search);
        assert_eq!(features.max_email_accounts, 1);
    }

    #[test]
    fn apply_can_disable_a_default_enabled_capability() {
        let mut features = ProductTierFeatures::default();
        let patch = FeaturePatch {
            basic_search: Some(false),
            ..Default::default()
        };

        features.apply(&patch);

        assert!(!features.basic_search);
    }

    #[test]
    fn platform_bundle_maps_onto_feature_vocabulary() {
        let mut features = ProductTierFeatures::default();
        let platform = PlatformFeatures {
            campaigns: Some(true),
            team_seats: Some(25),
            custom_integrations: Some(true),
            daily_lead_limit: Some(500),
            ..Default::default()
        };

        features.apply_platform(&platform);

        assert!(features.campaigns);
        assert_eq!(features.team_members, 25);
        assert!(features.custom_domains);
        // the limit field is not a capability and must not change the set
        assert!(!features.white_label);
    }

    #[test]
    fn patch_deserializes_from_sparse_json() {
        let patch: FeaturePatch =
            serde_json::from_str(r#"{"api_access": true, "team_members": 3}"#).unwrap();

        assert_eq!(patch.api_access, Some(true));
        assert_eq!(patch.team_members, Some(3));
        assert_eq!(patch.campaigns, None);
    }
}
