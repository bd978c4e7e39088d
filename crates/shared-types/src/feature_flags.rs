use serde::{Deserialize, Serialize};

/// Feature flags controlling which optional screens and integrations are
/// active in the client.
///
/// Every field defaults to `false` so a missing or incomplete config file
/// disables all optional features.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    /// Show the Export button on admin tables.
    #[serde(default)]
    pub export: bool,
    /// Ask the recommendation API before falling back to the rule table.
    #[serde(default)]
    pub ai_recommendations: bool,
    /// A/B experiment dashboard.
    #[serde(default)]
    pub experiments: bool,
    /// Security event monitor.
    #[serde(default)]
    pub security_monitoring: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_all_false() {
        let flags = FeatureFlags::default();
        assert!(!flags.export);
        assert!(!flags.ai_recommendations);
        assert!(!flags.experiments);
        assert!(!flags.security_monitoring);
    }

    #[test]
    fn deserialize_json_with_missing_fields_defaults() {
        let flags: FeatureFlags = serde_json::from_str("{}").unwrap();
        assert_eq!(flags, FeatureFlags::default());
    }

    #[test]
    fn deserialize_partial_json() {
        let flags: FeatureFlags = serde_json::from_str(r#"{"export":true}"#).unwrap();
        assert!(flags.export);
        assert!(!flags.experiments);
    }
}
