use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Severity of a security event, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

pub const ALL_SEVERITIES: &[Severity] = &[
    Severity::Low,
    Severity::Medium,
    Severity::High,
    Severity::Critical,
];

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }

    pub fn from_key(s: &str) -> Option<Self> {
        ALL_SEVERITIES.iter().copied().find(|sev| sev.as_str() == s)
    }
}

/// A logged security-relevant event (failed login, permission change, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityEvent {
    pub id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub severity: Severity,
    pub event_type: String,
    #[serde(default)]
    pub actor_email: Option<String>,
    pub ip_address: String,
    #[serde(default)]
    pub details: String,
}

/// Keep events at or above `min`. `None` keeps everything.
pub fn filter_by_min_severity(events: &[SecurityEvent], min: Option<Severity>) -> Vec<SecurityEvent> {
    match min {
        None => events.to_vec(),
        Some(min) => events.iter().filter(|e| e.severity >= min).cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(severity: Severity) -> SecurityEvent {
        SecurityEvent {
            id: Uuid::new_v4(),
            occurred_at: DateTime::parse_from_rfc3339("2026-10-01T08:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            severity,
            event_type: "failed_login".to_string(),
            actor_email: None,
            ip_address: "203.0.113.9".to_string(),
            details: String::new(),
        }
    }

    #[test]
    fn min_severity_filter_is_inclusive() {
        let events = vec![
            event(Severity::Low),
            event(Severity::High),
            event(Severity::Medium),
            event(Severity::Critical),
        ];
        let kept = filter_by_min_severity(&events, Some(Severity::High));
        let sevs: Vec<_> = kept.iter().map(|e| e.severity).collect();
        assert_eq!(sevs, vec![Severity::High, Severity::Critical]);
        assert_eq!(filter_by_min_severity(&events, None).len(), 4);
    }

    #[test]
    fn severity_from_key() {
        assert_eq!(Severity::from_key("critical"), Some(Severity::Critical));
        assert_eq!(Severity::from_key("urgent"), None);
    }
}
