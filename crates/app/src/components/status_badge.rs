//! Badge variants for the enums shown in admin tables.

use dioxus::prelude::*;
use shared_types::{ModerationStatus, Severity, SubscriptionStatus, UserRole, UserStatus};
use shared_ui::{Badge, BadgeVariant};

pub fn user_role_variant(role: UserRole) -> BadgeVariant {
    match role {
        UserRole::Admin => BadgeVariant::Destructive,
        UserRole::Vendor => BadgeVariant::Primary,
        UserRole::Customer => BadgeVariant::Secondary,
    }
}

pub fn user_status_variant(status: UserStatus) -> BadgeVariant {
    match status {
        UserStatus::Active => BadgeVariant::Success,
        UserStatus::Suspended => BadgeVariant::Destructive,
        UserStatus::Pending => BadgeVariant::Warning,
    }
}

pub fn moderation_variant(status: ModerationStatus) -> BadgeVariant {
    match status {
        ModerationStatus::Pending => BadgeVariant::Warning,
        ModerationStatus::Approved => BadgeVariant::Success,
        ModerationStatus::Rejected => BadgeVariant::Destructive,
    }
}

pub fn subscription_variant(status: SubscriptionStatus) -> BadgeVariant {
    match status {
        SubscriptionStatus::Active => BadgeVariant::Success,
        SubscriptionStatus::Trialing => BadgeVariant::Primary,
        SubscriptionStatus::PastDue => BadgeVariant::Warning,
        SubscriptionStatus::Canceled => BadgeVariant::Outline,
    }
}

pub fn severity_variant(severity: Severity) -> BadgeVariant {
    match severity {
        Severity::Low => BadgeVariant::Outline,
        Severity::Medium => BadgeVariant::Secondary,
        Severity::High => BadgeVariant::Warning,
        Severity::Critical => BadgeVariant::Destructive,
    }
}

/// Table cell rendering a badge.
pub fn badge_cell(variant: BadgeVariant, text: &str) -> Element {
    rsx! {
        Badge { variant, "{text}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn problem_states_stand_out() {
        assert_eq!(user_status_variant(UserStatus::Suspended), BadgeVariant::Destructive);
        assert_eq!(moderation_variant(ModerationStatus::Pending), BadgeVariant::Warning);
        assert_eq!(subscription_variant(SubscriptionStatus::PastDue), BadgeVariant::Warning);
        assert_eq!(severity_variant(Severity::Critical), BadgeVariant::Destructive);
    }
}
