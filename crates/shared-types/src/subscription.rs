use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Vendor subscription plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionPlan {
    Basic,
    Professional,
    Enterprise,
}

impl SubscriptionPlan {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionPlan::Basic => "Basic",
            SubscriptionPlan::Professional => "Professional",
            SubscriptionPlan::Enterprise => "Enterprise",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    Trialing,
    PastDue,
    Canceled,
}

impl SubscriptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "Active",
            SubscriptionStatus::Trialing => "Trialing",
            SubscriptionStatus::PastDue => "Past due",
            SubscriptionStatus::Canceled => "Canceled",
        }
    }

    /// Whether the subscription currently bills.
    pub fn is_billing(&self) -> bool {
        matches!(self, SubscriptionStatus::Active | SubscriptionStatus::PastDue)
    }
}

/// Billing interval of a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingInterval {
    Month,
    Year,
}

/// A vendor's subscription as listed by the admin endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: Uuid,
    pub vendor_name: String,
    pub vendor_email: String,
    pub plan: SubscriptionPlan,
    pub status: SubscriptionStatus,
    pub amount_cents: i64,
    pub interval: BillingInterval,
    pub current_period_end: DateTime<Utc>,
}

impl Subscription {
    /// Monthly-normalized amount in cents.
    pub fn monthly_cents(&self) -> i64 {
        match self.interval {
            BillingInterval::Month => self.amount_cents,
            BillingInterval::Year => self.amount_cents / 12,
        }
    }
}

/// Summary figures for the subscriptions dashboard cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubscriptionSummary {
    pub active: usize,
    pub past_due: usize,
    pub monthly_recurring_cents: i64,
}

impl SubscriptionSummary {
    pub fn from_subscriptions(subscriptions: &[Subscription]) -> Self {
        let mut summary = Self::default();
        for sub in subscriptions {
            match sub.status {
                SubscriptionStatus::Active => summary.active += 1,
                SubscriptionStatus::PastDue => summary.past_due += 1,
                _ => {}
            }
            if sub.status.is_billing() {
                summary.monthly_recurring_cents += sub.monthly_cents();
            }
        }
        summary
    }
}

/// Format cents as a dollar amount, e.g. `$1,234.50`.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let dollars = (abs / 100).to_string();
    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}${grouped}.{:02}", abs % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sub(status: SubscriptionStatus, amount_cents: i64, interval: BillingInterval) -> Subscription {
        Subscription {
            id: Uuid::new_v4(),
            vendor_name: "Lumen Catering".to_string(),
            vendor_email: "ops@lumen.example".to_string(),
            plan: SubscriptionPlan::Professional,
            status,
            amount_cents,
            interval,
            current_period_end: DateTime::parse_from_rfc3339("2026-11-01T00:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        }
    }

    #[test]
    fn summary_counts_and_mrr() {
        let subs = vec![
            sub(SubscriptionStatus::Active, 4_900, BillingInterval::Month),
            sub(SubscriptionStatus::Active, 120_000, BillingInterval::Year),
            sub(SubscriptionStatus::PastDue, 4_900, BillingInterval::Month),
            sub(SubscriptionStatus::Canceled, 4_900, BillingInterval::Month),
            sub(SubscriptionStatus::Trialing, 4_900, BillingInterval::Month),
        ];
        let summary = SubscriptionSummary::from_subscriptions(&subs);
        assert_eq!(summary.active, 2);
        assert_eq!(summary.past_due, 1);
        assert_eq!(summary.monthly_recurring_cents, 4_900 + 10_000 + 4_900);
    }

    #[test]
    fn format_cents_groups_thousands() {
        assert_eq!(format_cents(0), "$0.00");
        assert_eq!(format_cents(4_905), "$49.05");
        assert_eq!(format_cents(123_456_789), "$1,234,567.89");
        assert_eq!(format_cents(-1_000_00), "-$1,000.00");
    }

    #[test]
    fn status_uses_snake_case_on_the_wire() {
        let status: SubscriptionStatus = serde_json::from_str("\"past_due\"").unwrap();
        assert_eq!(status, SubscriptionStatus::PastDue);
    }
}
