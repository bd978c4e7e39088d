use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(feature = "validation")]
use validator::Validate;

use crate::error::AppError;

// ── Testimonial validation constants ────────────────────────────────

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;
pub const MIN_CONTENT_LEN: u64 = 10;
pub const MAX_CONTENT_LEN: u64 = 1000;

/// Moderation state of a testimonial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// All moderation states in queue-tab order.
pub const ALL_MODERATION_STATUSES: &[ModerationStatus] = &[
    ModerationStatus::Pending,
    ModerationStatus::Approved,
    ModerationStatus::Rejected,
];

/// A moderator's requested change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationAction {
    Approve,
    Reject,
    /// Send an already-decided testimonial back to the queue.
    Reset,
}

impl ModerationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModerationStatus::Pending => "pending",
            ModerationStatus::Approved => "approved",
            ModerationStatus::Rejected => "rejected",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ModerationStatus::Pending => "Pending",
            ModerationStatus::Approved => "Approved",
            ModerationStatus::Rejected => "Rejected",
        }
    }

    /// Parse a status key, falling back to `Pending`.
    pub fn from_key(s: &str) -> Self {
        match s {
            "approved" => ModerationStatus::Approved,
            "rejected" => ModerationStatus::Rejected,
            _ => ModerationStatus::Pending,
        }
    }

    /// Status after applying `action`.
    ///
    /// A transition that would leave the status unchanged is a conflict and
    /// is never sent to the API.
    pub fn apply(self, action: ModerationAction) -> Result<Self, AppError> {
        let next = match action {
            ModerationAction::Approve => ModerationStatus::Approved,
            ModerationAction::Reject => ModerationStatus::Rejected,
            ModerationAction::Reset => ModerationStatus::Pending,
        };
        if next == self {
            return Err(AppError::conflict(format!(
                "Testimonial is already {}",
                self.as_str()
            )));
        }
        Ok(next)
    }

    /// Actions that change this status, in menu order.
    pub fn available_actions(self) -> Vec<ModerationAction> {
        [
            ModerationAction::Approve,
            ModerationAction::Reject,
            ModerationAction::Reset,
        ]
        .into_iter()
        .filter(|a| self.apply(*a).is_ok())
        .collect()
    }
}

impl ModerationAction {
    pub fn label(&self) -> &'static str {
        match self {
            ModerationAction::Approve => "Approve",
            ModerationAction::Reject => "Reject",
            ModerationAction::Reset => "Return to queue",
        }
    }
}

/// A customer review of an event or vendor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: Uuid,
    pub event_id: Uuid,
    pub author_name: String,
    pub author_email: String,
    pub rating: u8,
    pub content: String,
    pub status: ModerationStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moderation_note: Option<String>,
}

/// Request body for submitting a testimonial.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct CreateTestimonialRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Event is required"))
    )]
    pub event_id: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Name is required"))
    )]
    pub author_name: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Enter a valid email address"))
    )]
    pub author_email: String,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))
    )]
    pub rating: u8,
    #[cfg_attr(
        feature = "validation",
        validate(length(
            min = 10,
            max = 1000,
            message = "Review must be between 10 and 1000 characters"
        ))
    )]
    pub content: String,
}

#[cfg(feature = "validation")]
impl CreateTestimonialRequest {
    /// Trim text fields and run field validation.
    pub fn validated(mut self) -> Result<Self, AppError> {
        self.event_id = self.event_id.trim().to_string();
        self.author_name = self.author_name.trim().to_string();
        self.author_email = self.author_email.trim().to_string();
        self.content = self.content.trim().to_string();
        self.validate()?;
        Ok(self)
    }
}

/// Request body for the moderation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModerateTestimonialRequest {
    pub action: ModerationAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Render a rating as filled/empty stars.
pub fn rating_stars(rating: u8) -> String {
    let filled = rating.min(MAX_RATING) as usize;
    let empty = MAX_RATING as usize - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_moves_between_states() {
        assert_eq!(
            ModerationStatus::Pending.apply(ModerationAction::Approve).unwrap(),
            ModerationStatus::Approved
        );
        assert_eq!(
            ModerationStatus::Approved.apply(ModerationAction::Reject).unwrap(),
            ModerationStatus::Rejected
        );
        assert_eq!(
            ModerationStatus::Rejected.apply(ModerationAction::Reset).unwrap(),
            ModerationStatus::Pending
        );
    }

    #[test]
    fn apply_rejects_noop_transitions() {
        let err = ModerationStatus::Approved
            .apply(ModerationAction::Approve)
            .unwrap_err();
        assert_eq!(err.kind, crate::AppErrorKind::Conflict);
        assert_eq!(err.message, "Testimonial is already approved");
        assert!(ModerationStatus::Pending.apply(ModerationAction::Reset).is_err());
    }

    #[test]
    fn available_actions_exclude_current_status() {
        assert_eq!(
            ModerationStatus::Pending.available_actions(),
            vec![ModerationAction::Approve, ModerationAction::Reject]
        );
        assert_eq!(
            ModerationStatus::Approved.available_actions(),
            vec![ModerationAction::Reject, ModerationAction::Reset]
        );
    }

    #[test]
    fn status_key_roundtrip() {
        for status in ALL_MODERATION_STATUSES {
            assert_eq!(ModerationStatus::from_key(status.as_str()), *status);
        }
        assert_eq!(ModerationStatus::from_key("bogus"), ModerationStatus::Pending);
    }

    #[test]
    fn rating_stars_clamps() {
        assert_eq!(rating_stars(3), "★★★☆☆");
        assert_eq!(rating_stars(9), "★★★★★");
        assert_eq!(rating_stars(0), "☆☆☆☆☆");
    }

    #[cfg(feature = "validation")]
    fn valid_request() -> CreateTestimonialRequest {
        CreateTestimonialRequest {
            event_id: "7f1c2d4e-0000-4000-8000-000000000001".to_string(),
            author_name: "  Priya  ".to_string(),
            author_email: "priya@example.com".to_string(),
            rating: 5,
            content: "The caterers were fantastic.".to_string(),
        }
    }

    #[cfg(feature = "validation")]
    #[test]
    fn validated_trims_and_accepts() {
        let req = valid_request().validated().unwrap();
        assert_eq!(req.author_name, "Priya");
    }

    #[cfg(feature = "validation")]
    #[test]
    fn validated_collects_field_errors() {
        let req = CreateTestimonialRequest {
            author_email: "not-an-email".to_string(),
            rating: 0,
            content: "short".to_string(),
            ..valid_request()
        };
        let err = req.validated().unwrap_err();
        assert_eq!(err.kind, crate::AppErrorKind::ValidationError);
        assert_eq!(
            err.field_errors.get("rating").map(String::as_str),
            Some("Rating must be between 1 and 5")
        );
        assert!(err.field_errors.contains_key("author_email"));
        assert!(err.field_errors.contains_key("content"));
        assert!(!err.field_errors.contains_key("author_name"));
    }

    #[cfg(feature = "validation")]
    #[test]
    fn whitespace_only_name_is_rejected() {
        let req = CreateTestimonialRequest {
            author_name: "   ".to_string(),
            ..valid_request()
        };
        let err = req.validated().unwrap_err();
        assert!(err.field_errors.contains_key("author_name"));
    }
}
