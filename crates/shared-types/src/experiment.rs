use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One arm of an A/B test on recommendation placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentVariant {
    pub name: String,
    pub impressions: u64,
    pub conversions: u64,
    #[serde(default)]
    pub is_control: bool,
}

impl ExperimentVariant {
    /// Conversions per impression, 0 when the variant was never shown.
    pub fn conversion_rate(&self) -> f64 {
        if self.impressions == 0 {
            0.0
        } else {
            self.conversions as f64 / self.impressions as f64
        }
    }

    /// Relative improvement over `control` in percent. `None` when the
    /// control never converted.
    pub fn lift_over(&self, control: &ExperimentVariant) -> Option<f64> {
        let base = control.conversion_rate();
        if base == 0.0 {
            return None;
        }
        Some((self.conversion_rate() - base) / base * 100.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperimentStatus {
    Draft,
    Running,
    Completed,
}

impl ExperimentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperimentStatus::Draft => "Draft",
            ExperimentStatus::Running => "Running",
            ExperimentStatus::Completed => "Completed",
        }
    }
}

/// An A/B test as returned by the experiments endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experiment {
    pub id: Uuid,
    pub name: String,
    pub status: ExperimentStatus,
    pub started_at: DateTime<Utc>,
    pub variants: Vec<ExperimentVariant>,
}

impl Experiment {
    pub fn control(&self) -> Option<&ExperimentVariant> {
        self.variants.iter().find(|v| v.is_control)
    }

    /// The non-control variant with the highest conversion rate, provided it
    /// beats the control.
    pub fn winner(&self) -> Option<&ExperimentVariant> {
        let control = self.control()?;
        self.variants
            .iter()
            .filter(|v| !v.is_control)
            .filter(|v| v.lift_over(control).is_some_and(|lift| lift > 0.0))
            .max_by(|a, b| a.conversion_rate().total_cmp(&b.conversion_rate()))
    }

    pub fn total_impressions(&self) -> u64 {
        self.variants.iter().map(|v| v.impressions).sum()
    }
}
