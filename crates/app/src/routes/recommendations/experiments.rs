use dioxus::prelude::*;
use shared_types::{Experiment, ExperimentStatus, FeatureFlags};
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, CellValue,
    Column, DataTable, PageHeader, PageTitle, Spinner,
};

use crate::api::ApiClient;
use crate::components::ErrorBanner;
use crate::format_helpers::{format_date_human, format_lift, format_percent};

/// One variant row, flattened with its control for lift.
#[derive(Debug, Clone, PartialEq)]
struct VariantRow {
    name: String,
    is_control: bool,
    impressions: u64,
    conversions: u64,
    rate: f64,
    lift: Option<f64>,
    winner: bool,
}

fn variant_rows(experiment: &Experiment) -> Vec<VariantRow> {
    let control = experiment.control();
    let winner = experiment.winner().map(|w| w.name.as_str());
    experiment
        .variants
        .iter()
        .map(|v| VariantRow {
            name: v.name.clone(),
            is_control: v.is_control,
            impressions: v.impressions,
            conversions: v.conversions,
            rate: v.conversion_rate(),
            lift: if v.is_control {
                None
            } else {
                control.and_then(|c| v.lift_over(c))
            },
            winner: winner == Some(v.name.as_str()),
        })
        .collect()
}

fn variant_columns() -> Vec<Column<VariantRow>> {
    vec![
        Column::new("variant", "Variant", |r: &VariantRow| CellValue::from(&r.name)).render(
            |r: &VariantRow| rsx! {
                "{r.name} "
                if r.is_control {
                    Badge { variant: BadgeVariant::Outline, "Control" }
                }
                if r.winner {
                    Badge { variant: BadgeVariant::Success, "Winner" }
                }
            },
        ),
        Column::new("impressions", "Impressions", |r: &VariantRow| CellValue::from(r.impressions)),
        Column::new("conversions", "Conversions", |r: &VariantRow| CellValue::from(r.conversions)),
        Column::new("rate", "Conversion", |r: &VariantRow| CellValue::from(r.rate))
            .render(|r: &VariantRow| rsx! { "{format_percent(r.rate)}" }),
        Column::new("lift", "Lift", |r: &VariantRow| CellValue::from(r.lift))
            .render(|r: &VariantRow| rsx! { "{format_lift(r.lift)}" }),
    ]
}

fn status_variant(status: ExperimentStatus) -> BadgeVariant {
    match status {
        ExperimentStatus::Draft => BadgeVariant::Outline,
        ExperimentStatus::Running => BadgeVariant::Primary,
        ExperimentStatus::Completed => BadgeVariant::Success,
    }
}

/// A/B experiments on recommendation placement.
#[component]
pub fn Experiments() -> Element {
    let flags: FeatureFlags = use_context();
    if !flags.experiments {
        return rsx! {
            PageHeader { PageTitle { "Experiments" } }
            p { class: "muted", "Experiments are disabled in this deployment." }
        };
    }

    rsx! { ExperimentList {} }
}

#[component]
fn ExperimentList() -> Element {
    let api = use_context::<ApiClient>();
    let mut experiments = use_resource(move || {
        let api = api.clone();
        async move { api.list_experiments().await }
    });

    let state = experiments.read().clone();

    rsx! {
        PageHeader {
            PageTitle { subtitle: "Conversion by variant, with lift over control", "Experiments" }
        }
        match state {
            None => rsx! { Spinner { label: "Loading experiments" } },
            Some(Err(err)) => rsx! {
                ErrorBanner { error: err, on_retry: move |_| experiments.restart() }
            },
            Some(Ok(list)) if list.is_empty() => rsx! {
                p { class: "muted", "No experiments yet." }
            },
            Some(Ok(list)) => rsx! {
                for experiment in list {
                    ExperimentCard { key: "{experiment.id}", experiment: experiment.clone() }
                }
            },
        }
    }
}

#[component]
fn ExperimentCard(experiment: Experiment) -> Element {
    let columns = use_hook(variant_columns);
    let rows = variant_rows(&experiment);
    let started = format_date_human(&experiment.started_at);
    let total = experiment.total_impressions();

    rsx! {
        Card { class: "experiment-card",
            CardHeader {
                CardTitle {
                    "{experiment.name} "
                    Badge { variant: status_variant(experiment.status), "{experiment.status.as_str()}" }
                }
                CardDescription { "Started {started} · {total} impressions" }
            }
            CardContent {
                DataTable {
                    data: rows,
                    columns,
                    searchable: false,
                    empty_message: "No variants",
                }
            }
        }
    }
}
