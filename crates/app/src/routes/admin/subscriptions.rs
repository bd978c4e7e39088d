use dioxus::prelude::*;
use shared_types::{
    format_cents, BillingInterval, FeatureFlags, Subscription, SubscriptionSummary,
};
use shared_ui::{CellValue, Column, DataTable, PageHeader, PageTitle, StatCard};

use crate::api::ApiClient;
use crate::components::{badge_cell, subscription_variant, use_list_query, ErrorBanner};
use crate::export::export_or_log;
use crate::format_helpers::{format_date_human, sortable_timestamp};

fn interval_suffix(interval: BillingInterval) -> &'static str {
    match interval {
        BillingInterval::Month => "/mo",
        BillingInterval::Year => "/yr",
    }
}

fn subscription_columns() -> Vec<Column<Subscription>> {
    vec![
        Column::new("vendor", "Vendor", |s: &Subscription| CellValue::from(&s.vendor_name)),
        Column::new("email", "Email", |s: &Subscription| CellValue::from(&s.vendor_email)),
        Column::new("plan", "Plan", |s: &Subscription| CellValue::from(s.plan.as_str())),
        Column::new("status", "Status", |s: &Subscription| CellValue::from(s.status.as_str()))
            .render(|s: &Subscription| badge_cell(subscription_variant(s.status), s.status.as_str())),
        Column::new("amount", "Amount", |s: &Subscription| CellValue::from(s.amount_cents))
            .text(|s: &Subscription| {
                format!("{}{}", format_cents(s.amount_cents), interval_suffix(s.interval))
            }),
        Column::new("renews", "Renews", |s: &Subscription| {
            CellValue::from(sortable_timestamp(&s.current_period_end))
        })
        .text(|s: &Subscription| format_date_human(&s.current_period_end)),
    ]
}

/// Vendor subscriptions with summary cards for the loaded page.
#[component]
pub fn Subscriptions() -> Element {
    let api = use_context::<ApiClient>();
    let flags: FeatureFlags = use_context();
    let list = use_list_query();

    let mut subscriptions = use_resource(move || {
        let api = api.clone();
        let query = list.query();
        async move { api.list_subscriptions(query).await }
    });

    let columns = use_hook(subscription_columns);
    let export_columns = columns.clone();

    let view = list.view(subscriptions.read().as_ref());
    let summary = SubscriptionSummary::from_subscriptions(&view.rows);
    let export_rows = view.rows.clone();

    rsx! {
        PageHeader {
            PageTitle { subtitle: "Vendor plans and billing status", "Subscriptions" }
        }
        if let Some(err) = view.error.clone() {
            ErrorBanner { error: err, on_retry: move |_| subscriptions.restart() }
        }
        if !view.loading && view.error.is_none() {
            div { class: "stat-grid",
                StatCard { title: "Active", value: summary.active.to_string(), hint: "on this page" }
                StatCard { title: "Past due", value: summary.past_due.to_string(), hint: "on this page" }
                StatCard {
                    title: "Monthly recurring",
                    value: format_cents(summary.monthly_recurring_cents),
                    hint: "active and past-due, normalized to monthly",
                }
            }
        }
        DataTable {
            data: view.rows,
            columns,
            search_placeholder: "Search subscriptions...",
            exportable: flags.export,
            on_export: move |_| export_or_log("subscriptions", &export_columns, &export_rows),
            pagination: view.pagination,
            loading: view.loading,
            empty_message: "No subscriptions yet",
        }
    }
}
