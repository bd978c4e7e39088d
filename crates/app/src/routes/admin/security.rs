use dioxus::prelude::*;
use shared_types::{filter_by_min_severity, FeatureFlags, SecurityEvent, Severity, ALL_SEVERITIES};
use shared_ui::{CellValue, Column, DataTable, PageHeader, PageTitle};

use crate::api::ApiClient;
use crate::components::{badge_cell, severity_variant, use_list_query, ErrorBanner};
use crate::export::export_or_log;
use crate::format_helpers::{format_datetime_human, format_snake_case_title, sortable_timestamp};

fn security_columns() -> Vec<Column<SecurityEvent>> {
    vec![
        Column::new("occurred", "Time", |e: &SecurityEvent| {
            CellValue::from(sortable_timestamp(&e.occurred_at))
        })
        .width("190px")
        .text(|e: &SecurityEvent| format_datetime_human(&e.occurred_at)),
        // Sorts by rank, searches by label.
        Column::new("severity", "Severity", |e: &SecurityEvent| {
            CellValue::from(e.severity as i64)
        })
        .text(|e: &SecurityEvent| e.severity.display_name().to_string())
        .render(|e: &SecurityEvent| {
            badge_cell(severity_variant(e.severity), e.severity.display_name())
        }),
        Column::new("type", "Event", |e: &SecurityEvent| {
            CellValue::from(format_snake_case_title(&e.event_type))
        }),
        Column::new("actor", "Actor", |e: &SecurityEvent| CellValue::from(e.actor_email.clone())),
        Column::new("ip", "IP address", |e: &SecurityEvent| CellValue::from(&e.ip_address)),
        Column::new("details", "Details", |e: &SecurityEvent| CellValue::from(&e.details))
            .sortable(false),
    ]
}

/// Security event monitor with a minimum-severity filter.
#[component]
pub fn SecurityEvents() -> Element {
    let flags: FeatureFlags = use_context();

    if !flags.security_monitoring {
        return rsx! {
            PageHeader { PageTitle { "Security" } }
            p { class: "muted", "Security monitoring is disabled in this deployment." }
        };
    }

    rsx! { SecurityEventTable { export: flags.export } }
}

#[component]
fn SecurityEventTable(export: bool) -> Element {
    let api = use_context::<ApiClient>();
    let list = use_list_query();
    let mut min_severity: Signal<Option<Severity>> = use_signal(|| None);

    let mut events = use_resource(move || {
        let api = api.clone();
        let query = list.query();
        async move { api.list_security_events(query).await }
    });

    let columns = use_hook(security_columns);
    let export_columns = columns.clone();

    let view = list.view(events.read().as_ref());
    let rows = filter_by_min_severity(&view.rows, min_severity());
    let export_rows = rows.clone();

    rsx! {
        PageHeader {
            PageTitle { subtitle: "Authentication failures, permission changes and other audit events", "Security" }
        }
        div { class: "filter-bar",
            label {
                "Minimum severity "
                select {
                    onchange: move |evt: FormEvent| min_severity.set(Severity::from_key(&evt.value())),
                    option { value: "", selected: min_severity().is_none(), "All" }
                    for severity in ALL_SEVERITIES.iter().copied() {
                        option {
                            value: severity.as_str(),
                            selected: min_severity() == Some(severity),
                            "{severity.display_name()}"
                        }
                    }
                }
            }
        }
        if let Some(err) = view.error.clone() {
            ErrorBanner { error: err, on_retry: move |_| events.restart() }
        }
        DataTable {
            data: rows,
            columns,
            search_placeholder: "Search events...",
            exportable: export,
            on_export: move |_| export_or_log("security-events", &export_columns, &export_rows),
            pagination: view.pagination,
            loading: view.loading,
            empty_message: "No security events",
        }
    }
}
