use dioxus::prelude::*;
use shared_types::{EventType, ServiceSuggestion, SuggestionSource, ALL_EVENT_TYPES};
use shared_ui::{Badge, BadgeVariant, CellValue, Column, DataTable, PageHeader, PageTitle};

use crate::api::ApiClient;
use crate::format_helpers::format_percent;

fn source_label(source: SuggestionSource) -> (&'static str, BadgeVariant) {
    match source {
        SuggestionSource::Model => ("AI model", BadgeVariant::Primary),
        SuggestionSource::Rules => ("Rule-based", BadgeVariant::Secondary),
    }
}

fn suggestion_columns() -> Vec<Column<ServiceSuggestion>> {
    vec![
        Column::new("category", "Service", |s: &ServiceSuggestion| {
            CellValue::from(s.category.display_name())
        }),
        Column::new("confidence", "Confidence", |s: &ServiceSuggestion| {
            CellValue::from(s.confidence)
        })
        .width("180px")
        .render(|s: &ServiceSuggestion| {
            let pct = format_percent(s.confidence);
            rsx! {
                div { class: "suggestion",
                    div { class: "confidence-bar",
                        span { style: "width: {pct}" }
                    }
                    span { "{pct}" }
                }
            }
        }),
        Column::new("reason", "Why", |s: &ServiceSuggestion| CellValue::from(&s.reason))
            .sortable(false),
    ]
}

/// Service categories to offer for an event type.
#[component]
pub fn Suggestions() -> Element {
    let api = use_context::<ApiClient>();
    let mut event_type = use_signal(EventType::default);

    let suggestions = use_resource(move || {
        let api = api.clone();
        let event_type = event_type();
        async move { api.suggestions_with_fallback(event_type).await }
    });

    let columns = use_hook(suggestion_columns);
    let current = suggestions.read().clone();
    let loading = current.is_none();
    let (rows, source) = match current {
        Some(s) => (s.suggestions, Some(s.source)),
        None => (Vec::new(), None),
    };

    rsx! {
        PageHeader {
            PageTitle { subtitle: "Services customers usually book for each kind of event", "Service suggestions" }
        }
        div { class: "filter-bar",
            label {
                "Event type "
                select {
                    onchange: move |evt: FormEvent| event_type.set(EventType::from_key(&evt.value())),
                    for t in ALL_EVENT_TYPES.iter().copied() {
                        option {
                            value: t.as_str(),
                            selected: t == event_type(),
                            "{t.display_name()}"
                        }
                    }
                }
            }
            if let Some(source) = source {
                {
                    let (label, variant) = source_label(source);
                    rsx! { Badge { variant, "{label}" } }
                }
            }
        }
        DataTable {
            data: rows,
            columns,
            searchable: false,
            loading,
            empty_message: "No suggestions for this event type",
        }
    }
}
