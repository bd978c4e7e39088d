use dioxus::prelude::*;
use shared_types::{
    rating_stars, AppError, FeatureFlags, ModerateTestimonialRequest, ModerationAction,
    ModerationStatus, Testimonial, ALL_MODERATION_STATUSES,
};
use shared_ui::{
    Button, ButtonSize, ButtonVariant, CellValue, Column, DataTable, PageHeader, PageTitle,
    RowActions,
};
use tracing::info;
use uuid::Uuid;

use crate::api::ApiClient;
use crate::components::{badge_cell, moderation_variant, use_list_query, ErrorBanner};
use crate::export::export_or_log;
use crate::format_helpers::{format_date_human, sortable_timestamp};

/// Longest review excerpt shown in the table.
const EXCERPT_CHARS: usize = 80;

fn excerpt(content: &str) -> String {
    if content.chars().count() <= EXCERPT_CHARS {
        return content.to_string();
    }
    let cut: String = content.chars().take(EXCERPT_CHARS).collect();
    format!("{}…", cut.trim_end())
}

fn testimonial_columns() -> Vec<Column<Testimonial>> {
    vec![
        Column::new("author", "Author", |t: &Testimonial| CellValue::from(&t.author_name)),
        Column::new("email", "Email", |t: &Testimonial| CellValue::from(&t.author_email)),
        Column::new("rating", "Rating", |t: &Testimonial| CellValue::from(u32::from(t.rating)))
            .width("110px")
            .render(|t: &Testimonial| rsx! {
                span { class: "rating", "aria-label": "{t.rating} of 5", "{rating_stars(t.rating)}" }
            }),
        // Searches the full text; displays an excerpt.
        Column::new("content", "Review", |t: &Testimonial| CellValue::from(&t.content))
            .sortable(false)
            .render(|t: &Testimonial| rsx! { "{excerpt(&t.content)}" }),
        Column::new("status", "Status", |t: &Testimonial| {
            CellValue::from(t.status.display_name())
        })
        .render(|t: &Testimonial| badge_cell(moderation_variant(t.status), t.status.display_name())),
        Column::new("submitted", "Submitted", |t: &Testimonial| {
            CellValue::from(sortable_timestamp(&t.created_at))
        })
        .text(|t: &Testimonial| format_date_human(&t.created_at)),
    ]
}

/// Testimonial moderation queue with one tab per status.
#[component]
pub fn Moderation() -> Element {
    let api = use_context::<ApiClient>();
    let flags: FeatureFlags = use_context();
    let mut list = use_list_query();
    let mut status = use_signal(ModerationStatus::default);
    let mut action_error: Signal<Option<AppError>> = use_signal(|| None);

    let mut testimonials = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            let status = status();
            let query = list.query();
            async move { api.list_testimonials(status, query).await }
        }
    });

    let moderate = use_callback(
        move |(id, current, action): (Uuid, ModerationStatus, ModerationAction)| {
            // No-op transitions are rejected locally.
            if let Err(e) = current.apply(action) {
                action_error.set(Some(e));
                return;
            }
            let api = api.clone();
            spawn(async move {
                let request = ModerateTestimonialRequest { action, note: None };
                match api.moderate_testimonial(id, &request).await {
                    Ok(updated) => {
                        info!(%id, status = updated.status.as_str(), "testimonial moderated");
                        action_error.set(None);
                        testimonials.restart();
                    }
                    Err(e) => action_error.set(Some(e)),
                }
            });
        },
    );

    let columns = use_hook(testimonial_columns);
    let export_columns = columns.clone();
    let actions = use_hook(move || {
        RowActions::new(move |t: &Testimonial| {
            let id = t.id;
            let current = t.status;
            rsx! {
                for action in current.available_actions() {
                    button {
                        class: "data-table-action",
                        role: "menuitem",
                        onclick: move |_| moderate.call((id, current, action)),
                        "{action.label()}"
                    }
                }
            }
        })
    });

    let view = list.view(testimonials.read().as_ref());
    let export_rows = view.rows.clone();
    let active = status();
    let empty_message = format!("No {} testimonials", active.as_str());

    rsx! {
        PageHeader {
            PageTitle { subtitle: "Review customer testimonials before they go public", "Testimonials" }
        }
        div { class: "filter-bar", role: "tablist",
            for tab in ALL_MODERATION_STATUSES.iter().copied() {
                Button {
                    variant: if tab == active { ButtonVariant::Primary } else { ButtonVariant::Ghost },
                    size: ButtonSize::Small,
                    onclick: move |_| {
                        status.set(tab);
                        list.reset();
                    },
                    "{tab.display_name()}"
                }
            }
        }
        if let Some(err) = action_error() {
            ErrorBanner { error: err }
        }
        if let Some(err) = view.error.clone() {
            ErrorBanner { error: err, on_retry: move |_| testimonials.restart() }
        }
        DataTable {
            data: view.rows,
            columns,
            search_placeholder: "Search testimonials...",
            exportable: flags.export,
            on_export: move |_| export_or_log("testimonials", &export_columns, &export_rows),
            pagination: view.pagination,
            actions,
            loading: view.loading,
            empty_message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excerpt_keeps_short_text() {
        assert_eq!(excerpt("Great DJ, packed dance floor."), "Great DJ, packed dance floor.");
    }

    #[test]
    fn excerpt_truncates_on_char_boundary() {
        let long = "é".repeat(120);
        let cut = excerpt(&long);
        assert_eq!(cut.chars().count(), EXCERPT_CHARS + 1);
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn review_column_is_not_sortable() {
        let columns = testimonial_columns();
        let review = columns.iter().find(|c| c.key() == "content").unwrap();
        assert!(!review.is_sortable());
    }

    #[test]
    fn submitted_column_searches_displayed_date() {
        use chrono::{DateTime, Utc};
        use shared_ui::row_matches;

        let testimonial = Testimonial {
            id: Uuid::new_v4(),
            event_id: Uuid::new_v4(),
            author_name: "Ana".to_string(),
            author_email: "ana@example.com".to_string(),
            rating: 5,
            content: "Great DJ, packed dance floor.".to_string(),
            status: ModerationStatus::Pending,
            created_at: DateTime::parse_from_rfc3339("2026-01-20T15:30:00Z")
                .unwrap()
                .with_timezone(&Utc),
            moderation_note: None,
        };
        let columns = testimonial_columns();
        assert!(row_matches(&testimonial, &columns, "jan 20, 2026"));
        assert!(!row_matches(&testimonial, &columns, "15:30"));
    }
}
