use dioxus::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::data_table::PaginationState;

/// Page sizes offered when a limit callback is supplied.
pub const LIMIT_OPTIONS: &[u64] = &[10, 20, 50, 100];

/// Page-based pagination controls.
///
/// Display only: the range text and button states come from `state`, and
/// every change is delegated to the callbacks.
#[component]
pub fn Pagination(
    state: PaginationState,
    on_page_change: EventHandler<u64>,
    #[props(default)] on_limit_change: Option<EventHandler<u64>>,
) -> Element {
    let page = state.effective_page();
    let previous = state.previous_page();
    let next = state.next_page();
    let range = state.range_text();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "pagination",
            span { class: "pagination-info", "{range}" }
            div { class: "pagination-controls",
                if let Some(on_limit) = on_limit_change {
                    label { class: "pagination-limit",
                        "Rows per page "
                        select {
                            value: "{state.limit}",
                            onchange: move |evt: FormEvent| {
                                if let Ok(limit) = evt.value().parse::<u64>() {
                                    on_limit.call(limit);
                                }
                            },
                            for size in LIMIT_OPTIONS.iter() {
                                option {
                                    value: "{size}",
                                    selected: *size == state.limit,
                                    "{size}"
                                }
                            }
                        }
                    }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: !state.has_previous(),
                    onclick: move |_| on_page_change.call(previous),
                    "Previous"
                }
                span { class: "pagination-page",
                    "Page {page} of {state.total_pages().max(1)}"
                }
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: !state.has_next(),
                    onclick: move |_| on_page_change.call(next),
                    "Next"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    /// Opening `<button ...>` tag of the button labelled `label`.
    fn button_tag<'a>(html: &'a str, label: &str) -> &'a str {
        let label_at = html.find(label).unwrap();
        let start = html[..label_at].rfind("<button").unwrap();
        let end = start + html[start..].find('>').unwrap();
        &html[start..=end]
    }

    fn is_disabled(tag: &str) -> bool {
        tag.contains("disabled")
            && !tag.contains("disabled=false")
            && !tag.contains("disabled=\"false\"")
    }

    #[test]
    fn first_page_disables_previous_only() {
        fn app() -> Element {
            rsx! {
                Pagination {
                    state: PaginationState::new(1, 10, 25),
                    on_page_change: move |_| {},
                }
            }
        }
        let html = render(app);
        assert!(html.contains("Showing 1 to 10 of 25 entries"));
        assert!(is_disabled(button_tag(&html, "Previous")));
        assert!(!is_disabled(button_tag(&html, "Next")));
    }

    #[test]
    fn last_page_disables_next_only() {
        fn app() -> Element {
            rsx! {
                Pagination {
                    state: PaginationState::new(3, 10, 25),
                    on_page_change: move |_| {},
                }
            }
        }
        let html = render(app);
        assert!(html.contains("Showing 21 to 25 of 25 entries"));
        assert!(html.contains("Page 3 of 3"));
        assert!(!is_disabled(button_tag(&html, "Previous")));
        assert!(is_disabled(button_tag(&html, "Next")));
    }

    #[test]
    fn limit_picker_only_with_callback() {
        fn without() -> Element {
            rsx! {
                Pagination { state: PaginationState::new(1, 20, 40), on_page_change: move |_| {} }
            }
        }
        fn with() -> Element {
            rsx! {
                Pagination {
                    state: PaginationState::new(1, 20, 40),
                    on_page_change: move |_| {},
                    on_limit_change: move |_| {},
                }
            }
        }
        assert!(!render(without).contains("<select"));
        assert!(render(with).contains("Rows per page"));
    }
}
