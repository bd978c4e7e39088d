use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaDownload, FaEllipsisVertical, FaSort, FaSortDown, FaSortUp,
};
use dioxus_free_icons::Icon;

use super::model::{derive_rows, Column, PaginationState, RowActions, SortDirection, SortState};
use crate::components::button::{Button, ButtonVariant};
use crate::components::input::Input;
use crate::components::pagination::Pagination;
use crate::components::search_bar::SearchBar;
use crate::components::spinner::Spinner;

/// Server-driven pagination for a [`DataTable`].
///
/// The table never slices `data`; the caller passes only the current page's
/// rows and handles the callbacks by fetching another page.
#[derive(Clone, PartialEq)]
pub struct TablePagination {
    pub state: PaginationState,
    pub on_page_change: EventHandler<u64>,
    /// When set, a page-size picker is shown.
    pub on_limit_change: Option<EventHandler<u64>>,
}

#[derive(Props, Clone, PartialEq)]
pub struct DataTableProps<T: Clone + PartialEq + 'static> {
    pub data: Vec<T>,
    pub columns: Vec<Column<T>>,
    #[props(default = true)]
    pub searchable: bool,
    #[props(default = "Search...".to_string(), into)]
    pub search_placeholder: String,
    #[props(default = false)]
    pub exportable: bool,
    #[props(default)]
    pub on_export: Option<EventHandler<()>>,
    #[props(default)]
    pub pagination: Option<TablePagination>,
    #[props(default)]
    pub actions: Option<RowActions<T>>,
    #[props(default = false)]
    pub loading: bool,
    #[props(default = "No data available".to_string(), into)]
    pub empty_message: String,
}

/// Generic table with client-side search, tri-state column sort, optional
/// server pagination, row action menus and an export trigger.
///
/// Search and sort are local UI state; the rows shown are recomputed from
/// `data` on every render.
#[component]
pub fn DataTable<T: Clone + PartialEq + 'static>(props: DataTableProps<T>) -> Element {
    let mut search = use_signal(String::new);
    let mut sort = use_signal(SortState::default);

    if props.loading {
        return rsx! {
            document::Link { rel: "stylesheet", href: asset!("./style.css") }
            div { class: "data-table-container",
                div { class: "data-table-loading", role: "status",
                    Spinner { label: "Loading" }
                }
            }
        };
    }

    let visible = derive_rows(&props.data, &props.columns, &search.read(), &sort.read());
    let current_sort = sort.read().clone();
    let has_actions = props.actions.is_some();
    let colspan = (props.columns.len() + usize::from(has_actions)).max(1);
    let on_export = props.on_export;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table-container",
            if props.searchable || props.exportable {
                div { class: "data-table-toolbar",
                    if props.searchable {
                        SearchBar {
                            Input {
                                input_type: "search",
                                value: search.read().clone(),
                                placeholder: props.search_placeholder.clone(),
                                aria_label: "Search table",
                                on_input: move |evt: FormEvent| search.set(evt.value()),
                            }
                        }
                    }
                    if props.exportable {
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| {
                                if let Some(handler) = &on_export {
                                    handler.call(());
                                }
                            },
                            Icon { width: 14, height: 14, icon: FaDownload }
                            " Export"
                        }
                    }
                }
            }
            div { class: "data-table",
                table {
                    thead {
                        tr {
                            for column in props.columns.iter() {
                                SortableHeader {
                                    key: "{column.key()}",
                                    column_key: column.key().to_string(),
                                    label: column.label().to_string(),
                                    width_style: column.width_style(),
                                    sortable: column.is_sortable(),
                                    direction: current_sort.direction_for(column.key()),
                                    on_sort: move |key: String| sort.write().toggle(&key),
                                }
                            }
                            if has_actions {
                                th { class: "data-table-actions-header", "Actions" }
                            }
                        }
                    }
                    tbody {
                        if visible.is_empty() {
                            tr { class: "data-table-empty",
                                td { colspan: "{colspan}", "{props.empty_message}" }
                            }
                        }
                        for idx in visible {
                            tr { key: "{idx}", class: "data-table-row",
                                for column in props.columns.iter() {
                                    td { style: column.width_style(), {column.render_cell(&props.data[idx])} }
                                }
                                if let Some(actions) = &props.actions {
                                    td { class: "data-table-actions-cell",
                                        RowActionsMenu { {actions.call(&props.data[idx])} }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            if let Some(pagination) = props.pagination.clone() {
                Pagination {
                    state: pagination.state,
                    on_page_change: pagination.on_page_change,
                    on_limit_change: pagination.on_limit_change,
                }
            }
        }
    }
}

/// Column header cell. Clicking a sortable header advances its sort state.
#[component]
fn SortableHeader(
    column_key: String,
    label: String,
    width_style: String,
    sortable: bool,
    direction: SortDirection,
    on_sort: EventHandler<String>,
) -> Element {
    if !sortable {
        return rsx! {
            th { style: width_style, "{label}" }
        };
    }

    rsx! {
        th {
            class: "sortable",
            style: width_style,
            "aria-sort": direction.aria(),
            onclick: move |_| on_sort.call(column_key.clone()),
            span { class: "data-table-header-label", "{label}" }
            span { class: "sort-indicator",
                match direction {
                    SortDirection::Ascending => rsx! { Icon { width: 12, height: 12, icon: FaSortUp } },
                    SortDirection::Descending => rsx! { Icon { width: 12, height: 12, icon: FaSortDown } },
                    SortDirection::Unsorted => rsx! { Icon { width: 12, height: 12, icon: FaSort } },
                }
            }
        }
    }
}

/// Overflow menu holding caller-supplied row actions.
#[component]
fn RowActionsMenu(children: Element) -> Element {
    let mut open = use_signal(|| false);

    rsx! {
        div { class: "data-table-actions",
            button {
                class: "data-table-actions-trigger",
                r#type: "button",
                "aria-label": "Row actions",
                "aria-expanded": if open() { "true" } else { "false" },
                onclick: move |_| open.toggle(),
                Icon { width: 14, height: 14, icon: FaEllipsisVertical }
            }
            if open() {
                div {
                    class: "data-table-actions-menu",
                    role: "menu",
                    onclick: move |_| open.set(false),
                    {children}
                }
            }
        }
    }
}
