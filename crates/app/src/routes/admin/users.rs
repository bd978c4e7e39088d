use dioxus::prelude::*;
use shared_types::{AdminUser, AppError, BulkUserActionRequest, FeatureFlags, UserAction};
use shared_ui::{
    Button, ButtonSize, ButtonVariant, CellValue, Column, DataTable, PageHeader, PageTitle,
    RowActions,
};
use tracing::info;
use uuid::Uuid;

use crate::api::ApiClient;
use crate::components::{
    badge_cell, use_list_query, user_role_variant, user_status_variant, ErrorBanner,
};
use crate::export::export_or_log;
use crate::format_helpers::{format_date_human, sortable_timestamp};

const ALL_USER_ACTIONS: [UserAction; 3] =
    [UserAction::Activate, UserAction::Suspend, UserAction::Delete];

/// Data columns shared by the table and the CSV export.
fn user_columns() -> Vec<Column<AdminUser>> {
    vec![
        Column::new("name", "Name", |u: &AdminUser| CellValue::from(&u.name)),
        Column::new("email", "Email", |u: &AdminUser| CellValue::from(&u.email)),
        Column::new("role", "Role", |u: &AdminUser| CellValue::from(u.role.as_str()))
            .render(|u: &AdminUser| badge_cell(user_role_variant(u.role), u.role.as_str())),
        Column::new("status", "Status", |u: &AdminUser| {
            CellValue::from(u.status.as_str())
        })
        .render(|u: &AdminUser| badge_cell(user_status_variant(u.status), u.status.as_str())),
        Column::new("events", "Events", |u: &AdminUser| CellValue::from(u.events_count))
            .width("90px"),
        Column::new("joined", "Joined", |u: &AdminUser| {
            CellValue::from(sortable_timestamp(&u.created_at))
        })
        .text(|u: &AdminUser| format_date_human(&u.created_at)),
        Column::new("last_login", "Last login", |u: &AdminUser| {
            CellValue::from(u.last_login.as_ref().map(sortable_timestamp))
        })
        .text(|u: &AdminUser| match &u.last_login {
            Some(at) => format_date_human(at),
            None => "Never".to_string(),
        })
        .render(|u: &AdminUser| match &u.last_login {
            Some(at) => rsx! { "{format_date_human(at)}" },
            None => rsx! { span { class: "muted", "Never" } },
        }),
    ]
}

/// Leading checkbox column bound to the selection signal.
fn selection_column(mut selected: Signal<Vec<Uuid>>) -> Column<AdminUser> {
    Column::new("select", "", |_: &AdminUser| CellValue::Empty)
        .sortable(false)
        .width("40px")
        .render(move |u: &AdminUser| {
            let id = u.id;
            let checked = selected.read().contains(&id);
            let label = format!("Select {}", u.name);
            rsx! {
                input {
                    r#type: "checkbox",
                    checked,
                    "aria-label": "{label}",
                    onchange: move |_| toggle_selection(&mut selected.write(), id),
                }
            }
        })
}

fn toggle_selection(selected: &mut Vec<Uuid>, id: Uuid) {
    if let Some(pos) = selected.iter().position(|s| *s == id) {
        selected.remove(pos);
    } else {
        selected.push(id);
    }
}

fn action_notice(action: UserAction, affected: u64) -> String {
    let verb = match action {
        UserAction::Activate => "Activated",
        UserAction::Suspend => "Suspended",
        UserAction::Delete => "Deleted",
    };
    let noun = if affected == 1 { "user" } else { "users" };
    format!("{verb} {affected} {noun}")
}

/// User management: paginated table with selection, bulk and per-row
/// account actions, and CSV export.
#[component]
pub fn AdminUsers() -> Element {
    let api = use_context::<ApiClient>();
    let flags: FeatureFlags = use_context();
    let list = use_list_query();
    let mut selected: Signal<Vec<Uuid>> = use_signal(Vec::new);
    let mut notice: Signal<Option<String>> = use_signal(|| None);
    let mut action_error: Signal<Option<AppError>> = use_signal(|| None);

    let mut users = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            let query = list.query();
            async move { api.list_users(query).await }
        }
    });

    let run_action = use_callback(move |(action, ids): (UserAction, Vec<Uuid>)| {
        let api = api.clone();
        spawn(async move {
            let result = match BulkUserActionRequest::new(action, &ids) {
                Ok(request) => api.bulk_user_action(&request).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(done) => {
                    info!(action = action.label(), affected = done.affected, "user action applied");
                    action_error.set(None);
                    notice.set(Some(action_notice(action, done.affected)));
                    selected.write().clear();
                    users.restart();
                }
                Err(e) => {
                    notice.set(None);
                    action_error.set(Some(e));
                }
            }
        });
    });

    let columns = use_hook(move || {
        let mut columns = vec![selection_column(selected)];
        columns.extend(user_columns());
        columns
    });
    let export_columns = use_hook(user_columns);

    let actions = use_hook(move || {
        RowActions::new(move |u: &AdminUser| {
            let id = u.id;
            let status = u.status;
            rsx! {
                for action in ALL_USER_ACTIONS.into_iter().filter(|a| a.applies_to(status)) {
                    button {
                        class: "data-table-action",
                        role: "menuitem",
                        onclick: move |_| run_action.call((action, vec![id])),
                        "{action.label()}"
                    }
                }
            }
        })
    });

    let view = list.view(users.read().as_ref());
    let selection_count = selected.read().len();
    let export_rows = view.rows.clone();

    rsx! {
        PageHeader {
            PageTitle { subtitle: "Manage customer, vendor and admin accounts", "Users" }
        }
        if let Some(message) = notice() {
            div { class: "notice", role: "status", "{message}" }
        }
        if let Some(err) = action_error() {
            ErrorBanner { error: err }
        }
        if let Some(err) = view.error.clone() {
            ErrorBanner { error: err, on_retry: move |_| users.restart() }
        }
        if selection_count > 0 {
            div { class: "bulk-bar",
                span { "{selection_count} selected" }
                for action in ALL_USER_ACTIONS {
                    Button {
                        variant: if action == UserAction::Delete { ButtonVariant::Destructive } else { ButtonVariant::Secondary },
                        size: ButtonSize::Small,
                        onclick: move |_| run_action.call((action, selected.read().clone())),
                        "{action.label()}"
                    }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Small,
                    onclick: move |_| selected.write().clear(),
                    "Clear"
                }
            }
        }
        DataTable {
            data: view.rows,
            columns,
            search_placeholder: "Search users...",
            exportable: flags.export,
            on_export: move |_| export_or_log("users", &export_columns, &export_rows),
            pagination: view.pagination,
            actions,
            loading: view.loading,
            empty_message: "No users found",
        }
    }
}
