use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{Button, ButtonSize, ButtonVariant};

/// Inline error shown above a table when a request fails.
#[component]
pub fn ErrorBanner(error: AppError, #[props(default)] on_retry: Option<EventHandler<()>>) -> Element {
    let message = error.friendly_message();

    rsx! {
        div { class: "error-banner", role: "alert",
            span { "{message}" }
            if let Some(retry) = on_retry {
                Button {
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::Small,
                    onclick: move |_| retry.call(()),
                    "Retry"
                }
            }
        }
    }
}
