use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::{AppError, AppErrorKind, CreateTestimonialRequest, MAX_CONTENT_LEN, MAX_RATING};
use shared_ui::{Button, Card, CardContent, Form, Input, PageHeader, PageTitle, Textarea};
use tracing::info;

use crate::api::ApiClient;
use crate::components::ErrorBanner;

fn field_error(errors: &HashMap<String, String>, field: &str) -> Option<String> {
    errors.get(field).cloned()
}

/// Split a failed submission into per-field messages and a banner error.
fn split_error(err: AppError) -> (HashMap<String, String>, Option<AppError>) {
    if err.kind == AppErrorKind::ValidationError && !err.field_errors.is_empty() {
        (err.field_errors, None)
    } else {
        (HashMap::new(), Some(err))
    }
}

/// Public review form for a completed event.
#[component]
pub fn SubmitTestimonial() -> Element {
    let api = use_context::<ApiClient>();
    let mut event_id = use_signal(String::new);
    let mut author_name = use_signal(String::new);
    let mut author_email = use_signal(String::new);
    let mut rating = use_signal(|| MAX_RATING);
    let mut content = use_signal(String::new);
    let mut field_errors: Signal<HashMap<String, String>> = use_signal(HashMap::new);
    let mut submit_error: Signal<Option<AppError>> = use_signal(|| None);
    let mut submitted = use_signal(|| false);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |_: FormEvent| {
        let request = CreateTestimonialRequest {
            event_id: event_id(),
            author_name: author_name(),
            author_email: author_email(),
            rating: rating(),
            content: content(),
        };
        let request = match request.validated() {
            Ok(request) => request,
            Err(e) => {
                let (fields, banner) = split_error(e);
                field_errors.set(fields);
                submit_error.set(banner);
                return;
            }
        };
        field_errors.set(HashMap::new());
        submit_error.set(None);
        submitting.set(true);
        let api = api.clone();
        spawn(async move {
            match api.submit_testimonial(&request).await {
                Ok(created) => {
                    info!(id = %created.id, "testimonial submitted");
                    submitted.set(true);
                }
                Err(e) => {
                    let (fields, banner) = split_error(e);
                    field_errors.set(fields);
                    submit_error.set(banner);
                }
            }
            submitting.set(false);
        });
    };

    if submitted() {
        return rsx! {
            PageHeader { PageTitle { "Thank you!" } }
            div { class: "notice", role: "status",
                "Your review was received and will appear once a moderator approves it."
            }
        };
    }

    let errors = field_errors.read().clone();

    rsx! {
        PageHeader {
            PageTitle { subtitle: "Tell other customers how your event went", "Leave a review" }
        }
        if let Some(err) = submit_error() {
            ErrorBanner { error: err }
        }
        Card {
            CardContent {
                Form { onsubmit: handle_submit,
                    div { class: "form-grid",
                        Input {
                            label: "Event reference",
                            value: event_id(),
                            on_input: move |evt: FormEvent| event_id.set(evt.value()),
                            error: field_error(&errors, "event_id"),
                        }
                        Input {
                            label: "Your name",
                            value: author_name(),
                            on_input: move |evt: FormEvent| author_name.set(evt.value()),
                            error: field_error(&errors, "author_name"),
                        }
                        Input {
                            label: "Email",
                            input_type: "email",
                            value: author_email(),
                            on_input: move |evt: FormEvent| author_email.set(evt.value()),
                            error: field_error(&errors, "author_email"),
                        }
                        label { class: "input-label",
                            "Rating "
                            select {
                                onchange: move |evt: FormEvent| {
                                    if let Ok(r) = evt.value().parse::<u8>() {
                                        rating.set(r);
                                    }
                                },
                                for r in (1..=MAX_RATING).rev() {
                                    option { value: "{r}", selected: r == rating(), "{r} / {MAX_RATING}" }
                                }
                            }
                            if let Some(message) = field_error(&errors, "rating") {
                                span { class: "input-error", "{message}" }
                            }
                        }
                        Textarea {
                            label: "Review",
                            value: content(),
                            max_length: MAX_CONTENT_LEN as usize,
                            on_input: move |evt: FormEvent| content.set(evt.value()),
                            error: field_error(&errors, "content"),
                        }
                        div {
                            Button { submit: true, disabled: submitting(),
                                if submitting() { "Submitting..." } else { "Submit review" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_go_to_fields() {
        let mut fields = HashMap::new();
        fields.insert("author_email".to_string(), "Enter a valid email address".to_string());
        let (fields, banner) = split_error(AppError::validation("Validation failed", fields));
        assert!(banner.is_none());
        assert_eq!(
            field_error(&fields, "author_email").as_deref(),
            Some("Enter a valid email address")
        );
    }

    #[test]
    fn other_errors_go_to_banner() {
        let (fields, banner) = split_error(AppError::network("offline"));
        assert!(fields.is_empty());
        assert_eq!(banner.map(|e| e.kind), Some(AppErrorKind::NetworkError));
    }

    #[test]
    fn invalid_request_reports_every_bad_field() {
        let request = CreateTestimonialRequest {
            event_id: " ".to_string(),
            author_name: "Ana".to_string(),
            author_email: "not-an-email".to_string(),
            rating: 0,
            content: "short".to_string(),
        };
        let (fields, _) = split_error(request.validated().unwrap_err());
        for key in ["event_id", "author_email", "rating", "content"] {
            assert!(fields.contains_key(key), "{key}");
        }
        assert!(!fields.contains_key("author_name"));
    }

    #[test]
    fn form_renders_all_fields() {
        fn app() -> Element {
            use_context_provider(|| ApiClient::new(shared_types::ClientConfig::default()));
            rsx! { SubmitTestimonial {} }
        }
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("Event reference"));
        assert!(html.contains("Submit review"));
        assert!(html.contains("0/1000"));
    }
}
