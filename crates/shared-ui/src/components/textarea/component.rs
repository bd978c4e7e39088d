use dioxus::prelude::*;

/// Multi-line input with a character counter and an optional inline error.
#[component]
pub fn Textarea(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default)] max_length: Option<usize>,
    #[props(default)] error: Option<String>,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "textarea", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let invalid = error.is_some();
    let count = value.chars().count();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "textarea-wrapper",
            if !label.is_empty() {
                label { class: "textarea-label", "{label}" }
            }
            textarea {
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                "aria-invalid": if invalid { "true" } else { "false" },
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
            div { class: "textarea-meta",
                if let Some(message) = error {
                    span { class: "textarea-error", "{message}" }
                }
                if let Some(max) = max_length {
                    span {
                        class: if count > max { "textarea-count over" } else { "textarea-count" },
                        "{count}/{max}"
                    }
                }
            }
        }
    }
}
