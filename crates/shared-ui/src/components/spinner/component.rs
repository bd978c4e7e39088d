use dioxus::prelude::*;

/// Indeterminate loading indicator.
#[component]
pub fn Spinner(
    #[props(default = "Loading".to_string(), into)] label: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "spinner", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            "aria-label": "{label}",
            ..merged,
            span { class: "spinner-ring" }
            span { class: "sr-only", "{label}" }
        }
    }
}
