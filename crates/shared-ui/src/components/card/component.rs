use dioxus::prelude::*;

/// Bordered content container.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardHeader(children: Element) -> Element {
    rsx! {
        div { class: "card-header", {children} }
    }
}

#[component]
pub fn CardTitle(children: Element) -> Element {
    rsx! {
        h3 { class: "card-title", {children} }
    }
}

#[component]
pub fn CardDescription(children: Element) -> Element {
    rsx! {
        p { class: "card-description", {children} }
    }
}

#[component]
pub fn CardContent(children: Element) -> Element {
    rsx! {
        div { class: "card-content", {children} }
    }
}

/// Dashboard metric card: a caption over a large value, with an optional hint.
#[component]
pub fn StatCard(
    #[props(into)] title: String,
    #[props(into)] value: String,
    #[props(default, into)] hint: String,
) -> Element {
    rsx! {
        Card { class: "stat-card",
            p { class: "stat-card-title", "{title}" }
            p { class: "stat-card-value", "{value}" }
            if !hint.is_empty() {
                p { class: "stat-card-hint", "{hint}" }
            }
        }
    }
}
