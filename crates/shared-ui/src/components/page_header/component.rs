use dioxus::prelude::*;

/// Page header: title, optional subtitle, and right-aligned actions.
#[component]
pub fn PageHeader(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "page-header",
            {children}
        }
    }
}

/// Page title rendered as an h1, with an optional muted subtitle below.
#[component]
pub fn PageTitle(#[props(default, into)] subtitle: String, children: Element) -> Element {
    rsx! {
        div { class: "page-title-group",
            h1 { class: "page-title", {children} }
            if !subtitle.is_empty() {
                p { class: "page-subtitle", "{subtitle}" }
            }
        }
    }
}

#[component]
pub fn PageActions(children: Element) -> Element {
    rsx! {
        div { class: "page-actions", {children} }
    }
}
