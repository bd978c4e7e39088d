use dioxus::prelude::*;

/// Filter row above a table: search inputs, selects and buttons laid out
/// left to right.
#[component]
pub fn SearchBar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "search-bar", role: "search",
            {children}
        }
    }
}
