use dioxus::prelude::*;

/// Horizontal filter row placed above a table. Holds search inputs and
/// select filters side by side, wrapping on narrow screens.
#[component]
pub fn SearchBar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "search-bar", {children} }
    }
}
