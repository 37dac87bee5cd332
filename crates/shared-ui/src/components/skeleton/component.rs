use dioxus::prelude::*;

/// Pulsing placeholder block shown while data loads.
#[component]
pub fn Skeleton(
    /// CSS width, e.g. "100%" or "8rem".
    #[props(default = "100%".to_string())]
    width: String,
    /// CSS height, e.g. "1rem".
    #[props(default = "1rem".to_string())]
    height: String,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "skeleton",
            style: "width: {width}; height: {height};",
        }
    }
}
