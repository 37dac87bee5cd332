use dioxus::prelude::*;

/// Top application bar with a brand slot on the left and actions on the right.
#[component]
pub fn Navbar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "navbar", ..attributes,
            div { class: "navbar-inner", {children} }
        }
    }
}

/// Brand / title area of the navbar.
#[component]
pub fn NavbarBrand(children: Element) -> Element {
    rsx! {
        div { class: "navbar-brand", {children} }
    }
}

/// Right-aligned group of navbar actions.
#[component]
pub fn NavbarNav(children: Element) -> Element {
    rsx! {
        nav { class: "navbar-nav", {children} }
    }
}

/// A single navbar item.
#[component]
pub fn NavbarItem(children: Element) -> Element {
    rsx! {
        div { class: "navbar-item", {children} }
    }
}
