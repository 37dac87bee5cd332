use dioxus::prelude::*;

/// A themed multi-line text area with an optional label.
#[component]
pub fn Textarea(
    /// Current value.
    #[props(default)]
    value: String,
    /// Called on every keystroke with the new value.
    #[props(default)]
    on_input: Option<EventHandler<Event<FormData>>>,
    /// Placeholder shown when empty.
    #[props(default)]
    placeholder: String,
    /// Optional label displayed above the textarea.
    #[props(default)]
    label: String,
    /// Visible row count.
    #[props(default = 4)]
    rows: i64,
    /// Whether the textarea is disabled.
    #[props(default = false)]
    disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "textarea-wrapper",
            if !label.is_empty() {
                label { class: "textarea-label", "{label}" }
            }
            textarea {
                class: "textarea",
                value: value,
                placeholder: placeholder,
                rows: rows,
                disabled: disabled,
                oninput: move |evt| {
                    if let Some(handler) = &on_input {
                        handler.call(evt);
                    }
                },
                ..attributes,
            }
        }
    }
}
