use dioxus::prelude::*;

/// A themed text input with an optional label.
#[component]
pub fn Input(
    /// Current value of the input.
    #[props(default)]
    value: String,
    /// Called on every keystroke with the new value.
    #[props(default)]
    on_input: Option<EventHandler<Event<FormData>>>,
    /// Placeholder shown when the input is empty.
    #[props(default)]
    placeholder: String,
    /// Optional label displayed above the input.
    #[props(default)]
    label: String,
    /// HTML input type, defaults to "text".
    #[props(default = "text".to_string())]
    input_type: String,
    /// Whether the input is disabled.
    #[props(default = false)]
    disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            if !label.is_empty() {
                label { class: "input-label", "{label}" }
            }
            input {
                class: "input",
                r#type: input_type,
                value: value,
                placeholder: placeholder,
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
