use dioxus::prelude::*;

#[component]
pub fn InputField(
    label: String,
    help: Option<String>,
    r#type: Option<String>,
    value: String,
    placeholder: Option<String>,
    has_changed: bool,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div {
            class: "field",
            label { class: "label", "{label}" }
            div {
                class: "control",
                input {
                    class: "input",
                    class: if has_changed { "is-info" },
                    r#type: if let Some(r#type) = r#type { r#type } else { "text" },
                    placeholder: if let Some(placeholder) = placeholder { placeholder },
                    value: "{value}",
                    oninput: move |evt| oninput.call(evt),
                }
            }
            if let Some(ref help) = help {
                p { class: "help", "{help}" }
            }
        }
    }
}

/// User input together with the value it was initialized with.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldValue {
    pub input: String,
    pub orig: String,
}

impl FieldValue {
    pub fn new(value: &str) -> Self {
        Self {
            input: value.to_string(),
            orig: value.to_string(),
        }
    }

    pub fn changed(&self) -> bool {
        self.input.trim() != self.orig.trim()
    }
}
