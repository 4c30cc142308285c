use dioxus::prelude::*;
use strum::Display;

#[derive(Display, Clone, Copy, PartialEq)]
pub enum Color {
    #[strum(to_string = "link")]
    Link,
    #[strum(to_string = "primary")]
    Primary,
    #[strum(to_string = "info")]
    Info,
    #[strum(to_string = "warning")]
    Warning,
    #[strum(to_string = "danger")]
    Danger,
    #[strum(to_string = "dark")]
    Dark,
}

impl From<log::Level> for Color {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Color::Danger,
            log::Level::Warn => Color::Warning,
            log::Level::Info => Color::Primary,
            log::Level::Debug => Color::Info,
            log::Level::Trace => Color::Dark,
        }
    }
}

#[component]
pub fn CenteredBlock(children: Element) -> Element {
    rsx! {
        div { class: "block has-text-centered", {children} }
    }
}

#[component]
pub fn Loading() -> Element {
    rsx! {
        div {
            class: "is-size-4 has-text-centered",
            i { class: "fas fa-spinner fa-pulse" }
        }
    }
}

#[component]
pub fn LoadingPage() -> Element {
    rsx! {
        div {
            class: "is-size-2 has-text-centered m-6",
            i { class: "fas fa-spinner fa-pulse" }
        }
    }
}

#[component]
pub fn Message(children: Element, color: Color) -> Element {
    rsx! {
        div {
            class: "message my-1 is-{color}",
            div {
                class: "message-body p-2",
                {children}
            }
        }
    }
}

#[component]
pub fn Error(message: String) -> Element {
    rsx! {
        IconText { icon: "triangle-exclamation", text: message, color: Color::Danger }
    }
}

#[component]
pub fn NoData(text: String) -> Element {
    rsx! {
        div {
            class: "block has-text-centered has-text-grey-light my-6",
            "{text}"
        }
    }
}

#[component]
pub fn Icon(
    name: String,
    is_small: Option<bool>,
    px: Option<u8>,
    onclick: Option<EventHandler<MouseEvent>>,
) -> Element {
    rsx! {
        span {
            class: "icon",
            class: if is_small.unwrap_or_default() { "is-small" },
            class: if let Some(px) = px { "px-{px}" },
            onclick: move |evt| {
                if let Some(event_handler) = onclick {
                    event_handler.call(evt);
                }
            },
            i { class: "fas fa-{name}" }
        }
    }
}

#[component]
pub fn IconText(icon: String, text: String, color: Option<Color>) -> Element {
    rsx! {
        span {
            class: "icon-text",
            class: if let Some(color) = color { "has-text-{color}" },
            Icon { name: icon }
            span { {text} }
        }
    }
}

#[component]
pub fn Dialog(
    children: Element,
    title: Option<Element>,
    close_event: EventHandler<MouseEvent>,
    color: Option<Color>,
) -> Element {
    let color = color.unwrap_or(Color::Primary);
    rsx! {
        div {
            class: "modal is-active",
            div {
                class: "modal-background",
                onclick: close_event
            }
            div {
                class: "modal-content",
                div {
                    class: "message is-{color} mx-2",
                    div {
                        class: "message-body has-text-text-bold has-background-scheme-main",
                        if let Some(title) = title {
                            div {
                                class: "title has-text-{color}",
                                {title}
                            }
                        }
                        {children}
                    }
                }
            }
            button {
                aria_label: "close",
                class: "modal-close",
                onclick: close_event,
            }
        }
    }
}

#[component]
pub fn Title(title: String) -> Element {
    rsx! {
        CenteredBlock {
            h1 { class: "title is-5", "{title}" }
        }
    }
}

/// Text input with a search icon and a submit button.
///
/// Pressing enter or clicking the button raises `onsubmit`.
#[component]
pub fn SearchBox(
    search_term: String,
    is_loading: bool,
    oninput: EventHandler<FormEvent>,
    onsubmit: EventHandler<()>,
) -> Element {
    rsx! {
        form {
            class: "field has-addons",
            onsubmit: move |evt| {
                evt.prevent_default();
                onsubmit.call(());
            },
            div {
                class: "control has-icons-left is-flex-grow-1",
                span {
                    class: "icon is-left",
                    i { class: "fas fa-search" }
                }
                input {
                    class: "input",
                    r#type: "text",
                    placeholder: "Search exercises",
                    value: search_term,
                    oninput: move |evt| oninput.call(evt),
                }
            }
            div {
                class: "control",
                button {
                    class: "button is-link",
                    class: if is_loading { "is-loading" },
                    r#type: "submit",
                    "Search"
                }
            }
        }
    }
}

/// Horizontally scrollable row of tags of which at most one is selected.
#[component]
pub fn ScrollableTags(
    tags: Vec<String>,
    #[props(!optional)]
    selected: Option<usize>,
    onclick: EventHandler<usize>,
) -> Element {
    rsx! {
        div {
            class: "tags is-flex-wrap-nowrap is-overflow-x-auto pb-2",
            for (index, tag) in tags.into_iter().enumerate() {
                span {
                    key: "{tag}",
                    class: "tag is-medium is-hoverable is-capitalized",
                    class: if selected == Some(index) { "is-link" },
                    onclick: move |_| onclick.call(index),
                    "{tag}"
                }
            }
        }
    }
}

#[component]
pub fn Pagination(page: usize, page_count: usize, onclick: EventHandler<usize>) -> Element {
    if page_count <= 1 {
        return rsx! {};
    }
    rsx! {
        nav {
            class: "pagination is-centered is-small",
            role: "navigation",
            aria_label: "pagination",
            button {
                class: "pagination-previous",
                disabled: page <= 1,
                onclick: move |_| onclick.call(page - 1),
                Icon { name: "chevron-left" }
            }
            button {
                class: "pagination-next",
                disabled: page >= page_count,
                onclick: move |_| onclick.call(page + 1),
                Icon { name: "chevron-right" }
            }
            ul {
                class: "pagination-list",
                for number in 1..=page_count {
                    li {
                        key: "{number}",
                        a {
                            class: "pagination-link",
                            class: if number == page { "is-current" },
                            aria_label: "Go to page {number}",
                            onclick: move |_| onclick.call(number),
                            "{number}"
                        }
                    }
                }
            }
        }
    }
}
