use dioxus::prelude::*;

use fitscout_web_app as web_app;
use fitscout_web_app::{SettingsService, log::Service as _};

use crate::{
    Route, WEB_APP_SERVICE,
    component::{
        element::{Color, Dialog, Error, Icon, Loading, Message},
        form::{FieldValue, InputField},
    },
    connect, notify,
};

#[component]
pub fn Navbar() -> Element {
    let mut menu_visible = use_signal(|| false);
    let mut dialog = use_signal(|| NavbarDialog::None);

    rsx! {
        nav {
            class: "navbar is-fixed-top is-primary has-shadow has-text-weight-bold",
            div {
                class: "container",
                div {
                    class: "navbar-brand is-flex-grow-1",
                    Link {
                        class: "navbar-item is-size-5",
                        to: Route::Home {},
                        Icon { name: "dumbbell", px: 2 }
                        "Fitscout"
                    }
                    div { class: "mx-auto" }
                    a {
                        aria_expanded: menu_visible(),
                        aria_label: "menu",
                        class: "navbar-burger ml-0",
                        class: if menu_visible() { "is-active" },
                        role: "button",
                        onclick: move |_| { *menu_visible.write() = !menu_visible() },
                        span { aria_hidden: "true" }
                        span { aria_hidden: "true" }
                        span { aria_hidden: "true" }
                        span { aria_hidden: "true" }
                    }
                }
                div {
                    class: "navbar-menu is-flex-grow-0",
                    class: if menu_visible() { "is-active" },
                    div {
                        class: "navbar-end",
                        a {
                            class: "navbar-item",
                            onclick: move |_| {
                                *dialog.write() = NavbarDialog::Settings;
                                *menu_visible.write() = false;
                            },
                            Icon { name: "gear", px: 5 }
                            "Settings"
                        }
                        a {
                            class: "navbar-item",
                            onclick: move |_| {
                                *dialog.write() = NavbarDialog::Log;
                                *menu_visible.write() = false;
                            },
                            Icon { name: "list", px: 5 }
                            "Log"
                        }
                    }
                }
            }
        }

        match *dialog.read() {
            NavbarDialog::None => rsx! {},
            NavbarDialog::Settings => rsx! {
                Settings { close_event: move |()| *dialog.write() = NavbarDialog::None }
            },
            NavbarDialog::Log => rsx! {
                Dialog {
                    title: rsx! { "Log" },
                    close_event: move |_| *dialog.write() = NavbarDialog::None,
                    Log {}
                }
            },
        }

        Outlet::<Route> {}
    }
}

#[derive(Clone, Copy, PartialEq)]
enum NavbarDialog {
    None,
    Settings,
    Log,
}

#[derive(Clone, Default, PartialEq)]
struct SettingsForm {
    base_url: FieldValue,
    api_host: FieldValue,
    api_key: FieldValue,
}

impl From<&web_app::Settings> for SettingsForm {
    fn from(settings: &web_app::Settings) -> Self {
        Self {
            base_url: FieldValue::new(&settings.base_url),
            api_host: FieldValue::new(&settings.api_host),
            api_key: FieldValue::new(&settings.api_key),
        }
    }
}

impl SettingsForm {
    fn changed(&self) -> bool {
        self.base_url.changed() || self.api_host.changed() || self.api_key.changed()
    }

    fn settings(&self) -> web_app::Settings {
        web_app::Settings {
            base_url: self.base_url.input.clone(),
            api_host: self.api_host.input.clone(),
            api_key: self.api_key.input.clone(),
        }
        .normalized()
    }
}

#[component]
fn Settings(close_event: EventHandler<()>) -> Element {
    let settings = use_resource(|| async { WEB_APP_SERVICE.read().get_settings().await });
    let mut form = use_signal(SettingsForm::default);
    let mut is_saving = use_signal(|| false);

    use_effect(move || {
        if let Some(Ok(settings)) = &*settings.read() {
            form.set(SettingsForm::from(settings));
        }
    });

    let save = move |_: MouseEvent| async move {
        is_saving.set(true);
        let settings = form.read().settings();
        match WEB_APP_SERVICE.read().set_settings(settings.clone()).await {
            Ok(()) => {
                connect(&settings);
                close_event.call(());
            }
            Err(err) => notify(format!("Failed to save settings: {err}")),
        }
        is_saving.set(false);
    };

    rsx! {
        Dialog {
            color: Color::Primary,
            title: rsx! { "Settings" },
            close_event: move |_| close_event.call(()),
            match &*settings.read() {
                Some(Ok(_)) => rsx! {
                    InputField {
                        label: "Base URL",
                        value: form.read().base_url.input.clone(),
                        placeholder: web_app::DEFAULT_BASE_URL,
                        has_changed: form.read().base_url.changed(),
                        oninput: move |event: FormEvent| form.write().base_url.input = event.value(),
                    }
                    InputField {
                        label: "API host",
                        value: form.read().api_host.input.clone(),
                        placeholder: web_app::DEFAULT_API_HOST,
                        has_changed: form.read().api_host.changed(),
                        oninput: move |event: FormEvent| form.write().api_host.input = event.value(),
                    }
                    InputField {
                        label: "API key",
                        help: "Sent as X-RapidAPI-Key with every request",
                        r#type: "password",
                        value: form.read().api_key.input.clone(),
                        has_changed: form.read().api_key.changed(),
                        oninput: move |event: FormEvent| form.write().api_key.input = event.value(),
                    }
                    if !form.read().settings().has_api_key() {
                        Message {
                            color: Color::Warning,
                            "Without an API key, requests to the exercise database will be rejected."
                        }
                    }
                    div {
                        class: "field is-grouped is-grouped-centered mt-5",
                        div {
                            class: "control",
                            button {
                                class: "button is-light is-soft",
                                onclick: move |_| close_event.call(()),
                                "Cancel"
                            }
                        }
                        div {
                            class: "control",
                            button {
                                class: "button is-primary",
                                class: if is_saving() { "is-loading" },
                                disabled: !form.read().changed(),
                                onclick: save,
                                "Save"
                            }
                        }
                    }
                },
                Some(Err(err)) => rsx! {
                    Error { message: "Failed to get settings: {err}" }
                },
                None => rsx! { Loading {} },
            }
        }
    }
}

#[component]
fn Log() -> Element {
    match WEB_APP_SERVICE.read().get_log_entries() {
        Ok(entries) => rsx! {
            if entries.is_empty() {
                p { class: "has-text-grey-light", "No log entries" }
            }
            for entry in entries {
                Message {
                    color: Color::from(entry.level),
                    p { class: "is-size-7", {entry.time} }
                    p { "{entry.message}" }
                }
            }
        },
        Err(err) => rsx! {
            Error { message: err.to_string() }
        },
    }
}
