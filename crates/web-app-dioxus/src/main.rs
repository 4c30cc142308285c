#![warn(clippy::pedantic)]
#![allow(clippy::too_many_lines)]

use std::sync::Arc;

use dioxus::prelude::*;
use log::{LevelFilter, error};

use fitscout_domain as domain;
use fitscout_storage as storage;
use fitscout_web_app as web_app;
use fitscout_web_app::SettingsService;

use component::{
    element::{Color, Dialog, LoadingPage},
    navbar::Navbar,
};
use page::{home::Home, not_found::NotFound};

mod component;
mod page;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Navbar)]
    #[route("/")]
    Home {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

type DomainService = domain::Service<storage::rest::REST<storage::rest::GlooNetSendRequest>>;

static DOMAIN_SERVICE: GlobalSignal<DomainService> =
    Signal::global(|| domain::Service::new(storage::rest::REST::default()));
static WEB_APP_SERVICE: GlobalSignal<web_app::Service<storage::local_storage::LocalStorage>> =
    Signal::global(|| web_app::Service::new(storage::local_storage::LocalStorage));
static NOTIFICATIONS: GlobalSignal<Vec<String>> = Signal::global(Vec::new);

fn main() {
    init_logging();
    dioxus::launch(App);
}

fn init_logging() {
    let _ = web_app::log::init(
        Arc::new(storage::local_storage::LocalStorage),
        LevelFilter::Debug,
    );
}

/// Replace the domain service by one that talks to the endpoint described by `settings`.
fn connect(settings: &web_app::Settings) {
    *DOMAIN_SERVICE.write() = domain::Service::new(storage::rest::REST::new(
        storage::rest::Endpoint::from(settings),
    ));
}

#[component]
fn App() -> Element {
    std::panic::set_hook(Box::new(|info| {
        error!("{info}");
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("main"))
            .map(|el| {
                el.set_inner_html(&format!("
                    <section class=\"section\">
                        <div class=\"container\">
                            <div class=\"message is-danger\">
                                <div class=\"message-header\">
                                    <p>Something went wrong</p>
                                </div>
                                <div class=\"message-body\">
                                    <div class=\"block\">
                                        Fitscout ran into an unexpected error and cannot continue.
                                    </div>
                                    <div class=\"block\">
                                        <pre>{info}</pre>
                                    </div>
                                    <div class=\"block field is-grouped is-grouped-centered\">
                                        <button class=\"button\" onclick=\"location.reload()\">
                                            <span class=\"icon\">
                                                <i class=\"fa fa-arrow-rotate-right\"></i>
                                            </span>
                                            <span>Reload page</span>
                                        </button>
                                    </div>
                                </div>
                            </div>
                        </div>
                    </section>
                "));
                Some(())
            });
    }));

    let mut ready = use_signal(|| false);
    use_future(move || async move {
        let settings = WEB_APP_SERVICE.peek().get_settings().await;
        match settings {
            Ok(settings) => connect(&settings),
            Err(err) => notify(format!("Failed to load settings: {err}")),
        }
        ready.set(true);
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div {
            class: "container is-max-desktop py-4",
            if ready() {
                Router::<Route> {}
            } else {
                LoadingPage {}
            }
            Notification {}
        }
    }
}

#[component]
fn Notification() -> Element {
    let notification = NOTIFICATIONS.read().last().cloned();

    rsx! {
        if let Some(message) = notification {
            Dialog {
                color: Color::Danger,
                title: rsx! { "Error" },
                close_event: move |_| { let _ = NOTIFICATIONS.write().pop(); },
                div {
                    class: "block",
                    "{message}"
                }
                div {
                    class: "field is-grouped is-grouped-centered",
                    div {
                        class: "control",
                        button {
                            class: "button is-danger",
                            onclick: move |_| { let _ = NOTIFICATIONS.write().pop(); },
                            "Close"
                        }
                    }
                }
            }
        }
    }
}

fn notify(message: String) {
    NOTIFICATIONS.write().push(message);
}

/// Describe a failed request in a way that is meaningful to the user.
fn describe_error(action: &str, err: &domain::ReadError) -> String {
    match err {
        domain::ReadError::Storage(domain::StorageError::NoConnection) => {
            format!("Failed to {action}: no connection to the exercise database")
        }
        domain::ReadError::Storage(domain::StorageError::InvalidResponse(_)) => {
            format!("Failed to {action}: the exercise database returned an unexpected response ({err})")
        }
        _ => format!("Failed to {action}: {err}"),
    }
}
