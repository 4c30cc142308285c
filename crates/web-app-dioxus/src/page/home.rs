use dioxus::prelude::*;
use log::warn;

use fitscout_domain as domain;
use fitscout_domain::ExerciseService;
use fitscout_web_app::viewport;

use crate::{
    DOMAIN_SERVICE,
    component::element::{
        Color, Dialog, Loading, NoData, Pagination, ScrollableTags, SearchBox, Title,
    },
    describe_error, notify,
};

const RESULTS_ID: &str = "results";

#[component]
pub fn Home() -> Element {
    let mut state = use_signal(domain::SearchState::default);
    let mut selected_exercise = use_signal(|| None::<domain::Exercise>);

    // Reruns when the domain service is replaced. A loaded catalog is kept.
    let _catalog = use_resource(move || async move {
        let service = DOMAIN_SERVICE.read().clone();
        if state.peek().catalog().is_some() {
            return;
        }
        let result = service.get_body_part_catalog().await;
        if let Err(err) = state.write().load_catalog(result) {
            notify(describe_error("load body parts", &err));
        }
    });

    let search = move |()| {
        let pending = state.write().begin_search();
        if let Some(pending) = pending {
            execute(state, pending);
        }
    };

    let body_parts = state.read().body_parts();
    let body_part_tags = body_parts.iter().map(ToString::to_string).collect::<Vec<_>>();
    let selected_body_part = body_parts
        .iter()
        .position(|body_part| state.read().selection().is_selected(body_part));

    rsx! {
        Title { title: "Awesome Exercises You Should Know" }
        div {
            class: "block mx-2",
            SearchBox {
                search_term: state.read().query().to_string(),
                is_loading: state.read().results() == domain::SearchResults::Searching,
                oninput: move |event: FormEvent| state.write().set_query(&event.value()),
                onsubmit: search,
            }
        }
        div {
            class: "block mx-2",
            ScrollableTags {
                tags: body_part_tags,
                selected: selected_body_part,
                onclick: move |index: usize| {
                    let body_part = state.read().body_parts().as_slice().get(index).cloned();
                    if let Some(body_part) = body_part {
                        let pending = state.write().select_body_part(body_part);
                        execute(state, pending);
                    }
                },
            }
        }
        Results {
            state,
            onselect: move |exercise| selected_exercise.set(Some(exercise)),
        }
        if let Some(exercise) = selected_exercise() {
            ExerciseDetails {
                exercise,
                close_event: move |()| selected_exercise.set(None),
            }
        }
    }
}

/// Fetch the exercises for a pending request and apply the response.
fn execute(mut state: Signal<domain::SearchState>, pending: domain::PendingRequest) {
    spawn(async move {
        let service = DOMAIN_SERVICE.peek().clone();
        let (result, action) = match &pending.request {
            domain::Request::Search(query) => {
                (service.search_exercises(query).await, "search exercises")
            }
            domain::Request::Browse(selection) => {
                (service.get_exercises(selection).await, "load exercises")
            }
        };
        let is_search = matches!(pending.request, domain::Request::Search(_));
        let outcome = state.write().complete(pending, result);
        match outcome {
            Ok(domain::SearchOutcome::Applied { .. }) if is_search => {
                if let Err(err) = viewport::scroll_into_view(RESULTS_ID) {
                    warn!("failed to scroll to results: {err}");
                }
            }
            Ok(_) => {}
            Err(err) => notify(describe_error(action, &err)),
        }
    });
}

#[component]
fn Results(
    mut state: Signal<domain::SearchState>,
    onselect: EventHandler<domain::Exercise>,
) -> Element {
    let heading = match state.read().applied() {
        Some(domain::Request::Search(query)) => format!("Results for \"{}\"", query.as_str()),
        Some(domain::Request::Browse(selection)) => format!("Exercises for {selection}"),
        None => "Results".to_string(),
    };
    let pagination = state.read().pagination();

    rsx! {
        section {
            id: RESULTS_ID,
            class: "section px-2 py-4",
            h2 { class: "title is-5 has-text-centered is-capitalized", "{heading}" }
            match state.read().results() {
                domain::SearchResults::NotSearched => rsx! {
                    NoData { text: "Search for an exercise or pick a body part to get started" }
                },
                domain::SearchResults::Searching => rsx! { Loading {} },
                domain::SearchResults::Found([]) => rsx! {
                    NoData { text: "No exercises found" }
                },
                domain::SearchResults::Found(exercises) => {
                    let page_count = pagination.page_count(exercises.len());
                    rsx! {
                        div {
                            class: "columns is-multiline",
                            for exercise in state.read().page_results().iter().cloned() {
                                div {
                                    key: "{exercise.id}",
                                    class: "column is-one-third",
                                    ExerciseCard { exercise, onselect }
                                }
                            }
                        }
                        Pagination {
                            page: pagination.page(),
                            page_count,
                            onclick: move |page| {
                                state.write().set_page(page);
                                if let Err(err) = viewport::scroll_into_view(RESULTS_ID) {
                                    warn!("failed to scroll to results: {err}");
                                }
                            },
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ExerciseCard(exercise: domain::Exercise, onselect: EventHandler<domain::Exercise>) -> Element {
    let selected = exercise.clone();
    rsx! {
        div {
            class: "card is-clickable",
            onclick: move |_| onselect.call(selected.clone()),
            if let Some(gif_url) = &exercise.gif_url {
                div {
                    class: "card-image",
                    figure {
                        class: "image",
                        img { src: "{gif_url}", alt: "{exercise.name}", loading: "lazy" }
                    }
                }
            }
            div {
                class: "card-content",
                div {
                    class: "tags",
                    span { class: "tag is-link is-light is-capitalized", "{exercise.body_part}" }
                    span { class: "tag is-warning is-light is-capitalized", "{exercise.target}" }
                }
                p { class: "title is-6 is-capitalized", "{exercise.name}" }
                p { class: "subtitle is-7 is-capitalized", "Equipment: {exercise.equipment}" }
            }
        }
    }
}

#[component]
fn ExerciseDetails(exercise: domain::Exercise, close_event: EventHandler<()>) -> Element {
    rsx! {
        Dialog {
            color: Color::Link,
            title: rsx! { span { class: "is-capitalized", "{exercise.name}" } },
            close_event: move |_| close_event.call(()),
            if let Some(gif_url) = &exercise.gif_url {
                figure {
                    class: "image block",
                    img { src: "{gif_url}", alt: "{exercise.name}" }
                }
            }
            table {
                class: "table is-fullwidth is-narrow block",
                tbody {
                    tr { th { "Body part" } td { class: "is-capitalized", "{exercise.body_part}" } }
                    tr { th { "Target" } td { class: "is-capitalized", "{exercise.target}" } }
                    tr { th { "Equipment" } td { class: "is-capitalized", "{exercise.equipment}" } }
                    if !exercise.secondary_muscles.is_empty() {
                        tr {
                            th { "Secondary muscles" }
                            td { class: "is-capitalized", {exercise.secondary_muscles.join(", ")} }
                        }
                    }
                }
            }
            if !exercise.instructions.is_empty() {
                div {
                    class: "content block",
                    ol {
                        for instruction in &exercise.instructions {
                            li { "{instruction}" }
                        }
                    }
                }
            }
        }
    }
}
