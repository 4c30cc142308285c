use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Smoothly scroll the element with the given ID to the top of the viewport.
#[allow(clippy::missing_errors_doc)]
pub fn scroll_into_view(element_id: &str) -> Result<(), String> {
    let Some(window) = web_sys::window() else {
        return Err("failed to get window".to_string());
    };
    let Some(document) = window.document() else {
        return Err("failed to get document".to_string());
    };
    let Some(element) = document.get_element_by_id(element_id) else {
        return Err(format!("failed to find element \"{element_id}\""));
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}
