//! Tab navigation and the split-mode toggle

use pdftools_core::{FormFieldIds, SplitMode};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement};

pub const NAV_ITEM_SELECTOR: &str = ".nav-links li";
pub const TAB_PANEL_SELECTOR: &str = ".tab-content";
pub const ACTIVE_CLASS: &str = "active";

/// CSS `display` of the page-range group for a split mode
pub fn range_group_display(mode: SplitMode) -> &'static str {
    match mode {
        SplitMode::Range => "flex",
        SplitMode::All => "none",
    }
}

/// All elements matching `selector`, in document order
fn elements(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Make `clicked` and the panel named by its `data-tab` the only active ones
pub fn activate_tab(
    document: &Document,
    nav_items: &[Element],
    panels: &[Element],
    clicked: &Element,
) -> Result<(), JsValue> {
    for element in nav_items.iter().chain(panels) {
        element.class_list().remove_1(ACTIVE_CLASS)?;
    }
    clicked.class_list().add_1(ACTIVE_CLASS)?;

    if let Some(panel) = clicked
        .get_attribute("data-tab")
        .and_then(|id| document.get_element_by_id(&id))
    {
        panel.class_list().add_1(ACTIVE_CLASS)?;
    }
    Ok(())
}

/// Attach click handlers to every navigation item
pub fn setup_tabs(document: &Document) -> Result<(), JsValue> {
    let nav_items = elements(document, NAV_ITEM_SELECTOR)?;
    let panels = elements(document, TAB_PANEL_SELECTOR)?;

    for item in &nav_items {
        let document = document.clone();
        let nav_items = nav_items.clone();
        let panels = panels.clone();
        let clicked = item.clone();

        let on_click = Closure::wrap(Box::new(move |_event: Event| {
            if let Err(e) = activate_tab(&document, &nav_items, &panels, &clicked) {
                tracing::warn!(error = ?e, "tab switch failed");
            }
        }) as Box<dyn FnMut(_)>);

        item.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    tracing::debug!(tabs = nav_items.len(), "tab navigation ready");
    Ok(())
}

/// Show the page-range group only while the split mode is `range`
pub fn setup_split_mode_toggle(document: &Document, fields: &FormFieldIds) -> Result<(), JsValue> {
    let Some(group) = document
        .get_element_by_id(&fields.split_range_group)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(());
    };

    let radios = elements(document, &format!("input[name=\"{}\"]", fields.split_mode_name))?;
    for radio in &radios {
        let group = group.clone();
        let on_change = Closure::wrap(Box::new(move |event: Event| {
            let Some(radio) = event
                .target()
                .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            let display = range_group_display(SplitMode::from_value(&radio.value()));
            if let Err(e) = group.style().set_property("display", display) {
                tracing::warn!(error = ?e, "split range toggle failed");
            }
        }) as Box<dyn FnMut(_)>);

        radio.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
        on_change.forget();
    }
    Ok(())
}
