//! Upload page controller
//!
//! Finds every configured upload widget, registers it with the shared
//! [`Registry`] and attaches the picker and drag-and-drop listeners. The
//! listeners live as long as the page, so their closures are leaked.

use crate::dom::{files_from_list, DomWidget};
use pdftools_core::{
    validate_submission, DragPhase, FormSnapshot, Registry, SplitMode, UploadConfig,
    ValidationError,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, DragEvent, Element, Event, HtmlInputElement};

type SharedRegistry = Rc<RefCell<Registry<DomWidget>>>;

/// Drag events whose default action must be suppressed on a drop area
const DRAG_EVENTS: [&str; 4] = ["dragenter", "dragover", "dragleave", "drop"];

/// Mounted upload page
#[wasm_bindgen]
pub struct UploadApp {
    registry: SharedRegistry,
    document: Document,
    config: UploadConfig,
}

#[wasm_bindgen]
impl UploadApp {
    /// Mount the default tool layout
    pub fn mount() -> Result<UploadApp, JsValue> {
        Self::mount_config(UploadConfig::default())
    }

    /// Mount a layout described by a JSON `UploadConfig`
    #[wasm_bindgen(js_name = mountWithConfig)]
    pub fn mount_with_config(json: &str) -> Result<UploadApp, JsValue> {
        let config = UploadConfig::from_json(json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Self::mount_config(config)
    }

    /// Pre-submit check for a tool form
    ///
    /// Use as `onsubmit="return app.validateForm('split')"`. Shows an alert
    /// and returns `false` when the form is incomplete.
    #[wasm_bindgen(js_name = validateForm)]
    pub fn validate_form(&self, key: &str) -> bool {
        match self.check_form(key) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(key, reason = %e, "form submission blocked");
                if let Some(window) = web_sys::window() {
                    if let Err(alert_error) = window.alert_with_message(&e.to_string()) {
                        tracing::warn!(key, error = ?alert_error, "validation alert not shown");
                    }
                }
                false
            }
        }
    }

    /// Current selection for `key` as an array of `{ name, size }`, or `null`
    #[wasm_bindgen(js_name = selectedFiles)]
    pub fn selected_files(&self, key: &str) -> Result<JsValue, JsValue> {
        let registry = self.registry.borrow();
        match registry.selection(key) {
            Some(selection) => serde_wasm_bindgen::to_value(selection.files())
                .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e))),
            None => Ok(JsValue::NULL),
        }
    }

    /// Number of files in the picker control of `key` (what the form submits)
    #[wasm_bindgen(js_name = pickerFileCount)]
    pub fn picker_file_count(&self, key: &str) -> u32 {
        self.registry
            .borrow()
            .surface(key)
            .map(DomWidget::picker_file_count)
            .unwrap_or(0)
    }

    /// Keys of the widgets that were found and registered
    #[wasm_bindgen(js_name = widgetKeys)]
    pub fn widget_keys(&self) -> js_sys::Array {
        self.registry
            .borrow()
            .keys()
            .map(JsValue::from_str)
            .collect()
    }
}

impl UploadApp {
    pub fn mount_config(config: UploadConfig) -> Result<UploadApp, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("No document object available"))?;

        let registry: SharedRegistry = Rc::new(RefCell::new(Registry::new()));

        for spec in &config.widgets {
            let Some(widget) =
                DomWidget::find(&document, &config.ids, spec, &config.drag_active_class)
            else {
                tracing::warn!(key = %spec.key, "upload widget has no picker control, skipped");
                continue;
            };

            let picker = widget.picker().clone();
            let drop_area = widget.drop_area().cloned();

            registry
                .borrow_mut()
                .register(&spec.key, spec.accepts_multiple, widget)
                .map_err(|e| JsValue::from_str(&e.to_string()))?;

            attach_picker(&registry, &spec.key, &picker)?;
            if let Some(area) = drop_area {
                attach_drop_area(&registry, &spec.key, &area)?;
            }
        }

        tracing::info!(widgets = registry.borrow().len(), "upload page mounted");

        Ok(UploadApp {
            registry,
            document,
            config,
        })
    }

    /// Read the form fields for `key` and run the validation gate
    pub fn check_form(&self, key: &str) -> Result<(), ValidationError> {
        let fields = &self.config.fields;
        let picker_id = self.config.ids.picker_id(key);

        let file_count = input_by_id(&self.document, &picker_id)
            .and_then(|input| input.files())
            .map(|list| list.length())
            .unwrap_or(0);

        let checked = format!("input[name=\"{}\"]:checked", fields.split_mode_name);
        let split_mode = self
            .document
            .query_selector(&checked)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|radio| SplitMode::from_value(&radio.value()))
            .unwrap_or_default();

        let form = FormSnapshot {
            file_count,
            split_mode,
            page_range: input_value(&self.document, &fields.page_range),
            reorder_order: input_value(&self.document, &fields.reorder_order),
            password: input_value(&self.document, &fields.password),
        };
        validate_submission(key, &form)
    }
}

fn input_by_id(document: &Document, id: &str) -> Option<HtmlInputElement> {
    document
        .get_element_by_id(id)?
        .dyn_into::<HtmlInputElement>()
        .ok()
}

/// Value of the input with `id`, empty when it does not exist
fn input_value(document: &Document, id: &str) -> String {
    input_by_id(document, id)
        .map(|input| input.value())
        .unwrap_or_default()
}

fn attach_picker(
    registry: &SharedRegistry,
    key: &str,
    picker: &HtmlInputElement,
) -> Result<(), JsValue> {
    let registry = Rc::clone(registry);
    let key = key.to_string();
    let input = picker.clone();

    let on_change = Closure::wrap(Box::new(move |_event: Event| {
        let files = input
            .files()
            .map(|list| files_from_list(&list))
            .unwrap_or_default();
        if let Err(e) = registry.borrow_mut().picker_changed(&key, &files) {
            tracing::warn!(key = %key, error = %e, "picker change not applied");
        }
    }) as Box<dyn FnMut(_)>);

    picker.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
    on_change.forget();
    Ok(())
}

fn attach_drop_area(registry: &SharedRegistry, key: &str, area: &Element) -> Result<(), JsValue> {
    let registry = Rc::clone(registry);
    let key = key.to_string();

    let on_drag = Closure::wrap(Box::new(move |event: Event| {
        // An unhandled drop navigates away from the page
        event.prevent_default();
        event.stop_propagation();

        let result = match event.type_().as_str() {
            "dragenter" => registry.borrow_mut().drag(&key, DragPhase::Enter),
            "dragover" => registry.borrow_mut().drag(&key, DragPhase::Over),
            "dragleave" => registry.borrow_mut().drag(&key, DragPhase::Leave),
            "drop" => {
                let files = event
                    .dyn_ref::<DragEvent>()
                    .and_then(DragEvent::data_transfer)
                    .and_then(|transfer| transfer.files())
                    .map(|list| files_from_list(&list))
                    .unwrap_or_default();
                registry.borrow_mut().dropped(&key, &files)
            }
            _ => Ok(()),
        };

        if let Err(e) = result {
            tracing::warn!(
                key = %key,
                event = %event.type_(),
                error = %e,
                "drag event not applied"
            );
        }
    }) as Box<dyn FnMut(_)>);

    for name in DRAG_EVENTS {
        area.add_event_listener_with_callback(name, on_drag.as_ref().unchecked_ref())?;
    }
    on_drag.forget();
    Ok(())
}
