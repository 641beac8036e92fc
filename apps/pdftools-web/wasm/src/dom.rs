//! `web-sys` side of an upload widget
//!
//! A widget is three elements found by id: the `<input type="file">`
//! picker, an optional drop area, and a display region for the summary.

use pdftools_core::selection::{MULTIPLE_MARKER, SINGLE_PREFIX};
use pdftools_core::{DomIds, SelectedFile, Summary, UploadError, WidgetSpec, WidgetSurface};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DataTransfer, Document, Element, File, FileList, HtmlInputElement};

/// A browser `File` as seen by the registry
#[derive(Debug, Clone)]
pub struct PickedFile(pub File);

impl SelectedFile for PickedFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn size(&self) -> u64 {
        // Blob sizes are whole, non-negative numbers; the cast saturates
        self.0.size() as u64
    }
}

/// Collect a `FileList` into an ordered vector
pub fn files_from_list(list: &FileList) -> Vec<PickedFile> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(PickedFile)
        .collect()
}

/// Convert a DOM exception into a registry error
pub(crate) fn surface_error(err: JsValue) -> UploadError {
    UploadError::Surface(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

/// The DOM elements of one upload widget
pub struct DomWidget {
    document: Document,
    picker: HtmlInputElement,
    drop_area: Option<Element>,
    display: Option<Element>,
    drag_class: String,
}

impl DomWidget {
    /// Look up the widget's elements by id
    ///
    /// Returns `None` when the picker control is missing; the drop area and
    /// display region are optional.
    pub fn find(
        document: &Document,
        ids: &DomIds,
        spec: &WidgetSpec,
        drag_class: &str,
    ) -> Option<Self> {
        let picker = document
            .get_element_by_id(&ids.picker_id(&spec.key))?
            .dyn_into::<HtmlInputElement>()
            .ok()?;

        Some(Self {
            document: document.clone(),
            picker,
            drop_area: document.get_element_by_id(&ids.drop_area_id(&spec.key)),
            display: document
                .get_element_by_id(&ids.display_id(&spec.key, spec.accepts_multiple)),
            drag_class: drag_class.to_string(),
        })
    }

    pub fn picker(&self) -> &HtmlInputElement {
        &self.picker
    }

    pub fn drop_area(&self) -> Option<&Element> {
        self.drop_area.as_ref()
    }

    /// Number of files the picker control currently holds
    pub fn picker_file_count(&self) -> u32 {
        self.picker.files().map(|list| list.length()).unwrap_or(0)
    }

    fn row(&self) -> Result<Element, UploadError> {
        self.document.create_element("div").map_err(surface_error)
    }
}

impl WidgetSurface for DomWidget {
    type File = PickedFile;

    fn assign_picker_files(&mut self, files: &[PickedFile]) -> Result<(), UploadError> {
        // A FileList can only be built through a DataTransfer
        let transfer = DataTransfer::new().map_err(surface_error)?;
        let items = transfer.items();
        for file in files {
            items.add_with_file(&file.0).map_err(surface_error)?;
        }
        self.picker.set_files(transfer.files().as_ref());
        Ok(())
    }

    fn render_summary(&mut self, summary: &Summary) -> Result<(), UploadError> {
        let Some(display) = &self.display else {
            return Ok(());
        };
        display.set_inner_html("");

        match summary {
            Summary::Single(line) => {
                let row = self.row()?;
                let name = self
                    .document
                    .create_element("strong")
                    .map_err(surface_error)?;
                name.set_text_content(Some(&line.name));
                row.append_with_str_1(SINGLE_PREFIX).map_err(surface_error)?;
                row.append_with_node_1(&name).map_err(surface_error)?;
                row.append_with_str_1(&line.size_suffix())
                    .map_err(surface_error)?;
                display.append_child(&row).map_err(surface_error)?;
            }
            Summary::Multiple(lines) => {
                for line in lines {
                    let row = self.row()?;
                    row.set_text_content(Some(&format!(
                        "{}{}{}",
                        MULTIPLE_MARKER,
                        line.name,
                        line.size_suffix()
                    )));
                    display.append_child(&row).map_err(surface_error)?;
                }
            }
        }
        Ok(())
    }

    fn set_drag_active(&mut self, active: bool) -> Result<(), UploadError> {
        let Some(area) = &self.drop_area else {
            return Ok(());
        };
        let classes = area.class_list();
        if active {
            classes.add_1(&self.drag_class).map_err(surface_error)
        } else {
            classes.remove_1(&self.drag_class).map_err(surface_error)
        }
    }

    fn has_drop_target(&self) -> bool {
        self.drop_area.is_some()
    }
}
