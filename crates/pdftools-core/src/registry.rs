//! Upload widget registry
//!
//! Keeps the current selection of every upload widget on the page and
//! reconciles the two ways files arrive: the native file picker and
//! drag-and-drop. The picker control stays the source of truth for form
//! submission, so dropped files are written back into it before they are
//! committed here.
//!
//! The registry never touches the DOM itself. Each widget is driven through
//! a [`WidgetSurface`], which the wasm app implements with `web-sys` and the
//! tests implement with a recording double.

use crate::error::UploadError;
use crate::selection::{SelectedFile, Selection, Summary};
use std::collections::HashMap;

/// DOM side of one upload widget
pub trait WidgetSurface {
    /// File handle type delivered by picker and drop events
    type File: SelectedFile;

    /// Replace the picker control's files with `files`, in order
    fn assign_picker_files(&mut self, files: &[Self::File]) -> Result<(), UploadError>;

    /// Replace the display region's contents with `summary`
    fn render_summary(&mut self, summary: &Summary) -> Result<(), UploadError>;

    /// Toggle the drop target's "drag in progress" indicator
    fn set_drag_active(&mut self, active: bool) -> Result<(), UploadError>;

    /// Whether this widget has a drop target at all
    fn has_drop_target(&self) -> bool;
}

/// Non-drop drag events seen on a drop target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Enter,
    Over,
    Leave,
}

struct Widget<S> {
    accepts_multiple: bool,
    surface: S,
}

/// Selection state for all registered widgets, keyed by widget key
pub struct Registry<S: WidgetSurface> {
    widgets: HashMap<String, Widget<S>>,
    /// Registration order, for stable iteration
    order: Vec<String>,
    selections: HashMap<String, Selection>,
}

impl<S: WidgetSurface> Default for Registry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: WidgetSurface> Registry<S> {
    pub fn new() -> Self {
        Self {
            widgets: HashMap::new(),
            order: Vec::new(),
            selections: HashMap::new(),
        }
    }

    /// Register a widget under `key`
    ///
    /// A key can only be registered once; the first registration wins.
    pub fn register(
        &mut self,
        key: &str,
        accepts_multiple: bool,
        surface: S,
    ) -> Result<(), UploadError> {
        if self.widgets.contains_key(key) {
            return Err(UploadError::DuplicateWidget(key.to_string()));
        }

        tracing::debug!(
            key,
            accepts_multiple,
            drop_target = surface.has_drop_target(),
            "registered upload widget"
        );

        self.widgets.insert(
            key.to_string(),
            Widget {
                accepts_multiple,
                surface,
            },
        );
        self.order.push(key.to_string());
        Ok(())
    }

    pub fn is_registered(&self, key: &str) -> bool {
        self.widgets.contains_key(key)
    }

    /// Registered keys in registration order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn accepts_multiple(&self, key: &str) -> Option<bool> {
        self.widgets.get(key).map(|w| w.accepts_multiple)
    }

    pub fn surface(&self, key: &str) -> Option<&S> {
        self.widgets.get(key).map(|w| &w.surface)
    }

    /// Current selection for `key`, if anything has been committed
    pub fn selection(&self, key: &str) -> Option<&Selection> {
        self.selections.get(key)
    }

    /// The picker control reported a new file set
    ///
    /// An empty set (cancelled dialog) leaves the previous selection alone.
    pub fn picker_changed(&mut self, key: &str, files: &[S::File]) -> Result<(), UploadError> {
        self.widget_mut(key)?;
        if files.is_empty() {
            tracing::trace!(key, "picker change without files ignored");
            return Ok(());
        }
        self.commit_selection(key, files)
    }

    /// A drag-enter, drag-over or drag-leave reached the drop target
    pub fn drag(&mut self, key: &str, phase: DragPhase) -> Result<(), UploadError> {
        let widget = self.widget_mut(key)?;
        match phase {
            DragPhase::Enter => Ok(()),
            DragPhase::Over => widget.surface.set_drag_active(true),
            DragPhase::Leave => widget.surface.set_drag_active(false),
        }
    }

    /// Files were dropped on the widget's drop target
    ///
    /// Clears the drag indicator, mirrors the dropped files into the picker
    /// control, then commits them. Dropping nothing only clears the indicator.
    pub fn dropped(&mut self, key: &str, files: &[S::File]) -> Result<(), UploadError> {
        let widget = self.widget_mut(key)?;
        // The browser default is already suppressed; a stuck indicator must not lose the drop
        if let Err(e) = widget.surface.set_drag_active(false) {
            tracing::warn!(key, error = %e, "drag indicator not cleared");
        }

        if files.is_empty() {
            tracing::trace!(key, "drop without files ignored");
            return Ok(());
        }

        widget.surface.assign_picker_files(files)?;
        self.commit_selection(key, files)
    }

    /// Replace the selection for `key` and re-render its summary
    ///
    /// Single-file widgets keep only the first file. An empty collection is
    /// a no-op.
    pub fn commit_selection(&mut self, key: &str, files: &[S::File]) -> Result<(), UploadError> {
        let widget = self
            .widgets
            .get_mut(key)
            .ok_or_else(|| UploadError::UnknownWidget(key.to_string()))?;

        let Some(selection) = Selection::from_files(files, widget.accepts_multiple) else {
            return Ok(());
        };

        if !widget.accepts_multiple && files.len() > 1 {
            tracing::debug!(
                key,
                discarded = files.len() - 1,
                "single-file widget kept only the first file"
            );
        }

        let summary = selection.summary();
        tracing::debug!(
            key,
            count = selection.files().len(),
            total_bytes = selection.total_size(),
            "committed selection"
        );
        self.selections.insert(key.to_string(), selection);
        widget.surface.render_summary(&summary)
    }

    fn widget_mut(&mut self, key: &str) -> Result<&mut Widget<S>, UploadError> {
        self.widgets
            .get_mut(key)
            .ok_or_else(|| UploadError::UnknownWidget(key.to_string()))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::selection::FileDescriptor;
    use proptest::prelude::*;

    #[derive(Default)]
    struct LinesSurface {
        lines: Vec<String>,
    }

    impl WidgetSurface for LinesSurface {
        type File = FileDescriptor;

        fn assign_picker_files(&mut self, _: &[FileDescriptor]) -> Result<(), UploadError> {
            Ok(())
        }

        fn render_summary(&mut self, summary: &Summary) -> Result<(), UploadError> {
            self.lines = summary.texts();
            Ok(())
        }

        fn set_drag_active(&mut self, _: bool) -> Result<(), UploadError> {
            Ok(())
        }

        fn has_drop_target(&self) -> bool {
            true
        }
    }

    fn file_list() -> impl Strategy<Value = Vec<FileDescriptor>> {
        prop::collection::vec(
            ("[a-z]{1,12}\\.pdf", 0u64..10_000_000)
                .prop_map(|(name, size)| FileDescriptor::new(name, size)),
            1..20,
        )
    }

    proptest! {
        /// Property: single-file widgets store exactly the first file and render one line
        #[test]
        fn single_stores_first(files in file_list()) {
            let mut registry = Registry::new();
            registry.register("w", false, LinesSurface::default()).unwrap();
            registry.commit_selection("w", &files).unwrap();

            prop_assert_eq!(registry.selection("w").unwrap().files(), &files[..1]);
            prop_assert_eq!(registry.surface("w").unwrap().lines.len(), 1);
        }

        /// Property: multi-file widgets store every file in order and render N lines
        #[test]
        fn multiple_stores_all(files in file_list()) {
            let mut registry = Registry::new();
            registry.register("w", true, LinesSurface::default()).unwrap();
            registry.commit_selection("w", &files).unwrap();

            prop_assert_eq!(registry.selection("w").unwrap().files(), files.as_slice());
            let lines = &registry.surface("w").unwrap().lines;
            prop_assert_eq!(lines.len(), files.len());
            for (line, file) in lines.iter().zip(&files) {
                prop_assert!(line.contains(&file.name));
            }
        }

        /// Property: the last commit wins and leaves no residue from earlier ones
        #[test]
        fn last_commit_wins(first in file_list(), second in file_list()) {
            let mut registry = Registry::new();
            registry.register("w", true, LinesSurface::default()).unwrap();
            registry.commit_selection("w", &first).unwrap();
            registry.commit_selection("w", &second).unwrap();

            prop_assert_eq!(registry.selection("w").unwrap().files(), second.as_slice());
            prop_assert_eq!(registry.surface("w").unwrap().lines.len(), second.len());
        }
    }
}
