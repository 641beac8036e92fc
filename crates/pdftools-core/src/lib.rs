//! Browser-independent logic for the PDF tools upload page
//!
//! The page has one upload widget per tool (split, merge, reorder, ...).
//! This crate holds everything about those widgets that does not need a
//! DOM, so it can be tested natively:
//!
//! - [`registry::Registry`]: keyed selection state and picker/drop reconciliation
//! - [`format::format_bytes`]: human-readable file sizes
//! - [`validation::validate_submission`]: the pre-submit form check
//! - [`config::UploadConfig`]: widget layout and element id conventions
//!
//! The wasm app supplies a [`registry::WidgetSurface`] backed by `web-sys`.

pub mod config;
pub mod error;
pub mod format;
pub mod registry;
pub mod selection;
pub mod validation;

pub use config::{DomIds, FormFieldIds, UploadConfig, WidgetSpec};
pub use error::{ConfigError, UploadError, ValidationError};
pub use format::{format_bytes, format_bytes_with, DEFAULT_DECIMALS};
pub use registry::{DragPhase, Registry, WidgetSurface};
pub use selection::{FileDescriptor, SelectedFile, Selection, Summary, SummaryLine};
pub use validation::{validate_submission, FormSnapshot, SplitMode, Tool};
