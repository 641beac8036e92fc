//! Page layout configuration
//!
//! Describes which upload widgets exist and how their DOM elements are
//! named. The defaults match the tool page; a JSON document can override
//! any part of it.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One upload widget on the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetSpec {
    /// Widget key, e.g. `"merge"`; also the suffix of its element ids
    pub key: String,
    /// Whether the widget holds a list of files instead of a single file
    #[serde(default)]
    pub accepts_multiple: bool,
}

impl WidgetSpec {
    pub fn new(key: impl Into<String>, accepts_multiple: bool) -> Self {
        Self {
            key: key.into(),
            accepts_multiple,
        }
    }
}

/// Element id prefixes; the widget key is appended to each
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomIds {
    pub drop_area: String,
    pub picker: String,
    /// Display region of multi-file widgets
    pub file_list: String,
    /// Display region of single-file widgets
    pub file_info: String,
}

impl Default for DomIds {
    fn default() -> Self {
        Self {
            drop_area: "drop-area-".to_string(),
            picker: "file-".to_string(),
            file_list: "file-list-".to_string(),
            file_info: "file-info-".to_string(),
        }
    }
}

impl DomIds {
    pub fn drop_area_id(&self, key: &str) -> String {
        format!("{}{}", self.drop_area, key)
    }

    pub fn picker_id(&self, key: &str) -> String {
        format!("{}{}", self.picker, key)
    }

    pub fn display_id(&self, key: &str, accepts_multiple: bool) -> String {
        if accepts_multiple {
            format!("{}{}", self.file_list, key)
        } else {
            format!("{}{}", self.file_info, key)
        }
    }
}

/// Ids and names of the tool form fields read before submit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormFieldIds {
    /// `name` shared by the split-mode radios
    pub split_mode_name: String,
    /// Wrapper shown only in range mode
    pub split_range_group: String,
    pub page_range: String,
    pub reorder_order: String,
    pub password: String,
}

impl Default for FormFieldIds {
    fn default() -> Self {
        Self {
            split_mode_name: "mode".to_string(),
            split_range_group: "split-range-group".to_string(),
            page_range: "split-range".to_string(),
            reorder_order: "reorder-input".to_string(),
            password: "encrypt-password".to_string(),
        }
    }
}

/// Complete upload page configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    pub widgets: Vec<WidgetSpec>,
    pub ids: DomIds,
    pub fields: FormFieldIds,
    /// Class set on a drop area while files are dragged over it
    pub drag_active_class: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            widgets: vec![
                WidgetSpec::new("split", false),
                WidgetSpec::new("merge", true),
                WidgetSpec::new("reorder", false),
                WidgetSpec::new("pdf2img", false),
                WidgetSpec::new("img2pdf", true),
                WidgetSpec::new("encrypt", false),
            ],
            ids: DomIds::default(),
            fields: FormFieldIds::default(),
            drag_active_class: "dragover".to_string(),
        }
    }
}

impl UploadConfig {
    /// Parse a configuration from JSON; missing fields take their defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a widget key is empty
    /// or repeated.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check widget keys are non-empty and unique
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for widget in &self.widgets {
            if widget.key.is_empty() {
                return Err(ConfigError::EmptyKey);
            }
            if !seen.insert(widget.key.as_str()) {
                return Err(ConfigError::DuplicateKey(widget.key.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_layout() {
        let config = UploadConfig::default();
        let keys: Vec<_> = config.widgets.iter().map(|w| w.key.as_str()).collect();
        assert_eq!(
            keys,
            vec!["split", "merge", "reorder", "pdf2img", "img2pdf", "encrypt"]
        );
        let multiple: Vec<_> = config
            .widgets
            .iter()
            .filter(|w| w.accepts_multiple)
            .map(|w| w.key.as_str())
            .collect();
        assert_eq!(multiple, vec!["merge", "img2pdf"]);
        assert_eq!(config.drag_active_class, "dragover");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_dom_ids() {
        let ids = DomIds::default();
        assert_eq!(ids.drop_area_id("split"), "drop-area-split");
        assert_eq!(ids.picker_id("split"), "file-split");
        assert_eq!(ids.display_id("split", false), "file-info-split");
        assert_eq!(ids.display_id("merge", true), "file-list-merge");
    }

    #[test]
    fn test_from_json_empty_object_is_default() {
        let config = UploadConfig::from_json("{}").unwrap();
        assert_eq!(config, UploadConfig::default());
    }

    #[test]
    fn test_from_json_overrides() {
        let json = r#"{
            "widgets": [{"key": "compress"}, {"key": "merge", "accepts_multiple": true}],
            "drag_active_class": "is-dragging",
            "ids": {"picker": "input-"}
        }"#;
        let config = UploadConfig::from_json(json).unwrap();

        assert_eq!(
            config.widgets,
            vec![WidgetSpec::new("compress", false), WidgetSpec::new("merge", true)]
        );
        assert_eq!(config.drag_active_class, "is-dragging");
        assert_eq!(config.ids.picker_id("merge"), "input-merge");
        assert_eq!(config.ids.drop_area_id("merge"), "drop-area-merge");
        assert_eq!(config.fields, FormFieldIds::default());
    }

    #[test]
    fn test_from_json_rejects_duplicate_keys() {
        let json = r#"{"widgets": [{"key": "split"}, {"key": "split"}]}"#;
        let result = UploadConfig::from_json(json);
        assert!(matches!(result, Err(ConfigError::DuplicateKey(key)) if key == "split"));
    }

    #[test]
    fn test_from_json_rejects_empty_key() {
        let json = r#"{"widgets": [{"key": ""}]}"#;
        assert!(matches!(
            UploadConfig::from_json(json),
            Err(ConfigError::EmptyKey)
        ));
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(matches!(
            UploadConfig::from_json("{not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
