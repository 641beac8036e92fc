//! Pre-submit form validation
//!
//! Each tool page posts a plain HTML form. Before the browser submits it,
//! the form is checked for a file selection and for the tool-specific text
//! fields. Only emptiness is checked; the server validates the contents.

use crate::error::ValidationError;

/// Minimum number of files for tools that combine several inputs
pub const MULTI_FILE_MINIMUM: u32 = 2;

/// Tools offered on the page, keyed the same way as their upload widgets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Split,
    Merge,
    Reorder,
    Pdf2Img,
    Img2Pdf,
    Encrypt,
}

impl Tool {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "split" => Some(Tool::Split),
            "merge" => Some(Tool::Merge),
            "reorder" => Some(Tool::Reorder),
            "pdf2img" => Some(Tool::Pdf2Img),
            "img2pdf" => Some(Tool::Img2Pdf),
            "encrypt" => Some(Tool::Encrypt),
            _ => None,
        }
    }

    /// Fewest files the tool can work with
    pub fn min_files(&self) -> u32 {
        match self {
            Tool::Merge | Tool::Img2Pdf => MULTI_FILE_MINIMUM,
            _ => 1,
        }
    }
}

/// Split tool mode radio
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SplitMode {
    /// One output file per page
    #[default]
    All,
    /// Extract the pages named in the range field
    Range,
}

impl SplitMode {
    /// Radio value to mode; anything but `"range"` is `All`
    pub fn from_value(value: &str) -> Self {
        if value == "range" {
            SplitMode::Range
        } else {
            SplitMode::All
        }
    }
}

/// Values read from a tool's form at submit time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    /// Files currently held by the tool's picker control
    pub file_count: u32,
    pub split_mode: SplitMode,
    pub page_range: String,
    pub reorder_order: String,
    pub password: String,
}

/// Decide whether the form for `tool_key` may be submitted
///
/// Checks run in a fixed order and the first failure is returned. Keys that
/// do not name a known tool only get the file check.
pub fn validate_submission(tool_key: &str, form: &FormSnapshot) -> Result<(), ValidationError> {
    if form.file_count == 0 {
        return Err(ValidationError::NoFiles);
    }

    let Some(tool) = Tool::from_key(tool_key) else {
        return Ok(());
    };

    let required = tool.min_files();
    if form.file_count < required {
        return Err(ValidationError::TooFewFiles {
            required,
            selected: form.file_count,
        });
    }

    match tool {
        Tool::Split if form.split_mode == SplitMode::Range && form.page_range.is_empty() => {
            Err(ValidationError::MissingPageRange)
        }
        Tool::Reorder if form.reorder_order.is_empty() => Err(ValidationError::MissingOrder),
        Tool::Encrypt if form.password.is_empty() => Err(ValidationError::MissingPassword),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn with_files(file_count: u32) -> FormSnapshot {
        FormSnapshot {
            file_count,
            ..FormSnapshot::default()
        }
    }

    #[test]
    fn test_no_files_blocks_every_tool() {
        for key in ["split", "merge", "reorder", "pdf2img", "img2pdf", "encrypt", "other"] {
            assert_eq!(
                validate_submission(key, &with_files(0)),
                Err(ValidationError::NoFiles),
                "tool {}",
                key
            );
        }
    }

    #[test]
    fn test_merge_needs_two_files() {
        let result = validate_submission("merge", &with_files(1));
        assert_eq!(
            result,
            Err(ValidationError::TooFewFiles {
                required: 2,
                selected: 1
            })
        );
        assert!(validate_submission("merge", &with_files(2)).is_ok());
        assert!(validate_submission("img2pdf", &with_files(1)).is_err());
        assert!(validate_submission("img2pdf", &with_files(3)).is_ok());
    }

    #[test]
    fn test_split_range_mode_needs_range() {
        let mut form = with_files(1);
        assert!(validate_submission("split", &form).is_ok());

        form.split_mode = SplitMode::Range;
        assert_eq!(
            validate_submission("split", &form),
            Err(ValidationError::MissingPageRange)
        );

        form.page_range = "1-3, 5".to_string();
        assert!(validate_submission("split", &form).is_ok());
    }

    #[test]
    fn test_reorder_needs_order() {
        let mut form = with_files(1);
        assert_eq!(
            validate_submission("reorder", &form),
            Err(ValidationError::MissingOrder)
        );
        form.reorder_order = "3,1,2".to_string();
        assert!(validate_submission("reorder", &form).is_ok());
    }

    #[test]
    fn test_encrypt_needs_password() {
        let mut form = with_files(1);
        assert_eq!(
            validate_submission("encrypt", &form),
            Err(ValidationError::MissingPassword)
        );
        form.password = "secret".to_string();
        assert!(validate_submission("encrypt", &form).is_ok());
    }

    #[test]
    fn test_unknown_tool_only_checks_files() {
        let form = with_files(1);
        assert!(validate_submission("compress", &form).is_ok());
    }

    #[test]
    fn test_messages_are_user_facing() {
        assert_eq!(ValidationError::NoFiles.to_string(), "ファイルを選択してください");
        assert_eq!(
            ValidationError::TooFewFiles {
                required: 2,
                selected: 1
            }
            .to_string(),
            "2つ以上のファイルを選択してください"
        );
        assert_eq!(
            ValidationError::MissingPageRange.to_string(),
            "ページ範囲を入力してください"
        );
        assert_eq!(ValidationError::MissingOrder.to_string(), "順序を入力してください");
        assert_eq!(
            ValidationError::MissingPassword.to_string(),
            "パスワードを入力してください"
        );
    }

    #[test]
    fn test_tool_from_key() {
        assert_eq!(Tool::from_key("split"), Some(Tool::Split));
        assert_eq!(Tool::from_key("pdf2img"), Some(Tool::Pdf2Img));
        assert_eq!(Tool::from_key("img2pdf"), Some(Tool::Img2Pdf));
        assert_eq!(Tool::from_key("compress"), None);
        assert_eq!(Tool::Merge.min_files(), MULTI_FILE_MINIMUM);
        assert_eq!(Tool::Encrypt.min_files(), 1);
    }

    #[test]
    fn test_split_mode_from_value() {
        assert_eq!(SplitMode::from_value("range"), SplitMode::Range);
        assert_eq!(SplitMode::from_value("all"), SplitMode::All);
        assert_eq!(SplitMode::from_value(""), SplitMode::All);
    }
}
