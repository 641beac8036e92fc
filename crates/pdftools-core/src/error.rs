use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("Unknown upload widget: {0}")]
    UnknownWidget(String),

    #[error("Upload widget already registered: {0}")]
    DuplicateWidget(String),

    #[error("Widget surface error: {0}")]
    Surface(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse upload config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate widget key in config: {0}")]
    DuplicateKey(String),

    #[error("Widget key must not be empty")]
    EmptyKey,
}

/// Reasons the pre-submit gate blocks a tool's form.
///
/// The `Display` text is shown to the user verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("ファイルを選択してください")]
    NoFiles,

    #[error("{required}つ以上のファイルを選択してください")]
    TooFewFiles { required: u32, selected: u32 },

    #[error("ページ範囲を入力してください")]
    MissingPageRange,

    #[error("順序を入力してください")]
    MissingOrder,

    #[error("パスワードを入力してください")]
    MissingPassword,
}
