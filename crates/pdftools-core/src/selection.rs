//! Selected files and their rendered summaries

use crate::format::format_bytes;
use serde::{Deserialize, Serialize};

/// Prefix of the single-file summary line
pub const SINGLE_PREFIX: &str = "Selected: ";
/// Marker in front of each line of a multi-file summary
pub const MULTIPLE_MARKER: &str = "📄 ";

/// Anything a picker or drop can hand over: a name and a byte size
pub trait SelectedFile {
    fn name(&self) -> String;
    fn size(&self) -> u64;

    fn descriptor(&self) -> FileDescriptor {
        FileDescriptor::new(self.name(), self.size())
    }
}

/// Name and size of one selected file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    pub name: String,
    pub size: u64,
}

impl FileDescriptor {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

impl SelectedFile for FileDescriptor {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn descriptor(&self) -> FileDescriptor {
        self.clone()
    }
}

/// Current selection of one widget
///
/// The variant always matches the widget's `accepts_multiple` flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Selection {
    Single(FileDescriptor),
    Multiple(Vec<FileDescriptor>),
}

impl Selection {
    /// Build a selection from an ordered file collection
    ///
    /// Single-file widgets keep only the first file. Returns `None` for an
    /// empty collection.
    pub fn from_files<F: SelectedFile>(files: &[F], accepts_multiple: bool) -> Option<Self> {
        let first = files.first()?;
        if accepts_multiple {
            Some(Selection::Multiple(
                files.iter().map(SelectedFile::descriptor).collect(),
            ))
        } else {
            Some(Selection::Single(first.descriptor()))
        }
    }

    /// Selected files in order
    pub fn files(&self) -> &[FileDescriptor] {
        match self {
            Selection::Single(file) => std::slice::from_ref(file),
            Selection::Multiple(files) => files,
        }
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self, Selection::Multiple(_))
    }

    /// Total size of all selected files in bytes
    pub fn total_size(&self) -> u64 {
        self.files().iter().map(|f| f.size).sum()
    }

    pub fn summary(&self) -> Summary {
        match self {
            Selection::Single(file) => Summary::Single(SummaryLine::for_file(file)),
            Selection::Multiple(files) => {
                Summary::Multiple(files.iter().map(SummaryLine::for_file).collect())
            }
        }
    }
}

/// One rendered line: file name plus formatted size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub name: String,
    pub size_label: String,
}

impl SummaryLine {
    pub fn for_file(file: &FileDescriptor) -> Self {
        Self {
            name: file.name.clone(),
            size_label: format_bytes(file.size as f64),
        }
    }

    /// Parenthesised size, e.g. `" (1.5 KB)"`
    pub fn size_suffix(&self) -> String {
        format!(" ({})", self.size_label)
    }
}

/// What a display surface shows for a selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Summary {
    /// `Selected: <strong>name</strong> (size)`
    Single(SummaryLine),
    /// One `📄 name (size)` line per file
    Multiple(Vec<SummaryLine>),
}

impl Summary {
    pub fn lines(&self) -> &[SummaryLine] {
        match self {
            Summary::Single(line) => std::slice::from_ref(line),
            Summary::Multiple(lines) => lines,
        }
    }

    /// Plain-text rendering, one string per displayed line
    pub fn texts(&self) -> Vec<String> {
        match self {
            Summary::Single(line) => vec![format!(
                "{}{}{}",
                SINGLE_PREFIX,
                line.name,
                line.size_suffix()
            )],
            Summary::Multiple(lines) => lines
                .iter()
                .map(|line| format!("{}{}{}", MULTIPLE_MARKER, line.name, line.size_suffix()))
                .collect(),
        }
    }
}
