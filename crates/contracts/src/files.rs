use serde::{Deserialize, Serialize};

use crate::category::CategoryKey;

/// What the UI Shell should offer for a listed file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileAction {
    /// PDF: on-demand preview that streams the raw bytes to a renderer
    Preview,
    /// Known video container: inline playback
    Playback,
    /// Everything else: download with the original file name
    Download,
}

impl FileAction {
    /// Classify by file extension, case-insensitive
    pub fn for_name(name: &str) -> FileAction {
        let lower = name.to_lowercase();
        if lower.ends_with(".pdf") {
            FileAction::Preview
        } else if lower.ends_with(".mp4") || lower.ends_with(".mov") {
            FileAction::Playback
        } else {
            FileAction::Download
        }
    }
}

/// Listing metadata for one stored file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    pub name: String,
    pub size: u64,
    /// Last modification time, RFC 3339; absent when the platform withholds it
    pub modified: Option<String>,
    pub action: FileAction,
}

/// Severity of a user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
    Success,
}

/// Text message for the UI Shell to display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListFilesResponse {
    pub category: CategoryKey,
    pub entries: Vec<FileEntry>,
    /// Folder-missing warning or empty-listing info; `None` when files exist
    pub notice: Option<Notice>,
}

/// Per-file acknowledgment after a successful write
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedFile {
    pub name: String,
    pub size: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub category: CategoryKey,
    pub saved: Vec<SavedFile>,
    pub notices: Vec<Notice>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(FileAction::for_name("price.pdf"), FileAction::Preview);
        assert_eq!(FileAction::for_name("PRICE.PDF"), FileAction::Preview);
        assert_eq!(FileAction::for_name("demo.mp4"), FileAction::Playback);
        assert_eq!(FileAction::for_name("clip.MOV"), FileAction::Playback);
        assert_eq!(FileAction::for_name("setup.exe"), FileAction::Download);
        assert_eq!(FileAction::for_name("notes.txt"), FileAction::Download);
    }

    #[test]
    fn extension_must_terminate_the_name() {
        // "pdf" somewhere in the middle is not a preview
        assert_eq!(FileAction::for_name("pdf-guide.zip"), FileAction::Download);
        assert_eq!(FileAction::for_name("movie.mp4.bak"), FileAction::Download);
    }
}
