use std::fs;
use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};

use contracts::category::CategoryKey;
use contracts::files::{FileAction, FileEntry, ListFilesResponse, Notice};

use super::{category_dir, check_file_name};
use crate::shared::error::ApiError;

/// Enumerate a category's files as they are on disk right now
///
/// A missing folder is a warning, not an error; an existing but empty folder
/// is an informational message. Entries are sorted by name so repeated
/// listings are stable.
pub fn list_files(root: &Path, category: CategoryKey) -> Result<ListFilesResponse, ApiError> {
    let dir = category_dir(root, category);

    if !dir.exists() {
        tracing::warn!("category folder missing: {}", dir.display());
        return Ok(ListFilesResponse {
            category,
            entries: Vec::new(),
            notice: Some(Notice::warning(format!(
                "Folder '{}' was not found",
                dir.display()
            ))),
        });
    }

    let read_dir = fs::read_dir(&dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?;

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry.with_context(|| format!("Failed to read entry in {}", dir.display()))?;
        let metadata = entry
            .metadata()
            .with_context(|| format!("Failed to stat {}", entry.path().display()))?;
        if !metadata.is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        let modified = metadata
            .modified()
            .ok()
            .map(|t| DateTime::<Utc>::from(t).to_rfc3339());

        entries.push(FileEntry {
            action: FileAction::for_name(&name),
            size: metadata.len(),
            modified,
            name,
        });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));

    let notice = if entries.is_empty() {
        Some(Notice::info("There are no files to display"))
    } else {
        None
    };

    Ok(ListFilesResponse {
        category,
        entries,
        notice,
    })
}

/// Read one stored blob fully into memory
pub fn read_file(root: &Path, category: CategoryKey, name: &str) -> Result<Vec<u8>, ApiError> {
    check_file_name(name)?;

    let path = category_dir(root, category).join(name);
    match fs::read(&path) {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(ApiError::FileNotFound(name.to_string()))
        }
        Err(e) => Err(ApiError::Internal(
            anyhow::Error::new(e).context(format!("Failed to read {}", path.display())),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::files::NoticeLevel;

    #[test]
    fn missing_folder_yields_empty_listing_and_warning() {
        let root = tempfile::tempdir().unwrap();

        let listing = list_files(root.path(), CategoryKey::Catalog).unwrap();
        assert!(listing.entries.is_empty());
        let notice = listing.notice.unwrap();
        assert_eq!(notice.level, NoticeLevel::Warning);
    }

    #[test]
    fn empty_folder_yields_info_notice() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("manual")).unwrap();

        let listing = list_files(root.path(), CategoryKey::Manual).unwrap();
        assert!(listing.entries.is_empty());
        assert_eq!(listing.notice.unwrap().level, NoticeLevel::Info);
    }

    #[test]
    fn listing_reports_metadata_and_actions() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("video");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("intro.MP4"), b"0123456789").unwrap();
        fs::write(dir.join("brochure.pdf"), b"pdf").unwrap();
        fs::write(dir.join("archive.zip"), b"zip!").unwrap();
        fs::create_dir(dir.join("nested")).unwrap();

        let listing = list_files(root.path(), CategoryKey::Video).unwrap();
        assert!(listing.notice.is_none());

        let names: Vec<&str> = listing.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["archive.zip", "brochure.pdf", "intro.MP4"]);

        let by_name = |n: &str| listing.entries.iter().find(|e| e.name == n).unwrap();
        assert_eq!(by_name("intro.MP4").action, FileAction::Playback);
        assert_eq!(by_name("intro.MP4").size, 10);
        assert_eq!(by_name("brochure.pdf").action, FileAction::Preview);
        assert_eq!(by_name("archive.zip").action, FileAction::Download);
        assert!(by_name("archive.zip").modified.is_some());
    }

    #[test]
    fn read_file_round_trip_and_missing_file() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("catalog");
        fs::create_dir(&dir).unwrap();
        let payload: Vec<u8> = (0..=255).collect();
        fs::write(dir.join("blob.bin"), &payload).unwrap();

        let bytes = read_file(root.path(), CategoryKey::Catalog, "blob.bin").unwrap();
        assert_eq!(bytes, payload);

        let err = read_file(root.path(), CategoryKey::Catalog, "ghost.bin").unwrap_err();
        assert!(matches!(err, ApiError::FileNotFound(_)));
    }

    #[test]
    fn read_file_rejects_traversal() {
        let root = tempfile::tempdir().unwrap();
        let err = read_file(root.path(), CategoryKey::Catalog, "../../etc/passwd").unwrap_err();
        assert!(matches!(err, ApiError::InvalidFileName(_)));
    }
}
