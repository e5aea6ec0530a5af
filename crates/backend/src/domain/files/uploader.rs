use std::fs;
use std::io;
use std::path::Path;

use anyhow::Context;
use uuid::Uuid;

use contracts::category::CategoryKey;
use contracts::files::{Notice, SavedFile, UploadResponse};

use super::{category_dir, check_file_name};
use crate::shared::error::ApiError;

/// One blob taken off the wire, ready to persist
#[derive(Debug, Clone)]
pub struct IncomingFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Persist a batch of blobs into a category's folder
///
/// The folder is created on first use. Files are written in batch order; a
/// name collision silently overwrites the existing blob. The first write
/// failure aborts the remainder of the batch; files already written stay.
pub fn upload(
    root: &Path,
    category: CategoryKey,
    files: Vec<IncomingFile>,
) -> Result<UploadResponse, ApiError> {
    if files.is_empty() {
        return Err(ApiError::EmptyUpload);
    }

    let dir = category_dir(root, category);
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create category folder {}", dir.display()))?;

    let mut saved = Vec::with_capacity(files.len());
    let mut notices = Vec::with_capacity(files.len());

    for file in files {
        check_file_name(&file.name)?;

        write_replacing(&dir, &file.name, &file.bytes).map_err(|source| {
            ApiError::WriteFailure {
                name: file.name.clone(),
                source,
            }
        })?;

        tracing::info!(
            "stored {} ({} bytes) in category '{}'",
            file.name,
            file.bytes.len(),
            category.as_str()
        );
        notices.push(Notice::success(format!(
            "Saved '{}' to the {} category",
            file.name,
            category.display_name()
        )));
        saved.push(SavedFile {
            name: file.name,
            size: file.bytes.len() as u64,
        });
    }

    Ok(UploadResponse {
        category,
        saved,
        notices,
    })
}

/// Write the whole blob, then rename it over the final path
///
/// The rename keeps partially written files invisible under the target name.
fn write_replacing(dir: &Path, name: &str, bytes: &[u8]) -> io::Result<()> {
    let tmp = dir.join(format!(".upload-{}.part", Uuid::new_v4()));
    fs::write(&tmp, bytes)?;
    if let Err(e) = fs::rename(&tmp, dir.join(name)) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    Ok(())
}
