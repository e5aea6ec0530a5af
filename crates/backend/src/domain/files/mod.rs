pub mod browser;
pub mod uploader;

use std::path::{Path, PathBuf};

use contracts::category::CategoryKey;

use crate::shared::error::ApiError;

/// Directory holding one category's files
pub fn category_dir(root: &Path, category: CategoryKey) -> PathBuf {
    root.join(category.as_str())
}

/// Reject names that could escape the category directory
///
/// Stored files are plain names directly inside the folder; separators or
/// parent components never appear in legitimate uploads or listings.
pub fn check_file_name(name: &str) -> Result<(), ApiError> {
    let suspicious = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\')
        || name.contains('\0');
    if suspicious {
        return Err(ApiError::InvalidFileName(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_names_pass() {
        for name in ["a.pdf", "Catalog 2026.pdf", "demo.mp4", "no-extension"] {
            assert!(check_file_name(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn traversal_attempts_are_rejected() {
        for name in ["", ".", "..", "../secret", "a/b.pdf", "a\\b.pdf", "a\0b"] {
            assert!(check_file_name(name).is_err(), "{name:?}");
        }
    }
}
