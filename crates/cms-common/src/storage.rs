//! Stored-document naming
//!
//! Path generation for uploaded documents is an external-collaborator
//! contract: callers hand in the client-supplied file name and get back a
//! collision-free name to store under the upload directory. Names are
//! UUID-suffixed rather than timestamp-suffixed so concurrent uploads of
//! the same file name cannot collide.

use uuid::Uuid;

/// Build a unique stored file name from a client-supplied one.
///
/// The original extension is preserved; everything else is replaced by a
/// random UUID.
#[must_use]
pub fn document_file_name(original: &str) -> String {
    let id = Uuid::new_v4();
    match original.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() && !ext.contains('/') => format!("{id}.{ext}"),
        _ => id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_extension() {
        let name = document_file_name("report.pdf");
        assert!(name.ends_with(".pdf"));
        assert_ne!(name, "report.pdf");
    }

    #[test]
    fn test_no_extension() {
        let name = document_file_name("README");
        assert!(!name.contains('.'));
    }

    #[test]
    fn test_unique_per_call() {
        assert_ne!(document_file_name("a.txt"), document_file_name("a.txt"));
    }

    #[test]
    fn test_ignores_path_separators_in_extension() {
        // "dir.name/file" has a dot but the suffix is not an extension
        let name = document_file_name("dir.name/file");
        assert!(!name.contains('/'));
    }
}
