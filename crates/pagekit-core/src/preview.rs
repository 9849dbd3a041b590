//! Selected-file set operations for the image preview manager.
//!
//! The preview render is always a full re-render over a snapshot of the
//! input's file list, and preview cells are tagged with each file's index in
//! that snapshot. These helpers keep the index bookkeeping and the ordered
//! exclusion pure so the browser layer only moves DOM nodes around.

/// Whether a declared MIME type gets a preview.
///
/// Non-image files are skipped silently: no preview, no error, and the file
/// stays attached to the input.
pub fn is_image_mime(mime: &str) -> bool {
    mime.starts_with("image/")
}

/// Indices of files that should get a preview cell, in input order.
///
/// Indices refer to positions in the full file list, so removal controls
/// built from them stay aligned with the backing input.
pub fn previewable_indices<'a>(mimes: impl IntoIterator<Item = &'a str>) -> Vec<usize> {
    mimes
        .into_iter()
        .enumerate()
        .filter(|(_, mime)| is_image_mime(mime))
        .map(|(i, _)| i)
        .collect()
}

/// Ordered exclusion of one element.
///
/// All other elements keep their original relative order. An out-of-range
/// index returns the list unchanged.
pub fn remove_index<T>(files: Vec<T>, index: usize) -> Vec<T> {
    if index >= files.len() {
        return files;
    }
    files
        .into_iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, f)| f)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_mime_prefix() {
        assert!(is_image_mime("image/png"));
        assert!(is_image_mime("image/svg+xml"));
        assert!(!is_image_mime("text/plain"));
        assert!(!is_image_mime("application/octet-stream"));
        assert!(!is_image_mime(""));
    }

    #[test]
    fn test_previewable_indices_keep_original_positions() {
        let mimes = ["image/png", "text/plain", "image/jpeg"];
        assert_eq!(previewable_indices(mimes), vec![0, 2]);
    }

    #[test]
    fn test_no_previews_for_non_images() {
        assert_eq!(
            previewable_indices(["text/plain", "application/pdf"]),
            Vec::<usize>::new()
        );
    }

    #[test]
    fn test_remove_middle_preserves_order() {
        assert_eq!(remove_index(vec!["f0", "f1", "f2"], 1), vec!["f0", "f2"]);
    }

    #[test]
    fn test_remove_first_and_last() {
        assert_eq!(remove_index(vec![0, 1, 2], 0), vec![1, 2]);
        assert_eq!(remove_index(vec![0, 1, 2], 2), vec![0, 1]);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        assert_eq!(remove_index(vec![0, 1], 5), vec![0, 1]);
        assert_eq!(remove_index(Vec::<i32>::new(), 0), Vec::<i32>::new());
    }
}
