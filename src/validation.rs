//! Local checks run before any request leaves the browser.

use crate::error::ClientError;

/// Corrections shorter than this (after trimming) are rejected.
pub const MIN_CORRECTION_CHARS: usize = 5;

/// Image types the backend accepts.
pub const ALLOWED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

/// The parts of a selected file that matter for validation.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadCandidate {
    pub name: String,
    pub size_bytes: u64,
}

pub fn validate_upload(candidate: Option<&UploadCandidate>, max_bytes: u64) -> Result<(), ClientError> {
    let file = candidate.ok_or_else(|| ClientError::Validation("Please select an image".to_string()))?;

    let extension = file
        .name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(ClientError::Validation(format!(
            "Unsupported image type. Please choose a {} file",
            ALLOWED_EXTENSIONS.join(", ").to_uppercase()
        )));
    }

    if file.size_bytes > max_bytes {
        return Err(ClientError::Validation(format!(
            "Image is too large ({:.1} MB). The limit is {} MB",
            file.size_bytes as f64 / (1024.0 * 1024.0),
            max_bytes / (1024 * 1024)
        )));
    }

    Ok(())
}

/// Returns the trimmed correction text when it is long enough to send.
pub fn validate_correction(text: &str) -> Result<String, ClientError> {
    let trimmed = text.trim();
    if trimmed.chars().count() < MIN_CORRECTION_CHARS {
        return Err(ClientError::Validation(format!(
            "Please describe the correction in at least {} characters",
            MIN_CORRECTION_CHARS
        )));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMIT: u64 = 16 * 1024 * 1024;

    fn file(name: &str, size_bytes: u64) -> UploadCandidate {
        UploadCandidate { name: name.to_string(), size_bytes }
    }

    #[test]
    fn test_missing_file_rejected() {
        let err = validate_upload(None, LIMIT).unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
        assert_eq!(err.user_message(), "Please select an image");
    }

    #[test]
    fn test_allowed_extensions_case_insensitive() {
        for name in ["lunch.jpg", "lunch.JPEG", "plate.Png", "bowl.webp"] {
            assert!(validate_upload(Some(&file(name, 1024)), LIMIT).is_ok(), "{name} should pass");
        }
    }

    #[test]
    fn test_disallowed_extension_rejected() {
        for name in ["menu.pdf", "noextension", "photo.heic"] {
            let err = validate_upload(Some(&file(name, 1024)), LIMIT).unwrap_err();
            assert!(matches!(err, ClientError::Validation(_)), "{name} should be rejected");
        }
    }

    #[test]
    fn test_oversized_file_rejected() {
        assert!(validate_upload(Some(&file("big.jpg", LIMIT)), LIMIT).is_ok());
        let err = validate_upload(Some(&file("big.jpg", LIMIT + 1)), LIMIT).unwrap_err();
        assert!(err.user_message().contains("16 MB"));
    }

    #[test]
    fn test_short_correction_rejected() {
        assert!(validate_correction("").is_err());
        assert!(validate_correction("   rice   ").is_err());
        assert!(validate_correction("\n\tabcd \n").is_err());
    }

    #[test]
    fn test_correction_is_trimmed() {
        assert_eq!(validate_correction("  no sauce  ").unwrap(), "no sauce");
        assert_eq!(validate_correction("abcde").unwrap(), "abcde");
    }
}
