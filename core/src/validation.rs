//! Upload policy checks for candidate files.
//!
//! Only the declared MIME type and the byte size are inspected; the file
//! contents are never read here. Rules run in order and the first failure wins:
//!
//! 1. MIME type must start with `image/`
//! 2. size must not exceed [`MAX_FILE_SIZE`]

use crate::config::{IMAGE_MIME_PREFIX, MAX_FILE_SIZE};
use crate::error::{ValidationError, ValidationResult};
use crate::models::CandidateFile;

/// Accepts or refuses candidate files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileValidator {
    max_size: u64,
}

impl Default for FileValidator {
    fn default() -> Self {
        Self { max_size: MAX_FILE_SIZE }
    }
}

impl FileValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check a candidate against the policy, handing it back when accepted.
    pub fn validate(&self, candidate: CandidateFile) -> ValidationResult<CandidateFile> {
        if !candidate.mime_type.starts_with(IMAGE_MIME_PREFIX) {
            return Err(ValidationError::NotAnImage {
                mime_type: candidate.mime_type,
            });
        }

        if candidate.size_bytes > self.max_size {
            return Err(ValidationError::TooLarge {
                size_bytes: candidate.size_bytes,
                limit: self.max_size,
            });
        }

        Ok(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(candidate: CandidateFile) -> ValidationResult<CandidateFile> {
        FileValidator::new().validate(candidate)
    }

    #[test]
    fn test_accepts_images_up_to_limit() {
        for mime in ["image/png", "image/jpeg", "image/webp", "image/"] {
            let candidate = CandidateFile::new("photo", MAX_FILE_SIZE, mime);
            assert_eq!(validate(candidate.clone()), Ok(candidate));
        }
        assert!(validate(CandidateFile::new("empty.png", 0, "image/png")).is_ok());
    }

    #[test]
    fn test_rejects_non_images() {
        for mime in ["", "text/plain", "application/pdf", "Image/png", "video/mp4", " image/png"] {
            let err = validate(CandidateFile::new("file", 10, mime)).unwrap_err();
            assert_eq!(err.reason(), "not an image", "{mime:?}");
        }
    }

    #[test]
    fn test_rejects_oversized_files() {
        let err = validate(CandidateFile::new("big.png", MAX_FILE_SIZE + 1, "image/png")).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooLarge {
                size_bytes: MAX_FILE_SIZE + 1,
                limit: MAX_FILE_SIZE
            }
        );
    }

    #[test]
    fn test_type_rule_wins_over_size_rule() {
        let err = validate(CandidateFile::new("big.txt", MAX_FILE_SIZE * 2, "text/plain")).unwrap_err();
        assert_eq!(err.reason(), "not an image");
    }

    #[test]
    fn test_custom_limit() {
        let validator = FileValidator { max_size: 100 };
        assert!(validator.validate(CandidateFile::new("a.png", 100, "image/png")).is_ok());
        let err = validator.validate(CandidateFile::new("a.png", 101, "image/png")).unwrap_err();
        assert_eq!(err.to_string(), "File is too large (max 100.0 B).");
    }
}
