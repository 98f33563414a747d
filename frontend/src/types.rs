//! View types shared by the page components.
//!
//! # Categories
//!
//! - **Preview Types** - what the preview panel shows for the selected file
//! - **Toast Types** - transient notifications

use predictor_core::{file_meta, CandidateFile, NotifyKind};

// =============================================================================
// Preview Types
// =============================================================================

/// Preview of the accepted file.
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewInfo {
    /// Object URL of the file (`blob:...`), revoked when replaced
    pub url: String,
    /// `"{name} · {size} · {mime}"`
    pub meta: String,
}

impl PreviewInfo {
    pub fn new(url: String, file: &CandidateFile) -> Self {
        Self {
            url,
            meta: file_meta(file),
        }
    }

    /// Build a preview from the outcome of creating the object URL.
    ///
    /// The error is the message shown to the user.
    pub fn from_object_url(url: Result<String, String>, file: &CandidateFile) -> Result<Self, String> {
        match url {
            Ok(url) if !url.is_empty() => Ok(Self::new(url, file)),
            Ok(_) => Err(format!("Could not preview {}: empty object URL", file.name)),
            Err(e) => Err(format!("Could not preview {}: {}", file.name, e)),
        }
    }
}

// =============================================================================
// Toast Types
// =============================================================================

/// A notification on screen.
///
/// `id` lets a dismissal timer recognise whether its toast is still shown.
#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: u64,
    pub message: String,
    pub kind: NotifyKind,
}

impl ToastMessage {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        self.kind.css_class()
    }
}
