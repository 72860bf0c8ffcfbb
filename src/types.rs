//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Document Types** - Server-provided document metadata
//! - **API Types** - Backend response structures
//! - **UI State** - Upload form status
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Document Types
// =============================================================================

/// Server-assigned document identifier.
///
/// The backend treats ids as opaque; depending on the storage layer they
/// arrive as JSON numbers or strings, so both shapes deserialize.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocumentId {
    Number(u64),
    Text(String),
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentId::Number(n) => write!(f, "{}", n),
            DocumentId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Metadata about a previously uploaded document.
///
/// Deserialized from the list endpoint; the whole collection is swapped
/// on every successful refresh, entries are never mutated in place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DocumentSummary {
    /// Server-assigned identifier
    pub id: DocumentId,
    /// Original filename
    pub filename: String,
    /// File size in bytes
    pub size: u64,
    /// Whether OCR was used to extract the text
    pub ocr_used: bool,
    /// First part of the extracted text, if any
    #[serde(default)]
    pub extracted_text_preview: Option<String>,
}

impl DocumentSummary {
    /// Human-readable size, e.g. `2048` bytes renders as "2.0 KB".
    pub fn size_label(&self) -> String {
        format!("{:.1} KB", self.size as f64 / 1024.0)
    }

    /// "Yes"/"No" label for the OCR flag.
    pub fn ocr_label(&self) -> &'static str {
        if self.ocr_used {
            "Yes"
        } else {
            "No"
        }
    }
}

// =============================================================================
// API Response Types
// =============================================================================

/// Response from the document list endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DocumentsResponse {
    /// Documents in server order. A missing key means an empty list.
    #[serde(default)]
    pub items: Vec<DocumentSummary>,
}

/// Response from the upload endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Filename as stored by the backend
    pub filename: String,
    /// Whether the backend ran OCR on this file
    pub ocr_used: bool,
}

impl UploadResponse {
    /// One-line summary shown to the user after a successful upload.
    pub fn summary(&self) -> String {
        let ocr = if self.ocr_used { "Yes" } else { "No" };
        format!("Uploaded: {}. OCR: {}", self.filename, ocr)
    }
}

// =============================================================================
// UI State
// =============================================================================

/// Upload form status for the most recent submission attempt.
///
/// Overwritten on each attempt; `finish` is the single cleanup step, so
/// `uploading` ends up false on every exit path.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    /// Whether a submission is in flight
    pub uploading: bool,
    /// Success or error text from the last attempt
    pub message: Option<String>,
}

impl UiState {
    /// Start a submission: mark it in flight and clear the prior message.
    pub fn begin(&mut self) {
        self.uploading = true;
        self.message = None;
    }

    /// Record the submission outcome and clear the in-flight flag.
    pub fn finish(&mut self, result: &AppResult<UploadResponse>) {
        self.message = Some(match result {
            Ok(response) => response.summary(),
            Err(e) => format!("Error: {}", e.detail()),
        });
        self.uploading = false;
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations. The UI collapses
/// every variant into one message string; no structured codes cross
/// the boundary to the user.
#[derive(Clone, Debug)]
pub enum AppError {
    /// Network/HTTP error.
    Network(String),
    /// The backend rejected an upload.
    Upload(String),
    /// A response body could not be parsed.
    Parse(String),
}

impl AppError {
    /// Underlying description, without the category prefix `Display`
    /// adds. The UI message carries its own "Error: " prefix.
    pub fn detail(&self) -> &str {
        match self {
            AppError::Network(msg) | AppError::Upload(msg) | AppError::Parse(msg) => msg,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Upload(msg) => write!(f, "Upload error: {}", msg),
            AppError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_label_one_decimal() {
        let doc = DocumentSummary {
            id: DocumentId::Number(1),
            filename: "a.pdf".to_string(),
            size: 2048,
            ocr_used: false,
            extracted_text_preview: None,
        };
        assert_eq!(doc.size_label(), "2.0 KB");
        assert_eq!(doc.ocr_label(), "No");
    }

    #[test]
    fn test_document_id_accepts_number_and_string() {
        let from_number: DocumentId = serde_json::from_str("42").unwrap();
        assert_eq!(from_number, DocumentId::Number(42));
        assert_eq!(from_number.to_string(), "42");

        let from_string: DocumentId = serde_json::from_str(r#""doc-42""#).unwrap();
        assert_eq!(from_string, DocumentId::Text("doc-42".to_string()));
        assert_eq!(from_string.to_string(), "doc-42");
    }

    #[test]
    fn test_ui_state_begin_clears_previous_message() {
        let mut ui = UiState {
            uploading: false,
            message: Some("Uploaded: old.pdf. OCR: No".to_string()),
        };
        ui.begin();
        assert!(ui.uploading);
        assert_eq!(ui.message, None);
    }

    #[test]
    fn test_ui_state_finish_success() {
        let mut ui = UiState::default();
        ui.begin();
        let result = Ok(UploadResponse {
            filename: "a.pdf".to_string(),
            ocr_used: true,
        });
        ui.finish(&result);
        assert!(!ui.uploading);
        assert_eq!(ui.message.as_deref(), Some("Uploaded: a.pdf. OCR: Yes"));
    }

    #[test]
    fn test_ui_state_finish_failure_single_error_prefix() {
        let mut ui = UiState::default();
        ui.begin();
        let result: AppResult<UploadResponse> =
            Err(AppError::Upload("server error (500): boom".to_string()));
        ui.finish(&result);
        // uploading is reset on the failure path too
        assert!(!ui.uploading);
        assert_eq!(
            ui.message.as_deref(),
            Some("Error: server error (500): boom")
        );
    }

    #[test]
    fn test_app_error_detail_strips_category() {
        let e = AppError::Network("HTTP request failed: timed out".to_string());
        assert_eq!(e.detail(), "HTTP request failed: timed out");
        assert_eq!(e.to_string(), "Network error: HTTP request failed: timed out");
    }

    #[test]
    fn test_upload_summary_reflects_ocr_flag() {
        let with_ocr = UploadResponse {
            filename: "scan.pdf".to_string(),
            ocr_used: true,
        };
        assert_eq!(with_ocr.summary(), "Uploaded: scan.pdf. OCR: Yes");

        let without_ocr = UploadResponse {
            filename: "report.pdf".to_string(),
            ocr_used: false,
        };
        assert_eq!(without_ocr.summary(), "Uploaded: report.pdf. OCR: No");
    }
}
