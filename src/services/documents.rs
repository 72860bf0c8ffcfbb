//! HTTP service for the documents API: list the uploaded documents and
//! upload a new PDF.

use gloo_net::http::Request;
use leptos::{spawn_local, SignalSet, WriteSignal};
use web_sys::{File, FormData};

use crate::config::BACKEND_URL;
use crate::types::{AppError, AppResult, DocumentSummary, DocumentsResponse, UploadResponse};

/// Build the upload endpoint URL with its query parameters.
///
/// `use_ocr` is always present as "true"/"false"; `ocr_api_key` is
/// appended only when the key is non-empty. Keys are the opaque tokens
/// OCR.space hands out, so no percent-encoding is applied.
pub fn upload_url(backend_url: &str, use_ocr: bool, api_key: &str) -> String {
    let mut url = format!("{}/api/documents/upload?use_ocr={}", backend_url, use_ocr);
    if !api_key.is_empty() {
        url.push_str("&ocr_api_key=");
        url.push_str(api_key);
    }
    url
}

/// Fetch the current document list from the backend.
///
/// Returns the items in server order, untouched.
pub async fn fetch_documents(backend_url: &str) -> AppResult<Vec<DocumentSummary>> {
    let url = format!("{}/api/documents", backend_url);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

    if !response.ok() {
        return Err(AppError::Network(format!(
            "server returned status {}",
            response.status()
        )));
    }

    let body = response
        .json::<DocumentsResponse>()
        .await
        .map_err(|e| AppError::Parse(format!("Failed to parse response: {}", e)))?;

    Ok(body.items)
}

/// Upload a PDF to the backend as a multipart form.
///
/// Any non-2xx status is a failure; the response body, when readable,
/// is folded into the error text.
pub async fn upload_document(
    file: &File,
    use_ocr: bool,
    api_key: &str,
    backend_url: &str,
) -> AppResult<UploadResponse> {
    let form_data =
        FormData::new().map_err(|e| AppError::Upload(format!("Failed to create FormData: {:?}", e)))?;
    form_data
        .append_with_blob("file", file)
        .map_err(|e| AppError::Upload(format!("Failed to append file: {:?}", e)))?;

    let url = upload_url(backend_url, use_ocr, api_key);
    let request = Request::post(&url)
        .body(form_data)
        .map_err(|e| AppError::Upload(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

    if !response.ok() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(AppError::Upload(format!(
            "server error ({}): {}",
            response.status(),
            error_text
        )));
    }

    response
        .json::<UploadResponse>()
        .await
        .map_err(|e| AppError::Parse(format!("Failed to parse response: {}", e)))
}

/// Reload the document list into the given signal, fire-and-forget.
///
/// On failure the signal is left untouched so the last successful
/// snapshot stays visible; the error only goes to the console.
pub fn refresh_documents(set_docs: WriteSignal<Vec<DocumentSummary>>) {
    spawn_local(async move {
        match fetch_documents(BACKEND_URL).await {
            Ok(items) => set_docs.set(items),
            Err(e) => log::error!("Failed to load documents: {}", e),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DocumentId;

    #[test]
    fn test_upload_url_with_ocr_and_key() {
        let url = upload_url("http://localhost:8000", true, "abc");
        assert_eq!(
            url,
            "http://localhost:8000/api/documents/upload?use_ocr=true&ocr_api_key=abc"
        );
    }

    #[test]
    fn test_upload_url_without_key() {
        let url = upload_url("", false, "");
        assert_eq!(url, "/api/documents/upload?use_ocr=false");
        assert!(!url.contains("ocr_api_key"));
    }

    #[test]
    fn test_list_deserialization_preserves_order() {
        let json = r#"{
            "items": [
                {"id": 2, "filename": "b.pdf", "size": 512, "ocr_used": true,
                 "extracted_text_preview": "Scanned text"},
                {"id": 1, "filename": "a.pdf", "size": 2048, "ocr_used": false}
            ]
        }"#;

        let response: DocumentsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.items.len(), 2);
        assert_eq!(response.items[0].id, DocumentId::Number(2));
        assert_eq!(response.items[0].filename, "b.pdf");
        assert_eq!(
            response.items[0].extracted_text_preview.as_deref(),
            Some("Scanned text")
        );
        assert_eq!(response.items[1].filename, "a.pdf");
        assert_eq!(response.items[1].size_label(), "2.0 KB");
        assert_eq!(response.items[1].extracted_text_preview, None);
    }

    #[test]
    fn test_list_deserialization_missing_items() {
        let response: DocumentsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.items.is_empty());
    }

    #[test]
    fn test_upload_response_deserialization() {
        let json = r#"{"id": "7f3a", "filename": "invoice.pdf", "ocr_used": true, "size": 4096}"#;
        let response: UploadResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.filename, "invoice.pdf");
        assert!(response.ocr_used);
        assert_eq!(response.summary(), "Uploaded: invoice.pdf. OCR: Yes");
    }
}
