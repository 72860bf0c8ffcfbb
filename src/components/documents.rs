//! Document list component.
//!
//! Renders the last successfully fetched snapshot of uploaded
//! documents, each with a download link and an optional extracted-text
//! preview.

use leptos::*;

use crate::config::BACKEND_URL;
use crate::types::DocumentSummary;

#[component]
pub fn DocumentsSection(docs: ReadSignal<Vec<DocumentSummary>>) -> impl IntoView {
    view! {
        <div class="documents-section">
            <h2>"Recent Documents"</h2>

            <ul class="document-list">
                <For
                    each=move || docs.get()
                    key=|doc| doc.id.clone()
                    children=move |doc| {
                        let download_href =
                            format!("{}/api/documents/{}/download", BACKEND_URL, doc.id);
                        view! {
                            <li class="document-item">
                                <div class="document-row">
                                    <div>
                                        <p class="document-name">{doc.filename.clone()}</p>
                                        <p class="document-meta">
                                            {doc.size_label()} " • OCR: " {doc.ocr_label()}
                                        </p>
                                    </div>
                                    <a href=download_href class="download-link">"Download"</a>
                                </div>
                                {doc.extracted_text_preview.clone().map(|preview| view! {
                                    <pre class="preview-text">{preview}</pre>
                                })}
                            </li>
                        }
                    }
                />
            </ul>

            <Show
                when=move || docs.get().is_empty()
                fallback=|| view! { }
            >
                <p class="empty-state">"No documents yet."</p>
            </Show>
        </div>
    }
}
