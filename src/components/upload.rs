//! PDF upload form component.
//!
//! Handles file selection, the OCR options, upload to the backend, and
//! the success/error message for the last attempt.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, File, HtmlInputElement, SubmitEvent};

use crate::config::BACKEND_URL;
use crate::services::{refresh_documents, upload_document};
use crate::types::{DocumentSummary, UiState};

/// Gate a submit attempt: hand back the file to upload only when one is
/// selected and no upload is already in flight. The no-file case is a
/// silent no-op, not an error.
fn accept_submission<T>(file: Option<T>, uploading: bool) -> Option<T> {
    if uploading {
        None
    } else {
        file
    }
}

#[component]
pub fn UploadSection(set_docs: WriteSignal<Vec<DocumentSummary>>) -> impl IntoView {
    let (file, set_file) = create_signal(None::<File>);
    let (use_ocr, set_use_ocr) = create_signal(false);
    let (api_key, set_api_key) = create_signal(String::new());
    let (ui, set_ui) = create_signal(UiState::default());

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let selected = input.files().and_then(|files| files.get(0));
        set_file.set(selected);
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        // The disabled button covers both cases in the DOM; the gate
        // holds even if that is bypassed.
        let Some(selected) =
            accept_submission(file.get_untracked(), ui.get_untracked().uploading)
        else {
            return;
        };

        let use_ocr = use_ocr.get_untracked();
        let api_key = api_key.get_untracked();

        spawn_local(async move {
            set_ui.update(|ui| ui.begin());

            let result = upload_document(&selected, use_ocr, &api_key, BACKEND_URL).await;
            match &result {
                Ok(response) => {
                    log::info!("Upload complete: {}", response.filename);
                    set_file.set(None);
                    clear_file_input();
                    // Fire-and-forget list reload, not awaited here.
                    refresh_documents(set_docs);
                }
                Err(e) => log::error!("Upload failed: {}", e),
            }

            // Single cleanup step for every exit path.
            set_ui.update(|ui| ui.finish(&result));
        });
    };

    view! {
        <div class="upload-card">
            <form class="upload-form" on:submit=on_submit>
                <input
                    type="file"
                    id="fileInput"
                    accept="application/pdf"
                    on:change=on_file_change
                />

                <div class="upload-options">
                    <label class="ocr-toggle">
                        <input
                            type="checkbox"
                            prop:checked=use_ocr
                            on:change=move |ev| set_use_ocr.set(event_target_checked(&ev))
                        />
                        <span>" Force OCR"</span>
                    </label>
                    <input
                        type="password"
                        class="api-key-input"
                        placeholder="OCR.space API Key (optional)"
                        prop:value=api_key
                        on:input=move |ev| set_api_key.set(event_target_value(&ev))
                    />
                </div>

                <button
                    type="submit"
                    class="upload-button"
                    disabled=move || file.get().is_none() || ui.get().uploading
                >
                    {move || if ui.get().uploading { "Uploading..." } else { "Upload PDF" }}
                </button>
            </form>

            <Show
                when=move || ui.get().message.is_some()
                fallback=|| view! { }
            >
                <p class="status-message">
                    {move || ui.get().message.unwrap_or_default()}
                </p>
            </Show>
        </div>
    }
}

/// Reset the native file input's displayed value after a successful
/// upload; the signal alone does not clear the widget.
fn clear_file_input() {
    if let Some(element) = gloo_utils::document().get_element_by_id("fileInput") {
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.set_value("");
        }
    }
}
