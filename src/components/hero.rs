//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"PDF Upload with Text Extraction / OCR"</h1>
            <p class="subtitle">
                "Upload a PDF. We extract text automatically. "
                "If needed, you can enable OCR via the OCR.space API."
            </p>
        </div>
    }
}
