//! pdfdrop - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading PDF files and browsing the
//! extracted text of previously uploaded documents.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadSection (form, OCR options, status message)      │
//! │  └── DocumentsSection (list, download links, previews)      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (DocumentSummary, UploadResponse, etc.)
//! - [`components`] - UI components (Hero, Upload, Documents, Footer)
//! - [`services`] - Backend communication (document list, upload)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Documents
    DocumentId, DocumentSummary,
    // API
    DocumentsResponse, UploadResponse,
    // UI state
    UiState,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 pdfdrop - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Router>
            <Title text=APP_NAME/>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // The document list is the only state shared between components;
    // the upload form owns its draft and status locally.
    let (docs, set_docs) = create_signal(Vec::<DocumentSummary>::new());

    // Initial list load, fire-and-forget.
    refresh_documents(set_docs);

    view! {
        <div class="container">
            <Hero/>
            <UploadSection set_docs=set_docs/>
            <DocumentsSection docs=docs/>
        </div>

        <Footer/>
    }
}
