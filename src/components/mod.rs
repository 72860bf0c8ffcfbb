//! UI Components for the pdfdrop application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - PDF upload form with OCR options
//! - [`DocumentsSection`] - List of previously uploaded documents

mod hero;
mod upload;
mod documents;
mod footer;

pub use hero::*;
pub use upload::*;
pub use documents::*;
pub use footer::*;
