//! Backend services.
//!
//! This module provides services for external communication:
//!
//! # Services
//!
//! - [`documents`] - Document listing and PDF upload against the backend API

pub mod documents;

pub use documents::*;
