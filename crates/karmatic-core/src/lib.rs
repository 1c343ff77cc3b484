//! karmatic-core - Core library for the Karmatic Painting site
//!
//! This crate contains the contact-form pipeline, phone validation, attachment
//! handling, and the presentation state machines (carousel, scroll spy) used by
//! the web front end. Nothing in here depends on a browser, so all of it is
//! unit-tested natively.

pub mod attachments;
pub mod backend;
pub mod carousel;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod phone;
pub mod scroll_spy;
pub mod submission;
pub mod util;

pub use error::{Error, Result};
pub use models::{SubmissionRecord, UploadedAttachment};
