//! Data models for the contact form

mod attachment;
mod submission;

pub use attachment::UploadedAttachment;
pub use submission::SubmissionRecord;
