//! Contact form submission pipeline.
//!
//! Validation runs before any network call. Attachments are then uploaded one
//! at a time in selection order, and the submission record is inserted only
//! after every upload succeeded. Any failure ends the attempt; nothing is
//! retried and objects stored earlier in a failed attempt are left in place.

use thiserror::Error;
use uuid::Uuid;

use crate::attachments::{AttachmentPicker, ObjectUrls, SelectedFile};
use crate::backend::{ObjectUpload, StoreOptions, SubmissionBackend};
use crate::config::{SiteConfig, DEFAULT_ATTACHMENTS_BUCKET, DEFAULT_SUBMISSIONS_TABLE};
use crate::error::Error;
use crate::form::{FormFields, FormState, RevertTicket, FAILURE_MESSAGE, SUCCESS_MESSAGE};
use crate::models::{SubmissionRecord, UploadedAttachment};
use crate::phone::{validate_phone_number, PhoneRejection};
use crate::util::{sanitize_token, unix_timestamp_millis};

const KEY_SUFFIX_LEN: usize = 12;

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Validation(#[from] PhoneRejection),

    #[error("failed to upload attachment {name:?}: {source}")]
    Upload {
        name: String,
        /// Keys stored earlier in this attempt.
        orphaned_keys: Vec<String>,
        #[source]
        source: Error,
    },

    #[error("failed to insert submission: {source}")]
    Insert {
        orphaned_keys: Vec<String>,
        #[source]
        source: Error,
    },

    #[error("contact form backend is not configured")]
    Unavailable,
}

impl SubmissionError {
    /// Text shown in the form banner.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(rejection) => rejection.to_string(),
            Self::Upload { .. } | Self::Insert { .. } | Self::Unavailable => {
                FAILURE_MESSAGE.to_string()
            }
        }
    }

    /// Outcome for a submit attempt made without a configured backend.
    ///
    /// The phone number is still validated so the visitor sees the same
    /// rejection they would with a backend.
    pub fn without_backend(fields: &FormFields) -> Self {
        match validate_phone_number(&fields.phone_number) {
            Err(rejection) => Self::Validation(rejection),
            Ok(_) => Self::Unavailable,
        }
    }

    pub fn orphaned_keys(&self) -> &[String] {
        match self {
            Self::Validation(_) | Self::Unavailable => &[],
            Self::Upload { orphaned_keys, .. } | Self::Insert { orphaned_keys, .. } => {
                orphaned_keys
            }
        }
    }
}

/// Where attachments and records are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionTarget {
    pub bucket: String,
    pub table: String,
    pub store_options: StoreOptions,
}

impl Default for SubmissionTarget {
    fn default() -> Self {
        Self {
            bucket: DEFAULT_ATTACHMENTS_BUCKET.to_string(),
            table: DEFAULT_SUBMISSIONS_TABLE.to_string(),
            store_options: StoreOptions::default(),
        }
    }
}

impl SubmissionTarget {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            bucket: config.attachments_bucket.clone(),
            table: config.submissions_table.clone(),
            store_options: StoreOptions::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SubmissionPipeline<B> {
    backend: B,
    target: SubmissionTarget,
}

impl<B: SubmissionBackend> SubmissionPipeline<B> {
    pub const fn new(backend: B, target: SubmissionTarget) -> Self {
        Self { backend, target }
    }

    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Validate, upload attachments, and insert the submission record.
    pub async fn submit(
        &self,
        fields: &FormFields,
        files: &[SelectedFile],
    ) -> Result<SubmissionRecord, SubmissionError> {
        validate_phone_number(&fields.phone_number)?;

        tracing::info!(attachments = files.len(), "Submitting contact form");

        let mut stored_keys = Vec::with_capacity(files.len());
        let mut attachments = Vec::with_capacity(files.len());

        for file in files {
            let key = generate_storage_key(file);
            let upload = ObjectUpload {
                bucket: &self.target.bucket,
                key: &key,
                content_type: &file.mime_type,
                bytes: file.bytes.clone(),
            };

            tracing::debug!(%key, name = %file.name, size = file.size_bytes(), "Uploading attachment");
            if let Err(source) = self
                .backend
                .store_object(upload, self.target.store_options)
                .await
            {
                return Err(SubmissionError::Upload {
                    name: file.name.clone(),
                    orphaned_keys: stored_keys,
                    source,
                });
            }

            let url = self.backend.public_url(&self.target.bucket, &key);
            stored_keys.push(key);
            match UploadedAttachment::new(url, file.name.clone(), file.mime_type.clone()) {
                Ok(attachment) => attachments.push(attachment),
                Err(source) => {
                    return Err(SubmissionError::Upload {
                        name: file.name.clone(),
                        orphaned_keys: stored_keys,
                        source,
                    });
                }
            }
        }

        let record = SubmissionRecord {
            first_name: fields.first_name.clone(),
            phone_number: fields.phone_number.clone(),
            message: fields.message.clone(),
            attachments,
        };

        if let Err(source) = self
            .backend
            .insert_record(&self.target.table, &record)
            .await
        {
            return Err(SubmissionError::Insert {
                orphaned_keys: stored_keys,
                source,
            });
        }

        tracing::info!(
            attachments = record.attachments.len(),
            "Contact form submission stored"
        );
        Ok(record)
    }
}

/// Apply a finished submission to the form state.
///
/// On success the fields and attachments are cleared. Returns the ticket for
/// the banner's auto-revert.
pub fn apply_outcome(
    form: &mut FormState,
    fields: &mut FormFields,
    picker: &mut AttachmentPicker,
    urls: &mut impl ObjectUrls,
    outcome: &Result<SubmissionRecord, SubmissionError>,
) -> RevertTicket {
    match outcome {
        Ok(_) => {
            fields.clear();
            picker.clear(urls);
            form.succeed(SUCCESS_MESSAGE)
        }
        Err(error) => {
            match error {
                SubmissionError::Validation(rejection) => {
                    tracing::warn!("Contact form rejected: {}", rejection);
                }
                SubmissionError::Unavailable => {
                    tracing::error!("Error submitting form: {}", error);
                }
                SubmissionError::Upload { .. } | SubmissionError::Insert { .. } => {
                    tracing::error!("Error submitting form: {}", error);
                    if !error.orphaned_keys().is_empty() {
                        tracing::warn!(
                            keys = ?error.orphaned_keys(),
                            "Attachments stored before the failure were left in place"
                        );
                    }
                }
            }
            form.fail(error.user_message())
        }
    }
}

/// Generate a collision-resistant storage key for an attachment.
pub fn generate_storage_key(file: &SelectedFile) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    build_storage_key(&file.name, unix_timestamp_millis(), &suffix[..KEY_SUFFIX_LEN])
}

/// `{timestamp_ms}-{suffix}.{ext}`, where `ext` is the text after the file
/// name's last dot, or the whole name when it has none. Case is kept.
pub fn build_storage_key(file_name: &str, timestamp_ms: i64, suffix: &str) -> String {
    let ext = file_name
        .trim()
        .rsplit('.')
        .next()
        .map(sanitize_token)
        .unwrap_or_default();

    if ext.is_empty() {
        format!("{timestamp_ms}-{suffix}")
    } else {
        format!("{timestamp_ms}-{suffix}.{ext}")
    }
}
