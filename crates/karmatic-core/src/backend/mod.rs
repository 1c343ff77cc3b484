//! Storage and database capabilities consumed by the submission pipeline.
//!
//! The pipeline only needs three operations from the hosted backend, so it is
//! written against [`SubmissionBackend`] and the concrete client is injected.
//! [`SupabaseClient`] talks to Supabase Storage and PostgREST over HTTP.

mod supabase;
#[cfg(test)]
pub(crate) mod testing;

use bytes::Bytes;

use crate::error::Result;
use crate::models::SubmissionRecord;

pub use supabase::SupabaseClient;

/// Default `Cache-Control` max-age for uploaded attachments.
pub const DEFAULT_CACHE_CONTROL_SECS: u32 = 3600;

/// Options applied when storing an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreOptions {
    pub cache_control_secs: u32,
    /// Overwrite an existing object with the same key.
    pub upsert: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            cache_control_secs: DEFAULT_CACHE_CONTROL_SECS,
            upsert: false,
        }
    }
}

/// Object payload handed to [`SubmissionBackend::store_object`].
#[derive(Debug, Clone)]
pub struct ObjectUpload<'a> {
    pub bucket: &'a str,
    pub key: &'a str,
    pub content_type: &'a str,
    pub bytes: Bytes,
}

/// Hosted storage + database operations.
///
/// Futures are not required to be `Send`: in the browser every call runs on
/// the single UI event loop.
#[allow(async_fn_in_trait)]
pub trait SubmissionBackend {
    /// Store an object. Must fail rather than overwrite when `upsert` is off.
    async fn store_object(&self, upload: ObjectUpload<'_>, options: StoreOptions) -> Result<()>;

    /// Public URL of a stored object. Derived locally, never fails.
    fn public_url(&self, bucket: &str, key: &str) -> String;

    /// Insert one submission record.
    async fn insert_record(&self, table: &str, record: &SubmissionRecord) -> Result<()>;
}
