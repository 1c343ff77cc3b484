//! In-memory backend that records calls, for pipeline tests.

use std::cell::RefCell;

use super::{ObjectUpload, StoreOptions, SubmissionBackend};
use crate::error::{Error, Result};
use crate::models::SubmissionRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BackendCall {
    Store {
        bucket: String,
        key: String,
        content_type: String,
        size: usize,
        options: StoreOptions,
    },
    Insert {
        table: String,
        record: SubmissionRecord,
    },
}

#[derive(Debug, Default)]
pub(crate) struct RecordingBackend {
    pub calls: RefCell<Vec<BackendCall>>,
    /// Zero-based index of the store call that fails.
    pub fail_store_at: Option<usize>,
    pub fail_insert: bool,
}

impl RecordingBackend {
    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.borrow().clone()
    }

    pub fn store_calls(&self) -> Vec<BackendCall> {
        self.calls()
            .into_iter()
            .filter(|call| matches!(call, BackendCall::Store { .. }))
            .collect()
    }

    pub fn inserted_records(&self) -> Vec<SubmissionRecord> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                BackendCall::Insert { record, .. } => Some(record),
                BackendCall::Store { .. } => None,
            })
            .collect()
    }
}

impl SubmissionBackend for RecordingBackend {
    async fn store_object(&self, upload: ObjectUpload<'_>, options: StoreOptions) -> Result<()> {
        let index = self.store_calls().len();
        self.calls.borrow_mut().push(BackendCall::Store {
            bucket: upload.bucket.to_string(),
            key: upload.key.to_string(),
            content_type: upload.content_type.to_string(),
            size: upload.bytes.len(),
            options,
        });

        if self.fail_store_at == Some(index) {
            return Err(Error::Storage(format!(
                "upload of {}/{} failed: bucket unavailable (503)",
                upload.bucket, upload.key
            )));
        }
        Ok(())
    }

    fn public_url(&self, bucket: &str, key: &str) -> String {
        format!("https://storage.test/public/{bucket}/{key}")
    }

    async fn insert_record(&self, table: &str, record: &SubmissionRecord) -> Result<()> {
        self.calls.borrow_mut().push(BackendCall::Insert {
            table: table.to_string(),
            record: record.clone(),
        });

        if self.fail_insert {
            return Err(Error::Database(format!(
                "insert into {table} failed: permission denied (401)"
            )));
        }
        Ok(())
    }
}
