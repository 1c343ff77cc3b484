//! Uploaded attachment model

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A stored attachment as referenced from a submission record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedAttachment {
    /// Publicly resolvable URL of the stored object.
    pub url: String,
    /// Original file name as selected by the visitor.
    pub name: String,
    /// Content MIME type.
    #[serde(rename = "type")]
    pub mime_type: String,
}

impl UploadedAttachment {
    /// Create a new uploaded attachment reference.
    pub fn new(
        url: impl Into<String>,
        name: impl Into<String>,
        mime_type: impl Into<String>,
    ) -> Result<Self> {
        let url = url.into().trim().to_string();
        let name = name.into();
        let mime_type = mime_type.into().trim().to_string();

        if url.is_empty() {
            return Err(Error::InvalidInput(
                "Uploaded attachment url cannot be empty".to_string(),
            ));
        }
        if name.trim().is_empty() {
            return Err(Error::InvalidInput(
                "Uploaded attachment name cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            url,
            name,
            mime_type,
        })
    }
}
