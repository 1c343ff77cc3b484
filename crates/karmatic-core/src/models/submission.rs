//! Submission record model

use serde::{Deserialize, Serialize};

use super::attachment::UploadedAttachment;

/// One contact-form submission as inserted into the submissions table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub first_name: String,
    /// Phone number exactly as typed; validation never rewrites it.
    pub phone_number: String,
    pub message: String,
    /// Stored attachments in selection order.
    pub attachments: Vec<UploadedAttachment>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn serializes_with_table_column_names() {
        let record = SubmissionRecord {
            first_name: "Kevin".to_string(),
            phone_number: "403-542-7553".to_string(),
            message: "Need a quote".to_string(),
            attachments: Vec::new(),
        };

        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            serde_json::json!({
                "first_name": "Kevin",
                "phone_number": "403-542-7553",
                "message": "Need a quote",
                "attachments": [],
            })
        );
    }
}
